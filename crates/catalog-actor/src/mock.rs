//! # Mock Stores
//!
//! `MockCatalog<T>` hands out a real [`CatalogClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running store. Use it to test code that talks to a
//! store (clients, composition, order processing) without spawning the store itself, and to
//! inject failures that are awkward to provoke with a real store.
//!
//! ## Mock vs real store
//!
//! | | MockCatalog | CatalogActor |
//! |---|---|---|
//! | **State** | none, answers are scripted | real entity map |
//! | **Ordering** | expectations are consumed in order | n/a |
//! | **Errors** | `return_err` with any [`StoreError`] | only what the entity produces |
//!
//! ## Example
//!
//! ```rust
//! use catalog_actor::mock::MockCatalog;
//! use catalog_actor::{CatalogEntity, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Part { id: u32 }
//! #[derive(Debug)] struct PartCreate;
//! #[derive(Debug)] struct PartUpdate;
//! #[derive(Debug)] enum PartAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct PartError;
//!
//! #[async_trait]
//! impl CatalogEntity for Part {
//!     type Id = u32; type Create = PartCreate; type Update = PartUpdate;
//!     type Action = PartAction; type ActionResult = (); type Context = (); type Error = PartError;
//!     fn from_create_params(id: u32, _: PartCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: PartUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: PartAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCatalog::<Part>::new();
//!     mock.expect_sku_exists("P-1").return_ok(true);
//!     mock.expect_get(7).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.sku_exists("P-1", None).await.unwrap());
//!     assert!(matches!(client.get(7).await, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::CatalogClient;
use crate::entity::CatalogEntity;
use crate::error::StoreError;
use crate::message::CatalogRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted answer to one request.
enum Expectation<T: CatalogEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
    SkuExists {
        sku: String,
        response: Result<bool, StoreError>,
    },
}

impl<T: CatalogEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("Get({id})"),
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::Update { id, .. } => format!("Update({id})"),
            Expectation::Action { id, .. } => format!("Action({id})"),
            Expectation::SkuExists { sku, .. } => format!("SkuExists({sku})"),
        }
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store that answers requests from queued expectations.
///
/// Requests must arrive in the order the expectations were queued and must match the
/// expected ID / SKU; anything else panics the background task, which surfaces in the test
/// as an `ActorDropped` error on the client side and a failed `verify()`.
pub struct MockCatalog<T: CatalogEntity> {
    client: CatalogClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CatalogEntity> Default for MockCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> MockCatalog<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CatalogRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (CatalogRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::SkuExists { sku, respond_to, .. },
                        Some(Expectation::SkuExists { sku: expected, response }),
                    ) if sku == expected => {
                        let _ = respond_to.send(response);
                    }
                    (_, expectation) => {
                        panic!(
                            "Unexpected request; next expectation was {}",
                            expectation
                                .map(|e| e.describe())
                                .unwrap_or_else(|| "none".to_string())
                        );
                    }
                }
            }
        });

        Self {
            client: CatalogClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CatalogClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder::new(self, |response| Expectation::Create { response })
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::Update { id, response })
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder::new(self, move |response| Expectation::Action { id, response })
    }

    /// Expects a SKU index query for `sku`.
    pub fn expect_sku_exists(&mut self, sku: impl Into<String>) -> ExpectationBuilder<'_, T, bool> {
        let sku = sku.into();
        ExpectationBuilder::new(self, move |response| Expectation::SkuExists { sku, response })
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            let pending: Vec<String> = remaining.iter().map(|e| e.describe()).collect();
            panic!("Not all expectations were met: {}", pending.join(", "));
        }
    }
}

/// Finishes an expectation with either a successful or a failed response.
pub struct ExpectationBuilder<'a, T: CatalogEntity, R> {
    mock: &'a MockCatalog<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + 'a>,
}

impl<'a, T: CatalogEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(
        mock: &'a MockCatalog<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Answer the request with `value`.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: StoreError) {
        self.mock.push((self.build)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client plus the receiving end of its channel, for tests that want to
/// inspect each request and answer it by hand.
pub fn create_mock_client<T: CatalogEntity>(
    buffer_size: usize,
) -> (CatalogClient<T>, mpsc::Receiver<CatalogRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Returns the next request if it is a `Get`.
pub async fn expect_get<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(T::Id, crate::Response<Option<T>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an `Action`.
pub async fn expect_action<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(T::Id, T::Action, crate::Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `SkuExists` query.
pub async fn expect_sku_exists<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<CatalogRequest<T>>,
) -> Option<(String, Option<T::Id>, crate::Response<bool>)> {
    match receiver.recv().await {
        Some(CatalogRequest::SkuExists {
            sku,
            exclude,
            respond_to,
        }) => Some((sku, exclude, respond_to)),
        _ => None,
    }
}
