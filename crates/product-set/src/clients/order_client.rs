use crate::model::{Order, OrderCreate, OrderId, OrderLine};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use catalog_actor::{CatalogClient, EntityClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
///
/// Set items processing happens inside the store (`Order::on_create` and the
/// `ProcessSetItems` action), so callers never see a half-refreshed order.
#[derive(Clone)]
pub struct OrderClient {
    inner: CatalogClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CatalogClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(customer_id = %params.customer_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to store");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Appends `line`; returns the new line count.
    #[instrument(skip(self, line), fields(title = %line.title))]
    pub async fn add_line(&self, id: OrderId, line: OrderLine) -> Result<usize, OrderError> {
        match self.action(id, OrderAction::AddLine(line)).await? {
            OrderActionResult::AddLine(count) => Ok(count),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Refreshes the set items of every product set line; returns how many were refreshed.
    #[instrument(skip(self))]
    pub async fn process_set_items(&self, id: OrderId) -> Result<usize, OrderError> {
        match self.action(id, OrderAction::ProcessSetItems).await? {
            OrderActionResult::ProcessSetItems(count) => Ok(count),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn action(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    fn unexpected(result: OrderActionResult) -> OrderError {
        OrderError::ActorCommunicationError(format!("unexpected action result {result:?}"))
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CatalogClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> OrderError {
        if let Some(inner) = e.entity_error::<OrderError>() {
            return inner.clone();
        }
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_actor::mock::{create_mock_client, expect_action, MockCatalog};

    #[tokio::test]
    async fn test_process_set_items_returns_count() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(client);

        let task = tokio::spawn(async move { client.process_set_items(OrderId(4)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(4));
        assert!(matches!(action, OrderAction::ProcessSetItems));
        responder
            .send(Ok(OrderActionResult::ProcessSetItems(2)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let mut mock = MockCatalog::<Order>::new();
        mock.expect_action(OrderId(1))
            .return_ok(OrderActionResult::AddLine(1));
        let client = OrderClient::new(mock.client());

        let err = client.process_set_items(OrderId(1)).await.unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));
    }

    #[tokio::test]
    async fn test_missing_order() {
        let mut mock = MockCatalog::<Order>::new();
        mock.expect_action(OrderId(9))
            .return_err(StoreError::NotFound(OrderId(9).to_string()));
        let client = OrderClient::new(mock.client());

        assert_eq!(
            client.process_set_items(OrderId(9)).await.unwrap_err(),
            OrderError::NotFound("order_9".into())
        );
    }
}
