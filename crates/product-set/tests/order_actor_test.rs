use catalog_actor::mock::MockCatalog;
use catalog_actor::{EntityClient, StoreError};
use product_set::clients::{ProductSetClient, VariationClient};
use product_set::model::{
    ConfiguredItem, OrderCreate, OrderLine, Price, ProductSet, ProductSetId, PurchasedEntity,
    StoreId, UserId, Variation, VariationId,
};
use product_set::order_actor::{OrderContext, OrderError};
use product_set::set_item::SetItem;
use rust_decimal::Decimal;

fn pot() -> Variation {
    Variation::new(VariationId(1), "POT", "Pot", Price::parse("25.00", "EUR").unwrap())
}

fn cookware(items: Vec<ConfiguredItem>) -> ProductSet {
    ProductSet {
        id: ProductSetId(1),
        set_type: "default".into(),
        title: "Cookware".into(),
        sku: "COOKWARE".into(),
        price: Price::parse("60.00", "EUR").unwrap(),
        owner_id: UserId(1),
        published: true,
        store_ids: vec![StoreId(1)],
        items,
    }
}

fn set_line(set: &ProductSet, snapshot: Vec<SetItem>) -> OrderLine {
    OrderLine::from_purchasable(
        PurchasedEntity::ProductSet(set.id),
        set,
        "product_set",
        Decimal::ONE,
    )
    .with_set_items(snapshot)
}

/// Real Order store with mocked Product Set and Variation stores.
/// Order creation must re-compose the set line from the set's current configuration.
#[tokio::test]
async fn test_create_order_refreshes_set_items() {
    let mut set_mock = MockCatalog::<ProductSet>::new();
    let mut variation_mock = MockCatalog::<Variation>::new();

    let current = cookware(vec![ConfiguredItem::new(VariationId(1), Decimal::TWO).unwrap()]);
    set_mock
        .expect_get(ProductSetId(1))
        .return_ok(Some(current.clone()));
    variation_mock.expect_get(VariationId(1)).return_ok(Some(pot()));

    let context = OrderContext {
        product_sets: ProductSetClient::new(set_mock.client()),
        variations: VariationClient::new(variation_mock.client()),
    };
    let (order_actor, order_client) = product_set::order_actor::new(10);
    let actor_handle = tokio::spawn(order_actor.run(context));

    // The cart snapshot predates the pot being added to the set.
    let order_id = order_client
        .create_order(OrderCreate {
            customer_id: UserId(5),
            store_id: StoreId(1),
            lines: vec![set_line(&current, Vec::new())],
        })
        .await
        .unwrap();

    let order = order_client.get(order_id).await.unwrap().unwrap();
    let items = order.lines[0].set_items.as_ref().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].sku(), "POT");
    assert_eq!(items[0].quantity(), Decimal::TWO);
    assert_eq!(items[0].unit_price(), Some(&pot().price));

    set_mock.verify();
    variation_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_process_keeps_snapshot_of_deleted_set() {
    let mut set_mock = MockCatalog::<ProductSet>::new();
    let variation_mock = MockCatalog::<Variation>::new();
    set_mock.expect_get(ProductSetId(1)).return_ok(None);

    let context = OrderContext {
        product_sets: ProductSetClient::new(set_mock.client()),
        variations: VariationClient::new(variation_mock.client()),
    };
    let (order_actor, order_client) = product_set::order_actor::new(10);
    tokio::spawn(order_actor.run(context));

    // No lines yet, so creation asks no store.
    let order_id = order_client
        .create_order(OrderCreate {
            customer_id: UserId(5),
            store_id: StoreId(1),
            lines: Vec::new(),
        })
        .await
        .unwrap();

    let snapshot = vec![SetItem::new(VariationId(1), Decimal::ONE).unwrap()];
    let line = set_line(&cookware(Vec::new()), snapshot.clone());
    assert_eq!(order_client.add_line(order_id, line).await.unwrap(), 1);

    assert_eq!(order_client.process_set_items(order_id).await.unwrap(), 0);
    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.lines[0].set_items, Some(snapshot));

    set_mock.verify();
    variation_mock.verify();
}

#[tokio::test]
async fn test_failing_set_store_rejects_order() {
    let mut set_mock = MockCatalog::<ProductSet>::new();
    let variation_mock = MockCatalog::<Variation>::new();
    set_mock
        .expect_get(ProductSetId(1))
        .return_err(StoreError::ActorClosed);

    let context = OrderContext {
        product_sets: ProductSetClient::new(set_mock.client()),
        variations: VariationClient::new(variation_mock.client()),
    };
    let (order_actor, order_client) = product_set::order_actor::new(10);
    tokio::spawn(order_actor.run(context));

    let err = order_client
        .create_order(OrderCreate {
            customer_id: UserId(5),
            store_id: StoreId(1),
            lines: vec![set_line(&cookware(Vec::new()), Vec::new())],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ActorCommunicationError(_)));

    let mut zero = set_line(&cookware(Vec::new()), Vec::new());
    zero.quantity = Decimal::ZERO;
    let err = order_client
        .create_order(OrderCreate {
            customer_id: UserId(5),
            store_id: StoreId(1),
            lines: vec![zero],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));
}

#[tokio::test]
async fn test_failed_process_leaves_every_line_unchanged() {
    let mut set_mock = MockCatalog::<ProductSet>::new();
    let mut variation_mock = MockCatalog::<Variation>::new();

    let cookware_now = cookware(vec![ConfiguredItem::new(VariationId(1), Decimal::TWO).unwrap()]);
    let cutlery = ProductSet {
        id: ProductSetId(2),
        sku: "CUTLERY".into(),
        ..cookware(Vec::new())
    };
    // The first line resolves, the second lookup fails.
    set_mock
        .expect_get(ProductSetId(1))
        .return_ok(Some(cookware_now.clone()));
    variation_mock.expect_get(VariationId(1)).return_ok(Some(pot()));
    set_mock
        .expect_get(ProductSetId(2))
        .return_err(StoreError::ActorClosed);

    let context = OrderContext {
        product_sets: ProductSetClient::new(set_mock.client()),
        variations: VariationClient::new(variation_mock.client()),
    };
    let (order_actor, order_client) = product_set::order_actor::new(10);
    tokio::spawn(order_actor.run(context));

    let order_id = order_client
        .create_order(OrderCreate {
            customer_id: UserId(5),
            store_id: StoreId(1),
            lines: Vec::new(),
        })
        .await
        .unwrap();
    let stale = vec![SetItem::new(VariationId(9), Decimal::ONE).unwrap()];
    order_client
        .add_line(order_id, set_line(&cookware_now, stale.clone()))
        .await
        .unwrap();
    order_client
        .add_line(order_id, set_line(&cutlery, stale.clone()))
        .await
        .unwrap();

    assert!(order_client.process_set_items(order_id).await.is_err());

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.lines[0].set_items, Some(stale.clone()));
    assert_eq!(order.lines[1].set_items, Some(stale));

    set_mock.verify();
    variation_mock.verify();
}
