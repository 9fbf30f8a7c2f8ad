//! End-to-end order flow over the in-memory catalog:
//! checkout assembly, pricing, and the full status lifecycle.

use order_engine::catalog::{CatalogLookup, MemoryCatalog};
use order_engine::orders::{DEFAULT_ESTIMATED_TIME_MIN, apply_order_update, build_order};
use shared::error::ErrorCode;
use shared::models::{
    DeliveryType, Flavor, OrderCreate, OrderCustomer, OrderLineRequest, OrderUpdate, Pizza, Ref,
    Size, SizeName, StatusName, Topping,
};

fn seeded_catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::with_status_vocabulary();

    catalog.insert_size(
        "size:personal",
        Size {
            id: None,
            name: SizeName::Personal,
            price: 2.0,
        },
    );
    catalog.insert_size(
        "size:large",
        Size {
            id: None,
            name: SizeName::Large,
            price: 6.0,
        },
    );
    catalog.insert_topping(
        "topping:olives",
        Topping {
            id: None,
            name: "Olives".into(),
            price: 1.25,
        },
    );
    catalog.insert_topping(
        "topping:mushrooms",
        Topping {
            id: None,
            name: "Mushrooms".into(),
            price: 1.75,
        },
    );
    catalog.insert_pizza(
        "pizza:margherita-large",
        Pizza {
            id: None,
            flavor: Flavor {
                id: Some("flavor:margherita".into()),
                name: "Margherita".into(),
                description: "Tomato, mozzarella, basil".into(),
                price: 7.0,
            },
            size: Size {
                id: Some("size:large".into()),
                name: SizeName::Large,
                price: 6.0,
            },
            image: None,
        },
    );
    catalog
}

fn customer() -> OrderCustomer {
    OrderCustomer {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        address: "1 Main St".into(),
        phone: "555-0100".into(),
        email: "jane@example.com".into(),
    }
}

fn checkout() -> OrderCreate {
    OrderCreate {
        items: vec![
            OrderLineRequest {
                pizza: Ref::new("pizza:margherita-large"),
                size: Ref::new("size:large"),
                toppings: vec![Ref::new("topping:olives"), Ref::new("topping:mushrooms")],
                quantity: 2,
            },
            OrderLineRequest {
                pizza: Ref::new("pizza:margherita-large"),
                size: Ref::new("size:personal"),
                toppings: vec![],
                quantity: 1,
            },
        ],
        delivery_type: DeliveryType::Delivery,
        notes: Some("ring twice".into()),
    }
}

#[tokio::test]
async fn checkout_produces_a_priced_pending_order() {
    let catalog = seeded_catalog();
    let order = build_order(&catalog, &customer(), &checkout()).await.unwrap();

    assert!(order.code.starts_with("ORD-JD-"));
    assert_eq!(order.status, StatusName::Pending);
    assert_eq!(order.status_history.len(), 1);
    assert_eq!(order.status_history[0].name, StatusName::Pending);
    assert_eq!(order.delivery.estimated_time_min, DEFAULT_ESTIMATED_TIME_MIN);

    // line 1: (7.0 + 6.0 + 3.0 extras) * 2; line 2: (7.0 + 2.0) * 1
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].extras_total, 3.0);
    assert_eq!(order.items[0].line_total, 32.0);
    assert_eq!(order.items[1].line_total, 9.0);
    assert_eq!(order.total, 41.0);

    // lines hold bare references, sized as selected at order time
    assert_eq!(order.items[1].size.id(), "size:personal");
}

#[tokio::test]
async fn checkout_fails_atomically_on_a_missing_reference() {
    let catalog = seeded_catalog();
    let mut request = checkout();
    request.items[1].pizza = Ref::new("pizza:ghost");

    let err = build_order(&catalog, &customer(), &request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::PizzaNotFound);
    assert_eq!(err.details.unwrap()["line"], 1);
}

#[tokio::test]
async fn order_walks_the_full_delivery_lifecycle() {
    let catalog = seeded_catalog();
    let mut order = build_order(&catalog, &customer(), &checkout()).await.unwrap();

    for status in ["Preparing", "Done", "On the way", "Delivered"] {
        let update = OrderUpdate {
            status: Some(status.to_string()),
            ..OrderUpdate::default()
        };
        order = apply_order_update(&catalog, &order, &update).await.unwrap();
    }

    assert_eq!(order.status, StatusName::Delivered);
    let names: Vec<StatusName> = order.status_history.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![
            StatusName::Pending,
            StatusName::Preparing,
            StatusName::Done,
            StatusName::OnTheWay,
            StatusName::Delivered,
        ]
    );
}

#[tokio::test]
async fn dispatched_order_rejects_note_edits_but_accepts_delivery() {
    let catalog = seeded_catalog();
    let mut order = build_order(&catalog, &customer(), &checkout()).await.unwrap();
    for status in ["Preparing", "Done", "On the way"] {
        let update = OrderUpdate {
            status: Some(status.to_string()),
            ..OrderUpdate::default()
        };
        order = apply_order_update(&catalog, &order, &update).await.unwrap();
    }

    let notes_update = OrderUpdate {
        notes: Some("actually, leave at the door".into()),
        ..OrderUpdate::default()
    };
    let err = apply_order_update(&catalog, &order, &notes_update)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderInTransit);

    let delivered = apply_order_update(
        &catalog,
        &order,
        &OrderUpdate {
            status: Some("Delivered".into()),
            ..OrderUpdate::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(delivered.status, StatusName::Delivered);
}

#[tokio::test]
async fn cancelled_order_is_terminal() {
    let catalog = seeded_catalog();
    let order = build_order(&catalog, &customer(), &checkout()).await.unwrap();

    let cancelled = apply_order_update(
        &catalog,
        &order,
        &OrderUpdate {
            status: Some("Cancelled".into()),
            ..OrderUpdate::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(cancelled.status, StatusName::Cancelled);

    let err = apply_order_update(
        &catalog,
        &cancelled,
        &OrderUpdate {
            status: Some("Preparing".into()),
            ..OrderUpdate::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderAlreadyCancelled);
}

#[tokio::test]
async fn unknown_status_fails_before_any_transition_check() {
    let catalog = seeded_catalog();
    let order = build_order(&catalog, &customer(), &checkout()).await.unwrap();

    let err = apply_order_update(
        &catalog,
        &order,
        &OrderUpdate {
            status: Some("Teleported".into()),
            ..OrderUpdate::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::StatusNotFound);
}

#[tokio::test]
async fn empty_update_is_rejected() {
    let catalog = seeded_catalog();
    let order = build_order(&catalog, &customer(), &checkout()).await.unwrap();

    let err = apply_order_update(&catalog, &order, &OrderUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn missing_pending_vocabulary_record_fails_checkout() {
    // A catalog without the status vocabulary cannot seed new orders.
    let empty = MemoryCatalog::new();
    let err = empty.get_status("Pending").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StatusNotFound);

    let err = build_order(&empty, &customer(), &checkout()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StatusNotFound);
}
