//! Integration tests for order placement and the scripted fulfillment
//! timeline.
//!
//! The stage progression is a fixed-timer simulation, so these tests run
//! under tokio's paused clock and drive time explicitly.

use std::time::Duration;

use och_qolma_app::cart::Cart;
use och_qolma_app::catalog::Catalog;
use och_qolma_app::orders::{Checkout, DELIVERY_FEE, OrderDesk, OrderError};
use och_qolma_core::{OrderStage, PaymentMethod, ProductId, Som};

/// Catalog loaded the way the app receives it: as an external JSON document.
fn catalog() -> Catalog {
    let json = r#"[
        {
            "id": "p1", "name": "Palov", "category": "Asosiy", "difficulty": "Bayramona",
            "prepTime": "40 min", "cookTime": "2 soat", "servings": 6,
            "description": "", "history": "", "ingredients": [], "steps": [], "secrets": [],
            "serving": "", "image": "palov.jpg", "price": 20000, "estimatedDelivery": "45-60 min"
        },
        {
            "id": "p2", "name": "Norin", "category": "Asosiy", "difficulty": "An'anaviy",
            "prepTime": "30 min", "cookTime": "1 soat", "servings": 4,
            "description": "", "history": "", "ingredients": [], "steps": [], "secrets": [],
            "serving": "", "image": "norin.jpg", "price": 15000, "estimatedDelivery": "30-45 min"
        }
    ]"#;
    Catalog::from_json_str(json).expect("valid catalog json")
}

fn checkout() -> Checkout {
    Checkout {
        delivery_address: "Toshkent, Mirabod tumani".to_string(),
        payment_method: PaymentMethod::Online,
        is_pre_order: false,
        pre_order_time: None,
    }
}

fn filled_cart(catalog: &Catalog) -> Cart {
    let mut cart = Cart::new();
    let p1 = catalog.get(&ProductId::new("p1")).expect("p1 in catalog");
    let p2 = catalog.get(&ProductId::new("p2")).expect("p2 in catalog");
    cart.add(p1);
    cart.add(p1);
    cart.add(p2);
    cart
}

/// Let the spawned schedule task observe clock adjustments.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn stage(desk: &OrderDesk) -> OrderStage {
    desk.active_order().await.expect("active order").stage
}

#[tokio::test(start_paused = true)]
async fn test_full_timeline_from_placement_to_delivered() {
    och_qolma_integration_tests::init_tracing();
    let catalog = catalog();
    let mut desk = OrderDesk::new();
    let mut cart = filled_cart(&catalog);
    assert_eq!(cart.total(), Som::new(55_000));

    let order = desk.place(&mut cart, checkout()).await.expect("placed");
    settle().await;

    assert!(cart.is_empty());
    assert_eq!(order.total, Som::new(55_000).saturating_add(DELIVERY_FEE));
    assert_eq!(order.total, Som::new(70_000));
    assert_eq!(order.stage, OrderStage::Received);

    // The scripted schedule: +5 s, +15 s, +30 s after placement
    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Preparing);

    tokio::time::advance(Duration::from_secs(10)).await;
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Enroute);

    tokio::time::advance(Duration::from_secs(15)).await;
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Delivered);

    // Terminal stage holds forever
    tokio::time::advance(Duration::from_secs(3600)).await;
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Delivered);
}

#[tokio::test(start_paused = true)]
async fn test_second_order_is_never_touched_by_first_orders_timers() {
    och_qolma_integration_tests::init_tracing();
    let catalog = catalog();
    let mut desk = OrderDesk::new();

    let mut cart = filled_cart(&catalog);
    let first = desk.place(&mut cart, checkout()).await.expect("placed");
    settle().await;

    // Replace the order just before the first +5 s transition fires
    tokio::time::advance(Duration::from_secs(4)).await;
    settle().await;
    let mut cart = filled_cart(&catalog);
    let second = desk.place(&mut cart, checkout()).await.expect("placed");
    settle().await;
    assert_ne!(first.id, second.id);

    // Walk well past every one of the first order's deadlines, checking the
    // second order only ever advances on its own schedule.
    tokio::time::advance(Duration::from_secs(2)).await; // first's +5 s passed
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Received);

    tokio::time::advance(Duration::from_secs(3)).await; // second's +5 s
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Preparing);

    tokio::time::advance(Duration::from_secs(7)).await; // first's +15 s passed
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Preparing);

    tokio::time::advance(Duration::from_secs(3)).await; // second's +15 s
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Enroute);

    tokio::time::advance(Duration::from_secs(15)).await; // second's +30 s
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Delivered);
}

#[tokio::test(start_paused = true)]
async fn test_empty_cart_placement_leaves_everything_untouched() {
    let mut desk = OrderDesk::new();
    let mut cart = Cart::new();

    let result = desk.place(&mut cart, checkout()).await;
    assert!(matches!(result, Err(OrderError::EmptyCart)));
    assert!(cart.is_empty());
    assert!(desk.active_order().await.is_none());

    // No schedule was started
    tokio::time::advance(Duration::from_secs(60)).await;
    settle().await;
    assert!(desk.active_order().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cleared_order_stays_cleared() {
    let catalog = catalog();
    let mut desk = OrderDesk::new();
    let mut cart = filled_cart(&catalog);
    desk.place(&mut cart, checkout()).await.expect("placed");
    settle().await;

    tokio::time::advance(Duration::from_secs(6)).await;
    settle().await;
    assert_eq!(stage(&desk).await, OrderStage::Preparing);

    desk.clear_active().await;
    tokio::time::advance(Duration::from_secs(3600)).await;
    settle().await;
    assert!(desk.active_order().await.is_none());
}

#[tokio::test]
async fn test_order_snapshot_is_independent_of_later_cart_activity() {
    let catalog = catalog();
    let mut desk = OrderDesk::new();
    let mut cart = filled_cart(&catalog);

    let order = desk.place(&mut cart, checkout()).await.expect("placed");

    // Refill the cart after placement; the order's snapshot must not move
    let p1 = catalog.get(&ProductId::new("p1")).expect("p1 in catalog");
    cart.add(p1);
    cart.update_quantity(&ProductId::new("p1"), 10);

    let active = desk.active_order().await.expect("active order");
    assert_eq!(active.lines, order.lines);
    assert_eq!(active.lines.len(), 2);
    assert_eq!(active.total, Som::new(70_000));
}
