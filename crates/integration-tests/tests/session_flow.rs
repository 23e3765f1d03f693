//! End-to-end controller flows: browsing, cart editing, checkout,
//! tracking, the demo admin gate, and the chef chat round trip.

use std::time::Duration;

use secrecy::SecretString;

use och_qolma_app::admin::AdminGate;
use och_qolma_app::catalog::{Catalog, Difficulty};
use och_qolma_app::config::AdminConfig;
use och_qolma_app::controller::{App, Message, Reply};
use och_qolma_app::services::chef::ChefAssistant;
use och_qolma_app::session::Tab;
use och_qolma_core::{ChatRole, OrderStage, PaymentMethod, ProductId, Som};

/// Assistant double that echoes the context it was given, so tests can
/// observe what the controller hands to the external capability.
struct EchoChef;

impl ChefAssistant for EchoChef {
    async fn ask(&self, question: &str, context: &str) -> String {
        format!("savol={question}; kontekst={context}")
    }
}

fn catalog() -> Catalog {
    let json = r#"[
        {
            "id": "palov", "name": "Palov", "category": "Asosiy", "difficulty": "Bayramona",
            "prepTime": "40 min", "cookTime": "2 soat", "servings": 6,
            "description": "", "history": "", "ingredients": [], "steps": [], "secrets": [],
            "serving": "", "image": "palov.jpg", "price": 20000, "estimatedDelivery": "45-60 min"
        },
        {
            "id": "norin", "name": "Norin", "category": "Asosiy", "difficulty": "An'anaviy",
            "prepTime": "30 min", "cookTime": "1 soat", "servings": 4,
            "description": "", "history": "", "ingredients": [], "steps": [], "secrets": [],
            "serving": "", "image": "norin.jpg", "price": 15000, "estimatedDelivery": "30-45 min"
        },
        {
            "id": "shurva", "name": "Sho'rva", "category": "Suyuq", "difficulty": "Tez",
            "prepTime": "15 min", "cookTime": "40 min", "servings": 4,
            "description": "", "history": "", "ingredients": [], "steps": [], "secrets": [],
            "serving": "", "image": "shurva.jpg", "price": 12000, "estimatedDelivery": "30-45 min"
        }
    ]"#;
    Catalog::from_json_str(json).expect("valid catalog json")
}

fn app() -> App<EchoChef> {
    let gate = AdminGate::new(&AdminConfig {
        password: SecretString::from("1234"),
    });
    App::new(
        catalog(),
        gate,
        EchoChef,
        "Toshkent, Mirabod tumani".to_string(),
    )
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_browse_order_and_track_flow() {
    och_qolma_integration_tests::init_tracing();
    let mut app = app();

    // Browse with the difficulty filter
    app.handle(Message::SetDifficultyFilter(Some(Difficulty::Quick)))
        .await
        .expect("filter");
    let quick: Vec<_> = app
        .catalog()
        .filter_by_difficulty(app.state().difficulty_filter)
        .collect();
    assert_eq!(quick.len(), 1);
    assert_eq!(quick[0].id, ProductId::new("shurva"));

    // Build the cart: 2x palov + 1x norin, then fix a typo via remove
    for id in ["palov", "palov", "norin", "shurva"] {
        app.handle(Message::AddToCart(ProductId::new(id)))
            .await
            .expect("add");
    }
    app.handle(Message::RemoveFromCart(ProductId::new("shurva")))
        .await
        .expect("remove");
    app.handle(Message::UpdateQuantity {
        product_id: ProductId::new("norin"),
        delta: -5,
    })
    .await
    .expect("clamped update");

    assert_eq!(app.state().cart.len(), 2);
    assert_eq!(app.state().cart.total(), Som::new(55_000));

    // Checkout as a pre-order paid online
    app.handle(Message::OpenCheckout).await.expect("open");
    app.handle(Message::SetPaymentMethod(PaymentMethod::Online))
        .await
        .expect("payment");
    app.handle(Message::SetPreOrder {
        enabled: true,
        time: "18:30".to_string(),
    })
    .await
    .expect("pre-order");
    app.handle(Message::SetAddress("Toshkent, Chilonzor".to_string()))
        .await
        .expect("address");

    let reply = app.handle(Message::PlaceOrder).await.expect("place");
    let Reply::OrderPlaced(order) = reply else {
        panic!("expected OrderPlaced, got {reply:?}");
    };
    settle().await;

    assert_eq!(order.total, Som::new(70_000));
    assert!(order.is_pre_order);
    assert_eq!(order.pre_order_time.as_deref(), Some("18:30"));
    assert_eq!(order.delivery_address, "Toshkent, Chilonzor");
    assert_eq!(app.state().tab, Tab::Tracking);
    assert!(app.state().cart.is_empty());

    // Watch the scripted fulfillment play out
    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(
        app.active_order().await.expect("active").stage,
        OrderStage::Preparing
    );

    tokio::time::advance(Duration::from_secs(25)).await;
    settle().await;
    assert_eq!(
        app.active_order().await.expect("active").stage,
        OrderStage::Delivered
    );
}

#[tokio::test]
async fn test_favorites_and_shopping_list_survive_ordering() {
    let mut app = app();

    app.handle(Message::ToggleFavorite(ProductId::new("palov")))
        .await
        .expect("favorite");
    app.handle(Message::ToggleShoppingItem(ProductId::new("norin")))
        .await
        .expect("shopping");
    app.handle(Message::AddToCart(ProductId::new("palov")))
        .await
        .expect("add");
    app.handle(Message::PlaceOrder).await.expect("place");

    // Placement clears the cart but never the set-based tabs
    assert!(app.state().cart.is_empty());
    assert_eq!(app.state().favorites, vec![ProductId::new("palov")]);
    assert_eq!(app.state().shopping_list, vec![ProductId::new("norin")]);

    // Toggling off removes from the set
    app.handle(Message::ToggleFavorite(ProductId::new("palov")))
        .await
        .expect("unfavorite");
    assert!(app.state().favorites.is_empty());
}

#[tokio::test]
async fn test_chef_chat_receives_cart_context() {
    let mut app = app();
    app.handle(Message::AddToCart(ProductId::new("palov")))
        .await
        .expect("add");

    let reply = app
        .handle(Message::AskChef("Nima tavsiya qilasiz?".to_string()))
        .await
        .expect("chat");
    let Reply::ChefReplied(answer) = reply else {
        panic!("expected ChefReplied, got {reply:?}");
    };

    assert!(answer.contains("savol=Nima tavsiya qilasiz?"));
    assert!(answer.contains("Palov x1"));

    let chat = &app.state().chat;
    assert_eq!(chat.len(), 2);
    assert_eq!(chat[0].role, ChatRole::User);
    assert_eq!(chat[1].role, ChatRole::Model);
}

#[tokio::test]
async fn test_admin_gate_and_tab_lock() {
    let mut app = app();

    app.handle(Message::SelectTab(Tab::AdminLogin))
        .await
        .expect("tab");

    let reply = app
        .handle(Message::AdminLogin("0000".to_string()))
        .await
        .expect("login attempt");
    assert!(matches!(reply, Reply::Alert(_)));
    assert_eq!(app.state().tab, Tab::AdminLogin);

    app.handle(Message::AdminLogin("1234".to_string()))
        .await
        .expect("login");
    assert_eq!(app.state().tab, Tab::Admin);
    assert!(app.state().admin_unlocked);

    // Leaving the admin tab locks the panel again
    app.handle(Message::SelectTab(Tab::Home)).await.expect("tab");
    assert!(!app.state().admin_unlocked);
}
