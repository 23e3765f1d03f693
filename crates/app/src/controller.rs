//! The application controller: one owner for all session state.
//!
//! Every user action is an explicit [`Message`]; the controller applies it
//! to the [`SessionState`] it owns and performs the cart, order, admin, and
//! chat effects. This replaces the original demo's pile of independent
//! mutable UI flags with a single serial writer.

use tracing::instrument;

use och_qolma_core::{ChatRole, PaymentMethod, ProductId};

use crate::admin::AdminGate;
use crate::catalog::{Catalog, Difficulty};
use crate::error::{AppError, Result};
use crate::orders::{Order, OrderDesk};
use crate::partner::RestaurantStats;
use crate::services::chef::ChefAssistant;
use crate::session::{SessionState, Tab};

/// A user action, click-equivalent. Applied serially; no message suspends
/// mid-mutation of the session state.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    ToggleFavorite(ProductId),
    ToggleShoppingItem(ProductId),
    SelectRecipe(Option<ProductId>),
    SetDifficultyFilter(Option<Difficulty>),
    AddToCart(ProductId),
    UpdateQuantity { product_id: ProductId, delta: i32 },
    RemoveFromCart(ProductId),
    SetLineNote { product_id: ProductId, note: Option<String> },
    OpenCheckout,
    CloseCheckout,
    SetPaymentMethod(PaymentMethod),
    SetAddress(String),
    SetPreOrder { enabled: bool, time: String },
    SetOrderNote(String),
    ToggleChat,
    AskChef(String),
    PlaceOrder,
    ClearOrder,
    AdminLogin(String),
    AdminLogout,
}

/// What a handled message reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// State updated; nothing else to show.
    Updated,
    /// An order was placed.
    OrderPlaced(Order),
    /// The chef assistant answered.
    ChefReplied(String),
    /// A blocking alert (the demo admin gate rejecting a password).
    Alert(String),
}

/// The application controller.
///
/// Owns the session state, the catalog, the order desk, the demo admin
/// gate, and a chef assistant. Single-threaded by design: one logical
/// writer mutates the session, and only the order desk's timer task runs
/// concurrently.
pub struct App<C> {
    catalog: Catalog,
    state: SessionState,
    desk: OrderDesk,
    gate: AdminGate,
    chef: C,
}

impl<C: ChefAssistant> App<C> {
    /// Create a controller with a fresh session.
    #[must_use]
    pub fn new(catalog: Catalog, gate: AdminGate, chef: C, default_address: String) -> Self {
        Self {
            catalog,
            state: SessionState::new(default_address),
            desk: OrderDesk::new(),
            gate,
            chef,
        }
    }

    /// The current session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The recipe catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Snapshot of the active order, if any.
    pub async fn active_order(&self) -> Option<Order> {
        self.desk.active_order().await
    }

    /// Partner dashboard figures (static demo data).
    #[must_use]
    pub fn partner_stats(&self) -> RestaurantStats {
        RestaurantStats::demo()
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownProduct`] for cart additions of ids not in
    /// the catalog and [`AppError::Order`] when placement is attempted with
    /// an empty cart. Everything else either succeeds or surfaces as a
    /// [`Reply::Alert`].
    #[instrument(skip(self, message))]
    pub async fn handle(&mut self, message: Message) -> Result<Reply> {
        match message {
            Message::SelectTab(tab) => self.state.select_tab(tab),
            Message::ToggleFavorite(id) => self.state.toggle_favorite(&id),
            Message::ToggleShoppingItem(id) => self.state.toggle_shopping_item(&id),
            Message::SelectRecipe(id) => self.state.selected_recipe = id,
            Message::SetDifficultyFilter(filter) => self.state.difficulty_filter = filter,
            Message::AddToCart(id) => {
                if self.catalog.get(&id).is_none() {
                    return Err(AppError::UnknownProduct(id.to_string()));
                }
                self.state.add_to_cart(&self.catalog, &id);
            }
            Message::UpdateQuantity { product_id, delta } => {
                self.state.cart.update_quantity(&product_id, delta);
            }
            Message::RemoveFromCart(id) => self.state.cart.remove(&id),
            Message::SetLineNote { product_id, note } => {
                self.state.cart.set_note(&product_id, note);
            }
            Message::OpenCheckout => self.state.checkout.open = true,
            Message::CloseCheckout => self.state.checkout.open = false,
            Message::SetPaymentMethod(method) => self.state.checkout.payment_method = method,
            Message::SetAddress(address) => self.state.checkout.address = address,
            Message::SetPreOrder { enabled, time } => {
                self.state.checkout.is_pre_order = enabled;
                self.state.checkout.pre_order_time = time;
            }
            Message::SetOrderNote(note) => self.state.checkout.order_note = note,
            Message::ToggleChat => self.state.chat_open = !self.state.chat_open,
            Message::AskChef(question) => return Ok(self.ask_chef(question).await),
            Message::PlaceOrder => return self.place_order().await,
            Message::ClearOrder => self.desk.clear_active().await,
            Message::AdminLogin(password) => return Ok(self.admin_login(&password)),
            Message::AdminLogout => {
                self.state.admin_unlocked = false;
                self.state.select_tab(Tab::Home);
            }
        }
        Ok(Reply::Updated)
    }

    /// Convert the cart into an order and jump to the tracking tab.
    async fn place_order(&mut self) -> Result<Reply> {
        let checkout = self.state.checkout.to_checkout();
        let order = self.desk.place(&mut self.state.cart, checkout).await?;
        self.state.checkout.open = false;
        self.state.select_tab(Tab::Tracking);
        Ok(Reply::OrderPlaced(order))
    }

    /// Run one chat round trip: record the question, ask the assistant,
    /// record the answer. Never fails; the assistant contract maps errors
    /// to fallback text.
    async fn ask_chef(&mut self, question: String) -> Reply {
        let context = self.state.context_summary();
        self.state.push_chat(ChatRole::User, question.clone());
        let answer = self.chef.ask(&question, &context).await;
        self.state.push_chat(ChatRole::Model, answer.clone());
        Reply::ChefReplied(answer)
    }

    /// Demo admin gate check; a mismatch is a blocking alert, not an error.
    fn admin_login(&mut self, password: &str) -> Reply {
        if self.gate.verify(password) {
            self.state.admin_unlocked = true;
            self.state.tab = Tab::Admin;
            Reply::Updated
        } else {
            Reply::Alert("Noto'g'ri parol".to_string())
        }
    }
}
