//! Session state: one explicit value holding everything the UI shows.
//!
//! The original demo kept a dozen independent mutable flags; here they live
//! in a single `SessionState` owned by the controller and updated only
//! through its transition methods and the controller's message routing.

use och_qolma_core::{ChatRole, PaymentMethod, ProductId};

use crate::cart::Cart;
use crate::catalog::{Catalog, Difficulty};
use crate::orders::Checkout;

/// The currently visible screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Menu,
    Recipes,
    Favorites,
    Cart,
    Tracking,
    Partner,
    Shopping,
    AdminLogin,
    Admin,
}

/// Checkout form fields, edited in place until placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDraft {
    pub open: bool,
    pub payment_method: PaymentMethod,
    pub is_pre_order: bool,
    pub pre_order_time: String,
    pub order_note: String,
    pub address: String,
}

impl CheckoutDraft {
    fn new(address: String) -> Self {
        Self {
            open: false,
            payment_method: PaymentMethod::default(),
            is_pre_order: false,
            pre_order_time: String::new(),
            order_note: String::new(),
            address,
        }
    }

    /// Finalize the draft into placement parameters.
    #[must_use]
    pub fn to_checkout(&self) -> Checkout {
        let pre_order_time = (self.is_pre_order && !self.pre_order_time.is_empty())
            .then(|| self.pre_order_time.clone());
        Checkout {
            delivery_address: self.address.clone(),
            payment_method: self.payment_method,
            is_pre_order: self.is_pre_order,
            pre_order_time,
        }
    }
}

/// One entry in the chef chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

/// All per-session UI state. Lost on reload by design; nothing here is
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub tab: Tab,
    pub cart: Cart,
    /// Favorited product ids, in toggle-on order.
    pub favorites: Vec<ProductId>,
    /// Shopping-list product ids, in toggle-on order.
    pub shopping_list: Vec<ProductId>,
    pub selected_recipe: Option<ProductId>,
    pub difficulty_filter: Option<Difficulty>,
    pub checkout: CheckoutDraft,
    pub chat: Vec<ChatEntry>,
    pub chat_open: bool,
    pub admin_unlocked: bool,
}

impl SessionState {
    /// Fresh session showing the home tab, with the checkout address
    /// pre-filled.
    #[must_use]
    pub fn new(default_address: String) -> Self {
        Self {
            tab: Tab::default(),
            cart: Cart::new(),
            favorites: Vec::new(),
            shopping_list: Vec::new(),
            selected_recipe: None,
            difficulty_filter: None,
            checkout: CheckoutDraft::new(default_address),
            chat: Vec::new(),
            chat_open: false,
            admin_unlocked: false,
        }
    }

    /// Switch to another tab. Leaving the admin area locks it again.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Admin {
            self.admin_unlocked = false;
        }
        self.tab = tab;
    }

    /// Toggle a product in the favorites set, preserving toggle-on order.
    pub fn toggle_favorite(&mut self, id: &ProductId) {
        toggle(&mut self.favorites, id);
    }

    /// Toggle a product in the shopping list, preserving toggle-on order.
    pub fn toggle_shopping_item(&mut self, id: &ProductId) {
        toggle(&mut self.shopping_list, id);
    }

    /// Add one unit of a catalog product to the cart. No-op for unknown
    /// ids; the controller surfaces those as errors before getting here.
    pub fn add_to_cart(&mut self, catalog: &Catalog, id: &ProductId) {
        if let Some(recipe) = catalog.get(id) {
            self.cart.add(recipe);
        }
    }

    /// Append a chat entry to the transcript.
    pub fn push_chat(&mut self, role: ChatRole, text: impl Into<String>) {
        self.chat.push(ChatEntry {
            role,
            text: text.into(),
        });
    }

    /// One-line summary of cart and order context handed to the chef
    /// assistant alongside the user's question.
    #[must_use]
    pub fn context_summary(&self) -> String {
        let items: Vec<String> = self
            .cart
            .lines()
            .iter()
            .map(|line| format!("{} x{}", line.name, line.quantity))
            .collect();
        if items.is_empty() {
            "Savat bo'sh".to_string()
        } else {
            format!("Savat: {} (jami {})", items.join(", "), self.cart.total())
        }
    }
}

fn toggle(set: &mut Vec<ProductId>, id: &ProductId) {
    if let Some(pos) = set.iter().position(|existing| existing == id) {
        set.remove(pos);
    } else {
        set.push(id.clone());
    }
}
