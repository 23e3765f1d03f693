//! Shopping cart.
//!
//! The cart holds at most one line per product id, in first-add order. Lines
//! snapshot the product's name and unit price at add time; later catalog
//! changes do not re-price lines already in the cart.

use serde::{Deserialize, Serialize};

use och_qolma_core::{ProductId, Som};

use crate::catalog::Recipe;

/// One product in the cart: id, snapshotted name/price, and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Som,
    pub quantity: u32,
    /// Free-form customer note for this line (e.g. "achchiq bo'lmasin").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> Som {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// The shopping cart.
///
/// Invariants: every line has `quantity >= 1`, each product id appears at
/// most once, and lines keep the order in which products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a recipe to the cart.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is appended with quantity 1, copying the
    /// recipe's name and price at add time.
    pub fn add(&mut self, recipe: &Recipe) {
        if let Some(line) = self.line_mut(&recipe.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: recipe.id.clone(),
                name: recipe.name.clone(),
                unit_price: recipe.price,
                quantity: 1,
                note: None,
            });
        }
    }

    /// Adjust a line's quantity by `delta`, clamped so it never drops
    /// below 1. Removing a line entirely is [`Cart::remove`]'s job.
    ///
    /// No-op if the product is not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) {
        if let Some(line) = self.line_mut(id) {
            let updated = i64::from(line.quantity) + i64::from(delta);
            line.quantity = u32::try_from(updated.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Set or clear the customer note on a line. No-op if the product is
    /// not in the cart.
    pub fn set_note(&mut self, id: &ProductId, note: Option<String>) {
        if let Some(line) = self.line_mut(id) {
            line.note = note;
        }
    }

    /// Remove a line from the cart. No-op if the product is not present.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|line| &line.product_id != id);
    }

    /// Sum of `unit_price * quantity` over all lines. Zero for an empty
    /// cart. Pure; does not include the delivery surcharge.
    #[must_use]
    pub fn total(&self) -> Som {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The cart lines, in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product_id == id)
    }
}
