//! Status enums for orders, payments, and chat.

use serde::{Deserialize, Serialize};

/// Fulfillment stage of a placed order.
///
/// Stages only ever advance, one step at a time, via [`OrderStage::next`];
/// there is no way to skip a stage or move backwards. In this demo the
/// progression is driven by fixed timers rather than a real kitchen or
/// courier system.
///
/// Serde names match the original data set (Uzbek).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    /// Order accepted by the restaurant.
    #[default]
    #[serde(rename = "qabul_qilindi")]
    Received,
    /// Kitchen is preparing the food.
    #[serde(rename = "tayyorlanmoqda")]
    Preparing,
    /// Courier is on the way.
    #[serde(rename = "yolda")]
    Enroute,
    /// Delivered to the customer. Terminal.
    #[serde(rename = "yetkazildi")]
    Delivered,
}

impl OrderStage {
    /// The next stage in the fulfillment sequence, or `None` once terminal.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Received => Some(Self::Preparing),
            Self::Preparing => Some(Self::Enroute),
            Self::Enroute => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    /// Whether this stage ends the lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl std::fmt::Display for OrderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Received => write!(f, "qabul_qilindi"),
            Self::Preparing => write!(f, "tayyorlanmoqda"),
            Self::Enroute => write!(f, "yolda"),
            Self::Delivered => write!(f, "yetkazildi"),
        }
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[serde(rename = "naqd")]
    Cash,
    /// Card on delivery.
    #[default]
    #[serde(rename = "karta")]
    Card,
    /// Paid online at checkout.
    #[serde(rename = "online")]
    Online,
}

/// Chat message role for the chef assistant transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}
