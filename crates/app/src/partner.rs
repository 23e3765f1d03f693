//! Partner (restaurant) dashboard data.
//!
//! Static demo figures shown on the partner tab; there is no reporting
//! backend behind them.

use serde::{Deserialize, Serialize};

use och_qolma_core::Som;

/// Aggregate figures for the partner dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantStats {
    pub total_sales: Som,
    pub order_count: u32,
    pub rating: f32,
    pub recent_reviews: Vec<Review>,
}

/// A customer review shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub comment: String,
    pub stars: u8,
}

impl RestaurantStats {
    /// The fixed demo dashboard figures.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            total_sales: Som::new(12_450_000),
            order_count: 154,
            rating: 4.9,
            recent_reviews: vec![
                Review {
                    user: "Dostonbek".to_string(),
                    comment: "Palov juda mazali!".to_string(),
                    stars: 5,
                },
                Review {
                    user: "Kamola".to_string(),
                    comment: "Yetkazib berish tez!".to_string(),
                    stars: 5,
                },
                Review {
                    user: "Sherzod".to_string(),
                    comment: "Norin zo'r!".to_string(),
                    stars: 5,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_stats() {
        let stats = RestaurantStats::demo();
        assert_eq!(stats.total_sales, Som::new(12_450_000));
        assert_eq!(stats.order_count, 154);
        assert_eq!(stats.recent_reviews.len(), 3);
        assert!(stats.recent_reviews.iter().all(|r| r.stars == 5));
    }
}
