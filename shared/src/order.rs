//! Cart order lines and derived totals

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selected option on an order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOption {
    pub option_name: String,
    pub option_quantity: u32,
    /// Signed price delta per unit
    pub option_price: i64,
}

impl OrderOption {
    /// Total price delta contributed by this option
    pub fn delta(&self) -> i64 {
        self.option_price * i64::from(self.option_quantity)
    }
}

/// One menu item in the cart, with quantity and selected options
///
/// Options are grouped by option category id. Client-local pending
/// checkout; never sent to the server from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_id: i64,
    pub menu_name: String,
    /// Unit price in won
    pub price: i64,
    pub menu_quantity: u32,
    #[serde(default)]
    pub options: BTreeMap<i64, Vec<OrderOption>>,
}

impl OrderLine {
    /// Sum of option price deltas across all option categories
    pub fn option_delta(&self) -> i64 {
        self.options
            .values()
            .flatten()
            .map(OrderOption::delta)
            .sum()
    }

    /// price x quantity + option deltas
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.menu_quantity) + self.option_delta()
    }
}

/// Cart aggregates shown in the order sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartSummary {
    /// Total item count (sum of quantities)
    pub count: u32,
    /// Total price in won (sum of line totals)
    pub total: i64,
}

impl CartSummary {
    /// Pure reduction over the order lines
    pub fn of(lines: &[OrderLine]) -> Self {
        lines.iter().fold(Self::default(), |acc, line| Self {
            count: acc.count + line.menu_quantity,
            total: acc.total + line.line_total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: i64, quantity: u32) -> OrderLine {
        OrderLine {
            menu_id: 1,
            menu_name: "Americano".to_string(),
            price,
            menu_quantity: quantity,
            options: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_cart_sums_to_zero() {
        assert_eq!(CartSummary::of(&[]), CartSummary::default());
    }

    #[test]
    fn line_total_includes_option_deltas() {
        let mut cart_line = line(4000, 2);
        cart_line.options.insert(
            1,
            vec![OrderOption {
                option_name: "Extra shot".to_string(),
                option_quantity: 1,
                option_price: 500,
            }],
        );

        // 4000 * 2 + 500 * 1
        assert_eq!(cart_line.line_total(), 8500);

        let summary = CartSummary::of(std::slice::from_ref(&cart_line));
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, 8500);
    }

    #[test]
    fn negative_option_delta_reduces_the_line() {
        let mut cart_line = line(5000, 1);
        cart_line.options.insert(
            3,
            vec![OrderOption {
                option_name: "Decaf".to_string(),
                option_quantity: 2,
                option_price: -300,
            }],
        );

        assert_eq!(cart_line.line_total(), 4400);
    }

    #[test]
    fn cart_totals_sum_over_lines() {
        let lines = vec![line(4000, 2), line(4500, 1), line(1500, 3)];
        let summary = CartSummary::of(&lines);

        assert_eq!(summary.count, 6);
        assert_eq!(summary.total, 4000 * 2 + 4500 + 1500 * 3);
    }
}
