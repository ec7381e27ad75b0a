//! Nutrition and price totals.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::item::Item;

/// Currency symbol shown in front of prices.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Aggregate nutrition and price for a selection.
///
/// Values keep full precision; rounding happens only in [`Totals::display`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Totals {
    #[serde(with = "rust_decimal::serde::float")]
    pub calories: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub protein: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub carbs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fat: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Totals {
    /// Totals of an empty selection.
    pub const ZERO: Totals = Totals {
        calories: Decimal::ZERO,
        protein: Decimal::ZERO,
        carbs: Decimal::ZERO,
        fat: Decimal::ZERO,
        price: Decimal::ZERO,
    };

    /// Adds `qty` units of `item` to the running totals.
    ///
    /// A field that would overflow is clamped to [`Decimal::MAX`]. Returns
    /// `false` if any field was clamped.
    pub fn add_item(&mut self, item: &Item, qty: u32) -> bool {
        let qty = Decimal::from(qty);
        let mut exact = true;
        for (total, value) in [
            (&mut self.calories, item.calories),
            (&mut self.protein, item.protein),
            (&mut self.carbs, item.carbs),
            (&mut self.fat, item.fat),
            (&mut self.price, item.price),
        ] {
            match value.checked_mul(qty).and_then(|v| total.checked_add(v)) {
                Some(sum) => *total = sum,
                None => {
                    *total = Decimal::MAX;
                    exact = false;
                }
            }
        }
        exact
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the name of the first negative field, if any.
    pub fn negative_field(&self) -> Option<&'static str> {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("price", self.price),
        ]
        .into_iter()
        .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
        .map(|(name, _)| name)
    }

    /// Rounds every field for presentation: calories to whole units,
    /// protein/carbs/fat to one decimal place, price to two.
    pub fn display(&self) -> TotalsDisplay {
        TotalsDisplay {
            calories: round(self.calories, 0),
            protein: round(self.protein, 1),
            carbs: round(self.carbs, 1),
            fat: round(self.fat, 1),
            price: round(self.price, 2),
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Presentation-rounded totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsDisplay {
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fat: Decimal,
    pub price: Decimal,
}

impl TotalsDisplay {
    pub fn calories_text(&self) -> String {
        format!("{:.0}", self.calories)
    }

    pub fn protein_text(&self) -> String {
        format!("{:.1}", self.protein)
    }

    pub fn carbs_text(&self) -> String {
        format!("{:.1}", self.carbs)
    }

    pub fn fat_text(&self) -> String {
        format!("{:.1}", self.fat)
    }

    /// Price with currency symbol, e.g. `₹80.00`.
    pub fn price_text(&self) -> String {
        format_price(self.price)
    }
}

impl fmt::Display for TotalsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kcal, protein {}g, carbs {}g, fat {}g, {}",
            self.calories_text(),
            self.protein_text(),
            self.carbs_text(),
            self.fat_text(),
            self.price_text()
        )
    }
}

/// Formats a price with two decimal places and the currency symbol.
pub fn format_price(price: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round(price, 2))
}
