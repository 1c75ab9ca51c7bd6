//! # Display Formatting
//!
//! Presentation helpers for quotes. Calculators return raw numbers; these
//! turn them into the strings shown to customers.
//!
//! ```rust
//! use crane_core::format::{format_currency, format_multiplier_change, format_range};
//!
//! assert_eq!(format_currency(12500), "£12,500");
//! assert_eq!(format_range(1000, 2000), "£1,000 - £2,000");
//! assert_eq!(format_multiplier_change(1.3), "+30%");
//! ```

use crate::units::CostRange;

/// Format whole pounds with thousands separators, e.g. `£1,234`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

/// Format a price range, collapsing to a single value when both ends match.
pub fn format_range(min: i64, max: i64) -> String {
    if min == max {
        format_currency(min)
    } else {
        format!("{} - {}", format_currency(min), format_currency(max))
    }
}

/// [`format_range`] for a [`CostRange`]
pub fn format_cost(range: CostRange) -> String {
    format_range(range.min, range.max)
}

/// Describe a regional multiplier relative to baseline: `Baseline`, `+30%`, `-5%`.
pub fn format_multiplier_change(multiplier: f64) -> String {
    if multiplier == 1.0 {
        return "Baseline".to_string();
    }
    let change = (multiplier - 1.0) * 100.0;
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{:.0}%", sign, change)
}
