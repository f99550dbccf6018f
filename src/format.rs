use crate::model::TransactionKind;

pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Table-row amount label: income gains a leading `+`, expenses a `-`.
pub fn signed_money(kind: TransactionKind, amount: f64) -> String {
    match kind {
        TransactionKind::Income => format!("+{}", money(amount)),
        TransactionKind::Expense => format!("-{}", money(amount)),
    }
}

pub fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "text-green-600",
        TransactionKind::Expense => "text-red-600",
    }
}

/// Balance color follows the sign of the balance itself, not the
/// income/expense convention.
pub fn balance_class(balance: f64) -> &'static str {
    if balance >= 0.0 {
        "text-green-600"
    } else {
        "text-red-600"
    }
}

/// The backend serializes dates as datetimes; the table only shows the date
/// part.
pub fn date_only(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// Bar height as a percentage of the larger series in the overview chart.
pub fn bar_height_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(money(1000.0), "$1000.00");
        assert_eq!(money(400.5), "$400.50");
        assert_eq!(money(599.5), "$599.50");
    }

    #[test]
    fn signed_money_follows_kind() {
        assert_eq!(signed_money(TransactionKind::Income, 50.0), "+$50.00");
        assert_eq!(signed_money(TransactionKind::Expense, 12.5), "-$12.50");
    }

    #[test]
    fn balance_color_follows_sign() {
        assert_eq!(balance_class(599.5), "text-green-600");
        assert_eq!(balance_class(0.0), "text-green-600");
        assert_eq!(balance_class(-0.01), "text-red-600");
    }

    #[test]
    fn date_only_strips_time_part() {
        assert_eq!(date_only("2024-03-01T00:00:00"), "2024-03-01");
        assert_eq!(date_only("2024-03-01"), "2024-03-01");
    }

    #[test]
    fn bar_heights_scale_to_the_larger_series() {
        assert_eq!(bar_height_pct(1000.0, 1000.0), 100.0);
        assert_eq!(bar_height_pct(250.0, 1000.0), 25.0);
        assert_eq!(bar_height_pct(0.0, 0.0), 0.0);
    }
}
