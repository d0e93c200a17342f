//! Number formatting for monetary display

/// Format a monetary value with exactly two decimal places.
///
/// # Examples
///
/// ```
/// let formatted = frontend::shared::number_format::format_money(12.0);
/// assert_eq!(formatted, "12.00");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Monetary value prefixed with the R$ currency sign.
pub fn format_reais(value: f64) -> String {
    format!("R$ {}", format_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(120.0), "120.00");
        assert_eq!(format_money(6.0), "6.00");
        assert_eq!(format_money(12.345), "12.35");
        assert_eq!(format_money(0.0), "0.00");
    }

    #[test]
    fn test_format_reais() {
        assert_eq!(format_reais(24.0), "R$ 24.00");
        assert_eq!(format_reais(0.024), "R$ 0.02");
    }
}
