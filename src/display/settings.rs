//! Settings and category display formatting

use crate::models::UserSettings;

/// Format the settings screen
pub fn format_settings(settings: &UserSettings, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Monthly Income: {}\n",
        settings.monthly_income.format_with_symbol(symbol)
    ));
    output.push_str("Categories:\n");
    output.push_str(&format_category_list(settings));
    output
}

/// Numbered category list in display order
pub fn format_category_list(settings: &UserSettings) -> String {
    if settings.categories.is_empty() {
        return "  (none)\n".to_string();
    }

    settings
        .categories
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  {}. {}\n", i + 1, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_settings() {
        let settings = UserSettings::new(
            Money::from_dollars(3200),
            vec!["Rent".into(), "Food".into()],
        );
        let output = format_settings(&settings, "$");

        assert!(output.contains("Monthly Income: $3200.00"));
        assert!(output.contains("  1. Rent\n  2. Food\n"));
    }

    #[test]
    fn test_empty_categories() {
        let settings = UserSettings::new(Money::zero(), Vec::new());
        assert_eq!(format_category_list(&settings), "  (none)\n");
    }
}
