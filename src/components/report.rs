use crate::models::quotes::Quote;

const DESCRIPTION_WIDTH: usize = 25;

/// Banner with the upper-cased symbol followed by a two-column table, one
/// row per price, each value to two decimals behind the currency code.
pub fn render_report(symbol: &str, quote: &Quote, currency: &str) -> String {
    let mut lines = vec![
        String::new(),
        symbol.to_uppercase(),
        String::new(),
        format!("{:<width$} {}", "DESCRIPTION", "VALUE", width = DESCRIPTION_WIDTH),
    ];

    for (label, value) in quote.rows() {
        lines.push(format!(
            "{:<width$} {} {:.2}",
            label,
            currency,
            value,
            width = DESCRIPTION_WIDTH
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}
