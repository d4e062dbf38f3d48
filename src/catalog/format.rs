//! Display transforms applied to product fields at render time.
//!
//! None of these touch the stored [`Product`](super::Product) values.

/// Maximum title length before truncation.
pub const TITLE_LIMIT: usize = 20;
/// Maximum description length before truncation.
pub const DESCRIPTION_LIMIT: usize = 10;
/// Appended to truncated text.
pub const ELLIPSIS: char = '…';
/// Default currency prefix for prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Cut `text` to `limit` characters, appending [`ELLIPSIS`] when anything was
/// dropped.
///
/// Counts `char`s, not bytes, so multi-byte text never splits mid-character.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + ELLIPSIS.len_utf8());
            out.push_str(&text[..byte_idx]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Price with a `$` prefix and exactly two fractional digits.
pub fn format_price(price: f64) -> String {
    format_price_with(price, DEFAULT_CURRENCY_SYMBOL)
}

/// Price with a custom currency prefix and exactly two fractional digits.
pub fn format_price_with(price: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, price)
}

/// Upper-case the first character, leave the rest as is.
///
/// Only the first word is affected: "men's clothing" becomes
/// "Men's clothing", not "Men's Clothing".
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
