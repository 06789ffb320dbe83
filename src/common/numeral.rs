//! Roman numerals for article headings.

const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Render a 1-based article number.
///
/// Numbers 1 through 10 render as Roman numerals; anything else falls back to
/// decimal digits.
///
/// # Examples
///
/// ```
/// use testament_docx::common::numeral::roman;
/// assert_eq!(roman(4), "IV");
/// assert_eq!(roman(11), "11");
/// ```
pub fn roman(n: usize) -> String {
    match n.checked_sub(1).and_then(|i| ROMAN.get(i)) {
        Some(numeral) => (*numeral).to_string(),
        None => itoa::Buffer::new().format(n).to_string(),
    }
}
