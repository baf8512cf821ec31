use crate::errors::Result;

/// Return a 'minimal' representation of the given number.
///
/// Fixed 6-decimal-place rendering with trailing zeros (and any bare
/// trailing '.') stripped, so output is stable regardless of how the
/// value was computed. An all-zero result - including "-0" from tiny
/// negative values - collapses to "0".
pub fn fstr(x: f64) -> String {
    let formatted = format!("{x:.6}");
    let result = formatted.trim_end_matches('0').trim_end_matches('.');
    if result.is_empty() || result == "-0" || result == "0" {
        "0".to_string()
    } else {
        result.to_string()
    }
}

/// Parse a string to an f64
pub fn strp(s: &str) -> Result<f64> {
    Ok(s.trim().parse()?)
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
