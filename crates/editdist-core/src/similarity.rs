use crate::distance::distance_chars;

/// Distance divided by the length of the longer input, in code points.
/// Two empty inputs are identical, so the result is `0.0`.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    distance_chars(&a, &b) as f64 / longest as f64
}

/// `1.0 - normalized_distance(a, b)`, always within `[0.0, 1.0]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    1.0 - normalized_distance(a, b)
}
