//! Composite score across the five dimensions.

/// Equally weighted mean of the dimension scores, rounded to the nearest
/// integer.
pub fn overall_score(scores: [u8; 5]) -> u8 {
    let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let mean = f64::from(total) / scores.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}
