//! Centered moving-average smoothing of score series.

/// Smooth `values` with a centered window of radius `window / 2`.
///
/// The window is clipped at both ends of the sequence rather than padded, so
/// the first and last few outputs average fewer source values. A window of
/// 0 or 1 returns the input unchanged.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return values.to_vec();
    }
    let radius = window / 2;
    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(radius);
            let end = (i + radius + 1).min(values.len());
            let slice = &values[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
