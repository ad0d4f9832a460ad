use ndarray::ArrayView1;

/// Pearson correlation over the rows where both columns have a rating.
///
/// Returns `None` when fewer than `min_overlap` rows overlap (never fewer
/// than two) or when either side is constant over the overlap.
pub fn pearson(a: ArrayView1<f64>, b: ArrayView1<f64>, min_overlap: usize) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|(&x, &y)| (x, y))
        .collect();

    if pairs.len() < min_overlap.max(2) {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (cov, ss_a, ss_b) = pairs.iter().fold((0.0, 0.0, 0.0), |(cov, ss_a, ss_b), &(x, y)| {
        let dx = x - mean_a;
        let dy = y - mean_b;
        (cov + dx * dy, ss_a + dx * dx, ss_b + dy * dy)
    });

    let denominator = (ss_a * ss_b).sqrt();
    if denominator == 0.0 {
        return None;
    }

    Some((cov / denominator).clamp(-1.0, 1.0))
}
