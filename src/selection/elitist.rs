use std::cmp::Ordering;

/// Returns the indices of the `count` lowest-cost individuals, best first.
///
/// The sort is stable, so individuals with equal cost keep their population
/// order. NaN costs sort after every real cost.
pub fn elite_indices(costs: &[f64], count: usize) -> Vec<usize> {
    let mut indexed: Vec<usize> = (0..costs.len()).collect();

    indexed.sort_by(|&a, &b| {
        costs[a].partial_cmp(&costs[b]).unwrap_or_else(|| {
            if costs[a].is_nan() && !costs[b].is_nan() {
                Ordering::Greater
            } else if costs[b].is_nan() && !costs[a].is_nan() {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
    });

    indexed.truncate(count);
    indexed
}
