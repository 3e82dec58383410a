//! Order crossover (OX).
//!
//! A child keeps the closed segment `[start, end]` of its template parent at
//! the same positions. The free positions are then filled left to right
//! starting at `end + 1` and wrapping around, using the donor parent's genes
//! read from its position `end + 1` onwards (also wrapping), skipping genes
//! the child already holds.

use crate::geometry::Route;
use crate::rng::RandomNumberGenerator;

/// Builds one OX child from an explicit closed segment.
///
/// # Panics
///
/// Panics if the parents differ in length, if `start > end`, or if `end` is
/// outside the parents.
pub fn order_crossover_with_segment(
    template: &[usize],
    donor: &[usize],
    start: usize,
    end: usize,
) -> Route {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(start <= end && end < n, "segment [{start}, {end}] out of range");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let gene = donor[(end + 1 + offset) % n];
        if !placed[gene] {
            child[pos] = gene;
            placed[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Produces one child of `parent1` and `parent2` over a random segment.
///
/// Routes shorter than two cities have no segment to pick; the child is a
/// copy of `parent1`.
pub fn order_crossover(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Route {
    if parent1.len() < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(parent1.len(), rng);
    order_crossover_with_segment(parent1, parent2, start, end)
}

/// Produces two children sharing one random segment, the second with the
/// parent roles swapped.
pub fn order_crossover_pair(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> (Route, Route) {
    if parent1.len() < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(parent1.len(), rng);
    (
        order_crossover_with_segment(parent1, parent2, start, end),
        order_crossover_with_segment(parent2, parent1, start, end),
    )
}

/// Two distinct sorted positions in `[0, n)`.
fn random_segment(n: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
    let drawn = rng.sample_distinct(n, 2);
    (drawn[0].min(drawn[1]), drawn[0].max(drawn[1]))
}
