use crate::geometry::Route;
use crate::rng::RandomNumberGenerator;

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation(n: usize, rng: &mut RandomNumberGenerator) -> Route {
    let mut route: Route = (0..n).collect();
    rng.shuffle(&mut route);
    route
}

/// Returns a copy of `route` with the closed range `[i, k]` reversed.
///
/// # Panics
///
/// Panics unless `i <= k < route.len()`.
pub fn reverse_segment(route: &[usize], i: usize, k: usize) -> Route {
    let mut neighbor = route.to_vec();
    neighbor[i..=k].reverse();
    neighbor
}

/// Checks that `route` visits every index of `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }

    let mut seen = vec![false; n];
    for &city in route {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
