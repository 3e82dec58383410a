use crate::geometry::Route;
use crate::rng::RandomNumberGenerator;

/// Swap mutation.
///
/// Each position is visited once; with probability `rate` its gene is swapped
/// with the gene at a uniformly drawn position. The drawn position may be the
/// visited one, in which case nothing changes.
pub fn swap_mutation(route: &[usize], rate: f64, rng: &mut RandomNumberGenerator) -> Route {
    let mut mutated = route.to_vec();
    let n = mutated.len();

    for i in 0..n {
        if rng.gen_probability() < rate {
            let j = rng.gen_index(n);
            mutated.swap(i, j);
        }
    }

    mutated
}
