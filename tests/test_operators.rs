use proptest::prelude::*;
use salesman::{
    geometry::{tour_cost, Coordinate},
    operators::{
        is_permutation, order_crossover_pair, order_crossover_with_segment, random_permutation,
        reverse_segment, swap_mutation,
    },
    rng::RandomNumberGenerator,
};

fn permutation(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    (1..max_len).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
}

/// A route together with coordinates for every city it visits.
fn instance() -> impl Strategy<Value = (Vec<usize>, Vec<Coordinate>)> {
    permutation(25).prop_flat_map(|route| {
        let n = route.len();
        (
            Just(route),
            prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), n)
                .prop_map(|points| points.into_iter().map(Coordinate::from).collect()),
        )
    })
}

/// Two parents over the same cities plus a closed segment `[start, end]`.
fn crossover_case() -> impl Strategy<Value = (Vec<usize>, Vec<usize>, usize, usize)> {
    (2usize..30).prop_flat_map(|n| {
        let parent = Just((0..n).collect::<Vec<usize>>());
        (parent.clone().prop_shuffle(), parent.prop_shuffle(), 0..n, 0..n)
            .prop_map(|(p1, p2, a, b)| (p1, p2, a.min(b), a.max(b)))
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

proptest! {
    #[test]
    fn random_permutation_is_a_bijection(n in 1usize..200, seed in any::<u64>()) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        prop_assert!(is_permutation(&random_permutation(n, &mut rng), n));
    }

    #[test]
    fn tour_cost_is_rotation_invariant((route, coords) in instance(), shift in 0usize..25) {
        let mut rotated = route.clone();
        rotated.rotate_left(shift % route.len());
        prop_assert!(close(tour_cost(&route, &coords), tour_cost(&rotated, &coords)));
    }

    #[test]
    fn tour_cost_is_reversal_invariant((route, coords) in instance()) {
        let reversed: Vec<usize> = route.iter().rev().copied().collect();
        prop_assert!(close(tour_cost(&route, &coords), tour_cost(&reversed, &coords)));
    }

    #[test]
    fn tour_cost_is_non_negative((route, coords) in instance()) {
        prop_assert!(tour_cost(&route, &coords) >= 0.0);
    }

    #[test]
    fn reverse_segment_is_an_involution(route in permutation(40), a in 0usize..40, b in 0usize..40) {
        let n = route.len();
        let (i, k) = ((a % n).min(b % n), (a % n).max(b % n));

        let once = reverse_segment(&route, i, k);
        prop_assert!(is_permutation(&once, n));
        prop_assert_eq!(reverse_segment(&once, i, k), route);
    }

    #[test]
    fn order_crossover_yields_permutations((p1, p2, start, end) in crossover_case()) {
        let n = p1.len();
        let child = order_crossover_with_segment(&p1, &p2, start, end);

        prop_assert!(is_permutation(&child, n));
        prop_assert_eq!(&child[start..=end], &p1[start..=end]);
    }

    #[test]
    fn order_crossover_pair_yields_permutations((p1, p2, _, _) in crossover_case(), seed in any::<u64>()) {
        let n = p1.len();
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let (c1, c2) = order_crossover_pair(&p1, &p2, &mut rng);

        prop_assert!(is_permutation(&c1, n));
        prop_assert!(is_permutation(&c2, n));
    }

    #[test]
    fn swap_mutation_preserves_permutations(route in permutation(50), rate in 0.0..=1.0f64, seed in any::<u64>()) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let mutated = swap_mutation(&route, rate, &mut rng);
        prop_assert!(is_permutation(&mutated, route.len()));
    }
}

#[test]
fn test_order_crossover_keeps_relative_order_of_donor() {
    let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7, 8];
    let p2 = vec![8, 2, 6, 7, 1, 5, 4, 0, 3];

    let child = order_crossover_with_segment(&p1, &p2, 3, 5);
    assert_eq!(&child[3..=5], &[3, 4, 5]);

    // Reading the child from position 6 onwards lists the donor genes in the
    // donor's own cyclic order starting at position 6.
    let filled: Vec<usize> = (6..9).chain(0..3).map(|i| child[i]).collect();
    assert_eq!(filled, vec![0, 8, 2, 6, 7, 1]);
}
