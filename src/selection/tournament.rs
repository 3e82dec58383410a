use crate::geometry::Route;
use crate::rng::RandomNumberGenerator;

/// Runs a single tournament and returns the index of the winner.
///
/// `tournament_size` distinct indices are drawn without replacement and the
/// one with the lowest cost wins. Ties go to the candidate drawn first.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Panics
///
/// Panics if `tournament_size` is 0 or larger than the population.
pub fn tournament_winner(
    costs: &[f64],
    tournament_size: usize,
    rng: &mut RandomNumberGenerator,
) -> usize {
    let participants = rng.sample_distinct(costs.len(), tournament_size);

    let mut best_idx = participants[0];
    for &idx in &participants[1..] {
        if costs[idx] < costs[best_idx] {
            best_idx = idx;
        }
    }

    best_idx
}

/// Returns a copy of the tournament winner's route.
pub fn tournament_select(
    population: &[Route],
    costs: &[f64],
    tournament_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Route {
    debug_assert_eq!(population.len(), costs.len());
    population[tournament_winner(costs, tournament_size, rng)].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population() -> (Vec<Route>, Vec<f64>) {
        let population = vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
        ];
        let costs = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        (population, costs)
    }

    #[test]
    fn test_full_tournament_picks_the_best() {
        let (population, costs) = population();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..20 {
            let selected = tournament_select(&population, &costs, 5, &mut rng);
            assert_eq!(selected, vec![2, 0, 1]);
        }
    }

    #[test]
    fn test_tournament_size_one_is_random() {
        let (_, costs) = population();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[tournament_winner(&costs, 1, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_worst_never_wins_a_pair_tournament() {
        let (_, costs) = population();
        let mut rng = RandomNumberGenerator::from_seed(7);

        for _ in 0..500 {
            // Index 3 has the highest cost; any opponent beats it.
            assert_ne!(tournament_winner(&costs, 2, &mut rng), 3);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let (_, costs) = population();
        let mut rng = RandomNumberGenerator::from_seed(3);

        let wins = (0..1000)
            .filter(|_| tournament_winner(&costs, 3, &mut rng) == 4)
            .count();
        // The best of five is in a 3-draw tournament 60% of the time.
        assert!(wins > 450, "best individual won only {} times", wins);
    }

    #[test]
    #[should_panic]
    fn test_tournament_larger_than_population_panics() {
        let (_, costs) = population();
        let mut rng = RandomNumberGenerator::new();
        tournament_winner(&costs, 6, &mut rng);
    }
}
