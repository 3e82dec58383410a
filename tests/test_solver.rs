use salesman::{
    cities::{generate_cities, DEFAULT_EXTENT},
    genetic_algorithm,
    rng::RandomNumberGenerator,
    simulated_annealing, Coordinate, Method, RunInfo, TspError,
};

#[test]
fn test_zero_cities_for_both_engines() {
    let sa = simulated_annealing(&[], 50.0, 0.995, 1e-3, 200, 20_000, Some(0)).unwrap();
    assert!(sa.route.is_empty());
    assert_eq!(sa.cost, 0.0);
    assert_eq!(sa.info.iterations(), 0);
    assert!(matches!(sa.info, RunInfo::Annealing(_)));

    let ga = genetic_algorithm(&[], 100, 500, 0.8, 0.02, 1, 3, Some(0)).unwrap();
    assert!(ga.route.is_empty());
    assert_eq!(ga.cost, 0.0);
    assert_eq!(ga.info.iterations(), 0);
    assert!(matches!(ga.info, RunInfo::Evolution(_)));
}

#[test]
fn test_unit_square_with_flat_entry_point() {
    let square: Vec<Coordinate> = vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ];

    let solution = genetic_algorithm(&square, 30, 100, 0.9, 0.02, 1, 3, Some(0)).unwrap();
    assert_eq!(solution.cost, 4.0);
    assert_eq!(solution.info.best_cost_history_len(), 101);

    let solution = simulated_annealing(&square, 10.0, 0.95, 1e-3, 50, 10_000, Some(0)).unwrap();
    assert_eq!(solution.cost, 4.0);
}

#[test]
fn test_default_driver_run_is_reproducible() {
    let mut rng = RandomNumberGenerator::from_seed(123);
    let coords = generate_cities(25, DEFAULT_EXTENT, &mut rng).unwrap();

    let first = simulated_annealing(&coords, 50.0, 0.995, 1e-3, 200, 20_000, Some(123)).unwrap();
    let second = simulated_annealing(&coords, 50.0, 0.995, 1e-3, 200, 20_000, Some(123)).unwrap();

    assert_eq!(first.route, second.route);
    assert_eq!(first.cost, second.cost);
    assert!(first.info.iterations() <= 20_000);
}

#[test]
fn test_errors_identify_the_parameter() {
    let coords = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)];

    let err = simulated_annealing(&coords, 50.0, 0.0, 1e-3, 200, 20_000, None).unwrap_err();
    assert!(err.to_string().contains("`alpha`"), "{}", err);

    let err = genetic_algorithm(&coords, 10, 10, 0.9, 2.0, 1, 3, None).unwrap_err();
    assert!(err.to_string().contains("`mutation_rate`"), "{}", err);

    let err = genetic_algorithm(&coords, 10, 10, 0.9, 0.02, 11, 3, None).unwrap_err();
    assert!(matches!(err, TspError::InvalidParameter { name: "elitism", .. }));
}

#[test]
fn test_unknown_method() {
    assert!(matches!(
        "nn".parse::<Method>(),
        Err(TspError::UnknownMethod(name)) if name == "nn"
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_solution_serializes() {
    let coords: Vec<Coordinate> = vec![(0.0, 0.0).into(), (3.0, 0.0).into(), (3.0, 4.0).into()];
    let solution = genetic_algorithm(&coords, 10, 5, 0.9, 0.02, 1, 3, Some(1)).unwrap();

    let json = serde_json::to_string(&solution).unwrap();
    let restored: salesman::Solution = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.route, solution.route);
    assert_eq!(restored.info.iterations(), solution.info.iterations());
    assert_eq!(
        restored.info.best_cost_history_len(),
        solution.info.best_cost_history_len()
    );
    assert!((restored.cost - solution.cost).abs() < 1e-9);
}
