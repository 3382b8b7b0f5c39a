use knapsack_ga::{
    error::GeneticError,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    problem::Problem,
    strategy::UnboundedStrategy,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_unbounded_saturates_single_item() {
    init_tracing();
    let problem = Problem::from_pairs(&[(1, 10)], 5).unwrap();
    let mut launcher = EvolutionLauncher::unbounded(problem).with_seed(42);
    let result = launcher.evolution(100, 50, 0.01).unwrap();

    assert_eq!(result.genome.genes(), &[5]);
    assert_eq!(result.value, 50);
    assert_eq!(result.weight, 5);
}

#[test]
fn test_unbounded_history_is_non_decreasing() {
    let problem = Problem::from_pairs(&[(2, 3), (3, 4), (4, 5), (5, 6), (7, 11)], 23).unwrap();
    let mut launcher = EvolutionLauncher::unbounded(problem).with_seed(5);
    let result = launcher.evolution(150, 40, 0.05).unwrap();

    let history = result
        .history
        .clone()
        .expect("unbounded solver tracks history");
    assert_eq!(history.len(), 150);
    assert!(history.windows(2).all(|w| w[0] <= w[1]));
    assert!(result.value >= *history.last().unwrap());
    // Death penalty: an all-infeasible run is allowed to end at zero.
    if result.found_feasible_improvement() {
        assert!(result.weight <= 23);
    }
}

#[test]
fn test_unbounded_beats_the_single_best_copy() {
    // Best single-copy selection is worth 11, while 3 copies of (7, 11) plus
    // one of (2, 3) are worth 36.
    let problem = Problem::from_pairs(&[(2, 3), (3, 4), (7, 11)], 23).unwrap();
    let mut launcher = EvolutionLauncher::unbounded(problem).with_seed(11);
    let result = launcher.evolution(200, 60, 0.05).unwrap();

    assert!(result.value > 11);
}

#[test]
fn test_unbounded_is_deterministic_for_a_seed() {
    let problem = Problem::from_pairs(&[(2, 3), (3, 4), (4, 5)], 17).unwrap();
    let run = || {
        EvolutionLauncher::unbounded(problem.clone())
            .with_seed(1234)
            .evolution(80, 25, 0.1)
            .unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_unbounded_without_elitism_or_history() {
    let problem = Problem::from_pairs(&[(1, 10)], 5).unwrap();
    let options = EvolutionOptions::builder()
        .num_generations(40)
        .population_size(30)
        .elite_count(0)
        .track_history(false)
        .log_level(LogLevel::Minimal)
        .build();
    let mut launcher = EvolutionLauncher::new(problem, UnboundedStrategy)
        .with_seed(8)
        .with_options(options);

    let result = launcher.evolve().unwrap();
    assert!(result.history.is_none());
    assert!(result.genome.genes()[0] <= 5 || result.value == 0);
}

#[test]
fn test_zero_weight_items_are_rejected() {
    assert!(matches!(
        Problem::from_pairs(&[(0, 10), (1, 1)], 5),
        Err(GeneticError::InvalidProblem(_))
    ));
}

#[test]
fn test_unbounded_with_invalid_options() {
    let problem = Problem::from_pairs(&[(1, 10)], 5).unwrap();
    let mut launcher = EvolutionLauncher::unbounded(problem).with_seed(1);

    // One elite in a population of one leaves no room for offspring.
    let options = EvolutionOptions::builder()
        .population_size(1)
        .tournament_size(1)
        .elite_count(1)
        .build();
    *launcher.options_mut() = options;

    match launcher.evolve() {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Elite count")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_unbounded_population_of_one() {
    let problem = Problem::from_pairs(&[(1, 10)], 5).unwrap();
    let mut launcher = EvolutionLauncher::unbounded(problem).with_seed(3);

    let result = launcher.evolution(20, 1, 0.1).unwrap();
    assert_eq!(result.history.map(|h| h.len()), Some(20));
    assert_eq!(result.genome.len(), 1);
    assert_eq!(launcher.options().get_elite_count(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn test_result_round_trips_through_json() {
    let problem = Problem::from_pairs(&[(1, 10)], 5).unwrap();
    let result = EvolutionLauncher::unbounded(problem)
        .with_seed(2)
        .evolution(20, 10, 0.01)
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: knapsack_ga::EvolutionResult<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
