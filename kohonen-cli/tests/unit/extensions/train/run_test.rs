use super::*;
use std::sync::Arc;

fn create_params(grid_size: usize, iterations: usize) -> TrainParams {
    TrainParams {
        grid_size,
        dimension: 3,
        inputs: 4,
        training: TrainingConfig {
            iterations,
            initial_radius: 3.,
            learning_rate: 0.2,
            selection: SelectionMode::Random,
        },
        seed: Some(0),
        max_time: None,
    }
}

fn create_environment(seed: u64) -> Environment {
    Environment { logger: Arc::new(|_| {}), ..Environment::new_repeatable(seed) }
}

#[test]
fn can_run_training() {
    let (network, report) = run_training(&create_params(6, 200), &create_environment(0)).unwrap();

    assert_eq!(network.shape(), (6, 6));
    assert_eq!(network.dimension(), 3);
    assert_eq!(report.iterations, 200);
    assert_eq!(report.termination, TerminationReason::Completed);
}

#[test]
fn can_repeat_training_with_same_seed() {
    let (first, _) = run_training(&create_params(5, 100), &create_environment(3)).unwrap();
    let (second, _) = run_training(&create_params(5, 100), &create_environment(3)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn can_report_invalid_grid_size() {
    let result = run_training(&create_params(0, 100), &create_environment(0));

    let expected = SomError::Configuration("grid size must be positive, got 0x0".to_string());
    assert_eq!(result.unwrap_err(), GenericError::from(expected));
}
