use super::*;
use crate::helpers::algorithms::som::*;
use crate::helpers::utils::create_environment_with_quota;
use crate::helpers::utils::random::FakeRandom;
use std::sync::Arc;

fn create_config(
    iterations: usize,
    initial_radius: Float,
    learning_rate: Float,
    selection: SelectionMode,
) -> TrainingConfig {
    TrainingConfig { iterations, initial_radius, learning_rate, selection }
}

#[test]
fn can_return_initial_value_at_zero_iteration() {
    assert_eq!(decay(0.7, 0, 10.), 0.7);
    assert_eq!(decay(25., 0, 310.6), 25.);
}

#[test]
fn can_decay_strictly_with_iterations() {
    let values = (0..100).map(|iteration| decay(5., iteration, 30.)).collect::<Vec<_>>();

    assert!(values.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn can_calculate_time_constant() {
    assert!((time_constant(1000, std::f64::consts::E) - 1000.).abs() < 1E-9);
    assert!((time_constant(100, 2.) - 100. / 2_f64.ln()).abs() < 1E-9);
}

parameterized_test! {can_reject_invalid_config, (iterations, initial_radius, learning_rate), {
    let config = create_config(iterations, initial_radius, learning_rate, SelectionMode::Sequential);

    assert!(matches!(config.validate(), Err(SomError::Configuration(_))));
}}

can_reject_invalid_config! {
    case01_radius_one: (100, 1., 0.1),
    case02_radius_below_one: (100, 0.5, 0.1),
    case03_radius_nan: (100, Float::NAN, 0.1),
    case04_zero_iterations: (0, 2., 0.1),
    case05_zero_learning_rate: (100, 2., 0.),
    case06_negative_learning_rate: (100, 2., -0.5),
}

#[test]
fn can_reject_radius_of_one_without_touching_network() {
    let mut network = create_test_network();
    let before = get_all_weights(&network);
    let config = create_config(10, 1., 0.5, SelectionMode::Sequential);

    let result = train(&mut network, &[vec![1., 1.]], &config, &create_test_environment(0));

    assert!(matches!(result, Err(SomError::Configuration(_))));
    assert_eq!(get_all_weights(&network), before);
}

#[test]
fn can_leave_network_unchanged_with_zero_iterations() {
    let mut network = create_test_network();
    let before = network.clone();
    let config = create_config(0, 2., 0.5, SelectionMode::Sequential);

    let result = train(&mut network, &[vec![1., 1.]], &config, &create_test_environment(0));

    assert!(matches!(result, Err(SomError::Configuration(_))));
    assert_eq!(network, before);
}

#[test]
fn can_reject_empty_dataset() {
    let mut network = create_test_network();
    let dataset: Vec<Vec<Float>> = vec![];
    let config = create_config(10, 2., 0.5, SelectionMode::Random);

    let result = train(&mut network, dataset.as_slice(), &config, &create_test_environment(0));

    assert_eq!(result.unwrap_err(), SomError::EmptyDataset);
}

#[test]
fn can_reject_dataset_with_dimension_mismatch_before_training() {
    let mut network = create_test_network();
    let before = get_all_weights(&network);
    let dataset = vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5]];
    let config = create_config(10, 2., 0.5, SelectionMode::Sequential);

    let result = train(&mut network, dataset.as_slice(), &config, &create_test_environment(0));

    assert_eq!(result.unwrap_err(), SomError::DimensionMismatch { expected: 2, actual: 1 });
    assert_eq!(get_all_weights(&network), before);
}

#[test]
fn can_converge_single_node_to_single_input() {
    let environment = create_test_environment(1);
    let mut network = Network::new_random(1, 2, environment.random.as_ref()).unwrap();
    let config = create_config(100, 2., 0.9, SelectionMode::Sequential);

    let report = train(&mut network, &[[1., 1.]], &config, &environment).unwrap();

    assert_eq!(report.iterations, 100);
    assert_eq!(report.termination, TerminationReason::Completed);
    network.weights(0, 0).unwrap().iter().for_each(|weight| assert!((weight - 1.).abs() < 0.01));
}

parameterized_test! {can_separate_two_clusters, (selection, seed), {
    can_separate_two_clusters_impl(selection, seed);
}}

can_separate_two_clusters! {
    case01_sequential: (SelectionMode::Sequential, 0),
    case02_sequential_other_seed: (SelectionMode::Sequential, 42),
    case03_random: (SelectionMode::Random, 7),
}

fn can_separate_two_clusters_impl(selection: SelectionMode, seed: u64) {
    let environment = create_test_environment(seed);
    let mut network = Network::new_random_with_shape(2, 1, 2, environment.random.as_ref()).unwrap();
    let dataset = vec![[0.0, 0.0], [1.0, 1.0], [0.1, 0.1], [0.9, 0.9]];
    let config = create_config(1000, 2., 0.5, selection);

    train(&mut network, dataset.as_slice(), &config, &environment).unwrap();

    let low = [network.find_bmu(&dataset[0]).unwrap(), network.find_bmu(&dataset[2]).unwrap()];
    let high = [network.find_bmu(&dataset[1]).unwrap(), network.find_bmu(&dataset[3]).unwrap()];
    assert_eq!(low[0], low[1]);
    assert_eq!(high[0], high[1]);
    assert_ne!(low[0], high[0]);

    let low_node = network.node(low[0]).unwrap();
    let high_node = network.node(high[0]).unwrap();
    let (low_centroid, high_centroid) = ([0.05, 0.05], [0.95, 0.95]);
    assert!(low_node.distance(&low_centroid) < high_node.distance(&low_centroid));
    assert!(high_node.distance(&high_centroid) < low_node.distance(&high_centroid));
}

#[test]
fn can_select_inputs_sequentially() {
    // NOTE every node starts at the origin and each input pulls exactly one distinct corner
    let mut network = Network::from_weights(1, 1, vec![vec![0., 0.]]).unwrap();
    let dataset = vec![[1., 0.], [0., 1.]];
    let config = create_config(2, 2., 0.5, SelectionMode::Sequential);

    train(&mut network, dataset.as_slice(), &config, &create_test_environment(0)).unwrap();

    let learning_rate = decay(0.5, 1, 2.);
    let weights = network.weights(0, 0).unwrap();
    assert!((weights[0] - 0.5 * (1. - learning_rate)).abs() < 1E-9);
    assert!((weights[1] - learning_rate).abs() < 1E-9);
}

#[test]
fn can_select_inputs_randomly_with_one_draw_per_iteration() {
    let environment =
        Environment { random: Arc::new(FakeRandom::new(vec![1, 1, 1], vec![])), ..create_test_environment(0) };
    let mut network = Network::from_weights(1, 1, vec![vec![0., 0.]]).unwrap();
    let dataset = vec![[1., 0.], [0., 1.]];
    let config = create_config(3, 2., 0.5, SelectionMode::Random);

    let report = train(&mut network, dataset.as_slice(), &config, &environment).unwrap();

    assert_eq!(report.iterations, 3);
    let weights = network.weights(0, 0).unwrap();
    assert_eq!(weights[0], 0.);
    assert!(weights[1] > 0.);
}

#[test]
fn can_train_with_early_stop_same_as_sequential() {
    let train_with = |selection: SelectionMode| {
        let environment = create_test_environment(3);
        let mut network = Network::new_random(4, 2, environment.random.as_ref()).unwrap();
        let config = create_config(50, 3., 0.3, selection);

        let report = train(&mut network, &[[0.2, 0.8], [0.7, 0.1], [0.5, 0.5]], &config, &environment).unwrap();

        (network, report)
    };

    let (sequential, sequential_report) = train_with(SelectionMode::Sequential);
    let (early_stop, early_stop_report) = train_with(SelectionMode::SequentialWithEarlyStop);

    assert_eq!(early_stop, sequential);
    assert_eq!(early_stop_report.iterations, sequential_report.iterations);
    assert_eq!(early_stop_report.termination, TerminationReason::Completed);
}

#[test]
fn can_train_with_initial_radius_much_larger_than_grid() {
    let environment = create_test_environment(5);
    let mut network = Network::new_random(3, 2, environment.random.as_ref()).unwrap();
    let before = network.clone();
    let config = create_config(10, 1e10, 0.5, SelectionMode::Sequential);
    let input = [0.2, 0.8];

    let report = train(&mut network, &[input], &config, &environment).unwrap();

    assert_eq!(report.iterations, 10);
    assert_eq!(report.termination, TerminationReason::Completed);
    network.iter().zip(before.iter()).for_each(|((_, after), (_, before))| {
        assert!(after.distance(&input) < before.distance(&input));
    });
}

#[test]
fn can_stop_when_quota_is_reached() {
    let environment = create_environment_with_quota(0, 5);
    let mut network = Network::new_random(3, 2, environment.random.as_ref()).unwrap();
    let config = create_config(100, 2., 0.3, SelectionMode::Sequential);

    let report = train(&mut network, &[[0.2, 0.8]], &config, &environment).unwrap();

    assert_eq!(report.iterations, 5);
    assert_eq!(report.termination, TerminationReason::QuotaReached);
}

#[test]
fn can_leave_network_unchanged_when_quota_is_reached_immediately() {
    let environment = create_environment_with_quota(0, 0);
    let mut network = Network::new_random(3, 2, environment.random.as_ref()).unwrap();
    let before = network.clone();
    let config = create_config(100, 2., 0.3, SelectionMode::Random);

    let report = train(&mut network, &[[0.2, 0.8]], &config, &environment).unwrap();

    assert_eq!(report.iterations, 0);
    assert_eq!(network, before);
}

#[test]
fn can_log_training_progress() {
    let (logger, messages) = create_recording_logger();
    let environment = Environment { logger, ..create_test_environment(0) };
    let mut network = Network::new_random(2, 2, environment.random.as_ref()).unwrap();
    let config = create_config(20, 2., 0.3, SelectionMode::Sequential);

    train(&mut network, &[[0.2, 0.8]], &config, &environment).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 12);
    assert!(messages.first().unwrap().starts_with("training 2x2 network on 1 inputs"));
    assert!(messages.last().unwrap().starts_with("training finished"));
}

#[test]
fn can_display_selection_mode() {
    assert_eq!(SelectionMode::Sequential.to_string(), "sequential");
    assert_eq!(SelectionMode::SequentialWithEarlyStop.to_string(), "sequential-early-stop");
    assert_eq!(SelectionMode::Random.to_string(), "random");
}
