use super::*;

#[test]
fn can_calculate_squared_distance_to_input() {
    let node = Node::new(vec![0.5, 0.5, 0.5]);

    assert!((node.distance(&[1., 0., 0.5]) - 0.5).abs() < 1E-9);
    assert_eq!(node.distance(&[0.5, 0.5, 0.5]), 0.);
}

parameterized_test! {can_adjust_weights_towards_target, (influence, expected), {
    can_adjust_weights_towards_target_impl(influence, expected);
}}

can_adjust_weights_towards_target! {
    case01_no_influence: (0., vec![0.2, 0.8]),
    case02_half_influence: (0.5, vec![0.6, 0.4]),
    case03_full_influence: (1., vec![1., 0.]),
}

fn can_adjust_weights_towards_target_impl(influence: Float, expected: Vec<Float>) {
    let mut node = Node::new(vec![0.2, 0.8]);

    node.adjust(&[1., 0.], influence);

    node.weights().iter().zip(expected.iter()).for_each(|(actual, expected)| {
        assert!((actual - expected).abs() < 1E-9);
    });
}

#[test]
fn can_move_closer_to_input_with_partial_influence() {
    let input = [0.9, 0.1, 0.4];
    let mut node = Node::new(vec![0.1, 0.7, 0.3]);
    let before = node.distance(&input);

    node.adjust(&input, 0.3);

    assert!(node.distance(&input) < before);
    assert_eq!(node.dimension(), 3);
}

#[test]
fn can_display_coordinate() {
    let coordinate = Coordinate(3, 7);

    assert_eq!(coordinate.to_string(), "(3,7)");
    assert_eq!((coordinate.row(), coordinate.col()), (3, 7));
}
