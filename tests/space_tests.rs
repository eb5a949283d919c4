use searchspace::prelude::*;

/// Search space of the CNN benchmark: a mix of geometric, arithmetic,
/// continuous, and categorical hyperparameters.
fn cnn_space() -> SearchSpace {
    let mut space = SearchSpace::new();
    space
        .add(
            DiscreteParameter::new("batch_size", 8.0, 1024.0)
                .geometric(2.0)
                .representation(DiscreteRepresentationType::Index),
        )
        .unwrap();
    space
        .add(DiscreteParameter::new("nunits", 32.0, 512.0).step(32.0))
        .unwrap();
    space
        .add(DiscreteParameter::new("f1_size", 1.0, 7.0).step(2.0))
        .unwrap();
    space
        .add(ContinuousParameter::new("dropout", 0.0, 0.5))
        .unwrap();
    space
        .add(ContinuousParameter::new("learning_rate", 1e-5, 1e-1).log_scale())
        .unwrap();
    space
        .add(CategoricalParameter::new(
            "activation",
            vec![
                "relu".to_string(),
                "sigmoid".to_string(),
                "tanh".to_string(),
            ],
        ))
        .unwrap();
    space
}

#[test]
fn space_validates_before_search() {
    let space = cnn_space();
    space.validate().unwrap();
    assert_eq!(space.len(), 6);
}

#[test]
fn space_rejects_duplicate_names() {
    let mut space = cnn_space();
    let err = space
        .add(ContinuousParameter::new("dropout", 0.0, 0.9))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateParameter(name) if name == "dropout"));
}

#[test]
fn invalid_member_stops_space_validation() {
    let mut space = cnn_space();
    space
        .add(DiscreteParameter::new("f2_size", 7.0, 1.0).step(2.0))
        .unwrap();
    assert!(space.validate().is_err());
}

#[test]
fn optimizer_adapter_decodes_index_representation() {
    let space = cnn_space();
    let batch = space.require("batch_size").unwrap().as_discrete().unwrap();
    assert_eq!(batch.repr_type(), DiscreteRepresentationType::Index);

    // An index-encoded optimizer sizes its domain once, then decodes per trial.
    let n_values = batch.n_values();
    assert_eq!(n_values, 8);
    let decoded: Vec<f64> = (0..n_values)
        .map(|n| batch.map_to_interval(u32::try_from(n).unwrap()).unwrap())
        .collect();
    assert_eq!(decoded, batch.interval_list());
}

#[test]
fn space_builds_benchmark_configuration() {
    let space = cnn_space();
    space.validate().unwrap();

    // Decode one trial proposal into the plain configuration a benchmark
    // training script consumes.
    let batch = space.require("batch_size").unwrap().as_discrete().unwrap();
    let units = space.require("nunits").unwrap().as_discrete().unwrap();
    let dropout = space.require("dropout").unwrap().as_continuous().unwrap();
    let act = space.require("activation").unwrap().as_categorical().unwrap();

    assert_eq!(batch.map_to_interval(4).unwrap(), 128.0);
    assert_eq!(units.map_to_interval(3).unwrap(), 128.0);
    assert!((dropout.from_unit(0.5).unwrap() - 0.25).abs() < 1e-12);
    assert_eq!(act.map_to_choice(0).unwrap(), "relu");
}

#[test]
fn unknown_parameter_lookup_is_an_error() {
    let space = cnn_space();
    assert!(matches!(
        space.require("weight_decay"),
        Err(Error::UnknownParameter(name)) if name == "weight_decay"
    ));
}

#[test]
fn iteration_order_is_deterministic() {
    let first: Vec<String> = cnn_space().names().map(str::to_owned).collect();
    let second: Vec<String> = cnn_space().names().map(str::to_owned).collect();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
}
