use std::path::PathBuf;

use ml_drills::{
    accuracy_score, load_csv, DecisionTreeClassifier, DecisionTreeConfig, LabelColumn, Matrix,
    MlError, SplitCriterion,
};

fn data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("data.csv")
}

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("ml_drills_{}_{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn unlimited_tree_fits_training_data_perfectly() {
    let (x, y) = load_csv(data_path(), LabelColumn::Last).unwrap();
    assert_eq!(x.cols, 2);
    assert_eq!(x.rows, y.len());

    let mut model = DecisionTreeClassifier::new(DecisionTreeConfig::default());
    model.fit(&x, &y).unwrap();
    let y_pred = model.predict(&x).unwrap();

    assert_eq!(accuracy_score(&y, &y_pred).unwrap(), 1.0);
    assert_eq!(model.classes(), &[0.0, 1.0]);
}

#[test]
fn predictions_only_contain_fitted_classes() {
    let (x, y) = load_csv(data_path(), LabelColumn::Last).unwrap();
    let mut model = DecisionTreeClassifier::new(DecisionTreeConfig::default().with_max_depth(2));
    model.fit(&x, &y).unwrap();

    let unseen = Matrix::from_data(vec![
        vec![-5.0, -5.0],
        vec![0.5, 0.5],
        vec![0.95, 0.05],
        vec![42.0, 0.0],
    ]).unwrap();
    for label in model.predict(&unseen).unwrap() {
        assert!(model.classes().contains(&label));
    }
    assert!(model.depth() <= 2);
    assert!(model.n_leaves() <= 4);
}

#[test]
fn probabilities_rows_sum_to_one() {
    let (x, y) = load_csv(data_path(), LabelColumn::Last).unwrap();
    let config = DecisionTreeConfig::default()
        .with_criterion(SplitCriterion::Entropy)
        .with_max_depth(3);
    let mut model = DecisionTreeClassifier::new(config);
    model.fit(&x, &y).unwrap();

    let proba = model.predict_proba(&x).unwrap();
    assert_eq!((proba.rows, proba.cols), (x.rows, 2));
    for row in &proba.data {
        assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn seeded_feature_order_is_reproducible() {
    let (x, y) = load_csv(data_path(), LabelColumn::Last).unwrap();
    let fit = |seed| {
        let mut model = DecisionTreeClassifier::new(DecisionTreeConfig::default().with_random_state(seed));
        model.fit(&x, &y).unwrap();
        model
    };
    assert_eq!(fit(11).nodes(), fit(11).nodes());
}

#[test]
fn saved_tree_predicts_identically_after_reload() {
    let (x, y) = load_csv(data_path(), LabelColumn::Last).unwrap();
    let mut model = DecisionTreeClassifier::new(DecisionTreeConfig::default().with_max_depth(4));
    model.fit(&x, &y).unwrap();

    let path = temp_path("tree.json");
    model.save_json(&path).unwrap();
    let reloaded = DecisionTreeClassifier::load_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded.config(), model.config());
    assert_eq!(reloaded.predict(&x).unwrap(), model.predict(&x).unwrap());
}

#[test]
fn config_round_trips_through_json() {
    let config = DecisionTreeConfig::default()
        .with_criterion(SplitCriterion::Entropy)
        .with_max_depth(5)
        .with_random_state(3);
    let path = temp_path("config.json");
    config.save_json(&path).unwrap();
    let loaded = DecisionTreeConfig::load_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_csv("/definitely/not/here.csv", LabelColumn::Last).unwrap_err();
    assert!(matches!(err, MlError::Io(_)));
}
