use ml_drills::{accuracy_score, load_csv, DecisionTreeClassifier, DecisionTreeConfig, LabelColumn};

fn main() -> ml_drills::Result<()> {
    env_logger::init();

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data.csv");
    let (x, y) = load_csv(path, LabelColumn::Last)?;
    println!("Loaded {} samples with {} features from {path}", x.rows, x.cols);

    let mut model = DecisionTreeClassifier::new(DecisionTreeConfig::default());
    model.fit(&x, &y)?;
    let y_pred = model.predict(&x)?;
    let acc = accuracy_score(&y, &y_pred)?;

    println!("Tree depth: {}, leaves: {}", model.depth(), model.n_leaves());
    println!("Training accuracy: {:.2}%", acc * 100.0);
    Ok(())
}
