use ml_drills::{cross_entropy, softmax};

fn main() -> ml_drills::Result<()> {
    env_logger::init();

    let logits = vec![1.0, 2.0, 3.0, 4.0];
    let probs = softmax(&logits)?;
    println!("softmax({:?})", logits);
    for (l, p) in logits.iter().zip(probs.iter()) {
        println!("  {l:>5.1} -> {p:.4}");
    }

    let labels = vec![1.0, 0.0, 1.0, 1.0];
    let predicted = vec![0.4, 0.6, 0.1, 0.5];
    let h = cross_entropy(&labels, &predicted)?;
    println!("\ncross_entropy(Y = {:?}, P = {:?}) = {h:.6}", labels, predicted);

    match cross_entropy(&[1.0], &[0.0]) {
        Ok(h) => println!("unexpected value {h}"),
        Err(e) => println!("cross_entropy([1], [0]) rejected: {e}"),
    }
    Ok(())
}
