use ml_drills::drills::{column_ramp, grid_1_to_25, pick_odd};

fn main() -> ml_drills::Result<()> {
    env_logger::init();

    println!("ones(4, 4) * arange(1, 5):");
    for row in &column_ramp(4)?.data {
        println!("  {:?}", row);
    }

    let grid = grid_1_to_25()?;
    println!("\narange(1, 26).reshape(5, 5):");
    for row in &grid.data {
        println!("  {:?}", row);
    }
    println!("\nodd entries: {:?}", pick_odd(&grid)?);
    Ok(())
}
