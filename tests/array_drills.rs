use ml_drills::drills::{column_ramp, grid_1_to_25, odd_entries, pick_odd};
use ml_drills::Matrix;

#[test]
fn column_ramp_of_four() {
    let m = column_ramp(4).unwrap();
    for j in 0..4 {
        assert_eq!(m.column(j), vec![(j + 1) as f64; 4]);
    }
}

#[test]
fn grid_is_row_major() {
    let grid = grid_1_to_25().unwrap();
    assert_eq!((grid.rows, grid.cols), (5, 5));
    assert_eq!(grid.row(0), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(grid.row(4), &[21.0, 22.0, 23.0, 24.0, 25.0]);
}

#[test]
fn odd_numbers_up_to_25() {
    let odd = odd_entries().unwrap();
    assert_eq!(odd.len(), 13);
    assert_eq!(odd.first(), Some(&1.0));
    assert_eq!(odd.last(), Some(&25.0));
    assert!(odd.windows(2).all(|w| w[1] - w[0] == 2.0));
}

#[test]
fn pick_odd_on_an_all_even_matrix_is_empty() {
    let evens = Matrix::arange(0, 8).map(|x| x * 2.0).reshape(2, 4).unwrap();
    assert!(pick_odd(&evens).unwrap().is_empty());
}
