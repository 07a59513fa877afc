// File: crates/chart-core/tests/continuous.rs
// Purpose: Sliding-window length invariant and FIFO eviction order.

use livechart_core::{ContinuousSeries, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn window_length_never_changes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut w = ContinuousSeries::zeroed_window(30, 1.0);
    let mut expected: Vec<f64> = vec![0.0; 31];
    for _ in 0..500 {
        let y = rng.random_range(0.0..100.0);
        let evicted = w.shift_append_y(y);
        assert_eq!(evicted, expected.remove(0));
        expected.push(y);
        assert_eq!(w.len(), 31);
        assert_eq!(w.y_values(), expected.as_slice());
    }
}

#[test]
fn extrema_follow_the_window() {
    let mut w = ContinuousSeries::new(Series::from_y(&[50.0, 1.0, 2.0])).unwrap();
    w.shift_append_y(3.0);
    assert_eq!(w.bounds_y(), Some((1.0, 3.0)));
    w.shift_append_y(4.0);
    assert_eq!(w.bounds_y(), Some((2.0, 4.0)));
}

#[test]
fn x_values_stay_put_on_y_shift() {
    let mut w = ContinuousSeries::zeroed_window(3, 2.0);
    w.shift_append_y(7.0);
    assert_eq!(w.x_values(), Some(&[-6.0, -4.0, -2.0, 0.0][..]));
    assert_eq!(w.y_values(), &[0.0, 0.0, 0.0, 7.0]);
}

#[test]
fn single_sample_window() {
    let mut w = ContinuousSeries::zeroed_window(0, 1.0);
    assert_eq!(w.len(), 1);
    assert_eq!(w.shift_append_y(5.0), 0.0);
    assert_eq!(w.shift_append_y(6.0), 5.0);
    assert_eq!(w.average(), Some(6.0));
}
