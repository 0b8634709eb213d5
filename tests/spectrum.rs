use fourier_sketch::data::drop_plan::DropPlan;
use fourier_sketch::data::points::{Point, PointSequence};
use fourier_sketch::data::spectrum::*;

fn coeffs() -> PointSequence {
    PointSequence::from_points([
        Point::new(10.0, 10.0),
        Point::new(3.0, 4.0),
        Point::new(0.0, 1.0),
        Point::new(0.0, 2.0),
        Point::new(6.0, 8.0),
    ])
}

#[test]
fn bins_sorted_by_frequency() {
    let c = coeffs();
    let freqs = vec![0, 1, 2, -2, -1];
    let bins = spectrum(&c, &freqs, &DropPlan::new(5, 0));
    let f: Vec<i64> = bins.iter().map(|b| b.frequency).collect();
    assert_eq!(f, vec![-2, -1, 0, 1, 2]);
    assert_eq!(bins[1].magnitude, 10.0);
    assert_eq!(bins[3].magnitude, 5.0);
    assert!(bins.iter().all(|b| b.active));
}

#[test]
fn dropped_bins_are_inactive() {
    let c = coeffs();
    let freqs = vec![0, 1, 2, -2, -1];
    // Dropping two terms on n=5 removes the +-2 pair.
    let bins = spectrum(&c, &freqs, &DropPlan::new(5, 2));
    let inactive: Vec<i64> = bins.iter().filter(|b| !b.active).map(|b| b.frequency).collect();
    assert_eq!(inactive, vec![-2, 2]);
    // DC stays active even with everything dropped.
    let bins = spectrum(&c, &freqs, &DropPlan::new(5, 50));
    assert_eq!(bins.iter().filter(|b| b.active).count(), 1);
    assert!(bins.iter().find(|b| b.frequency == 0).unwrap().active);
}

#[test]
fn decibels_are_floored() {
    assert_eq!(to_db(1.0), 0.0);
    assert!((to_db(10.0) - 20.0).abs() < 1e-12);
    assert!((to_db(0.0) + 240.0).abs() < 1e-9);
}
