use fourier_sketch::cli::*;
use fourier_sketch::data::dft::transform;
use fourier_sketch::data::frequencies::assign_frequencies;
use fourier_sketch::data::points::{Point, PointSequence};

#[test]
fn coordinates_pair_up() {
    let pts = parse_seed_points(["1", "2", "-3", "4"]);
    assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(-3.0, 4.0)]);
}

#[test]
fn trailing_coordinate_is_ignored() {
    let pts = parse_seed_points(["10", "20", "30"]);
    assert_eq!(pts, vec![Point::new(10.0, 20.0)]);
}

#[test]
fn no_arguments_no_points() {
    assert!(parse_seed_points(Vec::<String>::new()).is_empty());
}

#[test]
fn lenient_integer_parsing() {
    assert_eq!(parse_coordinate("42"), 42);
    assert_eq!(parse_coordinate("  -7"), -7);
    assert_eq!(parse_coordinate("+5"), 5);
    assert_eq!(parse_coordinate("12abc"), 12);
    assert_eq!(parse_coordinate("3.9"), 3);
    assert_eq!(parse_coordinate("abc"), 0);
    assert_eq!(parse_coordinate("-"), 0);
    assert_eq!(parse_coordinate(""), 0);
}

#[test]
fn table_lists_bins_in_index_order() {
    let curve = PointSequence::from_points([
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
    ]);
    let coeffs = transform(&curve);
    let freqs = assign_frequencies(coeffs.len());
    let table = format_transform_table(&coeffs, &freqs);
    assert!(table.starts_with(
        "Fourier transform of entered points:\nfrequency\tamplitude x\tamplitude y\n"
    ));

    let rows: Vec<&str> = table.lines().skip(TRANSFORM_TABLE_HEADER.lines().count()).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("0\t2.666667\t1.333333"), "{}", rows[0]);
    assert!(rows[1].starts_with("1\t"));
    assert!(rows[2].starts_with("-1\t"));
    for row in rows {
        assert_eq!(row.split('\t').count(), 3);
    }
}
