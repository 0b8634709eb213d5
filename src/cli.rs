//! Command-line seeding: coordinate pairs in, coefficient table out.

use std::fmt::Write as _;

use crate::data::points::{Point, PointSequence};

/// Header printed above the coefficient rows.
pub const TRANSFORM_TABLE_HEADER: &str =
    "Fourier transform of entered points:\nfrequency\tamplitude x\tamplitude y";

/// Parse an integer coordinate leniently: surrounding whitespace is ignored,
/// a valid leading integer is used even if junk follows it, and anything
/// without one yields `0`.
pub fn parse_coordinate(s: &str) -> i64 {
    let t = s.trim_start();
    if let Ok(v) = t.trim_end().parse::<i64>() {
        return v;
    }
    let bytes = t.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let value = if end > digits_start {
        t[..end].parse::<i64>().unwrap_or(0)
    } else {
        0
    };
    log::warn!("coordinate {:?} is not an integer, using {}", s, value);
    value
}

/// Turn positional arguments into points, two coordinates per point. A
/// trailing unpaired coordinate is ignored.
pub fn parse_seed_points<I, S>(args: I) -> Vec<Point>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() % 2 == 1 {
        log::warn!("ignoring unpaired trailing coordinate {:?}", args[args.len() - 1].as_ref());
    }
    args.chunks_exact(2)
        .map(|pair| {
            Point::new(
                parse_coordinate(pair[0].as_ref()) as f64,
                parse_coordinate(pair[1].as_ref()) as f64,
            )
        })
        .collect()
}

/// Coefficient table in index order: header, then one
/// `frequency\tamplitude x\tamplitude y` row per bin.
pub fn format_transform_table(coeffs: &PointSequence, freqs: &[i64]) -> String {
    let mut out = String::from(TRANSFORM_TABLE_HEADER);
    out.push('\n');
    for (i, c) in coeffs.iter().enumerate() {
        let f = freqs.get(i).copied().unwrap_or(0);
        let _ = writeln!(out, "{}\t{:.6}\t{:.6}", f, c.x, c.y);
    }
    out
}
