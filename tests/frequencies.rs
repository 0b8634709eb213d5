use fourier_sketch::data::frequencies::*;

#[test]
fn five_bins() {
    assert_eq!(assign_frequencies(5), vec![0, 1, 2, -2, -1]);
}

#[test]
fn six_bins() {
    assert_eq!(assign_frequencies(6), vec![0, 1, 2, -3, -2, -1]);
}

#[test]
fn degenerate_sizes() {
    assert!(assign_frequencies(0).is_empty());
    assert_eq!(assign_frequencies(1), vec![0]);
    assert_eq!(assign_frequencies(2), vec![0, -1]);
}

#[test]
fn half_n_rounds_up() {
    assert_eq!(half_n(0), 0);
    assert_eq!(half_n(1), 1);
    assert_eq!(half_n(5), 3);
    assert_eq!(half_n(6), 3);
}

#[test]
fn bins_cover_expected_set() {
    for n in 1..64usize {
        let freqs = assign_frequencies(n);
        assert_eq!(freqs.len(), n);
        let half = half_n(n) as i64;
        let mut sorted = freqs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), n, "duplicates for n={}", n);
        let mut expected: Vec<i64> = (-(n as i64 - half)..0).chain(0..half).collect();
        expected.sort();
        assert_eq!(sorted, expected, "n={}", n);
        // Bin i and its frequency agree modulo n, which is what makes the
        // reconstruction exact.
        for (i, f) in freqs.iter().enumerate() {
            assert_eq!((f - i as i64).rem_euclid(n as i64), 0);
        }
    }
}
