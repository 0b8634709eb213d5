use fourier_sketch::data::dft::transform;
use fourier_sketch::data::epicycles::{EpicycleRenderer, SUBSTEPS};
use fourier_sketch::data::frequencies::assign_frequencies;
use fourier_sketch::data::points::{Point, PointSequence};
use fourier_sketch::RecordingCanvas;

use rustfft::{num_complex::Complex, FftPlanner};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

// A lumpy closed-ish curve with no symmetry to hide sign mistakes.
fn sample_curve(n: usize) -> PointSequence {
    PointSequence::from_points((0..n).map(|k| {
        let t = k as f64 / n as f64 * std::f64::consts::TAU;
        Point::new(
            320.0 + 120.0 * t.cos() + 30.0 * (3.0 * t).sin() + k as f64,
            240.0 + 80.0 * t.sin() - 25.0 * (2.0 * t).cos(),
        )
    }))
}

#[test]
fn empty_curve_gives_empty_coefficients() {
    assert!(transform(&PointSequence::new()).is_empty());
}

#[test]
fn constant_curve_has_only_dc() {
    let p = Point::new(12.5, -7.0);
    let curve = PointSequence::from_points(std::iter::repeat(p).take(9));
    let coeffs = transform(&curve);
    assert_eq!(coeffs.len(), 9);
    assert!(close(coeffs[0].x, p.x, 1e-12));
    assert!(close(coeffs[0].y, p.y, 1e-12));
    for c in coeffs.iter().skip(1) {
        assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9, "{:?}", c);
    }
}

#[test]
fn single_point_is_its_own_coefficient() {
    let curve = PointSequence::from_points([Point::new(3.0, 4.0)]);
    let coeffs = transform(&curve);
    assert_eq!(coeffs.as_slice(), &[Point::new(3.0, 4.0)]);
}

#[test]
fn matches_normalised_inverse_fft() {
    for n in [2usize, 5, 16, 33] {
        let curve = sample_curve(n);
        let coeffs = transform(&curve);

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_inverse(n);
        let mut buf: Vec<Complex<f64>> = curve
            .iter()
            .map(|p| Complex { re: p.x, im: p.y })
            .collect();
        fft.process(&mut buf);

        for (i, (c, z)) in coeffs.iter().zip(buf.iter()).enumerate() {
            let (re, im) = (z.re / n as f64, z.im / n as f64);
            assert!(close(c.x, re, 1e-9), "n={} bin {}: {} vs {}", n, i, c.x, re);
            assert!(close(c.y, im, 1e-9), "n={} bin {}: {} vs {}", n, i, c.y, im);
        }
    }
}

#[test]
fn full_chain_reproduces_curve_at_sample_instants() {
    for n in [7usize, 8, 25] {
        let curve = sample_curve(n);
        let coeffs = transform(&curve);
        let freqs = assign_frequencies(n);
        let mut renderer = EpicycleRenderer::default();
        let mut canvas = RecordingCanvas::new();
        for frame in 0..(n * SUBSTEPS) as u64 {
            let tip = renderer
                .render_frame(&coeffs, &freqs, frame, 0, &mut canvas)
                .expect("coefficients are not empty");
            if frame % SUBSTEPS as u64 == 0 {
                let want = curve[frame as usize / SUBSTEPS];
                let ok = close(tip.x, want.x, 1e-6) && close(tip.y, want.y, 1e-6);
                assert!(ok, "n={} frame {}: {:?} vs {:?}", n, frame, tip, want);
            }
            canvas.clear();
        }
    }
}
