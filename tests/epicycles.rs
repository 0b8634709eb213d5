use fourier_sketch::data::epicycles::*;
use fourier_sketch::data::points::{Point, PointSequence};
use fourier_sketch::{RecordingCanvas, Rgba};

fn four_terms() -> (PointSequence, Vec<i64>) {
    let coeffs = PointSequence::from_points([
        Point::new(100.0, 100.0),
        Point::new(20.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(-8.0, 3.0),
    ]);
    (coeffs, vec![0, 1, -2, -1])
}

#[test]
fn rotate_matches_formula() {
    let a = Point::new(3.0, 4.0);
    let r = rotate(a, std::f64::consts::FRAC_PI_2);
    assert!((r.x - 4.0).abs() < 1e-12);
    assert!((r.y + 3.0).abs() < 1e-12);
    assert_eq!(rotate(a, 0.0), a);
}

#[test]
fn frame_zero_chain_is_a_plain_sum() {
    let (coeffs, freqs) = four_terms();
    let (links, tip) = evaluate_chain(&coeffs, &freqs, 0, 0);
    assert_eq!(links.iter().map(|l| l.index).collect::<Vec<_>>(), vec![1, 3, 2]);
    assert_eq!(links[0].origin, Point::new(100.0, 100.0));
    assert_eq!(links[1].origin, links[0].tip);
    assert_eq!(tip, Some(Point::new(112.0, 108.0)));
    assert_eq!(links[0].radius, 20.0);
}

#[test]
fn empty_coefficients_render_nothing() {
    let mut renderer = EpicycleRenderer::default();
    let mut canvas = RecordingCanvas::new();
    let tip = renderer.render_frame(&PointSequence::new(), &[], 0, 0, &mut canvas);
    assert!(tip.is_none());
    assert!(canvas.lines.is_empty());
    assert_eq!(renderer.trace.count(), 0);
}

#[test]
fn each_vector_is_drawn_with_its_orbit() {
    let (coeffs, freqs) = four_terms();
    let mut renderer = EpicycleRenderer::default();
    let mut canvas = RecordingCanvas::new();
    renderer.render_frame(&coeffs, &freqs, 3, 0, &mut canvas);
    let colors = ChainColors::default();
    assert_eq!(canvas.count_with(colors.vector), 3);
    assert!(canvas.count_with(colors.orbit) > 0);
    // Every orbit segment count is a multiple of the four reflections.
    assert_eq!(canvas.count_with(colors.orbit) % 4, 0);
}

#[test]
fn orbits_are_centered_on_each_link_origin() {
    let (coeffs, freqs) = four_terms();
    let (links, _) = evaluate_chain(&coeffs, &freqs, 0, 0);
    let mut renderer = EpicycleRenderer::default();
    let mut canvas = RecordingCanvas::new();
    renderer.render_frame(&coeffs, &freqs, 0, 0, &mut canvas);

    let orbit = ChainColors::default().orbit;
    let segs: Vec<_> = canvas
        .lines
        .iter()
        .filter(|(c, _)| *c == orbit)
        .map(|(_, s)| *s)
        .collect();
    let mut rest = segs.as_slice();
    for link in &links {
        let per_circle = 4 * (link.radius as usize + 1);
        let (circle, tail) = rest.split_at(per_circle);
        rest = tail;
        let xs = circle.iter().flat_map(|s| [s.x0, s.x1]);
        let ys = circle.iter().flat_map(|s| [s.y0, s.y1]);
        let (o, r) = (link.origin, link.radius);
        assert_eq!(xs.clone().max(), Some((o.x + r) as i32), "link {}", link.index);
        assert_eq!(xs.min(), Some((o.x - r) as i32), "link {}", link.index);
        assert_eq!(ys.clone().max(), Some((o.y + r) as i32), "link {}", link.index);
        assert_eq!(ys.min(), Some((o.y - r) as i32), "link {}", link.index);
    }
    assert!(rest.is_empty());
}

#[test]
fn dropped_terms_are_not_drawn() {
    let (coeffs, freqs) = four_terms();
    let mut renderer = EpicycleRenderer::new(ChainColors {
        vector: Rgba::rgb(1, 2, 3),
        orbit: Rgba::rgb(4, 5, 6),
    });
    let mut canvas = RecordingCanvas::new();
    renderer.render_frame(&coeffs, &freqs, 0, 2, &mut canvas);
    assert_eq!(canvas.count_with(Rgba::rgb(1, 2, 3)), 1);
}

#[test]
fn trace_wraps_after_four_n_frames() {
    let (coeffs, freqs) = four_terms();
    let mut renderer = EpicycleRenderer::default();
    let mut canvas = RecordingCanvas::new();
    let mut tips = Vec::new();
    for frame in 0..20u64 {
        tips.push(renderer.render_frame(&coeffs, &freqs, frame, 0, &mut canvas).unwrap());
    }
    assert_eq!(renderer.trace.capacity(), 16);
    assert_eq!(renderer.trace.count(), 20);
    assert_eq!(renderer.trace.len(), 16);
    assert_eq!(renderer.trace.write_index(), 4);
    let kept: Vec<Point> = renderer.trace.iter_chronological().collect();
    assert_eq!(kept, tips[4..].to_vec());

    let tip = renderer.render_frame(&coeffs, &freqs, 20, 0, &mut canvas).unwrap();
    assert_eq!(renderer.trace.slot(4), Some(tip));
    assert_eq!(renderer.trace.iter_chronological().last(), Some(tip));
}

#[test]
fn trace_buffer_basics() {
    let mut trace = TraceBuffer::new(3);
    assert!(trace.is_empty());
    assert_eq!(trace.push(Point::new(1.0, 0.0)), Some(0));
    assert_eq!(trace.push(Point::new(2.0, 0.0)), Some(1));
    assert_eq!(
        trace.iter_chronological().map(|p| p.x).collect::<Vec<_>>(),
        vec![1.0, 2.0]
    );
    trace.push(Point::new(3.0, 0.0));
    assert_eq!(trace.push(Point::new(4.0, 0.0)), Some(0));
    assert_eq!(
        trace.iter_chronological().map(|p| p.x).collect::<Vec<_>>(),
        vec![2.0, 3.0, 4.0]
    );
    trace.clear();
    assert_eq!(trace.count(), 0);
    assert_eq!(trace.write_index(), 0);
}

#[test]
fn zero_capacity_trace_ignores_pushes() {
    let mut trace = TraceBuffer::new(0);
    assert_eq!(trace.push(Point::ZERO), None);
    assert!(trace.is_empty());
}

#[test]
fn trace_is_resized_to_match_coefficients() {
    let (coeffs, freqs) = four_terms();
    let mut renderer = EpicycleRenderer::default();
    renderer.reset(10);
    renderer.trace.push(Point::ZERO);
    let mut canvas = RecordingCanvas::new();
    renderer.render_frame(&coeffs, &freqs, 0, 0, &mut canvas);
    assert_eq!(renderer.trace.capacity(), 4 * SUBSTEPS);
    assert_eq!(renderer.trace.count(), 1);
}
