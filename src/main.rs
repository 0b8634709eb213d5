use fourier_sketch::cli::{format_transform_table, parse_seed_points};
use fourier_sketch::{run_sketch, SketchConfig, SketchSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = SketchConfig::from_env();
    let mut session = SketchSession::from_config(&cfg);

    let seed = parse_seed_points(std::env::args().skip(1));
    if !seed.is_empty() {
        session.seed(seed);
        print!(
            "{}",
            format_transform_table(session.coefficients(), session.frequencies())
        );
    }

    if let Err(e) = run_sketch(cfg, session) {
        log::error!("failed to run sketch window: {e}");
        return Err(e.into());
    }
    Ok(())
}
