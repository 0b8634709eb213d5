pub mod circle;
pub mod dft;
pub mod drop_plan;
pub mod epicycles;
pub mod frequencies;
pub mod gibbs;
pub mod points;
pub mod spectrum;
