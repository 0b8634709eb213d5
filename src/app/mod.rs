//! Native window hosting a [`SketchSession`](crate::session::SketchSession).
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | `sketch_app`      | [`SketchApp`] (eframe) wrapper: input sampling, frame pacing |
//! | `spectrum_panel`  | Bottom panel plotting magnitude per frequency (`spectrum` feature) |
//! | `run`             | Top-level [`run_sketch()`] entry point |

mod run;
mod sketch_app;
#[cfg(feature = "spectrum")]
mod spectrum_panel;

pub use run::run_sketch;
pub use sketch_app::SketchApp;
