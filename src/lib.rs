//! Fourier sketch crate root: re-exports and module wiring.
//!
//! Draw a closed curve, take its discrete Fourier transform, and watch a chain
//! of rotating vectors ("epicycles") trace it back.
//!
//! - `data`: the numerical engine (points, transform, frequencies, closing-gap
//!   compensation, term selection, epicycle chain, orbit circles)
//! - `canvas`: the line-drawing seam plus offscreen and recording canvases
//! - `session`: toolkit-independent interactive state machine
//! - `config`: window, palette and session configuration
//! - `cli`: command-line seeding and coefficient table output
//! - `app`: egui/eframe window hosting a session

pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod data;
pub mod session;

// Public re-exports for a compact external API
pub use app::{run_sketch, SketchApp};
pub use canvas::{CanvasSize, ImageCanvas, LineCanvas, RecordingCanvas, Rgba, Segment};
pub use config::{SessionSettings, SketchConfig, SketchPalette};
pub use data::circle::draw_circle;
pub use data::dft::transform;
pub use data::drop_plan::DropPlan;
pub use data::epicycles::{EpicycleRenderer, TraceBuffer, SUBSTEPS};
pub use data::frequencies::assign_frequencies;
pub use data::gibbs::{compensate_closure, GibbsSettings};
pub use data::points::{Point, PointSequence, MAX_POINTS};
pub use session::{FrameInput, SketchSession};
