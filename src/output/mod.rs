//! Output strategies for trajectory points.
//!
//! The physics loop only talks to [`Plotter`]; what happens to the points
//! (printed, charted, animated) is up to the implementation.

pub mod animated;
pub mod chart;
pub mod text;

use crate::error::PlotError;

pub use animated::{AnimatedConfig, AnimatedPlotter, MarkerTrace, SurfacePoint, Truncation};
pub use chart::{ChartPlotter, TrajectorySeries};
pub use text::{TextFormat, TextPlotter};

/// Receives the points of one trajectory at a time.
///
/// `init` is called before the first point of a run and `finalise` once after
/// the last. Every point handed to `plot` lies strictly above sea level.
pub trait Plotter {
    fn init(&mut self) -> Result<(), PlotError> {
        Ok(())
    }

    fn plot(&mut self, x: f64, y: f64) -> Result<(), PlotError>;

    fn finalise(&mut self) -> Result<(), PlotError> {
        Ok(())
    }
}
