//! Animated back-end: turns trajectory points into marker moves on a pixel
//! surface.
//!
//! Coordinates are scaled down by an integer factor with integer division, so
//! consecutive points that land on the same pixel collapse into one move. The
//! recorded traces are replayed by a window front-end.

use clap::ValueEnum;
use tracing::debug;

use crate::error::PlotError;
use crate::output::Plotter;

/// Rounding applied by the integer division of world metres into pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Truncation {
    /// Round towards negative infinity.
    #[default]
    Floor,
    TowardZero,
}

impl Truncation {
    pub fn scale(self, value_m: f64, scale_factor: i64) -> i64 {
        match self {
            Truncation::Floor => (value_m.floor() as i64).div_euclid(scale_factor),
            Truncation::TowardZero => (value_m.trunc() as i64) / scale_factor,
        }
    }
}

/// Pixel position on the drawing surface: origin bottom-left, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfacePoint {
    pub x: i64,
    pub y: i64,
}

impl SurfacePoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimatedConfig {
    /// Metres per pixel.
    pub scale_factor: i64,
    pub truncation: Truncation,
    /// Where the marker sits when a run begins. Lifted off the bottom edge so
    /// the start and end of a trajectory stay visible.
    pub start: SurfacePoint,
}

impl Default for AnimatedConfig {
    fn default() -> Self {
        Self {
            scale_factor: 10,
            truncation: Truncation::Floor,
            start: SurfacePoint::new(0, 10),
        }
    }
}

/// The marker path of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerTrace {
    pub start: SurfacePoint,
    /// Marker positions in order, each different from the one before.
    pub moves: Vec<SurfacePoint>,
    /// Points received, including those that did not move the marker.
    pub plotted: usize,
    pub finished: bool,
}

impl MarkerTrace {
    fn new(start: SurfacePoint) -> Self {
        Self {
            start,
            ..Default::default()
        }
    }

    pub fn position(&self) -> SurfacePoint {
        self.moves.last().copied().unwrap_or(self.start)
    }

    pub fn skipped(&self) -> usize {
        self.plotted - self.moves.len()
    }
}

#[derive(Debug, Default)]
pub struct AnimatedPlotter {
    config: AnimatedConfig,
    traces: Vec<MarkerTrace>,
}

impl AnimatedPlotter {
    pub fn new(mut config: AnimatedConfig) -> Self {
        config.scale_factor = config.scale_factor.max(1);
        Self {
            config,
            traces: Vec::new(),
        }
    }

    pub fn config(&self) -> AnimatedConfig {
        self.config
    }

    pub fn traces(&self) -> &[MarkerTrace] {
        &self.traces
    }

    pub fn into_traces(self) -> Vec<MarkerTrace> {
        self.traces
    }

    /// Surface position for a point in metres, relative to the start.
    pub fn to_surface(&self, x: f64, y: f64) -> SurfacePoint {
        let AnimatedConfig {
            scale_factor,
            truncation,
            start,
        } = self.config;
        SurfacePoint::new(
            start.x + truncation.scale(x, scale_factor),
            start.y + truncation.scale(y, scale_factor),
        )
    }
}

impl Plotter for AnimatedPlotter {
    fn init(&mut self) -> Result<(), PlotError> {
        self.traces.push(MarkerTrace::new(self.config.start));
        Ok(())
    }

    fn plot(&mut self, x: f64, y: f64) -> Result<(), PlotError> {
        let next = self.to_surface(x, y);
        if self.traces.last().is_none_or(|trace| trace.finished) {
            self.traces.push(MarkerTrace::new(self.config.start));
        }
        if let Some(trace) = self.traces.last_mut() {
            trace.plotted += 1;
            if trace.position() != next {
                trace.moves.push(next);
            }
        }
        Ok(())
    }

    fn finalise(&mut self) -> Result<(), PlotError> {
        if let Some(trace) = self.traces.last_mut() {
            trace.finished = true;
            debug!(
                moves = trace.moves.len(),
                skipped = trace.skipped(),
                "marker trace finished"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::simulate;
    use crate::core::bodies::{Cannon, Earth};

    #[test]
    fn floor_and_toward_zero_differ_only_below_zero() {
        assert_eq!(Truncation::Floor.scale(19.9, 10), 1);
        assert_eq!(Truncation::TowardZero.scale(19.9, 10), 1);
        assert_eq!(Truncation::Floor.scale(-0.5, 10), -1);
        assert_eq!(Truncation::TowardZero.scale(-0.5, 10), 0);
    }

    #[test]
    fn positions_are_scaled_from_the_start() {
        let plotter = AnimatedPlotter::new(AnimatedConfig::default());

        assert_eq!(plotter.to_surface(0.0, 10.0), SurfacePoint::new(0, 11));
        assert_eq!(plotter.to_surface(1234.5, 99.9), SurfacePoint::new(123, 19));
    }

    #[test]
    fn points_on_the_same_pixel_do_not_move_the_marker() {
        let mut plotter = AnimatedPlotter::new(AnimatedConfig::default());
        plotter.init().expect("init should succeed");
        for (x, y) in [(0.0, 10.0), (3.0, 10.5), (9.9, 12.0), (10.0, 12.0), (25.0, 30.0)] {
            plotter.plot(x, y).expect("plot should succeed");
        }
        plotter.finalise().expect("finalise should succeed");

        let trace = &plotter.traces()[0];
        assert_eq!(
            trace.moves,
            vec![
                SurfacePoint::new(0, 11),
                SurfacePoint::new(1, 11),
                SurfacePoint::new(2, 13)
            ]
        );
        assert_eq!(trace.plotted, 5);
        assert_eq!(trace.skipped(), 2);
        assert!(trace.finished);
    }

    #[test]
    fn every_run_restarts_the_marker() {
        let mut plotter = AnimatedPlotter::new(AnimatedConfig {
            scale_factor: 100,
            ..Default::default()
        });
        for angle in [0.0, 45.0] {
            simulate(&Earth, &Cannon, 10.0, angle, &mut plotter).expect("simulation should succeed");
        }

        let traces = plotter.traces();
        assert_eq!(traces.len(), 2);
        for trace in traces {
            assert_eq!(trace.start, SurfacePoint::new(0, 10));
            assert!(trace.finished);
            assert!(trace.moves.len() < trace.plotted);
            assert!(trace.moves.windows(2).all(|w| w[0] != w[1]));
        }
        assert!(traces[1].position().x > traces[0].position().x);
    }

    #[test]
    fn plotting_after_a_finished_run_starts_a_new_trace() {
        let mut plotter = AnimatedPlotter::default();
        plotter.plot(20.0, 30.0).expect("plot should succeed");
        plotter.finalise().expect("finalise should succeed");
        plotter.plot(40.0, 30.0).expect("plot should succeed");

        let traces = plotter.traces();
        assert_eq!(traces.len(), 2);
        assert!(traces[0].finished);
        assert!(!traces[1].finished);
        assert_eq!(traces[1].start, SurfacePoint::new(0, 10));
        assert_eq!(traces[1].moves, vec![SurfacePoint::new(4, 13)]);
    }

    #[test]
    fn zero_scale_factor_is_treated_as_one() {
        let plotter = AnimatedPlotter::new(AnimatedConfig {
            scale_factor: 0,
            ..Default::default()
        });

        assert_eq!(plotter.config().scale_factor, 1);
    }
}
