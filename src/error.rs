use std::io;

use thiserror::Error;

/// Failures raised by a plotter back-end.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("plot output failed: {0}")]
    Io(#[from] io::Error),
    #[error("chart rendering failed: {0}")]
    Render(String),
    #[error("drawing surface unavailable: {0}")]
    Surface(String),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("gravity must be positive, got {0} m/s^2")]
    NonPositiveGravity(f64),
    #[error("initial height must be above sea level, got {0} m")]
    NonPositiveHeight(f64),
    #[error("{label} must be a finite number, got {value}")]
    NonFiniteInput { label: &'static str, value: f64 },
    #[error(transparent)]
    Plot(#[from] PlotError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error("could not write summary: {0}")]
    Io(#[from] io::Error),
}
