use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crate::error::PlotError;
use crate::output::Plotter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFormat {
    /// `(x, y)` with six decimal places.
    #[default]
    Decimal,
    /// `(x, y)` rounded to whole metres, for discrete graphics coordinates.
    Rounded,
}

/// Writes each point as a `(x, y)` line.
pub struct TextPlotter<W: Write = Stdout> {
    sink: W,
    format: TextFormat,
    point_delay: Duration,
}

impl TextPlotter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextPlotter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            format: TextFormat::Decimal,
            point_delay: Duration::ZERO,
        }
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    /// Pause after every point so the trajectory scrolls by in real time.
    pub fn with_point_delay(mut self, delay: Duration) -> Self {
        self.point_delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

pub fn format_point(format: TextFormat, x: f64, y: f64) -> String {
    match format {
        TextFormat::Decimal => format!("({x:.6}, {y:.6})"),
        TextFormat::Rounded => format!("({}, {})", x.round() as i64, y.round() as i64),
    }
}

impl<W: Write> Plotter for TextPlotter<W> {
    fn plot(&mut self, x: f64, y: f64) -> Result<(), PlotError> {
        writeln!(self.sink, "{}", format_point(self.format, x, y))?;
        if !self.point_delay.is_zero() {
            self.sink.flush()?;
            thread::sleep(self.point_delay);
        }
        Ok(())
    }

    fn finalise(&mut self) -> Result<(), PlotError> {
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::simulate;
    use crate::core::bodies::{Cannon, Earth};

    #[test]
    fn prints_points_with_six_decimals() {
        let mut plotter = TextPlotter::new(Vec::new());
        plotter.plot(0.0, 10.0).expect("plot should succeed");
        plotter.plot(0.3, 9.75).expect("plot should succeed");

        let out = String::from_utf8(plotter.into_inner()).expect("utf8 output");
        assert_eq!(out, "(0.000000, 10.000000)\n(0.300000, 9.750000)\n");
    }

    #[test]
    fn rounded_format_prints_whole_metres() {
        assert_eq!(format_point(TextFormat::Rounded, 12.6, 3.4), "(13, 3)");
        assert_eq!(format_point(TextFormat::Rounded, 0.0, 0.5), "(0, 1)");
    }

    #[test]
    fn one_line_per_plotted_point() {
        let mut plotter = TextPlotter::new(Vec::new());
        simulate(&Earth, &Cannon, 10.0, 0.0, &mut plotter).expect("simulation should succeed");

        let out = String::from_utf8(plotter.into_inner()).expect("utf8 output");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1428);
        assert_eq!(lines[0], "(0.000000, 10.000000)");
        assert!(lines.iter().all(|l| l.starts_with('(') && l.ends_with(')')));
    }
}
