//! Batch chart back-end: collects every trajectory, then draws them as line
//! series on one chart image.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::core::window::{DISTANCE_TO_HEIGHT_RATIO, window_for_points};
use crate::error::PlotError;
use crate::output::Plotter;

pub const DEFAULT_CHART_SIZE: (u32, u32) = (1600, 900);

/// One trajectory as parallel x/y sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectorySeries {
    pub label: String,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
}

impl TrajectorySeries {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values
            .iter()
            .copied()
            .zip(self.y_values.iter().copied())
    }
}

/// `trajectories-YYYYMMDD-HHMMSS.png` for the given moment.
pub fn chart_file_name(at: DateTime<Local>) -> String {
    at.format("trajectories-%Y%m%d-%H%M%S.png").to_string()
}

pub fn default_chart_path() -> PathBuf {
    PathBuf::from(chart_file_name(Local::now()))
}

/// Accumulates one series per run and writes the chart on every `finalise`,
/// so the file always shows all trajectories fired so far.
///
/// The output format follows the file extension: `.svg` writes SVG, anything
/// else a bitmap.
pub struct ChartPlotter {
    output: PathBuf,
    title: String,
    size: (u32, u32),
    labels: Vec<String>,
    series: Vec<TrajectorySeries>,
}

impl ChartPlotter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            title: "Projectile trajectories".to_string(),
            size: DEFAULT_CHART_SIZE,
            labels: Vec::new(),
            series: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Legend labels for successive runs, in firing order.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn series(&self) -> &[TrajectorySeries] {
        &self.series
    }

    fn start_series(&mut self) {
        let idx = self.series.len();
        let label = self
            .labels
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("trajectory {}", idx + 1));
        self.series.push(TrajectorySeries::new(label));
    }

    fn render(&self) -> Result<(), PlotError> {
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let is_svg = self
            .output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            self.draw(SVGBackend::new(&self.output, self.size).into_drawing_area())
        } else {
            self.draw(BitMapBackend::new(&self.output, self.size).into_drawing_area())
        }
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        root.fill(&WHITE).map_err(render_err)?;

        let window = window_for_points(
            self.series.iter().flat_map(TrajectorySeries::points),
            DISTANCE_TO_HEIGHT_RATIO,
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..window.max_x, 0.0..window.max_y)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Height (m)")
            .draw()
            .map_err(render_err)?;

        for (idx, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            chart
                .draw_series(LineSeries::new(series.points(), color.stroke_width(2)))
                .map_err(render_err)?
                .label(series.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

fn render_err<E: Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

impl Plotter for ChartPlotter {
    fn init(&mut self) -> Result<(), PlotError> {
        self.start_series();
        Ok(())
    }

    fn plot(&mut self, x: f64, y: f64) -> Result<(), PlotError> {
        if self.series.is_empty() {
            self.start_series();
        }
        if let Some(series) = self.series.last_mut() {
            series.x_values.push(x);
            series.y_values.push(y);
        }
        Ok(())
    }

    fn finalise(&mut self) -> Result<(), PlotError> {
        self.render()?;
        debug!(
            path = %self.output.display(),
            series = self.series.len(),
            "chart written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::simulate;
    use crate::core::bodies::{Cannon, Earth};
    use chrono::TimeZone;

    #[test]
    fn each_run_gets_its_own_labelled_series() {
        let mut plotter = ChartPlotter::new("unused.png").with_labels(["0°", "15°"]);
        for run in 0..3 {
            plotter.init().expect("init should succeed");
            for i in 0..=run {
                plotter.plot(i as f64, 10.0 - i as f64).expect("plot should succeed");
            }
        }

        let series = plotter.series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, "0°");
        assert_eq!(series[1].label, "15°");
        assert_eq!(series[2].label, "trajectory 3");
        assert_eq!(series[2].x_values, vec![0.0, 1.0, 2.0]);
        assert_eq!(series[2].y_values, vec![10.0, 9.0, 8.0]);
    }

    #[test]
    fn points_before_init_still_land_in_a_series() {
        let mut plotter = ChartPlotter::new("unused.png");
        plotter.plot(1.0, 2.0).expect("plot should succeed");

        assert_eq!(plotter.series().len(), 1);
        assert_eq!(plotter.series()[0].points().collect::<Vec<_>>(), vec![(1.0, 2.0)]);
    }

    #[test]
    fn file_name_carries_the_timestamp() {
        let at = Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("valid local time");

        assert_eq!(chart_file_name(at), "trajectories-20240309-140507.png");
    }

    #[test]
    fn unwritable_output_location_is_reported() {
        let blocker = std::env::temp_dir().join(format!(
            "gun_trajectory_chart_blocker_{}",
            std::process::id()
        ));
        fs::write(&blocker, b"not a directory").expect("write blocker file");

        let mut plotter = ChartPlotter::new(blocker.join("chart.png"));
        plotter.init().expect("init should succeed");
        plotter.plot(0.0, 1.0).expect("plot should succeed");
        let err = plotter.finalise().expect_err("finalise should fail");

        assert!(matches!(err, PlotError::Io(_)));
        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn finalise_writes_every_series_as_png_or_svg() {
        for ext in ["png", "svg"] {
            let path = std::env::temp_dir().join(format!(
                "gun_trajectory_chart_{}.{ext}",
                std::process::id()
            ));
            let mut plotter = ChartPlotter::new(&path).with_labels(["0°", "45°"]);
            for angle in [0.0, 45.0] {
                simulate(&Earth, &Cannon, 10.0, angle, &mut plotter)
                    .expect("simulation should succeed");
            }

            assert_eq!(plotter.series().len(), 2);
            let written = fs::metadata(&path).expect("chart file should exist");
            assert!(written.len() > 0, "{} is empty", path.display());
            if ext == "svg" {
                let svg = fs::read_to_string(&path).expect("read svg");
                assert!(svg.contains("<svg"));
            }
            let _ = fs::remove_file(&path);
        }
    }
}
