use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use gun_trajectory::app::run_scenario;
use gun_trajectory::config::{Scenario, ScenarioArgs};
use gun_trajectory::error::AppError;
use gun_trajectory::output::chart::default_chart_path;
use gun_trajectory::output::{ChartPlotter, TextFormat, TextPlotter};
use gun_trajectory::telemetry::init_tracing;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum PlotterKind {
    /// Print every point as "(x, y)"
    #[default]
    Text,
    /// Draw all trajectories on one chart image
    Chart,
}

#[derive(Parser)]
#[command(name = "gun_trajectory")]
#[command(about = "Trajectories of a projectile fired from a gun above sea level", long_about = None)]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// How to render the trajectory points
    #[arg(long, value_enum, default_value_t = PlotterKind::Text)]
    plotter: PlotterKind,

    /// Chart file (.png or .svg); defaults to a timestamped PNG
    #[arg(long)]
    chart_output: Option<PathBuf>,

    /// Print whole-metre coordinates instead of six decimals
    #[arg(long)]
    rounded: bool,

    /// Pause after each printed point (microseconds)
    #[arg(long, default_value_t = 0)]
    point_delay_us: u64,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let scenario = Scenario::from(cli.scenario);
    let mut stdout = io::stdout();

    match cli.plotter {
        PlotterKind::Text => {
            let format = if cli.rounded {
                TextFormat::Rounded
            } else {
                TextFormat::Decimal
            };
            let mut plotter = TextPlotter::stdout()
                .with_format(format)
                .with_point_delay(Duration::from_micros(cli.point_delay_us));
            run_scenario(&scenario, &mut plotter, &mut stdout)?;
        }
        PlotterKind::Chart => {
            let output = cli.chart_output.unwrap_or_else(default_chart_path);
            let mut plotter = ChartPlotter::new(output)
                .with_title(format!(
                    "{} from {} m on {}",
                    scenario.gun.gun().name(),
                    scenario.height_m,
                    scenario.planet.planet().name()
                ))
                .with_labels(scenario.angle_labels());
            run_scenario(&scenario, &mut plotter, &mut stdout)?;
            info!(path = %plotter.output().display(), "chart saved");
        }
    }

    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
