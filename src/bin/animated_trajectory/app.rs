use std::io::{self, Write};

use clap::Parser;
use gun_trajectory::app::run_scenario;
use gun_trajectory::config::{Scenario, ScenarioArgs};
use gun_trajectory::error::AppError;
use gun_trajectory::output::{AnimatedConfig, AnimatedPlotter, Truncation};
use gun_trajectory::telemetry::init_tracing;
use macroquad::prelude::*;
use tracing::info;

use crate::constants::{
    BACKGROUND, DEFAULT_MOVES_PER_FRAME, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    MSAA_SAMPLES,
};
use crate::render::{draw_marker, draw_summary, draw_trail, marker_radius};
use crate::state::ReplayState;

#[derive(Parser)]
#[command(name = "animated_trajectory")]
#[command(about = "Animate projectile trajectories in a window", long_about = None)]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Metres per pixel
    #[arg(long, default_value_t = 10)]
    scale_factor: i64,

    /// Integer division mode when scaling metres to pixels
    #[arg(long, value_enum, default_value_t = Truncation::Floor)]
    truncation: Truncation,

    /// Marker moves drawn per frame
    #[arg(long, default_value_t = DEFAULT_MOVES_PER_FRAME)]
    moves_per_frame: usize,
}

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Gun Trajectories".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    init_tracing();
    let cli = Cli::parse();
    let scenario = Scenario::from(cli.scenario);

    let mut plotter = AnimatedPlotter::new(AnimatedConfig {
        scale_factor: cli.scale_factor,
        truncation: cli.truncation,
        ..Default::default()
    });
    let runs = run_scenario(&scenario, &mut plotter, &mut io::stdout())?;
    io::stdout().flush()?;

    let scale_factor = plotter.config().scale_factor;
    let radius = marker_radius(scale_factor);
    let summary = runs.iter().map(|run| run.line()).collect();
    let mut state = ReplayState::new(plotter.into_traces(), summary);
    info!(traces = state.traces.len(), scale_factor, "animating");

    loop {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            state.finish();
        }
        state.advance(cli.moves_per_frame.max(1));

        let screen_h = screen_height();
        clear_background(BACKGROUND);
        for (start, moves) in state.visible() {
            draw_trail(start, moves, screen_h);
        }
        if let Some(marker) = state.marker() {
            draw_marker(marker, radius, screen_h);
        }

        let hint = if state.is_done() {
            "Press Esc to close"
        } else {
            "Space to skip, Esc to close"
        };
        draw_summary(&state.summary, hint);

        next_frame().await;
    }

    Ok(())
}
