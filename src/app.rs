use std::io::Write;

use tracing::{info, warn};

use crate::config::Scenario;
use crate::core::ballistics::{LaunchInputs, TIME_STEP_S, landing_time, simulate};
use crate::error::AppError;
use crate::output::Plotter;

/// Outcome of firing at one angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub muzzle_velocity_mps: f64,
    pub height_m: f64,
    pub angle_deg: f64,
    pub flight_time_s: f64,
}

impl RunSummary {
    pub fn line(&self) -> String {
        format!(
            "v = {}m/s, h = {}m, angle = {}°, t = {:.6}s",
            self.muzzle_velocity_mps as i64,
            self.height_m as i64,
            self.angle_deg as i64,
            self.flight_time_s
        )
    }
}

/// Fires once per scenario angle through the same plotter, writing a summary
/// line for each shot to `summary`.
///
/// The first error aborts the remaining angles; anything already plotted or
/// written stays where it is.
pub fn run_scenario<P, W>(
    scenario: &Scenario,
    plotter: &mut P,
    summary: &mut W,
) -> Result<Vec<RunSummary>, AppError>
where
    P: Plotter + ?Sized,
    W: Write + ?Sized,
{
    let planet = scenario.planet.planet();
    let gun = scenario.gun.gun();
    info!(
        planet = planet.name(),
        gun = gun.name(),
        height_m = scenario.height_m,
        angles = scenario.angles_deg.len(),
        "firing"
    );

    let mut runs = Vec::with_capacity(scenario.angles_deg.len());
    for &angle_deg in &scenario.angles_deg {
        let flight_time_s = simulate(planet, gun, scenario.height_m, angle_deg, plotter)?;

        let exact = landing_time(LaunchInputs {
            angle_deg,
            speed_mps: gun.muzzle_velocity(),
            height_m: scenario.height_m,
            gravity_mps2: planet.gravity(),
        })?;
        if (flight_time_s - exact).abs() > TIME_STEP_S * 1.5 {
            warn!(angle_deg, flight_time_s, exact, "sampled flight time drifted from closed form");
        }
        info!(angle_deg, flight_time_s, "landed");

        let run = RunSummary {
            muzzle_velocity_mps: gun.muzzle_velocity(),
            height_m: scenario.height_m,
            angle_deg,
            flight_time_s,
        };
        writeln!(summary, "{}", run.line())?;
        runs.push(run);
    }

    Ok(runs)
}
