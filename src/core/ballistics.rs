//! Drag-free ballistic trajectories above sea level.

use tracing::debug;

use crate::core::bodies::{Gun, Planet};
use crate::error::SimulationError;
use crate::output::Plotter;

/// Fixed integration step in seconds.
pub const TIME_STEP_S: f64 = 0.001;

#[derive(Clone, Copy, Debug)]
pub struct LaunchInputs {
    pub angle_deg: f64,
    pub speed_mps: f64,
    pub height_m: f64,
    pub gravity_mps2: f64,
}

/// Returns `(cos θ, sin θ)` for a launch angle in degrees.
///
/// Whole quadrant angles map to exact values so a 90° shot has no
/// horizontal drift and a 0° shot no vertical component.
pub fn direction_cosines(angle_deg: f64) -> (f64, f64) {
    let quadrant = angle_deg / 90.0;
    if quadrant.fract() == 0.0 {
        return match (quadrant as i64).rem_euclid(4) {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        };
    }
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    (cos, sin)
}

pub fn velocity_components(inputs: LaunchInputs) -> (f64, f64) {
    let (cos_theta, sin_theta) = direction_cosines(inputs.angle_deg);
    (inputs.speed_mps * cos_theta, inputs.speed_mps * sin_theta)
}

pub fn trajectory_at_time(inputs: LaunchInputs, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = inputs.height_m + (vy * time_s) - (0.5 * inputs.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Closed-form time at which the projectile reaches sea level.
pub fn landing_time(inputs: LaunchInputs) -> Result<f64, SimulationError> {
    validate(inputs)?;

    let (_, vy) = velocity_components(inputs);
    let g = inputs.gravity_mps2;
    let disc = vy * vy + 2.0 * g * inputs.height_m;
    Ok((vy + disc.sqrt()) / g)
}

fn check_finite(label: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::NonFiniteInput { label, value })
    }
}

/// Checks finiteness and gravity. A launch from exactly sea level passes, as
/// the closed form still has a landing time; the stepped loop adds
/// [`check_above_sea_level`] on top.
fn validate(inputs: LaunchInputs) -> Result<(), SimulationError> {
    check_finite("angle", inputs.angle_deg)?;
    check_finite("muzzle velocity", inputs.speed_mps)?;
    check_finite("height", inputs.height_m)?;
    check_finite("gravity", inputs.gravity_mps2)?;

    // Without positive gravity the projectile never comes back down.
    if inputs.gravity_mps2 <= 0.0 {
        return Err(SimulationError::NonPositiveGravity(inputs.gravity_mps2));
    }
    if inputs.height_m < 0.0 {
        return Err(SimulationError::NonPositiveHeight(inputs.height_m));
    }
    Ok(())
}

/// The stepped loop stops at the first sample with `y <= 0`, so a launch at
/// sea level would plot nothing.
fn check_above_sea_level(height_m: f64) -> Result<(), SimulationError> {
    if height_m > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::NonPositiveHeight(height_m))
    }
}

/// Position after `t` seconds with the launch direction already resolved.
fn sample_at(h: f64, v: f64, g: f64, cos_theta: f64, sin_theta: f64, t: f64) -> (f64, f64) {
    let x = v * t * cos_theta;
    let y = h + v * t * sin_theta - 0.5 * g * t * t;
    (x, y)
}

/// Steps the projectile through its flight, handing each sample to `plotter`,
/// and returns the flight time in seconds.
///
/// Samples are taken every [`TIME_STEP_S`]. The returned time is that of the
/// first sample at or below sea level; that sample is not plotted, so every
/// plotted point has `y > 0`. The zero crossing is not interpolated.
///
/// `init` and `finalise` are each called exactly once on success.
pub fn simulate<P: Plotter + ?Sized>(
    planet: &dyn Planet,
    gun: &dyn Gun,
    initial_height_m: f64,
    angle_deg: f64,
    plotter: &mut P,
) -> Result<f64, SimulationError> {
    let inputs = LaunchInputs {
        angle_deg,
        speed_mps: gun.muzzle_velocity(),
        height_m: initial_height_m,
        gravity_mps2: planet.gravity(),
    };
    validate(inputs)?;
    check_above_sea_level(initial_height_m)?;

    let g = inputs.gravity_mps2;
    let v = inputs.speed_mps;
    let h = inputs.height_m;
    let (cos_theta, sin_theta) = direction_cosines(angle_deg);

    plotter.init()?;

    let mut step: u64 = 0;
    let flight_time_s = loop {
        let t = step as f64 * TIME_STEP_S;
        let (x, y) = sample_at(h, v, g, cos_theta, sin_theta, t);
        if y <= 0.0 {
            break t;
        }
        plotter.plot(x, y)?;
        step += 1;
    };

    plotter.finalise()?;
    debug!(
        planet = planet.name(),
        gun = gun.name(),
        angle_deg,
        points = step,
        flight_time_s,
        "trajectory complete"
    );
    Ok(flight_time_s)
}

/// Fires level with the horizon. Same as [`simulate`] at 0°.
pub fn fire_horizontally<P: Plotter + ?Sized>(
    planet: &dyn Planet,
    gun: &dyn Gun,
    initial_height_m: f64,
    plotter: &mut P,
) -> Result<f64, SimulationError> {
    simulate(planet, gun, initial_height_m, 0.0, plotter)
}
