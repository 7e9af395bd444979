//! Physical constants for the bodies we fire from and the guns we fire with.
//!
//! Each body or weapon is its own type. Adding one means adding a type that
//! implements [`Planet`] or [`Gun`]; nothing existing has to change.

/// Supplies the surface gravitational acceleration of a celestial body.
pub trait Planet {
    fn name(&self) -> &'static str;

    /// Gravitational acceleration in m/s^2.
    fn gravity(&self) -> f64;
}

/// Supplies the muzzle velocity of a weapon.
pub trait Gun {
    fn name(&self) -> &'static str;

    /// Muzzle velocity in m/s.
    fn muzzle_velocity(&self) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Earth;

#[derive(Clone, Copy, Debug, Default)]
pub struct Mars;

#[derive(Clone, Copy, Debug, Default)]
pub struct Luna;

impl Planet for Earth {
    fn name(&self) -> &'static str {
        "Earth"
    }

    fn gravity(&self) -> f64 {
        9.81
    }
}

impl Planet for Mars {
    fn name(&self) -> &'static str {
        "Mars"
    }

    fn gravity(&self) -> f64 {
        3.728
    }
}

impl Planet for Luna {
    fn name(&self) -> &'static str {
        "Luna"
    }

    fn gravity(&self) -> f64 {
        1.62
    }
}

/// A shipborne cannon.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cannon;

/// A Lee Enfield rifle firing Mark VII .303 ammunition.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeeEnfield303MarkVII;

impl Gun for Cannon {
    fn name(&self) -> &'static str {
        "Cannon"
    }

    fn muzzle_velocity(&self) -> f64 {
        300.0
    }
}

impl Gun for LeeEnfield303MarkVII {
    fn name(&self) -> &'static str {
        "Lee Enfield .303 Mark VII"
    }

    fn muzzle_velocity(&self) -> f64 {
        744.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_report_their_surface_gravity() {
        let planets: [&dyn Planet; 3] = [&Earth, &Mars, &Luna];
        let gravities: Vec<f64> = planets.iter().map(|p| p.gravity()).collect();
        assert_eq!(gravities, vec![9.81, 3.728, 1.62]);
    }

    #[test]
    fn guns_report_their_muzzle_velocity() {
        assert_eq!(Cannon.muzzle_velocity(), 300.0);
        assert_eq!(LeeEnfield303MarkVII.muzzle_velocity(), 744.0);
    }
}
