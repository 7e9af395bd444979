use clap::{Args, ValueEnum};

use crate::core::bodies::{Cannon, Earth, Gun, LeeEnfield303MarkVII, Luna, Mars, Planet};

pub const DEFAULT_HEIGHT_M: f64 = 10.0;
pub const DEFAULT_ANGLES_DEG: [f64; 6] = [0.0, 15.0, 30.0, 45.0, 60.0, 75.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PlanetChoice {
    #[default]
    Earth,
    Mars,
    Luna,
}

impl PlanetChoice {
    pub fn planet(self) -> &'static dyn Planet {
        match self {
            PlanetChoice::Earth => &Earth,
            PlanetChoice::Mars => &Mars,
            PlanetChoice::Luna => &Luna,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GunChoice {
    #[default]
    Cannon,
    #[value(name = "lee-enfield")]
    LeeEnfield303MarkVII,
}

impl GunChoice {
    pub fn gun(self) -> &'static dyn Gun {
        match self {
            GunChoice::Cannon => &Cannon,
            GunChoice::LeeEnfield303MarkVII => &LeeEnfield303MarkVII,
        }
    }
}

/// Firing parameters shared by every front-end.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct ScenarioArgs {
    /// Body the gun stands on
    #[arg(long, env = "TRAJECTORY_PLANET", value_enum, default_value_t = PlanetChoice::Earth)]
    pub planet: PlanetChoice,

    /// Weapon to fire
    #[arg(long, env = "TRAJECTORY_GUN", value_enum, default_value_t = GunChoice::Cannon)]
    pub gun: GunChoice,

    /// Height of the gun above sea level (m)
    #[arg(long = "height", env = "TRAJECTORY_HEIGHT_M", default_value_t = DEFAULT_HEIGHT_M)]
    pub height_m: f64,

    /// Comma separated firing angles (degrees)
    #[arg(
        long = "angles",
        env = "TRAJECTORY_ANGLES",
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = DEFAULT_ANGLES_DEG
    )]
    pub angles_deg: Vec<f64>,
}

/// A complete firing plan: one gun, one height, several angles.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub planet: PlanetChoice,
    pub gun: GunChoice,
    pub height_m: f64,
    pub angles_deg: Vec<f64>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            planet: PlanetChoice::Earth,
            gun: GunChoice::Cannon,
            height_m: DEFAULT_HEIGHT_M,
            angles_deg: DEFAULT_ANGLES_DEG.to_vec(),
        }
    }
}

impl From<ScenarioArgs> for Scenario {
    fn from(args: ScenarioArgs) -> Self {
        Self {
            planet: args.planet,
            gun: args.gun,
            height_m: args.height_m,
            angles_deg: args.angles_deg,
        }
    }
}

impl Scenario {
    /// Legend labels, one per angle.
    pub fn angle_labels(&self) -> Vec<String> {
        self.angles_deg.iter().map(|a| format!("{a}°")).collect()
    }
}
