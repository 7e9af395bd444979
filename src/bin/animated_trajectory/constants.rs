use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1920;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1080;
pub const MSAA_SAMPLES: i32 = 4;

pub const DEFAULT_MOVES_PER_FRAME: usize = 20;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const TRAIL_COLOR: Color = Color::new(0.86, 0.10, 0.10, 1.0);
pub const MARKER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.25, 0.27, 0.30, 1.0);
pub const TRAIL_THICKNESS: f32 = 1.5;

// Marker radius at a scale factor of one metre per pixel.
pub const MARKER_RADIUS_AT_UNIT_SCALE: f32 = 80.0;
pub const MIN_MARKER_RADIUS: f32 = 2.0;

pub const SUMMARY_X: f32 = 24.0;
pub const SUMMARY_Y: f32 = 36.0;
pub const SUMMARY_LINE_HEIGHT: f32 = 26.0;
pub const SUMMARY_FONT_SIZE: f32 = 22.0;
