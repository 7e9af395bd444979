use gun_trajectory::output::SurfacePoint;
use macroquad::prelude::*;

use crate::constants::{
    MARKER_COLOR, MARKER_RADIUS_AT_UNIT_SCALE, MIN_MARKER_RADIUS, SUMMARY_FONT_SIZE,
    SUMMARY_LINE_HEIGHT, SUMMARY_X, SUMMARY_Y, TEXT_COLOR, TRAIL_COLOR, TRAIL_THICKNESS,
};

/// Surface pixels have their origin bottom-left; the screen's is top-left.
pub(crate) fn surface_to_screen(point: SurfacePoint, screen_h: f32) -> Vec2 {
    vec2(point.x as f32, screen_h - point.y as f32)
}

pub(crate) fn marker_radius(scale_factor: i64) -> f32 {
    (MARKER_RADIUS_AT_UNIT_SCALE / scale_factor.max(1) as f32).max(MIN_MARKER_RADIUS)
}

pub(crate) fn draw_trail(start: SurfacePoint, moves: &[SurfacePoint], screen_h: f32) {
    let mut prev = surface_to_screen(start, screen_h);
    for point in moves.iter().copied() {
        let cur = surface_to_screen(point, screen_h);
        draw_line(prev.x, prev.y, cur.x, cur.y, TRAIL_THICKNESS, TRAIL_COLOR);
        prev = cur;
    }
}

pub(crate) fn draw_marker(position: SurfacePoint, radius: f32, screen_h: f32) {
    let p = surface_to_screen(position, screen_h);
    draw_circle(p.x, p.y, radius, MARKER_COLOR);
}

pub(crate) fn draw_summary(lines: &[String], hint: &str) {
    let mut y = SUMMARY_Y;
    for line in lines {
        draw_text(line, SUMMARY_X, y, SUMMARY_FONT_SIZE, TEXT_COLOR);
        y += SUMMARY_LINE_HEIGHT;
    }
    draw_text(hint, SUMMARY_X, y + SUMMARY_LINE_HEIGHT * 0.5, SUMMARY_FONT_SIZE, GRAY);
}
