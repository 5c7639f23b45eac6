use eframe::egui::Color32;
use std::ops::RangeInclusive;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    /// Edge length of a drawn cell in pixels.
    pub const CELL_SIZE: usize = 5;
    pub const CELL_SIZE_RANGE: RangeInclusive<usize> = 2..=100;

    /// Trail persistence; higher values leave longer trails behind.
    pub const FADE: f32 = 88.;
    pub const FADE_RANGE: RangeInclusive<f32> = 1.0..=100.0;

    /// Probability of a cell starting alive on (re)initialization.
    pub const FILL_RATE: f64 = 0.5;

    /// Per-dead-cell probability of a spontaneous birth each generation.
    pub const SPARK_CHANCE: f64 = 1. / 1500.;

    /// Simulate once per this many rendered frames.
    pub const TICK_DIVISOR: u64 = 2;

    /// Degrees of hue drift per rendered frame.
    pub const HUE_DRIFT: f32 = 0.15;

    pub const MAX_FPS: f64 = 60.;
}
