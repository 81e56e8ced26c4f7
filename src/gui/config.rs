use crate::Identity;
use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const GRID_ROWS: usize = 128;
    pub const GRID_COLS: usize = 128;
    pub const DEFAULT_SEED: u64 = 42;
    pub const FILL_RATE: f64 = 0.3;
    pub const MAX_FPS: f64 = 60.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 20.;

    /// Display color for each species.
    pub fn color(identity: Identity) -> Color32 {
        match identity {
            Identity::Inactive => Color32::from_gray(25),
            Identity::Live => Color32::from_rgb(0x30, 0xd0, 0x60),
            Identity::Fire => Color32::from_rgb(0xe8, 0x60, 0x20),
            Identity::Water => Color32::from_rgb(0x30, 0x80, 0xe8),
        }
    }
}
