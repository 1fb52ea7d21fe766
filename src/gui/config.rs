use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Side of one cell on screen, in pixels.
    pub const CELL_SIZE: f32 = 20.;
    /// Gap between neighbouring cells, in pixels.
    pub const CELL_GAP: f32 = 1.;
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0x30, 0xc0, 0x60);
    pub const DEAD_COLOR: Color32 = Color32::from_gray(0x20);
    pub const BACKGROUND_COLOR: Color32 = Color32::from_gray(0x10);

    pub const FRAME_MARGIN: f32 = 10.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::from_gray(0x40);
    pub const WIDGET_GAP: f32 = 20.;

    /// Dimensions used until the first frame reports the real viewport.
    pub const INITIAL_ROWS: usize = 40;
    pub const INITIAL_COLS: usize = 64;
}
