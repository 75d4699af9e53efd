use eframe::egui::{vec2, Color32, Vec2};

pub const LABEL_ARCHIVE: &str = "Zip File:";
pub const LABEL_DESTINATION: &str = "Output Folder:";
pub const BUTTON_BROWSE: &str = "Browse ...";
pub const BUTTON_START: &str = "Unzip File";
pub const BUTTON_STOP: &str = "Stop";

pub const FIELD_WIDTH: f32 = 300.0;
pub const ACTION_BUTTON_SIZE: Vec2 = vec2(140.0, 44.0);
pub const ACTION_TEXT_SIZE: f32 = 16.0;
pub const STATUS_TEXT_SIZE: f32 = 14.0;
pub const SECTION_SPACING: f32 = 20.0;

pub const STATUS_OK: Color32 = Color32::from_rgb(0, 128, 0);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(200, 0, 0);
