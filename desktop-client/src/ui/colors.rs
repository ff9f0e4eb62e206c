use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x8B, 0xC3, 0x4A);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const FOOD: Color32 = Color32::from_rgb(0xFF, 0x57, 0x22);
pub const OVERLAY_TEXT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xE5, 0x39, 0x35);
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
