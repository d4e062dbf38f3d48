use ratatui::style::Color;

pub const ACCENT_GREEN: Color = Color::Rgb(0x2e, 0xcc, 0x71);
pub const BADGE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TITLE_TEXT: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const DESCRIPTION_TEXT: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const CATEGORY_TEXT: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const LOADING_TEXT: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
