//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_catalog;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::net::TcpListener;
use storefront::catalog::Product;
use storefront::config::DisplayConfig;
use storefront::ui::app::App;
use storefront::ui::render::draw;

pub const HEADPHONES_JSON: &str = r#"[{
    "id": 1,
    "title": "Wireless Headphones with Noise Cancellation",
    "price": 59.99,
    "description": "Premium sound quality for everyday listening",
    "category": "electronics",
    "image": "http://x/y.png"
}]"#;

/// A port nothing is listening on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: id as f64 + 0.5,
        description: format!("Description of {title}"),
        category: "jewelery".to_string(),
        image: format!("http://img.test/{id}.png"),
    }
}

pub fn products_json(products: &[Product]) -> String {
    serde_json::to_string(products).unwrap()
}

/// App sized to `width` x `height`, as the runtime would set it up.
pub fn app_with_size(width: u16, height: u16) -> App {
    let mut app = App::new(DisplayConfig::default());
    app.on_resize(width, height);
    app
}

/// Draw `app` into an off-screen buffer.
pub fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer rows as plain strings.
pub fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

pub fn screen_text(buffer: &Buffer) -> String {
    rows(buffer).join("\n")
}
