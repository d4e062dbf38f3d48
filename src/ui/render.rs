use crate::ui::app::App;
use crate::ui::card::ProductCard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, visible_cards};
use crate::ui::theme::LOADING_TEXT;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub const LOADING_MESSAGE: &str = "Loading products...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Until the catalog arrives the loading line is the whole screen.
    if app.catalog().is_loading() {
        draw_loading(frame, area);
        return;
    }

    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&app.display().title);
    frame.render_widget(header_widget.widget(app.cart_count(), header), header);
    frame.render_widget(Clear, body);

    let products = &app.catalog().products;
    for (idx, rect) in visible_cards(body, app.first_visible(), products.len()) {
        let Some(product) = products.get(idx) else {
            continue;
        };
        let card = ProductCard::new(product, &app.display().currency_symbol)
            .thumbnail(app.thumbnail(product.id))
            .selected(idx == app.selected());
        frame.render_widget(card, rect);
    }

    frame.render_widget(Footer::new(app), footer);
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(Clear, area);
    if area.height == 0 {
        return;
    }
    let line = Rect {
        y: area.y + 1.min(area.height - 1),
        height: 1,
        ..area
    };
    let widget = Paragraph::new(LOADING_MESSAGE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(LOADING_TEXT));
    frame.render_widget(widget, line);
}
