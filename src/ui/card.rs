use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::catalog::format::{
    capitalize, format_price_with, truncate, DESCRIPTION_LIMIT, TITLE_LIMIT,
};
use crate::catalog::{Product, Thumbnail};
use crate::ui::layout::{card_regions, ADD_BUTTON_LABEL};
use crate::ui::theme::{
    ACCENT_GREEN, BADGE_TEXT, CATEGORY_TEXT, DESCRIPTION_TEXT, GLOBAL_BORDER, PLACEHOLDER_TEXT,
    TITLE_TEXT,
};

/// One product: thumbnail, four text lines and the Add control.
pub struct ProductCard<'a> {
    product: &'a Product,
    thumbnail: Option<&'a Thumbnail>,
    currency_symbol: &'a str,
    selected: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, currency_symbol: &'a str) -> Self {
        Self {
            product,
            thumbnail: None,
            currency_symbol,
            selected: false,
        }
    }

    pub fn thumbnail(mut self, thumbnail: Option<&'a Thumbnail>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Text lines in display order: title, description, price, category.
    pub fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::styled(
                truncate(&self.product.title, TITLE_LIMIT),
                Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                truncate(&self.product.description, DESCRIPTION_LIMIT),
                Style::default().fg(DESCRIPTION_TEXT),
            ),
            Line::styled(
                format_price_with(self.product.price, self.currency_symbol),
                Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                capitalize(&self.product.category),
                Style::default().fg(CATEGORY_TEXT),
            ),
        ]
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected {
            ACCENT_GREEN
        } else {
            GLOBAL_BORDER
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        let regions = card_regions(area);
        ThumbnailView::new(self.thumbnail).render(regions.thumbnail, buf);
        Paragraph::new(self.lines()).render(regions.info, buf);
        Paragraph::new(ADD_BUTTON_LABEL)
            .style(
                Style::default()
                    .fg(BADGE_TEXT)
                    .bg(ACCENT_GREEN)
                    .add_modifier(Modifier::BOLD),
            )
            .render(regions.add_button, buf);
    }
}

/// Half-block image, centred in its box, or a placeholder while the image is
/// missing.
pub struct ThumbnailView<'a> {
    thumbnail: Option<&'a Thumbnail>,
}

impl<'a> ThumbnailView<'a> {
    pub fn new(thumbnail: Option<&'a Thumbnail>) -> Self {
        Self { thumbnail }
    }
}

impl Widget for ThumbnailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let Some(thumbnail) = self.thumbnail else {
            let placeholder = Rect {
                y: area.y + area.height.saturating_sub(1) / 2,
                height: 1,
                ..area
            };
            Paragraph::new("[img]")
                .alignment(Alignment::Center)
                .style(Style::default().fg(PLACEHOLDER_TEXT))
                .render(placeholder, buf);
            return;
        };

        let cols = thumbnail.cols().min(area.width);
        let rows = thumbnail.rows().min(area.height);
        let x0 = area.x + (area.width - cols) / 2;
        let y0 = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let Some((top, bottom)) = thumbnail.cell(col, row) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_symbol("▀").set_fg(rgb(top));
                    match bottom {
                        Some(bottom) => cell.set_bg(rgb(bottom)),
                        None => cell.set_bg(Color::Reset),
                    };
                }
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
