use crate::ui::theme::{ACCENT_GREEN, BADGE_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title on the left, cart indicator with count badge on the right.
pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, cart_count: u64, area: Rect) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD);
        let badge_style = Style::default()
            .fg(BADGE_TEXT)
            .bg(ACCENT_GREEN)
            .add_modifier(Modifier::BOLD);

        let left = vec![Span::raw(" "), Span::styled(self.title.to_string(), title_style)];
        let right = vec![
            Span::styled("cart 🛒 ", Style::default().fg(HEADER_TEXT)),
            Span::styled(format!(" {} ", cart_count), badge_style),
            Span::raw(" "),
        ];

        let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
        let padding = usize::from(area.width).saturating_sub(used);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.extend(right);

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
