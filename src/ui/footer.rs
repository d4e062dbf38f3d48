use crate::ui::app::App;
use crate::ui::input::KEY_HINTS;
use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Key hints on the left, "selected/total" on the right.
pub struct Footer<'a> {
    app: &'a App,
}

impl<'a> Footer<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// 1-based position of the selected card, e.g. "3/20".
    pub fn position(&self) -> String {
        let total = self.app.catalog().products.len();
        if total == 0 {
            return "0/0".to_string();
        }
        format!("{}/{}", self.app.selected() + 1, total)
    }

    fn hint_spans(style: Style) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(" ", style)];
        for (idx, (keys, action)) in KEY_HINTS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", style));
            }
            spans.push(Span::styled(format!("{keys}: {action}"), style));
        }
        spans
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let position = format!("{} ", self.position());

        let mut spans = Self::hint_spans(hint_style);
        let used: usize = spans.iter().map(Span::width).sum::<usize>() + position.chars().count();
        let inner_width = usize::from(area.width.saturating_sub(2));
        spans.push(Span::styled(
            " ".repeat(inner_width.saturating_sub(used)),
            hint_style,
        ));
        spans.push(Span::styled(
            position,
            Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
