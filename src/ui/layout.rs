//! Screen geometry, shared by rendering and mouse hit-testing.

use ratatui::layout::Rect;

/// Rows taken by one product card, borders included.
pub const CARD_HEIGHT: u16 = 6;
/// Thumbnail box inside a card, in cells.
pub const THUMBNAIL_COLS: u16 = 10;
pub const THUMBNAIL_ROWS: u16 = CARD_HEIGHT - 2;
pub const ADD_BUTTON_LABEL: &str = "[ Add ]";
pub const ADD_BUTTON_WIDTH: u16 = 7;
const COLUMN_GAP: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// How many whole cards fit in `body`; never less than one.
pub fn cards_per_page(body: Rect) -> usize {
    usize::from((body.height / CARD_HEIGHT).max(1))
}

/// Card rectangles for products `first..count`, stacked from the top of
/// `body`.
///
/// Only whole cards are placed, except that a body shorter than one card
/// still gets the first card, clipped.
pub fn visible_cards(body: Rect, first: usize, count: usize) -> Vec<(usize, Rect)> {
    let mut cards = Vec::new();
    let bottom = body.y.saturating_add(body.height);
    let mut y = body.y;

    for idx in first..count {
        if y.saturating_add(CARD_HEIGHT) <= bottom {
            cards.push((
                idx,
                Rect {
                    x: body.x,
                    y,
                    width: body.width,
                    height: CARD_HEIGHT,
                },
            ));
            y += CARD_HEIGHT;
        } else {
            if cards.is_empty() && y < bottom {
                cards.push((
                    idx,
                    Rect {
                        x: body.x,
                        y,
                        width: body.width,
                        height: bottom - y,
                    },
                ));
            }
            break;
        }
    }
    cards
}

/// Sub-areas of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub thumbnail: Rect,
    pub info: Rect,
    pub add_button: Rect,
}

/// Split a card into thumbnail (left), info (middle) and Add control (right,
/// vertically centred).
pub fn card_regions(card: Rect) -> CardRegions {
    let inner = Rect {
        x: card.x.saturating_add(1),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    };
    let right = inner.x + inner.width;

    let thumb_width = THUMBNAIL_COLS.min(inner.width);
    let thumbnail = Rect {
        x: inner.x,
        y: inner.y,
        width: thumb_width,
        height: inner.height.min(THUMBNAIL_ROWS),
    };

    let button_width = ADD_BUTTON_WIDTH.min(inner.width - thumb_width);
    let add_button = Rect {
        x: right - button_width,
        y: inner.y + inner.height.saturating_sub(1) / 2,
        width: button_width,
        height: inner.height.min(1),
    };

    let info_x = (inner.x + thumb_width + COLUMN_GAP).min(right);
    let info_right = add_button.x.saturating_sub(COLUMN_GAP).max(info_x);
    let info = Rect {
        x: info_x,
        y: inner.y,
        width: info_right - info_x,
        height: inner.height,
    };

    CardRegions {
        thumbnail,
        info,
        add_button,
    }
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && col < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(screen(80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.y, 21);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn cards_stack_without_overlap() {
        let body = body_rect(screen(80, 24));
        let cards = visible_cards(body, 0, 10);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].1.y, cards[0].1.y + CARD_HEIGHT);
        assert_eq!(cards.len(), cards_per_page(body));
    }

    #[test]
    fn visible_cards_start_at_offset() {
        let body = body_rect(screen(80, 24));
        let cards = visible_cards(body, 8, 10);
        let indices: Vec<usize> = cards.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(indices, vec![8, 9]);
    }

    #[test]
    fn short_body_clips_first_card() {
        let body = Rect {
            x: 0,
            y: 3,
            width: 40,
            height: 4,
        };
        let cards = visible_cards(body, 0, 5);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].1.height, 4);
    }

    #[test]
    fn add_button_sits_inside_card_on_the_right() {
        let card = Rect {
            x: 0,
            y: 3,
            width: 60,
            height: CARD_HEIGHT,
        };
        let regions = card_regions(card);
        assert_eq!(regions.add_button.width, ADD_BUTTON_WIDTH);
        assert_eq!(regions.add_button.x + ADD_BUTTON_WIDTH, 59);
        assert!(contains(card, regions.add_button.x, regions.add_button.y));
        assert!(regions.info.x + regions.info.width <= regions.add_button.x);
        assert!(regions.thumbnail.x + regions.thumbnail.width <= regions.info.x);
    }

    #[test]
    fn narrow_card_does_not_underflow() {
        let card = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: CARD_HEIGHT,
        };
        let regions = card_regions(card);
        assert_eq!(regions.thumbnail.width, 3);
        assert_eq!(regions.add_button.width, 0);
        assert_eq!(regions.info.width, 0);
    }
}
