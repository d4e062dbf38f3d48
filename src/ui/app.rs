use std::collections::HashMap;

use ratatui::layout::Rect;

use crate::catalog::{Product, Thumbnail};
use crate::config::DisplayConfig;
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::layout::{body_rect, card_regions, cards_per_page, contains, visible_cards};
use crate::ui::lifetime::ScreenLifetime;
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the storefront screen owns while it is mounted.
///
/// Dropping the `App` unmounts the screen: pending background results are
/// discarded from then on.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    display: DisplayConfig,
    /// Catalog list (MVI pattern).
    catalog: CatalogState,
    /// Add-to-cart counter (MVI pattern).
    cart: CartState,
    thumbnails: HashMap<u64, Thumbnail>,
    selected: usize,
    first_visible: usize,
    lifetime: ScreenLifetime,
}

impl App {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            display,
            catalog: CatalogState::default(),
            cart: CartState::default(),
            thumbnails: HashMap::new(),
            selected: 0,
            first_visible: 0,
            lifetime: ScreenLifetime::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.count
    }

    pub fn thumbnail(&self, product_id: u64) -> Option<&Thumbnail> {
        self.thumbnails.get(&product_id)
    }

    /// Index of the highlighted card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the topmost card on screen.
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Handle for background tasks that must not outlive the screen.
    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.scroll_to_selection();
    }

    /// Replace the catalog with a freshly fetched list.
    pub fn on_catalog_fetched(&mut self, products: Vec<Product>) {
        dispatch_mvi!(self, catalog, CatalogReducer, CatalogIntent::Replace { products });
        self.thumbnails.clear();
        self.selected = 0;
        self.first_visible = 0;
    }

    pub fn on_thumbnail_loaded(&mut self, product_id: u64, thumbnail: Thumbnail) {
        if self.catalog.products.iter().any(|p| p.id == product_id) {
            self.thumbnails.insert(product_id, thumbnail);
        }
    }

    /// The one cart mutation. Every card's Add control lands here.
    pub fn add_to_cart(&mut self) {
        dispatch_mvi!(self, cart, CartReducer, CartIntent::Add);
        tracing::debug!(count = self.cart.count, "Added to cart");
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.catalog.len() {
            self.selected += 1;
            self.scroll_to_selection();
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll_to_selection();
        }
    }

    pub fn page_down(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let page = self.page_size();
        self.selected = (self.selected + page).min(self.catalog.len() - 1);
        self.scroll_to_selection();
    }

    pub fn page_up(&mut self) {
        let page = self.page_size();
        self.selected = self.selected.saturating_sub(page);
        self.scroll_to_selection();
    }

    /// Mouse press at terminal cell (`col`, `row`).
    ///
    /// A press on a card's Add control adds to the cart; anywhere else on a
    /// card selects it.
    pub fn on_click(&mut self, col: u16, row: u16) {
        if self.catalog.is_loading() {
            return;
        }
        let Some(body) = self.body() else {
            return;
        };
        let hit = visible_cards(body, self.first_visible, self.catalog.len())
            .into_iter()
            .find(|(_, card)| contains(*card, col, row));
        if let Some((idx, card)) = hit {
            self.selected = idx;
            if contains(card_regions(card).add_button, col, row) {
                self.add_to_cart();
            }
        }
    }

    fn body(&self) -> Option<Rect> {
        self.size.map(|(width, height)| {
            body_rect(Rect {
                x: 0,
                y: 0,
                width,
                height,
            })
        })
    }

    fn page_size(&self) -> usize {
        self.body().map(cards_per_page).unwrap_or(1)
    }

    fn scroll_to_selection(&mut self) {
        let page = self.page_size();
        if self.selected < self.first_visible {
            self.first_visible = self.selected;
        } else if self.selected >= self.first_visible + page {
            self.first_visible = self.selected + 1 - page;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.lifetime.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id,
                title: format!("Product {id}"),
                price: id as f64,
                description: "desc".to_string(),
                category: "misc".to_string(),
                image: format!("http://img.test/{id}.png"),
            })
            .collect()
    }

    #[test]
    fn selection_scrolls_window() {
        let mut app = App::new(DisplayConfig::default());
        app.on_resize(80, 24);
        app.on_catalog_fetched(products(10));

        for _ in 0..4 {
            app.select_next();
        }
        assert_eq!(app.selected(), 4);
        assert_eq!(app.first_visible(), 2);

        app.page_up();
        assert_eq!(app.selected(), 1);
        assert_eq!(app.first_visible(), 1);
    }

    #[test]
    fn selection_is_clamped() {
        let mut app = App::new(DisplayConfig::default());
        app.on_resize(80, 24);
        app.on_catalog_fetched(products(2));

        app.select_previous();
        assert_eq!(app.selected(), 0);
        app.page_down();
        app.page_down();
        assert_eq!(app.selected(), 1);
        app.select_next();
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn refetch_resets_selection() {
        let mut app = App::new(DisplayConfig::default());
        app.on_resize(80, 24);
        app.on_catalog_fetched(products(5));
        app.select_next();
        app.on_catalog_fetched(products(3));
        assert_eq!(app.selected(), 0);
        assert_eq!(app.catalog().len(), 3);
    }

    #[test]
    fn drop_unmounts() {
        let app = App::new(DisplayConfig::default());
        let lifetime = app.lifetime();
        assert!(lifetime.is_mounted());
        drop(app);
        assert!(!lifetime.is_mounted());
    }
}
