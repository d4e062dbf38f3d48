use crate::catalog::{spawn_catalog_fetch, spawn_thumbnail_loads, CatalogFetcher};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::{THUMBNAIL_COLS, THUMBNAIL_ROWS};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use tokio::runtime::Handle;

/// Mount the storefront screen and drive it until the user quits.
///
/// Network work runs on `runtime`; all state changes happen on the calling
/// thread.
pub fn run(config: Config, runtime: &Handle) -> io::Result<()> {
    let fetcher = CatalogFetcher::new(config.catalog.endpoint.clone(), config.request_timeout())
        .map_err(io::Error::other)?;
    let tick_rate = config.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config.display.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    // Exactly one catalog fetch per mount.
    let _fetch = spawn_catalog_fetch(runtime, fetcher.clone(), events.sender(), app.lifetime());
    let mut thumbnail_tasks = Vec::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::CatalogFetched(products)) => {
                if config.display.thumbnails {
                    thumbnail_tasks = spawn_thumbnail_loads(
                        runtime,
                        &fetcher.client(),
                        &products,
                        THUMBNAIL_COLS,
                        THUMBNAIL_ROWS,
                        &events.sender(),
                        &app.lifetime(),
                    );
                }
                app.on_catalog_fetched(products);
            }
            Ok(AppEvent::ThumbnailLoaded {
                product_id,
                thumbnail,
            }) => app.on_thumbnail_loaded(product_id, thumbnail),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(cart_count = app.cart_count(), "Screen closing");
    for task in thumbnail_tasks {
        task.abort();
    }
    drop(app);
    drop(guard);
    Ok(())
}
