use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use signal_hook::consts::TERM_SIGNALS;

use crate::catalog::{Product, Thumbnail};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// The mount-time fetch succeeded.
    CatalogFetched(Vec<Product>),
    ThumbnailLoaded {
        product_id: u64,
        thumbnail: Thumbnail,
    },
    /// OS signal received (SIGTERM, SIGINT, SIGQUIT)
    Shutdown,
}

/// Terminal input, ticks and signals multiplexed onto one channel.
///
/// Background tasks get a [`sender`](Self::sender) and post their results
/// here too, so all state changes happen on the UI thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let signalled = Arc::new(AtomicBool::new(false));
        for signal in TERM_SIGNALS {
            if let Err(err) = signal_hook::flag::register(*signal, Arc::clone(&signalled)) {
                tracing::warn!(signal, error = %err, "Failed to register signal handler");
            }
        }

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if thread_stop.load(Ordering::SeqCst) {
                    break;
                }

                if signalled.swap(false, Ordering::SeqCst) && event_tx.send(AppEvent::Shutdown).is_err() {
                    break;
                }

                // Short poll timeout so the stop flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        };
                        if let Some(event) = forwarded {
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}
