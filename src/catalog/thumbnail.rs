//! Product images rendered as half-block terminal thumbnails.
//!
//! Each terminal cell shows two stacked pixels: the upper one as the
//! foreground of `▀`, the lower one as the background.

use std::sync::mpsc::Sender;

use image::imageops::FilterType;
use image::DynamicImage;
use reqwest::Client;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::catalog::error::ThumbnailError;
use crate::catalog::product::Product;
use crate::ui::events::AppEvent;
use crate::ui::lifetime::ScreenLifetime;

pub type Rgb = [u8; 3];

/// Decoded, downscaled image sized to fit a cell box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Thumbnail {
    /// Scale `image` to fit inside `cols` x `rows` cells, keeping its aspect
    /// ratio.
    pub fn contain(image: &DynamicImage, cols: u16, rows: u16) -> Self {
        let target_w = u32::from(cols).max(1);
        let target_h = u32::from(rows).max(1) * 2;
        let rgb = image.resize(target_w, target_h, FilterType::Triangle).to_rgb8();
        Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.pixels().map(|p| p.0).collect(),
        }
    }

    /// Width in cells.
    pub fn cols(&self) -> u16 {
        u16::try_from(self.width).unwrap_or(u16::MAX)
    }

    /// Height in cells, rounding an odd trailing pixel row up.
    pub fn rows(&self) -> u16 {
        u16::try_from(self.height.div_ceil(2)).unwrap_or(u16::MAX)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = usize::try_from(y * self.width + x).ok()?;
        self.pixels.get(idx).copied()
    }

    /// Upper and lower pixel of the cell at (`col`, `row`).
    pub fn cell(&self, col: u16, row: u16) -> Option<(Rgb, Option<Rgb>)> {
        let x = u32::from(col);
        let y = u32::from(row) * 2;
        let top = self.pixel(x, y)?;
        Some((top, self.pixel(x, y + 1)))
    }
}

/// Download `url` and decode it into a thumbnail of at most `cols` x `rows`
/// cells.
pub async fn load_thumbnail(
    client: &Client,
    url: &str,
    cols: u16,
    rows: u16,
) -> Result<Thumbnail, ThumbnailError> {
    let download = |source| ThumbnailError::Download {
        url: url.to_string(),
        source,
    };
    let bytes = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(download)?
        .bytes()
        .await
        .map_err(download)?;

    let owned_url = url.to_string();
    tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes)
            .map(|img| Thumbnail::contain(&img, cols, rows))
            .map_err(|source| ThumbnailError::Decode {
                url: owned_url,
                source,
            })
    })
    .await
    .map_err(|e| ThumbnailError::Worker {
        url: url.to_string(),
        message: e.to_string(),
    })?
}

/// Start one download per product. Results arrive as
/// [`AppEvent::ThumbnailLoaded`]; failures are logged and the card keeps its
/// placeholder.
pub fn spawn_thumbnail_loads(
    runtime: &Handle,
    client: &Client,
    products: &[Product],
    cols: u16,
    rows: u16,
    events: &Sender<AppEvent>,
    lifetime: &ScreenLifetime,
) -> Vec<JoinHandle<()>> {
    products
        .iter()
        .map(|product| {
            let client = client.clone();
            let events = events.clone();
            let lifetime = lifetime.clone();
            let product_id = product.id;
            let url = product.image.clone();
            runtime.spawn(async move {
                match load_thumbnail(&client, &url, cols, rows).await {
                    Ok(thumbnail) => {
                        if !lifetime.is_mounted() {
                            return;
                        }
                        if events
                            .send(AppEvent::ThumbnailLoaded {
                                product_id,
                                thumbnail,
                            })
                            .is_err()
                        {
                            tracing::trace!(product_id, "Thumbnail dropped (event loop gone)");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(product_id, error = %err, "Thumbnail unavailable");
                    }
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb as ImageRgb, RgbImage};

    fn solid(width: u32, height: u32, color: Rgb) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, ImageRgb(color)))
    }

    #[test]
    fn square_image_fills_square_box() {
        let thumb = Thumbnail::contain(&solid(40, 40, [10, 20, 30]), 10, 5);
        assert_eq!(thumb.cols(), 10);
        assert_eq!(thumb.rows(), 5);
        assert_eq!(thumb.cell(0, 0), Some(([10, 20, 30], Some([10, 20, 30]))));
    }

    #[test]
    fn wide_image_keeps_aspect() {
        let thumb = Thumbnail::contain(&solid(100, 10, [0, 0, 0]), 10, 5);
        assert_eq!(thumb.cols(), 10);
        assert_eq!(thumb.rows(), 1);
    }

    #[test]
    fn out_of_range_cell_is_none() {
        let thumb = Thumbnail::contain(&solid(4, 4, [1, 1, 1]), 2, 1);
        assert!(thumb.cell(5, 0).is_none());
        assert!(thumb.cell(0, 3).is_none());
    }
}
