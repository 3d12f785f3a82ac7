//! PNG rendering of sampled point sets.
use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use image::{Rgb, RgbImage};

/// Appearance of one set of points.
#[derive(Debug, Clone, Copy)]
pub struct PointStyle {
    pub color: [u8; 3],
    /// Disk radius in pixels. Zero draws a single pixel.
    pub radius: i32,
}

impl PointStyle {
    pub fn new(color: [u8; 3], radius: i32) -> Self {
        Self { color, radius }
    }
}

/// Output image settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image size in pixels.
    pub image_size: (u32, u32),
    /// Domain mapped onto the full image, `[0, x) x [0, y)`.
    pub domain_extent: DVec2,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_extent: DVec2) -> Self {
        Self {
            image_size,
            domain_extent,
            background: [255, 255, 255],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn to_pixel(&self, p: DVec2) -> (i64, i64) {
        let (w, h) = self.image_size;
        let x = (p.x / self.domain_extent.x * w as f64).floor() as i64;
        // Image rows grow downwards; keep the domain's y axis pointing up.
        let y = h as i64 - 1 - (p.y / self.domain_extent.y * h as f64).floor() as i64;
        (x, y)
    }
}

/// Draws each layer of points in order and writes the image to `path`.
pub fn render_points_to_png(
    layers: &[(&[DVec2], PointStyle)],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    anyhow::ensure!(w > 0 && h > 0, "image size must be > 0");
    anyhow::ensure!(
        config.domain_extent.x > 0.0 && config.domain_extent.y > 0.0,
        "domain extent must be > 0"
    );

    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for (points, style) in layers {
        for &p in points.iter() {
            let (cx, cy) = config.to_pixel(p);
            draw_disk(&mut img, cx, cy, style.radius, Rgb(style.color));
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn draw_disk(img: &mut RgbImage, cx: i64, cy: i64, radius: i32, color: Rgb<u8>) {
    let r = radius.max(0) as i64;
    let (w, h) = (img.width() as i64, img.height() as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < w && y < h {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
