//! Platform abstraction layer
//!
//! Browser-facing geometry that does not need the browser to test:
//! - Canvas backing size for a given CSS size and device pixel ratio
//! - Pointer client coordinates to playfield (CSS pixel) coordinates

use glam::Vec2;

/// Canvas layout as reported by the DOM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// CSS size of the canvas element
    pub css_size: Vec2,
    /// `window.devicePixelRatio`, treated as 1 when missing or bogus
    pub dpr: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            css_size: Vec2::new(css_width.max(0.0) as f32, css_height.max(0.0) as f32),
            dpr,
        }
    }

    /// Canvas width/height attributes in device pixels
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.css_size.x as f64 * self.dpr).floor() as u32,
            (self.css_size.y as f64 * self.dpr).floor() as u32,
        )
    }

    /// Playfield bounds in logical (CSS) pixels, recovered from the backing
    /// size so that game space and drawn pixels agree exactly
    pub fn logical_size(&self) -> Vec2 {
        let (w, h) = self.backing_size();
        Vec2::new((w as f64 / self.dpr) as f32, (h as f64 / self.dpr) as f32)
    }

    /// Map a pointer's client coordinates to playfield coordinates.
    ///
    /// `rect_origin`/`rect_size` come from `getBoundingClientRect`, which can
    /// differ from the backing size when CSS scales the canvas.
    pub fn client_to_surface(&self, client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
        let (bw, bh) = self.backing_size();
        let scale = Vec2::new(
            if rect_size.x > 0.0 { bw as f32 / rect_size.x } else { 1.0 },
            if rect_size.y > 0.0 { bh as f32 / rect_size.y } else { 1.0 },
        );
        (client - rect_origin) * scale / self.dpr as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_size_scales_by_dpr() {
        let vp = Viewport::new(400.0, 300.0, 2.0);
        assert_eq!(vp.backing_size(), (800, 600));
        assert_eq!(vp.logical_size(), Vec2::new(400.0, 300.0));

        let vp = Viewport::new(333.0, 100.0, 1.5);
        assert_eq!(vp.backing_size(), (499, 150));
    }

    #[test]
    fn test_bad_dpr_falls_back_to_one() {
        assert_eq!(Viewport::new(100.0, 100.0, 0.0).dpr, 1.0);
        assert_eq!(Viewport::new(100.0, 100.0, f64::NAN).dpr, 1.0);
    }

    #[test]
    fn test_client_to_surface() {
        let vp = Viewport::new(400.0, 300.0, 2.0);
        let origin = Vec2::new(10.0, 20.0);
        let size = Vec2::new(400.0, 300.0);

        let p = vp.client_to_surface(Vec2::new(110.0, 70.0), origin, size);
        assert!((p - Vec2::new(100.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_client_to_surface_css_scaled() {
        // Canvas drawn at half its layout size by CSS
        let vp = Viewport::new(400.0, 300.0, 1.0);
        let p = vp.client_to_surface(Vec2::new(100.0, 75.0), Vec2::ZERO, Vec2::new(200.0, 150.0));
        assert!((p - Vec2::new(200.0, 150.0)).length() < 1e-4);
    }
}
