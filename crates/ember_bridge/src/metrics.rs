//! Viewport metrics
//!
//! Physical measurements arrive from the platform in raw pixels; logical
//! values are derived at the boundary so the runtime side never
//! duplicates pixel-ratio arithmetic.

/// Physical viewport measurements for one host window/surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Device pixel ratio, > 0
    pub device_pixel_ratio: f64,
    pub physical_width: f64,
    pub physical_height: f64,
    pub physical_padding_top: f64,
    pub physical_padding_right: f64,
    pub physical_padding_bottom: f64,
    pub physical_padding_left: f64,
}

impl ViewportMetrics {
    pub fn logical_width(&self) -> f64 {
        self.physical_width / self.device_pixel_ratio
    }

    pub fn logical_height(&self) -> f64 {
        self.physical_height / self.device_pixel_ratio
    }

    pub fn logical_padding_top(&self) -> f64 {
        self.physical_padding_top / self.device_pixel_ratio
    }

    pub fn logical_padding_right(&self) -> f64 {
        self.physical_padding_right / self.device_pixel_ratio
    }

    pub fn logical_padding_bottom(&self) -> f64 {
        self.physical_padding_bottom / self.device_pixel_ratio
    }

    pub fn logical_padding_left(&self) -> f64 {
        self.physical_padding_left / self.device_pixel_ratio
    }
}
