#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in either device or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state over the fixed-size logical page.
///
/// `pan_x` / `pan_y` are device pixels.
/// `zoom` is a scale factor (1.0 = no zoom), always within `[ZOOM_MIN, ZOOM_MAX]`.
/// `origin` is the on-screen top-left anchor of the canvas element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    zoom: f64,
    pub origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: DEFAULT_ZOOM, origin: Point::default() }
    }
}

impl Viewport {
    /// Build a viewport with an explicit pan and zoom. The zoom is clamped.
    #[must_use]
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self { pan_x, pan_y, zoom: clamp_zoom(zoom), origin: Point::default() }
    }

    /// Same viewport anchored at a different on-screen origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan_x = pan.x;
        self.pan_y = pan.y;
    }

    /// Set the zoom factor, clamped to the allowed range. Pan is untouched.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Step the zoom up by one increment. Returns whether it changed.
    pub fn zoom_in(&mut self) -> bool {
        let before = self.zoom;
        self.set_zoom(before + ZOOM_STEP);
        self.zoom != before
    }

    /// Step the zoom down by one increment. Returns whether it changed.
    pub fn zoom_out(&mut self) -> bool {
        let before = self.zoom;
        self.set_zoom(before - ZOOM_STEP);
        self.zoom != before
    }

    /// Back to the load-time view: no pan, default zoom. Origin is kept.
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = DEFAULT_ZOOM;
    }

    /// Convert a device-space point (pixels) to logical page coordinates.
    #[must_use]
    pub fn device_to_logical(&self, device: Point) -> Point {
        Point {
            x: (device.x - self.origin.x - self.pan_x) / self.zoom,
            y: (device.y - self.origin.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a logical page point to device pixels. This is the render transform.
    #[must_use]
    pub fn logical_to_device(&self, logical: Point) -> Point {
        Point {
            x: logical.x * self.zoom + self.pan_x + self.origin.x,
            y: logical.y * self.zoom + self.pan_y + self.origin.y,
        }
    }

    /// Convert a device-space distance (pixels) to a logical distance.
    #[must_use]
    pub fn device_dist_to_logical(&self, device_dist: f64) -> f64 {
        device_dist / self.zoom
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return DEFAULT_ZOOM;
    }
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}
