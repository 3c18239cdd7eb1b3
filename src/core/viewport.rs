use super::constants::{BASE_ZOOM, REVEAL_THRESHOLD, ZOOM_FACTOR, ZOOM_INTENSITY};

/// Vertical extent of a node in viewport coordinates (px, top of viewport = 0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    /// Same rect after the page scrolled down by `dy` px.
    #[inline]
    pub fn scrolled_by(&self, dy: f64) -> Self {
        Self {
            top: self.top - dy,
            bottom: self.bottom - dy,
        }
    }
}

/// Numeric tuning for reveal and zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollParams {
    pub reveal_threshold: f64,
    pub zoom_intensity: f64,
    pub base_zoom: f64,
    pub zoom_factor: f64,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            reveal_threshold: REVEAL_THRESHOLD,
            zoom_intensity: ZOOM_INTENSITY,
            base_zoom: BASE_ZOOM,
            zoom_factor: ZOOM_FACTOR,
        }
    }
}

impl ScrollParams {
    /// Largest scale `zoom_scale` can produce.
    #[inline]
    pub fn max_zoom(&self) -> f64 {
        self.base_zoom + self.zoom_factor
    }
}

/// True once the top edge has crossed `threshold * viewport_height` and the
/// bottom edge has not scrolled above the viewport.
#[inline]
pub fn is_in_viewport(rect: Rect, viewport_height: f64, threshold: f64) -> bool {
    rect.top <= viewport_height * threshold && rect.bottom >= 0.0
}

#[inline]
pub fn is_completely_out_of_viewport(rect: Rect, viewport_height: f64) -> bool {
    rect.bottom < 0.0 || rect.top > viewport_height
}

/// Bell-shaped closeness of the rect's center to the viewport's center.
///
/// 1.0 when the centers coincide, falling linearly to 0.0 at
/// `1 / intensity` half-viewports away. 0.0 when the rect does not
/// intersect the viewport at all.
pub fn scroll_progress(rect: Rect, viewport_height: f64, intensity: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    if rect.bottom <= 0.0 || rect.top >= viewport_height {
        return 0.0;
    }
    let half = viewport_height / 2.0;
    let distance = (rect.center() - half).abs() / half;
    (1.0 - (distance * intensity).min(1.0)).clamp(0.0, 1.0)
}

#[inline]
pub fn zoom_scale(progress: f64, params: &ScrollParams) -> f64 {
    params.base_zoom + params.zoom_factor * progress.clamp(0.0, 1.0)
}

#[inline]
pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}
