use super::constants::{MOBILE_MAX_WIDTH, ZOOMED_MOBILE_CLASS, ZOOMED_Z_INDEX};
use super::node::ViewportNode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomState {
    #[default]
    Collapsed,
    Zoomed,
}

/// Outcome of a click on the zoom image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomTransition {
    Ignored,
    Zoom,
    Collapse,
}

#[inline]
pub fn is_mobile_width(viewport_width: f64, max_width: f64) -> bool {
    viewport_width <= max_width
}

/// Two-state tap-to-zoom machine. Zooming in requires a narrow viewport;
/// the next click always collapses.
#[derive(Clone, Copy, Debug)]
pub struct ZoomToggle {
    state: ZoomState,
    max_width: f64,
}

impl Default for ZoomToggle {
    fn default() -> Self {
        Self::new(MOBILE_MAX_WIDTH)
    }
}

impl ZoomToggle {
    pub fn new(max_width: f64) -> Self {
        Self {
            state: ZoomState::Collapsed,
            max_width,
        }
    }

    #[inline]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    #[inline]
    pub fn is_zoomed(&self) -> bool {
        self.state == ZoomState::Zoomed
    }

    pub fn click(&mut self, viewport_width: f64) -> ZoomTransition {
        match self.state {
            ZoomState::Collapsed if is_mobile_width(viewport_width, self.max_width) => {
                self.state = ZoomState::Zoomed;
                ZoomTransition::Zoom
            }
            ZoomState::Collapsed => ZoomTransition::Ignored,
            ZoomState::Zoomed => {
                self.state = ZoomState::Collapsed;
                ZoomTransition::Collapse
            }
        }
    }
}

/// Writes the visual side of a transition onto the image.
pub fn apply_transition<N: ViewportNode>(image: &N, transition: ZoomTransition) {
    match transition {
        ZoomTransition::Zoom => {
            image.add_class(ZOOMED_MOBILE_CLASS);
            image.set_z_index(Some(ZOOMED_Z_INDEX));
        }
        ZoomTransition::Collapse => {
            image.remove_class(ZOOMED_MOBILE_CLASS);
            image.set_z_index(None);
        }
        ZoomTransition::Ignored => {}
    }
}

/// Decides which touch moves to block while zoomed: single-finger drags
/// whose displacement from the touch origin is mostly horizontal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchGuard {
    origin: Option<(f64, f64)>,
}

impl TouchGuard {
    pub fn begin(&mut self, touches: u32, x: f64, y: f64) {
        self.origin = (touches == 1).then_some((x, y));
    }

    pub fn should_block(&self, touches: u32, x: f64, y: f64) -> bool {
        if touches != 1 {
            return false;
        }
        match self.origin {
            Some((ox, oy)) => is_horizontal_drag(x - ox, y - oy),
            None => false,
        }
    }
}

#[inline]
pub fn is_horizontal_drag(dx: f64, dy: f64) -> bool {
    dx.abs() > dy.abs()
}
