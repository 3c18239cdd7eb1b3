// Tuning constants shared by the scroll and zoom effects.

// Reveal: a section's top edge must rise above this fraction of the viewport
pub const REVEAL_THRESHOLD: f64 = 0.85;

// Zoom curve
pub const ZOOM_INTENSITY: f64 = 1.5; // higher = falls off faster away from center
pub const BASE_ZOOM: f64 = 1.0; // scale when the container is off-center
pub const ZOOM_FACTOR: f64 = 0.1; // extra scale at perfect center

// Mobile tap-to-zoom
pub const MOBILE_MAX_WIDTH: f64 = 640.0; // logical px
pub const ZOOMED_Z_INDEX: i32 = 9999;

// Classes consumed by the stylesheet
pub const ANIMATE_SECTION_CLASS: &str = "animate-section";
pub const ANIMATED_CLASS: &str = "animated";
pub const ZOOMED_MOBILE_CLASS: &str = "zoomed-mobile";

// Zoom containers, in priority order
pub const ZOOM_CONTAINER_SELECTORS: [&str; 2] = [".full-viewport", ".site-card"];
