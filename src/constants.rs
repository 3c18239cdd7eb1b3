/// DOM hooks the effects attach to.
///
/// Selectors match the page markup; class names written back to the page
/// live in `core::constants`.
// Sections that fade/blur in on viewport entry (querySelectorAll dedupes overlaps)
pub const SECTION_SELECTOR: &str = ".content-block-wrapper.grid-item, \
    #feature-section-1 .content-block-wrapper, \
    #feature-section-2 .content-block-wrapper, \
    .site-card h3, \
    .content-block-wrapper, \
    .detail-image";

// Images scaled by their container's scroll progress
pub const ZOOM_IMAGE_SELECTOR: &str =
    ".parallax-image, .background-image, .site-image img, .detail-image";

// Tap-to-zoom target on narrow viewports
pub const MOBILE_ZOOM_IMAGE_ID: &str = "sense-of-place-map";
