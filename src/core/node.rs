use super::viewport::Rect;

/// What the effects need from a page node: geometry plus class/style
/// mutation. Implemented for `web_sys::HtmlElement` in the browser build.
pub trait ViewportNode: Sized {
    fn rect(&self) -> Rect;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Inline `transform` style.
    fn set_transform(&self, value: &str);
    /// Inline `z-index`; `None` clears it.
    fn set_z_index(&self, z: Option<i32>);
    /// Nearest inclusive ancestor matching `selector`.
    fn closest_ancestor(&self, selector: &str) -> Option<Self>;
}
