// In-memory page node for exercising the effects without a browser.
// Only `.class` selectors are understood by `closest_ancestor`.

use crate::scroll_core::node::ViewportNode;
use crate::scroll_core::viewport::Rect;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    rect: Rect,
    classes: Vec<String>,
    transform: Option<String>,
    z_index: Option<i32>,
    parent: Option<MockNode>,
}

#[derive(Clone, Default)]
pub struct MockNode(Rc<RefCell<Inner>>);

impl MockNode {
    pub fn new(top: f64, height: f64) -> Self {
        let node = Self::default();
        node.set_rect(Rect::new(top, height));
        node
    }

    pub fn with_classes(self, classes: &[&str]) -> Self {
        for c in classes {
            self.add_class(c);
        }
        self
    }

    pub fn child_of(self, parent: &MockNode) -> Self {
        self.0.borrow_mut().parent = Some(parent.clone());
        self
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }

    /// Moves the node as if the page scrolled down by `dy`.
    pub fn scroll_by(&self, dy: f64) {
        let moved = self.0.borrow().rect.scrolled_by(dy);
        self.set_rect(moved);
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn transform(&self) -> Option<String> {
        self.0.borrow().transform.clone()
    }

    pub fn z_index(&self) -> Option<i32> {
        self.0.borrow().z_index
    }

    /// Parses the `scale(..)` transform back into a number.
    pub fn scale(&self) -> Option<f64> {
        let t = self.transform()?;
        t.strip_prefix("scale(")?.strip_suffix(')')?.parse().ok()
    }

    pub fn same_node(&self, other: &MockNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ViewportNode for MockNode {
    fn rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_transform(&self, value: &str) {
        self.0.borrow_mut().transform = Some(value.to_string());
    }

    fn set_z_index(&self, z: Option<i32>) {
        self.0.borrow_mut().z_index = z;
    }

    fn closest_ancestor(&self, selector: &str) -> Option<Self> {
        let class = selector.strip_prefix('.')?;
        let mut cur = Some(self.clone());
        while let Some(node) = cur {
            if node.has_class(class) {
                return Some(node);
            }
            cur = node.0.borrow().parent.clone();
        }
        None
    }
}
