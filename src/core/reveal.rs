use super::constants::{ANIMATED_CLASS, ANIMATE_SECTION_CLASS, ZOOM_CONTAINER_SELECTORS};
use super::node::ViewportNode;
use super::viewport::{
    is_completely_out_of_viewport, is_in_viewport, scale_transform, scroll_progress, zoom_scale,
    ScrollParams,
};

pub struct TrackedSection<N> {
    pub node: N,
    pub animated: bool,
}

/// Counts from one `handle_frame` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub revealed: usize,
    pub hidden: usize,
    pub zoomed: usize,
}

impl FrameReport {
    #[inline]
    pub fn changed_sections(&self) -> bool {
        self.revealed > 0 || self.hidden > 0
    }
}

/// Reveal-on-entry for content sections and center-weighted zoom for images.
pub struct ScrollEffects<N: ViewportNode> {
    sections: Vec<TrackedSection<N>>,
    images: Vec<N>,
    params: ScrollParams,
}

impl<N: ViewportNode> ScrollEffects<N> {
    /// Tags every section as animatable; none start animated.
    pub fn new(sections: Vec<N>, images: Vec<N>, params: ScrollParams) -> Self {
        let sections = sections
            .into_iter()
            .map(|node| {
                node.add_class(ANIMATE_SECTION_CLASS);
                TrackedSection {
                    node,
                    animated: false,
                }
            })
            .collect();
        Self {
            sections,
            images,
            params,
        }
    }

    pub fn sections(&self) -> &[TrackedSection<N>] {
        &self.sections
    }

    pub fn handle_frame(&mut self, viewport_height: f64) -> FrameReport {
        let mut report = FrameReport::default();
        let threshold = self.params.reveal_threshold;
        for section in &mut self.sections {
            let rect = section.node.rect();
            if !section.animated && is_in_viewport(rect, viewport_height, threshold) {
                section.node.add_class(ANIMATED_CLASS);
                section.animated = true;
                report.revealed += 1;
            } else if section.animated && is_completely_out_of_viewport(rect, viewport_height) {
                section.node.remove_class(ANIMATED_CLASS);
                section.animated = false;
                report.hidden += 1;
            }
        }
        report.zoomed = self.apply_zoom(viewport_height);
        report
    }

    /// Scales each image by its container's scroll progress. Images without
    /// a container are left alone. Returns how many images were updated.
    pub fn apply_zoom(&self, viewport_height: f64) -> usize {
        let mut updated = 0;
        for image in &self.images {
            let Some(container) = zoom_container(image) else {
                continue;
            };
            let progress =
                scroll_progress(container.rect(), viewport_height, self.params.zoom_intensity);
            let scale = zoom_scale(progress, &self.params);
            image.set_transform(&scale_transform(scale));
            updated += 1;
        }
        updated
    }
}

/// First container selector with a matching ancestor wins.
pub fn zoom_container<N: ViewportNode>(image: &N) -> Option<N> {
    ZOOM_CONTAINER_SELECTORS
        .iter()
        .find_map(|selector| image.closest_ancestor(selector))
}
