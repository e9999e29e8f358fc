//! Live-show carousel bound to its rendered strip.

use presskit_dom::Dom;

use crate::core::carousel::Carousel;
use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::features::sections::CarouselMount;

/// Carousel state plus the elements it drives.
pub struct CarouselView<N> {
    state: Carousel,
    section: String,
    strip: N,
    first_item: Option<N>,
    prev: N,
    next: N,
    diagnostics: Diagnostics,
}

impl<N: Clone> CarouselView<N> {
    /// Bind a rendered carousel and apply the initial (zero) offset.
    #[must_use]
    pub fn attach<D: Dom<Node = N>>(
        dom: &D,
        mount: CarouselMount<N>,
        diagnostics: Diagnostics,
    ) -> Self {
        let view = Self {
            state: Carousel::new(mount.item_count),
            section: mount.section,
            strip: mount.strip,
            first_item: mount.first_item,
            prev: mount.prev,
            next: mount.next,
            diagnostics,
        };
        view.update(dom);
        view
    }

    /// Current position.
    #[must_use]
    pub const fn state(&self) -> Carousel {
        self.state
    }

    /// Previous and next buttons.
    #[must_use]
    pub fn controls(&self) -> (N, N) {
        (self.prev.clone(), self.next.clone())
    }

    /// Step back one item.
    pub fn prev<D: Dom<Node = N>>(&mut self, dom: &D) {
        self.state.step_prev();
        self.update(dom);
    }

    /// Step forward one item.
    pub fn next<D: Dom<Node = N>>(&mut self, dom: &D) {
        self.state.step_next();
        self.update(dom);
    }

    /// Re-measure the first item and move the strip to the current index.
    pub fn update<D: Dom<Node = N>>(&self, dom: &D) {
        let width = self
            .first_item
            .as_ref()
            .map_or(0.0, |item| dom.offset_width(item));
        let transform = self.state.transform(width);
        if let Err(err) = dom.set_style(&self.strip, "transform", &transform) {
            self.diagnostics.emit(Diagnostic::DomFailure {
                context: format!("moving carousel '{}'", self.section),
                detail: err.to_string(),
            });
        }
    }
}
