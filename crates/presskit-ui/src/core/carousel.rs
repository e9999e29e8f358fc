//! Clamped carousel index.
//!
//! # Design
//! - Index is bounded to `[0, item_count - 1]`; no wraparound.
//! - An empty carousel stays at index 0 with zero offset.

/// Position of a horizontal item strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    item_count: usize,
}

impl Carousel {
    /// Carousel at the first of `item_count` items.
    #[must_use]
    pub const fn new(item_count: usize) -> Self {
        Self {
            index: 0,
            item_count,
        }
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Step back one item, stopping at the first.
    pub const fn step_prev(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Step forward one item, stopping at the last.
    pub fn step_next(&mut self) -> usize {
        let last = self.item_count.saturating_sub(1);
        self.index = (self.index + 1).min(last);
        self.index
    }

    /// Pixel offset for items `item_width` wide.
    #[must_use]
    pub fn offset(&self, item_width: f64) -> f64 {
        f64::from(u32::try_from(self.index).unwrap_or(u32::MAX)) * item_width
    }

    /// CSS `transform` value for the strip.
    #[must_use]
    pub fn transform(&self, item_width: f64) -> String {
        format!("translateX(-{}px)", self.offset(item_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_offset() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.transform(320.0), "translateX(-0px)");
    }

    #[test]
    fn prev_clamps_at_first_item() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.step_prev(), 0);
        assert_eq!(carousel.step_prev(), 0);
    }

    #[test]
    fn next_clamps_at_last_item() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.step_next(), 1);
        assert_eq!(carousel.step_next(), 2);
        assert_eq!(carousel.step_next(), 2);
        assert_eq!(carousel.transform(320.0), "translateX(-640px)");
        assert_eq!(carousel.step_prev(), 1);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        for count in 0..5 {
            let mut carousel = Carousel::new(count);
            for step in 0..20 {
                if step % 3 == 0 {
                    carousel.step_prev();
                } else {
                    carousel.step_next();
                }
                assert!(carousel.index() < count.max(1));
            }
        }
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.step_next(), 0);
        assert_eq!(carousel.offset(300.0), 0.0);
    }

    #[test]
    fn fractional_widths_render_verbatim() {
        let mut carousel = Carousel::new(2);
        carousel.step_next();
        assert_eq!(carousel.transform(280.5), "translateX(-280.5px)");
    }
}
