//! Wrapping image carousel.

/// Position within a product's image gallery.
///
/// Moving past either end wraps around. A carousel over zero images stays at
/// index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Create a carousel over `len` images, starting at `index` (wrapped).
    #[must_use]
    pub const fn new(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { len, index }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Index after the current one, wrapping to the first.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    /// Index before the current one, wrapping to the last.
    #[must_use]
    pub const fn prev_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + self.len - 1) % self.len
        }
    }

    pub const fn next(&mut self) {
        self.index = self.next_index();
    }

    pub const fn prev(&mut self) {
        self.index = self.prev_index();
    }

    /// Arrows and dots are only shown for more than one image.
    #[must_use]
    pub const fn has_controls(&self) -> bool {
        self.len > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::new(3, 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(3, 0);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(4, 1);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 1);
        for _ in 0..4 {
            carousel.prev();
        }
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_new_wraps_out_of_range_index() {
        assert_eq!(Carousel::new(3, 7).index(), 1);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = Carousel::new(0, 5);
        assert_eq!(empty.index(), 0);
        assert_eq!(empty.next_index(), 0);
        assert!(!empty.has_controls());

        let mut single = Carousel::new(1, 0);
        single.next();
        assert_eq!(single.index(), 0);
        assert!(!single.has_controls());
    }

    #[test]
    fn test_neighbours_do_not_move() {
        let carousel = Carousel::new(5, 0);
        assert_eq!(carousel.next_index(), 1);
        assert_eq!(carousel.prev_index(), 4);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.has_controls());
    }
}
