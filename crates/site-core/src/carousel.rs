/// Slide position for the project carousel. Navigation wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total_slides: usize,
}

impl Carousel {
    /// `None` when there is nothing to page through.
    pub fn new(item_count: usize, items_per_slide: usize) -> Option<Self> {
        if item_count == 0 || items_per_slide == 0 {
            return None;
        }
        Some(Self {
            current: 0,
            total_slides: item_count.div_ceil(items_per_slide),
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn next(&mut self) -> usize {
        self.current = if self.current + 1 < self.total_slides {
            self.current + 1
        } else {
            0
        };
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = if self.current > 0 {
            self.current - 1
        } else {
            self.total_slides - 1
        };
        self.current
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, slide: usize) -> usize {
        if slide < self.total_slides {
            self.current = slide;
        }
        self.current
    }

    /// `translateX` percentage for the track, which is as wide as all slides.
    pub fn track_offset_percent(&self) -> f64 {
        -(self.current as f64) * (100.0 / self.total_slides as f64)
    }
}
