//! Geometry for a horizontal card strip inside a scrollable viewport.

/// Position and size of one card along the scroll axis.
///
/// Offsets are measured from the start of the scrollable content, the same
/// coordinate space as the scroll position itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    /// Horizontal offset of the card's left edge in pixels
    pub offset: f64,
    /// Card width in pixels
    pub width: f64,
}

impl CardMetrics {
    /// Create metrics for a card at the given offset and width.
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// Horizontal center of the card.
    #[inline]
    pub fn center(&self) -> f64 {
        self.offset + self.width / 2.0
    }
}

/// Snapshot of the gallery's layout: viewport width plus the ordered card
/// metrics. Card identity is positional; index `i` here is indicator `i`.
///
/// Hosts rebuild this snapshot whenever the underlying layout may have
/// changed (resize, font load); the controller treats each snapshot as
/// authoritative for the duration of one operation.
#[derive(Clone, Debug, Default)]
pub struct GalleryLayout {
    /// Visible viewport width in pixels
    pub viewport_width: f64,
    /// Ordered card metrics, index-aligned with the indicator row
    pub cards: Vec<CardMetrics>,
}

impl GalleryLayout {
    /// Create a layout from explicit card metrics.
    pub fn new(viewport_width: f64, cards: Vec<CardMetrics>) -> Self {
        Self {
            viewport_width,
            cards,
        }
    }

    /// Create a layout of `count` equally sized cards separated by `spacing`.
    ///
    /// Convenience for hosts with uniform strips and for tests.
    pub fn uniform(viewport_width: f64, count: usize, card_width: f64, spacing: f64) -> Self {
        let cards = (0..count)
            .map(|i| CardMetrics::new(i as f64 * (card_width + spacing), card_width))
            .collect();
        Self {
            viewport_width,
            cards,
        }
    }

    /// Number of cards in the strip.
    #[inline]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Total width of the scrollable content.
    pub fn content_width(&self) -> f64 {
        self.cards
            .last()
            .map(|c| c.offset + c.width)
            .unwrap_or(0.0)
    }

    /// Largest meaningful scroll offset (content past the viewport).
    ///
    /// Zero when the content fits entirely in the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    /// Scroll offset that centers the card at `index` in the viewport.
    ///
    /// Returns `None` when no card exists at that index. The result may fall
    /// outside `[0, max_scroll]`; callers clamp it the way a real viewport
    /// would.
    pub fn centered_offset(&self, index: usize) -> Option<f64> {
        let card = self.cards.get(index)?;
        Some(card.offset - self.viewport_width / 2.0 + card.width / 2.0)
    }

    /// Center of the visible viewport for a given scroll offset.
    #[inline]
    pub fn visible_center(&self, scroll_x: f64) -> f64 {
        scroll_x + self.viewport_width / 2.0
    }

    /// Index of the card whose center is nearest to `center_x`.
    ///
    /// Ties go to the lowest index. Returns `None` for an empty strip.
    pub fn nearest_card(&self, center_x: f64) -> Option<usize> {
        let mut closest = None;
        let mut closest_distance = f64::INFINITY;
        for (i, card) in self.cards.iter().enumerate() {
            let distance = (card.center() - center_x).abs();
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(i);
            }
        }
        closest
    }
}
