use crate::config::ControllerConfig;
use crate::geometry::Rect;

/// One-shot entrance tracking for content cards.
///
/// A card is revealed the first time the visible fraction of its area
/// reaches the threshold. The observed viewport has its bottom edge pulled
/// in by the configured margin, so cards reveal slightly after they
/// scroll into view. Revealed cards never hide again.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f32,
    bottom_margin: f32,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(card_count: usize, threshold: f32, bottom_margin: f32) -> Self {
        Self {
            threshold,
            bottom_margin,
            revealed: vec![false; card_count],
        }
    }

    pub fn from_config(card_count: usize, config: &ControllerConfig) -> Self {
        Self::new(
            card_count,
            config.reveal_threshold,
            config.reveal_bottom_margin,
        )
    }

    /// Observe card bounds against `viewport` and return the indices that
    /// were revealed by this observation.
    ///
    /// `cards` and `viewport` must share a coordinate space. Cards beyond
    /// the tracked count are ignored.
    pub fn observe(&mut self, viewport: Rect, cards: &[Rect]) -> Vec<usize> {
        let root = viewport.shrink_bottom(self.bottom_margin);
        let mut newly_revealed = Vec::new();

        for (index, (card, revealed)) in
            cards.iter().zip(self.revealed.iter_mut()).enumerate()
        {
            if *revealed {
                continue;
            }
            if intersection_ratio(card, &root) >= self.threshold {
                *revealed = true;
                newly_revealed.push(index);
            }
        }

        newly_revealed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|revealed| **revealed).count()
    }
}

fn intersection_ratio(card: &Rect, root: &Rect) -> f32 {
    let Some(shared) = card.intersection(root) else {
        return 0.0;
    };

    let area = card.area();
    if area <= 0.0 {
        return 1.0;
    }

    shared.area() / area
}
