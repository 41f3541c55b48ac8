/// Horizontal swipe recognized from a touch press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Rightward travel. `from_edge` is set when the touch started inside
    /// the left edge zone.
    Right { from_edge: bool },
    Left,
}

/// Classify a touch from `start_x` to `end_x`.
///
/// Travel must strictly exceed `threshold` to count. An opening swipe must
/// start strictly inside `edge_zone`.
pub fn classify_swipe(
    start_x: f32,
    end_x: f32,
    threshold: f32,
    edge_zone: f32,
) -> Option<Swipe> {
    let distance = end_x - start_x;
    if distance.abs() <= threshold {
        return None;
    }

    if distance > 0.0 {
        Some(Swipe::Right {
            from_edge: start_x < edge_zone,
        })
    } else {
        Some(Swipe::Left)
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Complete the touch, returning `(start_x, end_x)` when a start was
    /// recorded.
    pub fn finish(&mut self, x: f32) -> Option<(f32, f32)> {
        self.start_x.take().map(|start| (start, x))
    }
}
