use std::collections::VecDeque;

/// Rotating eligibility pool over ranked candidate indices.
///
/// Candidates are drawn from the front of the fresh queue; once placed they
/// move to the back of a used queue. The used queue only becomes drawable
/// when the fresh queue is exhausted, so no candidate is drawn an (n+1)th
/// time before every other candidate has been drawn n times. Within each
/// pass the original ranking order is preserved.
#[derive(Debug, Clone)]
pub struct RotationQueue {
    fresh: VecDeque<usize>,
    used: VecDeque<usize>,
}

impl RotationQueue {
    pub fn new(ranked: impl IntoIterator<Item = usize>) -> Self {
        RotationQueue {
            fresh: ranked.into_iter().collect(),
            used: VecDeque::new(),
        }
    }

    /// Draw the next eligible candidate, or `None` for an empty pool.
    pub fn draw(&mut self) -> Option<usize> {
        if self.fresh.is_empty() {
            std::mem::swap(&mut self.fresh, &mut self.used);
        }
        let idx = self.fresh.pop_front()?;
        self.used.push_back(idx);
        Some(idx)
    }
}
