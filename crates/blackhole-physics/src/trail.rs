//! Fixed-capacity position history

use crate::constants::TRAIL_LENGTH;
use glam::DVec3;

/// The most recent `TRAIL_LENGTH` positions of a particle, newest first.
///
/// Backed by an inline ring buffer so pushing a position never allocates.
#[derive(Debug, Clone, Copy)]
pub struct Trail {
    positions: [DVec3; TRAIL_LENGTH],
    /// Slot holding the newest position
    head: usize,
    len: usize,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            positions: [DVec3::ZERO; TRAIL_LENGTH],
            head: 0,
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Insert `position` as the newest entry, evicting the oldest when full.
    pub fn push_front(&mut self, position: DVec3) {
        self.head = (self.head + TRAIL_LENGTH - 1) % TRAIL_LENGTH;
        self.positions[self.head] = position;
        self.len = (self.len + 1).min(TRAIL_LENGTH);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position `index` steps back in time (0 is the newest).
    pub fn get(&self, index: usize) -> Option<DVec3> {
        (index < self.len).then(|| self.positions[(self.head + index) % TRAIL_LENGTH])
    }

    pub fn newest(&self) -> Option<DVec3> {
        self.get(0)
    }

    /// Positions from newest to oldest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        (0..self.len).map(move |i| self.positions[(self.head + i) % TRAIL_LENGTH])
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> DVec3 {
        DVec3::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn test_newest_first() {
        let mut trail = Trail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.newest(), None);

        trail.push_front(p(1));
        trail.push_front(p(2));
        trail.push_front(p(3));

        assert_eq!(trail.len(), 3);
        assert_eq!(trail.iter().collect::<Vec<_>>(), vec![p(3), p(2), p(1)]);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut trail = Trail::new();
        for i in 0..TRAIL_LENGTH + 5 {
            trail.push_front(p(i));
            assert!(trail.len() <= TRAIL_LENGTH);
        }

        assert_eq!(trail.len(), TRAIL_LENGTH);
        assert_eq!(trail.newest(), Some(p(TRAIL_LENGTH + 4)));
        assert_eq!(trail.get(TRAIL_LENGTH - 1), Some(p(5)));
        assert_eq!(trail.get(TRAIL_LENGTH), None);
    }

    #[test]
    fn test_clear() {
        let mut trail = Trail::new();
        trail.push_front(p(1));
        trail.push_front(p(2));
        trail.clear();
        assert!(trail.is_empty());

        trail.push_front(p(7));
        assert_eq!(trail.iter().collect::<Vec<_>>(), vec![p(7)]);
    }
}
