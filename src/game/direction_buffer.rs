use super::types::Direction;

const CAPACITY: usize = 2;

/// Bounded FIFO of pending direction changes.
///
/// Holding at most two entries debounces rapid key presses inside one
/// movement tick: a reversal can never be queued in a way that causes an
/// instant self-collision, and the player can pre-queue one extra turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionBuffer {
    slots: [Option<Direction>; CAPACITY],
    head: usize,
    len: usize,
}

impl DirectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAPACITY
    }

    /// Most recently queued direction, if any.
    pub fn last(&self) -> Option<Direction> {
        if self.len == 0 {
            return None;
        }
        self.slots[(self.head + self.len - 1) % CAPACITY]
    }

    /// Appends `direction`. Returns false when the buffer is full.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[(self.head + self.len) % CAPACITY] = Some(direction);
        self.len += 1;
        true
    }

    /// Removes and returns the oldest queued direction.
    pub fn pop_front(&mut self) -> Option<Direction> {
        if self.len == 0 {
            return None;
        }
        let direction = self.slots[self.head].take();
        self.head = (self.head + 1) % CAPACITY;
        self.len -= 1;
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let buffer = DirectionBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.last(), None);
    }

    #[test]
    fn test_push_pop_fifo_order() {
        let mut buffer = DirectionBuffer::new();
        assert!(buffer.push(Direction::Up));
        assert!(buffer.push(Direction::Left));
        assert_eq!(buffer.pop_front(), Some(Direction::Up));
        assert_eq!(buffer.pop_front(), Some(Direction::Left));
        assert_eq!(buffer.pop_front(), None);
    }

    #[test]
    fn test_push_beyond_capacity_rejected() {
        let mut buffer = DirectionBuffer::new();
        assert!(buffer.push(Direction::Up));
        assert!(buffer.push(Direction::Left));
        assert!(!buffer.push(Direction::Down));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_last_tracks_newest_entry() {
        let mut buffer = DirectionBuffer::new();
        buffer.push(Direction::Up);
        assert_eq!(buffer.last(), Some(Direction::Up));
        buffer.push(Direction::Right);
        assert_eq!(buffer.last(), Some(Direction::Right));
        buffer.pop_front();
        assert_eq!(buffer.last(), Some(Direction::Right));
    }

    #[test]
    fn test_wraps_around_after_interleaved_use() {
        let mut buffer = DirectionBuffer::new();
        for _ in 0..5 {
            assert!(buffer.push(Direction::Down));
            assert!(buffer.push(Direction::Right));
            assert_eq!(buffer.pop_front(), Some(Direction::Down));
            assert_eq!(buffer.pop_front(), Some(Direction::Right));
        }
        assert!(buffer.is_empty());
    }
}
