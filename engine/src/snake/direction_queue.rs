use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::types::Direction;

pub const DIRECTION_QUEUE_CAPACITY: usize = 2;

/// Turns requested faster than the tick rate, consumed one per tick.
#[derive(Clone, Debug)]
pub struct DirectionQueue {
    buffer: AllocRingBuffer<Direction>,
}

impl Default for DirectionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self {
            buffer: AllocRingBuffer::new(DIRECTION_QUEUE_CAPACITY),
        }
    }

    /// The direction the snake will be travelling once every queued turn
    /// has been applied.
    pub fn effective_last(&self, current: Direction) -> Direction {
        self.buffer.back().copied().unwrap_or(current)
    }

    /// Queues `direction` unless the queue is full or it repeats or reverses
    /// the effective last direction.
    pub fn try_push(&mut self, current: Direction, direction: Direction) -> bool {
        if self.buffer.is_full() {
            return false;
        }

        let last = self.effective_last(current);
        if direction == last || direction.is_opposite(&last) {
            return false;
        }

        // Never full here, so nothing is overwritten.
        let _ = self.buffer.enqueue(direction);
        true
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.buffer.dequeue()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.buffer.iter().copied()
    }
}
