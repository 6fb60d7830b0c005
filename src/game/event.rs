//! Event System
//!
//! The logic phase records what happened during a frame as events instead of
//! calling into audio directly. The screen drains the queue afterwards and
//! hands each event to whoever cares (sound effects, logging).

use macroquad::prelude::Vec2;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that happened to a droplet this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropletEvent {
    /// A new droplet entered at the top of the world
    Spawned { id: u64, x: f32 },
    /// The catcher intercepted a droplet
    Caught { id: u64, position: Vec2 },
    /// A droplet fell past the bottom edge
    Missed { id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(queue.drain().count(), 0);
    }
}
