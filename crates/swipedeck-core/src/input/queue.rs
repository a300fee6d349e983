use heapless::Deque;

use super::{InputEvent, InputProvider};

/// Bounded FIFO fed from host event callbacks and drained by the deck.
#[derive(Debug)]
pub struct QueuedInput<const N: usize> {
    events: Deque<InputEvent, N>,
    dropped: u32,
}

impl<const N: usize> Default for QueuedInput<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> QueuedInput<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Queues an event; a full queue hands the event back.
    pub fn push(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.events.push_back(event).inspect_err(|_| {
            self.dropped = self.dropped.saturating_add(1);
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events rejected because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> InputProvider for QueuedInput<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
