//! Values that revert to empty after a timeout.

use heapless::Deque;

const MAX_PENDING_EXPIRIES: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Expiry {
    generation: u64,
    due_ms: u64,
}

/// A value that clears itself `timeout_ms` after it was last set.
///
/// Every [`Transient::set`] bumps a generation counter and schedules an expiry
/// carrying that generation. An expiry that fires after a newer `set` finds a
/// different generation and does nothing, so only the latest value's own
/// timeout can clear it.
#[derive(Debug)]
pub struct Transient<T> {
    value: Option<T>,
    timeout_ms: u64,
    generation: u64,
    pending: Deque<Expiry, MAX_PENDING_EXPIRIES>,
}

impl<T> Transient<T> {
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            value: None,
            timeout_ms,
            generation: 0,
            pending: Deque::new(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: T, now_ms: u64) {
        self.generation = self.generation.wrapping_add(1);
        self.value = Some(value);

        let expiry = Expiry {
            generation: self.generation,
            due_ms: now_ms.saturating_add(self.timeout_ms),
        };
        if self.pending.is_full() {
            // Oldest entries belong to superseded generations.
            let _ = self.pending.pop_front();
        }
        let _ = self.pending.push_back(expiry);
    }

    /// Fires every expiry due at `now_ms`. Returns `true` when the value was
    /// cleared by this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut cleared = false;

        while let Some(expiry) = self.pending.front().copied() {
            if expiry.due_ms > now_ms {
                break;
            }
            let _ = self.pending.pop_front();

            if expiry.generation == self.generation && self.value.is_some() {
                self.value = None;
                cleared = true;
            }
        }

        cleared
    }

    /// Clears the value and invalidates every scheduled expiry.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.value = None;
        self.pending.clear();
    }
}
