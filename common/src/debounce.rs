//! Debounced input value.
//!
//! The value keeps the raw text the user typed and a separate settled copy.
//! Every edit hands out a ticket; a timer owned by the caller settles the
//! ticket once the quiet period has elapsed. A newer edit invalidates older
//! tickets, so an expired timer that fires late does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Debounced<T> {
    raw: T,
    settled: T,
    generation: u64,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(value: T) -> Self {
        Self { raw: value.clone(), settled: value, generation: 0 }
    }

    pub fn raw(&self) -> &T {
        &self.raw
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.raw != self.settled
    }

    pub fn edit(&mut self, value: T) -> DebounceTicket {
        self.raw = value;
        self.generation += 1;
        DebounceTicket(self.generation)
    }

    /// Returns `true` when the settled value changed.
    pub fn settle(&mut self, ticket: DebounceTicket) -> bool {
        if ticket.0 != self.generation || self.settled == self.raw {
            return false;
        }
        self.settled = self.raw.clone();
        true
    }
}
