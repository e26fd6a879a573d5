//! Last-event-wins gate for debounced input.
//!
//! Every input event arms the gate and receives a ticket. When the event's
//! timer fires, its value is applied only if no later event re-armed the gate
//! in the meantime.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

impl DebounceGate {
    /// Supersedes every ticket handed out before.
    pub fn arm(&mut self) -> DebounceTicket {
        self.latest = self.latest.wrapping_add(1);
        DebounceTicket(self.latest)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.latest
    }
}
