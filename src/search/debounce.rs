// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input debouncing without owning a timer.
//!
//! The debouncer holds at most one pending value. Each keystroke replaces it
//! and bumps a generation counter; the host schedules a real timer for the
//! returned ticket. When a timer fires, only the ticket from the latest
//! keystroke yields a value, so stale timers are harmless even if the host
//! never clears them.
//!
//! Time is plain milliseconds supplied by the caller (`Date.now()` in the
//! browser, a fake clock in tests). There is no ambient clock in here.

/// Handle for one scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    /// When the host should fire this ticket.
    pub due_at_ms: u64,
}

impl DebounceTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    due_at_ms: u64,
    value: String,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    generation: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace any pending value with `value`, due `delay_ms` from `now_ms`.
    pub fn schedule(&mut self, value: impl Into<String>, now_ms: u64) -> DebounceTicket {
        self.generation += 1;
        let due_at_ms = now_ms.saturating_add(self.delay_ms);
        self.pending = Some(Pending {
            generation: self.generation,
            due_at_ms,
            value: value.into(),
        });
        DebounceTicket {
            generation: self.generation,
            due_at_ms,
        }
    }

    /// Timer callback: take the pending value if `ticket` is still current.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<String> {
        match &self.pending {
            Some(p) if p.generation == ticket.generation => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Clock-driven alternative to [`fire`](Self::fire): take the pending
    /// value once its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        match &self.pending {
            Some(p) if now_ms >= p.due_at_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn due_at_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }
}
