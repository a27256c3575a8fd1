//! Shared highlight state (single writer, many readers).
//!
//! One path request may be outstanding per user-triggered highlight action.
//! Triggering while a highlight is applied toggles it off without a new
//! request. Triggering while a request is in flight races the first: the
//! last response to resolve wins and overwrites the state.

use tracing::debug;

/// Proof that a request was issued. Consumed on resolution, so a ticket
/// cannot resolve twice.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a trigger decided.
#[derive(Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A highlight was applied; it has been cleared. No request issued.
    Cleared,
    /// No highlight was applied; the caller should issue a request and
    /// resolve it with this ticket.
    Request(Ticket),
}

/// The shared highlight state.
#[derive(Debug, Default)]
pub struct HighlightState {
    applied: Option<Vec<String>>,
    next_ticket: u64,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a user trigger: toggles an applied highlight off, otherwise
    /// hands out a ticket for a new request.
    pub fn trigger(&mut self) -> Trigger {
        if self.applied.is_some() {
            debug!("highlight trigger: clearing applied selection");
            self.applied = None;
            return Trigger::Cleared;
        }
        self.next_ticket += 1;
        debug!(ticket = self.next_ticket, "highlight trigger: issuing request");
        Trigger::Request(Ticket(self.next_ticket))
    }

    /// Applies a resolved selection. Every resolution overwrites whatever
    /// is applied, regardless of ticket age. An empty selection clears.
    pub fn resolve(&mut self, ticket: Ticket, selection: Vec<String>) {
        debug!(ticket = ticket.0, ids = selection.len(), "highlight resolved");
        self.applied = if selection.is_empty() {
            None
        } else {
            Some(selection)
        };
    }

    /// Discards a failed request. An already-applied highlight is left
    /// untouched; a partial selection is never applied.
    pub fn resolve_failure(&mut self, ticket: Ticket) {
        debug!(ticket = ticket.0, "highlight request failed");
    }

    /// Clears any applied highlight.
    pub fn clear(&mut self) {
        self.applied = None;
    }

    pub fn is_applied(&self) -> bool {
        self.applied.is_some()
    }

    /// The applied highlight-identifier set, if any.
    pub fn selection(&self) -> Option<&[String]> {
        self.applied.as_deref()
    }
}
