//! Simulation events and the double-buffered event queue.
//!
//! # One-tick latency
//!
//! The queue holds two buffers.  `push` only ever appends to the *pending*
//! buffer; `flip` promotes pending to *active* and starts a fresh pending
//! buffer.  The world flips once at the start of each tick, so an event
//! produced during tick T is delivered during tick T+1 and gone by T+2.
//! This latency is intentional — it models event propagation taking one
//! simulation step — and it also means delivery never observes a buffer
//! that is still being appended to.

use crate::{EntityId, Position};

/// Discriminant for [`Event`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    #[default]
    None,
    /// An agent reached its target.
    Arrive,
    /// An agent left a cell of interest.
    Leave,
    /// A signal source fired.
    Ping,
    /// Application-defined payload.
    Custom,
}

/// An immutable simulation event.
///
/// Events reference entities by id and locations by position only — they
/// never hold entity state, so a dead sender leaves its events intact.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub kind: EventKind,
    pub from: EntityId,
    /// Recipient; [`EntityId::BROADCAST`] addresses every listener.
    pub to: EntityId,
    pub payload: String,
    pub position: Position,
}

impl Event {
    pub fn new(
        kind: EventKind,
        from: EntityId,
        to: EntityId,
        payload: impl Into<String>,
        position: Position,
    ) -> Self {
        Self { kind, from, to, payload: payload.into(), position }
    }

    /// A broadcast `Arrive` at `position`.
    pub fn arrive(from: EntityId, position: Position) -> Self {
        Self::new(EventKind::Arrive, from, EntityId::BROADCAST, "", position)
    }

    /// A broadcast `Ping` at `position`.
    pub fn ping(from: EntityId, position: Position) -> Self {
        Self::new(EventKind::Ping, from, EntityId::BROADCAST, "signal", position)
    }

    #[inline]
    pub fn is_broadcast(&self) -> bool {
        self.to.is_broadcast()
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

/// Double-buffered event queue decoupling production from delivery.
///
/// At any instant only the pending buffer is appended to and only the
/// active buffer is read; [`flip`](EventQueue::flip) atomically swaps the
/// roles.
#[derive(Default)]
pub struct EventQueue {
    active: Vec<Event>,
    pending: Vec<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the pending buffer; visible after the *next* flip.
    #[inline]
    pub fn push(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Discard the delivered set and promote pending events for delivery.
    pub fn flip(&mut self) {
        self.active.clear();
        std::mem::swap(&mut self.active, &mut self.pending);
    }

    /// Read-only view of the currently deliverable events, in production
    /// order.
    #[inline]
    pub fn active_events(&self) -> &[Event] {
        &self.active
    }

    /// Drop everything in both buffers.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pending.clear();
    }

    /// Number of events awaiting the next flip.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
