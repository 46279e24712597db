//! The closed set of agent behaviour variants.

use gw_core::Position;

/// Seconds between signal-source emissions.
pub const SIGNAL_COOLDOWN: f64 = 1.0;

/// Behavioural variant plus its per-variant state.
///
/// Adding a variant is a compile-time event: every `match` in the behaviour
/// module must handle it before the crate builds again.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum AgentKind {
    /// Random walk with inertia: occasionally picks a new cardinal heading,
    /// otherwise keeps the previous one.
    Wanderer,
    /// Heads for a cached sink cell, one axis at a time; broadcasts
    /// `Arrive` on reaching it; may retarget on `Ping`.
    Seeker { target: Option<Position> },
    /// Climbs the local marker-density gradient in advanced mode, random
    /// walks in basic mode.
    TrailMaker,
    /// Stationary periodic emitter: stamps its cell with `Signal` and
    /// broadcasts `Ping` every `cooldown` seconds, carrying the remainder.
    SignalSource { cooldown: f64, timer: f64 },
    /// Stationary passive receiver.
    SignalSink,
}

impl AgentKind {
    /// A seeker with no target yet.
    pub fn seeker() -> Self {
        AgentKind::Seeker { target: None }
    }

    /// A signal source with the standard cooldown and a cold timer.
    pub fn signal_source() -> Self {
        AgentKind::SignalSource { cooldown: SIGNAL_COOLDOWN, timer: 0.0 }
    }

    /// Movement speed in cells per second.  Emitters and sinks never move.
    pub fn base_speed(&self) -> f64 {
        match self {
            AgentKind::Wanderer => 1.0,
            AgentKind::Seeker { .. } => 2.0,
            AgentKind::TrailMaker => 1.5,
            AgentKind::SignalSource { .. } | AgentKind::SignalSink => 0.0,
        }
    }

    /// One-character glyph for the rendering layer.
    pub fn glyph(&self) -> char {
        match self {
            AgentKind::Wanderer => 'w',
            AgentKind::Seeker { .. } => 's',
            AgentKind::TrailMaker => 't',
            AgentKind::SignalSource { .. } => 'o',
            AgentKind::SignalSink => 'x',
        }
    }
}
