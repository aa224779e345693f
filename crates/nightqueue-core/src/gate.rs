//! Open/closed gate for new queue entries.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::keepalive::KeepalivePinger;

/// Whether the queue accepts new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    Open,
    Closed,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateState::Open => write!(f, "open"),
            GateState::Closed => write!(f, "closed"),
        }
    }
}

/// Gate plus the keepalive timer it controls.
///
/// Starts open with the timer stopped; only [`open`](Self::open) starts pinging.
pub struct Gate {
    state: GateState,
    keepalive: KeepalivePinger,
}

impl Gate {
    pub fn new(keepalive: KeepalivePinger) -> Self {
        Self {
            state: GateState::Open,
            keepalive,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    pub fn keepalive(&self) -> &KeepalivePinger {
        &self.keepalive
    }

    /// Open the gate and make sure the keepalive timer runs.
    /// Returns `true` if a new timer was started.
    pub fn open(&mut self) -> bool {
        if self.state != GateState::Open {
            info!("Queue opened");
        }
        self.state = GateState::Open;
        self.keepalive.start()
    }

    /// Close the gate and stop the keepalive timer.
    /// Returns `true` if a running timer was stopped.
    pub fn close(&mut self) -> bool {
        if self.state != GateState::Closed {
            info!("Queue closed");
        }
        self.state = GateState::Closed;
        self.keepalive.stop()
    }
}
