//! Application lifecycle states
//!
//! Transmitted across the boundary as an integer ordinal.

/// Host-observed application lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLifecycleState {
    Resumed,
    Inactive,
    Paused,
    Detached,
}

impl AppLifecycleState {
    /// Ordinal used on the wire.
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}
