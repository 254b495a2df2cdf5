//! Ember Scripting System
//!
//! JavaScript execution via QuickJS for application logic.
//!
//! ## Architecture
//!
//! - **Runtime:** one [`runtime::ScriptRuntime`] per runtime instantiation;
//!   the engine lifecycle manager owns it behind an `Rc`, everything else
//!   observes it through `Weak` handles
//! - **Invocation:** well-known entry points are looked up by name on a
//!   namespace object and called positionally ([`invoke`])
//! - **Marshaling:** binary payloads are copied into managed-heap
//!   `ArrayBuffer`s under a bracketed raw-access window ([`buffer`])

pub mod buffer;
pub mod error;
pub mod invoke;
pub mod runtime;

pub use rquickjs;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
