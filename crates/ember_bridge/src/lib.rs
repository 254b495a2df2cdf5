//! Ember Runtime Bridge
//!
//! Bidirectional bridge between the native host and the embedded script
//! runtime. The host owns windowing, input and lifecycle; scripts own
//! application logic.
//!
//! ## Architecture
//!
//! - **Host → runtime:** [`window::Window`] guards on runtime liveness,
//!   activates scope, marshals arguments and invokes well-known entry
//!   points on the runtime's `ember` namespace
//! - **Runtime → host:** a fixed table of native functions
//!   ([`natives`]) forwards into the host's [`client::WindowClient`]
//! - Single-threaded: every operation runs to completion on the thread
//!   that owns the runtime's execution context

pub mod client;
pub mod error;
pub mod lifecycle;
pub mod metrics;
pub mod natives;
pub mod pointer;
pub mod window;

pub use client::{SceneRef, WindowClient};
pub use error::BridgeError;
pub use lifecycle::AppLifecycleState;
pub use metrics::ViewportMetrics;
pub use pointer::PointerPacket;
pub use window::Window;
