use thiserror::Error;

/// Errors that can occur while binding the bridge to a runtime.
///
/// Bridge operations themselves are fire-and-forget and never error;
/// only `Window::on_runtime_ready` can fail, when the runtime bootstrap
/// has not defined the expected namespace.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("runtime namespace '{name}' is not defined")]
    NamespaceMissing { name: &'static str },
}
