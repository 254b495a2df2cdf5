use thiserror::Error;

/// Errors surfaced by the scripting system.
///
/// Fire-and-forget entry-point invocations never produce these; they are
/// logged and swallowed instead. Only runtime creation and script
/// evaluation report failures to the caller.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to create script runtime: {0}")]
    Create(String),

    #[error("script evaluation failed: {0}")]
    Eval(String),

    #[error("failed to read script source")]
    Io(#[from] std::io::Error),
}
