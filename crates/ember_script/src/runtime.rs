//! Script runtime management
//!
//! One `ScriptRuntime` is one runtime instantiation: a QuickJS runtime
//! plus its execution context. The lifecycle manager owns it behind an
//! `Rc`; bridges hold `Weak` handles and re-check liveness on every use,
//! since the runtime can be torn down and recreated independently.

use rquickjs::{CatchResultExt, Context, Ctx, Runtime};
use std::path::Path;

use crate::error::ScriptError;

/// Script execution context
pub struct ScriptRuntime {
    #[allow(dead_code)] // Kept alive for context lifetime
    runtime: Runtime,
    context: Context,
}

impl ScriptRuntime {
    pub fn new() -> Result<Self, ScriptError> {
        let runtime = Runtime::new().map_err(|err| ScriptError::Create(err.to_string()))?;
        let context =
            Context::full(&runtime).map_err(|err| ScriptError::Create(err.to_string()))?;

        Ok(Self { runtime, context })
    }

    pub fn eval_file(&self, path: &Path) -> Result<(), ScriptError> {
        let source = std::fs::read_to_string(path)?;
        self.eval(&source)
    }

    pub fn eval(&self, source: &str) -> Result<(), ScriptError> {
        self.context.with(|ctx| {
            ctx.eval::<(), _>(source)
                .catch(&ctx)
                .map_err(|err| ScriptError::Eval(err.to_string()))
        })
    }

    /// Activate the runtime's execution scope for the duration of one call.
    ///
    /// The scope is not held across suspension; `f` runs to completion on
    /// the calling thread before this returns.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Ctx) -> R,
    {
        self.context.with(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_defines_globals() {
        let rt = ScriptRuntime::new().unwrap();
        rt.eval("globalThis.answer = 42;").unwrap();
        let answer: i32 = rt.with(|ctx| ctx.globals().get("answer").unwrap());
        assert_eq!(answer, 42);
    }

    #[test]
    fn eval_reports_script_exceptions() {
        let rt = ScriptRuntime::new().unwrap();
        let err = rt.eval("throw new Error('boom')").unwrap_err();
        assert!(matches!(err, ScriptError::Eval(_)));
    }
}
