//! Positional invocation of named entry points
//!
//! Entry points are top-level functions on a namespace object inside the
//! runtime. They are one-way notifications: a missing function or an
//! in-script exception is logged and never unwinds into the host call
//! site.

use rquickjs::function::IntoArgs;
use rquickjs::{CatchResultExt, Ctx, Function, Object};

/// Look up `name` on the namespace object and call it with `args`.
///
/// Requires an activated scope (`ctx` borrowed from `ScriptRuntime::with`).
pub fn invoke_entry_point<'js, A>(ctx: &Ctx<'js>, namespace: &Object<'js>, name: &str, args: A)
where
    A: IntoArgs<'js>,
{
    let func: Function = match namespace.get(name) {
        Ok(func) => func,
        Err(err) => {
            tracing::warn!(target: "script", "entry point '{}' not found: {}", name, err);
            return;
        }
    };

    if let Err(err) = func.call::<_, ()>(args).catch(ctx) {
        tracing::warn!(target: "script", "entry point '{}' raised: {}", name, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ScriptRuntime;

    fn runtime_with(source: &str) -> ScriptRuntime {
        let rt = ScriptRuntime::new().unwrap();
        rt.eval(source).unwrap();
        rt
    }

    #[test]
    fn invokes_with_positional_arguments() {
        let rt = runtime_with(
            "globalThis.app = { seen: null, record: (a, b) => { app.seen = a + ':' + b; } };",
        );
        rt.with(|ctx| {
            let ns: Object = ctx.globals().get("app").unwrap();
            invoke_entry_point(&ctx, &ns, "record", ("hello", 7));
        });
        let seen: String = rt.with(|ctx| ctx.eval("app.seen").unwrap());
        assert_eq!(seen, "hello:7");
    }

    #[test]
    fn missing_entry_point_does_not_unwind() {
        let rt = runtime_with("globalThis.app = {};");
        rt.with(|ctx| {
            let ns: Object = ctx.globals().get("app").unwrap();
            invoke_entry_point(&ctx, &ns, "nope", ());
        });
    }

    #[test]
    fn throwing_entry_point_does_not_unwind() {
        let rt = runtime_with("globalThis.app = { bad: () => { throw new Error('boom'); } };");
        rt.with(|ctx| {
            let ns: Object = ctx.globals().get("app").unwrap();
            invoke_entry_point(&ctx, &ns, "bad", ());
        });
    }
}
