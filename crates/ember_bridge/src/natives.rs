//! Native function registry
//!
//! Symbols the runtime can call by name, as a fixed table of records
//! rather than a dispatch hierarchy. Installed once at runtime-module
//! setup and read-only afterwards. Thunks execute synchronously on the
//! runtime's thread and receive the host client handle explicitly; no
//! ambient "current state" lookup.

use std::rc::Weak;

use rquickjs::function::Rest;
use rquickjs::{Ctx, Exception, Function, Persistent, Value};

use crate::client::{SceneRef, WindowClient};

type NativeThunk =
    for<'js> fn(Ctx<'js>, &Weak<dyn WindowClient>, Rest<Value<'js>>) -> rquickjs::Result<()>;

/// One registered native symbol.
pub struct NativeEntry {
    /// Name as called from script
    pub name: &'static str,
    /// Declared arity, counting the implicit receiver slot
    pub arity: u8,
    /// Whether the symbol may be invoked as a leaf call
    /// (no re-entrant scope setup; true while thunks make no runtime calls)
    pub leaf: bool,
    thunk: NativeThunk,
}

static ENTRIES: [NativeEntry; 3] = [
    NativeEntry {
        name: "scheduleFrame",
        arity: 1,
        leaf: true,
        thunk: schedule_frame,
    },
    NativeEntry {
        name: "render",
        arity: 2,
        leaf: true,
        thunk: render,
    },
    NativeEntry {
        name: "flushRealTimeEvents",
        arity: 1,
        leaf: true,
        thunk: flush_real_time_events,
    },
];

/// The registry contents, for inspection.
pub fn entries() -> &'static [NativeEntry] {
    &ENTRIES
}

/// Register every native symbol as a global function in the runtime.
///
/// Called once per runtime instantiation, before the bootstrap script
/// is evaluated. Thunks no-op if the client back-reference is gone.
pub fn install(ctx: &Ctx<'_>, client: Weak<dyn WindowClient>) -> rquickjs::Result<()> {
    let globals = ctx.globals();
    for entry in &ENTRIES {
        let thunk = entry.thunk;
        let client = client.clone();
        let func = Function::new(ctx.clone(), move |ctx, args| thunk(ctx, &client, args))?
        .with_name(entry.name)?;
        globals.set(entry.name, func)?;
    }
    Ok(())
}

fn schedule_frame<'js>(
    _ctx: Ctx<'js>,
    client: &Weak<dyn WindowClient>,
    _args: Rest<Value<'js>>,
) -> rquickjs::Result<()> {
    if let Some(client) = client.upgrade() {
        client.schedule_frame();
    }
    Ok(())
}

fn render<'js>(
    ctx: Ctx<'js>,
    client: &Weak<dyn WindowClient>,
    args: Rest<Value<'js>>,
) -> rquickjs::Result<()> {
    // A malformed scene is a contract violation by the calling script;
    // raise it back into the script context instead of forwarding garbage.
    let scene = match args.0.first().and_then(|value| value.as_object()) {
        Some(obj) => SceneRef::new(Persistent::save(&ctx, obj.clone())),
        None => return Err(Exception::throw_type(&ctx, "render expects a scene object")),
    };
    if let Some(client) = client.upgrade() {
        client.render(scene);
    }
    Ok(())
}

fn flush_real_time_events<'js>(
    _ctx: Ctx<'js>,
    client: &Weak<dyn WindowClient>,
    _args: Rest<Value<'js>>,
) -> rquickjs::Result<()> {
    if let Some(client) = client.upgrade() {
        client.flush_real_time_events();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_script::runtime::ScriptRuntime;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct StubClient {
        frames: Cell<u32>,
        renders: Cell<u32>,
        flushes: Cell<u32>,
    }

    impl WindowClient for StubClient {
        fn schedule_frame(&self) {
            self.frames.set(self.frames.get() + 1);
        }

        fn render(&self, _scene: SceneRef) {
            self.renders.set(self.renders.get() + 1);
        }

        fn flush_real_time_events(&self) {
            self.flushes.set(self.flushes.get() + 1);
        }
    }

    fn wired_runtime() -> (ScriptRuntime, Rc<StubClient>) {
        let rt = ScriptRuntime::new().unwrap();
        let client = Rc::new(StubClient::default());
        let weak: Weak<dyn WindowClient> = Rc::<StubClient>::downgrade(&client);
        rt.with(|ctx| install(&ctx, weak).unwrap());
        (rt, client)
    }

    #[test]
    fn registry_shape_is_fixed() {
        let names: Vec<_> = entries().iter().map(|e| e.name).collect();
        assert_eq!(names, ["scheduleFrame", "render", "flushRealTimeEvents"]);
        let arities: Vec<_> = entries().iter().map(|e| e.arity).collect();
        assert_eq!(arities, [1, 2, 1]);
        assert!(entries().iter().all(|e| e.leaf));
    }

    #[test]
    fn schedule_frame_forwards_once() {
        let (rt, client) = wired_runtime();
        rt.eval("scheduleFrame()").unwrap();
        assert_eq!(client.frames.get(), 1);
        assert_eq!(client.renders.get(), 0);
        assert_eq!(client.flushes.get(), 0);
    }

    #[test]
    fn flush_real_time_events_forwards_once() {
        let (rt, client) = wired_runtime();
        rt.eval("flushRealTimeEvents()").unwrap();
        assert_eq!(client.flushes.get(), 1);
    }

    #[test]
    fn render_with_scene_object_forwards_once() {
        let (rt, client) = wired_runtime();
        rt.eval("render({ layers: [] })").unwrap();
        assert_eq!(client.renders.get(), 1);
    }

    #[test]
    fn render_decode_failure_throws_into_script() {
        let (rt, client) = wired_runtime();
        let threw: bool = rt.with(|ctx| {
            ctx.eval(
                r#"
                var threw = false;
                try { render(42); } catch (e) { threw = e instanceof TypeError; }
                threw
                "#,
            )
            .unwrap()
        });
        assert!(threw);
        assert_eq!(client.renders.get(), 0);
    }

    #[test]
    fn render_without_arguments_throws_into_script() {
        let (rt, client) = wired_runtime();
        let threw: bool = rt.with(|ctx| {
            ctx.eval(
                r#"
                var threw = false;
                try { render(); } catch (e) { threw = true; }
                threw
                "#,
            )
            .unwrap()
        });
        assert!(threw);
        assert_eq!(client.renders.get(), 0);
    }

    #[test]
    fn thunks_noop_after_client_is_gone() {
        let (rt, client) = wired_runtime();
        drop(client);
        rt.eval("scheduleFrame(); flushRealTimeEvents(); render({})")
            .unwrap();
    }
}
