//! Host callback capability surface
//!
//! The runtime calls back into the host through exactly three
//! fire-and-forget methods. The implementor is whatever owns the host
//! window; tests use a stub. The bridge holds only a non-owning
//! back-reference, so the client must outlive the bridge or calls
//! silently stop being delivered.

use rquickjs::{Ctx, Object, Persistent};

/// Capability interface the runtime bridge calls back into.
///
/// Implementations must return promptly: these run synchronously on the
/// critical path of script execution.
pub trait WindowClient {
    fn schedule_frame(&self);
    fn render(&self, scene: SceneRef);
    fn flush_real_time_events(&self);
}

/// Opaque by-reference handle to a runtime-owned scene-graph object.
///
/// Valid for as long as the runtime instantiation it came from; the
/// host treats it as a token to hand back across the boundary and must
/// release it before the runtime is torn down.
pub struct SceneRef {
    inner: Persistent<Object<'static>>,
}

impl SceneRef {
    pub(crate) fn new(inner: Persistent<Object<'static>>) -> Self {
        Self { inner }
    }

    /// Re-enter the scene object under an activated scope.
    pub fn restore<'js>(&self, ctx: &Ctx<'js>) -> rquickjs::Result<Object<'js>> {
        self.inner.clone().restore(ctx)
    }
}

impl std::fmt::Debug for SceneRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SceneRef")
    }
}
