//! The runtime bridge façade
//!
//! One `Window` per host window/surface. Every host→runtime operation
//! follows the same contract: if the runtime instantiation backing the
//! bound module handle is gone, the call is a silent no-op — dropped
//! events during runtime (re)initialization are expected and harmless.
//! Otherwise the operation activates scope, marshals its arguments and
//! invokes the entry point as a one-way notification.

use std::mem::ManuallyDrop;
use std::rc::{Rc, Weak};
use std::time::Duration;

use rquickjs::{Object, Persistent};

use ember_script::buffer::marshal_bytes;
use ember_script::invoke::invoke_entry_point;
use ember_script::runtime::ScriptRuntime;

use crate::client::WindowClient;
use crate::error::BridgeError;
use crate::lifecycle::AppLifecycleState;
use crate::metrics::ViewportMetrics;
use crate::pointer::PointerPacket;

/// Global namespace object exposing the well-known entry points.
pub const NAMESPACE: &str = "ember";

/// Module handle: which runtime instantiation we are bound to, plus the
/// namespace object saved from it. Replaced wholesale on runtime
/// re-creation, never partially updated.
struct ModuleHandle {
    runtime: Weak<ScriptRuntime>,
    namespace: ManuallyDrop<Persistent<Object<'static>>>,
}

impl ModuleHandle {
    fn new(runtime: &Rc<ScriptRuntime>, namespace: Persistent<Object<'static>>) -> Self {
        Self {
            runtime: Rc::downgrade(runtime),
            namespace: ManuallyDrop::new(namespace),
        }
    }
}

impl Drop for ModuleHandle {
    fn drop(&mut self) {
        // The saved namespace value may only be released while the heap
        // it lives in still exists. After runtime teardown the value was
        // reclaimed with the heap; releasing through the stale handle
        // would touch freed memory, so the wrapper is leaked instead.
        if let Some(_runtime) = self.runtime.upgrade() {
            unsafe { ManuallyDrop::drop(&mut self.namespace) }
        }
    }
}

/// Stateful bridge between one host surface and the script runtime.
pub struct Window {
    module: Option<ModuleHandle>,
    client: Weak<dyn WindowClient>,
}

impl Window {
    pub fn new(client: Weak<dyn WindowClient>) -> Self {
        Self {
            module: None,
            client,
        }
    }

    /// The host callback surface, if it is still alive.
    pub fn client(&self) -> Option<Rc<dyn WindowClient>> {
        self.client.upgrade()
    }

    /// Bind the module handle for a freshly created runtime.
    ///
    /// Must be called once per runtime instantiation, after the bootstrap
    /// defined the namespace and before any other operation. Operations
    /// issued before this (or after teardown) are dropped silently.
    pub fn on_runtime_ready(&mut self, runtime: &Rc<ScriptRuntime>) -> Result<(), BridgeError> {
        let namespace = runtime.with(|ctx| {
            let ns: Object = ctx
                .globals()
                .get(NAMESPACE)
                .map_err(|_| BridgeError::NamespaceMissing { name: NAMESPACE })?;
            Ok(Persistent::save(&ctx, ns))
        })?;
        self.module = Some(ModuleHandle::new(runtime, namespace));
        Ok(())
    }

    /// Liveness check: the bound runtime, if any, and its namespace.
    fn bound(&self) -> Option<(Rc<ScriptRuntime>, Persistent<Object<'static>>)> {
        let handle = self.module.as_ref()?;
        let runtime = handle.runtime.upgrade()?;
        // Cloning the saved value is only valid while the runtime lives;
        // the upgrade above guarantees that for the current call.
        Some((runtime, (*handle.namespace).clone()))
    }

    pub fn update_viewport_metrics(&self, metrics: &ViewportMetrics) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            invoke_entry_point(
                &ctx,
                &ns,
                "_updateWindowMetrics",
                (
                    metrics.device_pixel_ratio,
                    metrics.logical_width(),
                    metrics.logical_height(),
                    metrics.logical_padding_top(),
                    metrics.logical_padding_right(),
                    metrics.logical_padding_bottom(),
                    metrics.logical_padding_left(),
                ),
            );
        });
    }

    pub fn update_locale(&self, language_code: &str, country_code: &str) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            invoke_entry_point(&ctx, &ns, "_updateLocale", (language_code, country_code));
        });
    }

    pub fn push_route(&self, route: &str) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            invoke_entry_point(&ctx, &ns, "_pushRoute", (route,));
        });
    }

    pub fn pop_route(&self) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            invoke_entry_point(&ctx, &ns, "_popRoute", ());
        });
    }

    /// Copy the packet into a runtime-owned buffer and deliver it.
    ///
    /// Allocation or acquisition failure drops the packet; the next input
    /// event recovers at a higher level, while blocking here would stall
    /// the host thread.
    pub fn dispatch_pointer_packet(&self, packet: &PointerPacket) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            let Some(buffer) = marshal_bytes(&ctx, packet.serialized_size(), |bytes| {
                packet.serialize_into(bytes);
            }) else {
                return;
            };
            invoke_entry_point(&ctx, &ns, "_dispatchPointerPacket", (buffer,));
        });
    }

    /// `frame_time` is measured from a fixed epoch chosen by the host;
    /// marshaled as whole microseconds.
    pub fn begin_frame(&self, frame_time: Duration) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            invoke_entry_point(&ctx, &ns, "_beginFrame", (frame_time.as_micros() as i64,));
        });
    }

    pub fn on_app_lifecycle_state_changed(&self, state: AppLifecycleState) {
        let Some((runtime, namespace)) = self.bound() else {
            return;
        };
        runtime.with(|ctx| {
            let Ok(ns) = namespace.restore(&ctx) else {
                return;
            };
            invoke_entry_point(&ctx, &ns, "_onAppLifecycleStateChanged", (state.ordinal(),));
        });
    }
}
