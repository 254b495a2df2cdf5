//! Ember Engine Runtime
//!
//! Minimal host binary: boots logging, creates a script runtime,
//! installs the native function table, binds a window bridge and drives
//! one demo frame through the full host↔runtime round trip.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;

use ember_bridge::{
    natives, AppLifecycleState, PointerPacket, SceneRef, ViewportMetrics, Window, WindowClient,
};
use ember_script::runtime::ScriptRuntime;

/// Demo stand-in for the runtime's standard library: defines the
/// `ember` namespace with the well-known entry points and echoes frame
/// activity back through the native symbols.
const BOOTSTRAP: &str = r#"
(() => {
    const state = { routes: [] };
    globalThis.ember = {
        state,
        _updateWindowMetrics: (ratio, width, height, padTop, padRight, padBottom, padLeft) => {
            state.metrics = { ratio, width, height, padTop, padRight, padBottom, padLeft };
        },
        _updateLocale: (language, country) => {
            state.locale = `${language}_${country}`;
        },
        _pushRoute: (route) => {
            state.routes.push(route);
        },
        _popRoute: () => {
            state.routes.pop();
        },
        _dispatchPointerPacket: (data) => {
            state.lastPacketLength = data.byteLength;
            scheduleFrame();
        },
        _beginFrame: (micros) => {
            render({ frameTime: micros, routes: state.routes.slice() });
            flushRealTimeEvents();
        },
        _onAppLifecycleStateChanged: (ordinal) => {
            state.lifecycle = ordinal;
        },
    };
})();
"#;

/// Host window stand-in; a real embedder would own a platform window
/// and a compositor here.
#[derive(Default)]
struct HostWindow {
    frame_requests: Cell<u32>,
}

impl HostWindow {
    fn take_frame_request(&self) -> bool {
        let pending = self.frame_requests.get();
        if pending > 0 {
            self.frame_requests.set(pending - 1);
            return true;
        }
        false
    }
}

impl WindowClient for HostWindow {
    fn schedule_frame(&self) {
        self.frame_requests.set(self.frame_requests.get() + 1);
        tracing::info!(target: "bridge", "frame scheduled");
    }

    fn render(&self, _scene: SceneRef) {
        tracing::info!(target: "bridge", "scene submitted for compositing");
    }

    fn flush_real_time_events(&self) {
        tracing::info!(target: "bridge", "real-time events flushed");
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Ember Engine v{}", ember_script::VERSION);

    let epoch = Instant::now();
    let runtime = Rc::new(ScriptRuntime::new()?);

    let host = Rc::new(HostWindow::default());
    let client: Rc<dyn WindowClient> = host.clone();
    runtime
        .with(|ctx| natives::install(&ctx, Rc::downgrade(&client)))
        .map_err(|err| anyhow::anyhow!("installing native functions: {err}"))?;
    runtime.eval(BOOTSTRAP)?;

    let mut window = Window::new(Rc::downgrade(&client));
    window.on_runtime_ready(&runtime)?;

    window.update_viewport_metrics(&ViewportMetrics {
        device_pixel_ratio: 2.0,
        physical_width: 2560.0,
        physical_height: 1440.0,
        physical_padding_top: 0.0,
        physical_padding_right: 0.0,
        physical_padding_bottom: 0.0,
        physical_padding_left: 0.0,
    });
    window.update_locale("en", "US");
    window.push_route("/");
    window.on_app_lifecycle_state_changed(AppLifecycleState::Resumed);

    // One pointer event; the demo app requests a frame in response.
    window.dispatch_pointer_packet(&PointerPacket::new(vec![0u8, 1, 2, 3]));
    if host.take_frame_request() {
        window.begin_frame(epoch.elapsed());
    }

    window.on_app_lifecycle_state_changed(AppLifecycleState::Detached);
    tracing::info!("demo frame complete");

    Ok(())
}
