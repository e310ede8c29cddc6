//! requestAnimationFrame-backed tick scheduling

use game_core::{FrameScheduler, TickHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Schedules ticks on the browser's display refresh
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    /// Install the frame callback. Must happen before the first request.
    pub fn set_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_tick(&mut self) -> TickHandle {
        let Some(callback) = &self.callback else {
            log::error!("Tick requested before the frame callback was installed");
            return TickHandle(0);
        };

        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => TickHandle(id),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                TickHandle(0)
            }
        }
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        // 0 is never issued by the browser
        if handle.0 == 0 {
            return;
        }
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, err);
        }
    }
}
