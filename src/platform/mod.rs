//! Frame-loop scheduling
//!
//! Wraps the browser's requestAnimationFrame in an owned subscription
//! handle. Invariant: at most one active subscription per [`FrameLoop`] -
//! `start` always cancels the previous subscription before registering a
//! new one, and the driven callback can stop the loop by returning
//! `false` (no re-arm, pending frame id cleared).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct LoopState {
    raf_id: Option<i32>,
    running: bool,
}

/// Owned requestAnimationFrame subscription
pub struct FrameLoop {
    inner: Rc<RefCell<LoopState>>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoopState {
                raf_id: None,
                running: false,
            })),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Subscribe `frame` to be invoked once per display refresh with the
    /// frame timestamp. The callback returns whether the loop should keep
    /// running; returning `false` stops it (restart with `start`).
    pub fn start(&self, mut frame: impl FnMut(f64) -> bool + 'static) {
        self.cancel();
        self.inner.borrow_mut().running = true;

        // Self-re-arming closure; the Rc it schedules itself through
        // keeps it alive for as long as the loop runs.
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let rearm = handle.clone();
        let state = self.inner.clone();

        *handle.borrow_mut() = Some(Closure::new(move |time: f64| {
            if !state.borrow().running {
                return;
            }
            if frame(time) {
                let id = request_frame(rearm.borrow().as_ref().expect("frame closure"));
                state.borrow_mut().raf_id = Some(id);
            } else {
                let mut s = state.borrow_mut();
                s.running = false;
                s.raf_id = None;
            }
        }));

        let id = request_frame(handle.borrow().as_ref().expect("frame closure"));
        self.inner.borrow_mut().raf_id = Some(id);
    }

    /// Cancel the active subscription, if any. Safe to call repeatedly.
    pub fn cancel(&self) {
        let mut s = self.inner.borrow_mut();
        s.running = false;
        if let Some(id) = s.raf_id.take() {
            let _ = web_sys::window()
                .expect("no window")
                .cancel_animation_frame(id);
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> i32 {
    web_sys::window()
        .expect("no window")
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed")
}
