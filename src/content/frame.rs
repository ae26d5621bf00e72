//! Deferring work to the next paint frame.

#[cfg(any(feature = "csr", test))]
use std::cell::RefCell;
use std::rc::Rc;

/// Runs a callback once, after the current render has been painted.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Runs callbacks straight away. Used where there is no frame loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateFrames;

impl FrameScheduler for ImmediateFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        callback();
    }
}

/// `requestAnimationFrame` on the browser window.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

#[cfg(feature = "csr")]
impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            callback();
            return;
        };

        // The closure owns itself until it has run once.
        let pending = Rc::new(RefCell::new(Some(callback)));
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let pending_for_cb = Rc::clone(&pending);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(callback) = pending_for_cb.borrow_mut().take() {
                callback();
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
        {
            *holder.borrow_mut() = Some(cb);
        } else {
            log::warn!("requestAnimationFrame failed; running callback now");
            if let Some(callback) = pending.borrow_mut().take() {
                callback();
            }
        }
    }
}

/// Scheduler for the current target.
#[must_use]
pub fn default_scheduler() -> Rc<dyn FrameScheduler> {
    #[cfg(feature = "csr")]
    {
        Rc::new(AnimationFrames)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(ImmediateFrames)
    }
}

/// Frame queue advanced by hand in tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ManualFrames {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
}

#[cfg(test)]
impl ManualFrames {
    pub(crate) fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every callback queued before this call.
    pub(crate) fn advance(&self) {
        let queued = std::mem::take(&mut *self.queue.borrow_mut());
        for callback in queued {
            callback();
        }
    }
}

#[cfg(test)]
impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push(callback);
    }
}
