// Per-frame scheduling.
//
// A FrameSource calls a subscribed callback once per display refresh
// until the returned FrameHandle is cancelled. In the browser that is
// `requestAnimationFrame`; tests drive a ManualFrameSource by hand.

use crate::error::FieldError;
use crate::utils;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub trait FrameSource {
    fn subscribe(&self, on_frame: Box<dyn FnMut()>) -> Result<FrameHandle, FieldError>;
}

// Stops a subscription when cancelled. Dropping the handle without
// cancelling leaves the subscription running.
pub struct FrameHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl FrameHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        FrameHandle {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

// Frames from `window.requestAnimationFrame`.
pub struct AnimationFrameSource {
    window: web_sys::Window,
}

impl AnimationFrameSource {
    pub fn new() -> Result<Self, FieldError> {
        let window = web_sys::window().ok_or(FieldError::NoWindow)?;
        Ok(AnimationFrameSource { window })
    }
}

impl FrameSource for AnimationFrameSource {
    // The callback re-requests itself after every frame. It lives in a shared
    // slot so it can reach itself; cancelling empties the slot, which breaks
    // the cycle. Must not be cancelled from inside `on_frame`.
    fn subscribe(&self, mut on_frame: Box<dyn FnMut()>) -> Result<FrameHandle, FieldError> {
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let window = self.window.clone();
        let reschedule = slot.clone();
        let next_request = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            next_request.set(None);
            on_frame();
            if let Some(callback) = reschedule.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => next_request.set(Some(id)),
                    Err(err) => utils::error(&format!("failed to schedule frame: {:?}", err)),
                }
            }
        }) as Box<dyn FnMut()>);

        let first = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())?;
        *slot.borrow_mut() = Some(callback);
        pending.set(Some(first));

        let window = self.window.clone();
        Ok(FrameHandle::new(move || {
            if let Some(id) = pending.take() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    utils::warn(&format!("failed to cancel frame {}: {:?}", id, err));
                }
            }
            slot.borrow_mut().take();
        }))
    }
}

struct Subscriber {
    id: u64,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
}

// A frame source that only ticks when told to.
#[derive(Clone, Default)]
pub struct ManualFrameSource {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    next_id: Rc<Cell<u64>>,
}

impl ManualFrameSource {
    pub fn new() -> Self {
        ManualFrameSource::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    // Delivers `frames` frames to every live subscriber, in subscription order.
    pub fn advance(&self, frames: usize) {
        for _ in 0..frames {
            let callbacks: Vec<(u64, Rc<RefCell<Box<dyn FnMut()>>>)> = self
                .subscribers
                .borrow()
                .iter()
                .map(|s| (s.id, s.callback.clone()))
                .collect();
            for (id, callback) in callbacks {
                let live = self.subscribers.borrow().iter().any(|s| s.id == id);
                if live {
                    let mut on_frame = callback.borrow_mut();
                    (*on_frame)();
                }
            }
        }
    }
}

impl FrameSource for ManualFrameSource {
    fn subscribe(&self, on_frame: Box<dyn FnMut()>) -> Result<FrameHandle, FieldError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(RefCell::new(on_frame)),
        });

        let subscribers = self.subscribers.clone();
        Ok(FrameHandle::new(move || {
            subscribers.borrow_mut().retain(|s| s.id != id);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(source: &ManualFrameSource) -> (Rc<Cell<u32>>, FrameHandle) {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let handle = source
            .subscribe(Box::new(move || seen.set(seen.get() + 1)))
            .unwrap();
        (count, handle)
    }

    #[test]
    fn delivers_one_call_per_frame() {
        let source = ManualFrameSource::new();
        let (count, _handle) = counter(&source);
        source.advance(5);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn cancel_stops_delivery() {
        let source = ManualFrameSource::new();
        let (a, handle_a) = counter(&source);
        let (b, _handle_b) = counter(&source);
        source.advance(2);
        handle_a.cancel();
        source.advance(3);
        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 5);
        assert_eq!(source.subscriber_count(), 1);
    }

    #[test]
    fn dropping_handle_keeps_running() {
        let source = ManualFrameSource::new();
        let (count, handle) = counter(&source);
        drop(handle);
        source.advance(1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn callbacks_run_in_subscription_order() {
        let source = ManualFrameSource::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for name in &["step", "render"] {
            let log = log.clone();
            let name = *name;
            handles.push(
                source
                    .subscribe(Box::new(move || log.borrow_mut().push(name)))
                    .unwrap(),
            );
        }
        source.advance(2);
        assert_eq!(*log.borrow(), vec!["step", "render", "step", "render"]);
    }
}
