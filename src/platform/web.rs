//! Browser platform: `requestAnimationFrame`, keyboard listeners, toggle button

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlButtonElement, KeyboardEvent, MouseEvent, Window};

use super::{FrameHandle, FrameRequester};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame`-backed frame source
///
/// Clones share the same callback slot, so the copy handed to the scheduler
/// can be bound after the scheduler exists.
#[derive(Clone)]
pub struct AnimationFrames {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    requested: Rc<Cell<Option<FrameHandle>>>,
}

impl AnimationFrames {
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
            callback: Rc::new(RefCell::new(None)),
            requested: Rc::new(Cell::new(None)),
        })
    }

    /// Install the function invoked on every delivered frame
    pub fn bind(&self, mut on_frame: impl FnMut(FrameHandle, f64) + 'static) {
        let requested = self.requested.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            // Only one request is ever outstanding
            if let Some(handle) = requested.take() {
                on_frame(handle, time);
            }
        });
        *self.callback.borrow_mut() = Some(closure);
    }
}

impl FrameRequester for AnimationFrames {
    fn request(&mut self) -> Option<FrameHandle> {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            log::error!("Frame requested before a callback was bound");
            return None;
        };

        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => {
                let handle = FrameHandle(id);
                self.requested.set(Some(handle));
                Some(handle)
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.requested.get() == Some(handle) {
            self.requested.set(None);
        }
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Subscribe once to document key events
///
/// Handlers receive `KeyboardEvent.code` (layout independent, e.g. `KeyW`).
pub fn listen_keyboard(
    mut on_down: impl FnMut(&str) + 'static,
    mut on_up: impl FnMut(&str) + 'static,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document to attach keyboard listeners to");
        return;
    };

    let down = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        on_down(&event.code());
    });
    let _ = document.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref());
    down.forget();

    let up = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        on_up(&event.code());
    });
    let _ = document.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref());
    up.forget();
}

/// Two-state button: calls `on_activate` / `on_deactivate` alternately and
/// swaps its label. Starts inactive. A missing button is logged and skipped.
pub fn bind_toggle(
    selector: &str,
    active_text: &'static str,
    inactive_text: &'static str,
    mut on_activate: impl FnMut() + 'static,
    mut on_deactivate: impl FnMut() + 'static,
) {
    let button = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

    let Some(button) = button else {
        log::warn!("Toggle button {} not found", selector);
        return;
    };

    button.set_text_content(Some(inactive_text));

    let label = button.clone();
    let mut active = false;
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        active = !active;
        if active {
            on_activate();
        } else {
            on_deactivate();
        }
        label.set_text_content(Some(if active { active_text } else { inactive_text }));
    });
    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
