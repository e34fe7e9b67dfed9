//! Document-level pointer listener used to dismiss the options dropdown.

use common::subscription::Subscription;
use gloo_console::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::{Callback, NodeRef};

const EVENT: &str = "mousedown";

/// Registers a `mousedown` listener on the document.
///
/// Every press emits `on_press` with `true` when the event target is inside
/// `region` and `false` otherwise. While `region` is not mounted presses
/// count as inside, so nothing is dismissed. The listener is removed when the
/// returned subscription is dropped. Returns `None` outside a browser window.
pub fn listen_pointer_down(region: NodeRef, on_press: Callback<bool>) -> Option<Subscription> {
    let document = web_sys::window()?.document()?;

    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let inside = match region.cast::<Node>() {
            Some(region) => {
                let target = event.target();
                region.contains(target.as_ref().and_then(|t| t.dyn_ref::<Node>()))
            }
            None => true,
        };
        on_press.emit(inside);
    });

    if let Err(err) =
        document.add_event_listener_with_callback(EVENT, handler.as_ref().unchecked_ref())
    {
        error!("failed to attach outside-click listener", err);
        return None;
    }

    Some(Subscription::new(move || {
        let _ = document
            .remove_event_listener_with_callback(EVENT, handler.as_ref().unchecked_ref());
    }))
}
