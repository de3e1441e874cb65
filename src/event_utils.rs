use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

impl EventOptions {
    /// Listener that may call `preventDefault`, e.g. for wheel zoom.
    pub fn active() -> Self {
        Self { passive: false, ..Self::default() }
    }
}

/// Owns the closure registered on `target`; dropping it without calling
/// [`remove`](Self::remove) leaves a dangling listener.
pub struct EventListenerHandle {
    target: EventTarget,
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl EventListenerHandle {
    pub fn remove(self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

pub fn event_listener(
    target: &EventTarget,
    event_name: &str,
    options: &EventOptions,
    mut cb: impl FnMut(Event) + 'static,
) -> EventListenerHandle {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let callback = Closure::wrap(Box::new(move |ev: Event| cb(ev)) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event_name,
        callback.as_ref().unchecked_ref(),
        &opts,
    );

    EventListenerHandle {
        target: target.clone(),
        event_name: event_name.to_string(),
        callback,
        capture: options.capture,
    }
}

/// Listener on `window`; `None` outside a browser.
pub fn window_event_listener(
    event_name: &str,
    options: &EventOptions,
    cb: impl FnMut(Event) + 'static,
) -> Option<EventListenerHandle> {
    let window = web_sys::window()?;
    Some(event_listener(&window, event_name, options, cb))
}
