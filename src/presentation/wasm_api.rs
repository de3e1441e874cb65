use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, WheelEvent};

use crate::application::SeqDisplayService;
use crate::domain::{
    config::DisplayConfig,
    errors::{DisplayError, DisplayResult},
    logging::LogComponent,
    sequence::FeatureRecord,
};
use crate::event_utils::{EventListenerHandle, EventOptions, event_listener, window_event_listener};
use crate::presentation::gestures::{DragState, wheel_zoom_factor};
use crate::{log_debug, log_error, log_info};

impl From<DisplayError> for JsValue {
    fn from(err: DisplayError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// JS handle for one sequence strip mounted into a DOM element.
///
/// Thin bridge: every method measures or paints the container and delegates
/// to [`SeqDisplayService`].
#[wasm_bindgen]
pub struct SeqDisplayApi {
    service: Rc<RefCell<SeqDisplayService>>,
    container_id: Option<String>,
    listeners: Vec<EventListenerHandle>,
}

#[wasm_bindgen]
impl SeqDisplayApi {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SeqDisplayApi, JsValue> {
        let config = match config_json {
            Some(json) => DisplayConfig::from_json(&json)?,
            None => DisplayConfig::default(),
        };
        Ok(Self {
            service: Rc::new(RefCell::new(SeqDisplayService::new(config))),
            container_id: None,
            listeners: Vec::new(),
        })
    }

    /// Measure the container, start listening for window resizes and wire
    /// wheel zoom and drag pan onto the container.
    pub fn init(&mut self, container_id: String) -> Result<(), JsValue> {
        let element = container_element(&container_id)?;
        let (width, height) = measure(&element);
        self.service.borrow_mut().init(width, height)?;
        paint(&element, &self.service.borrow().svg());

        self.remove_listeners();
        let service = Rc::clone(&self.service);
        let id = container_id.clone();
        let resize = window_event_listener("resize", &EventOptions::default(), move |_| {
            if let Err(err) = refresh_after_resize(&service, &id) {
                log_error!(LogComponent::Presentation("SeqDisplayApi"), "resize failed: {}", err);
            }
        });
        self.listeners.extend(resize);
        self.listeners.extend(gesture_listeners(&self.service, &element));

        log_info!(LogComponent::Presentation("SeqDisplayApi"), "mounted into #{}", container_id);
        self.container_id = Some(container_id);
        Ok(())
    }

    /// Replace the sequence and/or the features. `features_json` is a JSON
    /// array of `{name, type, color, strand, start, end}` records.
    pub fn load(&mut self, sequence: Option<String>, features_json: Option<String>) -> Result<(), JsValue> {
        let records = features_json
            .map(|json| serde_json::from_str::<Vec<FeatureRecord>>(&json))
            .transpose()
            .map_err(DisplayError::from)?;
        self.service.borrow_mut().load(sequence.as_deref(), records.as_deref())?;
        self.repaint()
    }

    /// Clear the drawing and re-measure; loaded data is kept.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        let element = self.element()?;
        let (width, height) = measure(&element);
        self.service.borrow_mut().reset(width, height)?;
        paint(&element, &self.service.borrow().svg());
        Ok(())
    }

    #[wasm_bindgen(js_name = zoomTo)]
    pub fn zoom_to(&mut self, scale: f64, translate_x: f64) -> Result<(), JsValue> {
        self.service.borrow_mut().zoom_to(scale, translate_x);
        self.repaint()
    }

    #[wasm_bindgen(js_name = zoomAt)]
    pub fn zoom_at(&mut self, factor: f64, cursor_x: f64) -> Result<(), JsValue> {
        self.service.borrow_mut().zoom_at(factor, cursor_x);
        self.repaint()
    }

    #[wasm_bindgen(js_name = panBy)]
    pub fn pan_by(&mut self, dx: f64) -> Result<(), JsValue> {
        self.service.borrow_mut().pan_by(dx);
        self.repaint()
    }

    pub fn svg(&self) -> String {
        self.service.borrow().svg()
    }

    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        Ok(serde_json::to_string(self.service.borrow().scene()).map_err(DisplayError::from)?)
    }

    #[wasm_bindgen(getter)]
    pub fn nrows(&self) -> usize {
        self.service.borrow().nrows()
    }

    #[wasm_bindgen(js_name = positionAt)]
    pub fn position_at(&self, x: f64) -> Option<usize> {
        self.service.borrow().position_at(x)
    }
}

impl SeqDisplayApi {
    fn remove_listeners(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
    }

    fn element(&self) -> DisplayResult<Element> {
        let id = self
            .container_id
            .as_deref()
            .ok_or_else(|| DisplayError::Container("init has not been called".to_string()))?;
        container_element(id)
    }

    fn repaint(&self) -> Result<(), JsValue> {
        let element = self.element()?;
        paint(&element, &self.service.borrow().svg());
        Ok(())
    }
}

impl Drop for SeqDisplayApi {
    fn drop(&mut self) {
        self.remove_listeners();
    }
}

/// Wheel zooms around the pointer; pointer drags pan.
fn gesture_listeners(service: &Rc<RefCell<SeqDisplayService>>, element: &Element) -> Vec<EventListenerHandle> {
    let drag = Rc::new(RefCell::new(DragState::default()));
    let mut listeners = Vec::with_capacity(5);

    let (svc, el) = (Rc::clone(service), element.clone());
    listeners.push(event_listener(element, "wheel", &EventOptions::active(), move |ev| {
        let Some(wheel) = ev.dyn_ref::<WheelEvent>() else { return };
        wheel.prevent_default();
        let factor = wheel_zoom_factor(wheel.delta_y(), wheel.delta_mode());
        let cursor_x = wheel.client_x() as f64 - el.get_bounding_client_rect().left();
        let mut svc = svc.borrow_mut();
        svc.zoom_at(factor, cursor_x);
        paint(&el, &svc.svg());
        log_debug!(
            LogComponent::Presentation("SeqDisplayApi"),
            "wheel zoom x{:.3} at {:.1}px",
            factor,
            cursor_x
        );
    }));

    let state = Rc::clone(&drag);
    listeners.push(event_listener(element, "pointerdown", &EventOptions::default(), move |ev| {
        if let Some(mouse) = ev.dyn_ref::<MouseEvent>() {
            state.borrow_mut().press(mouse.client_x() as f64);
        }
    }));

    let (state, svc, el) = (Rc::clone(&drag), Rc::clone(service), element.clone());
    listeners.push(event_listener(element, "pointermove", &EventOptions::default(), move |ev| {
        let Some(mouse) = ev.dyn_ref::<MouseEvent>() else { return };
        if let Some(dx) = state.borrow_mut().drag_to(mouse.client_x() as f64) {
            let mut svc = svc.borrow_mut();
            svc.pan_by(dx);
            paint(&el, &svc.svg());
        }
    }));

    for name in ["pointerup", "pointerleave"] {
        let state = Rc::clone(&drag);
        listeners.push(event_listener(element, name, &EventOptions::default(), move |_| {
            state.borrow_mut().release();
        }));
    }

    listeners
}

fn refresh_after_resize(service: &Rc<RefCell<SeqDisplayService>>, container_id: &str) -> DisplayResult<()> {
    let element = container_element(container_id)?;
    let (width, height) = measure(&element);
    let mut service = service.borrow_mut();
    service.resize(width, height)?;
    paint(&element, &service.svg());
    Ok(())
}

fn container_element(id: &str) -> DisplayResult<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| DisplayError::Container(format!("no element with id '{}'", id)))
}

fn measure(element: &Element) -> (f64, f64) {
    (element.client_width() as f64, element.client_height() as f64)
}

fn paint(element: &Element, svg: &str) {
    element.set_inner_html(svg);
}
