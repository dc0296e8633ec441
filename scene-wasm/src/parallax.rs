//! Vertical parallax offset for the hero background.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

const PARALLAX_RATE: f64 = 0.3;

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let background: HtmlElement = match document.query_selector(".parallax-bg")? {
        Some(element) => element.dyn_into()?,
        None => return Ok(()),
    };

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scrolled = win.page_y_offset().unwrap_or(0.0);
        let _ = background.style().set_property(
            "transform",
            &format!("translateY({}px)", scrolled * PARALLAX_RATE),
        );
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
