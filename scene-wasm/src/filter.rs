//! Portfolio category filtering.

use std::rc::Rc;

use scene_core::portfolio::{category_matches, FILTER_ALL};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let buttons = crate::collect::<Element>(document.query_selector_all(".filter-btn")?);
    if buttons.is_empty() {
        return Ok(());
    }
    let items = Rc::new(crate::collect::<HtmlElement>(
        document.query_selector_all(".portfolio-item")?,
    ));
    let buttons = Rc::new(buttons);

    for button in buttons.iter() {
        let pressed = button.clone();
        let buttons = buttons.clone();
        let items = items.clone();
        let closure = Closure::wrap(Box::new(move || {
            for other in buttons.iter() {
                let _ = other.class_list().remove_1("active");
            }
            let _ = pressed.class_list().add_1("active");

            let active = pressed
                .get_attribute("data-filter")
                .unwrap_or_else(|| FILTER_ALL.to_string());

            for item in items.iter() {
                let category = item.get_attribute("data-category").unwrap_or_default();
                let style = item.style();
                if category_matches(&active, &category) {
                    let _ = style.remove_property("display");
                    let _ = style.set_property("opacity", "1");
                } else {
                    let _ = style.set_property("display", "none");
                }
            }
        }) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
