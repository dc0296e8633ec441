//! Mobile navigation toggle.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, Node};

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let toggle = match document.get_element_by_id("nav-toggle") {
        Some(element) => element,
        None => return Ok(()),
    };
    let nav = match document.get_element_by_id("site-nav") {
        Some(element) => element,
        None => return Ok(()),
    };

    // Open/close on the burger button.
    {
        let nav = nav.clone();
        let toggle_el = toggle.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.stop_propagation();
            let _ = nav.class_list().toggle("active");
            swap_icon(&toggle_el, nav.class_list().contains("active"));
        }) as Box<dyn FnMut(MouseEvent)>);
        toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Close when a nav link is chosen.
    for link in crate::collect::<Element>(nav.query_selector_all("a")?) {
        let nav = nav.clone();
        let toggle_el = toggle.clone();
        let closure = Closure::wrap(Box::new(move || close(&nav, &toggle_el)) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Close when a click lands outside both the menu and the toggle.
    {
        let nav = nav.clone();
        let toggle_el = toggle.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            if !nav.class_list().contains("active") {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .map_or(false, |node| nav.contains(Some(node)) || toggle_el.contains(Some(node)));
            if !inside {
                close(&nav, &toggle_el);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn close(nav: &Element, toggle: &Element) {
    let _ = nav.class_list().remove_1("active");
    swap_icon(toggle, false);
}

fn swap_icon(toggle: &Element, open: bool) {
    if let Ok(Some(icon)) = toggle.query_selector("i") {
        let classes = icon.class_list();
        if open {
            let _ = classes.remove_1("fa-bars");
            let _ = classes.add_1("fa-times");
        } else {
            let _ = classes.add_1("fa-bars");
            let _ = classes.remove_1("fa-times");
        }
    }
}
