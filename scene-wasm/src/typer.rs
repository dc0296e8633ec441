//! Typed hero headline plus blinking cursor.

use std::cell::RefCell;
use std::rc::Rc;

use scene_core::typer::{TypeWriter, START_DELAY_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

const CURSOR_BLINK_MS: i32 = 500;

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let target = document
        .get_element_by_id("typed-line")
        .or_else(|| document.query_selector(".hero-title span").ok().flatten());

    if let Some(target) = target {
        let writer = Rc::new(RefCell::new(TypeWriter::default()));

        // One timeout, re-armed with whatever delay the state machine asks
        // for next.
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let armed = tick.clone();
        let win = window.clone();
        *armed.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let delay = {
                let mut writer = writer.borrow_mut();
                let delay = writer.tick();
                target.set_text_content(Some(&writer.text()));
                delay
            };
            if let Some(callback) = tick.borrow().as_ref() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    delay as i32,
                );
            }
        }) as Box<dyn FnMut()>));
        if let Some(callback) = armed.borrow().as_ref() {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                START_DELAY_MS as i32,
            )?;
        };
    }

    if let Some(cursor) = document.query_selector(".cursor")? {
        let cursor: HtmlElement = cursor.dyn_into()?;
        let closure = Closure::wrap(Box::new(move || {
            let style = cursor.style();
            let hidden = style
                .get_property_value("opacity")
                .map(|v| v == "0")
                .unwrap_or(false);
            let _ = style.set_property("opacity", if hidden { "1" } else { "0" });
        }) as Box<dyn FnMut()>);
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            CURSOR_BLINK_MS,
        )?;
        closure.forget();
    }

    Ok(())
}
