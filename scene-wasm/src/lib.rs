use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::NodeList;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (crate::log(&format_args!($($t)*).to_string()))
}

pub mod filter;
pub mod lightbox;
pub mod nav;
pub mod parallax;
pub mod scene;
pub mod typer;

/// Wire up every behavior of the bundle. Each mount checks for its own
/// elements and quietly does nothing when they are missing, so a page can
/// carry any subset of the markup.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;

    nav::mount(&document)?;
    typer::mount(&window, &document)?;
    scene::mount(&window, &document)?;
    lightbox::mount(&document)?;
    filter::mount(&document)?;
    parallax::mount(&window, &document)?;

    Ok(())
}

/// Drain a `NodeList` into concretely typed elements, skipping anything that
/// fails the cast.
pub(crate) fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
