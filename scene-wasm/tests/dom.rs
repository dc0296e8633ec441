#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn scene_mount_without_canvas_is_a_noop() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();

    assert!(document.get_element_by_id(scene_wasm::scene::CANVAS_ID).is_none());
    scene_wasm::scene::mount(&window, &document).unwrap();
}

#[wasm_bindgen_test]
fn scene_mount_sizes_canvas_to_viewport() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();

    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(scene_wasm::scene::CANVAS_ID);
    document.body().unwrap().append_child(&canvas).unwrap();

    scene_wasm::scene::mount(&window, &document).unwrap();

    let canvas: HtmlCanvasElement = canvas.dyn_into().unwrap();
    assert!(canvas.width() > 0);
    assert!(canvas.height() > 0);

    canvas.remove();
}

#[wasm_bindgen_test]
fn lightbox_mount_without_markup_is_a_noop() {
    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.get_element_by_id("lightbox").is_none());
    scene_wasm::lightbox::mount(&document).unwrap();
}

#[wasm_bindgen_test]
fn nav_mount_without_markup_is_a_noop() {
    let document = web_sys::window().unwrap().document().unwrap();
    scene_wasm::nav::mount(&document).unwrap();
}

#[wasm_bindgen_test]
fn filter_mount_without_markup_is_a_noop() {
    let document = web_sys::window().unwrap().document().unwrap();
    scene_wasm::filter::mount(&document).unwrap();
}
