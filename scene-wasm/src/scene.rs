//! The canvas particle field: acquires the drawing surface, tracks the
//! pointer and viewport, and runs the redraw loop for the page lifetime.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use scene_core::{Field, Link};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

/// Fixed id of the background surface.
pub const CANVAS_ID: &str = "scene-canvas";

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    // The canvas is optional decoration. A page without it gets no
    // animation, no listeners and no errors.
    let canvas: HtmlCanvasElement = match document.get_element_by_id(CANVAS_ID) {
        Some(element) => element.dyn_into()?,
        None => return Ok(()),
    };
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into()?;

    let (width, height) = viewport(window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = Rc::new(RefCell::new(Field::new(width as f32, height as f32)));
    {
        let field = field.borrow();
        console_log!(
            "particle field started: {} particles, {} blobs",
            field.particles.len(),
            field.blobs.len()
        );
    }

    // Every resize resets the backing store and the wrap bounds immediately.
    {
        let canvas = canvas.clone();
        let field = field.clone();
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let (w, h) = viewport(&win);
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            field.borrow_mut().resize(w as f32, h as f32);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Page-wide pointer tracking, last write wins.
    {
        let field = field.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            field
                .borrow_mut()
                .set_pointer(event.client_x() as f32, event.client_y() as f32);
        }) as Box<dyn FnMut(MouseEvent)>);
        window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Freeze motion while the tab is hidden; hand out fresh velocities when
    // it comes back.
    {
        let field = field.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut field = field.borrow_mut();
            if doc.hidden() {
                field.freeze();
            } else {
                field.wake();
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Render, then request the next render. The loop never terminates on its
    // own; the closure is kept alive through the Rc cycle below.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let win = window.clone();
    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut field = field.borrow_mut();
            field.step();
            let _ = draw(&context, &field);
        }
        if let Some(callback) = frame.borrow().as_ref() {
            let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let Some(callback) = first.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }

    Ok(())
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (width.max(1.0), height.max(1.0))
}

fn draw(context: &CanvasRenderingContext2d, field: &Field) -> Result<(), JsValue> {
    context.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);

    for blob in &field.blobs {
        let (x, y, r) = (blob.pos.x as f64, blob.pos.y as f64, blob.radius as f64);
        let gradient = context.create_radial_gradient(x, y, r * 0.1, x, y, r * 1.1)?;
        gradient.add_color_stop(0.0, &format!("hsla({}, 70%, 60%, {})", blob.hue, blob.alpha))?;
        gradient.add_color_stop(
            0.4,
            &format!("hsla({}, 60%, 50%, {})", blob.hue, blob.alpha * 0.5),
        )?;
        gradient.add_color_stop(1.0, "rgba(10, 12, 22, 0)")?;
        context.set_fill_style_canvas_gradient(&gradient);
        context.begin_path();
        context.arc(x, y, r, 0.0, TAU)?;
        context.fill();
    }

    for particle in &field.particles {
        context.set_fill_style_str(&format!("hsla({}, 60%, 70%, 0.9)", particle.hue));
        context.begin_path();
        context.arc(
            particle.pos.x as f64,
            particle.pos.y as f64,
            particle.radius as f64,
            0.0,
            TAU,
        )?;
        context.fill();
    }

    context.set_line_width(0.6);
    for Link { from, to, opacity } in field.links() {
        context.set_stroke_style_str(&format!("rgba(120, 180, 245, {})", opacity));
        context.begin_path();
        context.move_to(from.x as f64, from.y as f64);
        context.line_to(to.x as f64, to.y as f64);
        context.stroke();
    }

    Ok(())
}
