//! Portfolio lightbox: overlay, paging, keyboard navigation.

use std::cell::RefCell;
use std::rc::Rc;

use scene_core::portfolio::Gallery;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent, Node};

struct Lightbox {
    overlay: HtmlElement,
    image: HtmlImageElement,
    caption: Option<Element>,
    items: Vec<Element>,
    gallery: RefCell<Gallery>,
    document: Document,
}

impl Lightbox {
    fn show(&self, index: usize) {
        let item = match self.items.get(index) {
            Some(item) => item,
            None => return,
        };

        if let Ok(Some(img)) = item.query_selector("img") {
            if let Ok(img) = img.dyn_into::<HtmlImageElement>() {
                self.image.set_src(&img.src());
            }
        }

        if let Some(caption) = &self.caption {
            let title = text_of(item, "h3");
            let category = text_of(item, "p");
            caption.set_text_content(Some(&format!("{} - {}", title, category)));
        }
    }

    fn open(&self, index: usize) {
        let index = self.gallery.borrow_mut().jump(index);
        self.show(index);
        let _ = self.overlay.style().set_property("display", "block");
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn close(&self) {
        let _ = self.overlay.style().set_property("display", "none");
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", "auto");
        }
    }

    fn is_open(&self) -> bool {
        self.overlay
            .style()
            .get_property_value("display")
            .map(|display| display == "block")
            .unwrap_or(false)
    }

    fn next(&self) {
        let index = self.gallery.borrow_mut().next();
        self.show(index);
    }

    fn prev(&self) {
        let index = self.gallery.borrow_mut().prev();
        self.show(index);
    }
}

fn text_of(item: &Element, selector: &str) -> String {
    item.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let overlay: HtmlElement = match document.get_element_by_id("lightbox") {
        Some(element) => element.dyn_into()?,
        None => return Ok(()),
    };
    let image: HtmlImageElement = match document.get_element_by_id("lightbox-img") {
        Some(element) => element.dyn_into()?,
        None => return Ok(()),
    };
    let items = crate::collect::<Element>(document.query_selector_all(".portfolio-item")?);
    if items.is_empty() {
        return Ok(());
    }

    let lightbox = Rc::new(Lightbox {
        overlay,
        image,
        caption: document.get_element_by_id("lightbox-caption"),
        gallery: RefCell::new(Gallery::new(items.len())),
        items,
        document: document.clone(),
    });

    // A view button inside each item opens the overlay on that item.
    for (index, item) in lightbox.items.iter().enumerate() {
        if let Some(button) = item.query_selector(".btn")? {
            let lightbox = lightbox.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                lightbox.open(index);
            }) as Box<dyn FnMut(MouseEvent)>);
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }

    if let Some(button) = document.query_selector(".lightbox-prev")? {
        let lightbox = lightbox.clone();
        let closure = Closure::wrap(Box::new(move || lightbox.prev()) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(button) = document.query_selector(".lightbox-next")? {
        let lightbox = lightbox.clone();
        let closure = Closure::wrap(Box::new(move || lightbox.next()) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(button) = document.query_selector(".lightbox-close")? {
        let lightbox = lightbox.clone();
        let closure = Closure::wrap(Box::new(move || lightbox.close()) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Clicking the dimmed backdrop (but not the framed content) closes.
    {
        let handler = lightbox.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let overlay_node: &Node = handler.overlay.as_ref();
            if target
                .as_ref()
                .map_or(false, |node| node.is_same_node(Some(overlay_node)))
            {
                handler.close();
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        lightbox
            .overlay
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Escape closes; arrow keys page while the overlay is open.
    {
        let lightbox = lightbox.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if !lightbox.is_open() {
                return;
            }
            match event.key().as_str() {
                "Escape" => lightbox.close(),
                "ArrowLeft" => lightbox.prev(),
                "ArrowRight" => lightbox.next(),
                _ => {}
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
