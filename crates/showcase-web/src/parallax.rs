use crate::constants::*;
use crate::dom;
use showcase_core::{intersects_viewport, layer_offset, SectionReveal, AUTO_REVEAL_RATIO};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One auto-reveal section with its card and decorative layer children,
/// snapshotted at wiring time.
struct Section {
    root: web::Element,
    cards: Vec<web::Element>,
    layers: Vec<web::Element>,
}

/// Auto-reveal plus scroll-linked parallax. Each section's cards appear all
/// at once when 25% of it enters the viewport; its layers are translated
/// every frame in proportion to the scroll position while it stays visible.
pub fn wire(document: &web::Document) {
    let roots = dom::query_all_document(document, AUTO_SECTION_SELECTOR);
    if roots.is_empty() {
        log::info!("[parallax] no sections; skipping");
        return;
    }
    let sections: Rc<Vec<Section>> = Rc::new(
        roots
            .into_iter()
            .map(|root| Section {
                cards: dom::query_all(&root, CARD_SELECTOR),
                layers: dom::query_all(&root, LAYER_SELECTOR),
                root,
            })
            .collect(),
    );
    let reveals = Rc::new(RefCell::new(vec![SectionReveal::new(); sections.len()]));

    // Reveal all of a section's cards once, no matter how often the
    // observer fires for it.
    {
        let sections_o = sections.clone();
        let reveals_o = reveals.clone();
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target: web::Element = entry.target();
                let Some(idx) = sections_o.iter().position(|s| s.root == target) else {
                    continue;
                };
                if reveals_o.borrow_mut()[idx].reveal_once() {
                    for card in &sections_o[idx].cards {
                        dom::add_class(card, VISIBLE_CLASS);
                    }
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(AUTO_REVEAL_RATIO));
        if let Ok(observer) =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        {
            for section in sections.iter() {
                observer.observe(&section.root);
            }
        }
        closure.forget();
    }

    // Scroll events collapse to at most one layer recompute per frame.
    {
        let pending = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let sections_t = sections.clone();
        let pending_t = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_t.set(false);
            apply_parallax(&sections_t);
        }) as Box<dyn FnMut()>));

        let pending_s = pending.clone();
        let tick_s = tick.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            if pending_s.get() {
                return;
            }
            pending_s.set(true);
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_s.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Respect the initial scroll position before any scroll event fires.
    apply_parallax(&sections);
    log::info!("[parallax] wired {} sections", sections.len());
}

fn apply_parallax(sections: &[Section]) {
    let vh = dom::viewport_height();
    for section in sections {
        let rect = section.root.get_bounding_client_rect();
        // Off-screen sections get no style write this frame.
        if !intersects_viewport(rect.top(), rect.bottom(), vh) {
            continue;
        }
        let offset = layer_offset(rect.top(), vh);
        for layer in &section.layers {
            if let Some(el) = layer.dyn_ref::<web::HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("transform", &format!("translateY({}px)", offset));
            }
        }
    }
}
