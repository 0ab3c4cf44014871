use crate::constants::*;
use crate::dom;
use showcase_core::{in_central_band, Gate, StepReveal, ADVANCE_COOLDOWN_MS, STEP_REVEAL_RATIO};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Step-by-step reveal: an intersection latch starts the sequence at card 0,
/// then each throttled scroll gesture inside the central viewport band
/// reveals one more card. Cards never un-reveal.
pub fn wire(document: &web::Document) {
    let section = match document.query_selector(STEP_SECTION_SELECTOR) {
        Ok(Some(el)) => el,
        _ => {
            log::info!("[step-reveal] no section; skipping");
            return;
        }
    };
    let cards = Rc::new(dom::query_all(&section, CARD_SELECTOR));
    let state = Rc::new(RefCell::new(StepReveal::new(cards.len())));
    let gate = Rc::new(RefCell::new(Gate::new()));

    // One-shot latch: the first time 30% of the section is visible, card 0
    // is revealed. Later observer callbacks hit the latch and do nothing.
    {
        let state_o = state.clone();
        let cards_o = cards.clone();
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(i) = state_o.borrow_mut().begin() {
                    dom::add_class(&cards_o[i], VISIBLE_CLASS);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(STEP_REVEAL_RATIO));
        if let Ok(observer) =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        {
            observer.observe(&section);
        }
        closure.forget();
    }

    // Scroll gestures advance the cursor while the section straddles the
    // central band. Only a qualifying advance engages the cooldown, so a
    // gesture outside the band never burns the gate.
    {
        let reopen = dom::gate_reopen_callback(&gate);
        let state_g = state.clone();
        let cards_g = cards.clone();
        let gate_g = gate.clone();
        let section_g = section.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::WheelEvent| {
            if !gate_g.borrow().is_open() {
                return;
            }
            let rect = section_g.get_bounding_client_rect();
            if !in_central_band(rect.top(), rect.bottom(), dom::viewport_height()) {
                return;
            }
            let Some(i) = state_g.borrow_mut().advance() else {
                return;
            };
            dom::add_class(&cards_g[i], VISIBLE_CLASS);
            gate_g.borrow_mut().try_close();
            dom::set_timeout(&reopen, ADVANCE_COOLDOWN_MS);
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ =
                window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    log::info!("[step-reveal] wired {} cards", cards.len());
}
