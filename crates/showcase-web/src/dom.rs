use showcase_core::Gate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn query_all_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn set_timeout(f: &js_sys::Function, ms: i32) {
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(f, ms);
    }
}

/// Build the persistent `setTimeout` callback that reopens a cooldown gate.
/// One JS function per gate for the page's lifetime, so per-advance timer
/// scheduling allocates nothing on the wasm side.
pub fn gate_reopen_callback(gate: &Rc<RefCell<Gate>>) -> js_sys::Function {
    let gate = gate.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        gate.borrow_mut().reopen();
    }) as Box<dyn FnMut()>);
    let f = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    f
}
