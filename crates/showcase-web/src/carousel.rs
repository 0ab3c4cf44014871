use crate::constants::*;
use crate::dom;
use showcase_core::{
    swipe_direction, wheel_direction, Carousel, Gate, ADVANCE_COOLDOWN_MS, IMAGE_LOAD_FALLBACK_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fixed DOM snapshot for the carousel, taken once at wiring time.
pub struct CarouselDom {
    pub root: web::HtmlElement,
    pub slides: Vec<web::Element>,
    pub dots: Vec<web::Element>,
}

/// Progress of one swipe or drag gesture, in client-X pixels.
#[derive(Default, Clone, Copy)]
pub struct SwipeTrack {
    pub active: bool,
    pub start_x: f64,
    pub last_x: f64,
}

pub fn wire(document: &web::Document) {
    let root = match document.query_selector(SLIDER_SELECTOR) {
        Ok(Some(el)) => match el.dyn_into::<web::HtmlElement>() {
            Ok(el) => el,
            Err(_) => return,
        },
        _ => {
            log::info!("[carousel] no slider root; skipping");
            return;
        }
    };
    let slides = dom::query_all(&root, SLIDE_SELECTOR);
    if slides.is_empty() {
        log::info!("[carousel] no slides; skipping");
        return;
    }

    let dots = build_dots(document, &root, &slides);
    let dom = Rc::new(CarouselDom { root, slides, dots });
    let state = Rc::new(RefCell::new(Carousel::new(dom.slides.len())));
    let gate = Rc::new(RefCell::new(Gate::new()));
    let reopen = dom::gate_reopen_callback(&gate);

    wire_dot_clicks(&dom, &state);
    wire_wheel(&dom, &state, &gate, &reopen);
    wire_keyboard(&dom, &state, &gate, &reopen);
    wire_touch(&dom, &state, &gate, &reopen);
    wire_drag(&dom, &state, &gate, &reopen);
    wire_loaded(&dom);

    render(&dom, &state.borrow());
    log::info!("[carousel] wired {} slides", dom.slides.len());
}

/// Re-label every slide with its position slot and mark the active dot.
/// Pure DOM write; the index lives in [`Carousel`].
pub fn render(dom: &CarouselDom, state: &Carousel) {
    for (i, slide) in dom.slides.iter().enumerate() {
        slide.set_class_name(SLIDE_BASE_CLASS);
        let _ = slide
            .class_list()
            .add_1(&format!("{}{}", POSITION_CLASS_PREFIX, state.slot(i)));
    }
    for (i, dot) in dom.dots.iter().enumerate() {
        let selected = if i == state.index() { "true" } else { "false" };
        let _ = dot.set_attribute("aria-selected", selected);
    }
}

/// Gated advance: drop the request while the cooldown is running, otherwise
/// close the gate, move the index, and schedule the reopen.
fn advance(
    dom: &Rc<CarouselDom>,
    state: &Rc<RefCell<Carousel>>,
    gate: &Rc<RefCell<Gate>>,
    reopen: &js_sys::Function,
    direction: i32,
) {
    if !gate.borrow_mut().try_close() {
        return;
    }
    state.borrow_mut().step(direction);
    render(dom, &state.borrow());
    dom::set_timeout(reopen, ADVANCE_COOLDOWN_MS);
}

/// One selector button per slide, colorized from the slide's `data-color`.
fn build_dots(
    document: &web::Document,
    root: &web::HtmlElement,
    slides: &[web::Element],
) -> Vec<web::Element> {
    let container = match root.query_selector(DOTS_SELECTOR) {
        Ok(Some(el)) => el,
        _ => return Vec::new(),
    };
    let mut dots = Vec::with_capacity(slides.len());
    for (i, slide) in slides.iter().enumerate() {
        let Ok(dot) = document.create_element("button") else {
            continue;
        };
        let _ = dot.set_attribute("type", "button");
        let _ = dot.set_attribute("aria-label", &format!("Go to slide {}", i + 1));
        let color = slide
            .get_attribute(COLOR_ATTR)
            .unwrap_or_else(|| DEFAULT_DOT_COLOR.to_string());
        if let Some(el) = dot.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property("background", &color);
        }
        let _ = container.append_child(&dot);
        dots.push(dot);
    }
    dots
}

/// Dot clicks jump directly to the slide; no cooldown on this path.
fn wire_dot_clicks(dom: &Rc<CarouselDom>, state: &Rc<RefCell<Carousel>>) {
    for (i, dot) in dom.dots.iter().enumerate() {
        let dom_c = dom.clone();
        let state_c = state.clone();
        let closure = Closure::wrap(Box::new(move || {
            state_c.borrow_mut().go_to(i as isize);
            render(&dom_c, &state_c.borrow());
        }) as Box<dyn FnMut()>);
        let _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(
    dom: &Rc<CarouselDom>,
    state: &Rc<RefCell<Carousel>>,
    gate: &Rc<RefCell<Gate>>,
    reopen: &js_sys::Function,
) {
    let dom_w = dom.clone();
    let state_w = state.clone();
    let gate_w = gate.clone();
    let reopen_w = reopen.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if let Some(dir) = wheel_direction(ev.delta_x(), ev.delta_y()) {
            // Suppress native scrolling for this gesture.
            ev.prevent_default();
            advance(&dom_w, &state_w, &gate_w, &reopen_w, dir);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = dom.root.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_keyboard(
    dom: &Rc<CarouselDom>,
    state: &Rc<RefCell<Carousel>>,
    gate: &Rc<RefCell<Gate>>,
    reopen: &js_sys::Function,
) {
    let dom_k = dom.clone();
    let state_k = state.clone();
    let gate_k = gate.clone();
    let reopen_k = reopen.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        match ev.key().as_str() {
            "ArrowRight" => advance(&dom_k, &state_k, &gate_k, &reopen_k, 1),
            "ArrowLeft" => advance(&dom_k, &state_k, &gate_k, &reopen_k, -1),
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch(
    dom: &Rc<CarouselDom>,
    state: &Rc<RefCell<Carousel>>,
    gate: &Rc<RefCell<Gate>>,
    reopen: &js_sys::Function,
) {
    let track = Rc::new(RefCell::new(SwipeTrack::default()));

    // touchstart
    {
        let track_s = track.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                let x = touch.client_x() as f64;
                *track_s.borrow_mut() = SwipeTrack {
                    active: true,
                    start_x: x,
                    last_x: x,
                };
            }
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchmove
    {
        let track_m = track.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let mut tr = track_m.borrow_mut();
            if !tr.active {
                return;
            }
            if let Some(touch) = ev.touches().get(0) {
                tr.last_x = touch.client_x() as f64;
            }
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchend
    {
        let track_e = track.clone();
        let dom_e = dom.clone();
        let state_e = state.clone();
        let gate_e = gate.clone();
        let reopen_e = reopen.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            let tr = {
                let mut tr = track_e.borrow_mut();
                let snapshot = *tr;
                tr.active = false;
                snapshot
            };
            if !tr.active {
                return;
            }
            if let Some(dir) = swipe_direction(tr.start_x, tr.last_x) {
                advance(&dom_e, &state_e, &gate_e, &reopen_e, dir);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_drag(
    dom: &Rc<CarouselDom>,
    state: &Rc<RefCell<Carousel>>,
    gate: &Rc<RefCell<Gate>>,
    reopen: &js_sys::Function,
) {
    let track = Rc::new(RefCell::new(SwipeTrack::default()));
    set_cursor(&dom.root, "grab");

    // mousedown
    {
        let track_d = track.clone();
        let root_d = dom.root.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let x = ev.client_x() as f64;
            *track_d.borrow_mut() = SwipeTrack {
                active: true,
                start_x: x,
                last_x: x,
            };
            set_cursor(&root_d, "grabbing");
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mousemove
    {
        let track_m = track.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let mut tr = track_m.borrow_mut();
            if tr.active {
                tr.last_x = ev.client_x() as f64;
            }
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mouseup
    {
        let track_u = track.clone();
        let dom_u = dom.clone();
        let state_u = state.clone();
        let gate_u = gate.clone();
        let reopen_u = reopen.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let tr = {
                let mut tr = track_u.borrow_mut();
                let snapshot = *tr;
                tr.active = false;
                snapshot
            };
            if !tr.active {
                return;
            }
            set_cursor(&dom_u.root, "grab");
            if let Some(dir) = swipe_direction(tr.start_x, tr.last_x) {
                advance(&dom_u, &state_u, &gate_u, &reopen_u, dir);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mouseleave: abandon the gesture so the cursor never sticks on grabbing
    {
        let track_l = track.clone();
        let root_l = dom.root.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            track_l.borrow_mut().active = false;
            set_cursor(&root_l, "grab");
        }) as Box<dyn FnMut(_)>);
        let _ = dom
            .root
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
fn set_cursor(root: &web::HtmlElement, value: &str) {
    let _ = root.style().set_property("cursor", value);
}

/// Mark the carousel loaded once every image has settled (load or error, both
/// count), with a hard fallback timer so the marker always lands eventually.
fn wire_loaded(dom: &Rc<CarouselDom>) {
    let imgs: Vec<web::HtmlImageElement> = dom::query_all(&dom.root, "img")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        .collect();
    let total = imgs.len();
    if total == 0 {
        dom::add_class(&dom.root, LOADED_CLASS);
        return;
    }

    let settled = Rc::new(Cell::new(0usize));
    for img in &imgs {
        // Images decoded before wiring never fire load again.
        if img.complete() {
            settled.set(settled.get() + 1);
            continue;
        }
        let settled_i = settled.clone();
        let root_i = dom.root.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            settled_i.set(settled_i.get() + 1);
            if settled_i.get() >= total {
                dom::add_class(&root_i, LOADED_CLASS);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        let _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    if settled.get() >= total {
        dom::add_class(&dom.root, LOADED_CLASS);
    }

    // Fallback: apply the marker regardless if load signals never complete.
    {
        let root_f = dom.root.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::add_class(&root_f, LOADED_CLASS);
        }) as Box<dyn FnMut()>);
        dom::set_timeout(closure.as_ref().unchecked_ref(), IMAGE_LOAD_FALLBACK_MS);
        closure.forget();
    }
}
