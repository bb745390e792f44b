//! Scroll Service
//!
//! One page-wide [`ScrollWatch`] fed by a single window `scroll` listener.
//! Components subscribe on mount and unsubscribe on cleanup; the listener
//! itself is installed on first use and lives for the page.

use std::cell::{Cell, RefCell};

use leptos::prelude::*;
use timeless_trips::core::scroll::{ScrollWatch, SubscriptionId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static WATCH: RefCell<ScrollWatch> = RefCell::new(ScrollWatch::default());
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn install_listener() {
    if INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let handle_scroll = Closure::wrap(Box::new(move || {
        report(scroll_offset());
    }) as Box<dyn FnMut()>);

    let _ = window.add_event_listener_with_callback("scroll", handle_scroll.as_ref().unchecked_ref());

    // Keep the closure alive
    handle_scroll.forget();
}

/// Register a listener for threshold crossings.
pub fn subscribe(listener: impl FnMut(bool) + 'static) -> SubscriptionId {
    install_listener();
    WATCH.with(|watch| watch.borrow_mut().subscribe(listener))
}

pub fn unsubscribe(id: SubscriptionId) -> bool {
    WATCH.with(|watch| watch.borrow_mut().unsubscribe(id))
}

/// Feed an offset into the watch. Returns whether it crossed the threshold.
pub fn report(offset: f64) -> bool {
    WATCH.with(|watch| watch.borrow_mut().update(offset))
}

pub fn is_past_threshold() -> bool {
    WATCH.with(|watch| watch.borrow().is_past())
}

pub fn subscriber_count() -> usize {
    WATCH.with(|watch| watch.borrow().subscriber_count())
}

/// Reactive "scrolled past the threshold" flag, subscribed for the lifetime
/// of the calling component.
pub fn use_scrolled_past() -> ReadSignal<bool> {
    let past = RwSignal::new(is_past_threshold());
    let id = subscribe(move |is_past| past.set(is_past));
    on_cleanup(move || {
        unsubscribe(id);
    });
    past.read_only()
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No section element with id {id}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
