//! Thin helpers over `web_sys` used by the browser port. Every lookup
//! tolerates a missing element.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement,
    HtmlInputElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use crate::animation::{
    HIDDEN_OPACITY, HIDDEN_TRANSFORM, RESTING_OPACITY, RESTING_TRANSFORM, REVEAL_SELECTOR,
    REVEAL_TRANSITION,
};
use crate::booking;
use crate::config;
use crate::events::{ClickTarget, FilterControl};
use crate::route::PageId;

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn push_history(page: &PageId) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::from_str(page.as_str()), "", Some(&page.hash()));
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn set_page_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Describes the element a document click landed on.
pub fn click_target(event: &Event) -> ClickTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ClickTarget::default();
    };
    let closest = |selector: &str| element.closest(selector).ok().flatten();

    ClickTarget {
        inside_nav: closest("nav").is_some(),
        on_menu_button: closest(".mobile-menu-btn").is_some(),
        cta: closest(".cta-button").is_some(),
        contact_link: closest("a")
            .and_then(|anchor| anchor.get_attribute("href"))
            .map_or(false, |href| booking::is_contact_href(&href)),
        filter: closest(".gallery-filter").and_then(|control| filter_control(&control)),
    }
}

fn filter_controls() -> Vec<Element> {
    let Some(controls) = document().and_then(|d| d.query_selector_all(".gallery-filter").ok()) else {
        return Vec::new();
    };
    (0..controls.length())
        .filter_map(|i| controls.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .collect()
}

fn filter_control(control: &Element) -> Option<FilterControl> {
    let value = control.get_attribute("data-filter")?;
    let node: &Node = control;
    let index = filter_controls()
        .iter()
        .position(|candidate| candidate.is_same_node(Some(node)))?;
    Some(FilterControl { value, index })
}

/// Id of the form an event was fired on, if it came from a form.
pub fn form_id(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        .map(|form| form.id())
}

pub fn booking_name() -> Option<String> {
    document()
        .and_then(|d| d.get_element_by_id(booking::NAME_FIELD_ID))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

pub fn reset_booking_form() {
    match document()
        .and_then(|d| d.get_element_by_id(booking::FORM_ID))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form.reset(),
        None => debug!("No booking form to reset"),
    }
}

pub fn rewrite_contact_links(href: &str) {
    let Some(links) = document()
        .and_then(|d| d.query_selector_all("a[href*=\"whatsapp\"], a[href*=\"wa.me\"]").ok())
    else {
        return;
    };
    for i in 0..links.length() {
        if let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = link.set_attribute("href", href);
        }
    }
}

/// Gives the `index`-th `.gallery-filter` control the `active` class and
/// takes it off every other one.
pub fn mark_active_filter(index: usize) {
    for (i, control) in filter_controls().iter().enumerate() {
        let classes = control.class_list();
        if i == index {
            let _ = classes.add_1("active");
        } else {
            let _ = classes.remove_1("active");
        }
    }
}

/// Empties and returns the gallery container of the mounted fragment.
pub fn gallery_host(root: &Element) -> Option<Element> {
    let host = root.query_selector("#photoGallery").ok().flatten()?;
    host.set_inner_html("");
    Some(host)
}

fn set_card_style(card: &HtmlElement, opacity: &str, transform: &str) {
    let style = card.style();
    let _ = style.set_property("opacity", opacity);
    let _ = style.set_property("transform", transform);
}

/// One intersection-driven reveal of the cards under a root element.
/// Dropping it disconnects the observer.
pub struct RevealPass {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealPass {
    pub fn start(root: &Element) -> Option<Self> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(card) = target.dyn_ref::<HtmlElement>() {
                    set_card_style(card, RESTING_OPACITY, RESTING_TRANSFORM);
                }
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        let cards = root.query_selector_all(REVEAL_SELECTOR).ok()?;
        for i in 0..cards.length() {
            if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                set_card_style(&card, HIDDEN_OPACITY, HIDDEN_TRANSFORM);
                let _ = card.style().set_property("transition", REVEAL_TRANSITION);
                observer.observe(&card);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealPass {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
