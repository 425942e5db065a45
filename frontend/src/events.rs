//! Decoding of raw document events into [`Action`]s.
//!
//! The browser adapter describes what was hit; these functions decide what
//! it means, so the mapping can be tested without a document.

use crate::booking;
use crate::route::PageId;
use crate::state::{Action, NavOrigin};

/// What a document-level click landed on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickTarget {
    pub inside_nav: bool,
    pub on_menu_button: bool,
    pub cta: bool,
    pub contact_link: bool,
    /// Enclosing `.gallery-filter` control, if any.
    pub filter: Option<FilterControl>,
}

/// A gallery filter control: its `data-filter` value and its position among
/// the page's filter controls.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterControl {
    pub value: String,
    pub index: usize,
}

pub fn document_click(target: &ClickTarget) -> Vec<Action> {
    let mut actions = Vec::new();
    if !target.inside_nav && !target.on_menu_button {
        actions.push(Action::CloseMobileNav);
    }
    if let Some(filter) = &target.filter {
        actions.push(Action::FilterSelected {
            filter: filter.value.clone(),
            control: filter.index,
        });
    }
    if target.contact_link {
        actions.push(Action::ContactLinkActivated);
    }
    if target.cta {
        actions.push(Action::CtaActivated);
    }
    actions
}

pub fn key_down(key: &str) -> Option<Action> {
    match key {
        "Escape" | "Esc" => Some(Action::CloseLightbox),
        _ => None,
    }
}

/// Only clicks on the dimmed backdrop itself dismiss the lightbox.
pub fn overlay_click(on_backdrop: bool) -> Option<Action> {
    on_backdrop.then_some(Action::CloseLightbox)
}

/// Submissions of any form other than the booking form are left alone.
pub fn submit(form_id: &str, name: Option<String>) -> Option<Action> {
    (form_id == booking::FORM_ID).then(|| Action::BookingSubmitted { name })
}

pub fn pop_state(hash: &str) -> Action {
    Action::Navigate {
        page: PageId::from_hash(hash),
        origin: NavOrigin::History,
    }
}

/// First navigation; honours a deep link in the location hash.
pub fn initial_load(hash: &str) -> Action {
    Action::Navigate {
        page: PageId::from_hash(hash),
        origin: NavOrigin::Initial,
    }
}

pub fn nav_control(page: &str) -> Action {
    Action::Navigate {
        page: PageId::new(page),
        origin: NavOrigin::NavControl,
    }
}
