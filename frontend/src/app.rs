use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::animation::Particle;
use crate::components::confetti::ConfettiLayer;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::lightbox::Lightbox;
use crate::components::nav::Nav;
use crate::dom::{self, Listener, RevealPass};
use crate::events;
use crate::fragment;
use crate::port::{self, UiPort};
use crate::random::MathRandom;
use crate::route::PageId;
use crate::state::{Action, AppState};

pub struct App {
    state: AppState,
    random: MathRandom,
    page_ref: NodeRef,
    gallery_host: Option<Element>,
    reveal: Option<RevealPass>,
    _listeners: Vec<Listener>,
}

impl Component for App {
    type Message = Action;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let listeners = install_listeners(ctx.link());
        ctx.link().send_message(events::initial_load(&dom::location_hash()));

        Self {
            state: AppState::default(),
            random: MathRandom,
            page_ref: NodeRef::default(),
            gallery_host: None,
            reveal: None,
            _listeners: listeners,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, action: Self::Message) -> bool {
        let effects = self.state.apply(action, &mut self.random);
        let mut port = BrowserPort {
            link: ctx.link(),
            page_ref: &self.page_ref,
            gallery_host: &mut self.gallery_host,
            reveal: &mut self.reveal,
        };
        port::run(&mut port, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dispatch = ctx.link().callback(|action: Action| action);

        let gallery = match &self.gallery_host {
            Some(host) => yew::create_portal(
                html! {
                    <GalleryGrid
                        entries={self.state.visible_entries().into_iter().copied().collect::<Vec<_>>()}
                        dispatch={dispatch.clone()}
                    />
                },
                host.clone(),
            ),
            None => html! {},
        };

        html! {
            <>
                <Nav
                    current={self.state.current_page.clone()}
                    menu_open={self.state.mobile_nav_open}
                    dispatch={dispatch.clone()}
                />
                <main id="page-content" class="page-content" ref={self.page_ref.clone()}></main>
                {gallery}
                <Lightbox entry={self.state.lightbox} dispatch={dispatch} />
                <ConfettiLayer particles={self.state.particles.clone()} />
            </>
        }
    }
}

/// Document and window listeners that live as long as the app.
fn install_listeners(link: &Scope<App>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    if let Some(document) = dom::document() {
        let clicks = link.clone();
        listeners.extend(Listener::new(&document, "click", move |e| {
            clicks.send_message_batch(events::document_click(&dom::click_target(&e)));
        }));

        let keys = link.clone();
        listeners.extend(Listener::new(&document, "keydown", move |e| {
            if let Some(action) = e.dyn_ref::<KeyboardEvent>().and_then(|k| events::key_down(&k.key())) {
                keys.send_message(action);
            }
        }));

        let submits = link.clone();
        listeners.extend(Listener::new(&document, "submit", move |e| {
            let Some(form_id) = dom::form_id(&e) else {
                return;
            };
            if let Some(action) = events::submit(&form_id, dom::booking_name()) {
                e.prevent_default();
                submits.send_message(action);
            }
        }));
    }

    if let Some(window) = window() {
        let history = link.clone();
        listeners.extend(Listener::new(&window, "popstate", move |_| {
            history.send_message(events::pop_state(&dom::location_hash()));
        }));
    }

    listeners
}

struct BrowserPort<'a> {
    link: &'a Scope<App>,
    page_ref: &'a NodeRef,
    gallery_host: &'a mut Option<Element>,
    reveal: &'a mut Option<RevealPass>,
}

impl BrowserPort<'_> {
    fn after(&self, delay_ms: u32, action: Action) {
        let link = self.link.clone();
        Timeout::new(delay_ms, move || link.send_message(action)).forget();
    }
}

impl UiPort for BrowserPort<'_> {
    fn fetch_fragment(&mut self, page: PageId, generation: u64) {
        self.link.send_future(async move {
            let html = fragment::load(&page).await;
            Action::FragmentLoaded { generation, html }
        });
    }

    fn push_history(&mut self, page: &PageId) {
        dom::push_history(page);
    }

    fn mount_fragment(&mut self, html: &str) {
        *self.gallery_host = None;
        match self.page_ref.cast::<Element>() {
            Some(container) => container.set_inner_html(html),
            None => debug!("Page container not mounted yet"),
        }
    }

    fn mount_gallery(&mut self) {
        *self.gallery_host = self.page_ref.cast::<Element>().and_then(|root| dom::gallery_host(&root));
        if self.gallery_host.is_none() {
            debug!("Mounted page has no gallery container");
        }
    }

    fn scroll_to_top(&mut self) {
        dom::scroll_to_top();
    }

    fn schedule_reveal(&mut self, generation: u64, delay_ms: u32) {
        self.after(delay_ms, Action::RevealDue { generation });
    }

    fn reveal_cards(&mut self) {
        *self.reveal = self.page_ref.cast::<Element>().and_then(|root| RevealPass::start(&root));
    }

    fn mark_active_filter(&mut self, control: usize) {
        dom::mark_active_filter(control);
    }

    fn lock_page_scroll(&mut self, locked: bool) {
        dom::set_page_scroll_locked(locked);
    }

    fn alert(&mut self, message: &str) {
        dom::alert(message);
    }

    fn reset_booking_form(&mut self) {
        dom::reset_booking_form();
    }

    fn rewrite_contact_link(&mut self, href: &str) {
        dom::rewrite_contact_links(href);
    }

    fn launch_particle(&mut self, particle: Particle) {
        self.after(particle.delay_ms, Action::ParticleLaunched(particle));
    }

    fn expire_particle(&mut self, id: u64, after_ms: u32) {
        self.after(after_ms, Action::ParticleExpired(id));
    }
}
