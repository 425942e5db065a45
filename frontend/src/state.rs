//! Application state and the single place it changes.
//!
//! Every UI event is decoded into an [`Action`]. [`AppState::apply`] updates
//! the record and returns the [`Effect`]s the browser still has to carry out
//! (fetching, history, timers, alerts), which a [`crate::port::UiPort`]
//! executes.

use log::{debug, info};
use serde::Serialize;

use crate::animation::{plan_confetti, Particle};
use crate::booking;
use crate::config;
use crate::gallery::{self, GalleryEntry};
use crate::random::RandomSource;
use crate::route::PageId;

/// What started a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NavOrigin {
    /// First load, including a deep link in the location hash.
    Initial,
    /// A header navigation control.
    NavControl,
    /// Browser back/forward.
    History,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Navigate { page: PageId, origin: NavOrigin },
    FragmentLoaded { generation: u64, html: String },
    RevealDue { generation: u64 },
    /// A `.gallery-filter` control was clicked; `control` is its position
    /// among the filter controls of the page.
    FilterSelected { filter: String, control: usize },
    OpenLightbox(u32),
    CloseLightbox,
    ToggleMobileNav,
    CloseMobileNav,
    BookingSubmitted { name: Option<String> },
    ContactLinkActivated,
    CtaActivated,
    ParticleLaunched(Particle),
    ParticleExpired(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchFragment { page: PageId, generation: u64 },
    PushHistory(PageId),
    MountFragment(String),
    MountGallery,
    ScrollToTop,
    ScheduleReveal { generation: u64, delay_ms: u32 },
    RevealCards,
    MarkActiveFilter(usize),
    LockPageScroll(bool),
    Alert(String),
    ResetBookingForm,
    RewriteContactLink(String),
    LaunchParticle(Particle),
    ExpireParticle { id: u64, after_ms: u32 },
}

/// The fragment currently in the page container.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MountedFragment {
    pub page: PageId,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppState {
    pub current_page: PageId,
    /// Bumped on every navigation; loads from older navigations are dropped.
    pub generation: u64,
    pub mounted: Option<MountedFragment>,
    pub active_filter: String,
    pub lightbox: Option<GalleryEntry>,
    pub mobile_nav_open: bool,
    pub particles: Vec<Particle>,
    next_particle_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: PageId::home(),
            generation: 0,
            mounted: None,
            active_filter: gallery::ALL.to_string(),
            lightbox: None,
            mobile_nav_open: false,
            particles: Vec::new(),
            next_particle_id: 0,
        }
    }
}

impl AppState {
    pub fn apply(&mut self, action: Action, random: &mut dyn RandomSource) -> Vec<Effect> {
        let effects = match action {
            Action::Navigate { page, origin } => self.navigate(page, origin),
            Action::FragmentLoaded { generation, html } => self.fragment_loaded(generation, html),
            Action::RevealDue { generation } => {
                if self.is_mounted(generation) {
                    vec![Effect::RevealCards]
                } else {
                    Vec::new()
                }
            }
            Action::FilterSelected { filter, control } => self.select_filter(filter, control),
            Action::OpenLightbox(id) => match gallery::find_entry(id) {
                Some(entry) => {
                    // Replaces whatever is showing; the overlay never stacks.
                    self.lightbox = Some(*entry);
                    vec![Effect::LockPageScroll(true)]
                }
                None => {
                    debug!("No gallery entry with id {}", id);
                    Vec::new()
                }
            },
            Action::CloseLightbox => match self.lightbox.take() {
                Some(_) => vec![Effect::LockPageScroll(false)],
                None => Vec::new(),
            },
            Action::ToggleMobileNav => {
                self.mobile_nav_open = !self.mobile_nav_open;
                Vec::new()
            }
            Action::CloseMobileNav => {
                self.mobile_nav_open = false;
                Vec::new()
            }
            Action::BookingSubmitted { name } => match booking::confirm(name.as_deref(), random) {
                Ok(confirmation) => vec![Effect::Alert(confirmation), Effect::ResetBookingForm],
                Err(e) => vec![Effect::Alert(e.to_string())],
            },
            Action::ContactLinkActivated => {
                vec![Effect::RewriteContactLink(booking::contact_link(random))]
            }
            Action::CtaActivated => {
                let burst = plan_confetti(self.next_particle_id, random);
                self.next_particle_id += burst.len() as u64;
                burst.into_iter().map(Effect::LaunchParticle).collect()
            }
            Action::ParticleLaunched(particle) => {
                let id = particle.id;
                self.particles.push(particle);
                vec![Effect::ExpireParticle {
                    id,
                    after_ms: config::CONFETTI_LIFETIME_MS,
                }]
            }
            Action::ParticleExpired(id) => {
                // Timers are never cancelled, so the particle may already be gone.
                self.particles.retain(|particle| particle.id != id);
                Vec::new()
            }
        };

        if let Ok(snapshot) = serde_json::to_string(self) {
            debug!("State: {}", snapshot);
        }
        effects
    }

    fn navigate(&mut self, page: PageId, origin: NavOrigin) -> Vec<Effect> {
        self.generation += 1;
        self.current_page = page.clone();
        info!("Navigating to {} (generation {}, {:?})", page, self.generation, origin);

        let mut effects = Vec::new();
        if origin == NavOrigin::NavControl {
            effects.push(Effect::PushHistory(page.clone()));
            self.mobile_nav_open = false;
        }
        effects.push(Effect::FetchFragment {
            page,
            generation: self.generation,
        });
        effects
    }

    fn fragment_loaded(&mut self, generation: u64, html: String) -> Vec<Effect> {
        if generation != self.generation {
            debug!(
                "Dropping fragment from generation {} (current {})",
                generation, self.generation
            );
            return Vec::new();
        }

        self.mounted = Some(MountedFragment {
            page: self.current_page.clone(),
            generation,
        });

        let mut effects = vec![Effect::MountFragment(html)];
        if self.current_page.is_gallery() {
            self.active_filter = gallery::ALL.to_string();
            effects.push(Effect::MountGallery);
        }
        effects.push(Effect::ScrollToTop);
        effects.push(Effect::ScheduleReveal {
            generation,
            delay_ms: config::REVEAL_DELAY_MS,
        });
        effects
    }

    /// The grid is already mounted in its container; only the filter
    /// changes and the next render updates the entries in place.
    fn select_filter(&mut self, filter: String, control: usize) -> Vec<Effect> {
        self.active_filter = filter;
        let mut effects = vec![Effect::MarkActiveFilter(control)];
        if let Some(mounted) = &self.mounted {
            effects.push(Effect::ScheduleReveal {
                generation: mounted.generation,
                delay_ms: 0,
            });
        }
        effects
    }

    fn is_mounted(&self, generation: u64) -> bool {
        self.mounted
            .as_ref()
            .map_or(false, |mounted| mounted.generation == generation)
    }

    /// Entries the gallery grid should currently show.
    pub fn visible_entries(&self) -> Vec<&'static GalleryEntry> {
        gallery::filter_entries(gallery::GALLERY, &self.active_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::FALLBACK_FRAGMENT;
    use crate::random::testing::{Scripted, Seeded};
    use pretty_assertions::assert_eq;

    fn go(state: &mut AppState, page: &str, origin: NavOrigin) -> u64 {
        let effects = state.apply(
            Action::Navigate {
                page: PageId::new(page),
                origin,
            },
            &mut Seeded::new(0),
        );
        match effects.last() {
            Some(Effect::FetchFragment { generation, .. }) => *generation,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    fn load(state: &mut AppState, generation: u64, html: &str) -> Vec<Effect> {
        state.apply(
            Action::FragmentLoaded {
                generation,
                html: html.to_string(),
            },
            &mut Seeded::new(0),
        )
    }

    #[test]
    fn nav_control_pushes_history_and_closes_menu() {
        let mut state = AppState::default();
        state.mobile_nav_open = true;
        let effects = state.apply(
            Action::Navigate {
                page: PageId::new("about"),
                origin: NavOrigin::NavControl,
            },
            &mut Seeded::new(0),
        );
        assert_eq!(
            effects,
            vec![
                Effect::PushHistory(PageId::new("about")),
                Effect::FetchFragment {
                    page: PageId::new("about"),
                    generation: 1
                },
            ]
        );
        assert_eq!(state.current_page.as_str(), "about");
        assert!(!state.mobile_nav_open);
    }

    #[test]
    fn history_navigation_does_not_push() {
        let mut state = AppState::default();
        let effects = state.apply(
            Action::Navigate {
                page: PageId::from_hash(""),
                origin: NavOrigin::History,
            },
            &mut Seeded::new(0),
        );
        assert_eq!(
            effects,
            vec![Effect::FetchFragment {
                page: PageId::home(),
                generation: 1
            }]
        );
    }

    #[test]
    fn loaded_fragment_is_mounted_then_scrolled_and_revealed() {
        let mut state = AppState::default();
        let generation = go(&mut state, "services", NavOrigin::Initial);
        let effects = load(&mut state, generation, "<p>services</p>");
        assert_eq!(
            effects,
            vec![
                Effect::MountFragment("<p>services</p>".into()),
                Effect::ScrollToTop,
                Effect::ScheduleReveal {
                    generation,
                    delay_ms: 100
                },
            ]
        );
        assert_eq!(
            state.mounted,
            Some(MountedFragment {
                page: PageId::new("services"),
                generation
            })
        );
    }

    #[test]
    fn gallery_page_renders_gallery_with_all_filter() {
        let mut state = AppState::default();
        state.active_filter = "math".into();
        let generation = go(&mut state, "gallery", NavOrigin::NavControl);
        let effects = load(&mut state, generation, "<div id=\"photoGallery\"></div>");
        assert_eq!(effects[1], Effect::MountGallery);
        assert_eq!(state.active_filter, "all");
        assert_eq!(state.visible_entries().len(), 6);
    }

    #[test]
    fn unknown_page_mounts_fallback_without_error() {
        let mut state = AppState::default();
        let generation = go(&mut state, "does-not-exist", NavOrigin::NavControl);
        let effects = load(&mut state, generation, FALLBACK_FRAGMENT);
        assert_eq!(effects[0], Effect::MountFragment(FALLBACK_FRAGMENT.into()));
        assert_eq!(state.current_page.as_str(), "does-not-exist");
    }

    #[test]
    fn slow_earlier_load_cannot_overwrite_newer_page() {
        let mut state = AppState::default();
        let first = go(&mut state, "about", NavOrigin::NavControl);
        let second = go(&mut state, "contact", NavOrigin::NavControl);

        assert!(!load(&mut state, second, "<p>contact</p>").is_empty());
        assert!(load(&mut state, first, "<p>about</p>").is_empty());
        assert_eq!(state.mounted.as_ref().map(|m| m.page.as_str()), Some("contact"));
    }

    #[test]
    fn stale_reveal_timer_is_ignored() {
        let mut state = AppState::default();
        let first = go(&mut state, "home", NavOrigin::Initial);
        load(&mut state, first, "<p>home</p>");
        let second = go(&mut state, "services", NavOrigin::NavControl);
        load(&mut state, second, "<p>services</p>");

        let mut random = Seeded::new(0);
        assert!(state.apply(Action::RevealDue { generation: first }, &mut random).is_empty());
        assert_eq!(
            state.apply(Action::RevealDue { generation: second }, &mut random),
            vec![Effect::RevealCards]
        );
    }

    #[test]
    fn filter_selection_marks_control_and_rerenders() {
        let mut state = AppState::default();
        let generation = go(&mut state, "gallery", NavOrigin::NavControl);
        load(&mut state, generation, "");
        let effects = state.apply(
            Action::FilterSelected { filter: "math".into(), control: 1 },
            &mut Seeded::new(0),
        );
        assert_eq!(
            effects,
            vec![
                Effect::MarkActiveFilter(1),
                Effect::ScheduleReveal {
                    generation,
                    delay_ms: 0
                },
            ]
        );
        let ids: Vec<u32> = state.visible_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 5]);

        state.apply(
            Action::FilterSelected { filter: "unknown-category".into(), control: 4 },
            &mut Seeded::new(0),
        );
        assert!(state.visible_entries().is_empty());
    }

    #[test]
    fn filter_changes_keep_the_mounted_grid() {
        let mut state = AppState::default();
        let generation = go(&mut state, "gallery", NavOrigin::NavControl);
        load(&mut state, generation, "<div id=\"photoGallery\"></div>");

        for (control, filter) in ["math", "all", "science", "all"].into_iter().enumerate() {
            let effects = state.apply(
                Action::FilterSelected { filter: filter.into(), control },
                &mut Seeded::new(0),
            );
            assert!(!effects.contains(&Effect::MountGallery));
            assert!(!effects.iter().any(|e| matches!(e, Effect::MountFragment(_))));
            assert!(state.visible_entries().iter().all(|e| filter == "all" || e.category == filter));
        }
        assert_eq!(state.visible_entries().len(), 6);
    }

    #[test]
    fn opening_entry_three_shows_science_experiments_and_escape_restores_scroll() {
        let mut state = AppState::default();
        let mut random = Seeded::new(0);
        let generation = go(&mut state, "gallery", NavOrigin::NavControl);
        load(&mut state, generation, "");

        assert_eq!(
            state.apply(Action::OpenLightbox(3), &mut random),
            vec![Effect::LockPageScroll(true)]
        );
        let shown = state.lightbox.expect("lightbox open");
        assert_eq!(shown.title, "Science Experiments");
        assert_eq!(
            shown.description,
            "Hands-on learning with safe and exciting science activities!"
        );

        let escape = crate::events::key_down("Escape").expect("escape closes");
        assert_eq!(
            state.apply(escape, &mut random),
            vec![Effect::LockPageScroll(false)]
        );
        assert_eq!(state.lightbox, None);
    }

    #[test]
    fn second_open_replaces_displayed_entry() {
        let mut state = AppState::default();
        let mut random = Seeded::new(0);
        state.apply(Action::OpenLightbox(1), &mut random);
        state.apply(Action::OpenLightbox(2), &mut random);
        assert_eq!(state.lightbox.map(|entry| entry.id), Some(2));
    }

    #[test]
    fn closing_a_closed_lightbox_does_nothing() {
        let mut state = AppState::default();
        assert!(state.apply(Action::CloseLightbox, &mut Seeded::new(0)).is_empty());
    }

    #[test]
    fn unknown_entry_does_not_open_lightbox() {
        let mut state = AppState::default();
        assert!(state.apply(Action::OpenLightbox(99), &mut Seeded::new(0)).is_empty());
        assert_eq!(state.lightbox, None);
    }

    #[test]
    fn empty_booking_name_only_prompts() {
        let mut state = AppState::default();
        let effects = state.apply(
            Action::BookingSubmitted { name: Some(String::new()) },
            &mut Seeded::new(0),
        );
        assert_eq!(effects, vec![Effect::Alert("Please enter the student's name!".into())]);
    }

    #[test]
    fn valid_booking_confirms_and_resets_form() {
        let mut state = AppState::default();
        let effects = state.apply(
            Action::BookingSubmitted { name: Some("Thandi".into()) },
            &mut Scripted::new(&[0.0]),
        );
        match effects.as_slice() {
            [Effect::Alert(message), Effect::ResetBookingForm] => {
                assert!(message.starts_with("Yay! Thank you, Thandi!"));
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn contact_link_activation_rewrites_href() {
        let mut state = AppState::default();
        let effects = state.apply(Action::ContactLinkActivated, &mut Scripted::new(&[0.9]));
        match effects.as_slice() {
            [Effect::RewriteContactLink(url)] => {
                assert!(url.starts_with("https://wa.me/27659019828?text=Hi%21%20Your%20tutoring"));
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn particles_live_from_launch_until_expiry() {
        let mut state = AppState::default();
        let mut random = Seeded::new(5);

        let launches = state.apply(Action::CtaActivated, &mut random);
        assert_eq!(launches.len(), 20);
        let Effect::LaunchParticle(first) = launches[0].clone() else {
            panic!("expected a launch");
        };

        let expiry = state.apply(Action::ParticleLaunched(first.clone()), &mut random);
        assert_eq!(
            expiry,
            vec![Effect::ExpireParticle {
                id: first.id,
                after_ms: 2000
            }]
        );
        assert_eq!(state.particles.len(), 1);

        state.apply(Action::ParticleExpired(first.id), &mut random);
        assert!(state.particles.is_empty());
        // A second expiry for the same id is a harmless no-op.
        assert!(state.apply(Action::ParticleExpired(first.id), &mut random).is_empty());
    }

    #[test]
    fn consecutive_bursts_get_distinct_particle_ids() {
        let mut state = AppState::default();
        let mut random = Seeded::new(8);
        let ids = |effects: Vec<Effect>| -> Vec<u64> {
            effects
                .into_iter()
                .filter_map(|effect| match effect {
                    Effect::LaunchParticle(particle) => Some(particle.id),
                    _ => None,
                })
                .collect()
        };
        let first = ids(state.apply(Action::CtaActivated, &mut random));
        let second = ids(state.apply(Action::CtaActivated, &mut random));
        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn menu_button_toggles_panel() {
        let mut state = AppState::default();
        let mut random = Seeded::new(0);
        state.apply(Action::ToggleMobileNav, &mut random);
        assert!(state.mobile_nav_open);
        state.apply(Action::CloseMobileNav, &mut random);
        assert!(!state.mobile_nav_open);
    }

    #[test]
    fn state_serializes_for_diagnostics() {
        let state = AppState::default();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["current_page"], "home");
        assert_eq!(json["active_filter"], "all");
        assert_eq!(json["lightbox"], serde_json::Value::Null);
    }
}
