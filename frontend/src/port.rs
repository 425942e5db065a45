use crate::animation::Particle;
use crate::route::PageId;
use crate::state::Effect;

/// Everything the state machine asks of the page it runs in.
pub trait UiPort {
    fn fetch_fragment(&mut self, page: PageId, generation: u64);
    fn push_history(&mut self, page: &PageId);
    fn mount_fragment(&mut self, html: &str);
    /// Takes over the gallery container of a freshly mounted fragment.
    fn mount_gallery(&mut self);
    fn scroll_to_top(&mut self);
    fn schedule_reveal(&mut self, generation: u64, delay_ms: u32);
    fn reveal_cards(&mut self);
    fn mark_active_filter(&mut self, control: usize);
    fn lock_page_scroll(&mut self, locked: bool);
    fn alert(&mut self, message: &str);
    fn reset_booking_form(&mut self);
    fn rewrite_contact_link(&mut self, href: &str);
    fn launch_particle(&mut self, particle: Particle);
    fn expire_particle(&mut self, id: u64, after_ms: u32);
}

/// Runs `effects` against `port` in order.
pub fn run(port: &mut impl UiPort, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::FetchFragment { page, generation } => port.fetch_fragment(page, generation),
            Effect::PushHistory(page) => port.push_history(&page),
            Effect::MountFragment(html) => port.mount_fragment(&html),
            Effect::MountGallery => port.mount_gallery(),
            Effect::ScrollToTop => port.scroll_to_top(),
            Effect::ScheduleReveal { generation, delay_ms } => {
                port.schedule_reveal(generation, delay_ms)
            }
            Effect::RevealCards => port.reveal_cards(),
            Effect::MarkActiveFilter(control) => port.mark_active_filter(control),
            Effect::LockPageScroll(locked) => port.lock_page_scroll(locked),
            Effect::Alert(message) => port.alert(&message),
            Effect::ResetBookingForm => port.reset_booking_form(),
            Effect::RewriteContactLink(href) => port.rewrite_contact_link(&href),
            Effect::LaunchParticle(particle) => port.launch_particle(particle),
            Effect::ExpireParticle { id, after_ms } => port.expire_particle(id, after_ms),
        }
    }
}
