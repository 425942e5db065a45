use yew::prelude::*;

use crate::animation::{Particle, FALL_KEYFRAMES};

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub particles: Vec<Particle>,
}

#[function_component(ConfettiLayer)]
pub fn confetti_layer(props: &ConfettiProps) -> Html {
    html! {
        <>
            <style>{FALL_KEYFRAMES}</style>
            { for props.particles.iter().map(|particle| html! {
                <div key={particle.id} class="confetti" style={particle.style()}>
                    {particle.glyph}
                </div>
            }) }
        </>
    }
}
