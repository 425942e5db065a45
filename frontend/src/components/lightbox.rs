use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::events;
use crate::gallery::GalleryEntry;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub entry: Option<GalleryEntry>,
    pub dispatch: Callback<Action>,
}

/// The shared full-view overlay. Hidden whenever no entry is set.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let overlay_ref = use_node_ref();

    let on_overlay_click = {
        let dispatch = props.dispatch.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if let Some(action) = events::overlay_click(clicked == overlay_ref.get()) {
                dispatch.emit(action);
            }
        })
    };
    let on_close = props.dispatch.reform(|_: MouseEvent| Action::CloseLightbox);

    let display = if props.entry.is_some() { "display: flex;" } else { "display: none;" };

    html! {
        <div id="lightboxModal" class="lightbox-modal" style={display} ref={overlay_ref} onclick={on_overlay_click}>
            <div class="lightbox-content">
                <button id="lightboxClose" class="lightbox-close" onclick={on_close}>{"×"}</button>
                if let Some(entry) = props.entry {
                    <img id="lightboxImage" class="lightbox-image" src={entry.image} alt={entry.title} />
                    <div id="lightboxCaption" class="lightbox-caption">
                        <h3>{entry.title}</h3>
                        <p>{entry.description}</p>
                    </div>
                }
            </div>
        </div>
    }
}
