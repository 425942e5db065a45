use yew::prelude::*;

use crate::gallery::GalleryEntry;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct GalleryGridProps {
    pub entries: Vec<GalleryEntry>,
    pub dispatch: Callback<Action>,
}

/// Grid items for the `#photoGallery` container of the gallery page.
#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &GalleryGridProps) -> Html {
    html! {
        <>
        { for props.entries.iter().map(|entry| {
            let id = entry.id;
            let onclick = props.dispatch.reform(move |_: MouseEvent| Action::OpenLightbox(id));
            html! {
                <div key={entry.id} class="gallery-item" data-category={entry.category}>
                    <img
                        src={entry.image}
                        alt={entry.title}
                        class="gallery-img"
                        data-id={entry.id.to_string()}
                        {onclick}
                    />
                    <div class="gallery-caption">
                        <h3>{entry.title}</h3>
                        <p>{entry.description}</p>
                    </div>
                </div>
            }
        }) }
        </>
    }
}
