use yew::prelude::*;

use crate::events;
use crate::route::{self, PageId, NAV_LINKS};
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: PageId,
    pub menu_open: bool,
    pub dispatch: Callback<Action>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, menu_open, dispatch } = props;
    let active = route::active_links(current);

    let toggle_menu = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(Action::ToggleMobileNav);
        })
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <a href="#home" class="logo">{"Teacher Sindi"}</a>

                <button id="mobileMenuBtn" class="mobile-menu-btn" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="mainNav" class={classes!("main-nav", menu_open.then(|| "active"))}>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| {
                            let is_active = active.iter().any(|a| a.page == link.page);
                            let onclick = {
                                let dispatch = dispatch.clone();
                                let page = link.page;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    dispatch.emit(events::nav_control(page));
                                })
                            };
                            html! {
                                <li>
                                    <a
                                        href={format!("#{}", link.page)}
                                        class={classes!("nav-link", is_active.then(|| "active"))}
                                        data-page={link.page}
                                        {onclick}
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
