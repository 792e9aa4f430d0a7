use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MediaQueryListEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::smooth_navigation::SmoothNavigation;
use crate::content::NavLink;
use crate::smooth_scroll::NAV_OFFSET;

/// Viewports at least this wide show the inline links, so the overlay closes.
pub const DESKTOP_QUERY: &str = "(min-width: 901px)";

const OVERLAY_ID: &str = "hero-nav-overlay";

/// Locks page scrolling behind the open overlay and hands back a guard that
/// restores the previous `overflow` value.
fn lock_body_scroll() -> impl FnOnce() {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    let previous = body
        .as_ref()
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .unwrap_or_default();
    if let Some(body) = &body {
        let _ = body.style().set_property("overflow", "hidden");
    }

    move || {
        if let Some(body) = body {
            let _ = body.style().set_property("overflow", &previous);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroNavigationMenuProps {
    pub links: &'static [NavLink],
    #[prop_or(NAV_OFFSET)]
    pub offset: u32,
    pub cta_href: AttrValue,
    pub cta_label: AttrValue,
}

#[function_component(HeroNavigationMenu)]
pub fn hero_navigation_menu(props: &HeroNavigationMenuProps) -> Html {
    let is_open = use_state_eq(|| false);

    let close_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };

    {
        let is_open = is_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if *is_open && e.key() == "Escape" {
                is_open.set(false);
            }
        });
    }

    {
        let close_menu = close_menu.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;
                if *open {
                    let unlock = lock_body_scroll();
                    let media_query = web_sys::window()
                        .and_then(|window| window.match_media(DESKTOP_QUERY).ok().flatten());
                    if media_query.is_none() {
                        warn!("matchMedia unavailable, overlay won't close on resize");
                    }

                    let on_change = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                        if e.matches() {
                            close_menu.emit(());
                        }
                    }) as Box<dyn FnMut(MediaQueryListEvent)>);
                    if let Some(query) = &media_query {
                        let _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
                    }

                    cleanup = Some(Box::new(move || {
                        unlock();
                        if let Some(query) = media_query {
                            let _ = query.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
                        }
                    }));
                }

                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            *is_open,
        );
    }

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let close_on_click = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    html! {
        <nav class="hero-nav" aria-label="Primary">
            <button
                type="button"
                class="hero-nav-toggle"
                aria-expanded={(*is_open).to_string()}
                aria-controls={OVERLAY_ID}
                data-open={(*is_open).to_string()}
                onclick={toggle_menu}
            >
                <span class="hero-nav-toggle-icon" aria-hidden="true">
                    <span></span>
                </span>
                <span class="hero-nav-toggle-label">{"Menu"}</span>
            </button>

            <div class="hero-nav-inline">
                <SmoothNavigation
                    links={props.links}
                    offset={props.offset}
                    class="hero-nav-list"
                    active_class="hero-nav-active-link"
                />
                <a class="hero-nav-cta" href={props.cta_href.clone()}>{props.cta_label.clone()}</a>
            </div>

            <button
                type="button"
                class={if *is_open { "hero-nav-backdrop visible" } else { "hero-nav-backdrop" }}
                aria-hidden="true"
                tabindex="-1"
                onclick={close_on_click.clone()}
            />

            <div
                id={OVERLAY_ID}
                class={classes!("hero-nav-overlay", (*is_open).then(|| "open"))}
                aria-hidden={(!*is_open).to_string()}
            >
                <SmoothNavigation
                    links={props.links}
                    offset={props.offset}
                    class="hero-nav-overlay-list"
                    active_class="hero-nav-overlay-active"
                    on_navigate={close_menu}
                />
                <a class="hero-nav-overlay-cta" href={props.cta_href.clone()} onclick={close_on_click}>
                    {props.cta_label.clone()}
                </a>
            </div>
        </nav>
    }
}
