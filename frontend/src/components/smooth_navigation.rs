use log::warn;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NavLink;
use crate::scroll_spy::use_active_section;
use crate::smooth_scroll::{use_smooth_scroll, NAV_OFFSET};

#[derive(Properties, PartialEq)]
pub struct SmoothNavigationProps {
    pub links: &'static [NavLink],
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub active_class: Classes,
    #[prop_or(NAV_OFFSET)]
    pub offset: u32,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
}

/// Updates the address bar without triggering the browser's own jump.
fn push_hash(href: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
        warn!("Could not push {} to history: {:?}", href, err);
    }
}

#[function_component(SmoothNavigation)]
pub fn smooth_navigation(props: &SmoothNavigationProps) -> Html {
    let section_ids = props.links.iter().map(NavLink::href).collect::<Vec<_>>();
    let active_section = use_active_section(section_ids, Some(props.offset));
    let scroll_to_section = use_smooth_scroll(props.offset);

    html! {
        <ul class={props.class.clone()}>
            { for props.links.iter().map(|link| {
                let href = link.href();
                let is_active = active_section.as_deref() == Some(href.as_str());
                let onclick = {
                    let scroll_to_section = scroll_to_section.clone();
                    let on_navigate = props.on_navigate.clone();
                    let href = href.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section.emit(href.clone());
                        push_hash(&href);
                        if let Some(on_navigate) = &on_navigate {
                            on_navigate.emit(());
                        }
                    })
                };

                html! {
                    <li key={link.section}>
                        <a
                            {href}
                            {onclick}
                            class={if is_active { props.active_class.clone() } else { Classes::new() }}
                            aria-current={is_active.then(|| AttrValue::from("page"))}
                        >
                            {link.label}
                        </a>
                    </li>
                }
            }) }
        </ul>
    }
}
