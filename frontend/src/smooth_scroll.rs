use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Height of the sticky navigation the scroll target must clear.
pub const NAV_OFFSET: u32 = 100;
/// Roughly how long a smooth scroll takes; focus moves after this.
pub const SCROLL_DURATION_MS: u32 = 800;

const FOCUSABLE: &str = r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Document-relative scroll position that puts an element `offset` pixels
/// below the top of the viewport.
pub fn scroll_offset_top(rect_top: f64, page_y: f64, offset: u32) -> f64 {
    rect_top + page_y - f64::from(offset)
}

/// Smoothly scrolls to the element matching `selector`, then moves keyboard
/// focus into it once the scroll has had time to settle. Does nothing when
/// the selector does not resolve.
pub fn scroll_to_section(selector: &str, offset: u32, focus_delay_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|document| document.query_selector(selector).ok().flatten())
    else {
        debug!("Scroll target {} not found", selector);
        return;
    };

    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_offset_top(target.get_bounding_client_rect().top(), page_y, offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    Timeout::new(focus_delay_ms, move || focus_section(&target)).forget();
}

fn focus_section(target: &Element) {
    let focusable = target
        .query_selector(FOCUSABLE)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(element) = focusable {
        let _ = element.focus();
        return;
    }

    // Sections are not focusable on their own; borrow a tabindex until blur.
    let Some(section) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = section.set_attribute("tabindex", "-1");
    let _ = section.focus();

    let cleanup_target = section.clone();
    let on_blur = Closure::once_into_js(move || {
        let _ = cleanup_target.remove_attribute("tabindex");
    });
    let listener_options = AddEventListenerOptions::new();
    listener_options.set_once(true);
    let _ = section.add_event_listener_with_callback_and_add_event_listener_options(
        "blur",
        on_blur.unchecked_ref(),
        &listener_options,
    );
}

/// Callback that scrolls to the section named by the emitted selector.
#[hook]
pub fn use_smooth_scroll(offset: u32) -> Callback<String> {
    use_callback(
        move |selector: String, offset: &u32| scroll_to_section(&selector, *offset, SCROLL_DURATION_MS),
        offset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_clears_the_header() {
        assert_eq!(scroll_offset_top(640.0, 0.0, NAV_OFFSET), 540.0);
        assert_eq!(scroll_offset_top(200.0, 1200.0, 120), 1280.0);
    }

    #[test]
    fn sections_above_the_viewport_scroll_up() {
        assert_eq!(scroll_offset_top(-300.0, 900.0, NAV_OFFSET), 500.0);
    }
}
