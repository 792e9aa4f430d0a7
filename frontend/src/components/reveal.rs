use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const FADE_EASING: &str = "cubic-bezier(0.25, 0.4, 0.25, 1)";
const REVEAL_EASING: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOptions {
    /// Stop observing after the first time the element shows up.
    pub once: bool,
    /// Fraction of the element that has to be visible.
    pub amount: f64,
}

/// Whether the referenced element is currently inside the viewport.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, InViewOptions)| {
                let once = options.once;
                let fallback = in_view.clone();
                let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            in_view.set(true);
                            if once {
                                observer.disconnect();
                            }
                        } else if !once {
                            in_view.set(false);
                        }
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(options.amount));

                let element = node.cast::<Element>();
                let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                    .map_err(|err| warn!("Could not create visibility observer: {:?}", err))
                    .ok();

                let observer = match (element, observer) {
                    (Some(element), Some(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (element, observer) => {
                        if shown_without_observer(element.is_some(), observer.is_some()) {
                            fallback.set(true);
                        }
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (node, options),
        );
    }

    *in_view
}

/// Content that can't be observed is shown straight away instead of
/// staying hidden behind its entry animation.
pub fn shown_without_observer(mounted: bool, observer_created: bool) -> bool {
    !(mounted && observer_created)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Transform the content starts from before it slides into place.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            Direction::Up => "translate(0px, 40px)",
            Direction::Down => "translate(0px, -40px)",
            Direction::Left => "translate(40px, 0px)",
            Direction::Right => "translate(-40px, 0px)",
            Direction::None => "none",
        }
    }
}

pub fn fade_style(direction: Direction, visible: bool, duration: f64, delay: f64) -> String {
    let (opacity, transform) = if visible {
        (1, "translate(0px, 0px)")
    } else {
        (0, direction.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}s {} {}s, transform {}s {} {}s;",
        opacity, transform, duration, FADE_EASING, delay, duration, FADE_EASING, delay
    )
}

pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Empty text has nothing to type, so no timer is started for it.
pub fn needs_typing(visible: bool, total_chars: usize) -> bool {
    visible && total_chars > 0
}

/// First `count` characters of `text`, never splitting a character.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInWhenVisibleProps {
    pub children: Children,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FadeInWhenVisible)]
pub fn fade_in_when_visible(props: &FadeInWhenVisibleProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), InViewOptions { once: true, amount: 0.2 });

    html! {
        <div ref={node} class={props.class.clone()} style={fade_style(props.direction, visible, props.duration, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerChildrenProps {
    pub children: Children,
    #[prop_or(0.1)]
    pub stagger_delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StaggerChildren)]
pub fn stagger_children(props: &StaggerChildrenProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), InViewOptions { once: true, amount: 0.1 });
    let transform = if visible { "translateY(0px)" } else { "translateY(20px)" };

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(index, child)| {
                let style = format!(
                    "opacity: {}; transform: {}; transition: opacity 0.5s {easing} {delay}s, transform 0.5s {easing} {delay}s;",
                    if visible { 1 } else { 0 },
                    transform,
                    easing = FADE_EASING,
                    delay = stagger_delay(index, props.stagger_delay),
                );
                html! { <div key={index} style={style}>{ child }</div> }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), InViewOptions { once: true, amount: 0.3 });
    let style = format!(
        "transform: translateY({}); transition: transform {}s {} {}s;",
        if visible { "0%" } else { "100%" },
        props.duration,
        REVEAL_EASING,
        props.delay
    );

    html! {
        <div ref={node} class={props.class.clone()} style="position: relative; overflow: hidden;">
            <div style={style}>{ props.text.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
    /// Milliseconds to wait once visible before typing starts.
    #[prop_or(0)]
    pub delay: u32,
    /// Milliseconds per character.
    #[prop_or(50)]
    pub speed: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), InViewOptions { once: true, amount: 0.3 });
    let typed = use_state_eq(|| 0usize);

    {
        let typed = typed.clone();
        use_effect_with_deps(
            move |(visible, text, delay, speed): &(bool, AttrValue, u32, u32)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let mut timeout = None;
                let total = text.chars().count();
                // New text types from the start.
                typed.set(0);

                if needs_typing(*visible, total) {
                    let speed = *speed;
                    let handle = interval_handle.clone();
                    timeout = Some(Timeout::new(*delay, move || {
                        let count = Rc::new(Cell::new(0usize));
                        let stop = handle.clone();
                        let interval = Interval::new(speed, move || {
                            if count.get() >= total {
                                return;
                            }
                            let next = count.get() + 1;
                            count.set(next);
                            typed.set(next);
                            if next >= total {
                                // The interval can't be dropped from inside its own callback.
                                let stop = stop.clone();
                                Timeout::new(0, move || {
                                    stop.borrow_mut().take();
                                })
                                .forget();
                            }
                        });
                        *handle.borrow_mut() = Some(interval);
                    }));
                }

                move || {
                    drop(timeout);
                    interval_handle.borrow_mut().take();
                }
            },
            (visible, props.text.clone(), props.delay, props.speed),
        );
    }

    let shown = typed_prefix(&props.text, *typed);
    let done = shown.len() == props.text.len();

    html! {
        <p ref={node} class={props.class.clone()}>
            { shown.to_string() }
            <span style={if done { "opacity: 0;" } else { "opacity: 1;" }}>{"|"}</span>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_is_offset_against_travel() {
        let style = fade_style(Direction::Up, false, 0.6, 0.0);
        assert!(style.starts_with("opacity: 0; transform: translate(0px, 40px);"));
        assert_eq!(Direction::Left.hidden_transform(), "translate(40px, 0px)");
        assert_eq!(Direction::None.hidden_transform(), "none");
    }

    #[test]
    fn dropping_in_starts_above() {
        let style = fade_style(Direction::Down, false, 0.8, 0.1);
        assert!(style.starts_with("opacity: 0; transform: translate(0px, -40px);"));
        let faded = fade_style(Direction::None, false, 0.8, 0.3);
        assert!(faded.starts_with("opacity: 0; transform: none;"));
    }

    #[test]
    fn visible_state_rests_at_origin() {
        let style = fade_style(Direction::Right, true, 0.8, 0.3);
        assert!(style.starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert!(style.contains("opacity 0.8s cubic-bezier(0.25, 0.4, 0.25, 1) 0.3s"));
    }

    #[test]
    fn children_are_delayed_in_order() {
        assert_eq!(stagger_delay(0, 0.1), 0.0);
        assert_eq!(stagger_delay(4, 0.25), 1.0);
    }

    #[test]
    fn typed_prefix_respects_char_boundaries() {
        assert_eq!(typed_prefix("Holistic", 0), "");
        assert_eq!(typed_prefix("Holistic", 4), "Holi");
        assert_eq!(typed_prefix("Holistic", 40), "Holistic");
        assert_eq!(typed_prefix("NJ • NY", 4), "NJ •");
    }

    #[test]
    fn unobservable_content_is_shown_immediately() {
        assert!(shown_without_observer(true, false));
        assert!(shown_without_observer(false, true));
        assert!(shown_without_observer(false, false));
        assert!(!shown_without_observer(true, true));
    }

    #[test]
    fn empty_text_starts_no_timer() {
        assert!(!needs_typing(true, 0));
        assert!(!needs_typing(false, 12));
        assert!(needs_typing(true, 12));
        assert_eq!(typed_prefix("", 0), "");
    }
}
