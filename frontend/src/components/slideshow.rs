use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const DEFAULT_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideIndex {
    pub current: usize,
}

pub enum SlideAction {
    /// Move to the next slide out of `len`, wrapping at the end.
    Advance(usize),
}

impl Reducible for SlideIndex {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SlideAction::Advance(len) => Rc::new(Self {
                current: next_index(self.current, len),
            }),
        }
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Interval passed to the timer; zero leaves it stopped.
pub fn tick_interval(len: usize, interval: u32) -> u32 {
    if len > 1 {
        interval
    } else {
        0
    }
}

fn layer_style(src: &str, visible: bool) -> String {
    format!(
        "position: absolute; inset: 0; background-image: url('{}'); background-size: cover; \
         background-position: center 30%; opacity: {}; transition: opacity 1.5s ease-in-out;",
        src,
        if visible { 1 } else { 0 }
    )
}

#[derive(Properties, PartialEq)]
pub struct BackgroundSlideshowProps {
    pub images: Vec<String>,
    #[prop_or(DEFAULT_INTERVAL_MS)]
    pub interval: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BackgroundSlideshow)]
pub fn background_slideshow(props: &BackgroundSlideshowProps) -> Html {
    let index = use_reducer(SlideIndex::default);
    let len = props.images.len();

    {
        let index = index.clone();
        use_interval(
            move || index.dispatch(SlideAction::Advance(len)),
            tick_interval(len, props.interval),
        );
    }

    if len == 0 {
        return html! {};
    }

    html! {
        <div class={props.class.clone()} style="position: absolute; inset: 0; z-index: 0;">
            { for props.images.iter().enumerate().map(|(i, src)| html! {
                <div key={src.clone()} style={layer_style(src, index.current % len == i)}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_wraps_around() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn empty_slideshow_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(next_index(4, 0), 0);
    }

    #[test]
    fn reducer_advances() {
        let state = Rc::new(SlideIndex { current: 2 });
        let state = state.reduce(SlideAction::Advance(3));
        assert_eq!(state.current, 0);
        let state = state.reduce(SlideAction::Advance(3));
        assert_eq!(state.current, 1);
    }

    #[test]
    fn single_image_never_ticks() {
        assert_eq!(tick_interval(0, 6000), 0);
        assert_eq!(tick_interval(1, 6000), 0);
        assert_eq!(tick_interval(3, 6000), 6000);
    }

    #[test]
    fn only_current_layer_is_opaque() {
        assert!(layer_style("/HERO2.png", true).contains("opacity: 1;"));
        assert!(layer_style("/HERO2.png", false).contains("opacity: 0;"));
        assert!(layer_style("/HERO2.png", false).contains("url('/HERO2.png')"));
    }
}
