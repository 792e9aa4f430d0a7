use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Pixels hidden under the fixed header when no offset is given.
pub const DEFAULT_OFFSET: u32 = 150;

const THRESHOLDS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Last known visibility of every tracked section, in caller order.
///
/// Only sections that resolved to an element are tracked, so an id that never
/// resolved can never become active.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    ratios: Vec<(String, f64)>,
    published: Option<String>,
}

impl SectionTracker {
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ratios: section_ids.into_iter().map(|id| (id.into(), 0.0)).collect(),
            published: None,
        }
    }

    /// Stores one visibility notification and recomputes the active section.
    ///
    /// Returns `Some(active)` only when the active section changed since the
    /// last published value.
    pub fn record(&mut self, section_id: &str, is_intersecting: bool, ratio: f64) -> Option<Option<String>> {
        let slot = self.ratios.iter_mut().find(|(id, _)| id == section_id)?;
        slot.1 = if is_intersecting && !ratio.is_nan() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let active = self.active().map(str::to_owned);
        if active == self.published {
            return None;
        }
        self.published = active.clone();
        Some(active)
    }

    /// Section with the highest positive ratio; ties go to the earliest one.
    pub fn active(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (id, ratio) in &self.ratios {
            if *ratio <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if *ratio <= top => {}
                _ => best = Some((id.as_str(), *ratio)),
            }
        }
        best.map(|(id, _)| id)
    }

    #[cfg(test)]
    pub fn ratio(&self, section_id: &str) -> Option<f64> {
        self.ratios
            .iter()
            .find(|(id, _)| id == section_id)
            .map(|(_, ratio)| *ratio)
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }
}

/// Shrinks the observed viewport by `offset` (or [`DEFAULT_OFFSET`]) at the
/// top and by half its height at the bottom, so a section activates once it
/// nears the header.
pub fn root_margin(offset: Option<u32>) -> String {
    format!("-{}px 0px -50% 0px", offset.unwrap_or(DEFAULT_OFFSET))
}

fn same_element(a: &Element, b: &Element) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

/// Id of the section currently most visible below the header, if any.
#[hook]
pub fn use_active_section(section_ids: Vec<String>, offset: Option<u32>) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(section_ids, offset): &(Vec<String>, Option<u32>)| {
                // A new configuration starts from scratch. Only the tracker side of
                // this reset is covered by tests; the hook itself needs a browser.
                active.set(None);

                let document = web_sys::window().and_then(|window| window.document());
                let mut targets: Vec<(Element, String)> = Vec::new();
                if let Some(document) = document {
                    for id in section_ids {
                        match document.query_selector(id).ok().flatten() {
                            Some(element) => targets.push((element, id.clone())),
                            None => debug!("Section {} not found, skipping", id),
                        }
                    }
                }

                let mut tracker = SectionTracker::new(targets.iter().map(|(_, id)| id.clone()));
                debug!("Tracking {} sections with offset {:?}", tracker.len(), offset);

                let lookup = targets.clone();
                let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let Some((_, id)) = lookup.iter().find(|(element, _)| same_element(element, &target)) else {
                            continue;
                        };
                        if let Some(next) = tracker.record(id, entry.is_intersecting(), entry.intersection_ratio()) {
                            debug!("Active section is now {:?}", next);
                            active.set(next);
                        }
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_root_margin(&root_margin(*offset));
                options.set_threshold(&THRESHOLDS.iter().copied().map(JsValue::from_f64).collect::<Array>());

                let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                    Ok(observer) => {
                        for (element, _) in &targets {
                            observer.observe(element);
                        }
                        Some(observer)
                    }
                    Err(err) => {
                        warn!("Could not create section observer: {:?}", err);
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
            (section_ids, offset),
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SectionTracker {
        SectionTracker::new(["#a", "#b", "#c"])
    }

    #[test]
    fn single_visible_section_is_active() {
        let mut tracker = tracker();
        assert_eq!(tracker.record("#c", true, 0.3), Some(Some("#c".to_string())));
        assert_eq!(tracker.active(), Some("#c"));
    }

    #[test]
    fn highest_ratio_wins_and_switches() {
        let mut tracker = tracker();
        tracker.record("#a", false, 0.0);
        tracker.record("#b", true, 0.4);
        tracker.record("#c", true, 0.1);
        assert_eq!(tracker.active(), Some("#b"));

        assert_eq!(tracker.record("#a", true, 0.6), Some(Some("#a".to_string())));
        assert_eq!(tracker.active(), Some("#a"));
    }

    #[test]
    fn ties_go_to_earliest_in_input_order() {
        let mut tracker = tracker();
        tracker.record("#c", true, 0.5);
        tracker.record("#b", true, 0.5);
        assert_eq!(tracker.active(), Some("#b"));

        tracker.record("#a", true, 0.5);
        assert_eq!(tracker.active(), Some("#a"));
    }

    #[test]
    fn nothing_visible_means_no_active_section() {
        let mut tracker = tracker();
        assert_eq!(tracker.active(), None);

        tracker.record("#b", true, 0.4);
        tracker.record("#c", true, 0.1);
        tracker.record("#b", false, 0.4);
        assert_eq!(tracker.record("#c", false, 0.0), Some(None));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn leaving_the_viewport_zeroes_the_ratio() {
        let mut tracker = tracker();
        tracker.record("#a", true, 0.8);
        tracker.record("#a", false, 0.8);
        assert_eq!(tracker.ratio("#a"), Some(0.0));
    }

    #[test]
    fn unchanged_result_is_not_republished() {
        let mut tracker = tracker();
        assert!(tracker.record("#b", true, 0.4).is_some());
        assert_eq!(tracker.record("#b", true, 0.5), None);
        assert_eq!(tracker.record("#c", true, 0.2), None);
        assert_eq!(tracker.record("#a", false, 0.0), None);
    }

    #[test]
    fn zero_ratio_while_intersecting_is_not_visible() {
        let mut tracker = tracker();
        assert_eq!(tracker.record("#a", true, 0.0), None);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let mut tracker = tracker();
        assert_eq!(tracker.record("#missing", true, 1.0), None);
        assert_eq!(tracker.active(), None);
        assert_eq!(tracker.ratio("#missing"), None);
    }

    #[test]
    fn ratios_are_clamped() {
        let mut tracker = tracker();
        tracker.record("#a", true, 1.7);
        tracker.record("#b", true, f64::NAN);
        assert_eq!(tracker.ratio("#a"), Some(1.0));
        assert_eq!(tracker.ratio("#b"), Some(0.0));
    }

    #[test]
    fn fresh_tracker_starts_at_zero() {
        let mut old = tracker();
        old.record("#a", true, 0.9);

        let fresh = SectionTracker::new(["#a", "#d"]);
        assert_eq!(fresh.ratio("#a"), Some(0.0));
        assert_eq!(fresh.ratio("#d"), Some(0.0));
        assert_eq!(fresh.active(), None);
    }

    #[test]
    fn empty_section_list_never_activates() {
        let mut tracker = SectionTracker::new(Vec::<String>::new());
        assert_eq!(tracker.record("#a", true, 1.0), None);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn root_margin_uses_offset_and_bottom_half() {
        assert_eq!(root_margin(Some(120)), "-120px 0px -50% 0px");
        assert_eq!(root_margin(Some(0)), "-0px 0px -50% 0px");
    }

    #[test]
    fn missing_offset_falls_back_to_default() {
        assert_eq!(root_margin(None), root_margin(Some(DEFAULT_OFFSET)));
        assert_eq!(root_margin(None), "-150px 0px -50% 0px");
    }
}
