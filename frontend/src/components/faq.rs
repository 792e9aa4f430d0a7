use yew::prelude::*;
use web_sys::MouseEvent;
use crate::content::Faq;

/// Clicking the open question closes it, any other question replaces it.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub faqs: &'static [Faq],
    #[prop_or(Some(0))]
    pub initially_open: Option<usize>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open_index = use_state(|| props.initially_open);

    html! {
        <div class="faq-list">
            { for props.faqs.iter().enumerate().map(|(index, faq)| {
                let is_open = *open_index == Some(index);
                let toggle = {
                    let open_index = open_index.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open_index.set(toggle_open(*open_index, index));
                    })
                };

                html! {
                    <article key={faq.question} class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button
                            type="button"
                            class="faq-question"
                            onclick={toggle}
                            aria-expanded={is_open.to_string()}
                        >
                            <span class="question-text">{faq.question}</span>
                            <span class="toggle-icon" aria-hidden="true">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <p class="faq-answer">{faq.answer}</p>
                        }
                    </article>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_closed_question_opens_it() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(0), 1), Some(1));
    }

    #[test]
    fn clicking_the_open_question_closes_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }
}
