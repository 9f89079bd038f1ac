use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::i18n::use_translations;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[function_component(InvestorFaq)]
pub fn investor_faq() -> Html {
    let t = use_translations();

    html! {
        <div class="faq-list">
            { for t.faq.iter().map(|item| html! {
                <FaqItem question={item.question} answer={item.answer} />
            }) }
            <p class="faq-contact">
                { t.faq_contact }{" "}
                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ t.faq_contact_link }</a>
            </p>
        </div>
    }
}
