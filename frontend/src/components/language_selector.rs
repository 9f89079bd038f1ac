use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{use_language, Language};

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let ctx = use_language();
    let t = ctx.language.translations();

    let onchange = {
        let set_language = ctx.set_language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_language.emit(Language::from_code(&select.value()));
        })
    };

    html! {
        <label class="language-selector">
            <span class="sr-only">{ t.language_selector_label }</span>
            <select {onchange} aria-label={t.language_selector_label}>
                { for Language::ALL.iter().map(|lang| html! {
                    <option value={lang.code()} selected={*lang == ctx.language}>
                        { lang.selector_label() }
                    </option>
                }) }
            </select>
        </label>
    }
}
