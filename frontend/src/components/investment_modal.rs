use yew::prelude::*;

use crate::components::registration_form::RegistrationForm;
use crate::config::{CONTACT_EMAIL, WEBSITE_URL};
use crate::contact::{investment_interest_mailto, whatsapp_url};
use crate::i18n::use_translations;

#[derive(Properties, PartialEq)]
pub struct InvestmentModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(InvestmentModal)]
pub fn investment_modal(props: &InvestmentModalProps) -> Html {
    let t = use_translations();
    let m = &t.modal;
    let show_form = use_state(|| false);

    {
        let show_form = show_form.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if !*open {
                    show_form.set(false);
                }
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
    };
    let back = {
        let show_form = show_form.clone();
        Callback::from(move |()| show_form.set(false))
    };

    let body = if *show_form {
        html! {
            <>
                <h2 class="modal-title">{ m.form_title }</h2>
                <RegistrationForm on_back={back} />
            </>
        }
    } else {
        html! {
            <>
                <h2 class="modal-title">{ m.title }</h2>
                <p class="modal-subtitle">{ m.subtitle }</p>
                <span class="badge">{ m.minimum_badge }</span>
                <div class="modal-actions">
                    <button class="modal-action primary" onclick={open_form}>
                        <span class="action-icon">{"📋"}</span>
                        <span class="action-text">
                            <strong>{ m.register_title }</strong>
                            <span class="recommended">{ m.recommended }</span>
                            <small>{ m.register_description }</small>
                        </span>
                    </button>
                    <a class="modal-action" href={whatsapp_url(t.whatsapp_message)} target="_blank" rel="noopener noreferrer">
                        <span class="action-icon">{"💬"}</span>
                        <span class="action-text">
                            <strong>{ m.whatsapp_title }</strong>
                            <small>{ m.whatsapp_description }</small>
                        </span>
                    </a>
                    <a class="modal-action" href={investment_interest_mailto(t)}>
                        <span class="action-icon">{"✉️"}</span>
                        <span class="action-text">
                            <strong>{ m.email_title }</strong>
                            <small>{ m.email_description }</small>
                        </span>
                    </a>
                    <a class="modal-action" href={WEBSITE_URL} target="_blank" rel="noopener noreferrer">
                        <span class="action-icon">{"🌐"}</span>
                        <span class="action-text">
                            <strong>{ m.website_title }</strong>
                            <small>{ m.website_description }</small>
                        </span>
                    </a>
                </div>
                <p class="modal-contact">
                    { m.official_contact }{" "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                </p>
            </>
        }
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                class={classes!("modal", (*show_form).then_some("modal-wide"))}
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <button class="modal-close" onclick={close} aria-label={m.close}>{"×"}</button>
                { body }
            </div>
        </div>
    }
}
