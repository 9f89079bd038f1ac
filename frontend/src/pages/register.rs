use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::registration_form::RegistrationForm;
use crate::config::{CONTACT_EMAIL, WHATSAPP_DISPLAY};
use crate::i18n::use_translations;
use crate::Route;

/// Standalone registration page for investors arriving from a direct link.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let t = use_translations();

    html! {
        <div class="landing-page register-page">
            <div class="container register-container">
                <Link<Route> to={Route::Home} classes="btn-link">
                    { t.modal.back }
                </Link<Route>>
                <h1 class="section-title">{ t.modal.form_title }</h1>
                <p class="section-subtitle">{ t.modal.minimum_badge }</p>
                <RegistrationForm />
                <p class="modal-contact">
                    { t.modal.official_contact }{" "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                    {" · "}{ WHATSAPP_DISPLAY }
                </p>
            </div>
            <style>
                {r#"
                    .register-container {
                        max-width: 900px;
                        padding-top: 7rem;
                        padding-bottom: 4rem;
                    }
                "#}
            </style>
        </div>
    }
}
