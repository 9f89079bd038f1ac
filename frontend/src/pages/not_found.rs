use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_translations;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let t = use_translations();

    html! {
        <div class="landing-page not-found">
            <div class="container">
                <h1 class="section-title">{"404"}</h1>
                <h2 class="section-subtitle">{ t.not_found_title }</h2>
                <p class="muted">{ t.not_found_text }</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    { t.back_home }
                </Link<Route>>
            </div>
            <style>
                {r#"
                    .not-found {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .not-found .container { padding: 8rem 1.5rem; }
                "#}
            </style>
        </div>
    }
}
