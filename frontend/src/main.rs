use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod currency;
mod i18n;
mod lead;
mod mailto;
mod registration;
mod relay;
mod roi;
mod styles;
mod submission;
mod components {
    pub mod animated_number;
    pub mod faq;
    pub mod growth_chart;
    pub mod investment_modal;
    pub mod language_selector;
    pub mod registration_form;
    pub mod robust_image;
    pub mod roi_calculator;
    pub mod toast;
    pub mod visibility;
}
mod pages {
    pub mod landing;
    pub mod not_found;
    pub mod register;
}

use components::language_selector::LanguageSelector;
use components::toast::ToastProvider;
use config::RelayConfig;
use i18n::{use_translations, Language, LanguageContext, LANGUAGE_STORAGE_KEY};
use pages::{landing::Landing, not_found::NotFound, register::RegisterPage};

const SCROLLED_OFFSET: i32 = 80;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/investidor")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Register => {
            info!("Rendering Register page");
            html! { <RegisterPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let t = use_translations();
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let document = window.document();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = document
                            .as_ref()
                            .and_then(|d| d.document_element())
                            .map(|el| el.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(scroll_top > SCROLLED_OFFSET);
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not attach scroll listener: {:?}", e);
                    }
                    (window.clone(), scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"PELE RARA"}
                </Link<Route>>
                <div class="nav-right">
                    <Link<Route> to={Route::Register} classes="nav-link">
                        { t.cta_primary }
                    </Link<Route>>
                    <LanguageSelector />
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let stored = use_local_storage::<String>(LANGUAGE_STORAGE_KEY.to_string());
    let language = stored
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    let set_language = {
        let stored = stored.clone();
        Callback::from(move |language: Language| {
            info!("Switching language to {}", language.code());
            stored.set(language.code().to_string());
        })
    };

    use_effect_with_deps(
        move |language: &Language| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("lang", language.code());
            }
            || ()
        },
        language,
    );

    let context = LanguageContext {
        language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            <ToastProvider>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
            <style>{ styles::BASE }</style>
        </ContextProvider<LanguageContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    match RelayConfig::from_build_env() {
        Some(relay) => info!("Email relay configured with key {}", relay.masked_key()),
        None => warn!("Email relay not configured; registrations will use the mail client fallback"),
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
