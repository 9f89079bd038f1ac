use log::warn;
use yew::prelude::*;

use crate::i18n::use_translations;

#[derive(Properties, PartialEq)]
pub struct RobustImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps itself for a labelled placeholder when loading fails.
#[function_component(RobustImage)]
pub fn robust_image(props: &RobustImageProps) -> Html {
    let t = use_translations();
    let failed = use_state(|| false);

    {
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                failed.set(false);
                || ()
            },
            props.src.clone(),
        );
    }

    if *failed {
        return html! {
            <div class={classes!("image-placeholder", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                <span>{ t.image_unavailable }</span>
            </div>
        };
    }

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            warn!("Image failed to load: {}", src);
            failed.set(true);
        })
    };

    html! {
        <img
            class={props.class.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            {onerror}
        />
    }
}
