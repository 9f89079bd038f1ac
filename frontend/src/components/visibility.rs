use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Flips to `true` the first time the node scrolls into view, and stays there.
#[hook]
pub fn use_visibility(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut guard: Option<(IntersectionObserver, ObserverCallback)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_visible = visible.clone();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let hit = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if hit {
                                on_visible.set(true);
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(THRESHOLD));
                    options.set_root_margin(ROOT_MARGIN);

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            guard = Some((observer, callback));
                        }
                        Err(e) => {
                            warn!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = guard {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

/// Section wrapper that fades its content in on first view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone());

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), visible.then_some("animated"))}
        >
            { for props.children.iter() }
        </section>
    }
}
