use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Info => "toast-info",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.toasts.len() > MAX_VISIBLE {
                    next.toasts.remove(0);
                }
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle components use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl Toaster {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.dispatcher.dispatch(ToastAction::Push(kind, message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }
}

#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.class())} role="status">
            <span class="toast-message">{ &props.toast.message }</span>
            <button class="toast-close" onclick={close} aria-label="close">{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster {
        dispatcher: queue.dispatcher(),
    };
    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-stack">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 2000;
                        max-width: min(420px, calc(100vw - 3rem));
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 0.9rem 1.1rem;
                        border-radius: 10px;
                        background: #18181b;
                        color: #fafafa;
                        border: 1px solid #3f3f46;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
                        animation: toastIn 0.25s ease-out;
                    }
                    .toast-success { border-left: 4px solid #22c55e; }
                    .toast-info { border-left: 4px solid #3b82f6; }
                    .toast-warning { border-left: 4px solid #f59e0b; }
                    .toast-error { border-left: 4px solid #ef4444; }
                    .toast-message { flex: 1; font-size: 0.95rem; line-height: 1.4; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #a1a1aa;
                        font-size: 1.2rem;
                        cursor: pointer;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(-8px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(ToastKind::Info, message.to_string()))
    }

    #[test]
    fn pushed_toasts_get_increasing_ids() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let ids: Vec<u32> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "b");

        let unchanged = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &unchanged));
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let mut queue = Rc::new(ToastQueue::default());
        for i in 0..(MAX_VISIBLE + 2) {
            queue = push(queue, &i.to_string());
        }
        assert_eq!(queue.toasts.len(), MAX_VISIBLE);
        assert_eq!(queue.toasts[0].message, "2");
    }
}
