use gloo_timers::callback::Timeout;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with};

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 3_000;

/// Toast flavor; decides the icon and color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One ephemeral notification. At most one is visible at a time; a new
/// toast replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        ToastMessage {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToastMessage {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<ToastMessage>,
    pub on_close: Callback<()>,
}

/// Bottom-right notification that dismisses itself after three seconds.
///
/// The dismiss timer is tied to the toast it was armed for: replacing the
/// toast re-arms the timer, and the superseded timer is dropped with its
/// closure instead of dismissing the newer toast early.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.toast.clone(), move |current| {
            let timer = current
                .as_ref()
                .map(|_| Timeout::new(TOAST_DISMISS_MS, move || on_close.emit(())));
            move || drop(timer)
        });
    }

    let Some(toast) = props.toast.clone() else {
        return html! {};
    };

    let (alert_class, icon) = match toast.kind {
        ToastKind::Success => ("alert alert-success", "fa-solid fa-circle-check"),
        ToastKind::Error => ("alert alert-error", "fa-solid fa-circle-xmark"),
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: yew::MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="toast toast-end z-50">
            <div class={alert_class}>
                <i class={icon}></i>
                <span class="text-sm">{ toast.message }</span>
                <button class="btn btn-ghost btn-xs" type="button" onclick={on_close}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
        </div>
    }
}
