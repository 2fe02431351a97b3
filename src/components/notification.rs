use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub title: String,
    pub message: String,
    #[prop_or(ToastKind::Success)]
    pub kind: ToastKind,
    pub on_close: Callback<()>,
}

/// Transient notification pinned to the bottom corner. Closes itself after
/// `config::TOAST_DURATION` unless dismissed first.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION, move || on_close.emit(()));
                move || drop(timeout)
            },
            (props.title.clone(), props.message.clone()),
        );
    }

    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let kind_class = match props.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" aria-live="polite">
            <div class="toast-body">
                <strong class="toast-title">{&props.title}</strong>
                <p class="toast-message">{&props.message}</p>
            </div>
            <button class="toast-close" onclick={dismiss} aria-label="Dismiss">{"×"}</button>
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(24px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        z-index: 100;
                        display: flex;
                        align-items: flex-start;
                        gap: 16px;
                        max-width: 360px;
                        padding: 18px 20px;
                        border-radius: 16px;
                        background: rgba(20, 20, 24, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                        animation: toastIn 0.4s ease-out forwards;
                        color: #fff;
                    }
                    .toast-success { border: 1px solid rgba(63, 163, 77, 0.5); }
                    .toast-error { border: 1px solid rgba(255, 61, 127, 0.5); }
                    .toast-title { display: block; margin-bottom: 4px; }
                    .toast-message { margin: 0; color: #bbb; font-size: 0.95rem; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #888;
                        font-size: 1.4rem;
                        line-height: 1;
                        cursor: pointer;
                    }
                    .toast-close:hover { color: #fff; }
                "#}
            </style>
        </div>
    }
}
