use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::magnetic::Magnetic;
use crate::components::notification::{Toast, ToastKind};
use crate::components::reveal::Reveal;
use crate::config;
use crate::contact::{mailto_link, submit, Budget, ContactRequest};
use crate::content::SERVICES;

#[derive(Clone, Debug, PartialEq)]
struct Notice {
    title: String,
    message: String,
    kind: ToastKind,
}

/// The toast on screen, numbered so a repeat of the same notice still counts
/// as new and gets a fresh dismiss timer.
#[derive(Clone, Debug, Default, PartialEq)]
struct Notices {
    serial: u64,
    current: Option<Notice>,
}

enum NoticeAction {
    Show(Notice),
    Dismiss,
}

impl Notices {
    fn apply(self, action: NoticeAction) -> Self {
        match action {
            NoticeAction::Show(notice) => Self {
                serial: self.serial.wrapping_add(1),
                current: Some(notice),
            },
            NoticeAction::Dismiss => Self {
                current: None,
                ..self
            },
        }
    }
}

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactRequest::default);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let notices = use_reducer(Notices::default);

    let edit_input = |apply: fn(&mut ContactRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_budget = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.budget = Budget::from_value(&select.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let notices = notices.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let request = (*form).clone();
            if let Err(invalid) = request.validate() {
                error.set(Some(invalid.to_string()));
                return;
            }
            error.set(None);
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let notices = notices.clone();
            spawn_local(async move {
                let first_name = request.name.split_whitespace().next().unwrap_or_default().to_string();
                match submit(request).await {
                    Ok(()) => {
                        form.set(ContactRequest::default());
                        notices.dispatch(NoticeAction::Show(Notice {
                            title: format!("Thanks, {}!", first_name),
                            message: "We'll get back to you within two working days.".to_string(),
                            kind: ToastKind::Success,
                        }));
                    }
                    Err(e) => {
                        log::error!("contact request failed: {}", e);
                        notices.dispatch(NoticeAction::Show(Notice {
                            title: "Message not sent".to_string(),
                            message: e.to_string(),
                            kind: ToastKind::Error,
                        }));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let close_notice = {
        let notices = notices.dispatcher();
        Callback::from(move |_: ()| notices.dispatch(NoticeAction::Dismiss))
    };

    html! {
        <section id="contact" class="section contact">
            <div class="contact-layout">
                <Reveal class="contact-intro">
                    <p class="eyebrow">{"Contact"}</p>
                    <h2 class="section-title">{"Tell us what you're building"}</h2>
                    <p>{"A few lines are enough. We reply to every message, usually within two working days."}</p>
                    <a class="contact-mail" href={mailto_link("New project enquiry")}>{config::CONTACT_EMAIL}</a>
                </Reveal>
                <Reveal delay={150}>
                    <form class="contact-form" {onsubmit}>
                        <div class="contact-row">
                            <label>
                                <span>{"Name *"}</span>
                                <input
                                    type="text"
                                    name="name"
                                    required={true}
                                    value={form.name.clone()}
                                    oninput={edit_input(|form, value| form.name = value)}
                                />
                            </label>
                            <label>
                                <span>{"Email *"}</span>
                                <input
                                    type="email"
                                    name="email"
                                    required={true}
                                    value={form.email.clone()}
                                    oninput={edit_input(|form, value| form.email = value)}
                                />
                            </label>
                        </div>
                        <div class="contact-row">
                            <label>
                                <span>{"Company"}</span>
                                <input
                                    type="text"
                                    name="company"
                                    value={form.company.clone()}
                                    oninput={edit_input(|form, value| form.company = value)}
                                />
                            </label>
                            <label>
                                <span>{"Budget"}</span>
                                <select name="budget" onchange={on_budget}>
                                    <option value="" selected={form.budget.is_none()}>{"Select a range"}</option>
                                    { for Budget::ALL.iter().map(|budget| html! {
                                        <option
                                            key={budget.value()}
                                            value={budget.value()}
                                            selected={form.budget == Some(*budget)}
                                        >
                                            {budget.label()}
                                        </option>
                                    }) }
                                </select>
                            </label>
                        </div>
                        <fieldset class="contact-services">
                            <legend>{"I'm interested in"}</legend>
                            { for SERVICES.iter().map(|service| {
                                let picked = form.has_service(service.id);
                                let onclick = {
                                    let form = form.clone();
                                    let id = service.id;
                                    Callback::from(move |e: MouseEvent| {
                                        e.prevent_default();
                                        let mut next = (*form).clone();
                                        next.toggle_service(id);
                                        form.set(next);
                                    })
                                };
                                html! {
                                    <button
                                        key={service.id}
                                        type="button"
                                        class={classes!("contact-chip", picked.then_some("picked"))}
                                        aria-pressed={picked.to_string()}
                                        {onclick}
                                    >
                                        {service.title}
                                    </button>
                                }
                            }) }
                        </fieldset>
                        <label>
                            <span>{"Message *"}</span>
                            <textarea
                                name="message"
                                rows="5"
                                required={true}
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </label>
                        if let Some(message) = (*error).as_ref() {
                            <p class="contact-error" role="alert">{message}</p>
                        }
                        <Magnetic strength={0.2}>
                            <button class="button button-primary" type="submit" disabled={*submitting}>
                                { if *submitting { "Sending…" } else { "Send message" } }
                            </button>
                        </Magnetic>
                    </form>
                </Reveal>
            </div>
            if let Some(current) = notices.current.clone() {
                <Toast
                    key={notices.serial}
                    title={current.title}
                    message={current.message}
                    kind={current.kind}
                    on_close={close_notice}
                />
            }
            <style>
                {r#"
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 1fr 1.4fr;
                        gap: 4rem;
                    }
                    .contact-intro p { color: #999; }
                    .contact-mail {
                        display: inline-block;
                        margin-top: 1rem;
                        color: #a993ff;
                        font-size: 1.2rem;
                        text-decoration: none;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .contact-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        color: #888;
                        font-size: 0.9rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 0.85rem 1rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.03);
                        color: #fff;
                        font: inherit;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #7c5cff;
                    }
                    .contact-services {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        border: none;
                        padding: 0;
                        margin: 0;
                    }
                    .contact-services legend {
                        color: #888;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-chip {
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: none;
                        color: #ccc;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .contact-chip.picked {
                        background: #7c5cff;
                        border-color: #7c5cff;
                        color: #fff;
                    }
                    .contact-error { color: #ff3d7f; margin: 0; }
                    @media (max-width: 900px) {
                        .contact-layout { grid-template-columns: 1fr; gap: 2rem; }
                        .contact-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thanks() -> Notice {
        Notice {
            title: "Thanks, Ada!".to_string(),
            message: "We'll get back to you within two working days.".to_string(),
            kind: ToastKind::Success,
        }
    }

    #[test]
    fn repeated_notice_gets_a_new_serial() {
        let first = Notices::default().apply(NoticeAction::Show(thanks()));
        let second = first.clone().apply(NoticeAction::Show(thanks()));
        assert_eq!(first.current, second.current);
        assert_ne!(first.serial, second.serial);
    }

    #[test]
    fn dismiss_clears_the_toast() {
        let shown = Notices::default().apply(NoticeAction::Show(thanks()));
        let dismissed = shown.clone().apply(NoticeAction::Dismiss);
        assert_eq!(dismissed.current, None);
        assert_eq!(dismissed.serial, shown.serial);
    }
}
