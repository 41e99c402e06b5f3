use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::floating_label::FloatingLabelInput;
use crate::components::floating_messages::FloatingMessages;
use crate::config;
use crate::contact_form::{ContactForm, Field, FormAction, SubmissionPhase};
use crate::Route;

#[function_component(ContactInfo)]
fn contact_info() -> Html {
    html! {
        <div class="contact-info">
            <FloatingMessages />
            <div class="contact-info-card">
                <h2>{"Get in Touch"}</h2>
                <p class="contact-info-lead">
                    {"Our team is here to help you with any questions about our technology and potential collaborations."}
                </p>

                <div class="contact-rows">
                    <div class="contact-row">
                        <div class="contact-icon">
                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z" />
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z" />
                            </svg>
                        </div>
                        <div>
                            <h3>{"Location"}</h3>
                            <p>
                                {"123 Innovation Drive"}<br/>
                                {"Silicon Valley, CA 94025"}<br/>
                                {"United States"}
                            </p>
                        </div>
                    </div>

                    <div class="contact-row">
                        <div class="contact-icon">
                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" />
                            </svg>
                        </div>
                        <div>
                            <h3>{"Email"}</h3>
                            <p><a href="mailto:contact@neurosync.tech">{"contact@neurosync.tech"}</a></p>
                        </div>
                    </div>

                    <div class="contact-row">
                        <div class="contact-icon">
                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z" />
                            </svg>
                        </div>
                        <div>
                            <h3>{"Phone"}</h3>
                            <p>{"+1 (555) 123-4567"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let submitter = use_state(config::contact_submitter);

    // Bring the form back once the success panel has been up long enough.
    // Dropping the timeout (phase change or unmount) cancels it.
    {
        let phase = form.phase.clone();
        let follow_up = form.follow_up();
        let form = form.clone();
        use_effect_with_deps(
            move |_: &SubmissionPhase| {
                let timeout = follow_up.map(|(delay_ms, action)| {
                    Timeout::new(delay_ms, move || form.dispatch(action))
                });
                move || drop(timeout)
            },
            phase,
        );
    }

    let edit = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Edit(field, value)))
    };

    let onsubmit = {
        let form = form.clone();
        let submitter = submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit() {
                return;
            }

            let fields = form.fields.clone();
            let submitter = (*submitter).clone();
            let form = form.clone();
            form.dispatch(FormAction::Submit);

            spawn_local(async move {
                match submitter.submit(&fields).await {
                    Ok(()) => {
                        log::info!("Contact message delivered");
                        gloo_console::log!(
                            "Form submitted:",
                            serde_json::to_string(&fields).unwrap_or_default()
                        );
                        form.dispatch(FormAction::Succeeded);
                    }
                    Err(err) => {
                        log::warn!("Contact message failed: {}", err);
                        form.dispatch(FormAction::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let dismiss_error = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::DismissError))
    };

    let submitting = form.is_submitting();

    let body = if form.phase == SubmissionPhase::Submitted {
        html! {
            <div class="form-success">
                <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. We'll get back to you soon."}</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={onsubmit}>
                if let Some(error) = form.error() {
                    <div class="form-error" role="alert">
                        <span>{error}</span>
                        <button type="button" onclick={dismiss_error} aria-label="Dismiss">{"✕"}</button>
                    </div>
                }

                <FloatingLabelInput
                    label="Name"
                    name="name"
                    value={form.fields.name.clone()}
                    oninput={edit(Field::Name)}
                    required={true}
                />
                <FloatingLabelInput
                    label="Email"
                    name="email"
                    input_type="email"
                    value={form.fields.email.clone()}
                    oninput={edit(Field::Email)}
                    required={true}
                />
                <FloatingLabelInput
                    label="Subject"
                    name="subject"
                    value={form.fields.subject.clone()}
                    oninput={edit(Field::Subject)}
                    required={true}
                />
                <FloatingLabelInput
                    label="Message"
                    name="message"
                    value={form.fields.message.clone()}
                    oninput={edit(Field::Message)}
                    required={true}
                    textarea={true}
                />

                <button type="submit" class="send-button" disabled={submitting}>
                    <span class={classes!(submitting.then(|| "hidden-label"))}>{"Send Message"}</span>
                    if submitting {
                        <div class="send-spinner-wrap">
                            <div class="send-spinner"></div>
                        </div>
                    }
                    <div class="send-shine"></div>
                </button>
            </form>
        }
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page { padding: 6rem 1rem 4rem; max-width: 80rem; margin: 0 auto; }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                    }
                    .contact-info { position: relative; animation: slide-from-left 0.8s ease-out both; }
                    .floating-messages {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .floating-message {
                        position: absolute;
                        top: 0;
                        left: 0;
                        padding: 0.375rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        white-space: nowrap;
                        background: rgba(var(--primary-rgb), 0.2);
                        border: 1px solid rgba(var(--primary-rgb), 0.3);
                        backdrop-filter: blur(4px);
                        opacity: 0;
                    }
                    .contact-info-card, .contact-form-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(var(--border-rgb), 0.5);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    }
                    .contact-info-card { z-index: 10; opacity: 0.7; background: rgba(var(--card-rgb), 0.2); }
                    .contact-info-card h2, .contact-form-card h2 { font-size: 1.5rem; font-weight: 600; margin-bottom: 1rem; }
                    .contact-info-lead { color: var(--muted-foreground); margin-bottom: 2rem; }
                    .contact-rows { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-row { display: flex; align-items: center; gap: 1rem; }
                    .contact-row h3 { font-size: 1.125rem; font-weight: 600; }
                    .contact-row p { color: var(--muted-foreground); }
                    .contact-icon {
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: rgba(var(--primary-rgb), 0.1);
                        color: var(--primary);
                    }
                    .contact-icon svg { width: 1.5rem; height: 1.5rem; }
                    .contact-form-wrap { animation: slide-from-right 0.8s ease-out both; }
                    .contact-form-card { background: rgba(var(--card-rgb), 0.3); }
                    .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                    .floating-field { position: relative; }
                    .floating-field label {
                        position: absolute;
                        left: 1rem;
                        top: 1rem;
                        transform-origin: left;
                        cursor: text;
                        transition: transform 0.2s, color 0.2s;
                    }
                    .floating-field input, .floating-field textarea {
                        width: 100%;
                        padding: 1.5rem 1rem 0.5rem;
                        border: 1px solid rgba(var(--border-rgb), 1);
                        border-radius: 0.375rem;
                        background: rgba(var(--background-rgb), 0.5);
                        color: var(--foreground);
                        font: inherit;
                        outline: none;
                        transition: box-shadow 0.2s;
                    }
                    .floating-field input:focus, .floating-field textarea:focus {
                        box-shadow: 0 0 0 2px rgba(var(--primary-rgb), 0.5);
                    }
                    .floating-underline { position: relative; height: 2px; width: 100%; overflow: hidden; }
                    .floating-underline-bar {
                        position: absolute;
                        inset: 0;
                        background: var(--primary);
                        transform-origin: center;
                        transition: transform 0.3s;
                    }
                    .form-error {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.375rem;
                        background: rgba(239, 68, 68, 0.15);
                        color: #fca5a5;
                    }
                    .form-error button { border: none; background: none; color: inherit; cursor: pointer; }
                    .send-button {
                        position: relative;
                        overflow: hidden;
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        font: inherit;
                        cursor: pointer;
                        transition: transform 0.15s, opacity 0.2s;
                    }
                    .send-button:hover { transform: scale(1.02); }
                    .send-button:active { transform: scale(0.98); }
                    .send-button:disabled { opacity: 0.7; cursor: progress; }
                    .hidden-label { opacity: 0; }
                    .send-spinner-wrap { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }
                    .send-spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 2px solid var(--primary-foreground);
                        border-top-color: transparent;
                        border-radius: 9999px;
                        animation: spin 1s linear infinite;
                    }
                    .send-shine {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
                        animation: shimmer 2s infinite;
                    }
                    .form-success {
                        padding: 1rem;
                        border-radius: 0.375rem;
                        text-align: center;
                        background: rgba(var(--primary-rgb), 0.1);
                        color: var(--primary);
                        animation: pop-in 0.3s ease-out;
                    }
                    .form-success svg { width: 3rem; height: 3rem; margin: 0 auto 0.5rem; }
                    .form-success h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
                "#}
            </style>

            <div class="page-header">
                <h1>{Route::Contact.heading()}</h1>
                <p>{"Have questions about our technology or interested in collaboration? We'd love to hear from you."}</p>
            </div>

            <div class="contact-grid">
                <ContactInfo />

                <div class="contact-form-wrap">
                    <div class="contact-form-card">
                        <h2>{"Send a Message"}</h2>
                        {body}
                    </div>
                </div>
            </div>
        </div>
    }
}
