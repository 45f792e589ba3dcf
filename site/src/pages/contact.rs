//! Contact page: validated, CAPTCHA-gated contact form.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::{ContactFormState, FreeTextField};

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactFormState::default());
    let site_key = config.captcha_site_key.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submission = None;
        form.update(|f| submission = f.begin_submit());
        let Some(submission) = submission else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let endpoint = config.contact_endpoint.clone();
            leptos::task::spawn_local(async move {
                match crate::net::contact_api::submit_contact(&endpoint, &submission).await {
                    Ok(()) => {
                        let mut generation = 0;
                        form.update(|f| generation = f.succeed());
                        crate::util::captcha::reset();
                        gloo_timers::future::TimeoutFuture::new(crate::state::contact::TOAST_DURATION_MS).await;
                        form.update(|f| f.dismiss_toast(generation));
                    }
                    Err(e) => {
                        leptos::logging::warn!("contact submit failed: {e}");
                        form.update(|f| f.fail(e.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, &config);
        }
    };

    view! {
        <section class="contact-page">
            <h1>"Contáctanos"</h1>
            <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                <label for="name">"Nombre"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    maxlength="80"
                    required=true
                    prop:value=move || form.with(|f| f.fields.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.name = value);
                    }
                    on:blur=move |_| form.update(|f| f.strip_markup(FreeTextField::Name))
                />

                <label for="email">"Correo"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    maxlength="120"
                    required=true
                    prop:value=move || form.with(|f| f.fields.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.email = value);
                    }
                />

                <label for="phone">"Teléfono (opcional)"</label>
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    autocomplete="tel"
                    maxlength="20"
                    prop:value=move || form.with(|f| f.fields.phone.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.phone = value);
                    }
                />

                <label for="subject">"Asunto"</label>
                <input
                    id="subject"
                    name="subject"
                    type="text"
                    maxlength="120"
                    required=true
                    prop:value=move || form.with(|f| f.fields.subject.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.subject = value);
                    }
                    on:blur=move |_| form.update(|f| f.strip_markup(FreeTextField::Subject))
                />

                <label for="message">"Mensaje"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    maxlength="2000"
                    required=true
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.fields.message = value);
                    }
                    on:blur=move |_| form.update(|f| f.strip_markup(FreeTextField::Message))
                ></textarea>

                // Honeypot: hidden from people, tempting for bots.
                <div class="hp-field" aria-hidden="true">
                    <label for="empresa">"Empresa"</label>
                    <input
                        id="empresa"
                        name="empresa"
                        type="text"
                        tabindex="-1"
                        autocomplete="off"
                        prop:value=move || form.with(|f| f.fields.honeypot.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.fields.honeypot = value);
                        }
                    />
                </div>

                <label class="terms">
                    <input
                        id="terms"
                        name="terms"
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.fields.accepted_terms)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.fields.accepted_terms = checked);
                        }
                    />
                    " Acepto los términos y la política de tratamiento de datos."
                </label>

                <div class="g-recaptcha" data-sitekey=site_key></div>

                <div
                    id="formErrors"
                    class="form-errors"
                    role="alert"
                    class:show=move || form.with(ContactFormState::has_errors)
                >
                    {move || form.with(|f| f.error_text.clone())}
                </div>

                <button id="submitBtn" class="btn-submit" type="submit" disabled=move || form.with(|f| f.submitting)>
                    "Enviar mensaje"
                </button>
            </form>
            <div id="toast" class="toast" role="status" class:show=move || form.with(|f| f.toast_visible)>
                "¡Gracias! Tu mensaje fue enviado."
            </div>
        </section>
    }
}
