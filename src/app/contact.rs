use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactForm, Field, SuccessTicket, SUCCESS_BANNER_TTL};
use crate::content::{copyright_year, PORTFOLIO};
use crate::nav::SectionId;
use crate::relay::{ContactRelay, FormRelay};

use super::SectionHeading;

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-3 bg-surface-variant border rounded-lg text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-primary transition-all duration-300 border-red-500"
    } else {
        "w-full px-4 py-3 bg-surface-variant border rounded-lg text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-primary transition-all duration-300 border-outline"
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.id() class="py-20 px-6 bg-surface">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    badge="Contact"
                    lead="Get In"
                    highlight="Touch"
                    blurb="Have a project in mind? Let's work together to bring your ideas to life"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <ContactFormView />
                    <ContactInfo />
                </div>
            </div>
            <Footer />
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let UseTimeoutFnReturn {
        start: hide_banner_after,
        ..
    } = use_timeout_fn(
        move |ticket: SuccessTicket| form.update(|f| f.expire_success(ticket)),
        SUCCESS_BANNER_TTL.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(fields)) => fields,
            // invalid, already sending, or the form is gone
            _ => return,
        };
        let hide_banner_after = hide_banner_after.clone();
        spawn_local(async move {
            let outcome = FormRelay::default().deliver(&fields).await;
            if let Some(Some(ticket)) = form.try_update(|f| f.finish_submit(outcome)) {
                hide_banner_after(ticket);
            }
        });
    };

    let value = move |field: Field| form.with(|f| f.fields().get(field).to_string());
    let has_error = move |field: Field| form.with(|f| f.errors().contains(field));
    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <form on:submit=on_submit novalidate class="space-y-6 section-content">
            <div>
                <label for="name" class="block text-sm font-medium text-slate-300 mb-2">
                    "Your Name"
                </label>
                <input
                    type="text"
                    id="name"
                    name=Field::Name.name()
                    prop:value=move || value(Field::Name)
                    on:input=move |ev| form.update(|f| f.set_field(Field::Name, event_target_value(&ev)))
                    class=move || input_class(has_error(Field::Name))
                    placeholder="John Doe"
                />
                <FieldError form field=Field::Name />
            </div>
            <div>
                <label for="email" class="block text-sm font-medium text-slate-300 mb-2">
                    "Email Address"
                </label>
                <input
                    type="email"
                    id="email"
                    name=Field::Email.name()
                    prop:value=move || value(Field::Email)
                    on:input=move |ev| form.update(|f| f.set_field(Field::Email, event_target_value(&ev)))
                    class=move || input_class(has_error(Field::Email))
                    placeholder="john@example.com"
                />
                <FieldError form field=Field::Email />
            </div>
            <div>
                <label for="message" class="block text-sm font-medium text-slate-300 mb-2">
                    "Your Message"
                </label>
                <textarea
                    id="message"
                    name=Field::Message.name()
                    rows="5"
                    prop:value=move || value(Field::Message)
                    on:input=move |ev| form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                    class=move || format!("{} resize-none", input_class(has_error(Field::Message)))
                    placeholder="Tell me about your project..."
                ></textarea>
                <FieldError form field=Field::Message />
            </div>
            <button
                type="submit"
                disabled=submitting
                class="w-full flex items-center justify-center gap-2 px-8 py-4 bg-primary text-white font-semibold rounded-lg hover:bg-primary/90 disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-300"
            >
                {move || {
                    if submitting() {
                        view! {
                            <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                            "Sending..."
                        }
                            .into_any()
                    } else {
                        view! {
                            <span>"➤"</span>
                            "Send Message"
                        }
                            .into_any()
                    }
                }}
            </button>
            {move || {
                form.with(ContactForm::success)
                    .then(|| {
                        view! {
                            <div class="p-4 bg-green-500/20 border border-green-500/50 rounded-lg text-green-400 text-center banner-enter">
                                "Message sent successfully! I'll get back to you soon."
                            </div>
                        }
                    })
            }}
            {move || {
                form.with(ContactForm::submit_error)
                    .map(|msg| {
                        view! {
                            <div class="p-4 bg-red-500/20 border border-red-500/50 rounded-lg text-red-400 text-center banner-enter">
                                {msg}
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field))
            .map(|msg| view! { <p class="mt-1 text-sm text-red-400 banner-enter">{msg}</p> })
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let profile = &PORTFOLIO.profile;

    view! {
        <div class="space-y-8 section-content">
            <div class="space-y-6">
                <div class="flex items-start gap-4">
                    <div class="p-3 bg-primary/20 rounded-lg text-primary">"✉"</div>
                    <div>
                        <h3 class="text-white font-semibold mb-1">"Email"</h3>
                        <a
                            href=format!("mailto:{}", profile.email)
                            class="text-slate-400 hover:text-primary transition-colors duration-300"
                        >
                            {profile.email.clone()}
                        </a>
                    </div>
                </div>
                <div class="flex items-start gap-4">
                    <div class="p-3 bg-secondary/20 rounded-lg text-secondary">"☏"</div>
                    <div>
                        <h3 class="text-white font-semibold mb-1">"Phone"</h3>
                        <a
                            href=profile.phone_href()
                            class="text-slate-400 hover:text-secondary transition-colors duration-300"
                        >
                            {profile.phone.clone()}
                        </a>
                    </div>
                </div>
                <div class="flex items-start gap-4">
                    <div class="p-3 bg-primary/20 rounded-lg text-primary">"⌖"</div>
                    <div>
                        <h3 class="text-white font-semibold mb-1">"Location"</h3>
                        <p class="text-slate-400">{profile.location.clone()}</p>
                    </div>
                </div>
            </div>

            <div class="pt-8 border-t border-outline">
                <h3 class="text-white font-semibold mb-4">"Follow Me"</h3>
                <div class="flex gap-4">
                    {PORTFOLIO
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label.clone()
                                    class="p-3 bg-surface-variant border border-outline rounded-lg hover:border-primary hover:text-primary transition-all duration-300 text-xl"
                                >
                                    <i class=social.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-20 pt-8 border-t border-outline">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-slate-400 text-sm">
                        {format!(
                            "© {} {}. All rights reserved.",
                            copyright_year(),
                            PORTFOLIO.profile.name,
                        )}
                    </p>
                    <button
                        on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                        class="p-2 bg-surface-variant border border-outline rounded-lg hover:border-primary hover:text-primary transition-all duration-300"
                        aria-label="Scroll to top"
                    >
                        "↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
