use leptos::{ev, prelude::*};

use crate::content::SOCIALS;
use crate::submission::{FormFields, SubmitStatus};

use super::icons::{DiscordIcon, EnvelopeIcon, GithubIcon};

/// Run the submission flow: honeypot trap, cooldown gate, then a single
/// relay call. Fields are cleared and the cooldown timestamp persisted
/// only on confirmed delivery.
#[cfg(feature = "hydrate")]
fn submit_message(
    honeypot: ReadSignal<String>,
    fields: ReadSignal<FormFields>,
    set_fields: WriteSignal<FormFields>,
    set_status: WriteSignal<SubmitStatus>,
    set_cooldown_remaining: WriteSignal<u64>,
    set_is_submitting: WriteSignal<bool>,
) {
    use leptos::task::spawn_local;

    use crate::mailer::{self, MailMessage, RelayConfig};
    use crate::storage::BrowserStore;
    use crate::submission::{ContactGate, Gate};

    let gate = ContactGate::new(BrowserStore);
    match gate.check(&honeypot.get_untracked(), js_sys::Date::now()) {
        Gate::Trap => {
            // A filled honeypot gets a quiet "success" and nothing is sent.
            set_status(SubmitStatus::Success);
            return;
        }
        Gate::Cooling { remaining_secs } => {
            set_cooldown_remaining(remaining_secs);
            set_status(SubmitStatus::RateLimited);
            return;
        }
        Gate::Clear => {}
    }

    set_is_submitting(true);
    set_status(SubmitStatus::Idle);

    let form = fields.get_untracked();
    let message = MailMessage {
        from_name: form.from_name,
        reply_to: form.reply_to,
        message: form.message,
    };

    spawn_local(async move {
        match mailer::send(&RelayConfig::from_build_env(), &message).await {
            Ok(()) => {
                set_status(SubmitStatus::Success);
                set_fields(FormFields::default());
                ContactGate::new(BrowserStore).record_success(js_sys::Date::now());
            }
            Err(err) => {
                log::warn!("contact delivery failed: {err}");
                set_status(SubmitStatus::Error);
            }
        }
        set_is_submitting(false);
    });
}

#[cfg(not(feature = "hydrate"))]
fn submit_message(
    _honeypot: ReadSignal<String>,
    _fields: ReadSignal<FormFields>,
    _set_fields: WriteSignal<FormFields>,
    _set_status: WriteSignal<SubmitStatus>,
    _set_cooldown_remaining: WriteSignal<u64>,
    _set_is_submitting: WriteSignal<bool>,
) {
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let (fields, set_fields) = signal(FormFields::default());
    let (honeypot, set_honeypot) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (cooldown_remaining, set_cooldown_remaining) = signal(0u64);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_message(
            honeypot,
            fields,
            set_fields,
            set_status,
            set_cooldown_remaining,
            set_is_submitting,
        );
    };

    view! {
        <section id="contact" class="max-w-5xl w-full min-h-screen mx-auto py-24 px-4">
            <div class="flex flex-col gap-8 contact-content">
                <h2 class="font-medium text-2xl text-center section-title">"Contact Me"</h2>
                <p class="text-gray-500 text-center max-w-lg mx-auto">
                    "Have a project in mind or just want to say hi? Feel free to reach out. I'll get back to you as soon as possible."
                </p>

                <div class="grid md:grid-cols-2 gap-12 mt-4">
                    <div class="flex flex-col gap-6">
                        <h3 class="font-semibold text-xl">"Get in Touch"</h3>

                        <div class="flex flex-col gap-4">
                            <a
                                href=SOCIALS.email
                                class="flex items-center gap-4 p-4 bg-gray-50 rounded-lg hover:bg-gray-100 transition group"
                            >
                                <div class="w-12 h-12 bg-red-400 text-white rounded-lg flex items-center justify-center group-hover:scale-110 transition">
                                    <span class="w-5 h-5">
                                        <EnvelopeIcon />
                                    </span>
                                </div>
                                <div>
                                    <p class="font-medium">"Email"</p>
                                    <p class="text-gray-500 text-sm">"timothytenido@gmail.com"</p>
                                </div>
                            </a>

                            <a
                                href=SOCIALS.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-4 p-4 bg-gray-50 rounded-lg hover:bg-gray-100 transition group"
                            >
                                <div class="w-12 h-12 bg-black text-white rounded-lg flex items-center justify-center group-hover:scale-110 transition">
                                    <span class="w-5 h-5">
                                        <GithubIcon />
                                    </span>
                                </div>
                                <div>
                                    <p class="font-medium">"GitHub"</p>
                                    <p class="text-gray-500 text-sm">"Check out my projects"</p>
                                </div>
                            </a>

                            <a
                                href=SOCIALS.discord
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-4 p-4 bg-gray-50 rounded-lg hover:bg-gray-100 transition group"
                            >
                                <div class="w-12 h-12 bg-indigo-500 text-white rounded-lg flex items-center justify-center group-hover:scale-110 transition">
                                    <span class="w-5 h-5">
                                        <DiscordIcon />
                                    </span>
                                </div>
                                <div>
                                    <p class="font-medium">"Discord"</p>
                                    <p class="text-gray-500 text-sm">"Let's connect"</p>
                                </div>
                            </a>
                        </div>
                    </div>

                    <div class="flex flex-col gap-4">
                        <h3 class="font-semibold text-xl">"Send a Message"</h3>

                        <form on:submit=on_submit class="flex flex-col gap-4">
                            // Spam trap: hidden from humans, filled by bots.
                            <input
                                type="text"
                                name="website"
                                prop:value=honeypot
                                on:input=move |ev| set_honeypot(event_target_value(&ev))
                                class="absolute -left-[9999px] opacity-0 pointer-events-none"
                                tabindex="-1"
                                autocomplete="off"
                                aria-hidden="true"
                            />

                            <div>
                                <label
                                    for="from_name"
                                    class="block text-sm font-medium text-gray-700 mb-1"
                                >
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    id="from_name"
                                    name="from_name"
                                    required=true
                                    prop:value=move || fields().from_name
                                    on:input=move |ev| {
                                        set_fields.update(|f| f.from_name = event_target_value(&ev));
                                        set_status.update(|s| *s = s.on_edit());
                                    }
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-red-400 focus:border-transparent outline-none transition"
                                    placeholder="Your name"
                                />
                            </div>

                            <div>
                                <label
                                    for="reply_to"
                                    class="block text-sm font-medium text-gray-700 mb-1"
                                >
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="reply_to"
                                    name="reply_to"
                                    required=true
                                    prop:value=move || fields().reply_to
                                    on:input=move |ev| {
                                        set_fields.update(|f| f.reply_to = event_target_value(&ev));
                                        set_status.update(|s| *s = s.on_edit());
                                    }
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-red-400 focus:border-transparent outline-none transition"
                                    placeholder="your@email.com"
                                />
                            </div>

                            <div>
                                <label
                                    for="message"
                                    class="block text-sm font-medium text-gray-700 mb-1"
                                >
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required=true
                                    rows="5"
                                    prop:value=move || fields().message
                                    on:input=move |ev| {
                                        set_fields.update(|f| f.message = event_target_value(&ev));
                                        set_status.update(|s| *s = s.on_edit());
                                    }
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-red-400 focus:border-transparent outline-none transition resize-none"
                                    placeholder="Your message..."
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_submitting()
                                class="w-full bg-red-400 text-white py-3 px-6 rounded-lg font-medium hover:bg-red-500 transition disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || if is_submitting() { "Sending..." } else { "Send Message" }}
                            </button>

                            {move || match status() {
                                SubmitStatus::Idle => None,
                                SubmitStatus::Success => {
                                    Some(
                                        view! {
                                            <p class="text-green-600 text-center font-medium">
                                                "Message sent successfully!"
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                                SubmitStatus::Error => {
                                    Some(
                                        view! {
                                            <p class="text-red-600 text-center font-medium">
                                                "Failed to send. Please try again."
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                                SubmitStatus::RateLimited => {
                                    Some(
                                        view! {
                                            <p class="text-amber-600 text-center font-medium">
                                                {move || {
                                                    format!(
                                                        "Please wait {}s before sending another message.",
                                                        cooldown_remaining(),
                                                    )
                                                }}
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
