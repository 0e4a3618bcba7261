use leptos::prelude::*;

use crate::content::{EXPERIENCE, PORTRAIT, SOCIALS, TECHNOLOGIES};

use super::icons::{EnvelopeIcon, MapPinIcon};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="max-w-5xl w-full min-h-screen mx-auto py-24 px-4">
            <div class="flex flex-col gap-12">
                <div class="flex flex-col gap-8">
                    <h2 class="font-medium text-2xl text-center section-title">"About Me"</h2>

                    <div class="grid md:grid-cols-2 gap-8 items-start">
                        <div class="flex flex-col gap-6 about-text">
                            <div class="relative">
                                <img
                                    src=PORTRAIT
                                    alt="Timothy - Frontend Developer"
                                    class="w-full max-w-xs mx-auto rounded-2xl object-cover shadow-lg"
                                    loading="lazy"
                                />
                                <div class="absolute -bottom-3 -right-3 md:right-auto md:-left-3 bg-red-400 text-white px-4 py-2 rounded-lg text-sm font-medium shadow-md">
                                    "Open to Work"
                                </div>
                            </div>

                            <div class="flex flex-wrap justify-center gap-4 text-gray-500">
                                <p class="flex items-center gap-2 bg-gray-50 px-3 py-2 rounded-lg">
                                    <MapPinIcon />
                                    "Pampanga, Philippines"
                                </p>
                                <a
                                    href=SOCIALS.email
                                    class="flex items-center gap-2 bg-gray-50 px-3 py-2 rounded-lg hover:bg-gray-100 transition"
                                >
                                    <span class="w-4 h-4 text-red-400">
                                        <EnvelopeIcon />
                                    </span>
                                    "Email Me"
                                </a>
                            </div>
                        </div>

                        <div class="flex flex-col gap-6">
                            <article class="about-text">
                                <h3 class="font-semibold text-xl mb-2">"Who I Am"</h3>
                                <p class="text-gray-500 text-lg leading-relaxed">
                                    "I'm "
                                    <span class="font-semibold text-red-400">"Timothy"</span>
                                    ", a college student and frontend developer who enjoys crafting clean, responsive, and user-focused web experiences. I focus on intuitive interfaces, accessibility, and performance."
                                </p>
                            </article>

                            <article class="about-text">
                                <h3 class="font-semibold text-xl mb-2">"What I Do"</h3>
                                <p class="text-gray-500 text-lg leading-relaxed">
                                    "Beyond frontend development, I explore automation and workflow optimization using tools like n8n. I build automated processes that connect APIs, manage data, and reduce repetitive tasks."
                                </p>
                            </article>

                            <div class="about-text">
                                <h3 class="font-semibold text-xl mb-3">"Tech Stack"</h3>
                                <div class="flex flex-wrap gap-2 tech-list">
                                    {TECHNOLOGIES
                                        .iter()
                                        .map(|&tech| {
                                            view! {
                                                <span class="tech-item bg-gray-100 text-gray-700 px-3 py-1.5 rounded-full text-sm font-medium hover:bg-red-500 hover:text-white transition">
                                                    {tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <hr class="border-t border-gray-200 w-full" />

                <div class="flex flex-col gap-8 experience-section">
                    <h2 class="font-medium text-2xl text-center section-title">"Experience"</h2>

                    <div class="flex flex-col gap-8 mx-auto">
                        {EXPERIENCE
                            .iter()
                            .map(|entry| {
                                view! {
                                    <article class="experience-item">
                                        <h3 class="font-semibold text-xl">{entry.role}</h3>
                                        <p class="text-gray-400 text-sm">{entry.context}</p>
                                        <p class="text-gray-500 text-xl text-justify mt-2">
                                            {entry.summary}
                                        </p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
