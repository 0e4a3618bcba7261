use leptos::prelude::*;

use crate::content::{PORTRAIT, RESUME_PATH, SOCIALS};

use super::icons::{DiscordIcon, EnvelopeIcon, FileDownIcon, GithubIcon};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="header"
            class="flex justify-between max-w-5xl w-full mx-auto py-16 md:py-32 lg:py-48 px-4"
        >
            <div class="flex flex-col-reverse md:flex-row justify-between items-center w-full gap-8 py-4">
                <div class="max-w-xl text-center md:text-left">
                    <div class="hero-greeting">
                        <span class="text-3xl md:text-4xl font-medium">"I'm"</span>
                        <span class="text-3xl md:text-4xl text-red-400 font-medium">" Tim"</span>
                        ","
                    </div>
                    <p class="text-lg md:text-xl text-gray-700 hero-description">
                        "a college student passionate about web development with a growing interest in Unity and game dev."
                    </p>
                    <div class="flex flex-wrap gap-3 md:gap-4 py-4 items-center justify-center md:justify-start hero-socials">
                        <a
                            href=SOCIALS.github
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Visit my GitHub profile"
                            class="w-8 h-8 bg-black text-white p-2 rounded-md cursor-pointer hover:bg-gray-800 transition flex items-center justify-center"
                        >
                            <GithubIcon />
                        </a>
                        <a
                            href=SOCIALS.email
                            aria-label="Send me an email"
                            class="w-8 h-8 bg-black text-white p-2 rounded-md cursor-pointer hover:bg-gray-800 transition flex items-center justify-center"
                        >
                            <EnvelopeIcon />
                        </a>
                        <a
                            href=SOCIALS.discord
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Connect on Discord"
                            class="w-8 h-8 bg-black text-white p-2 rounded-md cursor-pointer hover:bg-gray-800 transition flex items-center justify-center"
                        >
                            <DiscordIcon />
                        </a>
                        <a
                            href=RESUME_PATH
                            download=""
                            class="flex items-center gap-2 bg-white border border-gray-300 px-4 py-2 rounded-md text-black font-semibold cursor-pointer hover:bg-gray-50 transition text-sm md:text-base"
                        >
                            "Download CV"
                            <FileDownIcon />
                        </a>
                    </div>
                </div>
                <img
                    src=PORTRAIT
                    alt="Timothy - Frontend Developer"
                    class="w-40 h-40 md:w-64 md:h-64 rounded-full object-cover hero-image"
                />
            </div>
        </section>
    }
}
