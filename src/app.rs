mod about;
mod contact;
mod hero;
mod icons;
mod nav;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::animation::{self, HERO_TIMELINE, NAV_INTRO, SCROLL_REVEALS};
use crate::content::SOCIALS;

use about::AboutSection;
use contact::ContactSection;
use hero::HeroSection;
use icons::{DiscordIcon, EnvelopeIcon, GithubIcon};
use nav::Nav;
use projects::ProjectsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Timothy Tenido - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is this one page: hero, gallery, about, contact.
#[component]
fn HomePage() -> impl IntoView {
    // Entrance timelines play once per load; reveals arm once and fire the
    // first time their trigger enters the viewport.
    Effect::new(move |_| {
        animation::play_mount(NAV_INTRO);
        animation::play_mount(HERO_TIMELINE);
        animation::arm_reveals(SCROLL_REVEALS);
    });

    view! {
        <Title text="Portfolio" />
        <div class="w-full flex flex-col justify-between font-mono bg-white bg-[radial-gradient(#00000022_1px,transparent_1px)] bg-size-[16px_16px]">
            <Nav />
            <HeroSection />
            <ProjectsSection />
            <AboutSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="flex flex-col md:flex-row justify-between max-w-5xl w-full mx-auto items-center gap-4 py-8 md:py-14 px-4 border-t border-gray-200">
            <p class="text-gray-500 text-center md:text-left text-sm md:text-base">
                "© 2026 Timothy Tenido. All rights reserved. "
                <span class="text-gray-400 text-xs" title=env!("BUILD_TIME")>
                    {format!("v{}", env!("CARGO_PKG_VERSION"))}
                </span>
            </p>
            <div class="flex gap-4 items-center">
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
            </div>
        </footer>
    }
}
