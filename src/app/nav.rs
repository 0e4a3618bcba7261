use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::sections::{section_at, Extent, Section};

use super::icons::{CloseIcon, MenuIcon};

/// Live extents of every section anchor, in document order. Sections
/// missing from the DOM are skipped.
fn measure_sections() -> Vec<(Section, Extent)> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let el = document
                .get_element_by_id(section.anchor())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some((
                section,
                Extent {
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                },
            ))
        })
        .collect()
}

/// Browser-native smooth scrolling is the smooth-scroll collaborator.
fn scroll_to(section: Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(section.anchor()) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let (active, set_active) = signal(Section::Home);
    let (menu_open, set_menu_open) = signal(false);

    // Recompute the active section from the scroll offset. When the probe
    // sits above every section the last known active item stays lit.
    let sync_active = move || {
        let scroll_y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        if let Some(section) = section_at(scroll_y, &measure_sections()) {
            set_active(section);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| sync_active());
    Effect::new(move |_| sync_active());

    let navigate = move |section: Section| {
        set_active(section);
        set_menu_open(false);
        scroll_to(section);
    };

    let desktop_class = move |section: Section| {
        if active() == section {
            "px-3 lg:px-4 py-1 rounded-md transition cursor-pointer font-medium text-sm lg:text-base bg-black text-white"
        } else {
            "px-3 lg:px-4 py-1 rounded-md transition cursor-pointer font-medium text-sm lg:text-base text-black hover:bg-gray-100"
        }
    };

    let mobile_class = move |section: Section| {
        if active() == section {
            "px-4 py-3 rounded-md transition cursor-pointer font-medium text-left bg-black text-white"
        } else {
            "px-4 py-3 rounded-md transition cursor-pointer font-medium text-left text-black hover:bg-gray-100"
        }
    };

    view! {
        <nav class="sticky top-0 z-50 backdrop-blur-md bg-white/70 border-b border-gray-200">
            <div class="flex justify-between max-w-5xl w-full h-full mx-auto py-4 px-4">
                <div class="flex flex-col nav-item">
                    <h1 class="font-medium text-2xl">"Timothy"</h1>
                    <p class="text-gray-500 text-[0.80rem]">"Frontend Developer"</p>
                </div>

                <div class="hidden md:flex items-center">
                    <div class="bg-white border border-gray-300 flex gap-2 lg:gap-4 p-1 rounded-md nav-item">
                        {Section::ALL
                            .iter()
                            .map(|&section| {
                                view! {
                                    <button
                                        class=move || desktop_class(section)
                                        on:click=move |_| navigate(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <button
                    class="md:hidden p-2 nav-item"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    {move || {
                        if menu_open() {
                            Either::Left(view! { <CloseIcon /> })
                        } else {
                            Either::Right(view! { <MenuIcon /> })
                        }
                    }}
                </button>
            </div>

            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-white border-t border-gray-200 px-4 py-4">
                                <div class="flex flex-col gap-2">
                                    {Section::ALL
                                        .iter()
                                        .map(|&section| {
                                            view! {
                                                <button
                                                    class=move || mobile_class(section)
                                                    on:click=move |_| navigate(section)
                                                >
                                                    {section.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
