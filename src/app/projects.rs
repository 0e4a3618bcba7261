use leptos::prelude::*;

use crate::content::{filter_projects, project_tags, ALL_TAG};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (active_filter, set_active_filter) = signal(ALL_TAG);

    let filter_class = move |tag: &'static str| {
        if active_filter() == tag {
            "px-4 py-2 rounded-full text-sm font-medium transition bg-red-600 text-white"
        } else {
            "px-4 py-2 rounded-full text-sm font-medium transition bg-gray-100 text-gray-700 hover:bg-gray-200"
        }
    };

    view! {
        <section
            id="projects"
            class="flex flex-col items-center max-w-5xl w-full min-h-screen mx-auto py-16 md:py-24 px-4"
        >
            <h2 class="font-medium text-2xl text-center py-4 section-title">"Projects"</h2>

            <div class="flex flex-wrap justify-center gap-2 mb-8">
                {project_tags()
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <button
                                class=move || filter_class(tag)
                                on:click=move |_| set_active_filter(tag)
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-2 gap-4">
                {move || {
                    filter_projects(active_filter())
                        .into_iter()
                        .map(|project| {
                            view! {
                                <article class="p-4 rounded-md h-fit transition-all duration-300 hover:-translate-y-1 project-card">
                                    <img
                                        src=project.image
                                        alt=format!("Screenshot of {}", project.title)
                                        class="rounded-md mb-3"
                                        loading="lazy"
                                    />
                                    <a
                                        href=project.link.unwrap_or("#")
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <h3 class="font-semibold text-2xl hover:text-red-500">
                                            {project.title}
                                        </h3>
                                    </a>

                                    <p class="text-gray-500 text-sm font-medium mb-2">
                                        {project.description}
                                    </p>
                                    <div class="flex flex-wrap gap-1">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|&tag| {
                                                view! {
                                                    <span class="text-xs bg-gray-100 text-gray-600 px-2 py-1 rounded">
                                                        {tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
