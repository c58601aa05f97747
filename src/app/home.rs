//! The landing screen: a read-only view of the catalog
//!
//! Shares the catalog store with the management screen; this screen only ever
//! reads it, all writes go through the refresh path.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::app::books::{catalog::CatalogStore, refresh_catalog};
use crate::app::notice::NoticeBoard;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogStore>>();
    let notices = expect_context::<RwSignal<NoticeBoard>>();

    Effect::new(move |_| {
        spawn_local(refresh_catalog(catalog, notices));
    });

    view! {
        <div id="home-screen" class="p-4">
            <A href="/books">
                <span class="mb-4 inline-block rounded bg-stone-800 px-4 py-2 text-stone-100">
                    "Manage Books"
                </span>
            </A>
            <h1 class="mb-4 text-center text-2xl font-bold">"Available books"</h1>

            <Show when=move || catalog.with(|c| c.is_loading())>
                <p>"Loading books..."</p>
            </Show>

            <Show when=move || {
                catalog.with(|c| c.is_empty() && !c.is_loading())
            }>
                <p class="mt-6 text-center text-stone-500">"No books available"</p>
            </Show>

            <div class="flex flex-col gap-y-4">
                {move || {
                    catalog
                        .with(|c| c.books().to_vec())
                        .into_iter()
                        .map(|book| {
                            view! {
                                <div class="rounded bg-white p-4 shadow">
                                    <h3 class="text-lg font-bold">{book.title}</h3>
                                    <p class="font-semibold text-stone-500">"By: " {book.author}</p>
                                    <p>"Genre: " {book.genre}</p>
                                    <p class="line-clamp-3">{book.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
