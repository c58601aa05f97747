//! The read-only detail screen for a single book
//!
//! Fetches the richer record (cover image, published year) by id on mount;
//! there is no local state beyond the fetch itself.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::shared::BookDetail;

#[derive(Params, Clone, PartialEq)]
struct BookParams {
    id: Option<String>,
}

#[server]
pub async fn get_book(id: String) -> Result<Option<BookDetail>, ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    crate::server::api::get_book(&config, &id)
        .await
        .map_err(|e| {
            tracing::warn!("Failed fetching book {id} from the book service: {e}");
            ServerFnError::new(e.to_string())
        })
}

#[component]
pub fn BookDetailScreen() -> impl IntoView {
    let params = use_params::<BookParams>();
    // get the book id from the url
    let id = move || params.read().as_ref().ok().and_then(|p| p.id.clone());
    let detail = Resource::new(id, async |id_opt| match id_opt {
        Some(id) => get_book(id).await,
        None => Ok(None),
    });

    view! {
        <div id="book-detail" class="p-4">
            <Transition fallback=|| view! { <p>"Loading book..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|res| match res {
                            Ok(Some(book)) => {
                                Either::Left(
                                    view! {
                                        <img
                                            class="mb-4 w-full rounded"
                                            src=book.cover_image
                                            alt=format!("Cover of {}", book.title)
                                        />
                                        <div class="rounded bg-stone-800 p-5 text-stone-100">
                                            <h2 class="text-center text-2xl font-bold">{book.title}</h2>
                                            <p class="text-center">"By: " {book.author}</p>
                                            <p>"Genre: " {book.genre}</p>
                                            <p>"Published Year: " {book.published_year}</p>
                                            <p class="mt-2">{book.description}</p>
                                        </div>
                                    },
                                )
                            }
                            // a missing record and a failed fetch render the same way
                            Ok(None) | Err(_) => {
                                Either::Right(
                                    view! {
                                        <p class="mt-4 text-center text-xl text-red-700">
                                            "Oops! Book not found."
                                        </p>
                                    },
                                )
                            }
                        })
                }}
            </Transition>
        </div>
    }
}
