//! The book management screen
//!
//! Three small state machines cooperate here: the shared [`CatalogStore`]
//! caching the list, one [`EditSession`] for the add/edit form, and one
//! [`DeleteFlow`] guarding the delete endpoint behind a confirmation prompt.
//! The machines are pure; this module wires them to the server functions and
//! the DOM.

// route paths
// /books
//      /:id

use leptos::ev::keydown;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_use::{use_document, use_event_listener};

use crate::app::notice::{Notice, NoticeBoard};
use crate::shared::{Book, BookFields};

pub mod catalog;
pub mod delete;
pub mod detail;
pub mod session;

use catalog::CatalogStore;
use delete::DeleteFlow;
use session::{EditMode, EditSession, Field, SubmitBlocked};

// include tests
#[cfg(test)]
mod test;

#[server]
pub async fn list_books() -> Result<Vec<Book>, ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    crate::server::api::list_books(&config).await.map_err(|e| {
        tracing::warn!("Failed fetching books from the book service: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[server]
async fn create_book(fields: BookFields) -> Result<Book, ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    crate::server::api::create_book(&config, &fields)
        .await
        .map_err(|e| {
            tracing::warn!("Failed creating a book on the book service: {e}");
            ServerFnError::new(e.to_string())
        })
}

#[server]
async fn update_book(id: String, fields: BookFields) -> Result<Book, ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    crate::server::api::update_book(&config, &id, &fields)
        .await
        .map_err(|e| {
            tracing::warn!("Failed updating book {id} on the book service: {e}");
            ServerFnError::new(e.to_string())
        })
}

#[server]
async fn delete_book(id: String) -> Result<(), ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    crate::server::api::delete_book(&config, &id)
        .await
        .map_err(|e| {
            tracing::warn!("Failed deleting book {id} on the book service: {e}");
            ServerFnError::new(e.to_string())
        })
}

/// Full refresh of the shared catalog, with the loading flag held around the call
///
/// A failed fetch leaves the cached collection untouched; the error only shows
/// up on the notice board.
pub async fn refresh_catalog(catalog: RwSignal<CatalogStore>, notices: RwSignal<NoticeBoard>) {
    catalog.update(|c| c.begin_refresh());
    let outcome = list_books().await.map_err(|e| e.to_string());
    let notice = catalog.try_update(|c| c.finish_refresh(outcome)).flatten();
    if let Some(notice) = notice {
        notices.update(|b| b.push(notice));
    }
}

#[component]
pub fn BookScreen() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogStore>>();
    let notices = expect_context::<RwSignal<NoticeBoard>>();
    let session = RwSignal::new(EditSession::default());
    let delete_flow = RwSignal::new(DeleteFlow::default());

    // populate the catalog on mount; later refreshes happen after mutations
    Effect::new(move |_| {
        spawn_local(refresh_catalog(catalog, notices));
    });

    // <esc> - dismiss the confirmation prompt, or the form if no prompt is up
    let _cleanup = use_event_listener(use_document(), keydown, move |evt| {
        if evt.key_code() == 27 {
            if delete_flow.with(|f| f.pending().is_some()) {
                delete_flow.update(|f| f.cancel());
            } else if session.with(|s| s.is_open()) {
                session.update(|s| s.cancel());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match session.write().begin_submit() {
            Ok(request) => {
                spawn_local(async move {
                    let outcome = match request.mode.clone() {
                        EditMode::Create => create_book(request.fields).await,
                        EditMode::Edit(id) => update_book(id, request.fields).await,
                    };
                    match outcome {
                        Ok(_) => {
                            session.update(|s| s.finish_submit(true));
                            notices.update(|b| {
                                b.push(Notice::success(match request.mode {
                                    EditMode::Create => "Book created successfully",
                                    EditMode::Edit(_) => "Book updated successfully",
                                }))
                            });
                            refresh_catalog(catalog, notices).await;
                        }
                        Err(e) => {
                            // session stays open with the draft intact
                            session.update(|s| s.finish_submit(false));
                            notices.update(|b| b.push(Notice::error(e.to_string())));
                        }
                    }
                });
            }
            Err(SubmitBlocked::Invalid(e)) => {
                notices.update(|b| b.push(Notice::error(e.to_string())));
            }
            // the save button is disabled while in flight
            Err(SubmitBlocked::InFlight) | Err(SubmitBlocked::NotOpen) => {}
        }
    };

    let on_confirm_delete = move |_: web_sys::MouseEvent| {
        let Some(id) = delete_flow.write().confirm() else {
            return;
        };
        spawn_local(async move {
            match delete_book(id).await {
                Ok(()) => {
                    notices.update(|b| b.push(Notice::success("Book deleted successfully")));
                    refresh_catalog(catalog, notices).await;
                }
                // no refresh: the catalog still matches server truth
                Err(e) => notices.update(|b| b.push(Notice::error(e.to_string()))),
            }
        });
    };

    view! {
        <div id="book-screen" class="p-4">
            <button
                id="add-book-button"
                class="mb-4 rounded bg-stone-800 px-4 py-2 text-stone-100"
                on:click=move |_| session.update(|s| s.open_create())
            >
                "Add New Book"
            </button>

            <Show when=move || catalog.with(|c| c.is_loading())>
                <p>"Loading books..."</p>
            </Show>

            <ul id="book-list" class="flex flex-col gap-y-4">
                {move || {
                    catalog
                        .with(|c| c.books().to_vec())
                        .into_iter()
                        .map(|book| {
                            let detail_href = format!("/books/{}", book.id);
                            let delete_id = book.id.clone();
                            let edit_target = book.clone();
                            view! {
                                <li class="rounded bg-white p-4 shadow">
                                    <A href=detail_href>
                                        <h3 class="text-lg font-bold">{book.title}</h3>
                                    </A>
                                    <p>"Author: " {book.author}</p>
                                    <p>"Genre: " {book.genre}</p>
                                    <p>"Description: " {book.description}</p>
                                    <div class="mt-2 flex gap-x-2">
                                        <button on:click=move |_| {
                                            session.update(|s| s.open_edit(&edit_target))
                                        }>"Edit"</button>
                                        <button on:click=move |_| {
                                            delete_flow.update(|f| f.request(delete_id.clone()))
                                        }>"Delete"</button>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            // the add/edit form, rendered while a session is open
            <Show when=move || session.with(|s| s.is_open())>
                <div
                    id="book-form-overlay"
                    class="fixed inset-0 flex items-center justify-center bg-black/50"
                >
                    <form
                        class="flex w-full max-w-lg flex-col gap-y-4 rounded bg-white p-6"
                        on:submit=on_submit
                    >
                        <div class="flex items-center justify-between">
                            <h2 class="text-xl font-bold">
                                {move || {
                                    if session.with(|s| s.is_editing()) {
                                        "Edit Book"
                                    } else {
                                        "Add New Book"
                                    }
                                }}
                            </h2>
                            <button type="button" on:click=move |_| session.update(|s| s.cancel())>
                                "✕"
                            </button>
                        </div>
                        <label>
                            "Title *"
                            <input
                                type="text"
                                class="w-full rounded border p-2"
                                prop:value=move || session.with(|s| s.field(Field::Title))
                                on:input=move |ev| {
                                    session.update(|s| s.set_field(Field::Title, event_target_value(&ev)))
                                }
                            />
                        </label>
                        <label>
                            "Author *"
                            <input
                                type="text"
                                class="w-full rounded border p-2"
                                prop:value=move || session.with(|s| s.field(Field::Author))
                                on:input=move |ev| {
                                    session.update(|s| s.set_field(Field::Author, event_target_value(&ev)))
                                }
                            />
                        </label>
                        <label>
                            "Description *"
                            <textarea
                                class="w-full rounded border p-2"
                                rows="4"
                                prop:value=move || session.with(|s| s.field(Field::Description))
                                on:input=move |ev| {
                                    session
                                        .update(|s| {
                                            s.set_field(Field::Description, event_target_value(&ev))
                                        })
                                }
                            ></textarea>
                        </label>
                        <label>
                            "Genre *"
                            <input
                                type="text"
                                class="w-full rounded border p-2"
                                prop:value=move || session.with(|s| s.field(Field::Genre))
                                on:input=move |ev| {
                                    session.update(|s| s.set_field(Field::Genre, event_target_value(&ev)))
                                }
                            />
                        </label>
                        <div class="flex justify-evenly gap-x-4">
                            <button
                                type="button"
                                class="flex-1 rounded border px-4 py-2"
                                on:click=move |_| session.update(|s| s.cancel())
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="flex-1 rounded bg-stone-800 px-4 py-2 text-stone-100"
                                disabled=move || session.with(|s| s.is_submitting())
                            >
                                {move || {
                                    if session.with(|s| s.is_submitting()) { "Saving..." } else { "Save" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            // the destructive-action guard
            <Show when=move || delete_flow.with(|f| f.pending().is_some())>
                <div
                    id="delete-confirm-overlay"
                    class="fixed inset-0 flex items-center justify-center bg-black/50"
                >
                    <div class="flex w-full max-w-sm flex-col gap-y-4 rounded bg-white p-6">
                        <h2 class="text-xl font-bold">"Delete Book"</h2>
                        <p>"Are you sure you want to delete this book?"</p>
                        <div class="flex justify-evenly gap-x-4">
                            <button
                                class="flex-1 rounded border px-4 py-2"
                                on:click=move |_| delete_flow.update(|f| f.cancel())
                            >
                                "Cancel"
                            </button>
                            <button
                                class="flex-1 rounded bg-red-700 px-4 py-2 text-white"
                                on:click=on_confirm_delete
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
