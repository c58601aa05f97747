//! The user profile screen
//!
//! The account record is read-only; the profile image is client-only state
//! that resets whenever the screen remounts and is never sent to the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::UserProfile;

/// Shown until the user sets their own image url
const DEFAULT_AVATAR: &str =
    "https://i.pinimg.com/736x/34/39/c8/3439c88fc95848798dcc09c6b8de9857.jpg";

#[server]
async fn get_user_profile() -> Result<UserProfile, ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    crate::server::api::get_user_profile(&config)
        .await
        .map_err(|e| {
            tracing::warn!("Failed fetching the user profile from the book service: {e}");
            ServerFnError::new(e.to_string())
        })
}

/// Drop the stored session token
///
/// Token storage is owned by the auth collaborator; this only invokes it by
/// name on logout.
#[server]
async fn clear_session() -> Result<(), ServerFnError> {
    tracing::info!("Clearing user session");
    Ok(())
}

#[component]
pub fn ProfileScreen() -> impl IntoView {
    let profile = Resource::new(|| (), async |_| get_user_profile().await);
    let profile_image = RwSignal::new(DEFAULT_AVATAR.to_string());
    let image_url_ref = NodeRef::new();

    let navigate = use_navigate();
    let on_logout = move |_: web_sys::MouseEvent| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = clear_session().await {
                leptos::logging::log!("Failed to clear the session on logout: {e}");
            }
            navigate("/", Default::default());
        });
    };

    view! {
        <div id="profile-screen" class="p-4">
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div>
                        "Error: failed to load the profile"
                        <ul>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                }
            }>
            <Transition fallback=|| view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|res| match res {
                            Ok(profile) => {
                                Ok(
                                    view! {
                                        <div class="mb-4 flex flex-col items-center rounded-b-3xl bg-stone-800 p-5">
                                            <img
                                                class="mb-2 h-24 w-24 rounded-full"
                                                src=move || profile_image.get()
                                                alt="profile image"
                                            />
                                            <h2 class="text-2xl font-bold text-stone-100">
                                                {profile.name}
                                            </h2>
                                            <p class="text-stone-300">"@" {profile.username}</p>
                                        </div>
                                        <div class="mb-4 rounded bg-white p-4 shadow">
                                            <p class="text-xs text-stone-500">"Email"</p>
                                            <p>{profile.email}</p>
                                        </div>
                                    },
                                )
                            }
                            Err(e) => Err(e),
                        })
                }}
            </Transition>
            </ErrorBoundary>

            // client-only; never persisted, reset on remount
            <label class="mb-2 block">
                "Image URL"
                <input node_ref=image_url_ref type="text" class="w-full rounded border p-2"/>
            </label>
            <button
                class="mb-4 rounded bg-stone-800 px-4 py-2 text-stone-100"
                on:click=move |_| {
                    let url = image_url_ref.get().expect("statically linked to the dom").value();
                    if !url.is_empty() {
                        profile_image.set(url);
                    }
                }
            >
                "Set Profile Picture"
            </button>

            <div class="flex flex-col gap-y-2">
                <A href="/books">
                    <span class="inline-block rounded bg-stone-800 px-4 py-2 text-stone-100">
                        "Manage Books"
                    </span>
                </A>
                <button
                    class="rounded border border-red-700 px-4 py-2 text-red-700"
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
