use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};

pub mod books;
mod home;
pub mod notice;
mod profile;

use books::catalog::CatalogStore;
use notice::{NoticeBoard, NoticeBoardView};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // the catalog cache, shared read-only by the home and book screens; all
    // writes go through the refresh path in [`books`]
    let catalog = RwSignal::new(CatalogStore::new());
    provide_context(catalog);

    // one notice board for the whole app
    let notices = RwSignal::new(NoticeBoard::default());
    provide_context(notices);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bookshelf.css"/>

        // sets the document title
        <Title text="bookshelf - manage your books"/>

        // Router
        <Router>
            <nav class="flex gap-x-4 p-4">
                <a href="/">"Home"</a>
                <a href="/books">"Books"</a>
                <a href="/profile">"Profile"</a>
            </nav>
            <main>
                <NoticeBoardView/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=home::HomePage/>
                    <Route path=path!("/books") view=books::BookScreen/>
                    <Route path=path!("/books/:id") view=books::detail::BookDetailScreen/>
                    <Route path=path!("/profile") view=profile::ProfileScreen/>
                </Routes>
            </main>
        </Router>
    }
}
