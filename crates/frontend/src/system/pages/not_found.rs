use leptos::prelude::*;

/// Fallback view for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="status-page">
            <div class="status-page__panel status-page__panel--wide">
                <h1 class="status-page__code">"Error 404"</h1>
                <h2 class="status-page__title">"Page Not Found"</h2>
                <p class="status-page__blurb">
                    "The page you are looking for does not exist. It might have been removed, had its name changed, or is temporarily unavailable."
                </p>
                <a href="/" class="button button--primary">
                    "\u{2190} Back to Home"
                </a>
            </div>
        </main>
    }
}
