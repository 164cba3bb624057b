use crate::domain::cart::ui::CartPage;
use crate::domain::catalog::ui::home::HomePage;
use crate::domain::catalog::ui::product::ProductPage;
use crate::layout::footer::Footer;
use crate::layout::header::Navbar;
use crate::system::pages::{
    AboutPage, ContactPage, LoginPage, NotFoundPage, PolicyKind, PolicyPage, RegisterPage,
};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Auth pages render without the store footer.
const HIDE_FOOTER_PATHS: [&str; 2] = ["/login", "/register"];

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <div class="page-offset">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products/:id") view=ProductPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route
                        path=path!("/terms")
                        view=|| view! { <PolicyPage kind=PolicyKind::Terms /> }
                    />
                    <Route
                        path=path!("/privacy")
                        view=|| view! { <PolicyPage kind=PolicyKind::Privacy /> }
                    />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
                <FooterSlot />
            </div>
        </Router>
    }
}

/// The footer follows every routed page except the auth screens.
#[component]
fn FooterSlot() -> impl IntoView {
    let location = use_location();
    let show_footer =
        move || !HIDE_FOOTER_PATHS.contains(&location.pathname.get().as_str());

    view! {
        <Show when=show_footer>
            <Footer />
        </Show>
    }
}
