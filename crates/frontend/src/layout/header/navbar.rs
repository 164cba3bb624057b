use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

#[derive(Clone, Copy)]
struct NavLink {
    to: &'static str,
    label: &'static str,
}

// Single source of truth for nav link labels/routes.
const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        to: "/about",
        label: "About Us",
    },
    NavLink {
        to: "/contact",
        label: "Contact",
    },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (account_open, set_account_open) = signal(false);
    let account_ref = NodeRef::<html::Div>::new();

    // Close the account dropdown when clicking outside of it.
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            let Some(container) = account_ref.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !container.contains(target.as_ref()) {
                set_account_open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    });

    // Only one dropdown is open at a time.
    let toggle_menu = move |_| {
        let next = !menu_open.get_untracked();
        set_menu_open.set(next);
        if next {
            set_account_open.set(false);
        }
    };
    let toggle_account = move |_| {
        let next = !account_open.get_untracked();
        set_account_open.set(next);
        if next {
            set_menu_open.set(false);
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "COVERGARD"
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.to class="navbar__link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <div class="navbar__account" node_ref=account_ref>
                        <button
                            type="button"
                            class="navbar__icon-button"
                            title="Account"
                            aria-haspopup="menu"
                            aria-expanded=move || account_open.get().to_string()
                            on:click=toggle_account
                        >
                            {icon("user")}
                        </button>
                        <Show when=move || account_open.get()>
                            <div class="navbar__dropdown" role="menu">
                                <a
                                    href="/login"
                                    role="menuitem"
                                    class="navbar__dropdown-link"
                                    on:click=move |_| set_account_open.set(false)
                                >
                                    "Login"
                                </a>
                                <a
                                    href="/register"
                                    role="menuitem"
                                    class="navbar__dropdown-link"
                                    on:click=move |_| set_account_open.set(false)
                                >
                                    "Register"
                                </a>
                            </div>
                        </Show>
                    </div>

                    <a href="/cart" class="navbar__icon-button" title="Cart">
                        {icon("cart")}
                    </a>

                    <div class="navbar__mobile">
                        <button
                            type="button"
                            class="navbar__icon-button"
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=toggle_menu
                        >
                            {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="navbar__dropdown" role="menu">
                                {NAV_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.to
                                                class="navbar__dropdown-link"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}
