use leptos::prelude::*;

use crate::shared::components::ui::Button;

/// Sign-in screen. The form is presentational only: nothing submits and no
/// credentials leave the page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (ready, set_ready) = signal(false);
    let (show_password, set_show_password) = signal(false);

    // Play the entry animation after first paint; cancelled if the page
    // unmounts before the frame fires.
    Effect::new(move |_| {
        if let Ok(handle) = request_animation_frame_with_handle(move || set_ready.set(true)) {
            on_cleanup(move || handle.cancel());
        }
    });

    view! {
        <div class="auth">
            <div class="auth__backdrop">
                <div class="auth__glow auth__glow--top"></div>
                <div class="auth__glow auth__glow--bottom"></div>

                <div class="auth__frame">
                    <div class="auth__panel" class=("auth__panel--ready", move || ready.get())>
                        <div class="auth__header">
                            <p class="auth__brand">"Covergard"</p>
                            <h2 class="auth__title">"Sign in"</h2>
                            <p class="auth__subtitle">"Continue with a trusted provider."</p>
                        </div>

                        <div class="auth__providers">
                            <button type="button" class="auth__provider">
                                "Google"
                            </button>
                            <button type="button" class="auth__provider">
                                "Apple"
                            </button>
                            <button type="button" class="auth__provider auth__provider--wide">
                                "Microsoft"
                            </button>
                        </div>

                        <div class="auth__divider">
                            <span class="auth__divider-line"></span>
                            <span class="auth__divider-text">"or email and password"</span>
                            <span class="auth__divider-line"></span>
                        </div>

                        <form class="auth__form" on:submit=|ev| ev.prevent_default()>
                            <div class="field">
                                <label class="field__label field__label--caps" for="email">
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    class="field__input"
                                    autocomplete="email"
                                    placeholder="you@covergard.com"
                                />
                            </div>

                            <div class="field">
                                <label class="field__label field__label--caps" for="password">
                                    "Password"
                                </label>
                                <div class="field__password">
                                    <input
                                        id="password"
                                        name="password"
                                        type=move || {
                                            if show_password.get() { "text" } else { "password" }
                                        }
                                        class="field__input"
                                        autocomplete="current-password"
                                        placeholder="Enter your password"
                                    />
                                    <button
                                        type="button"
                                        class="field__password-toggle"
                                        aria-label=move || {
                                            if show_password.get() {
                                                "Hide password"
                                            } else {
                                                "Show password"
                                            }
                                        }
                                        on:click=move |_| {
                                            set_show_password.update(|show| *show = !*show)
                                        }
                                    >
                                        {move || if show_password.get() { "Hide" } else { "Show" }}
                                    </button>
                                </div>
                            </div>

                            <div class="auth__options">
                                <label class="checkbox">
                                    <input type="checkbox" class="checkbox__input" />
                                    <span class="checkbox__label">"Remember me"</span>
                                </label>
                                <button type="button" class="auth__forgot">
                                    "Forgot password?"
                                </button>
                            </div>

                            <Button button_type="submit" class="auth__submit">
                                "Sign in"
                            </Button>
                        </form>

                        <p class="auth__switch">
                            "Don't have an account? "
                            <a href="/register" class="auth__switch-link">
                                "Create one"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
