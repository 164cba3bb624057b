use leptos::prelude::*;

use crate::shared::components::ui::Button;

/// Account-creation screen; presentational only, the submit is prevented.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let (ready, set_ready) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (show_confirm, set_show_confirm) = signal(false);

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

                <div class="auth__frame auth__frame--wide">
                    <div class="auth__panel" class=("auth__panel--ready", move || ready.get())>
                        <div class="auth__header">
                            <p class="auth__brand">"Covergard"</p>
                            <h2 class="auth__title">"Create your account"</h2>
                            <p class="auth__subtitle">"Set up your account in seconds."</p>
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
                                        autocomplete="new-password"
                                        placeholder="Create a password"
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

                            <div class="field">
                                <label
                                    class="field__label field__label--caps"
                                    for="confirm-password"
                                >
                                    "Confirm password"
                                </label>
                                <div class="field__password">
                                    <input
                                        id="confirm-password"
                                        name="confirmPassword"
                                        type=move || {
                                            if show_confirm.get() { "text" } else { "password" }
                                        }
                                        class="field__input"
                                        autocomplete="new-password"
                                        placeholder="Re-enter password"
                                    />
                                    <button
                                        type="button"
                                        class="field__password-toggle"
                                        aria-label=move || {
                                            if show_confirm.get() {
                                                "Hide password"
                                            } else {
                                                "Show password"
                                            }
                                        }
                                        on:click=move |_| {
                                            set_show_confirm.update(|show| *show = !*show)
                                        }
                                    >
                                        {move || if show_confirm.get() { "Hide" } else { "Show" }}
                                    </button>
                                </div>
                            </div>

                            <label class="checkbox auth__terms">
                                <input type="checkbox" class="checkbox__input" />
                                <span class="checkbox__label">
                                    "I agree to the "
                                    <a href="/terms" class="auth__switch-link">
                                        "terms and conditions"
                                    </a>
                                    " and "
                                    <a href="/privacy" class="auth__switch-link">
                                        "privacy policy."
                                    </a>
                                </span>
                            </label>

                            <Button button_type="submit" class="auth__submit">
                                "Create account"
                            </Button>
                        </form>

                        <p class="auth__switch">
                            "Already have an account? "
                            <a href="/login" class="auth__switch-link">
                                "Sign in"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
