use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::reveal::observe_reveals;

/// Contact form. Submission is left to the browser's native validation;
/// nothing is sent anywhere.
#[component]
pub fn ContactPage() -> impl IntoView {
    observe_reveals();

    view! {
        <main class="contact">
            <section class="contact__hero">
                <div class="contact__hero-inner">
                    <h1
                        class="contact__headline reveal"
                        data-reveal=""
                        style="--reveal-delay: 200ms"
                    >
                        "Get in Touch"
                    </h1>
                    <p class="contact__lead reveal" data-reveal="" style="--reveal-delay: 250ms">
                        "Fill out the form below to send us your query. We'll respond as soon as possible."
                    </p>
                </div>
            </section>

            <section class="contact__form-section">
                <div
                    class="contact__panel reveal"
                    data-reveal=""
                    style="--reveal-delay: 300ms"
                >
                    <form class="contact__form" on:submit=|ev| ev.prevent_default()>
                        <div class="field">
                            <label class="field__label" for="name">
                                "Name"
                            </label>
                            <input
                                id="name"
                                type="text"
                                class="field__input"
                                placeholder="Your Name"
                            />
                        </div>

                        <div class="field">
                            <label class="field__label" for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                class="field__input"
                                placeholder="you@example.com"
                            />
                        </div>

                        <div class="field">
                            <label class="field__label" for="subject">
                                "Subject"
                            </label>
                            <input
                                id="subject"
                                type="text"
                                class="field__input"
                                placeholder="Subject of your query"
                            />
                        </div>

                        <div class="field">
                            <label class="field__label" for="message">
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                class="field__input field__input--textarea"
                                rows="6"
                                placeholder="Write your message..."
                            ></textarea>
                        </div>

                        <Button button_type="submit" class="contact__submit">
                            "Send Message"
                        </Button>
                    </form>
                </div>
            </section>
        </main>
    }
}
