use leptos::prelude::*;

use crate::shared::image_fallback::FallbackImage;
use crate::shared::reveal::observe_reveals;

const ABOUT_HERO_IMAGE: &str = "https://picsum.photos/seed/covergard-about/1400/1000";
const ABOUT_STORY_IMAGE: &str = "https://picsum.photos/seed/covergard-story/800/600";

struct ProcessStep {
    title: &'static str,
    description: &'static str,
    glyph: &'static str,
}

const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        title: "Custom Fit",
        description: "Choose the perfect size for your patio furniture, braai, or lounge set, ensuring a snug and secure fit.",
        glyph: "\u{1F3AF}",
    },
    ProcessStep {
        title: "Weather-Tested Materials",
        description: "Our fabrics resist UV, rain, and extreme temperatures to protect your investment year-round.",
        glyph: "\u{2600}\u{FE0F}",
    },
    ProcessStep {
        title: "Easy Care & Durable",
        description: "Covers are easy to clean, fold, and store, built to last multiple seasons without fading or tearing.",
        glyph: "\u{1F6E0}\u{FE0F}",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    observe_reveals();

    view! {
        <main class="about">
            <section class="about__hero">
                <div class="about__hero-inner">
                    <div class="about__hero-copy reveal" data-reveal="">
                        <h1 class="about__headline">"About Covergard"</h1>
                        <p class="about__lead">
                            "At Covergard, we provide durable, weather-resistant covers for every outdoor setup. From patios and lounges to gas braais and benches, our products are tailored to protect and last."
                        </p>
                        <p class="about__lead">
                            "Our mission is simple: deliver high-quality protective covers that combine functionality with sleek design."
                        </p>
                    </div>
                    <div
                        class="about__hero-media reveal"
                        data-reveal=""
                        style="--reveal-delay: 100ms"
                    >
                        <FallbackImage
                            src=ABOUT_HERO_IMAGE.to_string()
                            alt="CoverGard team and products"
                            class="about__hero-image"
                        />
                    </div>
                </div>
            </section>

            <section class="about__stats reveal" data-reveal="" style="--reveal-delay: 150ms">
                <div class="about__stat">
                    <p class="about__stat-value">"3000+"</p>
                    <p class="about__stat-label">"Covers Delivered"</p>
                </div>
                <div class="about__stat">
                    <p class="about__stat-value">"48h"</p>
                    <p class="about__stat-label">"Fast Dispatch"</p>
                </div>
                <div class="about__stat">
                    <p class="about__stat-value">"5yr"</p>
                    <p class="about__stat-label">"UV Fade Warranty"</p>
                </div>
            </section>

            <section class="about__story">
                <div class="about__story-copy reveal" data-reveal="" style="--reveal-delay: 200ms">
                    <h2 class="about__section-title">"Our Story"</h2>
                    <p>
                        "Covergard started with a simple idea: outdoor furniture and equipment deserved protection that didn't compromise on style. Over the years, we have refined our materials, stitching, and coatings to withstand South Africa's diverse weather conditions."
                    </p>
                    <p>
                        "Today, thousands of homes trust CoverGard for durability, fit, and elegance."
                    </p>
                </div>
                <div
                    class="about__story-media reveal"
                    data-reveal=""
                    style="--reveal-delay: 250ms"
                >
                    <FallbackImage
                        src=ABOUT_STORY_IMAGE.to_string()
                        alt="CoverGard story image"
                        class="about__story-image"
                    />
                </div>
            </section>

            <section class="about__process">
                <h2
                    class="about__section-title reveal"
                    data-reveal=""
                    style="--reveal-delay: 300ms"
                >
                    "How It Works"
                </h2>
                <p class="about__process-lead reveal" data-reveal="" style="--reveal-delay: 320ms">
                    "From design to delivery, every Covergard product is crafted to protect your outdoor spaces. Our covers undergo rigorous testing for weather resistance, UV protection, and durability."
                </p>
                <div class="about__process-grid">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div
                                    class="about__process-card reveal"
                                    data-reveal=""
                                    style=format!("--reveal-delay: {}ms", 350 + index * 50)
                                >
                                    <div class="about__process-glyph">{step.glyph}</div>
                                    <h3 class="about__process-title">{step.title}</h3>
                                    <p class="about__process-description">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about__cta">
                <h2
                    class="about__section-title reveal"
                    data-reveal=""
                    style="--reveal-delay: 400ms"
                >
                    "Protect Your Outdoor Spaces Today"
                </h2>
                <p class="reveal" data-reveal="" style="--reveal-delay: 450ms">
                    "Explore our full range of custom-fit covers for patios, braais, benches, and more."
                </p>
                <a
                    href="/"
                    class="button button--primary reveal"
                    data-reveal=""
                    style="--reveal-delay: 500ms"
                >
                    "Shop our Catalog Today"
                </a>
            </section>
        </main>
    }
}
