pub mod state;

mod carousel;
mod filters;
mod product_card;
mod specials;

use catalog::{snapshot, HERO_IMAGE, SECTION_META};
use leptos::prelude::*;

use self::carousel::SectionCarousel;
use self::filters::FilterSidebar;
use self::specials::SpecialsSection;
use self::state::{create_filter_state, matching_products};
use crate::shared::image_fallback::FallbackImage;
use crate::shared::reveal::observe_reveals;

#[component]
pub fn HomePage() -> impl IntoView {
    observe_reveals();

    let spec = create_filter_state();
    let matching = matching_products(spec);
    let mobile_filters_open = RwSignal::new(false);

    let restriction_badge = move || {
        let count = spec.with(|s| s.restriction_count(snapshot()));
        (count > 0).then(|| view! { <span class="badge">{count}</span> })
    };

    view! {
        <main class="home">
            <Hero />

            <section id="catalog" class="home__catalog">
                <div class="home__filter-toggle">
                    <button
                        type="button"
                        class="home__filter-toggle-button"
                        aria-expanded=move || mobile_filters_open.get().to_string()
                        aria-controls="catalog-filters-panel"
                        on:click=move |_| mobile_filters_open.update(|open| *open = !*open)
                    >
                        <span>"Advanced Filters"</span>
                        {restriction_badge}
                    </button>
                </div>

                <FilterSidebar spec=spec mobile_open=mobile_filters_open />

                <div class="home__sections">
                    {SECTION_META
                        .iter()
                        .enumerate()
                        .map(|(index, meta)| {
                            let section = meta.section;
                            let products = Signal::derive(move || {
                                matching
                                    .get()
                                    .into_iter()
                                    .filter(|product| product.section == section)
                                    .collect::<Vec<_>>()
                            });
                            view! {
                                <div
                                    class="reveal"
                                    data-reveal=""
                                    style=format!("--reveal-delay: {}ms", 120 * (index + 1))
                                >
                                    <SectionCarousel
                                        title=meta.title
                                        description=meta.description
                                        products=products
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <SpecialsSection />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <article class="hero__pitch reveal" data-reveal="">
                    <p class="hero__eyebrow">"CoverGard Outdoor Collection"</p>
                    <h1 class="hero__headline">
                        "Patio and Gas Braai Covers Built to Fit and Last"
                    </h1>
                    <p class="hero__blurb">
                        "Protect every outdoor setup with weather-tested covers for patio furniture, braais, benches, and more. Filter quickly, browse by collection, and order with confidence."
                    </p>
                    <div class="hero__cta">
                        <a href="#catalog" class="button button--primary">
                            "Shop Covers"
                        </a>
                    </div>

                    <div class="hero__stats">
                        <div class="hero__stat">
                            <p class="hero__stat-value">"3000+"</p>
                            <p class="hero__stat-label">"Covers Delivered"</p>
                        </div>
                        <div class="hero__stat">
                            <p class="hero__stat-value">"48h"</p>
                            <p class="hero__stat-label">"Fast Dispatch"</p>
                        </div>
                        <div class="hero__stat">
                            <p class="hero__stat-value">"5yr"</p>
                            <p class="hero__stat-label">"UV Fade Warranty"</p>
                        </div>
                    </div>
                </article>

                <article
                    class="hero__showcase reveal"
                    data-reveal=""
                    style="--reveal-delay: 110ms"
                >
                    <FallbackImage
                        src=HERO_IMAGE.to_string()
                        alt="Outdoor patio setup with protective covers"
                        class="hero__image"
                    />
                    <div class="hero__cards">
                        <div class="hero__card">
                            <p class="hero__card-eyebrow">"Best Seller"</p>
                            <p class="hero__card-title">"Gas Braai Series X Cover"</p>
                            <p class="hero__card-blurb">"Heat-safe lining and storm straps."</p>
                        </div>
                        <div class="hero__card">
                            <p class="hero__card-eyebrow">"New Fabric"</p>
                            <p class="hero__card-title">"ProWeave 650D"</p>
                            <p class="hero__card-blurb">"Higher tear resistance for patios."</p>
                        </div>
                        <div class="hero__card hero__card--wide">
                            "Tailored sizing support available in-store for odd-shaped patio suites and corner braai units."
                        </div>
                    </div>
                </article>
            </div>
        </section>
    }
}
