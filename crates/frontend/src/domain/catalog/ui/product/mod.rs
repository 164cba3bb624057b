use catalog::{product_by_id, related_products, Product, ProductId, IMAGE_FALLBACK};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::components::ui::Button;
use crate::shared::format::{format_price, format_rating};
use crate::shared::image_fallback::FallbackImage;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    // Unknown or non-numeric ids resolve to None and render the not-found
    // view; nothing on this page can panic on a bad URL.
    let product = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|segment| ProductId::parse(&segment))
            .and_then(product_by_id)
    });

    // Thumbnail override for the gallery; cleared whenever the route points
    // at a different product.
    let selected_image = RwSignal::new(None::<String>);
    Effect::new(move |_| {
        let _ = product.get();
        selected_image.set(None);
    });

    view! {
        {move || match product.get() {
            Some(found) => {
                view! { <ProductDetails product=found selected_image=selected_image /> }
                    .into_any()
            }
            None => view! { <ProductNotFound /> }.into_any(),
        }}
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <main class="status-page">
            <div class="status-page__panel">
                <h1 class="status-page__title">"Product not found"</h1>
                <a href="/" class="button button--primary">
                    "Back Home"
                </a>
            </div>
        </main>
    }
}

#[component]
fn ProductDetails(
    product: &'static Product,
    selected_image: RwSignal<Option<String>>,
) -> impl IntoView {
    let main_image = Signal::derive(move || {
        selected_image.get().unwrap_or_else(|| {
            product
                .primary_image()
                .unwrap_or(IMAGE_FALLBACK)
                .to_string()
        })
    });

    let stock_chip_class = if product.in_stock {
        "chip chip--accent"
    } else {
        "chip chip--muted"
    };

    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <main class="product-page">
            <section class="product-page__inner">
                <div class="product-page__back">
                    <Button variant="ghost" on_click=Callback::new(go_back)>
                        "\u{2190} Back"
                    </Button>
                </div>

                <div class="product-page__layout">
                    <div class="product-page__gallery">
                        <div class="product-page__media">
                            <FallbackImage
                                src=main_image
                                alt=product.name.clone()
                                class="product-page__image"
                            />
                            <span class="product-page__category">{product.category.clone()}</span>
                        </div>

                        <div class="product-page__thumbs">
                            <For
                                each=move || product.images.clone()
                                key=|image| image.clone()
                                children=move |image: String| {
                                    let for_select = image.clone();
                                    let for_active = image.clone();
                                    let is_active = move || main_image.get() == for_active;
                                    view! {
                                        <button
                                            type="button"
                                            class="product-page__thumb"
                                            class=("product-page__thumb--active", is_active)
                                            on:click=move |_| {
                                                selected_image.set(Some(for_select.clone()))
                                            }
                                        >
                                            <FallbackImage
                                                src=image
                                                alt=product.name.clone()
                                                class="product-page__thumb-image"
                                            />
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="product-page__details">
                        <div>
                            <p class="product-page__section-tag">{product.section.id()}</p>
                            <h1 class="product-page__name">{product.name.clone()}</h1>
                            <p class="product-page__blurb">
                                "Premium outdoor protection engineered with reinforced seams, high-grade materials and all-weather durability for year-round performance."
                            </p>
                        </div>

                        <div class="product-page__price-row">
                            <span class="product-page__price">{format_price(product.price)}</span>
                            <span class=stock_chip_class>{product.stock_label()}</span>
                        </div>

                        <div class="product-page__actions">
                            <a href="/register" class="button button--primary">
                                "Buy Now"
                            </a>
                            <a href="/#specials" class="button button--outline">
                                "Custom Quote"
                            </a>
                            <a href="/cart" class="button button--primary">
                                "Add to Cart"
                            </a>
                        </div>

                        <div class="product-page__specs">
                            <h2 class="product-page__specs-title">"Specifications"</h2>
                            <SpecRow label="Material" value=product.material.clone() />
                            <SpecRow label="Fit Type" value=product.fit.as_str().to_string() />
                            <SpecRow
                                label="Weather Grade"
                                value=product.weather.as_str().to_string()
                            />
                            <SpecRow
                                label="Customer Rating"
                                value=format!("{} / 5", format_rating(product.rating))
                            />
                        </div>
                    </div>
                </div>
            </section>

            <RelatedProducts product=product />
        </main>
    }
}

#[component]
fn SpecRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="spec-row">
            <span class="spec-row__label">{label}</span>
            <span class="spec-row__value">{value}</span>
        </div>
    }
}

#[component]
fn RelatedProducts(product: &'static Product) -> impl IntoView {
    let related = related_products(product);

    view! {
        <section class="related">
            <div class="related__header">
                <h2 class="related__title">"You May Also Like"</h2>
                <a href="/#catalog" class="related__link">
                    "View Catalog"
                </a>
            </div>

            <div class="related__grid">
                {related
                    .into_iter()
                    .map(|item| {
                        let href = format!("/products/{}", item.id);
                        let image = item
                            .primary_image()
                            .unwrap_or(IMAGE_FALLBACK)
                            .to_string();
                        view! {
                            <a href=href class="related-card">
                                <div class="related-card__media">
                                    <FallbackImage
                                        src=image
                                        alt=item.name.clone()
                                        class="related-card__image"
                                    />
                                </div>
                                <div class="related-card__content">
                                    <h3 class="related-card__name">{item.name.clone()}</h3>
                                    <div class="related-card__meta">
                                        <span class="related-card__price">
                                            {format_price(item.price)}
                                        </span>
                                        <span class="related-card__rating">
                                            {format!("{} \u{2605}", format_rating(item.rating))}
                                        </span>
                                    </div>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
