use catalog::Product;
use leptos::prelude::*;

use crate::shared::format::{format_price, format_rating};
use crate::shared::image_fallback::FallbackImage;

/// One card in a carousel row; the whole card links to the detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let image = product
        .primary_image()
        .unwrap_or(catalog::IMAGE_FALLBACK)
        .to_string();
    let stock_class = if product.in_stock {
        "product-card__stock product-card__stock--in"
    } else {
        "product-card__stock product-card__stock--out"
    };
    let stock_text = if product.in_stock {
        "In stock"
    } else {
        "Back soon"
    };

    view! {
        <a href=href class="product-card">
            <article class="product-card__body">
                <div class="product-card__media">
                    <FallbackImage
                        src=image
                        alt=product.name.clone()
                        class="product-card__image"
                    />
                    <span class="product-card__category">{product.category.clone()}</span>
                </div>

                <div class="product-card__content">
                    <h3 class="product-card__name">{product.name.clone()}</h3>
                    <p class="product-card__material">{product.material.clone()}</p>
                    <div class="product-card__chips">
                        <span class="chip chip--muted">{format!("{} Fit", product.fit)}</span>
                        <span class="chip chip--accent">{product.weather.as_str()}</span>
                    </div>
                    <div class="product-card__meta">
                        <p class="product-card__price">{format_price(product.price)}</p>
                        <p class="product-card__rating">
                            {format!("{} \u{2605}", format_rating(product.rating))}
                        </p>
                    </div>
                    <p class=stock_class>{stock_text}</p>
                </div>
            </article>
        </a>
    }
}
