use catalog::{product_by_id, CartLine, CartTotals, ProductId, IMAGE_FALLBACK};
use leptos::prelude::*;

use crate::shared::format::{format_amount, format_price};
use crate::shared::image_fallback::FallbackImage;

/// Seeded demo lines; the cart is in-memory only and intentionally not
/// persisted anywhere.
fn seeded_lines() -> Vec<CartLine> {
    vec![
        CartLine::new(ProductId(1), 2),
        CartLine::new(ProductId(4), 1),
        CartLine::new(ProductId(7), 3),
    ]
}

#[component]
pub fn CartPage() -> impl IntoView {
    let lines = RwSignal::new(seeded_lines());
    let totals = Memo::new(move |_| lines.with(|all| CartTotals::compute(all)));

    let set_quantity = move |id: ProductId, quantity: u32| {
        lines.update(|all| {
            if let Some(line) = all.iter_mut().find(|line| line.product_id == id) {
                line.quantity = quantity.max(1);
            }
        });
    };

    let remove_line = move |id: ProductId| {
        lines.update(|all| all.retain(|line| line.product_id != id));
    };

    // Lines whose product no longer resolves are skipped in rendering; the
    // totals ignore them too.
    let visible_lines = move || {
        lines
            .get()
            .into_iter()
            .filter(|line| product_by_id(line.product_id).is_some())
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || lines.with(|all| !all.is_empty())
            fallback=|| {
                view! {
                    <main class="status-page">
                        <div class="status-page__panel">
                            <h1 class="status-page__title">"Your cart is empty"</h1>
                            <a href="/" class="button button--primary">
                                "Continue Shopping"
                            </a>
                        </div>
                    </main>
                }
            }
        >
            <main class="cart-page">
                <section class="cart-page__inner">
                    <h1 class="cart-page__title">"Your Shopping Cart"</h1>

                    <div class="cart-page__layout">
                        <div class="cart-page__items">
                            <For
                                each=visible_lines
                                key=|line| line.product_id
                                children=move |line: CartLine| {
                                    let Some(product) = product_by_id(line.product_id) else {
                                        return ().into_any();
                                    };
                                    let id = line.product_id;
                                    let quantity = Signal::derive(move || {
                                        lines.with(|all| {
                                            all.iter()
                                                .find(|l| l.product_id == id)
                                                .map(|l| l.quantity)
                                                .unwrap_or(1)
                                        })
                                    });
                                    let image = product
                                        .primary_image()
                                        .unwrap_or(IMAGE_FALLBACK)
                                        .to_string();
                                    view! {
                                        <div class="cart-line">
                                            <div class="cart-line__media">
                                                <FallbackImage
                                                    src=image
                                                    alt=product.name.clone()
                                                    class="cart-line__image"
                                                />
                                            </div>
                                            <div class="cart-line__body">
                                                <div>
                                                    <h2 class="cart-line__name">
                                                        {product.name.clone()}
                                                    </h2>
                                                    <p class="cart-line__category">
                                                        {product.category.clone()}
                                                    </p>
                                                    <p class="cart-line__price">
                                                        {format!(
                                                            "{} each",
                                                            format_price(product.price),
                                                        )}
                                                    </p>
                                                </div>
                                                <div class="cart-line__controls">
                                                    <div class="quantity">
                                                        <button
                                                            type="button"
                                                            class="quantity__step"
                                                            on:click=move |_| {
                                                                let current = quantity
                                                                    .get_untracked();
                                                                set_quantity(
                                                                    id,
                                                                    current.saturating_sub(1),
                                                                );
                                                            }
                                                        >
                                                            "-"
                                                        </button>
                                                        <span class="quantity__value">
                                                            {move || quantity.get()}
                                                        </span>
                                                        <button
                                                            type="button"
                                                            class="quantity__step"
                                                            on:click=move |_| {
                                                                let current = quantity
                                                                    .get_untracked();
                                                                set_quantity(id, current + 1);
                                                            }
                                                        >
                                                            "+"
                                                        </button>
                                                    </div>
                                                    <button
                                                        type="button"
                                                        class="cart-line__remove"
                                                        on:click=move |_| remove_line(id)
                                                    >
                                                        "Remove"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                        .into_any()
                                }
                            />
                        </div>

                        <div class="cart-summary">
                            <div class="cart-summary__body">
                                <h2 class="cart-summary__title">"Order Summary"</h2>

                                <div class="cart-summary__row">
                                    <span>"Subtotal"</span>
                                    <span>{move || format_amount(totals.get().subtotal)}</span>
                                </div>

                                <div class="cart-summary__notes">
                                    <h3 class="cart-summary__notes-title">"Delivery & Notes"</h3>
                                    <ul class="cart-summary__notes-list">
                                        <li>
                                            "Free standard delivery on orders over $100; $15 otherwise."
                                        </li>
                                        <li>"Shipping: 2-5 business days with tracking."</li>
                                        <li>
                                            "Returns within 30 days (unused, original packaging)."
                                        </li>
                                        <li>"Special instructions can be added at checkout."</li>
                                    </ul>
                                </div>

                                <div class="cart-summary__totals">
                                    <h3 class="cart-summary__notes-title">"Delivery & VAT"</h3>
                                    <div class="cart-summary__row">
                                        <span>"Delivery Fee"</span>
                                        <span>
                                            {move || format_amount(totals.get().delivery_fee)}
                                        </span>
                                    </div>
                                    <div class="cart-summary__row">
                                        <span>"VAT (15%)"</span>
                                        <span>{move || format_amount(totals.get().vat)}</span>
                                    </div>
                                    <div class="cart-summary__row cart-summary__row--total">
                                        <span>"Total"</span>
                                        <span>{move || format_amount(totals.get().total)}</span>
                                    </div>
                                </div>
                            </div>

                            <div class="cart-summary__actions">
                                <a href="" class="button button--primary">
                                    "Proceed to Checkout"
                                </a>
                                <a href="/" class="cart-summary__continue">
                                    "Continue Shopping"
                                </a>
                            </div>
                        </div>
                    </div>
                </section>
            </main>
        </Show>
    }
}
