use catalog::Product;
use leptos::html;
use leptos::prelude::*;

use crate::domain::catalog::ui::home::product_card::ProductCard;
use crate::shared::icons::icon;
use crate::shared::scroll_track::{page_distance, ScrollMetrics};

/// Horizontally scrollable product row for one home-page section.
///
/// Scroll affordances are recomputed from the track geometry on scroll,
/// window resize, and whenever the number of rendered cards changes; the
/// first measurement waits two animation frames so layout has settled.
#[component]
pub fn SectionCarousel(
    title: &'static str,
    description: &'static str,
    #[prop(into)] products: Signal<Vec<Product>>,
) -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();
    let (metrics, set_metrics) = signal(ScrollMetrics::default());

    let measure = move || {
        if let Some(track) = track_ref.get_untracked() {
            set_metrics.set(ScrollMetrics {
                offset: f64::from(track.scroll_left()),
                viewport: f64::from(track.client_width()),
                content: f64::from(track.scroll_width()),
            });
        }
    };

    // Re-measure once layout is painted and whenever the card count changes.
    Effect::new(move |_| {
        let _count = products.with(Vec::len);
        request_animation_frame(move || {
            request_animation_frame(measure);
        });
    });

    // Window resizes change the visible track width.
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    });

    let scroll_by_page = move |direction: i32| {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let card_width = track
            .first_element_child()
            .map(|card| card.get_bounding_client_rect().width());
        let distance = page_distance(
            card_width,
            column_gap(&track),
            f64::from(track.client_width()),
            direction,
        );

        let options = web_sys::ScrollToOptions::new();
        options.set_left(distance);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        track.scroll_by_with_scroll_to_options(&options);
    };

    let can_left = move || metrics.get().can_scroll_left();
    let can_right = move || metrics.get().can_scroll_right();
    let is_empty = move || products.with(Vec::is_empty);
    let fits_in_view = move || !is_empty() && !metrics.get().has_overflow();

    view! {
        <section class="carousel">
            <div class="carousel__header">
                <div class="carousel__heading">
                    <h2 class="carousel__title">{title}</h2>
                    <p class="carousel__description">{description}</p>
                </div>
                <div class="carousel__controls">
                    <span class="carousel__count">
                        {move || format!("{} items", products.with(Vec::len))}
                    </span>
                    <button
                        type="button"
                        class="carousel__nav"
                        class=("carousel__nav--active", can_left)
                        aria-label=format!("Scroll {title} left")
                        disabled=move || !can_left()
                        on:click=move |_| scroll_by_page(-1)
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        type="button"
                        class="carousel__nav"
                        class=("carousel__nav--active", can_right)
                        aria-label=format!("Scroll {title} right")
                        disabled=move || !can_right()
                        on:click=move |_| scroll_by_page(1)
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| {
                    view! {
                        <div class="carousel__empty">
                            "No products match this filter set in this collection."
                        </div>
                    }
                }
            >
                <div class="carousel__viewport">
                    <div class="carousel__track" node_ref=track_ref on:scroll=move |_| measure()>
                        <For
                            each=move || products.get()
                            key=|product| product.id
                            children=move |product| {
                                view! {
                                    <div class="carousel__item">
                                        <ProductCard product=product />
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            <Show when=fits_in_view>
                <p class="carousel__hint">
                    "All items fit in view. Use filters to narrow this collection."
                </p>
            </Show>
        </section>
    }
}

/// Inter-card gap from the track's computed style, in pixels.
fn column_gap(track: &web_sys::HtmlDivElement) -> f64 {
    let Some(style) = window().get_computed_style(track).ok().flatten() else {
        return 0.0;
    };
    let mut gap = style.get_property_value("column-gap").unwrap_or_default();
    if gap.is_empty() {
        gap = style.get_property_value("gap").unwrap_or_default();
    }
    gap.trim_end_matches("px").parse::<f64>().unwrap_or(0.0)
}
