use catalog::{snapshot, toggle_selection, FilterSpec, SortBy};
use leptos::prelude::*;

use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Checkbox, RangeSlider, Select};
use crate::shared::icons::icon;

const RATING_OPTIONS: [(&str, &str); 4] = [
    ("0", "All Ratings"),
    ("3.5", "3.5 and above"),
    ("4", "4.0 and above"),
    ("4.5", "4.5 and above"),
];

const SORT_OPTIONS: [SortBy; 4] = [
    SortBy::Featured,
    SortBy::PriceAsc,
    SortBy::PriceDesc,
    SortBy::RatingDesc,
];

/// The advanced-filters sidebar. All state lives in the single `FilterSpec`
/// signal owned by the home page.
#[component]
pub fn FilterSidebar(spec: RwSignal<FilterSpec>, mobile_open: RwSignal<bool>) -> impl IntoView {
    let snap = snapshot();

    let reset = move |_| spec.set(FilterSpec::default_for(snapshot()));

    let rating_value = Signal::derive(move || {
        let rating = spec.with(|s| s.minimum_rating);
        let id = if rating >= 4.5 {
            "4.5"
        } else if rating >= 4.0 {
            "4"
        } else if rating >= 3.5 {
            "3.5"
        } else {
            "0"
        };
        id.to_string()
    });

    let rating_options: Vec<(String, String)> = RATING_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    let sort_options: Vec<(String, String)> = SORT_OPTIONS
        .iter()
        .map(|sort| (sort.as_str().to_string(), sort.label().to_string()))
        .collect();

    view! {
        <aside
            id="catalog-filters-panel"
            class="filter-sidebar reveal"
            class=("filter-sidebar--open", move || mobile_open.get())
            data-reveal=""
        >
            <div class="filter-sidebar__header">
                <h2 class="filter-sidebar__title">"Advanced Filters"</h2>
                <div class="filter-sidebar__header-actions">
                    <button type="button" class="filter-sidebar__reset" on:click=reset>
                        "Reset"
                    </button>
                    <button
                        type="button"
                        class="filter-sidebar__close"
                        aria-label="Close advanced filters"
                        on:click=move |_| mobile_open.set(false)
                    >
                        {icon("chevron-left")}
                    </button>
                </div>
            </div>

            <div class="filter-sidebar__body">
                <div class="filter-sidebar__group">
                    <label class="filter-sidebar__label" for="search-filter">
                        "Search"
                    </label>
                    <SearchInput
                        id="search-filter"
                        value=Signal::derive(move || spec.with(|s| s.search_text.clone()))
                        placeholder="patio, braai, bench..."
                        on_change=Callback::new(move |text: String| {
                            spec.update(|s| s.search_text = text);
                        })
                    />
                </div>

                <div class="filter-sidebar__group">
                    <p class="filter-sidebar__label">"Category"</p>
                    <div class="filter-sidebar__stack">
                        <For
                            each=move || snapshot().categories.clone()
                            key=|category| category.clone()
                            children=move |category: String| {
                                let for_checked = category.clone();
                                let for_toggle = category.clone();
                                view! {
                                    <Checkbox
                                        label=category
                                        checked=Signal::derive(move || {
                                            spec.with(|s| s.categories.contains(&for_checked))
                                        })
                                        on_change=Callback::new(move |_| {
                                            spec.update(|s| {
                                                s.categories = toggle_selection(
                                                    &s.categories,
                                                    &for_toggle,
                                                );
                                            });
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </div>

                <div class="filter-sidebar__group">
                    <p class="filter-sidebar__label">"Material"</p>
                    <div class="filter-sidebar__chips">
                        <For
                            each=move || snapshot().materials.clone()
                            key=|material| material.clone()
                            children=move |material: String| {
                                let for_active = material.clone();
                                let for_toggle = material.clone();
                                let active = move || {
                                    spec.with(|s| s.materials.contains(&for_active))
                                };
                                view! {
                                    <button
                                        type="button"
                                        class="chip chip--selectable"
                                        class=("chip--active", active)
                                        on:click=move |_| {
                                            spec.update(|s| {
                                                s.materials = toggle_selection(
                                                    &s.materials,
                                                    &for_toggle,
                                                );
                                            });
                                        }
                                    >
                                        {material}
                                    </button>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="filter-sidebar__group">
                    <p class="filter-sidebar__label">"Fit Type"</p>
                    <div class="filter-sidebar__chips">
                        <For
                            each=move || snapshot().fits.clone()
                            key=|fit| *fit
                            children=move |fit| {
                                let active = move || spec.with(|s| s.fits.contains(&fit));
                                view! {
                                    <button
                                        type="button"
                                        class="chip chip--selectable chip--dark"
                                        class=("chip--active", active)
                                        on:click=move |_| {
                                            spec.update(|s| {
                                                s.fits = toggle_selection(&s.fits, &fit);
                                            });
                                        }
                                    >
                                        {fit.as_str()}
                                    </button>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="filter-sidebar__group">
                    <p class="filter-sidebar__label">"Weather Rating"</p>
                    <div class="filter-sidebar__stack">
                        <For
                            each=move || snapshot().weather_ratings.clone()
                            key=|weather| *weather
                            children=move |weather| {
                                view! {
                                    <Checkbox
                                        label=weather.as_str().to_string()
                                        checked=Signal::derive(move || {
                                            spec.with(|s| s.weather_ratings.contains(&weather))
                                        })
                                        on_change=Callback::new(move |_| {
                                            spec.update(|s| {
                                                s.weather_ratings = toggle_selection(
                                                    &s.weather_ratings,
                                                    &weather,
                                                );
                                            });
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </div>

                <div class="filter-sidebar__group">
                    <p class="filter-sidebar__label">"Price Range"</p>
                    <p class="filter-sidebar__price-readout">
                        {move || {
                            spec.with(|s| format!("${} - ${}", s.min_price, s.max_price))
                        }}
                    </p>
                    // Moving one bound clamps against the other, so min <= max
                    // always holds.
                    <RangeSlider
                        min=snap.price_min
                        max=snap.price_max
                        value=Signal::derive(move || spec.with(|s| s.min_price))
                        on_input=Callback::new(move |value: u32| {
                            spec.update(|s| s.min_price = value.min(s.max_price));
                        })
                    />
                    <RangeSlider
                        min=snap.price_min
                        max=snap.price_max
                        value=Signal::derive(move || spec.with(|s| s.max_price))
                        on_input=Callback::new(move |value: u32| {
                            spec.update(|s| s.max_price = value.max(s.min_price));
                        })
                    />
                </div>

                <div class="filter-sidebar__group">
                    <Select
                        id="rating-filter"
                        label="Minimum Rating"
                        value=rating_value
                        options=rating_options
                        on_change=Callback::new(move |value: String| {
                            let minimum = value.parse::<f64>().unwrap_or(0.0);
                            spec.update(|s| s.minimum_rating = minimum);
                        })
                    />
                </div>

                <div class="filter-sidebar__group">
                    <Checkbox
                        label="In-stock only"
                        checked=Signal::derive(move || spec.with(|s| s.in_stock_only))
                        on_change=Callback::new(move |checked: bool| {
                            spec.update(|s| s.in_stock_only = checked);
                        })
                    />
                </div>

                <div class="filter-sidebar__group">
                    <Select
                        id="sort-filter"
                        label="Sort by"
                        value=Signal::derive(move || {
                            spec.with(|s| s.sort_by.as_str().to_string())
                        })
                        options=sort_options
                        on_change=Callback::new(move |value: String| {
                            let sort = SortBy::parse(&value).unwrap_or_default();
                            spec.update(|s| s.sort_by = sort);
                        })
                    />
                </div>
            </div>
        </aside>
    }
}
