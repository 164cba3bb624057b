use catalog::{apply, catalog, snapshot, FilterSpec, Product};
use leptos::prelude::*;

/// One spec value for the whole catalog view, replaced wholesale on every
/// interaction. Created on mount, dropped on navigation away.
pub fn create_filter_state() -> RwSignal<FilterSpec> {
    RwSignal::new(FilterSpec::default_for(snapshot()))
}

/// Memoized run of the filter/sort engine. The engine is pure, so the memo
/// only recomputes when the spec value changes.
pub fn matching_products(spec: RwSignal<FilterSpec>) -> Memo<Vec<Product>> {
    Memo::new(move |_| {
        spec.with(|current| apply(catalog(), current).into_iter().cloned().collect())
    })
}
