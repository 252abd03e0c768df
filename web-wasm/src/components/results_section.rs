//! Results section component
//!
//! Summary block, category-grouped suggestion cards, and the roast
//! follow-up. All text is rendered through `view!` nodes, so server and
//! user strings are escaped by construction.

use crate::app::{run_roast, AppState, RESULTS_SECTION_ID};
use fashionsense_common::{
    group_by_category, price_range, shop_label, AnalysisResult, CategoryGroup, Suggestion,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ResultsSection(state: AppState) -> impl IntoView {
    view! {
        <section class="results-section" id=RESULTS_SECTION_ID>
            {move || {
                state
                    .analysis
                    .get()
                    .map(|analysis| render_results(state, analysis))
            }}
        </section>
    }
}

fn render_results(state: AppState, analysis: AnalysisResult) -> impl IntoView {
    let cards = if analysis.suggestions.is_empty() {
        view! { <p class="empty-state">"No suggestions returned."</p> }.into_any()
    } else {
        let groups = group_by_category(&analysis.suggestions)
            .into_iter()
            .map(render_group)
            .collect_view();
        view! { <div class="cards-grid">{groups}</div> }.into_any()
    };

    view! {
        <div class="outfit-summary">
            <span class="label">"Outfit Analysis"</span>
            <span class="value">{analysis.outfit_description.clone()}</span>
            <div class="meta-row">
                {meta_item("Style", analysis.style.clone())}
                {meta_item("Palette", analysis.color_palette.clone())}
                {meta_item("Person Identified", analysis.person_description.clone())}
            </div>
        </div>
        {cards}
        <RoastBlock state=state />
    }
}

fn meta_item(label: &'static str, value: Option<String>) -> impl IntoView {
    value.filter(|v| !v.is_empty()).map(|v| {
        view! {
            <div class="meta-item">
                <span class="label">{label}</span>
                <span class="value">{v}</span>
            </div>
        }
    })
}

fn render_group(group: CategoryGroup<'_>) -> impl IntoView {
    let cards = group
        .suggestions
        .into_iter()
        .map(render_card)
        .collect_view();
    view! {
        <div class="category-group">
            <h2 class="category-heading">{group.category}</h2>
            <div class="category-cards">{cards}</div>
        </div>
    }
}

fn render_card(suggestion: &Suggestion) -> impl IntoView {
    let price = price_range(
        suggestion.estimated_price_low,
        suggestion.estimated_price_high,
    );
    let category_badge = (!suggestion.category.is_empty()).then(|| {
        view! { <span class="card-category">{suggestion.category.clone()}</span> }
    });
    let links = suggestion
        .links
        .iter()
        .map(|(key, url)| {
            view! {
                <a class="shop-link" href=url.clone() target="_blank" rel="noopener">
                    {shop_label(key)}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            {category_badge}
            <h3 class="card-title">{suggestion.item.clone()}</h3>
            <p class="card-desc">{suggestion.description.clone()}</p>
            <div class="card-price">{price}<span class="est">" est."</span></div>
            <div class="card-links">{links}</div>
        </div>
    }
}

#[component]
fn RoastBlock(state: AppState) -> impl IntoView {
    let roasting = move || state.is_roasting.get();

    view! {
        <div class="roast-block">
            <button
                class="btn btn-secondary"
                disabled=roasting
                on:click=move |_| spawn_local(run_roast(state))
            >
                {move || if state.is_roasting.get() { "Roasting…" } else { "Roast My Outfit" }}
            </button>
            <Show when=move || state.roast.get().is_some()>
                <blockquote class="roast-text">
                    {move || state.roast.get().unwrap_or_default()}
                </blockquote>
            </Show>
        </div>
    }
}
