//! Headline metric card used by both dashboards.

use leptos::prelude::*;

use crate::state::dashboard::StatTile;

#[component]
pub fn StatCard(tile: StatTile) -> impl IntoView {
    let StatTile { label, value, trend } = tile;
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {trend.map(|t| view! { <span class="stat-card__trend">{t}</span> })}
        </div>
    }
}
