//! Service status badge component

use leptos::prelude::*;

use crate::model::HealthStatus;

/// Badge palette: affirmative green only for a healthy probe. Unknown and
/// unhealthy share the negative tone; the label still carries the exact
/// status word.
fn palette(status: HealthStatus) -> (&'static str, &'static str) {
    match status {
        HealthStatus::Healthy => ("#155724", "#d4edda"),
        HealthStatus::Unknown | HealthStatus::Unhealthy => ("#721c24", "#f8d7da"),
    }
}

/// A colored pill badge showing a service's probed status
#[component]
pub fn StatusBadge(status: HealthStatus) -> impl IntoView {
    let (color, bg) = palette(status);

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span style=style>{status.to_string()}</span>
    }
}
