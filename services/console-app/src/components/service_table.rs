//! Service status table component

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::model::{HealthStatus, ServiceTarget};

/// Indicator glyph next to the service name: a check mark for healthy,
/// an exclamation otherwise.
fn indicator(status: HealthStatus) -> (&'static str, &'static str) {
    match status {
        HealthStatus::Healthy => ("✓", "#2f855a"),
        HealthStatus::Unknown | HealthStatus::Unhealthy => ("!", "#c53030"),
    }
}

/// Displays the probed status of every configured service, in configured
/// order. Pure projection of the `services` signal.
#[component]
pub fn ServiceTable(#[prop(into)] services: Signal<Vec<ServiceTarget>>) -> impl IntoView {
    view! {
        <section>
            <h2>"Service Status"</h2>
            <table style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr style="border-bottom: 2px solid #dee2e6;">
                        <th style="padding: 0.5rem; text-align: left;">"Service"</th>
                        <th style="padding: 0.5rem; text-align: left;">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || services.get().into_iter().map(|service| {
                        let (glyph, glyph_color) = indicator(service.status);
                        let glyph_style = format!(
                            "color: {}; font-weight: 700; margin-right: 0.5rem;",
                            glyph_color
                        );
                        view! {
                            <tr style="border-bottom: 1px solid #dee2e6;">
                                <td style="padding: 0.5rem;">
                                    <span style=glyph_style>{glyph}</span>
                                    <span style="font-weight: 500;">{service.name}</span>
                                </td>
                                <td style="padding: 0.5rem;">
                                    <StatusBadge status=service.status />
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_healthy_gets_the_check_mark() {
        assert_eq!(indicator(HealthStatus::Healthy).0, "✓");
        assert_eq!(indicator(HealthStatus::Unknown).0, "!");
        assert_eq!(indicator(HealthStatus::Unhealthy).0, "!");
    }
}
