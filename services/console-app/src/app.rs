//! Root application component and background process wiring

use leptos::prelude::*;

use crate::api::UserRecord;
use crate::components::service_table::ServiceTable;
use crate::components::user_table::UserTable;
use crate::model::ServiceTarget;

/// Root component: owns the display state and starts the two independent
/// background processes (health polling and the one-shot roster fetch) when
/// mounted. Rendering is driven purely by the two signals.
#[component]
pub fn App() -> impl IntoView {
    let services = RwSignal::new(ServiceTarget::defaults());
    let roster = RwSignal::new(Vec::<UserRecord>::new());

    start_processes(services, roster);

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <header style="display: flex; justify-content: space-between; align-items: baseline; padding: 1rem 0; border-bottom: 1px solid #dee2e6;">
                <h1>"CloudForge Secure Platform"</h1>
                <span style="color: #6c757d; font-size: 0.9rem;">"Secure Microservices"</span>
            </header>
            <ServiceTable services=services />
            <UserTable roster=roster />
            <footer style="border-top: 1px solid #dee2e6; margin-top: 3rem; padding: 1rem 0; text-align: center; color: #6c757d; font-size: 0.9rem;">
                <p>"CloudForge Secure Platform - Built with modern cloud-native technologies"</p>
            </footer>
        </main>
    }
}

/// Start the health prober and the roster fetch.
///
/// The prober's cancel handle is fired from `on_cleanup`, so tearing the
/// view down stops the polling timer on every exit path; a cycle still in
/// flight at that point is discarded by the prober's cancellation race, and
/// `try_set` drops any snapshot that would land on a disposed signal.
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn start_processes(services: RwSignal<Vec<ServiceTarget>>, roster: RwSignal<Vec<UserRecord>>) {
    use futures::channel::oneshot;
    use leptos::task::spawn_local;

    use crate::api::GlooHttpClient;
    use crate::prober::{poll_loop, PROBE_INTERVAL_MS};
    use crate::roster::fetch_roster;

    let (cancel_tx, cancel_rx) = oneshot::channel();

    spawn_local(async move {
        let client = GlooHttpClient::new();
        let ticks = gloo_timers::future::IntervalStream::new(PROBE_INTERVAL_MS);
        poll_loop(
            ServiceTarget::defaults(),
            &client,
            ticks,
            cancel_rx,
            move |snapshot| services.try_set(snapshot).is_none(),
        )
        .await;
    });

    on_cleanup(move || {
        let _ = cancel_tx.send(());
    });

    spawn_local(async move {
        let client = GlooHttpClient::new();
        let users = fetch_roster(&client).await;
        let _ = roster.try_set(users);
    });
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
fn start_processes(_services: RwSignal<Vec<ServiceTarget>>, _roster: RwSignal<Vec<UserRecord>>) {}
