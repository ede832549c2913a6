//! Dashboard page
//!
//! Static overview cards with placeholder figures. Real reporting widgets
//! are fed by a separate reporting service and are out of scope here.

use leptos::prelude::*;

/// One summary card
#[derive(Debug, Clone, Copy)]
struct StatCard {
    title: &'static str,
    value: &'static str,
    hint: &'static str,
}

const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Cameras Online",
        value: "12",
        hint: "of 14 configured",
    },
    StatCard {
        title: "Active Prompts",
        value: "27",
        hint: "across all cameras",
    },
    StatCard {
        title: "Alerts Today",
        value: "63",
        hint: "8 awaiting review",
    },
    StatCard {
        title: "Clients Notified",
        value: "41",
        hint: "email, SMS and WhatsApp",
    },
];

/// Main dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <h2>"Platform Overview"</h2>
            <div class="dashboard-grid">
                {STAT_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="dashboard-card">
                                <h3>{card.title}</h3>
                                <p class="stat-value">{card.value}</p>
                                <p class="stat-hint">{card.hint}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="dashboard-card dashboard-wide">
                <h3>"Alert Activity"</h3>
                <p class="stat-hint">"Sample data; live charts come from the reporting service."</p>
                <ul class="activity-list">
                    <li>"Mon: 48 alerts"</li>
                    <li>"Tue: 52 alerts"</li>
                    <li>"Wed: 39 alerts"</li>
                    <li>"Thu: 71 alerts"</li>
                    <li>"Fri: 63 alerts"</li>
                </ul>
            </div>
        </div>
    }
}
