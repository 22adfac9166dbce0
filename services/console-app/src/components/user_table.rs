//! System users table component

use leptos::prelude::*;

use crate::api::UserRecord;

/// Fixed message for the empty roster. Shown both when the roster is
/// legitimately empty and when the fetch failed; there is deliberately no
/// separate error message.
pub const EMPTY_ROSTER_MESSAGE: &str = "User data not available. Authentication may be required.";

fn activity_badge(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

/// Displays the user roster, or the fixed empty-state message when there is
/// nothing to show. Pure projection of the `roster` signal.
#[component]
pub fn UserTable(#[prop(into)] roster: Signal<Vec<UserRecord>>) -> impl IntoView {
    view! {
        <section>
            <h2>"System Users"</h2>
            {move || {
                let users = roster.get();
                if users.is_empty() {
                    view! {
                        <p style="text-align: center; padding: 2rem 0; color: #6c757d;">
                            {EMPTY_ROSTER_MESSAGE}
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="border-bottom: 2px solid #dee2e6;">
                                    <th style="padding: 0.5rem; text-align: left;">"Username"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Email"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {users.into_iter().map(|user| {
                                    let (color, bg) = if user.is_active {
                                        ("#155724", "#d4edda")
                                    } else {
                                        ("#721c24", "#f8d7da")
                                    };
                                    let badge_style = format!(
                                        "display: inline-block; padding: 0.25em 0.6em; \
                                         border-radius: 0.25rem; font-size: 0.85em; \
                                         font-weight: 600; color: {}; background-color: {};",
                                        color, bg
                                    );
                                    view! {
                                        <tr style="border-bottom: 1px solid #dee2e6;">
                                            <td style="padding: 0.5rem; font-weight: 500;">{user.username}</td>
                                            <td style="padding: 0.5rem; color: #6c757d;">{user.email}</td>
                                            <td style="padding: 0.5rem;">
                                                <span style=badge_style>{activity_badge(user.is_active)}</span>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_follows_activity_flag() {
        assert_eq!(activity_badge(true), "Active");
        assert_eq!(activity_badge(false), "Inactive");
    }

    #[test]
    fn empty_state_is_informational_not_an_error() {
        assert!(!EMPTY_ROSTER_MESSAGE.to_lowercase().contains("error"));
        assert!(!EMPTY_ROSTER_MESSAGE.to_lowercase().contains("fail"));
    }
}
