//! Dashboard for a signed-in user: progress, controls, chat, notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAuth`, so a user is always present once this
//! renders. Progress and achievement figures are static sample data.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AppUser, AuthState, Role};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Progress,
    Controls,
    Chat,
    Notifications,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Progress, Self::Controls, Self::Chat, Self::Notifications];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Progress => "Progress",
            Self::Controls => "Parental Controls",
            Self::Chat => "Therapist Chat",
            Self::Notifications => "Notifications",
        }
    }
}

pub struct ProgressItem {
    pub label: &'static str,
    pub percentage: u8,
    pub tone: &'static str,
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
}

pub const PROGRESS: &[ProgressItem] = &[
    ProgressItem { label: "Math Skills", percentage: 65, tone: "primary" },
    ProgressItem { label: "Focus Time", percentage: 42, tone: "secondary" },
    ProgressItem { label: "Emotional Regulation", percentage: 78, tone: "emerald" },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { title: "Math Whiz", description: "Completed 10 math exercises", tone: "primary" },
    Achievement { title: "Focus Master", description: "Focused for 30 minutes", tone: "secondary" },
    Achievement { title: "Calm Keeper", description: "Used calming techniques 5 times", tone: "emerald" },
];

const QUICK_LINKS: &[(&str, &str)] = &[("/games", "Educational Games"), ("/services", "Therapy Sessions")];

fn greeting(user: Option<&AppUser>) -> String {
    let name = user.and_then(AppUser::first_name).unwrap_or("there");
    format!("Welcome back, {name}!")
}

fn sidebar_role(user: &AppUser) -> &'static str {
    user.role_kind().map_or(Role::Learner.title(), Role::title)
}

fn progress_style(percentage: u8) -> String {
    format!("width: {}%;", percentage.min(100))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = RwSignal::new(DashboardTab::default());

    let user = move || auth.get().user;
    let initial = move || user().map_or('U', |u| u.initial()).to_string();
    let name = move || user().map(|u| u.display_name()).unwrap_or_default();
    let role = move || user().map_or(Role::Learner.title(), |u| sidebar_role(&u));

    let tab_content = move || match active.get() {
        DashboardTab::Progress => view! {
            <section class="dashboard-card">
                <h2>"Progress Overview"</h2>
                {PROGRESS
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="progress">
                                <div class="progress__label">
                                    <span>{item.label}</span>
                                    <span>{format!("{}%", item.percentage)}</span>
                                </div>
                                <div class="progress__track">
                                    <div
                                        class=format!("progress__bar progress__bar--{}", item.tone)
                                        style=progress_style(item.percentage)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="dashboard-card">
                <h2>"Recent Achievements"</h2>
                <div class="achievements">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|a| {
                            view! {
                                <div class=format!("achievement achievement--{}", a.tone)>
                                    <h3>{a.title}</h3>
                                    <p>{a.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
        DashboardTab::Controls => view! {
            <section class="dashboard-card">
                <h2>"Parental Controls"</h2>
                <p>"Manage your child's account settings and restrictions here."</p>
            </section>
        }
        .into_any(),
        DashboardTab::Chat => view! {
            <section class="dashboard-card">
                <h2>"Therapist Chat"</h2>
                <p>"Connect with your therapist for support and guidance."</p>
            </section>
        }
        .into_any(),
        DashboardTab::Notifications => view! {
            <section class="dashboard-card">
                <h2>"Notifications"</h2>
                <p>"You have no new notifications."</p>
            </section>
        }
        .into_any(),
    };

    view! {
        <main class="dashboard">
            <aside class="dashboard__sidebar">
                <div class="dashboard__profile">
                    <div class="dashboard__avatar">{initial}</div>
                    <div>
                        <h2>{name}</h2>
                        <p>{role}</p>
                    </div>
                </div>
                <nav class="dashboard__tabs">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    type="button"
                                    class="dashboard__tab"
                                    class:dashboard__tab--active=move || active.get() == tab
                                    on:click=move |_| active.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="dashboard__quick-links">
                    <h3>"Quick Links"</h3>
                    {QUICK_LINKS.iter().map(|(href, label)| view! { <A href=*href>{*label}</A> }).collect_view()}
                </div>
            </aside>
            <div class="dashboard__main">
                <div class="dashboard__welcome">
                    <h1>{move || greeting(auth.get().user.as_ref())}</h1>
                    <p>"Here's what's happening with your learning journey today."</p>
                </div>
                {tab_content}
            </div>
        </main>
    }
}
