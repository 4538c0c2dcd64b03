//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, require_auth::RequireAuth};
use crate::net::supabase::{SupabaseClient, SupabaseConfig};
use crate::pages::{
    checkout::CheckoutPage, dashboard::DashboardPage, games::GamesPage, landing::LandingPage, login::LoginPage,
    not_found::NotFoundPage, services::ServicesPage, signup::SignupPage,
};
use crate::state::{auth::AuthState, cart::CartState};
use crate::util::config::{SupabaseMeta, app_config};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The server provides `SupabaseConfig` as context; it is written into
/// meta tags so the browser build can pick it up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let supabase = use_context::<SupabaseConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <SupabaseMeta config=supabase/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, starts the session store in the browser,
/// and sets up client-side routing. Protected pages sit behind `RequireAuth`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());
    let client = SupabaseClient::new(app_config());

    #[cfg(feature = "hydrate")]
    crate::state::session::start_session_store(client.clone(), auth);

    provide_context(auth);
    provide_context(cart);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/samved.css"/>
        <Title text="SamVed"/>

        <Router>
            <div class="layout">
                <Navbar/>
                <main class="layout__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route
                            path=StaticSegment("dashboard")
                            view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                        />
                        <Route path=StaticSegment("games") view=|| view! { <RequireAuth><GamesPage/></RequireAuth> }/>
                        <Route
                            path=StaticSegment("services")
                            view=|| view! { <RequireAuth><ServicesPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("checkout")
                            view=|| view! { <RequireAuth><CheckoutPage/></RequireAuth> }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
