//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{layout::Layout, protected_route::ProtectedRoute};
use crate::config::ClientConfig;
use crate::pages::{
    dashboard::DashboardPage,
    login::LoginPage,
    not_found::{LandingRedirect, NotFoundPage},
    prospect_form::ProspectFormPage,
    report::ReportPage,
    sales_report::SalesReportPage,
    team_report::TeamReportPage,
    user_data::UserDataPage,
};
use crate::state::provider::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Owns the single session provider. In the browser it starts resolving the
/// persisted credential immediately; until that settles every gated route
/// shows its pending placeholder.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(ClientConfig::from_build_env());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session.resolve_initial());

    view! {
        <Stylesheet id="leptos" href="/pkg/crm-client.css"/>
        <Title text="CRM"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <ParentRoute path=StaticSegment("") view=Layout>
                        <Route path=StaticSegment("") view=LandingRedirect/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("prospect-form") view=ProspectFormPage/>
                        <Route path=StaticSegment("my-profile") view=UserDataPage/>
                        <Route path=StaticSegment("report") view=ReportPage/>
                        <Route path=StaticSegment("sales-report") view=SalesReportPage/>
                        <Route path=StaticSegment("team-report") view=TeamReportPage/>
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
