use crate::{models::app_state::AppState, routes::MainRoute};
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Landing page after sign-in.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let greeting = (*user)
        .as_ref()
        .map_or_else(|| "Welcome".to_string(), |user| format!("Welcome, {}", user.name));

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold text-primary">{ greeting }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{ "My Owned Communities" }</h2>
                        <p>{ "Communities you created and manage." }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::OwnedCommunities} classes="btn btn-primary">
                                { "Open" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{ "Joined Communities" }</h2>
                        <p>{ "Communities you are a member of." }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::JoinedCommunities} classes="btn btn-secondary">
                                { "Open" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
