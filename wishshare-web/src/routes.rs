use crate::containers::Layout;
use crate::models::app_state::AppState;
use crate::pages::{
    CommunityMembersPage, DashboardPage, ErrorPage, JoinedCommunitiesPage, LoginPage,
    OwnedCommunitiesPage,
};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Root,
    #[at("/home")]
    Home,
    #[at("/login")]
    Login,
    #[at("/myCommunity")]
    OwnedCommunities,
    #[at("/joinedCommunities")]
    JoinedCommunities,
    #[at("/community/:id")]
    Community { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

/// Wrap an authenticated page in the layout, or bounce to the login page.
fn guarded(is_authenticated: bool, on_logout: Callback<()>, page: Html) -> Html {
    if !is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }
    html! {
        <Layout on_logout={Some(on_logout)}>
            { page }
        </Layout>
    }
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = (*user).is_some();
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Root | MainRoute::Home => {
            guarded(is_authenticated, on_logout, html! { <DashboardPage /> })
        }
        MainRoute::OwnedCommunities => {
            guarded(is_authenticated, on_logout, html! { <OwnedCommunitiesPage /> })
        }
        MainRoute::JoinedCommunities => {
            guarded(is_authenticated, on_logout, html! { <JoinedCommunitiesPage /> })
        }
        MainRoute::Community { id } => guarded(
            is_authenticated,
            on_logout,
            html! { <CommunityMembersPage {id} /> },
        ),
        MainRoute::NotFound => guarded(is_authenticated, on_logout, html! { <ErrorPage /> }),
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    html! { <MainRouteView {route} {on_logout} /> }
}
