use crate::{models::app_state::AppState, routes::MainRoute};
use yew::{Callback, Html, Properties, function_component, html};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let navigator = use_navigator();
    let user = use_selector(|state: &AppState| state.user.clone());
    let user_opt = (*user).clone();

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            if let Some(callback) = on_logout.clone() {
                callback.emit(());
            }
            if let Some(nav) = navigator.clone() {
                nav.push(&MainRoute::Login);
            }
        });
        html! {
            <li><a {onclick}>{ "Log out" }</a></li>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg font-bold text-primary">
                    { "WishShare" }
                </Link<MainRoute>>
            </a>
            {
                match user_opt {
                    Some(user) => html! {
                        <div class="flex items-center gap-2">
                            <ul class="menu menu-horizontal px-1 hidden sm:flex">
                                <li>
                                    <Link<MainRoute> to={MainRoute::OwnedCommunities}>
                                        { "My Communities" }
                                    </Link<MainRoute>>
                                </li>
                                <li>
                                    <Link<MainRoute> to={MainRoute::JoinedCommunities}>
                                        { "Joined Communities" }
                                    </Link<MainRoute>>
                                </li>
                            </ul>
                            <div class="dropdown dropdown-end">
                                <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                                    <i class="fa-solid fa-user text-lg"></i>
                                </div>
                                <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                                    <li class="px-2 py-1 text-left">
                                        <div class="text-sm font-semibold text-base-content">{ &user.name }</div>
                                        <div class="text-xs text-base-content/70">{ &user.email }</div>
                                    </li>
                                    <div class="divider my-0"></div>
                                    {logout_button}
                                </ul>
                            </div>
                        </div>
                    },
                    None => html! {
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                            { "Sign In" }
                        </Link<MainRoute>>
                    },
                }
            }
        </nav>
    }
}
