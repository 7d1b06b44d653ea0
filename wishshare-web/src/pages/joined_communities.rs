use crate::api::WishShareClient;
use crate::components::{CommunityCard, Loading, PageControls, Toast, ToastMessage};
use crate::models::app_state::AppState;
use crate::pagination::{FetchState, Generation, Pagination};
use crate::routes::MainRoute;
use crate::session;
use shared::models::Community;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Communities the signed-in user belongs to, one page at a time.
#[function_component(JoinedCommunitiesPage)]
pub fn joined_communities_page() -> Html {
    let communities = use_state(Vec::<Community>::new);
    let fetch_state = use_state(FetchState::default);
    let pagination = use_state(Pagination::default);
    let toast = use_state(|| None::<ToastMessage>);
    let generation = use_mut_ref(Generation::default);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let fetch_page = {
        let communities = communities.clone();
        let fetch_state = fetch_state.clone();
        let pagination = pagination.clone();
        let toast = toast.clone();
        let generation = generation.clone();
        let dispatch = dispatch;
        Callback::from(move |page: u32| {
            if !pagination.accepts(page) {
                return;
            }
            let ticket = generation.borrow_mut().begin();
            fetch_state.set(FetchState::Loading);

            let communities = communities.clone();
            let fetch_state = fetch_state.clone();
            let pagination = pagination.clone();
            let toast = toast.clone();
            let generation = generation.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = WishShareClient::shared();
                let result = client.list_joined_communities(page).await;
                if !generation.borrow().is_current(ticket) {
                    return;
                }
                match result {
                    Ok((items, meta)) => {
                        communities.set(items);
                        if let Some(meta) = meta {
                            let mut next = (*pagination).clone();
                            next.apply(&meta);
                            pagination.set(next);
                        }
                        fetch_state.set(FetchState::Loaded);
                    }
                    Err(err) if err.is_unauthorized() => {
                        session::clear(&dispatch);
                    }
                    Err(err) => {
                        log::error!("failed to load joined communities: {err}");
                        fetch_state.set(FetchState::Failed);
                        toast.set(Some(ToastMessage::error("Failed to load Communities")));
                    }
                }
            });
        })
    };

    {
        let fetch_page = fetch_page.clone();
        use_effect_with((), move |_| {
            fetch_page.emit(1);
            || ()
        });
    }

    let on_open_community = {
        let navigator = navigator;
        Callback::from(move |id: String| {
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Community { id });
            }
        })
    };

    let close_toast = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold text-primary">{ "Joined Communities" }</h1>
            </div>

            {
                if fetch_state.is_loading() {
                    html! { <Loading /> }
                } else if communities.is_empty() {
                    html! {
                        <div class="bg-base-200 rounded-lg p-8 text-center">
                            <p class="text-base-content/70">{ "You haven't joined any communities yet." }</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                { for communities.iter().map(|community| html! {
                                    <CommunityCard
                                        key={community.id.clone()}
                                        community={community.clone()}
                                        on_open={on_open_community.clone()}
                                    />
                                })}
                            </div>
                            <PageControls
                                pagination={(*pagination).clone()}
                                on_page_change={fetch_page.clone()}
                            />
                        </>
                    }
                }
            }

            <Toast toast={(*toast).clone()} on_close={close_toast} />
        </div>
    }
}
