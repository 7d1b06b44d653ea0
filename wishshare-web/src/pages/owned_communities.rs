use crate::api::WishShareClient;
use crate::components::{CommunityCard, Loading, Modal, PageControls, Toast, ToastMessage};
use crate::models::app_state::AppState;
use crate::pagination::{FetchState, Generation, Pagination};
use crate::routes::MainRoute;
use crate::session;
use crate::validation::validate_community_name;
use shared::models::{Community, CreateCommunityRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Communities the signed-in user owns, one page at a time, with the
/// create-community flow.
#[function_component(OwnedCommunitiesPage)]
pub fn owned_communities_page() -> Html {
    let communities = use_state(Vec::<Community>::new);
    let fetch_state = use_state(FetchState::default);
    let pagination = use_state(Pagination::default);
    let toast = use_state(|| None::<ToastMessage>);
    let modal_open = use_state(|| false);
    let new_name = use_state(String::new);
    let creating = use_state(|| false);
    let generation = use_mut_ref(Generation::default);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let fetch_page = {
        let communities = communities.clone();
        let fetch_state = fetch_state.clone();
        let pagination = pagination.clone();
        let toast = toast.clone();
        let generation = generation.clone();
        let dispatch = dispatch.clone();
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
                let result = client.list_owned_communities(page).await;
                if !generation.borrow().is_current(ticket) {
                    // A newer fetch superseded this one while it was in flight.
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
                        // Credential no longer works; the route guard
                        // redirects to the login page once the user clears.
                        session::clear(&dispatch);
                    }
                    Err(err) => {
                        log::error!("failed to load owned communities: {err}");
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

    let on_create = {
        let new_name = new_name.clone();
        let creating = creating.clone();
        let modal_open = modal_open.clone();
        let toast = toast.clone();
        let fetch_page = fetch_page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if validate_community_name(&new_name).is_err() {
                toast.set(Some(ToastMessage::error(
                    "Community name must be at least 2 characters",
                )));
                return;
            }

            creating.set(true);
            let request = CreateCommunityRequest {
                name: (*new_name).clone(),
            };
            let new_name = new_name.clone();
            let creating = creating.clone();
            let modal_open = modal_open.clone();
            let toast = toast.clone();
            let fetch_page = fetch_page.clone();
            spawn_local(async move {
                let client = WishShareClient::shared();
                match client.create_community(&request).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success(
                            "Community created successfully!",
                        )));
                        new_name.set(String::new());
                        modal_open.set(false);
                        // The new community lands on page 1; refetch from
                        // the source of truth instead of patching locally.
                        fetch_page.emit(1);
                    }
                    Err(err) => {
                        let message = err
                            .server_message()
                            .unwrap_or("Failed to create community")
                            .to_string();
                        toast.set(Some(ToastMessage::error(message)));
                    }
                }
                creating.set(false);
            });
        })
    };

    let on_open_community = {
        let navigator = navigator;
        Callback::from(move |id: String| {
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Community { id });
            }
        })
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        let new_name = new_name.clone();
        Callback::from(move |()| {
            modal_open.set(false);
            new_name.set(String::new());
        })
    };
    let on_name_input = {
        let new_name = new_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                new_name.set(input.value());
            }
        })
    };
    let close_toast = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let is_creating = *creating;

    html! {
        <div>
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold text-primary">{ "My Owned Communities" }</h1>
                <button class="btn btn-primary" type="button" onclick={open_modal.clone()}>
                    <i class="fa-solid fa-plus mr-2"></i>
                    { "Create Community" }
                </button>
            </div>

            {
                if fetch_state.is_loading() {
                    html! { <Loading /> }
                } else if communities.is_empty() {
                    html! {
                        <div class="bg-base-200 rounded-lg p-8 text-center">
                            <p class="text-base-content/70 mb-4">{ "You haven't created any communities yet." }</p>
                            <button class="btn btn-primary" type="button" onclick={open_modal}>
                                { "Create your first community" }
                            </button>
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

            <Modal open={*modal_open} title="Create New Community" on_close={close_modal.clone()}>
                <form class="space-y-4" onsubmit={on_create}>
                    <div class="form-control">
                        <label class="label" for="community-name">
                            <span class="label-text">{ "Community Name*" }</span>
                        </label>
                        <input
                            id="community-name"
                            class="input input-bordered w-full"
                            type="text"
                            placeholder="Enter community name (min 2 characters)"
                            value={(*new_name).clone()}
                            oninput={on_name_input}
                        />
                        <p class="mt-1 text-xs text-base-content/60">
                            { "A unique slug will be automatically generated from the name." }
                        </p>
                    </div>
                    <div class="flex justify-end space-x-3 pt-4">
                        <button
                            class="btn btn-ghost"
                            type="button"
                            onclick={Callback::from(move |_: MouseEvent| close_modal.emit(()))}
                        >
                            { "Cancel" }
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={is_creating}>
                            { if is_creating { "Creating..." } else { "Create Community" } }
                        </button>
                    </div>
                </form>
            </Modal>

            <Toast toast={(*toast).clone()} on_close={close_toast} />
        </div>
    }
}
