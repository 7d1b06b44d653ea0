use crate::api::WishShareClient;
use crate::components::{Loading, MemberCard, Modal, Toast, ToastMessage};
use crate::models::app_state::AppState;
use crate::pagination::FetchState;
use crate::session;
use crate::validation::validate_member_user_id;
use shared::models::{AddMemberRequest, CommunityMember, MemberRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

#[derive(Properties, PartialEq)]
pub struct CommunityMembersPageProps {
    pub id: String,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Members of one community, with the add-member and remove-member flows.
#[function_component(CommunityMembersPage)]
pub fn community_members_page(props: &CommunityMembersPageProps) -> Html {
    let members = use_state(Vec::<CommunityMember>::new);
    let fetch_state = use_state(FetchState::default);
    let toast = use_state(|| None::<ToastMessage>);
    let modal_open = use_state(|| false);
    let member_user_id = use_state(String::new);
    let member_role = use_state(|| MemberRole::Member);
    let busy = use_state(|| false);
    let navigator = use_navigator();
    let user = use_selector(|state: &AppState| state.user.clone());
    let (_state, dispatch) = use_store::<AppState>();

    let fetch_members = {
        let community_id = props.id.clone();
        let members = members.clone();
        let fetch_state = fetch_state.clone();
        let toast = toast.clone();
        let dispatch = dispatch;
        Callback::from(move |()| {
            fetch_state.set(FetchState::Loading);
            let community_id = community_id.clone();
            let members = members.clone();
            let fetch_state = fetch_state.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = WishShareClient::shared();
                match client.list_members(&community_id).await {
                    Ok(records) => {
                        members.set(records.into_iter().map(CommunityMember::from).collect());
                        fetch_state.set(FetchState::Loaded);
                    }
                    Err(err) if err.is_unauthorized() => {
                        session::clear(&dispatch);
                    }
                    Err(err) => {
                        log::error!("failed to load community members: {err}");
                        fetch_state.set(FetchState::Failed);
                        toast.set(Some(ToastMessage::error("Failed to load community data")));
                    }
                }
            });
        })
    };

    {
        let fetch_members = fetch_members.clone();
        use_effect_with(props.id.clone(), move |_| {
            fetch_members.emit(());
            || ()
        });
    }

    let reset_member_form = {
        let member_user_id = member_user_id.clone();
        let member_role = member_role.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |()| {
            member_user_id.set(String::new());
            member_role.set(MemberRole::Member);
            modal_open.set(false);
        })
    };

    let on_add_member = {
        let community_id = props.id.clone();
        let member_user_id = member_user_id.clone();
        let member_role = member_role.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        let fetch_members = fetch_members.clone();
        let reset_member_form = reset_member_form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if validate_member_user_id(&member_user_id).is_err() {
                toast.set(Some(ToastMessage::error("Please enter a user ID")));
                return;
            }

            busy.set(true);
            let request = AddMemberRequest::new(&community_id, &member_user_id, *member_role);
            let busy = busy.clone();
            let toast = toast.clone();
            let fetch_members = fetch_members.clone();
            let reset_member_form = reset_member_form.clone();
            spawn_local(async move {
                let client = WishShareClient::shared();
                match client.add_member(&request).await {
                    Ok(()) => {
                        reset_member_form.emit(());
                        toast.set(Some(ToastMessage::success("Member added successfully")));
                        fetch_members.emit(());
                    }
                    Err(err) => {
                        let message = if err.is_forbidden() {
                            "You are not an Admin or Owner of the community".to_string()
                        } else {
                            err.server_message()
                                .unwrap_or("Failed to add member")
                                .to_string()
                        };
                        reset_member_form.emit(());
                        toast.set(Some(ToastMessage::error(message)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_remove_member = {
        let community_id = props.id.clone();
        let toast = toast.clone();
        let fetch_members = fetch_members.clone();
        Callback::from(move |member_id: String| {
            if !confirm("Are you sure you want to remove this member?") {
                return;
            }

            let community_id = community_id.clone();
            let toast = toast.clone();
            let fetch_members = fetch_members.clone();
            spawn_local(async move {
                let client = WishShareClient::shared();
                match client.remove_member(&community_id, &member_id).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success("Member removed successfully")));
                        fetch_members.emit(());
                    }
                    Err(err) => {
                        let message = err
                            .server_message()
                            .unwrap_or("Failed to remove member")
                            .to_string();
                        toast.set(Some(ToastMessage::error(message)));
                    }
                }
            });
        })
    };

    let on_back = {
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            if let Some(ref nav) = navigator {
                nav.back();
            }
        })
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let on_user_id_input = {
        let member_user_id = member_user_id.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                member_user_id.set(input.value());
            }
        })
    };
    let on_role_change = {
        let member_role = member_role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let role = if select.value() == "admin" {
                    MemberRole::Admin
                } else {
                    MemberRole::Member
                };
                member_role.set(role);
            }
        })
    };
    let close_toast = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let owner_name = (*user)
        .as_ref()
        .map_or_else(|| "Unknown Owner".to_string(), |user| user.name.clone());
    let is_busy = *busy;

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <button class="btn btn-ghost btn-circle" type="button" onclick={on_back}>
                    <i class="fa-solid fa-arrow-left text-lg"></i>
                </button>
                <button class="btn btn-primary" type="button" onclick={open_modal.clone()}>
                    <i class="fa-solid fa-plus mr-2"></i>
                    { "Add Member" }
                </button>
            </div>

            {
                if fetch_state.is_loading() {
                    html! { <Loading /> }
                } else {
                    html! {
                        <>
                            <div class="card bg-base-100 shadow-md mb-8">
                                <div class="card-body">
                                    <h1 class="text-2xl font-bold text-primary">{ "Community" }</h1>
                                    <p class="text-base-content/70">{ format!("Created by: {owner_name}") }</p>
                                </div>
                            </div>

                            <div class="mb-4">
                                <h2 class="text-xl font-semibold text-primary">{ "Community Members" }</h2>
                                <p class="text-sm text-base-content/60">
                                    { format!("Total members: {}", members.len()) }
                                </p>
                            </div>

                            {
                                if members.is_empty() {
                                    html! {
                                        <div class="bg-base-100 rounded-lg p-8 text-center shadow-md">
                                            <p class="text-base-content/70 mb-4">{ "No members in this community yet." }</p>
                                            <button class="btn btn-primary" type="button" onclick={open_modal}>
                                                <i class="fa-solid fa-plus mr-2"></i>
                                                { "Add First Member" }
                                            </button>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                            { for members.iter().map(|member| html! {
                                                <MemberCard
                                                    key={member.id.clone()}
                                                    member={member.clone()}
                                                    on_remove={on_remove_member.clone()}
                                                />
                                            })}
                                        </div>
                                    }
                                }
                            }
                        </>
                    }
                }
            }

            <Modal open={*modal_open} title="Add New Member" on_close={reset_member_form.clone()}>
                <form class="space-y-4" onsubmit={on_add_member}>
                    <div class="form-control">
                        <label class="label" for="member-user-id">
                            <span class="label-text">{ "User ID *" }</span>
                        </label>
                        <input
                            id="member-user-id"
                            class="input input-bordered w-full"
                            type="text"
                            placeholder="Enter user ID"
                            value={(*member_user_id).clone()}
                            oninput={on_user_id_input}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="member-role">
                            <span class="label-text">{ "Role *" }</span>
                        </label>
                        <select
                            id="member-role"
                            class="select select-bordered w-full"
                            onchange={on_role_change}
                        >
                            <option value="member" selected={!member_role.is_admin()}>{ "Community Member" }</option>
                            <option value="admin" selected={member_role.is_admin()}>{ "Community Admin" }</option>
                        </select>
                    </div>
                    <div class="flex justify-end space-x-3 pt-4">
                        <button
                            class="btn btn-ghost"
                            type="button"
                            onclick={Callback::from(move |_: MouseEvent| reset_member_form.emit(()))}
                        >
                            { "Cancel" }
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { "Adding..." } else { "Add Member" } }
                        </button>
                    </div>
                </form>
            </Modal>

            <Toast toast={(*toast).clone()} on_close={close_toast} />
        </div>
    }
}
