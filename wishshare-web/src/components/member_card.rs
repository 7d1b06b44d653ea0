use shared::models::CommunityMember;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct MemberCardProps {
    pub member: CommunityMember,
    /// Emits the membership id when removal is requested.
    pub on_remove: Callback<String>,
}

#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    let member = &props.member;
    let on_remove = {
        let on_remove = props.on_remove.clone();
        let id = member.id.clone();
        Callback::from(move |_: yew::MouseEvent| on_remove.emit(id.clone()))
    };

    let role_class = if member.role.is_admin() {
        "badge badge-primary capitalize"
    } else {
        "badge badge-ghost capitalize"
    };

    html! {
        <div class="card bg-base-100 shadow-md hover:shadow-lg transition-shadow">
            <div class="card-body p-4">
                <div class="flex items-start space-x-4">
                    <div class="avatar relative">
                        <div class="w-12 rounded-full border-2 border-base-300">
                            <img src={member.profile_pic.clone()} alt={member.user_name.clone()} />
                        </div>
                        {
                            if member.role.is_admin() {
                                html! { <span class="absolute -bottom-1 -right-1 badge badge-warning badge-xs">{ "★" }</span> }
                            } else {
                                Html::default()
                            }
                        }
                    </div>
                    <div class="flex-1 min-w-0">
                        <h3 class="text-lg font-semibold truncate">{ &member.user_name }</h3>
                        <p class="text-sm text-base-content/60 truncate">{ format!("ID: {}", member.user_id) }</p>
                    </div>
                    <button class="btn btn-sm btn-circle btn-ghost" type="button" title="Remove member" onclick={on_remove}>
                        <i class="fa-solid fa-trash text-error"></i>
                    </button>
                </div>
                <div class="border-t border-base-300 pt-3 mt-3">
                    <p class="text-sm">
                        <span class="font-medium">{ "Role: " }</span>
                        <span class={role_class}>{ member.role.to_string() }</span>
                    </p>
                    <p class="text-xs text-base-content/60 mt-1">
                        { format!("Joined: {}", member.created_at.format("%b %e, %Y")) }
                    </p>
                </div>
            </div>
        </div>
    }
}
