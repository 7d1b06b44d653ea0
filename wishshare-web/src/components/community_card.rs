use shared::models::Community;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CommunityCardProps {
    pub community: Community,
    /// Emits the community id when the card is opened.
    pub on_open: Callback<String>,
}

#[function_component(CommunityCard)]
pub fn community_card(props: &CommunityCardProps) -> Html {
    let community = &props.community;
    let onclick = {
        let on_open = props.on_open.clone();
        let id = community.id.clone();
        Callback::from(move |_: yew::MouseEvent| on_open.emit(id.clone()))
    };

    html! {
        <div class="card bg-base-100 shadow-md hover:shadow-lg transition-shadow cursor-pointer" onclick={onclick.clone()}>
            <div class="card-body">
                <h3 class="card-title text-lg">{ &community.name }</h3>
                <p class="text-sm text-base-content/70">
                    { format!("Created: {}", community.created_at.format("%b %e, %Y")) }
                </p>
                <div class="card-actions mt-2">
                    <button class="btn btn-sm btn-outline btn-primary w-full" type="button" {onclick}>
                        { "View Community" }
                    </button>
                </div>
            </div>
        </div>
    }
}
