use crate::api::WishShareClient;
use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let restored = use_state(|| false);

    // Restore the session exactly once, before any authenticated route
    // renders.
    {
        let restored = restored.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = WishShareClient::shared();
                session::restore(&client, &dispatch).await;
                restored.set(true);
            });
            || ()
        });
    }

    let logout_callback = {
        let dispatch = dispatch;
        Callback::from(move |()| session::clear(&dispatch))
    };

    if !*restored {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
        </BrowserRouter>
    }
}
