use crate::containers::header::Header;
use yew::{Callback, Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header on_logout={props.on_logout.clone()} />
            <div class="min-h-screen bg-base-100">
                <main class="max-w-7xl mx-auto px-4 py-6">
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{ "WishShare · Create and share wishlists with friends" }</p>
                    </div>
                </footer>
            </div>
        </>
    }
}
