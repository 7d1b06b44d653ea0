use yew::{AttrValue, Callback, Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Centered dialog with a backdrop; clicking the close button emits
/// `on_close`, the caller decides what closing means.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: yew::MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                    <button class="btn btn-sm btn-circle btn-ghost" type="button" onclick={on_close}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}
