use crate::pagination::{PageItem, Pagination, page_items};
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageControlsProps {
    pub pagination: Pagination,
    pub on_page_change: Callback<u32>,
}

/// Previous/next buttons with the page-number strip in between.
///
/// Hidden entirely while the collection fits on a single page. Range
/// checks live in the pagination guard, not here; the controls only
/// disable the arrows at the edges.
#[function_component(PageControls)]
pub fn page_controls(props: &PageControlsProps) -> Html {
    let pagination = &props.pagination;
    if pagination.total_pages <= 1 {
        return html! {};
    }

    let previous = {
        let on_page_change = props.on_page_change.clone();
        let target = pagination.current_page.saturating_sub(1);
        Callback::from(move |_: yew::MouseEvent| on_page_change.emit(target))
    };

    let next = {
        let on_page_change = props.on_page_change.clone();
        let target = pagination.current_page + 1;
        Callback::from(move |_: yew::MouseEvent| on_page_change.emit(target))
    };

    html! {
        <div class="flex justify-center items-center mt-8 space-x-2">
            <button
                class="btn btn-sm btn-ghost"
                type="button"
                disabled={!pagination.has_previous()}
                onclick={previous}
            >
                <i class="fa-solid fa-chevron-left"></i>
            </button>

            { for page_items(pagination.current_page, pagination.total_pages)
                .into_iter()
                .map(|item| match item {
                    PageItem::Ellipsis => html! { <span class="px-3 py-1">{ "..." }</span> },
                    PageItem::Page(page) => {
                        let on_page_change = props.on_page_change.clone();
                        let is_current = page == pagination.current_page;
                        let class = if is_current {
                            classes!("btn", "btn-sm", "btn-primary")
                        } else {
                            classes!("btn", "btn-sm", "btn-ghost")
                        };
                        html! {
                            <button
                                {class}
                                type="button"
                                onclick={Callback::from(move |_| on_page_change.emit(page))}
                            >
                                { page }
                            </button>
                        }
                    }
                })
            }

            <button
                class="btn btn-sm btn-ghost"
                type="button"
                disabled={!pagination.has_next()}
                onclick={next}
            >
                <i class="fa-solid fa-chevron-right"></i>
            </button>
        </div>
    }
}
