use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterButtonProps {
    pub label: AttrValue,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(FilterButton)]
pub fn filter_button(props: &FilterButtonProps) -> Html {
    html! {
        <button
            class={classes!("filter-button", props.active.then_some("active"))}
            aria-pressed={props.active.to_string()}
            onclick={props.onclick.clone()}
        >
            if props.active {
                <span class="filter-button-bg"></span>
            }
            <span class="filter-button-label">{props.label.to_string()}</span>
        </button>
    }
}
