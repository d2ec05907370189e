use yew::prelude::*;
use crate::models::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

/// Pinta un `Icon` como SVG inline (stroke = currentColor)
#[function_component(IconSvg)]
pub fn icon_svg(props: &IconSvgProps) -> Html {
    let class = classes!("lucide", format!("lucide-{}", props.icon.name()), props.class.clone());

    html! {
        <svg
            class={class}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
