use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DownArrowProps {
    #[prop_or(AttrValue::Static("currentColor"))]
    pub color: AttrValue,
    #[prop_or(AttrValue::Static("100"))]
    pub width: AttrValue,
    #[prop_or(AttrValue::Static("100"))]
    pub height: AttrValue,
}

/// Chevron pointing down, used as a scroll cue under the hero titles.
#[function_component(DownArrow)]
pub fn down_arrow(props: &DownArrowProps) -> Html {
    html! {
        <svg
            width={props.width.clone()}
            height={props.height.clone()}
            viewBox="0 0 24 24"
            fill="none"
            aria-hidden="true"
        >
            <path
                d="M6 9l6 6 6-6"
                stroke={props.color.clone()}
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
