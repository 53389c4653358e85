use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CollapsibleProps {
    pub title: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Collapsible)]
pub fn collapsible(props: &CollapsibleProps) -> Html {
    let chevron = if props.open { "fa-solid fa-chevron-down" } else { "fa-solid fa-chevron-right" };

    html! {
        <div class="collapsible">
            <button class="collapsible-toggle" onclick={props.on_toggle.clone()}>
                <i class={chevron}></i>
                { " " }{ props.title.clone() }
            </button>
            if props.open {
                <div class="collapsible-body">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
