use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Centered page column, 1440px max.
#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("site-container", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
