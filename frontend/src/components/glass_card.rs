use yew::prelude::*;

use crate::components::reveal::{use_reveal, Entrance};

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Reveal delay in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    pub children: Children,
}

/// Frosted card that rises into place the first time it is seen.
#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "-50px");

    html! {
        <div
            ref={node}
            class={classes!("glass-card", props.class.clone())}
            style={Entrance::Rise(20.0).style(revealed, 0.5, props.delay)}
        >
            <div class="glass-card-sheen"></div>
            <div class="glass-card-border"></div>
            { for props.children.iter() }
        </div>
    }
}
