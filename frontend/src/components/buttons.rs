use yew::prelude::*;

use crate::config::whatsapp_link;

#[derive(Properties, PartialEq)]
pub struct GoldButtonProps {
    /// Text prefilled in the WhatsApp chat the button opens.
    pub whatsapp_message: &'static str,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Primary call to action: a gold link into a WhatsApp chat.
#[function_component(GoldButton)]
pub fn gold_button(props: &GoldButtonProps) -> Html {
    html! {
        <a
            href={whatsapp_link(props.whatsapp_message)}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("btn-primary-gold", props.class.clone())}
        >
            <span class="btn-label">{ for props.children.iter() }</span>
            <div class="inner-glow"></div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CyberButtonProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(CyberButton)]
pub fn cyber_button(props: &CyberButtonProps) -> Html {
    html! {
        <button
            class={classes!("btn-secondary-cyber", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
