use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::container::Container;
use crate::components::icons::{Icon, SvgIcon};
use crate::config::whatsapp_link;
use crate::scroll::driver::use_scroll_handle;

#[function_component(FooterSection)]
pub fn footer_section() -> Html {
    let handle = use_scroll_handle();
    let year = Local::now().year();

    let to_top = Callback::from(move |_: MouseEvent| {
        if let Some(handle) = handle.as_ref() {
            handle.scroll_to(0.0, false);
        }
    });

    html! {
        <footer class="site-footer">
            <Container class="footer-grid">
                <div class="footer-brand">
                    <span class="brand">{"Cauã"}<span class="text-gold">{"."}</span></span>
                    <p>{"Desenvolvimento Web de Alta Performance"}</p>
                    <p class="footer-copyright">{ format!("© {} Cauã. Todos os direitos reservados.", year) }</p>
                </div>

                <div class="footer-social">
                    <a
                        href={whatsapp_link("Olá! Vim pelo seu site.")}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="social-link social-whatsapp"
                        aria-label="WhatsApp"
                    >
                        <SvgIcon icon={Icon::Message} />
                    </a>
                    <a href="#" target="_blank" rel="noopener noreferrer" class="social-link social-instagram" aria-label="Instagram">
                        <SvgIcon icon={Icon::Instagram} />
                    </a>
                    <a href="#" target="_blank" rel="noopener noreferrer" class="social-link social-linkedin" aria-label="LinkedIn">
                        <SvgIcon icon={Icon::Linkedin} />
                    </a>
                </div>

                <div class="footer-top">
                    <button class="back-to-top" onclick={to_top}>
                        {"Voltar ao topo"}
                        <SvgIcon icon={Icon::ArrowUp} size={16} />
                    </button>
                </div>
            </Container>
        </footer>
    }
}
