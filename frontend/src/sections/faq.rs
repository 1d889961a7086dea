use yew::prelude::*;

use crate::components::container::Container;
use crate::components::glass_card::GlassCard;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::Reveal;

const FAQS: [(&str, &str); 5] = [
    (
        "Você faz apenas sites?",
        "Sim. Meu foco é 100% em desenvolvimento web: landing pages, sites institucionais e portfólios. Isso me permite entregar qualidade máxima em cada projeto.",
    ),
    (
        "Quanto tempo leva para ficar pronto?",
        "Depende do escopo e complexidade do projeto. Uma Landing Page geralmente leva de 5 a 10 dias úteis. Sites institucionais podem levar de 15 a 30 dias.",
    ),
    (
        "O site é responsivo?",
        "Com certeza. Todos os projetos são desenvolvidos com a metodologia \"Mobile First\", garantindo que funcionem perfeitamente em celulares, tablets e computadores.",
    ),
    (
        "Como funciona o pagamento?",
        "Trabalho com 50% de entrada para iniciar o projeto e 50% na entrega. Aceito PIX e Cartão de Crédito (parcelado).",
    ),
    (
        "Vou ter acesso para editar o site depois?",
        "Sim! Se o projeto for em WordPress ou plataforma similar, você terá acesso total ao painel administrativo para fazer alterações de texto e imagem.",
    ),
];

/// Clicking the open item closes it; clicking another one moves the
/// selection there.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state_eq(|| Some(0usize));

    html! {
        <section id="faq" class="faq-section">
            <Container>
                <div class="faq-column">
                    <Reveal class="section-header">
                        <span class="section-eyebrow">{"Dúvidas Comuns"}</span>
                        <h2 class="section-title">
                            {"Perguntas "}
                            <span class="text-gold-gradient">{"Frequentes"}</span>
                        </h2>
                    </Reveal>

                    <div class="faq-list">
                        { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                            let is_open = *open == Some(index);
                            let onclick = {
                                let open = open.clone();
                                Callback::from(move |_: MouseEvent| open.set(toggle(*open, index)))
                            };
                            html! {
                                <GlassCard key={index} class={classes!("faq-item", is_open.then_some("is-open"))}>
                                    <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                                        <span>{ *question }</span>
                                        <div class="faq-toggle">
                                            <SvgIcon icon={if is_open { Icon::Minus } else { Icon::Plus }} />
                                        </div>
                                    </button>
                                    if is_open {
                                        <div class="faq-answer">{ *answer }</div>
                                    }
                                </GlassCard>
                            }
                        }) }
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_open_at_a_time() {
        assert_eq!(toggle(Some(0), 2), Some(2));
        assert_eq!(toggle(None, 1), Some(1));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(3), 3), None);
    }
}
