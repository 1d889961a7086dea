use yew::prelude::*;

use crate::components::container::Container;
use crate::components::glass_card::GlassCard;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::{Entrance, Reveal};

struct Highlight {
    icon: Icon,
    label: &'static str,
    description: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: Icon::Clock, label: "19 anos", description: "Jovem e atualizado com as tendências" },
    Highlight { icon: Icon::Award, label: "3 anos na área", description: "Experiência sólida em projetos reais" },
    Highlight { icon: Icon::Target, label: "Foco 100% em sites", description: "Especialista, não generalista" },
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="sobre" class="about-section">
            <div class="ambient-glow glow-top-left"></div>
            <div class="ambient-glow glow-bottom-right"></div>

            <Container class="about-grid">
                <Reveal class="about-copy" entrance={Entrance::SlideX(-30.0)}>
                    <span class="section-eyebrow">
                        <SvgIcon icon={Icon::Star} size={16} />
                        {"Sobre mim"}
                    </span>
                    <h2 class="section-title">
                        {"Não faço tudo."}
                        <br />
                        <span class="text-gold-gradient">{"Faço sites muito bem."}</span>
                    </h2>
                    <div class="about-text">
                        <p>
                            {"Meu nome é Cauã. Aos 19 anos, já acumulei 3 anos de experiência criando websites que realmente funcionam. Meu foco é exclusivo: landing pages, sites institucionais e portfólios que convertem visitantes em clientes."}
                        </p>
                        <p>
                            {"Enquanto outros tentam fazer de tudo, eu escolhi dominar uma única coisa. Cada projeto recebe atenção total, desde o design até a performance final."}
                        </p>
                    </div>
                </Reveal>

                <div class="about-highlights">
                    { for HIGHLIGHTS.iter().enumerate().map(|(index, item)| html! {
                        <GlassCard key={item.label} class="highlight-card" delay={index as f64 * 0.15}>
                            <div class="highlight-icon">
                                <SvgIcon icon={item.icon} size={24} />
                            </div>
                            <div>
                                <h3>{ item.label }</h3>
                                <p>{ item.description }</p>
                            </div>
                        </GlassCard>
                    }) }
                </div>
            </Container>
        </section>
    }
}
