use yew::prelude::*;

use crate::components::buttons::GoldButton;
use crate::components::reveal::{Entrance, Reveal};

#[function_component(FinalCtaSection)]
pub fn final_cta_section() -> Html {
    html! {
        <section id="contato" class="final-cta-section">
            <div class="final-cta-glow"></div>
            <div class="final-cta-content">
                <Reveal entrance={Entrance::Grow(0.95)}>
                    <h2 class="final-cta-title">
                        {"Quer um site "}
                        <span class="text-gold">{"nesse nível?"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Vamos resolver isso hoje. Uma conversa rápida e começamos."}
                    </p>
                    <GoldButton whatsapp_message={"Olá, queria levar meu site para o próximo nível!"}>
                        {"Iniciar Conversa"}
                    </GoldButton>
                </Reveal>
            </div>
        </section>
    }
}
