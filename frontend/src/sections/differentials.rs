use yew::prelude::*;

use crate::components::container::Container;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::Reveal;

/// Copies of each row laid end to end so the loop never shows a seam.
const REPEATS: usize = 4;

type Differential = (Icon, &'static str);

static ROW_ONE: [Differential; 4] = [
    (Icon::Palette, "Design Premium"),
    (Icon::Smartphone, "Mobile-first"),
    (Icon::Zap, "Alta Performance"),
    (Icon::Search, "SEO Otimizado"),
];

static ROW_TWO: [Differential; 4] = [
    (Icon::Message, "Suporte Direto"),
    (Icon::Rocket, "Conversão em Foco"),
    (Icon::Shield, "Segurança Total"),
    (Icon::Globe, "Domínio Grátis (1 ano)"),
];

pub fn marquee_animation(reverse: bool, duration_s: u32) -> String {
    let name = if reverse { "marquee-reverse" } else { "marquee" };
    format!("animation: {} {}s linear infinite;", name, duration_s)
}

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    items: &'static [Differential],
    #[prop_or(false)]
    reverse: bool,
    duration: u32,
}

#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    let pills = props.items.iter().cycle().take(props.items.len() * REPEATS).enumerate();
    html! {
        <div class="marquee-row">
            <div class="marquee-track" style={marquee_animation(props.reverse, props.duration)}>
                { for pills.map(|(index, (icon, label))| html! {
                    <div key={format!("{}-{}", label, index)} class="pill">
                        <SvgIcon icon={*icon} class="pill-icon" />
                        <span>{ *label }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(DifferentialsSection)]
pub fn differentials_section() -> Html {
    html! {
        <section class="differentials-section">
            <Container class="section-header">
                <Reveal>
                    <h2 class="differentials-title">
                        {"Por que "}
                        <span class="text-gold-gradient">{"me escolher?"}</span>
                    </h2>
                    <p class="section-lead">{"Mais do que sites, entrego soluções digitais completas."}</p>
                </Reveal>
            </Container>

            <div class="marquee">
                <MarqueeRow items={&ROW_ONE[..]} duration={25} />
                <MarqueeRow items={&ROW_TWO[..]} reverse=true duration={30} />
                <div class="marquee-fade fade-left"></div>
                <div class="marquee-fade fade-right"></div>
            </div>

            <style>
                {r#"
                    @keyframes marquee {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }
                    @keyframes marquee-reverse {
                        0% { transform: translateX(-50%); }
                        100% { transform: translateX(0); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_run_in_opposite_directions() {
        assert_eq!(marquee_animation(false, 25), "animation: marquee 25s linear infinite;");
        assert_eq!(marquee_animation(true, 30), "animation: marquee-reverse 30s linear infinite;");
    }
}
