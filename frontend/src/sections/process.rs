use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::buttons::GoldButton;
use crate::components::container::Container;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::{Entrance, Reveal};
use crate::scroll::progress::remap;
use crate::scroll::tracking::use_scroll_progress;
use crate::timeline::{
    CardFrame, HorizontalTimeline, StepIcon, TimelineFrame, TimelineStep, TimelineStrategy,
};
use crate::viewport::use_viewport;

/// Card tilt at the edges of the card, in degrees.
const MAX_TILT_DEG: f64 = 7.0;

pub static STEPS: [TimelineStep; 5] = [
    TimelineStep {
        id: 1,
        phase: "Fase 01",
        title: "Briefing Inicial",
        description: "Entendimento profundo do seu negócio e objetivos.",
        icon: StepIcon::Search,
    },
    TimelineStep {
        id: 2,
        phase: "Fase 02",
        title: "Estratégia Visual",
        description: "Definição de identidade, layout e referências.",
        icon: StepIcon::Target,
    },
    TimelineStep {
        id: 3,
        phase: "Fase 03",
        title: "Desenvolvimento",
        description: "Construção com código limpo e tecnologias modernas.",
        icon: StepIcon::Code,
    },
    TimelineStep {
        id: 4,
        phase: "Fase 04",
        title: "Refinamento",
        description: "Ajustes finos, animações e otimização total.",
        icon: StepIcon::Sparkles,
    },
    TimelineStep {
        id: 5,
        phase: "Fase 05",
        title: "Entrega Final",
        description: "Seu site no ar, rápido e pronto para vender.",
        icon: StepIcon::Check,
    },
];

const CTA_MESSAGE: &str = "Olá! Vi sua Metodologia e quero iniciar um projeto.";

type Rgba = (f64, f64, f64, f64);

const DORMANT_RING: Rgba = (38.0, 38.0, 38.0, 1.0);
const DORMANT_CORE: Rgba = (23.0, 23.0, 23.0, 1.0);
const DORMANT_BORDER: Rgba = (255.0, 255.0, 255.0, 0.05);
const GOLD: Rgba = (250.0, 204.0, 21.0, 1.0);

/// CSS color `t` of the way from `from` to `to`.
pub fn mix(from: Rgba, to: Rgba, t: f64) -> String {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: f64, b: f64| a + (b - a) * t;
    format!(
        "rgba({:.0}, {:.0}, {:.0}, {:.3})",
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
        channel(from.3, to.3)
    )
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)`, both given
/// as offsets from the card center in card-size units (-0.5..0.5).
pub fn tilt(x: f64, y: f64) -> (f64, f64) {
    (
        remap(y, -0.5..0.5, MAX_TILT_DEG..-MAX_TILT_DEG),
        remap(x, -0.5..0.5, -MAX_TILT_DEG..MAX_TILT_DEG),
    )
}

#[function_component(ProcessHeader)]
fn process_header() -> Html {
    html! {
        <section class="process-header">
            <Container>
                <div class="process-header-copy">
                    <h1 class="process-title">
                        {"Meu"}<br /><span class="text-gold">{"Método"}</span>
                    </h1>
                    <p class="process-tagline">{"Estratégia que pensa. Execução que impacta."}</p>
                    <div class="process-manifesto">
                        <p>
                            {"Nada aqui é por acaso."}<br />
                            {"Cada projeto nasce de uma arquitetura clara, construída para transformar visão criativa em presença digital que entrega estética, performance e posicionamento."}
                        </p>
                        <p class="process-aside">{"Criar página não é sobre design. É sobre direção."}</p>
                    </div>
                </div>
            </Container>
            <Container class="process-hint">
                <SvgIcon icon={Icon::ArrowDown} size={24} class="text-gold" />
                <span>{"Conheça a lógica por trás da estética"}</span>
            </Container>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProgressNodeProps {
    x: f64,
    active: f64,
}

#[function_component(ProgressNode)]
fn progress_node(props: &ProgressNodeProps) -> Html {
    let scale = 0.8 + 0.4 * props.active;
    let glow = format!("0 0 {:.0}px {}", 30.0 * props.active, mix(DORMANT_RING, GOLD, props.active));
    html! {
        <div class="timeline-node" style={format!("left: {}px;", props.x)}>
            <div
                class="timeline-node-ring"
                style={format!(
                    "transform: scale({:.3}); border-color: {}; box-shadow: {};",
                    scale,
                    mix(DORMANT_RING, GOLD, props.active),
                    glow
                )}
            >
                <div class="timeline-node-core" style={format!("background-color: {};", mix(DORMANT_CORE, GOLD, props.active))} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SpotlightCardProps {
    step: &'static TimelineStep,
    width: f64,
    frame: CardFrame,
}

/// Step card that tilts toward the pointer and lights up once passed.
#[function_component(SpotlightCard)]
fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let node = use_node_ref();
    let rotation = use_state_eq(|| (0.0_f64, 0.0_f64));

    let onmousemove = {
        let node = node.clone();
        let rotation = rotation.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = node.cast::<HtmlElement>() else { return };
            let rect = card.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let local_x = e.client_x() as f64 - rect.left();
            let local_y = e.client_y() as f64 - rect.top();
            rotation.set(tilt(local_x / rect.width() - 0.5, local_y / rect.height() - 0.5));
            // Spotlight center for the radial gradient
            let style = card.style();
            let _ = style.set_property("--x", &format!("{}px", local_x));
            let _ = style.set_property("--y", &format!("{}px", local_y));
        })
    };
    let onmouseleave = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.set((0.0, 0.0)))
    };

    let (rotate_x, rotate_y) = *rotation;
    let active = props.frame.active;
    let style = format!(
        "width: {}px; transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); border-color: {}; box-shadow: 0 0 {:.0}px rgba(250, 204, 21, {:.3});",
        props.width,
        rotate_x,
        rotate_y,
        mix(DORMANT_BORDER, GOLD, active),
        60.0 * active,
        0.3 * active,
    );

    html! {
        <div ref={node} class="spotlight-card" {style} {onmousemove} {onmouseleave}>
            <div class="spotlight-glow"></div>
            <div class="spotlight-body">
                <div class="spotlight-top">
                    <div class="phase-badge"><span>{ props.step.phase }</span></div>
                    <SvgIcon icon={Icon::from(props.step.icon)} size={32} class="spotlight-icon" />
                </div>
                <h3>{ props.step.title }</h3>
                <p>{ props.step.description }</p>
                <div class="spotlight-bar">
                    <div class="spotlight-bar-fill" style={format!("width: {:.2}%;", props.frame.bar_fill)} />
                </div>
            </div>
            <span class="spotlight-number">{ format!("0{}", props.step.id) }</span>
        </div>
    }
}

fn closing_cta(width: f64) -> Html {
    html! {
        <div class="timeline-cta" style={format!("width: {}px;", width)}>
            <div class="timeline-cta-badge">
                <div class="timeline-cta-halo"></div>
                <div class="timeline-cta-disc"><SvgIcon icon={Icon::Zap} size={48} /></div>
            </div>
            <h3>{"Vamos"}<br />{"Começar?"}</h3>
            <GoldButton whatsapp_message={CTA_MESSAGE}>{"Solicitar Projeto"}</GoldButton>
        </div>
    }
}

fn horizontal_strip(timeline: &HorizontalTimeline, frame: &TimelineFrame, steps: &'static [TimelineStep]) -> Html {
    let layout = &timeline.layout;
    html! {
        <div class="timeline-strip" style={format!("transform: translate3d({:.2}px, 0, 0);", frame.translate_x)}>
            <div class="timeline-ghost" style={format!("width: {}px;", timeline.total_width)} />

            <div class="timeline-line" style={format!("left: {}px; width: {}px;", timeline.line_start, timeline.line_length)}>
                <div class="timeline-line-track" />
                <div class="timeline-line-laser" style={format!("width: {:.3}%;", frame.line_fill)} />
            </div>

            { for timeline.node_positions.iter().zip(frame.nodes.iter()).enumerate().map(|(index, (x, active))| html! {
                <ProgressNode key={index} x={*x} active={*active} />
            }) }

            <div class="timeline-pad" style={format!("width: {}px;", layout.padding_start)} />

            <div class="timeline-cards">
                { for steps.iter().zip(frame.cards.iter()).map(|(step, card)| html! {
                    <div key={step.id} class="timeline-block" style={format!("width: {}px;", layout.block_width())}>
                        <SpotlightCard {step} width={layout.card_width} frame={*card} />
                    </div>
                }) }
            </div>

            { closing_cta(layout.cta_width) }
        </div>
    }
}

fn stacked_list(steps: &'static [TimelineStep]) -> Html {
    html! {
        <div class="timeline-stacked">
            <Container>
                { for steps.iter().enumerate().map(|(index, step)| html! {
                    <Reveal key={step.id} class="stacked-step" entrance={Entrance::Rise(30.0)} duration={0.5} delay={index as f64 * 0.05}>
                        <div class="stacked-marker"><SvgIcon icon={Icon::from(step.icon)} size={20} /></div>
                        <div class="stacked-body">
                            <span class="phase-badge"><span>{ step.phase }</span></span>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </div>
                    </Reveal>
                }) }
                <Reveal class="stacked-cta" entrance={Entrance::Grow(0.95)}>
                    <h3>{"Vamos Começar?"}</h3>
                    <GoldButton whatsapp_message={CTA_MESSAGE}>{"Solicitar Projeto"}</GoldButton>
                </Reveal>
            </Container>
        </div>
    }
}

/// One entry point for both timeline variants.
pub fn render_timeline(
    strategy: &TimelineStrategy,
    progress: f64,
    steps: &'static [TimelineStep],
    track: NodeRef,
) -> Html {
    match (strategy, strategy.frame(progress)) {
        (TimelineStrategy::Horizontal(timeline), Some(frame)) => html! {
            <section ref={track} class="timeline-track">
                <div class="timeline-sticky">
                    { horizontal_strip(timeline, &frame, steps) }
                </div>
            </section>
        },
        _ => stacked_list(steps),
    }
}

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    let viewport = use_viewport();
    let track = use_node_ref();
    let progress = use_scroll_progress(track.clone());
    // Rebuilt on every viewport change so no stale thresholds survive
    let strategy = use_memo(|viewport| TimelineStrategy::select(viewport, STEPS.len()), viewport);

    html! {
        <section id="processo" class="process-section">
            <ProcessHeader />
            { render_timeline(&strategy, progress, &STEPS, track) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_follows_pointer() {
        assert_eq!(tilt(0.0, 0.0), (0.0, 0.0));
        assert_eq!(tilt(0.5, -0.5), (MAX_TILT_DEG, MAX_TILT_DEG));
        assert_eq!(tilt(-0.5, 0.5), (-MAX_TILT_DEG, -MAX_TILT_DEG));
    }

    #[test]
    fn tilt_is_clamped_outside_card() {
        assert_eq!(tilt(3.0, -3.0), (MAX_TILT_DEG, MAX_TILT_DEG));
    }

    #[test]
    fn colors_blend_to_gold() {
        assert_eq!(mix(DORMANT_RING, GOLD, 0.0), "rgba(38, 38, 38, 1.000)");
        assert_eq!(mix(DORMANT_RING, GOLD, 1.0), "rgba(250, 204, 21, 1.000)");
        assert_eq!(mix(DORMANT_BORDER, GOLD, 2.0), "rgba(250, 204, 21, 1.000)");
    }

    #[test]
    fn step_ids_are_sequential() {
        for (index, step) in STEPS.iter().enumerate() {
            assert_eq!(step.id as usize, index + 1);
        }
    }
}
