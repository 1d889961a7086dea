use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use crate::components::buttons::CyberButton;
use crate::components::container::Container;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::{Entrance, Reveal};
use crate::config::whatsapp_link;
use crate::scroll::driver::{use_scroll_handle, ScrollHandle};
use crate::scroll::tracking::use_scroll_progress;
use crate::sections::lantern::{self, LanternStage};
use crate::viewport::use_viewport;

const LANTERN_IMAGE: &str = "/models/lantern.webp";

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

struct Service {
    id: &'static str,
    icon: Icon,
    title_prefix: &'static str,
    title_highlight: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    message: &'static str,
    side: Side,
}

static SERVICES: [Service; 3] = [
    Service {
        id: "service-1",
        icon: Icon::Zap,
        title_prefix: "Landing Page de",
        title_highlight: "Alta Conversão",
        description: "Página única focada em um objetivo: fazer seu visitante tomar ação. Design estratégico, copy persuasiva e velocidade máxima.",
        features: ["Foco em CTA", "Carregamento rápido", "Copy estratégica"],
        message: "Olá! Tenho interesse em uma Landing Page de Alta Conversão.",
        side: Side::Left,
    },
    Service {
        id: "service-2",
        icon: Icon::Globe,
        title_prefix: "Site Institucional",
        title_highlight: "Premium",
        description: "Presença digital profissional para sua empresa. Múltiplas páginas, SEO básico e credibilidade garantida.",
        features: ["Múltiplas páginas", "SEO otimizado", "Design profissional"],
        message: "Olá! Tenho interesse em um Site Institucional Premium.",
        side: Side::Right,
    },
    Service {
        id: "service-3",
        icon: Icon::Layers,
        title_prefix: "Portfólio /",
        title_highlight: "Catálogo",
        description: "Mostre seus trabalhos ou produtos de forma visual e organizada. Ideal para profissionais criativos e pequenas empresas.",
        features: ["Galeria visual", "Organização por categorias", "Design impactante"],
        message: "Olá! Tenho interesse em um Portfólio/Catálogo.",
        side: Side::Left,
    },
];

/// "Serviço 01", "Serviço 02", ...
pub fn service_label(index: usize) -> String {
    format!("Serviço {:02}", index + 1)
}

fn open_whatsapp(message: &str) {
    let Some(win) = window() else { return };
    if let Err(e) = win.open_with_url_and_target(&whatsapp_link(message), "_blank") {
        warn!("failed to open WhatsApp: {:?}", e);
    }
}

fn service_card(service: &'static Service, index: usize, compact: bool) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| open_whatsapp(service.message));
    html! {
        <div class={classes!("service-card-frame", compact.then_some("is-compact"))}>
            <div class="service-card">
                <div class="service-card-glow"></div>
                <div class="service-card-head">
                    <div class="service-icon">
                        <SvgIcon icon={service.icon} size={if compact { 28 } else { 32 }} />
                    </div>
                    <div>
                        <span class="service-label">{ service_label(index) }</span>
                        <h2 class="service-title">
                            { service.title_prefix }
                            <br />
                            <span class="text-gold-gradient">{ service.title_highlight }</span>
                        </h2>
                    </div>
                </div>
                <p class="service-description">{ service.description }</p>
                <ul class="service-features">
                    { for service.features.iter().map(|feature| html! {
                        <li key={*feature}><span class="feature-dot"></span>{ *feature }</li>
                    }) }
                </ul>
                <CyberButton class="service-cta" {onclick}>
                    {"Quero Esse"}
                    <SvgIcon icon={Icon::ArrowRight} />
                </CyberButton>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    /// The lantern only mounts once the intro effects have settled.
    pub effects_ready: bool,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let viewport = use_viewport();
    let desktop = viewport.device.is_desktop();

    html! {
        <section id="servicos" class="services-section">
            if desktop {
                <DesktopServices lantern={props.effects_ready} />
            } else {
                <div class="services-stacked">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal key={service.id} class="service-stacked-item" entrance={Entrance::Rise(30.0)} duration={0.5}>
                            <Container>{ service_card(service, index, true) }</Container>
                        </Reveal>
                    }) }
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct DesktopServicesProps {
    lantern: bool,
}

/// Alternating full-height cards with the lantern stage pinned behind them.
/// Unmounting this (viewport leaving desktop) disposes the stage.
#[function_component(DesktopServices)]
fn desktop_services(props: &DesktopServicesProps) -> Html {
    let track = use_node_ref();
    let layer = use_node_ref();
    let progress = use_scroll_progress(track.clone());
    let handle = use_scroll_handle();
    let image_failed = use_state_eq(|| false);

    // Latest progress for the frame loop, which outlives any one render
    let latest = use_mut_ref(|| 0.0_f64);
    *latest.borrow_mut() = progress;

    {
        let track = track.clone();
        let layer = layer.clone();
        use_effect_with_deps(
            move |enabled: &bool| {
                let mut running: Option<LanternLoop> = None;
                if *enabled {
                    if let (Some(layer), Some(container)) = (layer.cast::<HtmlElement>(), track.cast::<Element>()) {
                        let stage = lantern::setup(layer, &container);
                        running = LanternLoop::start(stage, latest, handle);
                    }
                }
                move || {
                    if let Some(running) = running {
                        running.stop();
                    }
                }
            },
            props.lantern,
        );
    }

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            warn!("lantern image missing, using placeholder");
            image_failed.set(true);
        })
    };

    html! {
        <div ref={track} class="services-desktop">
            <div class="lantern-sticky">
                <div class={classes!("lantern-stage", props.lantern.then_some("is-active"))}>
                    <div ref={layer} class="lantern-layer">
                        if *image_failed {
                            <div class="lantern-placeholder">
                                <div class="cube-face front"></div>
                                <div class="cube-face back"></div>
                                <div class="cube-face left"></div>
                                <div class="cube-face right"></div>
                                <div class="cube-face top"></div>
                                <div class="cube-face bottom"></div>
                            </div>
                        } else {
                            <img class="lantern-model" src={LANTERN_IMAGE} alt="" {onerror} />
                        }
                        <div class="lantern-light"></div>
                    </div>
                </div>
            </div>

            { for SERVICES.iter().enumerate().map(|(index, service)| {
                let (entrance, side) = match service.side {
                    Side::Left => (Entrance::SlideX(-50.0), "side-left"),
                    Side::Right => (Entrance::SlideX(50.0), "side-right"),
                };
                html! {
                    <div key={service.id} id={service.id} class="service-screen">
                        <Container class="service-screen-grid">
                            <Reveal class={classes!("service-slot", side)} {entrance} duration={0.5} delay={0.1}>
                                { service_card(service, index, false) }
                            </Reveal>
                        </Container>
                    </div>
                }
            }) }
        </div>
    }
}

/// Animation-frame loop painting one lantern stage.
struct LanternLoop {
    stage: Rc<LanternStage>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl LanternLoop {
    fn start(
        stage: LanternStage,
        progress: Rc<RefCell<f64>>,
        handle: Option<ScrollHandle>,
    ) -> Option<Self> {
        let win = window()?;
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        let stage = Rc::new(stage);

        {
            let stage = stage.clone();
            let next = callback.clone();
            let id_slot = frame_id.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                let viewport_height = handle
                    .as_ref()
                    .map(|h| h.last_frame().viewport_height)
                    .filter(|h| *h > 0.0)
                    .or_else(|| window()?.inner_height().ok()?.as_f64())
                    .unwrap_or(0.0);
                lantern::animate(&stage, *progress.borrow(), viewport_height, timestamp / 1000.0);

                if let Some(callback) = next.borrow().as_ref() {
                    if let Some(win) = window() {
                        id_slot.set(win.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }
        if let Some(first) = callback.borrow().as_ref() {
            frame_id.set(win.request_animation_frame(first.as_ref().unchecked_ref()).ok());
        }

        Some(Self {
            stage,
            callback,
            frame_id,
        })
    }

    fn stop(self) {
        if let (Some(win), Some(id)) = (window(), self.frame_id.take()) {
            let _ = win.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
        lantern::teardown(&self.stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_labels_are_zero_padded() {
        assert_eq!(service_label(0), "Serviço 01");
        assert_eq!(service_label(2), "Serviço 03");
    }

    #[test]
    fn cards_alternate_sides() {
        let sides: Vec<Side> = SERVICES.iter().map(|s| s.side).collect();
        assert!(sides == vec![Side::Left, Side::Right, Side::Left]);
    }
}
