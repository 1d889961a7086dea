use yew::prelude::*;

use crate::components::buttons::CyberButton;
use crate::components::container::Container;
use crate::components::glass_card::GlassCard;
use crate::components::icons::{Icon, SvgIcon};
use crate::components::reveal::Reveal;
use crate::scroll::driver::use_scroll_handle;

struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    tags: [&'static str; 3],
    /// Modifier class picking the cover gradient.
    cover: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "E-commerce de Luxo",
        category: "Loja Virtual",
        description: "Design minimalista focado em produtos high-ticket.",
        tags: ["UX/UI", "Conversão", "Performance"],
        cover: "cover-amber",
    },
    Project {
        title: "Consultoria Financeira",
        category: "Institucional",
        description: "Plataforma corporativa com área de membros.",
        tags: ["React", "Dashboard", "Segurança"],
        cover: "cover-blue",
    },
    Project {
        title: "Landing Page SaaS",
        category: "Software",
        description: "Página de alta conversão para startup de tecnologia.",
        tags: ["Copywriting", "SEO", "Analytics"],
        cover: "cover-emerald",
    },
    Project {
        title: "Portfólio Criativo",
        category: "Pessoal",
        description: "Showcase interativo para agência de design.",
        tags: ["WebGL", "Animação", "3D"],
        cover: "cover-purple",
    },
];

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let handle = use_scroll_handle();
    let to_contact = Callback::from(move |_: MouseEvent| {
        if let Some(handle) = handle.as_ref() {
            handle.scroll_to_selector("#contato");
        }
    });

    html! {
        <section id="projetos" class="projects-section">
            <Container>
                <Reveal class="section-header" duration={0.6}>
                    <span class="section-eyebrow">{"Portfólio Selecionado"}</span>
                    <h2 class="section-title">
                        {"Projetos que "}
                        <span class="text-gold-gradient">{"geram impacto"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Uma seleção de trabalhos recentes onde design, performance e estratégia se encontram."}
                    </p>
                </Reveal>

                <div class="projects-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <GlassCard key={project.title} class="project-card" delay={index as f64 * 0.1}>
                            <div class={classes!("project-cover", project.cover)}>
                                <div class="project-cover-fade"></div>
                                <div class="project-cover-hover">
                                    <div class="project-cover-badge">
                                        <SvgIcon icon={Icon::ExternalLink} size={24} />
                                    </div>
                                </div>
                            </div>
                            <div class="project-body">
                                <span class="project-category">{ project.category }</span>
                                <h3>{ project.title }</h3>
                                <p>{ project.description }</p>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! {
                                        <span key={*tag} class="tag">{ *tag }</span>
                                    }) }
                                </div>
                            </div>
                        </GlassCard>
                    }) }
                </div>

                <Reveal class="projects-cta" duration={0.6} delay={0.2}>
                    <CyberButton onclick={to_contact}>
                        {"Iniciar Projeto"}
                        <SvgIcon icon={Icon::ArrowRight} />
                    </CyberButton>
                </Reveal>
            </Container>
        </section>
    }
}
