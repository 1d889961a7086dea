use log::info;
use yew::prelude::*;

mod autoplay;
mod config;
mod loader;
mod timeline;
mod viewport;
mod scroll {
    pub mod driver;
    pub mod progress;
    pub mod scrollbar;
    pub mod smooth;
    pub mod tracking;
}
mod components {
    pub mod buttons;
    pub mod container;
    pub mod glass_card;
    pub mod icons;
    pub mod navbar;
    pub mod preloader;
    pub mod reveal;
    pub mod scrollbar;
}
mod sections {
    pub mod about;
    pub mod differentials;
    pub mod faq;
    pub mod final_cta;
    pub mod footer;
    pub mod hero;
    pub mod lantern;
    pub mod process;
    pub mod projects;
    pub mod services;
}

use components::{
    navbar::GlassNavbar,
    preloader::Preloader,
    scrollbar::CustomScrollbar,
};
use loader::{is_revealed, use_load_sequence, LoadPhase};
use scroll::driver::ScrollProvider;
use sections::{
    about::AboutSection,
    differentials::DifferentialsSection,
    faq::FaqSection,
    final_cta::FinalCtaSection,
    footer::FooterSection,
    hero::HeroSection,
    process::ProcessSection,
    projects::ProjectsSection,
    services::ServicesSection,
};

#[function_component(Site)]
fn site() -> Html {
    let phase = use_load_sequence();
    let class = classes!(
        "app-container",
        is_revealed(phase).then_some("loaded"),
        (phase == LoadPhase::EffectsCleared).then_some("effects-cleared")
    );

    html! {
        <>
            <Preloader {phase} />
            <CustomScrollbar {phase} />
            <GlassNavbar {phase} />
            <main {class}>
                <HeroSection />
                <AboutSection />
                <ServicesSection effects_ready={phase == LoadPhase::EffectsCleared} />
                <ProjectsSection />
                <ProcessSection />
                <DifferentialsSection />
                <FaqSection />
                <FinalCtaSection />
                <FooterSection />
            </main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ScrollProvider>
            <Site />
        </ScrollProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting site");
    yew::Renderer::<App>::new().render();
}
