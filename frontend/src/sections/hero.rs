use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::autoplay::AutoplayGuard;
use crate::components::buttons::{CyberButton, GoldButton};
use crate::components::container::Container;
use crate::scroll::driver::use_scroll_handle;
use crate::viewport::{use_viewport, DeviceClass};

pub fn video_source(device: DeviceClass) -> String {
    format!("/videos/hero-{}.mp4", device.asset_key())
}

pub fn video_poster(device: DeviceClass) -> String {
    format!("/videos/hero-{}.webp", device.asset_key())
}

#[derive(Properties, PartialEq)]
struct HeroVideoProps {
    device: DeviceClass,
}

/// Keyed on the device class by the parent so a breakpoint change mounts a
/// fresh element with its own autoplay guard.
#[function_component(HeroVideo)]
fn hero_video(props: &HeroVideoProps) -> Html {
    let video = use_node_ref();

    {
        let video = video.clone();
        use_effect_with_deps(
            move |_| {
                let guard = video.cast::<HtmlVideoElement>().map(AutoplayGuard::new);
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <video
            ref={video}
            class="hero-video"
            poster={video_poster(props.device)}
            autoplay=true
            loop=true
            muted=true
            playsinline=true
            preload="auto"
        >
            <source src={video_source(props.device)} type="video/mp4" />
            {"Seu navegador não suporta vídeo."}
        </video>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let viewport = use_viewport();
    let handle = use_scroll_handle();

    let to_services = Callback::from(move |_: MouseEvent| {
        if let Some(handle) = handle.as_ref() {
            handle.scroll_to_selector("#servicos");
        }
    });

    html! {
        <section id="hero" class="hero-section">
            <div class="hero-video-layer">
                <HeroVideo key={viewport.device.asset_key()} device={viewport.device} />
            </div>
            <div class="hero-overlay"></div>

            <Container class="hero-content">
                <div class="hero-copy">
                    <div class="scan-container">
                        <span class="scan-content delay-sync-1 hero-badge">
                            <span class="hero-badge-dot"></span>
                            {"Especialista em Websites"}
                        </span>
                        <div class="scan-line delay-sync-1"></div>
                    </div>

                    <div class="scan-container">
                        <h1 class="scan-content delay-sync-1 hero-title">
                            {"Criação de Sites Focados em "}
                            <span class="text-gold-gradient">{"Conversão e SEO"}</span>
                        </h1>
                        <div class="scan-line delay-sync-1"></div>
                    </div>

                    <div class="scan-container">
                        <h2 class="scan-content delay-sync-2 hero-subtitle">
                            {"Sites estratégicos que transformam visitas em clientes. Desenvolvo páginas rápidas, modernas e estruturadas para ranquear no Google, gerar autoridade e converter tráfego em resultado real."}
                        </h2>
                        <div class="scan-line delay-sync-2"></div>
                    </div>

                    <div class="scan-container scan-inline">
                        <div class="scan-content delay-sync-3 hero-actions">
                            <GoldButton whatsapp_message={"Olá! Vim pelo seu site e gostaria de solicitar um orçamento."}>
                                {"Solicitar Orçamento"}
                            </GoldButton>
                            <CyberButton onclick={to_services}>
                                {"Ver Serviços"}
                            </CyberButton>
                        </div>
                        <div class="scan-line delay-sync-3"></div>
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
    fn video_assets_follow_device_class() {
        assert_eq!(video_source(DeviceClass::Mobile), "/videos/hero-mobile.mp4");
        assert_eq!(video_source(DeviceClass::Tablet), "/videos/hero-tablet.mp4");
        assert_eq!(video_poster(DeviceClass::Desktop), "/videos/hero-desktop.webp");
    }
}
