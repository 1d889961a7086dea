use std::time::Duration;

/// WhatsApp number every CTA deep-links to.
pub const WHATSAPP_NUMBER: &str = "5511999999999";

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

// Preloader choreography
pub const PRELOADER_MIN_DURATION: Duration = Duration::from_millis(4000);
pub const SCROLL_UNLOCK_DELAY: Duration = Duration::from_millis(2600);
pub const EFFECTS_SETTLE_DELAY: Duration = Duration::from_millis(1000);
pub const LAYOUT_REFRESH_DELAY: Duration = Duration::from_millis(100);

/// Class put on <body> while scrolling is locked.
pub const SCROLL_LOCK_CLASS: &str = "loading-locked";

/// Window event fired whenever late layout work finished and scroll mappers
/// should re-measure their tracked elements.
pub const LAYOUT_REFRESH_EVENT: &str = "site:layout-refresh";

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug  // Verbose scroll/loader tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

/// Builds the wa.me deep link with the message prefilled.
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link("Olá! Quero um site.");
        assert_eq!(
            link,
            "https://wa.me/5511999999999?text=Ol%C3%A1%21%20Quero%20um%20site."
        );
    }

    #[test]
    fn whatsapp_link_with_empty_message() {
        assert_eq!(whatsapp_link(""), "https://wa.me/5511999999999?text=");
    }
}
