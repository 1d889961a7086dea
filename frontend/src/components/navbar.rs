use std::rc::Rc;

use web_sys::{window, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::loader::LoadPhase;
use crate::scroll::driver::{use_scroll_handle, use_scroll_listener, ScrollFrame};

/// Fraction of the viewport height, from the top, where a section counts as
/// the current one.
const TRIGGER_RATIO: f64 = 0.3;

pub struct NavItem {
    pub name: &'static str,
    pub target: &'static str,
    pub icon: Icon,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Início", target: "#hero", icon: Icon::Home },
    NavItem { name: "Sobre", target: "#sobre", icon: Icon::User },
    NavItem { name: "Serviços", target: "#servicos", icon: Icon::Briefcase },
    NavItem { name: "Projetos", target: "#projetos", icon: Icon::Folder },
    NavItem { name: "Processo", target: "#processo", icon: Icon::Cog },
    NavItem { name: "FAQ", target: "#faq", icon: Icon::Help },
];

/// Viewport-relative vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// Index of the last section crossing the trigger line, or `None` if none
/// does (the caller keeps its previous choice then).
pub fn active_section(rects: &[Option<SectionRect>], viewport_height: f64) -> Option<usize> {
    let trigger = viewport_height * TRIGGER_RATIO;
    rects
        .iter()
        .enumerate()
        .filter_map(|(i, rect)| rect.map(|r| (i, r)))
        .filter(|(_, r)| r.top <= trigger && r.bottom > trigger)
        .map(|(i, _)| i)
        .last()
}

/// Records `offset` and reports whether it differs from the last one seen.
pub fn offset_changed(last: &mut f64, offset: f64) -> bool {
    if *last == offset {
        return false;
    }
    *last = offset;
    true
}

fn section_rects() -> Vec<Option<SectionRect>> {
    let document = window().and_then(|w| w.document());
    NAV_ITEMS
        .iter()
        .map(|item| {
            let element = document.as_ref()?.query_selector(item.target).ok().flatten()?;
            let rect = element.get_bounding_client_rect();
            Some(SectionRect {
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct GlassNavbarProps {
    pub phase: LoadPhase,
}

/// Floating pill navigation with scroll-spy highlighting.
#[function_component(GlassNavbar)]
pub fn glass_navbar(props: &GlassNavbarProps) -> Html {
    let active = use_state_eq(|| 0usize);
    let handle = use_scroll_handle();

    let recompute = {
        let active = active.clone();
        Rc::new(move |viewport_height: f64| {
            if let Some(index) = active_section(&section_rects(), viewport_height) {
                active.set(index);
            }
        })
    };

    {
        let recompute = recompute.clone();
        let last_offset = use_mut_ref(|| f64::NAN);
        use_scroll_listener(move |frame: ScrollFrame| {
            // Idle frames would otherwise re-read every section's layout
            if offset_changed(&mut last_offset.borrow_mut(), frame.offset) {
                recompute(frame.viewport_height);
            }
        });
    }

    {
        let recompute = recompute.clone();
        use_event_with_window("resize", move |_: Event| {
            let height = window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            recompute(height);
        });
    }

    // Layout shifts once the preloader is gone
    {
        let recompute = recompute.clone();
        use_effect_with_deps(
            move |_| {
                let height = window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                recompute(height);
                || ()
            },
            props.phase,
        );
    }

    html! {
        <nav class="glass-navbar">
            <div class="glass-navbar-pill">
                { for NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                    let is_active = *active == index;
                    let onclick = {
                        let active = active.clone();
                        let handle = handle.clone();
                        let target = item.target;
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            active.set(index);
                            if let Some(handle) = handle.as_ref() {
                                handle.scroll_to_selector(target);
                            }
                        })
                    };
                    html! {
                        <a
                            key={item.name}
                            href={item.target}
                            class={classes!("nav-item", is_active.then_some("is-active"))}
                            {onclick}
                        >
                            <span class="nav-item-content">
                                <SvgIcon icon={item.icon} size={18} />
                                <span class="nav-item-label">{ item.name }</span>
                            </span>
                            if is_active {
                                <div class="nav-lamp"><div class="nav-lamp-bar"></div></div>
                            }
                        </a>
                    }
                }) }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, bottom: f64) -> Option<SectionRect> {
        Some(SectionRect { top, bottom })
    }

    #[test]
    fn picks_section_crossing_trigger_line() {
        // trigger at 300 for a 1000px viewport
        let rects = [rect(-900.0, 100.0), rect(100.0, 1100.0), rect(1100.0, 2000.0)];
        assert_eq!(active_section(&rects, 1000.0), Some(1));
    }

    #[test]
    fn last_crossing_section_wins() {
        let rects = [rect(0.0, 800.0), rect(200.0, 900.0)];
        assert_eq!(active_section(&rects, 1000.0), Some(1));
    }

    #[test]
    fn bottom_edge_on_trigger_does_not_count() {
        let rects = [rect(-700.0, 300.0), rect(300.0, 1300.0)];
        assert_eq!(active_section(&rects, 1000.0), Some(1));
    }

    #[test]
    fn nothing_crossing_keeps_previous() {
        let rects = [rect(400.0, 900.0), None];
        assert_eq!(active_section(&rects, 1000.0), None);
        assert_eq!(active_section(&[], 1000.0), None);
    }

    #[test]
    fn idle_frames_skip_the_layout_pass() {
        let mut last = f64::NAN;
        assert!(offset_changed(&mut last, 0.0));
        assert!(!offset_changed(&mut last, 0.0));
        assert!(!offset_changed(&mut last, 0.0));
        assert!(offset_changed(&mut last, 12.5));
        assert_eq!(last, 12.5);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let rects = [None, rect(0.0, 500.0), None];
        assert_eq!(active_section(&rects, 1000.0), Some(1));
    }
}
