use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Flips to `true` the first time the element behind `node` comes within
/// `margin` of the viewport, and stays there.
#[hook]
pub fn use_reveal(node: NodeRef, margin: &'static str) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut cleanup: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_seen = revealed.clone();
                    let on_intersect = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let seen = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<IntersectionObserverEntry>()
                                .map(|e| e.is_intersecting())
                                .unwrap_or(false)
                        });
                        if seen {
                            on_seen.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(margin);
                    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Some((observer, on_intersect));
                        }
                        Err(e) => {
                            // Without observers just show the content
                            warn!("IntersectionObserver unavailable: {:?}", e);
                            revealed.set(true);
                        }
                    }
                }
                move || {
                    if let Some((observer, _closure)) = cleanup {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

/// Entrance motion applied until an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    Rise(f64),
    SlideX(f64),
    Grow(f64),
}

impl Entrance {
    /// Inline style for the revealed/hidden state, with `duration` and
    /// `delay` in seconds.
    pub fn style(self, revealed: bool, duration: f64, delay: f64) -> String {
        let transition = format!(
            "transition: opacity {d}s ease-out {l}s, transform {d}s ease-out {l}s;",
            d = duration,
            l = delay
        );
        if revealed {
            return format!("opacity: 1; transform: none; {}", transition);
        }
        let transform = match self {
            Entrance::Rise(px) => format!("translateY({}px)", px),
            Entrance::SlideX(px) => format!("translateX({}px)", px),
            Entrance::Grow(from) => format!("scale({})", from),
        };
        format!("opacity: 0; transform: {}; {}", transform, transition)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Entrance::Rise(20.0))]
    pub entrance: Entrance,
    #[prop_or(0.4)]
    pub duration: f64,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or("200px")]
    pub margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

/// Wrapper that fades its children in on viewport entry.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.margin);

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={props.entrance.style(revealed, props.duration, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_offsets_content() {
        let style = Entrance::SlideX(-50.0).style(false, 0.5, 0.1);
        assert!(style.starts_with("opacity: 0; transform: translateX(-50px);"));
        assert!(style.contains("opacity 0.5s ease-out 0.1s"));
    }

    #[test]
    fn revealed_style_clears_transform() {
        let style = Entrance::Grow(0.95).style(true, 0.4, 0.0);
        assert!(style.starts_with("opacity: 1; transform: none;"));
    }
}
