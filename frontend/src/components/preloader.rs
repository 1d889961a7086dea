use yew::prelude::*;

use crate::loader::LoadPhase;

const HEART: &str = "M110,230 C110,230 40,160 40,110 C40,70 75,60 92.5,80 C101.25,90 110,110 110,110 C110,110 118.75,90 127.5,80 C145,60 180,70 180,110 C180,160 110,230 110,230 Z";
const CORNER_HEART: &str = "M0,20 C0,20 -10,10 -10,2 C-10,-5 -2,-5 0,0 C2,-5 10,-5 10,2 C10,10 0,20 0,20 Z";

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub phase: LoadPhase,
}

fn corner(transform: &'static str) -> Html {
    html! {
        <g class="card-corner" {transform}>
            <text x="0" y="0" font-family="'Playfair Display', serif" font-size="32" font-weight="bold" text-anchor="middle">{"A"}</text>
            <path d={CORNER_HEART} transform="translate(0, 5)" />
        </g>
    }
}

/// Ace-of-hearts card drawn stroke by stroke while the page loads. Fades
/// out once loaded and leaves the tree when effects clear.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    if props.phase == LoadPhase::EffectsCleared {
        return html! {};
    }
    let class = classes!(
        "loader-wrapper",
        (props.phase == LoadPhase::Loaded).then_some("is-leaving")
    );

    html! {
        <div {class} aria-hidden="true">
            <svg class="ace-card-svg" viewBox="0 0 220 320">
                <rect x="10" y="10" width="200" height="300" rx="15" ry="15" class="draw-path card-border" />
                <path d={HEART} class="draw-path card-heart-big" />
                { corner("translate(25, 45)") }
                { corner("translate(195, 275) rotate(180)") }
            </svg>
            <div class="loading-text">{"Embaralhando"}</div>
        </div>
    }
}
