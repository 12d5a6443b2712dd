use leptos::prelude::*;

const ORB_COUNT: usize = 6;

/// Fixed page background: gradient wash, two glow blooms and drifting orbs.
#[component]
pub fn Backdrop() -> impl IntoView {
    let orbs = (0..ORB_COUNT)
        .map(|i| {
            let style = format!(
                "left: {}%; top: {}%; animation-delay: -{}s;",
                (i * 17 + 8) % 100,
                (i * 29 + 12) % 100,
                i * 3
            );
            view! { <div class="backdrop-orb" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-glow backdrop-glow-top"></div>
            <div class="backdrop-glow backdrop-glow-bottom"></div>
            {orbs}
        </div>
    }
}
