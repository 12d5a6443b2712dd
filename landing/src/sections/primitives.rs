//! Small building blocks shared by the sections.

use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};

/// Frosted-glass container used for cards and panels.
#[component]
pub fn Glass(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes("glass", class)>
            <div class="glass-sheen"></div>
            <div class="glass-content">{children()}</div>
        </div>
    }
}

/// Gradient call-to-action link, always opens in a new tab.
#[component]
pub fn PrimaryButton(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=join_classes("btn btn-primary", class)
        >
            <span class="btn-label">{children()}</span>
            <Icon path=ICON_ARROW_RIGHT size="16" class="btn-arrow" />
            <span class="btn-hover-fill"></span>
        </a>
    }
}

#[component]
pub fn SocialLink(icon: &'static str, href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="social-link"
            aria-label=label
        >
            <Icon path=icon size="18" />
            <span>{label}</span>
        </a>
    }
}

/// Decorative twinkling dots trailing a card edge.
#[component]
pub fn Sparkles(count: u32, #[prop(default = "")] tone: &'static str) -> impl IntoView {
    let dots = sparkle_spots(count)
        .into_iter()
        .map(|spot| view! { <span class="sparkle" style=spot.style()></span> })
        .collect_view();

    view! {
        <div class=join_classes("sparkles-track", tone) aria-hidden="true">
            <div class="sparkles">{dots}</div>
        </div>
    }
}

pub(crate) fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SparkleSpot {
    pub top: u32,
    pub left: u32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl SparkleSpot {
    fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; animation-delay: {}ms; animation-duration: {}ms;",
            self.top, self.left, self.delay_ms, self.duration_ms
        )
    }
}

/// Spread dots over the track with coprime strides so they don't line up.
pub(crate) fn sparkle_spots(count: u32) -> Vec<SparkleSpot> {
    (0..count)
        .map(|i| SparkleSpot {
            top: (i * 37 + 11) % 100,
            left: (i * 61 + 23) % 100,
            delay_ms: (i * 379) % 2000,
            duration_ms: 4000 + (i * 733) % 2000,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn join_classes_skips_empty_extra() {
        assert_eq!(join_classes("glass", ""), "glass");
        assert_eq!(join_classes("glass", "   "), "glass");
        assert_eq!(join_classes("glass", " p-6 "), "glass p-6");
    }

    #[test]
    fn sparkle_count_matches() {
        assert!(sparkle_spots(0).is_empty());
        assert_eq!(sparkle_spots(12).len(), 12);
        assert_eq!(sparkle_spots(300).len(), 300);
    }

    #[test]
    fn sparkles_stay_inside_track() {
        for spot in sparkle_spots(64) {
            assert!(spot.top < 100);
            assert!(spot.left < 100);
            assert!((4000..6000).contains(&spot.duration_ms));
            assert!(spot.delay_ms < 2000);
        }
    }

    #[test]
    fn sparkles_are_stable_between_renders() {
        assert_eq!(sparkle_spots(8), sparkle_spots(8));
    }

    #[test]
    fn sparkle_positions_are_distinct() {
        let spots = sparkle_spots(12);
        for (i, a) in spots.iter().enumerate() {
            for b in &spots[i + 1..] {
                assert!((a.top, a.left) != (b.top, b.left));
            }
        }
    }

    #[test]
    fn sparkle_style_is_inline_css() {
        let spot = sparkle_spots(1)[0];
        assert_eq!(
            spot.style(),
            "top: 11%; left: 23%; animation-delay: 0ms; animation-duration: 4000ms;"
        );
    }
}
