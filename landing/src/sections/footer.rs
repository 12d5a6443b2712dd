use leptos::prelude::*;

use super::icons::{ICON_GITHUB, ICON_HEART, ICON_TWITTER, Icon};
use super::{COMMUNITY_REPO_URL, SocialLink, TWITTER_URL};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <p class="footer-tagline">"The next generation of DeFi liquidity infrastructure"</p>
                    <div class="footer-social">
                        <SocialLink icon=ICON_GITHUB href=COMMUNITY_REPO_URL label="GitHub" />
                        <SocialLink icon=ICON_TWITTER href=TWITTER_URL label="Twitter" />
                    </div>
                </div>
                <div class="footer-credits">
                    <span>"Built with"</span>
                    <Icon path=ICON_HEART size="14" class="footer-heart" />
                    <span>"by"</span>
                    <a href=COMMUNITY_REPO_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                        "@OLend"
                    </a>
                    <span>"·"</span>
                    <a href=format!("{COMMUNITY_REPO_URL}/issues/new") target="_blank" rel="noopener noreferrer" class="footer-link">
                        "Support"
                    </a>
                </div>
                <div class="footer-legal">
                    <p class="footer-copyright">{copyright(year)}</p>
                    <div class="footer-links">
                        <a href="/terms" class="footer-link">"Terms"</a>
                        <a href="/privacy" class="footer-link">"Privacy"</a>
                        <a href="https://narval.fi" class="footer-link">"narval.fi"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

fn copyright(year: u32) -> String {
    format!("© {year} NarvalFi. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright(2025), "© 2025 NarvalFi. All rights reserved.");
    }
}
