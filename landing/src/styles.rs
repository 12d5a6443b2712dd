//! Stylesheet for the landing page.
//!
//! Dark slate theme with blue/cyan gradients and frosted-glass panels.
//! Decorative motion (orbs, sparkles, pulsing borders) is pure CSS.

/// Complete CSS, injected once by `App`.
pub const LANDING_CSS: &str = r#"
:root {
    --bg-0: #0f172a;
    --bg-1: #1e293b;
    --text: #ffffff;
    --text-dim: rgba(255, 255, 255, 0.8);
    --text-mute: rgba(255, 255, 255, 0.6);
    --blue: #60a5fa;
    --cyan: #67e8f9;
    --primary: #3b82f6;
    --border: rgba(255, 255, 255, 0.1);
    --danger: #f87171;
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    color: var(--text);
    background: linear-gradient(135deg, var(--bg-0), var(--bg-1) 50%, var(--bg-0));
}

a { color: inherit; text-decoration: none; }

.container { width: 100%; max-width: 72rem; margin: 0 auto; padding: 0 1rem; }

.gradient-text {
    background: linear-gradient(90deg, var(--blue), var(--cyan));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

main {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 4rem;
    padding: 0 1rem;
}

/* Backdrop */
.backdrop { position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 0; }
.backdrop-glow { position: absolute; height: 24rem; border-radius: 9999px; filter: blur(120px); }
.backdrop-glow-top { top: 0; left: 50%; width: 66%; transform: translateX(-50%); background: rgba(59, 130, 246, 0.2); }
.backdrop-glow-bottom { bottom: 0; left: 25%; width: 50%; background: rgba(6, 182, 212, 0.2); }
.backdrop-orb {
    position: absolute;
    width: 10rem;
    height: 10rem;
    border-radius: 9999px;
    background: radial-gradient(circle, rgba(96, 165, 250, 0.15), transparent 70%);
    animation: drift 18s ease-in-out infinite alternate;
}
@keyframes drift {
    from { transform: translate(0, 0) scale(1); }
    to { transform: translate(3rem, -2rem) scale(1.2); }
}

/* Hero */
.hero { position: relative; z-index: 10; padding: 6rem 0 4rem; text-align: center; }
.hero-content { display: flex; flex-direction: column; align-items: center; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    padding: 0.25rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    font-size: 0.875rem;
    color: var(--text-mute);
}
.hero-badge-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--cyan); animation: pulse 2s infinite; }
.hero-title { max-width: 56rem; margin: 0 0 1.5rem; font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; }
.hero-description { max-width: 48rem; margin: 0 0 2rem; font-size: 1.25rem; line-height: 1.6; color: var(--text-dim); }
.hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }

/* Buttons */
.btn {
    position: relative;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    overflow: hidden;
    padding: 0.75rem 1.5rem;
    border-radius: 9999px;
    font-weight: 600;
    transition: all 0.3s;
}
.btn-primary { background: linear-gradient(90deg, #2563eb, #06b6d4); }
.btn-primary:hover { box-shadow: 0 10px 25px rgba(59, 130, 246, 0.3); }
.btn-label, .btn-arrow { position: relative; z-index: 1; }
.btn-arrow { transition: transform 0.3s; }
.btn-primary:hover .btn-arrow { transform: translateX(0.25rem); }
.btn-hover-fill { position: absolute; inset: 0; background: linear-gradient(90deg, #1d4ed8, #0891b2); opacity: 0; transition: opacity 0.3s; }
.btn-primary:hover .btn-hover-fill { opacity: 1; }
.btn-secondary { background: rgba(255, 255, 255, 0.1); }
.btn-secondary:hover { background: rgba(255, 255, 255, 0.2); }

/* Glass */
.glass { position: relative; overflow: hidden; border: 1px solid var(--border); border-radius: 0.75rem; backdrop-filter: blur(12px); }
.glass-sheen { position: absolute; inset: 0; background: linear-gradient(135deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05)); }
.glass-content { position: relative; z-index: 10; }

/* Sections */
.section-title { margin: 0 0 2rem; font-size: 2.25rem; font-weight: 700; text-align: center; }
.section-title-left { margin: 0 0 1rem; font-size: 1.875rem; font-weight: 700; }
.section-description { margin: 0 auto 3rem; max-width: 48rem; font-size: 1.125rem; text-align: center; color: var(--text-dim); }

.highlights-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); gap: 1.5rem; }
.feature-card .glass-content { display: flex; flex-direction: column; align-items: center; padding: 1.5rem; }
.lift-on-hover { transition: transform 0.3s, box-shadow 0.3s, border-color 0.3s; }
.lift-on-hover:hover { transform: translateY(-0.5rem); border-color: rgba(59, 130, 246, 0.3); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3); }
.feature-icon { margin-bottom: 1rem; font-size: 3rem; }
.feature-title { margin: 0 0 0.75rem; font-size: 1.25rem; font-weight: 700; text-align: center; }
.feature-description { margin: 0; text-align: center; color: var(--text-dim); }

/* Architecture */
.architecture { padding: 3rem 0; }
.architecture-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
.module-card {
    position: relative;
    overflow: hidden;
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: rgba(30, 41, 59, 0.7);
    backdrop-filter: blur(12px);
}
.module-border { position: absolute; inset: 1px; border-radius: 0.75rem; background: linear-gradient(90deg, #6366f1, var(--primary)); opacity: 0.08; animation: pulse 3s ease-in-out infinite; pointer-events: none; }
.module-row { position: relative; display: flex; align-items: flex-start; gap: 1rem; }
.module-icon { flex-shrink: 0; padding: 0.5rem; border-radius: 0.5rem; color: var(--blue); background: rgba(59, 130, 246, 0.1); }
.module-body { flex: 1; }
.module-title { margin: 0 0 0.5rem; font-size: 1.125rem; font-weight: 600; }
.module-summary { margin: 0 0 0.75rem; font-size: 0.875rem; color: var(--text-mute); }
.module-details { max-height: 0; overflow: hidden; opacity: 0; font-size: 0.875rem; color: var(--text-dim); transition: max-height 0.3s, opacity 0.3s; }
.module-details.open { max-height: 20rem; opacity: 1; }
.module-toggle { display: inline-flex; align-items: center; gap: 0.25rem; margin-top: 0.5rem; padding: 0; border: 0; background: none; font-size: 0.75rem; color: var(--blue); cursor: pointer; }
.module-toggle:hover { color: var(--cyan); }
.module-chevron { display: inline-flex; transition: transform 0.3s; }
.module-chevron.flipped { transform: rotate(180deg); }

.sparkles-track { position: absolute; top: 5rem; right: 2.5rem; width: 1px; height: 10rem; background: linear-gradient(180deg, transparent, rgba(6, 182, 212, 0.6), transparent); pointer-events: none; }
.sparkles { position: absolute; top: 50%; left: -2.5rem; width: 2.5rem; height: 8rem; transform: translateY(-50%); }
.sparkle { position: absolute; width: 2px; height: 2px; border-radius: 50%; background: var(--primary); animation-name: twinkle; animation-iteration-count: infinite; animation-timing-function: linear; }
@keyframes twinkle {
    0% { transform: scale(1); opacity: 0.8; }
    50% { transform: scale(1.2); opacity: 0.4; }
    100% { transform: scale(0); opacity: 0; }
}

/* Capital efficiency */
.efficiency-panel .glass-content { padding: 2.5rem; }
.efficiency-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; align-items: center; }
.efficiency-copy { margin: 0 0 1.5rem; color: var(--text-dim); }
.efficiency-points { margin: 0; padding: 0; list-style: none; }
.efficiency-points li { display: flex; align-items: flex-start; gap: 0.5rem; margin-bottom: 0.5rem; }
.efficiency-arrow { font-weight: 700; color: var(--blue); }
.rings { position: relative; display: flex; justify-content: center; }
.ring { display: flex; align-items: center; justify-content: center; border-radius: 9999px; }
.ring-outer { width: 16rem; height: 16rem; background: linear-gradient(135deg, rgba(59, 130, 246, 0.3), rgba(6, 182, 212, 0.3)); }
.ring-middle { width: 12rem; height: 12rem; background: linear-gradient(135deg, rgba(37, 99, 235, 0.4), rgba(8, 145, 178, 0.4)); }
.ring-inner { width: 8rem; height: 8rem; background: linear-gradient(135deg, rgba(29, 78, 216, 0.5), rgba(14, 116, 144, 0.5)); }
.ring-label { font-size: 1.5rem; font-weight: 700; }
.ring-glow { position: absolute; inset: 0; z-index: -1; border-radius: 9999px; background: rgba(59, 130, 246, 0.1); filter: blur(30px); }

/* Network support */
.network-support { width: 100%; max-width: 28rem; }
.network-panel .glass-content { padding: 1.5rem; }
.network-title { margin: 0 0 1rem; font-size: 1.25rem; font-weight: 700; text-align: center; }
.advisory-wrap { width: 100%; max-width: 32rem; margin: 0 auto; padding: 0.5rem 0.75rem; }
.advisory { padding: 0.5rem 0.75rem; border: 1px solid var(--danger); border-radius: 0.25rem; text-align: center; color: var(--danger); }
.advisory-network { font-weight: 700; }

/* Footer */
.footer { position: relative; z-index: 10; margin-top: 4rem; border-top: 1px solid var(--border); background: rgba(15, 23, 42, 0.8); backdrop-filter: blur(4px); }
.footer-top { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1.5rem; padding: 2.5rem 0; }
.footer-tagline { margin: 0; font-size: 0.875rem; color: var(--text-mute); }
.footer-social { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.social-link { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.1); transition: background 0.3s; }
.social-link:hover { background: rgba(255, 255, 255, 0.2); }
.footer-credits { display: flex; align-items: center; justify-content: center; gap: 0.25rem; padding: 0.75rem 0; }
.footer-heart { color: var(--danger); }
.footer-legal { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; margin-top: 2rem; padding: 1.5rem 0; border-top: 1px solid var(--border); }
.footer-copyright { margin: 0; font-size: 0.875rem; color: var(--text-mute); }
.footer-links { display: flex; gap: 1.5rem; }
.footer-link { font-size: 0.875rem; color: var(--text-mute); transition: color 0.2s; }
.footer-link:hover { color: var(--text); }

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

@media (prefers-reduced-motion: reduce) {
    .backdrop-orb, .sparkle, .module-border, .hero-badge-dot { animation: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_balance() {
        let open = LANDING_CSS.matches('{').count();
        let close = LANDING_CSS.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn styles_every_gate_class() {
        for class in [".advisory", ".advisory-wrap", ".advisory-network", ".network-panel"] {
            assert!(LANDING_CSS.contains(class), "missing {class}");
        }
    }
}
