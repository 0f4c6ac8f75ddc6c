use yew::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::feedback_form::FeedbackForm;
use crate::components::header::Header;
use crate::components::reveal::RevealSection;
use crate::components::terminal::Terminal;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
            {r#":root {
    --bg: #0d1117;
    --bg-raised: #161b22;
    --text: #e6edf3;
    --text-dim: rgba(230, 237, 243, 0.6);
    --accent: #3fb950;
    --error-red: #f85149;
    --border: rgba(240, 246, 252, 0.1);
}
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
}
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 2rem;
    background: rgba(13, 17, 23, 0.85);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
    z-index: 10;
}
.nav-logo {
    color: var(--text);
    font-weight: 700;
    font-size: 1.2rem;
    text-decoration: none;
}
.nav {
    display: flex;
    gap: 2rem;
}
.nav-link {
    color: var(--text-dim);
    text-decoration: none;
    transition: color 0.2s ease;
}
.nav-link:hover {
    color: var(--text);
}
.menu-toggle {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 8px;
}
.menu-bar {
    width: 22px;
    height: 2px;
    background: var(--text);
    transition: transform 0.2s ease, opacity 0.2s ease;
}
.menu-toggle.active .menu-bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.menu-toggle.active .menu-bar:nth-child(2) { opacity: 0; }
.menu-toggle.active .menu-bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
@media (max-width: 768px) {
    .menu-toggle { display: flex; }
    .nav {
        position: fixed;
        top: 64px;
        left: 0;
        right: 0;
        flex-direction: column;
        gap: 0;
        background: var(--bg-raised);
        border-bottom: 1px solid var(--border);
        transform: translateY(-120%);
        transition: transform 0.25s ease;
    }
    .nav.active { transform: translateY(0); }
    .nav .nav-link { padding: 1rem 2rem; }
}
.hero {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
    max-width: 1100px;
    margin: 0 auto;
    padding: 10rem 2rem 6rem;
}
.hero h1 {
    font-size: 3rem;
    line-height: 1.1;
    margin: 0 0 1rem;
}
.hero .hero-subtitle {
    color: var(--text-dim);
    font-size: 1.2rem;
    line-height: 1.6;
}
@media (max-width: 768px) {
    .hero { grid-template-columns: 1fr; padding-top: 7rem; }
    .hero h1 { font-size: 2.2rem; }
}
.terminal-window {
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: 10px;
    overflow: hidden;
    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.4);
}
.terminal-header {
    display: flex;
    align-items: center;
    gap: 6px;
    padding: 10px 14px;
    border-bottom: 1px solid var(--border);
}
.terminal-dot {
    width: 11px;
    height: 11px;
    border-radius: 50%;
    background: rgba(240, 246, 252, 0.2);
}
.terminal-title {
    margin-left: auto;
    color: var(--text-dim);
    font-size: 0.8rem;
}
.terminal-body {
    padding: 1rem 1.2rem 1.4rem;
    font-family: 'SFMono-Regular', Menlo, Consolas, monospace;
    font-size: 0.9rem;
    min-height: 9rem;
}
.terminal-prompt { color: var(--accent); }
.terminal-cursor {
    animation: blink 1s step-end infinite;
    color: var(--text-dim);
}
@keyframes blink { 50% { opacity: 0; } }
#terminal-output {
    margin: 0.8rem 0 0;
    color: var(--text-dim);
    white-space: pre-wrap;
    font-family: inherit;
}
.section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 5rem 2rem;
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.section.visible {
    opacity: 1;
    transform: translateY(0);
}
.section h2 {
    font-size: 2rem;
    margin: 0 0 2rem;
}
.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
}
.feature-card {
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 1.5rem;
}
.feature-card h3 { margin-top: 0; }
.feature-card p { color: var(--text-dim); line-height: 1.6; }
.install-step {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
}
.install-command {
    flex: 1;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 0.8rem 1rem;
    font-family: 'SFMono-Regular', Menlo, Consolas, monospace;
    font-size: 0.9rem;
    overflow-x: auto;
    white-space: nowrap;
}
.copy-btn {
    background: none;
    border: 1px solid var(--border);
    border-radius: 8px;
    color: var(--text-dim);
    padding: 0.7rem;
    cursor: pointer;
    transition: color 0.2s ease, border-color 0.2s ease;
}
.copy-btn:hover { color: var(--text); }
.copy-btn.copied { color: var(--accent); border-color: var(--accent); }
.feedback-form { max-width: 560px; }
.form-row { margin-bottom: 1.2rem; }
.form-row label {
    display: block;
    margin-bottom: 0.4rem;
    color: var(--text-dim);
    font-size: 0.9rem;
}
.form-row input,
.form-row select,
.form-row textarea {
    width: 100%;
    box-sizing: border-box;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    border-radius: 8px;
    color: var(--text);
    padding: 0.7rem 0.9rem;
    font-size: 1rem;
}
.form-row .invalid-input { border-color: var(--error-red); }
.field-error {
    color: var(--error-red);
    font-size: 0.85rem;
    margin-top: 0.35rem;
    display: none;
}
.field-error.visible { display: block; }
.submit-btn {
    background: var(--accent);
    color: #04260b;
    border: none;
    border-radius: 8px;
    padding: 0.8rem 1.6rem;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}
.submit-btn:disabled { opacity: 0.6; cursor: not-allowed; }
.submit-btn.loading { opacity: 0.6; }
.form-success {
    display: none;
    margin-top: 1rem;
    padding: 1rem 1.2rem;
    border: 1px solid var(--accent);
    border-radius: 8px;
    color: var(--accent);
}
.form-success.visible { display: block; }
.site-footer {
    border-top: 1px solid var(--border);
    padding: 2rem;
    text-align: center;
    color: var(--text-dim);
    font-size: 0.9rem;
}"#}
            </style>
            <Header />
            <header class="hero">
                <div>
                    <h1>{"Ship code that heals itself"}</h1>
                    <p class="hero-subtitle">
                        {"FixGuard scans your codebase, verifies every candidate patch against \
                          generated tests, and rolls back anything that misbehaves. Catch issues \
                          before your users do."}
                    </p>
                </div>
                <Terminal />
            </header>

            <RevealSection id="features">
                <h2>{"What it does"}</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>{"Scan"}</h3>
                        <p>{"Walks your tree and flags issues with an auto-fixability verdict for each one, so you know what's safe to hand off."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Heal"}</h3>
                        <p>{"The fix loop generates test cases around each patch and only keeps changes that pass all of them."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Report"}</h3>
                        <p>{"SARIF output drops straight into your code-scanning dashboard of choice. No custom tooling required."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Rollback"}</h3>
                        <p>{"Every applied patch is snapshotted first. One command reverts a bad fix to the previous state."}</p>
                    </div>
                </div>
            </RevealSection>

            <RevealSection id="install">
                <h2>{"Get started"}</h2>
                <div class="install-step">
                    <code class="install-command">{"curl -fsSL https://fixgaurd.online/install.sh | sh"}</code>
                    <CopyButton text="curl -fsSL https://fixgaurd.online/install.sh | sh" />
                </div>
                <div class="install-step">
                    <code class="install-command">{"fixguard scan ."}</code>
                    <CopyButton text="fixguard scan ." />
                </div>
                <div class="install-step">
                    <code class="install-command">{"fixguard heal ."}</code>
                    <CopyButton text="fixguard heal ." />
                </div>
            </RevealSection>

            <RevealSection id="feedback">
                <h2>{"Tell us what's missing"}</h2>
                <FeedbackForm />
            </RevealSection>

            <footer class="site-footer">
                {"© FixGuard — "}
                <a href="mailto:hello@fixgaurd.online" style="color: inherit;">{"hello@fixgaurd.online"}</a>
            </footer>
        </div>
    }
}
