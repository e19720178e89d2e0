//! Global stylesheet.
//!
//! Colors, fonts and shadows come from the [`Theme`] as CSS custom
//! properties; breakpoints can't live in custom properties, so the media
//! queries are formatted from the theme directly.

use folio_core::theme::{Breakpoints, Theme};

const BASE_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html, body {
    width: 100%;
    min-height: 100%;
    font-family: var(--font-body);
    background-color: var(--color-background);
    color: var(--color-text);
    overflow-x: hidden;
    scroll-behavior: smooth;
    line-height: 1.5;
    scrollbar-width: none;
}

html::-webkit-scrollbar, body::-webkit-scrollbar {
    display: none;
}

a {
    text-decoration: none;
    color: inherit;
}

button {
    cursor: pointer;
    border: none;
    outline: none;
}

h1, h2, h3, h4, h5, h6 {
    font-family: var(--font-heading);
    font-weight: 700;
}

canvas {
    touch-action: none;
}

/* navbar */
.navbar {
    position: fixed;
    top: 0;
    width: 100%;
    padding: 1rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    backdrop-filter: blur(10px);
    background: rgba(5, 8, 22, 0.8);
    z-index: 100;
    transition: box-shadow var(--transition-default);
    animation: nav-drop 0.6s ease-out;
}

.navbar.scrolled {
    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.3);
}

@keyframes nav-drop {
    from { transform: translateY(-50px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

.logo {
    font-size: 1.8rem;
    font-weight: 700;
    color: var(--color-primary);
}

.logo span {
    color: var(--color-text);
}

.nav-links {
    display: flex;
    gap: 2rem;
}

.nav-link {
    position: relative;
    color: var(--color-text);
    font-weight: 400;
    transition: transform 0.3s ease;
}

.nav-link:hover {
    transform: scale(1.1);
}

.nav-link::after {
    content: '';
    position: absolute;
    bottom: -5px;
    left: 0;
    width: 0%;
    height: 2px;
    background-color: var(--color-primary);
    transition: width 0.3s ease;
}

.nav-link:hover::after, .nav-link.active::after {
    width: 100%;
}

.nav-link.active {
    color: var(--color-primary);
    font-weight: 600;
}

.menu-button {
    display: none;
    background: transparent;
    color: var(--color-text);
    font-size: 1.5rem;
    padding: 0.5rem;
    border-radius: 4px;
    transition: background 0.2s ease;
}

.menu-button:hover, .menu-button:active {
    background: rgba(255, 255, 255, 0.1);
}

.mobile-menu {
    display: none;
}

/* pages */
.page {
    position: relative;
    width: 100%;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 6rem 0;
    overflow-x: hidden;
}

.star-canvas {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    z-index: 0;
    pointer-events: none;
    background: transparent;
}

.content {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
}

.section-title {
    font-size: clamp(1.8rem, 5vw, 2.5rem);
    margin-bottom: 3rem;
    text-align: center;
}

.section-title span, .subsection-title span, .hero-title {
    color: var(--color-primary);
}

/* home */
.hero {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    max-width: 600px;
}

.hero-greeting {
    font-size: 1.2rem;
    color: var(--color-secondary);
}

.hero-title {
    font-size: 3.5rem;
    line-height: 1.2;
    min-height: 4.2rem;
}

.hero-title .cursor {
    display: inline-block;
    margin-left: 2px;
    animation: blink 1s step-end infinite;
}

@keyframes blink {
    50% { opacity: 0; }
}

.hero-role {
    font-size: 2rem;
    line-height: 1.2;
    color: var(--color-secondary);
}

.hero-summary {
    font-size: 1.1rem;
    color: var(--color-secondary);
    margin-top: 1rem;
    max-width: 500px;
    line-height: 1.6;
}

.button-group {
    display: flex;
    gap: 1rem;
    margin-top: 2rem;
}

.button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.8rem 1.5rem;
    border-radius: 4px;
    font-weight: 600;
    transition: all 0.3s ease;
}

.button:hover {
    transform: scale(1.05);
}

.button:active {
    transform: scale(0.95);
}

.button-primary {
    background-color: var(--color-primary);
    color: white;
}

.button-primary:hover {
    box-shadow: var(--shadow-button);
}

.button-secondary {
    background-color: transparent;
    color: var(--color-text);
    border: 1px solid var(--color-secondary);
}

.button-secondary:hover {
    background-color: rgba(255, 255, 255, 0.05);
}

/* about */
.about-content {
    display: flex;
    flex-direction: row;
    gap: 1.2rem;
}

.profile {
    flex: 0.35;
    display: flex;
    flex-direction: column;
    justify-content: center;
}

.profile-photo {
    width: clamp(150px, 20vh, 180px);
    height: clamp(150px, 20vh, 180px);
    margin: 0 auto 0.5rem;
    position: relative;
    overflow: hidden;
    border-radius: 10px;
}

.profile-photo img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    border-radius: 10px;
}

.profile-photo::after {
    content: '';
    position: absolute;
    inset: 0;
    background: linear-gradient(45deg, var(--color-primary), transparent);
    opacity: 0.2;
    pointer-events: none;
}

.info {
    flex: 0.65;
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}

.about-text {
    font-size: 1.1rem;
    color: var(--color-secondary);
    line-height: 1.6;
    margin-bottom: 0.8rem;
}

.skills-title {
    font-size: 1.3rem;
    margin: 0.5rem 0 1rem;
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(100px, 1fr));
    gap: 0.8rem;
}

.skill {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.4rem;
    padding: 0.6rem;
    background: var(--color-card);
    border-radius: 8px;
    transition: transform 0.2s ease;
}

.skill:hover {
    transform: scale(1.05);
}

.skill img {
    width: 32px;
    height: 32px;
}

.skill span {
    font-size: 0.85rem;
    color: var(--color-secondary);
}

/* projects */
.subsection-title {
    font-size: 2rem;
    margin-bottom: 2rem;
}

.experience, .project-card {
    background-color: var(--color-tertiary);
    border-radius: 10px;
    box-shadow: var(--shadow-card);
}

.experience {
    padding: 2rem;
    margin-bottom: 2rem;
}

.experience-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 1rem;
}

.company {
    font-size: 1.5rem;
    color: var(--color-primary);
}

.position {
    font-size: 1.2rem;
    margin-top: 0.5rem;
}

.duration {
    font-size: 0.9rem;
    color: var(--color-secondary);
    background-color: rgba(255, 255, 255, 0.1);
    padding: 0.4rem 0.8rem;
    border-radius: 20px;
}

.responsibilities {
    margin-top: 1.5rem;
    padding-left: 1.5rem;
}

.responsibilities li {
    color: var(--color-secondary);
    margin-bottom: 0.8rem;
    line-height: 1.6;
}

.responsibilities li::marker {
    color: var(--color-primary);
}

.projects-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
}

.card-hover {
    transition: transform 0.3s ease;
}

.card-hover:hover {
    transform: translateY(-10px);
}

.project-card {
    overflow: hidden;
    height: 100%;
}

.project-image {
    width: 100%;
    height: 200px;
    background-color: var(--color-background);
    overflow: hidden;
}

.project-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s ease;
}

.project-image:hover img {
    transform: scale(1.05);
}

.project-body {
    padding: 1.5rem;
}

.project-title {
    font-size: 1.5rem;
    margin-bottom: 0.5rem;
}

.project-description {
    color: var(--color-secondary);
    line-height: 1.6;
    margin-bottom: 1.5rem;
}

.tech-stack {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.tech-badge {
    font-size: 0.8rem;
    background-color: rgba(145, 94, 255, 0.19);
    color: var(--color-primary);
    padding: 0.3rem 0.6rem;
    border-radius: 4px;
}

.project-links {
    display: flex;
    gap: 1rem;
    margin-top: 1.5rem;
}

.project-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    background-color: var(--color-tertiary);
    border: 1px solid rgba(170, 166, 195, 0.3);
    border-radius: 4px;
    font-size: 0.9rem;
    transition: all 0.3s ease;
}

.project-link:hover {
    background-color: var(--color-primary);
    color: white;
}

/* contact */
.contact-content {
    display: flex;
    flex-direction: column;
    gap: 4rem;
}

.contact-info, .contact-form {
    flex: 1;
}

.contact-heading {
    font-size: 1.5rem;
    margin-bottom: 1.5rem;
}

.contact-text {
    font-size: 1.1rem;
    color: var(--color-secondary);
    line-height: 1.8;
    margin-bottom: 2rem;
}

.contact-details {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.contact-item {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.contact-item i {
    color: var(--color-primary);
    font-size: 1.5rem;
    width: 1.5rem;
    text-align: center;
}

.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.form-group {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.form-group input, .form-group textarea {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 0.75rem 1rem;
    border-radius: 5px;
    font-size: 1rem;
    font-family: inherit;
    color: var(--color-text);
    transition: all 0.3s ease;
    width: 100%;
}

.form-group textarea {
    resize: vertical;
    min-height: 150px;
}

.form-group input:focus, .form-group textarea:focus {
    border-color: var(--color-primary);
    outline: none;
    box-shadow: 0 0 0 3px rgba(100, 255, 218, 0.1);
}

.submit-button {
    background: var(--color-primary);
    color: var(--color-background);
    padding: 0.75rem 2rem;
    border-radius: 5px;
    font-weight: 600;
    font-size: 1rem;
    transition: all 0.3s ease;
    align-self: flex-start;
}

.submit-button:hover:not(:disabled) {
    background: var(--color-primary-dark);
    transform: translateY(-2px);
}

.submit-button:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.submit-status {
    margin-top: 1rem;
    animation: fade-in 0.3s ease-out;
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

/* footer */
.footer {
    position: relative;
    z-index: 20;
    background-color: var(--color-tertiary);
    padding: 3rem 0;
}

.footer-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.footer-logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--color-primary);
    margin-bottom: 1.5rem;
}

.footer-logo span {
    color: var(--color-text);
}

.social-links {
    display: flex;
    gap: 1.5rem;
    margin-bottom: 2rem;
}

.social-icon {
    font-size: 1.5rem;
    transition: color 0.3s ease, transform 0.3s ease;
}

.social-icon:hover {
    color: var(--color-primary);
    transform: translateY(-5px);
}

.copyright {
    font-size: 0.9rem;
    color: var(--color-secondary);
}

.not-found {
    text-align: center;
}
"#;

fn responsive_css(bp: &Breakpoints) -> String {
    let md_down = Breakpoints::max_width(bp.md);
    let sm_down = Breakpoints::max_width(bp.sm);
    let lg_up = Breakpoints::min_width(bp.lg);

    format!(
        r#"
{md_down} {{
    .nav-links {{ display: none; }}
    .menu-button {{
        display: flex;
        align-items: center;
        justify-content: center;
        width: 44px;
        height: 44px;
    }}
    .mobile-menu {{
        display: flex;
        position: fixed;
        top: 70px;
        right: 0;
        width: 100%;
        padding: 1.5rem 0;
        background: rgba(5, 8, 22, 0.95);
        backdrop-filter: blur(10px);
        box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.5);
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        z-index: 99;
        border-bottom-left-radius: 10px;
        border-bottom-right-radius: 10px;
        transform-origin: top;
        transform: scaleY(0);
        opacity: 0;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }}
    .mobile-menu.open {{
        transform: scaleY(1);
        opacity: 1;
    }}
    .mobile-menu .nav-link {{
        font-size: 1.2rem;
        padding: 0.5rem 1rem;
        width: 85%;
        text-align: center;
        border-radius: 8px;
    }}
    .page {{ align-items: flex-start; padding-top: 7rem; }}
    .hero-title {{ font-size: 2.5rem; min-height: 3rem; }}
    .hero-role {{ font-size: 1.5rem; }}
    .about-content {{ flex-direction: column; gap: 1rem; }}
    .experience-header {{ flex-direction: column; gap: 0.5rem; }}
}}

{sm_down} {{
    .navbar {{ padding: 1rem; }}
    .logo {{ font-size: 1.5rem; }}
    .content, .footer-content {{ padding: 0 1rem; }}
    .page {{ padding: 8rem 0 4rem; }}
    .button-group {{ flex-direction: column; gap: 0.75rem; max-width: 250px; }}
    .experience {{ padding: 1.5rem; }}
    .projects-grid {{ gap: 2rem; }}
    .project-links {{ flex-direction: column; gap: 0.75rem; }}
    .form-group input, .form-group textarea {{ font-size: 16px; border-radius: 8px; }}
    .submit-button {{ width: 100%; align-self: stretch; border-radius: 8px; }}
}}

{lg_up} {{
    .projects-grid {{ grid-template-columns: repeat(2, 1fr); }}
    .contact-content {{ flex-direction: row; }}
}}
"#
    )
}

/// Full stylesheet for `theme`.
pub fn global_css(theme: &Theme) -> String {
    let mut css = theme.css_variables();
    css.push_str(BASE_CSS);
    css.push_str(&responsive_css(&theme.breakpoints));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_css_uses_theme_breakpoints() {
        let css = global_css(&Theme::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("@media (max-width: 768px) {"));
        assert!(css.contains("@media (max-width: 640px) {"));
        assert!(css.contains("@media (min-width: 1024px) {"));
    }

    #[test]
    fn test_custom_breakpoints_flow_through() {
        let mut theme = Theme::default();
        theme.breakpoints.md = 900;
        assert!(global_css(&theme).contains("@media (max-width: 900px) {"));
    }
}
