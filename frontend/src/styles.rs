/// Stylesheet shared by every page, rendered once at the app root.
pub const BASE: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    background: #09090b;
}
.landing-page {
    background: #09090b;
    color: #e4e4e7;
    font-family: 'Inter', system-ui, sans-serif;
    min-height: 100vh;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.card {
    background: linear-gradient(145deg, #18181b, #111113);
    border: 1px solid #27272a;
    border-radius: 16px;
    padding: 2rem;
}
.reveal {
    padding: 6rem 0;
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.reveal.animated {
    opacity: 1;
    transform: translateY(0);
}
.section-title {
    font-size: 2.75rem;
    font-weight: 300;
    text-align: center;
    color: #fafafa;
    margin-bottom: 1rem;
    letter-spacing: -0.02em;
}
.section-subtitle {
    text-align: center;
    color: #a1a1aa;
    font-size: 1.15rem;
    margin-bottom: 3rem;
}
.muted { color: #a1a1aa; }

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    overflow: hidden;
}
.hero-bg {
    position: absolute;
    inset: 0;
    opacity: 0.35;
}
.hero-background-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.hero-content {
    position: relative;
    z-index: 1;
    padding: 8rem 1.5rem 4rem;
    max-width: 900px;
}
.hero-logo-image { max-width: 220px; margin-bottom: 2rem; }
.hero h1 {
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    font-weight: 300;
    line-height: 1.1;
    color: #fafafa;
}
.hero-line { display: block; }
.hero h1 strong { font-weight: 600; }
.hero-subtitle { font-size: 1.25rem; color: #a1a1aa; margin: 1.5rem 0; }
.investment-badge, .badge {
    display: inline-block;
    padding: 0.5rem 1.25rem;
    border: 1px solid #3f3f46;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.04);
    color: #d4d4d8;
    font-size: 0.9rem;
    margin-bottom: 2rem;
}

.cta-button, .btn-primary {
    display: inline-block;
    background: #fafafa;
    color: #09090b;
    border: none;
    border-radius: 12px;
    padding: 1rem 2.25rem;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.cta-button:hover, .btn-primary:hover {
    transform: translateY(-2px);
    box-shadow: 0 10px 30px rgba(255, 255, 255, 0.1);
}
.btn-primary:disabled { opacity: 0.6; cursor: wait; }
.btn-outline {
    display: inline-block;
    background: transparent;
    color: #d4d4d8;
    border: 1px solid #3f3f46;
    border-radius: 12px;
    padding: 1rem 2rem;
    cursor: pointer;
    text-decoration: none;
}
.btn-outline:disabled { opacity: 0.4; cursor: default; }
.btn-link {
    background: none;
    border: none;
    color: #a1a1aa;
    cursor: pointer;
    padding: 0;
    margin-bottom: 1rem;
}

.numbers-grid, .validation-grid, .investment-grid,
.protection-grid, .products-grid, .funds-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1.5rem;
}
.number-card, .validation-card, .investment-item {
    text-align: center;
    padding: 2rem 1rem;
    border: 1px solid #27272a;
    border-radius: 16px;
    background: #111113;
}
.number-value, .validation-number {
    font-size: 2.5rem;
    font-weight: 300;
    color: #fafafa;
    margin-bottom: 0.5rem;
}
.number-label { color: #a1a1aa; }
.footnote { text-align: center; color: #71717a; margin-top: 2rem; }

.problem-content {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 3rem;
    align-items: center;
}
.problem-visual {
    font-size: 5rem;
    font-weight: 200;
    text-align: center;
    color: #fafafa;
}
.problem-list li { margin: 0.75rem 0; color: #d4d4d8; }

.patents-highlight { text-align: center; margin-bottom: 3rem; }
.product-name {
    font-size: 0.8rem;
    letter-spacing: 0.2em;
    color: #71717a;
}

.investment-item h4 { color: #a1a1aa; font-weight: 400; }
.investment-item p { font-size: 1.5rem; color: #fafafa; }

.funds-total { text-align: center; margin-bottom: 3rem; }
.funds-total strong { font-size: 3rem; font-weight: 300; color: #fafafa; }
.fund-header { display: flex; justify-content: space-between; }
.fund-percent { font-size: 2rem; color: #fafafa; }
.fund-amount { color: #a1a1aa; }
.fund-bar { height: 4px; background: #27272a; border-radius: 2px; margin: 1rem 0; }
.fund-bar-fill { height: 100%; background: #fafafa; border-radius: 2px; }
.fund-impact { color: #a1a1aa; font-size: 0.9rem; }

.timeline-list { list-style: none; padding: 0; border-left: 1px solid #3f3f46; }
.timeline-item { padding: 0 0 2rem 2rem; position: relative; }
.timeline-item::before {
    content: '';
    position: absolute;
    left: -6px;
    top: 0.4rem;
    width: 11px;
    height: 11px;
    border-radius: 50%;
    background: #fafafa;
}

.growth-chart { padding: 2rem; }
.growth-chart-header { text-align: center; margin-bottom: 1.5rem; }
.growth-years { display: flex; justify-content: center; gap: 0.5rem; margin: 1rem 0; flex-wrap: wrap; }
.growth-year {
    background: #18181b;
    border: 1px solid #27272a;
    color: #a1a1aa;
    padding: 0.4rem 0.9rem;
    border-radius: 8px;
    cursor: pointer;
}
.growth-year.projection { border-style: dashed; }
.growth-year.active { color: #09090b; background: #fafafa; }
.growth-milestone { text-align: center; }
.growth-badge { font-size: 0.8rem; color: #a1a1aa; text-transform: uppercase; }
.growth-figures { display: flex; justify-content: center; gap: 1rem; align-items: baseline; }
.growth-figures strong { font-size: 2rem; color: #fafafa; }
.growth-rate { color: #22c55e; }

.roi-calculator {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2.5rem;
}
.roi-label { display: flex; justify-content: space-between; margin: 1rem 0 0.5rem; color: #a1a1aa; }
.roi-label strong { color: #fafafa; font-size: 1.25rem; }
.roi-calculator input[type=range] { width: 100%; accent-color: #fafafa; }
.roi-range { display: flex; justify-content: space-between; font-size: 0.8rem; color: #71717a; }
.roi-facts { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin: 1.5rem 0; }
.roi-fact-label { display: block; color: #71717a; font-size: 0.85rem; }
.roi-fact-value { color: #fafafa; font-size: 1.2rem; }
.scenario-buttons { display: flex; gap: 0.75rem; }
.scenario-button {
    flex: 1;
    padding: 0.75rem;
    border-radius: 10px;
    border: 1px solid #3f3f46;
    background: transparent;
    color: #d4d4d8;
    cursor: pointer;
}
.scenario-button.active { background: #fafafa; color: #09090b; }
.scenario-assumptions ul { padding-left: 1.2rem; color: #a1a1aa; }
.roi-result {
    display: flex;
    justify-content: space-between;
    padding: 0.9rem 0;
    border-bottom: 1px solid #27272a;
}
.roi-result.highlight strong { font-size: 1.6rem; color: #fafafa; }
.roi-warning, .risk-disclaimer { font-size: 0.8rem; color: #71717a; grid-column: 1 / -1; }

.cta-section { text-align: center; }
.cta-buttons { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

.faq-list { max-width: 800px; margin: 0 auto; }
.faq-item { border-bottom: 1px solid #27272a; }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    background: none;
    border: none;
    color: #fafafa;
    font-size: 1.1rem;
    text-align: left;
    padding: 1.25rem 0;
    cursor: pointer;
}
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; color: #a1a1aa; }
.faq-item.open .faq-answer { max-height: 600px; }
.faq-contact { text-align: center; margin-top: 2rem; color: #a1a1aa; }
.faq-contact a { color: #fafafa; }

.footer { padding: 4rem 0; text-align: center; border-top: 1px solid #27272a; }
.footer-logo { max-width: 140px; }
.footer-text { font-size: 1.4rem; color: #fafafa; }
.footer-motto { color: #a1a1aa; }
.footer-additional { letter-spacing: 0.15em; font-size: 0.85rem; color: #71717a; }
.footer-contacts { display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; margin-top: 1.5rem; }
.footer-contacts a { color: #a1a1aa; text-decoration: none; }

.whatsapp-float {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    width: 58px;
    height: 58px;
    border-radius: 50%;
    background: #25d366;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.6rem;
    text-decoration: none;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
    z-index: 900;
}

.image-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 120px;
    background: #18181b;
    border: 1px dashed #3f3f46;
    color: #71717a;
    font-size: 0.85rem;
}

.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.75);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1500;
    padding: 1rem;
}
.modal {
    position: relative;
    background: #111113;
    border: 1px solid #27272a;
    border-radius: 20px;
    padding: 2.5rem;
    width: min(560px, 100%);
    max-height: 90vh;
    overflow-y: auto;
}
.modal.modal-wide { width: min(900px, 100%); }
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: #a1a1aa;
    font-size: 1.5rem;
    cursor: pointer;
}
.modal-title { color: #fafafa; font-weight: 400; }
.modal-actions { display: flex; flex-direction: column; gap: 0.75rem; }
.modal-action {
    display: flex;
    gap: 1rem;
    align-items: center;
    padding: 1rem 1.25rem;
    border: 1px solid #27272a;
    border-radius: 14px;
    background: #18181b;
    color: #e4e4e7;
    text-decoration: none;
    text-align: left;
    cursor: pointer;
    font: inherit;
}
.modal-action.primary { border-color: #52525b; }
.action-text { display: flex; flex-direction: column; }
.action-text small { color: #a1a1aa; }
.recommended { font-size: 0.75rem; color: #22c55e; }
.modal-contact { margin-top: 1.5rem; color: #71717a; font-size: 0.9rem; }
.modal-contact a { color: #d4d4d8; }

.registration-form .form-header { margin-bottom: 1.5rem; }
.form-progress-label { display: flex; justify-content: space-between; color: #a1a1aa; font-size: 0.9rem; }
.progress-track { height: 4px; background: #27272a; border-radius: 2px; margin: 0.5rem 0 2rem; }
.progress-fill { height: 100%; background: #fafafa; border-radius: 2px; transition: width 0.3s ease; }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.form-group { display: flex; flex-direction: column; gap: 0.4rem; }
.form-group.full { grid-column: 1 / -1; }
.form-group label { font-size: 0.9rem; color: #d4d4d8; }
.required { color: #ef4444; }
.form-group input, .form-group select, .form-group textarea {
    background: #09090b;
    border: 1px solid #3f3f46;
    border-radius: 10px;
    color: #fafafa;
    padding: 0.75rem;
    font: inherit;
}
.form-section-title { margin: 2rem 0 1rem; color: #fafafa; font-weight: 500; }
.form-warning {
    margin: 1.5rem 0;
    padding: 1rem 1.25rem;
    border: 1px solid #f59e0b;
    border-radius: 12px;
    background: rgba(245, 158, 11, 0.08);
}
.consents { display: flex; flex-direction: column; gap: 0.75rem; }
.consent { display: flex; gap: 0.75rem; align-items: flex-start; color: #d4d4d8; }
.form-actions { display: flex; justify-content: space-between; margin-top: 2rem; }
.registration-confirmation { text-align: center; }
.confirmation-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: #22c55e;
    color: #09090b;
    font-size: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.next-steps { text-align: left; margin: 1.5rem auto; max-width: 480px; }
.registration-confirmation .btn-outline { margin-top: 1.5rem; }

@media (max-width: 768px) {
    .problem-content, .roi-calculator, .form-grid { grid-template-columns: 1fr; }
    .section-title { font-size: 2rem; }
    .modal { padding: 1.75rem 1.25rem; }
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 1000;
    transition: background 0.3s ease, border-color 0.3s ease;
    border-bottom: 1px solid transparent;
}
.top-nav.scrolled {
    background: rgba(9, 9, 11, 0.92);
    backdrop-filter: blur(10px);
    border-bottom-color: #27272a;
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    color: #fafafa;
    text-decoration: none;
    letter-spacing: 0.25em;
    font-weight: 500;
}
.nav-right { display: flex; gap: 1.25rem; align-items: center; }
.nav-link { color: #d4d4d8; text-decoration: none; }
.nav-link:hover { color: #fafafa; }
.language-selector select {
    background: #18181b;
    color: #e4e4e7;
    border: 1px solid #3f3f46;
    border-radius: 8px;
    padding: 0.4rem 0.6rem;
}
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}
"#;
