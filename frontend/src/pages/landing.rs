use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::faq::InvestorFaq;
use crate::components::growth_chart::GrowthChart;
use crate::components::investment_modal::InvestmentModal;
use crate::components::robust_image::RobustImage;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::visibility::Reveal;
use crate::config::{CONTACT_EMAIL, PRESENTATION_URL, WEBSITE_URL, WHATSAPP_DISPLAY};
use crate::contact::whatsapp_url;
use crate::currency::{format_currency, market_size};
use crate::i18n::{render_emphasized, use_language};

const CAPTURE_GOAL_BRL: f64 = 6_000_000.0;
const MINIMUM_TICKET_BRL: f64 = 500_000.0;
const VALUATION_BRL: f64 = 290_000_000.0;
const FUNDS_TOTAL_BRL: f64 = 10_000_000.0;

/// Figure shown above each validation stat: (count, suffix).
const VALIDATION_FIGURES: [(u64, &str); 4] = [(6, "+"), (3, ""), (40, "K+"), (11, "")];

/// Share of the raise per allocation: (percent, amount in BRL).
const FUND_SHARES: [(u8, f64); 4] = [
    (40, 4_000_000.0),
    (30, 3_000_000.0),
    (20, 2_000_000.0),
    (10, 1_000_000.0),
];

fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No element with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_language().language;
    let t = language.translations();
    let modal_open = use_state(|| false);

    // Start at the top on first mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |()| modal_open.set(false))
    };
    let to_investment = Callback::from(|_: MouseEvent| scroll_to("investment"));

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-bg">
                    <RobustImage src="/images/pele-rara-02.png" alt="Pele Rara Technology" class="hero-background-image" />
                </div>
                <div class="hero-content">
                    <RobustImage src="/images/Logo_1.png" alt="Pele Rara Logo" class="hero-logo-image" />
                    <h1>
                        { for t.hero_title.iter().map(|line| html! {
                            <span class="hero-line">{ render_emphasized(line) }</span>
                        }) }
                    </h1>
                    <p class="hero-subtitle">{ t.hero_subtitle }</p>
                    <div class="investment-badge">{ t.investment_badge }</div>
                    <button class="cta-button" onclick={to_investment}>{ t.cta_button }</button>
                </div>
            </section>

            <Reveal class="numbers">
                <div class="container">
                    <h2 class="section-title">{ t.numbers_title }</h2>
                    <p class="section-subtitle">{ t.numbers_subtitle }</p>
                    <div class="numbers-grid">
                        <div class="number-card">
                            <div class="number-value">{ market_size(language) }</div>
                            <div class="number-label">{ t.market_label }</div>
                        </div>
                        <div class="number-card">
                            <div class="number-value">{ format_currency(VALUATION_BRL, language) }</div>
                            <div class="number-label">{ t.valuation_label }</div>
                        </div>
                        <div class="number-card">
                            <div class="number-value"><AnimatedNumber target={2} /></div>
                            <div class="number-label">{ t.patents_label }</div>
                        </div>
                        <div class="number-card">
                            <div class="number-value"><AnimatedNumber target={1100} prefix="+" suffix="%" /></div>
                            <div class="number-label">{ t.growth_label }</div>
                        </div>
                    </div>
                    <p class="footnote">{ t.global_market }</p>
                </div>
            </Reveal>

            <Reveal class="problem">
                <div class="container">
                    <h2 class="section-title">{ t.problem_title }</h2>
                    <p class="section-subtitle">{ t.problem_subtitle }</p>
                    <div class="problem-content">
                        <div class="problem-visual">{ market_size(language) }</div>
                        <div class="problem-text">
                            <h3>{ t.problem_description }</h3>
                            <ul class="problem-list">
                                { for t.problem_list.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </Reveal>

            <Reveal class="solution">
                <div class="container">
                    <h2 class="section-title">{ t.solution_title }</h2>
                    <p class="section-subtitle">
                        { t.solution_subtitle[0] }<br />{ t.solution_subtitle[1] }
                    </p>
                    <p class="patents-highlight"><strong>{ t.solution_patents }</strong></p>
                    <div class="products-grid">
                        { for t.products.iter().map(|p| html! {
                            <div class="product-card card">
                                <span class="product-name">{ p.name }</span>
                                <h3>{ p.title }</h3>
                                <p>{ p.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </Reveal>

            <Reveal class="validation">
                <div class="container">
                    <h2 class="section-title">{ t.validation_title }</h2>
                    <p class="section-subtitle">{ t.validation_subtitle }</p>
                    <div class="validation-grid">
                        { for t.validation_stats.iter().zip(VALIDATION_FIGURES).map(|(stat, (count, suffix))| html! {
                            <div class="validation-card">
                                <div class="validation-number">
                                    <AnimatedNumber target={count} suffix={suffix} />
                                </div>
                                <h4>{ stat.title }</h4>
                                <p>{ stat.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </Reveal>

            <Reveal class="revenue-growth">
                <div class="container">
                    <h2 class="section-title">{ t.growth_title }</h2>
                    <p class="section-subtitle">{ t.growth_subtitle }</p>
                    <GrowthChart />
                </div>
            </Reveal>

            <Reveal class="investment" id="investment">
                <div class="container">
                    <h2 class="section-title">{ t.investment_title }</h2>
                    <p class="section-subtitle">{ t.investment_subtitle }</p>
                    <div class="investment-grid">
                        <div class="investment-item">
                            <h4>{ t.modality }</h4>
                            <p>{ t.modality_value }</p>
                        </div>
                        <div class="investment-item">
                            <h4>{ t.capture_goal }</h4>
                            <p>{ format_currency(CAPTURE_GOAL_BRL, language) }</p>
                        </div>
                        <div class="investment-item">
                            <h4>{ t.minimum_ticket }</h4>
                            <p>{ format_currency(MINIMUM_TICKET_BRL, language) }</p>
                        </div>
                        <div class="investment-item">
                            <h4>{ t.investment_format }</h4>
                            <p>{ t.investment_format_value }</p>
                        </div>
                        <div class="investment-item">
                            <h4>{ t.term }</h4>
                            <p>{ t.term_value }</p>
                        </div>
                    </div>
                </div>
            </Reveal>

            <Reveal class="investor-protection">
                <div class="container">
                    <h2 class="section-title">{ t.protection_title }</h2>
                    <p class="section-subtitle">{ t.protection_subtitle }</p>
                    <div class="protection-grid">
                        { for t.protections.iter().map(|p| html! {
                            <div class="protection-item card">
                                <h4>{ p.title }</h4>
                                <p>{ p.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </Reveal>

            <Reveal class="funds-usage">
                <div class="container">
                    <h2 class="section-title">{ t.funds_title }</h2>
                    <p class="section-subtitle">{ t.funds_subtitle }</p>
                    <div class="funds-total">
                        <strong>{ format_currency(FUNDS_TOTAL_BRL, language) }</strong>
                        <p>{ t.funds_overview }</p>
                    </div>
                    <div class="funds-grid">
                        { for t.fund_allocations.iter().zip(FUND_SHARES).map(|(fund, (percent, amount))| html! {
                            <div class="fund-card card">
                                <div class="fund-header">
                                    <span class="fund-percent">{ format!("{}%", percent) }</span>
                                    <span class="fund-amount">{ format_currency(amount, language) }</span>
                                </div>
                                <h4>{ fund.title }</h4>
                                <div class="fund-bar">
                                    <div class="fund-bar-fill" style={format!("width: {}%;", percent)}></div>
                                </div>
                                <ul>
                                    { for fund.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                </ul>
                                <p class="fund-impact">
                                    <span>{ fund.impact_label }</span>{": "}<strong>{ fund.impact_value }</strong>
                                </p>
                            </div>
                        }) }
                    </div>
                </div>
            </Reveal>

            <Reveal class="timeline">
                <div class="container">
                    <h2 class="section-title">{ t.timeline_title }</h2>
                    <p class="section-subtitle">{ t.timeline_subtitle }</p>
                    <ol class="timeline-list">
                        { for t.timeline.iter().map(|entry| html! {
                            <li class="timeline-item">
                                <h4>{ entry.title }</h4>
                                <p>{ entry.description }</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </Reveal>

            <Reveal class="roi">
                <div class="container">
                    <h2 class="section-title">{ t.roi_title }</h2>
                    <p class="section-subtitle">{ t.roi_subtitle }</p>
                    <RoiCalculator />
                </div>
            </Reveal>

            <Reveal class="cta-section">
                <div class="container">
                    <h2 class="section-title">{ t.cta_title }</h2>
                    <p class="section-subtitle">
                        { t.cta_description[0] }<br />{ t.cta_description[1] }
                    </p>
                    <div class="cta-buttons">
                        <button class="cta-button" onclick={open_modal}>{ t.cta_primary }</button>
                        <a class="btn-outline" href={PRESENTATION_URL} target="_blank" rel="noopener noreferrer">
                            { t.download_presentation }
                        </a>
                    </div>
                </div>
            </Reveal>

            <Reveal class="faq">
                <div class="container">
                    <h2 class="section-title">{ t.faq_title }</h2>
                    <p class="section-subtitle">{ t.faq_subtitle }</p>
                    <InvestorFaq />
                </div>
            </Reveal>

            <footer class="footer">
                <div class="container">
                    <RobustImage src="/images/Logo_1.png" alt="Pele Rara" class="footer-logo" />
                    <p class="footer-text">{ t.footer_text }</p>
                    <p class="footer-motto">{ t.footer_motto }</p>
                    <p class="footer-additional">{ t.footer_additional }</p>
                    <div class="footer-contacts">
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                        <a href={whatsapp_url(t.whatsapp_message)} target="_blank" rel="noopener noreferrer">{ WHATSAPP_DISPLAY }</a>
                        <a href={WEBSITE_URL} target="_blank" rel="noopener noreferrer">{ WEBSITE_URL }</a>
                    </div>
                </div>
            </footer>

            <a
                class="whatsapp-float"
                href={whatsapp_url(t.whatsapp_message)}
                target="_blank"
                rel="noopener noreferrer"
                title={t.whatsapp_tooltip}
                aria-label={t.whatsapp_tooltip}
            >
                {"💬"}
            </a>

            <InvestmentModal open={*modal_open} on_close={close_modal} />
        </div>
    }
}
