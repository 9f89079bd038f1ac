use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::currency::format_currency;
use crate::i18n::use_language;
use crate::roi::{
    format_equity, project, snap_investment, Scenario, HORIZON_YEARS, INVESTMENT_STEP,
    MAX_INVESTMENT, MIN_INVESTMENT,
};

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let language = use_language().language;
    let t = language.translations();
    let investment = use_state(|| MIN_INVESTMENT);
    let scenario = use_state(Scenario::default);

    let oninput = {
        let investment = investment.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            investment.set(snap_investment(input.value_as_number()));
        })
    };

    let amount = *investment as f64;
    let projection = project(amount, *scenario);
    let assumptions = match *scenario {
        Scenario::Realistic => &t.realistic_assumptions,
        Scenario::Optimistic => &t.optimistic_assumptions,
    };

    html! {
        <div class="roi-calculator card">
            <div class="roi-inputs">
                <label class="roi-label" for="roi-investment">
                    { t.investment_value }
                    <strong>{ format_currency(amount, language) }</strong>
                </label>
                <input
                    id="roi-investment"
                    type="range"
                    min={MIN_INVESTMENT.to_string()}
                    max={MAX_INVESTMENT.to_string()}
                    step={INVESTMENT_STEP.to_string()}
                    value={investment.to_string()}
                    {oninput}
                />
                <div class="roi-range">
                    <span>{ format_currency(MIN_INVESTMENT as f64, language) }</span>
                    <span>{ format_currency(MAX_INVESTMENT as f64, language) }</span>
                </div>

                <div class="roi-facts">
                    <div>
                        <span class="roi-fact-label">{ t.equity_participation }</span>
                        <span class="roi-fact-value">{ format_equity(amount) }</span>
                    </div>
                    <div>
                        <span class="roi-fact-label">{ t.investment_period }</span>
                        <span class="roi-fact-value">{ format!("{} {}", HORIZON_YEARS, t.years) }</span>
                    </div>
                </div>

                <span class="roi-label">{ t.growth_scenario }</span>
                <div class="scenario-buttons">
                    { for Scenario::ALL.iter().map(|option| {
                        let option = *option;
                        let label = match option {
                            Scenario::Realistic => t.realistic,
                            Scenario::Optimistic => t.optimistic,
                        };
                        let onclick = {
                            let scenario = scenario.clone();
                            Callback::from(move |_: MouseEvent| scenario.set(option))
                        };
                        html! {
                            <button
                                class={classes!("scenario-button", (*scenario == option).then_some("active"))}
                                {onclick}
                            >
                                { label }
                            </button>
                        }
                    }) }
                </div>

                <div class="scenario-assumptions">
                    <h4>{ t.scenario_assumptions }</h4>
                    <ul>
                        { for assumptions.iter().map(|a| html! { <li>{ *a }</li> }) }
                    </ul>
                </div>
            </div>

            <div class="roi-results">
                <div class="roi-result">
                    <span>{ t.initial_investment }</span>
                    <strong>{ format_currency(projection.investment, language) }</strong>
                </div>
                <div class="roi-result highlight">
                    <span>{ t.final_value_label }</span>
                    <strong>{ format_currency(projection.final_value, language) }</strong>
                </div>
                <div class="roi-result">
                    <span>{ t.total_return }</span>
                    <strong>{ format!("+{}", format_currency(projection.total_return, language)) }</strong>
                </div>
                <div class="roi-result">
                    <span>{ t.total_roi }</span>
                    <strong>{ format!("{:.0}%", projection.total_roi_percent) }</strong>
                </div>
                <div class="roi-result">
                    <span>{ t.annualized_return }</span>
                    <strong>{ format!("{:.1}% {}", projection.annualized_percent, t.per_year) }</strong>
                </div>
                <p class="roi-warning">{ t.roi_warning }</p>
            </div>
            <p class="risk-disclaimer">{ t.risk_disclaimer }</p>
        </div>
    }
}
