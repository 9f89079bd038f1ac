pub const POST_MONEY_VALUATION: f64 = 145_409_069.0;
pub const HORIZON_YEARS: u8 = 5;

pub const MIN_INVESTMENT: u64 = 500_000;
pub const MAX_INVESTMENT: u64 = 10_000_000;
pub const INVESTMENT_STEP: u64 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    Realistic,
    Optimistic,
}

pub struct ScenarioParams {
    pub multiple: f64,
    pub total_roi_percent: f64,
    pub annualized_percent: f64,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Realistic, Scenario::Optimistic];

    pub fn params(self) -> ScenarioParams {
        match self {
            Scenario::Realistic => ScenarioParams {
                multiple: 1.9931,
                total_roi_percent: 99.31,
                annualized_percent: 14.79,
            },
            Scenario::Optimistic => ScenarioParams {
                multiple: 2.99,
                total_roi_percent: 199.0,
                annualized_percent: 24.48,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoiProjection {
    pub investment: f64,
    pub final_value: f64,
    pub total_return: f64,
    pub total_roi_percent: f64,
    pub annualized_percent: f64,
    pub equity_percent: f64,
}

pub fn equity_percent(investment: f64) -> f64 {
    investment / POST_MONEY_VALUATION * 100.0
}

pub fn format_equity(investment: f64) -> String {
    format!("{:.4}%", equity_percent(investment))
}

pub fn project(investment: f64, scenario: Scenario) -> RoiProjection {
    let params = scenario.params();
    let final_value = investment * params.multiple;
    RoiProjection {
        investment,
        final_value,
        total_return: final_value - investment,
        total_roi_percent: params.total_roi_percent,
        annualized_percent: params.annualized_percent,
        equity_percent: equity_percent(investment),
    }
}

/// Snaps slider input to the nearest step, inside the allowed range.
pub fn snap_investment(raw: f64) -> u64 {
    if !raw.is_finite() {
        return MIN_INVESTMENT;
    }
    let steps = (raw / INVESTMENT_STEP as f64).round().max(0.0) as u64;
    (steps * INVESTMENT_STEP).clamp(MIN_INVESTMENT, MAX_INVESTMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn realistic_scenario_at_minimum_ticket() {
        let p = project(500_000.0, Scenario::Realistic);
        assert!(close(p.final_value, 996_550.0));
        assert!(close(p.total_return, 496_550.0));
        assert_eq!(p.total_roi_percent, 99.31);
        assert_eq!(p.annualized_percent, 14.79);
    }

    #[test]
    fn optimistic_scenario_at_minimum_ticket() {
        let p = project(500_000.0, Scenario::Optimistic);
        assert!(close(p.final_value, 1_495_000.0));
        assert!(close(p.total_return, 995_000.0));
    }

    #[test]
    fn equity_is_shown_with_four_decimals() {
        assert_eq!(format_equity(500_000.0), "0.3439%");
        assert_eq!(format_equity(1_000_000.0), "0.6877%");
        assert_eq!(format_equity(1_500_000.0), "1.0316%");
        assert_eq!(format_equity(10_000_000.0), "6.8772%");
    }

    #[test]
    fn slider_values_snap_and_clamp() {
        assert_eq!(snap_investment(0.0), MIN_INVESTMENT);
        assert_eq!(snap_investment(449_999.0), MIN_INVESTMENT);
        assert_eq!(snap_investment(1_149_999.0), 1_100_000);
        assert_eq!(snap_investment(1_150_000.0), 1_200_000);
        assert_eq!(snap_investment(50_000_000.0), MAX_INVESTMENT);
        assert_eq!(snap_investment(f64::NAN), MIN_INVESTMENT);
    }

    proptest! {
        #[test]
        fn final_value_scales_linearly(steps in 5u64..=100) {
            let investment = (steps * INVESTMENT_STEP) as f64;
            for scenario in Scenario::ALL {
                let p = project(investment, scenario);
                prop_assert!(close(p.final_value, investment * scenario.params().multiple));
                prop_assert!(close(p.total_return, p.final_value - investment));
            }
        }

        #[test]
        fn equity_matches_post_money_share(investment in 500_000.0f64..10_000_000.0) {
            let share = equity_percent(investment);
            prop_assert!(close(share * POST_MONEY_VALUATION / 100.0, investment));
            prop_assert!(share > 0.0 && share < 7.0);
        }

        #[test]
        fn snapped_values_stay_on_the_grid(raw in -1.0e7f64..1.0e8) {
            let snapped = snap_investment(raw);
            prop_assert!(snapped >= MIN_INVESTMENT && snapped <= MAX_INVESTMENT);
            prop_assert_eq!(snapped % INVESTMENT_STEP, 0);
        }
    }
}
