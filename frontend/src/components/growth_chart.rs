use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::i18n::use_translations;

const AUTOPLAY_MS: u32 = 2_000;
const CANVAS_WIDTH: u32 = 720;
const CANVAS_HEIGHT: u32 = 380;

pub struct YearRevenue {
    pub year: u16,
    /// Thousands of reais.
    pub revenue_k: u32,
    pub projection: bool,
}

pub static REVENUE: [YearRevenue; 6] = [
    YearRevenue { year: 2022, revenue_k: 25, projection: false },
    YearRevenue { year: 2023, revenue_k: 85, projection: false },
    YearRevenue { year: 2024, revenue_k: 150, projection: false },
    YearRevenue { year: 2025, revenue_k: 300, projection: true },
    YearRevenue { year: 2026, revenue_k: 650, projection: true },
    YearRevenue { year: 2027, revenue_k: 1200, projection: true },
];

/// Year-over-year growth in whole percent; `None` for the first year.
pub fn growth_rate(index: usize) -> Option<i64> {
    if index == 0 || index >= REVENUE.len() {
        return None;
    }
    let current = f64::from(REVENUE[index].revenue_k);
    let previous = f64::from(REVENUE[index - 1].revenue_k);
    Some(((current - previous) / previous * 100.0).round() as i64)
}

pub fn revenue_label(revenue_k: u32) -> String {
    if revenue_k >= 1000 {
        let millions = f64::from(revenue_k) / 1000.0;
        if revenue_k % 1000 == 0 {
            format!("R$ {}M", revenue_k / 1000)
        } else {
            format!("R$ {:.1}M", millions)
        }
    } else {
        format!("R$ {}k", revenue_k)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Playback {
    pub active: usize,
    pub playing: bool,
}

pub enum PlaybackAction {
    Toggle,
    Tick,
    Select(usize),
}

impl Reducible for Playback {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PlaybackAction::Toggle if self.playing => Playback {
                playing: false,
                ..*self
            },
            PlaybackAction::Toggle => Playback {
                active: 0,
                playing: true,
            },
            PlaybackAction::Tick => {
                if !self.playing {
                    return self;
                }
                let step = self.active + 1;
                if step >= REVENUE.len() {
                    Playback::default()
                } else {
                    Playback {
                        active: step,
                        playing: true,
                    }
                }
            }
            PlaybackAction::Select(index) if index < REVENUE.len() => Playback {
                active: index,
                playing: false,
            },
            PlaybackAction::Select(_) => return self,
        };
        Rc::new(next)
    }
}

fn draw(canvas: HtmlCanvasElement, active: usize) -> Result<(), Box<dyn std::error::Error>> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&RGBColor(24, 24, 27))?;

    let max_revenue = REVENUE.iter().map(|r| r.revenue_k).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(72)
        .build_cartesian_2d(
            (0..REVENUE.len()).into_segmented(),
            0u32..max_revenue + max_revenue / 10,
        )?;

    let muted = RGBColor(161, 161, 170);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .axis_style(RGBColor(63, 63, 70))
        .label_style(("sans-serif", 14).into_font().color(&muted))
        .x_labels(REVENUE.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => REVENUE
                .get(*i)
                .map(|r| r.year.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|y| revenue_label(*y))
        .draw()?;

    chart.draw_series(REVENUE.iter().enumerate().map(|(i, point)| {
        let color = if i == active {
            RGBColor(250, 250, 250)
        } else if point.projection {
            RGBColor(82, 82, 91)
        } else {
            RGBColor(161, 161, 170)
        };
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), point.revenue_k),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    root.present()?;
    Ok(())
}

#[function_component(GrowthChart)]
pub fn growth_chart() -> Html {
    let t = use_translations();
    let canvas_ref = use_node_ref();
    let playback = use_reducer(Playback::default);

    {
        let dispatcher = playback.dispatcher();
        use_effect_with_deps(
            move |playing: &bool| {
                let interval = playing.then(|| {
                    Interval::new(AUTOPLAY_MS, move || dispatcher.dispatch(PlaybackAction::Tick))
                });
                move || drop(interval)
            },
            playback.playing,
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |active: &usize| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas, *active) {
                        warn!("Failed to draw growth chart: {}", e);
                    }
                }
                || ()
            },
            playback.active,
        );
    }

    let toggle = {
        let dispatcher = playback.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::Toggle))
    };

    let active = playback.active;
    let point = &REVENUE[active];
    let milestone = &t.growth_milestones[active];

    html! {
        <div class="growth-chart card">
            <div class="growth-chart-header">
                <button class="btn-outline" onclick={toggle}>
                    { if playback.playing { t.pause } else { t.play } }
                </button>
            </div>
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="max-width: 100%;"
            />
            <div class="growth-years">
                { for REVENUE.iter().enumerate().map(|(i, r)| {
                    let select = {
                        let dispatcher = playback.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::Select(i)))
                    };
                    html! {
                        <button
                            class={classes!("growth-year", (i == active).then_some("active"), r.projection.then_some("projection"))}
                            onclick={select}
                        >
                            { r.year }
                        </button>
                    }
                }) }
            </div>
            <div class="growth-milestone">
                <span class={classes!("growth-badge", point.projection.then_some("projection"))}>
                    { if point.projection { t.growth_projection } else { t.growth_actual } }
                </span>
                <h4>{ point.year }{" · "}{ milestone.title }</h4>
                <p>{ milestone.description }</p>
                <div class="growth-figures">
                    <strong>{ revenue_label(point.revenue_k) }</strong>
                    {
                        match growth_rate(active) {
                            Some(rate) => html! {
                                <span class="growth-rate">{ format!("+{}% {}", rate, t.growth_rate) }</span>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_rates_round_to_whole_percent() {
        assert_eq!(growth_rate(0), None);
        assert_eq!(growth_rate(1), Some(240));
        assert_eq!(growth_rate(2), Some(76));
        assert_eq!(growth_rate(3), Some(100));
        assert_eq!(growth_rate(4), Some(117));
        assert_eq!(growth_rate(5), Some(85));
        assert_eq!(growth_rate(6), None);
    }

    #[test]
    fn revenue_labels_switch_to_millions() {
        assert_eq!(revenue_label(25), "R$ 25k");
        assert_eq!(revenue_label(1200), "R$ 1.2M");
        assert_eq!(revenue_label(2000), "R$ 2M");
    }

    #[test]
    fn projections_start_in_2025() {
        let first = REVENUE.iter().position(|r| r.projection);
        assert_eq!(first.map(|i| REVENUE[i].year), Some(2025));
    }

    #[test]
    fn autoplay_walks_every_year_then_stops() {
        let mut state = Rc::new(Playback::default()).reduce(PlaybackAction::Toggle);
        assert!(state.playing);
        for expected in 1..REVENUE.len() {
            state = state.reduce(PlaybackAction::Tick);
            assert_eq!(state.active, expected);
        }
        state = state.reduce(PlaybackAction::Tick);
        assert_eq!(*state, Playback::default());

        let paused = state.clone().reduce(PlaybackAction::Tick);
        assert!(Rc::ptr_eq(&state, &paused));
    }

    #[test]
    fn selecting_a_year_pauses_playback() {
        let state = Rc::new(Playback::default())
            .reduce(PlaybackAction::Toggle)
            .reduce(PlaybackAction::Select(4));
        assert_eq!(state.active, 4);
        assert!(!state.playing);
        let same = state.clone().reduce(PlaybackAction::Select(99));
        assert!(Rc::ptr_eq(&state, &same));
    }
}
