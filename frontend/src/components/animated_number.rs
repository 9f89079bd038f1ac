use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::visibility::use_visibility;

const DURATION_MS: u32 = 2_000;
const FRAME_MS: u32 = 16;

/// Value shown `elapsed_ms` into a count-up of `duration_ms` toward `target`.
pub fn value_at(target: u64, elapsed_ms: u32, duration_ms: u32) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    (target as f64 * progress).floor() as u64
}

/// Elapsed time after the next frame, or `None` while hidden or finished.
pub fn next_frame(visible: bool, elapsed_ms: u32) -> Option<u32> {
    (visible && elapsed_ms < DURATION_MS).then(|| (elapsed_ms + FRAME_MS).min(DURATION_MS))
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub target: u64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from zero to `target` once scrolled into view.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone());
    let elapsed = use_state(|| 0u32);

    {
        let deps = (visible, *elapsed);
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |(visible, current): &(bool, u32)| {
                let timeout = next_frame(*visible, *current)
                    .map(|next| Timeout::new(FRAME_MS, move || elapsed.set(next)));
                move || drop(timeout)
            },
            deps,
        );
    }

    let shown = value_at(props.target, *elapsed, DURATION_MS);

    html! {
        <span ref={node} class="animated-number">
            { &props.prefix }{ shown }{ &props.suffix }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_linearly_and_lands_on_target() {
        assert_eq!(value_at(40, 0, 2_000), 0);
        assert_eq!(value_at(40, 1_000, 2_000), 20);
        assert_eq!(value_at(11, 1_000, 2_000), 5);
        assert_eq!(value_at(40, 2_000, 2_000), 40);
        assert_eq!(value_at(40, 5_000, 2_000), 40);
    }

    #[test]
    fn frames_advance_only_while_visible() {
        assert_eq!(next_frame(false, 0), None);
        assert_eq!(next_frame(true, 0), Some(FRAME_MS));
        assert_eq!(next_frame(true, DURATION_MS - 1), Some(DURATION_MS));
        assert_eq!(next_frame(true, DURATION_MS), None);

        let mut elapsed = 0;
        let mut frames = 0;
        while let Some(next) = next_frame(true, elapsed) {
            elapsed = next;
            frames += 1;
        }
        assert_eq!(elapsed, DURATION_MS);
        assert_eq!(frames, (DURATION_MS + FRAME_MS - 1) / FRAME_MS);
    }

    #[test]
    fn zero_duration_shows_target() {
        assert_eq!(value_at(6, 0, 0), 6);
    }
}
