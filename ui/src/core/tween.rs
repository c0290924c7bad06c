//! Counter animation for KPI cards.
//!
//! The animated value is purely cosmetic: callers store the target first and
//! let the tween walk the displayed number towards it frame by frame.

use dioxus::prelude::*;

use crate::core::{platform, timing};

/// Duration of a counter animation.
pub const COUNTER_DURATION_MS: f64 = 700.0;

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: i64,
    pub to: i64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(from: i64, to: i64, started_at_ms: f64) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    /// Progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value at `now_ms` and whether the animation is finished.
    pub fn sample(&self, now_ms: f64) -> (i64, bool) {
        let progress = self.progress(now_ms);
        let span = (self.to - self.from) as f64;
        let value = (self.from as f64 + span * ease_out_cubic(progress)).floor() as i64;
        (value, progress >= 1.0)
    }
}

/// Start a new run for `target`. The run id always advances so any tween still
/// in flight stops; no tween is needed when `shown` already equals `target`.
pub fn retarget(generation: u64, shown: i64, target: i64, now_ms: f64) -> (u64, Option<Tween>) {
    let run = generation + 1;
    let tween = (shown != target).then(|| Tween::new(shown, target, now_ms));
    (run, tween)
}

/// Number that eases from whatever it currently shows to `target`.
#[component]
pub fn AnimatedNumber(id: String, target: i64, class: Option<String>) -> Element {
    let mut shown = use_signal(|| 0i64);
    let mut generation = use_signal(|| 0u64);

    use_effect(use_reactive((&target,), move |(target,)| {
        let (run, tween) = retarget(*generation.peek(), *shown.peek(), target, timing::now_ms());
        generation.set(run);
        let Some(tween) = tween else {
            return;
        };
        spawn(async move {
            loop {
                // A newer target took over this counter.
                if *generation.peek() != run {
                    break;
                }
                let (value, done) = tween.sample(timing::now_ms());
                shown.set(value);
                if done {
                    break;
                }
                platform::sleep_ms(platform::FRAME_MS).await;
            }
        });
    }));

    let class = class.unwrap_or_else(|| "kpi-card__value".to_string());

    rsx! {
        strong { id: "{id}", class: "{class}", "{shown}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);

        let mut previous = 0.0;
        for step in 1..=20 {
            let value = ease_out_cubic(step as f64 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn tween_lands_exactly_on_target() {
        let tween = Tween::new(3, 42, 1_000.0);
        assert_eq!(tween.sample(1_000.0), (3, false));
        assert_eq!(tween.sample(1_000.0 + COUNTER_DURATION_MS), (42, true));
        assert_eq!(tween.sample(5_000.0), (42, true));
    }

    #[test]
    fn returning_to_the_shown_value_cancels_the_running_tween() {
        // 0 -> 1 starts run 1; going back to 0 before anything was drawn
        // must still retire run 1.
        let (first, tween) = retarget(0, 0, 1, 0.0);
        assert_eq!(first, 1);
        assert_eq!(tween, Some(Tween::new(0, 1, 0.0)));

        let (second, tween) = retarget(first, 0, 0, 100.0);
        assert_eq!(second, 2);
        assert_eq!(tween, None);
        assert_ne!(second, first);
    }

    #[test]
    fn retarget_starts_from_the_shown_value() {
        let (_, tween) = retarget(4, 7, 2, 50.0);
        let tween = tween.expect("tween");
        assert_eq!((tween.from, tween.to), (7, 2));
        assert_eq!(tween.sample(50.0 + COUNTER_DURATION_MS), (2, true));
    }

    #[test]
    fn tween_counts_down_as_well() {
        let tween = Tween::new(10, 0, 0.0);
        let (mid, done) = tween.sample(COUNTER_DURATION_MS / 2.0);
        assert!(!done);
        assert!(mid < 10 && mid >= 0);
        assert_eq!(tween.sample(COUNTER_DURATION_MS), (0, true));
    }
}
