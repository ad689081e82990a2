use crate::animation::keyframe::{Keyframe, Snapshot};
use crate::animation::timeline::Timeline;

#[derive(Debug, Clone, Default)]
struct TweenState {
    start: f32,
    duration: f32,
    /// Captured on first render.
    from: Option<Snapshot>,
    /// Progress written by the last render.
    rendered: Option<f32>,
}

impl TweenState {
    fn progress_at(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return if time >= self.start { 1.0 } else { 0.0 };
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

/// Drives a [`Timeline`] from a scroll position.
///
/// Each keyframe becomes a tween over `[point_time, point_time + duration]`
/// that reads its start values the first time it renders, so consecutive
/// tweens on one property chain from wherever the previous one left off.
#[derive(Debug)]
pub struct ScrollTimeline {
    timeline: Timeline,
    tweens: Vec<TweenState>,
    /// Tween indices sorted by start time, ties in authoring order.
    order: Vec<usize>,
    time: Option<f32>,
    duration: f32,
}

impl ScrollTimeline {
    #[must_use]
    pub fn new(timeline: Timeline, default_duration: f32) -> Self {
        let tweens: Vec<TweenState> = timeline
            .iter()
            .map(|k| TweenState {
                start: k.point_time,
                duration: k.effective_duration(default_duration),
                ..TweenState::default()
            })
            .collect();

        let mut order: Vec<usize> = (0..tweens.len()).collect();
        order.sort_by(|&a, &b| tweens[a].start.total_cmp(&tweens[b].start));

        let duration = timeline.duration(default_duration);
        Self {
            timeline,
            tweens,
            order,
            time: None,
            duration,
        }
    }

    /// Moves the playhead to `time` and renders every tween whose progress
    /// changed. Returns how many tweens rendered.
    pub fn seek(&mut self, time: f32) -> usize {
        let time = if time.is_finite() { time.max(0.0) } else { 0.0 };
        let forward = self.time.is_none_or(|prev| time >= prev);
        self.time = Some(time);

        let mut rendered = 0;
        let count = self.order.len();
        for step in 0..count {
            let index = if forward {
                self.order[step]
            } else {
                self.order[count - 1 - step]
            };
            if self.render_tween(index, time) {
                rendered += 1;
            }
        }

        if rendered > 0 {
            log::trace!("Scroll time {time:.3}: {rendered} tweens rendered");
        }
        rendered
    }

    /// Seeks to a fraction of the whole timeline; `p` is clamped to `[0, 1]`.
    pub fn seek_progress(&mut self, p: f32) -> usize {
        let p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        self.seek(p * self.duration)
    }

    fn render_tween(&mut self, index: usize, time: f32) -> bool {
        let keyframe: &Keyframe = &self.timeline.keyframes()[index];
        let state = &mut self.tweens[index];
        let progress = state.progress_at(time);

        match state.rendered {
            None if progress <= 0.0 => return false,
            Some(previous) if (previous - progress).abs() <= f32::EPSILON => return false,
            _ => {}
        }

        let from = state.from.get_or_insert_with(|| keyframe.capture());
        keyframe.render(from, progress);
        keyframe.invoke_on_update();
        state.rendered = Some(progress);
        true
    }

    /// Current playhead, `None` before the first seek.
    #[must_use]
    pub fn time(&self) -> Option<f32> {
        self.time
    }

    /// Time at which the last tween finishes.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Forgets the playhead and every captured start value. Targets keep
    /// whatever values they currently hold.
    pub fn reset(&mut self) {
        self.time = None;
        for tween in &mut self.tweens {
            tween.from = None;
            tween.rendered = None;
        }
    }
}
