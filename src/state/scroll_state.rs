//! Vertical scroll state of the form, with eased transitions

use std::time::{Duration, Instant};

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Scroll offset (in rows) of the form content inside its viewport
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current offset, fractional while animating
    pub offset: f32,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Duration of a smooth scroll
    const ANIMATION_DURATION: Duration = Duration::from_millis(300);

    /// Whole rows to skip when drawing
    pub fn rows(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start a smooth scroll towards `target`
    pub fn scroll_to(&mut self, target: u16, now: Instant) {
        let to = target as f32;
        if (self.offset - to).abs() < f32::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started: now,
        });
    }

    /// Smoothly scroll so a `height`-row block starting at `top` sits in
    /// the middle of the viewport
    pub fn center_on(&mut self, top: u16, height: u16, viewport: u16, content: u16, now: Instant) {
        let max_offset = content.saturating_sub(viewport);
        // A block taller than the viewport is shown from its top
        let target = (top + height / 2)
            .saturating_sub(viewport / 2)
            .min(top)
            .min(max_offset);
        self.scroll_to(target, now);
    }

    /// Jump (without animation) just far enough to show the block
    pub fn ensure_visible(&mut self, top: u16, height: u16, viewport: u16) {
        let current = self.rows();
        let target = if top < current {
            top
        } else if top + height > current + viewport {
            (top + height).saturating_sub(viewport).min(top)
        } else {
            return;
        };
        self.animation = None;
        self.offset = target as f32;
    }

    /// Advance the animation
    pub fn update(&mut self, now: Instant) {
        let Some(anim) = self.animation else {
            return;
        };

        let elapsed = now.saturating_duration_since(anim.started);
        if elapsed >= Self::ANIMATION_DURATION {
            self.offset = anim.to;
            self.animation = None;
            return;
        }

        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_in_out(progress);
        self.offset = anim.from + (anim.to - anim.from) * eased;
    }
}
