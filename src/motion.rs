//! Entrance animation descriptors.
//!
//! The page does not animate anything itself. Each animated element carries
//! an [`Entrance`]: where it starts, where it ends and how long it takes.
//! The descriptor is rendered as inline CSS custom properties and a single
//! shared `@keyframes enter` rule in `static/style.css` interpolates between
//! the two states. Once the browser starts an animation it owns it; there is
//! nothing to cancel or clean up.
//!
//! Cards in a collection cascade: the n-th card waits [`stagger_delay`]
//! before starting. The delay is a pure function of position, so rendering
//! the same content twice produces identical styles.

use crate::config::MotionConfig;
use std::time::Duration;

/// CSS class that opts an element into the shared entrance animation.
pub const ENTER_CLASS: &str = "enter";

/// A visual state an element can be in at the start or end of an entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Vertical offset in CSS pixels; negative is up.
    pub translate_y: f32,
    pub scale: f32,
}

impl VisualState {
    /// Fully visible, in place, at natural size.
    pub const REST: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Invisible and shifted vertically by `translate_y` pixels.
    pub const fn hidden_offset(translate_y: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y,
            scale: 1.0,
        }
    }

    /// Invisible and scaled by `scale`.
    pub const fn hidden_scaled(scale: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y: 0.0,
            scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
}

/// Initial state, target state and timing of one element's entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: VisualState,
    pub to: VisualState,
    pub timing: Timing,
}

/// Delay of the card at `index` (0-based) in its collection.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

impl Entrance {
    /// Header: fades in while sliding down 10px.
    pub fn header(motion: &MotionConfig) -> Self {
        Self {
            from: VisualState::hidden_offset(-10.0),
            to: VisualState::REST,
            timing: Timing {
                duration: Duration::from_millis(motion.header_duration_ms),
                delay: Duration::ZERO,
            },
        }
    }

    /// Document circles: fade in while growing from 95%.
    pub fn pop(index: usize, motion: &MotionConfig) -> Self {
        Self {
            from: VisualState::hidden_scaled(0.95),
            to: VisualState::REST,
            timing: card_timing(index, motion),
        }
    }

    /// Project and website cards: fade in while rising 10px.
    pub fn rise(index: usize, motion: &MotionConfig) -> Self {
        Self {
            from: VisualState::hidden_offset(10.0),
            to: VisualState::REST,
            timing: card_timing(index, motion),
        }
    }

    /// Inline style consumed by the `enter` keyframes.
    pub fn style(&self) -> String {
        format!(
            "--from-opacity:{};--from-y:{}px;--from-scale:{};\
             --to-opacity:{};--to-y:{}px;--to-scale:{};\
             --enter-duration:{}ms;--enter-delay:{}ms",
            self.from.opacity,
            self.from.translate_y,
            self.from.scale,
            self.to.opacity,
            self.to.translate_y,
            self.to.scale,
            self.timing.duration.as_millis(),
            self.timing.delay.as_millis(),
        )
    }
}

fn card_timing(index: usize, motion: &MotionConfig) -> Timing {
    Timing {
        duration: Duration::from_millis(motion.card_duration_ms),
        delay: stagger_delay(index, Duration::from_millis(motion.stagger_ms)),
    }
}
