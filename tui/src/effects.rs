//! Screen shake standing in for the vibration motor.

use std::f32::consts::TAU;

use ratatui::layout::Rect;

use says_engine::{AnimPhase, Pulse, PulseEffect};

const OSCILLATIONS: f32 = 4.0;

fn amplitude(pulse: Pulse) -> f32 {
    f32::from(pulse.strength())
}

/// Offset `base` horizontally for the current point of a pulse effect.
///
/// The shake decays over the pulse and stops during the gap of a double pulse.
/// The result never leaves `viewport`.
#[must_use]
pub fn apply_pulse_effect(effect: &PulseEffect, base: Rect, viewport: Rect) -> Rect {
    let t = match effect.phase() {
        AnimPhase::Running { progress } => progress.clamp(0.0, 1.0),
        AnimPhase::Completed => return base,
    };
    if !effect.is_buzzing() {
        return base;
    }
    let decay = 1.0 - t;
    let offset = (f32::sin(t * TAU * OSCILLATIONS)
        * amplitude(effect.pulse())
        * decay)
        .round() as i32;
    let viewport_left = i32::from(viewport.x);
    let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
    let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
    let base_x = i32::from(base.x);
    let x = (base_x + offset).clamp(viewport_left, max_x) as u16;
    Rect { x, ..base }
}
