//! Timed attribute transitions backed by egui's animation engine.
//!
//! `Context::animate_value_with_time` interpolates a value toward the most
//! recently requested target over a fixed duration, restarting from the
//! current displayed value whenever the target changes. That restart
//! behavior gives rapid repeated filter/reset clicks the conventional
//! "last issued transition wins" interruption semantics without any queuing
//! on our side.

use egui::{Color32, Context, Id};

/// Animate a bar length (data units) toward `target`.
pub(crate) fn animate_width(ctx: &Context, id: Id, target: f64, duration_secs: f32) -> f64 {
    ctx.animate_value_with_time(id.with("width"), target as f32, duration_secs) as f64
}

/// Animate a fill color toward `target`, interpolating per RGB channel over
/// the same duration as the width transition.
pub(crate) fn animate_fill(ctx: &Context, id: Id, target: Color32, duration_secs: f32) -> Color32 {
    let r = ctx.animate_value_with_time(id.with("fill_r"), target.r() as f32, duration_secs);
    let g = ctx.animate_value_with_time(id.with("fill_g"), target.g() as f32, duration_secs);
    let b = ctx.animate_value_with_time(id.with("fill_b"), target.b() as f32, duration_secs);
    Color32::from_rgb(
        r.round().clamp(0.0, 255.0) as u8,
        g.round().clamp(0.0, 255.0) as u8,
        b.round().clamp(0.0, 255.0) as u8,
    )
}
