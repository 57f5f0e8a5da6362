use palette::Lab;

use crate::color::Color;
use crate::error::EngineError;
use crate::math::delta::delta;
use crate::types::ColorPair;

/// Iteration count at which the pair search moves to its next phase.
const PHASE_LIMIT: u32 = 15;
/// Hard cutoff for every search in this strategy. Count-based, never
/// wall-clock; reaching it is a fatal `NonConvergence`.
pub(crate) const ITERATION_CEILING: u32 = 500;
/// Minimum perceptual delta for the pair search.
pub(crate) const PAIR_TARGET: f64 = 0.45;
/// Minimum perceptual delta for the single-value operations.
pub(crate) const STYLE_TARGET: f64 = 0.5;
/// Lab lightness step for the one-sided pair phases.
const LIGHTNESS_STEP: f32 = 5.0;
/// Lab lightness step for the symmetric single-value loop.
const STYLE_STEP: f32 = 0.5;
/// Compounding darken applied to the rendered dark candidate mid-search.
const COMPOUND_DARKEN: f64 = 0.05;

const FILL_ALPHA: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Lower the dark candidate's Lab lightness in fixed steps.
    LowerDark,
    /// Freeze the dark lightness; compound-darken the rendered dark color.
    CompoundDark,
    /// Freeze the dark candidate; raise the light candidate's lightness.
    RaiseLight,
}

fn phase_for(count: u32) -> Phase {
    if count <= PHASE_LIMIT {
        Phase::LowerDark
    } else if count <= 2 * PHASE_LIMIT {
        Phase::CompoundDark
    } else {
        Phase::RaiseLight
    }
}

/// Per-call search record. Discarded when the call returns or fails.
struct ConvergenceState {
    light_lab: Lab,
    dark_lab: Lab,
    /// Rendered dark candidate, captured once on entering `CompoundDark`.
    compound_dark: Option<Color>,
    light: Color,
    dark: Color,
    delta: f64,
}

impl ConvergenceState {
    fn seed(light: &Color, dark: &Color) -> Self {
        // A translucent light input is composited against a neutral white
        // background before conversion, so the search sees what a viewer
        // would.
        let light_lab = light
            .composite_over(&Color::from_rgb(255, 255, 255))
            .to_lab();
        let dark_lab = dark.to_lab();
        let light = Color::from_lab(light_lab, 1.0);
        let dark = Color::from_lab(dark_lab, 1.0);
        let delta = delta(&light, &dark);
        Self {
            light_lab,
            dark_lab,
            compound_dark: None,
            light,
            dark,
            delta,
        }
    }

    fn step(&mut self, phase: Phase) {
        match phase {
            Phase::LowerDark => {
                self.dark_lab.l = (self.dark_lab.l - LIGHTNESS_STEP).clamp(0.0, 100.0);
                self.dark = Color::from_lab(self.dark_lab, 1.0);
            }
            Phase::CompoundDark => {
                let captured = self
                    .compound_dark
                    .get_or_insert_with(|| Color::from_lab(self.dark_lab, 1.0));
                *captured = captured.darken(COMPOUND_DARKEN);
                self.dark = *captured;
            }
            Phase::RaiseLight => {
                self.light_lab.l = (self.light_lab.l + LIGHTNESS_STEP).clamp(0.0, 100.0);
                self.light = Color::from_lab(self.light_lab, 1.0);
            }
        }
        self.delta = delta(&self.light, &self.dark);
    }
}

/// Three-phase bounded search for a (light, dark) pair with perceptual
/// delta >= `target`. Phase transitions are driven purely by the iteration
/// counter — a fixed-budget design, not an adaptive one.
pub(crate) fn converge_pair(
    light: &Color,
    dark: &Color,
    target: f64,
) -> Result<(Color, Color), EngineError> {
    let mut state = ConvergenceState::seed(light, dark);
    let mut phase = Phase::LowerDark;

    for count in 1..=ITERATION_CEILING {
        let next = phase_for(count);
        if next != phase {
            log::debug!("pair search entering {next:?} at iteration {count}");
            phase = next;
        }
        state.step(phase);
        if state.delta >= target {
            log::debug!(
                "pair search converged at iteration {count} (delta {:.3})",
                state.delta
            );
            return Ok((state.light, state.dark));
        }
    }

    Err(EngineError::NonConvergence {
        iterations: ITERATION_CEILING,
        delta: state.delta,
        target,
    })
}

/// Symmetric bounded search used by the single-value operations: push the
/// light lightness up and the dark lightness down together in 0.5 steps
/// until the delta target is met. Shares the pair search's iteration
/// ceiling and failure type.
pub(crate) fn converge_styles(
    light: &Color,
    dark: &Color,
    target: f64,
) -> Result<(Color, Color), EngineError> {
    let mut light_lab = light
        .composite_over(&Color::from_rgb(255, 255, 255))
        .to_lab();
    let mut dark_lab = dark.to_lab();
    let mut last_delta = delta(
        &Color::from_lab(light_lab, 1.0),
        &Color::from_lab(dark_lab, 1.0),
    );

    for _ in 1..=ITERATION_CEILING {
        light_lab.l = (light_lab.l + STYLE_STEP).clamp(0.0, 100.0);
        dark_lab.l = (dark_lab.l - STYLE_STEP).clamp(0.0, 100.0);
        let light_candidate = Color::from_lab(light_lab, 1.0);
        let dark_candidate = Color::from_lab(dark_lab, 1.0);
        last_delta = delta(&light_candidate, &dark_candidate);
        if last_delta >= target {
            return Ok((light_candidate, dark_candidate));
        }
    }

    Err(EngineError::NonConvergence {
        iterations: ITERATION_CEILING,
        delta: last_delta,
        target,
    })
}

pub fn build_colors(light: &Color, dark: &Color) -> Result<ColorPair, EngineError> {
    let (fill, stroke) = converge_pair(light, dark, PAIR_TARGET)?;
    Ok(ColorPair::new(
        fill.set_alpha(FILL_ALPHA).render(),
        stroke.render(),
    ))
}

pub fn fill_style(light: &Color, dark: &Color) -> Result<String, EngineError> {
    let (fill, _) = converge_styles(light, dark, STYLE_TARGET)?;
    Ok(fill.set_alpha(FILL_ALPHA).render())
}

pub fn stroke_style(light: &Color, dark: &Color) -> Result<String, EngineError> {
    let (_, stroke) = converge_styles(light, dark, STYLE_TARGET)?;
    Ok(stroke.render())
}
