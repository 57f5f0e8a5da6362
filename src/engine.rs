use rayon::prelude::*;

use crate::color::Color;
use crate::error::EngineError;
use crate::math::wcag::relative_luminance;
use crate::strategy::Strategy;
use crate::types::{Resolution, ResolveRequest};

/// Order two base colors by relative luminance: the brighter one becomes
/// the light input, the dimmer one the dark input. Some territory/border
/// combinations arrive either way round.
pub fn orient(a: Color, b: Color) -> (Color, Color) {
    if relative_luminance(&b) < relative_luminance(&a) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Resolve one request: parse both color literals and the strategy
/// selector, orient the pair by luminance, then dispatch. Any failure is
/// local to this request.
pub fn resolve(request: &ResolveRequest) -> Result<Resolution, EngineError> {
    let strategy: Strategy = request.strategy.parse()?;
    let territory = Color::parse(&request.territory)?;
    let border = Color::parse(&request.border)?;
    let (light, dark) = orient(territory, border);

    let pair = strategy.build_colors(&light, &dark)?;
    let border = strategy.border(&light, &dark)?;

    Ok(Resolution {
        fill: pair.fill,
        stroke: pair.stroke,
        border,
        degraded: pair.degraded,
    })
}

/// Resolve a batch in parallel. Each request is an independent pure
/// transform, so Rayon may run them in any order; results keep the input
/// order and errors stay per-request.
pub fn resolve_all(requests: &[ResolveRequest]) -> Vec<Result<Resolution, EngineError>> {
    requests.par_iter().map(resolve).collect()
}
