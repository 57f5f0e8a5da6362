use serde::{Deserialize, Serialize};

/// Output contract of every strategy: a fill/stroke pair of rendered color
/// strings.
///
/// When `degraded` is false the two members are separated by at least the
/// strategy's threshold (contrast ratio or perceptual delta). `degraded` is
/// set only by the Contrast strategy's fallback branch, where none of the
/// candidate pairs cleared the 7.5 ratio — the pair is still the most
/// separated one available, but callers must not assume the threshold held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fill: String,
    pub stroke: String,
    #[serde(default)]
    pub degraded: bool,
}

impl ColorPair {
    pub(crate) fn new(fill: String, stroke: String) -> Self {
        Self {
            fill,
            stroke,
            degraded: false,
        }
    }

    pub(crate) fn degraded(fill: String, stroke: String) -> Self {
        Self {
            fill,
            stroke,
            degraded: true,
        }
    }
}

/// One unit of work for the batch engine: two base color literals plus a
/// strategy selector. Colors and selector are validated at resolve time.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRequest {
    pub territory: String,
    pub border: String,
    pub strategy: String,
}

/// Fully resolved rendering colors for one request. `border` always equals
/// `stroke` under every current strategy; both are carried so consumers can
/// treat them as independent handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub fill: String,
    pub stroke: String,
    pub border: String,
    pub degraded: bool,
}
