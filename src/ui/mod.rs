/// Presentation layer: panels (chrome) and the six dashboard views.
///
/// Everything here renders artifacts produced by `crate::stats`; no
/// aggregation logic lives in this module. A view that cannot be computed
/// (empty filter result, degenerate fit) renders its own inline notice and
/// never affects the other views.

pub mod panels;
pub mod views;
