//! 주변 공간 직선 보간

use super::InterpolationPath;
use crate::manifolds::EmbeddedPoint;

/// `t ↦ (1 - t)·p1 + t·p2`
///
/// t = 0, t = 1 에서 끝점을 정확히 재현한다. 곡면이 평평하지 않으면 중간 점은 곡면을 벗어난다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPath {
    from: EmbeddedPoint,
    to: EmbeddedPoint,
}

impl LinearPath {
    pub fn new(from: EmbeddedPoint, to: EmbeddedPoint) -> Self {
        log::debug!("linear path {:?} -> {:?}", from, to);
        LinearPath { from, to }
    }
}

impl InterpolationPath for LinearPath {
    fn point_at(&self, t: f64) -> EmbeddedPoint {
        self.from.lerp(self.to, t)
    }
}
