//! 평면 `z = c` 구현 (직선 보간과 제약 보간이 일치하는 대조군)

use super::Surface;

/// 높이가 일정한 평면
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlatSurface {
    height: f64,
}

impl FlatSurface {
    pub fn new(height: f64) -> Self {
        FlatSurface { height }
    }
}

impl Surface for FlatSurface {
    fn height(&self, _u: f64, _v: f64) -> f64 {
        self.height
    }
}
