//! 기본 설정에 묶인 자유 함수 인터페이스 (embed, linear_path 등)

use crate::config::EllipseConfig;
use crate::fields::{self, ScalarField};
use crate::interpolation::{ConstrainedPath, LinearPath};
use crate::manifolds::{EmbeddedPoint, ParametricPoint, Surface, WavySurface};
use crate::scan::{self, ScanSample, ScanTrajectory};
use crate::Result;

/// 기본 물결 곡면 임베딩 (a = 0.3, b = 2)
pub fn embed(u: f64, v: f64) -> EmbeddedPoint {
    WavySurface::default().embed(u, v)
}

/// 주변 공간 직선 보간 경로
pub fn linear_path(p1: EmbeddedPoint, p2: EmbeddedPoint) -> LinearPath {
    LinearPath::new(p1, p2)
}

/// 기본 곡면 위의 파라미터 공간 보간 경로 (근사 측지선)
pub fn constrained_path(u1: f64, v1: f64, u2: f64, v2: f64) -> ConstrainedPath<WavySurface> {
    ConstrainedPath::new(
        WavySurface::default(),
        ParametricPoint::new(u1, v1),
        ParametricPoint::new(u2, v2),
    )
}

/// 기본 타원 설정 (0.5, 0.3, 0.2)으로 궤적을 평가
pub fn evaluate_trajectory<F, T>(field: &F, trajectory: &T, times: &[f64]) -> Result<Vec<ScanSample>>
where
    F: ScalarField + ?Sized,
    T: ScanTrajectory + ?Sized,
{
    scan::evaluate_trajectory(field, trajectory, times, &EllipseConfig::default())
}

/// 기본 타원 설정으로 필드 값 → (폭, 높이)
pub fn ellipse_for_value(value: f64) -> Result<(f64, f64)> {
    let cfg = EllipseConfig::default();
    fields::ellipse_for(value, cfg.base_width, cfg.base_height, cfg.min_value_floor)
}
