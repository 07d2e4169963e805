//! 2차원 파라미터 영역을 R³에 임베딩하는 곡면 모듈

mod flat;
mod point;
mod wavy;

pub use flat::FlatSurface;
pub use point::{EmbeddedPoint, ParametricPoint};
pub use wavy::WavySurface;

use crate::config::{GridSpec, SurfaceConfig};
use crate::Result;
use ndarray::Array3;

/// 지원하는 곡면 유형
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceType {
    /// `a·sin(b·u)·cos(b·v)` 물결 곡면
    Wavy,
    /// z = 0 평면
    Flat,
}

/// 그래프 곡면 `(u, v) ↦ (u, v, h(u, v))`의 핵심 트레이트
///
/// 모든 실수 입력에서 정의되고 부작용이 없어야 한다.
pub trait Surface: Send + Sync {
    /// 높이 함수 h(u, v)
    fn height(&self, u: f64, v: f64) -> f64;

    /// 임베딩 (u, v) → R³
    fn embed(&self, u: f64, v: f64) -> EmbeddedPoint {
        EmbeddedPoint::new(u, v, self.height(u, v))
    }

    fn embed_point(&self, p: ParametricPoint) -> EmbeddedPoint {
        self.embed(p.u, p.v)
    }

    /// 주변 공간 점이 곡면 위에서 얼마나 떠 있는지 (연직 방향 부호 거리)
    ///
    /// `embed` 결과에 대해서는 정확히 0이다.
    fn vertical_gap(&self, p: EmbeddedPoint) -> f64 {
        p.z - self.height(p.x, p.y)
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn height(&self, u: f64, v: f64) -> f64 {
        (**self).height(u, v)
    }
}

impl<S: Surface + ?Sized> Surface for &S {
    fn height(&self, u: f64, v: f64) -> f64 {
        (**self).height(u, v)
    }
}

/// 곡면 인스턴스 생성 팩토리 함수
pub fn create_surface(surface_type: SurfaceType, config: SurfaceConfig) -> Box<dyn Surface> {
    match surface_type {
        SurfaceType::Wavy => Box::new(WavySurface::new(config)),
        SurfaceType::Flat => Box::new(FlatSurface::default()),
    }
}

/// 파라미터 격자 위에서 곡면을 평가해 (nu, nv, 3) 메쉬 정점 배열을 만든다
pub fn tessellate<S: Surface + ?Sized>(surface: &S, grid: &GridSpec) -> Result<Array3<f64>> {
    grid.u.validate("tessellate u")?;
    grid.v.validate("tessellate v")?;
    log::debug!(
        "tessellating surface on {}x{} grid",
        grid.u.count,
        grid.v.count
    );

    let us = ndarray::Array1::linspace(grid.u.start, grid.u.end, grid.u.count);
    let vs = ndarray::Array1::linspace(grid.v.start, grid.v.end, grid.v.count);
    let mut mesh = Array3::zeros((grid.u.count, grid.v.count, 3));
    for (i, &u) in us.iter().enumerate() {
        for (j, &v) in vs.iter().enumerate() {
            let p = surface.embed(u, v);
            mesh[[i, j, 0]] = p.x;
            mesh[[i, j, 1]] = p.y;
            mesh[[i, j, 2]] = p.z;
        }
    }
    Ok(mesh)
}
