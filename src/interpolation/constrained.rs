//! 곡면 제약 보간 (근사 측지선)

use super::InterpolationPath;
use crate::manifolds::{EmbeddedPoint, ParametricPoint, Surface};

/// `t ↦ embed((1 - t)·u1 + t·u2, (1 - t)·v1 + t·v2)`
///
/// 파라미터 공간 직선을 임베딩한 경로라 모든 점이 곡면 위에 있다.
/// 측지선 방정식을 적분한 결과가 아니므로 일반적으로 최단 경로는 아니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstrainedPath<S> {
    surface: S,
    from: ParametricPoint,
    to: ParametricPoint,
}

impl<S: Surface> ConstrainedPath<S> {
    pub fn new(surface: S, from: ParametricPoint, to: ParametricPoint) -> Self {
        log::debug!("surface-constrained path {:?} -> {:?}", from, to);
        ConstrainedPath { surface, from, to }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// 진행도 t에 대응하는 파라미터 공간 점
    pub fn parameter_at(&self, t: f64) -> ParametricPoint {
        self.from.lerp(self.to, t)
    }
}

impl<S: Surface> InterpolationPath for ConstrainedPath<S> {
    fn point_at(&self, t: f64) -> EmbeddedPoint {
        self.surface.embed_point(self.parameter_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifolds::WavySurface;

    #[test]
    fn every_sample_lies_on_surface() {
        let s = WavySurface::default();
        let path = ConstrainedPath::new(s, (-1.5, -1.5).into(), (1.5, 0.7).into());
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let p = path.point_at(t);
            assert_eq!(s.vertical_gap(p), 0.0);
            let uv = path.parameter_at(t);
            assert_eq!(p, s.embed(uv.u, uv.v));
        }
    }

    #[test]
    fn borrows_a_boxed_surface() {
        let s: Box<dyn Surface> = Box::new(WavySurface::default());
        let path = ConstrainedPath::new(&s, (0.0, 0.0).into(), (1.0, 1.0).into());
        assert_eq!(path.end(), WavySurface::default().embed(1.0, 1.0));
    }

    mod proptests {
        use super::*;
        use crate::config::SurfaceConfig;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn point_is_embedded_parameter_lerp(
                u1 in -1e3_f64..1e3,
                v1 in -1e3_f64..1e3,
                u2 in -1e3_f64..1e3,
                v2 in -1e3_f64..1e3,
                t in 0.0_f64..=1.0,
                amplitude in -2.0_f64..2.0,
                frequency in 0.0_f64..8.0,
            ) {
                let s = WavySurface::new(SurfaceConfig { amplitude, frequency });
                let path = ConstrainedPath::new(s, ParametricPoint::new(u1, v1), ParametricPoint::new(u2, v2));
                let expected = s.embed((1.0 - t) * u1 + t * u2, (1.0 - t) * v1 + t * v2);
                prop_assert_eq!(path.point_at(t), expected);
                prop_assert_eq!(s.vertical_gap(path.point_at(t)), 0.0);
            }
        }
    }
}
