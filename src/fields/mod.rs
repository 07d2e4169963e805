//! 평면 위 스칼라 밀도/계량 대용 필드
//!
//! 필드 값은 유한한 입력에 대해 항상 유한하고 0 이상이다.

mod ellipse;
mod gaussian;
mod heatmap;
mod radial;

pub use ellipse::{ellipse_for, ellipses_at, orientation_about, orientation_for, AnisotropyEllipse};
pub use gaussian::{gaussian_mixture_field, GaussianMixture};
pub use heatmap::{DensityHeatmap, HeatmapCell};
pub use radial::{radial_falloff_field, RadialFalloff};

use crate::config::{GaussianMixtureConfig, RadialFalloffConfig};
use crate::Result;

/// 지원하는 필드 유형
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// 등방성 가우시안 봉우리들의 합
    GaussianMixture(GaussianMixtureConfig),
    /// `1 / (1 + k·r²)` 방사형 감쇠
    RadialFalloff(RadialFalloffConfig),
}

/// 평면 필드의 핵심 트레이트
pub trait ScalarField: Send + Sync {
    /// (x, y)에서의 필드 값
    fn value_at(&self, x: f64, y: f64) -> f64;

    /// 타원 방향을 정하는 자연 중심. 없으면 회전은 0.
    fn center(&self) -> Option<(f64, f64)> {
        None
    }
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        (**self).value_at(x, y)
    }

    fn center(&self) -> Option<(f64, f64)> {
        (**self).center()
    }
}

impl<F: ScalarField + ?Sized> ScalarField for Box<F> {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        (**self).value_at(x, y)
    }

    fn center(&self) -> Option<(f64, f64)> {
        (**self).center()
    }
}

/// 필드 인스턴스 생성 팩토리 함수
pub fn create_field(field_type: FieldType) -> Result<Box<dyn ScalarField>> {
    Ok(match field_type {
        FieldType::GaussianMixture(config) => Box::new(GaussianMixture::new(config)?),
        FieldType::RadialFalloff(config) => Box::new(RadialFalloff::new(config)?),
    })
}
