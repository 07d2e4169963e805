//! 두 점을 잇는 보간 경로
//!
//! 두 가지 경로를 대비시킨다.
//!
//! - [`LinearPath`]: 주변 공간의 직선 현(chord). 양 끝은 곡면 위에 있지만
//!   중간 점들은 일반적으로 곡면을 벗어난다.
//! - [`ConstrainedPath`]: 파라미터 공간에서 직선 보간한 뒤 임베딩한 경로.
//!   구성상 모든 점이 곡면 위에 있다.
//!
//! `ConstrainedPath`는 측지선 방정식(크리스토펠 기호 등)을 풀지 않는다.
//! 곡면에 붙어 있는 근사 경로일 뿐 진짜 리만 측지선이 아니다.

mod constrained;
mod deviation;
mod linear;

pub use constrained::ConstrainedPath;
pub use deviation::{deviation_at, deviation_profile, max_deviation};
pub use linear::LinearPath;

use crate::config::Constants;
use crate::manifolds::EmbeddedPoint;
use crate::utils::numeric::unit_steps;
use crate::{Error, Result};

/// 진행도 t ∈ [0, 1] → R³ 경로
///
/// 한 번 만들면 불변이며 몇 번이든 다시 샘플링할 수 있다.
pub trait InterpolationPath: Send + Sync {
    /// 진행도 t에서의 점. [0, 1] 밖의 t도 그대로 외삽한다.
    fn point_at(&self, t: f64) -> EmbeddedPoint;

    fn start(&self) -> EmbeddedPoint {
        self.point_at(0.0)
    }

    fn end(&self) -> EmbeddedPoint {
        self.point_at(1.0)
    }
}

impl<P: InterpolationPath + ?Sized> InterpolationPath for &P {
    fn point_at(&self, t: f64) -> EmbeddedPoint {
        (**self).point_at(t)
    }
}

impl<P: InterpolationPath + ?Sized> InterpolationPath for Box<P> {
    fn point_at(&self, t: f64) -> EmbeddedPoint {
        (**self).point_at(t)
    }
}

pub(crate) fn check_sample_count(n: usize) -> Result<()> {
    if n < Constants::MIN_SAMPLES {
        return Err(Error::InvalidArgument(format!(
            "sample count must be at least {}, got {n}",
            Constants::MIN_SAMPLES
        )));
    }
    Ok(())
}

/// [0, 1]에서 양 끝을 포함한 등간격 n개 샘플
pub fn sample<P: InterpolationPath + ?Sized>(path: &P, n: usize) -> Result<Vec<EmbeddedPoint>> {
    check_sample_count(n)?;
    log::trace!("sampling path at {n} points");
    Ok(unit_steps(n).iter().map(|&t| path.point_at(t)).collect())
}
