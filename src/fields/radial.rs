//! 방사형 감쇠 필드 `1 / (1 + k·r²)`

use super::ScalarField;
use crate::config::{Constants, RadialFalloffConfig};
use crate::{Error, Result};

/// 중심에서 1, 멀어질수록 엄격히 감소하는 필드. 값의 범위는 (0, 1].
///
/// 값이 `Constants::MIN_FIELD_VALUE`보다 작아지는 극단적인 거리에서는 그 값에 포화된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFalloff {
    k: f64,
    center: (f64, f64),
}

impl RadialFalloff {
    pub fn new(config: RadialFalloffConfig) -> Result<Self> {
        check_k(config.k)?;
        log::debug!(
            "radial falloff k={} around ({}, {})",
            config.k,
            config.center_x,
            config.center_y
        );
        Ok(RadialFalloff {
            k: config.k,
            center: (config.center_x, config.center_y),
        })
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}

impl ScalarField for RadialFalloff {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        falloff(self.k, x - self.center.0, y - self.center.1)
    }

    fn center(&self) -> Option<(f64, f64)> {
        Some(self.center)
    }
}

fn check_k(k: f64) -> Result<()> {
    if !(k > 0.0 && k.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "falloff coefficient k must be positive and finite, got {k}"
        )));
    }
    Ok(())
}

/// `1 / (1 + s²)`, `s = √k·r`. s > 1 이면 `w² / (1 + w²)`, `w = 1/s` 형태로 계산해 s²의 오버플로를 피한다.
fn falloff(k: f64, dx: f64, dy: f64) -> f64 {
    let s = k.sqrt() * dx.hypot(dy);
    let value = if s <= 1.0 {
        1.0 / (1.0 + s * s)
    } else {
        let w = 1.0 / s;
        let w2 = w * w;
        w2 / (1.0 + w2)
    };
    value.max(Constants::MIN_FIELD_VALUE)
}

/// 원점 중심 방사형 감쇠 값
pub fn radial_falloff_field(point: (f64, f64), k: f64) -> Result<f64> {
    check_k(k)?;
    Ok(falloff(k, point.0, point.1))
}
