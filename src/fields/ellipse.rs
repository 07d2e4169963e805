//! 필드 값에서 유도한 이방성 타원
//!
//! 실제 `Jᵀ J` 계량 텐서를 계산하지 않는다. 필드 값이 클수록 작아지는
//! 타원 크기와 중심을 향한 방향만으로 국소 왜곡을 시각적으로 흉내 낸다.

use super::ScalarField;
use crate::config::{Constants, EllipseConfig};
use crate::utils::numeric::safe_atan2;
use crate::{Error, Result};

/// 한 지점에 그릴 타원 기술자
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnisotropyEllipse {
    pub position: (f64, f64),
    pub width: f64,
    pub height: f64,
    /// 라디안 단위 회전각
    pub rotation: f64,
}

impl AnisotropyEllipse {
    /// 필드를 `point`에서 평가해 타원을 만든다
    ///
    /// 회전은 필드의 자연 중심을 기준으로 한 방사 방향이며, 중심이 없는 필드는 0이다.
    pub fn at<F: ScalarField + ?Sized>(
        field: &F,
        point: (f64, f64),
        config: &EllipseConfig,
    ) -> Result<Self> {
        let value = field.value_at(point.0, point.1);
        Self::from_value(value, point, field.center(), config)
    }

    /// 이미 평가한 필드 값으로 타원을 만든다
    pub fn from_value(
        value: f64,
        point: (f64, f64),
        center: Option<(f64, f64)>,
        config: &EllipseConfig,
    ) -> Result<Self> {
        let (width, height) = ellipse_for(
            value,
            config.base_width,
            config.base_height,
            config.min_value_floor,
        )?;
        let rotation = center.map_or(0.0, |center| orientation_about(point, center));
        Ok(AnisotropyEllipse {
            position: point,
            width,
            height,
            rotation,
        })
    }
}

/// 필드 값 → (폭, 높이)
///
/// `base / (value + min_value_floor)` 매핑. value에 대해 단조 감소한다.
/// 결과는 `[MIN_ELLIPSE_EXTENT, MAX_ELLIPSE_EXTENT]`로 잘리므로 합이
/// 오버플로하거나 곱이 언더플로해도 0이나 무한대가 되지 않는다.
pub fn ellipse_for(
    value: f64,
    base_width: f64,
    base_height: f64,
    min_value_floor: f64,
) -> Result<(f64, f64)> {
    if !(value >= 0.0 && value.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "field value must be finite and non-negative, got {value}"
        )));
    }
    for (name, x) in [
        ("base_width", base_width),
        ("base_height", base_height),
        ("min_value_floor", min_value_floor),
    ] {
        if !(x > 0.0 && x.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "{name} must be positive and finite, got {x}"
            )));
        }
    }
    let scale = 1.0 / (value + min_value_floor);
    Ok((
        (base_width * scale).clamp(Constants::MIN_ELLIPSE_EXTENT, Constants::MAX_ELLIPSE_EXTENT),
        (base_height * scale).clamp(Constants::MIN_ELLIPSE_EXTENT, Constants::MAX_ELLIPSE_EXTENT),
    ))
}

/// 원점 기준 극각 `atan2(y, x)`. 원점에서는 0.
pub fn orientation_for(point: (f64, f64)) -> f64 {
    orientation_about(point, (0.0, 0.0))
}

/// `center` 기준 극각. 중심과 겹치면 0.
pub fn orientation_about(point: (f64, f64), center: (f64, f64)) -> f64 {
    safe_atan2(point.1 - center.1, point.0 - center.0)
}

/// 표시점마다 타원을 계산
pub fn ellipses_at<F: ScalarField + ?Sized>(
    field: &F,
    points: &[(f64, f64)],
    config: &EllipseConfig,
) -> Result<Vec<AnisotropyEllipse>> {
    points
        .iter()
        .map(|&p| AnisotropyEllipse::at(field, p, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RadialFalloffConfig;
    use crate::fields::{GaussianMixture, RadialFalloff};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn sizes_stay_positive_and_shrink() {
        let mut last = f64::INFINITY;
        for &v in &[0.0, 1e-9, 0.1, 1.0, 3.0, 1e6, f64::MAX / 2.0] {
            let (w, h) = ellipse_for(v, 0.5, 0.3, 0.2).unwrap();
            assert!(w > 0.0 && h > 0.0, "value {v} gave {w}x{h}");
            assert!(w <= last);
            last = w;
        }
    }

    #[test]
    fn reference_mapping() {
        let (w, h) = ellipse_for(0.3, 0.5, 0.3, 0.2).unwrap();
        assert!((w - 1.0).abs() < 1e-12);
        assert!((h - 0.6).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(ellipse_for(-0.1, 0.5, 0.3, 0.2).is_err());
        assert!(ellipse_for(f64::NAN, 0.5, 0.3, 0.2).is_err());
        assert!(ellipse_for(0.1, 0.0, 0.3, 0.2).is_err());
        assert!(ellipse_for(0.1, 0.5, 0.3, 0.0).is_err());
    }

    #[test]
    fn orientation_is_zero_at_origin() {
        let a = orientation_for((0.0, 0.0));
        assert_eq!(a, 0.0);
        assert!(!a.is_nan());
        assert!((orientation_for((0.0, 2.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((orientation_for((-1.0, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn radial_field_orients_outward() {
        let field = RadialFalloff::new(RadialFalloffConfig::default()).unwrap();
        let e = AnisotropyEllipse::at(&field, (1.0, 1.0), &EllipseConfig::default()).unwrap();
        assert!((e.rotation - PI / 4.0).abs() < 1e-12);
        let at_center = AnisotropyEllipse::at(&field, (0.0, 0.0), &EllipseConfig::default()).unwrap();
        assert_eq!(at_center.rotation, 0.0);
    }

    #[test]
    fn mixture_ellipses_at_bump_centers() {
        let field = GaussianMixture::default();
        let ellipses = ellipses_at(&field, &field.centers(), &EllipseConfig::default()).unwrap();
        assert_eq!(ellipses.len(), 3);
        for e in &ellipses {
            assert_eq!(e.rotation, 0.0);
            assert!((e.height / e.width - 0.6).abs() < 1e-12);
        }
    }

    #[test]
    fn extreme_inputs_stay_positive_and_finite() {
        let (w, h) = ellipse_for(f64::MAX, 0.5, 0.3, 1e300).unwrap();
        assert_eq!((w, h), (Constants::MIN_ELLIPSE_EXTENT, Constants::MIN_ELLIPSE_EXTENT));
        let (w, h) = ellipse_for(1e300, 1e-30, 1e-30, 0.2).unwrap();
        assert!(w > 0.0 && h > 0.0);
        let (w, _) = ellipse_for(0.0, f64::MAX, 1.0, 1e-300).unwrap();
        assert_eq!(w, Constants::MAX_ELLIPSE_EXTENT);
    }

    #[test]
    fn from_value_matches_field_evaluation() {
        let field = RadialFalloff::new(RadialFalloffConfig::default()).unwrap();
        let cfg = EllipseConfig::default();
        let point = (0.3, -1.2);
        let direct = AnisotropyEllipse::at(&field, point, &cfg).unwrap();
        let value = field.value_at(point.0, point.1);
        let reused = AnisotropyEllipse::from_value(value, point, field.center(), &cfg).unwrap();
        assert_eq!(direct, reused);
    }

    #[test]
    fn orientation_just_off_center_is_true_angle() {
        assert!((orientation_for((0.0, 1e-13)) - FRAC_PI_2).abs() < 1e-12);
        assert!((orientation_for((-1e-13, 0.0)) - PI).abs() < 1e-12);
        assert_eq!(orientation_for((-0.0, 0.0)), 0.0);
        assert!((orientation_about((2.0, 1e-300), (2.0, 0.0)) - FRAC_PI_2).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_value() -> impl Strategy<Value = f64> {
            prop_oneof![
                Just(0.0),
                0.0_f64..1e3,
                prop::num::f64::POSITIVE.prop_filter("finite", |v| v.is_finite()),
            ]
        }

        fn any_extent() -> impl Strategy<Value = f64> {
            prop::num::f64::POSITIVE.prop_filter("positive and finite", |v| *v > 0.0 && v.is_finite())
        }

        proptest! {
            #[test]
            fn sizes_always_positive(
                value in any_value(),
                base_width in any_extent(),
                base_height in any_extent(),
                floor in any_extent(),
            ) {
                let (w, h) = ellipse_for(value, base_width, base_height, floor).unwrap();
                prop_assert!(w > 0.0 && w.is_finite(), "width {w}");
                prop_assert!(h > 0.0 && h.is_finite(), "height {h}");
            }

            #[test]
            fn sizes_never_grow_with_value(
                a in any_value(),
                b in any_value(),
                base in 1e-3_f64..1e3,
                floor in 1e-3_f64..1e3,
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let (w_lo, _) = ellipse_for(lo, base, base, floor).unwrap();
                let (w_hi, _) = ellipse_for(hi, base, base, floor).unwrap();
                prop_assert!(w_hi <= w_lo);
            }

            #[test]
            fn orientation_is_never_nan(x in -1e6_f64..1e6, y in -1e6_f64..1e6) {
                let a = orientation_for((x, y));
                prop_assert!(!a.is_nan());
                prop_assert!(a.abs() <= PI);
            }
        }
    }
}
