//! 움직이는 스캔 지점의 필드 평가
//!
//! 코어는 콜백이나 내부 상태를 갖지 않는다. 애니메이션 시계를 가진 쪽이
//! 매 프레임 [`evaluate_trajectory`] (또는 필드 함수)를 다시 호출한다.

mod circular;

pub use circular::CircularArc;

use crate::config::EllipseConfig;
use crate::fields::{AnisotropyEllipse, ScalarField};
use crate::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 시간 → 평면 위치
pub trait ScanTrajectory: Send + Sync {
    /// 임의의 실수 시간에서의 위치
    fn position_at(&self, time: f64) -> (f64, f64);
}

impl<T: ScanTrajectory + ?Sized> ScanTrajectory for &T {
    fn position_at(&self, time: f64) -> (f64, f64) {
        (**self).position_at(time)
    }
}

/// 한 시각의 스캔 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSample {
    pub time: f64,
    pub position: (f64, f64),
    pub value: f64,
    pub ellipse: AnisotropyEllipse,
}

/// 한 시각에서 위치, 필드 값, 타원을 계산
pub fn evaluate_at<F, T>(field: &F, trajectory: &T, time: f64, config: &EllipseConfig) -> Result<ScanSample>
where
    F: ScalarField + ?Sized,
    T: ScanTrajectory + ?Sized,
{
    let position = trajectory.position_at(time);
    let value = field.value_at(position.0, position.1);
    let ellipse = AnisotropyEllipse::from_value(value, position, field.center(), config)?;
    Ok(ScanSample {
        time,
        position,
        value,
        ellipse,
    })
}

/// 요청한 시각마다 스캔 결과를 입력 순서대로 돌려준다
pub fn evaluate_trajectory<F, T>(
    field: &F,
    trajectory: &T,
    times: &[f64],
    config: &EllipseConfig,
) -> Result<Vec<ScanSample>>
where
    F: ScalarField + ?Sized,
    T: ScanTrajectory + ?Sized,
{
    log::trace!("evaluating scan trajectory at {} times", times.len());

    #[cfg(feature = "parallel")]
    let times = times.par_iter();
    #[cfg(not(feature = "parallel"))]
    let times = times.iter();

    times
        .map(|&t| evaluate_at(field, trajectory, t, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RadialFalloffConfig, ScanConfig};
    use crate::fields::{GaussianMixture, RadialFalloff};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test_log::test]
    fn circle_around_radial_center_has_constant_value() {
        let field = RadialFalloff::new(RadialFalloffConfig::default()).unwrap();
        let arc = CircularArc::new(ScanConfig::default()).unwrap();
        let times: Vec<f64> = (0..16).map(|i| i as f64 * 0.37).collect();
        let samples = evaluate_trajectory(&field, &arc, &times, &EllipseConfig::default()).unwrap();
        assert_eq!(samples.len(), times.len());
        for s in &samples {
            assert!((s.value - 0.2).abs() < 1e-12);
            assert_eq!(s.ellipse.position, s.position);
        }
    }

    #[test]
    fn preserves_requested_order_and_arbitrary_times() {
        let field = GaussianMixture::default();
        let arc = CircularArc::new(ScanConfig::default()).unwrap();
        let times = [3.3, -1.0, 0.0, 1e3, 0.5];
        let samples = evaluate_trajectory(&field, &arc, &times, &EllipseConfig::default()).unwrap();
        for (s, &t) in samples.iter().zip(&times) {
            assert_eq!(s.time, t);
            assert_eq!(s.position, arc.position_at(t));
            assert_eq!(s.value, field.value_at(s.position.0, s.position.1));
        }
    }

    struct CountingField {
        inner: RadialFalloff,
        calls: AtomicUsize,
    }

    impl ScalarField for CountingField {
        fn value_at(&self, x: f64, y: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.value_at(x, y)
        }

        fn center(&self) -> Option<(f64, f64)> {
            self.inner.center()
        }
    }

    #[test]
    fn field_evaluated_once_per_sample() {
        let field = CountingField {
            inner: RadialFalloff::new(RadialFalloffConfig::default()).unwrap(),
            calls: AtomicUsize::new(0),
        };
        let arc = CircularArc::new(ScanConfig::default()).unwrap();
        let cfg = EllipseConfig::default();
        let times = [0.0, 1.5, 4.0, -2.25];
        let samples = evaluate_trajectory(&field, &arc, &times, &cfg).unwrap();
        assert_eq!(field.calls.load(Ordering::Relaxed), times.len());

        for s in samples {
            let expected = AnisotropyEllipse::from_value(s.value, s.position, field.center(), &cfg).unwrap();
            assert_eq!(s.ellipse, expected);
            assert_eq!(s.ellipse, AnisotropyEllipse::at(&field.inner, s.position, &cfg).unwrap());
        }
    }

    #[test]
    fn no_times_no_samples() {
        let arc = CircularArc::new(ScanConfig::default()).unwrap();
        let samples = evaluate_trajectory(&GaussianMixture::default(), &arc, &[], &EllipseConfig::default()).unwrap();
        assert!(samples.is_empty());
    }
}
