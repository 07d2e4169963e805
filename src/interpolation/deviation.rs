//! 두 경로 사이의 이탈 거리 측정
//!
//! 같은 진행도 t에서 두 경로 위의 점을 동시에 움직였을 때 둘 사이 거리.

use super::{check_sample_count, sample, InterpolationPath};
use crate::utils::numeric::{l2_norm, points_to_array, unit_steps};
use crate::Result;
use ndarray::Array1;

/// 진행도 t에서 `‖a(t) - b(t)‖`
pub fn deviation_at<A, B>(a: &A, b: &B, t: f64) -> f64
where
    A: InterpolationPath + ?Sized,
    B: InterpolationPath + ?Sized,
{
    a.point_at(t).distance(&b.point_at(t))
}

/// 등간격 n개의 t에서 측정한 이탈 거리
pub fn deviation_profile<A, B>(a: &A, b: &B, n: usize) -> Result<Array1<f64>>
where
    A: InterpolationPath + ?Sized,
    B: InterpolationPath + ?Sized,
{
    let lhs = points_to_array(&sample(a, n)?);
    let rhs = points_to_array(&sample(b, n)?);
    Ok(l2_norm(&(lhs - rhs)))
}

/// 이탈 거리가 가장 큰 샘플의 `(t, 거리)`
///
/// 동률이면 더 앞선 t를 고른다.
pub fn max_deviation<A, B>(a: &A, b: &B, n: usize) -> Result<(f64, f64)>
where
    A: InterpolationPath + ?Sized,
    B: InterpolationPath + ?Sized,
{
    check_sample_count(n)?;
    let profile = deviation_profile(a, b, n)?;
    let ts = unit_steps(n);
    let best = ts
        .iter()
        .zip(profile.iter())
        .fold((0.0, f64::NEG_INFINITY), |best, (&t, &d)| {
            if d > best.1 {
                (t, d)
            } else {
                best
            }
        });
    Ok(best)
}
