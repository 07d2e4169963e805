//! 수치 계산 유틸리티 함수들

use crate::manifolds::EmbeddedPoint;
use ndarray::{Array1, Array2, Axis};
use num::Float;

/// 선형 보간 `(1 - t)·a + t·b`
///
/// `a + t·(b - a)` 대신 이 형태를 써서 t = 0, t = 1 에서 끝점을 정확히 재현한다.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// 정확히 원점(±0, ±0)에서만 0을 돌려주는 atan2
pub fn safe_atan2<T: Float>(y: T, x: T) -> T {
    if x == T::zero() && y == T::zero() {
        return T::zero();
    }
    y.atan2(x)
}

/// `[0, 1]`을 양 끝점 포함 n개로 나눈 진행도 파라미터
///
/// `Array1::linspace`는 마지막 값이 1.0에서 1ulp 어긋날 수 있어 i / (n - 1)로 직접 계산한다.
pub fn unit_steps(n: usize) -> Array1<f64> {
    if n < 2 {
        return Array1::zeros(n);
    }
    let last = (n - 1) as f64;
    (0..n).map(|i| i as f64 / last).collect()
}

/// 점 목록을 (n, 3) 배열로 묶기
pub fn points_to_array(points: &[EmbeddedPoint]) -> Array2<f64> {
    let mut out = Array2::zeros((points.len(), 3));
    for (mut row, p) in out.outer_iter_mut().zip(points) {
        row[0] = p.x;
        row[1] = p.y;
        row[2] = p.z;
    }
    out
}

/// L2 노름 계산 (차원 1에 대해)
pub fn l2_norm(x: &Array2<f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| row.dot(&row).sqrt())
}
