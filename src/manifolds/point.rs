//! 파라미터 공간 점과 임베딩된 3차원 점

use std::ops::{Add, Mul, Sub};

use crate::utils::numeric::lerp;

/// 2차원 파라미터 정의역의 점 (u, v)
///
/// 정의역 소속은 검사하지 않는다. 범위 밖 값도 그대로 평가된다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParametricPoint {
    pub u: f64,
    pub v: f64,
}

impl ParametricPoint {
    pub fn new(u: f64, v: f64) -> Self {
        ParametricPoint { u, v }
    }

    /// 파라미터 공간에서의 선형 보간
    pub fn lerp(self, other: ParametricPoint, t: f64) -> ParametricPoint {
        ParametricPoint::new(lerp(self.u, other.u, t), lerp(self.v, other.v, t))
    }
}

impl From<(f64, f64)> for ParametricPoint {
    fn from((u, v): (f64, f64)) -> Self {
        ParametricPoint::new(u, v)
    }
}

/// 주변 공간 R³의 점
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmbeddedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EmbeddedPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        EmbeddedPoint { x, y, z }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: &EmbeddedPoint) -> f64 {
        (*self - *other).norm()
    }

    /// 주변 공간 직선 보간 `(1 - t)·self + t·other`
    pub fn lerp(self, other: EmbeddedPoint, t: f64) -> EmbeddedPoint {
        EmbeddedPoint::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            lerp(self.z, other.z, t),
        )
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for EmbeddedPoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        EmbeddedPoint::new(x, y, z)
    }
}

impl Add for EmbeddedPoint {
    type Output = EmbeddedPoint;

    fn add(self, rhs: EmbeddedPoint) -> EmbeddedPoint {
        EmbeddedPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for EmbeddedPoint {
    type Output = EmbeddedPoint;

    fn sub(self, rhs: EmbeddedPoint) -> EmbeddedPoint {
        EmbeddedPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for EmbeddedPoint {
    type Output = EmbeddedPoint;

    fn mul(self, s: f64) -> EmbeddedPoint {
        EmbeddedPoint::new(self.x * s, self.y * s, self.z * s)
    }
}
