//! 불변 설정 레코드와 기본값
//!
//! 모든 레코드는 `#[serde(default)]`를 달고 있어 일부 필드만 지정한
//! 설정 파일도 나머지를 기본값으로 채운다.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::{Error, Result};

/// 곡면 임베딩 `(u, v, a·sin(b·u)·cos(b·v))`의 파라미터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// 진폭 a
    pub amplitude: f64,
    /// 주파수 b
    pub frequency: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            amplitude: 0.3,
            frequency: 2.0,
        }
    }
}

/// 등방성 가우시안 밀도 봉우리 하나
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianBump {
    pub center_x: f64,
    pub center_y: f64,
    /// 분산 역할의 폭. 0보다 커야 한다.
    pub spread: f64,
}

impl GaussianBump {
    pub fn new(center_x: f64, center_y: f64, spread: f64) -> Self {
        GaussianBump {
            center_x,
            center_y,
            spread,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }
}

impl From<(f64, f64, f64)> for GaussianBump {
    fn from((center_x, center_y, spread): (f64, f64, f64)) -> Self {
        GaussianBump::new(center_x, center_y, spread)
    }
}

/// 가우시안 혼합 밀도 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianMixtureConfig {
    pub bumps: Vec<GaussianBump>,
}

impl Default for GaussianMixtureConfig {
    fn default() -> Self {
        GaussianMixtureConfig {
            bumps: vec![
                GaussianBump::new(-1.5, -1.0, 0.8),
                GaussianBump::new(1.5, 1.0, 0.8),
                GaussianBump::new(0.0, -1.5, 1.2),
            ],
        }
    }
}

/// 방사형 감쇠 `1 / (1 + k·r²)` 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialFalloffConfig {
    pub k: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for RadialFalloffConfig {
    fn default() -> Self {
        RadialFalloffConfig {
            k: 1.0,
            center_x: 0.0,
            center_y: 0.0,
        }
    }
}

/// 필드 값 → 타원 크기 매핑 설정
///
/// `width = base_width / (value + min_value_floor)`, 높이도 같은 방식.
/// 기본값은 `0.5 / (d + 0.2)` 폭과 폭의 0.6배 높이를 재현한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseConfig {
    pub base_width: f64,
    pub base_height: f64,
    pub min_value_floor: f64,
}

impl Default for EllipseConfig {
    fn default() -> Self {
        EllipseConfig {
            base_width: 0.5,
            base_height: 0.3,
            min_value_floor: 0.2,
        }
    }
}

/// 닫힌 구간 `[start, end]`을 `count`개의 등간격 점으로 나눈 축
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl AxisRange {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        AxisRange { start, end, count }
    }

    /// 유한한 구간과 2개 이상의 점을 요구한다
    pub fn validate(&self, name: &str) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "{name}: range bounds must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        if self.start > self.end {
            return Err(Error::InvalidArgument(format!(
                "{name}: range is inverted, got [{}, {}]",
                self.start, self.end
            )));
        }
        if self.count < 2 {
            return Err(Error::InvalidArgument(format!(
                "{name}: at least 2 grid points required, got {}",
                self.count
            )));
        }
        Ok(())
    }
}

/// 밀도 히트맵 격자 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub x: AxisRange,
    pub y: AxisRange,
    /// 이 값 이하의 셀은 그리지 않는다
    pub threshold: f64,
    /// 셀 불투명도 상한
    pub max_opacity: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        HeatmapConfig {
            x: AxisRange::new(-3.5, 3.5, 20),
            y: AxisRange::new(-2.5, 2.5, 15),
            threshold: 0.1,
            max_opacity: 0.6,
        }
    }
}

/// 곡면 메쉬 파라미터 격자
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub u: AxisRange,
    pub v: AxisRange,
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            u: AxisRange::new(-2.0, 2.0, 30),
            v: AxisRange::new(-2.0, 2.0, 30),
        }
    }
}

/// 원형 스캔 궤적 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// 한 바퀴 도는 데 걸리는 시간
    pub period: f64,
    /// t = 0 에서의 각도 (라디안)
    pub phase: f64,
}

impl ScanConfig {
    /// 각속도 2π / period
    pub fn angular_speed(&self) -> f64 {
        2.0 * PI / self.period
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            center_x: 0.0,
            center_y: 0.0,
            radius: 2.0,
            period: 8.0,
            phase: 0.0,
        }
    }
}
