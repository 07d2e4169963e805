//! 물결 곡면 `z = a·sin(b·u)·cos(b·v)` 구현

use super::Surface;
use crate::config::SurfaceConfig;

/// 기준 임베딩 `(u, v) ↦ (u, v, a·sin(b·u)·cos(b·v))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavySurface {
    amplitude: f64,
    frequency: f64,
}

impl WavySurface {
    /// 설정으로부터 곡면 생성
    pub fn new(config: SurfaceConfig) -> Self {
        WavySurface {
            amplitude: config.amplitude,
            frequency: config.frequency,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Default for WavySurface {
    fn default() -> Self {
        WavySurface::new(SurfaceConfig::default())
    }
}

impl Surface for WavySurface {
    fn height(&self, u: f64, v: f64) -> f64 {
        self.amplitude * (self.frequency * u).sin() * (self.frequency * v).cos()
    }
}
