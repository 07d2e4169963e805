//! 원형 스캔 궤적

use super::ScanTrajectory;
use crate::config::ScanConfig;
use crate::{Error, Result};

/// `center + r·(cos(ω·t + φ), sin(ω·t + φ))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    center: (f64, f64),
    radius: f64,
    angular_speed: f64,
    phase: f64,
}

impl CircularArc {
    pub fn new(config: ScanConfig) -> Result<Self> {
        if !(config.radius > 0.0 && config.radius.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "scan radius must be positive and finite, got {}",
                config.radius
            )));
        }
        if !(config.period > 0.0 && config.period.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "scan period must be positive and finite, got {}",
                config.period
            )));
        }
        log::debug!(
            "circular scan r={} period={} around ({}, {})",
            config.radius,
            config.period,
            config.center_x,
            config.center_y
        );
        Ok(CircularArc {
            center: (config.center_x, config.center_y),
            radius: config.radius,
            angular_speed: config.angular_speed(),
            phase: config.phase,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ScanTrajectory for CircularArc {
    fn position_at(&self, time: f64) -> (f64, f64) {
        let angle = self.angular_speed * time + self.phase;
        (
            self.center.0 + self.radius * angle.cos(),
            self.center.1 + self.radius * angle.sin(),
        )
    }
}
