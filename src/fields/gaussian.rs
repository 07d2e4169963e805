//! 가우시안 혼합 밀도 `Σ exp(-‖p - c‖² / s)`

use super::ScalarField;
use crate::config::{GaussianBump, GaussianMixtureConfig};
use crate::{Error, Result};

/// 검증된 가우시안 봉우리 목록
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianMixture {
    bumps: Vec<GaussianBump>,
}

impl GaussianMixture {
    /// 모든 spread가 양의 유한값인지 확인한 뒤 생성
    pub fn new(config: GaussianMixtureConfig) -> Result<Self> {
        for (index, bump) in config.bumps.iter().enumerate() {
            check_spread(index, bump.spread)?;
        }
        log::debug!("gaussian mixture with {} bumps", config.bumps.len());
        Ok(GaussianMixture {
            bumps: config.bumps,
        })
    }

    pub fn bumps(&self) -> &[GaussianBump] {
        &self.bumps
    }

    /// 봉우리 중심들. 타원을 찍을 기본 표시점으로 쓴다.
    pub fn centers(&self) -> Vec<(f64, f64)> {
        self.bumps.iter().map(GaussianBump::center).collect()
    }
}

impl Default for GaussianMixture {
    fn default() -> Self {
        GaussianMixture {
            bumps: GaussianMixtureConfig::default().bumps,
        }
    }
}

impl ScalarField for GaussianMixture {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        self.bumps.iter().map(|b| bump_term(b, x, y)).sum()
    }
}

fn check_spread(index: usize, spread: f64) -> Result<()> {
    if !(spread > 0.0 && spread.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "bump {index}: spread must be positive and finite, got {spread}"
        )));
    }
    Ok(())
}

fn bump_term(bump: &GaussianBump, x: f64, y: f64) -> f64 {
    let dx = x - bump.center_x;
    let dy = y - bump.center_y;
    (-(dx * dx + dy * dy) / bump.spread).exp()
}

/// `(center_x, center_y, spread)` 목록으로 한 점의 혼합 밀도를 계산
pub fn gaussian_mixture_field(point: (f64, f64), bumps: &[(f64, f64, f64)]) -> Result<f64> {
    let (x, y) = point;
    let mut total = 0.0;
    for (index, &bump) in bumps.iter().enumerate() {
        let bump = GaussianBump::from(bump);
        check_spread(index, bump.spread)?;
        total += bump_term(&bump, x, y);
    }
    Ok(total)
}
