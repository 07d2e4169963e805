//! 격자 위 필드 값 히트맵

use super::ScalarField;
use crate::config::HeatmapConfig;
use crate::{Error, Result};
use ndarray::{Array1, Array2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 그릴 셀 하나
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapCell {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    /// `min(value, max_opacity)`
    pub opacity: f64,
}

/// 격자에서 평가한 필드 값. `values[[row, col]]`의 row는 y, col은 x 축이다.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityHeatmap {
    xs: Array1<f64>,
    ys: Array1<f64>,
    values: Array2<f64>,
    threshold: f64,
    max_opacity: f64,
}

impl DensityHeatmap {
    pub fn sample<F: ScalarField + ?Sized>(field: &F, config: &HeatmapConfig) -> Result<Self> {
        config.x.validate("heatmap x")?;
        config.y.validate("heatmap y")?;
        if !config.threshold.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "heatmap threshold must be finite, got {}",
                config.threshold
            )));
        }
        if !(config.max_opacity > 0.0 && config.max_opacity <= 1.0) {
            return Err(Error::InvalidArgument(format!(
                "max_opacity must lie in (0, 1], got {}",
                config.max_opacity
            )));
        }

        let xs = Array1::linspace(config.x.start, config.x.end, config.x.count);
        let ys = Array1::linspace(config.y.start, config.y.end, config.y.count);
        log::debug!("sampling heatmap on {}x{} grid", xs.len(), ys.len());

        let values = Array2::from_shape_vec((ys.len(), xs.len()), evaluate_rows(field, &xs, &ys))?;
        Ok(DensityHeatmap {
            xs,
            ys,
            values,
            threshold: config.threshold,
            max_opacity: config.max_opacity,
        })
    }

    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// 임계값을 넘는 셀만, 행 우선 순서로
    pub fn visible_cells(&self) -> impl Iterator<Item = HeatmapCell> + '_ {
        self.values
            .indexed_iter()
            .filter(move |(_, &value)| value > self.threshold)
            .map(move |((row, col), &value)| HeatmapCell {
                x: self.xs[col],
                y: self.ys[row],
                value,
                opacity: value.min(self.max_opacity),
            })
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_rows<F: ScalarField + ?Sized>(field: &F, xs: &Array1<f64>, ys: &Array1<f64>) -> Vec<f64> {
    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| field.value_at(x, y)))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_rows<F: ScalarField + ?Sized>(field: &F, xs: &Array1<f64>, ys: &Array1<f64>) -> Vec<f64> {
    let ys = ys.to_vec();
    let rows: Vec<Vec<f64>> = ys
        .par_iter()
        .map(|&y| xs.iter().map(|&x| field.value_at(x, y)).collect())
        .collect();
    rows.into_iter().flatten().collect()
}
