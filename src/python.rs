//! 파이썬 바인딩 (pyo3 + numpy)
//!
//! 장면 스크립트가 코어를 직접 호출할 수 있도록 점 시퀀스는 numpy 배열로 돌려준다.

use numpy::{IntoPyArray, PyArray1, PyArray2, PyArray3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{
    AxisRange, EllipseConfig, GaussianBump, GaussianMixtureConfig, GridSpec, HeatmapConfig,
    RadialFalloffConfig, ScanConfig, SurfaceConfig,
};
use crate::fields::{self, DensityHeatmap, FieldType};
use crate::interpolation::{self, ConstrainedPath, LinearPath};
use crate::manifolds::{self, ParametricPoint, Surface, WavySurface};
use crate::scan::{self, CircularArc};
use crate::utils::numeric::points_to_array;
use crate::Error;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn wavy(amplitude: f64, frequency: f64) -> WavySurface {
    WavySurface::new(SurfaceConfig {
        amplitude,
        frequency,
    })
}

fn mixture_config(bumps: Option<Vec<(f64, f64, f64)>>) -> GaussianMixtureConfig {
    match bumps {
        Some(bumps) => GaussianMixtureConfig {
            bumps: bumps.into_iter().map(GaussianBump::from).collect(),
        },
        None => GaussianMixtureConfig::default(),
    }
}

fn field_type(kind: &str, bumps: Option<Vec<(f64, f64, f64)>>, k: f64) -> PyResult<FieldType> {
    match kind {
        "gaussian" => Ok(FieldType::GaussianMixture(mixture_config(bumps))),
        "radial" => Ok(FieldType::RadialFalloff(RadialFalloffConfig {
            k,
            ..RadialFalloffConfig::default()
        })),
        other => Err(PyValueError::new_err(format!("unknown field kind: {other}"))),
    }
}

#[pyfunction]
#[pyo3(name = "embed", signature = (u, v, amplitude = 0.3, frequency = 2.0))]
fn py_embed(u: f64, v: f64, amplitude: f64, frequency: f64) -> (f64, f64, f64) {
    let p = wavy(amplitude, frequency).embed(u, v);
    (p.x, p.y, p.z)
}

#[pyfunction]
#[pyo3(name = "sample_linear_path")]
fn py_sample_linear_path<'py>(
    py: Python<'py>,
    p1: (f64, f64, f64),
    p2: (f64, f64, f64),
    n: usize,
) -> PyResult<&'py PyArray2<f64>> {
    let path = LinearPath::new([p1.0, p1.1, p1.2].into(), [p2.0, p2.1, p2.2].into());
    let points = interpolation::sample(&path, n)?;
    Ok(points_to_array(&points).into_pyarray(py))
}

#[pyfunction]
#[pyo3(
    name = "sample_constrained_path",
    signature = (u1, v1, u2, v2, n, amplitude = 0.3, frequency = 2.0)
)]
#[allow(clippy::too_many_arguments)]
fn py_sample_constrained_path<'py>(
    py: Python<'py>,
    u1: f64,
    v1: f64,
    u2: f64,
    v2: f64,
    n: usize,
    amplitude: f64,
    frequency: f64,
) -> PyResult<&'py PyArray2<f64>> {
    let path = ConstrainedPath::new(
        wavy(amplitude, frequency),
        ParametricPoint::new(u1, v1),
        ParametricPoint::new(u2, v2),
    );
    let points = interpolation::sample(&path, n)?;
    Ok(points_to_array(&points).into_pyarray(py))
}

/// 같은 끝점 쌍에 대한 직선 경로와 곡면 제약 경로의 이탈 거리
#[pyfunction]
#[pyo3(
    name = "deviation_profile",
    signature = (u1, v1, u2, v2, n, amplitude = 0.3, frequency = 2.0)
)]
#[allow(clippy::too_many_arguments)]
fn py_deviation_profile<'py>(
    py: Python<'py>,
    u1: f64,
    v1: f64,
    u2: f64,
    v2: f64,
    n: usize,
    amplitude: f64,
    frequency: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let surface = wavy(amplitude, frequency);
    let (from, to) = (ParametricPoint::new(u1, v1), ParametricPoint::new(u2, v2));
    let linear = LinearPath::new(surface.embed_point(from), surface.embed_point(to));
    let constrained = ConstrainedPath::new(surface, from, to);
    Ok(interpolation::deviation_profile(&linear, &constrained, n)?.into_pyarray(py))
}

#[pyfunction]
#[pyo3(
    name = "tessellate",
    signature = (u_range = (-2.0, 2.0), v_range = (-2.0, 2.0), resolution = (30, 30), amplitude = 0.3, frequency = 2.0)
)]
fn py_tessellate<'py>(
    py: Python<'py>,
    u_range: (f64, f64),
    v_range: (f64, f64),
    resolution: (usize, usize),
    amplitude: f64,
    frequency: f64,
) -> PyResult<&'py PyArray3<f64>> {
    let grid = GridSpec {
        u: AxisRange::new(u_range.0, u_range.1, resolution.0),
        v: AxisRange::new(v_range.0, v_range.1, resolution.1),
    };
    Ok(manifolds::tessellate(&wavy(amplitude, frequency), &grid)?.into_pyarray(py))
}

#[pyfunction]
#[pyo3(name = "gaussian_mixture_field")]
fn py_gaussian_mixture_field(point: (f64, f64), bumps: Vec<(f64, f64, f64)>) -> PyResult<f64> {
    Ok(fields::gaussian_mixture_field(point, &bumps)?)
}

#[pyfunction]
#[pyo3(name = "radial_falloff_field")]
fn py_radial_falloff_field(point: (f64, f64), k: f64) -> PyResult<f64> {
    Ok(fields::radial_falloff_field(point, k)?)
}

#[pyfunction]
#[pyo3(
    name = "ellipse_for",
    signature = (value, base_width = 0.5, base_height = 0.3, min_value_floor = 0.2)
)]
fn py_ellipse_for(
    value: f64,
    base_width: f64,
    base_height: f64,
    min_value_floor: f64,
) -> PyResult<(f64, f64)> {
    Ok(fields::ellipse_for(value, base_width, base_height, min_value_floor)?)
}

#[pyfunction]
#[pyo3(name = "orientation_for")]
fn py_orientation_for(point: (f64, f64)) -> f64 {
    fields::orientation_for(point)
}

/// 기본 격자에서 혼합 밀도 히트맵의 보이는 셀 `(x, y, value, opacity)` 목록
#[pyfunction]
#[pyo3(name = "density_heatmap", signature = (bumps = None))]
fn py_density_heatmap(bumps: Option<Vec<(f64, f64, f64)>>) -> PyResult<Vec<(f64, f64, f64, f64)>> {
    let field = fields::GaussianMixture::new(mixture_config(bumps))?;
    let map = DensityHeatmap::sample(&field, &HeatmapConfig::default())?;
    Ok(map
        .visible_cells()
        .map(|c| (c.x, c.y, c.value, c.opacity))
        .collect())
}

/// 원형 스캔 궤적 평가. 각 항목은 `(x, y, value, width, height, rotation)`.
#[pyfunction]
#[pyo3(
    name = "evaluate_circular_scan",
    signature = (times, field = "radial", radius = 2.0, period = 8.0, k = 1.0, bumps = None)
)]
fn py_evaluate_circular_scan(
    times: Vec<f64>,
    field: &str,
    radius: f64,
    period: f64,
    k: f64,
    bumps: Option<Vec<(f64, f64, f64)>>,
) -> PyResult<Vec<(f64, f64, f64, f64, f64, f64)>> {
    let field = fields::create_field(field_type(field, bumps, k)?)?;
    let arc = CircularArc::new(ScanConfig {
        radius,
        period,
        ..ScanConfig::default()
    })?;
    let samples = scan::evaluate_trajectory(&field, &arc, &times, &EllipseConfig::default())?;
    Ok(samples
        .into_iter()
        .map(|s| {
            (
                s.position.0,
                s.position.1,
                s.value,
                s.ellipse.width,
                s.ellipse.height,
                s.ellipse.rotation,
            )
        })
        .collect())
}

/// 파이썬 모듈 초기화
#[pymodule]
fn latent_geometry(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_embed, m)?)?;
    m.add_function(wrap_pyfunction!(py_sample_linear_path, m)?)?;
    m.add_function(wrap_pyfunction!(py_sample_constrained_path, m)?)?;
    m.add_function(wrap_pyfunction!(py_deviation_profile, m)?)?;
    m.add_function(wrap_pyfunction!(py_tessellate, m)?)?;
    m.add_function(wrap_pyfunction!(py_gaussian_mixture_field, m)?)?;
    m.add_function(wrap_pyfunction!(py_radial_falloff_field, m)?)?;
    m.add_function(wrap_pyfunction!(py_ellipse_for, m)?)?;
    m.add_function(wrap_pyfunction!(py_orientation_for, m)?)?;
    m.add_function(wrap_pyfunction!(py_density_heatmap, m)?)?;
    m.add_function(wrap_pyfunction!(py_evaluate_circular_scan, m)?)?;
    Ok(())
}
