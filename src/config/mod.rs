//! 상수와 불변 설정 레코드

pub mod constants;
pub mod defaults;

pub use constants::Constants;
pub use defaults::{
    AxisRange, EllipseConfig, GaussianBump, GaussianMixtureConfig, GridSpec, HeatmapConfig, RadialFalloffConfig,
    ScanConfig, SurfaceConfig,
};
