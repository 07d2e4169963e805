//! latent_geometry: 잠재 공간 리만 기하 시각화를 위한 수치 코어
//!
//! 이 라이브러리는 애니메이션 장면이 그리는 두 가지 작은 모델을 제공합니다.
//!
//! - 곡면 임베딩과 두 보간 경로(주변 공간 직선, 곡면 제약 경로)의 대비
//! - 가우시안 혼합/방사형 감쇠 스칼라 필드와 그로부터 유도한 이방성 타원
//!
//! 모든 연산은 명시적 입력만의 순수 함수이며 공유 가변 상태가 없습니다.
//! 곡면 제약 경로는 측지선 방정식을 풀지 않는 근사이고, 타원은 `Jᵀ J`
//! 계량 텐서를 계산하지 않는 시각적 대용물입니다.

pub mod config;
pub mod fields;
pub mod interpolation;
pub mod manifolds;
pub mod maps;
pub mod scan;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use config::{
    EllipseConfig, GaussianBump, GaussianMixtureConfig, GridSpec, HeatmapConfig, RadialFalloffConfig,
    ScanConfig, SurfaceConfig,
};
pub use fields::{
    create_field, ellipse_for, gaussian_mixture_field, orientation_for, radial_falloff_field,
    AnisotropyEllipse, DensityHeatmap, FieldType, GaussianMixture, RadialFalloff, ScalarField,
};
pub use interpolation::{
    deviation_profile, max_deviation, sample, ConstrainedPath, InterpolationPath, LinearPath,
};
pub use manifolds::{
    create_surface, tessellate, EmbeddedPoint, FlatSurface, ParametricPoint, Surface, SurfaceType,
    WavySurface,
};
pub use maps::{constrained_path, embed, evaluate_trajectory, linear_path};
pub use scan::{CircularArc, ScanSample, ScanTrajectory};

/// latent_geometry 오류 유형
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// 자주 사용되는 핵심 기능들을 쉽게 가져올 수 있는 prelude 모듈
pub mod prelude {
    pub use crate::{
        constrained_path, create_field, create_surface, ellipse_for, embed, evaluate_trajectory,
        gaussian_mixture_field, linear_path, orientation_for, radial_falloff_field, sample,
        AnisotropyEllipse, CircularArc, EmbeddedPoint, InterpolationPath, ParametricPoint,
        ScalarField, ScanTrajectory, Surface, WavySurface,
    };
}
