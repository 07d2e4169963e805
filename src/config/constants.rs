//! 수치 안정성을 위한 상수값 정의

/// 기하 연산과 필드 평가에 쓰이는 상수들
pub struct Constants;

impl Constants {
    /// 타원 폭/높이의 하한. 오버플로/언더플로로 0이 되는 것을 막는다.
    pub const MIN_ELLIPSE_EXTENT: f64 = f64::MIN_POSITIVE;

    /// 타원 폭/높이의 상한. 아주 작은 바닥값에서 무한대가 되는 것을 막는다.
    pub const MAX_ELLIPSE_EXTENT: f64 = f64::MAX;

    /// 방사형 감쇠 값의 하한. 아주 먼 거리에서는 이 값에 포화된다.
    pub const MIN_FIELD_VALUE: f64 = f64::MIN_POSITIVE;

    /// 테스트와 비교 연산의 기본 허용 오차
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// 샘플링에 필요한 최소 샘플 수 (양 끝점 포함)
    pub const MIN_SAMPLES: usize = 2;
}
