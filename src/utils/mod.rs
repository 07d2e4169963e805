//! 공용 수치 유틸리티

pub mod numeric;
