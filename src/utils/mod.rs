//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 느슨한 문자열 역직렬화 유틸리티

pub mod string_utils;
