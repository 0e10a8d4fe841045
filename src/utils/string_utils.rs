//! # 문자열 유틸리티
//!
//! 외부에서 들어온 JSON 값을 문자열로 다루기 위한 유틸리티 함수들입니다.

use serde::Deserialize;
use serde_json::Value;

/// 스칼라 JSON 값을 선택적 문자열로 역직렬화
///
/// 값은 다듬지 않고 그대로 전달하며, 타입만 문자열로 맞춥니다.
///
/// # 반환값
/// * `Ok(Some(String))` - 문자열, 숫자, 불리언 값
/// * `Ok(None)` - null 값
/// * `Err(D::Error)` - 배열이나 객체
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_lenient_string;
///
/// #[derive(Deserialize)]
/// struct User {
///     #[serde(default, deserialize_with = "deserialize_lenient_string")]
///     username: Option<String>,
/// }
///
/// // JSON: {"username": "ada"} → Some("ada")
/// // JSON: {"username": 123}   → Some("123")
/// // JSON: {"username": null}  → None
/// ```
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}
