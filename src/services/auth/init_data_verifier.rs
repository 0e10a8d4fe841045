//! 텔레그램 `initData` 서명 검증
//!
//! Mini-App이 전달한 `initData`가 텔레그램 플랫폼이 특정 봇을 위해 만든 데이터이며
//! 변조되지 않았음을 확인합니다.
//!
//! # 검증 절차
//!
//! 1. `application/x-www-form-urlencoded` 디코딩
//! 2. `hash`를 제외한 모든 쌍을 키 바이트 순으로 정렬하여 `key=value`를 `\n`으로 연결
//! 3. `secret_key = HMAC-SHA256(key = "WebAppData", msg = bot_token)`
//! 4. `hex(HMAC-SHA256(key = secret_key, msg = check_string))`과 `hash`를 상수 시간 비교
//! 5. `user` 필드를 [`TelegramUser`]로 파싱
//!
//! 입출력이 없는 순수 연산입니다. 봇 토큰에서 유도한 키는 생성 시 한 번만 계산합니다.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

use crate::config::Secret;
use crate::domain::models::telegram::{TelegramUser, VerifiedInitData};
use crate::errors::{AppError, AppResult, ErrorContext};

type HmacSha256 = Hmac<Sha256>;

const WEB_APP_DATA_KEY: &[u8] = b"WebAppData";
const HASH_FIELD: &str = "hash";

/// 디코딩된 `initData`
///
/// `hash`는 분리되어 있고, 나머지 쌍은 키 순서로 정렬되어 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInitData {
    pairs: Vec<(String, String)>,
    hash: String,
}

impl ParsedInitData {
    /// `initData` 문자열을 디코딩합니다.
    ///
    /// `hash`가 여러 번 나오면 첫 번째 값을 서명으로 사용하고 모두 검증 대상에서 제외합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedInput` - `hash` 필드 없음
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut hash = None;
        let mut pairs = Vec::new();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key == HASH_FIELD {
                if hash.is_none() {
                    hash = Some(value.into_owned());
                }
            } else {
                pairs.push((key.into_owned(), value.into_owned()));
            }
        }

        let hash = hash.ok_or(AppError::MalformedInput)?;
        // 안정 정렬: 중복 키는 원래 순서를 유지
        pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        Ok(Self { pairs, hash })
    }

    /// 서명 대상 문자열 (`key=value`를 `\n`으로 연결, 끝 개행 없음)
    pub fn check_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 해당 키의 첫 번째 값
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

/// `initData` 검증기
#[derive(Clone)]
pub struct InitDataVerifier {
    secret_key: Vec<u8>,
    max_age: Option<Duration>,
}

impl InitDataVerifier {
    /// 봇 토큰으로부터 서명 키를 유도하여 검증기를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `bot_token` - BotFather 봇 토큰
    /// * `max_age` - `auth_date` 허용 기간. `None` 이면 검사하지 않음
    pub fn new(bot_token: &Secret, max_age: Option<Duration>) -> AppResult<Self> {
        let mut mac = HmacSha256::new_from_slice(WEB_APP_DATA_KEY)
            .context("initData 서명 키 유도 실패")?;
        mac.update(bot_token.expose().as_bytes());

        Ok(Self {
            secret_key: mac.finalize().into_bytes().to_vec(),
            max_age,
        })
    }

    /// `initData`를 검증하고 사용자 정보를 추출합니다.
    ///
    /// # Arguments
    ///
    /// * `init_data` - 클라이언트가 보낸 원본 `initData` 문자열
    /// * `now` - `auth_date` 만료 판단 기준 시각
    ///
    /// # Errors
    ///
    /// * `AppError::MissingInput` - 빈 문자열
    /// * `AppError::MalformedInput` - `hash` 없음 (HMAC 계산 전에 반환)
    /// * `AppError::SignatureMismatch` - 서명 불일치
    /// * `AppError::InitDataExpired` - `auth_date` 허용 기간 초과 (설정된 경우)
    /// * `AppError::InvalidUserPayload` - `user` 누락 또는 JSON 파싱 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let verifier = InitDataVerifier::new(&config.telegram.bot_token, None)?;
    /// let verified = verifier.verify(init_data, Utc::now())?;
    /// println!("Telegram user: {}", verified.user.id);
    /// ```
    pub fn verify(&self, init_data: &str, now: DateTime<Utc>) -> AppResult<VerifiedInitData> {
        if init_data.is_empty() {
            return Err(AppError::MissingInput);
        }

        let parsed = ParsedInitData::parse(init_data)?;
        self.verify_signature(&parsed.check_string(), parsed.hash())?;

        let auth_date = parsed.get("auth_date").and_then(|v| v.parse::<i64>().ok());
        if let Some(max_age) = self.max_age {
            ensure_fresh(auth_date, now, max_age)?;
        }

        let user_json = parsed
            .get("user")
            .ok_or_else(|| AppError::InvalidUserPayload("user field is missing".to_string()))?;
        let user: TelegramUser = serde_json::from_str(user_json)
            .map_err(|e| AppError::InvalidUserPayload(e.to_string()))?;

        Ok(VerifiedInitData {
            user,
            auth_date,
            query_id: parsed.get("query_id").map(str::to_string),
        })
    }

    /// 서명 대상 문자열의 서명을 소문자 hex로 계산합니다.
    pub fn sign(&self, check_string: &str) -> AppResult<String> {
        let mut mac = self.mac()?;
        mac.update(check_string.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    fn verify_signature(&self, check_string: &str, presented: &str) -> AppResult<()> {
        // 소문자 hex 64자만 허용 (정확 일치 규칙)
        let well_formed = presented.len() == 64
            && presented
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(AppError::SignatureMismatch);
        }

        let expected = hex::decode(presented).map_err(|_| AppError::SignatureMismatch)?;
        let mut mac = self.mac()?;
        mac.update(check_string.as_bytes());
        mac.verify_slice(&expected)
            .map_err(|_| AppError::SignatureMismatch)
    }

    fn mac(&self) -> AppResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret_key).context("HMAC 초기화 실패")
    }
}

fn ensure_fresh(auth_date: Option<i64>, now: DateTime<Utc>, max_age: Duration) -> AppResult<()> {
    let auth_date = auth_date.ok_or(AppError::InitDataExpired)?;
    if now.timestamp().saturating_sub(auth_date) > max_age.num_seconds() {
        return Err(AppError::InitDataExpired);
    }
    Ok(())
}
