use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while relaying a conversion
///
/// Full detail is logged server-side; API consumers only ever see the fixed
/// localized text from [`RelayError::client_message`].
#[derive(Debug, Error)]
pub enum RelayError {
    /// The chat backend was never constructed (missing credential at startup)
    #[error("chat backend unavailable: no API key was configured at startup")]
    BackendUnavailable,

    /// Request is missing `text` or `target`
    #[error("missing required field: text and target must be non-empty")]
    MissingFields,

    /// `target` does not name a known audience
    #[error("unsupported target: {target}")]
    UnsupportedTarget {
        /// The caller's value, original casing preserved
        target: String,
    },

    /// Upstream provider returned an error
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::UnsupportedTarget { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::BackendUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::BackendUnavailable => {
                "Groq 클라이언트가 초기화되지 않았습니다. API 키를 확인하세요.".to_owned()
            }
            Self::MissingFields => "텍스트와 변환 대상은 필수입니다.".to_owned(),
            Self::UnsupportedTarget { target } => {
                format!("지원하지 않는 대상입니다: {target}")
            }
            Self::Upstream(_) => {
                "AI 모델을 호출하는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_owned()
            }
            Self::Internal(_) => "서버에서 예기치 않은 오류가 발생했습니다.".to_owned(),
        }
    }
}
