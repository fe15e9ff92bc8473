/// API層のエラー定義
///
/// クライアントが返す唯一のエラー型。`kind()` で大分類、`code()` で
/// 機械可読なコードを取得できる。
/// リモートが返す認証以外のアプリケーションエラー（クォータ超過等）は
/// ここには含まれず、通常のレスポンスボディとして呼び出し側に返る。
use crate::domain::error::DomainError;
use crate::error_severity::ErrorSeverity;
use std::fmt;
use std::io;
use thiserror::Error;

/// APIクライアントの結果型
pub type ApiResult<T> = Result<T, ApiError>;

/// エラーの大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// API キーが未指定、または無効
    Unauthorized,
    /// アップロード対象のローカルファイルが存在しない
    NotFound,
    /// アップロード対象のパスが通常ファイルではない
    UnsupportedMediaType,
    /// 通信・HTTP・デコードの失敗
    Transport,
    /// ローカルファイルの読み込み失敗
    Io,
}

/// 認証エラーのコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    /// `key` パラメータが渡されていない
    NoApiKey,
    /// `key` パラメータが無効
    InvalidApiKey,
}

impl AuthErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoApiKey => "NO_API_KEY",
            Self::InvalidApiKey => "INVALID_API_KEY",
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Self::NoApiKey => "No API key was provided",
            Self::InvalidApiKey => "Invalid API key",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// リモートが認証失敗を報告した
    #[error("unauthorized ({code}): {message}")]
    Unauthorized { code: AuthErrorCode, message: String },

    /// ローカルアップロードの事前検証エラー
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// ネットワークエラー
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// タイムアウト
    #[error("operation timed out: {operation}")]
    Timeout {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// 2xx 以外のステータス
    #[error("HTTP {status} returned by {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    /// レスポンスボディが JSON として読めない
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// URL が組み立てられない
    #[error("invalid URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// 後続処理に必要なフィールドがレスポンスにない
    #[error("unexpected response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// ローカルファイルの読み込みエラー
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ApiError {
    /// 認証エラーを作成
    pub fn unauthorized(code: AuthErrorCode) -> Self {
        Self::Unauthorized {
            code,
            message: code.default_message().to_string(),
        }
    }

    /// reqwest の送信エラーを分類する
    ///
    /// reqwest のエラーはリクエストURL（`key` クエリを含む）を表示に含めるため、
    /// 保持する前に URL を取り除く。`operation` にはパスのみを渡すこと。
    pub(crate) fn from_send(error: reqwest::Error, operation: String) -> Self {
        let error = error.without_url();
        if error.is_timeout() {
            Self::Timeout {
                operation,
                source: error,
            }
        } else if error.is_connect() {
            Self::Network {
                message: format!("connection failed for {}", operation),
                source: error,
            }
        } else {
            Self::Network {
                message: format!("request failed for {}", operation),
                source: error,
            }
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// エラーの大分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Domain(DomainError::FileNotFound { .. }) => ErrorKind::NotFound,
            Self::Domain(DomainError::NotAFile { .. }) => ErrorKind::UnsupportedMediaType,
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::Decode { .. }
            | Self::InvalidUrl { .. }
            | Self::InvalidResponse { .. } => ErrorKind::Transport,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// 機械可読なエラーコードを返す
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { code, .. } => code.as_str(),
            Self::Domain(e) => e.code(),
            Self::Network { .. } => "TRANSPORT",
            Self::Timeout { .. } => "TIMEOUT",
            Self::HttpStatus { .. } => "HTTP_STATUS",
            Self::Decode { .. } => "DECODE",
            Self::InvalidUrl { .. } => "INVALID_URL",
            Self::InvalidResponse { .. } => "INVALID_RESPONSE",
            Self::Io { .. } => "IO",
        }
    }

    /// 認証エラーかどうか
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unauthorized { .. } => ErrorSeverity::ConfigError,
            Self::Domain(e) => e.severity(),
            _ => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized {
                code: AuthErrorCode::NoApiKey,
                ..
            } => Some("Run 'doodstream login' or set DOODSTREAM_API_KEY."),
            Self::Unauthorized {
                code: AuthErrorCode::InvalidApiKey,
                ..
            } => Some("Your API key was rejected. Run 'doodstream login' with a valid key."),
            Self::Domain(e) => e.hint(),
            Self::Timeout { .. } | Self::Network { .. } => {
                Some("Check your network connection and try again.")
            }
            _ => None,
        }
    }
}
