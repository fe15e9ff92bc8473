/// HTTPトランスポート
///
/// 完成済みの URL に対して GET / POST を一回だけ送り、
/// ボディを JSON としてデコードしたうえで認証エラーの判定を行う。
/// リトライやタイムアウトの上書きはしない（渡された `reqwest::Client` の設定に従う）。
use crate::api::error::{ApiError, ApiResult, AuthErrorCode};
use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// `key` が渡されていない場合に `msg` に入る文字列
pub const NO_API_KEY_MESSAGE: &str = "No API key passed";

/// `key` が無効な場合に `msg` に入る文字列
pub const INVALID_KEY_MESSAGE: &str = "Invalid key";

/// ステートレスなトランスポート
///
/// 保持するのはコネクションプールを共有する `reqwest::Client` のみ。
#[derive(Debug, Clone, Default)]
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GETリクエストを送信
    pub async fn get(&self, url: Url) -> ApiResult<Value> {
        let endpoint = url.path().to_string();
        debug!(method = "GET", endpoint = %endpoint, "sending request");

        Self::execute(self.http.get(url), endpoint, "GET").await
    }

    /// POSTリクエストを送信
    ///
    /// # Arguments
    /// * `form` - multipart ボディ（Content-Type は boundary 付きで自動設定される）
    /// * `headers` - 追加ヘッダー
    pub async fn post(
        &self,
        url: Url,
        form: Option<Form>,
        headers: HeaderMap,
    ) -> ApiResult<Value> {
        let endpoint = url.path().to_string();
        debug!(method = "POST", endpoint = %endpoint, "sending request");

        let mut request = self.http.post(url).headers(headers);
        if let Some(form) = form {
            request = request.multipart(form);
        }

        Self::execute(request, endpoint, "POST").await
    }

    async fn execute(
        request: RequestBuilder,
        endpoint: String,
        method: &str,
    ) -> ApiResult<Value> {
        let operation = format!("{} {}", method, endpoint);

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_send(e, operation.clone()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_send(e, operation))?;

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|source| ApiError::Decode { endpoint, source })?;

        classify(body)
    }
}

/// デコード済みのボディから認証エラーを検出する
///
/// `msg` フィールドが既知の2文字列と完全一致した場合だけ `Unauthorized` を返す。
/// リモートが文言を変えると検出できなくなり、ボディがそのまま返る点に注意。
/// それ以外のボディ（クォータ超過などのエラーを含む）は変更せずに返す。
pub fn classify(body: Value) -> ApiResult<Value> {
    let code = match body.get("msg").and_then(Value::as_str) {
        Some(NO_API_KEY_MESSAGE) => AuthErrorCode::NoApiKey,
        Some(INVALID_KEY_MESSAGE) => AuthErrorCode::InvalidApiKey,
        _ => return Ok(body),
    };

    warn!(code = %code, "API rejected the credential");
    Err(ApiError::unauthorized(code))
}
