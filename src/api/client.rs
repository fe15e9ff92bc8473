/// Doodstream APIクライアント
///
/// 1エンドポイント = 1メソッド。各メソッドはクエリを組み立てて
/// `Transport` に委譲し、返ってきたボディをそのまま返す。
/// 保持する状態（ベースURL、APIキー、HTTPハンドル）は生成後に変更されないため、
/// 同じクライアントを複数タスクから同時に使ってよい。
use crate::api::auth::ApiKey;
use crate::api::error::{ApiError, ApiResult};
use crate::api::options::{
    AccountReportsOptions, CloneOptions, CreateFolderOptions, DmcaListOptions, ListFilesOptions,
    ListFolderOptions, RemoteActionsOptions, RemoteAddOptions,
};
use crate::api::query::{Query, flag_value};
use crate::api::transport::Transport;
use crate::domain::validator::{self, UploadFile};
use reqwest::Body;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;
use tokio_util::codec::{BytesCodec, FramedRead};
use url::Url;

/// 本番環境のベースURL
pub const DEFAULT_BASE_URL: &str = "https://doodapi.com/api";

const UPLOAD_SERVER_PATH: &str = "upload/server";

#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
    base_url: String,
    api_key: ApiKey,
}

impl Client {
    /// 本番環境向けのクライアントを作成
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// ベースURLを指定してクライアントを作成
    pub fn with_base_url(api_key: impl Into<ApiKey>, base_url: impl Into<String>) -> Self {
        Self::with_http_client(api_key, base_url, reqwest::Client::new())
    }

    /// 設定済みの `reqwest::Client` を使ってクライアントを作成
    ///
    /// タイムアウトやプロキシが必要な場合は呼び出し側で設定した `reqwest::Client` を渡す。
    pub fn with_http_client(
        api_key: impl Into<ApiKey>,
        base_url: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            transport: Transport::new(http),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// アカウント情報を取得
    pub async fn account_info(&self) -> ApiResult<Value> {
        self.get("account/info", self.query()).await
    }

    /// アカウントのレポートを取得（リモート既定は直近7日）
    pub async fn account_reports(&self, options: &AccountReportsOptions) -> ApiResult<Value> {
        let query = self
            .query()
            .optional("last", options.last.as_ref())
            .optional("from_date", options.from_date.as_ref())
            .optional("to_date", options.to_date.as_ref());

        self.get("account/stats", query).await
    }

    /// DMCA 報告されたファイルの一覧を取得
    pub async fn dmca_list(&self, options: &DmcaListOptions) -> ApiResult<Value> {
        let query = self
            .query()
            .optional("per_page", options.per_page.as_ref())
            .optional("page", options.page.as_ref());

        self.get("dmca/list", query).await
    }

    /// ローカルファイルのアップロード先サーバーを取得
    pub async fn upload_url(&self) -> ApiResult<Value> {
        self.get(UPLOAD_SERVER_PATH, self.query()).await
    }

    /// ローカルファイルをアップロード
    ///
    /// 1. パスの存在と通常ファイルであることを確認（失敗時は通信しない）
    /// 2. `upload/server` でアップロード先URLを取得
    /// 3. そのURLへ multipart でファイルを送信
    ///
    /// 2と3はトランザクションではない。3が失敗しても2の取り消しは行わない。
    ///
    /// # Errors
    /// - パスが存在しない: `ErrorKind::NotFound`
    /// - 通常ファイルではない: `ErrorKind::UnsupportedMediaType`
    /// - `upload/server` のレスポンスに `result` がない: `ApiError::InvalidResponse`
    pub async fn local_upload(&self, file_path: impl AsRef<Path>) -> ApiResult<Value> {
        let upload = validator::validate_upload_file(file_path.as_ref())?;

        let server = self.upload_url().await?;
        let mut target = self.upload_target(&server)?;
        self.query().apply_to(&mut target);

        let form = self.upload_form(upload).await?;

        self.transport
            .post(target, Some(form), HeaderMap::new())
            .await
    }

    /// 自分または他ユーザーのファイルを複製
    pub async fn clone_video(&self, file_code: &str, options: &CloneOptions) -> ApiResult<Value> {
        let query = self
            .query()
            .param("file_code", file_code)
            .optional("fld_id", options.folder_id.as_deref());

        self.get("file/clone", query).await
    }

    /// 直リンクからのリモートアップロードを登録
    pub async fn remote_add(&self, url: &str, options: &RemoteAddOptions) -> ApiResult<Value> {
        let query = self
            .query()
            .param("url", url)
            .optional("fld_id", options.folder_id.as_deref())
            .optional("new_title", options.new_title.as_deref());

        self.get("upload/url", query).await
    }

    /// リモートアップロードの一覧と状態
    pub async fn remote_list(&self) -> ApiResult<Value> {
        self.get("urlupload/list", self.query()).await
    }

    /// リモートアップロードの状態
    pub async fn remote_status(&self, file_code: &str) -> ApiResult<Value> {
        let query = self.query().param("file_code", file_code);
        self.get("urlupload/status", query).await
    }

    /// リモートアップロードのスロット（総数・使用数）
    pub async fn remote_slots(&self) -> ApiResult<Value> {
        self.get("urlupload/slots", self.query()).await
    }

    /// リモートアップロードに対する操作
    ///
    /// `restart_errors` は必須で、`1` / `0` として送る。
    pub async fn remote_actions(
        &self,
        restart_errors: bool,
        options: &RemoteActionsOptions,
    ) -> ApiResult<Value> {
        let query = self
            .query()
            .param("restart_errors", flag_value(restart_errors))
            .optional("clear_errors", options.clear_errors.as_ref())
            .optional("clear_all", options.clear_all.as_ref())
            .optional("delete_code", options.delete_code.as_deref());

        self.get("upload/actions", query).await
    }

    /// フォルダを作成
    pub async fn create_folder(
        &self,
        name: &str,
        options: &CreateFolderOptions,
    ) -> ApiResult<Value> {
        let query = self
            .query()
            .param("name", name)
            .optional("parent_id", options.parent_id.as_deref());

        self.get("folder/create", query).await
    }

    /// フォルダ名を変更
    pub async fn rename_folder(&self, folder_id: &str, name: &str) -> ApiResult<Value> {
        let query = self.query().param("fld_id", folder_id).param("name", name);
        self.get("folder/rename", query).await
    }

    /// フォルダ内のフォルダ・ファイル一覧
    pub async fn list_folder(
        &self,
        folder_id: &str,
        options: &ListFolderOptions,
    ) -> ApiResult<Value> {
        let query = self
            .query()
            .param("fld_id", folder_id)
            .optional("only_folders", options.only_folders.as_ref());

        self.get("folder/list", query).await
    }

    /// ファイル一覧
    pub async fn list_files(&self, options: &ListFilesOptions) -> ApiResult<Value> {
        let query = self
            .query()
            .optional("page", options.page.as_ref())
            .optional("per_page", options.per_page.as_ref())
            .optional("fld_id", options.folder_id.as_deref())
            .optional("created", options.created.as_deref());

        self.get("file/list", query).await
    }

    /// ファイルの状態
    pub async fn file_status(&self, file_code: &str) -> ApiResult<Value> {
        let query = self.query().param("file_code", file_code);
        self.get("file/check", query).await
    }

    /// ファイルの詳細
    pub async fn file_info(&self, file_code: &str) -> ApiResult<Value> {
        let query = self.query().param("file_code", file_code);
        self.get("file/info", query).await
    }

    /// スプラッシュ・シングル・サムネイル画像
    pub async fn file_image(&self, file_code: &str) -> ApiResult<Value> {
        let query = self.query().param("file_code", file_code);
        self.get("file/image", query).await
    }

    /// ファイル名を変更
    pub async fn rename_file(&self, file_code: &str, title: &str) -> ApiResult<Value> {
        let query = self.query().param("file_code", file_code).param("title", title);
        self.get("file/rename", query).await
    }

    /// ファイルを別フォルダへ移動（`folder_id` に "0" を渡すとルート）
    pub async fn move_file(&self, file_code: &str, folder_id: &str) -> ApiResult<Value> {
        let query = self
            .query()
            .param("file_code", file_code)
            .param("fld_id", folder_id);

        self.get("file/move", query).await
    }

    /// 動画を検索
    pub async fn search_file(&self, search_term: &str) -> ApiResult<Value> {
        let query = self.query().param("search_term", search_term);
        self.get("search/videos", query).await
    }

    fn query(&self) -> Query {
        Query::new(&self.api_key)
    }

    async fn get(&self, endpoint: &str, query: Query) -> ApiResult<Value> {
        let url = self.endpoint_url(endpoint, &query)?;
        self.transport.get(url).await
    }

    /// `<base_url>/<endpoint>?<query>` を組み立てる
    fn endpoint_url(&self, endpoint: &str, query: &Query) -> ApiResult<Url> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        let mut url = Url::parse(&raw).map_err(|source| ApiError::InvalidUrl { url: raw, source })?;
        query.apply_to(&mut url);
        Ok(url)
    }

    /// `upload/server` のレスポンスからアップロード先URLを取り出す
    fn upload_target(&self, server: &Value) -> ApiResult<Url> {
        let raw = server
            .get("result")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::InvalidResponse {
                endpoint: UPLOAD_SERVER_PATH.to_string(),
                message: "response has no upload URL in `result`".to_string(),
            })?;

        Url::parse(raw).map_err(|source| ApiError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }

    /// `api_key` フィールドと、ディスクから逐次読み込む `file` パートからなるフォーム
    async fn upload_form(&self, upload: UploadFile) -> ApiResult<Form> {
        let file = tokio::fs::File::open(&upload.path).await.map_err(|e| {
            ApiError::io(format!("failed to open {}", upload.path.display()), e)
        })?;

        let body = Body::wrap_stream(FramedRead::new(file, BytesCodec::new()));
        let part = Part::stream_with_length(body, upload.size).file_name(upload.file_name);

        Ok(Form::new()
            .text("api_key", self.api_key.expose().to_string())
            .part("file", part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorKind;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "test_key";

    fn ok_body() -> Value {
        json!({ "msg": "OK", "status": 200, "server_time": "2024-01-01 00:00:00", "result": {} })
    }

    async fn mock_ok(server: &MockServer, endpoint: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(server)
            .await;
    }

    /// 誰も待ち受けていないローカルアドレス
    fn closed_address() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    /// エラーとその原因チェーンをすべて文字列にする
    fn render_chain(err: &ApiError) -> String {
        let mut rendered = format!("{} | {:?}", err, err);
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            rendered.push_str(" | ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        rendered
    }

    /// 受信した唯一のリクエストのクエリ文字列
    async fn received_query(server: &MockServer) -> String {
        let requests = server.received_requests().await.expect("recording is enabled");
        assert_eq!(requests.len(), 1);
        requests[0].url.query().unwrap_or_default().to_string()
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let client = Client::new(KEY);
        let query = client.query().param("file_code", "abc123");
        let url = client.endpoint_url("file/info", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://doodapi.com/api/file/info?key=test_key&file_code=abc123"
        );
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash() {
        let client = Client::with_base_url(KEY, "https://doodapi.com/api/");
        let url = client.endpoint_url("account/info", &client.query()).unwrap();
        assert_eq!(url.as_str(), "https://doodapi.com/api/account/info?key=test_key");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = Client::with_base_url(KEY, "not a url");
        let err = client.endpoint_url("account/info", &client.query()).unwrap_err();
        assert_eq!(err.code(), "INVALID_URL");
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Client>();
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(3)
            .mount(&server)
            .await;

        let client = Client::with_base_url(KEY, server.uri());
        let (a, b, c) = tokio::join!(
            client.file_info("a"),
            client.file_info("b"),
            client.file_info("c"),
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
    }

    #[tokio::test]
    async fn test_account_info() {
        let server = MockServer::start().await;
        mock_ok(&server, "/account/info").await;

        let client = Client::with_base_url(KEY, server.uri());
        let body = client.account_info().await.unwrap();
        assert_eq!(body, ok_body());
        assert_eq!(received_query(&server).await, "key=test_key");
    }

    #[tokio::test]
    async fn test_dmca_list_pagination() {
        let server = MockServer::start().await;
        mock_ok(&server, "/dmca/list").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .dmca_list(&DmcaListOptions {
                per_page: Some(50),
                page: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(received_query(&server).await, "key=test_key&per_page=50&page=2");
    }

    #[tokio::test]
    async fn test_list_files_omits_absent_options() {
        let server = MockServer::start().await;
        mock_ok(&server, "/file/list").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .list_files(&ListFilesOptions {
                per_page: Some(50),
                page: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        let query = received_query(&server).await;
        assert_eq!(query, "key=test_key&page=2&per_page=50");
        assert!(!query.contains("fld_id"));
        assert!(!query.contains("created"));
    }

    #[tokio::test]
    async fn test_account_reports_dates() {
        let server = MockServer::start().await;
        mock_ok(&server, "/account/stats").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .account_reports(&AccountReportsOptions {
                last: None,
                from_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                to_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            })
            .await
            .unwrap();

        assert_eq!(
            received_query(&server).await,
            "key=test_key&from_date=2024-01-01&to_date=2024-01-31"
        );
    }

    #[tokio::test]
    async fn test_list_folder_only_folders_flag() {
        let server = MockServer::start().await;
        mock_ok(&server, "/folder/list").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .list_folder(
                "0",
                &ListFolderOptions {
                    only_folders: Some(true),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            received_query(&server).await,
            "key=test_key&fld_id=0&only_folders=1"
        );
    }

    #[tokio::test]
    async fn test_false_flag_is_omitted() {
        let server = MockServer::start().await;
        mock_ok(&server, "/folder/list").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .list_folder(
                "12",
                &ListFolderOptions {
                    only_folders: Some(false),
                },
            )
            .await
            .unwrap();

        assert_eq!(received_query(&server).await, "key=test_key&fld_id=12");
    }

    #[tokio::test]
    async fn test_remote_actions() {
        let server = MockServer::start().await;
        mock_ok(&server, "/upload/actions").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .remote_actions(
                false,
                &RemoteActionsOptions {
                    clear_errors: Some(true),
                    clear_all: Some(false),
                    delete_code: Some("xyz".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            received_query(&server).await,
            "key=test_key&restart_errors=0&clear_errors=1&delete_code=xyz"
        );
    }

    #[tokio::test]
    async fn test_remote_add_encodes_url() {
        let server = MockServer::start().await;
        mock_ok(&server, "/upload/url").await;

        let client = Client::with_base_url(KEY, server.uri());
        client
            .remote_add(
                "https://example.com/a b.mp4",
                &RemoteAddOptions {
                    folder_id: None,
                    new_title: Some("My Video".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            received_query(&server).await,
            "key=test_key&url=https%3A%2F%2Fexample.com%2Fa+b.mp4&new_title=My+Video"
        );
    }

    #[tokio::test]
    async fn test_file_operations_hit_expected_paths() {
        let server = MockServer::start().await;
        for endpoint in [
            "/file/check",
            "/file/info",
            "/file/image",
            "/file/rename",
            "/file/move",
            "/file/clone",
            "/urlupload/status",
        ] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .and(query_param("file_code", "abc"))
                .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = Client::with_base_url(KEY, server.uri());
        client.file_status("abc").await.unwrap();
        client.file_info("abc").await.unwrap();
        client.file_image("abc").await.unwrap();
        client.rename_file("abc", "new title").await.unwrap();
        client.move_file("abc", "0").await.unwrap();
        client.clone_video("abc", &CloneOptions::default()).await.unwrap();
        client.remote_status("abc").await.unwrap();
    }

    #[tokio::test]
    async fn test_folder_and_listing_operations() {
        let server = MockServer::start().await;
        for endpoint in [
            "/folder/create",
            "/folder/rename",
            "/urlupload/list",
            "/urlupload/slots",
            "/search/videos",
        ] {
            mock_ok(&server, endpoint).await;
        }

        let client = Client::with_base_url(KEY, server.uri());
        client
            .create_folder(
                "clips",
                &CreateFolderOptions {
                    parent_id: Some("7".to_string()),
                },
            )
            .await
            .unwrap();
        client.rename_folder("7", "renamed").await.unwrap();
        client.remote_list().await.unwrap();
        client.remote_slots().await.unwrap();
        client.search_file("cats").await.unwrap();
    }

    #[tokio::test]
    async fn test_unclassified_error_is_returned_as_data() {
        let server = MockServer::start().await;
        let body = json!({ "msg": "Wrong file_code", "status": 400 });
        Mock::given(method("GET"))
            .and(path("/file/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = Client::with_base_url(KEY, server.uri());
        assert_eq!(client.file_info("nope").await.unwrap(), body);
    }

    #[tokio::test]
    async fn test_invalid_key_is_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "msg": "Invalid key" })))
            .mount(&server)
            .await;

        let client = Client::with_base_url("wrong", server.uri());
        let err = client.account_info().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.code(), "INVALID_API_KEY");
    }

    #[tokio::test]
    async fn test_local_upload_missing_file_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(0)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let client = Client::with_base_url(KEY, server.uri());

        let err = client
            .local_upload(temp_dir.path().join("missing.mp4"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_local_upload_directory_skips_upload_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/upload/server"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(0)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let client = Client::with_base_url(KEY, server.uri());

        let err = client.local_upload(temp_dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedMediaType);
        assert_eq!(err.code(), "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_local_upload_posts_file_to_upload_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/upload/server"))
            .and(query_param("key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "msg": "OK",
                "status": 200,
                "result": format!("{}/upload/01", server.uri()),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uploaded = json!({
            "msg": "OK",
            "status": 200,
            "result": [{ "filecode": "abc123", "title": "clip" }]
        });
        Mock::given(method("POST"))
            .and(path("/upload/01"))
            .and(query_param("key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(uploaded.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("clip.mp4");
        fs::write(&file, b"fake video bytes").expect("Failed to write test file");

        let client = Client::with_base_url(KEY, server.uri());
        let body = client.local_upload(&file).await.unwrap();
        assert_eq!(body, uploaded);

        let requests = server.received_requests().await.expect("recording is enabled");
        let post = requests
            .iter()
            .find(|r| r.url.path() == "/upload/01")
            .expect("upload request was sent");
        let content_type = post
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));

        let payload = String::from_utf8_lossy(&post.body);
        assert!(payload.contains("name=\"api_key\""));
        assert!(payload.contains(KEY));
        assert!(payload.contains("filename=\"clip.mp4\""));
        assert!(payload.contains("fake video bytes"));
    }

    #[tokio::test]
    async fn test_local_upload_without_upload_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/upload/server"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "msg": "Upload disabled", "status": 403 })),
            )
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("clip.mp4");
        fs::write(&file, b"x").expect("Failed to write test file");

        let client = Client::with_base_url(KEY, server.uri());
        let err = client.local_upload(&file).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_RESPONSE");
    }

    #[tokio::test]
    async fn test_local_upload_propagates_second_step_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/upload/server"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "msg": "OK",
                "status": 200,
                "result": format!("{}/upload/01", server.uri()),
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/upload/01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "msg": "Invalid key" })))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("clip.mp4");
        fs::write(&file, b"x").expect("Failed to write test file");

        let client = Client::with_base_url(KEY, server.uri());
        let err = client.local_upload(&file).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_API_KEY");
    }

    #[tokio::test]
    async fn test_network_error_does_not_expose_key() {
        let client = Client::with_base_url("SECRET_KEY_123", format!("{}/api", closed_address()));

        let err = client.account_info().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);

        let rendered = render_chain(&err);
        assert!(!rendered.contains("SECRET_KEY_123"), "{}", rendered);
        assert!(rendered.contains("/api/account/info"));
    }

    #[tokio::test]
    async fn test_unreachable_upload_target_does_not_expose_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/upload/server"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "msg": "OK",
                "status": 200,
                "result": format!("{}/upload/01", closed_address()),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("clip.mp4");
        fs::write(&file, b"x").expect("Failed to write test file");

        let client = Client::with_base_url("SECRET_KEY_123", server.uri());
        let err = client.local_upload(&file).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);

        let rendered = render_chain(&err);
        assert!(!rendered.contains("SECRET_KEY_123"), "{}", rendered);
    }
}
