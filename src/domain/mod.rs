/// ドメイン層
///
/// ローカルアップロード前のファイル検証と、その失敗を表すエラー型。
/// ネットワークには一切触れない。
pub mod error;
pub mod validator;
