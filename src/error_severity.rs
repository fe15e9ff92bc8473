//! エラー深刻度と終了コード
//!
//! ライブラリ側の各エラー型（api, domain, config）が自分の深刻度をこの型で返し、
//! バイナリ側はそれを終了コードに変換する。
//!
//! このモジュールは他のモジュールに依存しない。

use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// アップロード対象のパスが存在しない、ディレクトリを指定した等。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// API キーが未設定・無効、設定ファイルが壊れている等。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// ネットワーク障害、想定外のレスポンス等、ユーザーが直せない外部要因。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UserError => "user error",
            Self::ConfigError => "configuration error",
            Self::SystemError => "system error",
        };
        f.write_str(label)
    }
}
