/// API キー
///
/// Doodstream はすべてのエンドポイントでクエリパラメータ `key` による認証を行う。
/// キーはクライアント生成時に一度だけ渡され、以降変更されない。
/// Debug 出力ではマスクされるため、ログやパニックメッセージに漏れない。
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// クエリ・フォームに埋め込むための生の値
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// 表示用にマスクしたキー
    ///
    /// 8文字以下なら全体を `*` に置き換え、それより長ければ先頭4文字と末尾4文字だけ残す。
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            "*".repeat(chars.len())
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}***{}", head, tail)
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}
