/// クエリ文字列ビルダー
///
/// `key` を先頭に、必須パラメータ・任意パラメータを追加順に保持する。
/// 任意パラメータは値が「偽」（None、空文字列、0、false）なら送らない。
use crate::api::auth::ApiKey;
use chrono::NaiveDate;
use url::Url;

/// クエリパラメータとして送れる値
pub(crate) trait QueryValue {
    /// 送る値。`None` は「指定なし」として扱われ、パラメータ自体が省略される。
    fn to_query_value(&self) -> Option<String>;
}

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl QueryValue for u32 {
    fn to_query_value(&self) -> Option<String> {
        (*self != 0).then(|| self.to_string())
    }
}

impl QueryValue for u64 {
    fn to_query_value(&self) -> Option<String> {
        (*self != 0).then(|| self.to_string())
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        self.then(|| flag_value(true).to_string())
    }
}

impl QueryValue for NaiveDate {
    fn to_query_value(&self) -> Option<String> {
        Some(self.format("%Y-%m-%d").to_string())
    }
}

/// 整数を期待するフラグの表現
pub(crate) fn flag_value(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[derive(Debug, Clone)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new(api_key: &ApiKey) -> Self {
        Self {
            pairs: vec![("key", api_key.expose().to_string())],
        }
    }

    /// 必須パラメータ。値はそのまま送る（ローカルでは検証しない）。
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// 任意パラメータ
    pub fn optional<V>(mut self, name: &'static str, value: Option<&V>) -> Self
    where
        V: QueryValue + ?Sized,
    {
        if let Some(value) = value.and_then(QueryValue::to_query_value) {
            self.pairs.push((name, value));
        }
        self
    }

    /// URL にクエリを付与する（既存のクエリは残す）
    pub fn apply_to(&self, url: &mut Url) {
        url.query_pairs_mut()
            .extend_pairs(self.pairs.iter().map(|(name, value)| (*name, value.as_str())));
    }
}
