/// エンドポイントごとの任意パラメータ
///
/// すべてのフィールドは任意で、`None`（または空文字列・0・false）の場合は
/// クエリに含めない。省略時の挙動はリモート側のデフォルトに従う。
use chrono::NaiveDate;
use serde::Deserialize;

/// `account/stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccountReportsOptions {
    /// 直近何日分のレポートを取得するか（`last`、リモート既定は7日）
    pub last: Option<u32>,
    /// 集計開始日（`from_date`）
    pub from_date: Option<NaiveDate>,
    /// 集計終了日（`to_date`）
    pub to_date: Option<NaiveDate>,
}

/// `dmca/list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DmcaListOptions {
    /// 1ページあたりの件数（`per_page`、リモート既定は500）
    pub per_page: Option<u32>,
    /// ページ番号（`page`）
    pub page: Option<u32>,
}

/// `file/clone`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CloneOptions {
    /// コピー先フォルダID（`fld_id`）
    pub folder_id: Option<String>,
}

/// `upload/url`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteAddOptions {
    /// 保存先フォルダID（`fld_id`）
    pub folder_id: Option<String>,
    /// アップロード後のタイトル（`new_title`）
    pub new_title: Option<String>,
}

/// `upload/actions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteActionsOptions {
    /// エラーになった転送をすべて削除（`clear_errors=1`）
    pub clear_errors: Option<bool>,
    /// すべての転送を削除（`clear_all=1`）
    pub clear_all: Option<bool>,
    /// 指定したファイルコードの転送を削除（`delete_code`）
    pub delete_code: Option<String>,
}

/// `folder/create`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateFolderOptions {
    /// 親フォルダID（`parent_id`）
    pub parent_id: Option<String>,
}

/// `folder/list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListFolderOptions {
    /// フォルダのみを返す（`only_folders=1`）
    pub only_folders: Option<bool>,
}

/// `file/list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListFilesOptions {
    /// ページ番号（`page`）
    pub page: Option<u32>,
    /// 1ページあたりの件数（`per_page`、最大200）
    pub per_page: Option<u32>,
    /// 対象フォルダID（`fld_id`）
    pub folder_id: Option<String>,
    /// 指定時刻以降、または直近X分以内にアップロードされたファイルのみ（`created`）
    pub created: Option<String>,
}
