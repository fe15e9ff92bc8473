/// プレゼンテーション層モジュール
///
/// # モジュール
/// - `input`: APIキーの入力
/// - `output`: コマンド結果・エラーの出力（人間向け・機械向け）
pub mod input;
pub mod output;
