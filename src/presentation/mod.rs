/// プレゼンテーション層モジュール
///
/// コマンド結果とユーザー入力の橋渡しを行います。
///
/// # モジュール
/// - `input`: stdin からの入力処理
/// - `output`: コマンド結果・エラーの出力（人間向け・機械向け）

pub mod input;
pub mod output;
