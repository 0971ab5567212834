/// ドメイン層
///
/// - `payload`: アップロード入力の分類と正規化
/// - `formatter`: レスポンスに含まれる時刻の表示用フォーマット
/// - `error`: ローカルI/Oエラー
pub mod error;
pub mod formatter;
pub mod payload;
