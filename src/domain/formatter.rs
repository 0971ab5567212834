/// ドメインサービス: タイムスタンプフォーマット
///
/// Imgur のレスポンスに含まれる `datetime`（Unix秒）を人間向けの時刻文字列に変換する。
use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::Value;

/// 表示するタイムゾーン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeDisplay {
    Utc,
    Local,
}

/// Unixタイムスタンプをフォーマット
///
/// # 戻り値
/// - UTC: "2024-12-01 14:30:45 UTC"
/// - Local: "2024-12-01 23:30:45 +0900"
///
/// 範囲外のタイムスタンプの場合は数値をそのまま文字列にして返します。
pub fn format_timestamp(timestamp: i64, display: TimeDisplay) -> String {
    let datetime_utc = match Utc.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(dt) => dt,
        _ => return timestamp.to_string(),
    };

    match display {
        TimeDisplay::Utc => format_utc(datetime_utc),
        TimeDisplay::Local => format_local(datetime_utc),
    }
}

/// JSON値（数値または数値文字列）からタイムスタンプをフォーマット
pub fn format_timestamp_value(value: &Value, display: TimeDisplay) -> Option<String> {
    let timestamp = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse::<i64>().ok()?,
        _ => return None,
    };
    Some(format_timestamp(timestamp, display))
}

/// UTC形式でフォーマット
fn format_utc(datetime: DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// ローカルタイムゾーン形式でフォーマット
fn format_local(datetime: DateTime<Utc>) -> String {
    let datetime_local: DateTime<Local> = datetime.with_timezone(&Local);
    datetime_local.format("%Y-%m-%d %H:%M:%S %z").to_string()
}
