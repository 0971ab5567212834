/// プレゼンテーション層: ユーザー入力処理
///
/// stdin からパイプで渡されたメディアを読み込みます。
use anyhow::{Context, Result, bail};
use std::io::{self, Read};

/// stdin からバイト列をすべて読み込む
///
/// 例: `cat cat.png | quickimgur image -`
pub fn read_payload_from_stdin() -> Result<Vec<u8>> {
    read_payload(io::stdin().lock())
}

fn read_payload(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("Failed to read media from stdin")?;

    if bytes.is_empty() {
        bail!("No data received on stdin. Pipe a file into the command or pass a path instead of '-'.");
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_payload() {
        let bytes = read_payload(&b"GIF89a"[..]).unwrap();
        assert_eq!(bytes, b"GIF89a");
    }

    #[test]
    fn test_read_payload_empty() {
        assert!(read_payload(&b""[..]).is_err());
    }
}
