/// プレゼンテーション層: ユーザー入力処理
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// 対話的にAPIキーを取得
pub fn read_api_key_interactive() -> Result<String> {
    eprintln!("Logging in to Doodstream...");
    eprintln!();
    eprintln!("Please enter your Doodstream API key.");
    eprintln!("You can find it in your account settings on the Doodstream dashboard.");
    eprintln!();

    eprint!("API key: ");
    io::stderr().flush()?;

    read_api_key(io::stdin().lock())
}

/// stdin からパイプでAPIキーを取得（1行目）
pub fn read_api_key_from_stdin() -> Result<String> {
    read_api_key(io::stdin().lock())
}

fn read_api_key(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read API key from input")?;

    let key = line.trim();
    if key.is_empty() {
        bail!("API key cannot be empty. Please provide a valid API key.");
    }

    Ok(key.to_string())
}
