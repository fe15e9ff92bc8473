/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読）または
/// 機械向け（JSON）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
use crate::commands::result::{ApiCallResult, CommandResult, StatusResult};
use anyhow::Result;
use doodstream::ApiResponse;
use serde_json::{Value, json};

/// コマンド使用方法を表示する
///
/// テキストは argh が生成したものを受け取る。
pub fn print_usage(usage: &str) {
    eprintln!("{}", usage.trim_end());
}

/// コマンド結果を適切な形式で出力する
///
/// * `machine_output = false`: 人間向けメッセージ（stderr）とレスポンスJSON（stdout）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        if let Some(json) = machine_json(result) {
            println!("{}", serde_json::to_string(&json)?);
        }
    } else {
        output_human_readable(result)?;
    }

    Ok(())
}

/// エラーを出力する
///
/// 通常モードでは stderr にメッセージ・原因・ヒントを、
/// `--machine` では stdout に JSON オブジェクトを出力します。
pub fn output_error(
    error: &anyhow::Error,
    code: Option<&str>,
    exit_code: i32,
    hint: Option<&str>,
    machine_output: bool,
) {
    if machine_output {
        let json = machine_error_json(error, code, exit_code, hint);
        println!("{}", json);
        return;
    }

    eprintln!("Error: {}", error);

    let chain: Vec<_> = error.chain().skip(1).collect();
    if !chain.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }

    if let Some(hint) = hint {
        eprintln!("\nHint: {}", hint);
    }
}

/// 人間向けの出力
///
/// APIレスポンスは整形したJSONを stdout に、それ以外の説明は stderr に出す。
fn output_human_readable(result: &CommandResult) -> Result<()> {
    match result {
        CommandResult::Login(r) => {
            eprintln!();
            if r.was_logged_in {
                eprintln!("✓ API key updated!");
            } else {
                eprintln!("✓ Login successful!");
            }
            eprintln!("API key {} has been saved.", r.api_key);
        }
        CommandResult::Logout(r) => {
            if r.was_logged_in {
                eprintln!("Logged out successfully.");
                eprintln!("The stored API key has been removed.");
            } else {
                eprintln!("Already logged out.");
            }
        }
        CommandResult::Status(r) => output_status(r),
        CommandResult::Api(r) => {
            if let Some(warning) = application_warning(r) {
                eprintln!("Warning: {}", warning);
            }
            println!("{}", serde_json::to_string_pretty(&r.response)?);
        }
        CommandResult::Help => {}
    }

    Ok(())
}

fn output_status(r: &StatusResult) {
    match (&r.api_key, r.is_authenticated) {
        (None, _) => {
            eprintln!("Not logged in");
            eprintln!("No API key found. Run 'doodstream login' or set DOODSTREAM_API_KEY.");
        }
        (Some(key), true) => {
            eprintln!("Authenticated");
            eprintln!("API key: {} (from {})", key, r.key_source.unwrap_or("unknown"));
            if let Some(email) = r
                .account
                .as_ref()
                .and_then(|a| a.get("email"))
                .and_then(Value::as_str)
            {
                eprintln!("Account: {}", email);
            }
            if let Some(message) = &r.message {
                eprintln!("Account details unavailable: {}", message);
            }
        }
        (Some(key), false) => {
            eprintln!("✗ Authentication failed");
            eprintln!("API key: {} (from {})", key, r.key_source.unwrap_or("unknown"));
            eprintln!();
            eprintln!("The API key was rejected. Please run 'doodstream login' to update it.");
        }
    }
}

/// リモートが `status != 200` を返した場合の警告文
///
/// 認証以外のエラーはデータとして返ってくるため、ここで気付けるようにする。
fn application_warning(r: &ApiCallResult) -> Option<String> {
    let envelope: ApiResponse = ApiResponse::from_value(r.response.clone()).ok()?;
    match envelope.status {
        Some(status) if !envelope.is_ok() => Some(format!(
            "{} returned status {}: {}",
            r.operation,
            status,
            envelope.msg.as_deref().unwrap_or("no message")
        )),
        _ => None,
    }
}

/// 機械可読JSON（Help は出力なし）
fn machine_json(result: &CommandResult) -> Option<Value> {
    let json = match result {
        CommandResult::Login(r) => json!({
            "success": true,
            "command": "login",
            "was_logged_in": r.was_logged_in,
            "action": if r.was_logged_in { "updated" } else { "created" },
            "api_key": r.api_key,
        }),
        CommandResult::Logout(r) => json!({
            "success": true,
            "command": "logout",
            "was_logged_in": r.was_logged_in,
        }),
        CommandResult::Status(r) => json!({
            "success": true,
            "command": "status",
            "is_authenticated": r.is_authenticated,
            "api_key": r.api_key,
            "key_source": r.key_source,
            "account": r.account,
            "message": r.message,
        }),
        CommandResult::Api(r) => json!({
            "success": true,
            "command": "api",
            "operation": r.operation,
            "response": r.response,
        }),
        CommandResult::Help => return None,
    };

    Some(json)
}

fn machine_error_json(
    error: &anyhow::Error,
    code: Option<&str>,
    exit_code: i32,
    hint: Option<&str>,
) -> Value {
    let causes: Vec<String> = error.chain().skip(1).map(|c| c.to_string()).collect();

    json!({
        "success": false,
        "error": error.to_string(),
        "code": code,
        "causes": causes,
        "exit_code": exit_code,
        "hint": hint,
    })
}
