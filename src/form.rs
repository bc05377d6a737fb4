//! 対話式フォーム
//!
//! 1セッションで1つの送信状態を持ち続ける。
//! 失敗しても前回の結果は残る。

use crate::client::SplitService;
use crate::error::{Result, SplitzieError};
use crate::image_file::load_bill_image;
use crate::notifier::Notifier;
use crate::submission::BillSplitSubmission;
use dialoguer::{Input, Select};
use splitzie_common::{render_optional, SubmissionState};
use std::path::Path;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// 画像を選択
    SelectImage,
    /// 説明を編集
    EditContext,
    /// 送信
    Submit,
    /// 前回の結果を表示
    ShowResult,
    /// 終了
    Quit,
}

const MENU: &[(FormAction, &str)] = &[
    (FormAction::SelectImage, "Select Bill Image"),
    (FormAction::EditContext, "Edit Bill Context"),
    (FormAction::Submit, "Split Bill"),
    (FormAction::ShowResult, "Show Last Result"),
    (FormAction::Quit, "Quit"),
];

/// 現在の入力状況を1行で
pub fn status_line(state: &SubmissionState) -> String {
    let image = state
        .selected_image()
        .map(|img| format!("{} ({} bytes)", img.file_name, img.len()))
        .unwrap_or_else(|| "未選択".to_string());

    let context = if state.bill_context().is_empty() {
        "未入力".to_string()
    } else {
        let preview: String = state.bill_context().chars().take(40).collect();
        if preview.chars().count() < state.bill_context().chars().count() {
            format!("\"{}…\"", preview)
        } else {
            format!("\"{}\"", preview)
        }
    };

    let result = if state.last_result().is_some() { "あり" } else { "なし" };

    format!("画像: {} / 説明: {} / 結果: {}", image, context, result)
}

pub async fn run_form<S, N>(
    submission: &mut BillSplitSubmission<S, N>,
    currency: &str,
) -> Result<()>
where
    S: SplitService,
    N: Notifier,
{
    println!("🧾 splitzie - 割り勘フォーム\n");

    loop {
        println!("{}", status_line(submission.state()));

        match prompt_action()? {
            FormAction::SelectImage => {
                let path = prompt_text("Bill image path", "")?;
                match load_bill_image(Path::new(path.trim())) {
                    Ok(image) => {
                        println!("✔ 画像を選択: {}", image.file_name);
                        submission.select_image(image);
                    }
                    Err(e) => eprintln!("✖ {}", e),
                }
            }
            FormAction::EditContext => {
                let current = submission.state().bill_context().to_string();
                let text = prompt_text("Bill context", &current)?;
                submission.edit_context(text);
            }
            FormAction::Submit => {
                let report = submission.submit().await;
                if report.is_success() {
                    print_last_result(submission.state(), currency);
                }
            }
            FormAction::ShowResult => {
                if !print_last_result(submission.state(), currency) {
                    println!("まだ結果がありません");
                }
            }
            FormAction::Quit => break,
        }
        println!();
    }

    Ok(())
}

/// 結果があれば表示して true
fn print_last_result(state: &SubmissionState, currency: &str) -> bool {
    match render_optional(state.last_result(), currency) {
        Some(rendered) => {
            println!("\n{}", rendered);
            true
        }
        None => false,
    }
}

fn prompt_action() -> Result<FormAction> {
    let labels: Vec<&str> = MENU.iter().map(|(_, label)| *label).collect();
    let index = Select::new()
        .with_prompt("操作を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| SplitzieError::CliExecution(e.to_string()))?;

    Ok(MENU.get(index).map(|(action, _)| *action).unwrap_or(FormAction::Quit))
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| SplitzieError::CliExecution(e.to_string()))
}
