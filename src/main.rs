use clap::Parser;
use splitzie::{cli, config, error, export, form, image_file, logging};
use splitzie::client::HttpSplitClient;
use splitzie::notifier::TerminalNotifier;
use splitzie::submission::BillSplitSubmission;
use cli::{Cli, Commands};
use config::Config;
use error::{Result, SplitzieError};
use splitzie_common::{render, STATUS_OK};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    tracing::debug!("base_url: {}", base_url);

    match cli.command {
        Commands::Split { image, context, output, excel } => {
            println!("🧾 splitzie - 割り勘\n");

            let bill_image = image_file::load_bill_image(&image)?;
            let image_name = bill_image.file_name.clone();

            let client = HttpSplitClient::new(&base_url, config.timeout(cli.timeout)?)?;
            let mut submission = BillSplitSubmission::new(client, TerminalNotifier::new());
            submission.select_image(bill_image);
            submission.edit_context(context.clone());

            let report = submission.submit().await;
            let result = match submission.last_result() {
                Some(result) if report.is_success() => result,
                _ => {
                    return Err(SplitzieError::SubmissionFailed(
                        report.notice().message.to_string(),
                    ));
                }
            };

            println!("\n{}\n", render(result, &config.currency_symbol));

            if let Some(path) = output {
                let saved = export::SavedSplit::new(image_name, context, result.clone());
                export::save_json(&saved, &path)?;
                println!("✔ 結果を保存: {}", path.display());
            }

            if let Some(path) = excel {
                export::excel::generate_excel(result, &path, &config.currency_symbol)?;
                println!("✔ Excelを保存: {}", path.display());
            }
        }

        Commands::Form => {
            let client = HttpSplitClient::new(&base_url, config.timeout(cli.timeout)?)?;
            let mut submission = BillSplitSubmission::new(client, TerminalNotifier::new());
            form::run_form(&mut submission, &config.currency_symbol).await?;
        }

        Commands::Show { input, excel } => {
            let saved = export::load_saved(&input)?;
            println!("🧾 {} ({})", saved.image, saved.received_at);
            println!("   {}\n", saved.context);
            println!("{}", render(&saved.result, &config.currency_symbol));

            if let Some(path) = excel {
                export::excel::generate_excel(&saved.result, &path, &config.currency_symbol)?;
                println!("\n✔ Excelを保存: {}", path.display());
            }
        }

        Commands::Heartbeat => {
            let client = HttpSplitClient::new(&base_url, config.timeout(cli.timeout)?)?;
            let status = client.heartbeat().await?;
            if status == STATUS_OK {
                println!("✔ サーバー稼働中: {}", client.base_url());
            } else {
                println!("⚠ サーバー応答: {} ({})", status, client.base_url());
            }
        }

        Commands::Config { set_base_url, set_timeout, set_currency, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if let Some(symbol) = set_currency {
                config.set_currency(symbol)?;
                println!("✔ 通貨記号を設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.base_url);
                println!("  使用中のURL: {}", config.resolve_base_url(None));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  通貨記号: {}", config.currency_symbol);
            }
        }
    }

    Ok(())
}
