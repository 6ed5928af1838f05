// ==========================================
// 批量导入工具 - 命令行主入口
// ==========================================
// 输出: stdout 为 JSON 结果，日志写 stderr
// 退出码: 0 成功 / 1 校验未通过或执行错误 / 2 部分记录导入失败
// ==========================================

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use mass_import::app::{commands, AppError, AppState, ImportOutcome, Session};
use mass_import::config::{ConfigManager, ImportConfigReader};
use mass_import::{i18n, logging, DiskFile};
use serde::Serialize;
use std::process::ExitCode;

const EXIT_INVALID: u8 = 1;
const EXIT_PARTIAL_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            match e.downcast_ref::<AppError>() {
                Some(app_err) => {
                    if let Err(print_err) = print_json(&app_err.to_response()) {
                        tracing::error!(error = %format!("{:#}", print_err), "错误响应输出失败");
                    }
                }
                None => eprintln!("Erro: {:#}", e),
            }
            ExitCode::from(EXIT_INVALID)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = ConfigManager::load(cli.config.as_deref())
        .map_err(AppError::from)
        .context("falha ao carregar a configuração")?;
    i18n::set_locale(&config.locale());

    tracing::info!("{} {}", mass_import::APP_NAME, mass_import::VERSION);

    match cli.command {
        Commands::Types => {
            let state = AppState::new(config)?;
            print_json(&commands::list_data_types(&state))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Template { data_type } => {
            let state = AppState::new(config)?;
            println!("{}", commands::template_header(&state, &data_type)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { data_type, file } => {
            let state = AppState::new(config)?;
            let report = commands::validate_file(&state, &data_type, &DiskFile::new(&file)).await;
            print_json(&report)?;
            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_INVALID)
            })
        }
        Commands::Import {
            data_type,
            file,
            token,
            org,
            company,
            env,
        } => {
            if let Some(env) = env {
                config.set_environment(env);
            }
            let session = Session::from_config(&config).with_credentials(token, org, company);
            let state = AppState::new(config)?;

            let outcome =
                commands::import_file(&state, &session, &data_type, &DiskFile::new(&file)).await?;
            print_json(&outcome)?;

            Ok(match outcome {
                ImportOutcome::Rejected { .. } => ExitCode::from(EXIT_INVALID),
                ImportOutcome::Completed { ref summary } if summary.has_failures() => {
                    ExitCode::from(EXIT_PARTIAL_FAILURE)
                }
                ImportOutcome::Completed { .. } => ExitCode::SUCCESS,
            })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("falha ao serializar a saída")?;
    println!("{}", text);
    Ok(())
}
