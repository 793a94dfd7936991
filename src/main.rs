use clap::Parser;
use persona_ai::{cli, client, config, error, logging, output, scanner};
use cli::{Cli, Commands};
use client::HttpService;
use config::{Config, ConfigThemeStore};
use error::{PersonaAiError, Result};
use persona_ai_common::{
    check_health, AnalysisResult, AnalysisService, DetailView, PageController, ResultsView, ViewState,
};
use scanner::{InputBatch, LocalFile};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = Config::config_path()?;
    let mut config = Config::load_from(&config_path)?;
    let server_url = config.resolve_server_url(cli.server.as_deref());

    match cli.command {
        Commands::Analyze { paths, persona, job, output: output_path, detail, no_health_check } => {
            println!("📑 persona-ai - ドキュメント解析\n");

            let store = ConfigThemeStore::new(&mut config, config_path.clone());
            let mut controller = PageController::<LocalFile>::with_theme_store(&store);

            // 1. ファイル選択
            println!("[1/3] ファイルを読み込み中...");
            for batch in scanner::scan_inputs(&paths)? {
                match batch {
                    InputBatch::Selected(files) => {
                        controller.select_files(files);
                    }
                    InputBatch::Dropped { folder, files } => {
                        if let Err(e) = controller.drop_files(files) {
                            eprintln!("⚠ {}: {}", folder.display(), e);
                        }
                    }
                }
            }
            print!("{}", output::format_file_list(controller.files()));

            let persona = prompt_if_missing(persona, "Persona")?;
            let job = prompt_if_missing(job, "Job to be done")?;

            // 2. 解析
            let service = HttpService::new(server_url.as_str());
            if !no_health_check {
                check_health::<LocalFile, _>(&service).await;
            }

            println!("\n[2/3] 解析中... ({})", server_url);
            let spinner = loading_spinner();
            let submitted = controller.submit_analysis(&persona, &job, &service).await;
            spinner.finish_and_clear();
            submitted?;

            if let ViewState::Error(message) = controller.view() {
                return Err(PersonaAiError::Service(message.clone()));
            }
            println!("✔ 解析完了\n");

            // 3. 結果
            println!("[3/3] 結果\n");
            if let Some(view) = controller.results_view() {
                println!("{}", output::format_results(&view));
            }

            if let Some(target) = output_path {
                if let Some(result) = controller.result() {
                    let path = save_result(result, &target)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
            }

            if let Some(number) = detail {
                let total = controller.result().map_or(0, |r| r.extracted_sections.len());
                let index = number
                    .checked_sub(1)
                    .ok_or(PersonaAiError::DetailOutOfRange(number, total))?;
                let shown = controller
                    .show_detail(index)
                    .ok_or(PersonaAiError::DetailOutOfRange(number, total))?;
                println!("\n{}", output::format_detail(shown));
            }
        }

        Commands::Health => {
            let service = HttpService::new(server_url.as_str());
            let status = service.health().await?;
            println!("サーバ: {}", server_url);
            println!("  状態: {}", if status.status.is_empty() { "-" } else { status.status.as_str() });
            println!("  モデル: {}", if status.model_loaded { "読込済み" } else { "未読込" });
        }

        Commands::Show { input, detail } => {
            let content = std::fs::read_to_string(&input)?;
            let result: AnalysisResult = serde_json::from_str(&content)?;

            println!("{}", output::format_results(&ResultsView::from_result(&result)));

            if let Some(number) = detail {
                let view = number
                    .checked_sub(1)
                    .and_then(|index| DetailView::from_result(&result, index))
                    .ok_or(PersonaAiError::DetailOutOfRange(number, result.extracted_sections.len()))?;
                println!("{}", output::format_detail(&view));
            }
        }

        Commands::Theme { toggle } => {
            let mut store = ConfigThemeStore::new(&mut config, config_path.clone());
            let mut controller = PageController::<LocalFile>::with_theme_store(&store);

            if toggle {
                let theme = controller.toggle_theme(&mut store)?;
                println!("✔ テーマを切り替えました: {}", theme);
            } else {
                println!("テーマ: {}", controller.theme());
            }
        }

        Commands::Config { set_server, show } => {
            if let Some(url) = set_server {
                config.set_server_url(url, &config_path)?;
                println!("✔ サーバURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", config_path.display());
                println!("  サーバURL: {}", config.server_url);
                println!("  接続先（実効）: {}", config.resolve_server_url(cli.server.as_deref()));
                println!("  テーマ: {}", config.theme.as_deref().unwrap_or("dark"));
            }
        }
    }

    Ok(())
}

/// 未指定なら対話入力（端末でなければ空のまま検証に任せる）
fn prompt_if_missing(value: Option<String>, label: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !std::io::stdin().is_terminal() {
        return Ok(String::new());
    }

    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PersonaAiError::Prompt(e.to_string()))
}

fn loading_spinner() -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message("Analyzing documents...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn save_result(result: &AnalysisResult, target: &std::path::Path) -> Result<PathBuf> {
    let path = output::result_path(target);
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
