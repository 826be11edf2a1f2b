use clap::Parser;
use dialoguer::{Confirm, Select};
use livestock_scanner::{cli, config, error, processing, report, storage};
use livestock_scanner_common::{generate_sample_history, summary, voice, AnimalType, Language};
use cli::{Cli, Commands, HistoryAction, SettingsAction};
use config::Config;
use error::{Result, ScannerError};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolve_data_dir()?,
    };
    let mut store = storage::open_store(&data_dir);

    match cli.command {
        Commands::Scan { image, animal_type, no_wait } => {
            let animal_type = animal_type
                .map(|t| AnimalType::from_str_opt(&t).ok_or(ScannerError::InvalidAnimalType(t)))
                .transpose()?;

            println!("🐄 livestock-scanner - スキャン\n");
            let duration = if no_wait {
                Duration::ZERO
            } else {
                Duration::from_millis(config.processing_millis)
            };
            let result = processing::run_scan(
                &mut store,
                image.as_deref(),
                animal_type,
                duration,
                !no_wait,
            )
            .await?;

            println!("{}\n", report::detail(&result));
            if store.settings().voice_enabled {
                println!("🔊 {}", summary::speech_text(&result));
            }
            println!("\n✅ 履歴に保存しました（{}件）", store.history().len());
        }

        Commands::History { action } => match action {
            HistoryAction::List => {
                let history = store.history();
                println!("スキャン履歴: {}件", history.len());
                if history.is_empty() {
                    println!("まだスキャンがありません。`livestock-scanner scan` で最初のスキャンを行ってください");
                }
                for result in history {
                    println!("{}", report::history_line(result));
                }
            }

            HistoryAction::Show { id, share } => {
                let result = store.find(&id).ok_or_else(|| ScannerError::NotFound(id.clone()))?;
                if share {
                    println!("{}", summary::share_text(result));
                } else {
                    println!("{}", report::detail(result));
                }
            }

            HistoryAction::Remove { id } => {
                if store.remove_from_history(&id)? {
                    println!("✔ 削除しました: {}", id);
                } else {
                    return Err(ScannerError::NotFound(id));
                }
            }

            HistoryAction::Clear { yes } => {
                let count = store.history().len();
                if count == 0 {
                    println!("履歴は空です");
                } else {
                    let confirmed = yes
                        || Confirm::new()
                            .with_prompt(format!("{}件の履歴をすべて削除しますか？（元に戻せません）", count))
                            .default(false)
                            .interact()?;
                    if confirmed {
                        store.clear_history()?;
                        println!("✔ 履歴を削除しました（{}件）", count);
                    } else {
                        println!("キャンセルしました");
                    }
                }
            }

            HistoryAction::Seed { count } => {
                let count = count.unwrap_or(config.sample_count);
                // 古い順に追加して新しい順の並びを保つ
                for result in generate_sample_history(count).into_iter().rev() {
                    store.add_to_history(result)?;
                }
                println!("✔ サンプルを{}件追加しました", count);
            }

            HistoryAction::Export { output } => {
                let json = serde_json::to_string_pretty(store.history())?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, json)?;
                        println!("✔ 履歴を保存: {}", path.display());
                    }
                    None => println!("{}", json),
                }
            }
        },

        Commands::Settings { action } => match action {
            SettingsAction::Show => print_settings(store.settings().language, store.settings().voice_enabled),

            SettingsAction::Language { code } => {
                if !store.set_language_code(&code)? {
                    return Err(ScannerError::InvalidLanguage(code));
                }
                let lang = store.settings().language;
                println!("✔ 言語を設定しました: {} ({})", lang.name(), lang.native_name());
            }

            SettingsAction::Voice { state } => {
                store.set_voice_enabled(state.enabled())?;
                println!(
                    "✔ 音声読み上げ: {}",
                    if state.enabled() { "有効" } else { "無効" }
                );
            }
        },

        Commands::Onboard { language } => {
            let lang = match language {
                Some(code) => {
                    Language::from_code(&code).ok_or(ScannerError::InvalidLanguage(code))?
                }
                None => {
                    let items: Vec<String> = Language::ALL
                        .iter()
                        .map(|l| format!("{} - {}", l.native_name(), l.name()))
                        .collect();
                    let current = Language::ALL
                        .iter()
                        .position(|l| *l == store.settings().language)
                        .unwrap_or(0);
                    let index = Select::new()
                        .with_prompt("言語を選択してください")
                        .items(&items)
                        .default(current)
                        .interact()?;
                    Language::ALL[index]
                }
            };
            store.set_language(lang)?;
            store.set_has_completed_onboarding(true)?;
            println!("✔ セットアップ完了: {}", lang.native_name());
        }

        Commands::Voice { transcript } => {
            let reply = voice::reply_for(&transcript.join(" "));
            if store.settings().voice_enabled {
                println!("🔊 {}", reply.text);
            }
            match reply.command {
                Some(command) => {
                    println!("→ {} ({})", command.route().path(), command.description());
                    if command == voice::VoiceCommand::LastResult {
                        match store.latest() {
                            Some(result) => println!("{}", report::history_line(result)),
                            None => println!("まだスキャンがありません"),
                        }
                    }
                }
                None => {
                    println!("使えるコマンド:");
                    for command in voice::VoiceCommand::ALL {
                        println!("  \"{}\" - {}", command.phrase(), command.description());
                    }
                }
            }
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;
            let changed = set_data_dir.is_some();

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ 保存先ディレクトリを設定しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  保存先: {}", config.resolve_data_dir()?.display());
                println!("  解析待ち時間: {}ms", config.processing_millis);
                println!("  サンプル件数: {}", config.sample_count);
                println!(
                    "  オンボーディング: {}",
                    if store.has_completed_onboarding() { "完了" } else { "未完了" }
                );
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "livestock_scanner=debug,livestock_scanner_common=debug"
    } else {
        "livestock_scanner=info,livestock_scanner_common=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_settings(language: Language, voice_enabled: bool) {
    println!("設定:");
    println!("  言語: {} ({}) [{}]", language.name(), language.native_name(), language.code());
    println!("  音声読み上げ: {}", if voice_enabled { "有効" } else { "無効" });
}
