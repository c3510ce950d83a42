use clap::Parser;
use portfolio_gallery::{cli, config, error, report};
use cli::{Cli, Commands};
use config::ConfigFile;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = ConfigFile::load()?;

    match cli.command {
        Commands::Check { projects } => {
            let store = report::load_store(projects.as_deref())?;
            println!("✔ {}件のプロジェクトを検証しました", store.len());
        }

        Commands::List { projects } => {
            let store = report::load_store(projects.as_deref())?;
            for line in report::card_lines(&store, &config) {
                println!("{}", line);
            }
        }

        Commands::Show { id, projects } => {
            let store = report::load_store(projects.as_deref())?;
            let view = report::viewer_view(&store, &config, &id)?;
            print!("{}", report::viewer_text(&view));
        }

        Commands::Config { show, init } => {
            let path = ConfigFile::config_path()?;

            if init {
                if path.exists() {
                    println!("設定ファイルは既に存在します: {}", path.display());
                } else {
                    ConfigFile::save_to(&portfolio_gallery_common::GalleryConfig::default(), &path)?;
                    println!("✔ 設定ファイルを作成しました: {}", path.display());
                }
            }

            if show || !init {
                println!("設定 ({}):", path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
