use anyhow::Result;
use cheerpost_cli::CheerCliApp;
use cheerpost_core::Config;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "cheerpost", version, about = "Post notes, get cheered on, count things")]
struct Args {
    /// Directory holding local_storage.json
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Directory of the posting feature; the inspiration location is relative to it
    #[arg(long)]
    feature_dir: Option<PathBuf>,

    /// Inspiration list location (relative path or http(s) URL)
    #[arg(long)]
    inspiration: Option<String>,

    /// Give up on the inspiration request after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Page the session starts on
    #[arg(long, default_value = "/src/modules/posts/index.html")]
    start_path: String,
}

fn init_logging() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = Config::new()?;
    if let Some(dir) = args.config_dir {
        config.set_config_dir(dir)?;
    }
    if let Some(dir) = args.feature_dir {
        config.feature_dir = dir;
    }
    if let Some(location) = args.inspiration {
        config.inspiration_location = location;
    }
    config.inspiration_timeout = args.timeout_secs.map(Duration::from_secs);
    log::debug!("Config: {:?}", config);

    let mut app = CheerCliApp::new(&config, &args.start_path)?;
    app.initialize();

    println!("Cheerpost started successfully!");

    app.run(std::io::stdin().lock())?;

    Ok(())
}
