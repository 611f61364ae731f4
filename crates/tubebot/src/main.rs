use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use tubebot::cli::{Cli, Commands};
use tubebot::messages;
use tubebot::session::SessionState;
use tubebot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramTransport};
use tubebot::RequestOrchestrator;
use tubecore::{config, logging, AppError, Delivery, DownloadPool, FormatProfile, MediaKind, YtDlpFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // .env has to be loaded before the config statics are first read
    let _ = dotenv();
    logging::init_from_config()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot().await,
        Commands::Download { url, audio } => {
            let kind = if audio { MediaKind::Audio } else { MediaKind::Video };
            run_download(&url, kind).await
        }
        Commands::Check => run_check().await,
    }
}

async fn run_bot() -> Result<()> {
    let Some(token) = config::BOT_TOKEN.clone() else {
        log::error!("BOT_TOKEN (or TELOXIDE_TOKEN) is not set; refusing to start");
        return Err(AppError::Config("BOT_TOKEN is not set".to_string()).into());
    };

    log::info!("Starting tubebot...");
    logging::log_startup_configuration();

    let fetcher = Arc::new(YtDlpFetcher::from_config());
    match fetcher.version().await {
        Ok(version) => log::info!("yt-dlp version: {}", version),
        Err(e) => log::warn!("yt-dlp is not usable, downloads will fail: {}", e),
    }

    let bot = create_bot(&token)?;
    match bot.get_me().await {
        Ok(me) => log::info!("Logged in as @{}", me.username()),
        Err(e) => log::warn!("Failed to fetch bot info: {}", e),
    }
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let transport = Arc::new(TelegramTransport::new(bot.clone()));
    let pool = DownloadPool::from_config(fetcher);
    log::info!(
        "Download pool: {} concurrent, {}s timeout",
        pool.max_concurrent(),
        pool.timeout().as_secs()
    );
    let orchestrator = Arc::new(RequestOrchestrator::new(transport, pool.clone()));
    let handler = schema(HandlerDeps::new(orchestrator));

    let listener = Polling::builder(bot.clone()).build();
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<SessionState>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    // Spawned downloads still holding a slot finish; queued ones get PoolClosed
    pool.close();
    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// One-shot download through the same fetcher, pool, and size policy as the bot
async fn run_download(url: &str, kind: MediaKind) -> Result<()> {
    let pool = DownloadPool::from_config(Arc::new(YtDlpFetcher::from_config()));
    log::info!("Downloading {} as {} (timeout {}s)", url, kind, pool.timeout().as_secs());
    let output = pool.run(url, FormatProfile::for_kind(kind)).await?;

    println!("{}", output.file_path.display());
    println!("{} bytes", output.file_size);
    if let Delivery::Oversize { size, limit } =
        Delivery::decide(kind, output.file_size, config::limits::MAX_VIDEO_SIZE_BYTES)
    {
        println!("{}", messages::oversize(&output.file_name(), size, limit));
    }
    Ok(())
}

async fn run_check() -> Result<()> {
    let fetcher = YtDlpFetcher::from_config();
    let version = fetcher.version().await?;
    println!("{} {}", config::YTDL_BIN.as_str(), version);
    println!("download folder: {}", fetcher.download_dir().display());
    Ok(())
}
