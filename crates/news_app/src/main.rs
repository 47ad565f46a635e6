mod command;
mod config;
mod console;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::LevelFilter;
use news_engine::{BookmarkStore, FileStore, NewsSession, ReqwestTransport};
use news_logging::{news_info, news_warn};

use command::{parse_command, Command, HELP};
use config::{AppConfig, API_KEY_ENV, CONFIG_FILENAME};
use console::{render, ConsoleObserver};

const LOG_FILENAME: &str = "./news_app.log";

fn main() -> anyhow::Result<()> {
    let (config, config_error) = match AppConfig::load(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    let config = config.with_api_key_override(std::env::var(API_KEY_ENV).ok());

    news_logging::initialize(config.log.into(), LevelFilter::Info, Path::new(LOG_FILENAME));
    if let Some(err) = config_error {
        news_warn!("{}; using defaults", err);
    }
    news_info!("Starting news_app with data dir {:?}", config.data_dir);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;

    let observer = Arc::new(ConsoleObserver::default());
    let transport = ReqwestTransport::new(config.transport_settings())
        .context("failed to build http client")?;
    let session = NewsSession::new(
        config.api_config(),
        Arc::new(transport),
        BookmarkStore::new(Arc::new(FileStore::new(config.data_dir.clone()))),
        observer.clone(),
    );

    runtime.block_on(session.refresh());
    print!("{}", render(&session.view()));
    println!("Type `help` for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => continue,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Unknown(text) => {
                println!("Unknown command: {text}. Type `help` for commands.");
                continue;
            }
            Command::ListBookmarks => {
                let bookmarks = session.bookmarks();
                if bookmarks.is_empty() {
                    println!("No bookmarks.");
                }
                for id in bookmarks.iter() {
                    println!("★ {id}");
                }
                continue;
            }
            Command::Dispatch(msg) => {
                if runtime.block_on(session.dispatch(msg)).is_none() {
                    println!("Nothing to do.");
                    continue;
                }
            }
            Command::Star(target) => match resolve_card_id(&session, &target) {
                Some(id) => {
                    session.toggle_bookmark(&id);
                }
                None => {
                    println!("No result {target} on this page.");
                    continue;
                }
            },
            Command::Retry => match observer.take_retry() {
                Some(retry) => {
                    runtime.block_on(retry.run());
                }
                None => {
                    println!("Nothing to retry.");
                    continue;
                }
            },
        }
        print!("{}", render(&session.view()));
    }

    news_info!("Exiting news_app");
    Ok(())
}

/// Accepts a 1-based card number or a content id shown on the current page.
fn resolve_card_id(session: &NewsSession, target: &str) -> Option<String> {
    let view = session.view();
    if let Ok(number) = target.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| view.cards.get(index))
            .map(|card| card.id.clone());
    }
    view.cards
        .iter()
        .find(|card| card.id == target)
        .map(|card| card.id.clone())
}
