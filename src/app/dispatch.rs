use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use bloommind::history::{Message, Sender};
use bloommind::mood::Mood;
use bloommind::settings::{SettingToggle, Settings};
use bloommind::storage::FileStore;
use bloommind::ui::style as ui;
use bloommind::{Config, Reply, ResponsePipeline};
use std::io::Write;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Open the persisted store under the configured data directory and wire a
/// pipeline over it.
fn open_pipeline(config: &Config) -> Result<ResponsePipeline> {
    let data_dir = config.data_dir();
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?
        .with_quota(config.storage.quota_bytes);
    tracing::debug!(dir = %data_dir.display(), "Opened companion store");
    Ok(ResponsePipeline::from_config(config, Arc::new(store)))
}

pub async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let mut pipeline = open_pipeline(config)?;
    let name = config.persona.name.as_str();

    match cli.command {
        Commands::Chat => run_chat(&mut pipeline, name).await,

        Commands::Send { message, mood } => {
            if let Some(mood) = mood {
                pipeline.set_mood(mood);
            }
            let Some(reply) = pipeline.submit(&message.join(" ")).await else {
                bail!("Message is empty");
            };
            println!("{}", format_reply(name, &reply));
            Ok(())
        }

        Commands::Mood { mood } => {
            print_mood(&mut pipeline, name, mood);
            Ok(())
        }

        Commands::History { limit } => {
            let history = pipeline.history();
            if history.is_empty() {
                println!("{}", ui::dim("No saved conversation."));
                return Ok(());
            }
            let n = limit.unwrap_or(history.len());
            for message in history.recent_window(n) {
                println!("{}", format_message(name, message));
            }
            Ok(())
        }

        Commands::Clear => {
            pipeline.clear_history();
            println!("{}", ui::success("Conversation cleared."));
            Ok(())
        }

        Commands::Login { name: username } => {
            if username.trim().is_empty() {
                bail!("Name cannot be empty");
            }
            let greeting = pipeline.welcome(&username);
            println!("{} {greeting}", ui::bot_label(name));
            Ok(())
        }

        Commands::Reset => {
            pipeline.reset();
            println!("{}", ui::success("Signed out. All saved state was erased."));
            Ok(())
        }

        Commands::Settings { toggle, value } => {
            let settings = match (toggle, value) {
                (Some(toggle), Some(value)) => pipeline.update_setting(toggle, value),
                _ => pipeline.settings(),
            };
            print!("{}", format_settings(&settings));
            Ok(())
        }
    }
}

async fn run_chat(pipeline: &mut ResponsePipeline, name: &str) -> Result<()> {
    match pipeline.username() {
        Some(username) => println!("{}", ui::header(format!("Welcome back, {username}."))),
        None => println!(
            "{}",
            ui::dim("Tip: run `bloommind login <name>` so I can greet you properly.")
        ),
    }
    if let Some(reflection) = pipeline.daily_reflection(chrono::Local::now().date_naive()) {
        println!("{} {reflection}", ui::bot_label(name));
    }
    println!("{}", ui::dim("Type /mood <tag>, /clear or /quit."));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ui::user_label("you ›"));
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit" | "/exit", _) => break,
            ("/clear", _) => {
                pipeline.clear_history();
                println!("{}", ui::success("Conversation cleared."));
            }
            ("/mood", tag) => match tag.trim().parse::<Mood>() {
                Ok(mood) => print_mood(pipeline, name, mood),
                Err(_) => println!(
                    "{}",
                    ui::warn("Unknown mood. Try amazing, happy, okay, sad, anxious or neutral.")
                ),
            },
            _ => {
                if let Some(reply) = pipeline.submit(line).await {
                    println!("{}", format_reply(name, &reply));
                }
            }
        }
    }
    Ok(())
}

fn print_mood(pipeline: &mut ResponsePipeline, name: &str, mood: Mood) {
    match pipeline.set_mood(mood) {
        Some(ack) => println!("{} {ack}", ui::bot_label(name)),
        None => println!("{}", ui::dim(format!("Mood set to {mood}."))),
    }
}

fn format_reply(name: &str, reply: &Reply) -> String {
    if reply.is_offline() {
        format!("{} {} {}", ui::bot_label(name), reply.text, ui::offline_badge())
    } else {
        format!("{} {}", ui::bot_label(name), reply.text)
    }
}

fn format_message(name: &str, message: &Message) -> String {
    let label = match message.sender {
        Sender::User => ui::user_label("you"),
        Sender::Bot => ui::bot_label(name),
    };
    format!("{} {label} {}", ui::dim(&message.timestamp), message.text)
}

fn format_settings(settings: &Settings) -> String {
    SettingToggle::iter()
        .map(|toggle| format!("{toggle:<14} {}\n", settings.get(toggle)))
        .collect()
}
