mod ui;

use anyhow::Result;
use axiao_core::events::{get_global_event_bus, ChatEvent};
use axiao_core::session::get_global_conversation_manager;
use axiao_core::stream::EmitterConfig;
use axiao_core::ChatService;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

/// Shown when a send fails.
const SEND_FAILURE_FALLBACK: &str = "抱歉，发生了一些错误，请稍后再试。";

#[derive(Parser, Debug)]
#[command(name = "axiao-cli", version, about = "阿孝问问 - 终端聊天界面")]
struct Args {
    /// Seed the reply and chunking RNG for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Emission cadence in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("AXIAO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let manager = get_global_conversation_manager();
    let config = EmitterConfig {
        tick_interval: Duration::from_millis(args.tick_ms),
        ..EmitterConfig::default()
    };
    let service = Arc::new(match args.seed {
        Some(seed) => ChatService::with_seed(manager.clone(), config, seed),
        None => ChatService::with_config(manager.clone(), config),
    });

    let mut events = get_global_event_bus().subscribe();

    ui::print_banner();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        ui::print_prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            if !handle_command(&service, command).await? {
                break;
            }
            continue;
        }

        send_and_stream(&service, &mut events, input).await;
    }

    Ok(())
}

/// Send one message and print the streamed reply as it arrives.
async fn send_and_stream(
    service: &Arc<ChatService>,
    events: &mut UnboundedReceiver<ChatEvent>,
    input: &str,
) {
    ui::print_assistant_label();

    let mut send = tokio::spawn({
        let service = service.clone();
        let content = input.to_string();
        async move { service.send_message(&content).await }
    });

    loop {
        tokio::select! {
            // Drain queued events before noticing task completion, so tail
            // chunks are never skipped.
            biased;

            event = events.recv() => match event {
                Some(ChatEvent::AssistantDelta { delta, .. }) => ui::print_chunk(&delta),
                // Emitted after the last chunk; the stream is fully drained.
                Some(ChatEvent::GeneratingChanged { generating: false }) => {
                    match (&mut send).await {
                        Ok(Ok(response)) => debug!("send resolved: {}", response.message),
                        Ok(Err(e)) => ui::print_error(&format!("{}: {}", SEND_FAILURE_FALLBACK, e)),
                        Err(e) => ui::print_error(&format!("{}: {}", SEND_FAILURE_FALLBACK, e)),
                    }
                    break;
                }
                Some(_) => {}
                None => break,
            },
            // Failure before the generating flag ever flipped.
            result = &mut send => {
                match result {
                    Ok(Ok(response)) => debug!("send resolved: {}", response.message),
                    Ok(Err(e)) => ui::print_error(&format!("{}: {}", SEND_FAILURE_FALLBACK, e)),
                    Err(e) => ui::print_error(&format!("{}: {}", SEND_FAILURE_FALLBACK, e)),
                }
                break;
            }
        }
    }
    ui::print_newline();
}

/// Returns `false` when the REPL should exit.
async fn handle_command(service: &Arc<ChatService>, command: &str) -> Result<bool> {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "new" => {
            let conversation = service.manager().create_conversation();
            ui::print_info(&format!("新对话已创建: {}", conversation.id));
        }
        "list" => {
            let listing = service.get_conversations().await;
            ui::print_conversation_list(&listing.data);
        }
        "switch" => match service.manager().switch_conversation(arg) {
            Ok(()) => ui::print_info(&format!("已切换到对话: {}", arg)),
            Err(e) => ui::print_error(&e.to_string()),
        },
        "delete" => match service.delete_conversation(arg).await {
            Ok(response) => ui::print_info(&response.message),
            Err(e) => ui::print_error(&e.to_string()),
        },
        "clear" => {
            let response = service.clear_all_conversations().await;
            ui::print_info(&response.message);
        }
        "export" => match service.manager().current_conversation() {
            Some(conversation) => {
                ui::print_info(&serde_json::to_string_pretty(&conversation)?);
            }
            None => ui::print_error("当前没有对话"),
        },
        "help" => ui::print_help(),
        "quit" | "exit" => return Ok(false),
        other => ui::print_error(&format!("未知命令: /{}", other)),
    }
    Ok(true)
}
