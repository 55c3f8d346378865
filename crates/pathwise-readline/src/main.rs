use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Editor;
use rustyline::{Context, Helper};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pathwise_application::{CounselStatus, CounselorService, SessionStore};
use pathwise_core::session::MessageRole;
use pathwise_infrastructure::config_service::{load_config, resolve_data_dir};
use pathwise_infrastructure::TomlSessionRepository;
use pathwise_interaction::{Backoff, OpenAiGenerator, ResponseGenerator, RetryPolicy};

const COMMANDS: [&str; 7] = [
    "/new", "/history", "/sessions", "/route", "/cleanup", "/help", "/quit",
];

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  {}       start a new conversation", "/new".bright_cyan());
    println!(
        "  {}   show the current conversation history",
        "/history".bright_cyan()
    );
    println!("  {}  list stored sessions", "/sessions".bright_cyan());
    println!(
        "  {} show how a query would be routed",
        "/route <q>".bright_cyan()
    );
    println!("  {}   remove idle sessions", "/cleanup".bright_cyan());
    println!("  {}      show this help", "/help".bright_cyan());
    println!("  {}      exit", "/quit".bright_cyan());
    println!();
    println!(
        "{}",
        "Anything else is sent to the counseling specialists.".bright_black()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // ===== Backend Initialization =====
    let config = load_config(None)?;
    let data_dir = resolve_data_dir(&config)?;
    let repository = Arc::new(TomlSessionRepository::new(&data_dir)?);
    let store = Arc::new(SessionStore::new(repository));

    let generator: Option<Arc<dyn ResponseGenerator>> = match OpenAiGenerator::try_from_env() {
        Ok(generator) => {
            let generator = generator
                .with_model(config.model.clone())
                .with_max_tokens(config.max_tokens);
            info!(model = %config.model, "generator configured");
            Some(Arc::new(generator))
        }
        Err(err) => {
            info!(error = %err, "no generator available, using canned responses");
            None
        }
    };
    let live_responses = generator.is_some();

    let retry = RetryPolicy::new(
        config.max_retry_attempts,
        Backoff::Fixed(Duration::from_millis(config.retry_delay_ms)),
    );
    let service = CounselorService::new(store, generator, retry);
    let cleanup_max_age = config.cleanup_max_age();

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!(
        "{}",
        "=== Pathwise Transfer Counseling ===".bright_magenta().bold()
    );
    if live_responses {
        println!(
            "{}",
            "Connected to the response service. Ask away!".bright_black()
        );
    } else {
        println!(
            "{}",
            "No API key configured; answers come from the built-in guidance library."
                .bright_black()
        );
    }
    println!(
        "{}",
        "Type '/help' for commands, or just ask a transfer question.".bright_black()
    );
    println!();

    let mut current_session: Option<String> = None;

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if trimmed == "/quit" || trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Good luck with your transfer!".bright_green());
                    break;
                }

                if trimmed == "/help" {
                    print_help();
                    continue;
                }

                if trimmed == "/new" {
                    current_session = None;
                    println!("{}", "Started a new conversation.".bright_green());
                    continue;
                }

                if trimmed == "/history" {
                    show_history(&service, current_session.as_deref()).await;
                    continue;
                }

                if trimmed == "/sessions" {
                    show_sessions(&service).await;
                    continue;
                }

                if let Some(query) = trimmed.strip_prefix("/route ") {
                    show_route(&service, query.trim());
                    continue;
                }

                if trimmed == "/cleanup" {
                    match service.store().cleanup(cleanup_max_age).await {
                        Ok(count) => {
                            println!(
                                "{}",
                                format!("Removed {} idle session(s).", count).bright_green()
                            );
                            if current_session.is_some() {
                                // The active session may have been removed.
                                current_session = None;
                            }
                        }
                        Err(err) => eprintln!("{}", format!("Cleanup failed: {}", err).red()),
                    }
                    continue;
                }

                if trimmed.starts_with('/') {
                    println!("{}", "Unknown command, try '/help'.".bright_black());
                    continue;
                }

                match service.process(trimmed, current_session.as_deref(), None).await {
                    Ok(outcome) => {
                        current_session = Some(outcome.session_id.clone());
                        println!(
                            "{}",
                            format!(
                                "[{} · turn {}]",
                                outcome.specialist.display_name(),
                                outcome.metadata.conversation_turn
                            )
                            .bright_magenta()
                        );
                        for line in outcome.response.lines() {
                            println!("{}", line.bright_blue());
                        }
                        if outcome.status == CounselStatus::Fallback && live_responses {
                            println!(
                                "{}",
                                "(response service unavailable, showed built-in guidance)"
                                    .bright_black()
                            );
                        }
                        println!();
                    }
                    Err(err) => eprintln!("{}", format!("Error: {}", err).red()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

async fn show_history(service: &CounselorService, session_id: Option<&str>) {
    let Some(session_id) = session_id else {
        println!("{}", "No conversation yet. Ask a question first!".bright_black());
        return;
    };

    match service.store().history(session_id, None).await {
        Ok(history) if history.is_empty() => {
            println!("{}", "This conversation is empty.".bright_black());
        }
        Ok(history) => {
            for message in history {
                match message.role {
                    MessageRole::User => {
                        println!("{}", format!("You: {}", message.content).green());
                    }
                    MessageRole::Assistant => {
                        let speaker = message
                            .specialist
                            .map(|s| s.display_name())
                            .unwrap_or("Counselor");
                        println!("{}", format!("{}:", speaker).bright_magenta());
                        for line in message.content.lines() {
                            println!("{}", format!("  {}", line).bright_blue());
                        }
                    }
                }
            }
        }
        Err(err) => eprintln!("{}", format!("Failed to load history: {}", err).red()),
    }
}

async fn show_sessions(service: &CounselorService) {
    match service.store().list().await {
        Ok(sessions) if sessions.is_empty() => {
            println!("{}", "No stored sessions.".bright_black());
        }
        Ok(sessions) => {
            for session in sessions {
                println!(
                    "{}",
                    format!(
                        "{}  {} message(s), last active {}",
                        session.id,
                        session.conversation_history.len(),
                        session.updated_at.format("%Y-%m-%d %H:%M UTC")
                    )
                    .bright_blue()
                );
            }
        }
        Err(err) => eprintln!("{}", format!("Failed to list sessions: {}", err).red()),
    }
}

fn show_route(service: &CounselorService, query: &str) {
    let explanation = service.explain_route(query);
    println!(
        "{}",
        format!("Routes to: {}", explanation.selected.display_name()).bright_magenta()
    );
    for score in &explanation.scores {
        if score.score == 0 {
            continue;
        }
        println!(
            "{}",
            format!(
                "  {} scored {} ({})",
                score.specialist.display_name(),
                score.score,
                score.matched_keywords.join(", ")
            )
            .bright_blue()
        );
    }
}
