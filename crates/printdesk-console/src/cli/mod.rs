mod seed;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use printdesk_core::config::CoreConfig;
use printdesk_core::identity::{IdentityProvider, StaticIdentity};
use printdesk_core::notify::{NotificationKind, NotificationSink};
use printdesk_core::store::{CommsStore, JsonFileStore, ReplyOutcome};
use printdesk_core::{SenderRole, Thread, ThreadKey};

#[derive(Parser)]
#[command(name = "printdesk-console", about = "Admin messaging console for PrintDesk")]
pub struct Cli {
    /// Path to the JSON message store (defaults to the platform data dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Operator id; falls back to the PRINTDESK_OPERATOR environment variable
    #[arg(long, global = true)]
    operator: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List conversation threads, most recently active first
    Threads,
    /// Open a thread, marking its customer messages read
    Show {
        project_id: String,
        customer_id: String,
    },
    /// Reply to a thread as the operator
    Reply {
        project_id: String,
        customer_id: String,
        /// Reply body (joined with spaces)
        body: Vec<String>,
    },
    /// Write a small demo dataset into the store
    Seed,
}

/// Toasts become stderr lines in the console.
struct StderrNotifier;

impl NotificationSink for StderrNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
        match kind {
            NotificationKind::Success => eprintln!("[ok] {title}: {description}"),
            NotificationKind::Error => eprintln!("[error] {title}: {description}"),
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = CoreConfig::default();
    if let Some(path) = cli.store {
        config.store_path = path;
    }
    if let Some(operator) = cli.operator {
        config = config.with_operator(operator);
    }
    let store_path = config.store_path.clone();
    let store = JsonFileStore::new(&store_path);

    match cli.command {
        Command::Seed => {
            store.replace_all(&seed::demo_messages())?;
            println!("Seeded demo messages into {}", store_path.display());
            Ok(())
        }
        Command::Threads => {
            let mut comms = CommsStore::new(store, StderrNotifier);
            if !comms.load().await {
                bail!("could not load messages from {}", store_path.display());
            }
            if comms.threads().is_empty() {
                println!("No conversations yet.");
                return Ok(());
            }
            for thread in comms.threads() {
                print_thread_line(thread);
            }
            Ok(())
        }
        Command::Show {
            project_id,
            customer_id,
        } => {
            let mut comms = CommsStore::new(store, StderrNotifier);
            if !comms.load().await {
                bail!("could not load messages from {}", store_path.display());
            }
            let key = ThreadKey::new(project_id, customer_id);
            if !comms.select_thread(&key).await {
                bail!("no conversation for project {} / customer {}", key.project_id, key.customer_id);
            }
            let thread = comms
                .selected_thread()
                .ok_or_else(|| anyhow::anyhow!("selection vanished"))?;
            print_thread_messages(thread);
            Ok(())
        }
        Command::Reply {
            project_id,
            customer_id,
            body,
        } => {
            let identity = match config.operator_id {
                Some(id) => StaticIdentity::new(id),
                None => StaticIdentity::from_env(),
            };
            let Some(operator) = identity.current_operator_id() else {
                bail!("no operator id configured; pass --operator or set PRINTDESK_OPERATOR");
            };

            let mut comms = CommsStore::new(store, StderrNotifier);
            if !comms.load().await {
                bail!("could not load messages from {}", store_path.display());
            }
            let key = ThreadKey::new(project_id, customer_id);
            if !comms.select_thread(&key).await {
                bail!("no conversation for project {} / customer {}", key.project_id, key.customer_id);
            }

            tracing::info!(operator = %operator, project = %key.project_id, "sending reply");
            match comms.append_reply(&body.join(" ")).await {
                ReplyOutcome::Sent => Ok(()),
                ReplyOutcome::EmptyBody => bail!("reply body is empty"),
                ReplyOutcome::Failed => bail!("reply was not stored; try again"),
                ReplyOutcome::NoSelection | ReplyOutcome::Busy => {
                    bail!("reply could not be submitted")
                }
            }
        }
    }
}

fn print_thread_line(thread: &Thread) {
    let unread = if thread.unread_count > 0 {
        format!("{:>2} unread", thread.unread_count)
    } else {
        "         ".to_string()
    };
    println!(
        "{}  {}  {}  {} <{}>",
        thread.last_message_at.format("%Y-%m-%d %H:%M"),
        unread,
        thread.project_name,
        thread.key.customer_id,
        thread.customer_email,
    );
}

fn print_thread_messages(thread: &Thread) {
    println!(
        "{} / {} <{}>",
        thread.project_name, thread.key.customer_id, thread.customer_email
    );
    for message in &thread.messages {
        let who = match message.sender {
            SenderRole::Operator => "operator",
            SenderRole::Customer => "customer",
        };
        println!(
            "  [{}] {:>8}: {}",
            message.sent_at.format("%Y-%m-%d %H:%M"),
            who,
            message.body
        );
    }
}
