mod api;
mod config;
mod errors;
mod models;
mod workflow;

use anyhow::Result;
use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::fake::FakeApi;
use crate::api::{HttpApi, JobAssistantApi};
use crate::config::Config;
use crate::models::user::ProfileField;
use crate::workflow::auth::AuthState;
use crate::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Assistant client v{}", env!("CARGO_PKG_VERSION"));

    let demo = config.demo_mode || std::env::args().any(|arg| arg == "--demo");
    let api: Arc<dyn JobAssistantApi> = if demo {
        info!("Demo mode: canned collaborator, no network calls");
        Arc::new(FakeApi::new())
    } else {
        info!("Backend: {}", config.api_base_url);
        Arc::new(HttpApi::new(&config))
    };

    let mut workflow = Workflow::new(api);
    workflow.check_session().await;

    run(&mut workflow).await
}

/// Reads a candidate résumé from disk, returning its bare filename and bytes.
fn read_candidate(path: &str) -> std::io::Result<(String, Vec<u8>)> {
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let bytes = std::fs::read(path)?;
    Ok((name, bytes))
}

/// Minimal interactive driver. All decisions live in the coordinator; this
/// loop only renders state and relays commands.
async fn run(workflow: &mut Workflow) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Job Assistant. Type 'help' for commands, 'quit' to exit.");
    loop {
        match workflow.state().auth.user() {
            Some(user) => print!("{} > ", user.email),
            None => print!("signed out > "),
        }
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(email), Some(password)) => {
                        workflow.login(email, password).await;
                    }
                    _ => println!("usage: login <email> <password>"),
                }
            }
            "google" => {
                println!("Open in your browser: {}", workflow.provider_login_url());
                println!("Then restart the client to pick up the new session.");
            }
            "logout" => workflow.logout().await,
            "file" => match read_candidate(rest) {
                Ok((name, bytes)) => workflow.select_file(&name, bytes),
                Err(e) => println!("cannot read {rest}: {e}"),
            },
            "upload" => workflow.upload_resume().await,
            "search" => {
                // `search <query> @ <location>`; defaults to a canned
                // help-desk search
                let (query, location) = match rest.split_once('@') {
                    Some((q, l)) => (q.trim(), l.trim()),
                    None if !rest.is_empty() => (rest, "Remote"),
                    None => ("Help Desk Technician", "Remote"),
                };
                workflow.search_jobs(query, location).await;
            }
            "pick" => match rest.parse::<usize>() {
                Ok(index) if index >= 1 && index <= workflow.state().jobs.len() => {
                    let title = workflow.state().jobs[index - 1].title.clone();
                    workflow.select_job(&title);
                }
                _ => println!("usage: pick <result number>"),
            },
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match ProfileField::parse(field) {
                    Some(field) => workflow.set_profile_field(field, value.trim()),
                    None => println!(
                        "unknown field '{field}' (name, email, phone, location, \
                         linkedin, experience, education, certs)"
                    ),
                }
            }
            "generate" => workflow.generate().await,
            "show" => render(workflow),
            "dismiss" => workflow.dismiss_notice(),
            _ => println!("unknown command '{command}', try 'help'"),
        }

        if let Some(message) = workflow.current_notice() {
            println!("! {message}");
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
  login <email> <password>   sign in
  google                     provider sign-in hand-off
  logout                     sign out and reset the session
  file <path>                stage a resume PDF
  upload                     upload the staged resume
  search [query] [@ loc]     search job postings
  pick <n>                   select a search result
  set <field> <value>        edit profile (name/email/phone are required)
  generate                   generate a tailored resume
  show                       print the workflow state
  dismiss                    dismiss the current notice
  quit                       exit"
    );
}

fn render(workflow: &Workflow) {
    let state = workflow.state();

    match &state.auth {
        AuthState::Authenticated(session) => println!("signed in as {}", session.user.email),
        other => println!("auth: {other:?}"),
    }
    match &state.pending_file {
        Some(file) => println!("staged file: {} ({} bytes)", file.name, file.bytes.len()),
        None => println!("staged file: none"),
    }
    match &state.resume {
        Some(resume) => println!(
            "resume: {} (skills: {})",
            resume.filename,
            resume.skills.join(", ")
        ),
        None => println!("resume: not uploaded"),
    }
    if state.jobs.is_empty() {
        println!("jobs: none");
    } else {
        for (index, job) in state.jobs.iter().enumerate() {
            let marker = if state.selected_job.as_deref() == Some(job.title.as_str()) {
                "*"
            } else {
                " "
            };
            let company = job.company.as_deref().unwrap_or("-");
            println!("{marker} {}. {} ({company}) {}", index + 1, job.title, job.link);
        }
    }
    println!(
        "profile: {} ({})",
        if state.profile.required_complete() {
            "complete"
        } else {
            "missing required fields"
        },
        if workflow.can_generate() {
            "ready to generate"
        } else {
            "not ready to generate"
        }
    );
    if let Some(generated) = &state.generated {
        println!("--- generated resume ---\n{}", generated.text);
    }
}
