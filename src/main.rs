//! GitLab Commit Stats - commit statistics service for a GitLab project
//!
//! # Usage
//! ```bash
//! gitlab-stats                           # Start server on port 8000
//! gitlab-stats --port 9000               # Start on a different port
//! gitlab-stats show <tab-url> -w weekly  # Popup view in the terminal
//! gitlab-stats status                    # Check if running
//! gitlab-stats kill                      # Stop running instance
//! ```

mod config;
mod error;
mod gitlab;
mod models;
mod popup;
mod routes;
mod stats;

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use gitlab::GitLabClient;
use models::CommitStats;
use popup::{PanelView, Phase, Popup};
use stats::{extract_project_name, TimeWindow};

/// GitLab Commit Stats - per-contributor commit counts for a GitLab project
#[derive(Parser)]
#[command(name = "gitlab-stats")]
#[command(about = "Commit statistics service for a GitLab project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port to run the server on
    #[arg(short, long, default_value = "8000")]
    port: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the popup view for a GitLab tab URL in the terminal
    Show {
        /// URL of the GitLab project page, as seen in the browser tab
        url: String,

        /// Time window to approximate
        #[arg(short, long, default_value = "all")]
        window: TimeWindow,

        /// Base URL of a running gitlab-stats server
        #[arg(short, long, default_value = "http://127.0.0.1:8000")]
        server: String,

        /// Show the ranked contributor list instead of chart slices
        #[arg(short, long)]
        contributors: bool,
    },
    /// Check if gitlab-stats is currently running
    Status,
    /// Stop the running gitlab-stats instance
    Kill,
}

/// PID file info stored as JSON
#[derive(serde::Serialize, serde::Deserialize)]
struct PidInfo {
    pid: u32,
    project_id: u64,
    port: u16,
}

fn get_pid_file_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("gitlab-stats.pid");
    path
}

fn read_pid_info() -> Option<PidInfo> {
    let path = get_pid_file_path();
    let mut file = fs::File::open(&path).ok()?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).ok()?;
    serde_json::from_str(&contents).ok()
}

fn write_pid_info(info: &PidInfo) -> anyhow::Result<()> {
    let path = get_pid_file_path();
    let mut file = fs::File::create(&path)?;
    file.write_all(serde_json::to_string(info)?.as_bytes())?;
    Ok(())
}

fn remove_pid_file() {
    let _ = fs::remove_file(get_pid_file_path());
}

#[cfg(unix)]
fn is_process_running(pid: u32) -> bool {
    // On Unix, sending signal 0 checks if process exists
    unsafe { libc::kill(pid as i32, 0) == 0 }
}

#[cfg(windows)]
fn is_process_running(pid: u32) -> bool {
    use std::process::Command;
    // On Windows, check if process exists using tasklist
    Command::new("tasklist")
        .args(&["/FI", &format!("PID eq {}", pid), "/NH"])
        .output()
        .map(|output| {
            let output_str = String::from_utf8_lossy(&output.stdout);
            output_str.contains(&pid.to_string())
        })
        .unwrap_or(false)
}

#[cfg(unix)]
fn kill_process(pid: u32) -> bool {
    unsafe { libc::kill(pid as i32, libc::SIGTERM) == 0 }
}

#[cfg(windows)]
fn kill_process(pid: u32) -> bool {
    use std::process::Command;
    // On Windows, use taskkill
    Command::new("taskkill")
        .args(&["/PID", &pid.to_string(), "/F"])
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn handle_status() {
    match read_pid_info() {
        Some(info) => {
            if is_process_running(info.pid) {
                println!("✓ gitlab-stats is running");
                println!("  PID:     {}", info.pid);
                println!("  Project: {}", info.project_id);
                println!("  URL:     http://127.0.0.1:{}", info.port);
            } else {
                println!("✗ gitlab-stats is not running (stale PID file)");
                remove_pid_file();
            }
        }
        None => {
            println!("✗ gitlab-stats is not running");
        }
    }
}

fn handle_kill() {
    match read_pid_info() {
        Some(info) => {
            if is_process_running(info.pid) {
                if kill_process(info.pid) {
                    println!("✓ Stopped gitlab-stats (PID {})", info.pid);
                    remove_pid_file();
                } else {
                    println!("✗ Failed to stop gitlab-stats (PID {})", info.pid);
                }
            } else {
                println!("✗ gitlab-stats is not running (stale PID file)");
                remove_pid_file();
            }
        }
        None => {
            println!("✗ gitlab-stats is not running");
        }
    }
}

/// The popup flow, terminal edition: extract the project name from the tab
/// URL, fetch the summary from a running server, drive the popup container
/// and print what it renders.
async fn handle_show(url: &str, window: TimeWindow, server: &str, contributors: bool) {
    let Some(project) = extract_project_name(url) else {
        eprintln!("✗ No GitLab project detected");
        eprintln!("  URL: {}", url);
        std::process::exit(1);
    };

    let mut popup = Popup::new();
    popup.set_window(window);
    if contributors {
        popup.set_panel(PanelView::Contributors);
    }

    popup.start_loading();
    match fetch_stats(server, &project).await {
        Ok(stats) => popup.resolve(stats),
        Err(e) => popup.fail(e.to_string()),
    }

    if let Phase::Failed(message) = popup.phase() {
        eprintln!("✗ Failed to fetch data: {}", message);
        eprintln!("  Is the server running? Try 'gitlab-stats status'.");
        std::process::exit(1);
    }

    let Some(view) = popup.render() else {
        eprintln!("✗ No data received");
        std::process::exit(1);
    };

    println!();
    println!("  GitLab Stats - {}", project);
    println!(
        "  Window: {}   Total commits: {}   Contributors: {}",
        view.window, view.total_commits, view.contributors
    );
    println!();

    if view.slices.is_empty() {
        println!("  (no commit data)");
        return;
    }

    match view.panel {
        PanelView::Chart => {
            for slice in &view.slices {
                let color = view
                    .config
                    .get(&slice.name)
                    .map(|style| style.color.as_str())
                    .unwrap_or("#ccc");
                println!("  {}  {:>6}  {}", color, slice.value, slice.name);
            }
        }
        PanelView::Contributors => {
            for (index, slice) in view.slices.iter().enumerate() {
                println!(
                    "  {:>2}. {}  ({} commits)",
                    index + 1,
                    slice.name,
                    slice.value
                );
            }
        }
    }
}

async fn fetch_stats(server: &str, project: &str) -> anyhow::Result<CommitStats> {
    let endpoint = format!("{}/commits", server.trim_end_matches('/'));
    let response = reqwest::Client::new()
        .get(&endpoint)
        .query(&[("project", project)])
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("server responded with status: {}", response.status());
    }

    Ok(response.json().await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Show {
            url,
            window,
            server,
            contributors,
        }) => {
            handle_show(&url, window, &server, contributors).await;
            return Ok(());
        }
        Some(Commands::Status) => {
            handle_status();
            return Ok(());
        }
        Some(Commands::Kill) => {
            handle_kill();
            return Ok(());
        }
        None => {}
    }

    // Check if already running
    if let Some(info) = read_pid_info() {
        if is_process_running(info.pid) {
            eprintln!("✗ gitlab-stats is already running (PID {})", info.pid);
            eprintln!("  Project: {}", info.project_id);
            eprintln!("  URL:     http://127.0.0.1:{}", info.port);
            eprintln!();
            eprintln!("Run 'gitlab-stats kill' to stop it first.");
            std::process::exit(1);
        } else {
            remove_pid_file();
        }
    }

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load GitLab credentials and build the API client
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("✗ {}", e);
            eprintln!("  Set GITLAB_API, GITLAB_TOKEN and GITLAB_PROJECT_ID (.env is read).");
            std::process::exit(1);
        }
    };

    let client = match GitLabClient::new(&config) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("✗ Failed to build GitLab client: {}", e);
            std::process::exit(1);
        }
    };

    // CORS configuration - the popup calls from a browser extension origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .merge(routes::create_router(client))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Bind to the port
    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", cli.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    // Write PID file
    let pid_info = PidInfo {
        pid: std::process::id(),
        project_id: config.project_id,
        port: cli.port,
    };
    write_pid_info(&pid_info)?;

    // Print startup message
    let url = format!("http://127.0.0.1:{}", cli.port);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │             GitLab Commit Stats             │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Project id: {}", config.project_id);
    println!("  Server:     {}", url);
    println!();
    println!("  Commands:");
    println!("    gitlab-stats show <url>  - Popup view in the terminal");
    println!("    gitlab-stats status      - Check if running");
    println!("    gitlab-stats kill        - Stop the server");
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n  Shutting down...");
        remove_pid_file();
    };

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
