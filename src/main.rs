use chrono::Utc;
use clap::Parser;

use open_prs::config::SettingsError;
use open_prs::output::{Palette, RenderContext};

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_CONFIG: i32 = 2;
const EXIT_CONFIG_NOT_FOUND: i32 = 3;
const EXIT_NETWORK: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "open-prs")]
#[command(about = "List open pull requests of GitHub users in selected repositories")]
#[command(long_about = r#"open-prs - List open pull requests of GitHub users in selected repositories

Settings are read from the last existing file of:
    ./.open_prs.toml, ./open_prs.toml, ~/.open_prs.toml,
    ~/.config/open_prs.toml, /etc/open_prs.toml

    usernames = ["bob", "alice"]
    repos = ["foo/prj", "bar/prj"]
    github_token = "..."        # optional, else $GITHUB_TOKEN_GALAXY
    stale_after_days = 14       # optional
    github_api_url = "..."      # optional, default https://api.github.com"#)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose { "warn,open_prs=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = run().await;
    std::process::exit(code);
}

/// Run the report and return the process exit code
async fn run() -> i32 {
    let settings = match open_prs::config::load_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return match e {
                SettingsError::NotFound { .. } => EXIT_CONFIG_NOT_FOUND,
                _ => EXIT_CONFIG,
            };
        }
    };

    tracing::debug!(
        "Loaded {} usernames and {} repos from settings",
        settings.usernames.len(),
        settings.repos.len()
    );

    let token = match open_prs::credentials::resolve_token_from_env(settings.github_token.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_AUTH;
        }
    };

    let client = match open_prs::github::create_client_with_base_uri(&token, &settings.github_api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {:#}", e);
            return EXIT_NETWORK;
        }
    };

    let ctx = RenderContext {
        palette: Palette::new(open_prs::output::should_use_colors()),
        now: Utc::now(),
        stale_after_days: settings.stale_after_days,
    };

    let mut stdout = std::io::stdout().lock();
    let summary = match open_prs::fetch::fetch_and_render(&client, &settings, &ctx, &mut stdout).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{:#}", e);
            return EXIT_NETWORK;
        }
    };

    if !summary.all_succeeded() {
        eprintln!(
            "Could not fetch pull requests for: {}",
            summary.failed.join(", ")
        );
        return EXIT_NETWORK;
    }

    EXIT_SUCCESS
}
