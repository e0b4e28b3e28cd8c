mod views;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use session::config::ConfigError;
use session::pages::dashboard;
use session::pages::login::{LoginForm, LoginPage};
use session::pages::register::{RegisterForm, RegisterPage};
use session::routes::{self, Route};
use session::{ApiError, ClientConfig, FileStorage, HttpAuthApi, SessionStore};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("auth service unavailable: {0}")]
    Api(#[from] ApiError),
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("not logged in; run `authflow login` first")]
    NotLoggedIn,
}

#[derive(Parser, Debug)]
#[command(name = "authflow", about = "Log in, register, and inspect the current auth session")]
struct Cli {
    #[arg(long, env = "AUTH_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "AUTH_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show whether a session is active and where the app would land.
    Status,
    Login(LoginArgs),
    Register(RegisterArgs),
    Dashboard,
    Logout,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,

    /// Read from stdin when omitted.
    #[arg(long, env = "AUTHFLOW_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "AUTHFLOW_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, state_dir = %config.state_dir.display(), "config loaded");

    let storage = Arc::new(FileStorage::new(&config.state_dir));
    let api = Arc::new(HttpAuthApi::new(&config, storage.clone())?);
    let store = SessionStore::new(api.clone(), storage);
    let state = store.initialize().await;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Status => {
            views::render_status(&mut out, &state)?;
            Ok(())
        }
        Command::Login(args) => {
            let password = password_or_prompt(args.password)?;
            let mut page = LoginPage::with_form(LoginForm { username: args.username, password });
            match page.submit(api.as_ref(), &store).await {
                Some(route) => {
                    views::render_route(&mut out, route, &store.state())?;
                    Ok(())
                }
                None => Err(CliError::Rejected(page.error().unwrap_or_default().to_owned())),
            }
        }
        Command::Register(args) => {
            let password = password_or_prompt(args.password)?;
            let mut page = RegisterPage::with_form(RegisterForm {
                username: args.username,
                email: args.email,
                password,
            });
            match page.submit(api.as_ref()).await {
                Some(route) => {
                    if let Some(notice) = page.notice() {
                        writeln!(out, "{notice}")?;
                    }
                    views::render_route(&mut out, route, &store.state())?;
                    Ok(())
                }
                None => Err(CliError::Rejected(page.error().unwrap_or_default().to_owned())),
            }
        }
        Command::Dashboard => match routes::resolve(Route::Dashboard, &state) {
            Some(Route::Dashboard) => {
                views::render_route(&mut out, Route::Dashboard, &state)?;
                Ok(())
            }
            _ => Err(CliError::NotLoggedIn),
        },
        Command::Logout => {
            let next = dashboard::logout(&store);
            writeln!(out, "Logged out.")?;
            views::render_route(&mut out, next, &store.state())?;
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(dir) = &cli.state_dir {
        config.state_dir.clone_from(dir);
    }
    Ok(config)
}

fn password_or_prompt(password: Option<String>) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
