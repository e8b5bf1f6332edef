use argh::FromArgs;
use portfolio_terminal::{Config, Interpreter, Profile};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Interactive portfolio terminal.
struct Args {
    #[argh(option)]
    /// TOML profile with extra commands and identity fields
    profile: Option<PathBuf>,

    #[argh(option)]
    /// name shown in the prompt
    username: Option<String>,

    #[argh(option)]
    /// host shown in the prompt
    hostname: Option<String>,

    #[argh(option)]
    /// welcome message printed at start
    message: Option<String>,

    #[argh(option, default = "String::from(\"warn\")")]
    /// tracing filter, e.g. "debug" or "portfolio_terminal=info"
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.profile {
        Some(path) => Profile::load(path)?.into_config(),
        None => Config::default(),
    };
    if let Some(username) = args.username {
        config = config.with_username(username);
    }
    if let Some(hostname) = args.hostname {
        config = config.with_hostname(hostname);
    }
    if let Some(message) = args.message {
        config = config.with_initial_message(message);
    }

    Interpreter::new(config).repl()?;
    Ok(())
}
