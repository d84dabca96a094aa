use std::path::Path;

use colored::Colorize;
use microblog_server::{MicroblogServer, ServerConfig};

use crate::cli::{Cli, Command, ConfigArgs, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::load(path)?),
        None => Ok(ServerConfig::default()),
    }
}

fn serve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(path) = &args.event_log {
        config.service.events.path = path.clone();
    }
    if args.quiet_events {
        config.service.events.mirror_stdout = false;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(&args)?;
    println!(
        "{} Microblog server on {} (events: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.service.events.path.display().to_string().cyan()
    );
    MicroblogServer::new(config).serve().await?;
    println!("{} Shut down cleanly.", "✓".green());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("microblog.toml");
        std::fs::write(&file, "bind_addr = \"127.0.0.1:7000\"\nshutdown_timeout_secs = 2\n").unwrap();

        let cli = Cli::try_parse_from([
            "microblog", "serve", "-c", file.to_str().unwrap(), "--event-log", "audit.log", "--quiet-events",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command else { panic!("wrong command") };
        let config = serve_config(&args).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(config.shutdown_timeout_secs, 2);
        assert_eq!(config.service.events.path, PathBuf::from("audit.log"));
        assert!(!config.service.events.mirror_stdout);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/microblog.toml"))).is_err());
    }
}
