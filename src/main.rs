use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use votum::cli::{commands, Cli, Commands};
use votum::types::config::Config;
use votum::VotumResult;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let (config, config_error) = commands::load_config(&cli.config);

    init_logging(&cli, &config);

    if let Some(e) = config_error {
        tracing::warn!(
            "Configuração inválida em {}, usando padrão: {}",
            cli.config.display(),
            e
        );
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match run(cli.command, &config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Executa o comando e devolve o código de saída.
fn run(command: Commands, config: &Config) -> VotumResult<i32> {
    match command {
        Commands::Aggregate(args) => {
            let decision = commands::aggregate(&args, config)?;
            Ok(decision.exit_code())
        }
        Commands::Init { path } => {
            commands::init(path)?;
            Ok(0)
        }
        Commands::Strategies => {
            commands::strategies(config);
            Ok(0)
        }
        Commands::Version => {
            commands::version();
            Ok(0)
        }
    }
}

fn init_logging(cli: &Cli, config: &Config) {
    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.debug {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("votum={}", log_level)
            .parse()
            .unwrap_or_else(|_| "votum=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);

    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
