//! Implementação dos comandos CLI do Votum.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::AggregateArgs;
use crate::consensus::ConsensusEngine;
use crate::types::config::{Config, DEFAULT_CONFIG_FILE};
use crate::types::responses::Decision;
use crate::types::votes::Strategy;
use crate::{VotumError, VotumResult};

/// Agrega votos e devolve a decisão.
///
/// O chamador converte a decisão em código de saída.
pub fn aggregate(args: &AggregateArgs, config: &Config) -> VotumResult<Decision> {
    let votes: Vec<String> = parse_json_array(&args.votes, "--votes")?;
    let weights: Option<Vec<f64>> = args
        .weights
        .as_deref()
        .map(|raw| parse_json_array(raw, "--weights"))
        .transpose()?;

    tracing::debug!(
        votes = votes.len(),
        strategy = ?args.strategy,
        k = ?args.k,
        weighted = weights.is_some(),
        "Entrada recebida"
    );

    let engine = ConsensusEngine::new(config.consensus.clone());
    let report = engine.evaluate(
        votes.as_slice(),
        args.strategy.as_deref(),
        args.k,
        weights.as_deref(),
    )?;

    if let Some(output) = &args.output {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(output, content)?;
        tracing::info!("Relatório gravado em: {}", output.display());
    }

    if args.verbose {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.summary());
    }

    Ok(report.decision)
}

/// Lê um array JSON, inline ou de arquivo quando começa com `@`.
fn parse_json_array<T: DeserializeOwned>(raw: &str, flag: &str) -> VotumResult<Vec<T>> {
    let content = match raw.strip_prefix('@') {
        Some(file_path) => std::fs::read_to_string(file_path)?,
        None => raw.to_string(),
    };

    let value: serde_json::Value = serde_json::from_str(&content)?;
    if !value.is_array() {
        return Err(VotumError::invalid_input(format!(
            "{} must be a JSON array",
            flag
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| VotumError::invalid_input(format!("{} has an invalid element: {}", flag, e)))
}

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> VotumResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Votum initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. List strategies: votum strategies");
    println!(
        "  2. Aggregate: votum aggregate --votes '[\"approve\",\"reject\"]' --strategy majority"
    );

    Ok(())
}

/// Lista as estratégias disponíveis.
pub fn strategies(config: &Config) {
    println!("Estratégias disponíveis:\n");

    for strategy in Strategy::ALL {
        let marker = if strategy == config.consensus.default_strategy {
            "*"
        } else {
            " "
        };
        println!("  {} {:<20} {}", marker, strategy, strategy.description());
    }

    println!();
    println!("* padrão (k = {})", config.consensus.k);
}

/// Mostra versão.
pub fn version() {
    println!("votum {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Agregação de votos de múltiplos agentes");
}

/// Carrega a configuração; arquivo ausente ou inválido vira padrão.
///
/// Devolve também o erro de carga, para ser logado depois que o
/// subscriber estiver instalado.
pub fn load_config(path: &Path) -> (Config, Option<VotumError>) {
    if !path.exists() {
        return (Config::default_config(), None);
    }

    match Config::load(path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default_config(), Some(e)),
    }
}
