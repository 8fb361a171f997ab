//! Interface de linha de comando do Votum.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::DEFAULT_CONFIG_FILE;

const AGGREGATE_EXAMPLES: &str = r#"Examples:
  votum aggregate --votes '["approve","approve","reject"]' --strategy first_to_ahead_by_k --k 2
  votum aggregate --votes '["approve","approve","approve"]' --strategy unanimous
  votum aggregate --votes '["approve","reject","approve"]' --strategy majority
  votum aggregate --votes '["approve","reject","approve"]' --strategy weighted --weights '[1.5,1.0,1.2]'"#;

/// Votum - agregação de votos de múltiplos agentes.
#[derive(Parser, Debug)]
#[command(name = "votum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Logs em nível debug.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Modo silencioso (apenas erros no log).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Agrega votos e sai com 0 (approve), 1 (reject) ou 2 (erro).
    #[command(after_help = AGGREGATE_EXAMPLES)]
    Aggregate(AggregateArgs),

    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Lista as estratégias disponíveis.
    Strategies,

    /// Mostra versão.
    Version,
}

/// Argumentos de `votum aggregate`.
#[derive(Args, Debug, Clone)]
pub struct AggregateArgs {
    /// Array JSON de votos (`["approve","reject",...]`) ou `@arquivo`.
    #[arg(long)]
    pub votes: String,

    /// Estratégia (padrão: consensus.default_strategy do config).
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Limiar k para first_to_ahead_by_k (padrão: consensus.k do config).
    #[arg(long, allow_negative_numbers = true)]
    pub k: Option<i64>,

    /// Array JSON de pesos, alinhado com os votos, ou `@arquivo`.
    #[arg(short, long)]
    pub weights: Option<String>,

    /// Arquivo para gravar o relatório completo (JSON).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Imprime o relatório completo em JSON no lugar do resumo.
    #[arg(short, long)]
    pub verbose: bool,
}
