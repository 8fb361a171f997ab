//! # Votum
//!
//! Agregação de votos de múltiplos agentes.
//!
//! Votum recebe a sequência ordenada de votos (approve, reject, abstain)
//! de vários agentes avaliando a mesma proposição e produz uma decisão
//! binária, junto com a trilha de como ela foi alcançada.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`consensus`] - Estratégias de agregação e motor de consenso
//! - [`types`] - Tipos compartilhados

#[cfg(feature = "cli")]
pub mod cli;
pub mod consensus;
pub mod types;

pub use consensus::{ConsensusEngine, VoteAggregator};
pub use types::config::Config;
pub use types::errors::{VotumError, VotumResult};
pub use types::responses::{AggregationReport, Decision, Metadata};
pub use types::votes::{Strategy, Vote};
