//! Motor de consenso do Votum.
//!
//! Este módulo agrega votos de múltiplos agentes em uma única
//! decisão (approve ou reject), junto com os metadados que explicam
//! como a decisão foi alcançada.
//!
//! ## Estratégias
//!
//! - **first_to_ahead_by_k**: sequencial; o primeiro lado a abrir `k`
//!   votos de vantagem vence e o restante não é consumido
//! - **unanimous**: qualquer reject desqualifica
//! - **majority**: maioria estrita dos votos não-abstain
//! - **weighted**: maior soma de pesos
//!
//! Empates sempre resolvem para reject.
//!
//! ## Exemplo
//!
//! ```rust
//! use votum::consensus::VoteAggregator;
//! use votum::types::responses::Decision;
//!
//! let aggregator =
//!     VoteAggregator::new(&["approve", "approve", "reject"], "first_to_ahead_by_k", 2, None)?;
//! let (decision, metadata) = aggregator.aggregate();
//!
//! assert_eq!(decision, Decision::Approve);
//! assert_eq!(metadata.votes_used(), 2);
//! # Ok::<(), votum::VotumError>(())
//! ```

mod aggregator;
mod engine;
pub mod rules;

pub use aggregator::VoteAggregator;
pub use engine::ConsensusEngine;
pub use rules::Tally;
