//! Votos e estratégias de agregação.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::VotumError;

/// Nomes canônicos das estratégias aceitas.
pub const VALID_STRATEGIES: [&str; 4] =
    ["first_to_ahead_by_k", "unanimous", "majority", "weighted"];

/// Nomes canônicos dos votos aceitos.
pub const VALID_VOTES: [&str; 3] = ["approve", "reject", "abstain"];

/// Voto individual de um agente.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    /// Aprova a proposição.
    Approve,
    /// Rejeita a proposição.
    Reject,
    /// Não opina; nunca vira decisão.
    Abstain,
}

impl Vote {
    /// Forma canônica (minúscula) do voto.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Approve => "approve",
            Vote::Reject => "reject",
            Vote::Abstain => "abstain",
        }
    }
}

impl FromStr for Vote {
    type Err = VotumError;

    /// Aceita qualquer capitalização (`APPROVE`, `Reject`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approve" => Ok(Vote::Approve),
            "reject" => Ok(Vote::Reject),
            "abstain" => Ok(Vote::Abstain),
            other => Err(VotumError::invalid_input(format!(
                "Invalid vote: {}. Must be one of {:?}",
                other, VALID_VOTES
            ))),
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Estratégia de agregação.
///
/// A desserialização passa por [`FromStr`], então o nome é aceito em
/// qualquer caixa também no arquivo de configuração.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum Strategy {
    /// Sequencial: vence o primeiro lado a abrir `k` votos de vantagem.
    #[serde(rename = "first_to_ahead_by_k")]
    FirstToAheadByK,
    /// Qualquer reject desqualifica.
    #[serde(rename = "unanimous")]
    Unanimous,
    /// Maioria simples dos votos não-abstain.
    #[serde(rename = "majority")]
    Majority,
    /// Soma de pesos por categoria.
    #[serde(rename = "weighted")]
    Weighted,
}

impl Strategy {
    /// Todas as estratégias, na ordem canônica.
    pub const ALL: [Strategy; 4] = [
        Strategy::FirstToAheadByK,
        Strategy::Unanimous,
        Strategy::Majority,
        Strategy::Weighted,
    ];

    /// Nome canônico da estratégia.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::FirstToAheadByK => "first_to_ahead_by_k",
            Strategy::Unanimous => "unanimous",
            Strategy::Majority => "majority",
            Strategy::Weighted => "weighted",
        }
    }

    /// Descrição curta, usada por `votum strategies`.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::FirstToAheadByK => {
                "first side to lead by k net votes wins; stops early (tie -> reject)"
            }
            Strategy::Unanimous => "any reject disqualifies; needs at least one approve",
            Strategy::Majority => "strict majority of non-abstain votes (tie -> reject)",
            Strategy::Weighted => "strictly greater summed weight wins (tie -> reject)",
        }
    }

    /// Se a estratégia usa o limiar `k`.
    pub fn uses_threshold(&self) -> bool {
        matches!(self, Strategy::FirstToAheadByK)
    }
}

impl FromStr for Strategy {
    type Err = VotumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == lowered)
            .ok_or_else(|| {
                VotumError::invalid_input(format!(
                    "Invalid strategy: {}. Must be one of {:?}",
                    lowered, VALID_STRATEGIES
                ))
            })
    }
}

impl TryFrom<String> for Strategy {
    type Error = VotumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
