//! Tipos de resposta do Votum.

use serde::{Deserialize, Serialize};

use super::votes::{Strategy, Vote};

/// Código de saída quando a decisão é approve.
pub const EXIT_APPROVE: i32 = 0;

/// Código de saída quando a decisão é reject.
pub const EXIT_REJECT: i32 = 1;

/// Decisão final da agregação.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Aprovado.
    Approve,
    /// Rejeitado. Também é o desfecho de qualquer empate.
    Reject,
}

impl Decision {
    /// Forma canônica da decisão.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }

    /// Código de saída do processo para esta decisão.
    pub fn exit_code(&self) -> i32 {
        match self {
            Decision::Approve => EXIT_APPROVE,
            Decision::Reject => EXIT_REJECT,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Metadados da estratégia `first_to_ahead_by_k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialMetadata {
    /// Votos consumidos até a parada.
    pub votes_used: usize,

    /// Total de votos recebidos.
    pub total_votes: usize,

    pub approve_count: usize,
    pub reject_count: usize,

    /// Limiar `k` usado.
    pub k_threshold: i64,

    /// `approve - reject` na parada; em módulo quando não houve parada.
    pub margin: i64,

    /// Se parou antes de consumir todos os votos.
    pub early_stop: bool,

    /// Se o empate final foi resolvido como reject.
    pub tie_broken: bool,
}

/// Metadados da estratégia `unanimous`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnanimousMetadata {
    pub votes_used: usize,
    pub total_votes: usize,
    pub approve_count: usize,
    pub reject_count: usize,
    pub abstain_count: usize,

    /// Nenhum reject e ao menos um approve.
    pub unanimous: bool,
}

/// Metadados da estratégia `majority`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorityMetadata {
    pub votes_used: usize,
    pub total_votes: usize,
    pub approve_count: usize,
    pub reject_count: usize,
    pub abstain_count: usize,

    /// Percentual de approve entre os votos não-abstain (0-100).
    pub percentage: f64,

    /// Empate entre approve e reject com ao menos um voto decisivo.
    pub tie: bool,
}

/// Metadados da estratégia `weighted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMetadata {
    pub votes_used: usize,
    pub total_votes: usize,
    pub approve_weight: f64,
    pub reject_weight: f64,
    pub abstain_weight: f64,

    /// `approve_weight + reject_weight`; o peso de abstain fica fora.
    pub total_weight: f64,

    /// Percentual do peso de approve sobre `total_weight` (0-100).
    pub percentage: f64,
}

/// Metadados de uma agregação, um formato por estratégia.
///
/// Serializa sem tag: o documento JSON resultante é plano, com os
/// mesmos campos que cada estratégia produz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metadata {
    FirstToAheadByK(SequentialMetadata),
    Unanimous(UnanimousMetadata),
    Majority(MajorityMetadata),
    Weighted(WeightedMetadata),
}

impl Metadata {
    /// Estratégia que produziu estes metadados.
    pub fn strategy(&self) -> Strategy {
        match self {
            Metadata::FirstToAheadByK(_) => Strategy::FirstToAheadByK,
            Metadata::Unanimous(_) => Strategy::Unanimous,
            Metadata::Majority(_) => Strategy::Majority,
            Metadata::Weighted(_) => Strategy::Weighted,
        }
    }

    pub fn votes_used(&self) -> usize {
        match self {
            Metadata::FirstToAheadByK(m) => m.votes_used,
            Metadata::Unanimous(m) => m.votes_used,
            Metadata::Majority(m) => m.votes_used,
            Metadata::Weighted(m) => m.votes_used,
        }
    }

    pub fn total_votes(&self) -> usize {
        match self {
            Metadata::FirstToAheadByK(m) => m.total_votes,
            Metadata::Unanimous(m) => m.total_votes,
            Metadata::Majority(m) => m.total_votes,
            Metadata::Weighted(m) => m.total_votes,
        }
    }

    /// Apenas a estratégia sequencial pode parar cedo.
    pub fn early_stop(&self) -> bool {
        match self {
            Metadata::FirstToAheadByK(m) => m.early_stop,
            _ => false,
        }
    }
}

/// Registro completo de uma agregação, pronto para serializar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationReport {
    /// Decisão final.
    pub decision: Decision,

    /// Estratégia aplicada.
    pub strategy: Strategy,

    /// Votos normalizados, em ordem de submissão.
    pub votes: Vec<Vote>,

    /// Como a decisão foi alcançada.
    pub metadata: Metadata,
}

impl AggregationReport {
    /// Resumo curto para o terminal.
    ///
    /// ```text
    /// Decision: approve
    ///   Early stop at 2/3 votes
    ///   Approve: 2, Reject: 0, Margin: 2
    /// ```
    pub fn summary(&self) -> String {
        let mut summary = format!("Decision: {}\n", self.decision);

        if self.metadata.early_stop() {
            summary.push_str(&format!(
                "  Early stop at {}/{} votes\n",
                self.metadata.votes_used(),
                self.metadata.total_votes()
            ));
        }

        if let Metadata::FirstToAheadByK(m) = &self.metadata {
            summary.push_str(&format!(
                "  Approve: {}, Reject: {}, Margin: {}\n",
                m.approve_count, m.reject_count, m.margin
            ));
        }

        summary
    }
}
