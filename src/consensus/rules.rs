//! Regras de agregação do Votum.
//!
//! Uma função por estratégia. Todas recebem votos já validados e são
//! totais: não existe caminho de erro depois da validação.
//!
//! - `first_to_ahead_by_k`: sequencial, para ao abrir vantagem `k`
//! - `unanimous`: qualquer reject desqualifica
//! - `majority`: maioria estrita dos votos não-abstain
//! - `weighted`: maior soma de pesos

use crate::types::responses::{
    Decision, MajorityMetadata, SequentialMetadata, UnanimousMetadata, WeightedMetadata,
};
use crate::types::votes::Vote;

/// Contagem de votos por categoria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub approve: usize,
    pub reject: usize,
    pub abstain: usize,
}

impl Tally {
    /// Conta todos os votos, sem depender da ordem.
    pub fn count(votes: &[Vote]) -> Self {
        votes.iter().fold(Self::default(), |mut tally, vote| {
            tally.record(*vote);
            tally
        })
    }

    fn record(&mut self, vote: Vote) {
        match vote {
            Vote::Approve => self.approve += 1,
            Vote::Reject => self.reject += 1,
            Vote::Abstain => self.abstain += 1,
        }
    }

    /// Votos que de fato opinam.
    pub fn decisive(&self) -> usize {
        self.approve + self.reject
    }

    /// `approve - reject`, com sinal.
    pub fn margin(&self) -> i64 {
        self.approve as i64 - self.reject as i64
    }

    /// Maioria estrita; empate resolve para reject.
    fn strict_winner(&self) -> Decision {
        if self.approve > self.reject {
            Decision::Approve
        } else {
            Decision::Reject
        }
    }
}

/// Primeiro a abrir `k` votos de vantagem vence.
///
/// Consome os votos em ordem. Abstain não altera os contadores, mas conta
/// em `votes_used`. Se ninguém atingir o limiar, decide pela contagem
/// final, com empate virando reject.
pub fn first_to_ahead_by_k(votes: &[Vote], k: i64) -> (Decision, SequentialMetadata) {
    let total_votes = votes.len();
    let mut tally = Tally::default();

    for (index, vote) in votes.iter().enumerate() {
        tally.record(*vote);
        let votes_used = index + 1;
        let margin = tally.margin();

        tracing::trace!(votes_used, vote = %vote, margin, "voto consumido");

        let decision = if margin >= k {
            Some(Decision::Approve)
        } else if margin <= -k {
            Some(Decision::Reject)
        } else {
            None
        };

        if let Some(decision) = decision {
            let metadata = SequentialMetadata {
                votes_used,
                total_votes,
                approve_count: tally.approve,
                reject_count: tally.reject,
                k_threshold: k,
                margin,
                early_stop: votes_used < total_votes,
                tie_broken: false,
            };
            return (decision, metadata);
        }
    }

    // Nenhum lado abriu vantagem k
    let metadata = SequentialMetadata {
        votes_used: total_votes,
        total_votes,
        approve_count: tally.approve,
        reject_count: tally.reject,
        k_threshold: k,
        margin: tally.margin().abs(),
        early_stop: false,
        tie_broken: tally.approve == tally.reject,
    };

    (tally.strict_winner(), metadata)
}

/// Qualquer reject desqualifica; sem approve também é reject.
pub fn unanimous(votes: &[Vote]) -> (Decision, UnanimousMetadata) {
    let tally = Tally::count(votes);
    let unanimous = tally.reject == 0 && tally.approve > 0;

    let decision = if unanimous {
        Decision::Approve
    } else {
        Decision::Reject
    };

    let metadata = UnanimousMetadata {
        votes_used: votes.len(),
        total_votes: votes.len(),
        approve_count: tally.approve,
        reject_count: tally.reject,
        abstain_count: tally.abstain,
        unanimous,
    };

    (decision, metadata)
}

/// Maioria estrita dos votos não-abstain.
pub fn majority(votes: &[Vote]) -> (Decision, MajorityMetadata) {
    let tally = Tally::count(votes);
    let non_abstain = tally.decisive();

    // Sem voto decisivo: reject
    let decision = tally.strict_winner();

    let percentage = if non_abstain > 0 {
        tally.approve as f64 / non_abstain as f64 * 100.0
    } else {
        0.0
    };

    let metadata = MajorityMetadata {
        votes_used: votes.len(),
        total_votes: votes.len(),
        approve_count: tally.approve,
        reject_count: tally.reject,
        abstain_count: tally.abstain,
        percentage,
        tie: tally.approve == tally.reject && non_abstain > 0,
    };

    (decision, metadata)
}

/// Soma os pesos por categoria; maior peso vence, empate é reject.
///
/// `weights` deve ter o mesmo tamanho de `votes` (garantido pela validação).
/// A soma é feita da esquerda para a direita, na ordem dos votos.
pub fn weighted(votes: &[Vote], weights: &[f64]) -> (Decision, WeightedMetadata) {
    debug_assert_eq!(votes.len(), weights.len());

    let mut approve_weight = 0.0_f64;
    let mut reject_weight = 0.0_f64;
    let mut abstain_weight = 0.0_f64;

    for (vote, weight) in votes.iter().zip(weights) {
        match vote {
            Vote::Approve => approve_weight += *weight,
            Vote::Reject => reject_weight += *weight,
            Vote::Abstain => abstain_weight += *weight,
        }
    }

    let total_weight = approve_weight + reject_weight;

    let decision = if total_weight > 0.0 && approve_weight > reject_weight {
        Decision::Approve
    } else {
        Decision::Reject
    };

    let percentage = if total_weight > 0.0 {
        approve_weight / total_weight * 100.0
    } else {
        0.0
    };

    let metadata = WeightedMetadata {
        votes_used: votes.len(),
        total_votes: votes.len(),
        approve_weight,
        reject_weight,
        abstain_weight,
        total_weight,
        percentage,
    };

    (decision, metadata)
}
