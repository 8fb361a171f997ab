//! Agregador de votos do Votum.
//!
//! Responsável por:
//! - Validar votos, estratégia, `k` e pesos antes de qualquer contagem
//! - Despachar para a regra da estratégia escolhida
//! - Montar o relatório final da agregação

use crate::types::requests::AggregationRequest;
use crate::types::responses::{AggregationReport, Decision, Metadata};
use crate::types::votes::{Strategy, Vote};
use crate::{VotumError, VotumResult};

use super::rules;

/// Agregador de votos.
///
/// Construído a partir de uma lista finalizada de votos; a construção
/// valida toda a entrada, então [`aggregate`](Self::aggregate) não falha.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteAggregator {
    votes: Vec<Vote>,
    strategy: Strategy,
    k: i64,
    weights: Vec<f64>,
}

impl VoteAggregator {
    /// Valida a entrada e cria o agregador.
    ///
    /// Falha com [`VotumError::InvalidInput`] quando:
    /// - não há votos;
    /// - a estratégia não é reconhecida;
    /// - algum voto não é approve, reject ou abstain;
    /// - os pesos não têm o mesmo tamanho dos votos, algum peso é
    ///   negativo ou não finito, ou a soma deles não é finita;
    /// - a estratégia é `first_to_ahead_by_k` e `k < 1`.
    ///
    /// Sem pesos, cada voto recebe peso 1.0.
    pub fn new<S: AsRef<str>>(
        votes: &[S],
        strategy: &str,
        k: i64,
        weights: Option<&[f64]>,
    ) -> VotumResult<Self> {
        if votes.is_empty() {
            return Err(VotumError::invalid_input("No votes provided"));
        }

        let strategy: Strategy = strategy.parse()?;

        let votes = votes
            .iter()
            .map(|vote| vote.as_ref().parse::<Vote>())
            .collect::<VotumResult<Vec<_>>>()?;

        let weights = match weights {
            Some(weights) => {
                Self::validate_weights(weights, votes.len())?;
                weights.to_vec()
            }
            None => vec![1.0; votes.len()],
        };

        if strategy.uses_threshold() && k < 1 {
            return Err(VotumError::invalid_input(format!(
                "k must be >= 1 for {} (got {})",
                strategy, k
            )));
        }

        Ok(Self {
            votes,
            strategy,
            k,
            weights,
        })
    }

    /// Cria o agregador a partir de uma requisição.
    pub fn from_request(request: &AggregationRequest) -> VotumResult<Self> {
        Self::new(
            request.votes.as_slice(),
            &request.strategy,
            request.k,
            request.weights.as_deref(),
        )
    }

    fn validate_weights(weights: &[f64], vote_count: usize) -> VotumResult<()> {
        if weights.len() != vote_count {
            return Err(VotumError::invalid_input(format!(
                "Number of weights must match number of votes ({} weights, {} votes)",
                weights.len(),
                vote_count
            )));
        }

        if let Some((index, weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(VotumError::invalid_input(format!(
                "Invalid weight at position {}: {}. Weights must be finite and non-negative",
                index, weight
            )));
        }

        // pesos não negativos: somas parciais nunca passam do total
        if !weights.iter().sum::<f64>().is_finite() {
            return Err(VotumError::invalid_input(
                "Sum of weights overflows; weights must add up to a finite value",
            ));
        }

        Ok(())
    }

    /// Agrega os votos com a estratégia configurada.
    pub fn aggregate(&self) -> (Decision, Metadata) {
        tracing::debug!(
            strategy = %self.strategy,
            total_votes = self.votes.len(),
            "Agregando votos"
        );

        let (decision, metadata) = match self.strategy {
            Strategy::FirstToAheadByK => {
                let (decision, meta) = rules::first_to_ahead_by_k(&self.votes, self.k);
                (decision, Metadata::FirstToAheadByK(meta))
            }
            Strategy::Unanimous => {
                let (decision, meta) = rules::unanimous(&self.votes);
                (decision, Metadata::Unanimous(meta))
            }
            Strategy::Majority => {
                let (decision, meta) = rules::majority(&self.votes);
                (decision, Metadata::Majority(meta))
            }
            Strategy::Weighted => {
                let (decision, meta) = rules::weighted(&self.votes, &self.weights);
                (decision, Metadata::Weighted(meta))
            }
        };

        if metadata.early_stop() {
            tracing::info!(
                votes_used = metadata.votes_used(),
                total_votes = metadata.total_votes(),
                "Parada antecipada: limiar k atingido"
            );
        }

        tracing::debug!(decision = %decision, "Decisão tomada");

        (decision, metadata)
    }

    /// Agrega e monta o relatório completo.
    pub fn report(&self) -> AggregationReport {
        let (decision, metadata) = self.aggregate();

        AggregationReport {
            decision,
            strategy: self.strategy,
            votes: self.votes.clone(),
            metadata,
        }
    }

    /// Votos normalizados.
    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// Estratégia validada.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Limiar `k`.
    pub fn k(&self) -> i64 {
        self.k
    }

    /// Pesos alinhados com os votos.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
