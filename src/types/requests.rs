//! Tipos de requisição do Votum.

use serde::{Deserialize, Serialize};

/// Valor padrão do limiar `k`.
pub const DEFAULT_K: i64 = 2;

/// Requisição de agregação, como chega do chamador.
///
/// Os votos e a estratégia ainda estão em forma textual; a validação
/// acontece em [`VoteAggregator::new`](crate::consensus::VoteAggregator::new).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregationRequest {
    /// Votos em ordem de submissão.
    pub votes: Vec<String>,

    /// Nome da estratégia.
    pub strategy: String,

    /// Limiar de vantagem (apenas `first_to_ahead_by_k`).
    #[serde(default = "default_k")]
    pub k: i64,

    /// Pesos alinhados 1:1 com os votos (apenas `weighted`).
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

fn default_k() -> i64 {
    DEFAULT_K
}

impl AggregationRequest {
    /// Cria uma nova requisição com `k` padrão e sem pesos.
    pub fn new<I, S>(votes: I, strategy: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            votes: votes.into_iter().map(Into::into).collect(),
            strategy: strategy.into(),
            k: DEFAULT_K,
            weights: None,
        }
    }

    /// Define o limiar `k`.
    pub fn with_k(mut self, k: i64) -> Self {
        self.k = k;
        self
    }

    /// Define os pesos.
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }
}
