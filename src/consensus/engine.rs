//! Motor de consenso do Votum.
//!
//! Aplica os padrões da configuração (estratégia e `k`) às requisições
//! e produz o relatório de cada agregação.

use crate::types::config::ConsensusConfig;
use crate::types::requests::AggregationRequest;
use crate::types::responses::AggregationReport;
use crate::types::votes::Strategy;
use crate::VotumResult;

use super::aggregator::VoteAggregator;

/// Motor de consenso.
///
/// Não guarda estado entre chamadas: cada avaliação cria e descarta
/// seu próprio [`VoteAggregator`].
#[derive(Debug, Clone)]
pub struct ConsensusEngine {
    config: ConsensusConfig,
}

impl ConsensusEngine {
    /// Cria um novo motor de consenso.
    pub fn new(config: ConsensusConfig) -> Self {
        Self { config }
    }

    /// Avalia os votos.
    ///
    /// `strategy` e `k` ausentes caem nos valores da configuração.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        votes: &[S],
        strategy: Option<&str>,
        k: Option<i64>,
        weights: Option<&[f64]>,
    ) -> VotumResult<AggregationReport> {
        let strategy = strategy.unwrap_or_else(|| self.config.default_strategy.as_str());
        let k = k.unwrap_or(self.config.k);

        let aggregator = VoteAggregator::new(votes, strategy, k, weights)?;
        Ok(aggregator.report())
    }

    /// Avalia uma requisição completa, sem aplicar padrões.
    pub fn evaluate_request(&self, request: &AggregationRequest) -> VotumResult<AggregationReport> {
        Ok(VoteAggregator::from_request(request)?.report())
    }

    /// Estratégia padrão configurada.
    pub fn default_strategy(&self) -> Strategy {
        self.config.default_strategy
    }

    /// Limiar `k` padrão configurado.
    pub fn k(&self) -> i64 {
        self.config.k
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new(ConsensusConfig::default())
    }
}
