//! Testes de integração para o motor de consenso do Votum.

use votum::consensus::{ConsensusEngine, VoteAggregator};
use votum::types::config::ConsensusConfig;
use votum::types::requests::AggregationRequest;
use votum::types::responses::{Decision, Metadata};
use votum::types::votes::Strategy;
use votum::VotumError;

const ALL_STRATEGIES: [&str; 4] = ["first_to_ahead_by_k", "unanimous", "majority", "weighted"];

fn aggregate(votes: &[&str], strategy: &str, k: i64) -> (Decision, Metadata) {
    VoteAggregator::new(votes, strategy, k, None)
        .expect("entrada válida")
        .aggregate()
}

/// Todas as sequências de 1 a `max_len` votos.
fn all_sequences(max_len: usize) -> Vec<Vec<&'static str>> {
    let alphabet = ["approve", "reject", "abstain"];
    let mut sequences: Vec<Vec<&'static str>> = vec![Vec::new()];
    let mut result = Vec::new();

    for _ in 0..max_len {
        sequences = sequences
            .into_iter()
            .flat_map(|seq| {
                alphabet.iter().map(move |vote| {
                    let mut next = seq.clone();
                    next.push(*vote);
                    next
                })
            })
            .collect();
        result.extend(sequences.iter().cloned());
    }

    result
}

// Testes da estratégia sequencial
mod first_to_ahead_by_k_tests {
    use super::*;

    fn sequential(metadata: Metadata) -> votum::types::responses::SequentialMetadata {
        match metadata {
            Metadata::FirstToAheadByK(meta) => meta,
            other => panic!("metadados inesperados: {:?}", other),
        }
    }

    #[test]
    fn test_early_stop_on_approve() {
        let (decision, meta) = aggregate(&["approve", "approve", "reject"], "first_to_ahead_by_k", 2);
        let meta = sequential(meta);

        assert_eq!(decision, Decision::Approve);
        assert_eq!(meta.votes_used, 2);
        assert!(meta.early_stop);
    }

    #[test]
    fn test_no_threshold_tie_rejects() {
        let (decision, meta) = aggregate(&["approve", "reject"], "first_to_ahead_by_k", 2);
        let meta = sequential(meta);

        assert_eq!(decision, Decision::Reject);
        assert!(meta.tie_broken);
        assert!(!meta.early_stop);
    }

    #[test]
    fn test_abstain_counts_toward_votes_used() {
        let (decision, meta) = aggregate(
            &["abstain", "approve", "abstain", "approve", "reject"],
            "first_to_ahead_by_k",
            2,
        );
        let meta = sequential(meta);

        assert_eq!(decision, Decision::Approve);
        assert_eq!(meta.votes_used, 4);
        assert_eq!(meta.approve_count, 2);
        assert_eq!(meta.reject_count, 0);
    }

    #[test]
    fn test_later_votes_are_not_consumed() {
        // Depois da parada, os votos restantes não influenciam a decisão
        let (decision, meta) = aggregate(
            &["reject", "reject", "approve", "approve", "approve", "approve"],
            "first_to_ahead_by_k",
            2,
        );
        let meta = sequential(meta);

        assert_eq!(decision, Decision::Reject);
        assert_eq!(meta.votes_used, 2);
        assert_eq!(meta.margin, -2);
        assert_eq!(meta.approve_count, 0);
    }

    #[test]
    fn test_votes_used_never_exceeds_total() {
        for votes in all_sequences(5) {
            for k in 1..=3 {
                let (_, meta) = aggregate(&votes, "first_to_ahead_by_k", k);
                let meta = sequential(meta);

                assert!(meta.votes_used <= meta.total_votes);
                assert_eq!(meta.early_stop, meta.votes_used < meta.total_votes);
                assert_eq!(meta.total_votes, votes.len());
                if meta.tie_broken {
                    assert_eq!(meta.approve_count, meta.reject_count);
                    assert_eq!(meta.votes_used, meta.total_votes);
                }
            }
        }
    }
}

// Testes das estratégias em lote
mod batch_strategy_tests {
    use super::*;

    #[test]
    fn test_unanimous() {
        let (decision, meta) = aggregate(&["approve", "approve", "approve"], "unanimous", 2);
        assert_eq!(decision, Decision::Approve);
        assert!(matches!(meta, Metadata::Unanimous(ref m) if m.unanimous));

        let (decision, _) = aggregate(&["approve", "reject", "approve"], "unanimous", 2);
        assert_eq!(decision, Decision::Reject);
    }

    #[test]
    fn test_majority_percentage() {
        let (decision, meta) = aggregate(&["approve", "reject", "approve"], "majority", 2);
        assert_eq!(decision, Decision::Approve);

        match meta {
            Metadata::Majority(m) => {
                assert!((m.percentage - 66.7).abs() < 0.05);
                assert!(!m.tie);
            }
            other => panic!("metadados inesperados: {:?}", other),
        }
    }

    #[test]
    fn test_weighted_sums() {
        let aggregator = VoteAggregator::new(
            &["approve", "reject", "approve"],
            "weighted",
            2,
            Some(&[1.5, 1.0, 1.2]),
        )
        .unwrap();

        let (decision, meta) = aggregator.aggregate();
        assert_eq!(decision, Decision::Approve);

        match meta {
            Metadata::Weighted(m) => {
                assert!((m.approve_weight - 2.7).abs() < 1e-9);
                assert!((m.reject_weight - 1.0).abs() < 1e-9);
            }
            other => panic!("metadados inesperados: {:?}", other),
        }
    }

    #[test]
    fn test_weighted_defaults_to_unit_weights() {
        let (decision, meta) = aggregate(&["approve", "abstain", "reject", "reject"], "weighted", 2);
        assert_eq!(decision, Decision::Reject);

        match meta {
            Metadata::Weighted(m) => {
                assert_eq!(m.approve_weight, 1.0);
                assert_eq!(m.reject_weight, 2.0);
                assert_eq!(m.abstain_weight, 1.0);
                assert_eq!(m.total_weight, 3.0);
            }
            other => panic!("metadados inesperados: {:?}", other),
        }
    }

    #[test]
    fn test_batch_strategies_consume_every_vote() {
        for strategy in ["unanimous", "majority", "weighted"] {
            let (_, meta) = aggregate(&["approve", "approve", "approve", "reject"], strategy, 2);
            assert_eq!(meta.votes_used(), 4);
            assert_eq!(meta.total_votes(), 4);
            assert!(!meta.early_stop());
        }
    }
}

// Propriedades comuns a todas as estratégias
mod property_tests {
    use super::*;

    #[test]
    fn test_every_input_yields_binary_decision_deterministically() {
        for votes in all_sequences(4) {
            for strategy in ALL_STRATEGIES {
                let first = aggregate(&votes, strategy, 2);
                let second = aggregate(&votes, strategy, 2);

                assert!(matches!(first.0, Decision::Approve | Decision::Reject));
                assert_eq!(first, second);
                assert_eq!(first.1.strategy().as_str(), strategy);
            }
        }
    }

    #[test]
    fn test_ties_resolve_to_reject() {
        let tied = ["approve", "reject", "abstain", "reject", "approve"];
        for strategy in ALL_STRATEGIES {
            let (decision, _) = aggregate(&tied, strategy, 3);
            assert_eq!(decision, Decision::Reject, "estratégia {}", strategy);
        }

        for strategy in ALL_STRATEGIES {
            let (decision, _) = aggregate(&["abstain", "abstain"], strategy, 2);
            assert_eq!(decision, Decision::Reject, "estratégia {}", strategy);
        }
    }

    #[test]
    fn test_input_is_case_insensitive() {
        let lower = aggregate(&["approve", "reject", "approve"], "majority", 2);
        let mixed = aggregate(&["APPROVE", "Reject", "aPPROVE"], "MaJoRiTy", 2);
        assert_eq!(lower, mixed);
    }
}

// Testes de validação
mod validation_tests {
    use super::*;

    fn assert_invalid<S: AsRef<str>>(
        votes: &[S],
        strategy: &str,
        k: i64,
        weights: Option<&[f64]>,
    ) {
        match VoteAggregator::new(votes, strategy, k, weights) {
            Err(VotumError::InvalidInput(_)) => {}
            other => panic!("esperava InvalidInput, obteve {:?}", other),
        }
    }

    #[test]
    fn test_empty_votes() {
        let votes: Vec<String> = Vec::new();
        for strategy in ALL_STRATEGIES {
            assert_invalid(&votes[..], strategy, 2, None);
        }
    }

    #[test]
    fn test_unknown_strategy() {
        assert_invalid(&["approve"], "ranked_choice", 2, None);
    }

    #[test]
    fn test_invalid_vote_value() {
        for strategy in ALL_STRATEGIES {
            assert_invalid(&["approve", "veto"], strategy, 2, None);
        }
    }

    #[test]
    fn test_weight_length_mismatch() {
        assert_invalid(&["approve", "reject", "approve"], "weighted", 2, Some(&[1.0, 2.0]));
    }

    #[test]
    fn test_non_positive_k() {
        assert_invalid(&["approve"], "first_to_ahead_by_k", 0, None);
        assert_invalid(&["approve"], "first_to_ahead_by_k", -3, None);
    }
}

// Testes do ConsensusEngine
mod engine_tests {
    use super::*;

    #[test]
    fn test_engine_applies_config() {
        let engine = ConsensusEngine::new(ConsensusConfig {
            default_strategy: Strategy::Unanimous,
            k: 2,
        });

        let report = engine
            .evaluate(&["approve", "abstain"], None, None, None)
            .unwrap();

        assert_eq!(report.strategy, Strategy::Unanimous);
        assert_eq!(report.decision, Decision::Approve);
    }

    #[test]
    fn test_engine_report_serializes_every_field() {
        let engine = ConsensusEngine::default();
        let request = AggregationRequest::new(["approve", "approve", "reject"], "first_to_ahead_by_k");

        let report = engine.evaluate_request(&request).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["decision"], "approve");
        assert_eq!(json["strategy"], "first_to_ahead_by_k");
        assert_eq!(json["votes"], serde_json::json!(["approve", "approve", "reject"]));

        let metadata = &json["metadata"];
        for field in [
            "votes_used",
            "total_votes",
            "approve_count",
            "reject_count",
            "k_threshold",
            "margin",
            "early_stop",
            "tie_broken",
        ] {
            assert!(metadata.get(field).is_some(), "campo ausente: {}", field);
        }
    }
}
