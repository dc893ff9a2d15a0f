//! Search engine integration
//!
//! Scores every record's searchable projection against the normalized query,
//! ranks by the configured policy, and shapes the surviving candidates into
//! caller-facing hits.

use crate::error::normalize_query;
use crate::search::fuzzy;
use crate::search::ranking::{rank, RankingPolicy, ScoredCandidate};
use crate::templates::TemplateRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One matched template, ordered best-first in the response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub filename: String,
    /// Composite similarity score, 0-100
    pub score: f64,
    /// Companion code; empty string when the template has none
    pub react_code: String,
    /// The full record fields object
    pub full_data: Value,
}

/// Search engine with a ranking policy
pub struct SearchEngine {
    policy: RankingPolicy,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            policy: RankingPolicy::default(),
        }
    }

    #[allow(dead_code)]
    pub fn with_policy(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Search the corpus. Returns at most `limit` hits, best-first, all
    /// scoring above the confidence floor; an empty corpus short-circuits to
    /// an empty result without scoring.
    pub fn search(&self, query: &str, limit: usize, corpus: &[TemplateRecord]) -> Vec<SearchHit> {
        if corpus.is_empty() {
            return Vec::new();
        }

        let clean_query = normalize_query(query);

        let scored: Vec<ScoredCandidate> = corpus
            .iter()
            .enumerate()
            .map(|(index, record)| ScoredCandidate {
                index,
                score: fuzzy::wratio(&clean_query, &record.searchable_text()),
            })
            .collect();

        let ranked = rank(scored, limit, self.policy.score_floor);
        debug!(
            "Query '{}' matched {} of {} records",
            clean_query,
            ranked.len(),
            corpus.len()
        );

        ranked
            .into_iter()
            .map(|candidate| {
                let record = &corpus[candidate.index];
                SearchHit {
                    title: record.title().unwrap_or("Untitled").to_string(),
                    filename: record.source_filename.clone(),
                    score: candidate.score,
                    react_code: record.code_blob.clone().unwrap_or_default(),
                    full_data: record.fields.clone(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(folder: &str, fields: Value, code: Option<&str>) -> TemplateRecord {
        TemplateRecord {
            fields,
            source_folder: folder.to_string(),
            source_filename: "template.json".to_string(),
            code_blob: code.map(str::to_string),
        }
    }

    fn sample_corpus() -> Vec<TemplateRecord> {
        vec![
            record(
                "alpha",
                json!({
                    "title": "Landing Hero",
                    "description": "a bold hero section",
                    "features": ["responsive", "dark-mode"],
                }),
                Some("export default function Hero() {}"),
            ),
            record("beta", json!({"title": "Pricing Table"}), None),
        ]
    }

    #[test]
    fn test_search_empty_corpus() {
        let engine = SearchEngine::new();
        assert!(engine.search("anything", 5, &[]).is_empty());
        assert!(engine.search("", 5, &[]).is_empty());
    }

    #[test]
    fn test_search_hero_section_scenario() {
        let engine = SearchEngine::new();
        let corpus = sample_corpus();

        let hits = engine.search("hero section", 3, &corpus);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Landing Hero");
        assert!(hits[0].score > 30.0);
        assert_eq!(hits[0].react_code, "export default function Hero() {}");
    }

    #[test]
    fn test_search_pricing_scenario() {
        let engine = SearchEngine::new();
        let corpus = sample_corpus();

        let hits = engine.search("pricing", 3, &corpus);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pricing Table");
        // no code file: empty string, never a missing field
        assert_eq!(hits[0].react_code, "");
    }

    #[test]
    fn test_search_gibberish_returns_empty() {
        let engine = SearchEngine::new();
        let hits = engine.search("xyzzy999", 3, &sample_corpus());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_query_normalization() {
        let engine = SearchEngine::new();
        let hits = engine.search("  HERO SECTION  ", 3, &sample_corpus());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Landing Hero");
    }

    #[test]
    fn test_search_respects_limit() {
        let engine = SearchEngine::new();
        let corpus: Vec<TemplateRecord> = (0..5)
            .map(|i| record(&format!("t{}", i), json!({"title": "Checkout Flow"}), None))
            .collect();

        let hits = engine.search("checkout flow", 2, &corpus);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_ties_keep_corpus_order() {
        let engine = SearchEngine::new();
        // identical projections score identically; the earlier-loaded record
        // must rank first
        let corpus = vec![
            record("first", json!({"title": "Checkout Flow"}), Some("// first")),
            record("second", json!({"title": "Checkout Flow"}), Some("// second")),
        ];

        let hits = engine.search("checkout", 5, &corpus);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, hits[1].score);
        assert_eq!(hits[0].react_code, "// first");
        assert_eq!(hits[1].react_code, "// second");
    }

    #[test]
    fn test_search_results_sorted_descending() {
        let engine = SearchEngine::new();
        let corpus = vec![
            record("weaker", json!({"title": "Hero Card"}), None),
            record("exact", json!({"title": "Hero Banner"}), None),
        ];

        let hits = engine.search("hero banner", 5, &corpus);
        assert_eq!(hits.len(), 2);
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(hits[0].title, "Hero Banner");
    }

    #[test]
    fn test_missing_title_defaults_to_untitled() {
        let engine = SearchEngine::new();
        let corpus = vec![record(
            "untitled",
            json!({"description": "glassmorphism login card"}),
            None,
        )];

        let hits = engine.search("glassmorphism login", 3, &corpus);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Untitled");
    }

    #[test]
    fn test_end_to_end_load_and_search() {
        use std::fs;

        let tmp = tempfile::TempDir::new().unwrap();
        let alpha = tmp.path().join("alpha");
        fs::create_dir_all(&alpha).unwrap();
        fs::write(
            alpha.join("template.json"),
            r#"{"title": "Landing Hero", "description": "a bold hero section", "features": ["responsive", "dark-mode"]}"#,
        )
        .unwrap();
        fs::write(alpha.join("page.tsx"), "export default function Hero() {}").unwrap();

        let beta = tmp.path().join("beta");
        fs::create_dir_all(&beta).unwrap();
        fs::write(beta.join("template.json"), r#"{"title": "Pricing Table"}"#).unwrap();

        let corpus = crate::templates::load_templates(tmp.path());
        assert_eq!(corpus.len(), 2);

        let engine = SearchEngine::new();

        let hits = engine.search("hero section", 3, &corpus);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Landing Hero");
        assert!(hits[0].score > 30.0);
        assert_eq!(hits[0].react_code, "export default function Hero() {}");
        assert_eq!(hits[0].full_data["_folder"], "alpha");
        assert_eq!(hits[0].full_data["_filename"], "template.json");

        let hits = engine.search("pricing", 3, &corpus);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pricing Table");
        assert_eq!(hits[0].react_code, "");

        let hits = engine.search("xyzzy999", 3, &corpus);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_full_data_carries_arbitrary_fields() {
        let engine = SearchEngine::new();
        let corpus = vec![record(
            "extra",
            json!({
                "title": "Kanban Board",
                "author": "someone",
                "tags": {"color": "blue"},
            }),
            None,
        )];

        let hits = engine.search("kanban board", 3, &corpus);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_data["author"], "someone");
        assert_eq!(hits[0].full_data["tags"]["color"], "blue");
    }
}
