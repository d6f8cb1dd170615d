//! Size-information locator
//!
//! Finds the region of a product page that carries sizing content:
//!
//! 1. Build a candidate pool from the configured selectors (tables, elements
//!    whose class or id mentions size, buttons, links, product info blocks).
//! 2. Keep candidates whose text contains a sizing phrase and rank them with
//!    [`CandidateScoring`]. Equal scores keep pool order.
//! 3. Walk each candidate up to a container with enough content and hand it
//!    to the [`SizeInfoExtractor`]. The first region that yields data wins.
//! 4. Fall back to the page's size-selection UI, then to [`SizeInfo::None`].

use super::config::{CandidateScoring, ContainerRules, ParsingConfig};
use super::option_scanner::OptionScanner;
use super::size_info_extractor::SizeInfoExtractor;
use super::{compile_selectors, element_text, ParsingResult};
use crate::domain::SizeInfo;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info};

/// A pool element whose text mentions sizing, with its rank.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub element: ElementRef<'a>,
    pub score: u32,
    pub pool_index: usize,
}

pub struct SizeInfoLocator {
    candidate_selectors: Vec<Selector>,
    size_phrases: Vec<String>,
    container: ContainerRules,
    scoring: CandidateScoring,
    extractor: SizeInfoExtractor,
    option_scanner: OptionScanner,
}

impl SizeInfoLocator {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default())
    }

    pub fn with_config(config: &ParsingConfig) -> ParsingResult<Self> {
        Ok(Self {
            candidate_selectors: compile_selectors("size candidates", &config.candidate_selectors)?,
            size_phrases: config
                .size_phrases
                .iter()
                .map(|phrase| phrase.to_lowercase())
                .collect(),
            container: config.container,
            scoring: config.scoring,
            extractor: SizeInfoExtractor::with_config(config)?,
            option_scanner: OptionScanner::with_config(config)?,
        })
    }

    /// Replace the ranking rules, keeping everything else.
    #[must_use]
    pub fn with_scoring(mut self, scoring: CandidateScoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sizing information for the whole document.
    pub fn find_size_information(&self, html: &Html) -> SizeInfo {
        let candidates = self.rank_candidates(html);
        debug!("Ranked {} sizing candidates", candidates.len());

        for candidate in &candidates {
            let container = self.expand_to_container(candidate.element);
            if let Some(size_info) = self.extractor.extract(container) {
                info!(
                    "Found {} size information in <{}> (score {}, pool index {})",
                    size_info.kind(),
                    container.value().name(),
                    candidate.score,
                    candidate.pool_index
                );
                return size_info;
            }
        }

        let sizes = self.option_scanner.find_size_options(html);
        if !sizes.is_empty() {
            info!("Falling back to {} selectable size options", sizes.len());
            return SizeInfo::Options { sizes };
        }

        info!("No size information found on page");
        SizeInfo::None
    }

    /// Elements matched by the candidate selectors, in selector order then
    /// document order. An element matched twice keeps its first position.
    pub fn candidate_pool<'a>(&self, html: &'a Html) -> Vec<ElementRef<'a>> {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();

        for selector in &self.candidate_selectors {
            for element in html.select(selector) {
                if seen.insert(element.id()) {
                    pool.push(element);
                }
            }
        }

        pool
    }

    /// Pool elements mentioning a sizing phrase, best first.
    pub fn rank_candidates<'a>(&self, html: &'a Html) -> Vec<ScoredCandidate<'a>> {
        let mut candidates: Vec<_> = self
            .candidate_pool(html)
            .into_iter()
            .enumerate()
            .filter_map(|(pool_index, element)| {
                self.score(element).map(|score| ScoredCandidate {
                    element,
                    score,
                    pool_index,
                })
            })
            .collect();

        // Stable: equal scores stay in pool order.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }

    /// `None` when the element mentions no sizing phrase.
    fn score(&self, element: ElementRef<'_>) -> Option<u32> {
        let text = element_text(element).to_lowercase();
        let phrases = self
            .size_phrases
            .iter()
            .filter(|phrase| text.contains(phrase.as_str()))
            .count();
        if phrases == 0 {
            return None;
        }

        let mut score = self
            .scoring
            .phrase_weight
            .saturating_mul(u32::try_from(phrases).unwrap_or(u32::MAX));
        if element.value().name() == "table" || contains_table(element) {
            score = score.saturating_add(self.scoring.table_weight);
        }
        if mentions_size(element) {
            score = score.saturating_add(self.scoring.size_attribute_weight);
        }

        Some(score)
    }

    /// Walk towards the root until the element holds a table or enough text.
    pub fn expand_to_container<'a>(&self, element: ElementRef<'a>) -> ElementRef<'a> {
        let mut container = element;

        for _ in 0..self.container.max_ancestor_steps {
            if contains_table(container)
                || element_text(container).chars().count() > self.container.min_container_text_len
            {
                break;
            }
            match container.parent().and_then(ElementRef::wrap) {
                Some(parent) => container = parent,
                None => break,
            }
        }

        container
    }
}

/// True when a `<table>` is nested anywhere below `element`.
fn contains_table(element: ElementRef<'_>) -> bool {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|descendant| descendant.value().name() == "table")
}

fn mentions_size(element: ElementRef<'_>) -> bool {
    ["class", "id"].iter().any(|attr| {
        element
            .value()
            .attr(attr)
            .is_some_and(|value| value.to_ascii_lowercase().contains("size"))
    })
}
