use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DiscoverySettings;
use crate::core::{filters::matches_discovery_filter, scoring::evaluate_profile};
use crate::models::{Candidate, DiscoveryFilter, DiscoveryResult, ScoredProfile, SortKey};

/// Decode a raw JSON batch one entry at a time
///
/// Entries that do not decode into a candidate become `None` so that the
/// pipeline can skip them without losing the rest of the batch.
pub fn parse_candidates(raw: &[serde_json::Value]) -> Vec<Option<Candidate>> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| match serde_json::from_value::<Candidate>(value.clone()) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                tracing::debug!("Candidate {} could not be decoded: {}", index, e);
                None
            }
        })
        .collect()
}

/// Discovery orchestrator - scores, filters and orders a batch of profiles
///
/// # Pipeline Stages
/// 1. Drop missing and invalid candidates
/// 2. Trust scoring and tier classification
/// 3. Filter predicates (all must pass)
/// 4. Sorting, then truncation when a page size is requested
#[derive(Debug, Clone)]
pub struct DiscoveryPipeline {
    settings: DiscoverySettings,
}

impl DiscoveryPipeline {
    pub fn new(settings: DiscoverySettings) -> Self {
        Self { settings }
    }

    pub fn with_default_settings() -> Self {
        Self {
            settings: DiscoverySettings::default(),
        }
    }

    /// Run discovery, shuffling with the thread RNG when `random` order is requested
    pub fn discover(
        &self,
        candidates: Vec<Option<Candidate>>,
        filter: &DiscoveryFilter,
    ) -> DiscoveryResult {
        self.discover_with_rng(candidates, filter, &mut rand::thread_rng())
    }

    /// Run discovery with a caller-supplied random source
    ///
    /// # Arguments
    /// * `candidates` - Profiles with their testimonials; `None` marks an entry the data layer could not load
    /// * `filter` - The requester's filter and sort selection
    /// * `rng` - Only consulted for `SortKey::Random`; seed it for repeatable order
    ///
    /// # Returns
    /// DiscoveryResult with the ordered page and how many entries were skipped
    pub fn discover_with_rng<R: Rng + ?Sized>(
        &self,
        candidates: Vec<Option<Candidate>>,
        filter: &DiscoveryFilter,
        rng: &mut R,
    ) -> DiscoveryResult {
        let total_candidates = candidates.len();
        let mut skipped = 0;

        let mut profiles: Vec<ScoredProfile> = candidates
            .into_iter()
            // Stage 1: skip missing or malformed entries
            .filter_map(|candidate| {
                let Some(candidate) = candidate else {
                    skipped += 1;
                    return None;
                };
                match candidate.profile.validated() {
                    Ok(profile) => Some((profile, candidate.testimonials)),
                    Err(e) => {
                        tracing::debug!("Skipping invalid profile: {}", e);
                        skipped += 1;
                        None
                    }
                }
            })
            // Stage 2: score and classify
            .map(|(profile, testimonials)| {
                let evaluation = evaluate_profile(&profile, &testimonials);
                ScoredProfile {
                    profile,
                    score: evaluation.score,
                    tier: evaluation.tier,
                    prop_count: evaluation.breakdown.prop_count,
                }
            })
            // Stage 3: filter predicates
            .filter(|scored| matches_discovery_filter(scored, filter))
            .collect();

        // Stage 4: order
        sort_profiles(&mut profiles, filter.sort_by, rng);

        // Every passing profile is returned unless the caller asks for a page
        if let Some(limit) = filter.limit {
            profiles.truncate(limit.min(self.settings.max_limit));
        }

        tracing::debug!(
            "Discovery returned {} of {} candidates ({} skipped, sort: {:?})",
            profiles.len(),
            total_candidates,
            skipped,
            filter.sort_by
        );

        DiscoveryResult {
            profiles,
            total_candidates,
            skipped,
        }
    }
}

impl Default for DiscoveryPipeline {
    fn default() -> Self {
        Self::with_default_settings()
    }
}

/// Order profiles in place
///
/// Every key except `Random` is a stable descending sort, so ties keep the
/// input order.
pub fn sort_profiles<R: Rng + ?Sized>(profiles: &mut [ScoredProfile], sort_by: SortKey, rng: &mut R) {
    match sort_by {
        SortKey::Score => profiles.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortKey::Recent => profiles.sort_by(|a, b| b.profile.id.cmp(&a.profile.id)),
        SortKey::PropCount => profiles.sort_by(|a, b| b.prop_count.cmp(&a.prop_count)),
        SortKey::Random => profiles.shuffle(rng),
    }
}
