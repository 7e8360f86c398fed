use serde::Serialize;

use super::{PeerRecord, PeerStats};

/// One rejected entry of the filtering log, preserving whatever metadata
/// the input record carried.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedPeer {
    pub host: String,
    pub reason: String,
    pub platform: Option<String>,
    pub stats: PeerStats,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilterSummary {
    pub total: usize,
    pub passed: usize,
    pub filtered: usize,
    pub filter_rate: f64,
}

#[derive(Debug)]
pub struct FilterOutcome {
    pub kept: Vec<PeerRecord>,
    pub rejected: Vec<RejectedPeer>,
}

impl FilterOutcome {
    pub fn summary(&self) -> FilterSummary {
        let passed = self.kept.len();
        let filtered = self.rejected.len();
        let total = passed + filtered;
        let filter_rate = if total == 0 {
            0.0
        } else {
            filtered as f64 / total as f64 * 100.0
        };
        FilterSummary {
            total,
            passed,
            filtered,
            filter_rate,
        }
    }

    /// Reasons by descending frequency; ties keep first-seen order.
    pub fn reason_tally(&self) -> Vec<(String, usize)> {
        let mut tally: Vec<(String, usize)> = Vec::new();
        for entry in &self.rejected {
            match tally.iter_mut().find(|(reason, _)| *reason == entry.reason) {
                Some((_, count)) => *count += 1,
                None => tally.push((entry.reason.clone(), 1)),
            }
        }
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally
    }
}
