mod outcome;
mod peer;

pub use outcome::{FilterOutcome, FilterSummary, RejectedPeer};
pub use peer::{PeerRecord, PeerServer, PeerStats, UNKNOWN_HOST};
