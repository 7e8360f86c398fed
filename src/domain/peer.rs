use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNKNOWN_HOST: &str = "unknown";

/// One entry of the peer suggestions dataset. Inputs mix bare hostname
/// strings with structured server objects; classification runs on the
/// structured shape, write-back keeps whichever shape came in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeerRecord {
    Bare(String),
    Structured(PeerServer),
}

impl PeerRecord {
    /// Canonical structured view used by the classifier. A bare hostname
    /// always carries empty stats.
    pub fn to_server(&self) -> PeerServer {
        match self {
            PeerRecord::Bare(host) => PeerServer {
                host: Some(host.clone()),
                stats: Some(PeerStats::default()),
                ..PeerServer::default()
            },
            PeerRecord::Structured(server) => server.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_activitypub: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PeerStats>,
    // unknown fields ride along so kept records round-trip unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PeerServer {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(UNKNOWN_HOST)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_posts: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
