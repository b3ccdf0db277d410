use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// NodeStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    #[display("ready")]
    Ready,

    #[display("not_ready")]
    NotReady,

    // anything the API adds later
    #[default]
    #[display("unknown")]
    #[serde(other)]
    Unknown,
}

///
/// PoolNode
/// One compute instance backing a node pool.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PoolNode {
    pub id: String,
    pub instance_id: i32,
    #[serde(default)]
    pub status: NodeStatus,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reads_known_and_unknown_values() {
        let ready: NodeStatus = serde_json::from_str("\"ready\"").unwrap();
        let not_ready: NodeStatus = serde_json::from_str("\"not_ready\"").unwrap();
        let other: NodeStatus = serde_json::from_str("\"provisioning\"").unwrap();

        assert_eq!(ready, NodeStatus::Ready);
        assert_eq!(not_ready, NodeStatus::NotReady);
        assert_eq!(other, NodeStatus::Unknown);
        assert_eq!(not_ready.to_string(), "not_ready");
    }
}
