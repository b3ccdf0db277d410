use crate::{NodePoolAutoscaler, PoolNode};
use serde::{Deserialize, Serialize};

///
/// NodePool
/// A node pool as returned by the read, create and update endpoints.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NodePool {
    pub id: i32,
    pub count: i32,

    #[serde(rename = "type")]
    pub pool_type: String,

    #[serde(default)]
    pub tags: Vec<String>,

    // creation order, as reported by the API
    #[serde(default)]
    pub nodes: Vec<PoolNode>,

    #[serde(default)]
    pub autoscaler: NodePoolAutoscaler,
}

///
/// NodePoolCreateOptions
///
/// `tags: None` leaves the field out of the request, `Some(vec![])` sends an
/// explicit empty list.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NodePoolCreateOptions {
    pub count: i32,

    #[serde(rename = "type")]
    pub pool_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaler: Option<NodePoolAutoscaler>,
}

///
/// NodePoolUpdateOptions
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NodePoolUpdateOptions {
    pub count: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaler: Option<NodePoolAutoscaler>,
}

///
/// TESTS
///
