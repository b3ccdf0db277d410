use super::{DeclarativeModel, node::required};
use crate::{
    block::{AutoscalerModel, OptionalBlock},
    collection::{Collection, CollectionKind},
    diag::Diagnostics,
    model::{AttrValue, DeclarativeNode, NestedBlock},
    path::AttrPath,
    value::Attr,
};

///
/// Attribute names
///

pub mod attr {
    pub const ID: &str = "id";
    pub const POOL_ID: &str = "pool_id";
    pub const CLUSTER_ID: &str = "cluster_id";
    pub const NODE_COUNT: &str = "node_count";
    pub const TYPE: &str = "type";
    pub const TAGS: &str = "tags";
    pub const NODES: &str = "nodes";
    pub const AUTOSCALER: &str = "autoscaler";

    // autoscaler block
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";

    // nodes
    pub const INSTANCE_ID: &str = "instance_id";
    pub const STATUS: &str = "status";
}

/// Tags are membership-only; the API's ordering carries no meaning.
pub const TAGS_KIND: CollectionKind = CollectionKind::Set;

///
/// NodePoolModel
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NodePoolModel {
    /// `"<cluster>:<pool>"`, computed.
    pub id: Attr<String>,
    pub pool_id: Attr<i64>,
    pub cluster_id: Attr<i64>,
    pub node_count: Attr<i64>,
    pub pool_type: Attr<String>,
    pub tags: Attr<Collection<String>>,

    /// Computed, in the order the API reports them.
    pub nodes: Vec<NodeModel>,
    pub autoscaler: OptionalBlock<AutoscalerModel>,
}

///
/// NodeModel
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeModel {
    pub id: String,
    pub instance_id: i64,
    pub status: String,
}

impl DeclarativeModel for AutoscalerModel {
    fn to_node(&self) -> DeclarativeNode {
        DeclarativeNode::new()
            .with_attr(attr::MIN, AttrValue::Int(self.min))
            .with_attr(attr::MAX, AttrValue::Int(self.max))
    }

    fn from_node(node: &DeclarativeNode, path: &AttrPath, diags: &mut Diagnostics) -> Self {
        let min = node.read_int(attr::MIN, path, diags);
        let max = node.read_int(attr::MAX, path, diags);

        Self {
            min: required(min, &path.attr(attr::MIN), diags),
            max: required(max, &path.attr(attr::MAX), diags),
        }
    }
}

impl DeclarativeModel for NodeModel {
    fn to_node(&self) -> DeclarativeNode {
        DeclarativeNode::new()
            .with_attr(attr::ID, AttrValue::String(self.id.clone()))
            .with_attr(attr::INSTANCE_ID, AttrValue::Int(self.instance_id))
            .with_attr(attr::STATUS, AttrValue::String(self.status.clone()))
    }

    fn from_node(node: &DeclarativeNode, path: &AttrPath, diags: &mut Diagnostics) -> Self {
        let id = node.read_string(attr::ID, path, diags);
        let instance_id = node.read_int(attr::INSTANCE_ID, path, diags);
        let status = node.read_string(attr::STATUS, path, diags);

        Self {
            id: required(id, &path.attr(attr::ID), diags),
            instance_id: required(instance_id, &path.attr(attr::INSTANCE_ID), diags),
            status: required(status, &path.attr(attr::STATUS), diags),
        }
    }
}

impl DeclarativeModel for NodePoolModel {
    fn to_node(&self) -> DeclarativeNode {
        let nodes = self.nodes.iter().map(DeclarativeModel::to_node).collect();
        let autoscaler = self
            .autoscaler
            .as_present()
            .map(|block| Box::new(block.to_node()));

        DeclarativeNode::new()
            .with_attr(attr::ID, self.id.clone())
            .with_attr(attr::POOL_ID, self.pool_id.clone())
            .with_attr(attr::CLUSTER_ID, self.cluster_id.clone())
            .with_attr(attr::NODE_COUNT, self.node_count.clone())
            .with_attr(attr::TYPE, self.pool_type.clone())
            .with_attr(attr::TAGS, self.tags.clone())
            .with_block(attr::NODES, NestedBlock::Repeated(nodes))
            .with_block(attr::AUTOSCALER, NestedBlock::Single(autoscaler))
    }

    fn from_node(node: &DeclarativeNode, path: &AttrPath, diags: &mut Diagnostics) -> Self {
        let nodes_path = path.attr(attr::NODES);
        let nodes = node
            .read_repeated_block(attr::NODES, path, diags)
            .into_iter()
            .enumerate()
            .map(|(index, child)| NodeModel::from_node(child, &nodes_path.index(index), diags))
            .collect();

        let autoscaler_path = path.attr(attr::AUTOSCALER);
        let autoscaler = node
            .read_single_block(attr::AUTOSCALER, path, diags)
            .map(|child| AutoscalerModel::from_node(child, &autoscaler_path, diags));

        Self {
            id: node.read_string(attr::ID, path, diags),
            pool_id: node.read_int(attr::POOL_ID, path, diags),
            cluster_id: node.read_int(attr::CLUSTER_ID, path, diags),
            node_count: node.read_int(attr::NODE_COUNT, path, diags),
            pool_type: node.read_string(attr::TYPE, path, diags),
            tags: node.read_strings(attr::TAGS, TAGS_KIND, path, diags),
            nodes,
            autoscaler,
        }
    }
}

///
/// TESTS
///
