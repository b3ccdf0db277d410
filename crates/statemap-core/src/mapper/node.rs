use crate::{
    coerce,
    collection::CollectionNormalizer,
    diag::{DiagnosticClass, Diagnostics},
    model::{NodeModel, attr},
    path::AttrPath,
};
use statemap_api::{NodeStatus, PoolNode};

///
/// PoolNodeMapper
///

pub struct PoolNodeMapper;

impl PoolNodeMapper {
    #[must_use]
    pub fn api_to_model(node: &PoolNode) -> NodeModel {
        NodeModel {
            id: node.id.clone(),
            instance_id: coerce::widen_i32(node.instance_id),
            status: node.status.to_string(),
        }
    }

    /// One model per API node, in the API's order.
    pub fn api_list_to_models(
        nodes: &[PoolNode],
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Vec<NodeModel> {
        CollectionNormalizer::map_records(nodes, path, diags, |node, path, diags| {
            if node.status == NodeStatus::Unknown {
                diags.warning(
                    DiagnosticClass::Conversion,
                    path.attr(attr::STATUS),
                    "unrecognized node status",
                    format!("node '{}' reported a status this client does not know", node.id),
                );
            }

            Some(Self::api_to_model(node))
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, instance_id: i32, status: NodeStatus) -> PoolNode {
        PoolNode {
            id: id.to_string(),
            instance_id,
            status,
        }
    }

    #[test]
    fn flattens_node_fields() {
        let model = PoolNodeMapper::api_to_model(&node("1-a", 77, NodeStatus::NotReady));

        assert_eq!(
            model,
            NodeModel {
                id: "1-a".into(),
                instance_id: 77,
                status: "not_ready".into(),
            }
        );
    }

    #[test]
    fn unknown_status_is_kept_with_a_warning() {
        let mut diags = Diagnostics::new();
        let nodes = [node("1-a", 1, NodeStatus::Ready), node("1-b", 2, NodeStatus::Unknown)];

        let models =
            PoolNodeMapper::api_list_to_models(&nodes, &AttrPath::new("nodes"), &mut diags);

        assert_eq!(models.len(), 2);
        assert_eq!(models[1].status, "unknown");
        assert!(!diags.has_error());

        let d = diags.iter().next().expect("one warning");
        assert_eq!(d.attribute.to_string(), "nodes[1].status");
    }
}
