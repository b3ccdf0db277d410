use crate::{
    block::AutoscalerResolver,
    coerce,
    collection::CollectionNormalizer,
    diag::{DiagnosticClass, Diagnostics, Mapped},
    ids::CompositeId,
    log,
    log::Topic,
    mapper::PoolNodeMapper,
    model::{NodePoolModel, TAGS_KIND, attr},
    path::AttrPath,
    value::Attr,
};
use statemap_api::{NodePool, NodePoolCreateOptions, NodePoolUpdateOptions};

///
/// NodePoolMapper
///
/// Every entry point starts a fresh accumulator, visits every field and
/// hands back the value together with whatever was reported. The `*_into`
/// variants take a caller's accumulator so several mappings can share one.
///

pub struct NodePoolMapper;

impl NodePoolMapper {
    pub fn model_to_create_options(model: &NodePoolModel) -> Mapped<NodePoolCreateOptions> {
        let mut diags = Diagnostics::from_config();
        let options = Self::create_options_into(model, &mut diags);

        Mapped::new(options, diags)
    }

    pub fn model_to_update_options(model: &NodePoolModel) -> Mapped<NodePoolUpdateOptions> {
        let mut diags = Diagnostics::from_config();
        let options = Self::update_options_into(model, &mut diags);

        Mapped::new(options, diags)
    }

    /// Build the model to persist from the entity the API returned.
    ///
    /// Nothing from the prior model is carried over; running this twice on
    /// the same entity yields the same model.
    pub fn api_to_model(cluster_id: i32, pool: &NodePool) -> Mapped<NodePoolModel> {
        let mut diags = Diagnostics::from_config();
        let model = Self::api_to_model_into(cluster_id, pool, &mut diags);

        Mapped::new(model, diags)
    }

    /// `(cluster_id, pool_id)` for a model about to be read, updated or
    /// deleted.
    pub fn extract_ids(model: &NodePoolModel) -> Mapped<(i32, i32)> {
        let mut diags = Diagnostics::from_config();
        let ids = Self::extract_ids_into(model, &mut diags);

        Mapped::new(ids, diags)
    }

    /// Seed a model from an import identifier of the form
    /// `<cluster_id>:<pool_id>`. Every other attribute is left null for
    /// the follow-up read to fill in.
    pub fn import_model(id: &str) -> Mapped<NodePoolModel> {
        let mut diags = Diagnostics::from_config();

        let model = match CompositeId::decode(id) {
            Ok(composite) => {
                log!(Topic::Identifier, Debug, "importing node pool {}", composite);

                NodePoolModel {
                    id: Attr::Known(composite.encode()),
                    cluster_id: Attr::Known(composite.parent),
                    pool_id: Attr::Known(composite.child),
                    ..NodePoolModel::default()
                }
            }
            Err(err) => {
                diags.error(
                    DiagnosticClass::IdDecode,
                    AttrPath::new(attr::ID),
                    "invalid import identifier",
                    format!("{err}; expected '<cluster_id>:<pool_id>'"),
                );

                NodePoolModel::default()
            }
        };

        Mapped::new(model, diags)
    }

    pub fn create_options_into(
        model: &NodePoolModel,
        diags: &mut Diagnostics,
    ) -> NodePoolCreateOptions {
        log!(Topic::Mapping, Debug, "mapping node pool model to create options");

        let root = AttrPath::root();
        let count = coerce::attr_to_i32(&model.node_count, &root.attr(attr::NODE_COUNT), diags);
        let sizing = AutoscalerResolver::resolve_outbound(
            &model.autoscaler,
            count,
            &root.attr(attr::AUTOSCALER),
            diags,
        );

        NodePoolCreateOptions {
            count: sizing.count,
            pool_type: model.pool_type.value_or_default(),
            tags: CollectionNormalizer::to_api(&model.tags),
            autoscaler: Some(sizing.autoscaler),
        }
    }

    pub fn update_options_into(
        model: &NodePoolModel,
        diags: &mut Diagnostics,
    ) -> NodePoolUpdateOptions {
        log!(Topic::Mapping, Debug, "mapping node pool model to update options");

        let root = AttrPath::root();
        let count = coerce::attr_to_i32(&model.node_count, &root.attr(attr::NODE_COUNT), diags);
        let sizing = AutoscalerResolver::resolve_outbound(
            &model.autoscaler,
            count,
            &root.attr(attr::AUTOSCALER),
            diags,
        );

        NodePoolUpdateOptions {
            count: sizing.count,
            tags: CollectionNormalizer::to_api(&model.tags),
            autoscaler: Some(sizing.autoscaler),
        }
    }

    pub fn api_to_model_into(
        cluster_id: i32,
        pool: &NodePool,
        diags: &mut Diagnostics,
    ) -> NodePoolModel {
        log!(
            Topic::Mapping,
            Debug,
            "mapping node pool {} of cluster {} from api",
            pool.id,
            cluster_id
        );

        let cluster_id = coerce::widen_i32(cluster_id);
        let pool_id = coerce::widen_i32(pool.id);
        let nodes = PoolNodeMapper::api_list_to_models(
            &pool.nodes,
            &AttrPath::new(attr::NODES),
            diags,
        );

        NodePoolModel {
            id: Attr::Known(CompositeId::new(cluster_id, pool_id).encode()),
            pool_id: Attr::Known(pool_id),
            cluster_id: Attr::Known(cluster_id),
            node_count: Attr::Known(coerce::widen_i32(pool.count)),
            pool_type: Attr::Known(pool.pool_type.clone()),
            tags: CollectionNormalizer::from_api(TAGS_KIND, pool.tags.clone()),
            nodes,
            autoscaler: AutoscalerResolver::resolve_inbound(&pool.autoscaler),
        }
    }

    /// Prefers the stored numeric ids and falls back to decoding `id`.
    pub fn extract_ids_into(model: &NodePoolModel, diags: &mut Diagnostics) -> (i32, i32) {
        let root = AttrPath::root();

        if let (Attr::Known(cluster_id), Attr::Known(pool_id)) = (&model.cluster_id, &model.pool_id)
        {
            return (
                coerce::to_i32(*cluster_id, &root.attr(attr::CLUSTER_ID), diags),
                coerce::to_i32(*pool_id, &root.attr(attr::POOL_ID), diags),
            );
        }

        let id_path = root.attr(attr::ID);
        let Attr::Known(id) = &model.id else {
            diags.error(
                DiagnosticClass::IdDecode,
                id_path,
                "node pool identifier unknown",
                "neither cluster_id and pool_id nor id is set",
            );
            return (0, 0);
        };

        match CompositeId::decode(id) {
            Ok(composite) => (
                coerce::to_i32(composite.parent, &id_path, diags),
                coerce::to_i32(composite.child, &id_path, diags),
            ),
            Err(err) => {
                diags.error(
                    DiagnosticClass::IdDecode,
                    id_path,
                    "invalid node pool identifier",
                    err.to_string(),
                );
                (0, 0)
            }
        }
    }
}

///
/// TESTS
///
