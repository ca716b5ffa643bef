use fql_interceptor::{EntityMetadata, InterceptorFactory};
use query_builder::{
    ast::select::Select,
    build::select::{FromState, SelectBuilder},
    qualified,
};
use std::{collections::HashMap, sync::Once};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn wallets() -> EntityMetadata {
    EntityMetadata::new("wallets", "w")
        .with_schema("funds")
        .column("owner", "owner_name")
        .column("balance", "balance")
        .column("kind", "wallet_kind")
        .column("tenant", "tenant_id")
}

pub fn list_query(entity: &EntityMetadata) -> SelectBuilder<FromState> {
    SelectBuilder::new()
        .select(vec![qualified(entity.alias(), "id")])
        .from(entity.table_ref(), Some(entity.alias()))
}

/// Lists `id` of `entity` filtered by `filter`.
pub fn filtered(entity: &EntityMetadata, filter: &str) -> Select {
    filtered_from(list_query(entity), entity, filter)
}

/// Applies `filter` on top of an already scoped `builder`.
pub fn filtered_from(
    builder: SelectBuilder<FromState>,
    entity: &EntityMetadata,
    filter: &str,
) -> Select {
    init_tracing();
    let request = HashMap::from([("filter".to_string(), filter.to_string())]);

    InterceptorFactory::default()
        .apply(&request, builder, entity)
        .unwrap_or_else(|e| panic!("filter {filter} rejected: {e}"))
        .build()
}
