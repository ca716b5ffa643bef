use fql_interceptor::{EntityMetadata, QueryString};
use query_builder::build::select::{FromState, SelectBuilder};

pub fn donations() -> EntityMetadata {
    EntityMetadata::new("donations", "d").columns([
        ("name", "name"),
        ("age", "age"),
        ("status", "status"),
        ("amount", "amount"),
        ("fund", "fund_type"),
        ("createdAt", "created_at"),
    ])
}

pub fn donations_query(entity: &EntityMetadata) -> SelectBuilder<FromState> {
    SelectBuilder::new()
        .select(vec![query_builder::qualified(entity.alias(), "id")])
        .from(entity.table_ref(), Some(entity.alias()))
}

/// A request whose query string carries `filter` percent-encoded.
pub fn request(filter: &str) -> QueryString {
    let raw = format!("page=1&filter={}", urlencoding::encode(filter));
    QueryString::parse(&raw).unwrap_or_else(|e| panic!("bad query string {raw}: {e}"))
}
