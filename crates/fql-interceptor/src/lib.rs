//! Turns the `filter` query parameter of a list request into a condition on
//! a [`SelectBuilder`](query_builder::build::select::SelectBuilder), with
//! every literal bound as a named parameter.

pub mod config;
pub mod entity;
pub mod error;
pub mod factory;
pub mod interceptor;
pub mod params;
pub mod request;
pub mod visit;

pub use config::FilterConfig;
pub use entity::EntityMetadata;
pub use error::FilterError;
pub use factory::InterceptorFactory;
pub use interceptor::{CompiledFilter, Filterable, Interceptor};
pub use params::ParameterBag;
pub use request::{QueryParams, QueryString};
