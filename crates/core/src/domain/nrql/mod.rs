pub mod query;
pub mod request;
pub mod response;

pub use query::NrqlQuery;
pub use request::GraphQlRequest;
pub use response::NrqlResponse;
