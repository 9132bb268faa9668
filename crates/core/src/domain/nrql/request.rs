use serde::Serialize;

use super::query::NrqlQuery;

/// NerdGraph document fetching raw NRQL results for a set of accounts.
///
/// The NRQL text is never spliced into the document: it travels as the `$nrql` variable, so
/// quoting is left to JSON string escaping.
pub const NRQL_RESULTS_DOCUMENT: &str =
    "query NrqlResults($accounts: [Int]!, $nrql: Nrql!) { actor { nrql(accounts: $accounts, query: $nrql) { results } } }";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NrqlVariables {
    pub accounts: Vec<i64>,
    pub nrql: String,
}

/// Body of a GraphQL POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: NrqlVariables,
}

impl GraphQlRequest {
    pub fn nrql(query: &NrqlQuery, account_id: i64) -> Self {
        Self {
            query: NRQL_RESULTS_DOCUMENT,
            variables: NrqlVariables {
                accounts: vec![account_id],
                nrql: query.as_str().to_string(),
            },
        }
    }
}
