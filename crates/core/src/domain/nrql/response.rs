use serde::Deserialize;
use serde_json::Value;

use crate::domain::value::ResultRecord;

/// Envelope of a NerdGraph NRQL response: `{data:{actor:{nrql:{results:[...]}}}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NrqlResponse {
    #[serde(default)]
    pub data: Option<ActorData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorData {
    #[serde(default)]
    pub actor: Option<Actor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub nrql: Option<NrqlResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NrqlResults {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl NrqlResponse {
    fn results(&self) -> Option<&Vec<Value>> {
        self.data
            .as_ref()?
            .actor
            .as_ref()?
            .nrql
            .as_ref()?
            .results
            .as_ref()
    }

    pub fn has_results(&self) -> bool {
        self.results().is_some()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flatten()
            .map(|error| error.message.as_str())
            .collect()
    }

    /// Object entries of `results`, in response order. Anything else is skipped.
    pub fn into_records(self) -> Vec<ResultRecord> {
        self.data
            .and_then(|data| data.actor)
            .and_then(|actor| actor.nrql)
            .and_then(|nrql| nrql.results)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(map) => Some(ResultRecord::from(map)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::CellValue;

    #[test]
    fn test_records_are_extracted_in_order() {
        let response: NrqlResponse = serde_json::from_str(
            r#"{"data":{"actor":{"nrql":{"results":[
                {"rpcmethod":"Play","RPS":12.5},
                {"rpcmethod":"Pause","RPS":3}
            ]}}}}"#,
        )
        .unwrap();

        assert!(response.has_results());
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("rpcmethod"), Some(&CellValue::from("Play")));
        assert_eq!(records[1].get("RPS"), Some(&CellValue::from(3i64)));
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let response: NrqlResponse = serde_json::from_str(
            r#"{"data":{"actor":{"nrql":{"results":[{"a":1},"oops",{"a":2}]}}}}"#,
        )
        .unwrap();

        assert_eq!(response.into_records().len(), 2);
    }

    #[test]
    fn test_missing_layers_give_no_records() {
        for body in [
            r#"{}"#,
            r#"{"data":null}"#,
            r#"{"data":{"actor":{}}}"#,
            r#"{"data":{"actor":{"nrql":null}}}"#,
        ] {
            let response: NrqlResponse = serde_json::from_str(body).unwrap();
            assert!(!response.has_results(), "{} should have no results", body);
            assert!(response.into_records().is_empty());
        }
    }

    #[test]
    fn test_error_messages() {
        let response: NrqlResponse = serde_json::from_str(
            r#"{"data":{"actor":{"nrql":null}},"errors":[{"message":"NRQL Syntax error","path":["actor","nrql"]}]}"#,
        )
        .unwrap();

        assert_eq!(response.error_messages(), ["NRQL Syntax error"]);
    }
}
