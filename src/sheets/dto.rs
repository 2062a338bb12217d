use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRangeResponse {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<Vec<Value>>>,
}

impl ValueRangeResponse {
    /// Rows rendered as text. `None` when the payload had no cells at all.
    pub fn into_text_rows(self) -> Option<Vec<Vec<String>>> {
        let rows: Vec<Vec<String>> = self
            .values?
            .into_iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        if rows.iter().all(|row| row.is_empty()) {
            None
        } else {
            Some(rows)
        }
    }
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
