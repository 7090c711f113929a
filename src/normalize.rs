//! Response shapes accepted from each endpoint.
//!
//! Every variant an endpoint may answer with is listed in its enum; anything
//! unrecognised lands in `Other` and normalizes to an empty sequence.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::{MonthlyTrend, SummaryItem, Transaction};
use crate::validator::{coerce_number, coerce_text, normalize_transactions};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    List(Vec<Value>),
    Wrapped { summary: Vec<Value> },
    Mapping(Map<String, Value>),
    Other(Value),
}

impl SummaryResponse {
    pub fn into_items(self) -> Vec<SummaryItem> {
        match self {
            SummaryResponse::List(items) | SummaryResponse::Wrapped { summary: items } => {
                items.iter().filter_map(summary_entry).collect()
            }
            SummaryResponse::Mapping(map) => map
                .iter()
                .filter_map(|(category, total)| {
                    let total = coerce_number(Some(total));
                    (!category.is_empty() && total.is_finite()).then(|| SummaryItem {
                        category: category.clone(),
                        total,
                    })
                })
                .collect(),
            SummaryResponse::Other(_) => Vec::new(),
        }
    }
}

fn summary_entry(item: &Value) -> Option<SummaryItem> {
    let fields = item.as_object()?;
    let category = coerce_text(fields.get("category")).filter(|c| !c.is_empty())?;
    let total = coerce_number(fields.get("total"));
    total.is_finite().then_some(SummaryItem { category, total })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InsightResponse {
    List(Vec<Value>),
    Wrapped { insights: Vec<Value> },
    Other(Value),
}

impl InsightResponse {
    pub fn into_insights(self) -> Vec<String> {
        match self {
            InsightResponse::List(items) | InsightResponse::Wrapped { insights: items } => {
                items.iter().filter_map(|v| coerce_text(Some(v))).collect()
            }
            InsightResponse::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TransactionsResponse {
    List(Vec<Value>),
    Wrapped { transactions: Vec<Value> },
    Data { data: Vec<Value> },
    Other(Value),
}

impl TransactionsResponse {
    pub fn into_transactions(self) -> Vec<Transaction> {
        match self {
            TransactionsResponse::List(records)
            | TransactionsResponse::Wrapped {
                transactions: records,
            }
            | TransactionsResponse::Data { data: records } => normalize_transactions(records),
            TransactionsResponse::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TrendsResponse {
    List(Vec<Value>),
    Monthly { monthly_trends: Vec<Value> },
    Empty { trends: Vec<Value> },
    Other(Value),
}

impl TrendsResponse {
    pub fn into_trends(self) -> Vec<MonthlyTrend> {
        match self {
            TrendsResponse::List(items)
            | TrendsResponse::Monthly {
                monthly_trends: items,
            }
            | TrendsResponse::Empty { trends: items } => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            TrendsResponse::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(value: Value) -> Vec<SummaryItem> {
        serde_json::from_value::<SummaryResponse>(value)
            .unwrap()
            .into_items()
    }

    #[test]
    fn summary_accepts_bare_array() {
        let items = summary(json!([
            {"category": "Food", "total": 300},
            {"category": "Rent", "total": 700}
        ]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].category, "Rent");
        assert_eq!(items[1].total, 700.0);
    }

    #[test]
    fn summary_accepts_wrapped_backend_payload() {
        let items = summary(json!({
            "summary": [
                {"category": "Rent", "total": 700.0, "count": 1, "percentage": 70.0},
                {"category": "Food", "total": 300.0, "count": 2, "percentage": 30.0}
            ],
            "grand_total": 1000.0,
            "categories_count": 2
        }));
        assert_eq!(
            items.iter().map(|i| i.category.as_str()).collect::<Vec<_>>(),
            vec!["Rent", "Food"]
        );
    }

    #[test]
    fn summary_mapping_keeps_server_order() {
        let items = summary(json!({"Travel": 20, "Food": "30", "Broken": "n/a"}));
        assert_eq!(
            items,
            vec![
                SummaryItem {
                    category: "Travel".into(),
                    total: 20.0
                },
                SummaryItem {
                    category: "Food".into(),
                    total: 30.0
                },
            ]
        );
    }

    #[test]
    fn unknown_shapes_are_empty() {
        assert!(summary(json!("nope")).is_empty());
        assert!(summary(json!(null)).is_empty());
        let insights = serde_json::from_value::<InsightResponse>(json!(12))
            .unwrap()
            .into_insights();
        assert!(insights.is_empty());
    }

    #[test]
    fn insights_accept_both_shapes() {
        let bare = serde_json::from_value::<InsightResponse>(json!(["a", "b"]))
            .unwrap()
            .into_insights();
        let wrapped = serde_json::from_value::<InsightResponse>(json!({"insights": ["a", "b"]}))
            .unwrap()
            .into_insights();
        assert_eq!(bare, wrapped);
        assert_eq!(bare, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn transactions_accept_every_wrapper() {
        let record = json!({"id": 1, "amount": 50, "category": "Food", "date": "2024-01-01"});
        for body in [
            json!([record.clone()]),
            json!({"transactions": [record.clone()], "count": 1}),
            json!({"data": [record.clone()]}),
        ] {
            let parsed = serde_json::from_value::<TransactionsResponse>(body)
                .unwrap()
                .into_transactions();
            assert_eq!(parsed.len(), 1);
        }
    }

    #[test]
    fn data_wrapper_with_bad_id_renders_nothing() {
        let parsed = serde_json::from_value::<TransactionsResponse>(json!({
            "data": [{"id": "x", "amount": 50, "category": "Food", "date": "2024-01-01"}]
        }))
        .unwrap()
        .into_transactions();
        assert!(parsed.is_empty());
    }

    #[test]
    fn trends_read_monthly_and_empty_payloads() {
        let trends = serde_json::from_value::<TrendsResponse>(json!({
            "monthly_trends": [
                {"month": "2025-01", "total": 120.5, "count": 3, "average": 40.17, "top_category": "Food"},
                {"month": 7}
            ],
            "months_count": 2
        }))
        .unwrap()
        .into_trends();
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].top_category.as_deref(), Some("Food"));

        let empty = serde_json::from_value::<TrendsResponse>(json!({
            "message": "No transactions found. Please upload data first.",
            "trends": []
        }))
        .unwrap()
        .into_trends();
        assert!(empty.is_empty());
    }
}
