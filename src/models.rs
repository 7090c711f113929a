use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: f64,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SummaryItem {
    pub category: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    Idle,
    Loading,
    Success(usize),
    Error(String),
}

/// Body of a successful `POST /upload`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl UploadReceipt {
    /// Count reported by the backend, or what we sent when it didn't say.
    pub fn accepted_count(&self, sent: usize) -> usize {
        self.count.unwrap_or(sent)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryDetail {
    pub category: String,
    pub total: f64,
    pub count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub total: f64,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub top_category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub transactions_count: usize,
}

impl BackendHealth {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_count_falls_back_to_sent_records() {
        let receipt: UploadReceipt = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(receipt.accepted_count(3), 3);

        let receipt: UploadReceipt = serde_json::from_str(r#"{"count":2,"categories":["Food"]}"#).unwrap();
        assert_eq!(receipt.accepted_count(3), 2);
    }

    #[test]
    fn category_detail_reads_backend_payload() {
        let detail: CategoryDetail = serde_json::from_str(
            r#"{"category":"Food","total":80.0,"count":2,"average":40.0,"highest":50.0,"lowest":30.0,
                "transactions":[{"id":1,"amount":50.0,"category":"Food","date":"2025-01-02"}]}"#,
        )
        .unwrap();
        assert_eq!(detail.count, 2);
        assert_eq!(detail.transactions.len(), 1);
    }

    #[test]
    fn health_status_is_case_insensitive() {
        let health = BackendHealth {
            status: "Healthy".into(),
            transactions_count: 0,
        };
        assert!(health.is_healthy());
    }
}
