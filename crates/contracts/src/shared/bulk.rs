use serde::{Deserialize, Serialize};

/// Outcome of one item of a fan-out operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BulkItemOutcome {
    Succeeded,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItemResult {
    pub id: String,
    #[serde(flatten)]
    pub outcome: BulkItemOutcome,
}

/// Per-identifier report of a bulk action, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    pub items: Vec<BulkItemResult>,
}

impl BulkReport {
    pub fn from_results<I, E>(results: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<(), E>)>,
        E: ToString,
    {
        let items = results
            .into_iter()
            .map(|(id, result)| BulkItemResult {
                id,
                outcome: match result {
                    Ok(()) => BulkItemOutcome::Succeeded,
                    Err(e) => BulkItemOutcome::Failed {
                        reason: e.to_string(),
                    },
                },
            })
            .collect();
        Self { items }
    }

    pub fn succeeded_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.outcome == BulkItemOutcome::Succeeded)
            .map(|i| i.id.clone())
            .collect()
    }

    /// `(id, reason)` pairs of failed items.
    pub fn failures(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .filter_map(|i| match &i.outcome {
                BulkItemOutcome::Failed { reason } => Some((i.id.clone(), reason.clone())),
                BulkItemOutcome::Succeeded => None,
            })
            .collect()
    }

    pub fn succeeded_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.outcome == BulkItemOutcome::Succeeded)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.items.len() - self.succeeded_count()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed_count() == 0
    }
}
