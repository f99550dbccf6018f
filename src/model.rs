use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// A recorded income or expense event, owned by the backend. The client only
/// ever holds a read-only copy in whatever order the server returned.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: i32,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Server-computed aggregate for one calendar month. Never recomputed here;
/// balance comes from the backend as-is.
#[derive(Clone, PartialEq, Deserialize)]
pub struct MonthlyReport {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// The not-yet-submitted form state. Amount stays a string end to end; the
/// backend does the coercion, matching the native number input.
#[derive(Clone, PartialEq, Serialize)]
pub struct Draft {
    pub amount: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: String,
}

#[derive(Clone, Copy, PartialEq)]
pub enum DraftField {
    Amount,
    Category,
    Description,
    Date,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            kind: TransactionKind::Expense,
            date: today(),
        }
    }

    /// Merges a single field into the draft, leaving the rest untouched.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Amount => self.amount = value,
            DraftField::Category => self.category = value,
            DraftField::Description => self.description = value,
            DraftField::Date => self.date = value,
        }
    }

    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.kind = kind;
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub fn current_year_month() -> (i32, u32) {
    let now = Local::now();
    (now.year(), now.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_to_expense_dated_today() {
        let draft = Draft::new();
        assert_eq!(draft.amount, "");
        assert_eq!(draft.category, "");
        assert_eq!(draft.description, "");
        assert!(draft.kind == TransactionKind::Expense);
        assert_eq!(draft.date, today());
    }

    #[test]
    fn set_field_merges_one_field_only() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Amount, "50".into());
        draft.set_field(DraftField::Category, "Food".into());

        let before = draft.clone();
        draft.set_field(DraftField::Description, "lunch".into());

        assert_eq!(draft.amount, before.amount);
        assert_eq!(draft.category, before.category);
        assert_eq!(draft.date, before.date);
        assert_eq!(draft.description, "lunch");
    }

    #[test]
    fn toggling_kind_leaves_other_fields_unmodified() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Amount, "12.50".into());
        draft.set_field(DraftField::Category, "Rent".into());
        draft.set_field(DraftField::Date, "2024-03-01".into());

        let before = draft.clone();
        draft.set_kind(TransactionKind::Income);
        draft.set_kind(TransactionKind::Expense);

        assert!(draft == before);
    }

    #[test]
    fn draft_serializes_to_the_wire_payload() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Amount, "50".into());
        draft.set_field(DraftField::Category, "Food".into());
        draft.set_field(DraftField::Date, "2024-03-01".into());

        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "amount": "50",
                "category": "Food",
                "description": "",
                "type": "expense",
                "date": "2024-03-01",
            })
        );
    }

    #[test]
    fn transaction_deserializes_without_description() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id": 7, "amount": 50.0, "category": "Food", "type": "expense", "date": "2024-03-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(tx.id, 7);
        assert!(tx.description.is_none());
        assert!(tx.kind == TransactionKind::Expense);
    }

    #[test]
    fn report_deserializes_backend_fields() {
        let report: MonthlyReport = serde_json::from_str(
            r#"{"total_income": 1000.0, "total_expense": 400.5, "balance": 599.5}"#,
        )
        .unwrap();
        assert_eq!(report.total_income, 1000.0);
        assert_eq!(report.total_expense, 400.5);
        assert_eq!(report.balance, 599.5);
    }
}
