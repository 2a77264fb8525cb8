use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod error;
pub mod expense_sync;
pub mod forms;
pub mod income_book;
pub mod snapshot;
pub mod summary;

pub use error::{ApiError, StoreError, SyncError, ValidationError};
pub use expense_sync::{DataSource, ExpenseRemote, ExpenseSync, LoadOutcome, MutationOutcome};
pub use forms::{ExpenseForm, FormField, IncomeForm};
pub use income_book::{IncomeBook, IncomeRemote};
pub use snapshot::{ExpenseSnapshotStore, MemorySnapshotStore, SnapshotListener};
pub use summary::{category_totals, format_amount, total_amount, Amounted, CategoryTotal};

/// Prefix carried by identifiers minted in the browser while the API is unreachable
pub const LOCAL_ID_PREFIX: &str = "local_";

/// Identifier of an expense or income record, tagged with where it came from.
///
/// On the wire and in the local cache it is always a string. Locally minted
/// identifiers look like `local_<epoch_millis>`; anything else is treated as
/// issued by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordId {
    /// Issued by the remote API
    Remote(String),
    /// Minted locally during a fallback create (epoch millis)
    Local(i64),
}

impl RecordId {
    pub fn remote(id: impl Into<String>) -> Self {
        RecordId::Remote(id.into())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, RecordId::Local(_))
    }

    /// Mint a local identifier that does not collide with any id in `existing`.
    pub fn next_local<'a, I>(existing: I, now_millis: i64) -> Self
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let taken: Vec<i64> = existing
            .into_iter()
            .filter_map(|id| match id {
                RecordId::Local(millis) => Some(*millis),
                RecordId::Remote(_) => None,
            })
            .collect();

        let mut candidate = now_millis;
        while taken.contains(&candidate) {
            candidate += 1;
        }
        RecordId::Local(candidate)
    }

    /// Parse the string form used on the wire and in the cache
    pub fn parse(raw: &str) -> Self {
        if let Some(millis) = raw.strip_prefix(LOCAL_ID_PREFIX).and_then(canonical_millis) {
            return RecordId::Local(millis);
        }
        RecordId::Remote(raw.to_string())
    }
}

/// Only digit strings that print back identically count as local millis
fn canonical_millis(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse::<i64>().ok()
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Remote(id) => write!(f, "{}", id),
            RecordId::Local(millis) => write!(f, "{}{}", LOCAL_ID_PREFIX, millis),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The API may hand out numeric ids
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => RecordId::parse(&text),
            RawId::Signed(n) => RecordId::Remote(n.to_string()),
            RawId::Unsigned(n) => RecordId::Remote(n.to_string()),
        })
    }
}

/// Fixed set of expense categories, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Food,
    Transport,
    Entertainment,
    Utilities,
    Healthcare,
    Education,
    /// Also the landing spot for category names this client does not know
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Education,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|category| category.label() == s.trim())
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// A single expense as stored remotely and mirrored into the local cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: ExpenseCategory,
    /// ISO-like date string; may carry a time part from the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

impl Expense {
    pub fn from_payload(id: RecordId, payload: ExpensePayload) -> Self {
        Self {
            id,
            name: payload.name,
            amount: payload.amount,
            category: payload.category,
            date: payload.date,
        }
    }

    /// Overwrite every editable field, keeping the identifier
    pub fn apply(&mut self, payload: &ExpensePayload) {
        self.name = payload.name.clone();
        self.amount = payload.amount;
        self.category = payload.category;
        self.date = payload.date.clone();
    }

    /// Date truncated to calendar-date precision (`YYYY-MM-DD`)
    pub fn date_only(&self) -> &str {
        date_only(&self.date)
    }
}

/// Request body for creating or updating an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub name: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: String,
}

/// A single income entry. No category and no date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
}

impl Income {
    pub fn apply(&mut self, payload: &IncomePayload) {
        self.source = payload.source.clone();
        self.amount = payload.amount;
    }
}

/// Request body for creating or updating an income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomePayload {
    pub source: String,
    pub amount: f64,
}

/// Severity of a transient user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Success,
    Info,
    Warning,
    Error,
}

impl AlertSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertSeverity::Success => "alert-success",
            AlertSeverity::Info => "alert-info",
            AlertSeverity::Warning => "alert-warning",
            AlertSeverity::Error => "alert-error",
        }
    }
}

/// A pending user-visible message; the UI dismisses it after a few seconds
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub severity: AlertSeverity,
}

impl Alert {
    pub fn new(severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Error, message)
    }
}

/// Truncate an ISO-like date or timestamp to its `YYYY-MM-DD` part
pub fn date_only(date: &str) -> &str {
    match date.char_indices().nth(10) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}

/// A `null` field reads as the type's default, the same as a missing one
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Amounts arrive as numbers from the API but older cache entries hold the raw
/// form text, so accept both. `null` counts as zero.
fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match Option::<RawAmount>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawAmount::Number(n)) => Ok(n),
        Some(RawAmount::Text(text)) if text.trim().is_empty() => Ok(0.0),
        Some(RawAmount::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("local_1702516122000"), RecordId::Local(1702516122000));
        assert_eq!(RecordId::parse("42"), RecordId::remote("42"));

        // Prefix alone or a non-numeric suffix is not a local id
        assert_eq!(RecordId::parse("local_"), RecordId::remote("local_"));
        assert_eq!(RecordId::parse("local_abc"), RecordId::remote("local_abc"));
    }

    #[test]
    fn test_non_canonical_local_ids_keep_their_text() {
        for raw in ["local_007", "local_+5", "local_-3", "local_1e3"] {
            let id = RecordId::parse(raw);
            assert_eq!(id, RecordId::remote(raw));
            assert_eq!(id.to_string(), raw);
        }
        assert_eq!(RecordId::parse("local_0"), RecordId::Local(0));
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Local(1702516122000).to_string(), "local_1702516122000");
        assert_eq!(RecordId::remote("abc-123").to_string(), "abc-123");
    }

    #[test]
    fn test_record_id_accepts_numeric_json() {
        let id: RecordId = serde_json::from_str("17").unwrap();
        assert_eq!(id, RecordId::remote("17"));

        let id: RecordId = serde_json::from_str("\"local_99\"").unwrap();
        assert!(id.is_local());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"local_99\"");
    }

    #[test]
    fn test_next_local_skips_taken_ids() {
        let existing = vec![
            RecordId::Local(1000),
            RecordId::Local(1001),
            RecordId::remote("1002"),
        ];

        assert_eq!(RecordId::next_local(&existing, 1000), RecordId::Local(1002));
        assert_eq!(RecordId::next_local(&existing, 5000), RecordId::Local(5000));
        assert_eq!(RecordId::next_local(&[], 7), RecordId::Local(7));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!("Education".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Education);
        assert!("EducationOther".parse::<ExpenseCategory>().is_err());
        assert!("".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_category_list_is_distinct() {
        for (i, a) in ExpenseCategory::ALL.iter().enumerate() {
            for b in ExpenseCategory::ALL.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_expense_deserializes_server_and_cache_shapes() {
        let from_server = r#"{"id": 5, "name": "Coffee", "amount": 50, "category": "Food", "date": "2024-01-01T00:00:00"}"#;
        let expense: Expense = serde_json::from_str(from_server).unwrap();
        assert_eq!(expense.id, RecordId::remote("5"));
        assert_eq!(expense.amount, 50.0);
        assert_eq!(expense.date_only(), "2024-01-01");

        let from_cache = r#"{"id": "local_1", "name": "Bus", "amount": "12.5", "category": "Transport", "date": "2024-02-03"}"#;
        let expense: Expense = serde_json::from_str(from_cache).unwrap();
        assert_eq!(expense.id, RecordId::Local(1));
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_null_fields_do_not_spoil_the_list() {
        let raw = r#"[
            {"id": "1", "name": "Coffee", "amount": 50, "category": "Food", "date": "2024-01-01"},
            {"id": "2", "name": null, "amount": null, "category": null, "date": null}
        ]"#;
        let expenses: Vec<Expense> = serde_json::from_str(raw).unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].amount, 50.0);
        assert_eq!(expenses[1].name, "");
        assert_eq!(expenses[1].amount, 0.0);
        assert_eq!(expenses[1].category, ExpenseCategory::Other);
        assert_eq!(expenses[1].date, "");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let expense: Expense = serde_json::from_str(r#"{"id": "3"}"#).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.category, ExpenseCategory::Other);

        let income: Income = serde_json::from_str(r#"{"id": 4, "source": null, "amount": null}"#).unwrap();
        assert_eq!(income.source, "");
        assert_eq!(income.amount, 0.0);
    }

    #[test]
    fn test_unknown_category_becomes_other() {
        let raw = r#"{"id": "1", "name": "Gift", "amount": 10, "category": "Gifts", "date": "2024-01-01"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.category, ExpenseCategory::Other);
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-01-01T10:20:30Z"), "2024-01-01");
        assert_eq!(date_only("2024-01-01"), "2024-01-01");
        assert_eq!(date_only("2024"), "2024");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_apply_keeps_identifier() {
        let mut expense = Expense {
            id: RecordId::remote("9"),
            name: "Old".to_string(),
            amount: 1.0,
            category: ExpenseCategory::Rent,
            date: "2024-01-01".to_string(),
        };
        expense.apply(&ExpensePayload {
            name: "New".to_string(),
            amount: 2.0,
            category: ExpenseCategory::Food,
            date: "2024-03-04".to_string(),
        });

        assert_eq!(expense.id, RecordId::remote("9"));
        assert_eq!(expense.name, "New");
        assert_eq!(expense.amount, 2.0);
        assert_eq!(expense.category, ExpenseCategory::Food);
    }
}
