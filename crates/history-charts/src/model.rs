// File: crates/history-charts/src/model.rs
// Summary: History records as written by the stats crawler, and the ordered dataset built from them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The numeric statistics plotted, one chart each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Followers,
    Articles,
    Likes,
    Views,
}

impl Field {
    /// Render order.
    pub const ALL: [Field; 4] = [Field::Followers, Field::Articles, Field::Likes, Field::Views];

    /// JSON key in the history document.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Followers => "followers",
            Field::Articles => "articles",
            Field::Likes => "likes",
            Field::Views => "views",
        }
    }

    /// Display name used for the dataset label and the Y axis title.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Followers => "粉丝数",
            Field::Articles => "文章数",
            Field::Likes => "被点赞数",
            Field::Views => "阅读量",
        }
    }

    /// Id of the drawing surface this field's chart is bound to.
    pub const fn surface_id(self) -> &'static str {
        match self {
            Field::Followers => "followersChart",
            Field::Articles => "articlesChart",
            Field::Likes => "likesChart",
            Field::Views => "viewsChart",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One dated entry of the history document. Fields other than `date` are
/// kept raw; the crawler may add keys this crate does not plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl HistoryRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into(), fields: BTreeMap::new() }
    }

    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.fields.insert(field.key().to_string(), value.into());
        self
    }

    /// Raw value of `field`; `None` when absent or JSON null.
    pub fn value(&self, field: Field) -> Option<&Value> {
        self.fields.get(field.key()).filter(|v| !v.is_null())
    }

    /// The date as a calendar day, when it is written as `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Records ordered ascending by date. Built once per render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryDataset {
    records: Vec<HistoryRecord>,
}

impl HistoryDataset {
    /// Order records by date string; equal dates keep their input order.
    pub fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        records.sort_by(|a, b| a.date.cmp(&b.date));
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shared X labels: every record's date, in order.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.date.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a HistoryDataset {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
