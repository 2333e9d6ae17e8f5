use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Category -> occurrence count for a single survey column.
/// Covers non-null values only; key-sorted for deterministic JSON.
pub type Distribution = BTreeMap<String, u64>;

/// One observed combination of two grouped columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossEntry {
    pub a: String,
    pub b: String,
    pub count: u64,
}

/// Joint category counts over two columns.
///
/// Serializes as a list of `{<label_a>: .., <label_b>: .., "count": ..}`
/// objects so each cross keeps the field names the dashboard charts expect.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab {
    pub label_a: &'static str,
    pub label_b: &'static str,
    pub entries: Vec<CrossEntry>,
}

impl CrossTab {
    /// Total count across all entries (rows where both columns are non-null)
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

struct CrossEntryView<'a> {
    label_a: &'static str,
    label_b: &'static str,
    entry: &'a CrossEntry,
}

impl Serialize for CrossEntryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.label_a, &self.entry.a)?;
        map.serialize_entry(self.label_b, &self.entry.b)?;
        map.serialize_entry("count", &self.entry.count)?;
        map.end()
    }
}

impl Serialize for CrossTab {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&CrossEntryView {
                label_a: self.label_a,
                label_b: self.label_b,
                entry,
            })?;
        }
        seq.end()
    }
}

/// Merged free-text mention counts across the columns of one multi-select
/// question, ranked by descending count (ties keep first-seen order).
///
/// Serializes as a JSON object in rank order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorTally {
    entries: Vec<(String, u64)>,
}

impl FactorTally {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of counts across the retained entries
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for FactorTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (value, count) in &self.entries {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}

/// Per-category counts of matching answers across several columns,
/// one entry per group value (e.g. workload metrics per hierarchy).
///
/// Serializes as a list of `{<group_label>: .., <key>: n, ..}` objects.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedCounts {
    pub group_label: &'static str,
    pub entries: Vec<GroupedCountsEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedCountsEntry {
    pub group: String,
    pub counts: Vec<(&'static str, u64)>,
}

struct GroupedCountsEntryView<'a> {
    group_label: &'static str,
    entry: &'a GroupedCountsEntry,
}

impl Serialize for GroupedCountsEntryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.entry.counts.len()))?;
        map.serialize_entry(self.group_label, &self.entry.group)?;
        for (key, count) in &self.entry.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl Serialize for GroupedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&GroupedCountsEntryView {
                group_label: self.group_label,
                entry,
            })?;
        }
        seq.end()
    }
}

/// Demographic breakdown of the most-mentioned factors:
/// factor -> category -> count, kept in factor rank order.
///
/// Serializes as a JSON object of objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorBreakdown {
    entries: Vec<(String, Distribution)>,
}

impl FactorBreakdown {
    pub fn new(entries: Vec<(String, Distribution)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Distribution)] {
        &self.entries
    }

    pub fn get(&self, factor: &str) -> Option<&Distribution> {
        self.entries
            .iter()
            .find(|(f, _)| f == factor)
            .map(|(_, d)| d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FactorBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (factor, counts) in &self.entries {
            map.serialize_entry(factor, counts)?;
        }
        map.end()
    }
}

/// One computed value inside a report section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(f64),
    Distribution(Distribution),
    CrossTab(CrossTab),
    Tally(FactorTally),
    GroupedCounts(GroupedCounts),
    Breakdown(FactorBreakdown),
}

/// A named report bundle: report key -> computed value, kept in the order
/// the section definition declares (serialized as a JSON object).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    items: Vec<(&'static str, ReportValue)>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: ReportValue) {
        self.items.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&ReportValue> {
        self.items.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The three percentages blended into the organizational climate index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateComponents {
    pub recognition_percentage: f64,
    pub communication_percentage: f64,
    pub development_percentage: f64,
}

/// Key performance indicators over the current row subset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiReport {
    pub total_responses: u64,
    pub physical_activity_percentage: f64,
    pub needs_improvement_percentage: f64,
    pub safety_training_percentage: f64,
    pub occupational_knowledge_percentage: f64,
    pub medical_checkup_percentage: f64,
    pub additional_services_percentage: f64,
    pub integral_health_index: f64,
    pub overload_index: f64,
    pub work_life_balance_index: f64,
    pub organizational_climate_index: f64,
    pub economic_satisfaction_percentage: f64,
    pub work_accidents_rate: f64,
    pub service_usage_percentage: f64,
    pub top_factors_to_improve: FactorTally,
    pub climate_components: ClimateComponents,
}

/// Distinct values available to the dashboard filter controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub distritos: Vec<String>,
    pub generos: Vec<String>,
    pub edades: Vec<String>,
    pub jerarquias: Vec<String>,
    pub estados_civiles: Vec<String>,
}

/// The full dashboard bundle: every section plus the filter catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub demographics: Section,
    pub habits: Section,
    pub health: Section,
    pub knowledge: Section,
    pub quality_of_life: Section,
    pub kpis: KpiReport,
    pub filter_options: FilterOptions,
}

/// The filtered bundle: sections recomputed over a row subset
/// (no filter catalog, which always reflects the full dataset)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredReport {
    pub demographics: Section,
    pub habits: Section,
    pub health: Section,
    pub knowledge: Section,
    pub quality_of_life: Section,
    pub kpis: KpiReport,
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, crate::error::Error>;
