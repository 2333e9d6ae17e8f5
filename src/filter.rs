use crate::survey;
use crate::table::Table;

/// Equality constraints narrowing the working row set for a report request.
///
/// `None` fields impose no constraint. The physical-activity flag is
/// boolean-flavored: when set it restricts rows to the affirmative answer
/// rather than matching an arbitrary value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub district: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub hierarchy: Option<String>,
    pub civil_status: Option<String>,
    pub physical_activity: bool,
}

impl FilterSpec {
    /// Interpret a query-style parameter: unset, empty and "all" mean no filter
    pub fn param(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty() && v != "all")
    }

    pub fn is_empty(&self) -> bool {
        self.constraints().is_empty()
    }

    fn constraints(&self) -> Vec<(&'static str, &str)> {
        let mut constraints = Vec::new();
        if let Some(v) = &self.district {
            constraints.push((survey::DISTRICT, v.as_str()));
        }
        if let Some(v) = &self.gender {
            constraints.push((survey::GENDER, v.as_str()));
        }
        if let Some(v) = &self.age {
            constraints.push((survey::AGE, v.as_str()));
        }
        if let Some(v) = &self.hierarchy {
            constraints.push((survey::HIERARCHY, v.as_str()));
        }
        if let Some(v) = &self.civil_status {
            constraints.push((survey::CIVIL_STATUS, v.as_str()));
        }
        if self.physical_activity {
            constraints.push((survey::PHYSICAL_ACTIVITY, survey::YES));
        }
        constraints
    }
}

/// Row subset matching every constraint (logical AND). The source table is
/// never mutated. A constraint on a column absent from the table, or on a
/// value nothing matches, yields an empty subset rather than an error.
pub fn apply(table: &Table, spec: &FilterSpec) -> Table {
    let constraints = spec.constraints();
    if constraints.is_empty() {
        return table.clone();
    }

    table.retain(|row| constraints.iter().all(|(column, value)| row.is(column, value)))
}
