//! List filter conditions and their server query form.
//!
//! Conditions on the same field are alternatives (OR); different fields
//! narrow each other (AND). Groups keep the order in which their field was
//! first added.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterCondition {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<String>) -> Self {
        Self { field: field.into(), operator: operator.into(), value: value.into() }
    }

    /// Single quotes inside the value are doubled.
    fn to_clause(&self) -> String {
        format!("{} {} '{}'", self.field, self.operator, self.value.replace('\'', "''"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    conditions: Vec<FilterCondition>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn push(&mut self, condition: FilterCondition) {
        self.conditions.push(condition);
    }

    pub fn extend(&mut self, conditions: impl IntoIterator<Item = FilterCondition>) {
        self.conditions.extend(conditions);
    }

    /// Remove the condition at `index`; out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<FilterCondition> {
        (index < self.conditions.len()).then(|| self.conditions.remove(index))
    }

    pub fn replace(&mut self, conditions: Vec<FilterCondition>) {
        self.conditions = conditions;
    }

    /// Conditions grouped by field, in first-seen field order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&FilterCondition>)> {
        let mut groups: Vec<(&str, Vec<&FilterCondition>)> = Vec::new();
        for condition in &self.conditions {
            match groups.iter_mut().find(|(field, _)| *field == condition.field) {
                Some((_, members)) => members.push(condition),
                None => groups.push((condition.field.as_str(), vec![condition])),
            }
        }
        groups
    }

    /// `(a = '1' OR a = '2') AND (b = '3')`; empty set renders as `""`.
    pub fn to_query(&self) -> String {
        self.grouped()
            .into_iter()
            .map(|(_, members)| {
                let inner = members.iter().map(|c| c.to_clause()).collect::<Vec<_>>().join(" OR ");
                format!("({inner})")
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}
