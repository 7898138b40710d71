//! Per-record evaluation of query conditions.

use std::cmp::Ordering;

use super::ImageRecord;
use crate::query::{CompareOp, FieldCondition};

impl ImageRecord {
    /// Evaluate one field condition. Missing fields and non-numeric
    /// operands never match.
    pub fn matches_condition(&self, condition: &FieldCondition) -> bool {
        let Some(actual) = self.get(&condition.field) else {
            return false;
        };

        match condition.op {
            CompareOp::Equals => actual.to_lowercase() == condition.value.to_lowercase(),
            op => compare_numeric(op, actual, &condition.value),
        }
    }

    /// Case-insensitive membership in the record's user tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

fn compare_numeric(op: CompareOp, actual: &str, expected: &str) -> bool {
    let (Some(left), Some(right)) = (parse_number(actual), parse_number(expected)) else {
        return false;
    };

    let ordering = left.partial_cmp(&right);
    match op {
        CompareOp::LessThan => ordering == Some(Ordering::Less),
        CompareOp::GreaterThan => ordering == Some(Ordering::Greater),
        // Negations of the strict comparisons.
        CompareOp::LessOrEqual => ordering != Some(Ordering::Greater),
        CompareOp::GreaterOrEqual => ordering != Some(Ordering::Less),
        CompareOp::Equals => ordering == Some(Ordering::Equal),
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}
