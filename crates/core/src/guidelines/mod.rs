//! Guideline decision procedures.
//!
//! One module per regional guideline. Each module owns:
//! - a tagged enum of the risk groups that guideline distinguishes,
//! - a `SUBTYPES` table mapping every sub-diagnosis label the guideline offers to its group,
//! - an `evaluate` function running the guideline's decision tree over precomputed
//!   [`TemporalFeatures`](crate::TemporalFeatures).
//!
//! The `SUBTYPES` table is the single source for both the form's option list (see
//! [`crate::Guideline::subtype_options`]) and the grouping used by `evaluate`, so the two cannot
//! drift apart. Labels absent from the table, or present with no group, fall through to the
//! guideline's default outcome.

pub mod argentina;
pub mod czech_slovak;
pub mod germany;
pub mod miwguc;
pub mod nordic;
pub mod spain_portugal;
pub mod uk;
pub mod us_pakistan;

/// Sub-diagnosis label and the risk group it belongs to, if the guideline grades it.
pub type SubtypeTable<G> = [(&'static str, Option<G>)];

/// Look up the risk group for a sub-diagnosis label.
///
/// Labels are matched exactly, as offered by the guideline's option list.
pub(crate) fn group_of<G: Copy>(table: &SubtypeTable<G>, label: &str) -> Option<G> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .and_then(|(_, group)| *group)
}

/// Option labels of a subtype table, in display order.
pub(crate) fn labels_of<G>(table: &SubtypeTable<G>) -> Vec<&'static str> {
    table.iter().map(|(label, _)| *label).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Group {
        A,
    }

    const TABLE: &SubtypeTable<Group> = &[("Graded", Some(Group::A)), ("Offered only", None)];

    #[test]
    fn lookup_is_exact() {
        assert_eq!(group_of(TABLE, "Graded"), Some(Group::A));
        assert_eq!(group_of(TABLE, "graded"), None);
        assert_eq!(group_of(TABLE, "Offered only"), None);
        assert_eq!(group_of(TABLE, ""), None);
        assert_eq!(labels_of(TABLE), vec!["Graded", "Offered only"]);
    }
}
