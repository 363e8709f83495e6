//! Pure sort / filter / paginate helpers

use crate::domain::{Listable, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active column header
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The one active sort column and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F: SortField> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortSpec<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Same field flips direction; a new field starts ascending
    pub fn toggled(self, field: F) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(field)
        }
    }

    /// Direction arrow if `field` is the active column
    pub fn arrow_for(&self, field: F) -> Option<&'static str> {
        (self.field == field).then(|| self.direction.arrow())
    }
}

/// Stable sort on the lower-cased value of the active field. Descending
/// reverses the comparison only, so equal keys keep their input order.
pub fn sort_records<T: Listable>(records: &[T], spec: SortSpec<T::Sort>) -> Vec<&T> {
    let mut keyed: Vec<(String, &T)> = records
        .iter()
        .map(|r| (r.sort_value(spec.field).to_lowercase(), r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.cmp(b);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Case-insensitive substring match on any searchable field
pub fn matches_search<T: Listable>(record: &T, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || record
            .search_values()
            .iter()
            .any(|v| v.to_lowercase().contains(needle_lower))
}

/// Keep records matching `term`, preserving order
pub fn filter_records<'a, T: Listable>(records: impl IntoIterator<Item = &'a T>, term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_search(*r, &needle))
        .collect()
}

/// Number of pages needed for `len` rows
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows of 1-based `page`, clamped into the valid range
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let pages = page_count(rows.len(), page_size);
    if pages == 0 {
        return &[];
    }
    let page = page.clamp(1, pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, EmployeeSort};

    fn emp(id: u64, first: &str, last: &str, dept: &str) -> Employee {
        Employee {
            id: Some(id),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}@x.io", first.to_lowercase()),
            department_id: Some(1),
            department_name: Some(dept.into()),
        }
    }

    fn ids(rows: &[&Employee]) -> Vec<u64> {
        rows.iter().filter_map(|e| e.id).collect()
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let list = vec![emp(1, "bob", "A", "x"), emp(2, "Alice", "B", "x"), emp(3, "carl", "C", "x")];
        let sorted = sort_records(&list, SortSpec::ascending(EmployeeSort::FirstName));
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let list = vec![emp(1, "Ann", "Z", "x"), emp(2, "ann", "Y", "x"), emp(3, "Bea", "X", "x")];
        let spec = SortSpec { field: EmployeeSort::FirstName, direction: SortDirection::Descending };
        assert_eq!(ids(&sort_records(&list, spec)), vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_rules() {
        let spec = SortSpec::ascending(EmployeeSort::FirstName);
        let flipped = spec.toggled(EmployeeSort::FirstName);
        assert_eq!(flipped.direction, SortDirection::Descending);
        assert_eq!(flipped.toggled(EmployeeSort::FirstName), spec);

        let other = flipped.toggled(EmployeeSort::LastName);
        assert_eq!(other, SortSpec::ascending(EmployeeSort::LastName));
        assert_eq!(other.arrow_for(EmployeeSort::LastName), Some("↑"));
        assert_eq!(other.arrow_for(EmployeeSort::FirstName), None);
    }

    #[test]
    fn test_filter_matches_department_name() {
        let list = vec![emp(1, "Ann", "Lee", "Sales"), emp(2, "Bo", "Kim", "Engineering")];
        assert_eq!(ids(&filter_records(&list, "ENGIN")), vec![2]);
        assert_eq!(ids(&filter_records(&list, "")), vec![1, 2]);
        assert!(filter_records(&list, "zzz").is_empty());
    }

    #[test]
    fn test_page_count_and_last_page() {
        assert_eq!(page_count(0, 4), 0);
        assert_eq!(page_count(4, 4), 1);
        assert_eq!(page_count(9, 4), 3);

        let rows: Vec<u32> = (0..9).collect();
        assert_eq!(paginate(&rows, 1, 4), &[0, 1, 2, 3]);
        assert_eq!(paginate(&rows, 3, 4), &[8]);
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let rows: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&rows, 7, 4), &[4]);
        assert_eq!(paginate(&rows, 0, 4), &[0, 1, 2, 3]);
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 1, 4).is_empty());
    }
}
