//! Read-only query views over a snapshot of employee records.
//!
//! Nothing here fails: absent or empty input degrades to an empty list or `0`.
//! Identity lookups return `None` and leave escalation to the caller.

use crate::models::Employee;

/// Borrowed view over one fetched collection of records.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeDirectory<'a> {
    records: &'a [Employee],
}

impl<'a> EmployeeDirectory<'a> {
    pub fn new(records: &'a [Employee]) -> Self {
        Self { records }
    }

    /// Case-sensitive substring match on the name. Unnamed records never match.
    pub fn filter_by_name_contains(&self, needle: &str) -> Vec<&'a Employee> {
        self.records
            .iter()
            .filter(|e| e.name.as_deref().is_some_and(|name| name.contains(needle)))
            .collect()
    }

    /// Highest present salary, or `0` when no record carries one.
    pub fn max_salary(&self) -> i32 {
        self.records.iter().filter_map(|e| e.salary).max().unwrap_or(0)
    }

    /// Records with a present salary, highest first, at most `n`.
    ///
    /// The sort is stable, so equal salaries keep their input order.
    pub fn top_earners(&self, n: usize) -> Vec<&'a Employee> {
        let mut paid: Vec<(i32, &'a Employee)> = self
            .records
            .iter()
            .filter_map(|e| e.salary.map(|salary| (salary, e)))
            .collect();
        paid.sort_by(|a, b| b.0.cmp(&a.0));
        paid.truncate(n);
        paid.into_iter().map(|(_, e)| e).collect()
    }

    /// Names of [`top_earners`](Self::top_earners). An unnamed earner keeps its slot as `None`.
    pub fn top_earning_names(&self, n: usize) -> Vec<Option<String>> {
        self.top_earners(n).into_iter().map(|e| e.name.clone()).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'a Employee> {
        self.records.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn employee(name: &str, salary: Option<i32>) -> Employee {
        Employee {
            id: format!("id-{}", name),
            name: Some(name.to_string()),
            salary,
            ..Default::default()
        }
    }

    fn names(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn filter_is_case_sensitive_and_keeps_order() {
        let records = vec![
            employee("Alice", None),
            employee("alina", None),
            employee("Malice", None),
            Employee { id: "anon".into(), ..Default::default() },
        ];
        let directory = EmployeeDirectory::new(&records);

        let matched: Vec<&str> = directory
            .filter_by_name_contains("lice")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(matched, vec!["id-Alice", "id-Malice"]);

        assert!(directory.filter_by_name_contains("ALI").is_empty());
        assert!(directory.filter_by_name_contains("Z").is_empty());
    }

    #[test]
    fn max_salary_sentinels() {
        assert_eq!(EmployeeDirectory::new(&[]).max_salary(), 0);

        let unpaid = vec![employee("A", None), employee("B", None)];
        assert_eq!(EmployeeDirectory::new(&unpaid).max_salary(), 0);

        let paid = vec![
            employee("A", Some(50000)),
            employee("B", Some(100000)),
            employee("C", Some(75000)),
        ];
        assert_eq!(EmployeeDirectory::new(&paid).max_salary(), 100000);
    }

    #[test]
    fn top_earners_fewer_than_n() {
        let records = vec![
            employee("Bob", Some(2000)),
            employee("Alice", Some(1000)),
            employee("Charlie", Some(1500)),
        ];
        let top = EmployeeDirectory::new(&records).top_earning_names(10);
        assert_eq!(top, names(&["Bob", "Charlie", "Alice"]));
    }

    #[test]
    fn top_earners_truncates_to_n() {
        let records: Vec<Employee> = (1..=12)
            .map(|i| employee(&format!("E{}", i), Some(i * 1000)))
            .collect();
        let top = EmployeeDirectory::new(&records).top_earning_names(10);

        assert_eq!(top.len(), 10);
        assert_eq!(top.first().cloned().flatten().as_deref(), Some("E12"));
        assert_eq!(top.last().cloned().flatten().as_deref(), Some("E3"));
    }

    #[test]
    fn top_earners_skip_absent_salaries() {
        let records = vec![
            employee("High", Some(5000)),
            employee("NullOne", None),
            employee("Low", Some(1000)),
            employee("NullTwo", None),
        ];
        let top = EmployeeDirectory::new(&records).top_earning_names(10);
        assert_eq!(top, names(&["High", "Low"]));
    }

    #[test]
    fn top_earners_ties_keep_input_order() {
        let records = vec![
            employee("First", Some(1000)),
            employee("Rich", Some(9000)),
            employee("Second", Some(1000)),
            employee("Third", Some(1000)),
        ];
        let top = EmployeeDirectory::new(&records).top_earning_names(3);
        assert_eq!(top, names(&["Rich", "First", "Second"]));
    }

    #[test]
    fn top_earners_keep_duplicate_and_unnamed_entries() {
        let records = vec![
            employee("Sam", Some(10)),
            Employee { id: "x".into(), salary: Some(20), ..Default::default() },
            employee("Sam", Some(5)),
        ];
        let top = EmployeeDirectory::new(&records).top_earning_names(10);
        assert_eq!(top, vec![None, Some("Sam".to_string()), Some("Sam".to_string())]);
    }

    #[test]
    fn find_by_id_exact_match() {
        let records = vec![employee("Alice", Some(1)), employee("Bob", Some(2))];
        let directory = EmployeeDirectory::new(&records);

        assert_eq!(directory.find_by_id("id-Bob").and_then(|e| e.name.as_deref()), Some("Bob"));
        assert!(directory.find_by_id("non-existent-id").is_none());
        assert!(directory.find_by_id("id-bob").is_none());
    }

    fn arb_employee() -> impl Strategy<Value = Employee> {
        (
            "[a-f0-9]{8}",
            proptest::option::of("[A-Za-z ]{0,8}"),
            proptest::option::of(0i32..1_000_000),
        )
            .prop_map(|(id, name, salary)| Employee { id, name, salary, ..Default::default() })
    }

    proptest! {
        #[test]
        fn filter_returns_exactly_the_matching_records(
            records in proptest::collection::vec(arb_employee(), 0..40),
            needle in "[A-Za-z]{0,2}",
        ) {
            let directory = EmployeeDirectory::new(&records);
            let matched = directory.filter_by_name_contains(&needle);
            let expected: Vec<&Employee> = records
                .iter()
                .filter(|e| e.name.as_ref().is_some_and(|n| n.contains(needle.as_str())))
                .collect();
            prop_assert_eq!(matched, expected);
        }

        #[test]
        fn max_salary_is_max_of_present_salaries(
            records in proptest::collection::vec(arb_employee(), 0..40),
        ) {
            let expected = records.iter().filter_map(|e| e.salary).fold(0, i32::max);
            prop_assert_eq!(EmployeeDirectory::new(&records).max_salary(), expected);
        }

        #[test]
        fn top_earners_are_sorted_and_bounded(
            records in proptest::collection::vec(arb_employee(), 0..40),
            n in 0usize..20,
        ) {
            let top = EmployeeDirectory::new(&records).top_earners(n);
            let paid = records.iter().filter(|e| e.salary.is_some()).count();

            prop_assert_eq!(top.len(), n.min(paid));
            for pair in top.windows(2) {
                prop_assert!(pair[0].salary >= pair[1].salary);
            }
        }
    }
}
