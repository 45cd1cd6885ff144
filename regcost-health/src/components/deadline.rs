use chrono::NaiveDate;
use regcost_core::models::ComplianceDeadline;

/// `100 × met / assessable` as of `as_of`.
///
/// Deadlines that are neither completed nor yet due are not counted.
/// No assessable deadlines yields 100.
pub fn deadline_adherence(deadlines: &[ComplianceDeadline], as_of: NaiveDate) -> f64 {
    let (met, total) = deadlines
        .iter()
        .filter(|d| d.is_assessable(as_of))
        .fold((0usize, 0usize), |(met, total), d| {
            (met + usize::from(d.is_met()), total + 1)
        });

    if total == 0 {
        return 100.0;
    }
    100.0 * met as f64 / total as f64
}
