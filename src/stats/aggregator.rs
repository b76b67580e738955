//! Multi-policy result aggregation
//!
//! Collects per-policy results into one report for the output layer.
//! Insertion order is preserved so reports list policies the way the user
//! asked for them.

use super::SimulationResult;
use crate::engine::PolicyKind;

/// Ordered mapping from policy to its result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationReport {
    results: Vec<SimulationResult>,
}

impl SimulationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report, keeping the first result seen for each policy
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = SimulationResult>,
    {
        let mut report = Self::new();
        for result in results {
            report.insert(result);
        }
        report
    }

    /// Add a result; returns false if the policy was already present
    pub fn insert(&mut self, result: SimulationResult) -> bool {
        if self.get(result.policy()).is_some() {
            return false;
        }
        self.results.push(result);
        true
    }

    pub fn get(&self, policy: PolicyKind) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.policy() == policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimulationResult> {
        self.results.iter()
    }

    /// Policies in report order
    pub fn policies(&self) -> impl Iterator<Item = PolicyKind> + '_ {
        self.results.iter().map(|r| r.policy())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Policy with the least total head movement
    ///
    /// Ties go to the policy listed first.
    pub fn best_by_movement(&self) -> Option<&SimulationResult> {
        self.results
            .iter()
            .reduce(|best, r| if r.total_movement() < best.total_movement() { r } else { best })
    }

    /// Largest stop index across all sequences (chart x-axis extent)
    pub fn max_steps(&self) -> usize {
        self.results
            .iter()
            .map(|r| r.sequence().len())
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a SimulationReport {
    type Item = &'a SimulationResult;
    type IntoIter = std::slice::Iter<'a, SimulationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(policy: PolicyKind, sequence: Vec<u32>) -> SimulationResult {
        let requests = sequence.len() - 1;
        SimulationResult::from_sequence(policy, sequence, requests)
    }

    #[test]
    fn test_report_keeps_insertion_order() {
        let report = SimulationReport::from_results(vec![
            result(PolicyKind::Scan, vec![0, 10]),
            result(PolicyKind::Fcfs, vec![0, 5]),
        ]);
        let order: Vec<_> = report.policies().collect();
        assert_eq!(order, vec![PolicyKind::Scan, PolicyKind::Fcfs]);
    }

    #[test]
    fn test_report_rejects_duplicate_policy() {
        let mut report = SimulationReport::new();
        assert!(report.insert(result(PolicyKind::Sstf, vec![0, 10])));
        assert!(!report.insert(result(PolicyKind::Sstf, vec![0, 99])));
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(PolicyKind::Sstf).unwrap().total_movement(), 10);
    }

    #[test]
    fn test_best_by_movement_tie_goes_to_first() {
        let report = SimulationReport::from_results(vec![
            result(PolicyKind::Fcfs, vec![0, 20]),
            result(PolicyKind::Sstf, vec![0, 10]),
            result(PolicyKind::Scan, vec![0, 10]),
        ]);
        assert_eq!(report.best_by_movement().unwrap().policy(), PolicyKind::Sstf);
    }

    #[test]
    fn test_empty_report() {
        let report = SimulationReport::new();
        assert!(report.is_empty());
        assert!(report.best_by_movement().is_none());
        assert_eq!(report.max_steps(), 0);
    }

    #[test]
    fn test_max_steps() {
        let report = SimulationReport::from_results(vec![
            result(PolicyKind::Fcfs, vec![0, 20]),
            result(PolicyKind::CScan, vec![0, 20, 99, 0]),
        ]);
        assert_eq!(report.max_steps(), 4);
    }
}
