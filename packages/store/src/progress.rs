//! Task progress aggregation.
//!
//! Completed and in-progress tasks are independent shares of the total. The
//! two shares never exceed 100% together since the status counts are
//! disjoint; whatever remains is pending.

use crate::models::{Task, TaskStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaskProgress {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl TaskProgress {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self::from_statuses(tasks.iter().map(|t| t.status))
    }

    pub fn from_statuses(statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        let mut progress = Self::default();
        for status in statuses {
            progress.total += 1;
            match status {
                TaskStatus::Pending => progress.pending += 1,
                TaskStatus::InProgress => progress.in_progress += 1,
                TaskStatus::Completed => progress.completed += 1,
            }
        }
        progress
    }

    fn share(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn completed_percent(&self) -> f64 {
        self.share(self.completed)
    }

    pub fn in_progress_percent(&self) -> f64 {
        self.share(self.in_progress)
    }

    /// Headline figure shown next to the bar.
    pub fn completed_percent_rounded(&self) -> u32 {
        self.completed_percent().round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TaskStatus::*;

    #[test]
    fn test_empty_is_zero() {
        let p = TaskProgress::from_tasks(&[]);
        assert_eq!(p.total, 0);
        assert_eq!(p.completed_percent(), 0.0);
        assert_eq!(p.in_progress_percent(), 0.0);
        assert_eq!(p.completed_percent_rounded(), 0);
    }

    #[test]
    fn test_all_completed_is_hundred() {
        let p = TaskProgress::from_statuses([Completed, Completed, Completed]);
        assert_eq!(p.completed_percent_rounded(), 100);
        assert_eq!(p.in_progress_percent(), 0.0);
    }

    #[test]
    fn test_mixed_counts() {
        let p = TaskProgress::from_statuses([Completed, InProgress, Pending, Pending]);
        assert_eq!(p.completed, 1);
        assert_eq!(p.in_progress, 1);
        assert_eq!(p.pending, 2);
        assert_eq!(p.completed_percent(), 25.0);
        assert_eq!(p.in_progress_percent(), 25.0);
        assert!(p.completed_percent() + p.in_progress_percent() <= 100.0);
    }

    #[test]
    fn test_rounding() {
        let p = TaskProgress::from_statuses([Completed, Pending, Pending]);
        assert_eq!(p.completed_percent_rounded(), 33);
    }
}
