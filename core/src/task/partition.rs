//! Splitting the flat task list into the five display buckets.

use super::{Category, Task};

/// The display bucket a record resolves to: one of the four active
/// category sections, or the completed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Active(Category),
    Completed,
}

/// The partitioned board: one ordered list per bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board {
    pub drawings: Vec<Task>,
    pub write: Vec<Task>,
    pub review: Vec<Task>,
    pub other: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Board {
    /// Partitions a snapshot of the task list into buckets.
    ///
    /// A record with `done == true` always goes to the completed bucket
    /// regardless of category. Active buckets are ordered ascending by
    /// `added`, the completed bucket descending by `completed`; both
    /// sorts are stable so ties keep their original list order.
    pub fn partition(tasks: &[Task]) -> Self {
        let mut board = Board::default();
        for task in tasks {
            match task.bucket() {
                Bucket::Completed => board.completed.push(task.clone()),
                Bucket::Active(category) => board.active_mut(category).push(task.clone()),
            }
        }
        for category in Category::ACTIVE {
            board
                .active_mut(category)
                .sort_by(|a, b| a.added.cmp(&b.added));
        }
        board.completed.sort_by(|a, b| b.completed.cmp(&a.completed));
        board
    }

    /// The ordered contents of one active bucket.
    pub fn active(&self, category: Category) -> &[Task] {
        match category {
            Category::Drawings => &self.drawings,
            Category::Write => &self.write,
            Category::Review => &self.review,
            Category::Other => &self.other,
        }
    }

    fn active_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::Drawings => &mut self.drawings,
            Category::Write => &mut self.write,
            Category::Review => &mut self.review,
            Category::Other => &mut self.other,
        }
    }

    /// Total number of records across all buckets.
    pub fn total(&self) -> usize {
        Category::ACTIVE
            .iter()
            .map(|c| self.active(*c).len())
            .sum::<usize>()
            + self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, category: Category, added: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            owner: String::new(),
            category,
            added: added.to_string(),
            notes: String::new(),
            done: false,
            completed: String::new(),
        }
    }

    fn done_task(id: &str, category: Category, completed: &str) -> Task {
        Task {
            done: true,
            completed: completed.to_string(),
            ..task(id, category, "2024-01-01")
        }
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket() {
        let tasks = vec![
            task("a", Category::Drawings, "2024-01-02"),
            task("b", Category::Write, "2024-01-01"),
            task("c", Category::Other, "2024-01-03"),
            done_task("d", Category::Review, "2024-02-01"),
            done_task("e", Category::Other, "2024-02-02"),
        ];

        let board = Board::partition(&tasks);

        assert_eq!(board.total(), tasks.len());
        for original in &tasks {
            let mut hits = 0;
            for category in Category::ACTIVE {
                hits += board
                    .active(category)
                    .iter()
                    .filter(|t| t.id == original.id)
                    .count();
            }
            hits += board.completed.iter().filter(|t| t.id == original.id).count();
            assert_eq!(hits, 1, "record {} must appear exactly once", original.id);
        }
    }

    #[test]
    fn done_records_go_to_completed_regardless_of_category() {
        let tasks = vec![
            done_task("a", Category::Drawings, "2024-02-01"),
            done_task("b", Category::Other, "2024-02-02"),
        ];

        let board = Board::partition(&tasks);

        assert!(board.drawings.is_empty());
        assert!(board.other.is_empty());
        assert_eq!(board.completed.len(), 2);
    }

    #[test]
    fn unrecognized_category_lands_in_other_when_active() {
        // Unknown wire values resolve to Other before partitioning.
        let tasks = vec![task("a", Category::from_wire("mystery"), "2024-01-01")];

        let board = Board::partition(&tasks);

        assert_eq!(board.other.len(), 1);
        assert!(board.completed.is_empty());
    }

    #[test]
    fn active_buckets_sort_ascending_by_added() {
        let tasks = vec![
            task("late", Category::Write, "2024-03-01"),
            task("early", Category::Write, "2024-01-01"),
            task("mid", Category::Write, "2024-02-01"),
        ];

        let board = Board::partition(&tasks);

        let ids: Vec<&str> = board.write.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["early", "mid", "late"]);
    }

    #[test]
    fn added_ties_keep_original_list_order() {
        let tasks = vec![
            task("first", Category::Review, "2024-01-01"),
            task("second", Category::Review, "2024-01-01"),
            task("third", Category::Review, "2024-01-01"),
        ];

        let board = Board::partition(&tasks);

        let ids: Vec<&str> = board.review.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn completed_bucket_sorts_descending_with_stable_ties() {
        let tasks = vec![
            done_task("old", Category::Other, "2024-01-01"),
            done_task("tie_a", Category::Other, "2024-02-01"),
            done_task("tie_b", Category::Other, "2024-02-01"),
            done_task("new", Category::Other, "2024-03-01"),
        ];

        let board = Board::partition(&tasks);

        let ids: Vec<&str> = board.completed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["new", "tie_a", "tie_b", "old"]);
    }
}
