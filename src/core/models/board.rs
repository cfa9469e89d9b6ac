use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::seed_date;
use super::task::{Assignee, Priority, Task};
use crate::core::error::{DashboardError, Result};

/// Workflow stages. Declaration order is display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "in-progress",
            ColumnId::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Todo => "To Do",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }

    pub fn all() -> Vec<ColumnId> {
        vec![ColumnId::Todo, ColumnId::InProgress, ColumnId::Done]
    }

    pub fn parse(raw: &str) -> Result<ColumnId> {
        match raw {
            "todo" => Ok(ColumnId::Todo),
            "in-progress" => Ok(ColumnId::InProgress),
            "done" => Ok(ColumnId::Done),
            other => Err(DashboardError::UnknownColumn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn header_label(&self) -> String {
        format!("{} ({})", self.title, self.tasks.len())
    }
}

/// Result of a move request. Only `Moved` changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    SameColumn,
    TaskNotFound,
}

/// Per-column task counts shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub total: usize,
}

/// Column store for the kanban board.
///
/// Every column of [`ColumnId`] is always present, and a task id lives in at
/// most one column. Mutators never insert at a position: moves append to the
/// end of the target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: BTreeMap<ColumnId, Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board with every column present and empty.
    pub fn new() -> Self {
        let columns = ColumnId::all()
            .into_iter()
            .map(|id| (id, Column::new(id)))
            .collect();
        Self { columns }
    }

    /// Builds a board from per-column task lists, in the given order.
    /// Columns not mentioned stay empty.
    pub fn from_columns(entries: Vec<(ColumnId, Vec<Task>)>) -> Self {
        let mut board = Self::new();
        for (id, tasks) in entries {
            board.column_mut(id).tasks.extend(tasks);
        }
        board
    }

    /// Seed data the dashboard starts with.
    pub fn seed() -> Self {
        Self::from_columns(vec![
            (
                ColumnId::Todo,
                vec![
                    seed_task(
                        "task-1",
                        "Implement User Authentication",
                        "Set up JWT authentication and user roles",
                        Priority::High,
                        Assignee::new("John Doe", "JD"),
                        seed_date(2024, 1, 20),
                        3,
                    ),
                    seed_task(
                        "task-2",
                        "Design Dashboard Layout",
                        "Create responsive layout with Material-UI",
                        Priority::Medium,
                        Assignee::new("Jane Smith", "JS"),
                        seed_date(2024, 1, 22),
                        2,
                    ),
                ],
            ),
            (
                ColumnId::InProgress,
                vec![seed_task(
                    "task-3",
                    "Implement Reports Module",
                    "Create reports generation and management",
                    Priority::Medium,
                    Assignee::new("Alice Johnson", "AJ"),
                    seed_date(2024, 1, 23),
                    1,
                )],
            ),
            (
                ColumnId::Done,
                vec![seed_task(
                    "task-4",
                    "Project Setup",
                    "Initialize project and set up development environment",
                    Priority::High,
                    Assignee::new("Bob Wilson", "BW"),
                    seed_date(2024, 1, 15),
                    0,
                )],
            ),
        ])
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        self.columns.entry(id).or_insert_with(|| Column::new(id))
    }

    pub fn column_len(&self, id: ColumnId) -> usize {
        self.column(id).map(|c| c.tasks.len()).unwrap_or(0)
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.values().map(|c| c.tasks.len()).sum()
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            todo: self.column_len(ColumnId::Todo),
            in_progress: self.column_len(ColumnId::InProgress),
            done: self.column_len(ColumnId::Done),
            total: self.total_tasks(),
        }
    }

    pub fn find_task(&self, column: ColumnId, task_id: &str) -> Option<&Task> {
        self.column(column)?.tasks.iter().find(|t| t.id == task_id)
    }

    /// Column currently holding `task_id`, if any.
    pub fn locate(&self, task_id: &str) -> Option<ColumnId> {
        self.columns
            .values()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
            .map(|c| c.id)
    }

    /// Moves `task_id` from `source` to the end of `target`.
    ///
    /// Dropping onto the same column is a no-op, and so is a task id that is
    /// not in `source`. Total task count is unchanged either way.
    pub fn move_task(&mut self, task_id: &str, source: ColumnId, target: ColumnId) -> MoveOutcome {
        if source == target {
            return MoveOutcome::SameColumn;
        }

        let source_tasks = &mut self.column_mut(source).tasks;
        let Some(index) = source_tasks.iter().position(|t| t.id == task_id) else {
            return MoveOutcome::TaskNotFound;
        };
        let task = source_tasks.remove(index);
        self.column_mut(target).tasks.push(task);
        MoveOutcome::Moved
    }

    /// Overwrites the whole record for `task_id` in `column` with `patch`.
    ///
    /// There is no field merge: callers pass a fully populated task. The stored
    /// id stays `task_id`. Returns `false` when the task is not in `column`.
    pub fn edit_task(&mut self, column: ColumnId, task_id: &str, mut patch: Task) -> bool {
        let tasks = &mut self.column_mut(column).tasks;
        match tasks.iter().position(|t| t.id == task_id) {
            Some(index) => {
                patch.id = task_id.to_string();
                tasks[index] = patch;
                true
            }
            None => false,
        }
    }

    /// Removes every task matching `task_id` from `column`, returning how many
    /// were removed.
    pub fn delete_task(&mut self, column: ColumnId, task_id: &str) -> usize {
        let tasks = &mut self.column_mut(column).tasks;
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        before - tasks.len()
    }
}

fn seed_task(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    assignee: Assignee,
    due_date: NaiveDate,
    comments: u32,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        assignee,
        due_date,
        comments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &Board, column: ColumnId) -> Vec<String> {
        board
            .column(column)
            .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn seed_board_shape() {
        let board = Board::seed();
        assert_eq!(board.column_len(ColumnId::Todo), 2);
        assert_eq!(board.column_len(ColumnId::InProgress), 1);
        assert_eq!(board.column_len(ColumnId::Done), 1);
        assert_eq!(board.total_tasks(), 4);

        let order: Vec<ColumnId> = board.columns().map(|c| c.id).collect();
        assert_eq!(order, ColumnId::all());
    }

    #[test]
    fn dragging_task_3_to_done_appends_it() {
        let mut board = Board::seed();
        let outcome = board.move_task("task-3", ColumnId::InProgress, ColumnId::Done);

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(board.column_len(ColumnId::InProgress), 0);
        assert_eq!(ids(&board, ColumnId::Done), vec!["task-4", "task-3"]);
        assert_eq!(board.total_tasks(), 4);
    }

    #[test]
    fn move_onto_same_column_is_noop() {
        let mut board = Board::seed();
        let before = board.clone();
        assert_eq!(
            board.move_task("task-1", ColumnId::Todo, ColumnId::Todo),
            MoveOutcome::SameColumn
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_with_wrong_source_is_noop() {
        let mut board = Board::seed();
        let before = board.clone();
        assert_eq!(
            board.move_task("task-1", ColumnId::Done, ColumnId::InProgress),
            MoveOutcome::TaskNotFound
        );
        assert_eq!(board, before);
    }

    #[test]
    fn edit_overwrites_whole_record() {
        let mut board = Board::seed();
        let original = board.find_task(ColumnId::Todo, "task-2").cloned().unwrap();

        let mut merged = original.clone();
        merged.update_title("Redesign layout".to_string());
        assert!(board.edit_task(ColumnId::Todo, "task-2", merged));
        let stored = board.find_task(ColumnId::Todo, "task-2").unwrap();
        assert_eq!(stored.title, "Redesign layout");
        assert_eq!(stored.assignee, original.assignee);
        assert_eq!(stored.comments, original.comments);

        // A patch that was not pre-merged replaces the other fields too.
        let bare = Task {
            id: "task-2".to_string(),
            title: "Only a title".to_string(),
            description: String::new(),
            priority: Priority::Low,
            assignee: Assignee::new("", ""),
            due_date: NaiveDate::default(),
            comments: 0,
        };
        assert!(board.edit_task(ColumnId::Todo, "task-2", bare.clone()));
        assert_eq!(board.find_task(ColumnId::Todo, "task-2"), Some(&bare));
    }

    #[test]
    fn edit_keeps_stored_id() {
        let mut board = Board::seed();
        let mut patch = board.find_task(ColumnId::Todo, "task-1").cloned().unwrap();
        patch.id = "task-4".to_string();
        assert!(board.edit_task(ColumnId::Todo, "task-1", patch));
        assert!(board.find_task(ColumnId::Todo, "task-1").is_some());
        assert_eq!(board.locate("task-4"), Some(ColumnId::Done));
    }

    #[test]
    fn edit_missing_task_writes_nothing() {
        let mut board = Board::seed();
        let before = board.clone();
        let patch = board.find_task(ColumnId::Todo, "task-1").cloned().unwrap();
        assert!(!board.edit_task(ColumnId::Done, "task-1", patch));
        assert_eq!(board, before);
    }

    #[test]
    fn delete_then_lookup_is_not_found() {
        let mut board = Board::seed();
        assert_eq!(board.delete_task(ColumnId::Todo, "task-1"), 1);
        assert!(board.find_task(ColumnId::Todo, "task-1").is_none());
        assert_eq!(board.total_tasks(), 3);
        assert_eq!(board.delete_task(ColumnId::Todo, "task-1"), 0);
    }

    #[test]
    fn stats_follow_moves() {
        let mut board = Board::seed();
        assert_eq!(
            board.stats(),
            BoardStats { todo: 2, in_progress: 1, done: 1, total: 4 }
        );
        board.move_task("task-1", ColumnId::Todo, ColumnId::InProgress);
        assert_eq!(
            board.stats(),
            BoardStats { todo: 1, in_progress: 2, done: 1, total: 4 }
        );
    }

    #[test]
    fn column_ids_parse_and_reject_unknown() {
        for id in ColumnId::all() {
            assert_eq!(ColumnId::parse(id.as_str()), Ok(id));
        }
        assert_eq!(
            ColumnId::parse("inProgress"),
            Err(DashboardError::UnknownColumn("inProgress".to_string()))
        );
    }

    #[test]
    fn header_label_includes_count() {
        let board = Board::seed();
        let todo = board.column(ColumnId::Todo).unwrap();
        assert_eq!(todo.header_label(), "To Do (2)");
    }
}
