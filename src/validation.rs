//! Input validation for planning problems.
//!
//! Checks structural integrity of tasks and workers before planning.
//! Detects:
//! - Duplicate IDs
//! - Dangling parent references
//! - Circular dependencies (DAG validation)
//! - Non-positive work sizes or rates
//! - An empty worker pool
//!
//! Every check guards a precondition of the planning loops: the
//! ready-front walk never terminates on a cyclic or dangling graph,
//! and runtimes divide by worker rates. Once inputs pass, planning is
//! a total function with no error path inside the optimization stages.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Task, Worker};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task references a parent that doesn't exist.
    DanglingParent,
    /// The dependency graph contains a cycle.
    CyclicDependency,
    /// A task has a work size that is not finite and positive.
    NonPositiveWork,
    /// A worker has a rate that is not finite and positive.
    NonPositiveRate,
    /// Tasks were supplied without any worker to place them on.
    NoWorkers,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a planning problem.
///
/// Checks:
/// 1. At least one worker when there are tasks to place
/// 2. No duplicate worker IDs
/// 3. No duplicate task IDs
/// 4. Every rate and work size is finite and positive
/// 5. Every parent reference points to an existing task
/// 6. No circular dependencies
///
/// An empty task set is valid (with or without workers) and plans to
/// an empty allocation.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], workers: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();

    if workers.is_empty() && !tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkers,
            format!("{} tasks but no workers to place them on", tasks.len()),
        ));
    }

    // Collect worker IDs
    let mut worker_ids = HashSet::new();
    for worker in workers {
        if !worker_ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }

        if !(worker.rate.is_finite() && worker.rate > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveRate,
                format!("Worker '{}' has non-positive rate {}", worker.id, worker.rate),
            ));
        }
    }

    // Collect task IDs
    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if !(task.work.is_finite() && task.work > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWork,
                format!("Task '{}' has non-positive work {}", task.id, task.work),
            ));
        }
    }

    // Check parent references
    for task in tasks {
        for parent in &task.parents {
            if !task_ids.contains(parent.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingParent,
                    format!("Task '{}' references unknown parent '{}'", task.id, parent),
                ));
            }
        }
    }

    // Check for cycles in the dependency graph (DFS-based)
    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(tasks: &[Task]) -> Option<ValidationError> {
    // Build adjacency list: parent_id → children
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();

    for task in tasks {
        for parent in &task.parents {
            adj.entry(parent.as_str()).or_default().push(task.id.as_str());
        }
    }

    // DFS cycle detection
    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
