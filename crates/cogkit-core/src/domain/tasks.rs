//! The starter kit's front-end build task graph.
//!
//! The tasks themselves run inside an external task runner; this module only
//! records their names and how the composite tasks combine them with
//! `series` (one after another) and `parallel` (all at once). Nothing here
//! executes or resolves anything: a composite that names another composite
//! keeps the reference as a plain task name.

use std::fmt;

use crate::domain::error::DomainError;

/// Tasks implemented directly by the task runner's plugins.
pub const LEAF_TASKS: &[&str] = &[
    "clean:css",
    "compile:sass",
    "minify:css",
    "lint:js",
    "lint:js-with-fail",
    "lint:css",
    "lint:css-with-fail",
    "compile:js",
    "compile:styleguide",
    "browsersync",
    "browsersync:reload",
    "test:css",
];

/// A node of a task composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskNode {
    Task(&'static str),
    Series(Vec<TaskNode>),
    Parallel(Vec<TaskNode>),
}

impl TaskNode {
    /// Task names referenced by this node, in declared order.
    pub fn task_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, out: &mut Vec<&'static str>) {
        match self {
            Self::Task(name) => out.push(*name),
            Self::Series(nodes) | Self::Parallel(nodes) => {
                for node in nodes {
                    node.collect_names(out);
                }
            }
        }
    }
}

impl fmt::Display for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, nodes) = match self {
            Self::Task(name) => return f.write_str(name),
            Self::Series(nodes) => ("series", nodes),
            Self::Parallel(nodes) => ("parallel", nodes),
        };
        write!(f, "{label}(")?;
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}")?;
        }
        f.write_str(")")
    }
}

/// A named composite task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    pub name: &'static str,
    pub graph: TaskNode,
    /// Source files whose changes re-run the graph (watch tasks only).
    pub watches: Option<&'static str>,
}

impl TaskDefinition {
    fn new(name: &'static str, graph: TaskNode) -> Self {
        Self {
            name,
            graph,
            watches: None,
        }
    }

    fn watching(mut self, files: &'static str) -> Self {
        self.watches = Some(files);
        self
    }
}

impl fmt::Display for TaskDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.graph)?;
        if let Some(files) = self.watches {
            write!(f, "  [on change: {files}]")?;
        }
        Ok(())
    }
}

fn task(name: &'static str) -> TaskNode {
    TaskNode::Task(name)
}

fn series<const N: usize>(nodes: [TaskNode; N]) -> TaskNode {
    TaskNode::Series(nodes.into())
}

fn parallel<const N: usize>(nodes: [TaskNode; N]) -> TaskNode {
    TaskNode::Parallel(nodes.into())
}

/// Every composite task, in the order the starter kit registers them.
pub fn pipeline() -> Vec<TaskDefinition> {
    vec![
        TaskDefinition::new(
            "build",
            series([
                task("clean:css"),
                task("compile:sass"),
                task("minify:css"),
                parallel([
                    task("lint:js-with-fail"),
                    task("lint:css-with-fail"),
                    task("compile:js"),
                ]),
                task("compile:styleguide"),
            ]),
        ),
        TaskDefinition::new(
            "build:dev",
            series([
                task("clean:css"),
                task("compile:sass"),
                task("minify:css"),
                parallel([task("lint:js"), task("lint:css"), task("compile:js")]),
                task("compile:styleguide"),
            ]),
        ),
        TaskDefinition::new(
            "watch:sass",
            series([
                task("compile:sass"),
                task("minify:css"),
                task("browsersync:reload"),
            ]),
        )
        .watching("sass"),
        TaskDefinition::new(
            "watch:js",
            series([task("lint:js"), task("browsersync:reload")]),
        )
        .watching("js"),
        TaskDefinition::new("watch", parallel([task("watch:sass"), task("watch:js")])),
        TaskDefinition::new(
            "serve",
            parallel([task("build:dev"), task("browsersync"), task("watch")]),
        ),
    ]
}

/// Look up a composite task by name.
pub fn find_task(name: &str) -> Result<TaskDefinition, DomainError> {
    pipeline()
        .into_iter()
        .find(|def| def.name == name)
        .ok_or_else(|| DomainError::UnknownTask {
            name: name.to_string(),
        })
}

/// Whether `name` is a task the runner knows, leaf or composite.
pub fn is_known_task(name: &str) -> bool {
    LEAF_TASKS.contains(&name) || pipeline().iter().any(|def| def.name == name)
}
