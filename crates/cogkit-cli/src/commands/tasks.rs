//! `cogkit tasks`: show the starter kit's build task graph.

use serde::Serialize;

use cogkit_core::domain::tasks::{self, LEAF_TASKS, TaskDefinition};

use crate::{cli::TasksArgs, error::CliResult, output::OutputManager};

/// JSON shape of one composite task.
#[derive(Debug, Serialize)]
struct TaskView {
    name: &'static str,
    graph: String,
    tasks: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    watches: Option<&'static str>,
}

impl From<&TaskDefinition> for TaskView {
    fn from(def: &TaskDefinition) -> Self {
        Self {
            name: def.name,
            graph: def.graph.to_string(),
            tasks: def.graph.task_names(),
            watches: def.watches,
        }
    }
}

pub fn execute(args: TasksArgs, output: OutputManager) -> CliResult<()> {
    let selected = match &args.task {
        Some(name) => vec![tasks::find_task(name)?],
        None => tasks::pipeline(),
    };

    if args.flat {
        let names = match &args.task {
            Some(_) => selected.iter().flat_map(|def| def.graph.task_names()).collect(),
            None => LEAF_TASKS.to_vec(),
        };
        if output.is_json() {
            output.json(&names)?;
        } else {
            for name in names {
                output.print(name)?;
            }
        }
        return Ok(());
    }

    if output.is_json() {
        let views: Vec<TaskView> = selected.iter().map(TaskView::from).collect();
        output.json(&views)?;
        return Ok(());
    }

    if args.task.is_none() {
        output.header("Build tasks:")?;
    }
    for def in &selected {
        output.print(&def.to_string())?;
    }
    Ok(())
}
