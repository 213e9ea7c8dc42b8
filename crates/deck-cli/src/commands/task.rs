//! Task commands, backed by the query cache.
//!
//! Task reads and invalidations are scoped to one project's key: mutating
//! tasks in project P never disturbs the cached tasks of any other project.

use deck_api::tasks::NewTask;
use deck_core::{CoreError, Task, TaskStatus};
use deck_query::{Mutation, QueryKey};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::{commands::shared, output};

pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        TaskCommands::List { project } => render_list(ctx, flags, *project).await,
        TaskCommands::Add {
            project,
            title,
            description,
        } => {
            let task = ctx
                .api
                .create_task(&NewTask {
                    title: title.clone(),
                    description: description.clone(),
                    project_id: *project,
                })
                .await?;
            ctx.cache
                .on_mutation_success(Mutation::CreateTask { project_id: *project });
            if !flags.quiet {
                println!("created task '{}' (id {})", task.title, task.id);
            }
            render_list(ctx, flags, *project).await
        }
        TaskCommands::Status {
            id,
            project,
            status,
        } => {
            let next: TaskStatus = status.parse()?;
            let current = find_task(ctx, *project, *id).await?;
            if !current.status.can_transition_to(next) {
                return Err(CoreError::InvalidTransition {
                    id: id.to_string(),
                    from: current.status.to_string(),
                    to: next.to_string(),
                }
                .into());
            }

            let updated = ctx.api.update_task_status(*id, next).await?;
            ctx.cache
                .on_mutation_success(Mutation::UpdateTaskStatus { project_id: *project });
            if !flags.quiet {
                println!("task {} is now {}", updated.id, updated.status);
            }
            render_list(ctx, flags, *project).await
        }
    }
}

/// The per-project tasks view: subscribe, read through the cache, render.
pub async fn render_list(
    ctx: &mut AppContext,
    flags: &GlobalFlags,
    project_id: i64,
) -> anyhow::Result<()> {
    let key = QueryKey::Tasks { project_id };
    let _watching = ctx.cache.subscribe(key);
    let state = ctx.cache.read(key).await;
    let state = if state.is_loading {
        ctx.cache.settled(key).await
    } else {
        state
    };

    shared::warn_if_stale(&state, "tasks");
    let tasks: Vec<Task> = shared::decode(&state, "tasks")?;
    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.title.clone(),
                t.status.to_string(),
                t.description.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    output::emit(
        flags.format,
        &tasks,
        &output::render_table(&["ID", "TITLE", "STATUS", "DESCRIPTION"], &rows),
    )
}

/// Look a task up in its project's cached list.
async fn find_task(ctx: &mut AppContext, project_id: i64, task_id: i64) -> anyhow::Result<Task> {
    let state = ctx.cache.read(QueryKey::Tasks { project_id }).await;
    let state = if state.is_loading {
        ctx.cache.settled(QueryKey::Tasks { project_id }).await
    } else {
        state
    };
    let tasks: Vec<Task> = shared::decode(&state, "tasks")?;
    tasks
        .into_iter()
        .find(|t| t.id == task_id)
        .ok_or_else(|| {
            CoreError::NotFound {
                entity_type: "task".to_string(),
                id: task_id.to_string(),
            }
            .into()
        })
}
