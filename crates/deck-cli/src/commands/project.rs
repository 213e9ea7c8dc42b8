//! Project commands, backed by the query cache.

use deck_api::projects::NewProject;
use deck_core::Project;
use deck_query::{Mutation, QueryKey};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::{commands::shared, output};

pub async fn handle(
    action: &ProjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        ProjectCommands::List => render_list(ctx, flags).await,
        ProjectCommands::Create { name } => {
            let project = ctx
                .api
                .create_project(&NewProject { name: name.clone() })
                .await?;
            // Only on success: a failed mutation never touches the cache.
            ctx.cache.on_mutation_success(Mutation::CreateProject);
            if !flags.quiet {
                println!("created project '{}' (id {})", project.name, project.id);
            }
            render_list(ctx, flags).await
        }
    }
}

/// The projects view: subscribe, read through the cache, render.
pub async fn render_list(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let _watching = ctx.cache.subscribe(QueryKey::Projects);
    let state = ctx.cache.read(QueryKey::Projects).await;
    let state = if state.is_loading {
        ctx.cache.settled(QueryKey::Projects).await
    } else {
        state
    };

    shared::warn_if_stale(&state, "projects");
    let projects: Vec<Project> = shared::decode(&state, "projects")?;
    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.created_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();

    output::emit(
        flags.format,
        &projects,
        &output::render_table(&["ID", "NAME", "CREATED"], &rows),
    )
}
