//! Resource keys and the mutation → invalidation table.

use std::fmt;

/// Identifies one cached server resource.
///
/// Tasks are cached per project, so `Tasks { project_id: 7 }` and
/// `Tasks { project_id: 9 }` are independent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Projects,
    Tasks { project_id: i64 },
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Projects => f.write_str("projects"),
            Self::Tasks { project_id } => write!(f, "tasks/{project_id}"),
        }
    }
}

/// A server mutation that succeeded, tagged with enough context to name the
/// cache keys it invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateProject,
    UpdateProject,
    CreateTask { project_id: i64 },
    UpdateTaskStatus { project_id: i64 },
}

impl Mutation {
    /// The declared invalidation set.
    ///
    /// Task mutations touch only their own project's task list — never the
    /// task lists of other projects, and never the projects entry.
    #[must_use]
    pub fn invalidates(self) -> Vec<QueryKey> {
        match self {
            Self::CreateProject | Self::UpdateProject => vec![QueryKey::Projects],
            Self::CreateTask { project_id } | Self::UpdateTaskStatus { project_id } => {
                vec![QueryKey::Tasks { project_id }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_mutations_invalidate_projects_only() {
        assert_eq!(Mutation::CreateProject.invalidates(), vec![QueryKey::Projects]);
        assert_eq!(Mutation::UpdateProject.invalidates(), vec![QueryKey::Projects]);
    }

    #[test]
    fn task_mutations_invalidate_their_project_only() {
        assert_eq!(
            Mutation::CreateTask { project_id: 7 }.invalidates(),
            vec![QueryKey::Tasks { project_id: 7 }]
        );
        assert_eq!(
            Mutation::UpdateTaskStatus { project_id: 7 }.invalidates(),
            vec![QueryKey::Tasks { project_id: 7 }]
        );
    }

    #[test]
    fn keys_display_for_logs() {
        assert_eq!(QueryKey::Projects.to_string(), "projects");
        assert_eq!(QueryKey::Tasks { project_id: 7 }.to_string(), "tasks/7");
    }
}
