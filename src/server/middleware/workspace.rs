use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::workspace::WorkspaceRepository, error::AppError, model::workspace::Workspace,
    state::AppState, util::parse::parse_hyphenated_uuid,
};

/// Header selecting the workspace a request operates on.
pub static WORKSPACE_ID_HEADER: &str = "df-workspace-id";

/// Header naming the subscription group a CSV upload subscribes users to.
pub static SUBSCRIPTION_GROUP_ID_HEADER: &str = "df-subscription-group-id";

pub struct WorkspaceGuard<'a> {
    db: &'a DatabaseConnection,
    default_workspace: &'a str,
}

impl<'a> WorkspaceGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, default_workspace: &'a str) -> Self {
        Self {
            db,
            default_workspace,
        }
    }

    /// Resolves the workspace for a request.
    ///
    /// Uses the `df-workspace-id` header when present, otherwise the configured default
    /// workspace name.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The resolved workspace
    /// - `Err(AppError::BadRequest)` - Header is present but not a UUID
    /// - `Err(AppError::NotFound)` - No workspace matches
    pub async fn resolve(&self, headers: &HeaderMap) -> Result<Workspace, AppError> {
        let workspace_repo = WorkspaceRepository::new(self.db);

        let workspace = match headers.get(WORKSPACE_ID_HEADER) {
            Some(value) => {
                let Some(id) = value.to_str().ok().and_then(parse_hyphenated_uuid) else {
                    return Err(AppError::BadRequest(format!(
                        "Header '{}' must be a UUID",
                        WORKSPACE_ID_HEADER
                    )));
                };

                workspace_repo.find_by_id(id).await?
            }
            None => workspace_repo.find_by_name(self.default_workspace).await?,
        };

        workspace.ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))
    }
}

/// Attaches the resolved `Workspace` to the request as an extension.
pub async fn require_workspace(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let workspace = WorkspaceGuard::new(&state.db, &state.default_workspace)
        .resolve(request.headers())
        .await?;

    request.extensions_mut().insert(workspace);

    Ok(next.run(request).await)
}
