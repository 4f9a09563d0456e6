//! Server-side state for dashboard pages.
//!
//! The journey editor page is rendered with a preloaded store: the journey (or a blank
//! template when it does not exist), the workspace's segments and its message templates.
//! Stored resources that fail to convert degrade the page rather than failing it.

pub mod journey_state;

use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{CompletionStatus, PreloadedState},
    server::{
        data::{
            email_template::EmailTemplateRepository, journey::JourneyRepository,
            segment::SegmentRepository,
        },
        error::AppError,
        model::{
            email_template::EmailTemplate, journey::Journey, segment::Segment,
            workspace::Workspace,
        },
        service::dashboard::journey_state::{default_state, journey_to_state},
        util::parse::parse_hyphenated_uuid,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the preloaded state of the journey editor page.
    ///
    /// Fetches the journey, the workspace's non-internal segments and its email templates
    /// concurrently, then assembles the store:
    /// - `messages` always holds every template
    /// - `journeys` and the editor graph come from the journey when it exists and
    ///   converts; otherwise the editor gets the blank `New Journey - {id}` graph
    /// - `segments` is set only when every segment converts
    ///
    /// # Arguments
    /// - `workspace` - Workspace resolved for the request
    /// - `journey_id` - Raw route parameter
    ///
    /// # Returns
    /// - `Ok(Some(PreloadedState))` - Page state
    /// - `Ok(None)` - `journey_id` is not a UUID; the page does not exist
    /// - `Err(AppError)` - Database error
    pub async fn journey_page(
        &self,
        workspace: Workspace,
        journey_id: &str,
    ) -> Result<Option<PreloadedState>, AppError> {
        let Some(id) = parse_hyphenated_uuid(journey_id) else {
            return Ok(None);
        };

        let journey_repo = JourneyRepository::new(self.db);
        let segment_repo = SegmentRepository::new(self.db);
        let template_repo = EmailTemplateRepository::new(self.db);

        let (journey, segments, templates) = tokio::try_join!(
            recover_invalid("journey", journey_repo.find_by_id(workspace.id, id)),
            recover_invalid("segments", async {
                segment_repo.get_all_by_workspace(workspace.id).await.map(Some)
            }),
            template_repo.get_all_by_workspace(workspace.id),
        )?;

        Ok(Some(build_state(
            workspace,
            journey_id,
            journey.flatten(),
            segments.flatten(),
            templates,
        )))
    }
}

/// Turns a conversion failure into `Ok(None)`, passing other results through.
async fn recover_invalid<T>(
    resource: &str,
    query: impl std::future::Future<Output = Result<Option<T>, AppError>>,
) -> Result<Option<Option<T>>, AppError> {
    match query.await {
        Ok(value) => Ok(Some(value)),
        Err(AppError::InternalErr(err)) => {
            tracing::debug!("Omitting {} from journey page: {}", resource, err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn build_state(
    workspace: Workspace,
    journey_id: &str,
    journey: Option<Journey>,
    segments: Option<Vec<Segment>>,
    templates: Vec<EmailTemplate>,
) -> PreloadedState {
    let (journeys, editor) = match journey {
        Some(journey) => {
            let editor = journey_to_state(&journey.name, &journey.definition);
            (
                Some(CompletionStatus::Successful(vec![journey.into_dto()])),
                editor,
            )
        }
        None => (None, default_state(journey_id)),
    };

    PreloadedState {
        workspace: CompletionStatus::Successful(workspace.into_dto()),
        messages: CompletionStatus::Successful(
            templates.into_iter().map(EmailTemplate::into_dto).collect(),
        ),
        journeys,
        segments: segments.map(|segments| {
            CompletionStatus::Successful(segments.into_iter().map(Segment::into_dto).collect())
        }),
        editor,
    }
}
