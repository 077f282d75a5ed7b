//! Achievements use-case service.
//!
//! # Responsibility
//! - Provide the screen-level entry points: overview, add achievement,
//!   submit proposal, like proposal.
//! - Validate drafts before any mutation reaches the registry or the log.
//!
//! # Invariants
//! - A failed call leaves the registry and the proposal log unchanged.
//! - Service APIs never bypass `TitleRepository` contracts.

use crate::model::achievement::Title;
use crate::model::draft::{AchievementDraft, ValidationError};
use crate::model::proposal::Proposal;
use crate::proposal::proposal_log::{ProposalError, ProposalLog};
use crate::registry::title_registry::{RegistryError, TitleRepository};
use crate::service::overview::{build_overview, AchievementsOverview, OverviewRequest};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for achievements use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Form draft is missing a required field.
    Validation(ValidationError),
    /// Target title is missing (or registry invariant broken).
    Registry(RegistryError),
    /// Proposal position is invalid.
    Proposal(ProposalError),
}

impl ServiceError {
    /// Translation key the UI shows for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.message_key(),
            Self::Registry(RegistryError::TitleNotFound(_)) => {
                "achievements.form.error.title_not_found"
            }
            Self::Registry(_) => "achievements.form.error.invalid_title",
            Self::Proposal(err) => err.message_key(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Registry(err) => write!(f, "{err}"),
            Self::Proposal(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Registry(err) => Some(err),
            Self::Proposal(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RegistryError> for ServiceError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<ProposalError> for ServiceError {
    fn from(value: ProposalError) -> Self {
        Self::Proposal(value)
    }
}

/// Session facade over a title repository and the proposal log.
pub struct AchievementsService<R: TitleRepository> {
    repo: R,
    proposals: ProposalLog,
}

impl<R: TitleRepository> AchievementsService<R> {
    /// Creates a service with an empty proposal log.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            proposals: ProposalLog::new(),
        }
    }

    /// Builds the screen projection for the current state.
    pub fn overview(&self, request: &OverviewRequest) -> AchievementsOverview {
        build_overview(self.repo.titles(), self.proposals.proposals(), request)
    }

    /// Validates `draft` and appends it as an unachieved achievement.
    ///
    /// Returns the target title's new achievement count.
    pub fn add_achievement(
        &mut self,
        title_name: &str,
        draft: AchievementDraft,
    ) -> ServiceResult<usize> {
        let achievement = match draft.into_achievement() {
            Ok(achievement) => achievement,
            Err(err) => {
                warn!(
                    "event=achievement_submit module=service status=invalid reason={:?}",
                    err
                );
                return Err(err.into());
            }
        };
        Ok(self.repo.append_achievement(title_name, achievement)?)
    }

    /// Validates `draft` and records it as a zero-like proposal.
    ///
    /// Returns the new proposal index.
    pub fn submit_proposal(&mut self, draft: AchievementDraft) -> ServiceResult<usize> {
        let proposal = match draft.into_proposal() {
            Ok(proposal) => proposal,
            Err(err) => {
                warn!(
                    "event=proposal_submit module=service status=invalid reason={:?}",
                    err
                );
                return Err(err.into());
            }
        };
        Ok(self.proposals.push(proposal))
    }

    /// Adds one like and returns the proposal's new like count.
    pub fn like_proposal(&mut self, index: usize) -> ServiceResult<u32> {
        Ok(self.proposals.increment_like(index)?)
    }

    pub fn proposals(&self) -> &[Proposal] {
        self.proposals.proposals()
    }

    pub fn titles(&self) -> &[Title] {
        self.repo.titles()
    }

    /// Exact-match lookup used by the title detail view.
    pub fn title(&self, name: &str) -> Option<&Title> {
        self.repo.titles().iter().find(|title| title.name == name)
    }

    /// Names offered by the submission form, in registry order.
    pub fn title_names(&self) -> Vec<String> {
        self.repo
            .titles()
            .iter()
            .map(|title| title.name.clone())
            .collect()
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::{AchievementsService, ServiceError};
    use crate::model::achievement::{Achievement, Title};
    use crate::model::draft::{AchievementDraft, ValidationError};
    use crate::proposal::proposal_log::ProposalError;
    use crate::registry::title_registry::{RegistryError, TitleRegistry};

    fn service() -> AchievementsService<TitleRegistry> {
        let registry = TitleRegistry::new(vec![Title::new("Analyst", false)
            .with_achievement(Achievement::new("3D", "Calc 2", true))])
        .expect("unique names");
        AchievementsService::new(registry)
    }

    #[test]
    fn invalid_draft_does_not_touch_registry() {
        let mut service = service();
        let err = service
            .add_achievement("Analyst", AchievementDraft::new("", "desc"))
            .unwrap_err();
        assert_eq!(err, ServiceError::Validation(ValidationError::MissingTitle));
        assert_eq!(service.titles()[0].achievement_count(), 1);
    }

    #[test]
    fn missing_title_maps_to_title_not_found_key() {
        let mut service = service();
        let err = service
            .add_achievement("Ghost", AchievementDraft::new("a", "b"))
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Registry(RegistryError::TitleNotFound("Ghost".to_string()))
        );
        assert_eq!(err.message_key(), "achievements.form.error.title_not_found");
    }

    #[test]
    fn added_achievement_starts_unachieved() {
        let mut service = service();
        let count = service
            .add_achievement("Analyst", AchievementDraft::new("Top Notch", "Calc 1"))
            .expect("title exists");
        assert_eq!(count, 2);
        let analyst = service.title("Analyst").expect("analyst");
        assert!(!analyst.is_acquired());
    }

    #[test]
    fn proposals_flow_through_submit_and_like() {
        let mut service = service();
        let index = service
            .submit_proposal(AchievementDraft::new("Early bird", "8:30 lecture"))
            .expect("valid draft");
        assert_eq!(service.like_proposal(index), Ok(1));
        assert_eq!(
            service.like_proposal(5),
            Err(ServiceError::Proposal(ProposalError::IndexOutOfRange {
                index: 5,
                len: 1
            }))
        );
        assert_eq!(service.proposals()[0].likes, 1);
    }
}
