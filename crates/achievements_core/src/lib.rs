//! Core domain logic for the achievements feature.
//! This crate is the single source of truth for ranking and mutation rules.

pub mod logging;
pub mod model;
pub mod proposal;
pub mod ranking;
pub mod registry;
pub mod seed;
pub mod service;
pub mod starfield;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::achievement::{Achievement, Decoration, Title};
pub use model::draft::{AchievementDraft, ValidationError};
pub use model::proposal::Proposal;
pub use model::visibility::AchievementsVisibility;
pub use proposal::proposal_log::{ProposalError, ProposalLog, ProposalResult};
pub use ranking::{
    compare_titles, filter_by_category, partition_achievements, rank_titles,
    AchievementPartition, Category,
};
pub use registry::title_registry::{
    RegistryError, RegistryResult, TitleRegistry, TitleRepository,
};
pub use seed::{default_registry, registry_from_json, registry_from_path, SeedError};
pub use service::achievements_service::{AchievementsService, ServiceError, ServiceResult};
pub use service::overview::{
    build_overview, AchievementsOverview, OverviewRequest, ProposalsView, SectionContent,
    SectionView, TitleCard,
};
pub use starfield::{
    AnimatorState, FrameOutcome, Star, StarSprite, Starfield, StarfieldAnimator,
    StarfieldConfig, Viewport,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
