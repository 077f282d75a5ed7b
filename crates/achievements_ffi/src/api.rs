//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen-level achievements functions to Dart via FRB.
//! - Own the per-process session (registry, proposals, starfield animators).
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through `ok=false` envelopes with a translation
//!   key, never through panics.

use achievements_core::{
    core_version as core_version_inner, default_registry, init_logging as init_logging_inner,
    ping as ping_inner, registry_from_path, Achievement, AchievementDraft, AchievementsOverview,
    AchievementsService, AchievementsVisibility, OverviewRequest, Proposal, SectionContent,
    SectionView, StarfieldAnimator, StarfieldConfig, TitleCard, TitleRegistry, Viewport,
};
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const SEED_PATH_ENV: &str = "ACHIEVEMENTS_SEED_PATH";

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

struct Session {
    service: AchievementsService<TitleRegistry>,
    animators: BTreeMap<u64, StarfieldAnimator>,
    next_animator: u64,
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling logs.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementItem {
    pub title: String,
    pub description: String,
    pub achieved: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCardItem {
    pub name: String,
    pub acquired: bool,
    /// Gif asset for the banner; `None` for unacquired titles.
    pub banner_asset: Option<String>,
    pub achieved: Vec<AchievementItem>,
    pub unachieved: Vec<AchievementItem>,
    pub hidden_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionItem {
    pub title_key: String,
    /// `titles|collapsed|disabled`.
    pub state: String,
    pub message_key: Option<String>,
    pub titles: Vec<TitleCardItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalItem {
    pub index: u32,
    pub title: String,
    pub description: String,
    pub likes: u32,
}

/// Overview envelope. `disabled_key` is set when every section is hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewResponse {
    pub disabled_key: Option<String>,
    pub global: Option<SectionItem>,
    pub community: Option<SectionItem>,
    pub proposals_title_key: Option<String>,
    pub proposals: Vec<ProposalItem>,
}

/// Generic action envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Count or index produced by the action.
    pub value: Option<u32>,
    /// Translation key for the failure message.
    pub message_key: Option<String>,
    /// Diagnostic message, not meant for direct display.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, value: usize) -> Self {
        Self {
            ok: true,
            value: Some(to_u32(value)),
            message_key: None,
            message: message.into(),
        }
    }

    fn failure(message_key: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value: None,
            message_key: Some(message_key.to_string()),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarSpriteItem {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub brightness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldFrame {
    /// `false` once the animator is unmounted; the host must stop requesting
    /// frames.
    pub reschedule: bool,
    pub color: Vec<u8>,
    pub sprites: Vec<StarSpriteItem>,
}

/// Builds the achievements screen projection.
///
/// `visibility` accepts `none|community|global|both`; anything else is `both`.
#[flutter_rust_bridge::frb(sync)]
pub fn achievements_overview(
    visibility: String,
    show_all: bool,
    show_community: bool,
) -> OverviewResponse {
    let request = OverviewRequest {
        visibility: AchievementsVisibility::parse(visibility.as_str()),
        show_all,
        show_community,
    };
    let session = lock_session();
    to_overview_response(session.service.overview(&request))
}

/// Title names for the submission form dropdown, in registry order.
#[flutter_rust_bridge::frb(sync)]
pub fn title_names() -> Vec<String> {
    lock_session().service.title_names()
}

/// Full achievement list of one title for the detail view.
#[flutter_rust_bridge::frb(sync)]
pub fn title_detail(name: String) -> Option<Vec<AchievementItem>> {
    lock_session()
        .service
        .title(name.as_str())
        .map(|title| title.achievements.iter().map(to_achievement_item).collect())
}

/// Appends a new unachieved achievement to the named title.
#[flutter_rust_bridge::frb(sync)]
pub fn achievements_add(
    title_name: String,
    title: String,
    description: String,
    image: Option<String>,
) -> ActionResponse {
    let mut draft = AchievementDraft::new(title, description);
    draft.image = image;
    let mut session = lock_session();
    match session.service.add_achievement(title_name.as_str(), draft) {
        Ok(count) => ActionResponse::success("Achievement saved.", count),
        Err(err) => ActionResponse::failure(err.message_key(), err.to_string()),
    }
}

/// Records a community proposal with zero likes.
#[flutter_rust_bridge::frb(sync)]
pub fn proposal_submit(title: String, description: String) -> ActionResponse {
    let mut session = lock_session();
    match session
        .service
        .submit_proposal(AchievementDraft::new(title, description))
    {
        Ok(index) => ActionResponse::success("Proposal submitted.", index),
        Err(err) => ActionResponse::failure(err.message_key(), err.to_string()),
    }
}

/// Adds one like to the proposal at `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn proposal_like(index: u32) -> ActionResponse {
    let mut session = lock_session();
    match session.service.like_proposal(index as usize) {
        Ok(likes) => ActionResponse::success("Proposal liked.", likes as usize),
        Err(err) => ActionResponse::failure(err.message_key(), err.to_string()),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn proposals_list() -> Vec<ProposalItem> {
    to_proposal_items(lock_session().service.proposals())
}

/// Seeds a new starfield for a mounted view and returns its handle.
#[flutter_rust_bridge::frb(sync)]
pub fn starfield_mount(width: f64, height: f64, now_ms: u64) -> u64 {
    let mut animator =
        StarfieldAnimator::from_config(&StarfieldConfig::default(), Viewport::new(width, height));
    animator.start(now_ms);

    let mut session = lock_session();
    let handle = session.allocate_animator_handle();
    session.animators.insert(handle, animator);
    info!(
        "event=starfield_mount module=ffi status=ok handle={} active={}",
        handle,
        session.animators.len()
    );
    handle
}

/// Advances the starfield and returns the sprites to draw this frame.
#[flutter_rust_bridge::frb(sync)]
pub fn starfield_frame(handle: u64, now_ms: u64) -> StarfieldFrame {
    let mut session = lock_session();
    let Some(animator) = session.animators.get_mut(&handle) else {
        return StarfieldFrame {
            reschedule: false,
            color: Vec::new(),
            sprites: Vec::new(),
        };
    };
    let outcome = animator.on_frame(now_ms);
    StarfieldFrame {
        reschedule: outcome == achievements_core::FrameOutcome::Reschedule,
        color: animator.field().star_color().to_vec(),
        sprites: animator
            .sprites()
            .into_iter()
            .map(|sprite| StarSpriteItem {
                id: sprite.id,
                x: sprite.x,
                y: sprite.y,
                brightness: sprite.brightness,
            })
            .collect(),
    }
}

/// Stops and drops the animator. Returns `false` for unknown handles.
#[flutter_rust_bridge::frb(sync)]
pub fn starfield_unmount(handle: u64) -> bool {
    let mut session = lock_session();
    match session.animators.remove(&handle) {
        Some(mut animator) => {
            animator.stop();
            true
        }
        None => false,
    }
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| Mutex::new(Session::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

impl Session {
    fn new() -> Self {
        Self {
            service: AchievementsService::new(load_registry()),
            animators: BTreeMap::new(),
            next_animator: 1,
        }
    }

    /// Next free non-zero handle; wraps around instead of overflowing.
    fn allocate_animator_handle(&mut self) -> u64 {
        loop {
            let handle = self.next_animator;
            self.next_animator = self.next_animator.wrapping_add(1).max(1);
            if handle != 0 && !self.animators.contains_key(&handle) {
                return handle;
            }
        }
    }
}

fn load_registry() -> TitleRegistry {
    if let Ok(raw) = std::env::var(SEED_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            match registry_from_path(trimmed) {
                Ok(registry) => return registry,
                Err(err) => warn!(
                    "event=seed_load module=ffi status=error source=env reason={}",
                    err
                ),
            }
        }
    }
    default_registry().unwrap_or_else(|err| {
        error!(
            "event=seed_load module=ffi status=error source=embedded reason={}",
            err
        );
        TitleRegistry::default()
    })
}

fn to_overview_response(overview: AchievementsOverview) -> OverviewResponse {
    match overview {
        AchievementsOverview::Disabled { message_key } => OverviewResponse {
            disabled_key: Some(message_key.to_string()),
            global: None,
            community: None,
            proposals_title_key: None,
            proposals: Vec::new(),
        },
        AchievementsOverview::Visible {
            global,
            community,
            proposals,
        } => OverviewResponse {
            disabled_key: None,
            global: Some(to_section_item(global)),
            community: Some(to_section_item(community)),
            proposals_title_key: Some(proposals.title_key.to_string()),
            proposals: to_proposal_items(&proposals.items),
        },
    }
}

fn to_section_item(section: SectionView) -> SectionItem {
    let (state, message_key, titles) = match section.content {
        SectionContent::Titles(cards) => (
            "titles",
            None,
            cards.into_iter().map(to_title_card_item).collect(),
        ),
        SectionContent::Collapsed => ("collapsed", None, Vec::new()),
        SectionContent::Disabled { message_key } => {
            ("disabled", Some(message_key.to_string()), Vec::new())
        }
    };
    SectionItem {
        title_key: section.title_key.to_string(),
        state: state.to_string(),
        message_key,
        titles,
    }
}

fn to_title_card_item(card: TitleCard) -> TitleCardItem {
    TitleCardItem {
        name: card.name,
        acquired: card.acquired,
        banner_asset: card.banner.map(|banner| banner.asset_key().to_string()),
        achieved: card.achieved.iter().map(to_achievement_item).collect(),
        unachieved: card.unachieved.iter().map(to_achievement_item).collect(),
        hidden_count: to_u32(card.hidden_count),
    }
}

fn to_achievement_item(achievement: &Achievement) -> AchievementItem {
    AchievementItem {
        title: achievement.title.clone(),
        description: achievement.description.clone(),
        achieved: achievement.achieved,
        image: achievement.image.clone(),
    }
}

fn to_proposal_items(proposals: &[Proposal]) -> Vec<ProposalItem> {
    proposals
        .iter()
        .enumerate()
        .map(|(index, proposal)| ProposalItem {
            index: to_u32(index),
            title: proposal.title.clone(),
            description: proposal.description.clone(),
            likes: proposal.likes,
        })
        .collect()
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
