//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `achievements_core` linkage.
//! - Print the ranked seed overview so ordering rules can be eyeballed.

use achievements_core::{
    default_registry, AchievementsOverview, AchievementsService, Category, OverviewRequest,
    SectionContent, SectionView,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("achievements_core ping={}", achievements_core::ping());
    println!(
        "achievements_core version={}",
        achievements_core::core_version()
    );

    let registry = match default_registry() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to load embedded seed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = AchievementsService::new(registry);
    let request = OverviewRequest {
        show_all: true,
        show_community: true,
        ..OverviewRequest::default()
    };

    match service.overview(&request) {
        AchievementsOverview::Disabled { message_key } => println!("disabled={message_key}"),
        AchievementsOverview::Visible {
            global, community, ..
        } => {
            print_section(&global);
            print_section(&community);
        }
    }
    ExitCode::SUCCESS
}

fn print_section(section: &SectionView) {
    let label = match section.category {
        Category::Global => "global",
        Category::Community => "community",
    };
    let SectionContent::Titles(cards) = &section.content else {
        println!("[{label}] hidden");
        return;
    };
    for card in cards {
        let mark = if card.acquired { '*' } else { ' ' };
        println!(
            "[{label}] {mark} {} ({}/{})",
            card.name,
            card.achieved.len(),
            card.achieved.len() + card.unachieved.len()
        );
    }
}
