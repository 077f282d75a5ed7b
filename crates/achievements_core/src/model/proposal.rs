//! Community proposal record.

use serde::{Deserialize, Serialize};

/// Candidate achievement submitted by a user and awaiting likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub title: String,
    pub description: String,
    pub likes: u32,
}

impl Proposal {
    /// Creates a proposal with zero likes.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            likes: 0,
        }
    }

    /// Adds one like. Saturates instead of wrapping so likes never decrease.
    pub fn add_like(&mut self) -> u32 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }
}

#[cfg(test)]
mod tests {
    use super::Proposal;

    #[test]
    fn new_proposal_starts_without_likes() {
        let proposal = Proposal::new("Night owl", "Attend a lecture after 18:00");
        assert_eq!(proposal.likes, 0);
    }

    #[test]
    fn add_like_saturates_at_max() {
        let mut proposal = Proposal::new("a", "b");
        proposal.likes = u32::MAX;
        assert_eq!(proposal.add_like(), u32::MAX);
    }
}
