//! Append-only proposal list.

use crate::model::proposal::Proposal;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ProposalResult<T> = Result<T, ProposalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalError {
    /// Like requested for a position outside the current list.
    IndexOutOfRange { index: usize, len: usize },
}

impl ProposalError {
    pub fn message_key(self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "achievements.proposals.error.index_out_of_range",
        }
    }
}

impl Display for ProposalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "proposal index {index} out of range (len {len})")
            }
        }
    }
}

impl Error for ProposalError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalLog {
    proposals: Vec<Proposal>,
}

impl ProposalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a zero-like proposal and returns its index.
    pub fn add_proposal(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> usize {
        self.push(Proposal::new(title, description))
    }

    /// Appends an already built proposal, resetting likes to zero.
    pub fn push(&mut self, mut proposal: Proposal) -> usize {
        proposal.likes = 0;
        self.proposals.push(proposal);
        let index = self.proposals.len() - 1;
        info!(
            "event=proposal_add module=proposal status=ok index={} total={}",
            index,
            self.proposals.len()
        );
        index
    }

    /// Adds one like to the proposal at `index` and returns its new count.
    pub fn increment_like(&mut self, index: usize) -> ProposalResult<u32> {
        let len = self.proposals.len();
        let Some(proposal) = self.proposals.get_mut(index) else {
            warn!(
                "event=proposal_like module=proposal status=out_of_range index={} len={}",
                index, len
            );
            return Err(ProposalError::IndexOutOfRange { index, len });
        };
        Ok(proposal.add_like())
    }

    pub fn get(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
