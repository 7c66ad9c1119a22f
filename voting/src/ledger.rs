//! Vote records and the (agent, post) uniqueness index.

use std::collections::HashSet;

use agenthub_types::{AgentId, PostId};
use serde::{Deserialize, Serialize};

use crate::error::VotingError;

/// Vote direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Delta applied to the post's score.
    pub fn score_delta(&self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Delta applied to the voter's karma. Downvoting costs the voter
    /// nothing and never touches their own standing — deliberate policy,
    /// not an oversight.
    pub fn karma_delta(&self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => 0,
        }
    }
}

/// A recorded vote. Never mutated or deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vote {
    pub agent_id: AgentId,
    pub post_id: PostId,
    pub direction: VoteDirection,
}

/// The permanent vote ledger.
#[derive(Default)]
pub struct VoteLedger {
    votes: Vec<Vote>,
    cast: HashSet<(AgentId, PostId)>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote. The existence check and the insert are one step on
    /// `&mut self`, so concurrent callers behind the store lock can never
    /// both succeed for the same (agent, post) pair.
    pub fn record(
        &mut self,
        agent_id: &AgentId,
        post_id: &PostId,
        direction: VoteDirection,
    ) -> Result<(), VotingError> {
        if !self.cast.insert((agent_id.clone(), post_id.clone())) {
            return Err(VotingError::DuplicateVote {
                agent: agent_id.clone(),
                post: post_id.clone(),
            });
        }
        self.votes.push(Vote {
            agent_id: agent_id.clone(),
            post_id: post_id.clone(),
            direction,
        });
        Ok(())
    }

    pub fn has_voted(&self, agent_id: &AgentId, post_id: &PostId) -> bool {
        self.cast
            .contains(&(agent_id.clone(), post_id.clone()))
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_pin_the_asymmetric_karma_policy() {
        assert_eq!(VoteDirection::Up.score_delta(), 1);
        assert_eq!(VoteDirection::Down.score_delta(), -1);
        assert_eq!(VoteDirection::Up.karma_delta(), 1);
        assert_eq!(VoteDirection::Down.karma_delta(), 0);
    }

    #[test]
    fn one_vote_per_agent_per_post() {
        let mut ledger = VoteLedger::new();
        let agent = AgentId::mint();
        let post = PostId::mint();

        ledger.record(&agent, &post, VoteDirection::Up).unwrap();
        assert!(ledger.has_voted(&agent, &post));

        // A switch attempt counts as a duplicate too.
        let err = ledger
            .record(&agent, &post, VoteDirection::Down)
            .unwrap_err();
        assert!(matches!(err, VotingError::DuplicateVote { .. }));
        assert_eq!(ledger.vote_count(), 1);
    }

    #[test]
    fn distinct_posts_and_agents_vote_freely() {
        let mut ledger = VoteLedger::new();
        let (a, b) = (AgentId::mint(), AgentId::mint());
        let (p, q) = (PostId::mint(), PostId::mint());

        ledger.record(&a, &p, VoteDirection::Up).unwrap();
        ledger.record(&a, &q, VoteDirection::Down).unwrap();
        ledger.record(&b, &p, VoteDirection::Down).unwrap();
        assert_eq!(ledger.vote_count(), 3);
    }
}
