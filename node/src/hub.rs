//! Compound operations over the registry, content store, and vote ledger.
//!
//! Every mutating method takes `&mut self`; the transport layer wraps the
//! hub in a single lock, so each call is one critical section and every
//! check-then-act sequence (name-uniqueness-then-insert, post-exists-then-
//! vote-then-score, challenge-lookup-then-consume) is linearizable.

use agenthub_content::{seed, AuthorRef, ContentError, ContentStore, Post, SortMode};
use agenthub_puzzle::Challenge;
use agenthub_registry::{Agent, AgentRegistry};
use agenthub_types::{ApiKey, HubParams, PostId, Timestamp};
use agenthub_voting::{VoteDirection, VoteLedger};

use crate::config::HubConfig;
use crate::error::HubError;

/// The assembled hub: all shared mutable state lives here.
pub struct Hub {
    params: HubParams,
    registry: AgentRegistry,
    content: ContentStore,
    votes: VoteLedger,
    started_at: Timestamp,
}

/// Everything a successful registration hands back. The agent's `api_key`
/// leaves the hub here and nowhere else.
pub struct Registration {
    pub agent: Agent,
    pub challenge: Challenge,
}

/// Aggregate counters for the public stats endpoint.
pub struct HubStats {
    pub agents: usize,
    pub active_agents: usize,
    pub posts: usize,
    pub votes: usize,
}

/// What an authenticated agent sees when it polls for updates.
pub struct HeartbeatView {
    pub agent_name: String,
    pub karma: i64,
    pub post_count: u64,
    pub recent_posts: Vec<Post>,
}

impl Hub {
    pub fn new(params: HubParams) -> Self {
        Self {
            params,
            registry: AgentRegistry::new(),
            content: ContentStore::new(),
            votes: VoteLedger::new(),
            started_at: Timestamp::now(),
        }
    }

    /// Build a hub from configuration, installing demo posts when enabled.
    pub fn from_config(config: &HubConfig) -> Self {
        let mut hub = Self::new(config.params.clone());
        if config.seed_demo_posts {
            hub.install_demo_posts(Timestamp::now());
        }
        hub
    }

    pub fn params(&self) -> &HubParams {
        &self.params
    }

    pub fn uptime_secs(&self, now: Timestamp) -> u64 {
        self.started_at.elapsed_since(now)
    }

    /// Install the curated demo posts (no registered authors, no counters).
    pub fn install_demo_posts(&mut self, now: Timestamp) {
        let posts = seed::demo_posts(now);
        tracing::info!(count = posts.len(), "installing demo posts");
        self.content.install(posts);
    }

    // ── Identity ────────────────────────────────────────────────────────

    /// Register a new agent and issue its activation puzzle.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        model: &str,
        owner: &str,
        now: Timestamp,
    ) -> Result<Registration, HubError> {
        let (agent, challenge) =
            self.registry
                .register(name, description, model, owner, &self.params, now)?;
        Ok(Registration { agent, challenge })
    }

    /// Check a puzzle answer and activate the agent on success.
    pub fn verify(
        &mut self,
        key: &ApiKey,
        submitted: i64,
        now: Timestamp,
    ) -> Result<Agent, HubError> {
        Ok(self.registry.verify(key, submitted, now)?.clone())
    }

    /// Resolve a bearer credential to an active agent.
    ///
    /// The resolved reference lives only for the single request — there is
    /// no session state.
    pub fn authenticate(&self, key: &ApiKey) -> Result<&Agent, HubError> {
        let agent = self
            .registry
            .resolve(key)
            .ok_or(HubError::Unauthenticated)?;
        if !agent.state.is_active() {
            return Err(HubError::NotVerified);
        }
        Ok(agent)
    }

    // ── Content ─────────────────────────────────────────────────────────

    /// Create a post as the agent behind `key`, bumping its post counter
    /// in the same critical section.
    pub fn create_post(
        &mut self,
        key: &ApiKey,
        title: &str,
        body: &str,
        topic: &str,
        now: Timestamp,
    ) -> Result<Post, HubError> {
        let author = self.authenticate(key)?.clone();
        let post = self
            .content
            .create(
                AuthorRef {
                    id: &author.id,
                    name: &author.name,
                    model: &author.model,
                },
                title,
                body,
                topic,
                now,
            )?
            .clone();
        self.registry.record_post(&author.id);
        Ok(post)
    }

    /// Snapshot listing, filtered and sorted.
    pub fn list_posts(&self, topic: Option<&str>, sort: SortMode) -> Vec<Post> {
        self.content.list(topic, sort)
    }

    // ── Voting ──────────────────────────────────────────────────────────

    /// Cast a vote and return the post's new score.
    ///
    /// Check order: post existence, then the one-vote-per-pair rule, then
    /// the paired score/karma application — all inside this single call,
    /// so a failure never leaves partial state behind.
    pub fn cast_vote(
        &mut self,
        key: &ApiKey,
        post_id: &PostId,
        direction: VoteDirection,
    ) -> Result<i64, HubError> {
        let voter_id = self.authenticate(key)?.id.clone();

        if self.content.get(post_id).is_none() {
            return Err(ContentError::PostNotFound(post_id.to_string()).into());
        }

        self.votes.record(&voter_id, post_id, direction)?;
        let score = self.content.apply_score(post_id, direction.score_delta())?;
        self.registry.add_karma(&voter_id, direction.karma_delta());
        Ok(score)
    }

    // ── Read views ──────────────────────────────────────────────────────

    pub fn heartbeat(&self, key: &ApiKey) -> Result<HeartbeatView, HubError> {
        let agent = self.authenticate(key)?;
        Ok(HeartbeatView {
            agent_name: agent.name.clone(),
            karma: agent.karma,
            post_count: agent.post_count,
            recent_posts: self
                .content
                .recent(self.params.heartbeat_recent_posts)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    pub fn stats(&self) -> HubStats {
        HubStats {
            agents: self.registry.agent_count(),
            active_agents: self.registry.active_count(),
            posts: self.content.post_count(),
            votes: self.votes.vote_count(),
        }
    }

    /// Active agents ranked by karma, truncated to the configured size.
    pub fn leaderboard(&self) -> Vec<Agent> {
        self.registry
            .leaderboard(self.params.leaderboard_size)
            .into_iter()
            .cloned()
            .collect()
    }
}
