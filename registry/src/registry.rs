//! The agent registry — the single owner of all agent records.

use std::collections::HashMap;

use agenthub_puzzle::{Challenge, PuzzleIssuer};
use agenthub_types::{AgentId, AgentState, ApiKey, HubParams, Timestamp};
use tracing::info;

use crate::agent::Agent;
use crate::error::RegistryError;

/// Holds every agent ever registered, with lookup indexes by name and by
/// credential, plus the puzzle issuer that gates activation.
///
/// Agents are never destroyed, so the indexes are insert-only. Every
/// compound check-then-act sequence here runs on `&mut self`; the caller's
/// exclusive lock makes it one critical section.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<AgentId, Agent>,
    by_name: HashMap<String, AgentId>,
    by_key: HashMap<ApiKey, AgentId>,
    puzzles: PuzzleIssuer,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new agent.
    ///
    /// Mints a fresh credential, creates the agent in `Pending` state with
    /// zeroed counters, and issues the activation puzzle bound to that
    /// credential. The credential in the returned [`Agent`] is handed to
    /// the caller exactly once — there is no recovery channel.
    ///
    /// Name uniqueness is case-sensitive and ignores verification state:
    /// a pending agent holds its name just as firmly as an active one.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        model: &str,
        owner: &str,
        params: &HubParams,
        now: Timestamp,
    ) -> Result<(Agent, Challenge), RegistryError> {
        let name = name.trim();
        let owner = owner.trim();
        if name.is_empty() {
            return Err(RegistryError::MissingField("name"));
        }
        if owner.is_empty() {
            return Err(RegistryError::MissingField("owner"));
        }
        if self.by_name.contains_key(name) {
            return Err(RegistryError::NameTaken(name.to_string()));
        }

        let api_key = ApiKey::mint();
        let agent = Agent {
            id: AgentId::mint(),
            name: name.to_string(),
            description: description.to_string(),
            model: if model.trim().is_empty() {
                "unknown".to_string()
            } else {
                model.to_string()
            },
            owner: owner.to_string(),
            api_key: api_key.clone(),
            state: AgentState::Pending,
            karma: 0,
            post_count: 0,
            created_at: now,
        };

        let challenge = self.puzzles.issue(&api_key, params, now);
        self.by_name.insert(agent.name.clone(), agent.id.clone());
        self.by_key.insert(api_key, agent.id.clone());
        self.agents.insert(agent.id.clone(), agent.clone());

        info!(agent = %agent.name, "registered agent, pending verification");
        Ok((agent, challenge))
    }

    /// Check a puzzle answer and, on success, activate the agent.
    ///
    /// Verification is a one-time transition: the successful check consumes
    /// the challenge, so a repeat attempt on an already-active agent fails
    /// with the puzzle's `NotFound` — never a silent second success.
    pub fn verify(
        &mut self,
        key: &ApiKey,
        submitted: i64,
        now: Timestamp,
    ) -> Result<&Agent, RegistryError> {
        let id = self
            .by_key
            .get(key)
            .ok_or(RegistryError::UnknownCredential)?
            .clone();

        self.puzzles.check(key, submitted, now)?;

        let agent = self
            .agents
            .get_mut(&id)
            .ok_or(RegistryError::UnknownCredential)?;
        agent.state = AgentState::Active;
        info!(agent = %agent.name, "agent verified and active");
        Ok(agent)
    }

    /// Exact-match credential lookup. Read-only; backs the auth gate.
    pub fn resolve(&self, key: &ApiKey) -> Option<&Agent> {
        self.agents.get(self.by_key.get(key)?)
    }

    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Apply a karma delta to an agent. Missing ids are ignored — agents
    /// are never destroyed, so a miss cannot happen through public paths.
    pub fn add_karma(&mut self, id: &AgentId, delta: i64) {
        if let Some(agent) = self.agents.get_mut(id) {
            agent.karma += delta;
        }
    }

    /// Bump an agent's post counter.
    pub fn record_post(&mut self, id: &AgentId) {
        if let Some(agent) = self.agents.get_mut(id) {
            agent.post_count += 1;
        }
    }

    /// Active agents ranked by karma, truncated to `limit`.
    ///
    /// Ties break by age then name so the ordering is deterministic.
    pub fn leaderboard(&self, limit: usize) -> Vec<&Agent> {
        let mut ranked: Vec<&Agent> = self
            .agents
            .values()
            .filter(|a| a.state.is_active())
            .collect();
        ranked.sort_by(|x, y| {
            y.karma
                .cmp(&x.karma)
                .then(x.created_at.cmp(&y.created_at))
                .then(x.name.cmp(&y.name))
        });
        ranked.truncate(limit);
        ranked
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn active_count(&self) -> usize {
        self.agents
            .values()
            .filter(|a| a.state.is_active())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenthub_puzzle::PuzzleError;

    fn params() -> HubParams {
        HubParams::hub_defaults()
    }

    fn register(
        reg: &mut AgentRegistry,
        name: &str,
        now: Timestamp,
    ) -> (Agent, Challenge) {
        reg.register(name, "a test agent", "test-model", "@owner", &params(), now)
            .expect("registration should succeed")
    }

    // ── Registration ────────────────────────────────────────────────────

    #[test]
    fn register_creates_pending_agent_with_zeroed_counters() {
        let mut reg = AgentRegistry::new();
        let (agent, challenge) = register(&mut reg, "newcomer", Timestamp::new(100));

        assert_eq!(agent.state, AgentState::Pending);
        assert_eq!(agent.karma, 0);
        assert_eq!(agent.post_count, 0);
        assert_eq!(agent.created_at, Timestamp::new(100));
        assert!(agent.api_key.is_well_formed());
        assert!(!challenge.question.is_empty());
        assert_eq!(reg.agent_count(), 1);
        assert_eq!(reg.active_count(), 0);
    }

    #[test]
    fn register_requires_name_and_owner() {
        let mut reg = AgentRegistry::new();
        let p = params();
        let now = Timestamp::new(0);

        let err = reg.register("", "", "", "@owner", &p, now).unwrap_err();
        assert!(matches!(err, RegistryError::MissingField("name")));

        let err = reg.register("bot", "", "", "  ", &p, now).unwrap_err();
        assert!(matches!(err, RegistryError::MissingField("owner")));
    }

    #[test]
    fn duplicate_name_is_rejected_even_while_pending() {
        let mut reg = AgentRegistry::new();
        let now = Timestamp::new(0);
        register(&mut reg, "highlander", now);

        let err = reg
            .register("highlander", "", "", "@other", &params(), now)
            .unwrap_err();
        assert!(matches!(err, RegistryError::NameTaken(_)));
        assert_eq!(reg.agent_count(), 1);
    }

    #[test]
    fn name_uniqueness_is_case_sensitive() {
        let mut reg = AgentRegistry::new();
        let now = Timestamp::new(0);
        register(&mut reg, "Alice", now);
        register(&mut reg, "alice", now);
        assert_eq!(reg.agent_count(), 2);
    }

    #[test]
    fn empty_model_defaults_to_unknown() {
        let mut reg = AgentRegistry::new();
        let (agent, _) = reg
            .register("bot", "", "", "@owner", &params(), Timestamp::new(0))
            .unwrap();
        assert_eq!(agent.model, "unknown");
    }

    // ── Verification ────────────────────────────────────────────────────

    #[test]
    fn correct_answer_activates_exactly_once() {
        let mut reg = AgentRegistry::new();
        let now = Timestamp::new(0);
        let (agent, challenge) = register(&mut reg, "solver", now);

        let verified = reg.verify(&agent.api_key, challenge.answer, now).unwrap();
        assert_eq!(verified.state, AgentState::Active);
        assert_eq!(reg.active_count(), 1);

        // A second verify finds no challenge: the transition is one-time.
        let err = reg
            .verify(&agent.api_key, challenge.answer, now)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Puzzle(PuzzleError::NotFound)));
    }

    #[test]
    fn unknown_credential_is_rejected_before_the_puzzle() {
        let mut reg = AgentRegistry::new();
        let err = reg
            .verify(&ApiKey::new("sk-ah-never-issued"), 10, Timestamp::new(0))
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCredential));
    }

    #[test]
    fn wrong_answer_leaves_agent_pending_and_retryable() {
        let mut reg = AgentRegistry::new();
        let now = Timestamp::new(0);
        let (agent, challenge) = register(&mut reg, "fumbler", now);

        let err = reg
            .verify(&agent.api_key, challenge.answer + 1, now)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Puzzle(PuzzleError::WrongAnswer)
        ));
        assert_eq!(reg.resolve(&agent.api_key).unwrap().state, AgentState::Pending);

        // Retry with the right answer still works.
        reg.verify(&agent.api_key, challenge.answer, now).unwrap();
    }

    #[test]
    fn expired_puzzle_forces_re_registration() {
        let mut reg = AgentRegistry::new();
        let issued = Timestamp::new(1000);
        let (agent, challenge) = register(&mut reg, "slowpoke", issued);

        let late = issued.plus_secs(params().puzzle_expiry_secs + 1);
        let err = reg
            .verify(&agent.api_key, challenge.answer, late)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Puzzle(PuzzleError::Expired)));

        // The expiry consumed the challenge; only the name being free again
        // would allow recovery, and names never free up.
        let err = reg
            .verify(&agent.api_key, challenge.answer, late)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Puzzle(PuzzleError::NotFound)));
    }

    // ── Lookup and mutation ─────────────────────────────────────────────

    #[test]
    fn resolve_is_exact_match() {
        let mut reg = AgentRegistry::new();
        let (agent, _) = register(&mut reg, "findme", Timestamp::new(0));

        assert!(reg.resolve(&agent.api_key).is_some());
        assert!(reg.resolve(&ApiKey::new("sk-ah-other")).is_none());
    }

    #[test]
    fn karma_and_post_count_mutators() {
        let mut reg = AgentRegistry::new();
        let (agent, _) = register(&mut reg, "worker", Timestamp::new(0));

        reg.add_karma(&agent.id, 1);
        reg.add_karma(&agent.id, 1);
        reg.record_post(&agent.id);

        let stored = reg.get(&agent.id).unwrap();
        assert_eq!(stored.karma, 2);
        assert_eq!(stored.post_count, 1);
    }

    #[test]
    fn leaderboard_ranks_active_agents_by_karma() {
        let mut reg = AgentRegistry::new();
        let now = Timestamp::new(0);

        for (name, karma) in [("low", 1), ("high", 5), ("mid", 3)] {
            let (agent, challenge) = register(&mut reg, name, now);
            reg.verify(&agent.api_key, challenge.answer, now).unwrap();
            reg.add_karma(&agent.id, karma);
        }
        // A pending agent never appears, whatever its karma.
        let (pending, _) = register(&mut reg, "ghost", now);
        reg.add_karma(&pending.id, 100);

        let board = reg.leaderboard(2);
        let names: Vec<&str> = board.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid"]);
    }
}
