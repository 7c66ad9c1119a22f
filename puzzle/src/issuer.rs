//! Challenge issuing and one-shot checking, keyed by credential.

use std::collections::HashMap;

use agenthub_types::{ApiKey, HubParams, Timestamp};
use rand::Rng;
use tracing::debug;

use crate::challenge::Challenge;
use crate::error::PuzzleError;

/// Issues and checks activation challenges.
///
/// Holds at most one live challenge per credential. Entries are removed on
/// a successful check or on detected expiry; an expired challenge that is
/// never re-checked stays in the map — expiry is checked lazily, never
/// swept, so the map grows with at most one entry per registration.
#[derive(Default)]
pub struct PuzzleIssuer {
    live: HashMap<ApiKey, Challenge>,
}

impl PuzzleIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh challenge for `key`, replacing any previous one.
    pub fn issue(&mut self, key: &ApiKey, params: &HubParams, now: Timestamp) -> Challenge {
        self.issue_with_rng(&mut rand::thread_rng(), key, params, now)
    }

    /// Like [`PuzzleIssuer::issue`], with caller-provided randomness.
    pub fn issue_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
        key: &ApiKey,
        params: &HubParams,
        now: Timestamp,
    ) -> Challenge {
        let a = rng.gen_range(params.puzzle_a_min..=params.puzzle_a_max);
        let b = rng.gen_range(params.puzzle_b_min..=params.puzzle_b_max);
        let challenge = Challenge {
            question: format!("If 🦀 = {a} and 🐟 = {b}, what is 🦀 + 🐟?"),
            answer: a + b,
            issued_at: now,
            expires_at: now.plus_secs(params.puzzle_expiry_secs),
        };
        self.live.insert(key.clone(), challenge.clone());
        challenge
    }

    /// Check a submitted answer against the live challenge for `key`.
    ///
    /// One-shot contract: a correct answer consumes the challenge, so a
    /// second check for the same credential fails with `NotFound`. A
    /// failed-due-to-expiry check also consumes the entry; only a wrong
    /// answer leaves the challenge in place for a retry.
    pub fn check(
        &mut self,
        key: &ApiKey,
        submitted: i64,
        now: Timestamp,
    ) -> Result<(), PuzzleError> {
        let challenge = self.live.get(key).ok_or(PuzzleError::NotFound)?;

        if challenge.is_expired(now) {
            self.live.remove(key);
            debug!("challenge expired and consumed");
            return Err(PuzzleError::Expired);
        }

        if submitted != challenge.answer {
            return Err(PuzzleError::WrongAnswer);
        }

        self.live.remove(key);
        Ok(())
    }

    /// Number of stored challenges (including expired-but-unreaped ones).
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> HubParams {
        HubParams::hub_defaults()
    }

    fn key(tag: &str) -> ApiKey {
        ApiKey::new(format!("sk-ah-{tag}"))
    }

    /// Pull the operands back out of the rendered question.
    fn embedded_operands(question: &str) -> Vec<i64> {
        question
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    // ── Issuing ─────────────────────────────────────────────────────────

    #[test]
    fn issue_keeps_one_live_challenge_per_credential() {
        let mut issuer = PuzzleIssuer::new();
        let k = key("one");
        let now = Timestamp::new(1000);

        issuer.issue(&k, &params(), now);
        let second = issuer.issue(&k, &params(), now);

        assert_eq!(issuer.live_count(), 1);
        // The replacement is the one that counts.
        assert_eq!(issuer.check(&k, second.answer, now), Ok(()));
    }

    #[test]
    fn expiry_is_five_minutes_from_issuance() {
        let mut issuer = PuzzleIssuer::new();
        let now = Timestamp::new(1000);
        let c = issuer.issue(&key("a"), &params(), now);
        assert_eq!(c.issued_at, now);
        assert_eq!(c.expires_at, Timestamp::new(1300));
    }

    // ── Checking ────────────────────────────────────────────────────────

    #[test]
    fn correct_answer_consumes_the_challenge() {
        let mut issuer = PuzzleIssuer::new();
        let k = key("a");
        let now = Timestamp::new(0);
        let c = issuer.issue(&k, &params(), now);

        assert_eq!(issuer.check(&k, c.answer, now), Ok(()));
        assert_eq!(issuer.live_count(), 0);
        // At most one success: the challenge is gone.
        assert_eq!(issuer.check(&k, c.answer, now), Err(PuzzleError::NotFound));
    }

    #[test]
    fn wrong_answer_keeps_the_challenge_alive() {
        let mut issuer = PuzzleIssuer::new();
        let k = key("a");
        let now = Timestamp::new(0);
        let c = issuer.issue(&k, &params(), now);

        assert_eq!(
            issuer.check(&k, c.answer + 1, now),
            Err(PuzzleError::WrongAnswer)
        );
        // Retry until expiry is allowed.
        assert_eq!(issuer.check(&k, c.answer, now), Ok(()));
    }

    #[test]
    fn expired_check_fails_and_consumes_even_with_right_answer() {
        let mut issuer = PuzzleIssuer::new();
        let k = key("a");
        let issued = Timestamp::new(1000);
        let c = issuer.issue(&k, &params(), issued);

        let late = issued.plus_secs(params().puzzle_expiry_secs + 1);
        assert_eq!(issuer.check(&k, c.answer, late), Err(PuzzleError::Expired));
        // Consumed: the next attempt no longer sees a challenge.
        assert_eq!(issuer.check(&k, c.answer, late), Err(PuzzleError::NotFound));
    }

    #[test]
    fn check_at_exact_expiry_still_passes() {
        let mut issuer = PuzzleIssuer::new();
        let k = key("a");
        let issued = Timestamp::new(1000);
        let c = issuer.issue(&k, &params(), issued);

        let boundary = issued.plus_secs(params().puzzle_expiry_secs);
        assert_eq!(issuer.check(&k, c.answer, boundary), Ok(()));
    }

    #[test]
    fn unknown_credential_has_no_challenge() {
        let mut issuer = PuzzleIssuer::new();
        assert_eq!(
            issuer.check(&key("nobody"), 7, Timestamp::new(0)),
            Err(PuzzleError::NotFound)
        );
    }

    // ── Generation ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn generated_puzzles_stay_within_bounds(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut issuer = PuzzleIssuer::new();
            let p = params();
            let c = issuer.issue_with_rng(&mut rng, &key("gen"), &p, Timestamp::new(0));

            let ops = embedded_operands(&c.question);
            prop_assert_eq!(ops.len(), 2);
            prop_assert!((p.puzzle_a_min..=p.puzzle_a_max).contains(&ops[0]));
            prop_assert!((p.puzzle_b_min..=p.puzzle_b_max).contains(&ops[1]));
            prop_assert_eq!(ops[0] + ops[1], c.answer);
        }
    }
}
