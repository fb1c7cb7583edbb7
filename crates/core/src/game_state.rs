//! Game state module - the round and replay state machine
//!
//! Owns the secret, the guess counter and the current [`Phase`]. It performs
//! no I/O: callers feed it validated guesses and replay answers and render
//! whatever it reports.

use log::{debug, info, trace};

use crate::clues::compute_clues;
use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::secret::generate;
use crate::types::{ClueResult, Guess, Phase, Secret};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    secret: Option<Secret>,
    /// Number of the attempt being made (starts at 1 each round).
    guess_number: u32,
    phase: Phase,
    rounds_played: u32,
    rounds_won: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            config,
            rng: SimpleRng::new(seed),
            secret: None,
            guess_number: 1,
            phase: Phase::NotStarted,
            rounds_played: 0,
            rounds_won: 0,
        }
    }

    /// Start the first round
    pub fn start(&mut self) -> Result<(), ConfigError> {
        if self.phase != Phase::NotStarted {
            return Ok(());
        }
        self.start_round()
    }

    fn start_round(&mut self) -> Result<(), ConfigError> {
        let secret = generate(self.config.num_digits(), &mut self.rng)?;
        trace!("secret for round {}: {}", self.rounds_played + 1, secret);

        self.secret = Some(secret);
        self.guess_number = 1;
        self.rounds_played += 1;
        self.phase = Phase::AwaitingGuess;
        info!(
            "round {} started ({} digits, {} guesses)",
            self.rounds_played,
            self.config.num_digits(),
            self.config.max_guesses()
        );
        Ok(())
    }

    /// Score a guess against the current secret.
    ///
    /// Returns `None` (and changes nothing) unless the game is awaiting a guess
    /// and the guess has the configured length. On success the guess counter
    /// advances and the phase moves to `RoundWon`, `RoundLost` or stays
    /// `AwaitingGuess`.
    pub fn submit_guess(&mut self, guess: &Guess) -> Option<ClueResult> {
        if self.phase != Phase::AwaitingGuess || guess.len() != self.config.num_digits() {
            return None;
        }
        let secret = self.secret.as_ref()?;

        let result = compute_clues(guess, secret);
        debug!("guess #{} {} -> {}", self.guess_number, guess, result);
        self.guess_number += 1;

        if result.is_exact() {
            self.phase = Phase::RoundWon;
            self.rounds_won += 1;
            info!("round {} won", self.rounds_played);
        } else if self.guess_number > self.config.max_guesses() {
            self.phase = Phase::RoundLost;
            info!("round {} lost", self.rounds_played);
        }

        Some(result)
    }

    /// Move a resolved round on to the replay question.
    pub fn finish_round(&mut self) -> bool {
        if !self.phase.is_round_over() {
            return false;
        }
        self.phase = Phase::AwaitingReplay;
        true
    }

    /// Answer the replay question.
    ///
    /// Returns `Ok(true)` when a new round was started.
    pub fn answer_replay(&mut self, play_again: bool) -> Result<bool, ConfigError> {
        if self.phase != Phase::AwaitingReplay {
            return Ok(false);
        }
        if play_again {
            self.start_round()?;
            Ok(true)
        } else {
            self.phase = Phase::Terminated;
            info!(
                "game over after {} rounds ({} won)",
                self.rounds_played, self.rounds_won
            );
            Ok(false)
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of the next guess attempt in this round
    pub fn guess_number(&self) -> u32 {
        self.guess_number
    }

    /// Accepted guesses so far this round
    pub fn guesses_used(&self) -> u32 {
        self.guess_number - 1
    }

    pub fn guesses_left(&self) -> u32 {
        self.config.max_guesses().saturating_sub(self.guesses_used())
    }

    /// Current round's secret, if a round has started
    pub fn secret(&self) -> Option<&Secret> {
        self.secret.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    #[cfg(test)]
    pub(crate) fn set_secret(&mut self, secret: Secret) {
        self.secret = Some(secret);
    }
}
