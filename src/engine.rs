//! Engine state management.
//!
//! Holds the strategy, the side being played, the belief state, and the RNG.
//! `initialize` must be called once per game before `process`; each
//! `process` call either picks a move or absorbs the opponent's last move.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::belief::BeliefState;
use crate::board::{ClassicRules, CombatRules, GameState, Piece, Side};
use crate::config::StrategyConfig;
use crate::error::EngineError;
use crate::eval::score;
use crate::movegen::{self, FeatureContext, Move, MoveWithDetails};
use crate::setup::generate_placement;

/// Per-game state created by `initialize`.
#[derive(Debug, Clone)]
struct Session {
    side: Side,
    /// Strategy oriented for `side`.
    config: StrategyConfig,
    beliefs: BeliefState,
}

/// Holds the mutable state of the engine between host calls.
pub struct Engine<R: CombatRules = ClassicRules> {
    config: StrategyConfig,
    rules: R,
    session: Option<Session>,
    rng: SmallRng,
}

impl Engine<ClassicRules> {
    /// Creates an engine with classic combat rules and an entropy-seeded RNG.
    pub fn new(config: StrategyConfig) -> Self {
        Engine::with_rules(config, ClassicRules)
    }
}

impl<R: CombatRules> Engine<R> {
    /// Creates an engine that resolves combat with the supplied rules.
    pub fn with_rules(config: StrategyConfig, rules: R) -> Self {
        Engine {
            config,
            rules,
            session: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Reseeds the RNG for reproducible play.
    pub fn seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// The side chosen at initialization.
    pub fn side(&self) -> Option<Side> {
        self.session.as_ref().map(|s| s.side)
    }

    /// Read-only view of the current beliefs, for diagnostics.
    pub fn beliefs(&self) -> Option<&BeliefState> {
        self.session.as_ref().map(|s| &s.beliefs)
    }

    /// Starts a new game on `side` and returns the starting placement.
    ///
    /// Any previous game's beliefs are discarded.
    pub fn initialize(&mut self, side: Side) -> Result<Vec<Piece>, EngineError> {
        self.config.validate()?;
        let config = match side {
            Side::First => self.config.clone(),
            Side::Second => self.config.transposed(),
        };
        let placement = generate_placement(&config, &mut self.rng)?;
        let beliefs = BeliefState::seeded(side, &placement);
        log::info!(
            "initialized as {} with {} pieces, {} flag candidates",
            side.name(),
            placement.len(),
            beliefs.possible_flags.len()
        );
        self.session = Some(Session {
            side,
            config,
            beliefs,
        });
        Ok(placement)
    }

    /// Handles one host turn. Returns a move when `state.active_side` is the
    /// engine's side, otherwise updates beliefs and returns `None`.
    pub fn process(&mut self, state: &GameState) -> Result<Option<Move>, EngineError> {
        let side = self.side().ok_or(EngineError::NotInitialized)?;
        if state.active_side == side {
            self.decide_next_move(state).map(Some)
        } else {
            self.observe(state)?;
            Ok(None)
        }
    }

    /// Generates and scores every candidate move for the engine's side.
    pub fn generate_moves(
        &mut self,
        state: &GameState,
    ) -> Result<Vec<MoveWithDetails>, EngineError> {
        let session = self.session.as_ref().ok_or(EngineError::NotInitialized)?;
        let ctx = FeatureContext {
            side: session.side,
            beliefs: &session.beliefs,
            config: &session.config,
            rules: &self.rules,
        };
        let mut moves = movegen::generate_moves(state, &ctx)?;
        for m in moves.iter_mut() {
            m.score = score(m, &session.config.weights, &mut self.rng);
            log::debug!(
                "{:?} {} -> {} steps {} score {:.2}",
                m.rank,
                m.from,
                m.to,
                m.steps,
                m.score
            );
        }
        Ok(moves)
    }

    /// Picks the highest-scoring move and records it in the beliefs.
    pub fn decide_next_move(&mut self, state: &GameState) -> Result<Move, EngineError> {
        let moves = self.generate_moves(state)?;
        let mut best: Option<&MoveWithDetails> = None;
        for m in &moves {
            if best.map_or(true, |b| m.score > b.score) {
                best = Some(m);
            }
        }
        let best = best.ok_or(EngineError::NoLegalMoves)?;

        let session = self.session.as_mut().ok_or(EngineError::NotInitialized)?;
        session.beliefs.record_own_move(
            best.from,
            best.to,
            best.features.battle,
            best.is_long_run(),
        );
        log::info!(
            "playing {:?} {} -> {} (score {:.2}, {} candidates)",
            best.rank,
            best.from,
            best.to,
            best.score,
            moves.len()
        );
        Ok(Move::from(best))
    }

    /// Absorbs an opponent turn: prunes flag candidates and reconciles own pieces.
    pub fn observe(&mut self, state: &GameState) -> Result<(), EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NotInitialized)?;
        let before = session.beliefs.possible_flags.len();
        session.beliefs.prune_flag_candidates(state, session.side);
        session.beliefs.reconcile_own_pieces(state, session.side);
        log::debug!(
            "flag candidates {} -> {}",
            before,
            session.beliefs.possible_flags.len()
        );
        if session.beliefs.possible_flags.is_empty() {
            log::warn!("every flag candidate has been eliminated");
        }
        Ok(())
    }
}
