//! Session - the single owner of a running game.
//!
//! Keyboard input and gravity ticks both land here, so transitions on one game
//! are applied strictly one after another. Pausing only sets a flag: nothing in
//! the core needs releasing.

use crate::core::{Game, RandomSource, SimpleRng};
use crate::gravity::GravityClock;
use crate::types::{ConfigError, GameAction, GameConfig};

/// A game plus everything needed to keep it moving
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = SimpleRng> {
    config: GameConfig,
    game: Game,
    rng: R,
    gravity: GravityClock,
    suspended: bool,
}

impl Session<SimpleRng> {
    /// Session with a seeded LCG random source
    pub fn seeded(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let game = Game::with_config(&config, &mut rng)?;
        Ok(Self {
            config,
            game,
            rng,
            gravity: GravityClock::new(config.gravity_interval_ms),
            suspended: false,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Apply one input. Returns true when the held game or session changed.
    ///
    /// Movement is ignored while suspended.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                self.suspended = !self.suspended;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if self.suspended => false,
            _ => self.advance(action),
        }
    }

    /// Feed frame time to the gravity clock. Returns true when a down-move ran.
    ///
    /// Does nothing while suspended or once the game is over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.suspended || self.game.is_game_over() {
            return false;
        }
        if !self.gravity.advance(elapsed_ms) {
            return false;
        }
        self.advance(GameAction::MoveDown);
        true
    }

    /// Start over with a fresh game on a board of the same size.
    pub fn restart(&mut self) {
        let board = self.game.board().empty_like();
        self.game = Game::start_on(board, &mut self.rng);
        self.gravity.reset();
        self.suspended = false;
    }

    fn advance(&mut self, action: GameAction) -> bool {
        let next = self.game.clone().apply(action, &mut self.rng);
        let changed = next != self.game;
        self.game = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;

    fn session() -> Session {
        Session::seeded(GameConfig::default(), 12345).unwrap()
    }

    #[test]
    fn new_session_is_running() {
        let s = session();
        assert!(!s.is_suspended());
        assert_eq!(s.game().status(), GameStatus::Playing);
        assert_eq!(s.game().score(), 0);
    }

    #[test]
    fn rejects_bad_config() {
        let config = GameConfig {
            gravity_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            Session::seeded(config, 1).unwrap_err(),
            ConfigError::ZeroGravityInterval
        );
    }

    #[test]
    fn gravity_moves_piece_down() {
        let mut s = session();
        let y0 = s.game().piece().unwrap().position.y;

        assert!(!s.tick(500));
        assert!(s.tick(16));
        assert_eq!(s.game().piece().unwrap().position.y, y0 + 1);
    }

    #[test]
    fn pause_blocks_ticks_and_moves() {
        let mut s = session();
        let before = s.game().clone();

        assert!(s.apply_action(GameAction::Pause));
        assert!(s.is_suspended());
        assert!(!s.tick(10_000));
        assert!(!s.apply_action(GameAction::MoveDown));
        assert_eq!(s.game(), &before);

        s.apply_action(GameAction::Pause);
        assert!(s.apply_action(GameAction::MoveDown));
    }

    #[test]
    fn restart_resets_score_and_board() {
        let mut s = session();
        for _ in 0..200 {
            s.apply_action(GameAction::MoveDown);
        }
        assert!(s.game().board().filled_count() > 0);

        s.apply_action(GameAction::Pause);
        s.apply_action(GameAction::Restart);
        assert!(!s.is_suspended());
        assert_eq!(s.game().board().filled_count(), 0);
        assert_eq!(s.game().score(), 0);
    }

    #[test]
    fn restart_keeps_configured_board_size() {
        let config = GameConfig {
            width: 7,
            height: 30,
            ..GameConfig::default()
        };
        let mut s = Session::seeded(config, 3).unwrap();
        while !s.game().is_game_over() {
            s.apply_action(GameAction::MoveDown);
        }

        s.restart();
        assert_eq!(s.game().board().width(), 7);
        assert_eq!(s.game().board().height(), 30);
        assert_eq!(s.game().status(), GameStatus::Playing);
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = session();
        let mut b = session();
        for action in [
            GameAction::MoveLeft,
            GameAction::Rotate,
            GameAction::MoveDown,
            GameAction::MoveRight,
        ]
        .iter()
        .cycle()
        .take(400)
        {
            a.apply_action(*action);
            b.apply_action(*action);
        }
        assert_eq!(a.game(), b.game());
    }
}
