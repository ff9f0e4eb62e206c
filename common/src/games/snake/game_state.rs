use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::grid::{Board, BoardFull};
use super::input::InputController;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, GameEndReason, GameStatus, SnakeSnapshot, TickOutcome};

/// Single-player snake simulation. Mutated only by `start`, `pause`, `reset`,
/// `set_pending` and `advance`; time is supplied from outside one tick at a time.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    board: Board,
    snake: Snake,
    /// Direction applied on the previous tick.
    direction: Direction,
    input: InputController,
    food: Option<Cell>,
    score: u32,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
    ticks: u64,
    food_reward: u32,
    start_cell: Cell,
    start_direction: Direction,
}

impl SnakeGameState {
    pub fn new(settings: &GameSettings, rng: &mut SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let board = settings.board()?;
        let start_cell = settings.start_cell();

        let mut state = Self {
            board,
            snake: Snake::new(start_cell),
            direction: settings.start_direction(),
            input: InputController::new(),
            food: None,
            score: 0,
            status: GameStatus::Idle,
            end_reason: None,
            ticks: 0,
            food_reward: settings.food_reward,
            start_cell,
            start_direction: settings.start_direction(),
        };
        state.reset(rng);
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.input.pending()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Idle or Paused resume in place; GameOver starts a fresh round.
    pub fn start(&mut self, rng: &mut SessionRng) {
        match self.status {
            GameStatus::Running => {}
            GameStatus::Idle | GameStatus::Paused => self.status = GameStatus::Running,
            GameStatus::GameOver => {
                self.reset(rng);
                self.status = GameStatus::Running;
            }
        }
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(self.start_cell);
        self.direction = self.start_direction;
        self.input.clear();
        // Board::new guarantees at least four cells, so a single-cell snake always leaves room.
        self.food = self.board.random_free_cell(self.snake.occupied(), rng).ok();
        self.score = 0;
        self.status = GameStatus::Idle;
        self.end_reason = None;
        self.ticks = 0;
    }

    pub fn set_pending(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.input.set_pending(direction);
        }
    }

    pub fn advance(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Ignored;
        }

        let direction = self.resolve_direction();
        let new_head = self.board.add(self.snake.head(), direction);

        if !self.board.in_bounds(new_head) {
            return self.finish(GameEndReason::WallCollision);
        }

        let eating = self.food == Some(new_head);
        // The tail cell is vacated this tick unless the snake grows.
        let enters_vacated_tail = !eating && new_head == self.snake.tail();
        if self.snake.contains(&new_head) && !enters_vacated_tail {
            return self.finish(GameEndReason::SelfCollision);
        }

        self.snake.step(new_head, eating);
        self.direction = direction;
        self.ticks += 1;

        if !eating {
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.food_reward);
        match self.board.random_free_cell(self.snake.occupied(), rng) {
            Ok(cell) => {
                self.food = Some(cell);
                TickOutcome::AteFood { score: self.score }
            }
            Err(BoardFull) => {
                self.food = None;
                self.finish(GameEndReason::BoardFull)
            }
        }
    }

    pub fn snapshot(&self, high_score: u32) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            high_score: high_score.max(self.score),
            status: self.status,
            end_reason: self.end_reason,
            board_size: self.board.size(),
            grid_unit: self.board.unit(),
            ticks: self.ticks,
        }
    }

    /// Sole owner of the no-reverse rule: a buffered reversal is dropped while the snake has a body.
    fn resolve_direction(&mut self) -> Direction {
        match self.input.take_pending() {
            Some(pending) if self.snake.len() > 1 && pending.is_opposite(&self.direction) => {
                self.direction
            }
            Some(pending) => pending,
            None => self.direction,
        }
    }

    fn finish(&mut self, reason: GameEndReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        log!("Game over: snake {} after {} ticks, score {}", reason.describe(), self.ticks, self.score);
        TickOutcome::GameOver {
            reason,
            score: self.score,
        }
    }

    #[cfg(test)]
    pub(crate) fn running_with(
        settings: &GameSettings,
        segments: &[Cell],
        direction: Direction,
        food: Option<Cell>,
        score: u32,
    ) -> Self {
        let mut rng = SessionRng::new(0);
        let mut state = Self::new(settings, &mut rng).unwrap();
        state.snake = Snake::from_segments(segments);
        state.direction = direction;
        state.food = food;
        state.score = score;
        state.status = GameStatus::Running;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GameSettings {
        GameSettings::default()
    }

    fn segments(state: &SnakeGameState) -> Vec<Cell> {
        state.snake().segments().copied().collect()
    }

    fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
        raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_new_session_is_idle_with_single_cell_and_free_food() {
        let mut rng = SessionRng::new(42);
        let state = SnakeGameState::new(&settings(), &mut rng).unwrap();
        assert_eq!(state.status(), GameStatus::Idle);
        assert_eq!(segments(&state), cells(&[(200, 200)]));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        let food = state.food().unwrap();
        assert!(state.board().contains_aligned(food));
        assert_ne!(food, Cell::new(200, 200));
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let mut rng = SessionRng::new(42);
        let bad = GameSettings {
            board_size: 410,
            ..settings()
        };
        assert!(SnakeGameState::new(&bad, &mut rng).is_err());
    }

    #[test]
    fn test_single_cell_moves_right_without_food() {
        let mut rng = SessionRng::new(1);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            0,
        );

        assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        assert_eq!(segments(&state), cells(&[(220, 200)]));
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut rng = SessionRng::new(2);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200)]),
            Direction::Right,
            Some(Cell::new(220, 200)),
            0,
        );

        assert_eq!(state.advance(&mut rng), TickOutcome::AteFood { score: 10 });
        assert_eq!(segments(&state), cells(&[(220, 200), (200, 200)]));
        assert_eq!(state.score(), 10);
        let food = state.food().unwrap();
        assert!(!state.snake().contains(&food));
        assert!(state.board().contains_aligned(food));
    }

    #[test]
    fn test_score_saturates_with_huge_reward() {
        let mut rng = SessionRng::new(2);
        let huge = GameSettings {
            food_reward: u32::MAX,
            ..settings()
        };
        assert!(huge.validate().is_ok());
        let mut state = SnakeGameState::running_with(
            &huge,
            &cells(&[(200, 200)]),
            Direction::Right,
            Some(Cell::new(220, 200)),
            1,
        );

        assert_eq!(state.advance(&mut rng), TickOutcome::AteFood { score: u32::MAX });
        assert_eq!(state.score(), u32::MAX);
    }

    #[test]
    fn test_wall_collision_ends_game_with_score_unchanged() {
        let mut rng = SessionRng::new(3);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(0, 200), (20, 200)]),
            Direction::Left,
            Some(Cell::new(300, 300)),
            30,
        );

        assert_eq!(
            state.advance(&mut rng),
            TickOutcome::GameOver {
                reason: GameEndReason::WallCollision,
                score: 30,
            }
        );
        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(state.end_reason(), Some(GameEndReason::WallCollision));
        assert_eq!(state.score(), 30);
        assert_eq!(segments(&state), cells(&[(0, 200), (20, 200)]));
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut rng = SessionRng::new(3);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(380, 0)]),
            Direction::Up,
            Some(Cell::new(300, 300)),
            0,
        );
        assert!(state.advance(&mut rng).is_game_over());

        state.set_pending(Direction::Down);
        assert_eq!(state.pending_direction(), None);
        assert_eq!(state.advance(&mut rng), TickOutcome::Ignored);
        assert_eq!(segments(&state), cells(&[(380, 0)]));
    }

    #[test]
    fn test_moving_away_from_tail_is_not_self_collision() {
        let mut rng = SessionRng::new(4);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200), (180, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            0,
        );

        assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        assert_eq!(segments(&state), cells(&[(220, 200), (200, 200)]));
        assert_eq!(state.status(), GameStatus::Running);
    }

    #[test]
    fn test_head_may_enter_cell_vacated_by_tail() {
        let mut rng = SessionRng::new(5);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(0, 0), (20, 0), (20, 20), (0, 20)]),
            Direction::Left,
            Some(Cell::new(300, 300)),
            0,
        );
        state.set_pending(Direction::Down);

        assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        assert_eq!(segments(&state), cells(&[(0, 20), (0, 0), (20, 0), (20, 20)]));
        assert_eq!(state.snake().occupied().len(), 4);
    }

    #[test]
    fn test_head_entering_body_is_self_collision() {
        let mut rng = SessionRng::new(6);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(0, 0), (20, 0), (20, 20), (0, 20), (0, 40)]),
            Direction::Left,
            Some(Cell::new(300, 300)),
            20,
        );
        state.set_pending(Direction::Down);

        assert_eq!(
            state.advance(&mut rng),
            TickOutcome::GameOver {
                reason: GameEndReason::SelfCollision,
                score: 20,
            }
        );
        assert_eq!(state.snake().len(), 5);
    }

    #[test]
    fn test_last_pending_direction_wins() {
        let mut rng = SessionRng::new(7);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            0,
        );
        state.set_pending(Direction::Up);
        state.set_pending(Direction::Left);

        state.advance(&mut rng);
        assert_eq!(segments(&state), cells(&[(180, 200)]));
        assert_eq!(state.direction(), Direction::Left);
    }

    #[test]
    fn test_collapsed_input_ending_in_reversal_keeps_heading() {
        let mut rng = SessionRng::new(8);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200), (180, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            0,
        );
        state.set_pending(Direction::Up);
        state.set_pending(Direction::Left);

        assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        assert_eq!(segments(&state), cells(&[(220, 200), (200, 200)]));
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn test_reversal_is_ignored_for_every_heading() {
        for heading in Direction::ALL {
            let mut rng = SessionRng::new(9);
            let head = Cell::new(200, 200);
            let (dx, dy) = heading.displacement(20);
            let neck = Cell::new(head.x - dx, head.y - dy);
            let mut state = SnakeGameState::running_with(
                &settings(),
                &[head, neck],
                heading,
                Some(Cell::new(0, 0)),
                0,
            );
            state.set_pending(heading.opposite());

            assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
            assert_eq!(state.snake().head(), Cell::new(head.x + dx, head.y + dy));
            assert_eq!(state.direction(), heading);
        }
    }

    #[test]
    fn test_single_cell_snake_may_reverse() {
        let mut rng = SessionRng::new(10);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            0,
        );
        state.set_pending(Direction::Left);
        state.advance(&mut rng);
        assert_eq!(segments(&state), cells(&[(180, 200)]));
    }

    #[test]
    fn test_input_ignored_unless_running() {
        let mut rng = SessionRng::new(11);
        let mut state = SnakeGameState::new(&settings(), &mut rng).unwrap();
        state.set_pending(Direction::Down);
        assert_eq!(state.pending_direction(), None);

        state.start(&mut rng);
        state.pause();
        state.set_pending(Direction::Down);
        assert_eq!(state.pending_direction(), None);
    }

    #[test]
    fn test_advance_ignored_unless_running() {
        let mut rng = SessionRng::new(12);
        let mut state = SnakeGameState::new(&settings(), &mut rng).unwrap();
        assert_eq!(state.advance(&mut rng), TickOutcome::Ignored);

        state.start(&mut rng);
        state.pause();
        assert_eq!(state.advance(&mut rng), TickOutcome::Ignored);
        assert_eq!(segments(&state), cells(&[(200, 200)]));
    }

    #[test]
    fn test_pause_and_start_are_idempotent() {
        let mut rng = SessionRng::new(13);
        let mut state = SnakeGameState::new(&settings(), &mut rng).unwrap();
        state.start(&mut rng);
        state.advance(&mut rng);

        let running = state.snapshot(0);
        state.start(&mut rng);
        assert_eq!(state.snapshot(0), running);

        state.pause();
        let paused = state.snapshot(0);
        state.pause();
        assert_eq!(state.snapshot(0), paused);
        assert_eq!(paused.status, GameStatus::Paused);

        state.start(&mut rng);
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.snapshot(0).segments, paused.segments);
    }

    #[test]
    fn test_reset_returns_to_initial_values() {
        let mut rng = SessionRng::new(14);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(100, 100), (80, 100), (60, 100)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            50,
        );
        state.set_pending(Direction::Up);
        state.advance(&mut rng);

        state.reset(&mut rng);
        assert_eq!(state.status(), GameStatus::Idle);
        assert_eq!(segments(&state), cells(&[(200, 200)]));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.ticks(), 0);
        assert_eq!(state.end_reason(), None);
        assert!(!state.snake().contains(&state.food().unwrap()));
    }

    #[test]
    fn test_start_after_game_over_begins_new_round() {
        let mut rng = SessionRng::new(15);
        let mut state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(380, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            40,
        );
        assert!(state.advance(&mut rng).is_game_over());

        state.start(&mut rng);
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(segments(&state), cells(&[(200, 200)]));
        assert!(!state.advance(&mut rng).is_game_over());
        assert_eq!(state.snake().head(), Cell::new(220, 200));
    }

    #[test]
    fn test_filling_the_board_is_a_distinct_terminal_outcome() {
        let small = GameSettings {
            board_size: 40,
            grid_unit: 20,
            start_x: 0,
            start_y: 0,
            ..settings()
        };
        let mut rng = SessionRng::new(16);
        let mut state = SnakeGameState::running_with(
            &small,
            &cells(&[(20, 0), (0, 0), (0, 20)]),
            Direction::Right,
            Some(Cell::new(20, 20)),
            20,
        );
        state.set_pending(Direction::Down);

        assert_eq!(
            state.advance(&mut rng),
            TickOutcome::GameOver {
                reason: GameEndReason::BoardFull,
                score: 30,
            }
        );
        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(state.food(), None);
        assert_eq!(state.snake().len(), 4);
        assert!(state.end_reason().is_some_and(|r| r.is_win()));
    }

    #[test]
    fn test_random_play_preserves_invariants() {
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let mut state = SnakeGameState::new(&settings(), &mut rng).unwrap();
            state.start(&mut rng);
            let mut last_score = 0;

            for _ in 0..400 {
                let direction = Direction::ALL[rng.random_range(0..4)];
                state.set_pending(direction);
                let outcome = state.advance(&mut rng);

                assert!(state.score() >= last_score);
                last_score = state.score();
                assert!(state.snake().len() >= 1);
                assert_eq!(state.snake().occupied().len(), state.snake().len());

                if outcome.is_game_over() {
                    break;
                }

                assert!(state.snake().segments().all(|c| state.board().contains_aligned(*c)));
                let food = state.food().unwrap();
                assert!(!state.snake().contains(&food));
            }
        }
    }

    #[test]
    fn test_snapshot_reports_best_of_stored_and_current_score() {
        let state = SnakeGameState::running_with(
            &settings(),
            &cells(&[(200, 200)]),
            Direction::Right,
            Some(Cell::new(0, 0)),
            70,
        );
        assert_eq!(state.snapshot(50).high_score, 70);
        assert_eq!(state.snapshot(90).high_score, 90);
        assert_eq!(state.snapshot(0).board_size, 400);
        assert_eq!(state.snapshot(0).grid_unit, 20);
    }
}
