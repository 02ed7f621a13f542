//! Game state module - manages the complete game state
//!
//! Ties the board, snake, food and RNG together and runs the per-tick update:
//! apply the queued direction, advance, then resolve collision before food.
//! There is a single episode that resets in place on self-collision; no
//! separate game-over state exists.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::*;
use crate::{Board, Drawable, Food, Snake};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snake: Snake,
    food: Food,
    rng: StdRng,
    seed: u64,
    /// Ticks since the game started.
    tick_count: u64,
    /// Number of resets so far (0 during the first episode).
    episode: u32,
    /// Food eaten in the current episode.
    food_eaten: u32,
    /// Longest target length reached in any episode.
    best_length: usize,
}

impl GameState {
    /// Create a new game on the standard board with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_board(Board::standard(), seed)
    }

    /// Create a new game on `board`: one-cell snake at the center heading
    /// right, food on a random free cell.
    pub fn with_board(board: Board, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(board.center());
        let food = Food::spawn(&board, |c| snake.occupies(c), &mut rng);
        Self::assemble(board, snake, food, rng, seed)
    }

    /// Build a game from explicit parts (tests, benches, replays).
    ///
    /// Snake and food cells outside the board are wrapped onto it.
    pub fn from_parts(board: Board, mut snake: Snake, food: Food, seed: u64) -> Self {
        snake.wrap_onto(&board);
        let food = Food::at(board.wrap(food.position()));
        Self::assemble(board, snake, food, StdRng::seed_from_u64(seed), seed)
    }

    fn assemble(board: Board, snake: Snake, food: Food, rng: StdRng, seed: u64) -> Self {
        let best_length = snake.target_length();
        Self {
            board,
            snake,
            food,
            rng,
            seed,
            tick_count: 0,
            episode: 0,
            food_eaten: 0,
            best_length,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn best_length(&self) -> usize {
        self.best_length
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Entities in draw order: food first, snake on top.
    pub fn drawables(&self) -> [&dyn Drawable; 2] {
        [&self.food, &self.snake]
    }

    /// Queue a direction for the next tick unless it reverses the snake.
    pub fn set_pending_direction(&mut self, dir: Direction) -> bool {
        self.snake.set_pending_direction(dir)
    }

    /// Promote the queued direction. Call once per tick, before `advance`.
    pub fn apply_pending_direction(&mut self) {
        self.snake.apply_pending_direction();
    }

    /// Move the snake one cell (wrapping) and return the new head.
    ///
    /// Does not look for collisions; see [`GameState::resolve`].
    pub fn advance(&mut self) -> Cell {
        self.snake.advance(&self.board)
    }

    /// Whether the head overlaps the rest of the body.
    pub fn head_collides(&self) -> bool {
        self.snake.head_collides()
    }

    /// React to the post-move position: self-collision first, then food.
    pub fn resolve(&mut self) -> TickOutcome {
        if self.snake.head_collides() {
            self.reset();
            return TickOutcome::Collided;
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food_eaten += 1;
            self.best_length = self.best_length.max(self.snake.target_length());
            self.relocate_food();
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    /// One full game step.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.apply_pending_direction();
        self.advance();
        self.resolve()
    }

    /// Restart the episode in place: one cell at the center, random heading,
    /// food moved off the new body.
    pub fn reset(&mut self) {
        let dir = *Direction::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Direction::Right);
        self.snake.reset(self.board.center(), dir);
        self.relocate_food();
        self.episode = self.episode.wrapping_add(1);
        self.food_eaten = 0;
    }

    fn relocate_food(&mut self) {
        let snake = &self.snake;
        self.food
            .relocate(&self.board, |c| snake.occupies(c), &mut self.rng);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::new(8, 6, 20)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Cell::new(16, 12));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.episode(), 0);
        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.best_length(), 1);
        assert!(!state.snake().occupies(state.food().position()));
    }

    #[test]
    fn test_smallest_board_places_food_beside_snake() {
        let state = GameState::with_board(Board::new(1, 1, 1), 9);
        assert_eq!(state.board().cell_count(), 2);
        assert_ne!(state.food().position(), state.snake().head());
    }

    #[test]
    fn test_from_parts_wraps_off_board_cells() {
        let snake = Snake::with_body(
            [Cell::new(i32::MAX, 0), Cell::new(i32::MAX - 1, 0)],
            Direction::Right,
        );
        let food = Food::at(Cell::new(9, -1));
        let mut state = GameState::from_parts(small_board(), snake, food, 1);

        let board = *state.board();
        assert!(state.snake().body().iter().all(|&c| board.contains(c)));
        assert!(board.contains(state.food().position()));

        assert_eq!(state.snake().head(), Cell::new(7, 0));
        assert_eq!(state.food().position(), Cell::new(1, 5));

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(0, 0));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.food(), b.food());
    }

    #[test]
    fn test_tick_moves_right() {
        let mut state = GameState::from_parts(
            small_board(),
            Snake::new(Cell::new(4, 3)),
            Food::at(Cell::new(0, 0)),
            1,
        );
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(5, 3));
        assert_eq!(state.tick_count(), 1);
    }

    #[test]
    fn test_tick_applies_pending_direction() {
        let mut state = GameState::from_parts(
            small_board(),
            Snake::new(Cell::new(4, 3)),
            Food::at(Cell::new(0, 0)),
            1,
        );
        assert!(state.set_pending_direction(Direction::Up));
        state.tick();
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.snake().head(), Cell::new(4, 2));
        assert_eq!(state.snake().pending_direction(), None);
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        let mut state = GameState::from_parts(
            small_board(),
            Snake::new(Cell::new(4, 3)),
            Food::at(Cell::new(5, 3)),
            9,
        );
        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.snake().target_length(), 2);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.food_eaten(), 1);
        assert_eq!(state.best_length(), 2);
        assert!(!state.snake().occupies(state.food().position()));

        // Growth shows up on the next move.
        state.advance();
        assert_eq!(state.snake().len(), 2);
    }

    #[test]
    fn test_collision_resets_episode() {
        // Head at (2,2) heading down into (2,3), which stays occupied after the trim.
        let snake = Snake::with_body(
            [
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
            ],
            Direction::Down,
        );
        let mut state = GameState::from_parts(small_board(), snake, Food::at(Cell::new(7, 5)), 5);

        assert_eq!(state.tick(), TickOutcome::Collided);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().target_length(), BASE_SNAKE_LENGTH);
        assert_eq!(state.snake().head(), small_board().center());
        assert_eq!(state.episode(), 1);
        assert_eq!(state.food_eaten(), 0);
        assert_eq!(state.best_length(), 5);
        assert_ne!(state.food().position(), small_board().center());
    }

    #[test]
    fn test_following_tail_is_not_a_collision() {
        // Head moves into the cell the tail vacates this tick.
        let snake = Snake::with_body(
            [Cell::new(2, 2), Cell::new(3, 2), Cell::new(3, 3), Cell::new(2, 3)],
            Direction::Down,
        );
        let mut state = GameState::from_parts(small_board(), snake, Food::at(Cell::new(7, 5)), 5);
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.episode(), 0);
    }

    #[test]
    fn test_collision_wins_over_food() {
        // Food sits on a body cell the head re-enters.
        let snake = Snake::with_body(
            [
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
            ],
            Direction::Down,
        );
        let mut state = GameState::from_parts(small_board(), snake, Food::at(Cell::new(2, 3)), 5);
        assert_eq!(state.tick(), TickOutcome::Collided);
        assert_eq!(state.snake().target_length(), 1);
    }

    #[test]
    fn test_reset_direction_is_random_but_seeded() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        for _ in 0..10 {
            a.reset();
            b.reset();
            assert_eq!(a.direction(), b.direction());
            assert_eq!(a.food(), b.food());
        }
        assert_eq!(a.episode(), 10);
    }

    #[test]
    fn test_drawables_order() {
        let state = GameState::new(1);
        let [first, second] = state.drawables();
        assert_eq!(first.color(), APPLE_COLOR);
        assert_eq!(second.color(), SNAKE_COLOR);
    }

    #[test]
    fn test_default_game_state() {
        let state = GameState::default();
        assert_eq!(state.seed(), 1);
        assert_eq!(state.snake().len(), 1);
    }
}
