use log::{debug, info, warn};

use super::{
    action::Action,
    config::GameConfig,
    error::GameError,
    food::Food,
    grid::{Cell, Grid},
    rng::{RandomSource, SessionRng},
    snake::{Snake, StepOutcome},
};

/// Summary of a round that ended in a collision or a filled board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Food eaten during the round
    pub score: u32,
    /// Snake length when the round ended
    pub length: usize,
    /// Ticks the round lasted
    pub ticks: u64,
    /// The round ended because the snake covered the whole board
    pub filled_board: bool,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: StepOutcome,
    /// Food cell after the tick
    pub food: Cell,
    /// Set when this tick ended a round
    pub finished_round: Option<RoundSummary>,
}

/// Owns the board state and applies one tick at a time.
///
/// Each tick steps the snake against the current food, moves the food when
/// it gets eaten and closes the round on a collision or a filled board. Rendering and input
/// stay outside; callers pass the requested action in.
pub struct GameEngine<R: RandomSource = SessionRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: R,
    score: u32,
    ticks: u64,
    round_ticks: u64,
}

impl GameEngine<SessionRng> {
    /// Engine seeded from the config, or from entropy when no seed is set
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_entropy(),
        };
        info!(
            "Starting {}x{} game at {} ticks/s, seed {}",
            config.grid_width,
            config.grid_height,
            config.ticks_per_second,
            rng.seed()
        );
        Self::new(config, rng)
    }

    /// Seed of the session generator
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Validates the config and places the snake and the first food
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let grid = Grid::new(config.grid_width, config.grid_height);
        let snake = Snake::spawn(&grid, &mut rng).with_growth_per_food(config.growth_per_food);
        let food = Food::spawn(&grid, snake.body(), &mut rng)?;

        Ok(Self {
            config,
            grid,
            snake,
            food,
            rng,
            score: 0,
            ticks: 0,
            round_ticks: 0,
        })
    }

    /// Engine over a prepared snake and food, for scripted scenarios
    pub fn with_state(
        config: GameConfig,
        snake: Snake,
        food: Food,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            snake: snake.with_growth_per_food(config.growth_per_food),
            food,
            rng,
            config,
            score: 0,
            ticks: 0,
            round_ticks: 0,
        })
    }

    /// Execute one tick of the game.
    ///
    /// Eating the last free cell closes the round like a collision does:
    /// the summary is reported and a fresh snake starts at the center.
    pub fn tick(&mut self, action: Action) -> Result<TickReport, GameError> {
        let length_before = self.snake.len();
        let outcome = self
            .snake
            .step(action, self.food.cell(), &self.grid, &mut self.rng);

        self.ticks += 1;
        self.round_ticks += 1;

        let mut finished_round = None;
        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::Ate => {
                self.score += 1;
                match self
                    .food
                    .relocate(&self.grid, self.snake.body(), &mut self.rng)
                {
                    Ok(cell) => debug!(
                        "Food eaten, length {}, next food at ({}, {})",
                        self.snake.len(),
                        cell.x,
                        cell.y
                    ),
                    Err(GameError::GridFull { .. }) => {
                        let summary = RoundSummary {
                            score: self.score,
                            length: self.snake.len(),
                            ticks: self.round_ticks,
                            filled_board: true,
                        };
                        warn!(
                            "Board filled after {} ticks at length {}, new round",
                            summary.ticks, summary.length
                        );
                        self.snake.reset(&self.grid, &mut self.rng);
                        self.start_round();
                        self.food
                            .relocate(&self.grid, self.snake.body(), &mut self.rng)?;
                        finished_round = Some(summary);
                    }
                    Err(e) => return Err(e),
                }
            }
            StepOutcome::Collided => {
                let summary = RoundSummary {
                    score: self.score,
                    length: length_before,
                    ticks: self.round_ticks,
                    filled_board: false,
                };
                info!(
                    "Collision after {} ticks at length {}, snake reset",
                    summary.ticks, summary.length
                );
                self.start_round();
                // The new one-cell snake may have spawned on the food
                if self.snake.contains(self.food.cell()) {
                    self.food
                        .relocate(&self.grid, self.snake.body(), &mut self.rng)?;
                }
                finished_round = Some(summary);
            }
        }

        Ok(TickReport {
            outcome,
            food: self.food.cell(),
            finished_round,
        })
    }

    /// Player-requested reset: fresh snake, food moved off it
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.snake.reset(&self.grid, &mut self.rng);
        self.start_round();
        self.food
            .relocate(&self.grid, self.snake.body(), &mut self.rng)?;
        info!("Round restarted");
        Ok(())
    }

    fn start_round(&mut self) {
        self.score = 0;
        self.round_ticks = 0;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.cell()
    }

    /// Food eaten in the current round
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::rng::SequenceRng;

    fn engine_with(
        cells: &[(i32, i32)],
        direction: Direction,
        food: (i32, i32),
        rng: Vec<usize>,
    ) -> GameEngine<SequenceRng> {
        let snake = Snake::from_cells(
            cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            direction,
        )
        .unwrap();
        GameEngine::with_state(
            GameConfig::small(),
            snake,
            Food::at(Cell::new(food.0, food.1)),
            SequenceRng::new(rng),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game() {
        let engine =
            GameEngine::new(GameConfig::small(), SequenceRng::new(vec![3, 1, 1])).unwrap();

        assert_eq!(engine.snake().body(), &[Cell::new(5, 5)]);
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.food(), Cell::new(1, 1));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn test_new_rejects_tiny_grid() {
        let result = GameEngine::new(GameConfig::new(2, 2), SequenceRng::new(vec![0]));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_seeded_engines_match() {
        let mut config = GameConfig::small();
        config.seed = Some(99);
        let mut a = GameEngine::from_config(config.clone()).unwrap();
        let mut b = GameEngine::from_config(config).unwrap();
        assert_eq!(a.seed(), 99);

        for _ in 0..200 {
            let ra = a.tick(Action::Continue).unwrap();
            let rb = b.tick(Action::Continue).unwrap();
            assert_eq!(ra, rb);
        }
        assert_eq!(a.snake(), b.snake());
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine_with(&[(5, 5)], Direction::Up, (0, 0), vec![0]);

        let report = engine.tick(Action::Continue).unwrap();

        assert_eq!(report.outcome, StepOutcome::Moved);
        assert_eq!(report.finished_round, None);
        assert_eq!(engine.snake().head(), Cell::new(5, 4));
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_food_consumption_relocates_food() {
        // Next food sample is (7, 2)
        let mut engine = engine_with(&[(5, 5), (4, 5)], Direction::Right, (6, 5), vec![7, 2]);

        let report = engine.tick(Action::Continue).unwrap();

        assert_eq!(report.outcome, StepOutcome::Ate);
        assert_eq!(report.food, Cell::new(7, 2));
        assert_eq!(engine.food(), Cell::new(7, 2));
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake().len(), 3);
        assert!(!engine.snake().contains(engine.food()));
    }

    #[test]
    fn test_collision_closes_round() {
        // Eat once, then run into the body
        let mut engine = engine_with(
            &[(6, 5), (5, 5), (5, 6), (6, 6), (7, 6), (8, 6)],
            Direction::Right,
            (7, 5),
            vec![1, 8, 3],
        );

        let ate = engine.tick(Action::Continue).unwrap();
        assert_eq!(ate.outcome, StepOutcome::Ate);
        assert_eq!(engine.food(), Cell::new(1, 8));

        // Head (7,5) turning down hits (7,6), which is not the tail
        let report = engine.tick(Action::Move(Direction::Down)).unwrap();

        assert_eq!(report.outcome, StepOutcome::Collided);
        assert_eq!(
            report.finished_round,
            Some(RoundSummary {
                score: 1,
                length: 7,
                ticks: 2,
                filled_board: false,
            })
        );
        assert_eq!(engine.snake().body(), &[Cell::new(5, 5)]);
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_food_moved_off_respawned_snake() {
        // Food sits on the grid center, where the snake respawns
        let mut engine = engine_with(
            &[(2, 2), (2, 3), (3, 3), (3, 2), (4, 2)],
            Direction::Right,
            (5, 5),
            vec![0, 8, 8],
        );

        let report = engine.tick(Action::Continue).unwrap();

        assert_eq!(report.outcome, StepOutcome::Collided);
        assert_eq!(engine.snake().head(), Cell::new(5, 5));
        assert_eq!(engine.food(), Cell::new(8, 8));
    }

    #[test]
    fn test_restart() {
        let mut engine =
            engine_with(&[(2, 2), (2, 3), (2, 4)], Direction::Up, (0, 0), vec![1, 4, 4]);

        engine.restart().unwrap();

        assert_eq!(engine.snake().body(), &[Cell::new(5, 5)]);
        assert_eq!(engine.snake().direction(), Direction::Down);
        assert_eq!(engine.food(), Cell::new(4, 4));
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_filling_board_closes_round() {
        let config = GameConfig::new(3, 3);
        // Snake covers all but (2,2) and eats it
        let cells = vec![
            Cell::new(2, 1),
            Cell::new(1, 1),
            Cell::new(0, 1),
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(0, 2),
            Cell::new(1, 2),
        ];
        let snake = Snake::from_cells(cells, Direction::Down).unwrap();
        let mut engine = GameEngine::with_state(
            config,
            snake,
            Food::at(Cell::new(2, 2)),
            SequenceRng::new(vec![0]),
        )
        .unwrap();

        let report = engine.tick(Action::Continue).unwrap();

        assert_eq!(report.outcome, StepOutcome::Ate);
        assert_eq!(
            report.finished_round,
            Some(RoundSummary {
                score: 1,
                length: 9,
                ticks: 1,
                filled_board: true,
            })
        );
        assert_eq!(engine.snake().body(), &[Cell::new(1, 1)]);
        assert!(!engine.snake().contains(engine.food()));
        assert_eq!(report.food, engine.food());
        assert_eq!(engine.score(), 0);
    }
}
