use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use crate::util::EnumExt;
use rand::{seq::IteratorRandom, Rng};
use serde::Deserialize;
use tracing::{debug, info, trace};

/// The snake & food on a wraparound board, advanced one tick at a time
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Simulation<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    pub(super) snake: Snake,
    /// `None` only when the snake fills the whole board
    pub(super) food: Option<Cell>,
    pub(super) status: Status,
    policy: CollisionPolicy,
}

impl<R: Rng> Simulation<R> {
    pub(crate) fn new(grid: Grid, policy: CollisionPolicy, mut rng: R) -> Simulation<R> {
        let snake = Snake::new(grid.center(), Direction::random(&mut rng));
        let mut sim = Simulation {
            rng,
            grid,
            snake,
            food: None,
            status: Status::Running,
            policy,
        };
        sim.place_food();
        sim
    }

    /// Advance the snake by one cell, first turning it toward `request` if
    /// that isn't a reversal.
    ///
    /// Once the session has ended, this does nothing and keeps reporting
    /// [`TickResult::Collision`] until [`Simulation::reset()`] is called.
    pub(crate) fn tick(&mut self, request: Option<Direction>) -> TickResult {
        if self.status == Status::Ended {
            return TickResult::Collision;
        }
        if let Some(direction) = request {
            if !self.snake.turn(direction) {
                debug!(?direction, current = ?self.snake.direction, "Ignoring reversal");
            }
        }
        let head = self.snake.advance(self.grid);
        let ate = self.food == Some(head);
        if ate {
            self.snake.grow();
            debug!(target_len = self.snake.target_len, "Snake ate food at {head}");
            self.place_food();
        }
        self.snake.trim();
        trace!(vacated = ?self.snake.vacated, "Snake moved to {head}");
        if self.snake.collided() {
            info!(score = self.score(), "Snake ran into itself at {head}");
            match self.policy {
                CollisionPolicy::End => self.status = Status::Ended,
                CollisionPolicy::Reset => self.reset(),
            }
            TickResult::Collision
        } else if ate {
            TickResult::AteFood
        } else {
            TickResult::Continue
        }
    }

    /// Start over with a one-cell snake in the center of the board, facing a
    /// random direction
    pub(crate) fn reset(&mut self) {
        let direction = Direction::random(&mut self.rng);
        self.snake = Snake::new(self.grid.center(), direction);
        self.status = Status::Running;
        self.place_food();
        info!(?direction, "Started new session");
    }

    /// Move the food to a random cell not occupied by the snake.  If there
    /// are no such cells, the food is removed from the board.
    fn place_food(&mut self) {
        let grid = self.grid;
        let snake = &self.snake;
        let rng = &mut self.rng;
        let mut food = (0..consts::FOOD_PLACEMENT_ATTEMPTS)
            .map(|_| grid.random_cell(&mut *rng))
            .find(|&c| !snake.occupies(c));
        if food.is_none() {
            food = grid.cells().filter(|&c| !snake.occupies(c)).choose(rng);
        }
        self.food = food;
        match food {
            Some(cell) => debug!("Placed food at {cell}"),
            None => info!("No free cells left for food"),
        }
    }
}

impl<R> Simulation<R> {
    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn head(&self) -> Cell {
        self.snake.head()
    }

    /// The cells behind the snake's head, nearest to the head first
    pub(crate) fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.snake.cells().skip(1)
    }

    pub(crate) fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// How much the snake has grown this session
    pub(crate) fn score(&self) -> usize {
        self.snake
            .target_len
            .saturating_sub(consts::INITIAL_SNAKE_LENGTH)
    }
}

/// The outcome of a single [`Simulation::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickResult {
    /// The snake moved without incident
    Continue,
    /// The snake moved onto the food and will grow by one cell
    AteFood,
    /// The snake's head ran into its own body
    Collision,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    Ended,
}

/// What happens when the snake runs into itself
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum CollisionPolicy {
    /// The session ends and stays ended until explicitly reset
    #[default]
    End,
    /// The session starts over immediately
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::collections::{HashSet, VecDeque};
    use std::num::NonZeroU16;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn grid(width: u16, height: u16) -> Grid {
        Grid::new(
            NonZeroU16::new(width).expect("width should be nonzero"),
            NonZeroU16::new(height).expect("height should be nonzero"),
        )
    }

    fn new_sim(width: u16, height: u16, policy: CollisionPolicy) -> Simulation<ChaCha12Rng> {
        Simulation::new(
            grid(width, height),
            policy,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    fn snake(cells: &[(u16, u16)], direction: Direction) -> Snake {
        let mut cells = cells.iter().map(|&(x, y)| Cell::new(x, y));
        let head = cells.next().expect("snake should have a head");
        let mut snake = Snake::new(head, direction);
        snake.body = cells.collect::<VecDeque<_>>();
        snake.target_len = snake.len();
        snake
    }

    fn cells<R>(sim: &Simulation<R>) -> Vec<Cell> {
        sim.snake.cells().collect()
    }

    #[test]
    fn new_simulation() {
        let sim = new_sim(32, 24, CollisionPolicy::End);
        assert_eq!(cells(&sim), [Cell::new(16, 12)]);
        assert_eq!(sim.snake.target_len, 1);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.status(), Status::Running);
        let food = sim.food().expect("food should be placed");
        assert_ne!(food, Cell::new(16, 12));
        assert!(food.x < 32 && food.y < 24);
    }

    #[test]
    fn eat_food() {
        let mut sim = new_sim(32, 24, CollisionPolicy::End);
        sim.snake = snake(&[(16, 12)], Direction::Right);
        sim.food = Some(Cell::new(17, 12));
        assert_eq!(sim.tick(None), TickResult::AteFood);
        assert_eq!(sim.head(), Cell::new(17, 12));
        assert_eq!(sim.snake.target_len, 2);
        assert_eq!(cells(&sim), [Cell::new(17, 12), Cell::new(16, 12)]);
        assert_eq!(sim.score(), 1);
        let food = sim.food().expect("food should be placed");
        assert!(!sim.snake.occupies(food), "food placed on snake at {food}");
    }

    #[test]
    fn move_drops_tail() {
        let mut sim = new_sim(32, 24, CollisionPolicy::End);
        sim.snake = snake(&[(5, 5), (6, 5), (7, 5), (8, 5)], Direction::Left);
        sim.food = Some(Cell::new(0, 0));
        assert_eq!(sim.tick(None), TickResult::Continue);
        assert_eq!(
            cells(&sim),
            [
                Cell::new(4, 5),
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(7, 5)
            ]
        );
        assert_eq!(sim.snake.vacated, Some(Cell::new(8, 5)));
        assert_eq!(sim.snake.target_len, 4);
        assert_eq!(sim.food(), Some(Cell::new(0, 0)));
    }

    #[rstest]
    #[case((31, 7), Direction::Right, (0, 7))]
    #[case((0, 7), Direction::Left, (31, 7))]
    #[case((9, 0), Direction::Up, (9, 23))]
    #[case((9, 23), Direction::Down, (9, 0))]
    fn wraparound(#[case] start: (u16, u16), #[case] d: Direction, #[case] end: (u16, u16)) {
        let mut sim = new_sim(32, 24, CollisionPolicy::End);
        sim.snake = snake(&[start], d);
        sim.food = Some(Cell::new(20, 20));
        assert_eq!(sim.tick(None), TickResult::Continue);
        assert_eq!(sim.head(), Cell::new(end.0, end.1));
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn reversal_ignored(#[case] d: Direction) {
        let mut sim = new_sim(32, 24, CollisionPolicy::End);
        let neck = d.reverse().advance(Cell::new(10, 10), sim.grid());
        sim.snake = snake(&[(10, 10), (neck.x, neck.y)], d);
        sim.food = Some(Cell::new(0, 0));
        assert_eq!(sim.tick(Some(d.reverse())), TickResult::Continue);
        assert_eq!(sim.direction(), d);
        assert_eq!(sim.head(), d.advance(Cell::new(10, 10), sim.grid()));
    }

    #[test]
    fn turn_applied() {
        let mut sim = new_sim(32, 24, CollisionPolicy::End);
        sim.snake = snake(&[(10, 10), (9, 10)], Direction::Right);
        sim.food = Some(Cell::new(0, 0));
        assert_eq!(sim.tick(Some(Direction::Up)), TickResult::Continue);
        assert_eq!(sim.direction(), Direction::Up);
        assert_eq!(cells(&sim), [Cell::new(10, 9), Cell::new(10, 10)]);
    }

    #[test]
    fn self_collision_ends_session() {
        let mut sim = new_sim(10, 10, CollisionPolicy::End);
        sim.snake = snake(&[(3, 2), (4, 2), (4, 1), (3, 1), (2, 1)], Direction::Left);
        sim.food = Some(Cell::new(8, 8));
        assert_eq!(sim.tick(Some(Direction::Up)), TickResult::Collision);
        assert_eq!(sim.status(), Status::Ended);
        assert_eq!(
            cells(&sim),
            [
                Cell::new(3, 1),
                Cell::new(3, 2),
                Cell::new(4, 2),
                Cell::new(4, 1),
                Cell::new(3, 1)
            ]
        );
        assert_eq!(sim.snake.vacated, Some(Cell::new(2, 1)));
        let before = sim.clone();
        assert_eq!(sim.tick(Some(Direction::Right)), TickResult::Collision);
        assert_eq!(sim, before);
    }

    #[test]
    fn entering_vacated_tail_is_not_collision() {
        let mut sim = new_sim(10, 10, CollisionPolicy::End);
        sim.snake = snake(&[(1, 1), (2, 1), (2, 2), (1, 2)], Direction::Left);
        sim.food = Some(Cell::new(8, 8));
        assert_eq!(sim.tick(Some(Direction::Down)), TickResult::Continue);
        assert_eq!(
            cells(&sim),
            [
                Cell::new(1, 2),
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(sim.status(), Status::Running);
    }

    #[test]
    fn self_collision_with_reset_policy() {
        let mut sim = new_sim(10, 10, CollisionPolicy::Reset);
        sim.snake = snake(&[(3, 2), (4, 2), (4, 1), (3, 1), (2, 1)], Direction::Left);
        sim.food = Some(Cell::new(8, 8));
        assert_eq!(sim.tick(Some(Direction::Up)), TickResult::Collision);
        assert_eq!(sim.status(), Status::Running);
        assert_eq!(cells(&sim), [Cell::new(5, 5)]);
        assert_eq!(sim.snake.target_len, 1);
        assert_eq!(sim.snake.vacated, None);
        assert_eq!(sim.score(), 0);
        let food = sim.food().expect("food should be placed");
        assert_ne!(food, Cell::new(5, 5));
    }

    #[test]
    fn reset_after_end() {
        let mut sim = new_sim(10, 10, CollisionPolicy::End);
        sim.snake = snake(&[(3, 2), (4, 2), (4, 1), (3, 1), (2, 1)], Direction::Left);
        sim.food = Some(Cell::new(8, 8));
        assert_eq!(sim.tick(Some(Direction::Up)), TickResult::Collision);
        sim.reset();
        assert_eq!(sim.status(), Status::Running);
        assert_eq!(cells(&sim), [Cell::new(5, 5)]);
        assert_eq!(sim.snake.vacated, None);
        assert_ne!(sim.tick(None), TickResult::Collision);
    }

    #[test]
    fn food_takes_last_free_cell() {
        let mut sim = new_sim(3, 1, CollisionPolicy::End);
        sim.snake = snake(&[(0, 0), (1, 0)], Direction::Left);
        sim.place_food();
        assert_eq!(sim.food(), Some(Cell::new(2, 0)));
    }

    #[test]
    fn no_food_on_full_board() {
        let mut sim = new_sim(2, 1, CollisionPolicy::End);
        sim.snake = snake(&[(0, 0), (1, 0)], Direction::Left);
        sim.place_food();
        assert_eq!(sim.food(), None);
        assert_eq!(sim.tick(None), TickResult::Continue);
        assert_eq!(cells(&sim), [Cell::new(1, 0), Cell::new(0, 0)]);
        assert_eq!(sim.food(), None);
    }

    #[test]
    fn eating_last_free_cell_empties_board() {
        let mut sim = new_sim(3, 1, CollisionPolicy::End);
        sim.snake = snake(&[(1, 0), (0, 0)], Direction::Right);
        sim.food = Some(Cell::new(2, 0));
        assert_eq!(sim.tick(None), TickResult::AteFood);
        assert_eq!(sim.snake.len(), 3);
        assert_eq!(sim.food(), None);
    }

    #[test]
    fn random_play_keeps_invariants() {
        let mut sim = new_sim(8, 6, CollisionPolicy::Reset);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED ^ 0xFFFF);
        let mut collisions = 0;
        for _ in 0..5000 {
            let request = rng
                .random_bool(0.3)
                .then(|| Direction::random(&mut rng));
            let target_before = sim.snake.target_len;
            let food_before = sim.food();
            let result = sim.tick(request);
            let len = sim.snake.len();
            assert!(len >= 1, "snake emptied");
            assert!(len <= sim.snake.target_len, "snake longer than its target");
            match result {
                TickResult::AteFood => {
                    assert_eq!(sim.snake.target_len, target_before + 1);
                    assert_eq!(food_before, Some(sim.head()));
                    assert_ne!(sim.food(), food_before);
                }
                TickResult::Continue => {
                    assert_eq!(sim.snake.target_len, target_before);
                    assert_eq!(sim.food(), food_before);
                }
                TickResult::Collision => collisions += 1,
            }
            let unique = sim.snake.cells().collect::<HashSet<_>>();
            assert_eq!(unique.len(), len, "running snake overlaps itself");
            if let Some(food) = sim.food() {
                assert!(!sim.snake.occupies(food), "food placed on snake at {food}");
            }
            assert_eq!(sim.status(), Status::Running);
        }
        assert!(collisions > 0, "random play never collided");
    }
}
