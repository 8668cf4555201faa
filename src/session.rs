//! A headless game session: timed rounds in freshly generated mazes.
//!
//! Each round lasts [`Options::round_seconds`]. Reaching the goal scores ten points per second
//! left on the clock and places ball and goal into new random cells. When the clock runs out a
//! new maze is generated for the next round, until [`Options::rounds_per_game`] rounds have been
//! played.

use log::{debug, info};
use rand::prelude::*;

use crate::coord::Coord;
use crate::error::Result;
use crate::maze::{Generator, Layout, Maze, Wall};
use crate::options::Options;
use crate::physics::{Ball, Goal, Heading, Resolver};

pub struct Session {
    options: Options,
    generator: Generator,
    layout: Layout,
    resolver: Resolver,
    rng: StdRng,
    maze: Maze,
    walls: Vec<Wall>,
    ball: Ball,
    goal: Goal,
    time_left: f32,
    round: u32,
    score: u32,
    state: State,
}

impl Session {
    /// Start a new game. The seed determines every maze and every placement of the game.
    pub fn new(options: Options, seed: u64) -> Result<Self> {
        options.validate()?;
        let generator = Generator::new(options.maze_width, options.maze_height)?;
        let layout = Layout::new(options.cell_size, options.origin)
            .with_thickness(options.wall_thickness);

        let mut rng = StdRng::seed_from_u64(seed);
        let maze = generator.generate(&mut rng);
        let walls = layout.walls(&maze);
        let start = layout.cell_center(Coord::default());

        let mut session = Session {
            options,
            generator,
            layout,
            resolver: Resolver::new(options.probe),
            rng,
            maze,
            walls,
            ball: Ball::new(start, options.ball_radius).with_speed(options.ball_speed),
            goal: Goal::new(start, options.goal_radius),
            time_left: options.round_seconds,
            round: 1,
            score: 0,
            state: State::Running,
        };
        session.scatter();
        Ok(session)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The walls of the current maze, in the order they are tested for collisions.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Seconds left in the current round. Slightly negative on the tick the round ends.
    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// The current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Start over with a new maze, a full clock and no points.
    pub fn restart(&mut self) {
        self.round = 1;
        self.score = 0;
        self.state = State::Running;
        self.start_round();
    }

    /// Advance the game by `elapsed` seconds with the ball moving towards `heading`.
    ///
    /// Does nothing once the game is over. A negative or non-finite `elapsed` is rejected and
    /// leaves clock and ball untouched.
    pub fn tick(&mut self, heading: Heading, elapsed: f32) -> Result<Vec<SessionEvent>> {
        if self.state.is_over() {
            return Ok(vec![]);
        }

        let mut events = vec![];
        self.ball.set_heading(heading);
        self.ball.step(&self.resolver, &self.walls, elapsed)?;
        self.time_left -= elapsed;

        if self.goal.is_reached_by(&self.ball) {
            // saturates for very long rounds
            let points = (self.time_left.max(0.0) * 10.0) as u32;
            self.score = self.score.saturating_add(points);
            info!("goal reached for {points} points, score {}", self.score);
            self.scatter();
            events.push(SessionEvent::GoalReached { points });
        }

        if self.time_left < 0.0 {
            if self.round >= self.options.rounds_per_game {
                self.state = State::Over;
                info!("game over after {} rounds, score {}", self.round, self.score);
                events.push(SessionEvent::GameOver { score: self.score });
            } else {
                self.round += 1;
                self.start_round();
                events.push(SessionEvent::RoundStarted { round: self.round });
            }
        }

        Ok(events)
    }

    /// Like [`Session::tick`], with the heading given as a direction token such as `"left"`.
    pub fn steer(&mut self, token: &str, elapsed: f32) -> Result<Vec<SessionEvent>> {
        let heading: Heading = token.parse()?;
        self.tick(heading, elapsed)
    }

    fn start_round(&mut self) {
        self.maze = self.generator.generate(&mut self.rng);
        self.walls = self.layout.walls(&self.maze);
        self.time_left = self.options.round_seconds;
        self.scatter();
        debug!("round {} started with {} walls", self.round, self.walls.len());
    }

    /// Place ball and goal in the centers of random cells.
    fn scatter(&mut self) {
        let ball_cell = self.random_cell();
        let goal_cell = self.random_cell();
        self.ball.set_position(self.layout.cell_center(ball_cell));
        self.ball.set_heading(Heading::None);
        self.goal.set_position(self.layout.cell_center(goal_cell));
    }

    fn random_cell(&mut self) -> Coord {
        Coord::from((
            self.rng.random_range(0..self.maze.width()),
            self.rng.random_range(0..self.maze.height()),
        ))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, strum::Display, strum::EnumIs)]
pub enum State {
    Running,
    Over,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionEvent {
    /// The ball reached the goal; both have been moved to new cells.
    GoalReached { points: u32 },
    /// The previous round ran out of time and a new maze was generated.
    RoundStarted { round: u32 },
    /// The last round ran out of time.
    GameOver { score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::maze::MazeError;
    use crate::options::OptionsError;
    use crate::physics::{CollisionError, Probe};
    use crate::vec2::Vec2;

    fn small_options() -> Options {
        Options {
            maze_width: 4,
            maze_height: 3,
            ..Default::default()
        }
    }

    // Park the goal where the ball can never reach it.
    fn hide_goal(session: &mut Session) {
        session.goal.set_position(Vec2::splat(-1000.0));
    }

    #[test]
    fn new_session() {
        let session = Session::new(Options::default(), 1).unwrap();
        assert_eq!(session.state(), State::Running);
        assert_eq!(session.round(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), 30.0);
        assert!(session.maze().is_perfect());
        assert_eq!(session.maze().width(), 20);
        assert_eq!(session.walls().len(), session.layout().walls(session.maze()).len());
        assert_eq!(session.ball().radius(), 5.0);
        assert_eq!(session.goal().radius(), 3.0);
    }

    #[test]
    fn rejects_invalid_options() {
        let options = Options {
            maze_height: 0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(options, 0),
            Err(Error::Maze(MazeError::InvalidDimensions { width: 20, height: 0 }))
        ));

        let options = Options {
            rounds_per_game: 0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(options, 0),
            Err(Error::Options(OptionsError::NoRounds))
        ));
    }

    #[test]
    fn same_seed_same_game() {
        let a = Session::new(small_options(), 99).unwrap();
        let b = Session::new(small_options(), 99).unwrap();
        assert_eq!(a.maze(), b.maze());
        assert_eq!(a.ball(), b.ball());
        assert_eq!(a.goal(), b.goal());
    }

    #[test]
    fn reaching_the_goal_scores_remaining_time() {
        let mut session = Session::new(small_options(), 5).unwrap();
        let ball = session.ball().position();
        session.goal.set_position(ball);

        let events = session.tick(Heading::None, 1.0).unwrap();
        assert_eq!(events, vec![SessionEvent::GoalReached { points: 290 }]);
        assert_eq!(session.score(), 290);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn score_saturates_in_endless_rounds() {
        let options = Options {
            round_seconds: 1.0e12,
            ..small_options()
        };
        let mut session = Session::new(options, 4).unwrap();

        for _ in 0..2 {
            let ball = session.ball().position();
            session.goal.set_position(ball);
            let events = session.tick(Heading::None, 0.01).unwrap();
            assert_eq!(events, vec![SessionEvent::GoalReached { points: u32::MAX }]);
        }
        assert_eq!(session.score(), u32::MAX);
        assert!(session.state().is_running());
    }

    #[test]
    fn bad_elapsed_time_is_rejected() {
        let options = Options {
            rounds_per_game: 1,
            ..small_options()
        };
        let mut session = Session::new(options, 6).unwrap();
        hide_goal(&mut session);
        let start = session.ball().position();

        assert!(matches!(
            session.tick(Heading::Right, f32::NAN),
            Err(Error::Collision(CollisionError::InvalidElapsed(value))) if value.is_nan()
        ));
        assert_eq!(
            session.tick(Heading::Right, -1.0),
            Err(Error::Collision(CollisionError::InvalidElapsed(-1.0)))
        );
        assert!(matches!(
            session.steer("left", f32::INFINITY),
            Err(Error::Collision(CollisionError::InvalidElapsed(_)))
        ));
        assert_eq!(session.time_left(), 30.0);
        assert_eq!(session.ball().position(), start);

        // the clock still runs out afterwards
        assert_eq!(
            session.tick(Heading::None, 31.0).unwrap(),
            vec![SessionEvent::GameOver { score: 0 }]
        );
        assert!(session.state().is_over());
    }

    #[test]
    fn round_advances_when_time_runs_out() {
        let mut session = Session::new(small_options(), 8).unwrap();
        hide_goal(&mut session);

        let events = session.tick(Heading::None, 10.0).unwrap();
        assert!(events.is_empty());
        assert_eq!(session.time_left(), 20.0);

        hide_goal(&mut session);
        let events = session.tick(Heading::None, 25.0).unwrap();
        assert_eq!(events, vec![SessionEvent::RoundStarted { round: 2 }]);
        assert_eq!(session.round(), 2);
        assert_eq!(session.time_left(), 30.0);
        assert!(session.maze().is_perfect());
    }

    #[test]
    fn game_ends_after_last_round() {
        let options = Options {
            rounds_per_game: 2,
            ..small_options()
        };
        let mut session = Session::new(options, 13).unwrap();

        hide_goal(&mut session);
        assert_eq!(
            session.tick(Heading::None, 31.0).unwrap(),
            vec![SessionEvent::RoundStarted { round: 2 }]
        );

        session.score = 120;
        hide_goal(&mut session);
        assert_eq!(
            session.tick(Heading::None, 31.0).unwrap(),
            vec![SessionEvent::GameOver { score: 120 }]
        );
        assert!(session.state().is_over());
        assert_eq!(session.round(), 2);

        // nothing happens any more
        assert!(session.tick(Heading::Left, 1.0).unwrap().is_empty());

        session.restart();
        assert!(session.state().is_running());
        assert_eq!(session.round(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), 30.0);
    }

    #[test]
    fn goal_on_the_last_tick_scores_nothing() {
        let options = Options {
            rounds_per_game: 1,
            ..small_options()
        };
        let mut session = Session::new(options, 21).unwrap();
        let ball = session.ball().position();
        session.goal.set_position(ball);

        let events = session.tick(Heading::None, 40.0).unwrap();
        assert_eq!(
            events,
            vec![
                SessionEvent::GoalReached { points: 0 },
                SessionEvent::GameOver { score: 0 },
            ]
        );
    }

    #[test]
    fn steer_rejects_unknown_tokens() {
        let mut session = Session::new(small_options(), 2).unwrap();
        assert!(matches!(
            session.steer("diagonal", 0.1),
            Err(Error::Heading(_))
        ));
        assert_eq!(session.time_left(), 30.0);

        hide_goal(&mut session);
        assert!(session.steer("up", 0.1).is_ok());
        assert_eq!(session.ball().heading(), Heading::Up);
    }

    #[test]
    fn ball_stays_inside_the_maze() {
        for probe in [Probe::Resting, Probe::Swept] {
            let options = Options {
                probe,
                round_seconds: 1000.0,
                ..Default::default()
            };
            let mut session = Session::new(options, 77).unwrap();
            let mut rng = StdRng::seed_from_u64(3);
            let headings = [Heading::Left, Heading::Right, Heading::Up, Heading::Down];
            let low = options.origin;
            let high = options.origin
                + Vec2::new(
                    options.maze_width as f32 * options.cell_size,
                    options.maze_height as f32 * options.cell_size,
                );

            let mut heading = Heading::None;
            for tick in 0..3000 {
                if tick % 40 == 0 {
                    heading = *headings.choose(&mut rng).unwrap();
                }
                session.tick(heading, 1.0 / 60.0).unwrap();
                let p = session.ball().position();
                assert!(
                    p.x > low.x && p.x < high.x && p.y > low.y && p.y < high.y,
                    "{probe} ball escaped to {p:?} on tick {tick}"
                );
            }
        }
    }
}
