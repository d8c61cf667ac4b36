// THEORY:
// The `round` module is the top-level API of the game. `RoundStateMachine` owns
// the score, the current target and the countdown, and drives the other
// components once per tick:
//
//   host frame -> CaptureContext (single slot) -> FrameClassifier -> win/timeout
//                                                                   -> ColorPicker
//
// Key architectural principles:
// 1.  **One Steady State**: After `start()` the machine is always in a running
//     round. A round ends in a win or a timeout, and both immediately begin the
//     next round. There is no "game over".
// 2.  **Timeout First**: Each tick first spends the elapsed time. If the clock has
//     run out the round is lost, even if the cached frame would have won it.
// 3.  **Adaptive Deadline**: The first round gets a fixed, generous budget. Every
//     later round gets exactly as long as the previous round actually took, so
//     quick finds make the game harder and slow ones make it easier. No floor is
//     applied; a near-instant round produces a near-zero next round (logged).
// 4.  **Caller-Driven Time**: The machine never reads a clock. The driver passes
//     the elapsed seconds into every `tick`.

use crate::config::GameConfig;
use crate::core_modules::capture::{CameraDevice, CaptureContext, NullCamera};
use crate::core_modules::color::color::NamedColorRange;
use crate::core_modules::color_picker::ColorPicker;
use crate::core_modules::frame::FrameBuffer;
use crate::core_modules::frame_classifier::{MatchRatio, frame_classifier};
use crate::core_modules::palette::Palette;
use crate::error::{GameError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Seconds = f64;
pub type Percentage = f64;

/// Budget of the very first round.
pub const FIRST_ROUND_SECONDS: Seconds = 300.0;

/// Deadlines shorter than this are reported as degenerate.
const SHORT_DEADLINE_WARNING: Seconds = 0.5;

/// Everything the display shows. Refreshed on every tick and round change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scoreboard {
    pub target_name: String,
    pub score: u32,
    /// Share of the last classified frame matching the target (0-100).
    pub match_percentage: Percentage,
    pub remaining_clock: Seconds,
    pub instruction_text: String,
    /// Set on the board emitted by a round change, cleared by the next tick.
    pub fresh_round: bool,
}

impl Scoreboard {
    pub fn percentage_text(&self) -> String {
        format!("{:.1}%", self.match_percentage)
    }

    /// Whole seconds right after a round change, milliseconds while counting down.
    pub fn clock_text(&self) -> String {
        if self.fresh_round {
            format!("{:.0}", self.remaining_clock)
        } else {
            format!("{:.3}", self.remaining_clock)
        }
    }

    /// The label placed next to the percentage.
    pub fn percent_color_text(&self) -> &str {
        &self.target_name
    }
}

/// How a tick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The round is still running.
    InProgress,
    /// The frame matched enough of the target; a point was scored.
    Won,
    /// The clock ran out before the target was found.
    TimedOut,
}

/// The result of a single tick.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub outcome: RoundOutcome,
    pub scoreboard: Scoreboard,
}

/// Score, target and countdown. Owned and mutated only by `RoundStateMachine`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    /// Index into the palette, or `palette.len()` before the first round.
    pub target_index: usize,
    pub score: u32,
    /// Seconds left in the current round.
    pub clock: Seconds,
    /// The deadline the current round started with.
    pub max_clock: Seconds,
}

/// The main, top-level struct of the game.
pub struct RoundStateMachine<C = NullCamera, R = StdRng> {
    palette: Palette,
    picker: ColorPicker<R>,
    capture: CaptureContext<C>,
    goal_percentage: Percentage,
    state: RoundState,
    scoreboard: Scoreboard,
}

impl<C: CameraDevice> RoundStateMachine<C, StdRng> {
    /// Builds a machine from startup configuration.
    pub fn from_config(config: &GameConfig, camera: C) -> Result<Self> {
        config.validate()?;
        let palette = config.build_palette()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let capture = CaptureContext::new(camera, config.format());
        Self::with_parts(palette, rng, capture, config.goal_percentage)
    }
}

impl<C: CameraDevice, R: Rng> RoundStateMachine<C, R> {
    pub fn with_parts(
        palette: Palette,
        rng: R,
        capture: CaptureContext<C>,
        goal_percentage: Percentage,
    ) -> Result<Self> {
        if !(0.0..=100.0).contains(&goal_percentage) {
            return Err(GameError::InvalidGoalPercentage(goal_percentage));
        }
        let picker = ColorPicker::with_rng(palette.len(), rng)?;
        let state = RoundState {
            target_index: picker.sentinel(),
            score: 0,
            clock: 0.0,
            max_clock: 0.0,
        };
        Ok(Self {
            palette,
            picker,
            capture,
            goal_percentage,
            state,
            scoreboard: Scoreboard::default(),
        })
    }

    /// Begins the first round: unconstrained target, fixed deadline.
    pub fn start(&mut self) -> &Scoreboard {
        self.state.target_index = self.picker.sentinel();
        self.transition_round(false)
    }

    /// Advances the clock and judges the latest delivered frame, if any.
    pub fn tick(&mut self, elapsed: Seconds) -> TickReport {
        if let Some(report) = self.start_if_idle() {
            return report;
        }
        if self.count_down(elapsed) {
            return self.time_out();
        }
        let ratio = match self.capture.latest_frame() {
            Ok(frame) => self.score_frame(frame),
            Err(_) => None,
        };
        self.judge(ratio)
    }

    /// Like `tick`, with the frame handed in directly instead of read from the
    /// capture context.
    pub fn tick_with_frame(&mut self, elapsed: Seconds, frame: Option<&FrameBuffer>) -> TickReport {
        if let Some(report) = self.start_if_idle() {
            return report;
        }
        if self.count_down(elapsed) {
            return self.time_out();
        }
        let ratio = frame.and_then(|frame| self.score_frame(frame));
        self.judge(ratio)
    }

    /// Ends the current round and begins the next one.
    pub fn transition_round(&mut self, award_point: bool) -> &Scoreboard {
        if award_point {
            self.state.score += 1;
        }

        let next_deadline = if self.state.target_index == self.picker.sentinel() {
            FIRST_ROUND_SECONDS
        } else {
            self.state.max_clock - self.state.clock
        };
        if next_deadline < SHORT_DEADLINE_WARNING {
            log::warn!("next round deadline is only {next_deadline:.3}s");
        }
        self.state.clock = next_deadline;
        self.state.max_clock = next_deadline;

        self.state.target_index = self.picker.pick_next(self.state.target_index);

        let target_name = self.palette[self.state.target_index].name.clone();
        log::debug!(
            "round begins: target={} deadline={:.3}s score={}",
            target_name,
            next_deadline,
            self.state.score
        );
        self.scoreboard = Scoreboard {
            instruction_text: instruction_text(self.goal_percentage, &target_name),
            target_name,
            score: self.state.score,
            match_percentage: 0.0,
            remaining_clock: self.state.clock,
            fresh_round: true,
        };
        &self.scoreboard
    }

    /// A tick before `start()` begins the first round instead of judging one
    /// that never ran.
    fn start_if_idle(&mut self) -> Option<TickReport> {
        if self.state.target_index != self.picker.sentinel() {
            return None;
        }
        log::warn!("tick before start; beginning the first round");
        self.start();
        Some(self.report(RoundOutcome::InProgress))
    }

    /// Spends `elapsed` seconds. Returns true when the clock has run out.
    fn count_down(&mut self, elapsed: Seconds) -> bool {
        self.state.clock -= elapsed;
        self.state.clock <= 0.0
    }

    fn time_out(&mut self) -> TickReport {
        log::info!(
            "time's up on {} after {:.3}s",
            self.scoreboard.target_name,
            self.state.max_clock
        );
        // The round used its whole budget, which becomes the next deadline.
        self.state.clock = 0.0;
        self.transition_round(false);
        self.report(RoundOutcome::TimedOut)
    }

    fn score_frame(&self, frame: &FrameBuffer) -> Option<MatchRatio> {
        self.palette
            .get(self.state.target_index)
            .map(|target| frame_classifier::classify(frame, target))
    }

    fn judge(&mut self, ratio: Option<MatchRatio>) -> TickReport {
        if let Some(ratio) = ratio {
            let percentage = ratio * 100.0;
            if percentage >= self.goal_percentage {
                log::info!(
                    "found {} ({percentage:.1}%) with {:.3}s left",
                    self.scoreboard.target_name,
                    self.state.clock
                );
                self.transition_round(true);
                return self.report(RoundOutcome::Won);
            }
            self.scoreboard.match_percentage = percentage;
        }
        self.scoreboard.remaining_clock = self.state.clock;
        self.scoreboard.fresh_round = false;
        self.report(RoundOutcome::InProgress)
    }

    fn report(&self, outcome: RoundOutcome) -> TickReport {
        TickReport {
            outcome,
            scoreboard: self.scoreboard.clone(),
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn current_target(&self) -> Option<&NamedColorRange> {
        self.palette.get(self.state.target_index)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn goal_percentage(&self) -> Percentage {
        self.goal_percentage
    }

    pub fn capture(&self) -> &CaptureContext<C> {
        &self.capture
    }

    /// Host callbacks (`on_started`, `on_paused`, `deliver_frame`) go through here.
    pub fn capture_mut(&mut self) -> &mut CaptureContext<C> {
        &mut self.capture
    }
}

pub fn instruction_text(goal_percentage: Percentage, target_name: &str) -> String {
    format!(
        "Fill {goal_percentage}% of the screen with the\ncolor {target_name} \
         before the timer runs out!"
    )
}
