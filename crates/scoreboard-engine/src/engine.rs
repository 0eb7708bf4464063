//! Scoreboard engine: the authoritative game model.
//!
//! `ScoreboardEngine` owns the `GameState`, validates and applies commands,
//! runs the clocks once per tick and produces `GameView`s. Completely
//! headless and free of I/O, so whole games can be replayed in tests.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

use scoreboard_core::commands::{Command, NoOpReason, Outcome};
use scoreboard_core::constants::*;
use scoreboard_core::enums::*;
use scoreboard_core::error::{PersistenceError, ValidationError};
use scoreboard_core::events::{AudioCue, GameEvent, Notice};
use scoreboard_core::state::{GameState, GameView};
use scoreboard_core::types::{is_hex_color, LastPlay, TeamState};

use crate::config::EngineConfig;
use crate::scheduler::{TaskKind, TaskScheduler};
use crate::systems::clock::{self, ClockController, ClockTick, PeriodTransition};
use crate::systems::view::{self, ViewContext};
use crate::systems::{field, play_log, possession, scoring, timeouts};
use crate::validation;

/// Build the state a new game starts from.
pub fn initial_state(config: &EngineConfig) -> GameState {
    let team = |team: &crate::config::TeamConfig, name: &str, color: &str| {
        TeamState::new(
            team.name.clone().unwrap_or_else(|| name.to_string()),
            team.color.clone().unwrap_or_else(|| color.to_string()),
            config.timeouts_per_half,
        )
    };
    GameState {
        team_a: team(&config.teams.team_a, DEFAULT_TEAM_A_NAME, DEFAULT_TEAM_A_COLOR),
        team_b: team(&config.teams.team_b, DEFAULT_TEAM_B_NAME, DEFAULT_TEAM_B_COLOR),
        clock_seconds: config.period_seconds,
        period_seconds: config.period_seconds,
        play_clock_seconds: config.play_clock_seconds,
        overtime_enabled: config.overtime_enabled,
        ..GameState::default()
    }
}

/// The scoreboard engine. Owns the game state and all runtime state.
pub struct ScoreboardEngine {
    config: EngineConfig,
    state: GameState,
    clock: ClockController,
    phase: GamePhase,
    pending: Option<PendingDecision>,
    /// Score-stack index of the touchdown that created `pending`.
    pending_origin: Option<usize>,
    last_play: Option<LastPlay>,
    scheduler: TaskScheduler,
    command_queue: VecDeque<Command>,
    events: Vec<GameEvent>,
    rng: ChaCha8Rng,
    tick: u64,
}

impl ScoreboardEngine {
    /// Create an engine holding a fresh game that awaits the opening kickoff.
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = Self {
            state: initial_state(&config),
            clock: ClockController::new(config.period_seconds, config.play_clock_seconds),
            phase: GamePhase::InProgress,
            pending: None,
            pending_origin: None,
            last_play: None,
            scheduler: TaskScheduler::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: 0,
            config,
        };
        engine.require_kickoff(None);
        engine
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance one second: drain queued commands, run both clocks, fire due
    /// timed tasks and drain again. Returns the resulting view.
    #[instrument(level = "trace", skip(self), fields(tick = self.tick))]
    pub fn tick(&mut self) -> GameView {
        self.process_queued();

        if self.phase == GamePhase::InProgress {
            self.advance_clocks();
        }
        self.tick += 1;

        let due = self.scheduler.take_due(self.tick);
        self.queue_commands(due);
        self.process_queued();

        self.view()
    }

    /// Validate and apply one command immediately.
    ///
    /// A `ValidationError` leaves the game untouched. A no-op also emits an
    /// informational notice.
    #[instrument(skip(self, command), fields(command = command.name()))]
    pub fn apply(&mut self, command: Command) -> Result<Outcome, ValidationError> {
        if self.phase == GamePhase::Final && !command.allowed_after_final() {
            return Err(ValidationError::GameOver);
        }
        let outcome = self.handle_command(command)?;
        if let Outcome::NoOp(reason) = outcome {
            self.events
                .push(GameEvent::Notice(Notice::info(reason.message())));
        }
        debug!(?outcome, "command applied");
        Ok(outcome)
    }

    /// Copy of the persisted state.
    pub fn save(&self) -> GameState {
        self.state.clone()
    }

    /// Replace the game with `snapshot`. On error the current game is kept.
    #[instrument(skip_all)]
    pub fn load(&mut self, snapshot: GameState) -> Result<(), PersistenceError> {
        if let Err(err) = validation::validate_snapshot(&snapshot, &self.config) {
            warn!(%err, "snapshot rejected");
            return Err(err);
        }
        self.state = snapshot;
        self.reset_runtime();
        info!(
            quarter = %self.state.quarter,
            score_a = self.state.team_a.score,
            score_b = self.state.team_b.score,
            "game loaded"
        );
        self.events
            .push(GameEvent::Notice(Notice::info("Game loaded")));
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), PersistenceError> {
        let snapshot: GameState = match serde_json::from_str(json) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(%err, "malformed snapshot");
                return Err(err.into());
            }
        };
        self.load(snapshot)
    }

    pub fn save_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    pub fn view(&self) -> GameView {
        view::build_view(
            &self.state,
            &ViewContext {
                tick: self.tick,
                phase: self.phase,
                clock: &self.clock,
                orientation: self.config.orientation,
                play_clock_enabled: self.config.features.play_clock_enabled,
                pending: self.pending,
                last_play: self.last_play,
            },
        )
    }

    /// Take every notification emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pending(&self) -> Option<PendingDecision> {
        self.pending
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn play_clock_armed(&self) -> bool {
        self.clock.play_clock_armed()
    }

    pub fn period_seconds(&self) -> u32 {
        self.clock.period_seconds()
    }

    pub fn last_play(&self) -> Option<LastPlay> {
        self.last_play
    }

    pub fn is_task_scheduled(&self, kind: TaskKind) -> bool {
        self.scheduler.is_scheduled(kind)
    }

    pub fn queued_commands(&self) -> usize {
        self.command_queue.len()
    }

    /// Mutable access for setting up test positions.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    // --- Command processing ---

    /// Apply every queued command now, without advancing the clocks.
    /// Rejections become warning notices, as in `tick`.
    pub fn process_queued(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            let name = command.name();
            if let Err(err) = self.apply(command) {
                warn!(command = name, %err, "queued command rejected");
                self.events.push(GameEvent::Notice(Notice::warning(format!(
                    "{name}: {err}"
                ))));
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> Result<Outcome, ValidationError> {
        match command {
            Command::StartClock => {
                self.scheduler.cancel(TaskKind::TimeoutResume);
                let outcome = self.clock.start();
                if outcome == Outcome::Applied {
                    self.clock.reset_play_clock(&mut self.state);
                }
                Ok(outcome)
            }
            Command::PauseClock => {
                self.scheduler.cancel(TaskKind::TimeoutResume);
                self.scheduler.cancel(TaskKind::PlayTimer);
                Ok(self.clock.pause(&mut self.state))
            }
            Command::SetQuarterLength { minutes } => {
                ValidationError::check_range(
                    "minutes",
                    i64::from(minutes),
                    i64::from(MIN_QUARTER_MINUTES),
                    i64::from(MAX_QUARTER_MINUTES),
                )?;
                let seconds = minutes * 60;
                self.clock.set_period_seconds(seconds);
                self.state.period_seconds = seconds;
                self.state.clock_seconds = seconds;
                info!(minutes, "quarter length set");
                self.events.push(GameEvent::Notice(Notice::info(format!(
                    "Quarter length set to {minutes} minutes"
                ))));
                Ok(Outcome::Applied)
            }
            Command::StartPlayClock => {
                if !self.config.features.play_clock_enabled {
                    return Err(ValidationError::FeatureDisabled("play clock"));
                }
                self.clock.arm_play_clock(&mut self.state);
                Ok(Outcome::Applied)
            }
            Command::AdvanceQuarter => {
                if !self.config.features.manual_quarter_advance_enabled {
                    return Err(ValidationError::FeatureDisabled("manual quarter advance"));
                }
                self.clock.halt();
                self.end_period();
                Ok(Outcome::Applied)
            }
            Command::Kickoff {
                kicking_team,
                kick_distance,
                return_yards,
            } => {
                self.ensure_no_post_touchdown()?;
                ValidationError::check_range(
                    "kick_distance",
                    i64::from(kick_distance),
                    i64::from(MIN_KICK_DISTANCE),
                    i64::from(MAX_KICK_DISTANCE),
                )?;
                ValidationError::check_range(
                    "return_yards",
                    i64::from(return_yards),
                    i64::from(MIN_RETURN_YARDS),
                    i64::from(MAX_RETURN_YARDS),
                )?;
                if let Some(PendingDecision::Kickoff {
                    kicking_team: Some(expected),
                }) = self.pending
                {
                    if expected != kicking_team {
                        return Err(ValidationError::WrongTeam {
                            expected,
                            got: kicking_team,
                        });
                    }
                }
                self.kickoff(kicking_team, kick_distance, return_yards);
                Ok(Outcome::Applied)
            }
            Command::SetBallPosition { side, yard_line } => {
                ValidationError::check_range(
                    "yard_line",
                    i64::from(yard_line),
                    i64::from(MIN_YARD_LINE),
                    i64::from(MAX_YARD_LINE),
                )?;
                self.state.ball_on = field::place_on_side(self.config.orientation, side, yard_line);
                let text = self.yard_line_text(self.state.ball_on);
                play_log::append(&mut self.state, format!("Ball moved to {text}"));
                Ok(Outcome::Applied)
            }
            Command::ResolvePlay {
                play_type,
                yards,
                turnover,
            } => {
                self.ensure_no_post_touchdown()?;
                ValidationError::check_range(
                    "yards",
                    i64::from(yards),
                    i64::from(MIN_PLAY_YARDS),
                    i64::from(MAX_PLAY_YARDS),
                )?;
                self.resolve_play(play_type, yards, turnover);
                Ok(Outcome::Applied)
            }
            Command::SimulatePlay => {
                self.ensure_no_post_touchdown()?;
                let play_type = PlayType::ALL[self.rng.gen_range(0..PlayType::ALL.len())];
                let yards = self
                    .rng
                    .gen_range(SIMULATED_MIN_YARDS..=SIMULATED_MAX_YARDS);
                debug!(?play_type, yards, "simulated play");
                self.resolve_play(play_type, yards, false);
                Ok(Outcome::Applied)
            }
            Command::Award { team, points } => {
                self.ensure_no_post_touchdown()?;
                let kind = ScoreKind::from_points(points)?;
                let index = scoring::award(&mut self.state, &mut self.events, team, kind);
                if kind == ScoreKind::Touchdown {
                    self.require_post_touchdown(team, index);
                }
                Ok(Outcome::Applied)
            }
            Command::ChoosePostTouchdown { team, choice } => {
                let scorer = match self.pending {
                    Some(PendingDecision::PostTouchdown { team }) => team,
                    _ => return Err(ValidationError::NoPostTouchdownPending),
                };
                if team != scorer {
                    return Err(ValidationError::WrongTeam {
                        expected: scorer,
                        got: team,
                    });
                }
                self.choose_post_touchdown(scorer, choice);
                Ok(Outcome::Applied)
            }
            Command::UndoLastScore => Ok(self.undo_last_score()),
            Command::ReplayReview { overturn } => {
                self.clock.pause(&mut self.state);
                self.scheduler.cancel(TaskKind::TimeoutResume);
                if overturn {
                    self.undo_last_score();
                    play_log::append(&mut self.state, "Replay review: call overturned");
                } else {
                    play_log::append(&mut self.state, "Replay review: call stands");
                }
                Ok(Outcome::Applied)
            }
            Command::Penalty { team, yards } => {
                ValidationError::check_range(
                    "yards",
                    i64::from(yards),
                    i64::from(MIN_PENALTY_YARDS),
                    i64::from(MAX_PENALTY_YARDS),
                )?;
                self.state.ball_on = field::penalty_result(
                    self.config.orientation,
                    self.state.possession,
                    team,
                    self.state.ball_on,
                    yards,
                );
                self.state.team_mut(team).stats.penalties += 1;
                let name = self.state.team(team).name.clone();
                play_log::append(&mut self.state, format!("Penalty on {name}: {yards} yds"));
                Ok(Outcome::Applied)
            }
            Command::SwitchPossession => {
                possession::switch(&mut self.state, &mut self.events);
                self.start_new_down();
                Ok(Outcome::Applied)
            }
            Command::UseTimeout { team } => {
                let outcome = timeouts::use_timeout(&mut self.state, &mut self.events, team);
                if outcome == Outcome::Applied {
                    self.clock.pause(&mut self.state);
                    if self.config.timeout_resume_secs > 0 {
                        self.scheduler.schedule(
                            TaskKind::TimeoutResume,
                            self.tick,
                            self.config.timeout_resume_secs,
                            Command::StartClock,
                        );
                    }
                }
                Ok(outcome)
            }
            Command::ClearLog => {
                play_log::clear(&mut self.state);
                self.pending_origin = None;
                Ok(Outcome::Applied)
            }
            Command::ResetGame => {
                self.reset_game();
                Ok(Outcome::Applied)
            }
            Command::ToggleOvertime => {
                self.toggle_overtime();
                Ok(Outcome::Applied)
            }
            Command::SetWeather { label } => {
                let label = label
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty());
                self.state.weather = match label {
                    Some(label) => label,
                    None => WEATHER_OPTIONS
                        .choose(&mut self.rng)
                        .copied()
                        .unwrap_or(DEFAULT_WEATHER)
                        .to_string(),
                };
                Ok(Outcome::Applied)
            }
            Command::SetTeamName { team, name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ValidationError::EmptyTeamName);
                }
                self.state.team_mut(team).name = name.to_string();
                Ok(Outcome::Applied)
            }
            Command::SetTeamColor { team, color } => {
                if !is_hex_color(&color) {
                    return Err(ValidationError::InvalidColor(color));
                }
                self.state.team_mut(team).color = color;
                Ok(Outcome::Applied)
            }
            Command::ToggleVibration => {
                self.state.vibration.enabled = !self.state.vibration.enabled;
                if !self.state.vibration.enabled {
                    self.scheduler.cancel(TaskKind::PlayTimer);
                }
                Ok(Outcome::Applied)
            }
            Command::SetVibrationIntensity { value } => {
                if !self.config.features.vibration_intensity {
                    return Err(ValidationError::FeatureDisabled("vibration intensity"));
                }
                if !(0.0..=1.0).contains(&value) {
                    return Err(ValidationError::IntensityOutOfRange(value));
                }
                self.state.vibration.intensity = value;
                Ok(Outcome::Applied)
            }
            Command::SetPlaySeconds { seconds } => {
                ValidationError::check_range(
                    "seconds",
                    i64::from(seconds),
                    i64::from(MIN_PLAY_SECONDS),
                    i64::from(MAX_PLAY_SECONDS),
                )?;
                self.state.vibration.play_seconds = seconds;
                Ok(Outcome::Applied)
            }
            Command::StartPlayTimer => {
                if !self.state.vibration.enabled {
                    return Ok(Outcome::NoOp(NoOpReason::VibrationDisabled));
                }
                self.events.push(GameEvent::Audio {
                    cue: AudioCue::Vibration,
                });
                let seconds = if self.config.features.vibration_intensity {
                    self.state.vibration.timer_seconds()
                } else {
                    self.state.vibration.play_seconds
                };
                self.scheduler.schedule(
                    TaskKind::PlayTimer,
                    self.tick,
                    seconds,
                    Command::PlayTimerElapsed,
                );
                Ok(Outcome::Applied)
            }
            Command::PlayTimerElapsed => {
                if self.state.vibration.enabled && self.clock.is_running() {
                    self.events.push(GameEvent::Audio {
                        cue: AudioCue::Vibration,
                    });
                    Ok(Outcome::Applied)
                } else {
                    Ok(Outcome::NoOp(NoOpReason::PlayTimerStale))
                }
            }
        }
    }

    fn ensure_no_post_touchdown(&self) -> Result<(), ValidationError> {
        match self.pending {
            Some(PendingDecision::PostTouchdown { team }) => {
                Err(ValidationError::PostTouchdownPending { team })
            }
            _ => Ok(()),
        }
    }

    // --- Field and drive ---

    fn resolve_play(&mut self, play_type: PlayType, yards: i32, turnover: bool) {
        let team = self.state.possession;
        let start = self.state.ball_on;
        self.state.team_mut(team).stats.record_play(play_type, yards);

        match field::project_gain(self.config.orientation, team, start, yards) {
            field::BallMovement::Touchdown => {
                play_log::append(
                    &mut self.state,
                    format!("{} Play: {} yds (Touchdown)", play_type.label(), yards),
                );
                // Award first so the score event keeps the pre-play spot.
                let index = scoring::award(
                    &mut self.state,
                    &mut self.events,
                    team,
                    ScoreKind::Touchdown,
                );
                self.state.ball_on = field::clamp_to_field(self.config.post_score_spot);
                possession::flip(&mut self.state);
                self.last_play = Some(LastPlay {
                    play_type,
                    yards,
                    start,
                    end: self.config.orientation.target_goal(team),
                    team,
                });
                self.require_post_touchdown(team, index);
            }
            field::BallMovement::Moved { to } => {
                self.state.ball_on = to;
                let text = self.yard_line_text(to);
                let suffix = if turnover { " (Turnover)" } else { "" };
                play_log::append(
                    &mut self.state,
                    format!("{} Play: {} yds to {}{}", play_type.label(), yards, text, suffix),
                );
                self.last_play = Some(LastPlay {
                    play_type,
                    yards,
                    start,
                    end: to,
                    team,
                });
                if turnover {
                    possession::switch(&mut self.state, &mut self.events);
                } else {
                    self.advance_downs(team, yards);
                }
            }
        }
        self.start_new_down();
    }

    /// Count the down first: a play that ends the fourth down turns the
    /// ball over even when it reaches the line to gain.
    fn advance_downs(&mut self, team: TeamId, yards: i32) {
        self.state.down += 1;
        if self.state.down > MAX_DOWN {
            play_log::append(&mut self.state, "Turnover on downs");
            possession::switch(&mut self.state, &mut self.events);
            return;
        }
        self.state.yards_to_go -= yards;
        if self.state.yards_to_go <= 0 {
            self.state.team_mut(team).stats.first_downs += 1;
            self.state.reset_downs();
            let name = self.state.team(team).name.clone();
            play_log::append(&mut self.state, format!("First down {name}"));
            self.events.push(GameEvent::FirstDown { team });
        }
    }

    fn kickoff(&mut self, kicker: TeamId, kick_distance: i32, return_yards: i32) {
        let spot = field::kickoff_result(
            self.config.orientation,
            kicker,
            self.config.kickoff_spot,
            kick_distance,
            return_yards,
        );
        self.state.possession = kicker.other();
        self.state.ball_on = spot;
        self.state.reset_downs();
        if matches!(self.pending, Some(PendingDecision::Kickoff { .. })) {
            self.pending = None;
            self.pending_origin = None;
        }

        let name = self.state.team(kicker).name.clone();
        let text = self.yard_line_text(spot);
        play_log::append(&mut self.state, format!("Kickoff: {name} to {text}"));
        self.events.push(GameEvent::Audio {
            cue: AudioCue::Kickoff,
        });
        self.start_new_down();
    }

    /// A new down or kickoff: fresh play clock, stale timeout resume dropped.
    fn start_new_down(&mut self) {
        self.clock.reset_play_clock(&mut self.state);
        self.scheduler.cancel(TaskKind::TimeoutResume);
    }

    fn yard_line_text(&self, ball_on: i32) -> String {
        field::yard_line_text(&self.state, self.config.orientation, ball_on)
    }

    // --- Scoring sequence ---

    fn require_post_touchdown(&mut self, team: TeamId, score_index: usize) {
        self.pending = Some(PendingDecision::PostTouchdown { team });
        self.pending_origin = Some(score_index);
        self.events
            .push(GameEvent::PostTouchdownChoiceRequired { team });
    }

    fn require_kickoff(&mut self, kicking_team: Option<TeamId>) {
        self.pending = Some(PendingDecision::Kickoff { kicking_team });
        self.events
            .push(GameEvent::KickoffRequired { kicking_team });
    }

    fn choose_post_touchdown(&mut self, team: TeamId, choice: PostTouchdownChoice) {
        match choice {
            PostTouchdownChoice::Pat => {
                scoring::award(&mut self.state, &mut self.events, team, ScoreKind::ExtraPoint);
            }
            PostTouchdownChoice::TwoPoint => {
                scoring::award(
                    &mut self.state,
                    &mut self.events,
                    team,
                    ScoreKind::TwoPointOrSafety,
                );
            }
            PostTouchdownChoice::Kickoff => {
                let name = self.state.team(team).name.clone();
                play_log::append(&mut self.state, format!("{name} skips the try"));
            }
        }
        let origin = self.pending_origin;
        self.require_kickoff(Some(team));
        self.pending_origin = origin;
    }

    fn undo_last_score(&mut self) -> Outcome {
        match scoring::undo_last(&mut self.state, &mut self.events) {
            None => Outcome::NoOp(NoOpReason::NothingToUndo),
            Some((index, _)) => {
                if self.pending_origin == Some(index) {
                    self.pending = None;
                    self.pending_origin = None;
                }
                Outcome::Applied
            }
        }
    }

    // --- Clock and periods ---

    fn advance_clocks(&mut self) {
        if self.clock.tick_game(&mut self.state) == ClockTick::Expired {
            self.end_period();
        }
        if self.phase == GamePhase::InProgress
            && self.config.features.play_clock_enabled
            && self.clock.tick_play_clock(&mut self.state)
        {
            self.on_play_clock_expired();
        }
    }

    fn on_play_clock_expired(&mut self) {
        debug!("play clock expired");
        self.events.push(GameEvent::PlayClockExpired);
        self.events.push(GameEvent::Audio {
            cue: AudioCue::PlayClockBuzzer,
        });
        if self.config.resume_clock_on_play_clock_expiry && !self.clock.is_running() {
            self.clock.start();
        }
    }

    /// Run the quarter-end rule for the current period.
    fn end_period(&mut self) {
        let transition = clock::next_period(
            self.state.quarter,
            self.state.scores_tied(),
            self.state.overtime_enabled,
        );
        match transition {
            PeriodTransition::Advance(quarter) => {
                self.begin_period(quarter, self.clock.period_seconds());
            }
            PeriodTransition::Overtime => {
                self.begin_period(Quarter::Overtime, self.config.overtime_seconds);
            }
            PeriodTransition::GameOver => self.finish_game(),
        }
    }

    fn begin_period(&mut self, quarter: Quarter, seconds: u32) {
        let ending = self.state.quarter;
        self.state.quarter = quarter;
        self.state.clock_seconds = seconds;
        self.clock.reset();
        self.clock.reset_play_clock(&mut self.state);
        self.scheduler.cancel_all();
        timeouts::refill_for_period(
            &mut self.state,
            quarter,
            self.config.timeouts_per_half,
            self.config.overtime_timeouts,
        );

        let entry = match quarter {
            Quarter::Overtime => "Start of overtime".to_string(),
            q => format!("Start of Q{q}"),
        };
        play_log::append(&mut self.state, entry);
        info!(from = %ending, to = %quarter, "period started");

        self.events.push(GameEvent::PeriodStarted { quarter });
        if quarter == Quarter::Overtime {
            self.events.push(GameEvent::OvertimeStarted);
        }
        if !matches!(self.pending, Some(PendingDecision::PostTouchdown { .. })) {
            self.pending_origin = None;
            self.require_kickoff(None);
        }
    }

    fn finish_game(&mut self) {
        self.clock.expire();
        self.scheduler.cancel_all();
        self.phase = GamePhase::Final;
        self.pending = None;
        self.pending_origin = None;

        let winner = self.state.leader();
        let (score_a, score_b) = (self.state.team_a.score, self.state.team_b.score);
        let entry = match winner {
            Some(team) => format!(
                "Final: {} {} - {} {}, {} wins",
                self.state.team_a.name,
                score_a,
                self.state.team_b.name,
                score_b,
                self.state.team(team).name
            ),
            None => format!("Final: Tie {score_a} - {score_b}"),
        };
        play_log::append(&mut self.state, entry);
        info!(?winner, score_a, score_b, "game over");

        self.events.push(GameEvent::GameOver {
            winner,
            score_a,
            score_b,
        });
        self.events.push(GameEvent::Audio {
            cue: AudioCue::GameOver,
        });
    }

    // --- Game management ---

    fn toggle_overtime(&mut self) {
        self.state.overtime_enabled = !self.state.overtime_enabled;
        let enabled = self.state.overtime_enabled;
        info!(enabled, "overtime toggled");
        let late_tie = self.state.scores_tied() && self.state.quarter >= Quarter::Fourth;
        let notice = if !enabled && late_tie {
            Notice::warning("Overtime disabled with the score tied; a tie will end the game")
        } else if enabled {
            Notice::info("Overtime enabled")
        } else {
            Notice::info("Overtime disabled")
        };
        self.events.push(GameEvent::Notice(notice));
    }

    /// Start over, keeping team identities and the overtime setting.
    fn reset_game(&mut self) {
        let mut fresh = initial_state(&self.config);
        for id in TeamId::both() {
            let old = self.state.team(id);
            let (name, color) = (old.name.clone(), old.color.clone());
            let team = fresh.team_mut(id);
            team.name = name;
            team.color = color;
        }
        fresh.overtime_enabled = self.state.overtime_enabled;
        fresh.period_seconds = self.state.period_seconds;
        fresh.clock_seconds = self.state.period_seconds;
        self.state = fresh;
        self.reset_runtime();
        self.require_kickoff(None);
        info!("game reset");
        self.events
            .push(GameEvent::Notice(Notice::info("Game reset")));
    }

    /// Clear everything that is not persisted and rebuild the clock and
    /// phase from the state. A game whose last period ran out with no
    /// further period to play comes back final.
    fn reset_runtime(&mut self) {
        self.clock =
            ClockController::new(self.state.period_seconds, self.config.play_clock_seconds);
        self.phase = GamePhase::InProgress;
        self.pending = None;
        self.pending_origin = None;
        self.last_play = None;
        self.scheduler.cancel_all();
        self.command_queue.clear();

        let over = self.state.clock_seconds == 0
            && matches!(
                clock::next_period(
                    self.state.quarter,
                    self.state.scores_tied(),
                    self.state.overtime_enabled,
                ),
                PeriodTransition::GameOver
            );
        if over {
            self.clock.expire();
            self.phase = GamePhase::Final;
        }
    }
}
