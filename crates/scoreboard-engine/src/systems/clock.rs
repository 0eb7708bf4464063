//! Game clock and play clock.
//!
//! The clock seconds themselves live in `GameState` (they are persisted);
//! the run state, the play-clock armed flag and the current period length
//! are runtime-only and live here.

use scoreboard_core::commands::{NoOpReason, Outcome};
use scoreboard_core::enums::{ClockState, Quarter};
use scoreboard_core::state::GameState;

/// What happens when a period's clock reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodTransition {
    /// Next regulation quarter.
    Advance(Quarter),
    /// Scores tied with overtime enabled.
    Overtime,
    GameOver,
}

/// Decide the transition out of `quarter`.
pub fn next_period(quarter: Quarter, scores_tied: bool, overtime_enabled: bool) -> PeriodTransition {
    if let Some(next) = quarter.next_regulation() {
        return PeriodTransition::Advance(next);
    }
    if scores_tied && overtime_enabled {
        PeriodTransition::Overtime
    } else {
        PeriodTransition::GameOver
    }
}

/// Result of one game-clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    Idle,
    Ticked,
    Expired,
}

#[derive(Debug, Clone)]
pub struct ClockController {
    state: ClockState,
    play_clock_armed: bool,
    play_clock_duration: u32,
    period_seconds: u32,
}

impl ClockController {
    pub fn new(period_seconds: u32, play_clock_duration: u32) -> Self {
        Self {
            state: ClockState::Paused,
            play_clock_armed: false,
            play_clock_duration,
            period_seconds,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn play_clock_armed(&self) -> bool {
        self.play_clock_armed
    }

    pub fn period_seconds(&self) -> u32 {
        self.period_seconds
    }

    pub fn set_period_seconds(&mut self, seconds: u32) {
        self.period_seconds = seconds;
    }

    pub fn start(&mut self) -> Outcome {
        match self.state {
            ClockState::Running => Outcome::NoOp(NoOpReason::ClockAlreadyRunning),
            ClockState::Expired => Outcome::NoOp(NoOpReason::ClockExpired),
            ClockState::Paused => {
                self.state = ClockState::Running;
                Outcome::Applied
            }
        }
    }

    /// Stop the game clock. Also disarms the play clock.
    pub fn pause(&mut self, state: &mut GameState) -> Outcome {
        if self.state != ClockState::Running {
            return Outcome::NoOp(NoOpReason::ClockAlreadyPaused);
        }
        self.state = ClockState::Paused;
        self.reset_play_clock(state);
        Outcome::Applied
    }

    /// Stop without the play-clock side effect; used by period transitions.
    pub fn halt(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
        }
    }

    /// The period is over for good.
    pub fn expire(&mut self) {
        self.state = ClockState::Expired;
        self.play_clock_armed = false;
    }

    /// Back to a paused clock after a transition or reload.
    pub fn reset(&mut self) {
        self.state = ClockState::Paused;
        self.play_clock_armed = false;
    }

    /// One second of game clock. `Expired` means the period just ended and
    /// the caller must run the transition before anything else.
    pub fn tick_game(&mut self, state: &mut GameState) -> ClockTick {
        if self.state != ClockState::Running {
            return ClockTick::Idle;
        }
        state.clock_seconds = state.clock_seconds.saturating_sub(1);
        if state.clock_seconds == 0 {
            self.state = ClockState::Expired;
            ClockTick::Expired
        } else {
            ClockTick::Ticked
        }
    }

    /// Arm the play clock at full duration.
    pub fn arm_play_clock(&mut self, state: &mut GameState) {
        state.play_clock_seconds = self.play_clock_duration;
        self.play_clock_armed = true;
    }

    /// Disarm and refill the play clock for a new down.
    pub fn reset_play_clock(&mut self, state: &mut GameState) {
        state.play_clock_seconds = self.play_clock_duration;
        self.play_clock_armed = false;
    }

    /// One second of play clock. Returns `true` when it runs out.
    pub fn tick_play_clock(&mut self, state: &mut GameState) -> bool {
        if !self.play_clock_armed {
            return false;
        }
        state.play_clock_seconds = state.play_clock_seconds.saturating_sub(1);
        if state.play_clock_seconds == 0 {
            self.play_clock_armed = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_period_regulation() {
        assert_eq!(
            next_period(Quarter::First, false, true),
            PeriodTransition::Advance(Quarter::Second)
        );
        assert_eq!(
            next_period(Quarter::Third, true, true),
            PeriodTransition::Advance(Quarter::Fourth)
        );
    }

    #[test]
    fn test_next_period_end_of_regulation() {
        assert_eq!(
            next_period(Quarter::Fourth, false, true),
            PeriodTransition::GameOver
        );
        assert_eq!(
            next_period(Quarter::Fourth, true, true),
            PeriodTransition::Overtime
        );
        assert_eq!(
            next_period(Quarter::Fourth, true, false),
            PeriodTransition::GameOver,
            "tie without overtime ends the game"
        );
        assert_eq!(
            next_period(Quarter::Overtime, true, true),
            PeriodTransition::Overtime
        );
        assert_eq!(
            next_period(Quarter::Overtime, false, true),
            PeriodTransition::GameOver
        );
    }

    #[test]
    fn test_clock_only_ticks_while_running() {
        let mut state = GameState::default();
        let mut clock = ClockController::new(900, 30);
        assert_eq!(clock.tick_game(&mut state), ClockTick::Idle);
        assert_eq!(state.clock_seconds, 900);

        assert_eq!(clock.start(), Outcome::Applied);
        assert_eq!(
            clock.start(),
            Outcome::NoOp(NoOpReason::ClockAlreadyRunning)
        );
        assert_eq!(clock.tick_game(&mut state), ClockTick::Ticked);
        assert_eq!(state.clock_seconds, 899);
    }

    #[test]
    fn test_clock_expires_at_zero() {
        let mut state = GameState::default();
        state.clock_seconds = 1;
        let mut clock = ClockController::new(900, 30);
        clock.start();
        assert_eq!(clock.tick_game(&mut state), ClockTick::Expired);
        assert_eq!(clock.state(), ClockState::Expired);
        assert_eq!(state.clock_seconds, 0);
    }

    #[test]
    fn test_pause_disarms_play_clock() {
        let mut state = GameState::default();
        let mut clock = ClockController::new(900, 30);
        clock.start();
        clock.arm_play_clock(&mut state);
        clock.tick_play_clock(&mut state);
        assert_eq!(state.play_clock_seconds, 29);

        assert_eq!(clock.pause(&mut state), Outcome::Applied);
        assert!(!clock.play_clock_armed());
        assert_eq!(state.play_clock_seconds, 30);
        assert_eq!(
            clock.pause(&mut state),
            Outcome::NoOp(NoOpReason::ClockAlreadyPaused)
        );
    }

    #[test]
    fn test_play_clock_expiry_disarms() {
        let mut state = GameState::default();
        let mut clock = ClockController::new(900, 3);
        clock.arm_play_clock(&mut state);
        assert!(!clock.tick_play_clock(&mut state));
        assert!(!clock.tick_play_clock(&mut state));
        assert!(clock.tick_play_clock(&mut state));
        assert!(!clock.play_clock_armed());
        assert!(!clock.tick_play_clock(&mut state), "disarmed clock stays quiet");
    }
}
