//! Rules constants and tuning defaults.

/// Engine tick rate (Hz). Both clocks count whole seconds.
pub const TICK_RATE: u32 = 1;

// --- Periods ---

/// Standard quarter length in seconds (15 minutes).
pub const PERIOD_SECONDS: u32 = 900;

/// Standard overtime period length in seconds (5 minutes).
pub const OVERTIME_SECONDS: u32 = 300;

/// Allowed range for `SetQuarterLength`, in minutes.
pub const MIN_QUARTER_MINUTES: u32 = 1;
pub const MAX_QUARTER_MINUTES: u32 = 60;

// --- Play clock ---

/// Play clock duration in seconds.
pub const PLAY_CLOCK_SECONDS: u32 = 30;

// --- Timeouts ---

/// Timeouts per team per half.
pub const TIMEOUTS_PER_HALF: u8 = 3;

/// Timeouts per team in overtime.
pub const OVERTIME_TIMEOUTS: u8 = 1;

/// Seconds after a timeout before the clock restarts on its own.
pub const TIMEOUT_RESUME_SECONDS: u32 = 30;

// --- Field ---

/// Lowest in-play coordinate on the unified field.
pub const FIELD_MIN: i32 = 1;

/// Highest in-play coordinate on the unified field.
pub const FIELD_MAX: i32 = 99;

/// Midfield coordinate.
pub const MIDFIELD: i32 = 50;

/// Yards needed for a first down.
pub const FIRST_DOWN_YARDS: i32 = 10;

/// Last down before a turnover on downs.
pub const MAX_DOWN: u8 = 4;

/// Ball spot after a touchdown resolved by a play.
pub const POST_SCORE_SPOT: i32 = 35;

/// Kicking team's own yard line for kickoffs.
pub const KICKOFF_SPOT: i32 = 35;

/// Yardage bounds for a single scrimmage play.
pub const MIN_PLAY_YARDS: i32 = -99;
pub const MAX_PLAY_YARDS: i32 = 99;

/// Kickoff distance bounds.
pub const MIN_KICK_DISTANCE: i32 = 20;
pub const MAX_KICK_DISTANCE: i32 = 80;

/// Kick return bounds.
pub const MIN_RETURN_YARDS: i32 = 0;
pub const MAX_RETURN_YARDS: i32 = 100;

/// Penalty yardage bounds.
pub const MIN_PENALTY_YARDS: i32 = 1;
pub const MAX_PENALTY_YARDS: i32 = 15;

/// `SetBallPosition` accepts a team-relative yard line up to midfield.
pub const MIN_YARD_LINE: i32 = 1;
pub const MAX_YARD_LINE: i32 = 50;

// --- Simulated plays ---

pub const SIMULATED_MIN_YARDS: i32 = -10;
pub const SIMULATED_MAX_YARDS: i32 = 30;

// --- Physical play timer ---

/// Default play timer length in seconds.
pub const PLAY_SECONDS: u32 = 10;
pub const MIN_PLAY_SECONDS: u32 = 5;
pub const MAX_PLAY_SECONDS: u32 = 30;

// --- Presentation defaults ---

pub const DEFAULT_TEAM_A_NAME: &str = "Team 1";
pub const DEFAULT_TEAM_B_NAME: &str = "Team 2";
pub const DEFAULT_TEAM_A_COLOR: &str = "#FF0000";
pub const DEFAULT_TEAM_B_COLOR: &str = "#0000FF";

/// Weather shown before anyone changes it.
pub const DEFAULT_WEATHER: &str = "Clear";

/// Labels picked from when weather is changed without a label.
pub const WEATHER_OPTIONS: [&str; 5] = ["Clear", "Rain", "Snow", "Fog", "Windy"];
