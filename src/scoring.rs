//! Points model for batting and bowling figures.
//!
//! Pure functions, no I/O. Points are computed at write time whenever a stat
//! row is inserted or replaced; they are never edited independently.

/// Batting points: one per run, one extra per four, two extra per six.
pub fn batting_points(runs: i32, fours: i32, sixes: i32) -> i32 {
    runs + fours + sixes * 2
}

/// Bowling points: ten per wicket plus an economy bonus.
///
/// The bonus only applies when the bowler actually bowled (`overs > 0`) and
/// conceded at least one run. A wicket-taking bowler with zero runs conceded
/// gets no bonus; that guard is intentional and must not change.
pub fn bowling_points(wickets: i32, runs_conceded: i32, overs: f64) -> i32 {
    let base_points = wickets * 10;
    if overs > 0.0 && runs_conceded > 0 {
        let economy = runs_conceded as f64 / overs;
        let bonus = if economy < 4.0 {
            20
        } else if economy < 6.0 {
            10
        } else if economy < 8.0 {
            5
        } else {
            0
        };
        base_points + bonus
    } else {
        base_points
    }
}
