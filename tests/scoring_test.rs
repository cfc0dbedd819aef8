use cricket_leaderboard_backend::scoring::{batting_points, bowling_points};

#[test]
fn batting_points_counts_boundaries_on_top_of_runs() {
    // 10 runs + 2 fours + 1 six = 10 + 2 + 2
    assert_eq!(batting_points(10, 2, 1), 14);
}

#[test]
fn batting_points_zero_for_a_duck() {
    assert_eq!(batting_points(0, 0, 0), 0);
}

#[test]
fn batting_points_runs_only() {
    assert_eq!(batting_points(37, 0, 0), 37);
}

#[test]
fn bowling_points_base_is_ten_per_wicket() {
    // Economy 9.6 lands in the no-bonus bucket
    assert_eq!(bowling_points(2, 48, 5.0), 20);
}

#[test]
fn bowling_points_excellent_economy_bonus() {
    // 18 runs in 6 overs, economy 3.0
    assert_eq!(bowling_points(3, 18, 6.0), 50);
}

#[test]
fn bowling_points_good_economy_bonus() {
    // Economy exactly 4.0 falls into the [4, 6) bucket
    assert_eq!(bowling_points(2, 40, 10.0), 30);
}

#[test]
fn bowling_points_decent_economy_bonus() {
    // Economy exactly 6.0 falls into the [6, 8) bucket
    assert_eq!(bowling_points(1, 24, 4.0), 15);
}

#[test]
fn bowling_points_economy_of_eight_gets_no_bonus() {
    assert_eq!(bowling_points(1, 32, 4.0), 10);
}

#[test]
fn bowling_points_no_bonus_without_runs_conceded() {
    // The guard requires runs_conceded > 0: a perfect spell gets no bonus
    assert_eq!(bowling_points(1, 0, 4.0), 10);
}

#[test]
fn bowling_points_no_bonus_without_overs() {
    assert_eq!(bowling_points(2, 10, 0.0), 20);
}

#[test]
fn bowling_points_fractional_overs() {
    // 3.5 overs, 21 conceded: economy 6.0 -> +5
    assert_eq!(bowling_points(2, 21, 3.5), 25);
}
