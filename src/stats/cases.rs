//! The four situational point buckets and how each one is counted.
//!
//! | case | qualifying points                                  | won when                     |
//! |------|----------------------------------------------------|------------------------------|
//! | 1    | `case1` flag set                                   | server won the game          |
//! | 2    | `case2` flag set                                   | server won the game          |
//! | 3    | server lost the game and a following game exists   | server's side won next game  |
//! | 4    | every point, weighted by `points_won + points_lost`| weighted by `points_won`     |

use std::str::FromStr;

use super::errors::StatsError;
use crate::database::models::StatRow;
use crate::query::{col, param, Expr, Predicate, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    #[default]
    Case1,
    Case2,
    Case3,
    Case4,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Case1, Case::Case2, Case::Case3, Case::Case4];

    pub fn as_str(self) -> &'static str {
        match self {
            Case::Case1 => "case1",
            Case::Case2 => "case2",
            Case::Case3 => "case3",
            Case::Case4 => "case4",
        }
    }

    pub fn total_column(self) -> &'static str {
        match self {
            Case::Case1 => "total_case1",
            Case::Case2 => "total_case2",
            Case::Case3 => "total_case3",
            Case::Case4 => "total_case4",
        }
    }

    pub fn won_column(self) -> &'static str {
        match self {
            Case::Case1 => "total_case1_won",
            Case::Case2 => "total_case2_won",
            Case::Case3 => "total_case3_won",
            Case::Case4 => "total_case4_won",
        }
    }

    /// Aggregate producing the denominator over `pointstats` rows.
    pub fn total_expr(self) -> Expr {
        match self {
            Case::Case1 => Expr::count_if(flag_set("case1")),
            Case::Case2 => Expr::count_if(flag_set("case2")),
            Case::Case3 => Expr::count_if(server_lost_with_next_game()),
            Case::Case4 => col("points_won").add(col("points_lost")).sum(),
        }
    }

    /// Aggregate producing the numerator; always counts a subset of
    /// [`Case::total_expr`].
    pub fn won_expr(self) -> Expr {
        match self {
            Case::Case1 => Expr::count_if(flag_set("case1").and(server_won_game())),
            Case::Case2 => Expr::count_if(flag_set("case2").and(server_won_game())),
            Case::Case3 => Expr::count_if(
                server_lost_with_next_game().and(col("won_next_game").eq(param(1i64))),
            ),
            Case::Case4 => col("points_won").sum(),
        }
    }

    /// Truncated win rate over the aggregated columns, in hundredths.
    pub fn ratio_expr(self) -> Expr {
        Expr::TruncatedRatio {
            won: self.won_column(),
            total: self.total_column(),
        }
    }

    /// `(won, total)` for this case from an aggregated row.
    pub fn totals(self, row: &StatRow) -> (i64, i64) {
        match self {
            Case::Case1 => (row.total_case1_won, row.total_case1),
            Case::Case2 => (row.total_case2_won, row.total_case2),
            Case::Case3 => (row.total_case3_won, row.total_case3),
            Case::Case4 => (row.total_case4_won, row.total_case4),
        }
    }

    pub fn win_rate(self, row: &StatRow) -> f64 {
        let (won, total) = self.totals(row);
        truncated_win_rate(won, total)
    }
}

impl FromStr for Case {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| StatsError::UnsupportedSortKey(s.to_string()))
    }
}

/// `won / max(total, 1)` truncated to two decimals; 0 when nothing qualified.
pub fn truncated_win_rate(won: i64, total: i64) -> f64 {
    ((won * 100) / total.max(1)) as f64 / 100.0
}

fn flag_set(flag: &'static str) -> Predicate {
    col(flag).eq(param(1i64))
}

fn server_won_game() -> Predicate {
    col("game_service").eq(col("game_winner"))
}

fn server_lost_with_next_game() -> Predicate {
    col("won_next_game")
        .is_not_null()
        .and(col("game_service").not_eq(col("game_winner")))
}

/// Per-player aggregation of point records whose match is in `matches` and
/// whose player is in `players`. Players with nothing qualifying in any case
/// are left out.
pub fn aggregate_point_stats(players: &'static str, matches: &'static str) -> Select {
    let mut select = Select::table("pointstats")
        .column(col("player_id"), None)
        .column(col("player_name"), None);

    for case in Case::ALL {
        select = select
            .column(case.total_expr(), Some(case.total_column()))
            .column(case.won_expr(), Some(case.won_column()));
    }

    let anything_qualified = Predicate::Any(
        Case::ALL
            .into_iter()
            .map(|case| case.total_expr().gt(param(0i64)))
            .collect(),
    );

    select
        .filter(col("match_id").in_select(Select::table(matches).column(col("match_id"), None)))
        .filter(col("player_id").in_select(Select::table(players).column(col("id"), None)))
        .group_by(col("player_id"))
        .group_by(col("player_name"))
        .having(anything_qualified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;

    fn row(totals: [(i64, i64); 4]) -> StatRow {
        StatRow {
            player_id: 1,
            player_name: "Player".to_string(),
            total_case1_won: totals[0].0,
            total_case1: totals[0].1,
            total_case2_won: totals[1].0,
            total_case2: totals[1].1,
            total_case3_won: totals[2].0,
            total_case3: totals[2].1,
            total_case4_won: totals[3].0,
            total_case4: totals[3].1,
        }
    }

    #[test]
    fn test_parse_known_cases() {
        assert_eq!("case1".parse::<Case>().unwrap(), Case::Case1);
        assert_eq!("case4".parse::<Case>().unwrap(), Case::Case4);
        assert!(matches!(
            "Case1".parse::<Case>(),
            Err(StatsError::UnsupportedSortKey(_))
        ));
    }

    #[test]
    fn test_win_rate_truncates() {
        assert_eq!(truncated_win_rate(2, 3), 0.66);
        assert_eq!(truncated_win_rate(1, 8), 0.12);
        assert_eq!(truncated_win_rate(5, 5), 1.0);
    }

    #[test]
    fn test_win_rate_without_qualifying_points_is_zero() {
        assert_eq!(truncated_win_rate(0, 0), 0.0);
    }

    #[test]
    fn test_win_rate_reads_matching_columns() {
        let stats = row([(1, 2), (3, 4), (1, 10), (60, 100)]);

        assert_eq!(Case::Case1.win_rate(&stats), 0.5);
        assert_eq!(Case::Case2.win_rate(&stats), 0.75);
        assert_eq!(Case::Case3.win_rate(&stats), 0.1);
        assert_eq!(Case::Case4.win_rate(&stats), 0.6);
    }

    #[test]
    fn test_case3_counts_games_lost_on_serve() {
        let rendered = Query::new(Select::table("pointstats").column(Case::Case3.won_expr(), None))
            .render();

        assert!(rendered.sql.contains(
            "SUM(CASE WHEN (won_next_game IS NOT NULL AND game_service != game_winner AND won_next_game = ?1) THEN 1 ELSE 0 END)"
        ));
    }

    #[test]
    fn test_aggregation_projects_every_case() {
        let rendered = Query::new(aggregate_point_stats("players", "matches")).render();

        for case in Case::ALL {
            assert!(rendered.sql.contains(&format!("AS {},", case.total_column())));
            assert!(rendered.sql.contains(&format!("AS {}", case.won_column())));
        }
        assert!(rendered.sql.contains("GROUP BY player_id, player_name"));
        assert!(rendered.sql.contains("\nHAVING ("));
        assert!(rendered.sql.contains("match_id IN (SELECT match_id\nFROM matches)"));
        assert!(rendered.sql.contains("player_id IN (SELECT id\nFROM players)"));
    }
}
