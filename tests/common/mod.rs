#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use pbp_stats::config::settings::StatsSettings;
use pbp_stats::database::{
    self, games, players, pointstats, setup, tournaments, DbConn, DbPool, Game, MatchInfo, Player,
    PointStat, Tournament,
};
use pbp_stats::stats::{StatsParams, StatsService, TourType};

pub fn seeded_pool() -> DbPool {
    let pool = database::create_memory_pool().unwrap();
    let mut conn = database::get_connection(&pool).unwrap();
    setup::init_schema(&mut conn).unwrap();
    seed(&mut conn);
    pool
}

pub fn service() -> StatsService<DbPool> {
    StatsService::new(seeded_pool(), StatsSettings::default())
}

pub fn params(pairs: &[(&str, &str)]) -> StatsParams {
    let map: serde_json::Map<String, serde_json::Value> = pairs
        .iter()
        .map(|(key, value)| {
            let value = match value.parse::<i64>() {
                Ok(number) => serde_json::Value::from(number),
                Err(_) => serde_json::Value::from(*value),
            };
            (key.to_string(), value)
        })
        .collect();
    serde_json::from_value(serde_json::Value::Object(map)).unwrap()
}

pub fn at_midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn on(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
}

fn player(id: i64, name: &str, current_rank: Option<i64>) -> Player {
    Player {
        id,
        name: name.to_string(),
        current_rank,
    }
}

fn tournament(id: i64, court_id: i64, rank_id: i64) -> Tournament {
    Tournament {
        id,
        court_id: Some(court_id),
        rank_id: Some(rank_id),
    }
}

/// A game plus its match_info record. `info_round` differing from `round`
/// produces an inconsistent pair that must never link.
fn game(
    conn: &mut DbConn,
    tour: TourType,
    match_id: i64,
    (tournament_id, round_id): (i64, i64),
    date: Option<NaiveDateTime>,
    (player1_id, player2_id): (i64, i64),
    info_round: i64,
) {
    games::insert_game(
        conn,
        tour,
        &Game {
            id: match_id,
            tournament_id,
            round_id,
            date,
            player1_id,
            player2_id,
        },
    )
    .unwrap();
    games::insert_match_info(
        conn,
        &MatchInfo {
            match_id,
            tournament_type: tour,
            player_id1: player1_id,
            player_id2: player2_id,
            tournament_id,
            round_id: info_round,
        },
    )
    .unwrap();
}

#[allow(clippy::too_many_arguments)]
fn point(
    conn: &mut DbConn,
    match_id: i64,
    (player_id, player_name): (i64, &str),
    (case1, case2): (bool, bool),
    (game_service, game_winner): (i64, i64),
    won_next_game: Option<bool>,
    (points_won, points_lost): (i64, i64),
) {
    pointstats::insert_point_stat(
        conn,
        &PointStat {
            match_id,
            player_id,
            player_name: player_name.to_string(),
            case1,
            case2,
            game_service,
            game_winner,
            won_next_game,
            points_won,
            points_lost,
        },
    )
    .unwrap();
}

pub const ALPHA: (i64, &str) = (1, "Alpha One");
pub const BRAVO: (i64, &str) = (2, "Bravo Two");
pub const CHARLIE: (i64, &str) = (3, "Charlie Three");
pub const DELTA: (i64, &str) = (4, "Delta Four");
pub const ECHO: (i64, &str) = (5, "Echo Five");
pub const PAIR_AC: (i64, &str) = (10, "Alpha One/Charlie Three");
pub const PAIR_FG: (i64, &str) = (11, "Foxtrot Six/Golf Seven");
pub const HOTEL: (i64, &str) = (21, "Hotel Eight");
pub const INDIA: (i64, &str) = (22, "India Nine");
pub const KILO: (i64, &str) = (6, "Kilo Ten");
pub const JULIET: (i64, &str) = (7, "Juliet Eleven");

/// Adds Juliet and Kilo, who tie Bravo on both case1 ratio and total (1/1).
/// Their 2021 match starts the year at midnight. A second match at midnight
/// on 2022-01-01, where Kilo loses a case1 point, belongs to the next year.
pub fn seed_full_tie(conn: &mut DbConn) {
    let atp = TourType::Atp;
    for p in [player(KILO.0, KILO.1, Some(60)), player(JULIET.0, JULIET.1, Some(70))] {
        players::insert_player(conn, atp, &p).unwrap();
    }

    game(conn, atp, 1009, (100, 7), at_midnight(2021, 1, 1), (7, 6), 7);
    point(conn, 1009, JULIET, (true, false), (1, 1), None, (4, 0));
    point(conn, 1009, KILO, (true, false), (2, 2), None, (4, 0));

    game(conn, atp, 1010, (100, 8), at_midnight(2022, 1, 1), (6, 7), 8);
    point(conn, 1010, KILO, (true, false), (1, 2), None, (0, 4));
}

/// ATP 2021 singles expectations (no court/rank filter):
///
/// | player  | case1 | case2 | case3 | case4  |
/// |---------|-------|-------|-------|--------|
/// | Alpha   | 1/2   | 1/2   | 1/2   | 11/20  |
/// | Bravo   | 1/1   | 0/1   | 0/1   | 5/11   |
/// | Charlie | 2/2   | 1/1   | 1/1   | 12/22  |
///
/// Delta only has points that qualify for nothing; Echo only played in 2020.
fn seed(conn: &mut DbConn) {
    let atp = TourType::Atp;
    let wta = TourType::Wta;

    for p in [
        player(ALPHA.0, ALPHA.1, Some(5)),
        player(BRAVO.0, BRAVO.1, Some(150)),
        player(CHARLIE.0, CHARLIE.1, Some(50)),
        player(DELTA.0, DELTA.1, Some(120)),
        player(ECHO.0, ECHO.1, Some(30)),
        player(PAIR_AC.0, PAIR_AC.1, None),
        player(PAIR_FG.0, PAIR_FG.1, None),
    ] {
        players::insert_player(conn, atp, &p).unwrap();
    }
    for p in [
        player(HOTEL.0, HOTEL.1, Some(1)),
        player(INDIA.0, INDIA.1, Some(2)),
    ] {
        players::insert_player(conn, wta, &p).unwrap();
    }

    for t in [tournament(100, 1, 1), tournament(200, 2, 1), tournament(300, 1, 2)] {
        tournaments::insert_tournament(conn, atp, &t).unwrap();
    }
    tournaments::insert_tournament(conn, wta, &tournament(100, 1, 1)).unwrap();

    game(conn, atp, 1001, (100, 1), on(2021, 3, 1), (1, 2), 1);
    game(conn, atp, 1002, (200, 2), on(2021, 6, 15), (3, 4), 2);
    game(conn, atp, 1003, (300, 1), on(2021, 9, 9), (1, 3), 1);
    game(conn, atp, 1004, (100, 3), on(2020, 5, 5), (5, 1), 3);
    game(conn, atp, 1005, (100, 4), on(2021, 4, 4), (10, 11), 4);
    game(conn, atp, 1006, (200, 5), None, (1, 2), 5);
    game(conn, atp, 1007, (100, 6), on(2021, 7, 7), (2, 3), 99);
    game(conn, wta, 2001, (100, 1), on(2021, 2, 2), (21, 22), 1);
    // Same tuple as match 1001 but recorded for the other tour.
    games::insert_match_info(
        conn,
        &MatchInfo {
            match_id: 1008,
            tournament_type: wta,
            player_id1: 1,
            player_id2: 2,
            tournament_id: 100,
            round_id: 1,
        },
    )
    .unwrap();

    // 1001: Alpha vs Bravo
    point(conn, 1001, ALPHA, (true, false), (1, 1), None, (3, 1));
    point(conn, 1001, ALPHA, (true, false), (1, 2), Some(true), (2, 4));
    point(conn, 1001, ALPHA, (false, true), (1, 1), None, (4, 0));
    point(conn, 1001, BRAVO, (true, false), (2, 2), None, (4, 2));
    point(conn, 1001, BRAVO, (false, true), (2, 1), Some(false), (1, 4));

    // 1003: Alpha vs Charlie
    point(conn, 1003, ALPHA, (false, true), (1, 2), Some(false), (2, 4));
    point(conn, 1003, CHARLIE, (true, false), (2, 2), None, (4, 1));
    point(conn, 1003, CHARLIE, (true, false), (2, 2), None, (4, 3));
    point(conn, 1003, CHARLIE, (false, false), (2, 1), Some(true), (0, 4));

    // 1002: Charlie vs Delta
    point(conn, 1002, CHARLIE, (false, true), (1, 1), None, (4, 2));
    point(conn, 1002, DELTA, (false, false), (1, 1), None, (0, 0));
    point(conn, 1002, DELTA, (false, false), (2, 2), None, (0, 0));

    // 1004: 2020 only
    point(conn, 1004, ECHO, (true, false), (1, 1), None, (4, 0));
    point(conn, 1004, ALPHA, (true, false), (2, 2), None, (4, 0));

    // 1005: doubles
    point(conn, 1005, PAIR_AC, (true, false), (1, 1), None, (4, 1));
    point(conn, 1005, PAIR_AC, (false, true), (1, 2), Some(true), (2, 4));
    point(conn, 1005, PAIR_FG, (true, false), (1, 2), Some(false), (1, 4));

    // Must never count: undated, inconsistent match_info, other tour's record
    point(conn, 1006, ALPHA, (true, false), (1, 1), None, (4, 0));
    point(conn, 1007, BRAVO, (true, false), (1, 1), None, (4, 0));
    point(conn, 1008, ALPHA, (true, false), (1, 1), None, (4, 0));

    // 2001: WTA
    point(conn, 2001, HOTEL, (true, false), (1, 1), None, (4, 2));
}
