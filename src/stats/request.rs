use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

use super::cases::Case;
use super::errors::{StatsError, StatsResult};
use crate::config::settings::StatsSettings;
use crate::query::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourType {
    #[default]
    Atp,
    Wta,
}

impl TourType {
    pub fn as_str(self) -> &'static str {
        match self {
            TourType::Atp => "atp",
            TourType::Wta => "wta",
        }
    }

    pub fn players_table(self) -> &'static str {
        match self {
            TourType::Atp => "player_atp",
            TourType::Wta => "player_wta",
        }
    }

    pub fn games_table(self) -> &'static str {
        match self {
            TourType::Atp => "game_atp",
            TourType::Wta => "game_wta",
        }
    }

    pub fn tournaments_table(self) -> &'static str {
        match self {
            TourType::Atp => "tournament_atp",
            TourType::Wta => "tournament_wta",
        }
    }
}

impl FromStr for TourType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "atp" => Ok(TourType::Atp),
            "wta" => Ok(TourType::Wta),
            _ => Err(StatsError::invalid("type", format!("unknown tour type `{s}`"))),
        }
    }
}

/// Singles players versus doubles pairings; a pairing's name contains a `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Group {
    #[default]
    Singles,
    Doubles,
}

impl FromStr for Group {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singles" => Ok(Group::Singles),
            "doubles" => Ok(Group::Doubles),
            _ => Err(StatsError::invalid("group", format!("unknown group `{s}`"))),
        }
    }
}

/// A band of `width` consecutive player ranks; bucket 1 is ranks `1..=width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingBucket {
    pub number: i64,
    pub width: i64,
}

impl RankingBucket {
    /// Inclusive rank bounds.
    pub fn bounds(&self) -> (i64, i64) {
        let start = (self.number - 1) * self.width + 1;
        let end = self.number * self.width;
        (start, end)
    }
}

/// Half-open date range `[start, end)` covering one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarYear {
    pub year: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarYear {
    pub fn new(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
        Some(Self { year, start, end })
    }
}

/// Request parameters as they arrive, before defaults and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    #[serde(rename = "type")]
    pub tour: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub group: Option<String>,
    pub ranking: Option<i64>,
    pub year: Option<i32>,
    #[serde(rename = "courtid")]
    pub court_id: Option<i64>,
    pub rank: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsRequest {
    pub tour: TourType,
    pub page_number: i64,
    pub page_size: i64,
    pub group: Group,
    pub ranking: Option<RankingBucket>,
    pub year: CalendarYear,
    pub court_id: Option<i64>,
    /// Tournament rank category, not a player ranking.
    pub rank: Option<i64>,
    pub sort_by: Case,
    pub sort_order: SortOrder,
}

impl StatsRequest {
    pub fn from_params(params: StatsParams, settings: &StatsSettings) -> StatsResult<Self> {
        let tour = match params.tour.as_deref() {
            Some(raw) => raw.parse()?,
            None => settings.default_tour,
        };
        let group = match params.group.as_deref() {
            Some(raw) => raw.parse()?,
            None => Group::default(),
        };
        let sort_by = match params.sort_by.as_deref() {
            Some(raw) => raw.parse()?,
            None => Case::default(),
        };
        let sort_order = match params.sort_order.as_deref() {
            Some(raw) => parse_sort_order(raw)?,
            None => SortOrder::default(),
        };

        let page_size = params.page_size.unwrap_or(settings.default_page_size);
        if !(1..=settings.max_page_size).contains(&page_size) {
            return Err(StatsError::invalid(
                "pageSize",
                format!("must be between 1 and {}", settings.max_page_size),
            ));
        }

        let ranking = params
            .ranking
            .map(|number| {
                if number < 1 {
                    return Err(StatsError::invalid("ranking", "bucket must be at least 1"));
                }
                Ok(RankingBucket {
                    number,
                    width: settings.ranking_bucket_width,
                })
            })
            .transpose()?;

        let year_value = params.year.unwrap_or(settings.default_year);
        let year = CalendarYear::new(year_value).ok_or_else(|| {
            StatsError::invalid("year", format!("{year_value} is not a valid calendar year"))
        })?;

        Ok(Self {
            tour,
            page_number: params.page_number.unwrap_or(1),
            page_size,
            group,
            ranking,
            year,
            court_id: params.court_id,
            rank: params.rank,
            sort_by,
            sort_order,
        })
    }

    /// Rows to skip; page numbers below 1 land on the first page.
    pub fn offset(&self) -> i64 {
        self.page_number
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .max(0)
    }
}

fn parse_sort_order(raw: &str) -> StatsResult<SortOrder> {
    match raw.to_ascii_uppercase().as_str() {
        "ASC" => Ok(SortOrder::Asc),
        "DESC" => Ok(SortOrder::Desc),
        _ => Err(StatsError::invalid(
            "sortOrder",
            format!("expected ASC or DESC, got `{raw}`"),
        )),
    }
}
