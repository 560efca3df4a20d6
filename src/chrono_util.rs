use chrono::{Datelike, FixedOffset, NaiveDateTime, Utc};

pub fn jst_now() -> NaiveDateTime {
    Utc::now()
        .with_timezone(&FixedOffset::east_opt(9 * 60 * 60).unwrap())
        .naive_local()
}

/// The season year the games are currently being played in.
pub fn current_season_year() -> i32 {
    jst_now().year()
}
