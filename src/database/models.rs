use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub points: i64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub player_id: i64,
    pub tournament_id: i64,
    pub created_at: Option<NaiveDateTime>,
}

// DTO for the joined best-placement query
#[derive(Debug, Clone)]
pub struct BestMatchRow {
    pub club_name: String,
    pub round_level: i64,
    pub winner_id: Option<i64>,
}
