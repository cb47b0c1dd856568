pub mod ad_hoc;
pub mod catalog;
pub mod games;
pub mod player_stats;
pub mod schema;
pub mod standings;
pub mod team_stats;
