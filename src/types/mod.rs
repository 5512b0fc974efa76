//! Type-safe domain types shared by the query layer, the HTTP boundary and the client.

pub mod entities;
pub mod filters;
pub mod ids;


pub use entities::*;
pub use filters::{
    LeagueFilter, Page, PerformanceFilter, PlayerFilter, QueryPairs, TeamFilter,
    TeamPlayerFilter,
};
pub use ids::{LeagueId, PerformanceId, PlayerId, TeamId};
