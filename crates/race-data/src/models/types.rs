/// Provider-assigned race identifier
pub type RaceId = i64;

/// Provider-assigned event identifier, unique across races
pub type EventId = i64;
