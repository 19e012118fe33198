//! SQLite storage implementation for races.

mod model;
mod repository;

pub use model::{
    parse_fee, parse_timestamp, EventDB, NewRegistrationPeriodDB, RaceDB, RegistrationPeriodDB,
};
pub use repository::RaceRepository;
