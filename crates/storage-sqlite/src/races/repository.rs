use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use racedb_core::races::{
    EventId, RaceDetails, RaceId, RaceRepositoryTrait, StoredRace, StoredRegistrationPeriod,
};
use racedb_core::Result;

use super::model::{EventDB, NewRegistrationPeriodDB, RaceDB, RegistrationPeriodDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{events, races, registration_periods};

pub struct RaceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RaceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RaceRepository { pool, writer }
    }
}

/// Writes one race aggregate. Runs inside the writer's transaction, so any
/// error here discards every row written by this call.
fn save_race_in_transaction(conn: &mut SqliteConnection, details: &RaceDetails) -> Result<()> {
    let now = Utc::now().naive_utc();

    let race_db = RaceDB::from_details(details, now);
    diesel::insert_into(races::table)
        .values(&race_db)
        .on_conflict(races::id)
        .do_update()
        .set(&race_db)
        .execute(conn)
        .into_core()?;

    let mut period_count = 0;
    for event in &details.events {
        let event_db = EventDB::from_details(details.id, event, now);
        diesel::insert_into(events::table)
            .values(&event_db)
            .on_conflict(events::event_id)
            .do_update()
            .set(&event_db)
            .execute(conn)
            .into_core()?;

        for period in &event.registration_periods {
            let period_db = NewRegistrationPeriodDB::from_period(event.event_id, period);
            period_count += diesel::insert_into(registration_periods::table)
                .values(&period_db)
                .execute(conn)
                .into_core()?;
        }
    }

    debug!(
        "Saved race {} with {} events and {} registration periods",
        details.id,
        details.events.len(),
        period_count
    );
    Ok(())
}

#[async_trait]
impl RaceRepositoryTrait for RaceRepository {
    async fn save_race(&self, details: &RaceDetails) -> Result<()> {
        let details = details.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                save_race_in_transaction(conn, &details)
            })
            .await
    }

    fn get_race(&self, race_id: RaceId) -> Result<Option<StoredRace>> {
        let mut conn = get_connection(&self.pool)?;

        let race_db = races::table
            .find(race_id)
            .select(RaceDB::as_select())
            .first::<RaceDB>(&mut conn)
            .optional()
            .into_core()?;

        let Some(race_db) = race_db else {
            return Ok(None);
        };

        let events_db = EventDB::belonging_to(&race_db)
            .select(EventDB::as_select())
            .order(events::event_id.asc())
            .load::<EventDB>(&mut conn)
            .into_core()?;

        Ok(Some(race_db.into_stored(events_db)))
    }

    fn get_registration_periods(&self, event_id: EventId) -> Result<Vec<StoredRegistrationPeriod>> {
        let mut conn = get_connection(&self.pool)?;

        let periods_db = registration_periods::table
            .filter(registration_periods::event_id.eq(event_id))
            .select(RegistrationPeriodDB::as_select())
            .order(registration_periods::id.asc())
            .load::<RegistrationPeriodDB>(&mut conn)
            .into_core()?;

        Ok(periods_db
            .into_iter()
            .map(StoredRegistrationPeriod::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use chrono::NaiveDateTime;
    use diesel::connection::SimpleConnection;
    use racedb_core::errors::{DatabaseError, Error};
    use racedb_core::races::{EventDetails, RegistrationPeriod};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    async fn create_test_repository() -> (RaceRepository, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let repo = RaceRepository::new(Arc::clone(&pool), writer);
        (repo, pool, temp_dir)
    }

    fn count_rows(pool: &DbPool) -> (i64, i64, i64) {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        let races_count = races::table.count().get_result(&mut conn).unwrap();
        let events_count = events::table.count().get_result(&mut conn).unwrap();
        let periods_count = registration_periods::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        (races_count, events_count, periods_count)
    }

    fn without_timestamps(mut race: StoredRace) -> StoredRace {
        race.updated_at = NaiveDateTime::default();
        for event in &mut race.events {
            event.updated_at = NaiveDateTime::default();
        }
        race
    }

    fn sample_race() -> RaceDetails {
        RaceDetails {
            id: 12345,
            name: "Test Race".to_string(),
            url: "https://example.com".to_string(),
            external_url: "https://external-example.com".to_string(),
            logo_url: "https://example.com/logo.png".to_string(),
            timezone: "America/New_York".to_string(),
            events: vec![
                EventDetails {
                    event_id: 2,
                    name: "10K".to_string(),
                    start_time: "2025-05-01 08:00".to_string(),
                    end_time: "not a time".to_string(),
                    event_type: "running_race".to_string(),
                    distance: "10K".to_string(),
                    registration_opens: String::new(),
                    category: "Runs".to_string(),
                    registration_periods: vec![],
                },
                EventDetails {
                    event_id: 1,
                    name: "5K".to_string(),
                    start_time: "2025-05-01T09:00:00Z".to_string(),
                    end_time: "2025-05-01T11:00:00Z".to_string(),
                    event_type: "running_race".to_string(),
                    distance: "5K".to_string(),
                    registration_opens: "2025-01-01T00:00:00Z".to_string(),
                    category: "Runs".to_string(),
                    registration_periods: vec![
                        RegistrationPeriod {
                            opens: "2025-01-01T00:00:00Z".to_string(),
                            closes: "2025-03-31T23:59:59Z".to_string(),
                            fee: "$30.00".to_string(),
                            processing_fee: "$2.50".to_string(),
                        },
                        RegistrationPeriod {
                            opens: "2025-04-01T00:00:00Z".to_string(),
                            closes: String::new(),
                            fee: "$35.00".to_string(),
                            processing_fee: "free".to_string(),
                        },
                    ],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_save_and_load_race() {
        let (repo, _pool, _dir) = create_test_repository().await;

        repo.save_race(&sample_race()).await.unwrap();

        let stored = repo.get_race(12345).unwrap().expect("race saved");
        assert_eq!(stored.name, "Test Race");
        assert_eq!(stored.timezone, "America/New_York");
        let event_ids: Vec<i64> = stored.events.iter().map(|e| e.event_id).collect();
        assert_eq!(event_ids, vec![1, 2]);

        let ten_k = &stored.events[1];
        assert!(ten_k.start_time.is_some());
        assert_eq!(ten_k.end_time, None);
        assert_eq!(ten_k.registration_opens, None);

        let periods = repo.get_registration_periods(1).unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].race_fee, dec!(30.00));
        assert_eq!(periods[0].processing_fee, dec!(2.50));
        assert_eq!(periods[1].processing_fee, dec!(0));
        assert_eq!(periods[1].closes_at, None);
    }

    #[tokio::test]
    async fn test_get_missing_race_is_none() {
        let (repo, _pool, _dir) = create_test_repository().await;
        assert!(repo.get_race(999).unwrap().is_none());
        assert!(repo.get_registration_periods(999).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_twice_upserts_races_and_appends_periods() {
        let (repo, pool, _dir) = create_test_repository().await;
        let race = sample_race();

        repo.save_race(&race).await.unwrap();
        let first = repo.get_race(race.id).unwrap().unwrap();
        repo.save_race(&race).await.unwrap();
        let second = repo.get_race(race.id).unwrap().unwrap();

        assert_eq!(count_rows(&pool), (1, 2, 4));
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(without_timestamps(first), without_timestamps(second));

        let periods = repo.get_registration_periods(1).unwrap();
        assert_eq!(periods.len(), 4);
        assert_eq!(
            (periods[0].opens_at, periods[0].race_fee),
            (periods[2].opens_at, periods[2].race_fee)
        );
        assert_eq!(
            (periods[1].closes_at, periods[1].processing_fee),
            (periods[3].closes_at, periods[3].processing_fee)
        );
    }

    #[tokio::test]
    async fn test_save_overwrites_mutable_fields() {
        let (repo, _pool, _dir) = create_test_repository().await;
        let mut race = sample_race();
        repo.save_race(&race).await.unwrap();

        race.name = "Renamed Race".to_string();
        race.events[0].start_time = String::new();
        repo.save_race(&race).await.unwrap();

        let stored = repo.get_race(race.id).unwrap().unwrap();
        assert_eq!(stored.name, "Renamed Race");
        let ten_k = stored.events.iter().find(|e| e.event_id == 2).unwrap();
        assert_eq!(ten_k.start_time, None);
    }

    #[tokio::test]
    async fn test_failed_period_insert_rolls_back_everything() {
        let (repo, pool, _dir) = create_test_repository().await;
        {
            let mut conn = get_connection(&pool).unwrap();
            conn.batch_execute(
                "CREATE TRIGGER reject_periods BEFORE INSERT ON registration_periods
                 BEGIN SELECT RAISE(ABORT, 'period insert rejected'); END;",
            )
            .unwrap();
        }

        let err = repo.save_race(&sample_race()).await.unwrap_err();

        assert!(matches!(err, Error::Database(_)));
        assert_eq!(count_rows(&pool), (0, 0, 0));
        assert!(repo.get_race(12345).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_version() {
        let (repo, pool, _dir) = create_test_repository().await;
        let mut race = sample_race();
        repo.save_race(&race).await.unwrap();

        {
            let mut conn = get_connection(&pool).unwrap();
            conn.batch_execute(
                "CREATE TRIGGER reject_periods BEFORE INSERT ON registration_periods
                 BEGIN SELECT RAISE(ABORT, 'period insert rejected'); END;",
            )
            .unwrap();
        }

        race.name = "Should Not Persist".to_string();
        assert!(repo.save_race(&race).await.is_err());

        let stored = repo.get_race(race.id).unwrap().unwrap();
        assert_eq!(stored.name, "Test Race");
        assert_eq!(count_rows(&pool), (1, 2, 2));
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let (_repo, pool, _dir) = create_test_repository().await;
        let mut conn = get_connection(&pool).unwrap();

        let err = diesel::sql_query(
            "INSERT INTO events (event_id, race_id, name, event_type, distance, category, updated_at)
             VALUES (1, 42, 'orphan', '', '', 'Other', CURRENT_TIMESTAMP)",
        )
        .execute(&mut conn)
        .into_core()
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::ForeignKeyViolation(_))
        ));
    }
}
