//! `SQLite` implementation of [`SecurityRepository`].

use std::collections::BTreeSet;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use catpoint_app::ports::SecurityRepository;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Sensor`].
struct Wrapper(Sensor);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let name: String = row.try_get("name")?;
        let sensor_type: String = row.try_get("sensor_type")?;
        let active: bool = row.try_get("active")?;

        let sensor_type = sensor_type
            .parse::<SensorType>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Sensor {
            name,
            sensor_type,
            active,
        }))
    }
}

const SELECT_ARMING: &str = "SELECT arming_status FROM security_state WHERE id = 1";
const SELECT_ALARM: &str = "SELECT alarm_status FROM security_state WHERE id = 1";
const UPDATE_ARMING: &str = "UPDATE security_state SET arming_status = ? WHERE id = 1";
const UPDATE_ALARM: &str = "UPDATE security_state SET alarm_status = ? WHERE id = 1";
const SELECT_SENSORS: &str =
    "SELECT name, sensor_type, active FROM sensors ORDER BY name, sensor_type";
const INSERT_SENSOR: &str =
    "INSERT OR IGNORE INTO sensors (name, sensor_type, active) VALUES (?, ?, ?)";
const UPDATE_SENSOR: &str = "UPDATE sensors SET active = ? WHERE name = ? AND sensor_type = ?";
const DELETE_SENSOR: &str = "DELETE FROM sensors WHERE name = ? AND sensor_type = ?";

/// `SQLite`-backed security state repository.
pub struct SqliteSecurityRepository {
    pool: SqlitePool,
}

impl SqliteSecurityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SecurityRepository for SqliteSecurityRepository {
    fn get_arming_status(
        &self,
    ) -> impl Future<Output = Result<ArmingStatus, CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (text,): (String,) = sqlx::query_as(SELECT_ARMING)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let status = text.parse::<ArmingStatus>().map_err(StorageError::from)?;
            Ok(status)
        }
    }

    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE_ARMING)
                .bind(status.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (text,): (String,) = sqlx::query_as(SELECT_ALARM)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let status = text.parse::<AlarmStatus>().map_err(StorageError::from)?;
            Ok(status)
        }
    }

    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE_ALARM)
                .bind(status.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn get_sensors(&self) -> impl Future<Output = Result<BTreeSet<Sensor>, CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_SENSORS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT_SENSOR)
                .bind(&sensor.name)
                .bind(sensor.sensor_type.as_str())
                .bind(sensor.active)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn update_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE_SENSOR)
                .bind(sensor.active)
                .bind(&sensor.name)
                .bind(sensor.sensor_type.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn remove_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_SENSOR)
                .bind(&sensor.name)
                .bind(sensor.sensor_type.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
