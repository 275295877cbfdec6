//! Lost and found reports. Append-only; `report_type` and `date` are stored as sent.

use crate::error::AppError;
use crate::models::{LostFoundReport, NewLostFoundReport};
use chrono::Utc;
use sqlx::SqlitePool;

pub struct LostFoundService;

impl LostFoundService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<LostFoundReport>, AppError> {
        let reports = sqlx::query_as(
            r#"
            SELECT id, user_name, report_type, pet_name, pet_type, breed, color,
                   location, date, contact_phone, description, created_at
            FROM lost_found_reports
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(reports)
    }

    pub async fn create(pool: &SqlitePool, report: &NewLostFoundReport) -> Result<i64, AppError> {
        let id = sqlx::query(
            r#"
            INSERT INTO lost_found_reports
                (user_name, report_type, pet_name, pet_type, breed, color,
                 location, date, contact_phone, description, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&report.user_name)
        .bind(&report.report_type)
        .bind(&report.pet_name)
        .bind(&report.pet_type)
        .bind(&report.breed)
        .bind(&report.color)
        .bind(&report.location)
        .bind(&report.date)
        .bind(&report.contact_phone)
        .bind(&report.description)
        .bind(Utc::now().naive_utc())
        .execute(pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_tables};

    #[tokio::test]
    async fn report_round_trips_free_text_fields() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let report = NewLostFoundReport {
            user_name: Some("ravi".into()),
            report_type: Some("lost".into()),
            pet_name: Some("Kiwi".into()),
            pet_type: Some("Bird".into()),
            breed: None,
            color: Some("green".into()),
            location: Some("Park Street".into()),
            date: Some("last tuesday".into()),
            contact_phone: Some("555-0100".into()),
            description: Some("answers to whistles".into()),
        };
        let id = LostFoundService::create(&pool, &report).await.unwrap();

        let reports = LostFoundService::list(&pool).await.unwrap();
        assert_eq!(reports.len(), 1);
        let stored = &reports[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.date.as_deref(), Some("last tuesday"));
        assert_eq!(stored.report_type.as_deref(), Some("lost"));
        assert!(stored.breed.is_none());
    }

    #[tokio::test]
    async fn later_report_lists_first() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        for kind in ["lost", "found"] {
            let report = NewLostFoundReport {
                report_type: Some(kind.into()),
                ..Default::default()
            };
            LostFoundService::create(&pool, &report).await.unwrap();
        }
        let reports = LostFoundService::list(&pool).await.unwrap();
        assert_eq!(reports[0].report_type.as_deref(), Some("found"));
        assert_eq!(reports[1].report_type.as_deref(), Some("lost"));
    }
}
