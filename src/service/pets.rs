//! Pets and adoptions.

use crate::error::AppError;
use crate::identity::UserIdentity;
use crate::models::{AdoptionRow, Pet, PetView};
use crate::store::count_pets;
use sqlx::SqlitePool;

pub struct PetService;

/// Outcome of a successful adoption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adopted {
    pub pet_id: i64,
    pub pet_name: String,
}

impl PetService {
    /// Pets still available for adoption, in id order.
    pub async fn list_available(pool: &SqlitePool) -> Result<Vec<PetView>, AppError> {
        let pets: Vec<Pet> = sqlx::query_as(
            "SELECT id, name, type, age, description, adopted, image FROM pets WHERE adopted = 0 ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(pets.into_iter().map(PetView::from).collect())
    }

    /// Mark the pet adopted and record who adopted it.
    ///
    /// The flag flips with one conditional UPDATE, so two racing calls for the same pet cannot
    /// both succeed. The adoption row is written in the same transaction.
    pub async fn adopt(
        pool: &SqlitePool,
        pet_id: i64,
        user: &UserIdentity,
    ) -> Result<Adopted, AppError> {
        let mut tx = pool.begin().await?;
        let claimed: Option<String> = sqlx::query_scalar(
            "UPDATE pets SET adopted = 1 WHERE id = ? AND adopted = 0 RETURNING name",
        )
        .bind(pet_id)
        .fetch_optional(&mut *tx)
        .await?;

        let pet_name = match claimed {
            Some(name) => name,
            None => {
                let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM pets WHERE id = ?")
                    .bind(pet_id)
                    .fetch_optional(&mut *tx)
                    .await?;
                return Err(match exists {
                    Some(_) => AppError::Conflict("Pet already adopted".into()),
                    None => AppError::NotFound("Pet not found".into()),
                });
            }
        };

        sqlx::query("INSERT INTO adoptions (user_name, pet_id, pet_name) VALUES (?, ?, ?)")
            .bind(user.name())
            .bind(pet_id)
            .bind(&pet_name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(pet_id, pet = %pet_name, user = %user, "pet adopted");
        Ok(Adopted { pet_id, pet_name })
    }

    /// Adoptions recorded for one user, joined with the pet's current details.
    pub async fn adoptions_for(
        pool: &SqlitePool,
        user: &UserIdentity,
    ) -> Result<Vec<AdoptionRow>, AppError> {
        let rows = sqlx::query_as(
            r#"
            SELECT a.user_name, a.pet_name,
                   p.type AS pet_type, p.age AS pet_age,
                   p.description AS pet_description, p.image AS pet_image
            FROM adoptions a
            LEFT JOIN pets p ON p.id = a.pet_id
            WHERE a.user_name = ?
            ORDER BY a.id
            "#,
        )
        .bind(user.name())
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Clear adoption history and make every pet available. Returns the number of pets reset.
    pub async fn reset(pool: &SqlitePool) -> Result<i64, AppError> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM adoptions").execute(&mut *tx).await?;
        sqlx::query("UPDATE pets SET adopted = 0").execute(&mut *tx).await?;
        let count = count_pets(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!(pets = count, "adoptions reset");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AssertedName, IdentityProvider};
    use crate::seed::seed_if_empty;
    use crate::store::{connect_in_memory, ensure_tables};

    async fn seeded() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        seed_if_empty(&pool).await.unwrap();
        pool
    }

    async fn user(name: &str) -> UserIdentity {
        AssertedName.identify(Some(name)).await.unwrap()
    }

    #[tokio::test]
    async fn adopt_hides_pet_from_listing() {
        let pool = seeded().await;
        let asha = user("asha").await;
        let adopted = PetService::adopt(&pool, 1, &asha).await.unwrap();
        assert_eq!(adopted.pet_name, "Bruno");

        let available = PetService::list_available(&pool).await.unwrap();
        assert_eq!(available.len(), 6);
        assert!(available.iter().all(|p| p.id != 1));
    }

    #[tokio::test]
    async fn second_adopt_conflicts_and_keeps_one_record() {
        let pool = seeded().await;
        let asha = user("asha").await;
        let ravi = user("ravi").await;
        PetService::adopt(&pool, 3, &asha).await.unwrap();
        let err = PetService::adopt(&pool, 3, &ravi).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref m) if m == "Pet already adopted"));

        let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM adoptions WHERE pet_id = 3")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(records, 1);
    }

    #[tokio::test]
    async fn adopt_unknown_pet_is_not_found() {
        let pool = seeded().await;
        let err = PetService::adopt(&pool, 9999, &user("asha").await)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn adoption_keeps_name_snapshot() {
        let pool = seeded().await;
        let asha = user("asha").await;
        PetService::adopt(&pool, 2, &asha).await.unwrap();
        sqlx::query("UPDATE pets SET name = 'Renamed' WHERE id = 2")
            .execute(&pool)
            .await
            .unwrap();

        let rows = PetService::adoptions_for(&pool, &asha).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pet_name, "Chintu");
        assert_eq!(rows[0].pet_type.as_deref(), Some("Cat"));
    }

    #[tokio::test]
    async fn adoptions_for_orphaned_pet_have_no_pet_columns() {
        let pool = seeded().await;
        let asha = user("asha").await;
        PetService::adopt(&pool, 5, &asha).await.unwrap();
        sqlx::query("DELETE FROM pets WHERE id = 5")
            .execute(&pool)
            .await
            .unwrap();

        let rows = PetService::adoptions_for(&pool, &asha).await.unwrap();
        assert_eq!(rows[0].pet_name, "Tommy");
        assert!(rows[0].pet_type.is_none());
        assert!(rows[0].pet_age.is_none());
    }

    #[tokio::test]
    async fn adoptions_are_scoped_to_user() {
        let pool = seeded().await;
        PetService::adopt(&pool, 1, &user("asha").await).await.unwrap();
        PetService::adopt(&pool, 2, &user("ravi").await).await.unwrap();
        let rows = PetService::adoptions_for(&pool, &user("ravi").await)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pet_name, "Chintu");
    }

    #[tokio::test]
    async fn reset_restores_every_pet() {
        let pool = seeded().await;
        let asha = user("asha").await;
        for id in [1, 4, 6] {
            PetService::adopt(&pool, id, &asha).await.unwrap();
        }
        assert_eq!(PetService::reset(&pool).await.unwrap(), 7);
        assert_eq!(PetService::list_available(&pool).await.unwrap().len(), 7);
        assert!(PetService::adoptions_for(&pool, &asha).await.unwrap().is_empty());
    }
}
