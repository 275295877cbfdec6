//! Sample pets inserted into an empty store, and the destructive re-initialization behind `/api/init`.

use crate::error::AppError;
use crate::store::count_pets;
use sqlx::{SqliteConnection, SqlitePool};

pub struct SeedPet {
    pub name: &'static str,
    pub kind: &'static str,
    pub age: i64,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SEED_PETS: [SeedPet; 7] = [
    SeedPet {
        name: "Bruno",
        kind: "Dog",
        age: 3,
        description: "Friendly and loyal golden retriever who loves playing fetch",
        image: "bruno.webp",
    },
    SeedPet {
        name: "Chintu",
        kind: "Cat",
        age: 2,
        description: "Playful and curious tabby cat who enjoys cuddles and chasing toys",
        image: "chintu.webp",
    },
    SeedPet {
        name: "Coco",
        kind: "Bird",
        age: 1,
        description: "Talkative and cheerful parrot that loves to sing and mimic sounds",
        image: "coco.webp",
    },
    SeedPet {
        name: "Rocky",
        kind: "Rabbit",
        age: 1,
        description: "Gentle rabbit who loves carrots and hopping around in the garden",
        image: "rocky.webp",
    },
    SeedPet {
        name: "Tommy",
        kind: "Dog",
        age: 4,
        description: "Energetic and loving labrador, great with children and other pets",
        image: "tommy.webp",
    },
    SeedPet {
        name: "Milo",
        kind: "Cat",
        age: 3,
        description: "Independent and sweet siamese cat who enjoys quiet evenings",
        image: "milo.webp",
    },
    SeedPet {
        name: "Soni",
        kind: "Rabbit",
        age: 2,
        description: "Soft and cuddly dwarf rabbit, perfect for first-time pet owners",
        image: "soni.webp",
    },
];

/// Insert every seed pet, whether or not pets already exist.
pub async fn insert_seed_pets(conn: &mut SqliteConnection) -> Result<u64, AppError> {
    let mut count = 0u64;
    for pet in &SEED_PETS {
        sqlx::query(
            "INSERT INTO pets (name, type, age, description, adopted, image) VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(pet.name)
        .bind(pet.kind)
        .bind(pet.age)
        .bind(pet.description)
        .bind(pet.image)
        .execute(&mut *conn)
        .await?;
        count += 1;
    }
    Ok(count)
}

/// Seed only when the pets table is empty. Returns the number of pets inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    if count_pets(&mut *tx).await? > 0 {
        return Ok(0);
    }
    let inserted = insert_seed_pets(&mut tx).await?;
    tx.commit().await?;
    tracing::info!(pets = inserted, "seeded sample pets");
    Ok(inserted)
}

/// Drop all pets and adoptions, then reseed. One transaction; returns the new pet count.
pub async fn reinitialize(pool: &SqlitePool) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM adoptions").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM pets").execute(&mut *tx).await?;
    insert_seed_pets(&mut tx).await?;
    let count = count_pets(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!(pets = count, "store re-initialized");
    Ok(count)
}
