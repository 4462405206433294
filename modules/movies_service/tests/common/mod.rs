//! Common test utilities: in-memory repository and SQLite catalog fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use movies_service::contract::{FilmRecord, FilmType};
use movies_service::domain::FilmworkRepository;
use movies_service::infra::storage::entity::{
    self, film_work, genre, genre_film_work, person, person_film_work, PersonRole,
};
use movies_service::MoviesServiceModule;
use parking_lot::RwLock;
use sea_orm::{
    prelude::Expr, ActiveValue::Set, ColumnTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use std::sync::Arc;
use uuid::Uuid;

// ===== In-memory repository =====

/// Repository over a vector of records, kept in title order like the real one
#[derive(Clone, Default)]
pub struct MockFilmworkRepo {
    films: Arc<RwLock<Vec<FilmRecord>>>,
    failing: Arc<RwLock<bool>>,
}

impl MockFilmworkRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_films(count: usize) -> Self {
        let repo = Self::new();
        for i in 0..count {
            repo.insert(film(&format!("Film {:03}", i)));
        }
        repo
    }

    pub fn insert(&self, record: FilmRecord) {
        let mut films = self.films.write();
        films.push(record);
        films.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
    }

    /// Make every following call fail like a lost connection
    pub fn fail(&self) {
        *self.failing.write() = true;
    }

    fn check(&self) -> anyhow::Result<()> {
        if *self.failing.read() {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl FilmworkRepository for MockFilmworkRepo {
    async fn count(&self) -> anyhow::Result<u64> {
        self.check()?;
        Ok(self.films.read().len() as u64)
    }

    async fn list_page(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<FilmRecord>> {
        self.check()?;
        Ok(self
            .films
            .read()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<FilmRecord>> {
        self.check()?;
        Ok(self.films.read().iter().find(|f| f.id == id).cloned())
    }
}

/// A movie with one genre and one actor
pub fn film(title: &str) -> FilmRecord {
    FilmRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(format!("About {}", title)),
        creation_date: NaiveDate::from_ymd_opt(1977, 5, 25),
        rating: Some(8.6),
        film_type: Some(FilmType::Movie),
        genres: vec!["Sci-Fi".to_string()],
        actors: vec!["Mark Hamill".to_string()],
        directors: Vec::new(),
        writers: Vec::new(),
    }
}

// ===== SQLite catalog =====

/// Fresh in-memory database with the catalog schema applied
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    MoviesServiceModule::migrate(&db).await.unwrap();
    db
}

pub async fn insert_film(db: &DatabaseConnection, title: &str) -> Uuid {
    insert_film_with(db, title, Some(7.5), entity::FilmType::Movie).await
}

pub async fn insert_film_with(
    db: &DatabaseConnection,
    title: &str,
    rating: Option<f64>,
    film_type: entity::FilmType,
) -> Uuid {
    let id = Uuid::new_v4();
    let rating = rating.map(|r| film_work::validate_rating(r).unwrap());
    film_work::Entity::insert(film_work::ActiveModel {
        id: Set(id),
        title: Set(title.to_string()),
        description: Set(Some(format!("About {}", title))),
        creation_date: Set(NaiveDate::from_ymd_opt(2001, 9, 11)),
        certificate: Set(None),
        file_path: Set(None),
        rating: Set(rating),
        r#type: Set(film_type),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    })
    .exec(db)
    .await
    .unwrap();
    id
}

/// Overwrite `film_work.type` with a value the entity enum would not write
pub async fn set_raw_film_type(db: &DatabaseConnection, film_work_id: Uuid, value: &str) {
    film_work::Entity::update_many()
        .col_expr(film_work::Column::Type, Expr::value(value))
        .filter(film_work::Column::Id.eq(film_work_id))
        .exec(db)
        .await
        .unwrap();
}

pub async fn insert_genre(db: &DatabaseConnection, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    genre::Entity::insert(genre::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(None),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    })
    .exec(db)
    .await
    .unwrap();
    id
}

pub async fn insert_person(db: &DatabaseConnection, full_name: &str) -> Uuid {
    let id = Uuid::new_v4();
    person::Entity::insert(person::ActiveModel {
        id: Set(id),
        full_name: Set(full_name.to_string()),
        gender: Set(None),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
    })
    .exec(db)
    .await
    .unwrap();
    id
}

pub async fn link_genre(db: &DatabaseConnection, film_work_id: Uuid, genre_id: Uuid) {
    genre_film_work::Entity::insert(genre_film_work::ActiveModel {
        id: Set(Uuid::new_v4()),
        film_work_id: Set(film_work_id),
        genre_id: Set(genre_id),
        created_at: Set(Utc::now()),
    })
    .exec(db)
    .await
    .unwrap();
}

pub async fn link_person(
    db: &DatabaseConnection,
    film_work_id: Uuid,
    person_id: Uuid,
    role: Option<PersonRole>,
) {
    person_film_work::Entity::insert(person_film_work::ActiveModel {
        id: Set(Uuid::new_v4()),
        film_work_id: Set(film_work_id),
        person_id: Set(person_id),
        role: Set(role),
        created_at: Set(Utc::now()),
    })
    .exec(db)
    .await
    .unwrap();
}

/// `count` films, each linked to one shared genre and one actor of its own
pub async fn seed_films_with_genre_and_actor(db: &DatabaseConnection, count: usize) {
    let genre_id = insert_genre(db, "Drama").await;
    for i in 0..count {
        let film_id = insert_film(db, &format!("Film {:03}", i)).await;
        link_genre(db, film_id, genre_id).await;
        let actor_id = insert_person(db, &format!("Actor {:03}", i)).await;
        link_person(db, film_id, actor_id, Some(PersonRole::Actor)).await;
    }
}

/// Sorted copy, aggregated lists have no defined order
pub fn sorted(names: &[String]) -> Vec<String> {
    let mut names = names.to_vec();
    names.sort();
    names
}
