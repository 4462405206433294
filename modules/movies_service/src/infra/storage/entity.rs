//! SeaORM entities for the catalog tables
//!
//! Three content tables (`film_work`, `genre`, `person`) and two
//! association tables linking film works to genres and people.

use sea_orm::entity::prelude::*;

/// Kind of film work as stored in `film_work.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FilmType {
    #[sea_orm(string_value = "movie")]
    Movie,
    #[sea_orm(string_value = "tv_show")]
    TvShow,
}

/// Role of a person as stored in `person_film_work.role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PersonRole {
    #[sea_orm(string_value = "actor")]
    Actor,
    #[sea_orm(string_value = "director")]
    Director,
    #[sea_orm(string_value = "writer")]
    Writer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
}

/// Film work table
pub mod film_work {
    use super::FilmType;
    use sea_orm::entity::prelude::*;

    /// Lowest accepted rating
    pub const MIN_RATING: f64 = 0.0;
    /// Highest accepted rating
    pub const MAX_RATING: f64 = 100.0;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "film_work")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub title: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub description: Option<String>,

        pub creation_date: Option<Date>,

        pub certificate: Option<String>,

        /// Path of the uploaded media file, relative to the media root
        pub file_path: Option<String>,

        /// Rating in `MIN_RATING..=MAX_RATING`
        pub rating: Option<f64>,

        pub r#type: FilmType,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::genre_film_work::Entity")]
        GenreFilmWork,
        #[sea_orm(has_many = "super::person_film_work::Entity")]
        PersonFilmWork,
    }

    impl Related<super::genre_film_work::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::GenreFilmWork.def()
        }
    }

    impl Related<super::person_film_work::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::PersonFilmWork.def()
        }
    }

    impl Related<super::genre::Entity> for Entity {
        fn to() -> RelationDef {
            super::genre_film_work::Relation::Genre.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::genre_film_work::Relation::FilmWork.def().rev())
        }
    }

    impl Related<super::person::Entity> for Entity {
        fn to() -> RelationDef {
            super::person_film_work::Relation::Person.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::person_film_work::Relation::FilmWork.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    /// Check a rating against the accepted bounds before it is written
    pub fn validate_rating(rating: f64) -> Result<f64, DbErr> {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            Ok(rating)
        } else {
            Err(DbErr::Custom(format!(
                "rating {} is outside {}..={}",
                rating, MIN_RATING, MAX_RATING
            )))
        }
    }
}

/// Genre table
pub mod genre {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "genre")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub description: Option<String>,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::genre_film_work::Entity")]
        GenreFilmWork,
    }

    impl Related<super::genre_film_work::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::GenreFilmWork.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Person table
pub mod person {
    use super::Gender;
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "person")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub full_name: String,
        pub gender: Option<Gender>,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::person_film_work::Entity")]
        PersonFilmWork,
    }

    impl Related<super::person_film_work::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::PersonFilmWork.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Film work <-> genre association. Duplicate pairs are allowed.
pub mod genre_film_work {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "genre_film_work")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub film_work_id: Uuid,
        pub genre_id: Uuid,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::film_work::Entity",
            from = "Column::FilmWorkId",
            to = "super::film_work::Column::Id",
            on_delete = "Cascade"
        )]
        FilmWork,
        #[sea_orm(
            belongs_to = "super::genre::Entity",
            from = "Column::GenreId",
            to = "super::genre::Column::Id",
            on_delete = "Cascade"
        )]
        Genre,
    }

    impl Related<super::film_work::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::FilmWork.def()
        }
    }

    impl Related<super::genre::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Genre.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Film work <-> person association, `role` partitions the link.
/// The same pair may appear once per role.
pub mod person_film_work {
    use super::PersonRole;
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "person_film_work")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub film_work_id: Uuid,
        pub person_id: Uuid,
        pub role: Option<PersonRole>,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::film_work::Entity",
            from = "Column::FilmWorkId",
            to = "super::film_work::Column::Id",
            on_delete = "Cascade"
        )]
        FilmWork,
        #[sea_orm(
            belongs_to = "super::person::Entity",
            from = "Column::PersonId",
            to = "super::person::Column::Id",
            on_delete = "Cascade"
        )]
        Person,
    }

    impl Related<super::film_work::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::FilmWork.def()
        }
    }

    impl Related<super::person::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Person.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
