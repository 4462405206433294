//! Database migrations for the movies catalog

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241210_000001_create_content_tables::Migration),
            Box::new(m20241210_000002_create_association_tables::Migration),
        ]
    }
}

mod m20241210_000001_create_content_tables {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000001_create_content_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Genre::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Genre::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Genre::Name).string_len(255).not_null())
                        .col(ColumnDef::new(Genre::Description).text())
                        .col(
                            ColumnDef::new(Genre::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Genre::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Person::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Person::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Person::FullName).string_len(255).not_null())
                        .col(ColumnDef::new(Person::Gender).text())
                        .col(
                            ColumnDef::new(Person::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Person::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(FilmWork::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(FilmWork::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(FilmWork::Title).text().not_null())
                        .col(ColumnDef::new(FilmWork::Description).text())
                        .col(ColumnDef::new(FilmWork::CreationDate).date())
                        .col(ColumnDef::new(FilmWork::Certificate).string_len(512))
                        .col(ColumnDef::new(FilmWork::FilePath).string_len(255))
                        .col(ColumnDef::new(FilmWork::Rating).double())
                        .col(ColumnDef::new(FilmWork::Type).text().not_null())
                        .col(
                            ColumnDef::new(FilmWork::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(FilmWork::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Listing pages are ordered by title
            manager
                .create_index(
                    Index::create()
                        .name("idx_film_work_title")
                        .table(FilmWork::Table)
                        .col(FilmWork::Title)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FilmWork::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Person::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Genre::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Genre {
        Table,
        Id,
        Name,
        Description,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Person {
        Table,
        Id,
        FullName,
        Gender,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum FilmWork {
        Table,
        Id,
        Title,
        Description,
        CreationDate,
        Certificate,
        FilePath,
        Rating,
        Type,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20241210_000002_create_association_tables {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000002_create_association_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GenreFilmWork::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GenreFilmWork::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(GenreFilmWork::FilmWorkId).uuid().not_null())
                        .col(ColumnDef::new(GenreFilmWork::GenreId).uuid().not_null())
                        .col(
                            ColumnDef::new(GenreFilmWork::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_genre_film_work_film_work")
                                .from(GenreFilmWork::Table, GenreFilmWork::FilmWorkId)
                                .to(FilmWork::Table, FilmWork::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_genre_film_work_genre")
                                .from(GenreFilmWork::Table, GenreFilmWork::GenreId)
                                .to(Genre::Table, Genre::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_genre_film_work_film_work_id")
                        .table(GenreFilmWork::Table)
                        .col(GenreFilmWork::FilmWorkId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PersonFilmWork::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PersonFilmWork::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PersonFilmWork::FilmWorkId).uuid().not_null())
                        .col(ColumnDef::new(PersonFilmWork::PersonId).uuid().not_null())
                        .col(ColumnDef::new(PersonFilmWork::Role).text())
                        .col(
                            ColumnDef::new(PersonFilmWork::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_person_film_work_film_work")
                                .from(PersonFilmWork::Table, PersonFilmWork::FilmWorkId)
                                .to(FilmWork::Table, FilmWork::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_person_film_work_person")
                                .from(PersonFilmWork::Table, PersonFilmWork::PersonId)
                                .to(Person::Table, Person::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_person_film_work_film_work_id_person_id")
                        .table(PersonFilmWork::Table)
                        .col(PersonFilmWork::FilmWorkId)
                        .col(PersonFilmWork::PersonId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PersonFilmWork::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GenreFilmWork::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum GenreFilmWork {
        Table,
        Id,
        FilmWorkId,
        GenreId,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum PersonFilmWork {
        Table,
        Id,
        FilmWorkId,
        PersonId,
        Role,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum FilmWork {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Genre {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Person {
        Table,
        Id,
    }
}
