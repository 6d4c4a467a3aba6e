use super::*;

/// Tests finding alliances by member name.
///
/// Expected: Ok with only the alliances listing the member, ignoring case
#[tokio::test]
async fn finds_alliances_listing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let with_bob = AllianceFactory::new(db, "G1")
        .members(["Bob", "Carol"])
        .build()
        .await?;
    let also_bob = AllianceFactory::new(db, "G2")
        .members(["bob"])
        .build()
        .await?;
    AllianceFactory::new(db, "G1")
        .members(["Carol"])
        .build()
        .await?;

    let repo = AllianceRepository::new(db);
    let found = repo.get_by_member("BOB").await?;

    let ids: Vec<i32> = found.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![with_bob.id, also_bob.id]);

    Ok(())
}

/// Tests scoping member lookup to one game.
///
/// Expected: Ok with only the alliance from the requested game
#[tokio::test]
async fn scopes_to_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AllianceFactory::new(db, "G1")
        .members(["Bob"])
        .build()
        .await?;
    let in_g2 = AllianceFactory::new(db, "G2")
        .members(["Bob"])
        .build()
        .await?;

    let repo = AllianceRepository::new(db);
    let found = repo.get_by_game_and_member("G2", "bob").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, in_g2.id);

    Ok(())
}

/// Tests a name that is in no alliance.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn unknown_member_is_in_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AllianceFactory::new(db, "G1")
        .members(["Bob"])
        .build()
        .await?;

    let repo = AllianceRepository::new(db);

    assert!(repo.get_by_member("Bo").await?.is_empty());

    Ok(())
}

/// Tests the membership predicate rendered for Postgres.
///
/// Verifies the array is expanded in the store rather than loaded and filtered by the caller.
///
/// Expected: EXISTS subquery over json_array_elements_text with the name bound lowercased
#[test]
fn postgres_filters_in_store() {
    use crate::data::alliance::member_condition;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    let condition = member_condition(DbBackend::Postgres, "Bob").unwrap();
    let sql = entity::prelude::Alliance::find()
        .filter(condition)
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains("EXISTS"), "{}", sql);
    assert!(
        sql.contains("json_array_elements_text(\"alliances\".\"members\")"),
        "{}",
        sql
    );
    assert!(sql.contains("LOWER(\"m\".\"value\") = 'bob'"), "{}", sql);
}

/// Tests the membership predicate on a backend without a JSON table function mapping.
///
/// Expected: Err(DbErr::Custom)
#[test]
fn unsupported_backend_is_an_error() {
    use crate::data::alliance::member_condition;
    use sea_orm::DbBackend;

    assert!(matches!(
        member_condition(DbBackend::MySql, "Bob"),
        Err(DbErr::Custom(_))
    ));
}

/// Tests member lookup against a game with many alliances, only some listing the player.
///
/// Expected: Ok with exactly the alliances whose members array holds the name
#[tokio::test]
async fn skips_alliances_without_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut expected = Vec::new();
    for i in 0..6 {
        let members: Vec<&str> = if i % 3 == 0 { vec!["Carol", "Dave"] } else { vec!["Carol"] };
        let alliance = AllianceFactory::new(db, "G1").members(members).build().await?;
        if i % 3 == 0 {
            expected.push(alliance.id);
        }
    }
    AllianceFactory::new(db, "G1").members(Vec::<&str>::new()).build().await?;

    let found = AllianceRepository::new(db)
        .get_by_game_and_member("G1", "dave")
        .await?;

    let ids: Vec<i32> = found.iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}
