use super::*;

/// Tests listing players whose role row is gone.
///
/// Verifies only orphans of the requested game are returned, in id order.
///
/// Expected: Ok with the orphan ids and none of the joined players
#[tokio::test]
async fn lists_only_orphans_of_game() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_game_tables().build().await.unwrap();
    test.disable_foreign_keys().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;

    PlayerFactory::new(db, &game.game_code, role.id)
        .name("Alice")
        .build()
        .await?;
    let first = PlayerFactory::new(db, &game.game_code, 31337)
        .name("Ghost")
        .build()
        .await?;
    let second = PlayerFactory::new(db, &game.game_code, 31338)
        .name("Wraith")
        .build()
        .await?;
    PlayerFactory::new(db, &other.game_code, 31337)
        .name("Elsewhere")
        .build()
        .await?;

    let ids = PlayerRepository::new(db)
        .find_ids_without_role(&game.game_code)
        .await?;

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a game where every player has a role.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_when_all_roles_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;
    PlayerFactory::new(db, &game.game_code, role.id).build().await?;

    let ids = PlayerRepository::new(db)
        .find_ids_without_role(&game.game_code)
        .await?;

    assert!(ids.is_empty());

    Ok(())
}
