use super::*;

/// Tests loading a player joined with its role.
///
/// Verifies that both sides of the prefixed join are split back correctly even though
/// both tables have `id` and `name` columns.
///
/// Expected: Ok(Unique) with player and role fields intact
#[tokio::test]
async fn returns_player_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let role = factory::role::RoleFactory::new(db)
        .name("Seer")
        .alignment("good")
        .ability_ids(vec![4, 2])
        .build()
        .await?;
    let alice = PlayerFactory::new(db, &game.game_code, role.id)
        .name("Alice")
        .seat(3)
        .alignment_override(Some("evil".to_string()))
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let found = repo
        .find_complex_by_game_and_name(&game.game_code, "ALICE")
        .await?;

    let NameMatch::Unique(joined) = found else {
        panic!("expected a unique match");
    };
    assert_eq!(joined.player.id, alice.id);
    assert_eq!(joined.player.name, "Alice");
    assert_eq!(joined.player.seat, 3);
    assert_eq!(joined.role.id, role.id);
    assert_eq!(joined.role.name, "Seer");
    assert_eq!(joined.role.ability_ids, vec![4, 2]);
    assert_eq!(joined.alignment(), "evil");

    Ok(())
}

/// Tests that duplicate names within a game are reported.
///
/// Expected: Ok(Ambiguous(2))
#[tokio::test]
async fn reports_ambiguous_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;
    PlayerFactory::new(db, &game.game_code, role.id)
        .name("Alice")
        .build()
        .await?;
    PlayerFactory::new(db, &game.game_code, role.id)
        .name("alice")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let found = repo
        .find_complex_by_game_and_name(&game.game_code, "Alice")
        .await?;

    assert_eq!(found, NameMatch::Ambiguous(2));

    Ok(())
}

/// Tests a player whose role row is missing.
///
/// Expected: Ok(Missing) since the join has no role side
#[tokio::test]
async fn missing_role_is_missing() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_game_tables().build().await.unwrap();
    test.disable_foreign_keys().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let orphan = PlayerFactory::new(db, &game.game_code, 404)
        .name("Orphan")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let found = repo
        .find_complex_by_game_and_name(&game.game_code, "Orphan")
        .await?;

    assert_eq!(found, NameMatch::Missing);
    assert_eq!(
        repo.find_ids_without_role(&game.game_code).await?,
        vec![orphan.id]
    );

    Ok(())
}
