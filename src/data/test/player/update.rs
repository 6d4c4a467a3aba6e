use super::*;

/// Tests updating several fields at once.
///
/// Verifies that only provided fields change and that a nullable field can be cleared.
///
/// Expected: Ok(Some) with the changed fields and untouched name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;
    let player = PlayerFactory::new(db, &game.game_code, role.id)
        .name("Alice")
        .luck_status(Some("blessed".to_string()))
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update(UpdatePlayerParams {
            id: player.id,
            alive: Some(false),
            luck: Some(7),
            luck_status: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Alice");
    assert!(!updated.alive);
    assert_eq!(updated.luck, 7);
    assert!(updated.luck_status.is_none());
    assert!(updated.updated_at >= player.updated_at);

    Ok(())
}

/// Tests updating a player that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update(UpdatePlayerParams {
            id: 42,
            seat: Some(1),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
