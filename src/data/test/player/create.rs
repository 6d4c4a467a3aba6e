use super::*;

/// Tests seating a new player.
///
/// Expected: Ok with the player alive, zero luck and no overrides
#[tokio::test]
async fn creates_player_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParams {
            name: "Alice".to_string(),
            game_code: game.game_code.clone(),
            role_id: role.id,
            seat: 4,
        })
        .await?;

    assert_eq!(player.name, "Alice");
    assert_eq!(player.game_code, game.game_code);
    assert_eq!(player.seat, 4);
    assert!(player.alive);
    assert_eq!(player.luck, 0);
    assert!(player.alignment_override.is_none());

    Ok(())
}

/// Tests that a player cannot reference a role that does not exist.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = PlayerRepository::new(db);
    let result = repo
        .create(CreatePlayerParams {
            name: "Alice".to_string(),
            game_code: game.game_code,
            role_id: 999,
            seat: 1,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
