use super::*;

/// Tests listing a game's players with roles.
///
/// Verifies seat ordering with id as tie breaker, and that other games are excluded.
///
/// Expected: Ok with players ordered by (seat, id)
#[tokio::test]
async fn orders_by_seat_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;

    let third = PlayerFactory::new(db, &game.game_code, role.id)
        .seat(5)
        .build()
        .await?;
    let first = PlayerFactory::new(db, &game.game_code, role.id)
        .seat(1)
        .build()
        .await?;
    let second = PlayerFactory::new(db, &game.game_code, role.id)
        .seat(5)
        .build()
        .await?;
    PlayerFactory::new(db, &other.game_code, role.id)
        .seat(0)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_all_complex_by_game(&game.game_code).await?;

    let ids: Vec<i32> = players.iter().map(|p| p.player.id).collect();
    assert_eq!(ids, vec![first.id, third.id, second.id]);
    assert!(players.iter().all(|p| p.role.id == role.id));

    Ok(())
}

/// Tests listing a game without players.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_game_has_no_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.get_all_complex_by_game(&game.game_code).await?.is_empty());

    Ok(())
}
