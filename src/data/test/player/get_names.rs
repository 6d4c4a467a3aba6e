use super::*;

/// Tests listing player names in seat order.
///
/// Expected: Ok with names ordered by seat
#[tokio::test]
async fn lists_names_in_seat_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let role = factory::create_role(db).await?;
    PlayerFactory::new(db, &game.game_code, role.id)
        .name("Carol")
        .seat(2)
        .build()
        .await?;
    PlayerFactory::new(db, &game.game_code, role.id)
        .name("Bob")
        .seat(1)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let names = repo.get_names(&game.game_code).await?;

    assert_eq!(names, vec!["Bob".to_string(), "Carol".to_string()]);

    Ok(())
}
