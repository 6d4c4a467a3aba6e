use super::*;

/// Tests finding a game by its code.
///
/// Expected: Ok(Some) with the matching game
#[tokio::test]
async fn finds_existing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;
    let game = factory::game::GameFactory::new(db)
        .game_code("WOLF")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let found = repo.get_by_code("WOLF").await?;

    assert_eq!(found.map(|g| g.id), Some(game.id));

    Ok(())
}

/// Tests that an unknown code yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.get_by_code("NOPE").await?.is_none());

    Ok(())
}
