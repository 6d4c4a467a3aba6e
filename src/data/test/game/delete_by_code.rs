use super::*;

/// Tests deleting a game by code.
///
/// Verifies that only the targeted game is removed.
///
/// Expected: Ok(1) and the other game still present
#[tokio::test]
async fn deletes_only_target_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_game(db).await?;
    let kept = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let deleted = repo.delete_by_code(&doomed.game_code).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_code(&doomed.game_code).await?.is_none());
    assert!(repo.get_by_code(&kept.game_code).await?.is_some());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
