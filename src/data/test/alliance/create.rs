use super::*;

/// Tests creating an alliance with members.
///
/// Verifies that members are normalized on insert and the version starts at 1.
///
/// Expected: Ok with trimmed, deduplicated members
#[tokio::test]
async fn creates_with_normalized_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = AllianceRepository::new(db);
    let alliance = repo
        .create(CreateAllianceParams {
            name: "Mafia".to_string(),
            game_code: game.game_code,
            description: Some("Night kill".to_string()),
            members: vec![" Bob".to_string(), "".to_string(), "BOB".to_string(), "Carol".to_string()],
            color: None,
        })
        .await?;

    assert_eq!(alliance.members, vec!["Bob".to_string(), "Carol".to_string()]);
    assert_eq!(alliance.version, 1);
    assert_eq!(repo.get_by_name("Mafia").await?.map(|a| a.id), Some(alliance.id));

    Ok(())
}

/// Tests that alliance names are unique across games.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AllianceRepository::new(db);
    repo.create_with_name("Lovers".to_string(), "G1".to_string())
        .await?;
    let result = repo
        .create_with_name("Lovers".to_string(), "G2".to_string())
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
