use super::*;

/// Tests updating descriptive fields.
///
/// Verifies that membership and version are not touched by a scalar update.
///
/// Expected: Ok(Some) with new name and cleared color
#[tokio::test]
async fn updates_scalar_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alliance = AllianceFactory::new(db, "G1")
        .members(["Alice"])
        .color(Some("#112233".to_string()))
        .build()
        .await?;

    let repo = AllianceRepository::new(db);
    let updated = repo
        .update(UpdateAllianceParams {
            id: alliance.id,
            name: Some("Coven".to_string()),
            color: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Coven");
    assert!(updated.color.is_none());
    assert_eq!(updated.members, vec!["Alice".to_string()]);
    assert_eq!(updated.version, alliance.version);

    Ok(())
}

/// Tests updating an alliance that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_alliance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AllianceRepository::new(db);
    let updated = repo
        .update(UpdateAllianceParams {
            id: 5,
            name: Some("Ghosts".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
