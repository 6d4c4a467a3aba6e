use super::*;

/// Tests replacing members without a version check.
///
/// Expected: Ok(Updated) with the new members and version bumped
#[tokio::test]
async fn replaces_members_and_bumps_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alliance = AllianceFactory::new(db, "G1")
        .members(["Alice"])
        .build()
        .await?;

    let repo = AllianceRepository::new(db);
    let outcome = repo
        .update_members(alliance.id, vec!["Bob".to_string(), "Carol".to_string()], None)
        .await?;

    let MembersUpdate::Updated(updated) = outcome else {
        panic!("expected the write to apply");
    };
    assert_eq!(updated.members, vec!["Bob".to_string(), "Carol".to_string()]);
    assert_eq!(updated.version, alliance.version + 1);
    assert_eq!(updated.name, alliance.name);

    Ok(())
}

/// Tests a write against the current version.
///
/// Expected: Ok(Updated)
#[tokio::test]
async fn applies_with_matching_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alliance = factory::create_alliance(db, "G1").await?;

    let repo = AllianceRepository::new(db);
    let outcome = repo
        .update_members(alliance.id, vec!["Dave".to_string()], Some(alliance.version))
        .await?;

    assert!(matches!(outcome, MembersUpdate::Updated(ref a) if a.members == vec!["Dave".to_string()]));

    Ok(())
}

/// Tests a write against a stale version.
///
/// Expected: Ok(Conflict) with the stored version and members unchanged
#[tokio::test]
async fn stale_version_conflicts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alliance = AllianceFactory::new(db, "G1")
        .members(["Alice"])
        .build()
        .await?;

    let repo = AllianceRepository::new(db);
    repo.update_members(alliance.id, vec!["Bob".to_string()], Some(1))
        .await?;
    let outcome = repo
        .update_members(alliance.id, vec!["Carol".to_string()], Some(1))
        .await?;

    assert_eq!(outcome, MembersUpdate::Conflict { actual: 2 });
    let stored = repo.get_by_id(alliance.id).await?.unwrap();
    assert_eq!(stored.members, vec!["Bob".to_string()]);

    Ok(())
}

/// Tests writing to an alliance that does not exist.
///
/// Expected: Ok(NotFound) with or without a version
#[tokio::test]
async fn unknown_alliance_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AllianceRepository::new(db);

    assert_eq!(
        repo.update_members(12, vec!["Bob".to_string()], None).await?,
        MembersUpdate::NotFound
    );
    assert_eq!(
        repo.update_members(12, vec!["Bob".to_string()], Some(1)).await?,
        MembersUpdate::NotFound
    );

    Ok(())
}

/// Tests clearing every member.
///
/// Expected: Ok(Updated) with an empty member list
#[tokio::test]
async fn empty_list_clears_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alliance = AllianceFactory::new(db, "G1")
        .members(["Alice", "Bob"])
        .build()
        .await?;

    let repo = AllianceRepository::new(db);
    repo.update_members(alliance.id, Vec::new(), None).await?;

    assert!(repo.get_by_id(alliance.id).await?.unwrap().members.is_empty());

    Ok(())
}
