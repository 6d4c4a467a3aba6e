use super::*;

/// Tests that deleting a referenced ability leaves the role loadable.
///
/// Expected: Ok with the deleted id reported as unresolved on the role
#[tokio::test]
async fn deleted_ability_becomes_dangling() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, abilities, _) = factory::helpers::create_role_with_children(db, 2, 0).await?;

    let repo = AbilityRepository::new(db);
    assert_eq!(repo.delete(abilities[0].id).await?, 1);

    let complex = RoleRepository::new(db)
        .get_complex_by_id(role.id)
        .await?
        .unwrap();
    assert_eq!(complex.abilities.len(), 1);
    assert_eq!(complex.abilities[0].id, abilities[1].id);
    assert_eq!(complex.unresolved_ability_ids, vec![abilities[0].id]);

    Ok(())
}

/// Tests deleting a passive.
///
/// Expected: Ok(1) then the passive is gone
#[tokio::test]
async fn deletes_passive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let passive = factory::create_passive(db).await?;

    let repo = PassiveRepository::new(db);
    assert_eq!(repo.delete(passive.id).await?, 1);
    assert!(repo.get_by_id(passive.id).await?.is_none());

    Ok(())
}
