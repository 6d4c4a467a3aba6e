use super::*;

/// Tests resolving a role whose arrays all point at existing rows.
///
/// Expected: Ok(Some) with abilities and passives in array order
#[tokio::test]
async fn resolves_children_in_array_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_ability(db).await?;
    let second = factory::create_ability(db).await?;
    let passive = factory::create_passive(db).await?;
    let role = RoleFactory::new(db)
        .ability_ids(vec![second.id, first.id])
        .passive_ids(vec![passive.id])
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let complex = repo.get_complex_by_id(role.id).await?.unwrap();

    let ability_ids: Vec<i32> = complex.abilities.iter().map(|a| a.id).collect();
    assert_eq!(ability_ids, vec![second.id, first.id]);
    assert_eq!(complex.passives.len(), 1);
    assert_eq!(complex.passives[0].name, passive.name);
    assert_eq!(complex.dangling_count(), 0);

    Ok(())
}

/// Tests a role with empty arrays.
///
/// Expected: Ok(Some) with empty ability and passive lists
#[tokio::test]
async fn empty_arrays_resolve_to_empty_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;

    let repo = RoleRepository::new(db);
    let complex = repo.get_complex_by_id(role.id).await?.unwrap();

    assert!(complex.abilities.is_empty());
    assert!(complex.passives.is_empty());
    assert!(complex.unresolved_ability_ids.is_empty());

    Ok(())
}

/// Tests a role referencing an ability that does not exist.
///
/// Expected: Ok(Some) with the existing ability and the dangling id reported
#[tokio::test]
async fn reports_dangling_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ability = factory::create_ability(db).await?;
    let role = RoleFactory::new(db)
        .ability_ids(vec![ability.id, 9999])
        .passive_ids(vec![8888])
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let complex = repo.get_complex_by_id(role.id).await?.unwrap();

    assert_eq!(complex.abilities.len(), 1);
    assert_eq!(complex.abilities[0].id, ability.id);
    assert_eq!(complex.unresolved_ability_ids, vec![9999]);
    assert!(complex.passives.is_empty());
    assert_eq!(complex.unresolved_passive_ids, vec![8888]);

    Ok(())
}

/// Tests an unknown role id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);

    assert!(repo.get_complex_by_id(1).await?.is_none());

    Ok(())
}
