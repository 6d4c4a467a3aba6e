use super::*;

/// Tests resolving every role at once.
///
/// Verifies that roles sharing an ability each get their own copy and that dangling ids
/// stay attached to the role that references them.
///
/// Expected: Ok with roles in id order and per-role resolution
#[tokio::test]
async fn resolves_each_role_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shared = factory::create_ability(db).await?;
    let own = factory::create_ability(db).await?;
    let passive = factory::create_passive(db).await?;
    let first = RoleFactory::new(db)
        .ability_ids(vec![shared.id, own.id])
        .build()
        .await?;
    let second = RoleFactory::new(db)
        .ability_ids(vec![shared.id, 7777])
        .passive_ids(vec![passive.id])
        .build()
        .await?;
    let empty = factory::create_role(db).await?;

    let repo = RoleRepository::new(db);
    let roles = repo.get_all_complex().await?;

    assert_eq!(roles.len(), 3);
    assert_eq!(roles[0].id, first.id);
    assert_eq!(roles[0].abilities.len(), 2);
    assert!(roles[0].unresolved_ability_ids.is_empty());

    assert_eq!(roles[1].id, second.id);
    assert_eq!(roles[1].abilities[0].id, shared.id);
    assert_eq!(roles[1].unresolved_ability_ids, vec![7777]);
    assert_eq!(roles[1].passives[0].id, passive.id);

    assert_eq!(roles[2].id, empty.id);
    assert!(roles[2].abilities.is_empty());

    Ok(())
}
