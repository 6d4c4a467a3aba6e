use super::*;

/// Tests resolving ids with duplicates and a dangling id.
///
/// Expected: Ok with duplicates collapsed in first-appearance order and the dangling id listed
#[tokio::test]
async fn collapses_duplicates_and_lists_dangling() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_ability(db).await?;
    let b = factory::create_ability(db).await?;

    let resolver = ArrayRefResolver::new(db);
    let resolved = resolver
        .resolve::<entity::ability::Entity>(&[b.id, 5000, a.id, b.id])
        .await?;

    let ids: Vec<i32> = resolved.items.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert_eq!(resolved.unresolved, vec![5000]);

    Ok(())
}

/// Tests resolving an empty array.
///
/// Runs without the passive table so any query would fail.
///
/// Expected: Ok with an empty result
#[tokio::test]
async fn empty_input_skips_query() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resolver = ArrayRefResolver::new(db);
    let resolved = resolver.resolve::<entity::passive::Entity>(&[]).await?;

    assert!(resolved.items.is_empty());
    assert!(resolved.unresolved.is_empty());

    Ok(())
}

/// Tests that a missing table surfaces as an error rather than an empty result.
///
/// Expected: Err
#[tokio::test]
async fn store_errors_propagate() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resolver = ArrayRefResolver::new(db);
    let result = resolver.resolve::<entity::passive::Entity>(&[1]).await;

    assert!(result.is_err());

    Ok(())
}
