use super::*;

/// Tests finding a client by ID.
///
/// Verifies that an existing client is returned with all stored fields.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert!(found.is_some());
    let client = found.unwrap();
    assert_eq!(client.id, created.id);
    assert_eq!(client.name, created.name);
    assert_eq!(client.car_number, created.car_number);

    Ok(())
}

/// Tests finding a client that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let found = repo.get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
