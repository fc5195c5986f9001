use super::*;

/// Tests fetching an existing client through the service.
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

    let service = ClientService::new(db);
    let found = service.get_by_id(created.id).await.unwrap();

    assert!(found.is_some());
    let client = found.unwrap();
    assert_eq!(client.id, created.id);
    assert_eq!(client.name, created.name);
    assert_eq!(client.car_number, created.car_number);

    Ok(())
}

/// Tests fetching a client that was never registered.
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

    let service = ClientService::new(db);
    let found = service.get_by_id(999).await.unwrap();

    assert!(found.is_none());

    Ok(())
}
