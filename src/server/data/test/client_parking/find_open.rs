use super::*;

/// Tests looking up the open stay for a client and parking lot pair.
///
/// Expected: Ok with the open record
#[tokio::test]
async fn finds_open_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;
    let record = factory::create_client_parking(db, client.id, parking.id).await?;

    let repo = ClientParkingRepository::new(db);
    let found = repo.find_open(client.id, parking.id).await?;

    assert_eq!(found.map(|occupancy| occupancy.id), Some(record.id));

    Ok(())
}

/// Tests that completed stays are not treated as open.
///
/// Verifies that a record with a departure time is skipped by the lookup.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_closed_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;
    factory::create_closed_client_parking(db, client.id, parking.id).await?;

    let repo = ClientParkingRepository::new(db);
    let found = repo.find_open(client.id, parking.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the lookup when the pair has no stay records at all.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;

    let repo = ClientParkingRepository::new(db);
    let found = repo.find_open(client.id, parking.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the lookup returns the newest open row when several exist.
///
/// Expected: Ok with the most recently inserted record
#[tokio::test]
async fn prefers_most_recent_when_seeded_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;

    let repo = ClientParkingRepository::new(db);
    repo.create(client.id, parking.id, Utc::now()).await?;
    let latest = repo.create(client.id, parking.id, Utc::now()).await?;

    let found = repo.find_open(client.id, parking.id).await?;

    assert_eq!(found.map(|occupancy| occupancy.id), Some(latest.id));

    Ok(())
}

/// Tests that the lookup is scoped to the requested pair.
///
/// Verifies that an open stay at another parking lot does not match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn scopes_lookup_to_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;
    let other_parking = factory::create_parking(db).await?;
    factory::create_client_parking(db, client.id, other_parking.id).await?;

    let repo = ClientParkingRepository::new(db);
    let found = repo.find_open(client.id, parking.id).await?;

    assert!(found.is_none());

    Ok(())
}
