use super::*;

/// Tests creating an open stay.
///
/// Verifies that the record links the pair, stores the arrival time, and
/// leaves the departure time unset.
///
/// Expected: Ok with time_in set and time_out None
#[tokio::test]
async fn creates_open_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;

    let repo = ClientParkingRepository::new(db);
    let time_in = Utc::now();
    let record = repo.create(client.id, parking.id, time_in).await?;

    assert!(record.id > 0);
    assert_eq!(record.client_id, client.id);
    assert_eq!(record.parking_id, parking.id);
    assert_eq!(record.time_in, Some(time_in));
    assert!(record.time_out.is_none());

    Ok(())
}

/// Tests that repeated stays by the same pair accumulate as separate rows.
///
/// Expected: two records with distinct IDs
#[tokio::test]
async fn keeps_history_rows_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_parking(db).await?;

    let repo = ClientParkingRepository::new(db);
    let first = repo.create(client.id, parking.id, Utc::now()).await?;
    repo.close(first.id, Utc::now()).await?;
    let second = repo.create(client.id, parking.id, Utc::now()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
