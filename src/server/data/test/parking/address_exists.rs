use super::*;

/// Tests detecting an address already in use.
///
/// Expected: Ok(true) for a stored address
#[tokio::test]
async fn detects_existing_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parking = factory::create_parking(db).await?;

    let repo = ParkingRepository::new(db);
    assert!(repo.address_exists(&parking.address).await?);

    Ok(())
}

/// Tests checking an address no lot uses.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_unknown_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_parking(db).await?;

    let repo = ParkingRepository::new(db);
    assert!(!repo.address_exists("99 Nowhere Road").await?);

    Ok(())
}
