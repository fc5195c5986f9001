use super::*;

/// Tests listing all parking lots.
///
/// Expected: Ok with both lots in ascending ID order
#[tokio::test]
async fn returns_all_parkings_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_parking(db).await?;
    let second = factory::create_parking(db).await?;

    let repo = ParkingRepository::new(db);
    let parkings = repo.get_all().await?;

    assert_eq!(parkings.len(), 2);
    assert_eq!(parkings[0].id, first.id);
    assert_eq!(parkings[1].id, second.id);

    Ok(())
}

/// Tests listing parking lots when none exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_parkings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingRepository::new(db);
    let parkings = repo.get_all().await?;

    assert!(parkings.is_empty());

    Ok(())
}
