use super::*;

/// Tests creating a new parking lot.
///
/// Verifies that the parking repository stores the provided capacity values and
/// derives the open flag from the initial availability.
///
/// Expected: Ok with lot created, opened derived as true
#[tokio::test]
async fn creates_new_parking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingRepository::new(db);
    let result = repo
        .create(CreateParkingParam {
            address: "1 Main Street".to_string(),
            name: Some("Central".to_string()),
            count_places: 20,
            count_available_places: 8,
        })
        .await;

    assert!(result.is_ok());
    let parking = result.unwrap();
    assert!(parking.id > 0);
    assert_eq!(parking.address, "1 Main Street");
    assert_eq!(parking.count_places, 20);
    assert_eq!(parking.count_available_places, 8);
    assert!(parking.opened);

    Ok(())
}

/// Tests creating a lot with no free places.
///
/// Verifies that the derived open flag is false when the initial availability
/// is zero.
///
/// Expected: Ok with opened stored as false
#[tokio::test]
async fn derives_closed_flag_when_no_places() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingRepository::new(db);
    let parking = repo
        .create(CreateParkingParam {
            address: "2 Side Street".to_string(),
            name: None,
            count_places: 10,
            count_available_places: 0,
        })
        .await?;

    assert!(!parking.opened);
    assert_eq!(parking.count_available_places, 0);

    Ok(())
}

/// Tests the unique constraint on addresses.
///
/// Expected: Err from the violated unique constraint
#[tokio::test]
async fn rejects_duplicate_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Parking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParkingRepository::new(db);
    repo.create(CreateParkingParam {
        address: "1 Main Street".to_string(),
        name: None,
        count_places: 20,
        count_available_places: 20,
    })
    .await?;

    let result = repo
        .create(CreateParkingParam {
            address: "1 Main Street".to_string(),
            name: None,
            count_places: 5,
            count_available_places: 5,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
