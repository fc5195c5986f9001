use super::*;

/// Tests a successful arrival at a partially occupied lot.
///
/// Verifies that exactly one place is consumed, the lot stays open, the stay
/// starts with an arrival time and no departure time, and the response echoes
/// the client's card token.
///
/// Expected: Ok with 7 of 20 places left
#[tokio::test]
async fn consumes_one_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = ParkingFactory::new(db)
        .count_places(20)
        .count_available_places(8)
        .build()
        .await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: parking.id,
        })
        .await;

    assert!(result.is_ok());
    let arrival = result.unwrap();
    assert_eq!(arrival.occupancy.client_id, client.id);
    assert_eq!(arrival.occupancy.parking_id, parking.id);
    assert!(arrival.occupancy.time_in.is_some());
    assert!(arrival.occupancy.time_out.is_none());
    assert_eq!(arrival.parking.count_available_places, 7);
    assert!(arrival.parking.opened);
    assert_eq!(Some(arrival.card), client.credit_card);

    // Verify the decrement was persisted
    let stored = entity::prelude::Parking::find_by_id(parking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.count_available_places, 7);
    assert!(stored.opened);

    Ok(())
}

/// Tests an arrival that takes the lot's last free place.
///
/// Expected: Ok with the lot closed at zero availability
#[tokio::test]
async fn closes_lot_when_last_place_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = ParkingFactory::new(db).count_places(1).build().await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let arrival = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: parking.id,
        })
        .await
        .unwrap();

    assert_eq!(arrival.parking.count_available_places, 0);
    assert!(!arrival.parking.opened);

    let stored = entity::prelude::Parking::find_by_id(parking.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.opened);

    Ok(())
}

/// Tests an arrival at a lot with no free places.
///
/// Verifies that the rejection leaves no stay behind and the count at zero.
///
/// Expected: Err(LotClosed), no state change
#[tokio::test]
async fn rejects_closed_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = factory::create_full_parking(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: parking.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::LotClosed))
    ));

    let records = entity::prelude::ClientParking::find().count(db).await?;
    assert_eq!(records, 0);

    let stored = entity::prelude::Parking::find_by_id(parking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.count_available_places, 0);
    assert!(!stored.opened);

    Ok(())
}

/// Tests an arrival at a lot that does not exist.
///
/// A missing lot is reported the same way as a closed one.
///
/// Expected: Err(LotClosed)
#[tokio::test]
async fn rejects_missing_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: 999,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::LotClosed))
    ));

    Ok(())
}

/// Tests an arrival by a client with no linked payment card.
///
/// Expected: Err(PaymentMethodMissing), no stay created
#[tokio::test]
async fn rejects_client_without_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client_without_card(db).await?;
    let parking = factory::create_parking(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: parking.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::PaymentMethodMissing))
    ));

    let records = entity::prelude::ClientParking::find().count(db).await?;
    assert_eq!(records, 0);

    let stored = entity::prelude::Parking::find_by_id(parking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.count_available_places, parking.count_available_places);

    Ok(())
}

/// Tests an arrival by a client whose card token is an empty string.
///
/// An empty token counts as missing, same as no token at all.
///
/// Expected: Err(PaymentMethodMissing)
#[tokio::test]
async fn rejects_client_with_empty_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = ClientFactory::new(db)
        .credit_card(Some(String::new()))
        .build()
        .await?;
    let parking = factory::create_parking(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: parking.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::PaymentMethodMissing))
    ));

    Ok(())
}

/// Tests an arrival by a client that does not exist.
///
/// Expected: Err(PaymentMethodMissing)
#[tokio::test]
async fn rejects_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parking = factory::create_parking(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: 999,
            parking_id: parking.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::PaymentMethodMissing))
    ));

    Ok(())
}

/// Tests that the lot check runs before the payment card check.
///
/// A cardless client arriving at a closed lot is told about the lot, not the
/// card.
///
/// Expected: Err(LotClosed)
#[tokio::test]
async fn checks_lot_before_payment_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client_without_card(db).await?;
    let parking = factory::create_full_parking(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: parking.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::LotClosed))
    ));

    Ok(())
}

/// Tests a second arrival while the client is still parked at the lot.
///
/// Verifies that no second stay is created and the count does not move again.
///
/// Expected: Err(AlreadyParked), state unchanged since the first arrival
#[tokio::test]
async fn rejects_second_check_in_while_parked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let parking = ParkingFactory::new(db)
        .count_places(20)
        .count_available_places(8)
        .build()
        .await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);
    let param = OccupancyParam {
        client_id: client.id,
        parking_id: parking.id,
    };

    service.check_in(param).await.unwrap();
    let result = service.check_in(param).await;

    assert!(matches!(
        result,
        Err(AppError::OccupancyErr(OccupancyError::AlreadyParked))
    ));

    let records = entity::prelude::ClientParking::find().count(db).await?;
    assert_eq!(records, 1);

    let stored = entity::prelude::Parking::find_by_id(parking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.count_available_places, 7);

    Ok(())
}

/// Tests that a client parked at one lot can still arrive at another.
///
/// The one-open-stay rule is scoped per lot.
///
/// Expected: Ok for the second lot
#[tokio::test]
async fn allows_parking_at_second_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let first = factory::create_parking(db).await?;
    let second = factory::create_parking(db).await?;

    let locks = LotLockService::new();
    let service = OccupancyService::new(db, &locks);

    service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: first.id,
        })
        .await
        .unwrap();

    let result = service
        .check_in(OccupancyParam {
            client_id: client.id,
            parking_id: second.id,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
