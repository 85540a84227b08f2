//! Master data upserts are idempotent; ledger data appends on every run.
//! The asymmetry is deliberate and asserted explicitly here.

mod common;

use sea_orm::{EntityTrait, PaginatorTrait};

use clinicore_api::entities::{auth, hr, inventory, marketing};
use clinicore_api::seed::Domain;

use common::SeedHarness;

#[tokio::test]
async fn second_run_leaves_master_data_alone_and_doubles_ledgers() {
    let harness = SeedHarness::new();
    let orchestrator = harness.orchestrator();

    orchestrator.run_all().await.expect("first run");
    let second = orchestrator.run_all().await.expect("second run");

    // Every master row was found and skipped; nothing new was created.
    assert_eq!(second.total_created(), 0);
    assert_eq!(second.total_skipped(), 32);
    assert_eq!(second.total_appended(), 22);

    let auth_db = harness.connect(Domain::Auth).await;
    assert_eq!(auth::clinic::Entity::find().count(&auth_db).await.unwrap(), 1);
    assert_eq!(auth::user::Entity::find().count(&auth_db).await.unwrap(), 3);

    let hr_db = harness.connect(Domain::Hr).await;
    assert_eq!(hr::employee::Entity::find().count(&hr_db).await.unwrap(), 5);
    assert_eq!(
        hr::incentive_policy::Entity::find().count(&hr_db).await.unwrap(),
        1
    );
    assert_eq!(
        hr::target_revenue::Entity::find().count(&hr_db).await.unwrap(),
        3
    );

    let inv_db = harness.connect(Domain::Inventory).await;
    assert_eq!(
        inventory::supplier::Entity::find().count(&inv_db).await.unwrap(),
        3
    );
    assert_eq!(
        inventory::product::Entity::find().count(&inv_db).await.unwrap(),
        6
    );
    assert_eq!(
        inventory::product_supplier::Entity::find()
            .count(&inv_db)
            .await
            .unwrap(),
        6
    );

    let mkt_db = harness.connect(Domain::Marketing).await;
    assert_eq!(
        marketing::campaign::Entity::find().count(&mkt_db).await.unwrap(),
        4
    );

    // Ledger entities double.
    assert_eq!(
        inventory::stock_movement::Entity::find()
            .count(&inv_db)
            .await
            .unwrap(),
        14
    );
    assert_eq!(
        marketing::marketing_expense::Entity::find()
            .count(&mkt_db)
            .await
            .unwrap(),
        10
    );
    assert_eq!(
        marketing::campaign_performance::Entity::find()
            .count(&mkt_db)
            .await
            .unwrap(),
        8
    );
    assert_eq!(
        marketing::patient_source::Entity::find()
            .count(&mkt_db)
            .await
            .unwrap(),
        12
    );
}

#[tokio::test]
async fn reseed_does_not_overwrite_existing_fields() {
    use sea_orm::{ActiveModelTrait, IntoActiveModel, Set};

    let harness = SeedHarness::new();
    let orchestrator = harness.orchestrator();
    orchestrator.run_one(Domain::Auth).await.expect("first run");

    // Operator edits a seeded row out of band.
    let auth_db = harness.connect(Domain::Auth).await;
    let clinic = auth::clinic::Entity::find_by_id("clinic-001")
        .one(&auth_db)
        .await
        .unwrap()
        .expect("clinic seeded");
    let mut edited = clinic.into_active_model();
    edited.name = Set("Renamed Clinic".to_string());
    edited.update(&auth_db).await.unwrap();

    // Re-seeding is create-if-missing: the edit survives.
    orchestrator.run_one(Domain::Auth).await.expect("second run");
    let clinic = auth::clinic::Entity::find_by_id("clinic-001")
        .one(&auth_db)
        .await
        .unwrap()
        .expect("clinic still present");
    assert_eq!(clinic.name, "Renamed Clinic");
}
