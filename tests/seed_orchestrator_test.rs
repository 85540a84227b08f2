mod common;

use assert_matches::assert_matches;
use sea_orm::{EntityTrait, PaginatorTrait};

use clinicore_api::entities::{auth, hr, inventory, marketing};
use clinicore_api::errors::SeedError;
use clinicore_api::seed::Domain;

use common::SeedHarness;

#[tokio::test]
async fn run_all_creates_the_full_demo_tenant() {
    let harness = SeedHarness::new();
    let overall = harness
        .orchestrator()
        .run_all()
        .await
        .expect("full seed run should succeed");

    assert_eq!(overall.reports.len(), 4);
    assert_eq!(overall.total_created(), 32);
    assert_eq!(overall.total_skipped(), 0);
    assert_eq!(overall.total_appended(), 22);

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
    assert_eq!(
        inventory::stock_movement::Entity::find()
            .count(&inv_db)
            .await
            .unwrap(),
        7
    );

    let mkt_db = harness.connect(Domain::Marketing).await;
    assert_eq!(
        marketing::campaign::Entity::find().count(&mkt_db).await.unwrap(),
        4
    );
    assert_eq!(
        marketing::marketing_expense::Entity::find()
            .count(&mkt_db)
            .await
            .unwrap(),
        5
    );
    assert_eq!(
        marketing::campaign_performance::Entity::find()
            .count(&mkt_db)
            .await
            .unwrap(),
        4
    );
    assert_eq!(
        marketing::patient_source::Entity::find()
            .count(&mkt_db)
            .await
            .unwrap(),
        6
    );
}

#[tokio::test]
async fn dependent_domain_before_auth_fails_referentially() {
    let harness = SeedHarness::new();

    let err = harness
        .orchestrator()
        .run_one(Domain::Hr)
        .await
        .expect_err("hr must not seed before auth");
    assert_matches!(
        err,
        SeedError::MissingReference {
            domain: Domain::Hr,
            entity: "clinic",
            ..
        }
    );

    // The referential check runs before any write: the store stays empty.
    let hr_db = harness.connect(Domain::Hr).await;
    assert_eq!(hr::employee::Entity::find().count(&hr_db).await.unwrap(), 0);
}

#[tokio::test]
async fn canonical_order_allows_dependents_in_any_sequence() {
    let harness = SeedHarness::new();
    let orchestrator = harness.orchestrator();

    orchestrator.run_one(Domain::Auth).await.expect("auth seeds first");
    // hr, inventory, marketing carry no fixture dependency on each other.
    orchestrator
        .run_one(Domain::Marketing)
        .await
        .expect("marketing after auth");
    orchestrator
        .run_one(Domain::Inventory)
        .await
        .expect("inventory after auth");
    orchestrator.run_one(Domain::Hr).await.expect("hr after auth");
}

#[tokio::test]
async fn production_guard_blocks_run_all_before_any_work() {
    let harness = SeedHarness::with_environment("production");

    let err = harness
        .orchestrator()
        .run_all()
        .await
        .expect_err("production guard must trip");
    assert_matches!(err, SeedError::ProductionGuard(env) if env == "production");

    // Guard fires before any connection opens: no store file exists.
    for domain in Domain::ALL {
        assert!(
            !harness.store_path(domain).exists(),
            "{domain} store must not be created under the production guard"
        );
    }
}

#[tokio::test]
async fn production_guard_applies_to_single_domains_too() {
    let harness = SeedHarness::with_environment("PRODUCTION");

    let err = harness
        .orchestrator()
        .run_one(Domain::Auth)
        .await
        .expect_err("guard holds regardless of target domain");
    assert_matches!(err, SeedError::ProductionGuard(_));
    assert!(!harness.store_path(Domain::Auth).exists());
}

#[tokio::test]
async fn reseeding_resolves_against_stable_identifiers() {
    let harness = SeedHarness::new();
    let orchestrator = harness.orchestrator();
    orchestrator.run_all().await.expect("first run");

    let auth_db = harness.connect(Domain::Auth).await;
    let clinic = auth::clinic::Entity::find_by_id("clinic-001")
        .one(&auth_db)
        .await
        .unwrap()
        .expect("demo clinic exists under its stable literal id");
    assert_eq!(clinic.name, "Bright Smile Dental Clinic");

    let inv_db = harness.connect(Domain::Inventory).await;
    assert!(inventory::product::Entity::find_by_id("prod-001")
        .one(&inv_db)
        .await
        .unwrap()
        .is_some());
}
