use propcrm_core::db::open_db_in_memory;
use propcrm_core::{
    AccountType, Beneficiary, BeneficiaryListQuery, BeneficiaryRepository, BeneficiaryType,
    BeneficiaryValidationError, PaymentMethod, RepoError, SqliteBeneficiaryRepository, SyncStatus,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn create_and_get_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let mut beneficiary = Beneficiary::new("Harbour Utilities", BeneficiaryType::GlobalBeneficiary);
    beneficiary.payment_method = PaymentMethod::International;
    beneficiary.account_type = AccountType::Business;
    beneficiary.email = Some("billing@harbour.example".to_string());
    let id = repo.create_beneficiary(&beneficiary).unwrap();

    let loaded = repo.get_beneficiary(id).unwrap().unwrap();
    assert_eq!(loaded, beneficiary);
}

#[test]
fn beneficiary_type_is_stored_as_identity_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let beneficiary = Beneficiary::new("Deposit Scheme", BeneficiaryType::DepositAccount);
    repo.create_beneficiary(&beneficiary).unwrap();

    assert_eq!(
        stored_type(&conn, beneficiary.uuid),
        Some("DEPOSIT_ACCOUNT".to_string())
    );
}

#[test]
fn unset_type_round_trips_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let mut beneficiary = Beneficiary::new("Unclassified", BeneficiaryType::Beneficiary);
    beneficiary.beneficiary_type = None;
    repo.create_beneficiary(&beneficiary).unwrap();

    let loaded = repo.get_beneficiary(beneficiary.uuid).unwrap().unwrap();
    assert_eq!(loaded.beneficiary_type, None);
}

#[test]
fn unreadable_stored_type_degrades_and_blank_reads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let garbage = Beneficiary::new("Garbage", BeneficiaryType::Agency);
    let blank = Beneficiary::new("Blank", BeneficiaryType::Agency);
    repo.create_beneficiary(&garbage).unwrap();
    repo.create_beneficiary(&blank).unwrap();
    overwrite_type(&conn, garbage.uuid, "not-a-real-value");
    overwrite_type(&conn, blank.uuid, "   ");

    let loaded = repo.get_beneficiary(garbage.uuid).unwrap().unwrap();
    assert_eq!(loaded.beneficiary_type, Some(BeneficiaryType::Beneficiary));
    let loaded = repo.get_beneficiary(blank.uuid).unwrap().unwrap();
    assert_eq!(loaded.beneficiary_type, None);
}

#[test]
fn corrupt_strict_column_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let beneficiary = Beneficiary::new("Owner", BeneficiaryType::Beneficiary);
    repo.create_beneficiary(&beneficiary).unwrap();
    conn.execute(
        "UPDATE beneficiaries SET payment_method = 'BACS' WHERE uuid = ?1;",
        [beneficiary.uuid.to_string()],
    )
    .unwrap();

    let err = repo.get_beneficiary(beneficiary.uuid).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("payment_method")));
}

#[test]
fn update_changes_fields_and_missing_row_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let mut beneficiary = Beneficiary::new("Draft", BeneficiaryType::Beneficiary);
    repo.create_beneficiary(&beneficiary).unwrap();

    beneficiary.name = "Final".to_string();
    beneficiary.beneficiary_type = Some(BeneficiaryType::PropertyAccount);
    beneficiary.is_active = false;
    repo.update_beneficiary(&beneficiary).unwrap();

    let loaded = repo.get_beneficiary(beneficiary.uuid).unwrap().unwrap();
    assert_eq!(loaded.name, "Final");
    assert_eq!(
        loaded.beneficiary_type,
        Some(BeneficiaryType::PropertyAccount)
    );
    assert!(!loaded.is_active);

    let ghost = Beneficiary::new("Ghost", BeneficiaryType::Beneficiary);
    assert!(matches!(
        repo.update_beneficiary(&ghost),
        Err(RepoError::NotFound(id)) if id == ghost.uuid
    ));
}

#[test]
fn writes_are_validated_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let blank_name = Beneficiary::new("   ", BeneficiaryType::Beneficiary);
    assert!(matches!(
        repo.create_beneficiary(&blank_name),
        Err(RepoError::Validation(BeneficiaryValidationError::EmptyName))
    ));

    let mut blank_id = Beneficiary::new("Owner", BeneficiaryType::Beneficiary);
    blank_id.payprop_id = Some(" ".to_string());
    assert!(matches!(
        repo.create_beneficiary(&blank_id),
        Err(RepoError::Validation(BeneficiaryValidationError::BlankPayPropId))
    ));
}

#[test]
fn find_by_payprop_id_matches_linked_rows_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let mut linked = Beneficiary::new("Linked", BeneficiaryType::Beneficiary);
    linked.payprop_id = Some("oRZQgRxmXW".to_string());
    repo.create_beneficiary(&linked).unwrap();
    repo.create_beneficiary(&Beneficiary::new("Local only", BeneficiaryType::Beneficiary))
        .unwrap();

    let found = repo.find_by_payprop_id(" oRZQgRxmXW ").unwrap().unwrap();
    assert_eq!(found.uuid, linked.uuid);
    assert!(repo.find_by_payprop_id("missing").unwrap().is_none());
    assert!(repo.find_by_payprop_id("").unwrap().is_none());
}

#[test]
fn list_filters_orders_and_pages() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    for name in ["charlie", "Alpha", "bravo"] {
        repo.create_beneficiary(&Beneficiary::new(name, BeneficiaryType::Beneficiary))
            .unwrap();
    }
    repo.create_beneficiary(&Beneficiary::new("Agency Fees", BeneficiaryType::Agency))
        .unwrap();
    let mut retired = Beneficiary::new("Retired", BeneficiaryType::Beneficiary);
    retired.is_active = false;
    repo.create_beneficiary(&retired).unwrap();

    let payees = repo
        .list_beneficiaries(&BeneficiaryListQuery {
            beneficiary_type: Some(BeneficiaryType::Beneficiary),
            ..BeneficiaryListQuery::default()
        })
        .unwrap();
    let names: Vec<_> = payees.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "bravo", "charlie"]);

    let with_inactive = repo
        .list_beneficiaries(&BeneficiaryListQuery {
            include_inactive: true,
            ..BeneficiaryListQuery::default()
        })
        .unwrap();
    assert_eq!(with_inactive.len(), 5);

    let page = repo
        .list_beneficiaries(&BeneficiaryListQuery {
            limit: Some(2),
            offset: 1,
            ..BeneficiaryListQuery::default()
        })
        .unwrap();
    let names: Vec<_> = page.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "bravo"]);

    let skipped = repo
        .list_beneficiaries(&BeneficiaryListQuery {
            offset: 3,
            ..BeneficiaryListQuery::default()
        })
        .unwrap();
    assert_eq!(skipped.len(), 1);
}

#[test]
fn type_filter_matches_what_rows_read_back_as() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let lowercase = Beneficiary::new("Lowercase Agency", BeneficiaryType::Agency);
    let padded = Beneficiary::new("Padded Holding", BeneficiaryType::GlobalBeneficiary);
    let unreadable = Beneficiary::new("Landlord Row", BeneficiaryType::Agency);
    let blank = Beneficiary::new("Blank Row", BeneficiaryType::Agency);
    let plain = Beneficiary::new("Plain Payee", BeneficiaryType::Beneficiary);
    for beneficiary in [&lowercase, &padded, &unreadable, &blank, &plain] {
        repo.create_beneficiary(beneficiary).unwrap();
    }
    overwrite_type(&conn, lowercase.uuid, "agency");
    overwrite_type(&conn, padded.uuid, "  global_beneficiary ");
    overwrite_type(&conn, unreadable.uuid, "landlord");
    overwrite_type(&conn, blank.uuid, "   ");

    let names_of = |kind| -> Vec<String> {
        repo.list_beneficiaries(&BeneficiaryListQuery {
            beneficiary_type: Some(kind),
            ..BeneficiaryListQuery::default()
        })
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect()
    };

    assert_eq!(names_of(BeneficiaryType::Agency), vec!["Lowercase Agency"]);
    assert_eq!(
        names_of(BeneficiaryType::GlobalBeneficiary),
        vec!["Padded Holding"]
    );
    assert_eq!(
        names_of(BeneficiaryType::Beneficiary),
        vec!["Landlord Row", "Plain Payee"]
    );

    for name in names_of(BeneficiaryType::Beneficiary) {
        let row = repo
            .list_beneficiaries(&BeneficiaryListQuery::default())
            .unwrap()
            .into_iter()
            .find(|b| b.name == name)
            .unwrap();
        assert_eq!(row.beneficiary_type, Some(BeneficiaryType::Beneficiary));
    }
    let blank_row = repo.get_beneficiary(blank.uuid).unwrap().unwrap();
    assert_eq!(blank_row.beneficiary_type, None);
}

#[test]
fn set_sync_status_updates_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBeneficiaryRepository::new(&conn);

    let beneficiary = Beneficiary::new("Owner", BeneficiaryType::Beneficiary);
    repo.create_beneficiary(&beneficiary).unwrap();
    repo.set_sync_status(beneficiary.uuid, SyncStatus::Manual).unwrap();

    let loaded = repo.get_beneficiary(beneficiary.uuid).unwrap().unwrap();
    assert_eq!(loaded.sync_status, SyncStatus::Manual);

    let filtered = repo
        .list_beneficiaries(&BeneficiaryListQuery {
            sync_status: Some(SyncStatus::Manual),
            ..BeneficiaryListQuery::default()
        })
        .unwrap();
    assert_eq!(filtered.len(), 1);

    assert!(matches!(
        repo.set_sync_status(Uuid::new_v4(), SyncStatus::Synced),
        Err(RepoError::NotFound(_))
    ));
}

fn stored_type(conn: &Connection, id: Uuid) -> Option<String> {
    conn.query_row(
        "SELECT beneficiary_type FROM beneficiaries WHERE uuid = ?1;",
        [id.to_string()],
        |row| row.get(0),
    )
    .unwrap()
}

fn overwrite_type(conn: &Connection, id: Uuid, value: &str) {
    conn.execute(
        "UPDATE beneficiaries SET beneficiary_type = ?1 WHERE uuid = ?2;",
        [value.to_string(), id.to_string()],
    )
    .unwrap();
}
