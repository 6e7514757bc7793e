use propcrm_core::model::vocabulary::{decode_strict, find_by_identity};
use propcrm_core::{
    entries, lookup, AccountType, AssignmentType, BeneficiaryType, CustomerType, FrequencyCode,
    InvoiceFrequency, LeadStatus, LeadType, PaymentMethod, PortfolioAssignmentType,
    PortfolioType, SyncStatus, TagNamespace, TransactionLevel, Vocabulary, VocabularyError,
    VocabularyKind,
};
use std::collections::HashSet;
use std::thread;

fn assert_contract<V: Vocabulary + std::fmt::Debug>() {
    let mut codes = HashSet::new();
    let mut identities = HashSet::new();
    for variant in V::ALL {
        assert!(codes.insert(variant.code().to_ascii_lowercase()), "{} code clash", V::NAME);
        assert!(identities.insert(variant.identity()), "{} identity clash", V::NAME);
        assert_eq!(decode_strict::<V>(variant.code()), Ok(*variant));
        assert_eq!(find_by_identity::<V>(variant.identity()), Some(*variant));
        assert!(!variant.display_label().trim().is_empty());
        assert_eq!(variant.display_label(), variant.display_label());
        assert!(variant
            .identity()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '_'));
    }
    assert!(matches!(
        decode_strict::<V>(" "),
        Err(VocabularyError::EmptyCode { vocabulary }) if vocabulary == V::NAME
    ));
}

#[test]
fn every_vocabulary_honours_the_contract() {
    assert_contract::<BeneficiaryType>();
    assert_contract::<PaymentMethod>();
    assert_contract::<AccountType>();
    assert_contract::<FrequencyCode>();
    assert_contract::<InvoiceFrequency>();
    assert_contract::<LeadType>();
    assert_contract::<LeadStatus>();
    assert_contract::<TransactionLevel>();
    assert_contract::<PortfolioType>();
    assert_contract::<PortfolioAssignmentType>();
    assert_contract::<SyncStatus>();
    assert_contract::<CustomerType>();
    assert_contract::<AssignmentType>();
    assert_contract::<TagNamespace>();
}

#[test]
fn documented_decodes() {
    assert_eq!(FrequencyCode::from_code("2W"), Ok(FrequencyCode::BiWeekly));
    assert_eq!(FrequencyCode::from_code("O"), Ok(FrequencyCode::OneTime));
    assert_eq!(
        BeneficiaryType::from_payprop_code("agency"),
        BeneficiaryType::Agency
    );
    assert_eq!(
        PaymentMethod::from_payprop_code(Some("xyz")),
        PaymentMethod::Local
    );
    assert_eq!(LeadType::from_code(None), LeadType::Business);
    assert_eq!(LeadType::from_code(Some("")), LeadType::Business);
    assert!("not-a-type".parse::<BeneficiaryType>().is_err());
}

#[test]
fn serde_uses_identity_names() {
    assert_eq!(
        serde_json::to_string(&BeneficiaryType::GlobalBeneficiary).unwrap(),
        "\"GLOBAL_BENEFICIARY\""
    );
    assert_eq!(
        serde_json::from_str::<FrequencyCode>("\"BI_WEEKLY\"").unwrap(),
        FrequencyCode::BiWeekly
    );
    assert_eq!(
        serde_json::to_string(&InvoiceFrequency::OneTime).unwrap(),
        "\"one_time\""
    );
}

#[test]
fn catalogue_entries_serialize_for_consumers() {
    let entry = lookup(VocabularyKind::FrequencyCode, "2w").unwrap();
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["identity"], "BI_WEEKLY");
    assert_eq!(json["code"], "2W");
    assert_eq!(json["label"], "Every 2 weeks");

    assert_eq!(
        entries(VocabularyKind::LeadStatus).len(),
        LeadStatus::ALL.len()
    );
}

#[test]
fn decoding_is_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                for round in 0..200 {
                    let raw = if (worker + round) % 2 == 0 { "agency" } else { "bogus" };
                    let decoded = BeneficiaryType::from_payprop_code(raw);
                    assert!(
                        decoded == BeneficiaryType::Agency || decoded == BeneficiaryType::FALLBACK
                    );
                    assert_eq!(
                        FrequencyCode::from_code("4W"),
                        Ok(FrequencyCode::FourWeekly)
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
