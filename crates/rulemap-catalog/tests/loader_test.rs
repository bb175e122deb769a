use std::fs;

use rulemap_catalog::builtin::builtin_policy_documents;
use rulemap_catalog::{load_catalog, load_policy_documents, KeyCatalog};
use rulemap_core::errors::CatalogError;

#[test]
fn catalog_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[keys]]
identifier = "loan.amount"
label = "Loan Amount"
group = "loan"

[[keys]]
identifier = "loan.tenure_months"
label = "Loan Tenure Months"
group = "loan"

[synonyms]
"loan.amount" = ["ticket size", "sanction amount"]
"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(
        catalog.identifiers().collect::<Vec<_>>(),
        ["loan.amount", "loan.tenure_months"]
    );
    assert_eq!(catalog.get("loan.amount").unwrap().synonyms.len(), 2);
    assert_eq!(catalog.by_group("loan").count(), 2);
}

#[test]
fn missing_catalog_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::ReadFailed { .. }));
}

#[test]
fn policy_dir_is_read_in_lexical_order_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b_income.md"), "income policy").unwrap();
    fs::write(dir.path().join("a_bureau.txt"), "bureau policy").unwrap();
    fs::write(dir.path().join("c_notes.json"), "{}").unwrap();
    fs::create_dir(dir.path().join("d_subdir.md")).unwrap();

    let docs = load_policy_documents(dir.path()).unwrap();
    assert_eq!(docs, ["bureau policy", "income policy"]);
}

#[test]
fn missing_policy_dir_is_read_error() {
    let err = load_policy_documents(std::path::Path::new("/no/such/policy/dir")).unwrap_err();
    assert!(matches!(err, CatalogError::ReadFailed { .. }));
}

#[test]
fn builtin_catalog_covers_the_sample_model() {
    let catalog = KeyCatalog::builtin();
    for id in [
        "bureau.score",
        "business.vintage_in_years",
        "primary_applicant.age",
        "primary_applicant.monthly_income",
        "bureau.dpd",
        "foir",
    ] {
        assert!(catalog.contains(id), "{id} missing");
    }
    assert!(catalog
        .get("bureau.score")
        .unwrap()
        .synonyms
        .iter()
        .any(|s| s == "cibil"));
    assert!(builtin_policy_documents()[0].starts_with("## Credit Score Requirements"));
}
