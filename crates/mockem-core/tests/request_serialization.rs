use mockem_core::{Catalog, RawRequest};

#[test]
fn raw_request_uses_camel_case_fields() {
    let json = r#"{
        "category": "sales-crm",
        "platform": "salesforce",
        "schemas": ["companies", "contacts"],
        "rowCount": 5
    }"#;

    let request: RawRequest = serde_json::from_str(json).expect("parse request");
    assert_eq!(request.category, "sales-crm");
    assert_eq!(request.platform, "salesforce");
    assert_eq!(request.schemas, vec!["companies", "contacts"]);
    assert_eq!(request.row_count, 5);
    assert_eq!(request.seed, None);
    assert_eq!(request.generated_at, None);

    let value = serde_json::to_value(&request).expect("serialize request");
    assert!(value.get("rowCount").is_some());
    assert!(value.get("seed").is_none());
}

#[test]
fn catalog_serializes_relationships_by_schema_name() {
    let catalog = Catalog::builtin();
    let value = serde_json::to_value(&catalog).expect("serialize catalog");

    let sales = &value["categories"][0];
    assert_eq!(sales["category"], "sales-crm");
    assert_eq!(sales["title"], "Sales & CRM");
    assert_eq!(
        sales["relationships"]["opportunities"][1],
        serde_json::json!({ "schema": "contacts", "field": "contact_id" })
    );
    assert_eq!(value["platforms"][3], "sap");
}
