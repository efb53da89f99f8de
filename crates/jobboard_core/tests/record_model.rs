use jobboard_core::{Company, CompanyInput, Job, JobInput};

#[test]
fn job_serialization_uses_camel_case_wire_fields() {
    let mut input = JobInput::new("Frontend Developer", "React work", "3000 USD", "1");
    input.technologies = vec!["React".to_string(), "Redux".to_string()];
    input.location = Some("Tashkent".to_string());
    let job = input.into_record("1".to_string());

    let json = serde_json::to_value(&job).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["companyId"], "1");
    assert_eq!(json["technologies"][1], "Redux");
    assert_eq!(json["location"], "Tashkent");
    assert!(json.get("phone").is_none());
    assert!(json.get("company_id").is_none());

    let decoded: Job = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, job);
}

#[test]
fn company_deserializes_with_optional_fields_missing() {
    let company: Company = serde_json::from_str(r#"{"id":"7","title":"Apple"}"#).unwrap();
    assert_eq!(company, Company::with_id("7", "Apple"));
}

#[test]
fn to_input_drops_only_the_id() {
    let mut input = CompanyInput::new("Google");
    input.image = Some("logo.png".to_string());
    let company = input.clone().into_record("3".to_string());

    assert_eq!(company.id, "3");
    assert_eq!(company.to_input(), input);
}
