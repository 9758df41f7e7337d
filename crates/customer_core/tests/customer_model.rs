use customer_core::{Customer, CustomerError};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(customer: &Customer) -> u64 {
    let mut hasher = DefaultHasher::new();
    customer.hash(&mut hasher);
    hasher.finish()
}

fn michael() -> Customer {
    let mut customer = Customer::new();
    customer.set_legal_identifier("12345678Z");
    customer.set_name("Michael");
    customer.set_last_name("Jordan");
    customer.set_email("michaeljordan@mail.com");
    customer.set_phone_number("611222333");
    customer
}

#[test]
fn new_customer_is_transient_and_empty() {
    let customer = Customer::new();

    assert_eq!(customer.id(), None);
    assert_eq!(customer.legal_identifier(), None);
    assert_eq!(customer.name(), None);
    assert_eq!(customer.last_name(), None);
    assert_eq!(customer.email(), None);
    assert_eq!(customer.phone_number(), None);
}

#[test]
fn identical_fields_are_equal_and_hash_equally() {
    let mut left = michael();
    let mut right = michael();
    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));

    left.set_id(1000).unwrap();
    right.set_id(1000).unwrap();
    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn equality_covers_id_and_every_field() {
    let base = michael();

    let mut with_id = michael();
    with_id.set_id(1).unwrap();
    assert_ne!(base, with_id);

    let mut other_phone = michael();
    other_phone.set_phone_number("600000000");
    assert_ne!(base, other_phone);

    let mut missing_email = Customer::new();
    missing_email.set_legal_identifier("12345678Z");
    missing_email.set_name("Michael");
    missing_email.set_last_name("Jordan");
    missing_email.set_phone_number("611222333");
    assert_ne!(base, missing_email);
}

#[test]
fn set_id_is_one_shot_for_any_value() {
    let mut customer = michael();
    customer.set_id(1000).unwrap();

    for candidate in [1000, 1001, 0, -1] {
        let err = customer.set_id(candidate).unwrap_err();
        assert_eq!(err, CustomerError::IdAlreadyAssigned { current: 1000 });
    }
    assert_eq!(customer.id(), Some(1000));
    assert!(customer
        .set_id(5)
        .unwrap_err()
        .to_string()
        .contains("invalid operation"));
}

#[test]
fn setters_overwrite_previous_values() {
    let mut customer = michael();
    customer.set_name("Scottie");
    customer.set_last_name("Pippen");

    assert_eq!(customer.name(), Some("Scottie"));
    assert_eq!(customer.last_name(), Some("Pippen"));
}

#[test]
fn serialization_keeps_all_fields() {
    let mut customer = michael();
    customer.set_id(1000).unwrap();

    let json = serde_json::to_value(&customer).unwrap();
    assert_eq!(json["id"], 1000);
    assert_eq!(json["legal_identifier"], "12345678Z");
    assert_eq!(json["last_name"], "Jordan");
    assert_eq!(json["phone_number"], "611222333");

    let decoded: Customer = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, customer);
}

#[test]
fn display_mirrors_record_layout() {
    let mut customer = michael();
    customer.set_id(1000).unwrap();

    assert_eq!(
        customer.to_string(),
        "Customer [id=1000, legalIdentifier=12345678Z, name=Michael, lastName=Jordan, \
         email=michaeljordan@mail.com, phoneNumber=611222333]"
    );
}
