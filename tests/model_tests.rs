use userbook::core::password::{
    PasswordEncoder, PlaintextEncoder, Sha256Encoder, encoder_for,
};
use userbook::models::field::Field;
use userbook::models::user::UserRecord;

#[test]
fn value_at_limit_is_kept() {
    let name = "a".repeat(49);
    let (kept, cut) = Field::FirstName.clip(&name);
    assert_eq!(kept, name);
    assert!(!cut);
}

#[test]
fn value_over_limit_is_truncated() {
    let (kept, cut) = Field::Password.clip("0123456789abcdefghijXYZ");
    assert_eq!(kept, "0123456789abcdefghi");
    assert_eq!(kept.chars().count(), 19);
    assert!(cut);
}

#[test]
fn truncation_never_splits_a_character() {
    let name = "é".repeat(60);
    let (kept, cut) = Field::LastName.clip(&name);
    assert!(cut);
    assert_eq!(kept.chars().count(), 49);
    assert!(kept.chars().all(|c| c == 'é'));
}

#[test]
fn new_truncates_overlong_fields() {
    let long_email = format!("{}@example.com", "x".repeat(200));
    let u = UserRecord::new("Ada", "Lovelace", None, &long_email, "pw");
    assert_eq!(u.email.chars().count(), Field::Email.max_len());
    assert_eq!(u.first_name, "Ada");
}

#[test]
fn password_is_clipped_before_encoding() {
    let u = UserRecord::new("Ada", "Lovelace", None, "ada@x.com", &"p".repeat(30))
        .encode_password(&Sha256Encoder);
    assert_eq!(u.password, Sha256Encoder.encode(&"p".repeat(19)));
    assert_eq!(u.password.len(), 64);
}

#[test]
fn display_name_joins_first_and_last() {
    let u = UserRecord::new("Alan", "Turing", None, "alan@x.com", "pw2");
    assert_eq!(u.display_name(), "Alan Turing");
}

#[test]
fn sha256_matches_known_digest() {
    assert_eq!(
        Sha256Encoder.encode("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn plaintext_is_identity() {
    assert_eq!(PlaintextEncoder.encode("pw1"), "pw1");
}

#[test]
fn encoder_lookup_by_name() {
    assert_eq!(encoder_for("sha256").unwrap().name(), "sha256");
    assert_eq!(encoder_for("plaintext").unwrap().name(), "plaintext");
    assert!(encoder_for("rot13").is_err());
}
