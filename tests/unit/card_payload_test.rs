// Unit tests for the card payload builder and its number formatting.

use travelpay_qa::data::card::{
    self, CardPayload, ALL_ZEROS_CARD, APPROVED_CARD, DECLINED_CARD,
};
use travelpay_qa::data::generators::truncate_to;

fn sample(number: &str) -> CardPayload {
    CardPayload::new(number, "08", "27", "JOHN SMITH", "123")
}

#[test]
fn builder_assembles_without_validation() {
    let card = CardPayload::new("not a number", "99", "xx", "", "абв");
    assert_eq!(card.number, "not a number");
    assert_eq!(card.month, "99");
    assert_eq!(card.year, "xx");
    assert_eq!(card.holder, "");
    assert_eq!(card.cvc, "абв");
}

#[test]
fn special_card_numbers_are_sixteen_digits() {
    for number in [APPROVED_CARD, DECLINED_CARD, ALL_ZEROS_CARD] {
        assert_eq!(number.len(), 16);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }
    assert_ne!(APPROVED_CARD, DECLINED_CARD);
}

#[test]
fn formatted_number_matches_the_input_mask() {
    assert_eq!(sample(APPROVED_CARD).formatted_number(), "1111 2222 3333 4444");
    assert_eq!(sample(DECLINED_CARD).formatted_number(), "5555 6666 7777 8888");
    assert_eq!(sample(ALL_ZEROS_CARD).formatted_number(), "0000 0000 0000 0000");
}

#[test]
fn formatted_number_keeps_short_and_empty_input() {
    assert_eq!(sample("").formatted_number(), "");
    assert_eq!(sample("12345").formatted_number(), "1234 5");
}

#[test]
fn with_formatted_number_only_changes_the_number() {
    let card = sample(APPROVED_CARD);
    let formatted = card.with_formatted_number();
    assert_eq!(formatted.number, "1111 2222 3333 4444");
    assert_eq!(formatted.month, card.month);
    assert_eq!(formatted.year, card.year);
    assert_eq!(formatted.holder, card.holder);
    assert_eq!(formatted.cvc, card.cvc);
}

#[test]
fn seventeen_digit_entry_masks_to_sixteen() {
    // What the card-number input shows after the mask drops the 17th digit.
    let typed = "12345678901234567";
    let expected = sample(&truncate_to(typed, 16)).formatted_number();
    assert_eq!(expected, "1234 5678 9012 3456");
}

#[test]
fn injection_payloads_keep_their_shape() {
    assert_eq!(card::sql_injection(), "Robert'); DROP TABLE users;--");
    assert_eq!(card::xss_injection(), "R<script>alert(1)</script>");
}

#[test]
fn payload_serializes_to_the_api_body() {
    let body = serde_json::to_value(sample(APPROVED_CARD)).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for field in ["number", "month", "year", "holder", "cvc"] {
        assert!(object.contains_key(field), "missing field {field}");
    }
}
