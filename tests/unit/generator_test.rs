// Property tests for the value generators.
//
// The generators feed every scenario in the suite; these checks pin down
// length, alphabet membership, zero-padding and the 50-character holder
// cut, plus seed determinism so failures replay exactly.

use chrono::NaiveDate;
use proptest::prelude::*;
use travelpay_qa::data::generators::{
    self, truncate_to, Calendar, ValueGen, HOLDER_MAX_LEN,
};

const SYMBOLS: &str = "!@#$%^&*()_+={}[]|:;<>?,./";
const CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдеёжзийклмнопрстуфхцчшщъыьэюя";

proptest! {
    #[test]
    fn digits_have_exact_length_and_alphabet(seed in any::<u64>(), len in 0usize..64) {
        let mut gen = ValueGen::with_seed(seed);
        let value = gen.digits(len);
        prop_assert_eq!(value.chars().count(), len);
        prop_assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn letters_are_uppercase_latin(seed in any::<u64>(), len in 0usize..64) {
        let mut gen = ValueGen::with_seed(seed);
        let value = gen.letters(len);
        prop_assert_eq!(value.chars().count(), len);
        prop_assert!(value.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn symbols_stay_in_their_alphabet(seed in any::<u64>(), len in 1usize..32) {
        let mut gen = ValueGen::with_seed(seed);
        let value = gen.symbols(len);
        prop_assert_eq!(value.chars().count(), len);
        prop_assert!(value.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn cyrillic_stays_in_its_alphabet(seed in any::<u64>(), len in 1usize..32) {
        let mut gen = ValueGen::with_seed(seed);
        let value = gen.cyrillic(len);
        prop_assert_eq!(value.chars().count(), len);
        prop_assert!(value.chars().all(|c| CYRILLIC.contains(c)));
    }

    #[test]
    fn valid_month_is_zero_padded_and_in_range(seed in any::<u64>()) {
        let mut gen = ValueGen::with_seed(seed);
        let month = gen.valid_month();
        prop_assert_eq!(month.len(), 2);
        let value: u32 = month.parse().unwrap();
        prop_assert!((1..=12).contains(&value));
    }

    #[test]
    fn holder_never_exceeds_fifty_chars(
        seed in any::<u64>(),
        parts in 1usize..12,
        with_last in any::<bool>(),
    ) {
        let mut gen = ValueGen::with_seed(seed);
        let holder = gen.holder(parts, " ", with_last);
        prop_assert!(holder.chars().count() <= HOLDER_MAX_LEN);
        prop_assert!(!holder.is_empty());
        prop_assert!(holder.chars().all(|c| c.is_ascii_uppercase() || c == ' '));
    }

    #[test]
    fn same_seed_reproduces_the_sequence(seed in any::<u64>()) {
        let mut a = ValueGen::with_seed(seed);
        let mut b = ValueGen::with_seed(seed);
        prop_assert_eq!(a.digits(16), b.digits(16));
        prop_assert_eq!(a.letters(8), b.letters(8));
        prop_assert_eq!(a.valid_holder(), b.valid_holder());
        prop_assert_eq!(a.valid_month(), b.valid_month());
    }

    #[test]
    fn truncate_is_a_hard_character_cut(value in "\\PC{0,80}", max in 0usize..60) {
        let cut = truncate_to(&value, max);
        prop_assert!(cut.chars().count() <= max);
        let expected: String = value.chars().take(max).collect();
        prop_assert_eq!(cut, expected);
    }

    #[test]
    fn year_offset_is_two_digits(delta in -30i32..30) {
        let calendar = Calendar::fixed(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
        let year = calendar.year_offset(delta);
        prop_assert_eq!(year.len(), 2);
        prop_assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn year_offset_boundaries_around_acceptance_window() {
    let calendar = Calendar::fixed(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap());
    assert_eq!(calendar.year_offset(0), "26");
    assert_eq!(calendar.year_offset(5), "31");
    assert_eq!(calendar.year_offset(6), "32");
    assert_eq!(calendar.year_offset(-1), "25");
}

#[test]
fn previous_month_wraps_across_january() {
    let january = Calendar::fixed(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
    assert_eq!(january.previous_month(), "12");
    let august = Calendar::fixed(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap());
    assert_eq!(august.previous_month(), "07");
}

#[test]
fn current_month_is_zero_padded() {
    let march = Calendar::fixed(NaiveDate::from_ymd_opt(2027, 3, 1).unwrap());
    assert_eq!(march.current_month(), "03");
}

#[test]
fn fixed_month_strings() {
    assert_eq!(Calendar::MONTH_01, "01");
    assert_eq!(Calendar::MONTH_12, "12");
    assert_eq!(Calendar::MONTH_00, "00");
    assert_eq!(Calendar::MONTH_13, "13");
}

#[test]
fn whitespace_and_empty_values() {
    assert_eq!(generators::space_value(), "   ");
    assert_eq!(generators::empty_value(), "");
}

#[test]
fn cyrillic_holder_is_two_cyrillic_words() {
    let mut gen = ValueGen::with_seed(11);
    let holder = gen.holder_cyrillic();
    let words: Vec<&str> = holder.split(' ').collect();
    assert_eq!(words.len(), 2);
    assert!(holder.chars().all(|c| c == ' ' || CYRILLIC.contains(c)));
}

#[test]
fn one_word_holder_has_no_space() {
    let mut gen = ValueGen::with_seed(12);
    assert!(!gen.holder_one_word().contains(' '));
}

#[test]
fn valid_holder_is_two_words() {
    let mut gen = ValueGen::with_seed(13);
    let holder = gen.valid_holder();
    assert_eq!(holder.split(' ').count(), 2);
}
