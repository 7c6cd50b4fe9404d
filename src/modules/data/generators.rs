//! Seedable value generators for form fields.
//!
//! Every randomized value comes from a single `StdRng` owned by [`ValueGen`],
//! so a failing run can be replayed by exporting `TEST_SEED` with the seed
//! printed in the log. Date-dependent helpers live on [`Calendar`], which
//! takes an injectable "today" instead of reading the clock at call sites.

use chrono::{Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const SYMBOL_ALPHABET: &str = "!@#$%^&*()_+={}[]|:;<>?,./";
const CYRILLIC_ALPHABET: &str =
    "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдеёжзийклмнопрстуфхцчшщъыьэюя";

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Christopher", "Karen", "Charles", "Lisa", "Daniel", "Nancy", "Matthew", "Betty",
    "Anthony", "Margaret", "Mark", "Sandra",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

const CYRILLIC_FIRST_NAMES: &[&str] = &[
    "Иван", "Мария", "Пётр", "Ольга", "Сергей", "Анна", "Алексей", "Елена", "Дмитрий", "Наталья",
];

const CYRILLIC_LAST_NAMES: &[&str] = &[
    "Иванов", "Петрова", "Смирнов", "Кузнецова", "Попов", "Соколова", "Лебедев", "Козлова",
];

/// Maximum length the holder field accepts before the input mask cuts off.
pub const HOLDER_MAX_LEN: usize = 50;

/// Hard cut at `max` characters, no word-boundary awareness.
///
/// Mirrors both the holder-name assembly rule and the client-side input
/// masks (card number 16, month/year 2, CVC 3, holder 50). Length-boundary
/// tests depend on this being a plain character cut.
pub fn truncate_to(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Seedable generator for field values, valid and deliberately invalid.
///
/// All outputs are strings so leading zeros and malformed content survive
/// intact on their way into a form field or a JSON body.
pub struct ValueGen {
    rng: StdRng,
    seed: u64,
}

impl ValueGen {
    /// Create a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator from `TEST_SEED`, falling back to entropy.
    ///
    /// The chosen seed is logged so any failure can be replayed.
    pub fn from_env(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rngs::OsRng.next_u64());
        tracing::info!(seed, "value generator seeded");
        Self::with_seed(seed)
    }

    /// The seed this generator was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn pick(&mut self, alphabet: &str, length: usize) -> String {
        let chars: Vec<char> = alphabet.chars().collect();
        (0..length)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    fn pick_word<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.gen_range(0..pool.len())]
    }

    /// `length` uppercase Latin letters.
    pub fn letters(&mut self, length: usize) -> String {
        self.pick("ABCDEFGHIJKLMNOPQRSTUVWXYZ", length)
    }

    /// `length` decimal digits, leading zeros preserved.
    pub fn digits(&mut self, length: usize) -> String {
        self.pick("0123456789", length)
    }

    /// `length` characters from the symbol alphabet.
    pub fn symbols(&mut self, length: usize) -> String {
        self.pick(SYMBOL_ALPHABET, length)
    }

    /// `length` characters from the Cyrillic alphabet.
    pub fn cyrillic(&mut self, length: usize) -> String {
        self.pick(CYRILLIC_ALPHABET, length)
    }

    /// Random month in `01..=12`, zero-padded.
    pub fn valid_month(&mut self) -> String {
        format!("{:02}", self.rng.gen_range(1..=12))
    }

    /// Synthetic holder name: `parts` first-name tokens joined by
    /// `separator`, optionally followed by a space and a last name.
    /// Uppercased and hard-cut at 50 characters after assembly.
    pub fn holder(&mut self, parts: usize, separator: &str, with_last_name: bool) -> String {
        let mut name = (0..parts)
            .map(|_| self.pick_word(FIRST_NAMES).to_uppercase())
            .collect::<Vec<_>>()
            .join(separator);
        if with_last_name {
            name.push(' ');
            name.push_str(&self.pick_word(LAST_NAMES).to_uppercase());
        }
        truncate_to(&name, HOLDER_MAX_LEN)
    }

    /// Two Latin words separated by a space.
    pub fn valid_holder(&mut self) -> String {
        self.holder(1, "", true)
    }

    /// Hyphenated first name plus last name.
    pub fn holder_hyphenated(&mut self) -> String {
        self.holder(2, "-", true)
    }

    /// First name with an apostrophe plus last name.
    pub fn holder_apostrophe(&mut self) -> String {
        self.holder(2, "'", true)
    }

    /// Three space-separated name parts plus last name.
    pub fn holder_multi_part(&mut self) -> String {
        self.holder(3, " ", true)
    }

    /// Minimal valid holder: two letters separated by a space.
    pub fn holder_two_letters_space(&mut self) -> String {
        let letters = self.letters(2);
        let mut chars = letters.chars();
        let (a, b) = (chars.next().unwrap_or('A'), chars.next().unwrap_or('B'));
        format!("{a} {b}")
    }

    /// Boundary above minimal: one letter, a space, then two letters.
    pub fn holder_three_letters_space(&mut self) -> String {
        let letters = self.letters(3);
        let mut chars = letters.chars();
        let a = chars.next().unwrap_or('A');
        let rest: String = chars.collect();
        format!("{a} {rest}")
    }

    /// Single Latin word, no space (invalid for the holder field).
    pub fn holder_one_word(&mut self) -> String {
        self.holder(1, "", false)
    }

    /// Cyrillic full name (invalid for the holder field).
    pub fn holder_cyrillic(&mut self) -> String {
        format!(
            "{} {}",
            self.pick_word(CYRILLIC_FIRST_NAMES),
            self.pick_word(CYRILLIC_LAST_NAMES)
        )
    }
}

/// The fixed 3-character space string used for whitespace-only input.
pub fn space_value() -> String {
    "   ".to_string()
}

/// Empty field value.
pub fn empty_value() -> String {
    String::new()
}

/// Date-dependent helpers with an injectable "today".
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    today: NaiveDate,
}

impl Calendar {
    pub const MONTH_01: &'static str = "01";
    pub const MONTH_12: &'static str = "12";
    pub const MONTH_00: &'static str = "00";
    pub const MONTH_13: &'static str = "13";

    /// Calendar pinned to the system date.
    pub fn today() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Calendar pinned to a fixed date, for deterministic tests.
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Last two digits of the current year plus `delta` (may be negative).
    pub fn year_offset(&self, delta: i32) -> String {
        let year = self.today.year() + delta;
        format!("{:02}", year.rem_euclid(100))
    }

    /// Current month, zero-padded.
    pub fn current_month(&self) -> String {
        format!("{:02}", self.today.month())
    }

    /// Month one month back, zero-padded; wraps December across January.
    pub fn previous_month(&self) -> String {
        let month = match self.today.month() {
            1 => 12,
            m => m - 1,
        };
        format!("{month:02}")
    }
}
