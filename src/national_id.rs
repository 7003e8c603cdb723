use std::fmt;

/// Gender category encoded in the first digit of the national ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

/// Birth month/day and gender derived from a 13-digit national ID (CNP).
///
/// The parser reads only the digits it needs: first digit parity for gender,
/// digits 4-5 for birth month, digits 6-7 for birth day. The birth year and
/// the century indicator are never consulted, so the gender inference is
/// approximate for foreign-registered or pre-1900 identifiers and the
/// birthday is a year-agnostic annual match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NationalId {
    pub gender: Gender,
    pub birth_month: u32,
    pub birth_day: u32,
}

/// Why a national ID string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NationalIdError {
    /// Not exactly 13 characters long.
    BadLength(usize),
    /// Contains a character outside ASCII 0-9.
    NonDigit,
    /// Month or day digit group outside the calendar range.
    BadDate { month: u32, day: u32 },
}

impl fmt::Display for NationalIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NationalIdError::BadLength(len) => {
                write!(f, "expected 13 digits, got {} characters", len)
            }
            NationalIdError::NonDigit => write!(f, "contains a non-digit character"),
            NationalIdError::BadDate { month, day } => {
                write!(f, "impossible birth date: month {}, day {}", month, day)
            }
        }
    }
}

impl std::error::Error for NationalIdError {}

impl NationalId {
    pub fn parse(raw: &str) -> Result<Self, NationalIdError> {
        let raw = raw.trim();
        if raw.len() != 13 {
            return Err(NationalIdError::BadLength(raw.len()));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NationalIdError::NonDigit);
        }

        let digits: Vec<u32> = raw.bytes().map(|b| (b - b'0') as u32).collect();

        let gender = if digits[0] % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        };

        let birth_month = digits[3] * 10 + digits[4];
        let birth_day = digits[5] * 10 + digits[6];

        if !(1..=12).contains(&birth_month) || !(1..=31).contains(&birth_day) {
            return Err(NationalIdError::BadDate {
                month: birth_month,
                day: birth_day,
            });
        }

        Ok(Self {
            gender,
            birth_month,
            birth_day,
        })
    }
}
