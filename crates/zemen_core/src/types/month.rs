//! Ethiopian month enumeration.
//!
//! The Ethiopian calendar has twelve 30-day months followed by Pagume,
//! a short intercalary month of 5 days (6 in leap years).

use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// The thirteen months of the Ethiopian calendar.
///
/// Carries the fixed English transliteration and Ge'ez-script name for
/// each month, with 1-indexed numbering matching the calendar.
///
/// # Examples
///
/// ```
/// use zemen_core::types::Month;
///
/// let meskerem = Month::Meskerem;
/// assert_eq!(meskerem.number(), 1);
/// assert_eq!(meskerem.name(), "Meskerem");
///
/// let pagume = Month::from_number(13).unwrap();
/// assert_eq!(pagume.name(), "Pagume");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    /// First month (መስከረም).
    Meskerem,
    /// Second month (ጥቅምት).
    Tikimit,
    /// Third month (ህዳር).
    Hidar,
    /// Fourth month (ታህሳስ).
    Tahesas,
    /// Fifth month (ጥር).
    Tir,
    /// Sixth month (የካቲት).
    Yekatit,
    /// Seventh month (መጋቢት).
    Megabit,
    /// Eighth month (ሚያዝያ).
    Miazia,
    /// Ninth month (ግንቦት).
    Genbot,
    /// Tenth month (ሰኔ).
    Sene,
    /// Eleventh month (ሐምሌ).
    Hamle,
    /// Twelfth month (ነሐሴ).
    Nehase,
    /// Thirteenth, intercalary month (ጳጉሜ); 5 days, 6 in leap years.
    Pagume,
}

impl Month {
    /// Returns the English transliteration of the month name.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::Month;
    ///
    /// assert_eq!(Month::Meskerem.name(), "Meskerem");
    /// assert_eq!(Month::Pagume.name(), "Pagume");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Month::Meskerem => "Meskerem",
            Month::Tikimit => "Tikimit",
            Month::Hidar => "Hidar",
            Month::Tahesas => "Tahesas",
            Month::Tir => "Tir",
            Month::Yekatit => "Yekatit",
            Month::Megabit => "Megabit",
            Month::Miazia => "Miazia",
            Month::Genbot => "Genbot",
            Month::Sene => "Sene",
            Month::Hamle => "Hamle",
            Month::Nehase => "Nehase",
            Month::Pagume => "Pagume",
        }
    }

    /// Returns the month name in Ge'ez script.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::Month;
    ///
    /// assert_eq!(Month::Meskerem.amharic_name(), "መስከረም");
    /// ```
    pub fn amharic_name(&self) -> &'static str {
        match self {
            Month::Meskerem => "መስከረም",
            Month::Tikimit => "ጥቅምት",
            Month::Hidar => "ህዳር",
            Month::Tahesas => "ታህሳስ",
            Month::Tir => "ጥር",
            Month::Yekatit => "የካቲት",
            Month::Megabit => "መጋቢት",
            Month::Miazia => "ሚያዝያ",
            Month::Genbot => "ግንቦት",
            Month::Sene => "ሰኔ",
            Month::Hamle => "ሐምሌ",
            Month::Nehase => "ነሐሴ",
            Month::Pagume => "ጳጉሜ",
        }
    }

    /// Returns the 1-indexed month number (1 = Meskerem, 13 = Pagume).
    #[inline]
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Looks up a month by its 1-indexed number.
    ///
    /// Returns `None` for numbers outside 1-13.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::Month;
    ///
    /// assert_eq!(Month::from_number(1), Some(Month::Meskerem));
    /// assert_eq!(Month::from_number(13), Some(Month::Pagume));
    /// assert_eq!(Month::from_number(0), None);
    /// assert_eq!(Month::from_number(14), None);
    /// ```
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Month::Meskerem),
            2 => Some(Month::Tikimit),
            3 => Some(Month::Hidar),
            4 => Some(Month::Tahesas),
            5 => Some(Month::Tir),
            6 => Some(Month::Yekatit),
            7 => Some(Month::Megabit),
            8 => Some(Month::Miazia),
            9 => Some(Month::Genbot),
            10 => Some(Month::Sene),
            11 => Some(Month::Hamle),
            12 => Some(Month::Nehase),
            13 => Some(Month::Pagume),
            _ => None,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = DateError;

    /// Parses a month from its English transliteration (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meskerem" => Ok(Month::Meskerem),
            "tikimit" => Ok(Month::Tikimit),
            "hidar" => Ok(Month::Hidar),
            "tahesas" => Ok(Month::Tahesas),
            "tir" => Ok(Month::Tir),
            "yekatit" => Ok(Month::Yekatit),
            "megabit" => Ok(Month::Megabit),
            "miazia" => Ok(Month::Miazia),
            "genbot" => Ok(Month::Genbot),
            "sene" => Ok(Month::Sene),
            "hamle" => Ok(Month::Hamle),
            "nehase" => Ok(Month::Nehase),
            "pagume" => Ok(Month::Pagume),
            _ => Err(DateError::Parse(format!("unknown Ethiopian month: {}", s))),
        }
    }
}
