use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// The error taxonomy raised across the crate.
///
/// `OutOfRange`, `InvalidDate`, `InvalidEra`, `Overflow`, `Ambivalent` and `InitFailed`
/// are the calendar-facing kinds; the rest are raised by the shared numeric layer
/// ([`crate::common::math`]) that every calendar system is built on.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CalendarError {
    /// A numeric value (year, cycle, day-of-month, ...) is outside its declared range.
    OutOfRange,
    /// Fields together don't form a legal date (e.g. month 12 day 30 in a non-leap
    /// Persian year, or a leap-flag East Asian month in a non-leap year).
    InvalidDate,
    /// An era value is unknown to the calendar, or changing era is disallowed.
    InvalidEra,
    /// Arithmetic would exceed representable range or a documented arithmetic limit.
    Overflow,
    /// A request cannot be unambiguously satisfied.
    Ambivalent,
    /// A data asset is missing or corrupt, or configuration is malformed, at load time.
    InitFailed,
    DivisionByZero,
    MixedRadixWrongSize,
    MixedRadixZeroBase,
    EncounteredNaN,
    ImpossibleResult,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::OutOfRange => write!(f, "Out of range"),
            CalendarError::InvalidDate => write!(f, "Invalid date"),
            CalendarError::InvalidEra => write!(f, "Invalid era"),
            CalendarError::Overflow => write!(f, "Arithmetic overflow"),
            CalendarError::Ambivalent => write!(f, "Ambivalent request"),
            CalendarError::InitFailed => write!(f, "Initialization failed"),
            CalendarError::DivisionByZero => write!(f, "Division By Zero"),
            CalendarError::MixedRadixWrongSize => write!(f, "Mixed radix slices have wrong size"),
            CalendarError::MixedRadixZeroBase => write!(f, "Mixed radix base contains zero"),
            CalendarError::EncounteredNaN => write!(f, "Encountered Not a Number (NaN)"),
            CalendarError::ImpossibleResult => write!(f, "Impossible result"),
        }
    }
}

impl Error for CalendarError {}
