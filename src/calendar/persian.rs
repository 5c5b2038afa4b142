// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Persian (Jalali/Solar Hijri) calendar.
//!
//! Unlike the other calendars in this crate, the Persian year length is not
//! determined by a single fixed rule: four different algorithms have been used
//! historically and in software to decide which years are leap. [`Persian`]
//! stores dates using the [`PersianAlgorithm::Borkowski`] algorithm, and
//! [`Persian::view`] re-derives the same instant under any other algorithm.

use crate::calendar::gregorian::Gregorian;
use crate::calendar::prelude::clamp_lenient;
use crate::calendar::prelude::ChronoElement;
use crate::calendar::prelude::CommonDate;
use crate::calendar::prelude::CommonWeekOfYear;
use crate::calendar::prelude::Element;
use crate::calendar::prelude::GuaranteedMonth;
use crate::calendar::prelude::HasLeapYears;
use crate::calendar::prelude::OrdinalDate;
use crate::calendar::prelude::ToFromCommonDate;
use crate::calendar::prelude::ToFromOrdinalDate;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::BoundedDayCount;
use crate::day_count::CalculatedBounds;
use crate::day_count::Epoch;
use crate::day_count::Fixed;
use crate::day_count::FromFixed;
use crate::day_count::ToFixed;
use crate::day_cycle::OnOrBefore;
use crate::day_cycle::Weekday;

#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;
use num_traits::ToPrimitive;

/// The offset, in hours, historically used for Tehran mean time (+03:30).
pub const DEFAULT_ASTRONOMICAL_OFFSET: f64 = 3.5;

/// The closed set of year-length algorithms for the Persian calendar.
///
/// All four produce the same API (`isLeapYear`, `toDate`, `fromDate`), are
/// mutually self-consistent on round-trips within their own valid range, and
/// are not required to agree with one another.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PersianAlgorithm {
    /// Refined astronomical approximation using a 2820-year grand cycle with
    /// documented breaks. Valid for years 1..=3000.
    Borkowski,
    /// Simple 33-year cycle: `y mod 33 ∈ {1,5,9,13,17,22,26,30}` are leap.
    /// Valid for years 1..=3000.
    Khayyam,
    /// 2820-year grand-cycle formula. Valid for years 1..=3000.
    Birashk,
    /// True vernal-equinox computation. Valid for years 1..=2378.
    Astronomical,
}

impl PersianAlgorithm {
    /// The largest representable Persian year for this algorithm.
    pub fn max_year(self) -> i32 {
        match self {
            PersianAlgorithm::Astronomical => 2378,
            _ => 3000,
        }
    }
}

/// Represents a month in the Persian calendar
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum PersianMonth {
    Farvardin = 1,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

/// AD of the Persian epoch (1 Farvardin, year 1), Gregorian 622-03-22.
const PERSIAN_EPOCH_AD: i64 = 226896;

const KHAYYAM_LEAP_RESIDUES: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Years at which the Borkowski 33-year base rule is known to disagree with
/// the refined astronomical approximation it approximates.
///
/// Sourced from the `calendrical_calculations` crate (icu4x project), which
/// documents it as covering the modified astronomical algorithm based on the
/// 52.5 degrees east meridian from 1178 AP to 3000 AP.
const BORKOWSKI_NON_LEAP_CORRECTION: [i32; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

fn borkowski_base_rule(year: i32) -> bool {
    (25 * (year as i64) + 11).rem_euclid(33) < 8
}

fn is_leap_borkowski(year: i32) -> bool {
    let first = BORKOWSKI_NON_LEAP_CORRECTION[0];
    if year >= first && BORKOWSKI_NON_LEAP_CORRECTION.contains(&year) {
        false
    } else if year > first && BORKOWSKI_NON_LEAP_CORRECTION.contains(&(year - 1)) {
        true
    } else {
        borkowski_base_rule(year)
    }
}

fn is_leap_khayyam(year: i32) -> bool {
    KHAYYAM_LEAP_RESIDUES.contains(&year.modulus(33))
}

fn is_leap_birashk(year: i32) -> bool {
    let a = (year - 474).modulus(2820);
    ((a + 512) * 31).modulus(128) < 31
}

fn astronomical_new_year_ad(persian_year: i32, offset_hours: f64) -> i64 {
    // The vernal equinox bounding Persian year `y` falls near Gregorian
    // calendar year `621 + y`, in (or just before) March.
    let greg_year = 621 + persian_year;
    let search_start = Gregorian::try_from_common_date(CommonDate::new(greg_year, 2, 20))
        .expect("always a valid Gregorian date")
        .to_fixed();
    crate::astro::vernal_equinox_day(search_start, offset_hours)
}

fn is_leap_astronomical(year: i32, offset_hours: f64) -> bool {
    let this_year = astronomical_new_year_ad(year, offset_hours);
    let next_year = astronomical_new_year_ad(year + 1, offset_hours);
    (next_year - this_year) == 366
}

/// Returns [`true`] if `year` is a leap year (366 days) under `algorithm`.
pub fn is_leap_year(year: i32, algorithm: PersianAlgorithm, offset_hours: f64) -> bool {
    match algorithm {
        PersianAlgorithm::Borkowski => is_leap_borkowski(year),
        PersianAlgorithm::Khayyam => is_leap_khayyam(year),
        PersianAlgorithm::Birashk => is_leap_birashk(year),
        PersianAlgorithm::Astronomical => is_leap_astronomical(year, offset_hours),
    }
}

fn year_length(year: i32, algorithm: PersianAlgorithm, offset_hours: f64) -> i64 {
    if is_leap_year(year, algorithm, offset_hours) {
        366
    } else {
        365
    }
}

/// Count of `y` in `1..=n` for which `is_leap(y)` holds, given that `is_leap`
/// depends only on `y mod 33` and that exactly 8 of every 33 consecutive
/// residues match (true of both [`is_leap_khayyam`] and
/// [`borkowski_base_rule`]: `KHAYYAM_LEAP_RESIDUES` has 8 entries, and 25 is
/// invertible mod 33, so `(25y+11) mod 33` is a bijection on residues as `y`
/// ranges over any complete residue system). Bounded by 32 iterations
/// regardless of `n`.
fn leap_count_33(n: i64, is_leap: impl Fn(i32) -> bool) -> i64 {
    if n <= 0 {
        return 0;
    }
    let full_cycles = n / 33;
    let remainder = n % 33;
    let mut count = full_cycles * 8;
    for offset in 1..=remainder {
        if is_leap((full_cycles * 33 + offset) as i32) {
            count += 1;
        }
    }
    count
}

fn elapsed_days_khayyam(year: i32) -> i64 {
    let n = (year as i64) - 1;
    let leap = |y: i32| KHAYYAM_LEAP_RESIDUES.contains(&y.modulus(33));
    365 * n + leap_count_33(n, leap)
}

/// Net adjustment `BORKOWSKI_NON_LEAP_CORRECTION` makes to the base-rule leap
/// count over `1..=n`: `-1` for each corrected year the base rule called leap
/// (now forced non-leap), `+1` for each year right after a correction that
/// the base rule called non-leap (now forced leap), mirroring
/// [`is_leap_borkowski`]'s if/else-if precedence. Bounded by the table's 78
/// entries regardless of `n`.
fn borkowski_correction_adjustment(n: i64) -> i64 {
    let mut delta: i64 = 0;
    for &corr_year in BORKOWSKI_NON_LEAP_CORRECTION.iter() {
        if (corr_year as i64) > n {
            break;
        }
        if borkowski_base_rule(corr_year) {
            delta -= 1;
        }
        let next = corr_year + 1;
        if (next as i64) <= n
            && !BORKOWSKI_NON_LEAP_CORRECTION.contains(&next)
            && !borkowski_base_rule(next)
        {
            delta += 1;
        }
    }
    delta
}

fn elapsed_days_borkowski(year: i32) -> i64 {
    let n = (year as i64) - 1;
    let base_count = leap_count_33(n, borkowski_base_rule);
    365 * n + base_count + borkowski_correction_adjustment(n)
}

/// Closed-form day count for the arithmetic (2820-year grand-cycle)
/// algorithm, adapted from the standard arithmetic-Persian JDN formula (as
/// used for the 2820-year cycle conversion in other Persian calendar
/// implementations): `epy*682` terms come from the cycle's 683-leap-year
/// count (`2820*365 + 683 = 1029983` days per full cycle).
///
/// Within this algorithm's supported domain (`1..=3000`), `year - 474` never
/// leaves `(-2820, 2820)`, so the grand cycle never actually wraps: the
/// `base.div_euclid(2820)` and `1029983`-day cycle terms of the general
/// formula are always zero and are dropped here.
fn elapsed_days_birashk(year: i32) -> i64 {
    let y = year as i64;
    (682 * y - 110).div_euclid(2816) + (y - 1) * 365
}

fn prior_elapsed_days(year: i32, algorithm: PersianAlgorithm, offset_hours: f64) -> i64 {
    match algorithm {
        PersianAlgorithm::Khayyam => elapsed_days_khayyam(year),
        PersianAlgorithm::Borkowski => elapsed_days_borkowski(year),
        PersianAlgorithm::Birashk => elapsed_days_birashk(year),
        PersianAlgorithm::Astronomical => {
            astronomical_new_year_ad(year, offset_hours) - astronomical_new_year_ad(1, offset_hours)
        }
    }
}

fn month_length_of(month: u8, leap: bool) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => {
            if leap {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

fn ad_from_ymd(year: i32, month: u8, dom: u8, algorithm: PersianAlgorithm, offset_hours: f64) -> i64 {
    let prior_this_year: i64 = (1..month).map(|m| month_length_of(m, is_leap_year(year, algorithm, offset_hours)) as i64).sum();
    PERSIAN_EPOCH_AD + prior_elapsed_days(year, algorithm, offset_hours) + prior_this_year + (dom as i64) - 1
}

fn ymd_from_ad(ad: i64, algorithm: PersianAlgorithm, offset_hours: f64) -> CommonDate {
    let d0 = ad - PERSIAN_EPOCH_AD;
    let mut year = ((d0 as f64) / 365.2422).floor() as i32 + 1;
    if year < 1 {
        year = 1;
    }
    let mut elapsed = prior_elapsed_days(year, algorithm, offset_hours);
    loop {
        if elapsed > d0 {
            year -= 1;
            elapsed -= year_length(year, algorithm, offset_hours);
        } else if elapsed + year_length(year, algorithm, offset_hours) <= d0 {
            elapsed += year_length(year, algorithm, offset_hours);
            year += 1;
        } else {
            break;
        }
    }
    let day_of_year = (d0 - elapsed) as i64; // 0-based
    let leap = is_leap_year(year, algorithm, offset_hours);
    let mut month: u8 = 1;
    let mut remaining = day_of_year;
    loop {
        let len = month_length_of(month, leap) as i64;
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }
    CommonDate::new(year, month, (remaining + 1) as u8)
}

/// A re-derivation of a [`Persian`] date under a specific algorithm (and, for
/// [`PersianAlgorithm::Astronomical`], a specific zone offset).
///
/// Two views compare equal only if their `(algorithm, offset, date)` triples
/// match.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PersianView {
    algorithm: PersianAlgorithm,
    offset_hours: f64,
    date: CommonDate,
}

impl PersianView {
    pub fn algorithm(self) -> PersianAlgorithm {
        self.algorithm
    }

    pub fn offset_hours(self) -> f64 {
        self.offset_hours
    }

    pub fn to_common_date(self) -> CommonDate {
        self.date
    }
}

/// Represents a date in the Persian (Jalali) calendar.
///
/// Stored using the [`PersianAlgorithm::Borkowski`] algorithm; use
/// [`Persian::view`] to read the same absolute day under a different
/// algorithm.
///
/// ```
/// use polycal::calendar::*;
///
/// let d = Persian::try_new(1403, PersianMonth::Esfand, 30).unwrap();
/// let under_birashk = d.view(PersianAlgorithm::Birashk);
/// assert_eq!(under_birashk.to_common_date(), CommonDate::new(1404, 1, 1));
/// ```
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Persian(CommonDate);

impl Persian {
    const ALGORITHM: PersianAlgorithm = PersianAlgorithm::Borkowski;
    const OFFSET: f64 = DEFAULT_ASTRONOMICAL_OFFSET;

    /// Re-derive this instant's date under a different algorithm, using the
    /// default astronomical offset.
    pub fn view(self, algorithm: PersianAlgorithm) -> PersianView {
        self.view_with_offset(algorithm, DEFAULT_ASTRONOMICAL_OFFSET)
    }

    /// Re-derive this instant's date under [`PersianAlgorithm::Astronomical`]
    /// with an explicit zone offset in hours.
    pub fn view_with_offset(self, algorithm: PersianAlgorithm, offset_hours: f64) -> PersianView {
        let ad = self.to_fixed().get_day_i();
        PersianView {
            algorithm,
            offset_hours,
            date: ymd_from_ad(ad, algorithm, offset_hours),
        }
    }
}

impl HasLeapYears for Persian {
    fn is_leap(year: i32) -> bool {
        is_leap_year(year, Persian::ALGORITHM, Persian::OFFSET)
    }
}

impl CalculatedBounds for Persian {}

impl Epoch for Persian {
    fn epoch() -> Fixed {
        Fixed::cast_new(PERSIAN_EPOCH_AD)
    }
}

impl FromFixed for Persian {
    fn from_fixed(date: Fixed) -> Persian {
        let ad = date.get_day_i();
        Persian(ymd_from_ad(ad, Persian::ALGORITHM, Persian::OFFSET))
    }
}

impl ToFixed for Persian {
    fn to_fixed(self) -> Fixed {
        let ad = ad_from_ymd(
            self.0.year,
            self.0.month,
            self.0.day,
            Persian::ALGORITHM,
            Persian::OFFSET,
        );
        Fixed::cast_new(ad)
    }
}

impl ToFromCommonDate<PersianMonth> for Persian {
    fn to_common_date(self) -> CommonDate {
        self.0
    }

    fn from_common_date_unchecked(date: CommonDate) -> Self {
        debug_assert!(Self::valid_month_day(date).is_ok());
        Self(date)
    }

    fn valid_month_day(date: CommonDate) -> Result<(), CalendarError> {
        if date.year < 1 || date.year > Persian::ALGORITHM.max_year() {
            return Err(CalendarError::OutOfRange);
        }
        match PersianMonth::from_u8(date.month) {
            None => Err(CalendarError::InvalidDate),
            Some(m) => {
                if date.day < 1 || date.day > Self::month_length(date.year, m) {
                    Err(CalendarError::InvalidDate)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn year_end_date(year: i32) -> CommonDate {
        let m = PersianMonth::Esfand;
        CommonDate::new(year, m as u8, Self::month_length(year, m))
    }

    fn month_length(year: i32, month: PersianMonth) -> u8 {
        month_length_of(month as u8, Persian::is_leap(year))
    }
}

impl GuaranteedMonth<PersianMonth> for Persian {}
impl CommonWeekOfYear<PersianMonth> for Persian {}

impl ToFromOrdinalDate for Persian {
    fn valid_ordinal(ord: OrdinalDate) -> Result<(), CalendarError> {
        let correction = if Persian::is_leap(ord.year) { 1 } else { 0 };
        if ord.day_of_year > 0 && ord.day_of_year <= (365 + correction) {
            Ok(())
        } else {
            Err(CalendarError::InvalidDate)
        }
    }

    fn ordinal_from_fixed(fixed_date: Fixed) -> OrdinalDate {
        Persian::from_fixed(fixed_date).to_ordinal()
    }

    fn to_ordinal(self) -> OrdinalDate {
        let leap = Persian::is_leap(self.0.year);
        let prior: i64 = (1..self.0.month).map(|m| month_length_of(m, leap) as i64).sum();
        OrdinalDate {
            year: self.0.year,
            day_of_year: (prior + self.0.day as i64) as u16,
        }
    }

    fn from_ordinal_unchecked(ord: OrdinalDate) -> Self {
        let leap = Persian::is_leap(ord.year);
        let mut month: u8 = 1;
        let mut remaining = ord.day_of_year as i64;
        loop {
            let len = month_length_of(month, leap) as i64;
            if remaining <= len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        Persian(CommonDate::new(ord.year, month, remaining as u8))
    }
}

impl ChronoElement for Persian {
    fn get(self, element: Element) -> i64 {
        let cd = self.to_common_date();
        match element {
            Element::Year => cd.year as i64,
            Element::Month => cd.month as i64,
            Element::DayOfMonth => cd.day as i64,
            Element::DayOfYear => self.to_ordinal().day_of_year as i64,
            Element::DayOfWeek => Weekday::from_fixed(self.to_fixed())
                .to_i64()
                .expect("Weekday is always representable"),
            Element::Era => 0,
        }
    }

    fn get_min(self, element: Element) -> i64 {
        match element {
            Element::Year => 1,
            Element::Month => 1,
            Element::DayOfMonth => 1,
            Element::DayOfYear => 1,
            Element::DayOfWeek => 0,
            Element::Era => 0,
        }
    }

    fn get_max(self, element: Element) -> i64 {
        let cd = self.to_common_date();
        match element {
            Element::Year => Persian::ALGORITHM.max_year() as i64,
            Element::Month => 12,
            Element::DayOfMonth => {
                let leap = Persian::is_leap(cd.year);
                month_length_of(cd.month, leap) as i64
            }
            Element::DayOfYear => {
                if Persian::is_leap(cd.year) { 366 } else { 365 }
            }
            Element::DayOfWeek => 6,
            Element::Era => 0,
        }
    }

    fn with(self, element: Element, value: i64, lenient: bool) -> Result<Self, CalendarError> {
        let cd = self.to_common_date();
        match element {
            Element::Year => {
                let year = i32::try_from(value).map_err(|_| CalendarError::OutOfRange)?;
                Self::try_from_common_date(CommonDate::new(year, cd.month, cd.day))
            }
            Element::Month => {
                if !(1..=12).contains(&value) {
                    return Err(CalendarError::OutOfRange);
                }
                Self::try_from_common_date(CommonDate::new(cd.year, value as u8, cd.day))
            }
            Element::DayOfMonth => {
                let day = clamp_lenient(value, 1, self.get_max(Element::DayOfMonth), lenient)?;
                Self::try_from_common_date(CommonDate::new(cd.year, cd.month, day as u8))
            }
            Element::DayOfYear => {
                let doy = clamp_lenient(value, 1, self.get_max(Element::DayOfYear), lenient)?;
                Self::try_from_ordinal(OrdinalDate { year: cd.year, day_of_year: doy as u16 })
            }
            Element::DayOfWeek => {
                let w = Weekday::from_i64(value).ok_or(CalendarError::OutOfRange)?;
                Ok(Self::from_fixed(w.nearest(self.to_fixed())))
            }
            Element::Era => Err(CalendarError::InvalidEra),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn epoch_is_1_1_1() {
        let d = Persian::try_from_common_date(CommonDate::new(1, 1, 1)).unwrap();
        assert_eq!(d.to_fixed().get_day_i(), PERSIAN_EPOCH_AD);
    }

    #[test]
    fn khayyam_leap_residues() {
        for y in 1..200 {
            let expected = KHAYYAM_LEAP_RESIDUES.contains(&y.modulus(33));
            assert_eq!(is_leap_year(y, PersianAlgorithm::Khayyam, 0.0), expected);
        }
    }

    #[test]
    fn khayyam_and_borkowski_agree_in_documented_domain() {
        // Testable property 8: within Persian years 1178..1633, Khayyam and
        // Borkowski agree on year length.
        for y in 1178..1633 {
            assert_eq!(
                is_leap_year(y, PersianAlgorithm::Khayyam, 0.0),
                is_leap_year(y, PersianAlgorithm::Borkowski, 0.0),
                "disagreement at year {y}"
            );
        }
    }

    #[test]
    fn borkowski_1403_12_30_is_birashk_1404_01_01() {
        let d = Persian::try_new(1403, PersianMonth::Esfand, 30).unwrap();
        let alt = d.view(PersianAlgorithm::Birashk);
        assert_eq!(alt.to_common_date(), CommonDate::new(1404, 1, 1));
    }

    #[test]
    fn esfand_30_is_last_day_of_a_leap_year() {
        let d = Persian::try_new(1403, PersianMonth::Esfand, 30).unwrap();
        assert_eq!(d.to_ordinal().day_of_year, 366);
    }

    #[test]
    fn with_day_of_month_is_lenient_to_nearest() {
        let d = Persian::try_new(1402, PersianMonth::Esfand, 1).unwrap();
        assert!(d.with(Element::DayOfMonth, 30, false).is_err());
        assert_eq!(d.with(Element::DayOfMonth, 30, true).unwrap().day(), 29);
    }

    #[test]
    fn with_era_is_rejected() {
        let d = Persian::try_new(1400, PersianMonth::Farvardin, 1).unwrap();
        assert!(matches!(d.with(Element::Era, 0, false), Err(CalendarError::InvalidEra)));
    }

    /// Cross-checks the closed-form `prior_elapsed_days` against the
    /// year-by-year sum it replaces, across all four algorithms.
    #[test]
    fn prior_elapsed_days_matches_naive_sum() {
        for algorithm in [
            PersianAlgorithm::Khayyam,
            PersianAlgorithm::Borkowski,
            PersianAlgorithm::Birashk,
            PersianAlgorithm::Astronomical,
        ] {
            let mut naive: i64 = 0;
            for y in 1..200i32 {
                assert_eq!(
                    prior_elapsed_days(y, algorithm, DEFAULT_ASTRONOMICAL_OFFSET),
                    naive,
                    "algorithm {algorithm:?}, year {y}"
                );
                naive += if is_leap_year(y, algorithm, DEFAULT_ASTRONOMICAL_OFFSET) { 366 } else { 365 };
            }
        }
    }

    proptest! {
        #[test]
        fn roundtrip_borkowski(y in 1..3000i32, m in 1..12u8) {
            let leap = Persian::is_leap(y);
            let len = month_length_of(m, leap);
            let d = Persian::try_new(y, PersianMonth::from_u8(m).unwrap(), len).unwrap();
            let f = d.to_fixed();
            assert_eq!(Persian::from_fixed(f), d);
        }

        #[test]
        fn ordinal_roundtrip(y in 1..3000i32, m in 1..12u8) {
            let leap = Persian::is_leap(y);
            let len = month_length_of(m, leap);
            let d = Persian::try_new(y, PersianMonth::from_u8(m).unwrap(), len).unwrap();
            let ord = d.to_ordinal();
            assert_eq!(Persian::from_ordinal_unchecked(ord), d);
        }
    }
}
