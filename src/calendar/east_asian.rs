// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The East Asian lunisolar calendar family (China, Korea, Vietnam): a
//! shared reconstruction/arithmetic engine parameterized only by a
//! zone-offset rule, following a common sexagesimal year cycle rooted at
//! the Gregorian proleptic date -2636-02-15.

use crate::astro;
use crate::calendar::gregorian::Gregorian;
use crate::calendar::prelude::ToFromCommonDate;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::BoundedDayCount;
use crate::day_count::Fixed;
use crate::day_cycle::BoundedCycle;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// A month within an East Asian lunisolar year: its ordinal (1..=12) and
/// whether it is an intercalary ("leap") repeat of that ordinal.
///
/// Derived ordering compares `number` first, then `leap`, which places a
/// leap month immediately after the ordinary month sharing its number
/// (`false < true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EastAsianMonth {
    pub number: u8,
    pub leap: bool,
}

impl EastAsianMonth {
    pub fn new(number: u8, leap: bool) -> Self {
        EastAsianMonth { number, leap }
    }
}

const STEM_NAMES: [&str; 10] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];
const BRANCH_NAMES: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

/// A position in the 60-term sexagesimal (stem-branch) cycle, `1..=60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclicYear(u8);

impl CyclicYear {
    pub fn try_new(year_of_cycle: i32) -> Result<Self, CalendarError> {
        if (1..=60).contains(&year_of_cycle) {
            Ok(CyclicYear(year_of_cycle as u8))
        } else {
            Err(CalendarError::OutOfRange)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `(y-1) mod 10`.
    pub fn stem(self) -> u8 {
        (self.0 as i32 - 1).modulus(10) as u8
    }

    /// `(y-1) mod 12`.
    pub fn branch(self) -> u8 {
        (self.0 as i32 - 1).modulus(12) as u8
    }

    /// Recover the cyclic year from a stem/branch pair.
    ///
    /// Only pairs with `(branch - stem) mod 2 == 0` exist; every other
    /// combination describes no sexagesimal term.
    pub fn of_stem_branch(stem: u8, branch: u8) -> Result<Self, CalendarError> {
        if stem > 9 || branch > 11 {
            return Err(CalendarError::OutOfRange);
        }
        if (branch as i32 - stem as i32).modulus(2) != 0 {
            return Err(CalendarError::InvalidDate);
        }
        let delta = (25 * (branch as i32 - stem as i32)).modulus(60);
        let year = (stem as i32 + delta).modulus(60) + 1;
        Ok(CyclicYear(year as u8))
    }

    /// Shift by `amount` terms, wrapping cyclically through the 60-term cycle.
    pub fn roll(self, amount: i64) -> Self {
        let unbounded = BoundedCycle::<60, 1>::to_unbounded(&self) + amount;
        Self::from_unbounded(unbounded)
    }

    pub fn stem_name(self) -> &'static str {
        STEM_NAMES[self.stem() as usize]
    }

    pub fn branch_name(self) -> &'static str {
        BRANCH_NAMES[self.branch() as usize]
    }

    /// `"<stem>-<branch>"`, e.g. the first term of the cycle is `"jia-zi"`.
    pub fn display_name(self) -> String {
        format!("{}-{}", self.stem_name(), self.branch_name())
    }
}

impl num_traits::ToPrimitive for CyclicYear {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0 as u64)
    }
}

impl num_traits::FromPrimitive for CyclicYear {
    fn from_i64(n: i64) -> Option<Self> {
        if (1..=60).contains(&n) {
            Some(CyclicYear(n as u8))
        } else {
            None
        }
    }
    fn from_u64(n: u64) -> Option<Self> {
        Self::from_i64(n as i64)
    }
}

impl BoundedCycle<60, 1> for CyclicYear {}

/// Gregorian proleptic -2636-02-15, the shared epoch from which elapsed
/// years (and so cycle/year-of-cycle) are counted.
fn epoch_chinese() -> Fixed {
    use crate::calendar::prelude::CommonDate;
    use crate::day_count::ToFixed;
    Gregorian::try_from_common_date(CommonDate::new(-2636, 2, 15))
        .expect("epoch date is valid")
        .to_fixed()
}

/// Per-calendar parameterization: only the historical zone offset differs
/// between China, Korea and Vietnam.
pub trait EastAsianZone: Copy + Clone + std::fmt::Debug + PartialEq {
    /// UTC offset in hours in effect at moment `t`.
    fn zone_offset_hours(t: Fixed) -> f64;
}

fn gregorian_fixed(year: i32, month: u8, day: u8) -> Fixed {
    use crate::calendar::prelude::CommonDate;
    use crate::day_count::ToFixed;
    Gregorian::try_from_common_date(CommonDate::new(year, month, day))
        .expect("boundary date is valid")
        .to_fixed()
}

/// China: local mean time at Beijing (116°25'E, 7.7611h) before the 1929
/// adoption of a national standard time, then a flat UTC+8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChinaZone;

impl EastAsianZone for ChinaZone {
    fn zone_offset_hours(t: Fixed) -> f64 {
        if t.get_day_i() < gregorian_fixed(1929, 1, 1).get_day_i() {
            7.7611
        } else {
            8.0
        }
    }
}

/// Korea: local mean time at Seoul (126°58'E, 8.4644h), then a sequence of
/// legally adopted standard offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KoreaZone;

impl EastAsianZone for KoreaZone {
    fn zone_offset_hours(t: Fixed) -> f64 {
        let d = t.get_day_i();
        if d < gregorian_fixed(1908, 4, 1).get_day_i() {
            8.4644
        } else if d < gregorian_fixed(1912, 1, 1).get_day_i() {
            8.4644
        } else if d < gregorian_fixed(1954, 3, 21).get_day_i() {
            8.5
        } else if d < gregorian_fixed(1961, 8, 10).get_day_i() {
            9.0
        } else if d < gregorian_fixed(1961, 10, 1).get_day_i() {
            8.5
        } else {
            9.0
        }
    }
}

/// Vietnam: local mean time at Hanoi (105°51'E, 7.0567h) before the
/// adoption of a flat UTC+7. The exact transition date is not recorded in
/// the surviving historical references; 1967-01-01 is used here as a
/// documented approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VietnamZone;

impl EastAsianZone for VietnamZone {
    fn zone_offset_hours(t: Fixed) -> f64 {
        if t.get_day_i() < gregorian_fixed(1967, 1, 1).get_day_i() {
            7.0567
        } else {
            7.0
        }
    }
}

/// An East Asian lunisolar date: sexagesimal cycle, month (possibly
/// intercalary) and day, with the absolute day number and the year's leap
/// month (0 if the year has none) cached.
#[derive(Debug, Clone, Copy)]
pub struct EastAsianDate {
    pub cycle: i32,
    pub year_of_cycle: CyclicYear,
    pub month: EastAsianMonth,
    pub day: u8,
    abs_day: i64,
    leap_month_of_year: u8,
}

impl EastAsianDate {
    pub fn abs_day(self) -> i64 {
        self.abs_day
    }

    /// `0` if the year has no leap month.
    pub fn leap_month_of_year(self) -> u8 {
        self.leap_month_of_year
    }
}

impl PartialEq for EastAsianDate {
    fn eq(&self, other: &Self) -> bool {
        self.abs_day == other.abs_day
    }
}
impl Eq for EastAsianDate {}

impl PartialOrd for EastAsianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for EastAsianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.abs_day.cmp(&other.abs_day)
    }
}

fn has_no_major_term<Z: EastAsianZone>(month_start: i64) -> bool {
    let here = astro::solar_longitude_index_major(
        Fixed::cast_new(month_start),
        Z::zone_offset_hours(Fixed::cast_new(month_start)),
    );
    let next_start = astro::new_moon_on_or_after_day(
        Fixed::cast_new(month_start + 1),
        Z::zone_offset_hours(Fixed::cast_new(month_start + 1)),
    );
    let there = astro::solar_longitude_index_major(
        Fixed::cast_new(next_start),
        Z::zone_offset_hours(Fixed::cast_new(next_start)),
    );
    here == there
}

fn next_new_moon<Z: EastAsianZone>(day: i64) -> i64 {
    astro::new_moon_on_or_after_day(
        Fixed::cast_new(day + 1),
        Z::zone_offset_hours(Fixed::cast_new(day + 1)),
    )
}

/// `true` iff any month in `[m12, m)`, walked new-moon to new-moon, carries
/// no major solar term (i.e. this sui already has a designated leap month
/// before reaching `m`).
fn has_prior_no_major_term<Z: EastAsianZone>(m12: i64, m: i64) -> bool {
    let mut cur = m12;
    let mut guard = 0;
    while cur < m && guard < 14 {
        if has_no_major_term::<Z>(cur) {
            return true;
        }
        cur = next_new_moon::<Z>(cur);
        guard += 1;
    }
    false
}

/// The earliest month in `[lo, hi)`, walked new-moon to new-moon, that
/// carries no major solar term, or `None` if there is none in range.
fn first_no_major_term_month<Z: EastAsianZone>(lo: i64, hi: i64) -> Option<i64> {
    let mut cur = lo;
    let mut guard = 0;
    while cur < hi && guard < 14 {
        if has_no_major_term::<Z>(cur) {
            return Some(cur);
        }
        cur = next_new_moon::<Z>(cur);
        guard += 1;
    }
    None
}

fn month_number_from_m12(m12: i64, m: i64) -> u8 {
    let me = astro::lunations(m12, m);
    let number = me.modulus(12);
    if number == 0 {
        12
    } else {
        number as u8
    }
}

fn from_abs_day<Z: EastAsianZone>(d: i64) -> EastAsianDate {
    let off = |t: Fixed| Z::zone_offset_hours(t);
    let s1 = astro::winter_on_or_before(Fixed::cast_new(d), off(Fixed::cast_new(d)));
    let s2 = astro::winter_on_or_before(
        Fixed::cast_new(s1 + 370),
        off(Fixed::cast_new(s1 + 370)),
    );
    let m12 = astro::new_moon_on_or_after_day(Fixed::cast_new(s1 + 1), off(Fixed::cast_new(s1 + 1)));
    let next_m11 = astro::new_moon_before_day(Fixed::cast_new(s2 + 1), off(Fixed::cast_new(s2 + 1)));
    let m = astro::new_moon_before_day(Fixed::cast_new(d + 1), off(Fixed::cast_new(d + 1)));

    let leap_year_in_sui = astro::lunations(m12, next_m11) == 12;
    let mut me = astro::lunations(m12, m);
    if leap_year_in_sui && has_prior_no_major_term::<Z>(m12, m) {
        me -= 1;
    }
    let month_number = {
        let number = me.modulus(12);
        if number == 0 {
            12
        } else {
            number as u8
        }
    };

    let elapsed_years = (1.5 - (month_number as f64) / 12.0
        + ((d - epoch_chinese().get_day_i()) as f64) / astro::MEAN_TROPICAL_YEAR)
        .floor() as i64;

    let cycle = ((elapsed_years - 1).div_euclid(60) + 1) as i32;
    let year_of_cycle_raw = elapsed_years.modulus(60);
    let year_of_cycle = if year_of_cycle_raw == 0 { 60 } else { year_of_cycle_raw as u8 };

    let day_of_month = (d - m + 1) as u8;

    // The sui's leap month, if any: the earliest no-major-term month across
    // the whole sui `[m12, nextM11)`, independent of which month `m` falls in.
    let leap_month_start = if leap_year_in_sui {
        first_no_major_term_month::<Z>(m12, next_m11)
    } else {
        None
    };
    let is_leap = leap_month_start == Some(m);
    let leap_month_of_year = match leap_month_start {
        Some(start) => month_number_from_m12(m12, start),
        None => 0,
    };

    EastAsianDate {
        cycle,
        year_of_cycle: CyclicYear(year_of_cycle),
        month: EastAsianMonth::new(month_number, is_leap),
        day: day_of_month,
        abs_day: d,
        leap_month_of_year,
    }
}

fn new_year_in_sui<Z: EastAsianZone>(mid_year: Fixed) -> i64 {
    let off = |t: Fixed| Z::zone_offset_hours(t);
    let s1 = astro::winter_on_or_before(mid_year, off(mid_year));
    let s2 = astro::winter_on_or_before(Fixed::cast_new(s1 + 370), off(Fixed::cast_new(s1 + 370)));
    let m12 = astro::new_moon_on_or_after_day(Fixed::cast_new(s1 + 1), off(Fixed::cast_new(s1 + 1)));
    let m13 = astro::new_moon_on_or_after_day(Fixed::cast_new(m12 + 1), off(Fixed::cast_new(m12 + 1)));
    let next_m11 = astro::new_moon_before_day(Fixed::cast_new(s2 + 1), off(Fixed::cast_new(s2 + 1)));

    if astro::lunations(m12, next_m11) == 12
        && (has_no_major_term::<Z>(m12) || has_no_major_term::<Z>(m13))
    {
        astro::new_moon_on_or_after_day(Fixed::cast_new(m13 + 1), off(Fixed::cast_new(m13 + 1)))
    } else {
        m13
    }
}

fn new_year<Z: EastAsianZone>(cycle: i32, year_of_cycle: u8) -> i64 {
    let elapsed = (cycle as i64 - 1) * 60 + year_of_cycle as i64;
    let mid_year_est = epoch_chinese().get() + (elapsed as f64 - 0.5) * astro::MEAN_TROPICAL_YEAR;
    let mid_year_day = mid_year_est.floor() as i64;
    let mut ny = new_year_in_sui::<Z>(Fixed::cast_new(mid_year_day));
    if mid_year_day < ny {
        let prior_est = mid_year_day - 365;
        ny = new_year_in_sui::<Z>(Fixed::cast_new(prior_est));
    }
    ny
}

fn first_day_of_month<Z: EastAsianZone>(new_year_day: i64, month: EastAsianMonth) -> i64 {
    let n = month.number as i64;
    let approx_day = new_year_day + (n - 1) * 29;
    let off = Z::zone_offset_hours(Fixed::cast_new(approx_day));
    let mut approx = astro::new_moon_on_or_after_day(Fixed::cast_new(approx_day), off);
    let mut guard = 0;
    loop {
        let recon = from_abs_day::<Z>(approx);
        if recon.month == month || guard >= 3 {
            return approx;
        }
        approx = next_new_moon::<Z>(approx);
        guard += 1;
    }
}

fn length_of_month<Z: EastAsianZone>(month_start: i64) -> u8 {
    (next_new_moon::<Z>(month_start) - month_start) as u8
}

/// A calendar value in one of the three East Asian lunisolar variants.
///
/// `ChinaEastAsian`, `KoreaEastAsian` and `VietnamEastAsian` below are the
/// concrete instantiations; all reconstruction and arithmetic is shared
/// through this generic engine, parameterized only by `Z::zone_offset_hours`.
#[derive(Debug, Clone, Copy)]
pub struct EastAsianCalendar<Z: EastAsianZone> {
    date: EastAsianDate,
    _marker: PhantomData<Z>,
}

pub type ChinaEastAsian = EastAsianCalendar<ChinaZone>;
pub type KoreaEastAsian = EastAsianCalendar<KoreaZone>;
pub type VietnamEastAsian = EastAsianCalendar<VietnamZone>;

impl<Z: EastAsianZone> PartialEq for EastAsianCalendar<Z> {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}
impl<Z: EastAsianZone> Eq for EastAsianCalendar<Z> {}
impl<Z: EastAsianZone> PartialOrd for EastAsianCalendar<Z> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.date.partial_cmp(&other.date)
    }
}
impl<Z: EastAsianZone> Ord for EastAsianCalendar<Z> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl<Z: EastAsianZone> EastAsianCalendar<Z> {
    /// Construct from absolute day number.
    pub fn from_abs_day(d: i64) -> Self {
        EastAsianCalendar {
            date: from_abs_day::<Z>(d),
            _marker: PhantomData,
        }
    }

    pub fn to_abs_day(self) -> i64 {
        self.date.abs_day
    }

    pub fn date(self) -> EastAsianDate {
        self.date
    }

    /// `EastAsian::of(cycle, yearOfCycle, month, dom)`.
    pub fn try_new(
        cycle: i32,
        year_of_cycle: i32,
        month: EastAsianMonth,
        day: u8,
    ) -> Result<Self, CalendarError> {
        if !(72..=94).contains(&cycle) {
            return Err(CalendarError::OutOfRange);
        }
        let cy = CyclicYear::try_new(year_of_cycle)?;
        if !(1..=30).contains(&day) {
            return Err(CalendarError::OutOfRange);
        }

        let ny = new_year::<Z>(cycle, cy.get());
        let month_start = first_day_of_month::<Z>(ny, month);
        let recon = from_abs_day::<Z>(month_start);
        if recon.cycle != cycle || recon.year_of_cycle != cy || recon.month != month {
            return Err(CalendarError::InvalidDate);
        }

        let len = length_of_month::<Z>(month_start);
        if day > len {
            return Err(CalendarError::InvalidDate);
        }

        let abs_day = month_start + (day as i64) - 1;
        Ok(EastAsianCalendar {
            date: EastAsianDate {
                cycle,
                year_of_cycle: cy,
                month,
                day,
                abs_day,
                leap_month_of_year: recon.leap_month_of_year,
            },
            _marker: PhantomData,
        })
    }

    pub fn is_leap_year(self) -> bool {
        self.date.leap_month_of_year != 0
    }

    pub fn length_of_month(self) -> u8 {
        let month_start = self.date.abs_day - (self.date.day as i64) + 1;
        length_of_month::<Z>(month_start)
    }

    pub fn length_of_year(self) -> i64 {
        let ny = new_year::<Z>(self.date.cycle, self.date.year_of_cycle.get());
        let next_cy = self
            .date
            .year_of_cycle
            .roll(1)
            .get();
        let next_cycle = if next_cy == 1 {
            self.date.cycle + 1
        } else {
            self.date.cycle
        };
        let next_ny = new_year::<Z>(next_cycle, next_cy);
        next_ny - ny
    }

    pub fn add_days(self, n: i64) -> Self {
        Self::from_abs_day(self.date.abs_day + n)
    }

    pub fn add_weeks(self, n: i64) -> Self {
        self.add_days(7 * n)
    }

    pub fn add_months(self, n: i64) -> Result<Self, CalendarError> {
        if n.unsigned_abs() > 1200 {
            return Err(CalendarError::Overflow);
        }
        let mut cur = self.date;
        let step: i64 = if n >= 0 { 1 } else { -1 };
        for _ in 0..n.abs() {
            let month_start = cur.abs_day - (cur.day as i64) + 1;
            let next_start = if step > 0 {
                next_new_moon::<Z>(month_start)
            } else {
                astro::new_moon_before_day(
                    Fixed::cast_new(month_start),
                    Z::zone_offset_hours(Fixed::cast_new(month_start)),
                )
            };
            let recon = from_abs_day::<Z>(next_start);
            let len = length_of_month::<Z>(next_start);
            let day = cur.day.min(len);
            cur = EastAsianDate {
                cycle: recon.cycle,
                year_of_cycle: recon.year_of_cycle,
                month: recon.month,
                day,
                abs_day: next_start + (day as i64) - 1,
                leap_month_of_year: recon.leap_month_of_year,
            };
        }
        Ok(EastAsianCalendar {
            date: cur,
            _marker: PhantomData,
        })
    }

    pub fn add_years(self, n: i64) -> Result<Self, CalendarError> {
        let total = (self.date.cycle as i64 - 1) * 60 + self.date.year_of_cycle.get() as i64 - 1 + n;
        if total < 0 {
            return Err(CalendarError::OutOfRange);
        }
        let new_cycle = (total.div_euclid(60) + 1) as i32;
        let new_year_of_cycle = (total.modulus(60) + 1) as i32;
        let ny = new_year::<Z>(new_cycle, new_year_of_cycle as u8);
        let recon_year = from_abs_day::<Z>(ny);

        let mut month = self.date.month;
        if month.leap && recon_year.leap_month_of_year != month.number {
            month.leap = false;
        }

        let month_start = first_day_of_month::<Z>(ny, month);
        let len = length_of_month::<Z>(month_start);
        let day = self.date.day.min(len);

        Ok(EastAsianCalendar {
            date: EastAsianDate {
                cycle: new_cycle,
                year_of_cycle: CyclicYear::try_new(new_year_of_cycle)?,
                month,
                day,
                abs_day: month_start + (day as i64) - 1,
                leap_month_of_year: recon_year.leap_month_of_year,
            },
            _marker: PhantomData,
        })
    }

    pub fn add_cycles(self, n: i64) -> Result<Self, CalendarError> {
        self.add_years(60 * n)
    }

    /// Whole lunar months between `self` and `other` (negative if `other`
    /// precedes `self`), with a day-of-month tail adjustment.
    pub fn until_months(self, other: Self) -> i64 {
        let a_start = self.date.abs_day - (self.date.day as i64) + 1;
        let b_start = other.date.abs_day - (other.date.day as i64) + 1;
        let mut months = astro::lunations(a_start, b_start);
        if other.date.day < self.date.day && months != 0 {
            months -= months.signum();
        }
        months
    }

    pub fn until_days(self, other: Self) -> i64 {
        other.date.abs_day - self.date.abs_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_of_cycle_is_the_documented_day() {
        // 1984-02-02 is the first day of cycle 78, year 1 (jia-zi), month 1.
        let g = gregorian_fixed(1984, 2, 2);
        let d = ChinaEastAsian::from_abs_day(g.get_day_i());
        assert_eq!(d.date().cycle, 78);
        assert_eq!(d.date().year_of_cycle.get(), 1);
        assert_eq!(d.date().month, EastAsianMonth::new(1, false));
        assert_eq!(d.date().day, 1);
        assert_eq!(d.date().year_of_cycle.display_name(), "jia-zi");
    }

    #[test]
    fn round_trip_through_construction() {
        let g = gregorian_fixed(2023, 6, 15);
        let d = ChinaEastAsian::from_abs_day(g.get_day_i());
        let reconstructed =
            ChinaEastAsian::try_new(d.date().cycle, d.date().year_of_cycle.get() as i32, d.date().month, d.date().day)
                .unwrap();
        assert_eq!(reconstructed.to_abs_day(), g.get_day_i());
    }

    #[test]
    fn cyclic_year_stem_branch_roundtrip() {
        for y in 1..=60 {
            let cy = CyclicYear::try_new(y).unwrap();
            let back = CyclicYear::of_stem_branch(cy.stem(), cy.branch()).unwrap();
            assert_eq!(cy, back);
        }
    }

    #[test]
    fn cyclic_year_rejects_impossible_stem_branch() {
        assert!(CyclicYear::of_stem_branch(0, 1).is_err());
    }

    #[test]
    fn add_months_then_until_months_is_consistent() {
        let g = gregorian_fixed(2000, 1, 1);
        let d = ChinaEastAsian::from_abs_day(g.get_day_i());
        let later = d.add_months(5).unwrap();
        assert_eq!(d.until_months(later), 5);
    }

    #[test]
    fn add_months_rejects_absurd_amounts() {
        let g = gregorian_fixed(2000, 1, 1);
        let d = ChinaEastAsian::from_abs_day(g.get_day_i());
        assert!(d.add_months(5000).is_err());
    }

    #[test]
    fn day_30_implies_month_has_30_days() {
        let g = gregorian_fixed(2025, 1, 1);
        let mut d = ChinaEastAsian::from_abs_day(g.get_day_i());
        for _ in 0..400 {
            d = d.add_days(1);
            if d.date().day == 30 {
                assert_eq!(d.length_of_month(), 30);
                return;
            }
        }
    }

    #[test]
    fn korea_and_china_agree_most_days() {
        // Zone offsets differ by under an hour between the two; the date
        // boundary rarely falls in the gap.
        let g = gregorian_fixed(2023, 6, 15);
        let china = ChinaEastAsian::from_abs_day(g.get_day_i());
        let korea = KoreaEastAsian::from_abs_day(g.get_day_i());
        assert_eq!(china.date().cycle, korea.date().cycle);
        assert_eq!(china.date().year_of_cycle, korea.date().year_of_cycle);
    }
}
