// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::calendar::prelude::clamp_lenient;
use crate::calendar::prelude::AllowYearZero;
use crate::calendar::prelude::ChronoElement;
use crate::calendar::prelude::CommonDate;
use crate::calendar::prelude::CommonWeekOfYear;
use crate::calendar::prelude::Element;
use crate::calendar::prelude::GuaranteedMonth;
use crate::calendar::prelude::HasLeapYears;
use crate::calendar::prelude::OrdinalDate;
use crate::calendar::prelude::Quarter;
use crate::calendar::prelude::ToFromCommonDate;
use crate::calendar::prelude::ToFromOrdinalDate;
use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use crate::day_count::BoundedDayCount;
use crate::day_count::CalculatedBounds;
use crate::day_count::Epoch;
use crate::day_count::Fixed;
use crate::day_count::FromFixed;
use crate::day_count::RataDie;
use crate::day_count::ToFixed;
use crate::day_cycle::OnOrBefore;
use crate::day_cycle::Weekday;
use std::num::NonZero;

#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;
use num_traits::ToPrimitive;

/// The Rata Die of the Ethiopian epoch (Amete Mihret year 1, month 1, day 1).
///
/// Equivalent to the Julian date 8-08-29.
const ETHIOPIC_EPOCH_RD: i32 = 2796;

/// Offset in years between the Amete Alem and Amete Mihret eras.
const AMETE_ALEM_OFFSET: i32 = 5500;

/// Represents a month in the Ethiopian calendar
///
/// Every year has twelve 30-day months, followed by a short thirteenth month
/// (Pagume) of 5 or 6 days.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum EthiopianMonth {
    Meskerem = 1,
    Tikimt,
    Hidar,
    Tahsas,
    Tir,
    Yekatit,
    Megabit,
    Miazia,
    Ginbot,
    Sene,
    Hamle,
    Nehase,
    Pagume,
}

/// The two eras used to count Ethiopian years.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EthiopianEra {
    /// "Era of the World", counting years from the Ethiopian date of creation.
    AmeteAlem,
    /// "Era of Mercy" (sometimes "Era of Grace"), counting years from the Incarnation.
    AmeteMihret,
}

/// Represents a date in the Ethiopian calendar
///
/// ## Introduction
///
/// The Ethiopian calendar is used by the Ethiopian Orthodox Tewahedo Church and is the
/// civil calendar of Ethiopia. It is closely related to the Coptic calendar, sharing the
/// same month lengths and leap rule, but counting years from a different epoch.
///
/// ## Basic Structure
///
/// Years are divided into twelve months of 30 days, followed by a short thirteenth month,
/// Pagume, of 5 days in a common year and 6 days in a leap year.
///
/// Leap years are every year whose year-of-era is congruent to 3 modulo 4.
///
/// ## Eras
///
/// Internally, years are stored as `mihret`, the proleptic Amete Mihret year. Years 1 and
/// above are ordinary Amete Mihret years; years 0 and below belong to the Amete Alem era,
/// whose year-of-era is `mihret + 5500`.
///
/// ```
/// use polycal::calendar::*;
///
/// let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2007, EthiopianMonth::Pagume, 6).unwrap();
/// assert_eq!(d.year_of_era(), 2007);
/// assert_eq!(d.era(), EthiopianEra::AmeteMihret);
/// ```
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Ethiopian(CommonDate);

impl Ethiopian {
    /// Construct from an era and a year-of-era rather than a raw (possibly non-positive) mihret.
    pub fn try_new(
        era: EthiopianEra,
        year_of_era: i32,
        month: EthiopianMonth,
        day: u8,
    ) -> Result<Self, CalendarError> {
        if year_of_era < 1 {
            return Err(CalendarError::OutOfRange);
        }
        let mihret = match era {
            EthiopianEra::AmeteMihret => year_of_era,
            EthiopianEra::AmeteAlem => year_of_era - AMETE_ALEM_OFFSET,
        };
        Self::try_from_common_date(CommonDate::new(mihret, month as u8, day))
    }

    /// The era this date's year falls under.
    pub fn era(self) -> EthiopianEra {
        if self.0.year < 1 {
            EthiopianEra::AmeteAlem
        } else {
            EthiopianEra::AmeteMihret
        }
    }

    /// The year numbered within its era, always positive.
    pub fn year_of_era(self) -> i32 {
        match self.era() {
            EthiopianEra::AmeteMihret => self.0.year,
            EthiopianEra::AmeteAlem => self.0.year + AMETE_ALEM_OFFSET,
        }
    }

    /// The raw proleptic Amete Mihret year, which may be zero or negative.
    pub fn mihret(self) -> i32 {
        self.0.year
    }

    fn ad_from_ymd(year: i32, month: i64, dom: i64) -> i64 {
        // AD = MIHRET_EPOCH - 1 + 365*(y-1) + floor(y/4) + 30*(month-1) + dom
        let epoch = Ethiopian::epoch().get_day_i();
        let y = year as i64;
        epoch - 1 + 365 * (y - 1) + y.div_euclid(4) + 30 * (month - 1) + dom
    }
}

impl AllowYearZero for Ethiopian {}

impl HasLeapYears for Ethiopian {
    fn is_leap(mihret: i32) -> bool {
        let year_of_era = if mihret < 1 {
            mihret + AMETE_ALEM_OFFSET
        } else {
            mihret
        };
        year_of_era.modulus(4) == 3
    }
}

impl CalculatedBounds for Ethiopian {}

impl Epoch for Ethiopian {
    fn epoch() -> Fixed {
        RataDie::new(ETHIOPIC_EPOCH_RD as f64).to_fixed()
    }
}

impl FromFixed for Ethiopian {
    fn from_fixed(date: Fixed) -> Ethiopian {
        let d = date.get_day_i();
        let epoch = Ethiopian::epoch().get_day_i();
        let year = ((4 * (d - epoch) + 1463).div_euclid(1461)) as i32;
        let year_start = Ethiopian::ad_from_ymd(year, 1, 1);
        let day_of_year = (d - year_start + 1) as i64;
        let month = ((day_of_year - 1).div_euclid(30) + 1) as u8;
        let dom = (day_of_year - 30 * ((month as i64) - 1)) as u8;
        Ethiopian(CommonDate::new(year, month, dom))
    }
}

impl ToFixed for Ethiopian {
    fn to_fixed(self) -> Fixed {
        let ad = Ethiopian::ad_from_ymd(self.0.year, self.0.month as i64, self.0.day as i64);
        Fixed::cast_new(ad)
    }
}

impl ToFromCommonDate<EthiopianMonth> for Ethiopian {
    fn to_common_date(self) -> CommonDate {
        self.0
    }

    fn from_common_date_unchecked(date: CommonDate) -> Self {
        debug_assert!(Self::valid_month_day(date).is_ok());
        Self(date)
    }

    fn valid_month_day(date: CommonDate) -> Result<(), CalendarError> {
        let month_opt = EthiopianMonth::from_u8(date.month);
        match month_opt {
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
        let m = EthiopianMonth::Pagume;
        CommonDate::new(year, m as u8, Self::month_length(year, m))
    }

    fn month_length(year: i32, month: EthiopianMonth) -> u8 {
        match month {
            EthiopianMonth::Pagume => {
                if Ethiopian::is_leap(year) {
                    6
                } else {
                    5
                }
            }
            _ => 30,
        }
    }
}

impl Quarter for Ethiopian {
    fn quarter(self) -> NonZero<u8> {
        let q = std::cmp::min(((self.0.month - 1) / 3) + 1, 4);
        NonZero::new(q).expect("always in 1..=4")
    }
}

impl GuaranteedMonth<EthiopianMonth> for Ethiopian {}
impl CommonWeekOfYear<EthiopianMonth> for Ethiopian {}

impl ToFromOrdinalDate for Ethiopian {
    fn valid_ordinal(ord: OrdinalDate) -> Result<(), CalendarError> {
        let correction = if Ethiopian::is_leap(ord.year) { 1 } else { 0 };
        if ord.day_of_year > 0 && ord.day_of_year <= (365 + correction) {
            Ok(())
        } else {
            Err(CalendarError::InvalidDate)
        }
    }

    fn ordinal_from_fixed(fixed_date: Fixed) -> OrdinalDate {
        Ethiopian::from_fixed(fixed_date).to_ordinal()
    }

    fn to_ordinal(self) -> OrdinalDate {
        let day_of_year = 30 * ((self.0.month as i64) - 1) + self.0.day as i64;
        OrdinalDate {
            year: self.0.year,
            day_of_year: day_of_year as u16,
        }
    }

    fn from_ordinal_unchecked(ord: OrdinalDate) -> Self {
        let month = (((ord.day_of_year as i64) - 1).div_euclid(30) + 1) as u8;
        let dom = (ord.day_of_year as i64 - 30 * ((month as i64) - 1)) as u8;
        Ethiopian(CommonDate::new(ord.year, month, dom))
    }
}

impl ChronoElement for Ethiopian {
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
            Element::Era => match self.era() {
                EthiopianEra::AmeteAlem => 0,
                EthiopianEra::AmeteMihret => 1,
            },
        }
    }

    fn get_min(self, element: Element) -> i64 {
        match element {
            Element::Year => i32::MIN as i64,
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
            Element::Year => i32::MAX as i64,
            Element::Month => 13,
            Element::DayOfMonth => {
                let m = EthiopianMonth::from_u8(cd.month).expect("valid date has a valid month");
                Self::month_length(cd.year, m) as i64
            }
            Element::DayOfYear => {
                if Ethiopian::is_leap(cd.year) {
                    366
                } else {
                    365
                }
            }
            Element::DayOfWeek => 6,
            Element::Era => 1,
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
                if !(1..=13).contains(&value) {
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
                Self::try_from_ordinal(OrdinalDate {
                    year: cd.year,
                    day_of_year: doy as u16,
                })
            }
            Element::DayOfWeek => {
                let w = Weekday::from_i64(value).ok_or(CalendarError::OutOfRange)?;
                Ok(Self::from_fixed(w.nearest(self.to_fixed())))
            }
            Element::Era => {
                let era = match value {
                    0 => EthiopianEra::AmeteAlem,
                    1 => EthiopianEra::AmeteMihret,
                    _ => return Err(CalendarError::InvalidEra),
                };
                Self::try_new(era, self.year_of_era(), self.month(), self.day())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_count::FIXED_MAX;
    use crate::day_count::FIXED_MIN;
    use proptest::proptest;

    #[test]
    fn epoch_is_mihret_1_1_1() {
        let d = Ethiopian::try_from_common_date(CommonDate::new(1, 1, 1)).unwrap();
        assert_eq!(d.to_fixed().get_day_i(), ETHIOPIC_EPOCH_RD as i64);
    }

    #[test]
    fn era_2007_is_leap() {
        // 2007 years of AmeteMihret correspond to Gregorian 2014/2015;
        // Ethiopian.of(AmeteMihret, 2007, 13, 6) is valid iff 2007 mod 4 == 3 (true)
        assert_eq!(2007 % 4, 3);
        let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2007, EthiopianMonth::Pagume, 6);
        assert!(d.is_ok());
        assert!(Ethiopian::is_leap(2007));
    }

    #[test]
    fn non_leap_year_pagume_has_5_days() {
        assert!(!Ethiopian::is_leap(2006));
        let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2006, EthiopianMonth::Pagume, 6);
        assert!(d.is_err());
        let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2006, EthiopianMonth::Pagume, 5);
        assert!(d.is_ok());
    }

    #[test]
    fn amete_alem_offset() {
        let d =
            Ethiopian::try_new(EthiopianEra::AmeteAlem, 7507, EthiopianMonth::Meskerem, 1).unwrap();
        assert_eq!(d.era(), EthiopianEra::AmeteAlem);
        assert_eq!(d.year_of_era(), 7507);
        assert_eq!(d.mihret(), 2007);
    }

    #[test]
    fn pagume_6_is_last_day_of_a_leap_year() {
        let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2007, EthiopianMonth::Pagume, 6).unwrap();
        assert_eq!(d.to_ordinal().day_of_year, 366);
    }

    #[test]
    fn with_day_of_month_is_lenient_to_nearest() {
        let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2006, EthiopianMonth::Pagume, 1).unwrap();
        assert!(d.with(Element::DayOfMonth, 6, false).is_err());
        assert_eq!(
            d.with(Element::DayOfMonth, 6, true).unwrap().day(),
            5
        );
    }

    #[test]
    fn with_era_recomputes_mihret() {
        let d = Ethiopian::try_new(EthiopianEra::AmeteMihret, 2007, EthiopianMonth::Meskerem, 1).unwrap();
        let alem = d.with(Element::Era, 0, false).unwrap();
        assert_eq!(alem.era(), EthiopianEra::AmeteAlem);
        assert_eq!(alem.year_of_era(), 2007);
    }

    proptest! {
        #[test]
        fn roundtrip(t in FIXED_MIN..FIXED_MAX) {
            let f = Fixed::new(t.floor());
            let e = Ethiopian::from_fixed(f);
            assert_eq!(e.to_fixed(), f);
        }

        #[test]
        fn ordinal_roundtrip(t in FIXED_MIN..FIXED_MAX) {
            let f = Fixed::new(t.floor());
            let e = Ethiopian::from_fixed(f);
            let ord = e.to_ordinal();
            assert_eq!(Ethiopian::from_ordinal_unchecked(ord), e);
        }
    }
}
