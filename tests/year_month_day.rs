use num_traits::FromPrimitive;
use num_traits::ToPrimitive;
use proptest::prop_assume;
use proptest::proptest;
use polycal::calendar::CommonDate;
use polycal::calendar::Ethiopian;
use polycal::calendar::EthiopianMonth;
use polycal::calendar::Gregorian;
use polycal::calendar::GregorianMonth;
use polycal::calendar::HasLeapYears;
use polycal::calendar::Julian;
use polycal::calendar::JulianMonth;
use polycal::calendar::Persian;
use polycal::calendar::PersianMonth;
use polycal::calendar::ToFromCommonDate;
use polycal::day_count::FIXED_MAX;

const MAX_YEARS: i32 = (FIXED_MAX / 365.25) as i32;

fn common_date_roundtrip<S: FromPrimitive + ToPrimitive, T: ToFromCommonDate<S>>(d: CommonDate) {
    let e0 = T::try_from_common_date(d).unwrap();
    assert_eq!(e0.to_common_date(), d);
}

fn month_is_some<S: FromPrimitive + ToPrimitive, T: ToFromCommonDate<S>>(
    year: i32,
    month: u8,
    day: u8,
) {
    let d = CommonDate {
        year,
        month,
        day,
    };
    common_date_roundtrip::<S, T>(d);
}

fn month_is_none<S: FromPrimitive + ToPrimitive, T: ToFromCommonDate<S>>(
    year: i32,
    month: u8,
    day: u8,
) {
    let d = CommonDate {
        year,
        month,
        day,
    };
    assert!(T::try_from_common_date(d).is_err());
}

proptest! {
    #[test]
    fn gregorian_month_start(year in -MAX_YEARS..MAX_YEARS, month in 1..12, day in 1..27) {
        month_is_some::<GregorianMonth, Gregorian>(year, month as u8, day as u8);
    }

    #[test]
    fn gregorian_month_end(year in -MAX_YEARS..MAX_YEARS, month in 1..12) {
        let min: u8 = 28;
        let max: u8 = Gregorian::month_length(year, GregorianMonth::from_u8(month as u8).unwrap()) + 1;
        for d in min..max {
            month_is_some::<GregorianMonth, Gregorian>(year, month as u8, d);
        }
    }

    #[test]
    fn gregorian_month_is_none(year in -MAX_YEARS..MAX_YEARS, day in 1..5) {
        month_is_none::<GregorianMonth, Gregorian>(year, 13, day as u8);
    }

    #[test]
    fn julian_month_start(year in -MAX_YEARS..MAX_YEARS, month in 1..12, day in 1..27) {
        prop_assume!(year != 0);
        month_is_some::<JulianMonth, Julian>(year, month as u8, day as u8);
    }

    #[test]
    fn julian_month_end(year in -MAX_YEARS..MAX_YEARS, month in 1..12) {
        prop_assume!(year != 0);
        let min: u8 = 28;
        let max: u8 = Julian::month_length(year, JulianMonth::from_u8(month as u8).unwrap()) + 1;
        for d in min..max {
            month_is_some::<JulianMonth, Julian>(year, month as u8, d);
        }
    }

    #[test]
    fn julian_month_is_none(year in -MAX_YEARS..MAX_YEARS, day in 1..5) {
        prop_assume!(year != 0);
        month_is_none::<JulianMonth, Julian>(year, 13, day as u8);
    }

    #[test]
    fn ethiopian_month_normal(year in -MAX_YEARS..MAX_YEARS, month in 1..12, day in 1..30) {
        month_is_some::<EthiopianMonth, Ethiopian>(year, month as u8, day as u8);
    }

    #[test]
    fn ethiopian_month_pagume(year in -MAX_YEARS..MAX_YEARS, day in 1..5) {
        month_is_some::<EthiopianMonth, Ethiopian>(year, 13, day as u8);
        if Ethiopian::is_leap(year) {
            month_is_some::<EthiopianMonth, Ethiopian>(year, 13, 6);
        }
    }

    #[test]
    fn ethiopian_month_is_none(year in -MAX_YEARS..MAX_YEARS, day in 1..5) {
        month_is_none::<EthiopianMonth, Ethiopian>(year, 14, day as u8);
    }

    #[test]
    fn persian_month_normal(year in 1..3000, month in 1..12, day in 1..29) {
        month_is_some::<PersianMonth, Persian>(year, month as u8, day as u8);
    }

    #[test]
    fn persian_month_esfand(year in 1..3000) {
        let max: u8 = Persian::month_length(year, PersianMonth::Esfand) + 1;
        for d in 1..max {
            month_is_some::<PersianMonth, Persian>(year, 12, d);
        }
    }

    #[test]
    fn persian_month_is_none(year in 1..3000, day in 1..5) {
        month_is_none::<PersianMonth, Persian>(year, 13, day as u8);
    }
}
