use num_traits::FromPrimitive;
use num_traits::ToPrimitive;
use proptest::proptest;
use polycal::calendar::Ethiopian;
use polycal::calendar::EthiopianMonth;
use polycal::calendar::Gregorian;
use polycal::calendar::GregorianMonth;
use polycal::calendar::Julian;
use polycal::calendar::JulianMonth;
use polycal::calendar::Persian;
use polycal::calendar::PersianMonth;
use polycal::calendar::ToFromCommonDate;
use polycal::calendar::ToFromOrdinalDate;
use polycal::day_count::BoundedDayCount;
use polycal::day_count::Fixed;
use polycal::day_count::FromFixed;
use polycal::day_count::FIXED_MAX;
use polycal::day_count::FIXED_MIN;
use std::fmt::Debug;

fn one_more_day<S: FromPrimitive + ToPrimitive, T: ToFromCommonDate<S> + FromFixed + Debug>(
    t: f64,
) {
    let f0 = Fixed::new(t);
    let f1 = Fixed::new(t + 1.0);
    let d0 = T::from_fixed(f0).to_common_date();
    let d1 = T::from_fixed(f1).to_common_date();
    if d0.year != d1.year {
        assert_eq!(d1.year, d0.year + 1);
        assert_eq!(d1.month, 1);
        assert_eq!(d1.day, 1);
        assert_eq!(d0, T::year_end_date(d0.year));
        assert_eq!(d1, T::year_start_date(d1.year));
    } else if d0.month != d1.month {
        assert_eq!(d1.year, d0.year);
        assert_eq!(d1.month, d0.month + 1);
        assert_eq!(d1.day, 1);
    } else if d0.day != d1.day {
        assert_eq!(d1.year, d0.year);
        assert_eq!(d1.month, d0.month);
        assert_eq!(d1.day, d0.day + 1);
    } else {
        panic!("Added one day but the dates are equal");
    }
}

fn one_more_day_ordinal<T: FromFixed + ToFromOrdinalDate>(t: f64) {
    let f0 = Fixed::new(t);
    let f1 = Fixed::new(t + 1.0);
    let ord0 = T::ordinal_from_fixed(f0);
    let ord1 = T::ordinal_from_fixed(f1);
    if ord0.year == ord1.year {
        assert_eq!(ord1.year, ord0.year);
        assert_eq!(ord1.day_of_year, ord0.day_of_year + 1);
    } else {
        assert_eq!(ord1.year, ord0.year + 1);
        assert_eq!(ord1.day_of_year, 1);
    }
}

proptest! {
    #[test]
    fn gregorian(t in FIXED_MIN..FIXED_MAX) {
        one_more_day::<GregorianMonth, Gregorian>(t);
    }

    #[test]
    fn gregorian_ordinal(t in FIXED_MIN..FIXED_MAX) {
        one_more_day_ordinal::<Gregorian>(t);
    }

    #[test]
    fn julian_ad(t in FIXED_MIN..-7.0) {
        //Avoiding year 0
        one_more_day::<JulianMonth, Julian>(t);
    }

    #[test]
    fn julian_bc(t in 7.0..FIXED_MAX) {
        //Avoiding year 0
        one_more_day::<JulianMonth, Julian>(t);
    }

    #[test]
    fn julian_ad_ordinal(t in FIXED_MIN..-7.0) {
        //Avoiding year 0
        one_more_day_ordinal::<Julian>(t);
    }

    #[test]
    fn julian_bc_ordinal(t in 7.0..FIXED_MAX) {
        //Avoiding year 0
        one_more_day_ordinal::<Julian>(t);
    }

    #[test]
    fn ethiopian(t in FIXED_MIN..FIXED_MAX) {
        one_more_day::<EthiopianMonth, Ethiopian>(t);
    }

    #[test]
    fn persian(t in FIXED_MIN..FIXED_MAX) {
        one_more_day::<PersianMonth, Persian>(t);
    }
}
