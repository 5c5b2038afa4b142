// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

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
use polycal::day_count::Fixed;
use polycal::day_count::FromFixed;
use polycal::day_count::FIXED_MAX;
use polycal::day_count::FIXED_MIN;
use std::fmt::Debug;

fn valid_day<S: FromPrimitive + ToPrimitive, T: FromFixed + ToFromCommonDate<S> + Debug>(t: f64) {
    let f = Fixed::new(t);
    let d = T::from_fixed(f);
    assert!(T::valid_month_day(d.to_common_date()).is_ok());
}

proptest! {
    #[test]
    fn gregorian(t in FIXED_MIN..FIXED_MAX) {
        valid_day::<GregorianMonth, Gregorian>(t);
    }

    #[test]
    fn julian(t in FIXED_MIN..FIXED_MAX) {
        valid_day::<JulianMonth, Julian>(t);
    }

    #[test]
    fn ethiopian(t in FIXED_MIN..FIXED_MAX) {
        valid_day::<EthiopianMonth, Ethiopian>(t);
    }

    #[test]
    fn persian(t in FIXED_MIN..FIXED_MAX) {
        valid_day::<PersianMonth, Persian>(t);
    }
}
