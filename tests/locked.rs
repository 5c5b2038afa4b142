// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use proptest::proptest;
use polycal::calendar::Ethiopian;
use polycal::calendar::EthiopianEra;
use polycal::calendar::EthiopianMonth;
use polycal::calendar::Julian;
use polycal::calendar::ToFromCommonDate;
use polycal::day_count::FIXED_MAX;
use polycal::day_count::FromFixed;
use polycal::day_count::ToFixed;

const MAX_YEARS: i32 = (FIXED_MAX / 1500.0) as i32;

proptest! {
    // Both the Ethiopian and the Julian leap rule are an unconditional "every
    // fourth year" cycle with no century exception, so any two dates exactly
    // four years apart in one calendar are exactly 1461 days apart, and the
    // other calendar - walking the same uninterrupted cycle - lands on the
    // same month and day four (its own) years later.
    #[test]
    fn ethiopian_locked_to_julian(year in 1..MAX_YEARS) {
        let e0 = Ethiopian::try_new(EthiopianEra::AmeteMihret, year, EthiopianMonth::Meskerem, 1).unwrap();
        let e1 = Ethiopian::try_new(EthiopianEra::AmeteMihret, year + 4, EthiopianMonth::Meskerem, 1).unwrap();
        let f0 = e0.to_fixed();
        let f1 = e1.to_fixed();
        assert_eq!(f1.get_day_i() - f0.get_day_i(), 1461);

        let j0 = Julian::from_fixed(f0).to_common_date();
        let j1 = Julian::from_fixed(f1).to_common_date();
        assert_eq!(j1.year, j0.year + 4);
        assert_eq!(j1.month, j0.month);
        assert_eq!(j1.day, j0.day);
    }
}
