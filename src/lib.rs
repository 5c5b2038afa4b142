#[macro_use]
extern crate num_derive;

mod common {
    pub mod error;
    pub mod math;
}
pub use common::error;
pub use common::math;

pub mod day_count {
    mod fixed;
    mod jd;
    mod mjd;
    mod prelude;
    mod rd;
    mod unix;

    pub use fixed::CalculatedBounds;
    pub use fixed::Epoch;
    pub use fixed::Fixed;
    pub use fixed::FromFixed;
    pub use fixed::ToFixed;
    pub use fixed::FIXED_MAX;
    pub use fixed::FIXED_MIN;
    pub use jd::JulianDay;
    pub use mjd::ModifiedJulianDay;
    pub use prelude::BoundedDayCount;
    pub use prelude::EffectiveBound;
    pub use rd::RataDie;
    pub use unix::UnixMoment;
}

pub mod day_cycle {
    mod prelude;
    mod week;

    pub use prelude::BoundedCycle;
    pub use prelude::OnOrBefore;
    pub use week::Weekday;
}

pub mod astro;

pub mod calendar {
    pub mod prelude;
    pub use prelude::AllowYearZero;
    pub use prelude::ChronoElement;
    pub use prelude::CommonArithmetic;
    pub use prelude::CommonDate;
    pub use prelude::CommonWeekOfYear;
    pub use prelude::DateUnit;
    pub use prelude::Element;
    pub use prelude::GuaranteedMonth;
    pub use prelude::HasIntercalaryDays;
    pub use prelude::HasLeapYears;
    pub use prelude::OrdinalDate;
    pub use prelude::Perennial;
    pub use prelude::Quarter;
    pub use prelude::ToFromCommonDate;
    pub use prelude::ToFromOrdinalDate;

    mod east_asian;
    mod ethiopian;
    mod gregorian;
    mod julian;
    mod nengo;
    mod persian;

    pub use east_asian::ChinaEastAsian;
    pub use east_asian::ChinaZone;
    pub use east_asian::CyclicYear;
    pub use east_asian::EastAsianCalendar;
    pub use east_asian::EastAsianDate;
    pub use east_asian::EastAsianMonth;
    pub use east_asian::EastAsianZone;
    pub use east_asian::KoreaEastAsian;
    pub use east_asian::KoreaZone;
    pub use east_asian::VietnamEastAsian;
    pub use east_asian::VietnamZone;
    pub use ethiopian::Ethiopian;
    pub use ethiopian::EthiopianEra;
    pub use ethiopian::EthiopianMonth;
    pub use gregorian::Gregorian;
    pub use gregorian::GregorianMonth;
    pub use julian::Julian;
    pub use julian::JulianEra;
    pub use julian::JulianMonth;
    pub use nengo::decode_asset;
    pub use nengo::encode_asset;
    pub use nengo::parse_supplemental_era;
    pub use nengo::table as nengo_table;
    pub use nengo::Court;
    pub use nengo::Nengo;
    pub use nengo::NengoTable;
    pub use nengo::Selector;
    pub use nengo::SupplementalEra;
    pub use persian::Persian;
    pub use persian::PersianAlgorithm;
    pub use persian::PersianMonth;
    pub use persian::PersianView;
    pub use persian::DEFAULT_ASTRONOMICAL_OFFSET;
}
