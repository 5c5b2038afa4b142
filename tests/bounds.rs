use polycal::calendar::*;
use polycal::day_count::BoundedDayCount;
use polycal::day_count::EffectiveBound;
use polycal::day_count::Fixed;
use polycal::day_count::FromFixed;
use polycal::day_count::JulianDay;
use polycal::day_count::ModifiedJulianDay;
use polycal::day_count::RataDie;
use polycal::day_count::UnixMoment;

fn bounds_actually_work<T: EffectiveBound + FromFixed + std::cmp::PartialOrd>() {
    assert!(T::from_fixed(Fixed::effective_min()) < T::from_fixed(Fixed::cast_new(0)));
    assert!(T::from_fixed(Fixed::effective_max()) > T::from_fixed(Fixed::cast_new(0)));
    assert!(T::effective_min() < T::effective_max())
}

#[test]
fn gregorian() {
    bounds_actually_work::<Gregorian>();
}

#[test]
fn julian() {
    bounds_actually_work::<Julian>();
}

#[test]
fn ethiopian() {
    bounds_actually_work::<Ethiopian>();
}

#[test]
fn persian() {
    bounds_actually_work::<Persian>();
}

#[test]
fn day_count_moments() {
    bounds_actually_work::<JulianDay>();
    bounds_actually_work::<ModifiedJulianDay>();
    bounds_actually_work::<RataDie>();
    bounds_actually_work::<UnixMoment>();
}
