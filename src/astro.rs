// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Astronomical primitives shared by the East Asian lunisolar engine and the
//! Persian astronomical algorithm: solar longitude, lunar phase, winter
//! solstice / new moon search.
//!
//! The series used for solar and lunar position are the standard
//! low-precision truncated forms found in general astronomical references
//! (good to roughly a minute of time); `ephemeris_correction` is a simple
//! long-term delta-T approximation. Per the documented approximation
//! allowance, neither claims microsecond precision.

use crate::calendar::gregorian::Gregorian;
use crate::calendar::prelude::ToFromCommonDate;
use crate::common::math::TermNum;
use crate::day_count::BoundedDayCount;
use crate::day_count::Fixed;
use crate::day_count::FromFixed;
use crate::day_count::JulianDay;
use crate::day_count::ToFixed;

/// Mean tropical year, in days. Used to estimate the spacing between
/// consecutive solar-longitude crossings (e.g. winter solstices).
pub const MEAN_TROPICAL_YEAR: f64 = 365.242189;
/// Mean synodic month, in days. `lunations(m1, m2)` in the East Asian engine
/// divides a day-count difference by this constant.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;

fn degrees(x: f64) -> f64 {
    x.to_radians()
}

fn sin_deg(x: f64) -> f64 {
    degrees(x).sin()
}

/// Approximate delta-T (TT - UT) in days, for the given Gregorian year.
///
/// Uses a quadratic fit for 1900-2100 and the long-term Morrison/Stephenson
/// parabola outside that range. This is the "documented approximation" the
/// spec permits instead of a full historical delta-T table.
fn ephemeris_correction_days(year: f64) -> f64 {
    let seconds = if (1900.0..=2100.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };
    seconds / 86400.0
}

fn year_of(t: Fixed) -> f64 {
    Gregorian::from_fixed(t).to_common_date().year as f64
}

fn dynamical_from_universal(t: Fixed) -> Fixed {
    Fixed::new(t.get() + ephemeris_correction_days(year_of(t)))
}

fn universal_from_dynamical(t: Fixed) -> Fixed {
    Fixed::new(t.get() - ephemeris_correction_days(year_of(t)))
}

fn julian_centuries(t: Fixed) -> f64 {
    // J2000.0 (2000-01-01 12:00) expressed as a Rata Die-based JulianDay.
    let j2000 = JulianDay::new(2451545.0).to_fixed();
    (dynamical_from_universal(t).get() - j2000.get()) / 36525.0
}

/// Apparent solar longitude (degrees, 0..360) at moment `t` (in universal time).
///
/// Low-precision solar position series (geometric mean longitude, mean
/// anomaly, equation of center) plus an aberration/nutation correction.
pub fn solar_longitude(t: Fixed) -> f64 {
    let c = julian_centuries(t);
    let l0 = 280.46646 + 36000.76983 * c + 0.0003032 * c * c;
    let m = 357.52911 + 35999.05029 * c - 0.0001537 * c * c;
    let center = (1.914602 - 0.004817 * c - 0.000014 * c * c) * sin_deg(m)
        + (0.019993 - 0.000101 * c) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m);
    let true_longitude = l0 + center;
    let omega = 125.04 - 1934.136 * c;
    let apparent = true_longitude - 0.00569 - 0.00478 * sin_deg(omega);
    apparent.modulus(360.0)
}

/// Apparent lunar longitude (degrees, 0..360) at moment `t` (in universal time).
///
/// Truncated ELP2000-style series: mean longitude plus the dozen or so
/// dominant periodic terms (the full series has several hundred).
pub fn lunar_longitude(t: Fixed) -> f64 {
    let c = julian_centuries(t);
    let lp = 218.3164477 + 481267.88123421 * c - 0.0015786 * c.powi(2) + c.powi(3) / 538841.0
        - c.powi(4) / 65194000.0;
    let d = 297.8501921 + 445267.1114034 * c - 0.0018819 * c.powi(2) + c.powi(3) / 545868.0
        - c.powi(4) / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * c - 0.0001536 * c.powi(2) + c.powi(3) / 24490000.0;
    let mp = 134.9633964 + 477198.8675055 * c + 0.0087414 * c.powi(2) + c.powi(3) / 69699.0
        - c.powi(4) / 14712000.0;
    let f = 93.2720950 + 483202.0175233 * c - 0.0036539 * c.powi(2) - c.powi(3) / 3526000.0
        + c.powi(4) / 863310000.0;

    let delta = 6.288774 * sin_deg(mp)
        + 1.274027 * sin_deg(2.0 * d - mp)
        + 0.658314 * sin_deg(2.0 * d)
        + 0.213618 * sin_deg(2.0 * mp)
        - 0.185116 * sin_deg(m)
        - 0.114332 * sin_deg(2.0 * f)
        + 0.058793 * sin_deg(2.0 * d - 2.0 * mp)
        + 0.057066 * sin_deg(2.0 * d - m - mp)
        + 0.053322 * sin_deg(2.0 * d + mp)
        + 0.045758 * sin_deg(2.0 * d - m)
        - 0.040923 * sin_deg(m - mp)
        - 0.034720 * sin_deg(d)
        - 0.030383 * sin_deg(m + mp)
        + 0.015327 * sin_deg(2.0 * d - 2.0 * f)
        - 0.012528 * sin_deg(mp + 2.0 * f);

    (lp + delta).modulus(360.0)
}

/// Lunar phase (degrees, 0..360): the angular difference moon-minus-sun.
/// A new moon is the instant this crosses 0.
pub fn lunar_phase(t: Fixed) -> f64 {
    (lunar_longitude(t) - solar_longitude(t)).modulus(360.0)
}

/// The n-th new moon (dynamical time, n=0 near 2000-01-06), via the standard
/// mean-new-moon formula with its dominant periodic corrections.
fn nth_new_moon(n: f64) -> Fixed {
    let k = n; // counted from the 2000-01-06 new moon
    let t = k / 1236.85;
    let jde = 2451550.09766 + 29.530588861 * k + 0.00015437 * t * t
        - 0.000000150 * t.powi(3)
        + 0.00000000073 * t.powi(4);

    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let m = (2.5534 + 29.10535670 * k - 0.0000014 * t * t - 0.00000011 * t.powi(3)).modulus(360.0);
    let mp = (201.5643 + 385.81693528 * k + 0.0107582 * t * t + 0.00001238 * t.powi(3)
        - 0.000000058 * t.powi(4))
    .modulus(360.0);
    let f = (160.7108 + 390.67050284 * k - 0.0016118 * t * t - 0.00000227 * t.powi(3)
        + 0.000000011 * t.powi(4))
    .modulus(360.0);
    let omega =
        (124.7746 - 1.56375588 * k + 0.0020672 * t * t + 0.00000215 * t.powi(3)).modulus(360.0);

    let correction = -0.40720 * sin_deg(mp)
        + 0.17241 * e * sin_deg(m)
        + 0.01608 * sin_deg(2.0 * mp)
        + 0.01039 * sin_deg(2.0 * f)
        + 0.00739 * e * sin_deg(mp - m)
        - 0.00514 * e * sin_deg(mp + m)
        + 0.00208 * e * e * sin_deg(2.0 * m)
        - 0.00111 * sin_deg(mp - 2.0 * f)
        - 0.00057 * sin_deg(mp + 2.0 * f)
        + 0.00056 * e * sin_deg(2.0 * mp + m)
        - 0.00042 * sin_deg(3.0 * mp)
        + 0.00042 * e * sin_deg(m + 2.0 * f)
        + 0.00038 * e * sin_deg(m - 2.0 * f)
        - 0.00024 * e * sin_deg(2.0 * mp - m)
        - 0.00017 * sin_deg(omega)
        - 0.00007 * sin_deg(mp + 2.0 * m)
        + 0.00004 * sin_deg(2.0 * mp - 2.0 * f)
        + 0.00004 * sin_deg(3.0 * m)
        + 0.00003 * sin_deg(mp + m - 2.0 * f)
        - 0.00003 * sin_deg(mp + m + 2.0 * f);

    let jde_true = jde + correction;
    let universal = JulianDay::new(jde_true).to_fixed();
    universal_from_dynamical(universal)
}

fn new_moon_index_near(t: Fixed) -> f64 {
    let year = year_of(t) + (Gregorian::from_fixed(t).to_common_date().month as f64 - 0.5) / 12.0;
    ((year - 2000.0) * 12.3685).round()
}

/// Smallest new moon at or after `t` (universal time), as a `Fixed` moment.
pub fn new_moon_at_or_after(t: Fixed) -> Fixed {
    let mut k = new_moon_index_near(t) - 2.0;
    let mut candidate = nth_new_moon(k);
    while candidate.get() < t.get() {
        k += 1.0;
        candidate = nth_new_moon(k);
    }
    candidate
}

/// Largest new moon strictly before `t` (universal time), as a `Fixed` moment.
pub fn new_moon_before(t: Fixed) -> Fixed {
    let mut k = new_moon_index_near(t) + 2.0;
    let mut candidate = nth_new_moon(k);
    while candidate.get() >= t.get() {
        k -= 1.0;
        candidate = nth_new_moon(k);
    }
    candidate
}

/// Smallest moment at or after `t` at which the solar longitude equals `phi`
/// (degrees, normalized mod 360).
///
/// cf. the "invert an angular function" technique of Calendrical Calculations
/// ch. 13-14: estimate via the mean rate of change, then bisect.
pub fn solar_longitude_after(phi: f64, t: Fixed) -> Fixed {
    let phi = phi.modulus(360.0);
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let delta = (phi - solar_longitude(t)).modulus(360.0);
    let tau = t.get() + rate * delta;
    let lo = (tau - 5.0).max(t.get());
    let hi = tau + 5.0;
    let x = f64::binary_search(
        lo,
        hi,
        |x| (solar_longitude(Fixed::new(x)) - phi).modulus(360.0) < 180.0,
        |l, h| (h - l) < 0.00001,
    );
    Fixed::new(x)
}

/// AD of the local (zone `offset_hours`) day containing the nearest winter
/// solstice at or before `t`.
pub fn winter_on_or_before(t: Fixed, offset_hours: f64) -> i64 {
    let mut crossing = solar_longitude_after(270.0, Fixed::new(t.get() - 370.0));
    loop {
        let next = solar_longitude_after(270.0, Fixed::new(crossing.get() + 5.0));
        if next.get() > t.get() {
            break;
        }
        crossing = next;
    }
    local_day(crossing, offset_hours)
}

/// AD of the local (zone `offset_hours`) day containing the smallest new
/// moon at or after `t`.
pub fn new_moon_on_or_after_day(t: Fixed, offset_hours: f64) -> i64 {
    local_day(new_moon_at_or_after(t), offset_hours)
}

/// AD of the local (zone `offset_hours`) day containing the largest new moon
/// strictly before `t`.
pub fn new_moon_before_day(t: Fixed, offset_hours: f64) -> i64 {
    local_day(new_moon_before(t), offset_hours)
}

/// The major solar term index (1..=12) containing moment `t`, local to `offset_hours`.
///
/// The absolute mapping to a zodiac sign is not load-bearing: only equality
/// between two calls (used by the leap-month test) matters.
pub fn solar_longitude_index_major(t: Fixed, offset_hours: f64) -> i32 {
    let local_midday = Fixed::new((local_day(t, offset_hours) as f64) - offset_hours / 24.0 + 0.5);
    let lon = solar_longitude(local_midday);
    ((lon / 30.0).floor() as i32).modulus(12) + 1
}

/// `lunations(m1, m2)`: the (possibly negative) number of synodic months
/// between two day numbers, per spec 4.1.
pub fn lunations(m1: i64, m2: i64) -> i64 {
    (((m2 - m1) as f64) / MEAN_SYNODIC_MONTH).round() as i64
}

fn local_day(t: Fixed, offset_hours: f64) -> i64 {
    (t.get() + offset_hours / 24.0).floor() as i64
}

/// Vernal equinox (solar longitude 0) at or after `t`, local to `offset_hours`,
/// returned as an AD day number, applying the "after local noon rolls
/// forward one day" convention used by the Persian astronomical algorithm.
pub fn vernal_equinox_day(t: Fixed, offset_hours: f64) -> i64 {
    let crossing = solar_longitude_after(0.0, t);
    let local = crossing.get() + offset_hours / 24.0;
    let day = local.floor();
    let frac = local - day;
    if frac > 0.5 {
        day as i64 + 1
    } else {
        day as i64
    }
}
