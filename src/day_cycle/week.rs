// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::day_count::fixed::Fixed;
use crate::day_count::fixed::FromFixed;
use crate::day_cycle::prelude::BoundedCycle;
use crate::day_cycle::prelude::OnOrBefore;
#[allow(unused_imports)] //FromPrimitive is needed for derive
use num_traits::FromPrimitive;

/// A day of the week, Sunday-first.
///
/// This is the shared weekday type used by every calendar's `dayOfWeek`
/// accessor; it is deliberately calendar-agnostic.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl BoundedCycle<7, 0> for Weekday {}

impl FromFixed for Weekday {
    fn from_fixed(t: Fixed) -> Weekday {
        Weekday::from_unbounded(t.get_day_i())
    }
}

impl OnOrBefore<7, 0> for Weekday {
    fn raw_on_or_before(self, date: i64) -> Fixed {
        //LISTING 1.60 (*Calendrical Calculations: The Ultimate Edition* by Reingold & Dershowitz.)
        let k = self.to_unbounded();
        Fixed::cast_new(date - Weekday::from_unbounded(date - k).to_unbounded())
    }
}
