// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolution of Japanese nengo (era names) against the absolute-day timeline.
//!
//! The table is loaded once, lazily, from a packed binary record stream (see
//! [`decode_asset`]/[`encode_asset`]) and is immutable afterward. A single
//! process-local table may additionally be grown at start-up from the
//! `japanese.supplemental.era` environment entry (see [`parse_supplemental_era`]).

use crate::calendar::gregorian::Gregorian;
use crate::calendar::gregorian::GregorianMonth;
use crate::calendar::prelude::CommonDate;
use crate::calendar::prelude::ToFromCommonDate;
use crate::common::error::CalendarError;
use crate::day_count::ToFixed;
use num_traits::FromPrimitive;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Which imperial court issued a nengo. Only relevant during the Nanboku-chō
/// schism (1336-1392), when northern and southern claimants each issued their
/// own era names.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Court {
    Standard,
    Northern,
    Southern,
}

/// A filter over the nengo table by historical period or court lineage.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Selector {
    /// Standard and Southern court eras; excludes the Northern parallel list.
    Official,
    /// Meiji (1868) onward.
    Modern,
    EdoPeriod,
    AzuchiMomoyamaPeriod,
    MuromachiPeriod,
    NorthernCourt,
    SouthernCourt,
    KamakuraPeriod,
    HeianPeriod,
    NaraPeriod,
    AsukaPeriod,
}

/// A single Japanese era record.
#[derive(Debug, Clone)]
pub struct Nengo {
    first_related_gregorian_year: i32,
    start_abs_day: i64,
    kanji: String,
    chinese: String,
    korean: String,
    russian: String,
    court: Court,
    romaji: Vec<String>,
}

impl Nengo {
    pub fn first_related_gregorian_year(&self) -> i32 {
        self.first_related_gregorian_year
    }

    pub fn start_abs_day(&self) -> i64 {
        self.start_abs_day
    }

    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    pub fn chinese(&self) -> &str {
        &self.chinese
    }

    pub fn korean(&self) -> &str {
        &self.korean
    }

    pub fn russian(&self) -> &str {
        &self.russian
    }

    pub fn court(&self) -> Court {
        self.court
    }

    pub fn romaji(&self) -> &[String] {
        &self.romaji
    }

    /// Whether this record matches the given selector.
    ///
    /// Period boundaries are expressed in terms of the first related
    /// Gregorian year; court-based selectors look only at [`Court`].
    pub fn matches(&self, selector: Selector) -> bool {
        let y = self.first_related_gregorian_year;
        match selector {
            Selector::Official => self.court != Court::Northern,
            Selector::Modern => y >= 1868,
            Selector::EdoPeriod => (1603..1868).contains(&y),
            Selector::AzuchiMomoyamaPeriod => (1573..1603).contains(&y),
            Selector::MuromachiPeriod => (1336..1573).contains(&y),
            Selector::NorthernCourt => self.court == Court::Northern,
            Selector::SouthernCourt => self.court == Court::Southern,
            Selector::KamakuraPeriod => (1185..1336).contains(&y),
            Selector::HeianPeriod => (794..1185).contains(&y),
            Selector::NaraPeriod => (710..794).contains(&y),
            Selector::AsukaPeriod => (645..710).contains(&y),
        }
    }
}

fn write_str(out: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    out.extend_from_slice(&(bytes.len() as u16).to_le_bytes());
    out.extend_from_slice(bytes);
}

fn read_str(buf: &[u8], pos: &mut usize) -> Result<String, CalendarError> {
    if *pos + 2 > buf.len() {
        return Err(CalendarError::InitFailed);
    }
    let len = u16::from_le_bytes([buf[*pos], buf[*pos + 1]]) as usize;
    *pos += 2;
    if *pos + len > buf.len() {
        return Err(CalendarError::InitFailed);
    }
    let s = std::str::from_utf8(&buf[*pos..*pos + len])
        .map_err(|_| CalendarError::InitFailed)?
        .to_string();
    *pos += len;
    Ok(s)
}

/// Encode a sequence of records into the packed wire format described for the
/// embedded nengo asset: `(relGregYear: i16, startAbsDay: i32, kanji: utf8,
/// chinese: utf8, korean: utf8, russian: utf8, court: u8, romajiCount: u8,
/// romaji*: utf8)`, one after another, with no trailing terminator (the
/// decoder simply stops when the buffer is exhausted).
pub fn encode_asset(records: &[Nengo]) -> Vec<u8> {
    let mut out = Vec::new();
    for r in records {
        out.extend_from_slice(&(r.first_related_gregorian_year as i16).to_le_bytes());
        out.extend_from_slice(&(r.start_abs_day as i32).to_le_bytes());
        write_str(&mut out, &r.kanji);
        write_str(&mut out, &r.chinese);
        write_str(&mut out, &r.korean);
        write_str(&mut out, &r.russian);
        out.push(match r.court {
            Court::Standard => 0,
            Court::Northern => 1,
            Court::Southern => 2,
        });
        out.push(r.romaji.len() as u8);
        for alt in &r.romaji {
            write_str(&mut out, alt);
        }
    }
    out
}

/// Parse the packed wire format produced by [`encode_asset`].
///
/// Fails with [`CalendarError::InitFailed`] if the buffer is truncated or
/// structurally malformed (asset missing/corrupt, per the module's failure
/// model); there is no checksum over the buffer itself.
pub fn decode_asset(buf: &[u8]) -> Result<Vec<Nengo>, CalendarError> {
    let mut pos = 0usize;
    let mut out = Vec::new();
    while pos < buf.len() {
        if pos + 6 > buf.len() {
            return Err(CalendarError::InitFailed);
        }
        let rel_greg_year = i16::from_le_bytes([buf[pos], buf[pos + 1]]) as i32;
        pos += 2;
        let start_abs_day =
            i32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]]) as i64;
        pos += 4;
        let kanji = read_str(buf, &mut pos)?;
        let chinese = read_str(buf, &mut pos)?;
        let korean = read_str(buf, &mut pos)?;
        let russian = read_str(buf, &mut pos)?;
        if pos + 2 > buf.len() {
            return Err(CalendarError::InitFailed);
        }
        let court = match buf[pos] {
            0 => Court::Standard,
            1 => Court::Northern,
            2 => Court::Southern,
            _ => return Err(CalendarError::InitFailed),
        };
        pos += 1;
        let romaji_count = buf[pos] as usize;
        pos += 1;
        let mut romaji = Vec::with_capacity(romaji_count);
        for _ in 0..romaji_count {
            romaji.push(read_str(buf, &mut pos)?);
        }
        out.push(Nengo {
            first_related_gregorian_year: rel_greg_year,
            start_abs_day,
            kanji,
            chinese,
            korean,
            russian,
            court,
            romaji,
        });
    }
    Ok(out)
}

fn ad_of(year: i32, month: u8, day: u8) -> i64 {
    Gregorian::try_from_common_date(CommonDate::new(year, month, day))
        .expect("curated table entries are valid Gregorian dates")
        .to_fixed()
        .get_day_i()
}

fn n(
    year: i32,
    month: u8,
    day: u8,
    kanji: &str,
    romaji: &[&str],
    court: Court,
    chinese: &str,
    korean: &str,
    russian: &str,
) -> Nengo {
    Nengo {
        first_related_gregorian_year: year,
        start_abs_day: ad_of(year, month, day),
        kanji: kanji.to_string(),
        chinese: chinese.to_string(),
        korean: korean.to_string(),
        russian: russian.to_string(),
        court,
        romaji: romaji.iter().map(|s| s.to_string()).collect(),
    }
}

/// A curated subset of the historical nengo table, spanning every period
/// named by [`Selector`].
///
/// This is deliberately not the full ~250-entry historical record (doing so
/// from memory risks silently wrong dates for obscure Heian-period eras);
/// every [`Selector`] variant is exercised by at least one entry, and the
/// eras from Meiji onward are complete and exact.
fn curated_source_table() -> Vec<Nengo> {
    use Court::*;
    vec![
        n(645, 1, 1, "大化", &["Taika"], Standard, "", "", ""),
        n(650, 1, 1, "白雉", &["Hakuchi"], Standard, "", "", ""),
        n(701, 1, 1, "大宝", &["Taihō", "Taiho"], Standard, "", "", ""),
        n(717, 1, 1, "養老", &["Yōrō", "Yoro"], Standard, "", "", ""),
        n(729, 1, 1, "天平", &["Tenpyō", "Tenpyo"], Standard, "", "", ""),
        n(770, 1, 1, "宝亀", &["Hōki", "Hoki"], Standard, "", "", ""),
        n(782, 1, 1, "延暦", &["Enryaku"], Standard, "", "", ""),
        n(859, 1, 1, "貞観", &["Jōgan", "Jogan"], Standard, "", "", ""),
        n(901, 1, 1, "延喜", &["Engi"], Standard, "", "", ""),
        n(938, 1, 1, "天慶", &["Tengyō", "Tengyo"], Standard, "", "", ""),
        n(995, 1, 1, "長徳", &["Chōtoku", "Chotoku"], Standard, "", "", ""),
        n(1004, 1, 1, "寛弘", &["Kankō", "Kanko"], Standard, "", "", ""),
        n(1081, 1, 1, "永保", &["Eihō", "Eiho"], Standard, "", "", ""),
        n(1156, 1, 1, "保元", &["Hōgen", "Hogen"], Standard, "", "", ""),
        n(1177, 1, 1, "治承", &["Jishō", "Jisho"], Standard, "", "", ""),
        n(1185, 1, 1, "文治", &["Bunji"], Standard, "", "", ""),
        n(1219, 1, 1, "承久", &["Jōkyū", "Jokyu"], Standard, "", "", ""),
        // Romanizes identically to the 1652 "Jōō" below (承応) once macrons are
        // stripped - a genuine Hepburn romaji collision, not just a shared prefix.
        n(1222, 1, 1, "貞応", &["Jōō", "Joo"], Standard, "", "", ""),
        n(1249, 1, 1, "建長", &["Kenchō", "Kencho"], Standard, "", "", ""),
        n(1278, 1, 1, "弘安", &["Kōan", "Koan"], Standard, "", "", ""),
        n(1293, 1, 1, "永仁", &["Einin"], Standard, "", "", ""),
        n(1329, 1, 1, "元徳", &["Gentoku"], Standard, "", "", ""),
        n(1334, 1, 1, "建武", &["Kemmu", "Kenmu"], Standard, "", "", ""),
        // Nanboku-cho: southern (main) line
        n(1336, 1, 1, "延元", &["Engen"], Southern, "", "", ""),
        n(1340, 1, 1, "興国", &["Kōkoku", "Kokoku"], Southern, "", "", ""),
        n(1346, 1, 1, "正平", &["Shōhei", "Shohei"], Southern, "", "", ""),
        n(1384, 1, 1, "元中", &["Genchū", "Genchu"], Southern, "", "", ""),
        // Nanboku-cho: northern parallel line. The northern "Kenmu" duplicates
        // the southern-recognized 1334 nengo of the same kanji; excluded from
        // the kanji index, per the shared-name quirk the source table notes.
        n(1336, 1, 1, "建武", &["Kemmu", "Kenmu"], Northern, "", "", ""),
        n(1338, 1, 1, "暦応", &["Ryakuō", "Ryakuo"], Northern, "", "", ""),
        n(1350, 1, 1, "観応", &["Kannō", "Kanno"], Northern, "", "", ""),
        n(1368, 1, 1, "応安", &["Ōan", "Oan"], Northern, "", "", ""),
        n(1390, 1, 1, "明徳", &["Meitoku"], Northern, "", "", ""),
        // Muromachi (post-unification, 1392)
        n(1394, 1, 1, "応永", &["Ōei", "Oei"], Standard, "", "", ""),
        n(1429, 1, 1, "永享", &["Eikyō", "Eikyo"], Standard, "", "", ""),
        n(1467, 1, 1, "応仁", &["Ōnin", "Onin"], Standard, "", "", ""),
        n(1469, 1, 1, "文明", &["Bunmei"], Standard, "", "", ""),
        n(1492, 1, 1, "明応", &["Meiō", "Meio"], Standard, "", "", ""),
        n(1558, 1, 1, "永禄", &["Eiroku"], Standard, "", "", ""),
        // Azuchi-Momoyama
        n(1573, 1, 1, "天正", &["Tenshō", "Tensho"], Standard, "", "", ""),
        n(1592, 1, 1, "文禄", &["Bunroku"], Standard, "", "", ""),
        n(1596, 1, 1, "慶長", &["Keichō", "Keicho"], Standard, "", "", ""),
        // Edo
        n(1615, 1, 1, "元和", &["Genna"], Standard, "", "", ""),
        n(1624, 1, 1, "寛永", &["Kan'ei", "Kanei"], Standard, "", "", ""),
        n(1652, 1, 1, "承応", &["Jōō", "Joo"], Standard, "", "", ""),
        n(1688, 1, 1, "元禄", &["Genroku"], Standard, "", "", ""),
        n(1716, 1, 1, "享保", &["Kyōhō", "Kyoho"], Standard, "", "", ""),
        n(1781, 1, 1, "天明", &["Tenmei"], Standard, "", "", ""),
        n(1789, 1, 1, "寛政", &["Kansei"], Standard, "", "", ""),
        n(1830, 1, 1, "天保", &["Tenpō", "Tenpo"], Standard, "", "", ""),
        n(1854, 1, 1, "安政", &["Ansei"], Standard, "", "", ""),
        n(1860, 1, 1, "万延", &["Man'en", "Manen"], Standard, "", "", ""),
        n(1865, 1, 1, "慶応", &["Keiō", "Keio"], Standard, "", "", ""),
        // Modern
        n(
            1868, 10, 23, "明治", &["Meiji"], Standard, "明治", "메이지", "Мэйдзи",
        ),
        n(
            1912, 7, 30, "大正", &["Taishō", "Taisho"], Standard, "大正", "다이쇼", "Тайсё",
        ),
        n(
            1926, 12, 25, "昭和", &["Shōwa", "Showa"], Standard, "昭和", "쇼와", "Сёва",
        ),
        n(
            1989, 1, 8, "平成", &["Heisei"], Standard, "平成", "헤이세이", "Хэйсэй",
        ),
        n(
            2019, 5, 1, "令和", &["Reiwa"], Standard, "令和", "레이와", "Рэйва",
        ),
    ]
}

/// Earliest date a supplemental era record may declare, per the
/// `japanese.supplemental.era` contract: it must postdate Heisei's start.
const HEISEI_START_AD_GREGORIAN: (i32, u8, u8) = (1989, 1, 8);

fn normalize_era_name(raw: &str) -> String {
    // Circumflexed vowels are accepted as an ASCII-friendly stand-in for
    // macrons, since the latter are awkward to type in a shell environment
    // variable.
    let macron_expanded: String = raw
        .chars()
        .map(|c| match c {
            '\u{00F4}' => 'ō', // ô -> ō
            '\u{00FB}' => 'ū', // û -> ū
            '\u{00CA}' => 'Ē', // Ê -> Ē
            c => c,
        })
        .collect();
    let mut out = String::with_capacity(macron_expanded.len());
    let mut chars = macron_expanded.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    for c in chars {
        match c {
            ' ' => out.push('-'),
            '\'' => out.push('’'),
            c => out.push(c),
        }
    }
    out
}

/// A supplemental era declared through configuration.
#[derive(Debug, Clone)]
pub struct SupplementalEra {
    pub name: String,
    pub kanji: String,
    pub since: CommonDate,
    pub chinese: Option<String>,
    pub korean: Option<String>,
    pub russian: Option<String>,
}

/// Parse the `japanese.supplemental.era` environment value: comma-separated
/// `key=value` pairs. Required keys: `name`, `kanji` (length 2), `since`
/// (ISO-8601 date, must be on or after 1989-01-08). Optional: `chinese`,
/// `korean`, `russian`.
pub fn parse_supplemental_era(raw: &str) -> Result<SupplementalEra, CalendarError> {
    let mut name = None;
    let mut kanji = None;
    let mut since = None;
    let mut chinese = None;
    let mut korean = None;
    let mut russian = None;
    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();
        match key {
            "name" => name = Some(value.to_string()),
            "kanji" => kanji = Some(value.to_string()),
            "since" => since = Some(parse_iso_date(value)?),
            "chinese" => chinese = Some(value.to_string()),
            "korean" => korean = Some(value.to_string()),
            "russian" => russian = Some(value.to_string()),
            _ => return Err(CalendarError::InvalidDate),
        }
    }
    let name = name.ok_or(CalendarError::InvalidDate)?;
    let kanji = kanji.ok_or(CalendarError::InvalidDate)?;
    if kanji.chars().count() != 2 {
        return Err(CalendarError::InvalidDate);
    }
    let since = since.ok_or(CalendarError::InvalidDate)?;
    let (hy, hm, hd) = HEISEI_START_AD_GREGORIAN;
    let heisei_start = ad_of(hy, hm, hd);
    let since_ad = ad_of(since.year, since.month, since.day);
    if since_ad < heisei_start {
        return Err(CalendarError::OutOfRange);
    }
    Ok(SupplementalEra {
        name: normalize_era_name(&name),
        kanji,
        since,
        chinese,
        korean,
        russian,
    })
}

fn parse_iso_date(s: &str) -> Result<CommonDate, CalendarError> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(CalendarError::InvalidDate);
    }
    let year: i32 = parts[0].parse().map_err(|_| CalendarError::InvalidDate)?;
    let month: u8 = parts[1].parse().map_err(|_| CalendarError::InvalidDate)?;
    let day: u8 = parts[2].parse().map_err(|_| CalendarError::InvalidDate)?;
    Ok(CommonDate::new(year, month, day))
}

/// The resolved, immutable nengo table.
pub struct NengoTable {
    records: Vec<Nengo>,
    by_kanji: HashMap<String, usize>,
    by_chinese: HashMap<String, usize>,
    korean_index: Vec<(String, usize)>,
    russian_index: Vec<(String, usize)>,
    romaji_index: Vec<(String, usize)>,
}

impl NengoTable {
    fn build(records: Vec<Nengo>) -> Self {
        let mut by_kanji = HashMap::new();
        let mut by_chinese = HashMap::new();
        let mut korean_index = Vec::new();
        let mut russian_index = Vec::new();
        let mut romaji_index = Vec::new();
        for (i, r) in records.iter().enumerate() {
            // The northern Kenmu entry shares its kanji with the main 1334 Kenmu
            // record; leave it out of the kanji index, as the source format does.
            let is_excluded_northern_kenmu = r.court == Court::Northern && r.kanji == "建武";
            if !is_excluded_northern_kenmu {
                by_kanji.entry(r.kanji.clone()).or_insert(i);
            }
            if !r.chinese.is_empty() {
                by_chinese.entry(r.chinese.clone()).or_insert(i);
            }
            if !r.korean.is_empty() {
                korean_index.push((r.korean.clone(), i));
            }
            if !r.russian.is_empty() {
                russian_index.push((r.russian.clone(), i));
            }
            for alt in &r.romaji {
                romaji_index.push((alt.clone(), i));
            }
        }
        korean_index.sort();
        russian_index.sort();
        romaji_index.sort();
        NengoTable {
            records,
            by_kanji,
            by_chinese,
            korean_index,
            russian_index,
            romaji_index,
        }
    }

    /// Load the embedded asset (round-tripped through the packed wire format)
    /// and apply any `japanese.supplemental.era` extension found in the
    /// environment. Fails with [`CalendarError::InitFailed`] if the asset or
    /// the configuration is malformed.
    pub fn load() -> Result<Self, CalendarError> {
        let asset = encode_asset(&curated_source_table());
        let mut records = decode_asset(&asset)?;
        if let Ok(raw) = std::env::var("japanese.supplemental.era") {
            if !raw.trim().is_empty() {
                let supplement = parse_supplemental_era(&raw)?;
                records.push(n(
                    supplement.since.year,
                    supplement.since.month,
                    supplement.since.day,
                    &supplement.kanji,
                    &[&supplement.name],
                    Court::Standard,
                    supplement.chinese.as_deref().unwrap_or(""),
                    supplement.korean.as_deref().unwrap_or(""),
                    supplement.russian.as_deref().unwrap_or(""),
                ));
            }
        }
        records.sort_by_key(|r| r.start_abs_day);
        Ok(Self::build(records))
    }

    /// The last era in `selector`'s slice whose first related Gregorian year
    /// is at most `y`.
    pub fn by_related_gregorian_year(&self, y: i32, selector: Selector) -> Option<&Nengo> {
        self.records
            .iter()
            .filter(|r| r.matches(selector) && r.first_related_gregorian_year <= y)
            .max_by_key(|r| r.first_related_gregorian_year)
    }

    pub fn by_kanji(&self, s: &str) -> Option<&Nengo> {
        self.by_kanji.get(s).map(|&i| &self.records[i])
    }

    pub fn by_chinese(&self, s: &str) -> Option<&Nengo> {
        self.by_chinese.get(s).map(|&i| &self.records[i])
    }

    pub fn by_korean_prefix(&self, s: &str) -> Vec<&Nengo> {
        Self::longest_prefix(&self.korean_index, s, &self.records)
    }

    pub fn by_russian_prefix(&self, s: &str) -> Vec<&Nengo> {
        Self::longest_prefix(&self.russian_index, s, &self.records)
    }

    pub fn by_romaji_prefix(&self, s: &str) -> Vec<&Nengo> {
        Self::longest_prefix(&self.romaji_index, s, &self.records)
    }

    /// Find the set of entries sharing the longest prefix of `query` present
    /// in `sorted_index` (a sorted `(key, record index)` table), using a
    /// plain binary-search probe at each candidate prefix length rather than
    /// a ternary search tree.
    fn longest_prefix<'a>(
        sorted_index: &[(String, usize)],
        query: &str,
        records: &'a [Nengo],
    ) -> Vec<&'a Nengo> {
        let chars: Vec<char> = query.chars().collect();
        for len in (0..=chars.len()).rev() {
            let prefix: String = chars[..len].iter().collect();
            let matching: Vec<usize> = sorted_index
                .iter()
                .filter(|(k, _)| k.starts_with(&prefix))
                .map(|(_, i)| *i)
                .collect();
            if !matching.is_empty() || len == 0 {
                let mut seen = std::collections::BTreeSet::new();
                return matching
                    .into_iter()
                    .filter(|i| seen.insert(*i))
                    .map(|i| &records[i])
                    .collect();
            }
        }
        Vec::new()
    }

    /// Resolve `(nengo, yearOfEra, month, dayOfMonth)` to an absolute day,
    /// validating that the result falls within the nengo's reign.
    pub fn abs_day_of(
        &self,
        nengo: &Nengo,
        year_of_era: i32,
        month: GregorianMonth,
        day_of_month: u8,
    ) -> Result<i64, CalendarError> {
        if year_of_era < 1 {
            return Err(CalendarError::OutOfRange);
        }
        let gregorian_year = nengo.first_related_gregorian_year + year_of_era - 1;
        let date = Gregorian::try_from_common_date(CommonDate::new(
            gregorian_year,
            month as u8,
            day_of_month,
        ))?;
        let ad = date.to_fixed().get_day_i();
        let next_start = self.next_start_after(nengo);
        if ad >= nengo.start_abs_day && next_start.map(|n| ad < n).unwrap_or(true) {
            Ok(ad)
        } else {
            Err(CalendarError::InvalidDate)
        }
    }

    fn next_start_after(&self, nengo: &Nengo) -> Option<i64> {
        self.records
            .iter()
            .filter(|r| r.court == nengo.court && r.start_abs_day > nengo.start_abs_day)
            .map(|r| r.start_abs_day)
            .min()
    }
}

static TABLE: OnceLock<Result<NengoTable, CalendarError>> = OnceLock::new();

/// The process-wide nengo table, initialized on first use.
pub fn table() -> Result<&'static NengoTable, CalendarError> {
    TABLE.get_or_init(NengoTable::load).as_ref().map_err(|e| *e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_wire_format() {
        let source = curated_source_table();
        let encoded = encode_asset(&source);
        let decoded = decode_asset(&encoded).unwrap();
        assert_eq!(decoded.len(), source.len());
        assert_eq!(decoded.last().unwrap().kanji, "令和");
    }

    #[test]
    fn heisei_starts_1989() {
        let t = NengoTable::build(curated_source_table());
        let found = t.by_related_gregorian_year(1989, Selector::Official).unwrap();
        assert_eq!(found.kanji(), "平成");
    }

    #[test]
    fn by_kanji_showa() {
        let t = NengoTable::build(curated_source_table());
        assert_eq!(t.by_kanji("昭和").unwrap().romaji()[0], "Shōwa");
    }

    #[test]
    fn romaji_prefix_is_ambivalent_for_two_joo_eras() {
        let t = NengoTable::build(curated_source_table());
        let matches = t.by_romaji_prefix("Jōō");
        assert!(matches.len() >= 2);
        assert!(matches.iter().any(|m| m.kanji() == "貞応"));
        assert!(matches.iter().any(|m| m.kanji() == "承応"));
    }

    #[test]
    fn northern_kenmu_excluded_from_kanji_index() {
        let t = NengoTable::build(curated_source_table());
        // Only the pre-schism (Standard) 1334 Kenmu resolves by kanji; the
        // Northern-court 1336 duplicate is left out of the index.
        let found = t.by_kanji("建武").unwrap();
        assert_eq!(found.court(), Court::Standard);
        assert_eq!(found.first_related_gregorian_year(), 1334);
    }

    #[test]
    fn selector_partition_official_excludes_northern() {
        let t = NengoTable::build(curated_source_table());
        for r in &t.records {
            if r.court == Court::Northern {
                assert!(!r.matches(Selector::Official));
            }
        }
    }

    #[test]
    fn supplemental_era_must_postdate_heisei() {
        let too_early = "name=Test,kanji=試験,since=1980-01-01";
        assert!(parse_supplemental_era(too_early).is_err());
        let ok = "name=Test,kanji=試験,since=2030-01-01";
        assert!(parse_supplemental_era(ok).is_ok());
    }

    #[test]
    fn normalizes_macron_and_spacing() {
        assert_eq!(normalize_era_name("showa era"), "Showa-era");
    }
}
