//! Decoder for the hiscore "lite" CSV feed.
//!
//! The feed has one `rank,level,experience` line per skill in a fixed order,
//! followed by activity lines. Only the first 30 lines are skills. `-1` marks
//! a skill with no data.
//!
//! Lines are matched to skills purely by position. If the feed ever inserts a
//! skill, every later record shifts by one.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

/// Skills in feed order.
pub const SKILLS: [&str; 30] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Constitution",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecrafting",
    "Hunter",
    "Construction",
    "Summoning",
    "Dungeoneering",
    "Divination",
    "Invention",
    "Archaeology",
    "Necromancy",
];

const SENTINEL: &str = "-1";

/// A skill's hiscore rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Position on the hiscores.
    Position(i64),
    /// The feed reported `-1`.
    Unranked,
    /// The field was missing or not a number. Serializes as `null`.
    Unparsed,
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Position(rank) => serializer.serialize_i64(*rank),
            Self::Unranked => serializer.serialize_str("Unranked"),
            Self::Unparsed => serializer.serialize_none(),
        }
    }
}

/// One decoded skill line. `None` level/experience means the field did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    pub skill: &'static str,
    pub rank: Rank,
    pub level: Option<i64>,
    pub experience: Option<i64>,
}

impl Serialize for SkillRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("SkillRecord", 3)?;
        record.serialize_field("rank", &self.rank)?;
        record.serialize_field("level", &self.level)?;
        record.serialize_field("experience", &self.experience)?;
        record.end()
    }
}

/// Decoded skills in feed order. Serializes as a map keyed by skill name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    skills: Vec<SkillRecord>,
}

impl PlayerStats {
    /// Records in skill order.
    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    /// Look a skill up by name.
    pub fn get(&self, skill: &str) -> Option<&SkillRecord> {
        self.skills.iter().find(|r| r.skill == skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Serialize for PlayerStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.skills.len()))?;
        for record in &self.skills {
            map.serialize_entry(record.skill, record)?;
        }
        map.end()
    }
}

/// Decode the hiscore CSV body.
///
/// Never fails: short feeds yield fewer records, bad fields decode as
/// unparsed.
pub fn decode(csv: &str) -> PlayerStats {
    let skills = csv
        .trim()
        .split('\n')
        .zip(SKILLS)
        .map(|(line, skill)| decode_line(skill, line))
        .collect();

    PlayerStats { skills }
}

fn decode_line(skill: &'static str, line: &str) -> SkillRecord {
    let mut fields = line.split(',');
    let rank = fields.next();
    let level = fields.next();
    let experience = fields.next();

    SkillRecord {
        skill,
        rank: match rank {
            Some(field) if field.trim() == SENTINEL => Rank::Unranked,
            Some(field) => parse_int(field).map_or(Rank::Unparsed, Rank::Position),
            None => Rank::Unparsed,
        },
        level: level.and_then(parse_amount),
        experience: experience.and_then(parse_amount),
    }
}

/// Level and experience: the sentinel means zero.
fn parse_amount(field: &str) -> Option<i64> {
    if field.trim() == SENTINEL {
        Some(0)
    } else {
        parse_int(field)
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; the
/// rest of the field is ignored.
fn parse_int(field: &str) -> Option<i64> {
    let field = field.trim_start();
    let (negative, rest) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}
