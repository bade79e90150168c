use crate::error::CatalogError;
use crate::types::{GroupKind, GroupLayout, PhaseGroup, PhaseRecord};

pub const PHASE_COUNT: u32 = 30;

pub const NEW_MOON_DAY: u32 = 1;
pub const FULL_MOON_DAY: u32 = 14;
pub const DARK_MOON_DAY: u32 = 30;

const fn phase(
    day: u32,
    name: &'static str,
    description: &'static str,
    planting: &'static str,
    fishing: &'static str,
) -> PhaseRecord {
    PhaseRecord {
        day,
        name,
        description,
        planting,
        fishing,
    }
}

pub static PHASES: [PhaseRecord; 30] = [
    phase(
        1,
        "Hilo",
        "The first faint thread of light appears low in the west after sunset.",
        "Plant crops that grow beneath the soil, like ʻuala and kalo.",
        "Fish close to shore; the nearshore waters are calm.",
    ),
    phase(
        2,
        "Hoaka",
        "A crescent casts its first shadow; the night is said to be ghostly.",
        "Poor for planting; crops grow spindly.",
        "Fishing is poor; the fish are wary.",
    ),
    phase(
        3,
        "Kūkahi",
        "The first of the upright Kū nights, when the crescent stands tall.",
        "Good for planting anything that grows upward, like kō and maiʻa.",
        "Good for fishing; set lines in the early evening.",
    ),
    phase(
        4,
        "Kūlua",
        "The second Kū night; the crescent continues to rise.",
        "Good for planting upright crops and for transplanting.",
        "Good for fishing along reef edges.",
    ),
    phase(
        5,
        "Kūkolu",
        "The third Kū night; low tides come in the morning.",
        "Good for planting; tend the loʻi.",
        "Good for torch fishing on the reef flats.",
    ),
    phase(
        6,
        "Kūpau",
        "The last Kū night, closing the upright period.",
        "Good for planting and for weeding.",
        "Good for deep-sea fishing.",
    ),
    phase(
        7,
        "ʻOlekūkahi",
        "The first ʻOle night; an unproductive time when plans are set aside.",
        "Not a planting night; mend tools and weed instead.",
        "Poor fishing; seas are often rough.",
    ),
    phase(
        8,
        "ʻOlekūlua",
        "The second ʻOle night.",
        "Not a planting night; prepare the soil.",
        "Poor fishing; repair nets.",
    ),
    phase(
        9,
        "ʻOlekūkolu",
        "The third ʻOle night.",
        "Not a planting night.",
        "Poor fishing.",
    ),
    phase(
        10,
        "ʻOlepau",
        "The last ʻOle night; the unproductive period ends.",
        "Fair for planting toward evening.",
        "Fishing begins to improve.",
    ),
    phase(
        11,
        "Huna",
        "The moon's horns are hidden as it grows round.",
        "Good for planting root crops and gourds.",
        "Good for fishing; fish hide in the coral.",
    ),
    phase(
        12,
        "Mōhalu",
        "The moon opens like a blossom; a night sacred to Lono.",
        "Good for planting flowers and fruiting plants.",
        "Good for fishing; some fish are kapu to Lono.",
    ),
    phase(
        13,
        "Hua",
        "The egg-shaped moon; a fruitful night.",
        "Excellent for planting; crops bear abundantly.",
        "Excellent for fishing.",
    ),
    phase(
        14,
        "Akua",
        "The full moon; a night of offerings to the gods.",
        "Excellent for planting all crops.",
        "Excellent for fishing, especially at night.",
    ),
    phase(
        15,
        "Hoku",
        "The moon sits low at dawn, fully round.",
        "Excellent for planting crops that bear in clusters.",
        "Good for fishing; low tides at night.",
    ),
    phase(
        16,
        "Māhealani",
        "The moon rises after sunset, still full.",
        "Excellent for planting; a favored night for all work in the field.",
        "Good for fishing and for gathering on the reef.",
    ),
    phase(
        17,
        "Kulu",
        "The moon begins to drip toward the west; first fruits are offered.",
        "Good for planting.",
        "Good for fishing; the first catch is offered.",
    ),
    phase(
        18,
        "Lāʻaukūkahi",
        "The first Lāʻau night, a time for medicine and healing plants.",
        "Good for planting trees and medicinal plants.",
        "Poor fishing.",
    ),
    phase(
        19,
        "Lāʻaukūlua",
        "The second Lāʻau night.",
        "Good for planting trees.",
        "Poor fishing.",
    ),
    phase(
        20,
        "Lāʻaupau",
        "The last Lāʻau night.",
        "Good for planting medicinal plants.",
        "Fair fishing.",
    ),
    phase(
        21,
        "ʻOlekūkahi",
        "The first waning ʻOle night; rough seas are common.",
        "Not a planting night; weed and prepare.",
        "Poor fishing.",
    ),
    phase(
        22,
        "ʻOlekūlua",
        "The second waning ʻOle night.",
        "Not a planting night.",
        "Poor fishing.",
    ),
    phase(
        23,
        "ʻOlepau",
        "The last waning ʻOle night.",
        "Fair for planting toward the end of the night.",
        "Fishing begins to improve.",
    ),
    phase(
        24,
        "Kāloakūkahi",
        "The first Kāloa night, sacred to Kanaloa.",
        "Good for planting long-stemmed plants like wauke and bamboo.",
        "Good for fishing in deep water.",
    ),
    phase(
        25,
        "Kāloakūlua",
        "The second Kāloa night.",
        "Good for planting vines and long-stemmed plants.",
        "Good for fishing.",
    ),
    phase(
        26,
        "Kāloapau",
        "The last Kāloa night.",
        "Good for planting.",
        "Good for fishing and gathering limu.",
    ),
    phase(
        27,
        "Kāne",
        "A night sacred to Kāne; prayer and rest.",
        "Not a planting night; a time for prayer.",
        "Fishing is kapu on some shores.",
    ),
    phase(
        28,
        "Lono",
        "A night sacred to Lono, bringer of rain.",
        "Good for planting gourds and melons.",
        "Good for fishing.",
    ),
    phase(
        29,
        "Mauli",
        "The last breath of the moon; only a sliver remains before dawn.",
        "Good for planting.",
        "Good for fishing; low tides in the afternoon.",
    ),
    phase(
        30,
        "Muku",
        "The moon is cut off and hidden; the dark night before the new month.",
        "Good for planting.",
        "Excellent for gathering on the reef at low tide.",
    ),
];

pub fn phase_record(day: u32) -> Option<&'static PhaseRecord> {
    let idx = day.checked_sub(1)? as usize;
    PHASES.get(idx).filter(|r| r.day == day)
}

pub fn group(kind: GroupKind, layout: GroupLayout) -> PhaseGroup {
    let (start, end) = layout.range(kind);
    let (name, description, gloss) = match kind {
        GroupKind::Hoonui => (
            "Hoʻonui",
            "The moon grows from the first crescent toward fullness.",
            "growing",
        ),
        GroupKind::Poepoe => (
            "Poepoe",
            "The moon is round and full, then begins to turn.",
            "round",
        ),
        GroupKind::Hoemi => (
            "Hoʻēmi",
            "The moon wanes and disappears into the dark night.",
            "diminishing",
        ),
    };
    PhaseGroup {
        kind,
        name,
        description,
        gloss,
        start,
        end,
    }
}

pub fn groups(layout: GroupLayout) -> [PhaseGroup; 3] {
    GroupKind::ALL.map(|kind| group(kind, layout))
}

pub fn group_for_day(day: u32, layout: GroupLayout) -> PhaseGroup {
    GroupKind::ALL
        .into_iter()
        .map(|kind| group(kind, layout))
        .find(|g| g.contains(day))
        .unwrap_or_else(|| group(GroupKind::Hoemi, layout))
}

/// Case-insensitive name lookup that also matches names typed without the
/// ʻokina or kahakō ("Laau" finds "Lāʻau...", "olepau" finds "ʻOlepau").
///
/// Names repeated in the waxing and waning halves resolve to the waxing one.
pub fn phase_by_name(name: &str) -> Option<&'static PhaseRecord> {
    let wanted = fold_name(name);
    PHASES.iter().find(|r| fold_name(r.name) == wanted)
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, 'ʻ' | '\'' | '‘' | '`'))
        .map(|c| match c {
            'ā' | 'Ā' => 'a',
            'ē' | 'Ē' => 'e',
            'ī' | 'Ī' => 'i',
            'ō' | 'Ō' => 'o',
            'ū' | 'Ū' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

pub fn validate() -> Result<(), CatalogError> {
    validate_table(&PHASES)
}

pub fn validate_table(table: &[PhaseRecord]) -> Result<(), CatalogError> {
    if table.len() != PHASE_COUNT as usize {
        return Err(CatalogError::WrongLength(table.len()));
    }
    for (index, record) in table.iter().enumerate() {
        let expected = index as u32 + 1;
        if record.day != expected {
            return Err(CatalogError::OutOfOrder {
                index,
                expected,
                found: record.day,
            });
        }
        if record.name.trim().is_empty() || record.description.trim().is_empty() {
            return Err(CatalogError::Incomplete(record.day));
        }
    }
    Ok(())
}
