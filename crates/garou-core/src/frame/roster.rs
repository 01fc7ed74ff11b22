use serde::Serialize;

use crate::error::{Error, Result};

/// A playable character: catalog key plus the display name used in-game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterEntry {
    pub english: &'static str,
    pub japanese: &'static str,
}

const ROSTER: [CharacterEntry; 17] = [
    CharacterEntry {
        english: "B. Jenet",
        japanese: "B・ジェニー",
    },
    CharacterEntry {
        english: "Billy",
        japanese: "ビリー・カーン",
    },
    CharacterEntry {
        english: "CR7",
        japanese: "クリスティアーノ・ロナウロ",
    },
    CharacterEntry {
        english: "Dong Hwan",
        japanese: "キム・ドンファン",
    },
    CharacterEntry {
        english: "Gato",
        japanese: "牙刀",
    },
    CharacterEntry {
        english: "Hokutomaru",
        japanese: "北斗丸",
    },
    CharacterEntry {
        english: "Hotaru",
        japanese: "ほたる",
    },
    CharacterEntry {
        english: "Kain",
        japanese: "カイン・R・ハインライン",
    },
    CharacterEntry {
        english: "Kevin",
        japanese: "ケビン・ライアン",
    },
    CharacterEntry {
        english: "Mai",
        japanese: "不知火舞",
    },
    CharacterEntry {
        english: "Marco",
        japanese: "マルコ・ロドリゲス",
    },
    CharacterEntry {
        english: "Preecha",
        japanese: "プリチャ",
    },
    CharacterEntry {
        english: "Rock",
        japanese: "ロック・ハワード",
    },
    CharacterEntry {
        english: "Salvatore",
        japanese: "サルヴぁトーレ・ガナッチ",
    },
    CharacterEntry {
        english: "Terry",
        japanese: "テリー・ボガード",
    },
    CharacterEntry {
        english: "Tizoc",
        japanese: "グリフォンマスク（ティズォック）",
    },
    CharacterEntry {
        english: "Vox",
        japanese: "ヴォックス",
    },
];

/// All characters, in catalog order
pub fn roster() -> &'static [CharacterEntry] {
    &ROSTER
}

/// Resolve a user-supplied character name to its roster entry.
///
/// Accepts the Japanese display name or the English key. English matching
/// ignores case, spaces and dots so `DongHwan` and `b jenet` both resolve.
pub fn resolve_character(name: &str) -> Result<&'static CharacterEntry> {
    let trimmed = name.trim();
    let wanted = fold_english(trimmed);

    ROSTER
        .iter()
        .find(|entry| entry.japanese == trimmed || fold_english(entry.english) == wanted)
        .ok_or_else(|| Error::UnknownCharacter(trimmed.to_string()))
}

fn fold_english(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}
