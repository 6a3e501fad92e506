//! # Meaning Lookup
//!
//! Fixed interpretation tables keyed by (category, number). Only the life
//! path category is populated; every other pair falls back to the
//! placeholder, so the lookup is total.
//!
//! ```text
//! meaning(LifePath, 7)    ──► "exploration and spirituality" text
//! meaning(LifePath, 99)   ──► placeholder
//! meaning(Expression, 3)  ──► placeholder (table not written yet)
//! ```

use crate::types::{Language, NumberKind};

type MeaningTable = [(u32, &'static str); 12];

const LIFE_PATH_EN: MeaningTable = [
    (1, "Your life is about independence and leadership. You are meant to step to the front and open up new paths."),
    (2, "Your life is about harmony and empathy. Through your bonds with others you grow the strength of kindness and acceptance."),
    (3, "Your life is about expression and creativity. You share joy and bring delight to the people around you."),
    (4, "Your life is about stability and persistence. Through steady effort and trust you build a solid foundation."),
    (5, "Your life is about freedom and change. Your way opens up as you pursue new challenges and stimulation."),
    (6, "Your life is about love and responsibility. You support family and friends and spread security and harmony."),
    (7, "Your life is about exploration and spirituality. In stillness you gain deep insight and seek the truth."),
    (8, "Your life is about achievement and practical success. With drive and strategic thinking you turn goals into reality."),
    (9, "Your life is about service and ideals. With a broad view you are called to contribute to people and society."),
    (11, "Your life is about intuition and inspiration. You are a spiritual guide who passes on higher awareness."),
    (22, "Your life is about realising ideals. Your mission is to bring grand visions down into reality."),
    (33, "Your life is about unconditional love. You are a teacher-like presence who brings love and healing to those around you."),
];

const LIFE_PATH_JA: MeaningTable = [
    (1, "あなたの人生は『自立』と『リーダーシップ』がテーマです。先頭に立って新しい道を切り開く運命にあります。"),
    (2, "あなたの人生は『調和』と『共感』がテーマです。人との関わりを通じて、優しさと受容の力を育みます。"),
    (3, "あなたの人生は『表現』と『創造性』がテーマです。楽しさを分かち合い、周囲に喜びを届ける存在です。"),
    (4, "あなたの人生は『安定』と『継続』がテーマです。地道な努力と信頼で、着実に基盤を築いていきます。"),
    (5, "あなたの人生は『自由』と『変化』がテーマです。新しい挑戦や刺激を求めて進むことで、道が開かれていくでしょう。"),
    (6, "あなたの人生は『愛』と『責任』がテーマです。家族や仲間を支え、安心と調和を広げていきます。"),
    (7, "あなたの人生は『探究』と『精神性』がテーマです。静けさの中で深い洞察を得て、真実を追い求めます。"),
    (8, "あなたの人生は『達成』と『現実的な成功』がテーマです。実行力と戦略的思考で目標を現実化していきます。"),
    (9, "あなたの人生は『奉仕』と『理想』がテーマです。広い視野で人や社会に貢献する使命があります。"),
    (11, "あなたの人生は『直感』と『インスピレーション』がテーマです。高次の気づきを伝えるスピリチュアルな導き手です。"),
    (22, "あなたの人生は『理想の具現化』がテーマです。大きなビジョンを現実に落とし込む使命があります。"),
    (33, "あなたの人生は『無条件の愛』がテーマです。周囲に愛と癒しを届ける教師的な存在です。"),
];

/// Returned for any pair without an entry.
pub const fn placeholder(language: Language) -> &'static str {
    match language {
        Language::En => "no interpretation available yet.",
        Language::Ja => "この数と役割の組み合わせの意味はまだ用意されていません。",
    }
}

fn table(kind: NumberKind, language: Language) -> Option<&'static MeaningTable> {
    match (kind, language) {
        (NumberKind::LifePath, Language::En) => Some(&LIFE_PATH_EN),
        (NumberKind::LifePath, Language::Ja) => Some(&LIFE_PATH_JA),
        // expression, soul urge and birth day tables have not been written
        _ => None,
    }
}

/// Looks up the interpretation of `number` in `kind`'s table.
///
/// ```rust
/// use numero_core::meaning::{meaning, placeholder};
/// use numero_core::{Language, NumberKind};
///
/// assert!(meaning(NumberKind::LifePath, 7, Language::En).contains("spirituality"));
/// assert_eq!(meaning(NumberKind::LifePath, 99, Language::En), placeholder(Language::En));
/// ```
pub fn meaning(kind: NumberKind, number: u32, language: Language) -> &'static str {
    table(kind, language)
        .and_then(|entries| entries.iter().find(|(n, _)| *n == number))
        .map(|(_, text)| *text)
        .unwrap_or_else(|| placeholder(language))
}

/// Like [`meaning`], keyed by the category's string form (`"life_path"`).
/// Unknown keys yield the placeholder.
pub fn meaning_by_key(key: &str, number: u32, language: Language) -> &'static str {
    match key.parse::<NumberKind>() {
        Ok(kind) => meaning(kind, number, language),
        Err(_) => placeholder(language),
    }
}
