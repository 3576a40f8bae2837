//! Static prompt catalog
//!
//! The catalog is a fixed, read-only hierarchy of categorized prompt entries,
//! embedded at compile time. Favorites key on the exact content strings, so
//! the dataset is never rewritten at runtime.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Simple,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Simple => "簡單",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困難",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" | "簡單" => Ok(Difficulty::Simple),
            "medium" | "中等" => Ok(Difficulty::Medium),
            "hard" | "困難" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Basic,
    Advanced,
    Creative,
    Professional,
}

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Basic,
        CategoryId::Advanced,
        CategoryId::Creative,
        CategoryId::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Basic => "basic",
            CategoryId::Advanced => "advanced",
            CategoryId::Creative => "creative",
            CategoryId::Professional => "professional",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::Basic => "基礎編輯",
            CategoryId::Advanced => "進階合成",
            CategoryId::Creative => "創意應用",
            CategoryId::Professional => "專業用途",
        }
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s || c.display_name() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct PromptEntry {
    pub title: &'static str,
    pub content: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub entries: &'static [PromptEntry],
}

/// A rendered database card: one catalog entry plus its position, produced
/// when the database view is populated on first visit.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub id: usize,
    pub category: CategoryId,
    pub entry: &'static PromptEntry,
}

pub struct Catalog;

impl Catalog {
    pub fn categories() -> &'static [Category] {
        &CATEGORIES
    }

    pub fn category(id: CategoryId) -> &'static Category {
        &CATEGORIES[CategoryId::ALL.iter().position(|c| *c == id).unwrap_or(0)]
    }

    /// Flatten the catalog into cards in declaration order.
    pub fn build_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for category in Self::categories() {
            for entry in category.entries {
                cards.push(Card {
                    id: cards.len(),
                    category: category.id,
                    entry,
                });
            }
        }
        cards
    }

    pub fn entry_count() -> usize {
        CATEGORIES.iter().map(|c| c.entries.len()).sum()
    }
}

static CATEGORIES: [Category; 4] = [
    Category {
        id: CategoryId::Basic,
        name: "基礎編輯",
        entries: &[
            PromptEntry {
                title: "背景替換",
                content: "將場景換成在海邊、衣服換成藍色T恤、手上換成拿著小螃蟹",
                difficulty: Difficulty::Simple,
                tags: &["背景", "場景", "服裝"],
            },
            PromptEntry {
                title: "服裝替換",
                content: "換成休閒西裝照片(深藍色西裝外套,白色上衣)",
                difficulty: Difficulty::Simple,
                tags: &["服裝", "西裝", "商務"],
            },
            PromptEntry {
                title: "光影調整",
                content: "柔和的燈光、中性的背景、個人資料照片風格",
                difficulty: Difficulty::Simple,
                tags: &["光影", "背景", "人像"],
            },
            PromptEntry {
                title: "表情調整",
                content: "讓人物露出開心的表情，眼神自然，嘴角上揚",
                difficulty: Difficulty::Simple,
                tags: &["表情", "人像", "情緒"],
            },
        ],
    },
    Category {
        id: CategoryId::Advanced,
        name: "進階合成",
        entries: &[
            PromptEntry {
                title: "多圖融合",
                content: "請將這些圖片融合成一張圖,每個物件和角色都不能缺漏",
                difficulty: Difficulty::Medium,
                tags: &["合成", "多圖", "融合"],
            },
            PromptEntry {
                title: "風格轉換",
                content: "調整為黑白漫畫線稿，續上圖調整為俯瞰視角",
                difficulty: Difficulty::Medium,
                tags: &["風格", "漫畫", "視角"],
            },
            PromptEntry {
                title: "複雜場景合成",
                content: "根據所提供的兩張上傳之參考圖,生成一位女孩在秋天傍晚穿上衣服的場景,她的臉部特徵,髮型,身材必須與第一張照片相同,寫實風格,8K 高畫質,電影感光影",
                difficulty: Difficulty::Hard,
                tags: &["場景", "合成", "電影感"],
            },
        ],
    },
    Category {
        id: CategoryId::Creative,
        name: "創意應用",
        entries: &[
            PromptEntry {
                title: "擬真公仔製作",
                content: "將圖片中的角色轉化為1/7比例的全身實體模型,放置在一個圓形塑膠底座上,底座上的PVC紋理清晰可見",
                difficulty: Difficulty::Hard,
                tags: &["公仔", "模型", "收藏"],
            },
            PromptEntry {
                title: "火柴人構圖",
                content: "根據動作草圖來生成兩隻貓互相打鬥,並呈現賽博龐克風格",
                difficulty: Difficulty::Medium,
                tags: &["構圖", "動作", "風格"],
            },
            PromptEntry {
                title: "微縮場景",
                content: "以清晰的45°俯視角度，展示一個等距微縮模型場景",
                difficulty: Difficulty::Medium,
                tags: &["微縮", "場景", "模型"],
            },
            PromptEntry {
                title: "毛絨公仔轉換",
                content: "轉換成「毛絨玩具公仔」風格，材質柔軟可愛",
                difficulty: Difficulty::Simple,
                tags: &["毛絨", "玩具", "可愛"],
            },
        ],
    },
    Category {
        id: CategoryId::Professional,
        name: "專業用途",
        entries: &[
            PromptEntry {
                title: "品牌廣告設計",
                content: "簡潔而富有創意的廣告，背景為乾淨的白色。真實的[產品]融入手繪黑色墨水塗鴉，線條流暢，趣味十足",
                difficulty: Difficulty::Hard,
                tags: &["廣告", "品牌", "設計"],
            },
            PromptEntry {
                title: "產品展示",
                content: "高品質、富有電影感的產品展示，使用自然光或電影燈光來增強產品的吸引力",
                difficulty: Difficulty::Medium,
                tags: &["產品", "展示", "商業"],
            },
            PromptEntry {
                title: "商務人像",
                content: "攝影棚燈光，背景為灰色中性色調，柔和的燈光營造專業氛圍",
                difficulty: Difficulty::Simple,
                tags: &["商務", "人像", "專業"],
            },
            PromptEntry {
                title: "產品原樣保持",
                content: "請按原樣使用上傳的產品圖片，請勿修改、重繪或重新詮釋其任何部分",
                difficulty: Difficulty::Simple,
                tags: &["產品", "原樣", "保持"],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let categories = Catalog::categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(Catalog::entry_count(), 15);
        assert_eq!(categories[0].id, CategoryId::Basic);
        assert_eq!(categories[0].entries.len(), 4);
        assert_eq!(categories[1].entries.len(), 3);
    }

    #[test]
    fn test_cards_cover_catalog_in_order() {
        let cards = Catalog::build_cards();
        assert_eq!(cards.len(), Catalog::entry_count());
        assert_eq!(cards[0].category, CategoryId::Basic);
        assert_eq!(cards[0].entry.title, "背景替換");
        assert_eq!(cards.last().unwrap().category, CategoryId::Professional);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_category_id_parsing() {
        assert_eq!("basic".parse::<CategoryId>().unwrap(), CategoryId::Basic);
        assert_eq!(
            "進階合成".parse::<CategoryId>().unwrap(),
            CategoryId::Advanced
        );
        assert!("nonexistent".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("simple".parse::<Difficulty>().unwrap(), Difficulty::Simple);
        assert_eq!("困難".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
