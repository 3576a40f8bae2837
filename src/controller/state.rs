use crate::catalog::CategoryId;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Top-level navigation target. A closed set: navigation to anything else is
/// a NotFound, never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Home,
    Features,
    Examples,
    Database,
    Generator,
    Tutorial,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Features,
        Section::Examples,
        Section::Database,
        Section::Generator,
        Section::Tutorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::Examples => "examples",
            Section::Database => "database",
            Section::Generator => "generator",
            Section::Tutorial => "tutorial",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Home => "首頁",
            Section::Features => "核心功能",
            Section::Examples => "案例展示",
            Section::Database => "提示詞資料庫",
            Section::Generator => "提示詞生成器",
            Section::Tutorial => "使用教學",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tab group inside the features section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Consistency,
    Fusion,
    Style,
    Knowledge,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Consistency, Tab::Fusion, Tab::Style, Tab::Knowledge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Consistency => "consistency",
            Tab::Fusion => "fusion",
            Tab::Style => "style",
            Tab::Knowledge => "knowledge",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Consistency => "角色一致性",
            Tab::Fusion => "多圖融合",
            Tab::Style => "風格轉換",
            Tab::Knowledge => "知識推理",
        }
    }

    pub fn next(&self) -> Tab {
        let i = Tab::ALL.iter().position(|t| t == self).unwrap_or(0);
        Tab::ALL[(i + 1) % Tab::ALL.len()]
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

/// Database filter axis: the "all" tab or one category tab.
pub type Filter = Option<CategoryId>;

pub fn parse_filter(s: &str) -> Result<Filter, String> {
    if s == "all" {
        return Ok(None);
    }
    s.parse::<CategoryId>().map(Some)
}

pub fn next_filter(filter: Filter) -> Filter {
    match filter {
        None => Some(CategoryId::ALL[0]),
        Some(category) => {
            let i = CategoryId::ALL
                .iter()
                .position(|c| *c == category)
                .unwrap_or(0);
            if i + 1 == CategoryId::ALL.len() {
                None
            } else {
                Some(CategoryId::ALL[i + 1])
            }
        }
    }
}

/// Transient view state, reset to defaults every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub section: Section,
    pub tab: Tab,
    pub filter: Filter,
    pub mobile_menu_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            section: Section::Home,
            tab: Tab::Consistency,
            filter: None,
            mobile_menu_open: false,
        }
    }
}
