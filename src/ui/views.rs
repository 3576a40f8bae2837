//! Section renderers for the interactive frontend.

use crate::catalog::CategoryId;
use crate::config::Theme;
use crate::controller::dispatch::InputMode;
use crate::controller::state::{Section, Tab};
use crate::controller::ViewController;
use crate::generator::Field;
use crate::ui::term::TerminalPort;
use crate::utils::OutputStyle;

pub fn render_header(controller: &ViewController<TerminalPort>, lines: &mut Vec<String>) {
    let theme_icon = match controller.theme() {
        Theme::Dark => "🌙",
        Theme::Light => "☀️",
    };
    lines.push(format!(
        "{}  {}",
        OutputStyle::title("🍌 Nano Banana AI 創作指南"),
        theme_icon
    ));

    let nav = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let label = format!("{} {}", i + 1, section.display_name());
            if *section == controller.state().section {
                format!("[{}]", OutputStyle::header(&label))
            } else {
                format!(" {} ", OutputStyle::muted(&label))
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(nav);
    lines.push(OutputStyle::header_separator());
}

pub fn render_menu(controller: &ViewController<TerminalPort>, lines: &mut Vec<String>) {
    lines.push(OutputStyle::header("選單").to_string());
    for (i, section) in Section::ALL.iter().enumerate() {
        let marker = if *section == controller.state().section {
            ">"
        } else {
            " "
        };
        lines.push(format!("{} {}. {}", marker, i + 1, section.display_name()));
    }
    lines.push(String::new());
    lines.push(OutputStyle::muted("按數字鍵前往，Esc 關閉選單").to_string());
}

pub fn render_home(lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push(OutputStyle::header("掌握 Nano Banana 圖像編輯").to_string());
    lines.push("從基礎編輯到專業合成，完整的提示詞資料庫與生成工具。".to_string());
    lines.push(String::new());
    lines.push("• 按 2 瀏覽核心功能".to_string());
    lines.push("• 按 4 開啟提示詞資料庫".to_string());
    lines.push("• 按 5 使用提示詞生成器".to_string());
}

pub fn render_features(controller: &ViewController<TerminalPort>, lines: &mut Vec<String>) {
    let tabs = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == controller.state().tab {
                format!("[{}]", OutputStyle::header(tab.display_name()))
            } else {
                format!(" {} ", OutputStyle::muted(tab.display_name()))
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(tabs);
    lines.push(OutputStyle::separator());

    let description = match controller.state().tab {
        Tab::Consistency => "跨多次編輯保持人物臉部特徵、髮型與身材一致，適合系列創作與人像修圖。",
        Tab::Fusion => "將多張參考圖融合為一張完整畫面，每個物件和角色都不能缺漏。",
        Tab::Style => "一句話切換漫畫線稿、水彩、毛絨公仔等風格，並可指定視角與光影。",
        Tab::Knowledge => "理解場景中的物理與常識關係，按照真實世界邏輯補全畫面細節。",
    };
    lines.push(String::new());
    lines.push(description.to_string());
    lines.push(String::new());
    lines.push(OutputStyle::muted("Tab 切換標籤頁").to_string());
}

pub fn render_examples(lines: &mut Vec<String>) {
    lines.push(OutputStyle::header("案例展示").to_string());
    lines.push(OutputStyle::separator());
    for (title, note) in [
        ("商品圖重構", "白底商品照一鍵換成場景化展示圖"),
        ("老照片修復", "模糊人像還原清晰細節並上色"),
        ("角色立繪轉公仔", "插畫角色轉為 1/7 比例實體模型效果"),
        ("草圖生成", "火柴人動作草圖直接生成完整畫面"),
    ] {
        lines.push(format!(
            "• {}：{}",
            OutputStyle::header(title),
            OutputStyle::content(note)
        ));
    }
}

pub fn render_database(controller: &ViewController<TerminalPort>, lines: &mut Vec<String>) {
    let search_marker = if controller.mode() == InputMode::Search {
        OutputStyle::header("搜尋")
    } else {
        OutputStyle::muted("搜尋")
    };
    lines.push(format!("{}: {}_", search_marker, controller.query()));

    let mut filter_tabs = Vec::new();
    let all_label = if controller.state().filter.is_none() {
        format!("[{}]", OutputStyle::header("全部"))
    } else {
        format!(" {} ", OutputStyle::muted("全部"))
    };
    filter_tabs.push(all_label);
    for category in CategoryId::ALL {
        let label = if controller.state().filter == Some(category) {
            format!("[{}]", OutputStyle::header(category.display_name()))
        } else {
            format!(" {} ", OutputStyle::muted(category.display_name()))
        };
        filter_tabs.push(label);
    }
    lines.push(filter_tabs.join(" "));
    lines.push(OutputStyle::separator());

    let selected = controller.selected_index();
    let mut shown = 0;
    for (i, card) in controller.visible_cards().enumerate() {
        let marker = if i == selected { ">" } else { " " };
        let heart = if controller.favorites().contains(card.entry.content) {
            "❤️"
        } else {
            "🤍"
        };
        lines.push(format!(
            "{} {} [{}] {} ({})",
            marker,
            heart,
            OutputStyle::category(card.category.display_name()),
            OutputStyle::header(card.entry.title),
            OutputStyle::muted(card.entry.difficulty.display_name()),
        ));
        lines.push(format!("     {}", OutputStyle::content(card.entry.content)));
        let tags = card
            .entry
            .tags
            .iter()
            .map(|t| format!("#{}", OutputStyle::tag(t)))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("     {}", tags));
        shown += 1;
    }

    if shown == 0 {
        lines.push(OutputStyle::muted("沒有符合的提示詞").to_string());
    }

    lines.push(String::new());
    lines.push(
        OutputStyle::muted("/ 搜尋  f 切換分類  j/k 移動  c 複製  空白鍵 收藏").to_string(),
    );
}

pub fn render_generator(controller: &ViewController<TerminalPort>, lines: &mut Vec<String>) {
    lines.push(OutputStyle::header("提示詞生成器").to_string());
    lines.push(OutputStyle::separator());

    let editing = controller.mode() == InputMode::Form;
    for field in Field::ALL {
        let marker = if editing && field == controller.form_field() {
            ">"
        } else {
            " "
        };
        let value = controller.form().field(field);
        lines.push(format!(
            "{} {}: {}",
            marker,
            OutputStyle::label(field.display_name()),
            value
        ));
    }

    lines.push(OutputStyle::separator());
    match controller.result() {
        Some(result) => {
            lines.push(OutputStyle::header("生成結果").to_string());
            lines.push(OutputStyle::content(result).to_string());
        }
        None => {
            lines.push(
                OutputStyle::muted("✨ 填寫表單後按 Enter 即可生成專業提示詞").to_string(),
            );
        }
    }

    lines.push(String::new());
    lines.push(
        OutputStyle::muted("i 編輯欄位  Tab 下一欄  Enter 生成  x 清空  y 複製結果  * 收藏結果")
            .to_string(),
    );
}

pub fn render_tutorial(lines: &mut Vec<String>) {
    lines.push(OutputStyle::header("使用教學").to_string());
    lines.push(OutputStyle::separator());
    for (i, step) in [
        "上傳一張基底圖片，或從空白畫布開始。",
        "在資料庫挑選接近需求的提示詞，按 c 複製。",
        "用生成器組合主題、構圖、動作、地點、風格與編輯指令。",
        "貼上提示詞產生結果；不滿意就補充「編輯指令」欄位再試。",
        "把常用的提示詞按空白鍵加入收藏，下次直接取用。",
    ]
    .iter()
    .enumerate()
    {
        lines.push(format!("{}. {}", i + 1, step));
    }
}

pub fn render_footer(controller: &ViewController<TerminalPort>, lines: &mut Vec<String>) {
    lines.push(OutputStyle::header_separator());

    if let Some(notice) = controller.current_notice() {
        let styled = match notice.severity {
            crate::notify::Severity::Success => OutputStyle::success(&notice.message),
            crate::notify::Severity::Error => OutputStyle::error(&notice.message),
            crate::notify::Severity::Warning => OutputStyle::warning(&notice.message),
            crate::notify::Severity::Info => OutputStyle::info(&notice.message),
        };
        lines.push(format!("{} {}", notice.severity.icon(), styled));
    } else {
        lines.push(
            OutputStyle::muted("1-6 切換頁面  m 選單  t 主題  Esc 關閉  q 離開").to_string(),
        );
    }
}
