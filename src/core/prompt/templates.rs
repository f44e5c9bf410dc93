//! Prompt templates per locale

use crate::config::PromptLocale;
use crate::core::generation::ResolvedMode;

/// Render the instruction for a concrete mode
pub(super) fn render(locale: PromptLocale, mode: ResolvedMode, scene: &str) -> String {
    match locale {
        PromptLocale::En => render_en(mode, scene),
        PromptLocale::Zh => render_zh(mode, scene),
    }
}

fn render_en(mode: ResolvedMode, scene: &str) -> String {
    let scene_clause = if scene.is_empty() {
        String::new()
    } else {
        format!(" in the context of {}", scene)
    };

    match mode {
        ResolvedMode::Truth => format!(
            "Generate a truth question for a party game{}. \
             Requirements: fun but not offensive, suitable for playing among friends. \
             Return only the question, without any explanation.",
            scene_clause
        ),
        ResolvedMode::Dare => format!(
            "Generate a dare task for a party game{}. \
             Requirements: fun but safe, suitable for playing among friends. \
             Return only the task, without any explanation.",
            scene_clause
        ),
    }
}

fn render_zh(mode: ResolvedMode, scene: &str) -> String {
    let scene_clause = if scene.is_empty() {
        String::new()
    } else {
        format!("在{}的场景下", scene)
    };

    match mode {
        ResolvedMode::Truth => format!(
            "请生成一个适合聚会游戏的真心话问题{}。要求：有趣但不冒犯，适合朋友间玩。只返回问题，不要解释。",
            scene_clause
        ),
        ResolvedMode::Dare => format!(
            "请生成一个适合聚会游戏的大冒险任务{}。要求：有趣但安全，适合朋友间玩。只返回任务，不要解释。",
            scene_clause
        ),
    }
}
