//! Badge tone for status text.

/// Tone は status バッジの色分け
///
/// # 判定（大文字小文字を無視した部分一致、先勝ち）
/// - "approved" → Affirmative
/// - "pending" → InProgress
/// - "gap" → Warning
/// - "received" → Informational
/// - それ以外（status なしを含む）→ Neutral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Affirmative,
    InProgress,
    Warning,
    Informational,
    Neutral,
}

const RULES: [(&str, Tone); 4] = [
    ("approved", Tone::Affirmative),
    ("pending", Tone::InProgress),
    ("gap", Tone::Warning),
    ("received", Tone::Informational),
];

impl Tone {
    pub fn classify(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return Tone::Neutral;
        };
        let lowered = status.to_lowercase();
        RULES
            .iter()
            .find(|(needle, _)| lowered.contains(*needle))
            .map(|&(_, tone)| tone)
            .unwrap_or(Tone::Neutral)
    }
}
