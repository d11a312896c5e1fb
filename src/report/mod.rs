// Plain-text rendering of an analysis for the terminal
// Author: kelexine (https://github.com/kelexine)

use crate::models::AnalysisResult;

/// Section headings and user-facing messages for one language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub result_title: &'static str,
    pub skin_type: &'static str,
    pub analysis: &'static str,
    pub concerns: &'static str,
    pub product_suggestions: &'static str,
    pub morning_routine: &'static str,
    pub evening_routine: &'static str,
    pub footer: &'static str,
    /// Shown when an analysis is requested without a photo.
    pub error_image: &'static str,
}

pub const EN: Labels = Labels {
    result_title: "Your Skin Analysis",
    skin_type: "Skin Type:",
    analysis: "Detailed Analysis",
    concerns: "Key Concerns",
    product_suggestions: "Product Suggestions",
    morning_routine: "Morning Routine",
    evening_routine: "Evening Routine",
    footer: "For informational purposes only. Consult a dermatologist for medical advice.",
    error_image: "Please select an image first.",
};

pub const TR: Labels = Labels {
    result_title: "Cilt Analiziniz",
    skin_type: "Cilt Tipi:",
    analysis: "Detaylı Analiz",
    concerns: "Temel Endişeler",
    product_suggestions: "Ürün Önerileri",
    morning_routine: "Sabah Rutini",
    evening_routine: "Akşam Rutini",
    footer: "Sadece bilgilendirme amaçlıdır. Tıbbi tavsiye için bir dermatoloğa danışın.",
    error_image: "Lütfen önce bir resim seçin.",
};

/// Headings for `language`, falling back to English.
pub fn labels_for(language: &str) -> &'static Labels {
    match language.trim().to_lowercase().as_str() {
        "tr" => &TR,
        _ => &EN,
    }
}

/// Render the analysis as a sectioned text report.
pub fn render(result: &AnalysisResult, language: &str) -> String {
    let labels = labels_for(language);
    let recs = &result.recommendations;

    let mut out = format!(
        "{title}\n{rule}\n{skin_label} {skin}\n\n{analysis_label}\n{analysis}\n\n",
        title = labels.result_title,
        rule = "=".repeat(labels.result_title.chars().count()),
        skin_label = labels.skin_type,
        skin = result.skin_type,
        analysis_label = labels.analysis,
        analysis = result.analysis.trim(),
    );

    push_section(
        &mut out,
        labels.concerns,
        result
            .concerns
            .iter()
            .map(|c| format!("  - {}: {}", c.name, c.description)),
    );
    push_section(
        &mut out,
        labels.product_suggestions,
        recs.product_suggestions
            .iter()
            .map(|p| format!("  - {}: {}", p.product_type, p.reason)),
    );
    push_section(&mut out, labels.morning_routine, numbered(&recs.morning_routine));
    push_section(&mut out, labels.evening_routine, numbered(&recs.evening_routine));

    out.push_str(labels.footer);
    out
}

fn numbered(steps: &[String]) -> impl Iterator<Item = String> + '_ {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}. {}", i + 1, step))
}

/// Append a titled block of lines; empty blocks are skipped entirely.
fn push_section(out: &mut String, title: &str, lines: impl Iterator<Item = String>) {
    let lines: Vec<String> = lines.collect();
    if lines.is_empty() {
        return;
    }
    out.push_str(title);
    out.push('\n');
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
}
