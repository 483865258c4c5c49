//! FAQ accordion built on `<details>`, which opens and closes without
//! script.

use easi_core::html::escape_html;

use super::animated_title::{animated_title, HeadingTag, TitleStyle};
use super::reveal::{reveal, Reveal};

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqCategory {
    pub name: &'static str,
    pub color: &'static str,
    pub questions: &'static [Faq],
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        name: "Clinical",
        color: "#8B5CF6",
        questions: &[
            Faq {
                question: "How accurate is the transcription?",
                answer: "Our speech diarization achieves 98-99% accuracy, far exceeding typical dictation software. You always review and can edit before finalizing.",
            },
            Faq {
                question: "What if I disagree with the results?",
                answer: "Everything is editable. EASI provides objective data to support your clinical judgment and you make the final determination. The system documents your clinical reasoning.",
            },
            Faq {
                question: "Can it handle dialectal differences?",
                answer: "Yes. Input cultural background and languages spoken. EASI recognizes various English dialects and second language influences to prevent misidentification of differences as disorders.",
            },
        ],
    },
    FaqCategory {
        name: "Technical",
        color: "#14B8A6",
        questions: &[
            Faq {
                question: "Do I need special equipment?",
                answer: "No. Any device with internet access works: phone, tablet, or computer. No special microphones or software required.",
            },
            Faq {
                question: "How long does analysis take?",
                answer: "15-30 minutes for full analysis, depending on recording length. You can review results immediately.",
            },
            Faq {
                question: "Is my data secure?",
                answer: "Yes. HIPAA-compliant infrastructure on Amazon Bedrock (healthcare-grade security), encrypted storage, signed BAAs for all users.",
            },
        ],
    },
    FaqCategory {
        name: "Comparison",
        color: "#3B82F6",
        questions: &[
            Faq {
                question: "Could I just use ChatGPT instead?",
                answer: "No. ChatGPT cannot process audio files, calculate clinical metrics, separate speakers, provide IPA transcription, or comply with HIPAA/FERPA requirements. Uploading patient data to ChatGPT violates privacy laws and risks your license.",
            },
            Faq {
                question: "How is this different from traditional tests?",
                answer: "Traditional tests assess decontextualized skills. EASI analyzes natural communication, providing a complete picture of how children actually communicate.",
            },
        ],
    },
];

/// Render the category groups. An empty list renders nothing; a category
/// with no questions is skipped.
pub fn faq_accordion(categories: &[FaqCategory]) -> String {
    let mut out = String::new();
    for (index, category) in categories.iter().enumerate() {
        if category.questions.is_empty() {
            continue;
        }
        let mut group = format!(
            "<div class=\"faq-category\"><h3 class=\"faq-category-name\" style=\"--accent: {}\">{}</h3>",
            escape_html(category.color),
            escape_html(category.name),
        );
        for faq in category.questions {
            group.push_str(&format!(
                "<details class=\"faq-item\"><summary>{}</summary><p>{}</p></details>",
                escape_html(faq.question),
                escape_html(faq.answer),
            ));
        }
        group.push_str("</div>");
        out.push_str(&reveal(Reveal::Up, index as u32 * 150, &group));
    }
    out
}

/// The `#faq` section of the home page.
pub fn faq_section() -> String {
    format!(
        r#"<section id="faq" class="section section-white"><div class="container narrow">
<div class="section-heading">{title}<p class="lead">Everything you need to know about EASI</p></div>
<div class="faq-list">{items}</div>
</div></section>"#,
        title = animated_title(
            "Frequently Asked Questions",
            HeadingTag::H2,
            "section-title",
            TitleStyle::default()
        ),
        items = faq_accordion(FAQ_CATEGORIES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(faq_accordion(&[]), "");
    }

    #[test]
    fn empty_category_is_skipped() {
        let categories = [FaqCategory {
            name: "Empty",
            color: "#000",
            questions: &[],
        }];
        assert_eq!(faq_accordion(&categories), "");
    }

    #[test]
    fn every_question_gets_a_details_block() {
        let html = faq_accordion(FAQ_CATEGORIES);
        let total: usize = FAQ_CATEGORIES.iter().map(|c| c.questions.len()).sum();
        assert_eq!(html.matches("<details").count(), total);
        assert!(html.contains("Could I just use ChatGPT instead?"));
        assert!(html.contains("HIPAA/FERPA"));
    }
}
