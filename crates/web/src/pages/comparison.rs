use easi_core::html::escape_html;

use crate::components::{
    animated_title, comparison_table, faq_accordion, reveal, Faq, FaqCategory, HeadingTag, Reveal,
    TitleStyle,
};
use crate::layout::PageMeta;

pub const META: PageMeta = PageMeta::new(
    "EASI vs ChatGPT vs SALT | Speech-Language Assessment Software Comparison",
    "Compare EASI with ChatGPT and SALT for speech-language evaluations. See why SLPs cannot use ChatGPT (HIPAA violation) and how EASI offers better accuracy, automatic metrics, and clinical AI support than SALT.",
    "/comparison",
);

/// (headline, detail) pairs for the ChatGPT column and the EASI column.
const CHATGPT_RISKS: &[(&str, &str)] = &[
    ("No HIPAA Compliance", "No Business Associate Agreement available. Uploading patient data is a federal violation."),
    ("Cannot Process Audio", "Cannot upload or transcribe therapy session recordings."),
    ("No Speaker Separation", "Cannot distinguish adult from child speech."),
    ("No Clinical Metrics", "Cannot calculate MLU, IPSYN, NDW, PCC, VOT, or Intelligibility."),
    ("No IPA Transcription", "Cannot provide phonetic transcription for analysis."),
    ("Professional Risk", "Using with patient data risks licensure and $50K+ fines per incident."),
];

const EASI_STRENGTHS: &[(&str, &str)] = &[
    ("Fully HIPAA Compliant", "Signed Business Associate Agreement in place. Safe for real patient data."),
    ("98-99% Transcription Accuracy", "Processes audio with industry-leading accuracy."),
    ("Automatic Speaker Diarization", "Separates adult from child speech automatically."),
    ("Complete Clinical Metrics", "MLU, IPSYN, NDW, PCC, VOT, Intelligibility, all automatic."),
    ("IPA Transcription Included", "Phonetic transcription for phonological analysis."),
    ("Built for Clinical Use", "Healthcare-grade security on AWS Bedrock infrastructure."),
];

const SALT_ROWS: &[(&str, &str, &str)] = &[
    ("Transcription", "Automatic, 98-99% accuracy, 15-30 minutes", "Manual, 1-3 hours"),
    ("Speaker Separation", "Automatic diarization", "Manual identification"),
    ("IPA Transcription", "Included", "Not available"),
    ("Clinical AI Assistant", "MySLP (HIPAA compliant)", "None"),
    ("Clinical Metrics", "MLU, IPSYN, NDW, PCC, VOT, Intelligibility", "MLU, NDW, some syntax measures"),
    ("HIPAA Compliance", "Yes, with BAA", "Desktop-only (no cloud)"),
    ("IEP Support", "Goal writing, eligibility criteria", "Limited"),
    ("Pricing", "$199/year all-inclusive", "$99/year + per-use fees"),
    ("Built by SLPs", "Yes (practicing clinicians)", "Academic research team"),
    ("Federal Funding", "$2.5M+ (NSF, NIH, IES, AFWERX)", "Research grants"),
];

const QUESTIONS: &[FaqCategory] = &[FaqCategory {
    name: "Common Questions",
    color: "#3B82F6",
    questions: &[
        Faq {
            question: "Can SLPs use ChatGPT for speech evaluations?",
            answer: "No. Using ChatGPT for speech evaluations violates HIPAA (no Business Associate Agreement), cannot process audio, cannot separate speakers, cannot calculate clinical metrics like MLU or PCC, and risks professional licensure. SLPs should use HIPAA-compliant tools like EASI instead.",
        },
        Faq {
            question: "Is EASI better than SALT for language sample analysis?",
            answer: "EASI offers significant advantages over SALT: automatic transcription (98-99% accuracy) vs manual, automatic speaker diarization vs manual identification, IPA transcription included, MySLP for objective second opinions, HIPAA compliance with BAA, and more comprehensive metrics.",
        },
        Faq {
            question: "What makes EASI different from other speech assessment software?",
            answer: "EASI is built by practicing SLPs, funded by $2.5M+ in federal grants (NSF, NIH, IES, AFWERX), features MySLP for objective clinical second opinions, offers 98-99% transcription accuracy, and provides comprehensive clinical metrics with HIPAA/FERPA compliance.",
        },
    ],
}];

fn point_list(class: &str, points: &[(&str, &str)]) -> String {
    let items: String = points
        .iter()
        .map(|(headline, detail)| {
            format!(
                "<li><strong>{}</strong><p>{}</p></li>",
                escape_html(headline),
                escape_html(detail)
            )
        })
        .collect();
    format!("<ul class=\"{class}\">{items}</ul>")
}

pub fn render() -> String {
    format!(
        r#"<section class="page-hero"><div class="container narrow">
{title}
<p class="lead">See how EASI compares to ChatGPT, SALT, and manual methods. Make an informed decision for your clinical practice.</p>
</div></section>
<article id="easi-vs-chatgpt" class="section section-white" aria-labelledby="chatgpt-heading"><div class="container">
<h2 id="chatgpt-heading" class="section-title">Can SLPs Use ChatGPT for Speech Evaluations?</h2>
<blockquote>"No. Using ChatGPT for speech evaluations violates HIPAA and risks your professional license."</blockquote>
<p><strong>Short answer: No.</strong> Here's why speech-language pathologists should not use ChatGPT or similar consumer AI tools for clinical evaluations:</p>
{columns}
<p class="bottom-line"><strong>Bottom line:</strong> EASI was built specifically for clinical speech-language work. ChatGPT was not.</p>
</div></article>
<article id="easi-vs-salt" class="section" aria-labelledby="salt-heading"><div class="container">
<h2 id="salt-heading" class="section-title">EASI vs SALT: Language Sample Analysis Comparison</h2>
{salt}
</div></article>
<section class="section section-white" aria-label="Comparison questions"><div class="container narrow">
<h2 class="section-title">Why Choose EASI?</h2>
<blockquote>"NSF SBIR Phase II funded with over $2.5M in federal investment."</blockquote>
<div class="faq-list">{questions}</div>
<div class="cta-row"><a class="btn btn-primary" href="/contact?type=demo">Request a Demo</a><a class="btn btn-outline" href="/#faq">Read the FAQ</a></div>
</div></section>"#,
        title = animated_title(
            "EASI vs. The Alternatives",
            HeadingTag::H1,
            "page-title",
            TitleStyle::default()
        ),
        columns = reveal(
            Reveal::Up,
            0,
            &format!(
                "<div class=\"versus\"><div class=\"versus-col risk\"><h3>ChatGPT</h3>{}</div>\
                 <div class=\"versus-col safe\"><h3>EASI</h3>{}</div></div>",
                point_list("cross-list", CHATGPT_RISKS),
                point_list("check-list", EASI_STRENGTHS),
            ),
        ),
        salt = reveal(Reveal::Up, 0, &comparison_table("EASI", "SALT", SALT_ROWS)),
        questions = faq_accordion(QUESTIONS),
    )
}
