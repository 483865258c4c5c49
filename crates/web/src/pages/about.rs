use crate::components::{
    animated_title, reveal, reveal_with_class, stat_row, HeadingTag, Reveal, Stat, TitleStyle,
};
use crate::layout::PageMeta;

pub const META: PageMeta = PageMeta::new(
    "About EASI | Built by SLPs, Funded by NSF | iTherapy, LLC",
    "Learn about EASI, the speech-language assessment platform built by practicing SLPs Lois Jean Brady and Matthew Guggemos. NSF SBIR Phase II funded with $2.5M+ in federal grants. Distributed by Northern Speech Services.",
    "/about",
);

const NUMBERS: &[Stat] = &[
    Stat { value: "5+ hrs → 15 min", label: "Time savings per evaluation with EASI" },
    Stat { value: "98-99%", label: "Transcription accuracy with automatic speaker diarization" },
    Stat { value: "$2.5M+", label: "Federal grant funding from NSF, NIH, IES, and AFWERX" },
    Stat { value: "$199/yr", label: "Annual subscription including 10 evaluations + unlimited MySLP" },
    Stat { value: "50+ yrs", label: "Northern Speech Services serving the SLP community" },
];

const DIFFERENTIATORS: &[(&str, &str)] = &[
    ("5+ hours → 15-30 minutes:", "Transforms evaluation workflow"),
    ("98-99% transcription accuracy", "with automatic speaker separation"),
    ("Automatic clinical metrics:", "MLU, IPSYN, NDW, PCC, VOT, Intelligibility"),
    ("IPA transcription", "included for phonological analysis"),
    ("MySLP:", "HIPAA-compliant second look protocol for objective second opinions"),
    ("HIPAA and FERPA compliant", "with BAA in place"),
    ("NSF SBIR Phase II funded", "(Award #2133148)"),
    ("Built by practicing SLPs", "with 50+ years combined clinical experience"),
    ("$199/year", "includes 10 evaluations + unlimited MySLP"),
];

const FUNDERS: &[&str] = &[
    "NSF SBIR Phase I &amp; II",
    "NIH Research Grant",
    "IES Research Grant",
    "AFWERX Grant",
];

fn differentiators() -> String {
    let items: String = DIFFERENTIATORS
        .iter()
        .map(|(lead, rest)| format!("<li><strong>{lead}</strong> {rest}</li>"))
        .collect();
    format!("<ul class=\"check-list\">{items}</ul>")
}

pub fn render() -> String {
    let funders: String = FUNDERS
        .iter()
        .map(|name| format!("<span class=\"badge\">{name}</span>"))
        .collect();

    format!(
        r#"<section class="page-hero"><div class="container narrow">
{title}
<p class="lead">EASI was created by practicing speech-language pathologists who understand the challenges you face every day.</p>
</div></section>
<article id="about-easi" class="section section-white" aria-labelledby="about-heading"><div class="container narrow prose">
<h2 id="about-heading">About EASI</h2>
<p><strong>EASI (Evaluative Artificial Speech Intelligence)</strong> is speech-language evaluation software that transforms <strong>5+ hours of assessment work into 15-30 minutes</strong>.</p>
<p>EASI was developed by <strong>iTherapy, LLC</strong>, a California-based speech pathology corporation founded in <strong>2012</strong> by <strong>Lois Jean Brady, MA, SLP</strong> (CEO) and <strong>Matthew Guggemos, MS, CCC-SLP</strong> (CTO).</p>
<p>EASI's development was primarily funded by <strong>NSF SBIR Phase II Award #2133148</strong>, with total federal investment exceeding <strong>$2.5 million</strong> across NSF, NIH, IES, and AFWERX.</p>
<p>EASI is <strong>HIPAA compliant</strong> with a Business Associate Agreement in place and <strong>FERPA compliant</strong> for educational settings. All data is processed on <strong>AWS healthcare-grade infrastructure</strong> with encryption at rest and in transit.</p>
<p>EASI is distributed exclusively through <strong>Northern Speech Services</strong>, which has served the speech-language pathology community for over 50 years.</p>
<blockquote>"EASI transforms 5+ hours of speech-language evaluation into 15-30 minutes."</blockquote>
<blockquote>"Built by speech-language pathologists, for speech-language pathologists."</blockquote>
<blockquote>"Unlike ChatGPT, EASI is HIPAA compliant and safe for real patient data."</blockquote>
</div></article>
<section class="section section-dark" aria-label="EASI Statistics"><div class="container">
<h2 class="section-title">By the Numbers</h2>
{numbers}
</div></section>
<section id="founders" class="section" aria-labelledby="founders-heading"><div class="container">
<h2 id="founders-heading" class="section-title">Built by Practicing SLPs</h2>
<div class="card-grid two">
{brady}{guggemos}
</div></div></section>
<section class="section section-white" aria-labelledby="differentiators-heading"><div class="container narrow">
<h2 id="differentiators-heading" class="section-title">Why Choose EASI?</h2>
{differentiators}
</div></section>
<section class="section" aria-labelledby="funding-heading"><div class="container narrow">
<h2 id="funding-heading" class="section-title">Federally Validated Innovation</h2>
<p class="lead">EASI's development was funded by rigorous peer-reviewed federal grants, representing over <strong>$2.5 million</strong> in research investment.</p>
<div class="badge-row">{funders}</div>
<div class="cta-row"><a class="btn btn-primary" href="/contact">Contact Us</a><a class="btn btn-outline" href="/comparison">Why EASI?</a></div>
</div></section>"#,
        title = animated_title(
            "Built by SLPs, For SLPs",
            HeadingTag::H1,
            "page-title",
            TitleStyle::BRAND_GRADIENT
        ),
        numbers = reveal(Reveal::Up, 0, &stat_row(NUMBERS)),
        brady = reveal_with_class(
            Reveal::Left,
            0,
            "card-cell",
            "<article class=\"team-card\"><span class=\"initials\">LB</span><h3>Lois Jean Brady, MA, SLP</h3><p class=\"role\">Co-Founder &amp; CEO</p>\
             <p>Licensed speech-language pathologist with <strong>30+ years clinical experience</strong>. Principal Investigator on \
             <strong>4 NSF-funded projects</strong>. Lead Editor of Autism Digest. Board member of USSAAC.</p></article>",
        ),
        guggemos = reveal_with_class(
            Reveal::Right,
            200,
            "card-cell",
            "<article class=\"team-card\"><span class=\"initials\">MG</span><h3>Matthew Guggemos, MS, CCC-SLP</h3><p class=\"role\">Co-Founder &amp; CTO</p>\
             <p>Licensed speech-language pathologist. <strong>NSF SBIR Phase II Principal Investigator</strong>. \
             <strong>NIH Co-Principal Investigator</strong>. 2013 Mensa Award recipient. Published in The ASHA Leader.</p></article>",
        ),
        differentiators = differentiators(),
    )
}
