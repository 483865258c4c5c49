use easi_core::html::escape_html;

use crate::components::{
    animated_title, animated_title_lines, check_list, faq_section, feature_grid, reveal,
    reveal_with_class, stat_row, Feature, HeadingTag, Reveal, Stat, TitleLine, TitleStyle,
};
use crate::components::chrome::STORE_URL;
use crate::layout::PageMeta;

pub const META: PageMeta = PageMeta::new(
    "EASI | #1 Speech-Language Assessment Software | 5 Hours → 15 Minutes",
    "EASI is the leading speech-language assessment platform for SLPs. Transform 5+ hours of evaluation into 15-30 minutes. HIPAA compliant. 98-99% accuracy. MySLP second look protocol. Built by SLPs. $199/year at Northern Speech Services.",
    "/",
)
.with_banner();

const HERO_STATS: &[Stat] = &[
    Stat { value: "4.5+", label: "Hours Saved Per Evaluation" },
    Stat { value: "98%", label: "Transcription Accuracy" },
    Stat { value: "$199", label: "Per Year: ChatSLP + 10 Evaluations" },
    Stat { value: "15-30", label: "Minutes for Complete Analysis" },
];

struct Benefit {
    category: &'static str,
    items: &'static [&'static str],
}

const BENEFITS: &[Benefit] = &[
    Benefit {
        category: "For You",
        items: &["Leave work on time", "No weekend report writing", "More energy for therapy", "Prevent burnout"],
    },
    Benefit {
        category: "For Your Clients",
        items: &["Waitlists shrink dramatically", "Faster access to services", "More therapy slots available", "Better outcomes"],
    },
    Benefit {
        category: "For Your Organization",
        items: &["See 20% more clients", "Clear evaluation backlogs", "Improve staff retention", "Increase revenue"],
    },
];

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Record Naturally",
        description: "Play-based assessment with infinite, customizable visual prompts. Record during natural play and conversation, with no artificial test scenarios.",
        features: &["One-button recording", "Works with any activity", "No distracting note-taking"],
    },
    Step {
        number: "02",
        title: "Automatic Analysis",
        description: "Speech diarization with 98-99% accuracy automatically identifies who's speaking. Full IPA transcription with complete editability.",
        features: &["Speaker separation", "IPA transcription", "Target vs. actual production"],
    },
    Step {
        number: "03",
        title: "Comprehensive Results",
        description: "Standard scores, percentile rankings, and state eligibility criteria. Key metrics including PCC, MLU, IPSYN, NDW, VOT, and intelligibility scores.",
        features: &["Standard scores (Mean=100, SD=15)", "Confidence ratings", "State eligibility built-in"],
    },
    Step {
        number: "04",
        title: "Professional Reports",
        description: "Complete, customizable documentation ready in minutes. Insurance-compliant coding with parent-friendly summaries.",
        features: &["Comprehensive evaluation reports", "CPT codes included", "Full clinical control"],
    },
];

const CAPABILITIES: &[Feature] = &[
    Feature {
        title: "Computational Language Analysis",
        description: "Generates standard scores and percentile rankings for MLU, IPSYN, vocabulary diversity, and social function analysis.",
        accent: "#8B5CF6",
    },
    Feature {
        title: "Speech Recognition & Diarization",
        description: "Separates and identifies multiple speakers with real-time feedback during assessments.",
        accent: "#14B8A6",
    },
    Feature {
        title: "IEP Management",
        description: "Upload medical reports, existing IEPs, and developmental histories. EASI extracts relevant data for goal creation.",
        accent: "#3B82F6",
    },
    Feature {
        title: "MySLP Second Opinion",
        description: "Interactive assistance provides clinicians with real-time guidance and a second look at assessment results.",
        accent: "#F59E0B",
    },
    Feature {
        title: "Computer Vision Protocol Analysis",
        description: "Upload images of test protocols for automatic data extraction. No manual entry required.",
        accent: "#EC4899",
    },
    Feature {
        title: "HIPAA & FERPA Compliant",
        description: "Enterprise-grade security built from the ground up for healthcare and education settings.",
        accent: "#10B981",
    },
];

const MYSLP_CAPABILITIES: &[Feature] = &[
    Feature {
        title: "Clinical Report Review",
        description: "Reviews your evaluation reports for clinical accuracy, appropriate diagnostic language, and functional impact documentation.",
        accent: "#8B5CF6",
    },
    Feature {
        title: "State-Specific IEP Criteria",
        description: "Provides state-specific IEP eligibility criteria for all 50 states: the actual requirements your district needs.",
        accent: "#14B8A6",
    },
    Feature {
        title: "SETT Framework Templates",
        description: "Offers SETT framework templates for assistive technology evaluations, complete and copy-paste ready.",
        accent: "#3B82F6",
    },
    Feature {
        title: "Light Speed Literacy Guidance",
        description: "Guides literacy intervention using the Light Speed Literacy curriculum, with structured session planning that builds systematically.",
        accent: "#F59E0B",
    },
    Feature {
        title: "Defensible Documentation",
        description: "Helps you phrase findings in defensible, evidence-based language that protects you and serves the child.",
        accent: "#10B981",
    },
];

const MYSLP_LIMITS: &[&str] = &[
    "Tell you what to diagnose",
    "Make eligibility determinations",
    "Replace your clinical judgment",
];

/// (feature, EASI note) rows of the "not ChatGPT" comparison.
const CHATGPT_ROWS: &[(&str, &str)] = &[
    ("HIPAA Compliance", "Full BAA provided"),
    ("FERPA Compliance", "Encrypted & secure"),
    ("Audio Processing", "Full analysis"),
    ("Speaker Separation", "98-99% accuracy"),
    ("Clinical Metrics (PCC, MLU, IPSYN)", "Precise calculations"),
    ("IPA Transcription", "Fully editable"),
    ("Healthcare-Grade Security", "Amazon Bedrock"),
];

const SECURITY_ITEMS: &[Feature] = &[
    Feature {
        title: "HIPAA Compliant",
        description: "Business Associate Agreement in place. Your protected health information is handled according to HIPAA requirements.",
        accent: "#3B82F6",
    },
    Feature {
        title: "FERPA Compliant",
        description: "Safe for school-based SLPs. Student data is protected in compliance with federal education privacy requirements.",
        accent: "#6366F1",
    },
    Feature {
        title: "AWS Healthcare Infrastructure",
        description: "Built on Amazon Web Services healthcare-grade infrastructure with FedRAMP authorization.",
        accent: "#0EA5E9",
    },
    Feature {
        title: "AES-256 Encryption",
        description: "All data encrypted at rest via AWS KMS and in transit using TLS 1.2+ protocols.",
        accent: "#64748B",
    },
    Feature {
        title: "NIST CSF v1.1 Aligned",
        description: "Security practices aligned with all five core functions: Identify, Protect, Detect, Respond, and Recover.",
        accent: "#10B981",
    },
    Feature {
        title: "NDPA Compliant",
        description: "Participant in the National Student Data Privacy Agreement supporting 15+ states including NY, IL, MA, and CA.",
        accent: "#A855F7",
    },
    Feature {
        title: "Secure Data Lifecycle",
        description: "24-hour TTL for conversational data, automated deletion within 90 days of contract termination, NIST SP 800-88 compliant disposal.",
        accent: "#F43F5E",
    },
    Feature {
        title: "Multi-State Compliance",
        description: "Compliant with state-specific student data privacy laws including NY Education Law § 2-d, Illinois SOPPA, and more.",
        accent: "#14B8A6",
    },
];

const NSS_BENEFITS: &[&str] = &[
    "Established reputation in the SLP community",
    "Proven track record of supporting clinicians",
    "Dedicated support team who understands your needs",
    "Commitment to advancing the profession",
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    credentials: &'static [&'static str],
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Lois Jean Brady, MA, SLP",
        role: "Co-Founder & CEO, Principal Investigator",
        bio: "30+ years advancing communication access through clinical excellence and technological innovation. Leading research that bridges speech-language pathology with assistive technology development.",
        credentials: &[
            "Principal Investigator: NSF Phase I & II, NIH R43, AFWERX Phase I",
            "Author: Apps for Autism, Speak Move Play and Learn, Speech in Action",
            "Board of Directors, US Society for Augmentative & Alternative Communication",
            "Certified Autism Specialist with expertise in AAC systems & IEP development",
            "M.A. Speech-Language Pathology, CSU Northridge",
        ],
    },
    TeamMember {
        name: "Matthew Guggemos, MS, CCC-SLP",
        role: "Co-Founder & Chief Technology Officer",
        bio: "Speech-language pathologist bridging clinical practice with technology innovation. Expertise in computational linguistics, speech processing, and multi-sensory intervention design.",
        credentials: &[
            "CTO, NSF SBIR Phase 2 (Grant #2133148) developing EASI platform",
            "Co-PI on NIH & NSF grants for speech technology research",
            "2013 Mensa Intellectual Benefits to Society Award for autism technology",
            "Board Member: American Society for AI, Mensa Foundation Trustee",
            "M.S. Speech Pathology & Audiology, CSU East Bay; ASHA CCC",
        ],
    },
];

fn section_heading(title: &str, lead: &str) -> String {
    reveal_with_class(
        Reveal::Up,
        0,
        "section-heading",
        &format!(
            "{}<p class=\"lead\">{}</p>",
            animated_title(title, HeadingTag::H2, "section-title", TitleStyle::default()),
            escape_html(lead)
        ),
    )
}

fn hero() -> String {
    let title = animated_title_lines(
        &[
            TitleLine::plain("Finally"),
            TitleLine::plain("Leave Work at 5pm."),
            TitleLine::gradient("Every Day.", "#8B5CF6", "#14B8A6"),
        ],
        HeadingTag::H1,
        "hero-title",
    );
    format!(
        r##"<section class="hero"><div class="container hero-grid">
<div class="hero-copy">
<span class="pill">NSF Phase II SBIR Award #2133148</span>
{title}
<p class="hero-lead">Transform 5+ hours of speech evaluation into 15-30 minutes. No weekend report writing. Be fully present with the children who need you most.</p>
<div class="hero-actions">
<a class="btn btn-primary btn-lg" href="{STORE_URL}" target="_blank" rel="noopener noreferrer">Start saving time today!</a>
<a class="btn btn-outline btn-lg" href="#how-it-works">See How It Works</a>
</div>
<ul class="trust-row"><li>HIPAA Compliant</li><li>FERPA Compliant</li><li>No Credit Card Required</li></ul>
</div>
<figure class="hero-figure"><img src="/static/img/hero-slp.svg" alt="Speech-language pathologist closing a laptop at a reasonable hour" loading="eager">
<figcaption>"I finally leave work when work is done, not at midnight."</figcaption></figure>
</div>
<div class="container">{stats}</div>
</section>"##,
        stats = reveal(Reveal::Up, 300, &stat_row(HERO_STATS)),
    )
}

fn value_proposition() -> String {
    let mut cards = String::new();
    for (index, benefit) in BENEFITS.iter().enumerate() {
        cards.push_str(&reveal_with_class(
            Reveal::Up,
            index as u32 * 150,
            "card-cell",
            &format!(
                "<div class=\"benefit-card\"><h3>{}</h3>{}</div>",
                escape_html(benefit.category),
                check_list(benefit.items)
            ),
        ));
    }
    format!(
        r#"<section id="features" class="section"><div class="container">
{heading}<div class="card-grid three">{cards}</div>
</div></section>"#,
        heading = reveal_with_class(
            Reveal::Up,
            0,
            "section-heading",
            &animated_title("The Time You'll Get Back", HeadingTag::H2, "section-title", TitleStyle::default()),
        ),
    )
}

fn how_it_works() -> String {
    let mut steps = String::new();
    for (index, step) in STEPS.iter().enumerate() {
        let animation = if index % 2 == 0 { Reveal::Left } else { Reveal::Right };
        steps.push_str(&reveal(
            animation,
            0,
            &format!(
                "<article class=\"step{}\"><span class=\"step-number\">{}</span><div><h3>{}</h3><p>{}</p>{}</div></article>",
                if index % 2 == 1 { " reverse" } else { "" },
                step.number,
                escape_html(step.title),
                escape_html(step.description),
                check_list(step.features),
            ),
        ));
    }
    format!(
        r#"<section id="how-it-works" class="section section-white"><div class="container">
{heading}
<div class="steps">{steps}</div>
<div class="subsection"><h3 class="subsection-title">Complete Platform Capabilities</h3>
<p class="lead">Everything you need for efficient, accurate speech-language assessments</p>
{capabilities}</div>
</div></section>"#,
        heading = section_heading(
            "Assessment That Works the Way You Work",
            "From natural recording to professional reports in minutes"
        ),
        capabilities = feature_grid(CAPABILITIES),
    )
}

fn myslp() -> String {
    let limits: String = MYSLP_LIMITS
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(
        r##"<section id="chatslp" class="section section-dark"><div id="myslp" class="container">
{intro}
{capabilities}
<div class="callout"><h3>What mySLP won't do</h3><ul class="cross-list">{limits}</ul>
<button type="button" class="btn btn-light" data-open-chat>Ask the EASI Agent about mySLP</button></div>
</div></section>"##,
        intro = reveal_with_class(
            Reveal::Up,
            0,
            "section-heading",
            "<span class=\"pill\">My Second Look Protocol</span>\
             <h2 class=\"section-title\">The colleague you wish you had</h2>\
             <p class=\"lead\"><strong>mySLP doesn&#39;t think for you.</strong> It thinks with you.</p>\
             <p>When you bring your evaluation data, your therapy plans, your diagnostic questions, mySLP offers \
             what every clinician needs but rarely gets: a thoughtful second look from someone who knows the research, \
             understands the regulations, and respects that you&#39;re the one who saw the whole child.</p>",
        ),
        capabilities = feature_grid(MYSLP_CAPABILITIES),
    )
}

fn comparison() -> String {
    let mut risky = String::new();
    let mut safe = String::new();
    for (feature, note) in CHATGPT_ROWS {
        risky.push_str(&format!("<li>{}</li>", escape_html(feature)));
        safe.push_str(&format!(
            "<li>{}<span class=\"note\">{}</span></li>",
            escape_html(feature),
            escape_html(note)
        ));
    }
    format!(
        r#"<section id="comparison" class="section"><div id="why-easi" class="container">
{heading}
{timeline}
{columns}
{bottom}
</div></section>"#,
        heading = reveal_with_class(
            Reveal::Up,
            0,
            "section-heading",
            "<span class=\"pill pill-warning\">Critical Distinction</span>\
             <h2 class=\"section-title\">Why EASI is NOT ChatGPT</h2>\
             <p class=\"lead\">Uploading patient recordings or documents to ChatGPT violates HIPAA and FERPA regulations. \
             EASI provides a legally compliant alternative.</p>",
        ),
        timeline = reveal(
            Reveal::Up,
            100,
            "<div class=\"before-after\"><div class=\"before\"><span>The Old Way</span><p>9:15 PM. Still working.</p></div>\
             <div class=\"after\"><span>With EASI</span><p>4:30 PM. Work complete.</p></div></div>",
        ),
        columns = reveal(
            Reveal::Up,
            200,
            &format!(
                "<div class=\"versus\"><div class=\"versus-col risk\"><h3>ChatGPT / Generic Tools</h3><p>Not designed for healthcare</p>\
                 <ul class=\"cross-list\">{risky}</ul><p class=\"warning\">Uploading patient data violates HIPAA and FERPA regulations</p></div>\
                 <div class=\"versus-col safe\"><h3>EASI + ChatSLP</h3><p>Purpose-built for clinical use</p>\
                 <ul class=\"check-list\">{safe}</ul><p>Your data never leaves the secure system</p></div></div>"
            ),
        ),
        bottom = reveal(
            Reveal::Up,
            400,
            "<p class=\"bottom-line\"><strong>Bottom Line:</strong> EASI is built on HIPAA-protected infrastructure. \
             Your data never leaves the secure system. <a href=\"/comparison\">See the full comparison</a></p>",
        ),
    )
}

fn security() -> String {
    format!(
        r#"<section id="security" class="section section-white"><div class="container">
{heading}
{items}
<div class="callout"><h3>Enterprise &amp; District Procurement</h3>
<p>Need detailed security documentation for your organization's procurement process? We provide comprehensive security documentation including NIST CSF alignment, NDPA agreements, Data Security and Privacy Plans, and BAAs for enterprise customers.</p>
<div class="callout-actions"><a class="btn btn-outline" href="/privacy">View Full Policy</a>
<a class="btn btn-primary" href="mailto:admin@itherapyllc.com?subject=Security%20Documentation%20Request">Request Documentation</a></div></div>
</div></section>"#,
        heading = section_heading(
            "Enterprise-Grade Security",
            "EASI was designed from the ground up to protect sensitive clinical and student data. Your patients' privacy, your students' information, and your professional compliance are non-negotiable."
        ),
        items = feature_grid(SECURITY_ITEMS),
    )
}

fn pricing() -> String {
    format!(
        r#"<section id="pricing" class="section section-dark"><div class="container narrow">
<span class="pill">Exclusive Partner</span>
<h2 class="section-title">Distributed Exclusively Through Northern Speech Services</h2>
<p class="lead">Your Trusted Partner for 50 Years</p>
<p>Northern Speech Services has been serving the SLP community for five decades, bringing you proven solutions and innovations. EASI represents the next evolution in assessment technology, available exclusively through your trusted partner.</p>
{benefits}
<p class="price"><strong>$199/year</strong> for ChatSLP plus 10 evaluations</p>
<a class="btn btn-light btn-lg" href="https://northernspeech.com" target="_blank" rel="noopener noreferrer">Get EASI at Northern Speech Services</a>
</div></section>"#,
        benefits = check_list(NSS_BENEFITS),
    )
}

fn team() -> String {
    let mut cards = String::new();
    for (index, member) in TEAM.iter().enumerate() {
        let animation = if index == 0 { Reveal::Left } else { Reveal::Right };
        cards.push_str(&reveal(
            animation,
            index as u32 * 200,
            &format!(
                "<article class=\"team-card\"><h3>{}</h3><p class=\"role\">{}</p><p>{}</p>{}</article>",
                escape_html(member.name),
                escape_html(member.role),
                escape_html(member.bio),
                check_list(member.credentials),
            ),
        ));
    }
    format!(
        r#"<section id="team" class="section"><div class="container">
{heading}
<div class="card-grid two">{cards}</div>
{callout}
</div></section>"#,
        heading = section_heading(
            "Built by SLPs Who Lived Your Challenges",
            "We're practicing clinicians who built what we desperately needed in our own practice."
        ),
        callout = reveal(
            Reveal::Up,
            500,
            "<p class=\"callout-line\"><strong>Why This Matters:</strong> We&#39;re practicing SLPs who built what we desperately needed. \
             <a href=\"/about\">Read our story</a></p>",
        ),
    )
}

fn call_to_action() -> String {
    format!(
        r#"<section class="section cta"><div class="container">
<div class="section-heading"><h2 class="section-title">Ready to Leave Work on Time?</h2>
<p class="lead">Join hundreds of SLPs who are reclaiming their evenings, their weekends, and their passion for the work that matters.</p></div>
<div class="card-grid three">
{individual}{district}{chat}
</div>
<p class="cta-note">Questions? <a href="/contact">Contact us</a></p>
</div></section>"#,
        individual = reveal(
            Reveal::Scale,
            0,
            "<div class=\"cta-card primary\"><h3>Individual SLPs</h3><p>Turn 5-hour evaluations into 15 minutes. Starting at $199/year.</p>\
             <a class=\"btn btn-primary btn-block\" href=\"https://www.northernspeech.com/12648/\" target=\"_blank\" rel=\"noopener noreferrer\">Get Started</a></div>",
        ),
        district = reveal(
            Reveal::Scale,
            100,
            "<div class=\"cta-card\"><h3>School Districts</h3><p>Volume pricing for your team. See a customized demo.</p>\
             <a class=\"btn btn-outline btn-block\" href=\"/contact?type=demo\">Request Quote</a></div>",
        ),
        chat = reveal(
            Reveal::Scale,
            200,
            "<div class=\"cta-card\"><h3>Talk to EASI</h3><p>Speak to our EASI agent about all of EASI&#39;s features!</p>\
             <button type=\"button\" class=\"btn btn-outline btn-block\" data-open-chat>Ask EASI</button></div>",
        ),
    )
}

pub fn render() -> String {
    [
        hero(),
        value_proposition(),
        how_it_works(),
        myslp(),
        comparison(),
        security(),
        pricing(),
        team(),
        faq_section(),
        call_to_action(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_has_every_linked_section() {
        let html = render();
        for id in [
            "features",
            "how-it-works",
            "chatslp",
            "myslp",
            "comparison",
            "why-easi",
            "security",
            "pricing",
            "team",
            "faq",
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[test]
    fn hero_uses_multi_line_title() {
        let html = hero();
        assert!(html.contains("data-letter-key=\"2-0-0\""));
        assert!(html.contains("Start saving time today!"));
    }
}
