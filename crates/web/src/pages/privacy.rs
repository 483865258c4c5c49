//! Information security and privacy policy.
//!
//! Sections keep their policy numbers as ids (`section-1`, ...) so the
//! table of contents and the footer can deep-link. HIPAA, FERPA, NIST and
//! NDPA also get short aliases for the sitemap.

use easi_core::html::escape_html;

use crate::layout::PageMeta;

pub const META: PageMeta = PageMeta::new(
    "Privacy & Security Policies | EASI - HIPAA & FERPA Compliant",
    "Comprehensive information security and privacy policies for EASI. HIPAA compliant with BAA. FERPA compliant. NIST CSF 2.0 aligned. Built by SLPs for speech-language pathologists.",
    "/privacy",
);

pub const EFFECTIVE_DATE: &str = "11/18/2025";
pub const NEXT_REVIEW: &str = "5/18/2026";
pub const PRIVACY_OFFICER: &str = "admin@itherapyllc.com";

struct PolicySection {
    number: u8,
    alias: Option<&'static str>,
    title: &'static str,
    purpose: &'static str,
    /// (heading, body) pairs rendered as definition cards.
    details: &'static [(&'static str, &'static str)],
    list_title: &'static str,
    list: &'static [&'static str],
}

const SECTIONS: &[PolicySection] = &[
    PolicySection {
        number: 1,
        alias: Some("hipaa"),
        title: "Enterprise-Wide Computer Network and Information Security Policy",
        purpose: "To establish consistent and secure standards for iTherapy's computer networks and information systems, applicable to all employees, independent contractors, and third-party vendors, protecting both company and client data in compliance with federal and state education privacy laws including FERPA, COPPA, and state-specific student data privacy statutes.",
        details: &[
            ("Data Encryption", "AES-256 at rest via AWS KMS and TLS 1.2 or higher in transit"),
            ("Password Security", "Minimum 12 characters, complexity requirements, 90-day rotation"),
            ("Multi-Factor Authentication", "Required for all administrative access and systems containing Student Data or PHI"),
            ("Access Control", "Role-based access control ensuring least-privilege access"),
        ],
        list_title: "Infrastructure Standards",
        list: &[
            "All production systems operate on AWS infrastructure with FedRAMP authorization",
            "HIPAA Business Associate Agreement (BAA) in place with AWS for Bedrock services",
            "Multi-AZ deployment for high availability",
            "Regular security patching within 30 days of critical vulnerability disclosure",
            "Automatic session timeout after 30 minutes of inactivity",
            "Audit logging of all access to systems containing Student Data or PHI",
        ],
    },
    PolicySection {
        number: 2,
        alias: None,
        title: "Employee Information Security Training",
        purpose: "To ensure that all employees and contractors understand their specific responsibilities in maintaining information security within their roles, with particular emphasis on the protection of Student Data and compliance with FERPA, state education privacy laws, and HIPAA where applicable.",
        details: &[
            ("FERPA Requirements", "School official responsibilities and compliance obligations"),
            ("State Privacy Laws", "State-specific student data privacy laws for states where we operate"),
            ("HIPAA Requirements", "Handling Protected Health Information properly"),
            ("Threat Recognition", "Identifying phishing attempts and social engineering"),
            ("Secure Data Transfer", "Using secure channels for data transfer"),
            ("Incident Reporting", "Procedures for reporting security incidents"),
        ],
        list_title: "Training Requirements",
        list: &[
            "New employees must complete security training within 7 days of starting employment",
            "Training required before being granted access to any systems containing Student Data or PHI",
            "Additional training provided within 30 days of identifying new threats",
            "All subcontractors must complete equivalent training before access is granted",
            "Training records maintained for a minimum of 7 years",
        ],
    },
    PolicySection {
        number: 3,
        alias: Some("ferpa"),
        title: "Formal Privacy Policy",
        purpose: "To establish iTherapy's commitment to protecting client, student, and employee personal information and to ensure compliance with legal standards including FERPA (34 CFR Part 99), COPPA (15 U.S.C. § 6501-6506), HIPAA (45 CFR Parts 160 and 164), and state-specific education privacy laws.",
        details: &[
            ("Data Minimization", "We collect only the minimum personal information necessary to provide contracted services. For Student Data, this is limited to: student name, date of birth, sex/gender, and system-generated identifiers."),
            ("Purpose Limitation", "Student Data is used exclusively for the educational services specified in our contracts with Educational Agencies. We do not use Student Data for marketing or commercial purposes."),
            ("Transparency", "We maintain public-facing privacy notices and provide Educational Agencies with detailed descriptions of our data practices."),
        ],
        list_title: "Student Data Specific Protections",
        list: &[
            "Student Data is never sold, rented, leased, or traded to third parties",
            "Student Data is never used for targeted advertising",
            "Student Data is never used to develop commercial products beyond our contracted educational services",
            "Student Data retention is limited to the duration necessary to provide services (24-hour TTL for conversational data, deletion within 90 days of contract termination)",
            "Access to Student Data is restricted to employees and subcontractors with legitimate educational interest",
        ],
    },
    PolicySection {
        number: 6,
        alias: None,
        title: "Data Classification, Retention, and Disposal Policy",
        purpose: "Digital data disposal follows NIST SP 800-88 compliant methods including cryptographic erasure. Physical media undergoes destruction via shredding or degaussing. All disposal activities involving Student Data are logged and verified.",
        details: &[
            ("Public", "Information intended for public distribution"),
            ("Internal", "Business information not intended for public distribution"),
            ("Confidential", "Sensitive business information requiring protection"),
            ("Highly Confidential", "Student Data, PHI, SSNs, or regulated information"),
        ],
        list_title: "Retention Periods",
        list: &[
            "Active Service Period: retained for duration of contract with Educational Agency",
            "Post-Contract: deleted within 90 days of contract termination unless otherwise specified",
            "Conversational Data (ChatSLP): automatic 24-hour deletion",
            "Audit Logs: retained for 7 years to comply with federal record-keeping requirements",
        ],
    },
    PolicySection {
        number: 7,
        alias: None,
        title: "Formal Security Incident Response Plan (SIRP)",
        purpose: "This plan applies to any security incident that may compromise the confidentiality, integrity, or availability of iTherapy information systems or data, including unauthorized access, malware infections, data breaches, denial of service attacks, physical security breaches, lost devices, and insider threats.",
        details: &[
            ("Detection & Analysis (within 1 hour)", "Incident Response Coordinator notified, preliminary assessment conducted"),
            ("Containment (immediate)", "Isolate affected systems, revoke credentials, block threats"),
            ("Eradication (as needed)", "Remove malware, close vulnerabilities, verify complete removal"),
            ("Recovery (4-72 hours)", "Restore from backups, verify integrity, resume operations"),
        ],
        list_title: "Notification Requirements",
        list: &[
            "Educational Agencies are notified within 72 hours of confirmation that an incident constitutes a breach",
            "Notices include contact information, incident description, data types involved, number of students affected, and response actions taken",
            "Parent notification remains the Educational Agency's responsibility; iTherapy provides the information needed",
        ],
    },
    PolicySection {
        number: 15,
        alias: None,
        title: "Access Control and Authentication Policy",
        purpose: "Access to iTherapy systems is granted on a least-privilege basis and protected by strong authentication.",
        details: &[
            ("End User", "Educational Agency personnel: access only to their agency's data"),
            ("Clinical Support", "Read-only access for customer support (with MFA)"),
            ("Developer", "Access to development/staging environments only"),
            ("System Admin", "Full production access (requires MFA and logging)"),
        ],
        list_title: "Password Standards",
        list: &[
            "Minimum 12 characters",
            "Must include uppercase, lowercase, numbers, and special characters",
            "Cannot reuse last 5 passwords",
            "Must be changed every 90 days",
            "Account lockout after 5 failed attempts",
        ],
    },
    PolicySection {
        number: 20,
        alias: Some("nist"),
        title: "Alignment with NIST Cybersecurity Framework 2.0",
        purpose: "iTherapy's security program is designed to align with all six core functions of the NIST CSF 2.0 (February 2024): Govern, Identify, Protect, Detect, Respond, and Recover.",
        details: &[
            ("GOVERN (GV)", "Organizational context, risk management strategy, roles and responsibilities, policy, oversight, supply chain risk management"),
            ("IDENTIFY (ID)", "Asset management, business environment, risk assessment, improvement"),
            ("PROTECT (PR)", "Identity management and access control, awareness and training, data security, platform security, infrastructure resilience"),
            ("DETECT (DE)", "Continuous monitoring, adverse event analysis"),
            ("RESPOND (RS)", "Incident management, analysis, reporting and mitigation"),
            ("RECOVER (RC)", "Incident recovery plan execution and communication"),
        ],
        list_title: "",
        list: &[],
    },
];

const NDPA_STATES: &[&str] = &[
    "Massachusetts", "Maine", "Illinois", "Iowa", "Missouri", "Nebraska", "New Hampshire",
    "New Jersey", "New York", "Ohio", "Rhode Island", "Tennessee", "Vermont", "Virginia",
    "Washington",
];

const NDPA_PROVISIONS: &[&str] = &[
    "Provider acts as School Official with legitimate educational interest under FERPA",
    "Student Data remains property of the LEA",
    "No sale, rental, or trading of Student Data to third parties",
    "Prohibition on targeted advertising using Student Data",
    "Data breach notification within 72 hours",
    "Data disposition within 60-90 days of contract termination",
    "Annual audits available upon request",
];

fn bullet_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{items}</ul>")
}

fn render_section(section: &PolicySection) -> String {
    let alias = section
        .alias
        .map(|alias| format!("<span id=\"{alias}\" class=\"anchor\"></span>"))
        .unwrap_or_default();
    let details: String = section
        .details
        .iter()
        .map(|(heading, body)| {
            format!(
                "<div class=\"policy-card\"><h4>{}</h4><p>{}</p></div>",
                escape_html(heading),
                escape_html(body)
            )
        })
        .collect();
    let list = if section.list.is_empty() {
        String::new()
    } else {
        format!("<h4>{}</h4>{}", escape_html(section.list_title), bullet_list(section.list))
    };

    format!(
        "<section id=\"section-{n}\" class=\"policy-section\">{alias}<h2>{n}. {title}</h2>\
         <p>{purpose}</p><div class=\"policy-grid\">{details}</div>{list}</section>",
        n = section.number,
        title = escape_html(section.title),
        purpose = escape_html(section.purpose),
    )
}

fn table_of_contents() -> String {
    let links: String = SECTIONS
        .iter()
        .map(|section| {
            format!(
                "<a href=\"#section-{n}\">{n}. {}</a>",
                escape_html(section.title),
                n = section.number
            )
        })
        .chain(std::iter::once(
            "<a href=\"#ndpa\">National Student Data Privacy Agreement</a>".to_string(),
        ))
        .collect();
    format!("<nav class=\"toc\" aria-label=\"Table of Contents\"><h2>Table of Contents</h2>{links}</nav>")
}

fn ndpa() -> String {
    let states: String = NDPA_STATES
        .iter()
        .map(|state| format!("<span class=\"badge\">{state}</span>"))
        .collect();
    format!(
        r#"<section id="ndpa" class="policy-section"><h2>National Student Data Privacy Agreement (NDPA)</h2>
<p>iTherapy participates in the Student Data Privacy Consortium's National Data Privacy Agreement (NDPA) framework, supporting standardized data privacy agreements across multiple states.</p>
<h3>Supported States</h3><div class="badge-row">{states}</div>
<h3>Key NDPA Provisions</h3>{provisions}
<div class="callout"><h4>Request NDPA Documentation</h4><p>Educational agencies can request complete NDPA documentation including state-specific exhibits.</p>
<a class="btn btn-outline" href="mailto:{PRIVACY_OFFICER}?subject=NDPA%20Documentation%20Request">Request NDPA Documents</a></div>
</section>"#,
        provisions = bullet_list(NDPA_PROVISIONS),
    )
}

pub fn render() -> String {
    let sections: String = SECTIONS.iter().map(render_section).collect();
    format!(
        r#"<section class="page-hero policy-hero"><div class="container narrow">
<a class="back-link" href="/">&larr; Back to Home</a>
<h1 class="page-title">Information Security and Privacy Policies</h1>
<p class="lead">Comprehensive security framework protecting student data and ensuring compliance with federal and state education privacy laws</p>
<p class="policy-dates"><span>Effective Date: {EFFECTIVE_DATE}</span> | <span>Last Reviewed: {EFFECTIVE_DATE}</span> | <span>Next Review: {NEXT_REVIEW}</span></p>
</div></section>
<div class="container narrow policy">
<div class="callout"><h2>Need to contact our Privacy Officer?</h2>
<p>For questions about Student Data privacy, FERPA compliance, or policy interpretation.</p>
<div class="callout-actions"><a class="btn btn-outline" href="mailto:{PRIVACY_OFFICER}">{PRIVACY_OFFICER}</a>
<a class="btn btn-outline" href="mailto:{PRIVACY_OFFICER}?subject=Security%20Incident%20Report">Report Security Incident</a></div></div>
{toc}
{sections}
{ndpa}
</div>"#,
        toc = table_of_contents(),
        ndpa = ndpa(),
    )
}
