use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::controller::contact::ContactField;
use crate::controller::navigation::{scroll_to_section, SectionId};
use crate::controller::rotation::HEADLINE_WORDS;
use crate::dom::DomLayout;
use crate::hooks::{use_active_section, use_contact_form, use_rotating_word};

const LOGO_URL: &str = "https://customer-assets.emergentagent.com/job_3bbe4988-d7b8-4d45-bbcc-260df7b4fb90/artifacts/7ywytmq2_Logo.png";

fn scroll_to(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(&DomLayout, section.as_str());
    })
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active: Option<SectionId>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let nav_link = |section: SectionId, label: &'static str| {
        let active = (props.active == Some(section)).then_some("active");
        html! {
            <a href={format!("#{}", section)} onclick={scroll_to(section)} class={classes!("dark-nav-link", active)}>
                {label}
            </a>
        }
    };

    html! {
        <header class="dark-header">
            <div class="header-content">
                <div class="logo-container" onclick={scroll_to(SectionId::Hero)}>
                    <img src={LOGO_URL} alt="Viridata Logo" class="dark-logo" />
                    <span class="company-name">{"Viridata"}</span>
                </div>
                <nav class="dark-nav">
                    { nav_link(SectionId::Problem, "Problem") }
                    { nav_link(SectionId::Solution, "Solution") }
                    { nav_link(SectionId::Features, "Features") }
                    { nav_link(SectionId::Team, "Team") }
                    <button onclick={scroll_to(SectionId::Contact)} class="btn-primary">{"Contact Us"}</button>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let (index, word) = use_rotating_word(HEADLINE_WORDS);

    html! {
        <section id="hero" class="hero-section">
            <div class="hero-content">
                <div class="hero-left">
                    <div class="tagline">{"Making Sustainability Visible"}</div>
                    <h1 class="hero-title">
                        {"Get ESG compliance done without "}
                        <span class="rotating-word-container">
                            // keyed so the fade-in animation restarts on every word
                            <span class="rotating-word" key={index}>{word}</span>
                        </span>
                    </h1>
                    <p class="hero-description">
                        {"Viridata transforms complex ESG compliance into automated, transparent reporting. \
                          Our AI-driven platform predicts CO₂ credit values, automates CBAM reporting, \
                          and prepares for blockchain-powered transparency."}
                    </p>
                    <div class="hero-cta">
                        <button onclick={scroll_to(SectionId::Contact)} class="btn-primary large">
                            {"Request Demo ↗"}
                        </button>
                        <button onclick={scroll_to(SectionId::Solution)} class="btn-secondary large">
                            {"Learn More"}
                        </button>
                    </div>
                    <div class="hero-stats">
                        { stat("5-7", "Target Clients by Q3 2026") }
                        { stat("€240k", "ARR Target") }
                        { stat("10,000", "TAM Market Size") }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn stat(number: &'static str, label: &'static str) -> Html {
    html! {
        <div class="stat-item">
            <div class="stat-number">{number}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

fn problem_card(icon: &'static str, title: &'static str, description: &'static str) -> Html {
    html! {
        <div class="problem-card">
            <div class="problem-icon">{icon}</div>
            <h3 class="problem-title">{title}</h3>
            <p class="problem-description">{description}</p>
        </div>
    }
}

#[function_component(Problem)]
fn problem() -> Html {
    html! {
        <section id="problem" class="problem-section">
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">{"The ESG Compliance Crisis"}</h2>
                    <p class="section-subtitle">
                        {"Companies face mounting pressure from CBAM regulations, escalating penalties, \
                          and complex data requirements that strain resources and risk non-compliance."}
                    </p>
                </div>
                <div class="problem-grid">
                    { problem_card("€250", "Escalating Penalties",
                        "Up to €250 per tCO₂ in penalties for reporting failures. A 5,000 tCO₂ gap could cost €1.25M.") }
                    { problem_card("80%", "Working Capital Strain",
                        "Importers must pre-purchase 80% of estimated quarterly certificates, severely impacting cash flow.") }
                    { problem_card("€45M", "Heavy Importer Burden",
                        "Heavy importers could face up to €45M in CBAM liability by 2034 as coverage requirements increase.") }
                    { problem_card("100+", "Data Complexity",
                        "Managing sector-specific boundaries, supplier data collection, and verification creates operational bottlenecks.") }
                </div>
            </div>
        </section>
    }
}

#[function_component(Solution)]
fn solution() -> Html {
    let feature = |title: &'static str, text: &'static str| {
        html! {
            <div class="solution-feature">
                <span class="feature-icon">{"✓"}</span>
                <div>
                    <h3 class="feature-title">{title}</h3>
                    <p class="feature-text">{text}</p>
                </div>
            </div>
        }
    };
    let stat_card = |icon: &'static str, value: &'static str, description: &'static str| {
        html! {
            <div class="stat-card">
                <div class="stat-icon">{icon}</div>
                <div class="stat-value">{value}</div>
                <div class="stat-description">{description}</div>
            </div>
        }
    };

    html! {
        <section id="solution" class="solution-section">
            <div class="section-container">
                <div class="solution-content">
                    <div class="solution-left">
                        <h2 class="section-title">{"Automated ESG Reporting, Powered by AI"}</h2>
                        <p class="solution-intro">
                            {"Viridata transforms the ESG compliance nightmare into a streamlined, \
                              automated process. Our managed service eliminates bureaucracy while \
                              ensuring audit-ready reports with zero human error."}
                        </p>
                        <div class="solution-features">
                            { feature("Zero-Friction Data Integration",
                                "Read-only access to SAP, D365, Oracle, or simple CSV uploads. No complex integrations required.") }
                            { feature("AI-Powered Validation",
                                "Our calculation engine transforms ERP data into regulator-ready outputs with confidence bands and gap-filling.") }
                            { feature("One-Click Generation",
                                "Generate XML/PDF reports for CBAM, CSRD, and GHG Scope 1/2/3 with a single click.") }
                            { feature("SLA-Backed Guarantees",
                                "We compensate for any filing or miscalculation errors. Your compliance is our responsibility.") }
                        </div>
                    </div>
                    <div class="solution-right">
                        <div class="solution-stats">
                            { stat_card("⚡", "5 clicks", "Initial outputs delivered") }
                            { stat_card("🎯", "1 meeting", "Onboarding completed") }
                            { stat_card("✓", "0 errors", "SLA-backed accuracy") }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn feature_card(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 3],
) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-card-icon">{icon}</div>
            <h3 class="feature-card-title">{title}</h3>
            <p class="feature-card-description">{description}</p>
            <ul class="feature-list">
                { for points.iter().map(|point| html! { <li>{*point}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">{"Technology That Sets Us Apart"}</h2>
                    <p class="section-subtitle">
                        {"Our platform combines cutting-edge AI for forecasting, automation for efficiency, \
                          and future blockchain integration for unmatched transparency."}
                    </p>
                </div>
                <div class="features-grid">
                    { feature_card("🧠", "AI-Driven Forecasting",
                        "Predict future CO₂ credit values with confidence bands. Our AI models analyze historical data, \
                         market trends, and regulatory changes to provide accurate forecasts for financial planning.",
                        ["Dynamic default factors that auto-update",
                         "Confidence bands for risk assessment",
                         "Market trend analysis and predictions"]) }
                    { feature_card("⚡", "Complete Automation",
                        "Eliminate manual processes with end-to-end automation. From data collection to supplier outreach, \
                         we handle the entire operating cadence so you can focus on your core business.",
                        ["Automated supplier data collection",
                         "AI-powered gap filling and validation",
                         "Quarterly estimates and annual true-ups"]) }
                    { feature_card("🛡", "Blockchain Transparency (Roadmap)",
                        "We're integrating blockchain technology to ensure all ESG data and reports are transparent yet \
                         anonymous, creating an immutable audit trail that prevents manipulation or corruption.",
                        ["Immutable data records",
                         "Anonymous yet transparent reporting",
                         "Tokenization for future carbon markets"]) }
                    { feature_card("🗄", "Multi-Framework Support",
                        "Beyond CBAM, our platform supports CSRD assurance packages and GHG Scope 1/2/3 reporting. \
                         One platform for all your sustainability compliance needs.",
                        ["CBAM transitional to definitive",
                         "CSRD assurance-ready packages",
                         "GHG Protocol Scope 1/2/3 reporting"]) }
                </div>
            </div>
        </section>
    }
}

struct TeamMember {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
    description: &'static str,
}

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Maksim Kruk",
        role: "CEO",
        photo: "https://customer-assets.emergentagent.com/job_esg-ai-platform/artifacts/l7bsn7qu_M.jpg",
        description: "Expertise in CBAM and sustainability. Deep understanding of EU importer pain points and regulatory landscape.",
    },
    TeamMember {
        name: "Leonid Samoilov",
        role: "CTO",
        photo: "https://customer-assets.emergentagent.com/job_esg-ai-platform/artifacts/xsf9whjw_L.jpg",
        description: "Full-stack and cloud architecture specialist. Building stable, scalable and secure infrastructure for enterprise ESG solutions.",
    },
    TeamMember {
        name: "Stanislav Knyazev",
        role: "COO",
        photo: "https://customer-assets.emergentagent.com/job_esg-ai-platform/artifacts/g3szmmut_S.jpg",
        description: "Operations and project management expert. Ensuring process excellence and quality assurance across all client engagements.",
    },
];

#[function_component(Team)]
fn team() -> Html {
    html! {
        <section id="team" class="team-section">
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">{"Meet Our Core Team"}</h2>
                    <p class="section-subtitle">
                        {"A combination of domain expertise, technical excellence, and operational \
                          precision driving Viridata's success."}
                    </p>
                </div>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-card">
                            <div class="team-photo-container">
                                <img src={member.photo} alt={member.name} class="team-photo" />
                            </div>
                            <div class="team-info">
                                <h3 class="team-name">{member.name}</h3>
                                <div class="team-role">{member.role}</div>
                                <p class="team-description">{member.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="advisors-note">
                    <span class="note-icon">{"↗"}</span>
                    <p>
                        {"We're building strategic advisory relationships with ex-customs commissioners, \
                          mid-tier audit partners, and OEM sustainability leaders to strengthen our \
                          domain expertise."}
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Field and new value of the input or textarea that fired `e`, matched by its `name`.
fn field_change(e: &InputEvent) -> Option<(ContactField, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return ContactField::from_name(&input.name()).map(|field| (field, input.value()));
    }
    let area = e.target_dyn_into::<HtmlTextAreaElement>()?;
    ContactField::from_name(&area.name()).map(|field| (field, area.value()))
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let contact = use_contact_form();

    let oninput = {
        let on_input = contact.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(change) = field_change(&e) {
                on_input.emit(change);
            }
        })
    };
    let value = |field: ContactField| contact.form.get(field).to_string();

    let onsubmit = {
        let on_submit = contact.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let benefit = |text: &'static str| {
        html! {
            <div class="benefit-item">
                <span class="benefit-icon">{"✓"}</span>
                <span>{text}</span>
            </div>
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="section-container">
                <div class="contact-content">
                    <div class="contact-left">
                        <h2 class="section-title">{"Ready to Transform Your ESG Reporting?"}</h2>
                        <p class="contact-intro">
                            {"Join forward-thinking companies that are automating their sustainability \
                              compliance with Viridata. Let's discuss how we can help you achieve \
                              audit-ready reporting with zero bureaucracy."}
                        </p>
                        <div class="contact-benefits">
                            { benefit("Pilot program starting at €6,900") }
                            { benefit("180-day pilot with up to 10 suppliers") }
                            { benefit("Onboarding in under 1 meeting") }
                            { benefit("SLA-backed error compensation") }
                        </div>
                        <div class="contact-info">
                            <div class="info-item">
                                <span class="info-icon">{"✉"}</span>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </div>
                            <div class="info-item">
                                <span class="info-icon">{"in"}</span>
                                <span>{"Connect on LinkedIn"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="contact-right">
                        <div class="contact-card">
                            <h3 class="contact-form-title">{"Get in Touch"}</h3>
                            <form {onsubmit} class="contact-form">
                                <div class="form-group">
                                    <label for="name" class="form-label">{"Name *"}</label>
                                    <input id="name" name="name" class="form-input" placeholder="Your name" required={true}
                                        value={value(ContactField::Name)} oninput={oninput.clone()} />
                                </div>
                                <div class="form-group">
                                    <label for="email" class="form-label">{"Email *"}</label>
                                    <input id="email" name="email" type="email" class="form-input" placeholder="your@email.com" required={true}
                                        value={value(ContactField::Email)} oninput={oninput.clone()} />
                                </div>
                                <div class="form-group">
                                    <label for="company" class="form-label">{"Company *"}</label>
                                    <input id="company" name="company" class="form-input" placeholder="Company name" required={true}
                                        value={value(ContactField::Company)} oninput={oninput.clone()} />
                                </div>
                                <div class="form-group">
                                    <label for="message" class="form-label">{"Message *"}</label>
                                    <textarea id="message" name="message" class="form-textarea" rows="4" required={true}
                                        placeholder="Tell us about your ESG reporting needs..."
                                        value={value(ContactField::Message)} oninput={oninput.clone()} />
                                </div>
                                <button type="submit" class="btn-primary submit-btn" disabled={contact.submitting}>
                                    { if contact.submitting { "Sending..." } else { "Send Message" } }
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-left">
                    <div class="footer-logo">
                        <img src={LOGO_URL} alt="Viridata Logo" class="footer-logo-img" />
                        <span class="footer-company">{"Viridata"}</span>
                    </div>
                    <p class="footer-tagline">{"Making Sustainability Visible"}</p>
                </div>
                <div class="footer-right">
                    <p class="footer-text">{"© 2026 Viridata. Formerly GreenTrace. All rights reserved."}</p>
                </div>
            </div>
        </footer>
    }
}

#[function_component]
pub fn Home() -> Html {
    let active = use_active_section();

    html! {
        <div class="viridata-container">
            <style>{STYLES}</style>
            <Header {active} />
            <Hero />
            <Problem />
            <Solution />
            <Features />
            <Team />
            <ContactSection />
            <Footer />
        </div>
    }
}

const STYLES: &str = r#"
    .viridata-container {
        background: #0b0f0d;
        color: #e8efe9;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .dark-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: rgba(11, 15, 13, 0.85);
        backdrop-filter: blur(10px);
        border-bottom: 1px solid rgba(74, 222, 128, 0.1);
    }
    .header-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .logo-container { display: flex; align-items: center; gap: 0.75rem; cursor: pointer; }
    .dark-logo { height: 36px; }
    .company-name { font-size: 1.25rem; font-weight: 700; }
    .dark-nav { display: flex; align-items: center; gap: 2rem; }
    .dark-nav-link {
        color: rgba(232, 239, 233, 0.7);
        text-decoration: none;
        cursor: pointer;
        transition: color 0.2s ease;
    }
    .dark-nav-link:hover, .dark-nav-link.active { color: #4ade80; }
    .btn-primary, .btn-secondary {
        border-radius: 8px;
        padding: 0.6rem 1.25rem;
        font-weight: 600;
        cursor: pointer;
        border: 1px solid #4ade80;
    }
    .btn-primary { background: #4ade80; color: #0b0f0d; }
    .btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
    .btn-secondary { background: transparent; color: #4ade80; }
    .large { padding: 0.9rem 1.75rem; font-size: 1.05rem; }
    section { padding: 6rem 2rem; }
    .section-container { max-width: 1200px; margin: 0 auto; }
    .section-header { text-align: center; margin-bottom: 3rem; }
    .section-title { font-size: 2.25rem; margin-bottom: 1rem; }
    .section-subtitle { color: rgba(232, 239, 233, 0.7); max-width: 720px; margin: 0 auto; }
    .hero-section { min-height: 100vh; display: flex; align-items: center; padding-top: 8rem; }
    .hero-content { max-width: 1200px; margin: 0 auto; }
    .tagline { color: #4ade80; text-transform: uppercase; letter-spacing: 0.1em; margin-bottom: 1rem; }
    .hero-title { font-size: 3.25rem; line-height: 1.15; }
    .rotating-word-container { display: inline-block; min-width: 8ch; }
    .rotating-word {
        display: inline-block;
        color: #4ade80;
        animation: wordIn 0.6s ease-out;
    }
    @keyframes wordIn {
        from { transform: translateY(0.5em); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    .hero-description { color: rgba(232, 239, 233, 0.75); max-width: 640px; margin: 1.5rem 0; }
    .hero-cta { display: flex; gap: 1rem; margin-bottom: 3rem; }
    .hero-stats, .solution-stats { display: flex; gap: 3rem; }
    .stat-number, .stat-value { font-size: 2rem; font-weight: 700; color: #4ade80; }
    .stat-label, .stat-description { color: rgba(232, 239, 233, 0.6); font-size: 0.9rem; }
    .problem-grid, .features-grid, .team-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .problem-card, .feature-card, .team-card, .stat-card, .contact-card {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(74, 222, 128, 0.12);
        border-radius: 16px;
        padding: 2rem;
    }
    .problem-icon { font-size: 2rem; font-weight: 700; color: #f87171; }
    .solution-content, .contact-content {
        display: grid;
        grid-template-columns: 3fr 2fr;
        gap: 3rem;
    }
    .solution-feature { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
    .feature-icon, .benefit-icon { color: #4ade80; }
    .solution-stats { flex-direction: column; gap: 1.5rem; }
    .feature-card-icon { font-size: 2rem; }
    .team-photo { width: 100%; border-radius: 12px; aspect-ratio: 1; object-fit: cover; }
    .team-role { color: #4ade80; margin-bottom: 0.5rem; }
    .advisors-note { display: flex; gap: 1rem; margin-top: 3rem; color: rgba(232, 239, 233, 0.7); }
    .benefit-item, .info-item { display: flex; gap: 0.75rem; margin-bottom: 0.75rem; }
    .info-item a { color: inherit; }
    .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
    .form-group { display: flex; flex-direction: column; gap: 0.4rem; }
    .form-input, .form-textarea {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.12);
        border-radius: 8px;
        padding: 0.75rem;
        color: inherit;
        font: inherit;
    }
    .footer { border-top: 1px solid rgba(74, 222, 128, 0.1); padding: 2rem; }
    .footer-content { max-width: 1200px; margin: 0 auto; display: flex; justify-content: space-between; }
    .footer-logo { display: flex; align-items: center; gap: 0.5rem; }
    .footer-logo-img { height: 28px; }
    .footer-text, .footer-tagline { color: rgba(232, 239, 233, 0.5); }
    @media (max-width: 900px) {
        .dark-nav-link { display: none; }
        .hero-title { font-size: 2.25rem; }
        .solution-content, .contact-content { grid-template-columns: 1fr; }
        .hero-stats { flex-direction: column; gap: 1.5rem; }
    }
"#;
