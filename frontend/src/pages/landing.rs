use chrono::{Datelike, Local};
use log::info;
use yew::prelude::*;

use crate::components::faq::FaqAccordion;
use crate::components::hero_nav::HeroNavigationMenu;
use crate::components::reveal::{Direction, FadeInWhenVisible, StaggerChildren, TextReveal, TypewriterText};
use crate::components::slideshow::BackgroundSlideshow;
use crate::config::asset_url;
use crate::content::{
    card_number, section_href, APPROACH_SECTION, BOOKING_URL, CONTACT_SECTION, DIFFERENTIATORS, EMAIL, FAQS,
    FAQ_SECTION, HERO_IMAGES, HOME_SECTION, INSURANCES, INSURANCE_SECTION, MAP_EMBED_URL, MAP_TITLE, NAV_LINKS,
    OFFICE_HOURS, PHONE_DISPLAY, PHONE_HREF, PRACTICE_NAME, PROVIDER_CREDENTIALS, PROVIDER_SECTION, TESTIMONIALS,
    TREATMENTS, TREATMENTS_SECTION, TRUST_BADGES, VISIT_REMINDERS,
};

/// Header height the hero navigation scrolls past.
const HERO_NAV_OFFSET: u32 = 120;
const HERO_SLIDE_INTERVAL_MS: u32 = 6000;

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    tag: &'static str,
    title: &'static str,
    #[prop_or_default]
    children: Children,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <FadeInWhenVisible duration={0.8}>
            <div class="section-header">
                <span class="section-tag">{props.tag}</span>
                <h2>{props.title}</h2>
                { for props.children.iter() }
            </div>
        </FadeInWhenVisible>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    let hero_images = HERO_IMAGES.iter().map(|src| asset_url(src)).collect::<Vec<_>>();
    let year = Local::now().year();

    html! {
        <main class="landing-page">
            <header class="hero">
                <BackgroundSlideshow images={hero_images} interval={HERO_SLIDE_INTERVAL_MS} />
                <div class="announcement-bar">
                    <span>{"Serving New Jersey & New York"}</span>
                    <span class="announcement-separator" aria-hidden="true">{"•"}</span>
                    <span>{"Accepting Medicare, Medicaid, Aetna, Cigna, Optum & more"}</span>
                </div>
                <div class="hero-content">
                    <div class="hero-panel">
                        <div class="panel-header">
                            <div class="brand-mark">
                                <img src={asset_url("/aok logo 2.png")} alt="AOK Health Solutions Logo" />
                            </div>
                            <HeroNavigationMenu
                                links={NAV_LINKS}
                                offset={HERO_NAV_OFFSET}
                                cta_href={PHONE_HREF}
                                cta_label={format!("Call {}", PHONE_DISPLAY)}
                            />
                        </div>
                        <div class="hero-copy" id={HOME_SECTION}>
                            <span class="hero-eyebrow">
                                <span class="hero-eyebrow-accent" aria-hidden="true"></span>
                                {"Board-certified PMHNP • Holistic, evidence-based treatment • You'll be heard"}
                            </span>
                            <h1>{"Compassionate psychiatric care for anxiety, depression, and more"}</h1>
                            <div class="trust-badges">
                                { for TRUST_BADGES.iter().map(|badge| html! {
                                    <div class="badge">
                                        <span class="badge-icon">{"✓"}</span>
                                        <span>{*badge}</span>
                                    </div>
                                }) }
                            </div>
                            <div class="hero-actions">
                                <a class="primary-button" href={BOOKING_URL}>{"Book a Free 15-Minute Consultation"}</a>
                                <a class="secondary-button" href={section_href(TREATMENTS_SECTION)}>{"Explore Services"}</a>
                            </div>
                            <div class="hero-details">
                                <div>
                                    <span class="detail-heading">{"Locations"}</span>
                                    <p>{"Virtual & in-person visits across NJ & NY"}</p>
                                </div>
                                <div>
                                    <span class="detail-heading">{"Languages"}</span>
                                    <p>{"English, Twi"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <section class="section" id={TREATMENTS_SECTION}>
                <SectionHeader tag="Our Expertise" title="Conditions We Treat with Care">
                    <p class="section-subtitle">
                        {"Compassionate, evidence-based treatment for a range of mental health conditions."}
                    </p>
                    <TextReveal
                        class="section-description"
                        delay={0.2}
                        text="Every journey is unique. We specialize in personalized care that helps you regain balance, confidence, and clarity, one step at a time."
                    />
                </SectionHeader>
                <StaggerChildren class="treatment-grid">
                    { for TREATMENTS.iter().enumerate().map(|(index, treatment)| html! {
                        <article class="treatment-card">
                            <div class="card-number">{card_number(index)}</div>
                            <div class="card-image">
                                <img
                                    src={asset_url(treatment.image)}
                                    alt={treatment.title}
                                    loading="lazy"
                                    class={classes!((treatment.title == "ADHD").then(|| "focus-top"))}
                                />
                            </div>
                            <h3>{treatment.title}</h3>
                        </article>
                    }) }
                </StaggerChildren>
            </section>

            <section class="approach-section" id={APPROACH_SECTION}>
                <SectionHeader tag="Our Approach" title="Care that centers your lived experience">
                    <p>
                        {"We take time to understand every aspect of your health, partnering with you to create a care plan that feels practical, affirming, and effective."}
                    </p>
                </SectionHeader>
                <div class="value-grid">
                    { for DIFFERENTIATORS.iter().enumerate().map(|(index, item)| html! {
                        <FadeInWhenVisible key={item.title} delay={index as f64 * 0.15}>
                            <article class="value-card">
                                <div class="value-icon">{item.icon}</div>
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </article>
                        </FadeInWhenVisible>
                    }) }
                </div>
            </section>

            <section class="testimonials-section" aria-label="Patient testimonials">
                <SectionHeader tag="Patient Voices" title="Stories of renewed balance">
                    <p>{"Real experiences from people who partnered with AOK Health Solutions for their mental wellness journey."}</p>
                </SectionHeader>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <figure key={testimonial.name} class="testimonial-card">
                            <blockquote>{format!("“{}”", testimonial.quote)}</blockquote>
                            <figcaption>
                                <span>{testimonial.name}</span>
                                <span>{testimonial.role}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <section class="cta-banner" aria-label="Schedule a consultation">
                <FadeInWhenVisible direction={Direction::Down} duration={0.8} delay={0.1}>
                    <div>
                        <h2>{"Ready to start feeling like yourself again?"}</h2>
                        <p>
                            {"Let's talk through your questions, explore treatment options, and craft the first steps toward feeling grounded and empowered."}
                        </p>
                    </div>
                </FadeInWhenVisible>
                <FadeInWhenVisible direction={Direction::None} duration={0.8} delay={0.3}>
                    <div class="cta-actions">
                        <a class="primary-button" href={BOOKING_URL}>{"Schedule a Visit"}</a>
                        <a class="secondary-button" href={format!("mailto:{}", EMAIL)}>{"Email the Practice"}</a>
                    </div>
                </FadeInWhenVisible>
            </section>

            <section class="section" id={INSURANCE_SECTION}>
                <SectionHeader tag="Insurance" title="Insurance plans we accept">
                    <p>{"We partner with a wide range of insurance providers and also welcome self-pay clients."}</p>
                </SectionHeader>
                <div class="insurance-grid">
                    { for INSURANCES.iter().map(|plan| html! {
                        <span key={*plan} class="insurance-item">{*plan}</span>
                    }) }
                </div>
            </section>

            <section class="section" id={FAQ_SECTION}>
                <SectionHeader tag="FAQ" title="Frequently asked questions" />
                <FaqAccordion faqs={FAQS} />
            </section>

            <section class="about-section" id={PROVIDER_SECTION}>
                <FadeInWhenVisible duration={0.8}>
                    <div class="about-header">
                        <span class="section-tag">{"Meet Your Provider"}</span>
                        <h2>{"Akosua Karikari, PMHNP-C"}</h2>
                        <TypewriterText
                            class="about-subtitle"
                            text="Board-Certified Psychiatric Mental Health Nurse Practitioner"
                            speed={30}
                        />
                    </div>
                </FadeInWhenVisible>
                <div class="about-grid">
                    <FadeInWhenVisible direction={Direction::Left} duration={0.8} delay={0.2}>
                        <div class="about-image-section">
                            <img class="provider-image" src={asset_url("/aok2.jpg")} alt="Akosua Karikari, PMHNP-C" />
                            <div class="credentials-badges">
                                <div class="cred-badge">
                                    <strong>{"Education"}</strong>
                                    <p>{"Post-Master's Certificate, 2024"}</p>
                                </div>
                                <div class="cred-badge">
                                    <strong>{"Verified"}</strong>
                                    <p>{"Psychology Today"}</p>
                                </div>
                            </div>
                        </div>
                    </FadeInWhenVisible>
                    <FadeInWhenVisible direction={Direction::Right} duration={0.8} delay={0.3}>
                        <div class="about-text-section">
                            <p class="lead-text">
                                {"\"I provide compassionate, personalized psychiatric care in a safe, nonjudgmental space. My holistic approach recognizes the connection between mental and physical health.\""}
                            </p>
                            <div class="credentials-grid">
                                { for PROVIDER_CREDENTIALS.iter().map(|credential| html! {
                                    <div key={credential.heading} class="credential-item">
                                        <h4>{credential.heading}</h4>
                                        <p>{credential.detail}</p>
                                    </div>
                                }) }
                            </div>
                            <div class="philosophy-box">
                                <h3>{"My Philosophy"}</h3>
                                <p>
                                    {"Your care is collaborative and evidence-based. Together we'll identify patterns, build coping skills, and create a plan that blends CBT, medication management, and holistic strategies so you can feel balanced, resilient, and well."}
                                </p>
                            </div>
                            <a class="primary-button" href={BOOKING_URL}>{"Book Your Free Consultation"}</a>
                        </div>
                    </FadeInWhenVisible>
                </div>
            </section>

            <section class="section" id={CONTACT_SECTION}>
                <SectionHeader tag="Contact" title="Let's connect">
                    <p>{"Reach out with questions or schedule your visit. We look forward to supporting you."}</p>
                </SectionHeader>
                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>{"Contact Details"}</h3>
                        <p><strong>{"Phone: "}</strong><a href={PHONE_HREF}>{PHONE_DISPLAY}</a></p>
                        <p><strong>{"Email: "}</strong><a href={format!("mailto:{}", EMAIL)}>{EMAIL}</a></p>
                        <p><strong>{"Locations: "}</strong>{"New Jersey & New York"}</p>
                        <div class="contact-map">
                            <iframe
                                src={MAP_EMBED_URL}
                                width="100%"
                                height="300"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title={MAP_TITLE}
                                allowfullscreen={true}
                            ></iframe>
                        </div>
                    </div>
                    <div class="contact-card">
                        <h3>{"Office Hours"}</h3>
                        <ul class="hours-list">
                            { for OFFICE_HOURS.iter().map(|entry| html! {
                                <li key={entry.day}>
                                    <span>{entry.day}</span>
                                    <span>{entry.time}</span>
                                </li>
                            }) }
                        </ul>
                        <div class="visit-reminders">
                            <p>{"Helpful reminders"}</p>
                            <ul>
                                { for VISIT_REMINDERS.iter().map(|reminder| html! { <li>{*reminder}</li> }) }
                            </ul>
                        </div>
                        <div class="contact-cta">
                            <p>{"Ready to get started?"}</p>
                            <a class="primary-button" href={BOOKING_URL}>{"Book Your Visit"}</a>
                        </div>
                    </div>
                    <form class="contact-form">
                        <h3>{"Send a Message"}</h3>
                        <div class="form-group">
                            <label for="name">{"Full Name"}</label>
                            <input id="name" name="name" placeholder="Your name" />
                        </div>
                        <div class="form-group">
                            <label for="email">{"Email"}</label>
                            <input id="email" name="email" type="email" placeholder="you@email.com" />
                        </div>
                        <div class="form-group">
                            <label for="message">{"How can we help?"}</label>
                            <textarea id="message" name="message" rows="4" placeholder="Share your questions or concerns" />
                        </div>
                        <button type="submit" class="secondary-button">{"Submit"}</button>
                        <p class="form-disclaimer">
                            {"Submissions are reviewed within one business day. For emergencies, please dial 911 or visit your nearest emergency room."}
                        </p>
                    </form>
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} {}. All rights reserved.", year, PRACTICE_NAME)}</p>
                <div class="footer-links">
                    <a href="#privacy">{"Privacy Policy"}</a>
                    <a href="#terms">{"Terms of Service"}</a>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2a37;
                    background: #f8fafc;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    color: #ffffff;
                }

                .hero::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(15, 23, 42, 0.55), rgba(15, 23, 42, 0.8));
                    z-index: 0;
                }

                .announcement-bar {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 0.6rem 1rem;
                    font-size: 0.85rem;
                    background: rgba(16, 185, 129, 0.85);
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.5rem 2rem 5rem;
                }

                .panel-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .brand-mark img {
                    width: 96px;
                    height: 96px;
                    object-fit: contain;
                }

                .hero-nav {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .hero-nav-inline {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .hero-nav-list,
                .hero-nav-overlay-list {
                    display: flex;
                    gap: 1.25rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .hero-nav-list a,
                .hero-nav-overlay-list a {
                    color: inherit;
                    text-decoration: none;
                    padding-bottom: 0.25rem;
                    border-bottom: 2px solid transparent;
                    transition: border-color 0.2s ease, color 0.2s ease;
                }

                .hero-nav-active-link,
                .hero-nav-overlay-active {
                    color: #6ee7b7 !important;
                    border-bottom-color: #6ee7b7 !important;
                }

                .hero-nav-cta,
                .hero-nav-overlay-cta {
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    background: #10b981;
                    color: #ffffff;
                    text-decoration: none;
                    font-weight: 600;
                }

                .hero-nav-toggle {
                    display: none;
                    align-items: center;
                    gap: 0.5rem;
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 999px;
                    color: inherit;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }

                .hero-nav-toggle-icon span,
                .hero-nav-toggle-icon span::before,
                .hero-nav-toggle-icon span::after {
                    display: block;
                    width: 18px;
                    height: 2px;
                    background: currentColor;
                    position: relative;
                }

                .hero-nav-toggle-icon span::before,
                .hero-nav-toggle-icon span::after {
                    content: '';
                    position: absolute;
                }

                .hero-nav-toggle-icon span::before { top: -6px; }
                .hero-nav-toggle-icon span::after { top: 6px; }

                .hero-nav-backdrop {
                    display: none;
                }

                .hero-nav-overlay {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: min(320px, 85vw);
                    padding: 5rem 2rem 2rem;
                    background: #0f172a;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .hero-nav-overlay.open {
                    transform: translateX(0);
                }

                .hero-nav-overlay-list {
                    flex-direction: column;
                }

                @media (max-width: 900px) {
                    .hero-nav-inline {
                        display: none;
                    }

                    .hero-nav-toggle {
                        display: inline-flex;
                    }

                    .hero-nav-backdrop.visible {
                        display: block;
                        position: fixed;
                        inset: 0;
                        border: none;
                        background: rgba(15, 23, 42, 0.6);
                        z-index: 10;
                    }
                }

                @media (min-width: 901px) {
                    .hero-nav-overlay {
                        display: none;
                    }
                }

                .hero-copy {
                    max-width: 760px;
                    margin-top: 4rem;
                }

                .hero-eyebrow {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #a7f3d0;
                }

                .hero-eyebrow-accent {
                    width: 32px;
                    height: 2px;
                    background: #34d399;
                }

                .hero-copy h1 {
                    font-size: clamp(2.2rem, 5vw, 3.6rem);
                    line-height: 1.1;
                    margin: 1.5rem 0;
                }

                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .badge {
                    display: inline-flex;
                    gap: 0.5rem;
                    padding: 0.4rem 0.9rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.12);
                    font-size: 0.9rem;
                }

                .badge-icon {
                    color: #34d399;
                }

                .hero-actions,
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin: 2rem 0;
                }

                .primary-button,
                .secondary-button {
                    display: inline-flex;
                    justify-content: center;
                    padding: 0.9rem 1.6rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }

                .primary-button {
                    background: #10b981;
                    color: #ffffff;
                    border: none;
                }

                .secondary-button {
                    background: transparent;
                    color: inherit;
                    border: 1px solid currentColor;
                }

                .hero-details {
                    display: flex;
                    gap: 3rem;
                }

                .detail-heading {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: #a7f3d0;
                }

                .section,
                .approach-section,
                .testimonials-section,
                .about-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .section-header {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto 3rem;
                }

                .section-tag {
                    display: inline-block;
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #059669;
                }

                .section-header h2,
                .about-header h2 {
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    margin: 0.75rem 0;
                }

                .treatment-grid,
                .value-grid,
                .testimonial-grid,
                .contact-grid,
                .credentials-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .treatment-grid {
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                }

                .treatment-card {
                    position: relative;
                    background: #ffffff;
                    border-radius: 1.25rem;
                    overflow: hidden;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                }

                .card-number {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    font-weight: 700;
                    color: #ffffff;
                    z-index: 1;
                }

                .card-image {
                    height: 180px;
                }

                .card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .card-image img.focus-top {
                    object-position: center 20%;
                }

                .treatment-card h3 {
                    padding: 1rem 1.25rem 1.5rem;
                    margin: 0;
                }

                .value-grid,
                .testimonial-grid {
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                }

                .value-card,
                .testimonial-card,
                .contact-card,
                .contact-form {
                    background: #ffffff;
                    border-radius: 1.25rem;
                    padding: 2rem;
                    margin: 0;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                }

                .value-icon {
                    font-size: 2rem;
                }

                .testimonial-card blockquote {
                    margin: 0 0 1.25rem;
                    font-style: italic;
                }

                .testimonial-card figcaption {
                    display: flex;
                    flex-direction: column;
                    font-size: 0.9rem;
                    color: #64748b;
                }

                .cta-banner {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    padding: 4rem 2rem;
                    background: linear-gradient(135deg, #0f172a, #064e3b);
                    color: #ffffff;
                }

                .insurance-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }

                .insurance-item {
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    background: #ecfdf5;
                    color: #065f46;
                    font-weight: 600;
                }

                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .faq-item {
                    background: #ffffff;
                    border-radius: 1rem;
                    box-shadow: 0 4px 16px rgba(15, 23, 42, 0.05);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }

                .toggle-icon {
                    font-size: 1.4rem;
                    color: #059669;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.5rem;
                    margin: 0;
                    color: #475569;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: minmax(0, 0.9fr) minmax(0, 1.1fr);
                    gap: 3rem;
                    margin-top: 2rem;
                }

                .provider-image {
                    width: 100%;
                    border-radius: 1.5rem;
                    object-fit: cover;
                    display: block;
                }

                .credentials-badges {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .cred-badge {
                    flex: 1;
                    background: #ecfdf5;
                    border-radius: 1rem;
                    padding: 1rem;
                }

                .lead-text {
                    font-size: 1.2rem;
                    font-style: italic;
                }

                .credentials-grid {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }

                .philosophy-box {
                    margin: 2rem 0;
                    padding: 1.5rem;
                    border-left: 4px solid #10b981;
                    background: #ffffff;
                }

                .contact-grid {
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                }

                .contact-map iframe {
                    border: 0;
                    border-radius: 0.75rem;
                }

                .hours-list {
                    list-style: none;
                    padding: 0;
                }

                .hours-list li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid #e2e8f0;
                }

                .visit-reminders {
                    font-size: 0.85rem;
                    color: #475569;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    margin-bottom: 1rem;
                }

                .form-group input,
                .form-group textarea {
                    padding: 0.75rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 0.6rem;
                    font: inherit;
                }

                .form-disclaimer {
                    font-size: 0.8rem;
                    color: #64748b;
                }

                .footer {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 2rem;
                    background: #0f172a;
                    color: #a7f3d0;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: inherit;
                }

                @media (max-width: 768px) {
                    .about-grid,
                    .credentials-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-details {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
