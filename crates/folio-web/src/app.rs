use folio_core::content::{Certification, Experience, Project};
use folio_core::section::{ABOUT, CERTIFICATIONS, CONTACTS, EXPERIENCE, HOME, PROJECTS};
use folio_core::{ScrollNavigator, Site};
use leptos::prelude::*;
use leptos_meta::*;
use std::sync::Arc;

use crate::nav::NavigationBar;
use crate::payment::PaymentSection;
use crate::viewport::DomViewport;

const PORTRAIT_SRC: &str = "/assets/portrait.png";

#[component]
pub fn App(site: Arc<Site>) -> impl IntoView {
    provide_meta_context();

    let config = site.config();
    let title = format!("{} - Portfolio", config.profile.name);
    let description = config.profile.headlines.join(" · ");
    let projects = site.shows_projects().then(|| config.projects.clone());

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <div class="page">
            <NavigationBar site=Arc::clone(&site)/>
            <main>
                <Hero site=Arc::clone(&site)/>
                <About site=Arc::clone(&site)/>
                <ExperienceSection experiences=config.experiences.clone()/>
                {projects.map(|projects| view! { <ProjectsSection projects=projects/> })}
                <CertificationsSection certifications=config.certifications.clone()/>
                <Contacts site=Arc::clone(&site)/>
                <PaymentSection/>
            </main>
        </div>
    }
}

/// Portrait scale for the hero background at a given viewport width.
fn background_size(width: f64) -> &'static str {
    if width < 768.0 {
        "80%"
    } else if width < 1024.0 {
        "60%"
    } else {
        "40%"
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

#[component]
fn Hero(site: Arc<Site>) -> impl IntoView {
    let config = site.config();
    let style = format!(
        "background-image: url('{}'); background-size: {};",
        PORTRAIT_SRC,
        background_size(viewport_width())
    );

    view! {
        <section id=HOME class="hero">
            <div class="hero-waves" aria-hidden="true">
                <svg class="wave wave-1" preserveAspectRatio="none" viewBox="0 0 1440 320">
                    <path d="M0,160L48,176C96,192,192,224,288,213.3C384,203,480,149,576,149.3C672,149,768,203,864,213.3C960,224,1056,192,1152,165.3C1248,139,1344,117,1392,106.7L1440,96L1440,320L0,320Z"/>
                </svg>
                <svg class="wave wave-2" preserveAspectRatio="none" viewBox="0 0 1440 320">
                    <path d="M0,96L48,112C96,128,192,160,288,160C384,160,480,128,576,133.3C672,139,768,181,864,186.7C960,192,1056,160,1152,149.3C1248,139,1344,149,1392,154.7L1440,160L1440,320L0,320Z"/>
                </svg>
                <svg class="wave wave-3" preserveAspectRatio="none" viewBox="0 0 1440 320">
                    <path d="M0,224L48,213.3C96,203,192,181,288,181.3C384,181,480,203,576,197.3C672,192,768,160,864,154.7C960,149,1056,171,1152,165.3C1248,160,1344,128,1392,112L1440,96L1440,320L0,320Z"/>
                </svg>
            </div>
            <div class="hero-portrait" style=style></div>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <h2 class="hero-greeting">{format!("HI, I'M {}", config.profile.name.to_uppercase())}</h2>
                <ul class="hero-headlines">
                    {config
                        .profile
                        .headlines
                        .iter()
                        .map(|headline| view! { <li>{format!("• {}", headline)}</li> })
                        .collect_view()}
                </ul>
                <div class="hero-actions">
                    {config
                        .hero
                        .iter()
                        .map(|action| {
                            let target = action.target.clone();
                            view! {
                                <button
                                    class="cta"
                                    on:click=move |_| {
                                        if let Some(viewport) = DomViewport::new() {
                                            ScrollNavigator::scroll_to(&viewport, &target);
                                        }
                                    }
                                >
                                    {action.label.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn About(site: Arc<Site>) -> impl IntoView {
    let profile = &site.config().profile;
    let education = &profile.education;

    view! {
        <section id=ABOUT class="section about">
            <h2 class="section-title">"About me"</h2>
            <p class="lead">{profile.about.clone()}</p>

            <div class="education">
                <h3>"EDUCATION"</h3>
                <h4>{education.degree.clone()}</h4>
                <p>{format!("{} — {} | {}", education.school, education.location, education.period)}</p>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection(experiences: Vec<Experience>) -> impl IntoView {
    view! {
        <section id=EXPERIENCE class="section experience">
            <h2 class="section-title">"Experience"</h2>
            <div class="entries">
                {experiences
                    .into_iter()
                    .map(|exp| {
                        view! {
                            <div class="entry">
                                <h3>{exp.title}</h3>
                                <h4>{exp.company}</h4>
                                <p class="meta">{format!("{} | {}", exp.location, exp.period)}</p>
                                <ul>
                                    {exp
                                        .responsibilities
                                        .into_iter()
                                        .map(|item| view! { <li>{item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=PROJECTS class="section projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="entries">
                {projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="entry">
                                <h3>{project.title}</h3>
                                <p class="meta">{project.period}</p>
                                <p>{project.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertificationsSection(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <section id=CERTIFICATIONS class="section certifications">
            <h2 class="section-title">"Certifications"</h2>
            <div class="entries">
                {certifications
                    .into_iter()
                    .map(|cert| {
                        let organization = cert.organization().map(str::to_string);
                        view! {
                            <div class="entry">
                                <h3>{cert.title}</h3>
                                <p class="meta">{cert.year}</p>
                                {organization.map(|org| view! { <p>{org}</p> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contacts(site: Arc<Site>) -> impl IntoView {
    let contact = site.config().contact.clone();

    view! {
        <section id=CONTACTS class="section contacts">
            <h2 class="section-title">"Contacts"</h2>
            <div class="contact-list">
                <div class="contact">
                    <span class="contact-label">"Email"</span>
                    <a href=contact.email_href>{contact.email}</a>
                </div>
                <div class="contact">
                    <span class="contact-label">"Phone"</span>
                    <a href=contact.phone_href>{contact.phone}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_size_breakpoints() {
        assert_eq!(background_size(375.0), "80%");
        assert_eq!(background_size(767.9), "80%");
        assert_eq!(background_size(768.0), "60%");
        assert_eq!(background_size(1023.0), "60%");
        assert_eq!(background_size(1024.0), "40%");
        assert_eq!(background_size(1920.0), "40%");
    }
}
