use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::modules::contact::application::domain::entities::{
    ContactForm, EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS,
};
use crate::modules::content::application::domain::content_item::Record;
use crate::modules::content::application::domain::entities::TimelineItem;
use crate::modules::home::application::domain::page::HomePage;
use crate::shared::validation::FieldErrors;

use super::flash::Flash;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #222; line-height: 1.5; }
header.site-header, main > section { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
.hero-stats { display: flex; gap: 2rem; }
.timeline-groups { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.skill-bar { background: #eee; height: 6px; border-radius: 3px; }
.skill-bar span { display: block; height: 100%; background: #333; border-radius: 3px; }
.project-images img, .certificate img { max-width: 100%; }
.flash { padding: .75rem 1rem; border-radius: 4px; }
.flash-success { background: #e6f4ea; }
.flash-error, .form-errors { background: #fdecea; }
.field-error { color: #b00020; font-size: .875rem; }
"#;

// Posts url-encoded so both submission modes share one body format.
const CONTACT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var form = document.getElementById('contact-form');
  if (!form || !window.fetch) return;
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    fetch(form.action, {
      method: 'POST',
      headers: { 'X-Requested-With': 'XMLHttpRequest' },
      body: new URLSearchParams(new FormData(form))
    }).then(function (r) { return r.json(); }).then(function (reply) {
      var status = document.getElementById('contact-status');
      if (reply.success) { form.reset(); status.textContent = 'Your message has been sent successfully!'; return; }
      var text = reply.error;
      try {
        var fields = JSON.parse(reply.error);
        text = Object.keys(fields).map(function (f) {
          return fields[f].map(function (e) { return f + ': ' + e.message; }).join('\n');
        }).join('\n');
      } catch (_) {}
      status.textContent = text;
    }).catch(function () { form.submit(); });
  });
});
"#;

/// What the contact form shows: the last submitted values and their errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormView {
    pub values: ContactForm,
    pub errors: FieldErrors,
}

impl ContactFormView {
    pub fn rejected(values: ContactForm, errors: FieldErrors) -> Self {
        Self { values, errors }
    }
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (content)
            }
        }
    }
}

fn field_errors(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @for message in errors.messages(field) {
            p.field-error { (message) }
        }
    }
}

fn timeline_group(label: &str, items: &[Record<TimelineItem>]) -> Markup {
    html! {
        div.timeline-group {
            h3 { (label) }
            @if items.is_empty() {
                p.empty { "Nothing here yet." }
            }
            @for entry in items {
                article.timeline-item {
                    h4 { (entry.item.title) }
                    span.period { (entry.item.period) }
                    p { (entry.item.description) }
                }
            }
        }
    }
}

fn contact_form(form: &ContactFormView) -> Markup {
    html! {
        form #contact-form method="post" action="/" novalidate {
            @if !form.errors.is_empty() {
                div.form-errors role="alert" { "Please correct the errors below." }
            }
            label for="name" { "Name" }
            input #name type="text" name="name" maxlength=(NAME_MAX_CHARS)
                value=(form.values.name) required;
            (field_errors(&form.errors, "name"))

            label for="email" { "Email" }
            input #email type="email" name="email" maxlength=(EMAIL_MAX_CHARS)
                value=(form.values.email) required;
            (field_errors(&form.errors, "email"))

            label for="message" { "Message" }
            textarea #message name="message" rows="5" maxlength=(MESSAGE_MAX_CHARS) required {
                (form.values.message)
            }
            (field_errors(&form.errors, "message"))

            button type="submit" { "Send Message" }
            p #contact-status aria-live="polite" {}
        }
    }
}

/// The whole home page.
pub fn render_home(page: &HomePage, form: &ContactFormView, flash: Option<&Flash>) -> Markup {
    let site_title = page
        .header_title
        .as_ref()
        .map(|h| h.item.title.as_str())
        .unwrap_or("Portfolio");

    let content = html! {
        header.site-header {
            @if let Some(header) = &page.header_title {
                h1 { (header.item.title) }
                p.subtitle { (header.item.subtitle) }
            }
            nav {
                a href="#about" { "About" } " "
                a href="#projects" { "Projects" } " "
                a href="#contact" { "Contact" } " "
                a href="/cv/" { "Download CV" }
            }
        }

        @if let Some(flash) = flash {
            div class={ "flash flash-" (flash.level.as_str()) } role="status" { (flash.message) }
        }

        main {
            @if let Some(hero) = &page.hero_section {
                section #hero {
                    h2 { (hero.item.title) }
                    p { (hero.item.subtitle) }
                    @if let Some(image) = &hero.item.image {
                        img src=(image) alt=(hero.item.title);
                    }
                    div.hero-stats {
                        div { strong { (hero.item.projects_count) "+" } " Projects" }
                        div { strong { (hero.item.clients_count) "+" } " Clients" }
                        div { strong { (hero.item.experience_count) "+" } " Years" }
                    }
                }
            }

            @if !page.quotes.is_empty() {
                section #quotes {
                    @for quote in &page.quotes {
                        blockquote { (quote.item.text) }
                    }
                }
            }

            section #about {
                h2 { "About" }
                @for about in &page.about_sections {
                    article class={ "about about-" (about.item.section_type.as_str()) } {
                        h3 { (about.item.title) }
                        p { (about.item.content) }
                    }
                }
            }

            section #timeline {
                h2 { "Journey" }
                div.timeline-groups {
                    (timeline_group("Education", &page.timeline.education))
                    (timeline_group("Career", &page.timeline.career))
                    (timeline_group("Future Plans", &page.timeline.future))
                }
            }

            section #skills {
                h2 { "Skills" }
                ul {
                    @for skill in &page.skills {
                        li {
                            i class=(skill.item.icon) {}
                            " " (skill.item.name)
                            div.skill-bar {
                                span style={ "width: " (skill.item.proficiency) "%" } {}
                            }
                        }
                    }
                }
            }

            section #certificates {
                h2 { "Certificates" }
                @for cert in &page.certificates {
                    article.certificate {
                        img src=(cert.item.image) alt=(cert.item.title) loading="lazy";
                        h3 { (cert.item.title) }
                        p.issuer {
                            (cert.item.issuer)
                            @if let Some(date) = cert.item.issue_date {
                                " · " (date.format("%B %Y").to_string())
                            }
                        }
                        p { (cert.item.description) }
                    }
                }
            }

            section #projects {
                h2 { "Projects" }
                @for card in &page.projects {
                    article.project {
                        h3 { (card.project.item.title) }
                        div.project-images {
                            @for image in &card.images {
                                img src=(image.item.image) alt=(image.item.alt_text) loading="lazy";
                            }
                        }
                        p { (card.project.item.description) }
                        @if let Some(link) = &card.project.item.demo_link {
                            a href=(link) target="_blank" rel="noopener" { "Live demo" } " "
                        }
                        @if let Some(link) = &card.project.item.github_link {
                            a href=(link) target="_blank" rel="noopener" { "Source" }
                        }
                    }
                }
            }

            section #contact {
                @if let Some(info) = &page.contact_info {
                    h2 { (info.item.title) }
                    p { (info.item.description) }
                    p { a href={ "mailto:" (info.item.email) } { (info.item.email) } }
                    p { (info.item.address) }
                } @else {
                    h2 { "Get In Touch" }
                }
                (contact_form(form))
                ul.social-links {
                    @for link in &page.social_links {
                        li {
                            a href=(link.item.url) target="_blank" rel="noopener"
                                aria-label=(link.item.platform.label()) {
                                i class=(link.item.icon) {}
                            }
                        }
                    }
                }
            }
        }
        script { (PreEscaped(CONTACT_SCRIPT)) }
    };

    base_document(site_title, content)
}

/// Shown when the page content could not be loaded.
pub fn render_error_page(message: &str) -> Markup {
    base_document(
        "Something went wrong",
        html! {
            main {
                section {
                    h1 { "Something went wrong" }
                    p { (message) }
                }
            }
        },
    )
}
