use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::modules::resume::application::domain::resume::ResumeContext;

const PRINT_STYLE: &str = r#"
@page { size: A4; margin: 18mm 16mm; }
body { font-family: Georgia, serif; font-size: 11pt; color: #111; }
h1 { margin-bottom: 0; }
h2 { border-bottom: 1px solid #999; margin-top: 1.4em; font-size: 13pt; text-transform: uppercase; }
.muted { color: #555; }
.entry { margin-bottom: .8em; page-break-inside: avoid; }
.skills { columns: 2; }
blockquote { font-style: italic; margin: .5em 0; }
"#;

/// The resume as one printable HTML document.
pub fn render_resume_html(ctx: &ResumeContext) -> Markup {
    let name = ctx
        .hero_sections
        .first()
        .map(|h| h.item.title.as_str())
        .unwrap_or("Resume");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (name) " - Resume" }
                style { (PreEscaped(PRINT_STYLE)) }
            }
            body {
                header {
                    h1 { (name) }
                    @for hero in &ctx.hero_sections {
                        p.muted { (hero.item.subtitle) }
                    }
                    @for header in &ctx.header_titles {
                        p { (header.item.title) " - " (header.item.subtitle) }
                    }
                    @for info in &ctx.contact_info {
                        p.muted { (info.item.email) " · " (info.item.address) }
                    }
                    @for link in &ctx.social_links {
                        span.muted { (link.item.platform.label()) ": " (link.item.url) " " }
                    }
                }

                @if !ctx.about_sections.is_empty() {
                    h2 { "Profile" }
                    @for about in &ctx.about_sections {
                        div.entry {
                            strong { (about.item.title) }
                            p { (about.item.content) }
                        }
                    }
                }

                h2 { "Experience & Education" }
                @for entry in &ctx.timeline_items {
                    div.entry {
                        strong { (entry.item.title) }
                        span.muted { " · " (entry.item.category.label()) " · " (entry.item.period) }
                        p { (entry.item.description) }
                    }
                }

                h2 { "Skills" }
                ul.skills {
                    @for skill in &ctx.skills {
                        li { (skill.item.name) " (" (skill.item.proficiency) "%)" }
                    }
                }

                h2 { "Projects" }
                @if ctx.projects.is_empty() {
                    p.muted { "No projects listed." }
                }
                @for card in &ctx.projects {
                    div.entry {
                        strong { (card.project.item.title) }
                        p { (card.project.item.description) }
                        @if let Some(link) = &card.project.item.demo_link {
                            p.muted { "Demo: " (link) }
                        }
                        @if let Some(link) = &card.project.item.github_link {
                            p.muted { "Source: " (link) }
                        }
                    }
                }

                @if !ctx.certificates.is_empty() {
                    h2 { "Certificates" }
                    @for cert in &ctx.certificates {
                        div.entry {
                            strong { (cert.item.title) }
                            span.muted {
                                " · " (cert.item.issuer)
                                @if let Some(date) = cert.item.issue_date {
                                    " · " (date.format("%b %Y").to_string())
                                }
                            }
                        }
                    }
                }

                @for quote in &ctx.quotes {
                    blockquote { (quote.item.text) }
                }
            }
        }
    }
}
