//! Printable resume rendering.
//!
//! Produces a standalone HTML document mirroring the platform's preview pane,
//! suitable for printing or conversion to PDF by any HTML renderer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::errors::ClientError;
use crate::models::Resume;

/// Escape text for safe embedding in HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the resume as a standalone HTML document.
pub fn resume_html(resume: &Resume) -> String {
    let mut body = String::new();

    let _ = writeln!(body, "<h1>{}</h1>", escape(&resume.contact.email));
    if !resume.summary.is_empty() {
        let _ = writeln!(body, "<p class=\"summary\">{}</p>", escape(&resume.summary));
    }

    let contact = &resume.contact;
    let mut lines = Vec::new();
    if !contact.phone.is_empty() {
        lines.push(escape(&contact.phone));
    }
    if !contact.linkedin.is_empty() {
        lines.push(escape(&contact.linkedin));
    }
    if !contact.github.is_empty() {
        lines.push(escape(&contact.github));
    }
    if !lines.is_empty() {
        let _ = writeln!(body, "<p class=\"contact\">{}</p>", lines.join(" &middot; "));
    }

    if !resume.skills.is_empty() {
        let _ = writeln!(body, "<h2>Skills</h2>\n<ul>");
        for skill in &resume.skills {
            let _ = writeln!(body, "<li>{}</li>", escape(skill));
        }
        let _ = writeln!(body, "</ul>");
    }

    if !resume.education.is_empty() {
        let _ = writeln!(body, "<h2>Education</h2>\n<ul>");
        for entry in &resume.education {
            let _ = writeln!(
                body,
                "<li>{} - {} ({})</li>",
                escape(&entry.degree),
                escape(&entry.institution),
                escape(&entry.year)
            );
        }
        let _ = writeln!(body, "</ul>");
    }

    if !resume.experience.is_empty() {
        let _ = writeln!(body, "<h2>Experience</h2>\n<ul>");
        for entry in &resume.experience {
            let _ = write!(
                body,
                "<li>{}, {} - {}",
                escape(&entry.role),
                escape(&entry.company),
                escape(&entry.duration)
            );
            if !entry.details.is_empty() {
                let _ = write!(body, "<br/>{}", escape(&entry.details));
            }
            let _ = writeln!(body, "</li>");
        }
        let _ = writeln!(body, "</ul>");
    }

    if !resume.projects.is_empty() {
        let _ = writeln!(body, "<h2>Projects</h2>\n<ul>");
        for entry in &resume.projects {
            let name = if entry.link.is_empty() {
                escape(&entry.name)
            } else {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape(&entry.link),
                    escape(&entry.name)
                )
            };
            let _ = write!(body, "<li>{} - {}", name, escape(&entry.tech));
            if !entry.details.is_empty() {
                let _ = write!(body, "<br/>{}", escape(&entry.details));
            }
            let _ = writeln!(body, "</li>");
        }
        let _ = writeln!(body, "</ul>");
    }

    let generated = Utc::now().format("%B %e, %Y");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>Resume</title>\n\
         <style>\nbody {{ font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; }}\n\
         h1 {{ border-bottom: 1px solid #999; padding-bottom: 0.25rem; }}\n\
         footer {{ margin-top: 2rem; color: #777; font-size: 0.8rem; }}\n</style>\n\
         </head>\n<body>\n{}<footer>Generated on {}</footer>\n</body>\n</html>\n",
        body, generated
    )
}

/// Render the resume and write it to the given path.
pub fn write_html(resume: &Resume, path: &Path) -> Result<(), ClientError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, resume_html(resume))?;
    Ok(())
}
