//! Lernify terminal client.
//!
//! A thin presentation layer over the Lernify Road backend API: browse
//! roadmaps, take step assessments, track progress, and build a resume.

mod api;
mod config;
mod errors;
mod models;
mod pages;
mod render;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::ApiClient;
use config::Config;
use errors::ClientError;
use models::{EducationEntry, ExperienceEntry, ProjectEntry};
use pages::auth::{self, RegisterForm};
use pages::dashboard::DashboardPage;
use pages::domains::DomainsPage;
use pages::profile::ProfilePage;
use pages::resume::ResumePage;
use pages::roadmap::RoadmapPage;
use session::{FileSession, SessionProvider};

#[derive(Parser)]
#[command(
    name = "lernify",
    about = "Terminal client for the Lernify Road learning platform",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and log in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// 10-digit phone number
        #[arg(long)]
        phone: String,
        /// One of the accepted IT qualifications
        #[arg(long)]
        qualification: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List the available domains
    Domains,
    /// Show a domain's roadmap; the first step is open unless --step is given
    Roadmap {
        domain: String,
        #[arg(long)]
        step: Option<u32>,
    },
    /// Submit quiz answers for one step (comma-separated option indexes, `-` to skip)
    Submit {
        domain: String,
        #[arg(long)]
        step: u32,
        #[arg(long)]
        answers: String,
    },
    /// Show assessments and progress
    Dashboard,
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Change the account password
    ChangePassword {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },
    /// Build and export the resume
    Resume {
        #[command(subcommand)]
        command: ResumeCommand,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the full profile
    Show,
    /// Update the editable fields; omitted flags keep their current value
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        qualification: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum ResumeCommand {
    /// Show the current document
    Show,
    /// Set the professional summary
    Summary { text: String },
    /// Append a skill
    AddSkill { skill: String },
    /// Remove a skill by index
    RmSkill { index: usize },
    /// Append an education entry
    AddEducation {
        #[arg(long)]
        degree: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        year: String,
    },
    /// Remove an education entry by index
    RmEducation { index: usize },
    /// Append an experience entry
    AddExperience {
        #[arg(long)]
        role: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        duration: String,
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Remove an experience entry by index
    RmExperience { index: usize },
    /// Append a project entry
    AddProject {
        #[arg(long)]
        name: String,
        #[arg(long)]
        tech: String,
        #[arg(long, default_value = "")]
        link: String,
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Remove a project entry by index
    RmProject { index: usize },
    /// Set contact fields; omitted flags keep their current value
    Contact {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        github: Option<String>,
    },
    /// Write the printable document to an HTML file
    Export {
        #[arg(long, default_value = "resume.html")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api = ApiClient::new(config.backend_url.clone());
    let session = FileSession::new(config.session_path.clone());

    match run(cli.command, &api, &session).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Command,
    api: &ApiClient,
    session: &dyn SessionProvider,
) -> Result<(), ClientError> {
    match command {
        Command::Register {
            first_name,
            last_name,
            email,
            phone,
            qualification,
            password,
        } => {
            let form = RegisterForm {
                first_name,
                last_name,
                email,
                phone,
                qualification,
                password,
            };
            let user = auth::register(api, session, &form).await?;
            println!("Welcome, {} {}", user.first_name, user.last_name);
        }
        Command::Login { email, password } => {
            let user = auth::login(api, session, &email, &password).await?;
            println!("Logged in as {}", user.email);
        }
        Command::Logout => {
            auth::logout(session)?;
            println!("Logged out");
        }
        Command::Whoami => match session.current() {
            Some(user) => println!("{} {} <{}>", user.first_name, user.last_name, user.email),
            None => println!("Not logged in"),
        },
        Command::Domains => {
            let page = DomainsPage::load(api).await?;
            for domain in &page.domains {
                println!("{}", domain);
            }
        }
        Command::Roadmap { domain, step } => {
            let mut page = RoadmapPage::load(api, &domain).await?;
            if let Some(order) = step {
                page.open_step(order)?;
            }
            print_roadmap(&page);
        }
        Command::Submit {
            domain,
            step,
            answers,
        } => {
            let mut page = RoadmapPage::load(api, &domain).await?;
            page.open_step(step)?;

            let parsed = parse_answers(&answers)?;
            for (question, answer) in parsed.iter().enumerate() {
                if let Some(option) = answer {
                    page.select_answer(question, *option)?;
                }
            }

            let response = page.submit(api, session).await?;
            println!(
                "{} (score {}/{})",
                response.message, response.result.score, response.result.total
            );
        }
        Command::Dashboard => {
            let page = DashboardPage::load(api, session).await?;
            println!("Progress:");
            for p in &page.data.progress {
                println!("  {}: steps completed {:?}", p.domain, p.completed_steps);
            }
            println!("Assessments:");
            for a in &page.data.assessments {
                println!(
                    "  {} - step {}: {}/{} {}",
                    a.domain,
                    a.step_order,
                    a.score,
                    a.total,
                    if a.passed { "passed" } else { "failed" }
                );
            }
        }
        Command::Profile { command } => match command {
            ProfileCommand::Show => {
                let page = ProfilePage::load(api, session).await?;
                let user = &page.profile;
                println!("{} {}", user.first_name, user.last_name);
                println!("Email: {}", user.email);
                println!("Phone: {}", user.phone);
                println!("Qualification: {}", user.qualification);
                if let Some(avatar) = &user.avatar_url {
                    println!("Avatar: {}", avatar);
                }
            }
            ProfileCommand::Update {
                first_name,
                last_name,
                phone,
                qualification,
                avatar_url,
            } => {
                let mut page = ProfilePage::load(api, session).await?;
                if let Some(v) = first_name {
                    page.profile.first_name = v;
                }
                if let Some(v) = last_name {
                    page.profile.last_name = v;
                }
                if let Some(v) = phone {
                    page.profile.phone = v;
                }
                if let Some(v) = qualification {
                    page.profile.qualification = v;
                }
                if let Some(v) = avatar_url {
                    page.profile.avatar_url = Some(v);
                }
                page.save(api, session).await?;
                println!("Saved");
            }
        },
        Command::ChangePassword { old, new } => {
            let page = ProfilePage::load(api, session).await?;
            page.change_password(api, &old, &new).await?;
            println!("Password changed");
        }
        Command::Resume { command } => run_resume(command, api, session).await?,
    }

    Ok(())
}

async fn run_resume(
    command: ResumeCommand,
    api: &ApiClient,
    session: &dyn SessionProvider,
) -> Result<(), ClientError> {
    let mut page = ResumePage::load(api, session).await?;

    match command {
        ResumeCommand::Show => {
            print_resume(&page);
            return Ok(());
        }
        ResumeCommand::Summary { text } => page.set_summary(text),
        ResumeCommand::AddSkill { skill } => page.add_skill(skill),
        ResumeCommand::RmSkill { index } => page.remove_skill(index)?,
        ResumeCommand::AddEducation {
            degree,
            institution,
            year,
        } => page.add_education(EducationEntry {
            degree,
            institution,
            year,
        }),
        ResumeCommand::RmEducation { index } => page.remove_education(index)?,
        ResumeCommand::AddExperience {
            role,
            company,
            duration,
            details,
        } => page.add_experience(ExperienceEntry {
            role,
            company,
            duration,
            details,
        }),
        ResumeCommand::RmExperience { index } => page.remove_experience(index)?,
        ResumeCommand::AddProject {
            name,
            tech,
            link,
            details,
        } => page.add_project(ProjectEntry {
            name,
            tech,
            link,
            details,
        }),
        ResumeCommand::RmProject { index } => page.remove_project(index)?,
        ResumeCommand::Contact {
            email,
            phone,
            linkedin,
            github,
        } => {
            let contact = &mut page.resume.contact;
            if let Some(v) = email {
                contact.email = v;
            }
            if let Some(v) = phone {
                contact.phone = v;
            }
            if let Some(v) = linkedin {
                contact.linkedin = v;
            }
            if let Some(v) = github {
                contact.github = v;
            }
        }
        ResumeCommand::Export { out } => {
            page.export_html(&out)?;
            println!("Wrote {}", out.display());
            return Ok(());
        }
    }

    page.save(api).await?;
    println!("Saved");
    Ok(())
}

fn print_roadmap(page: &RoadmapPage) {
    println!("{} roadmap", page.domain);
    for step in &page.steps {
        let marker = if page.current_step() == Some(step.order) {
            "*"
        } else {
            " "
        };
        println!("{} Step {}: {}", marker, step.order, step.title);
    }

    if let Some(step) = page.current() {
        println!();
        println!("{}", step.description);
        for video in &step.videos {
            println!("Video: {}", video);
        }
        for (qi, question) in step.questions.iter().enumerate() {
            println!();
            println!("Q{}: {}", qi, question.text);
            for (oi, option) in question.options.iter().enumerate() {
                println!("  [{}] {}", oi, option);
            }
        }
    }
}

fn print_resume(page: &ResumePage) {
    let resume = &page.resume;
    if !resume.summary.is_empty() {
        println!("{}", resume.summary);
        println!();
    }
    println!("Skills:");
    for (i, skill) in resume.skills.iter().enumerate() {
        println!("  [{}] {}", i, skill);
    }
    println!("Education:");
    for (i, e) in resume.education.iter().enumerate() {
        println!("  [{}] {} - {} ({})", i, e.degree, e.institution, e.year);
    }
    println!("Experience:");
    for (i, e) in resume.experience.iter().enumerate() {
        println!("  [{}] {}, {} - {}", i, e.role, e.company, e.duration);
    }
    println!("Projects:");
    for (i, p) in resume.projects.iter().enumerate() {
        println!("  [{}] {} - {}", i, p.name, p.tech);
    }
    let c = &resume.contact;
    println!(
        "Contact: {} | {} | {} | {}",
        c.email, c.phone, c.linkedin, c.github
    );
}

/// Parse a comma-separated answer list; `-` marks an unanswered slot.
fn parse_answers(raw: &str) -> Result<Vec<Option<usize>>, ClientError> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            if part.is_empty() || part == "-" {
                Ok(None)
            } else {
                part.parse::<usize>().map(Some).map_err(|_| {
                    ClientError::Validation(format!("Invalid answer index: {}", part))
                })
            }
        })
        .collect()
}
