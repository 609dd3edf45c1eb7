//! The command table and the block each command produces.
//!
//! Every entry is a pure function of the session's content, theme and data
//! source. `theme` and `clear` change session state instead of producing a
//! block, so the interpreter handles them before consulting the table.

use crate::block::{Block, Icon, Node};
use crate::theme::{DataSource, Theme};
use folio_domain::content::{About, ContactInfo, ContentBundle};

/// Everything a command may read.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub data: &'a ContentBundle,
    pub theme: Theme,
    pub source: DataSource,
}

pub type CommandFn = fn(&CommandContext<'_>) -> Block;

/// A named, block-producing command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub build: CommandFn,
}

const fn command(name: &'static str, build: CommandFn) -> Command {
    Command { name, build }
}

pub static COMMANDS: &[Command] = &[
    command("info", info),
    command("about", about),
    command("resume", resume),
    command("designs", designs),
    command("experience", experience),
    command("education", education),
    command("skills", skills),
    command("projects", projects),
    command("certifications", certifications),
    command("volunteering", volunteering),
    command("links", links),
    command("contact", contact),
    command("status", status),
    command("test", self_test),
];

/// Commands that act on the session rather than rendering a block.
pub const SESSION_COMMANDS: [&str; 2] = ["theme", "clear"];

/// Commands the self-test expects to find.
pub const REQUIRED_COMMANDS: [&str; 13] = [
    "info",
    "about",
    "resume",
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "volunteering",
    "links",
    "contact",
    "clear",
    "test",
];

const RESUME_PDF: &str = "/Kalpick_.pdf";
const DESIGN_PORTFOLIO_URL: &str = "https://www.instagram.com/kalpicklogoarts";
const LOGO_VIDEO: &str = "/Samples.mp4";
const QUOTE: &str = "I craft creative, accessible, and delightful digital experiences.";

#[must_use]
pub fn lookup(name: &str) -> Option<CommandFn> {
    COMMANDS.iter().find(|command| command.name == name).map(|command| command.build)
}

#[must_use]
pub fn is_recognized(name: &str) -> bool {
    SESSION_COMMANDS.contains(&name) || lookup(name).is_some()
}

/// A list section, or `None` when it is missing or empty.
fn entries<T>(section: Option<&Vec<T>>) -> Option<&[T]> {
    section.map(Vec::as_slice).filter(|items| !items.is_empty())
}

fn contact_info(data: &ContentBundle) -> Option<&ContactInfo> {
    data.contact.as_ref().or_else(|| data.about.as_ref().map(|about| &about.contact))
}

/// Image path, else initials, else initials derived from the name.
fn avatar_reference(about: &About) -> String {
    let filled = |value: &Option<String>| {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
    };
    filled(&about.avatar.image).or_else(|| filled(&about.avatar.initials)).unwrap_or_else(|| {
        let initials: String =
            about.name.split_whitespace().filter_map(|word| word.chars().next()).collect();
        initials.to_uppercase()
    })
}

fn info(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("commands")
        .with(Node::heading("Inbuilt Commands"))
        .with(Node::tags(["info", "about", "resume", "designs"]))
        .with(Node::heading("Professional"))
        .with(Node::tags(["experience", "education", "certifications", "volunteering"]))
        .with(Node::heading("Technical"))
        .with(Node::tags(["skills", "projects"]))
        .with(Node::heading("Connect"))
        .with(Node::tags(["links", "contact"]))
        .with(Node::heading("System"))
        .with(Node::tags(["status", "test", "clear"]));

    if ctx.source.is_connected() {
        block.push(Node::heading("API Status"));
        block.push(Node::text("Connected to Backend API"));
    }
    block
}

fn about(ctx: &CommandContext<'_>) -> Block {
    let block = Block::new("about");
    let Some(about) = &ctx.data.about else {
        return block.with(Node::unavailable("about"));
    };

    let mut block = block
        .with(Node::heading(&about.name))
        .with(Node::muted(&about.role))
        .with(Node::text(&about.about))
        .with(Node::Quote { text: QUOTE.to_owned() });
    if let Some(skills) = &ctx.data.skills {
        block.push(Node::tags(skills.all()));
    }
    block.with(Node::field("Avatar", avatar_reference(about)))
}

fn resume(ctx: &CommandContext<'_>) -> Block {
    let block = Block::new("resume summary");
    let Some(about) = &ctx.data.about else {
        return block.with(Node::unavailable("about"));
    };
    let count = |len: Option<usize>| len.unwrap_or_default().to_string();

    block
        .with(Node::heading(&about.name))
        .with(Node::text(&about.role))
        .with(Node::muted(format!("{} | {}", about.contact.phone, about.contact.email)))
        .with(Node::muted(&about.contact.location))
        .with(Node::Gap)
        .with(Node::field("Experience", count(ctx.data.experience.as_ref().map(Vec::len))))
        .with(Node::field("Projects", count(ctx.data.projects.as_ref().map(Vec::len))))
        .with(Node::link("Download PDF Resume", RESUME_PDF, Icon::Link))
        .with(Node::muted("Type info to see all available commands"))
}

fn designs(_ctx: &CommandContext<'_>) -> Block {
    Block::new("designs")
        .with(Node::heading("My Design Portfolio"))
        .with(Node::link("Visit My Design Portfolio", DESIGN_PORTFOLIO_URL, Icon::Instagram))
        .with(Node::heading("Logo Design Video"))
        .with(Node::link("Logo design showcase", LOGO_VIDEO, Icon::Link))
        .with(Node::muted("Watch my logo design process and creative workflow"))
}

fn experience(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("experience");
    let Some(items) = entries(ctx.data.experience.as_ref()) else {
        return block.with(Node::unavailable("experience"));
    };

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            block.push(Node::Gap);
        }
        block.push(Node::heading(&item.role));
        block.push(Node::text(&item.company));
        block.push(Node::muted(format!("{} | {}", item.location, item.period)));
        block.push(Node::Bullets { items: item.achievements.clone() });
    }
    block
}

fn education(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("education");
    let Some(items) = entries(ctx.data.education.as_ref()) else {
        return block.with(Node::unavailable("education"));
    };

    for item in items {
        block.push(Node::heading(&item.institution));
        block.push(Node::text(&item.degree));
        block.push(Node::muted(&item.period));
    }
    block
}

fn skills(ctx: &CommandContext<'_>) -> Block {
    let block = Block::new("skills");
    let Some(skills) = &ctx.data.skills else {
        return block.with(Node::unavailable("skills"));
    };

    block
        .with(Node::heading("Design Tools"))
        .with(Node::tags(&skills.design))
        .with(Node::heading("Development & Technical"))
        .with(Node::tags(&skills.development))
        .with(Node::heading("Concepts"))
        .with(Node::tags(&skills.concepts))
        .with(Node::heading("Frameworks"))
        .with(Node::tags(&skills.frameworks))
}

fn projects(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("projects");
    let Some(items) = entries(ctx.data.projects.as_ref()) else {
        return block.with(Node::unavailable("projects"));
    };

    for item in items {
        block.push(Node::heading(&item.name));
        block.push(Node::text(&item.desc));
        block.push(Node::tags(&item.tech));
        block.push(Node::link(&item.url, &item.url, Icon::Link));
    }
    block
}

fn certifications(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("certifications");
    let Some(items) = entries(ctx.data.certifications.as_ref()) else {
        return block.with(Node::unavailable("certifications"));
    };

    for item in items {
        block.push(Node::heading(&item.name));
        block.push(Node::text(&item.platform));
        block.push(Node::muted(&item.year));
    }
    block
}

fn volunteering(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("volunteering & internships");
    let Some(items) = entries(ctx.data.volunteering.as_ref()) else {
        return block.with(Node::unavailable("volunteering"));
    };

    for item in items {
        block.push(Node::heading(&item.role));
        block.push(Node::text(&item.company));
        block.push(Node::muted(&item.work));
    }
    block
}

fn links(ctx: &CommandContext<'_>) -> Block {
    let mut block = Block::new("links");
    let Some(items) = entries(ctx.data.links.as_ref()) else {
        return block.with(Node::unavailable("links"));
    };

    for item in items {
        block.push(Node::link(&item.label, &item.href, Icon::from_tag(&item.icon)));
    }
    block
}

fn contact(ctx: &CommandContext<'_>) -> Block {
    let block = Block::new("contact");
    let Some(info) = contact_info(ctx.data) else {
        return block.with(Node::unavailable("contact"));
    };

    block
        .with(Node::heading("Get In Touch"))
        .with(Node::muted("Open to freelance opportunities & collaborations"))
        .with(Node::field("Email", &info.email))
        .with(Node::field("Phone", &info.phone))
        .with(Node::field("Location", &info.location))
}

fn status(ctx: &CommandContext<'_>) -> Block {
    let connected = ctx.source.is_connected();
    let block = Block::new("system status")
        .with(Node::field("API Status", if connected { "Connected" } else { "Disconnected" }))
        .with(Node::field("Theme", ctx.theme.as_str()))
        .with(Node::field("Data Source", ctx.source.label()));

    if !connected {
        return block;
    }
    block.with(Node::heading("Features")).with(Node::Bullets {
        items: [
            "Dynamic data loading",
            "Command analytics tracking",
            "Real-time updates",
            "Database persistence",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
    })
}

fn check(name: impl Into<String>, pass: bool, message: impl Into<String>) -> Node {
    Node::Check { name: name.into(), pass, message: message.into() }
}

/// Lightweight runtime checks against the command table and the session's content.
fn self_test(ctx: &CommandContext<'_>) -> Block {
    let mut checks: Vec<Node> = REQUIRED_COMMANDS
        .iter()
        .map(|name| {
            let pass = is_recognized(name);
            let message = if pass { "registered" } else { "missing" };
            check(format!("command '{name}' available"), pass, message)
        })
        .collect();

    let links = ctx.data.links.as_deref().unwrap_or_default();
    checks.push(match links.len() {
        0 => check("links provided", false, "none"),
        n => check("links provided", true, format!("{n} link(s)")),
    });
    let shaped = links.first().is_some_and(|link| !link.label.is_empty() && !link.href.is_empty());
    let shape_message = if shaped { "label+href present" } else { "missing fields" };
    checks.push(check("link shape ok", shaped, shape_message));

    let projects = ctx.data.projects.as_deref().unwrap_or_default();
    checks.push(match projects.len() {
        0 => check("projects provided", false, "none"),
        n => check("projects provided", true, format!("{n} project(s)")),
    });

    let avatar = ctx.data.about.as_ref().map(|about| &about.avatar);
    let avatar_message = match avatar {
        Some(avatar) if avatar.image.as_deref().is_some_and(|image| !image.trim().is_empty()) => {
            "image present"
        }
        Some(avatar) if avatar.is_present() => "initials present",
        _ => "missing",
    };
    checks.push(check("avatar data", avatar_message != "missing", avatar_message));

    let total = checks.len();
    let passed = checks.iter().filter(|node| matches!(node, Node::Check { pass: true, .. })).count();

    let mut block = Block::new(format!("tests ({passed}/{total} passed)"));
    block.nodes = checks;
    block.with(Node::muted("Run with test. These are lightweight runtime checks, not exhaustive."))
}
