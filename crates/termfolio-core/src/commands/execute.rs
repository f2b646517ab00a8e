//! Command handlers.
//!
//! Every handler receives the argument list of the submitted line and the
//! execution context. Handlers work on the joined argument string, so
//! `theme  light` and `theme light` behave the same.

use crate::error::ShellError;
use crate::models::{Background, Link, OutputLine, Profile, Theme};
use crate::namespace::{NamespaceTree, Node};
use crate::path::resolve_path;
use crate::session::Session;

use super::{Command, CommandResult, Effect};

/// URL schemes `open` accepts.
const OPEN_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

/// Everything a handler may read or change.
pub struct Context<'a> {
    pub fs: &'a NamespaceTree,
    pub profile: &'a Profile,
    pub session: &'a mut Session,
}

impl Command {
    /// Run the command with `args` (the tokens after the command name).
    ///
    /// State changes happen only on success; an `Err` leaves the session as
    /// it was.
    pub fn execute(self, args: &[String], ctx: &mut Context<'_>) -> Result<CommandResult, ShellError> {
        let arg = args.join(" ");
        let profile = ctx.profile;

        match self {
            Self::Help => Ok(execute_help()),
            Self::Whoami => Ok(CommandResult::line(format!(
                "{} — {} ({})",
                profile.name, profile.role, profile.location
            ))),
            Self::About => Ok(template_lines(profile, &profile.about)),
            Self::Skills => Ok(plain_lines(&profile.skills)),
            Self::Projects => Ok(link_lines(profile, &profile.projects)),
            Self::Experience => Ok(plain_lines(&profile.experience)),
            Self::Education => Ok(plain_lines(&profile.education)),
            Self::Contact => Ok(link_lines(profile, &profile.contact)),
            Self::Clear => Ok(CommandResult::empty().with_effect(Effect::ClearScreen)),
            Self::Ls => execute_ls(&arg, ctx),
            Self::Cd => execute_cd(&arg, ctx),
            Self::Cat => execute_cat(&arg, ctx),
            Self::Open => execute_open(&arg),
            Self::Theme => execute_theme(&arg, ctx.session),
            Self::Banner => {
                let enabled = ctx.session.toggle_banner();
                Ok(CommandResult::line(if enabled {
                    "Banner enabled"
                } else {
                    "Banner disabled"
                }))
            }
            Self::Typewriter => {
                let enabled = ctx.session.toggle_typewriter();
                Ok(CommandResult::line(format!(
                    "Typewriter {}",
                    if enabled { "enabled" } else { "disabled" }
                )))
            }
            Self::Bg => execute_bg(&arg, ctx.session),
        }
    }
}

fn execute_help() -> CommandResult {
    let mut lines = vec![OutputLine::text("Available commands:")];
    lines.extend(
        Command::ALL
            .into_iter()
            .map(|cmd| OutputLine::text(format!("  {:<16}- {}", cmd.usage(), cmd.description()))),
    );
    CommandResult::output(lines)
}

fn plain_lines(lines: &[String]) -> CommandResult {
    CommandResult::output(lines.iter().map(OutputLine::text).collect())
}

fn template_lines(profile: &Profile, lines: &[String]) -> CommandResult {
    CommandResult::output(
        lines
            .iter()
            .map(|line| OutputLine::text(profile.interpolate(line)))
            .collect(),
    )
}

fn link_lines(profile: &Profile, links: &[Link]) -> CommandResult {
    CommandResult::output(
        links
            .iter()
            .map(|link| {
                OutputLine::link(Link::new(
                    profile.interpolate(&link.label),
                    profile.interpolate(&link.href),
                    profile.interpolate(&link.text),
                ))
            })
            .collect(),
    )
}

/// `ls [path]`: child names in insertion order, two spaces apart.
fn execute_ls(arg: &str, ctx: &Context<'_>) -> Result<CommandResult, ShellError> {
    let target = resolve_path(ctx.fs, ctx.session.cwd(), arg).map_err(|e| e.for_command("ls"))?;

    let listing = match ctx.fs.lookup(target.segments()) {
        Some(Node::Directory(dir)) => dir.names().collect::<Vec<_>>().join("  "),
        Some(Node::File { .. }) => target.name().to_string(),
        None => {
            return Err(ShellError::PathNotFound {
                command: "ls",
                path: arg.to_string(),
            });
        }
    };

    Ok(CommandResult::line(listing))
}

/// `cd [path]`: no argument goes home.
fn execute_cd(arg: &str, ctx: &mut Context<'_>) -> Result<CommandResult, ShellError> {
    let input = if arg.is_empty() { "~" } else { arg };
    let target = resolve_path(ctx.fs, ctx.session.cwd(), input).map_err(|e| e.for_command("cd"))?;

    match ctx.fs.lookup(target.segments()) {
        Some(node) if node.is_directory() => {
            ctx.session.set_cwd(target);
            Ok(CommandResult::empty())
        }
        _ => Err(ShellError::NotADirectory {
            command: "cd",
            path: arg.to_string(),
        }),
    }
}

/// `cat <path>`: file content with profile placeholders filled in.
fn execute_cat(arg: &str, ctx: &Context<'_>) -> Result<CommandResult, ShellError> {
    if arg.is_empty() {
        return Err(ShellError::MissingOperand {
            command: "cat",
            message: "missing file operand",
        });
    }

    let target = resolve_path(ctx.fs, ctx.session.cwd(), arg).map_err(|e| e.for_command("cat"))?;

    match ctx.fs.lookup(target.segments()) {
        Some(Node::File { content }) => {
            let text = ctx.profile.interpolate(content);
            Ok(CommandResult::output(text.lines().map(OutputLine::text).collect()))
        }
        Some(Node::Directory(_)) => Err(ShellError::IsADirectory {
            command: "cat",
            path: arg.to_string(),
        }),
        None => Err(ShellError::PathNotFound {
            command: "cat",
            path: arg.to_string(),
        }),
    }
}

fn execute_open(arg: &str) -> Result<CommandResult, ShellError> {
    if arg.is_empty() {
        return Err(ShellError::MissingOperand {
            command: "open",
            message: "provide a URL",
        });
    }
    if !OPEN_SCHEMES.iter().any(|scheme| arg.starts_with(scheme)) {
        return Err(ShellError::InvalidUrl {
            command: "open",
            url: arg.to_string(),
        });
    }

    Ok(CommandResult::line(format!("Opened {}", arg)).with_effect(Effect::OpenUrl(arg.to_string())))
}

/// `theme [name]`, defaulting to dark.
fn execute_theme(arg: &str, session: &mut Session) -> Result<CommandResult, ShellError> {
    let theme = if arg.is_empty() {
        Theme::default()
    } else {
        arg.parse::<Theme>().map_err(|_| ShellError::InvalidOption {
            command: "theme",
            options: Theme::ALL.iter().map(|t| t.as_str()).collect(),
        })?
    };

    session.set_theme(theme);
    Ok(CommandResult::line(format!("Theme set to {}", theme)).with_effect(Effect::ApplyTheme(theme)))
}

/// `bg [mode]`, defaulting to off.
fn execute_bg(arg: &str, session: &mut Session) -> Result<CommandResult, ShellError> {
    let mode = if arg.is_empty() {
        Background::Off
    } else {
        arg.parse::<Background>()
            .map_err(|_| ShellError::InvalidOption {
                command: "bg",
                options: Background::ALL.iter().map(|b| b.as_str()).collect(),
            })?
    };

    session.set_background(mode);
    Ok(CommandResult::line(format!("Background set to {}", mode))
        .with_effect(Effect::SetBackground(mode)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectoryEntry, FileEntry, Manifest, OutputLineData};
    use crate::path::WorkingPath;

    fn create_test_fs() -> NamespaceTree {
        NamespaceTree::from_manifest(&Manifest {
            directories: vec![DirectoryEntry {
                path: "drafts".to_string(),
            }],
            files: vec![
                FileEntry::new("about", "Hi, I'm ${name} (${nickname})."),
                FileEntry::new("projects/bettermango", "BetterMango"),
                FileEntry::new("projects/huaythai", "HuayThai"),
                FileEntry::new("contact", "Email: ${email}\nLine: ${line_id}"),
            ],
        })
    }

    fn create_test_profile() -> Profile {
        Profile {
            name: "Ada Lovelace".to_string(),
            nickname: "ada".to_string(),
            role: "Engineer".to_string(),
            location: "London".to_string(),
            email: "ada@example.com".to_string(),
            line_id: "ada_l".to_string(),
            skills: vec!["Rust".to_string(), "Analytical engines".to_string()],
            contact: vec![Link::new("Email", "mailto:${email}", "${email}")],
            ..Default::default()
        }
    }

    fn run(cmd: Command, args: &[&str], session: &mut Session) -> Result<CommandResult, ShellError> {
        let fs = create_test_fs();
        let profile = create_test_profile();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut ctx = Context {
            fs: &fs,
            profile: &profile,
            session,
        };
        cmd.execute(&args, &mut ctx)
    }

    fn texts(result: &CommandResult) -> Vec<String> {
        result
            .output
            .iter()
            .filter_map(|line| match &line.data {
                OutputLineData::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut session = Session::ephemeral();
        let result = run(Command::Help, &[], &mut session).unwrap();
        let lines = texts(&result);
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines.len(), 1 + Command::ALL.len());
        assert_eq!(lines[1], "  help            - Show this help");
        assert!(lines.iter().any(|l| l.starts_with("  cd <path>       - ")));
    }

    #[test]
    fn test_whoami_and_profile_lines() {
        let mut session = Session::ephemeral();
        let who = run(Command::Whoami, &[], &mut session).unwrap();
        assert_eq!(texts(&who), vec!["Ada Lovelace — Engineer (London)"]);

        let skills = run(Command::Skills, &[], &mut session).unwrap();
        assert_eq!(texts(&skills), vec!["Rust", "Analytical engines"]);

        let experience = run(Command::Experience, &[], &mut session).unwrap();
        assert!(experience.output.is_empty());
    }

    #[test]
    fn test_contact_links_are_interpolated() {
        let mut session = Session::ephemeral();
        let result = run(Command::Contact, &[], &mut session).unwrap();
        assert_eq!(
            result.output[0].data,
            OutputLineData::Link(Link::new("Email", "mailto:ada@example.com", "ada@example.com"))
        );
    }

    #[test]
    fn test_ls_lists_in_insertion_order() {
        let mut session = Session::ephemeral();
        let root = run(Command::Ls, &[], &mut session).unwrap();
        assert_eq!(texts(&root), vec!["drafts  about  projects  contact"]);

        let projects = run(Command::Ls, &["projects"], &mut session).unwrap();
        assert_eq!(texts(&projects), vec!["bettermango  huaythai"]);

        let empty = run(Command::Ls, &["drafts"], &mut session).unwrap();
        assert_eq!(texts(&empty), vec![""]);

        let file = run(Command::Ls, &["projects/huaythai"], &mut session).unwrap();
        assert_eq!(texts(&file), vec!["huaythai"]);
    }

    #[test]
    fn test_ls_missing_path() {
        let mut session = Session::ephemeral();
        let err = run(Command::Ls, &["nope"], &mut session).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ls: cannot access 'nope': No such file or directory"
        );
    }

    #[test]
    fn test_cd_moves_and_returns() {
        let mut session = Session::ephemeral();
        run(Command::Cd, &["projects"], &mut session).unwrap();
        assert_eq!(session.cwd().to_string(), "~/projects");

        run(Command::Cd, &[".."], &mut session).unwrap();
        assert!(session.cwd().is_root());

        run(Command::Cd, &["projects"], &mut session).unwrap();
        run(Command::Cd, &[], &mut session).unwrap();
        assert!(session.cwd().is_root());
    }

    #[test]
    fn test_cd_failures_keep_cwd() {
        let mut session = Session::ephemeral();
        run(Command::Cd, &["projects"], &mut session).unwrap();

        let err = run(Command::Cd, &["nowhere"], &mut session).unwrap_err();
        assert_eq!(err.to_string(), "cd: no such file or directory: nowhere");

        let err = run(Command::Cd, &["bettermango"], &mut session).unwrap_err();
        assert_eq!(err.to_string(), "cd: not a directory: bettermango");

        assert_eq!(
            session.cwd(),
            &resolve_path(&create_test_fs(), &WorkingPath::root(), "projects").unwrap()
        );
    }

    #[test]
    fn test_cat_interpolates_and_splits_lines() {
        let mut session = Session::ephemeral();
        let about = run(Command::Cat, &["about"], &mut session).unwrap();
        assert_eq!(texts(&about), vec!["Hi, I'm Ada Lovelace (ada)."]);

        let contact = run(Command::Cat, &["/contact"], &mut session).unwrap();
        assert_eq!(texts(&contact), vec!["Email: ada@example.com", "Line: ada_l"]);
    }

    #[test]
    fn test_cat_errors() {
        let mut session = Session::ephemeral();
        assert_eq!(
            run(Command::Cat, &["nonexistent"], &mut session).unwrap_err().to_string(),
            "cat: nonexistent: No such file"
        );
        assert_eq!(
            run(Command::Cat, &["projects"], &mut session).unwrap_err().to_string(),
            "cat: projects: Is a directory"
        );
        assert_eq!(
            run(Command::Cat, &[], &mut session).unwrap_err().to_string(),
            "cat: missing file operand"
        );
        assert!(session.cwd().is_root());
    }

    #[test]
    fn test_open_validates_scheme() {
        let mut session = Session::ephemeral();
        let ok = run(Command::Open, &["https://example.com"], &mut session).unwrap();
        assert_eq!(texts(&ok), vec!["Opened https://example.com"]);
        assert_eq!(ok.effects, vec![Effect::OpenUrl("https://example.com".to_string())]);

        assert!(run(Command::Open, &["mailto:ada@example.com"], &mut session).is_ok());
        assert_eq!(
            run(Command::Open, &[], &mut session).unwrap_err().to_string(),
            "open: provide a URL"
        );
        assert!(matches!(
            run(Command::Open, &["javascript:alert(1)"], &mut session),
            Err(ShellError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_theme_defaults_and_validates() {
        let mut session = Session::ephemeral();
        let result = run(Command::Theme, &["light"], &mut session).unwrap();
        assert_eq!(texts(&result), vec!["Theme set to light"]);
        assert_eq!(result.effects, vec![Effect::ApplyTheme(Theme::Light)]);

        let result = run(Command::Theme, &[], &mut session).unwrap();
        assert_eq!(texts(&result), vec!["Theme set to dark"]);
        assert_eq!(session.settings().theme, Theme::Dark);

        run(Command::Theme, &["matrix"], &mut session).unwrap();
        let err = run(Command::Theme, &["sepia"], &mut session).unwrap_err();
        assert_eq!(err.to_string(), "theme: options are dark, light, matrix");
        assert_eq!(session.settings().theme, Theme::Matrix);
    }

    #[test]
    fn test_bg_defaults_to_off() {
        let mut session = Session::ephemeral();
        assert_eq!(session.settings().background, Background::Waves);

        let result = run(Command::Bg, &[], &mut session).unwrap();
        assert_eq!(texts(&result), vec!["Background set to off"]);
        assert_eq!(session.settings().background, Background::Off);

        let err = run(Command::Bg, &["stars"], &mut session).unwrap_err();
        assert_eq!(err.to_string(), "bg: options are off, particles, matrix, waves");
        assert_eq!(session.settings().background, Background::Off);
    }

    #[test]
    fn test_toggles_report_state() {
        let mut session = Session::ephemeral();
        let tw = run(Command::Typewriter, &[], &mut session).unwrap();
        assert_eq!(texts(&tw), vec!["Typewriter enabled"]);
        let tw = run(Command::Typewriter, &[], &mut session).unwrap();
        assert_eq!(texts(&tw), vec!["Typewriter disabled"]);

        let banner = run(Command::Banner, &[], &mut session).unwrap();
        assert_eq!(texts(&banner), vec!["Banner disabled"]);
    }

    #[test]
    fn test_clear_requests_effect() {
        let mut session = Session::ephemeral();
        let result = run(Command::Clear, &[], &mut session).unwrap();
        assert!(result.output.is_empty());
        assert_eq!(result.effects, vec![Effect::ClearScreen]);
    }
}
