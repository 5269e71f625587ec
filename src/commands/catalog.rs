//! Command catalogue: usage lines and help text
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add focusstop
//! - 1.0.0: Initial catalogue

/// One user-facing command
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    /// Arguments after the verb, empty when there are none
    pub args: &'static str,
    pub description: &'static str,
    /// Help section the command is listed under
    pub section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Schedule,
    Homework,
    Productivity,
    Tools,
    Account,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "addclass",
        args: "name day time",
        description: "Add a class (e.g. !addclass Math Monday 09:00)",
        section: Section::Schedule,
    },
    CommandInfo {
        name: "viewclasses",
        args: "",
        description: "View all your classes",
        section: Section::Schedule,
    },
    CommandInfo {
        name: "nextclass",
        args: "",
        description: "Show the next upcoming class and time left",
        section: Section::Schedule,
    },
    CommandInfo {
        name: "deleteclass",
        args: "name",
        description: "Remove a class from your schedule",
        section: Section::Schedule,
    },
    CommandInfo {
        name: "setreminder",
        args: "name minutes_before",
        description: "Set a custom reminder before class",
        section: Section::Schedule,
    },
    CommandInfo {
        name: "todayschedule",
        args: "",
        description: "Show only today's classes",
        section: Section::Schedule,
    },
    CommandInfo {
        name: "addhw",
        args: "name due_date",
        description: "Add homework (e.g. !addhw MathHW 2025-08-15)",
        section: Section::Homework,
    },
    CommandInfo {
        name: "viewhw",
        args: "",
        description: "See a list of upcoming homework",
        section: Section::Homework,
    },
    CommandInfo {
        name: "deletehw",
        args: "name",
        description: "Remove a completed assignment",
        section: Section::Homework,
    },
    CommandInfo {
        name: "due",
        args: "days",
        description: "Show homework due within the next X days",
        section: Section::Homework,
    },
    CommandInfo {
        name: "tip",
        args: "",
        description: "Get a random study, wellness, or time management tip",
        section: Section::Productivity,
    },
    CommandInfo {
        name: "focusmode",
        args: "minutes",
        description: "Set a timer for a study session",
        section: Section::Productivity,
    },
    CommandInfo {
        name: "focusstop",
        args: "",
        description: "Cancel your running study session",
        section: Section::Productivity,
    },
    CommandInfo {
        name: "examcountdown",
        args: "name date",
        description: "Days left until a big test/exam",
        section: Section::Tools,
    },
    CommandInfo {
        name: "help",
        args: "",
        description: "Show all commands and descriptions",
        section: Section::Account,
    },
    CommandInfo {
        name: "clearall",
        args: "",
        description: "Reset all data for the user",
        section: Section::Account,
    },
];

pub fn find(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Usage line for `name` with the given prefix, e.g. `!due days`
pub fn usage(prefix: &str, name: &str) -> String {
    match find(name) {
        Some(info) if !info.args.is_empty() => format!("{prefix}{} {}", info.name, info.args),
        _ => format!("{prefix}{name}"),
    }
}

/// Full help text, one blank line between sections
pub fn help_text(prefix: &str) -> String {
    let sections = [
        Section::Schedule,
        Section::Homework,
        Section::Productivity,
        Section::Tools,
        Section::Account,
    ];

    let mut text = String::from("**Commands:**\n");
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        for info in COMMANDS.iter().filter(|c| c.section == *section) {
            text.push_str(&format!(
                "{} – {}\n",
                usage(prefix, info.name),
                info.description
            ));
        }
    }
    text
}
