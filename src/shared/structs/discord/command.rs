use serenity::all::{CreateCommand, CreateCommandOption};

/// Every slash command this application answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Credits,
}

impl Command {
    pub const ALL: [Command; 1] = [Command::Credits];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Credits => "credits",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Credits => "Collect your free hourly Desktop Vision credits.",
        }
    }

    pub fn options(&self) -> Vec<CreateCommandOption> {
        match self {
            Command::Credits => Vec::new(),
        }
    }

    pub fn to_create_command(self) -> CreateCommand {
        self.options().into_iter().fold(
            CreateCommand::new(self.name()).description(self.description()),
            |command, option| command.add_option(option),
        )
    }
}
