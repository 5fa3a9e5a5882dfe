use serenity::model::application::{CommandDataOption, CommandDataOptionValue};

/// Where the finished snapshot gets delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dm,
    Channel,
}

impl Destination {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dm" => Some(Self::Dm),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }

    /// DM deliveries keep the acknowledgment visible to the invoker only.
    pub fn is_private(self) -> bool {
        matches!(self, Self::Dm)
    }
}

/// One `/snapshot` invocation, parsed from the interaction options and
/// discarded when the handler finishes. The contract string is passed through
/// as typed, without format validation.
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    pub contract: String,
    pub destination: Destination,
}

impl SnapshotRequest {
    pub fn from_options(options: &[CommandDataOption]) -> Option<Self> {
        let contract = option_str(options, "contract")?.to_string();
        let destination = Destination::parse(option_str(options, "destination")?)?;

        Some(Self {
            contract,
            destination,
        })
    }
}

fn option_str<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some(value.as_str()),
            _ => None,
        })
}
