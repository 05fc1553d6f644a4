use clap::{Args, Subcommand};
use stringify::StringifyOptions;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a filter document into a query fragment and its parameters
    Render {
        #[arg(long, help = "Filter document path, or - to read stdin")]
        filter: String,

        #[command(flatten)]
        options: OptionArgs,

        #[arg(
            long,
            help = "Print the result as a JSON record instead of one line per parameter"
        )]
        json: bool,
    },
    /// Decode a filter document and print it back in display form
    Ast {
        #[arg(long, help = "Filter document path, or - to read stdin")]
        filter: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    #[arg(long, help = "JSON options document path")]
    pub options: Option<String>,

    /// Only these fields may be referenced (repeatable)
    #[arg(long, value_name = "FIELD")]
    pub allow: Vec<String>,

    /// These fields may not be referenced (repeatable)
    #[arg(long, value_name = "FIELD")]
    pub deny: Vec<String>,

    /// These fields must be referenced at least once (repeatable)
    #[arg(long, value_name = "FIELD")]
    pub require: Vec<String>,

    #[arg(long, help = "Prefix for every rendered field, e.g. a table alias")]
    pub identifier: Option<String>,

    #[arg(long, help = "Render literals inline instead of as placeholders")]
    pub inline: bool,
}

impl OptionArgs {
    /// Layers the flags over `base`. A list given on the command line
    /// replaces the list from the options document.
    pub fn apply(&self, mut base: StringifyOptions) -> StringifyOptions {
        if !self.allow.is_empty() {
            base.allow = self.allow.clone();
        }
        if !self.deny.is_empty() {
            base.deny = self.deny.clone();
        }
        if !self.require.is_empty() {
            base.require = self.require.clone();
        }
        if let Some(identifier) = &self.identifier {
            base.identifier = Some(identifier.clone());
        }
        if self.inline {
            base.parameterize = false;
        }
        base
    }
}
