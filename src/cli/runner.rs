use crate::{
    cli::{Args, ReaderKind},
    console::default_console,
    error::Result,
    reader::InputReader,
};

/// All four readers in their canonical order.
const ALL_KINDS: [ReaderKind; 4] = [
    ReaderKind::Float,
    ReaderKind::Integer,
    ReaderKind::String,
    ReaderKind::Letter,
];

/// Drives the interactive demo: prompts for each requested kind and echoes
/// the accepted value.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the requested readers in order, echoing each accepted value.
    pub fn run(self) -> Result<()> {
        let reader = InputReader::new(default_console());
        let kinds = if self.args.kinds.is_empty() {
            ALL_KINDS.to_vec()
        } else {
            self.args.kinds
        };

        for kind in kinds {
            log::debug!("running the {kind} reader");
            match kind {
                ReaderKind::Float => {
                    let value = reader.read_float("Give me a number> ")?;
                    println!("Read float: {value}");
                }
                ReaderKind::Integer => {
                    let value = reader.read_integer("Give me an integer> ")?;
                    println!("Read integer: {value}");
                }
                ReaderKind::String => {
                    let value = reader.read_string("Give me a string> ")?;
                    println!("Read string: {value:?}");
                }
                ReaderKind::Letter => {
                    let value = reader.read_letter("Give me a letter> ")?;
                    println!("Read letter: {value}");
                }
            }
        }
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
