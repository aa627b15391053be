use std::io::{stdin, stdout};
use std::path::PathBuf;

use clap::Parser;
use lexalign::pipeline::{translate_file, translate_interactive};
use lexalign::TokenizerKind;

#[derive(Parser, Debug)]
#[command(about = "A program to translate sentences word by word with a learned dictionary.")]
struct Args {
    /// The dictionary file written by `learn`
    #[arg(long)]
    dict: PathBuf,

    /// Sentences to translate, one per line. Without this option, a single line is read from
    /// stdin.
    #[arg(long, requires = "output")]
    input: Option<PathBuf>,

    /// The file to write translations to
    #[arg(long, requires = "input")]
    output: Option<PathBuf>,

    /// The tokenizer: {whitespace, unicode, tagged}
    #[arg(long, default_value = "unicode")]
    tokenizer: TokenizerKind,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let tokenizer = args.tokenizer.build();

    match (args.input, args.output) {
        (Some(input), Some(output)) => {
            eprintln!("Translating {:?} ...", input);
            let n_lines = translate_file(tokenizer, &args.dict, &input, &output)?;
            eprintln!("# of sentences: {}", n_lines);
        }
        _ => {
            let prompt =
                atty::is(atty::Stream::Stdin).then_some("Enter a sentence to translate: ");
            translate_interactive(
                tokenizer,
                &args.dict,
                stdin().lock(),
                stdout().lock(),
                prompt,
            )?;
        }
    }

    Ok(())
}
