use std::path::PathBuf;

use clap::Parser;
use lexalign::pipeline::{load_lexicon, tag_data_file};
use lexalign::{LexiconTagger, TokenizerKind};

#[derive(Parser, Debug)]
#[command(about = "A program to add part-of-speech tags to a corpus.")]
struct Args {
    /// The raw corpus, one sentence per line
    #[arg(long)]
    input: PathBuf,

    /// The file to write the tagged corpus to
    #[arg(long)]
    output: PathBuf,

    /// A lexicon with one `word<TAB>TAG` entry per line
    #[arg(long)]
    lexicon: PathBuf,

    /// The tokenizer: {whitespace, unicode, tagged}
    #[arg(long, default_value = "unicode")]
    tokenizer: TokenizerKind,

    /// The tag given to words missing from the lexicon
    #[arg(long, default_value = "X")]
    unknown_tag: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading {:?} ...", args.lexicon);
    let lexicon = load_lexicon(&args.lexicon)?;
    eprintln!("# of words: {}", lexicon.len());

    let tagger =
        LexiconTagger::new(args.tokenizer.build(), lexicon).unknown_tag(args.unknown_tag);

    eprintln!("Tagging {:?} ...", args.input);
    let n_lines = tag_data_file(&tagger, &args.input, &args.output)?;
    eprintln!("# of sentences: {}", n_lines);

    Ok(())
}
