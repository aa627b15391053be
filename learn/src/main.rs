use std::path::PathBuf;

use clap::Parser;
use lexalign::pipeline::{learn_dictionary, learn_dictionary_pos};
use lexalign::{AlignmentPolicy, TokenizerKind};

#[derive(Parser, Debug)]
#[command(about = "A program to learn a bilingual dictionary from a parallel corpus.")]
struct Args {
    /// A word list to learn translations for, one word per line
    #[arg(long)]
    vocab: PathBuf,

    /// The corpus in the language of the word list
    #[arg(long)]
    source: PathBuf,

    /// The corpus in the translation language, aligned with the source corpus line by line
    #[arg(long)]
    target: PathBuf,

    /// The file to write the dictionary to
    #[arg(long)]
    output: PathBuf,

    /// Only count translations whose part-of-speech tag matches. Both corpora must be tagged.
    #[arg(long)]
    pos: bool,

    /// The tokenizer: {whitespace, unicode, tagged}. Tagged corpora are always read with `tagged`
    /// under --pos, so the two options cannot be combined.
    #[arg(long, default_value = "unicode", conflicts_with = "pos")]
    tokenizer: TokenizerKind,

    /// Pair lines up to the end of the shorter corpus instead of failing on a length mismatch.
    #[arg(long)]
    truncate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let alignment = if args.truncate {
        AlignmentPolicy::Truncate
    } else {
        AlignmentPolicy::Strict
    };

    eprintln!(
        "Learning dictionary from {:?} and {:?} ...",
        args.source, args.target
    );
    let summary = if args.pos {
        learn_dictionary_pos(&args.vocab, &args.source, &args.target, &args.output, alignment)?
    } else {
        let tokenizer = args.tokenizer.build();
        learn_dictionary(
            &args.vocab,
            &args.source,
            &args.target,
            &args.output,
            &tokenizer,
            alignment,
        )?
    };
    eprintln!("# of sentence pairs: {}", summary.n_pairs);
    eprintln!("# of vocabulary hits: {}", summary.n_hits);
    eprintln!("# of words: {}", summary.n_words);
    eprintln!("Saved dictionary to {:?}", args.output);

    Ok(())
}
