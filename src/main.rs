use anyhow::{Context, bail};
use log::{debug, info};
use wordle_helper::cli::{self, Cli, Command, SOLVE_LENGTH, parse_cli};
use wordle_helper::{
    FrequencyModel, anagram_groups, corpus_of_length, find_anagrams, load_words_from_file,
    logging, rank_candidates, rank_words, suggest_words,
};

fn main() -> anyhow::Result<()> {
    let args = parse_cli();
    logging::init(args.verbosity);
    run(args)
}

fn run(args: Cli) -> anyhow::Result<()> {
    let words = load_words_from_file(&args.dictionary_file).with_context(|| {
        format!(
            "failed to load dictionary from '{}'",
            args.dictionary_file.display()
        )
    })?;
    let corpus = corpus_of_length(&words, args.length);
    info!(
        "loaded {} words, {} of length {}",
        words.len(),
        corpus.len(),
        args.length
    );
    let model = FrequencyModel::build(&corpus, args.length);

    match args.command {
        Command::Suggest => {
            let suggestions = suggest_words(&corpus, &model, &mut rand::rng())?;
            cli::display_word_list(&suggestions);
        }
        Command::Distribution => {
            cli::display_distribution(&model);
            if args.verbosity > 0 {
                let groups = anagram_groups(&corpus);
                debug!("{} distinct letter groups in the corpus", groups.len());
                cli::display_group_scores(&rank_words(&groups, &model));
            }
        }
        Command::Anagrams { word } => {
            // Anagrams may be any length, so search the full word list.
            cli::display_word_list(&find_anagrams(&word.to_lowercase(), &words));
        }
        Command::Solve(solve) => {
            if args.length != SOLVE_LENGTH {
                bail!("solve only supports {SOLVE_LENGTH}-letter words");
            }
            let constraints = solve.constraints()?;
            let ranked = rank_candidates(&corpus, &constraints, &model);
            cli::display_ranked(&ranked, args.verbosity);
        }
    }
    Ok(())
}
