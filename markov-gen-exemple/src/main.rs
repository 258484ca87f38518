use markov_gen_core::model::generator::{MarkovGenerator, SENTENCE_FAILURE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Build a generator from a corpus file. The first CLI argument is the
    // corpus path; "./data/corpus.txt" is used by default.
    let corpus_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/corpus.txt".to_owned());
    let generator = MarkovGenerator::new(&corpus_path)?;

    // The Display implementation describes the loaded resource
    println!("{}", generator);
    println!(
        "{} words, {} distinct bigrams",
        generator.model().word_count(),
        generator.model().key_count()
    );

    // Arbitrary-length text: exactly as many words as requested
    println!("\n20 words: {}", generator.generate_text(20));

    // Degenerate lengths reduce instead of failing
    println!("1 word:   {}", generator.generate_text(1));
    println!("0 words:  {:?}", generator.generate_text(0));

    // Sentences are bounded by '.', '?' or '!'. A corpus without a
    // capitalized start or without terminators reports a diagnostic
    // string instead of raising an error.
    for i in 0..3 {
        let sentence = generator.generate_sentence();
        if sentence == SENTENCE_FAILURE {
            println!("Sentence {}: <{}>", i + 1, sentence);
        } else {
            println!("Sentence {}: {}", i + 1, sentence);
        }
    }

    // Stream one fresh sentence word by word; the full sentence stays
    // available on the stream afterwards.
    let mut stream = generator.sentence_words();
    println!("\nStreamed words:");
    for word in stream.by_ref() {
        println!("  {}", word);
    }
    println!("Full sentence: {}", stream.sentence());

    Ok(())
}
