use textlab_core::analysis;
use textlab_core::model::bigram_model::BigramModel;
use textlab_core::model::edit_distance::{edit_distance, DistanceMatrix};
use textlab_core::morph::MorphCapability;
use textlab_core::text::ngram::{generate_ngrams, NGramOrder};
use textlab_core::text::tokenizer::{char_tokenize, word_tokenize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let training_text = "The quick brown fox jumps over the lazy dog.";
    let test_text = "The quick brown fox";

    // Word tokens are lowercased, punctuation is removed
    let tokens = word_tokenize(training_text);
    println!("Tokens: {:?}", tokens);

    // N-gram type comes as a tag from the outside world; unknown tags are an error
    for tag in ["unigram", "bigram", "trigram"] {
        let order: NGramOrder = tag.parse()?;
        println!("{}s: {:?}", order, generate_ngrams(&tokens, order));
    }
    match "fourgram".parse::<NGramOrder>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Bigram model with add-one smoothing
    let model = BigramModel::train(&tokens)?;
    println!("Vocabulary size: {}", model.vocabulary_size());
    println!("P(quick | the) = {:.4}", model.probability("the", "quick"));
    println!("P(cat | the)   = {:.4}", model.probability("the", "cat"));
    let perplexity = model.perplexity(&word_tokenize(test_text))?;
    println!(
        "Perplexity of {:?}: {} ({} transitions)",
        test_text,
        perplexity.rounded(),
        perplexity.evaluated
    );

    // Same computation through the request-level API, with its error cases
    println!("{:?}", analysis::perplexity("the cat sat", "the cat")?);
    if let Err(e) = analysis::perplexity("the cat sat", "cat") {
        println!("Rejected: {e}");
    }

    // Edit distance, with the full table for short words
    for (source, target) in [("kitten", "sitting"), ("flaw", "lawn")] {
        println!("distance({source}, {target}) = {}", edit_distance(source, target));
    }
    let matrix = DistanceMatrix::build("flaw", "lawn");
    for row in matrix.rows() {
        println!("{:?}", row);
    }

    println!("Characters: {:?}", char_tokenize("ab c"));

    // Morphological analysis needs a Hugging Face tokenizer file
    // ex. TEXTLAB_TOKENIZER_PATH=./data/tokenizer.json
    let path = std::env::var("TEXTLAB_TOKENIZER_PATH").ok().map(Into::into);
    let capability = MorphCapability::new(path);
    match analysis::morph_analysis(&capability, "running") {
        Ok(result) => println!("{:?}", result),
        Err(e) => println!("Morphological analysis unavailable: {e}"),
    }

    Ok(())
}
