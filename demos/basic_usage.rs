use borderrank::{Algorithm, RankerConfig, RankerUnranker, is_bordered, unbordered_count};
use num_bigint::BigUint;

fn main() {
    // This example ranks and unranks words over the alphabet {1, 2, 3}. The implementation can be
    // chosen with the first command line argument ("fast", "ub" or "base").

    let algorithm = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        None => Algorithm::default(),
    };

    let ranker = RankerConfig::new().algorithm(algorithm).construct();
    let alphabet_size = 3;

    let word = [1, 3, 2, 3, 1, 2];
    assert!(!is_bordered(&word));

    let rank = ranker.rank(&word, alphabet_size, false).unwrap();
    println!(
        "{word:?} is unbordered word {rank} of {} ({algorithm}).",
        unbordered_count(word.len(), alphabet_size)
    );

    let recovered = ranker
        .unrank(&rank, word.len(), alphabet_size, false)
        .unwrap();
    assert_eq!(recovered, word);

    // Words outside of a class are ranked by the position they would be inserted at.
    let bordered_word = [1, 3, 2, 3, 1, 1];
    let insertion_rank = ranker.rank(&bordered_word, alphabet_size, false).unwrap();
    println!("{bordered_word:?} would be inserted at unbordered rank {insertion_rank}.");

    // Ranks are arbitrary precision, so long words are no problem for the fast implementation.
    let long_word: Vec<_> = (0..200).map(|i| i % alphabet_size + 1).collect();
    let rank = borderrank::rank(&long_word, alphabet_size, true).unwrap();
    println!("A periodic word of length 200 has bordered rank {rank}.");
    assert_eq!(
        borderrank::unrank(&rank, long_word.len(), alphabet_size, true).unwrap(),
        long_word
    );

    // Invalid input is reported as an error.
    let err = ranker
        .unrank(&BigUint::from(0u32), 4, alphabet_size, true)
        .unwrap_err();
    println!("{err}");
}
